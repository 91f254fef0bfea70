//! Pretty-printing for types.
//!
//! Provides human-readable string representations of types and
//! type schemes.

use std::collections::HashMap;
use std::fmt::{self, Display, Write};

use super::ty::{TVarName, Type, TypeScheme};

/// Context for pretty-printing, tracking variable names.
///
/// Variables are renamed to `a`, `b`, ... in order of first appearance.
/// Formatting several types through one context keeps the names consistent
/// between them.
pub struct PrettyContext {
    /// Mapping from type variable names to display names.
    var_names: HashMap<TVarName, String>,
    /// Counter for generating fresh names.
    next_name: usize,
    /// Print variables under their own names instead of renaming.
    raw: bool,
}

impl Default for PrettyContext {
    fn default() -> Self {
        Self::new()
    }
}

impl PrettyContext {
    /// Create a new pretty-printing context.
    pub fn new() -> Self {
        PrettyContext {
            var_names: HashMap::new(),
            next_name: 0,
            raw: false,
        }
    }

    /// A context that prints variables as they are named internally.
    pub fn raw() -> Self {
        PrettyContext {
            raw: true,
            ..Self::new()
        }
    }

    /// Get or generate a name for a type variable.
    fn get_var_name(&mut self, var: &TVarName) -> String {
        if self.raw {
            return var.0.clone();
        }

        if let Some(name) = self.var_names.get(var) {
            return name.clone();
        }

        let name = self.generate_name();
        self.var_names.insert(var.clone(), name.clone());
        name
    }

    /// Generate the next fresh variable name.
    fn generate_name(&mut self) -> String {
        let idx = self.next_name;
        self.next_name += 1;

        if idx < 26 {
            // a, b, c, ..., z
            char::from(b'a' + idx as u8).to_string()
        } else {
            // a1, b1, ..., z1, a2, ...
            let letter = char::from(b'a' + (idx % 26) as u8);
            let num = idx / 26;
            format!("{}{}", letter, num)
        }
    }

    /// Format a type to a string.
    pub fn format_type(&mut self, ty: &Type) -> String {
        let mut s = String::new();
        // Writing to a String cannot fail
        let _ = self.write_type(&mut s, ty, false);
        s
    }

    /// Format a type scheme to a string.
    pub fn format_scheme(&mut self, scheme: &TypeScheme) -> String {
        let mut s = String::new();
        let _ = self.write_scheme(&mut s, scheme);
        s
    }

    /// Write a type to the given writer.
    fn write_type<W: Write>(&mut self, w: &mut W, ty: &Type, in_func_arg: bool) -> fmt::Result {
        match ty {
            Type::Int => write!(w, "Int"),
            Type::Bool => write!(w, "Bool"),
            Type::Var(name) => {
                let display = self.get_var_name(name);
                write!(w, "{}", display)
            }
            Type::Func(arg, ret) => {
                if in_func_arg {
                    write!(w, "(")?;
                }
                self.write_type(w, arg, true)?;
                write!(w, " -> ")?;
                self.write_type(w, ret, false)?;
                if in_func_arg {
                    write!(w, ")")?;
                }
                Ok(())
            }
        }
    }

    /// Write a type scheme to the given writer.
    fn write_scheme<W: Write>(&mut self, w: &mut W, scheme: &TypeScheme) -> fmt::Result {
        if scheme.vars.is_empty() {
            return self.write_type(w, &scheme.ty, false);
        }

        // Render the body first so names follow the order of appearance
        let mut body = String::new();
        self.write_type(&mut body, &scheme.ty, false)?;

        write!(w, "forall")?;
        for var in &scheme.vars {
            let name = self.get_var_name(var);
            write!(w, " {}", name)?;
        }
        write!(w, ". {}", body)
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ctx = PrettyContext::new();
        write!(f, "{}", ctx.format_type(self))
    }
}

impl Display for TypeScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ctx = PrettyContext::new();
        write!(f, "{}", ctx.format_scheme(self))
    }
}

impl Display for TVarName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
