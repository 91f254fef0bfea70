//! Pretty printer for AST -> source text.
//!
//! Output re-parses to the same tree: applications and binders are only
//! parenthesized where the grammar requires it.

use std::fmt::{self, Display, Write};

use super::ast::*;

/// Syntactic position of the expression being printed.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Position {
    /// Anywhere an `expr` is accepted.
    Top,
    /// Function part of an application.
    Callee,
    /// Argument of an application.
    Argument,
}

/// Pretty print an expression to source text.
pub fn print_expr(expr: &Exp) -> String {
    let mut out = String::new();
    let _ = write_expr(&mut out, expr, Position::Top);
    out
}

/// Pretty print a program, one statement per line.
pub fn print_program(program: &Program) -> String {
    let mut out = String::new();
    for stmt in &program.statements {
        let _ = write_stmt(&mut out, stmt);
    }
    out
}

fn write_stmt(w: &mut impl Write, stmt: &Stmt) -> fmt::Result {
    match stmt {
        Stmt::Let { name, value, .. } => {
            write!(w, "let {} = ", name)?;
            write_expr(w, value, Position::Top)?;
        }
        Stmt::Expr { expression, .. } => write_expr(w, expression, Position::Top)?,
    }
    writeln!(w, ";")
}

fn write_expr(w: &mut impl Write, expr: &Exp, pos: Position) -> fmt::Result {
    match expr {
        Exp::Var(name) => write!(w, "{}", name),

        Exp::Lit(lit) => write_literal(w, lit),

        Exp::App(func, arg) => {
            let parens = pos == Position::Argument;
            if parens {
                write!(w, "(")?;
            }
            write_expr(w, func, Position::Callee)?;
            write!(w, " ")?;
            write_expr(w, arg, Position::Argument)?;
            if parens {
                write!(w, ")")?;
            }
            Ok(())
        }

        Exp::Abs(param, body) => {
            let parens = pos != Position::Top;
            if parens {
                write!(w, "(")?;
            }
            write!(w, "\\{}", param)?;
            // Collapse nested binders: \x y -> body
            let mut body = body.as_ref();
            while let Exp::Abs(next, inner) = body {
                write!(w, " {}", next)?;
                body = inner;
            }
            write!(w, " -> ")?;
            write_expr(w, body, Position::Top)?;
            if parens {
                write!(w, ")")?;
            }
            Ok(())
        }

        Exp::Let(name, bound, body) => {
            let parens = pos != Position::Top;
            if parens {
                write!(w, "(")?;
            }
            write!(w, "let {} = ", name)?;
            write_expr(w, bound, Position::Top)?;
            write!(w, " in ")?;
            write_expr(w, body, Position::Top)?;
            if parens {
                write!(w, ")")?;
            }
            Ok(())
        }
    }
}

fn write_literal(w: &mut impl Write, lit: &Literal) -> fmt::Result {
    match lit {
        Literal::Int(n) => write!(w, "{}", n),
        Literal::Bool(b) => write!(w, "{}", b),
    }
}

impl Display for Exp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_expr(f, self, Position::Top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application() {
        let expr = Exp::apps(Exp::var("add"), [Exp::int(1), Exp::app(Exp::var("f"), Exp::int(2))]);
        assert_eq!(print_expr(&expr), "add 1 (f 2)");
    }

    #[test]
    fn test_binders() {
        let expr = Exp::abs("x", Exp::abs("y", Exp::var("x")));
        assert_eq!(print_expr(&expr), "\\x y -> x");

        let applied = Exp::app(Exp::abs("x", Exp::var("x")), Exp::bool(true));
        assert_eq!(applied.to_string(), "(\\x -> x) true");
    }

    #[test]
    fn test_let() {
        let expr = Exp::let_in(
            "id",
            Exp::abs("x", Exp::var("x")),
            Exp::app(Exp::var("id"), Exp::int(1)),
        );
        assert_eq!(expr.to_string(), "let id = \\x -> x in id 1");
    }

    #[test]
    fn test_program() {
        let program = crate::parser::parse_program("let one = 1; add one one").unwrap();
        assert_eq!(print_program(&program), "let one = 1;\nadd one one;\n");
    }
}
