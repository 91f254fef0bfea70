//! WebAssembly bindings for the hmw type checker.

use wasm_bindgen::prelude::*;

use crate::driver::check_source;
use crate::error::HmwError;
use crate::infer::{InferOptions, LetPolicy};

/// Result of type checking a program.
#[wasm_bindgen]
pub struct CheckResult {
    success: bool,
    judgements: Vec<String>,
    errors: Vec<JsValue>,
}

#[wasm_bindgen]
impl CheckResult {
    #[wasm_bindgen(getter)]
    pub fn success(&self) -> bool {
        self.success
    }

    /// One `name : scheme` line per statement.
    #[wasm_bindgen(getter)]
    pub fn judgements(&self) -> Vec<String> {
        self.judgements.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn errors(&self) -> Vec<JsValue> {
        self.errors.clone()
    }
}

/// Format an error into a structured object for JS.
fn format_error(error: &HmwError) -> JsValue {
    let span = error.span();
    let message = error.to_string();

    let obj = js_sys::Object::new();
    // Setting plain data properties on a fresh object cannot fail
    let _ = js_sys::Reflect::set(&obj, &"message".into(), &message.into());
    let _ = js_sys::Reflect::set(&obj, &"start".into(), &JsValue::from_f64(span.start as f64));
    let _ = js_sys::Reflect::set(&obj, &"end".into(), &JsValue::from_f64(span.end as f64));
    obj.into()
}

/// Initialize the WASM module (call once at startup).
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Type check a program and return one judgement per statement.
#[wasm_bindgen]
pub fn check_types(source: &str, mono_let: bool) -> CheckResult {
    let let_policy = if mono_let {
        LetPolicy::Monomorphic
    } else {
        LetPolicy::Generalize
    };
    let options = InferOptions::default().with_let_policy(let_policy);

    match check_source(options, source) {
        Ok(judgements) => CheckResult {
            success: true,
            judgements: judgements.iter().map(ToString::to_string).collect(),
            errors: Vec::new(),
        },
        Err(error) => CheckResult {
            success: false,
            judgements: Vec::new(),
            errors: vec![format_error(&error)],
        },
    }
}
