//! WASM bindings for elogic core.
//!
//! This module provides JavaScript-friendly bindings for use in web
//! playgrounds: parse a scheme description and get back its canonical
//! (or flattened) textual form.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { canonicalize, flatten_scheme } from 'elogic_core';
//!
//! await init();
//!
//! const source = `
//!   SCHEME adder a b -> s c
//!     XOR a b -> s
//!     AND a b -> c
//!   END
//! `;
//!
//! const canonical = canonicalize(source);
//! const flat = flatten_scheme(source, 'adder');
//! ```

use wasm_bindgen::prelude::*;

use crate::{dsl, flatten};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Parse a scheme description and return its canonical textual form.
#[wasm_bindgen]
pub fn canonicalize(source: &str) -> Result<String, JsValue> {
    let module = dsl::parse(source).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(module.to_string())
}

/// Parse a scheme description, flatten the named scheme to primitive
/// instructions, and return its canonical textual form.
#[wasm_bindgen]
pub fn flatten_scheme(source: &str, name: &str) -> Result<String, JsValue> {
    let module = dsl::parse(source).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let flat = flatten::flatten(&module, name).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(flat.to_string())
}
