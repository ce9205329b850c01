//! WebAssembly bindings for the ternary engine.
//!
//! This module provides JavaScript-friendly wrappers around [`TernaryInt`].
//! Values cross the boundary as decimal strings, since 64-trit magnitudes do
//! not fit in a JavaScript number.

use wasm_bindgen::prelude::*;
use crate::{TernaryInt, TritOps};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// WebAssembly-friendly ternary integer.
#[wasm_bindgen]
#[derive(Clone, Copy)]
pub struct WasmTernary {
    value: TernaryInt,
}

#[wasm_bindgen]
impl WasmTernary {
    /// Create from a decimal string.
    #[wasm_bindgen(constructor)]
    pub fn new(decimal: &str) -> Result<WasmTernary, JsError> {
        let parsed = decimal.trim().parse::<i128>()
            .map_err(|e| JsError::new(&format!("invalid decimal '{}': {}", decimal, e)))?;
        Ok(Self { value: TernaryInt::from_i128(parsed) })
    }

    /// Create from a trit string such as "0t+-0".
    #[wasm_bindgen]
    pub fn from_trits(trits: &str) -> Result<WasmTernary, JsError> {
        let value = TernaryInt::parse(trits)
            .map_err(|e| JsError::new(&format!("{}", e)))?;
        Ok(Self { value })
    }

    /// Exact decimal value.
    #[wasm_bindgen]
    pub fn decimal(&self) -> String {
        self.value.to_i128().to_string()
    }

    /// The 64-symbol trit string.
    #[wasm_bindgen]
    pub fn trits(&self) -> String {
        format!("{}", self.value)
    }

    #[wasm_bindgen]
    pub fn add(&self, other: &WasmTernary) -> WasmTernary {
        Self { value: self.value + other.value }
    }

    #[wasm_bindgen]
    pub fn sub(&self, other: &WasmTernary) -> WasmTernary {
        Self { value: self.value - other.value }
    }

    #[wasm_bindgen]
    pub fn mul(&self, other: &WasmTernary) -> WasmTernary {
        Self { value: self.value * other.value }
    }

    #[wasm_bindgen]
    pub fn neg(&self) -> WasmTernary {
        Self { value: -self.value }
    }

    /// Truncating quotient.
    #[wasm_bindgen]
    pub fn div(&self, other: &WasmTernary) -> Result<WasmTernary, JsError> {
        let (quotient, _) = self.value.divmod(&other.value)
            .map_err(|e| JsError::new(&format!("{}", e)))?;
        Ok(Self { value: quotient })
    }

    /// Remainder with the sign of the dividend.
    #[wasm_bindgen]
    pub fn rem(&self, other: &WasmTernary) -> Result<WasmTernary, JsError> {
        let (_, remainder) = self.value.divmod(&other.value)
            .map_err(|e| JsError::new(&format!("{}", e)))?;
        Ok(Self { value: remainder })
    }

    #[wasm_bindgen]
    pub fn shl(&self, count: u32) -> WasmTernary {
        Self { value: self.value << count }
    }

    #[wasm_bindgen]
    pub fn shr(&self, count: u32) -> WasmTernary {
        Self { value: self.value >> count }
    }

    /// -1, 0 or 1.
    #[wasm_bindgen]
    pub fn compare(&self, other: &WasmTernary) -> i32 {
        self.value.compare(&other.value) as i32
    }

    #[wasm_bindgen]
    pub fn ternary_min(&self, other: &WasmTernary) -> WasmTernary {
        Self { value: self.value.ternary_min(&other.value) }
    }

    #[wasm_bindgen]
    pub fn ternary_max(&self, other: &WasmTernary) -> WasmTernary {
        Self { value: self.value.ternary_max(&other.value) }
    }

    /// Both planes as JSON.
    #[wasm_bindgen]
    pub fn planes_json(&self) -> Result<String, JsError> {
        serde_json::to_string(&self.value)
            .map_err(|e| JsError::new(&format!("{}", e)))
    }
}

/// Evaluate `lhs op rhs` on decimal strings and return the decimal result.
#[wasm_bindgen]
pub fn wasm_eval(lhs: &str, op: &str, rhs: &str) -> Result<String, JsError> {
    let a = WasmTernary::new(lhs)?;
    let b = WasmTernary::new(rhs)?;
    let result = match op {
        "+" => a.add(&b),
        "-" => a.sub(&b),
        "*" => a.mul(&b),
        "/" => a.div(&b)?,
        "%" => a.rem(&b)?,
        other => return Err(JsError::new(&format!("unknown operator '{}'", other))),
    };
    Ok(result.decimal())
}
