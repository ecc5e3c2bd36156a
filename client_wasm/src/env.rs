//! Console-backed diagnostics

use game_core::Environment;
use wasm_bindgen::JsValue;
use web_sys::console;

pub struct ConsoleEnv;

impl Environment for ConsoleEnv {
    fn log(&self, msg: String) {
        console::log_1(&JsValue::from_str(&msg));
    }
}

/// Non-blocking warning for host failures (missing asset, rejected audio)
pub fn warn(msg: &str) {
    console::warn_1(&JsValue::from_str(msg));
}
