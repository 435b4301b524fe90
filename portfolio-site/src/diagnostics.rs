//! Browser console diagnostics, tagged `[portfolio][stage]`.

use wasm_bindgen::JsValue;

const TAG: &str = "portfolio";

/// Console method a line goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

pub fn line(stage: &str, message: &str) -> String {
    format!("[{TAG}][{stage}] {message}")
}

pub fn emit(level: Level, stage: &str, message: &str) {
    let text = JsValue::from(line(stage, message));
    match level {
        Level::Info => web_sys::console::info_1(&text),
        Level::Error => web_sys::console::error_1(&text),
    }
}

pub fn info(stage: &str, message: &str) {
    emit(Level::Info, stage, message);
}

pub fn error(stage: &str, message: &str) {
    emit(Level::Error, stage, message);
}

#[cfg(test)]
mod tests {
    #[test]
    fn lines_are_tagged_by_stage() {
        assert_eq!(
            super::line("load", "request failed"),
            "[portfolio][load] request failed"
        );
    }
}
