use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Size the canvas and acquire its 2D context
pub fn init_canvas(
    canvas: &HtmlCanvasElement,
    width: u32,
    height: u32,
) -> Result<CanvasRenderingContext2d, String> {
    canvas.set_width(width);
    canvas.set_height(height);

    canvas
        .get_context("2d")
        .map_err(|e| format!("Failed to get 2d context: {:?}", e))?
        .ok_or_else(|| "Canvas 2D context unavailable".to_string())?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| "Context is not a CanvasRenderingContext2d".to_string())
}
