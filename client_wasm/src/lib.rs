//! Canvas 2D browser host for the graveyard runner
//!
//! The page drives `frame` from `requestAnimationFrame` while a run is active
//! and forwards keyboard, button and resize events to the exports below.

#![cfg(target_arch = "wasm32")]

mod audio;
mod env;
mod frontend;
mod hud;
mod renderer;
mod storage;

use audio::Audio;
use env::{warn, ConsoleEnv};
use frontend::BrowserFrontend;
use game_core::*;
use hud::DomHud;
use renderer::Renderer;
use std::cell::RefCell;
use storage::LocalStorageStore;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

/// Main client state
struct Client {
    game: Game,
    renderer: Renderer,
    input: InputState,
    reported_render_error: bool,
}

impl Client {
    fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document"))?;

        let (width, height) = window_size(&window)?;
        let renderer = Renderer::new(canvas, width, height)
            .map_err(|e| JsValue::from_str(&e))?;

        let frontend = BrowserFrontend {
            audio: Audio::load()?,
            hud: DomHud::new(&document)?,
        };

        let seed = js_sys::Date::now() as u64;
        let game = Game::new(
            Box::new(ConsoleEnv),
            Box::new(LocalStorageStore::new(Params::HIGHSCORE_KEY)),
            Box::new(frontend),
            Config::new(),
            Viewport::new(width as f32, height as f32),
            seed,
        );

        Ok(Self {
            game,
            renderer,
            input: InputState::new(),
            reported_render_error: false,
        })
    }

    /// Pick up the ground sprite's real height once it has decoded
    fn sync_ground_height(&mut self) {
        if let Some(ground_height) = self.renderer.ground_height() {
            let viewport = self.game.viewport;
            if viewport.ground_height != ground_height {
                self.game.resize(viewport.with_ground_height(ground_height));
            }
        }
    }

    fn render(&mut self) {
        if let Err(e) = self.renderer.draw(&self.game) {
            if !self.reported_render_error {
                warn(&format!("Render failed: {}", e));
                self.reported_render_error = true;
            }
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.renderer.resize(width, height);
        let viewport = Viewport::new(width as f32, height as f32)
            .with_ground_height(self.game.viewport.ground_height);
        self.game.resize(viewport);
        self.render();
    }

    fn frame(&mut self, now_ms: f64) -> bool {
        self.sync_ground_height();
        let input = self.input.clone();
        let running = self.game.frame(now_ms, &input);
        self.render();
        running
    }
}

fn window_size(window: &web_sys::Window) -> Result<(u32, u32), JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width.max(1.0) as u32, height.max(1.0) as u32))
}

// Global client storage for WASM bindings
thread_local! {
    static CLIENT: RefCell<Option<Client>> = const { RefCell::new(None) };
}

fn with_client<T>(f: impl FnOnce(&mut Client) -> T) -> Result<T, JsValue> {
    CLIENT.with(|cell| match cell.borrow_mut().as_mut() {
        Some(client) => Ok(f(client)),
        None => Err(JsValue::from_str("Game not initialized")),
    })
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
pub fn init_game(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    let mut client = Client::new(canvas)?;
    client.render();
    CLIENT.with(|cell| *cell.borrow_mut() = Some(client));
    Ok(())
}

/// Start button. Returns true when the page should begin its frame loop.
#[wasm_bindgen]
pub fn start_game() -> Result<bool, JsValue> {
    with_client(|client| {
        let started = client.game.start();
        client.render();
        started
    })
}

/// Restart button. Returns true when the page should begin its frame loop.
#[wasm_bindgen]
pub fn restart_game() -> Result<bool, JsValue> {
    with_client(|client| {
        let restarted = client.game.restart();
        client.render();
        restarted
    })
}

/// Returns true when the key is a game control and its default action should be suppressed
#[wasm_bindgen]
pub fn key_down(code: &str) -> Result<bool, JsValue> {
    with_client(|client| client.input.key_down(code))
}

#[wasm_bindgen]
pub fn key_up(code: &str) -> Result<bool, JsValue> {
    with_client(|client| client.input.key_up(code))
}

#[wasm_bindgen]
pub fn resize(width: u32, height: u32) -> Result<(), JsValue> {
    with_client(|client| client.resize(width, height))
}

/// Advance and draw. Returns false once the run is over.
#[wasm_bindgen]
pub fn frame(now_ms: f64) -> Result<bool, JsValue> {
    with_client(|client| client.frame(now_ms))
}
