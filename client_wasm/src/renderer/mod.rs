pub mod draw;
pub mod init;
pub mod resources;

use game_core::Game;
use resources::{is_ready, Sprites};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Canvas 2D sprite renderer. Owns no game state, only images and the context.
pub struct Renderer {
    pub canvas: HtmlCanvasElement,
    pub ctx: CanvasRenderingContext2d,
    pub sprites: Sprites,
}

impl Renderer {
    pub fn new(canvas: HtmlCanvasElement, width: u32, height: u32) -> Result<Self, String> {
        let ctx = init::init_canvas(&canvas, width, height)?;
        let sprites = Sprites::load()?;

        Ok(Self {
            canvas,
            ctx,
            sprites,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    /// Natural height of the ground sprite once it has loaded
    pub fn ground_height(&self) -> Option<f32> {
        let ground = &self.sprites.ground;
        is_ready(ground).then(|| ground.natural_height() as f32)
    }

    pub fn draw(&self, game: &Game) -> Result<(), String> {
        draw::draw_frame(self, game)
    }
}
