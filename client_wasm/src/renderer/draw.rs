use game_core::{Cloud, Game, Obstacle, Params};
use glam::Vec2;
use web_sys::HtmlImageElement;

use super::resources::is_ready;
use super::Renderer;

pub fn draw_frame(renderer: &Renderer, game: &Game) -> Result<(), String> {
    let ctx = &renderer.ctx;
    let sprites = &renderer.sprites;
    let viewport = game.viewport;
    let (w, h) = (viewport.width as f64, viewport.height as f64);

    ctx.clear_rect(0.0, 0.0, w, h);
    let screen = Vec2::new(viewport.width, viewport.height);
    blit(renderer, &sprites.background, Vec2::ZERO, screen)?;

    let world = &game.run.world;
    for (_e, cloud) in world.query::<&Cloud>().iter() {
        blit(renderer, &sprites.cloud, cloud.pos, cloud.size)?;
    }

    // Ground strip overdraws below the ground line
    let ground_top = viewport.height - viewport.ground_height - Params::GROUND_DRAW_OFFSET;
    blit(
        renderer,
        &sprites.ground,
        Vec2::new(0.0, ground_top),
        Vec2::new(
            viewport.width,
            viewport.ground_height + Params::GROUND_DRAW_EXTRA,
        ),
    )?;

    if let Some(player) = game.run.player() {
        blit(renderer, &sprites.player, player.pos, player.size)?;
    }

    for (_e, obstacle) in world.query::<&Obstacle>().iter() {
        let image = sprites.obstacle(obstacle.sprite);
        blit(renderer, image, obstacle.pos, obstacle.size)?;
    }

    Ok(())
}

fn blit(
    renderer: &Renderer,
    image: &HtmlImageElement,
    pos: Vec2,
    size: Vec2,
) -> Result<(), String> {
    if !is_ready(image) {
        return Ok(());
    }
    renderer
        .ctx
        .draw_image_with_html_image_element_and_dw_and_dh(
            image,
            pos.x as f64,
            pos.y as f64,
            size.x as f64,
            size.y as f64,
        )
        .map_err(|e| format!("Failed to draw {}: {:?}", image.src(), e))
}
