use crate::{Config, GameRng, Obstacle, ObstacleSprite, Player, Score, Viewport};
use glam::Vec2;
use hecs::World;

/// Spawn an obstacle off the right edge every `spawn_interval_frames` ticks
pub fn spawn_obstacles(
    world: &mut World,
    frame: u64,
    viewport: &Viewport,
    config: &Config,
    rng: &mut GameRng,
) {
    if frame % config.spawn_interval_frames() != 0 {
        return;
    }

    let size = Vec2::new(config.obstacle_width, config.obstacle_height);
    let pos = Vec2::new(viewport.width + size.x, viewport.ground_line() - size.y);
    let sprite = ObstacleSprite::SLOTS[rng.index(ObstacleSprite::SLOTS.len())];
    world.spawn((Obstacle::new(pos, size, sprite),));
}

/// Scroll obstacles left and award a point the first time each one clears the player
pub fn move_obstacles(
    world: &mut World,
    score: &mut Score,
    speed: &mut f32,
    config: &Config,
) {
    let player_x = world
        .query::<&Player>()
        .iter()
        .next()
        .map(|(_e, p)| p.pos.x);

    for (_entity, obstacle) in world.query_mut::<&mut Obstacle>() {
        obstacle.pos.x -= *speed;

        if let Some(player_x) = player_x {
            if !obstacle.passed && obstacle.right() < player_x {
                obstacle.passed = true;
                score.increment();
                *speed += config.speed_increment;
            }
        }
    }
}

/// Despawn obstacles whose trailing edge has left the viewport
pub fn despawn_offscreen(world: &mut World) {
    let to_remove: Vec<_> = world
        .query::<&Obstacle>()
        .iter()
        .filter(|(_e, o)| o.right() < 0.0)
        .map(|(e, _)| e)
        .collect();

    for entity in to_remove {
        let _ = world.despawn(entity);
    }
}
