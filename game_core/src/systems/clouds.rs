use crate::{Cloud, Config, GameRng, Viewport};
use glam::Vec2;
use hecs::World;

/// Random point beyond the right edge, upper half of the viewport
fn offscreen_spot(viewport: &Viewport, rng: &mut GameRng) -> Vec2 {
    Vec2::new(
        viewport.width + rng.unit() * viewport.width,
        rng.unit() * (viewport.height / 2.0),
    )
}

/// Add one cloud per tick until the target count is reached
pub fn spawn_clouds(
    world: &mut World,
    speed: f32,
    viewport: &Viewport,
    config: &Config,
    rng: &mut GameRng,
) {
    let count = world.query::<&Cloud>().iter().count();
    if count < config.cloud_count {
        let pos = offscreen_spot(viewport, rng);
        let size = Vec2::new(config.cloud_width, config.cloud_height);
        world.spawn((Cloud::new(pos, size, speed * config.cloud_speed_factor),));
    }
}

/// Drift clouds left, recycling the ones that leave the viewport
pub fn scroll_clouds(world: &mut World, viewport: &Viewport, rng: &mut GameRng) {
    for (_entity, cloud) in world.query_mut::<&mut Cloud>() {
        cloud.pos.x -= cloud.speed;
        if cloud.right() < 0.0 {
            cloud.pos = offscreen_spot(viewport, rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clouds(world: &World) -> Vec<Cloud> {
        world.query::<&Cloud>().iter().map(|(_e, c)| *c).collect()
    }

    #[test]
    fn test_count_grows_to_target_and_stops() {
        let mut world = World::new();
        let config = Config::new();
        let viewport = Viewport::new(800.0, 600.0);
        let mut rng = GameRng::new(1);

        for expected in 1..=config.cloud_count {
            spawn_clouds(&mut world, 6.0, &viewport, &config, &mut rng);
            assert_eq!(clouds(&world).len(), expected);
        }
        for _ in 0..20 {
            spawn_clouds(&mut world, 6.0, &viewport, &config, &mut rng);
        }
        assert_eq!(clouds(&world).len(), config.cloud_count);
    }

    #[test]
    fn test_spawn_placement_and_speed() {
        let mut world = World::new();
        let config = Config::new();
        let viewport = Viewport::new(800.0, 600.0);
        let mut rng = GameRng::new(2);

        for _ in 0..config.cloud_count {
            spawn_clouds(&mut world, 6.0, &viewport, &config, &mut rng);
        }
        for cloud in clouds(&world) {
            assert!(cloud.pos.x >= viewport.width && cloud.pos.x < viewport.width * 2.0);
            assert!(cloud.pos.y >= 0.0 && cloud.pos.y < viewport.height / 2.0);
            assert_eq!(cloud.speed, 3.0, "Half the game speed at creation");
        }
    }

    #[test]
    fn test_recycle_keeps_speed_and_count() {
        let mut world = World::new();
        let viewport = Viewport::new(800.0, 600.0);
        let mut rng = GameRng::new(3);
        world.spawn((Cloud::new(
            Vec2::new(-120.0, 50.0),
            Vec2::new(128.0, 64.0),
            4.0,
        ),));

        // Right edge: -120 + 128 - 4 = 4, still visible
        scroll_clouds(&mut world, &viewport, &mut rng);
        assert_eq!(clouds(&world)[0].pos.x, -124.0);

        for _ in 0..2 {
            scroll_clouds(&mut world, &viewport, &mut rng);
        }
        let all = clouds(&world);
        assert_eq!(all.len(), 1);
        let cloud = all[0];
        assert!(cloud.pos.x >= viewport.width, "Recycled beyond the right edge");
        assert!(cloud.pos.y < viewport.height / 2.0);
        assert_eq!(cloud.speed, 4.0);
    }
}
