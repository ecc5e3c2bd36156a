use crate::{Events, Obstacle, Player};
use hecs::World;

/// Check the player against every live obstacle
pub fn check_collisions(world: &World, events: &mut Events) {
    let player_box = match world.query::<&Player>().iter().next() {
        Some((_e, player)) => player.bounds(),
        None => return,
    };

    let hits = world
        .query::<&Obstacle>()
        .iter()
        .filter(|(_e, obstacle)| player_box.overlaps(&obstacle.bounds()))
        .count();

    if hits > 0 {
        events.collided = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ObstacleSprite;
    use glam::Vec2;

    fn setup_world() -> (World, Events) {
        let mut world = World::new();
        // Player occupies x 100..180, y 420..500
        world.spawn((Player::new(100.0, Vec2::new(80.0, 80.0), 500.0),));
        (world, Events::new())
    }

    fn spawn_obstacle(world: &mut World, x: f32, y: f32) {
        world.spawn((Obstacle::new(
            Vec2::new(x, y),
            Vec2::new(75.0, 100.0),
            ObstacleSprite::Tombstone,
        ),));
    }

    #[test]
    fn test_overlap_registers_collision() {
        let (mut world, mut events) = setup_world();
        spawn_obstacle(&mut world, 150.0, 400.0);
        check_collisions(&world, &mut events);
        assert!(events.collided);
    }

    #[test]
    fn test_edge_contact_is_not_a_collision() {
        let (mut world, mut events) = setup_world();
        spawn_obstacle(&mut world, 180.0, 400.0); // Left edge on player's right edge
        spawn_obstacle(&mut world, 25.0, 400.0); // Right edge on player's left edge
        check_collisions(&world, &mut events);
        assert!(!events.collided);
    }

    #[test]
    fn test_jumping_clear_of_obstacle() {
        let (mut world, mut events) = setup_world();
        for (_e, player) in world.query_mut::<&mut Player>() {
            player.pos.y = 320.0; // Bottom edge exactly on obstacle top
        }
        spawn_obstacle(&mut world, 120.0, 400.0);
        check_collisions(&world, &mut events);
        assert!(!events.collided);
    }

    #[test]
    fn test_any_obstacle_can_end_the_run() {
        let (mut world, mut events) = setup_world();
        spawn_obstacle(&mut world, 700.0, 400.0);
        spawn_obstacle(&mut world, 900.0, 400.0);
        spawn_obstacle(&mut world, 110.0, 400.0);
        check_collisions(&world, &mut events);
        assert!(events.collided);
    }

    #[test]
    fn test_no_collision_without_player() {
        let mut world = World::new();
        let mut events = Events::new();
        spawn_obstacle(&mut world, 0.0, 0.0);
        check_collisions(&world, &mut events);
        assert!(!events.collided);
    }
}
