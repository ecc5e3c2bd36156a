//! Everything that lives for exactly one run

use glam::Vec2;
use hecs::World;

use crate::{Config, Events, Player, Score, Viewport};

/// Per-run simulation state. Starting a run replaces it wholesale.
pub struct RunState {
    pub world: World, // Player, obstacles and clouds
    pub score: Score,
    pub speed: f32, // Scroll speed in px per tick, only ever increases
    pub frame: u64, // Ticks since the run began; drives spawn cadence
    pub game_over: bool,
    pub events: Events,
}

impl RunState {
    /// State held before the first run
    pub fn new(config: &Config, viewport: &Viewport) -> Self {
        Self::with_speed(config.speed_initial, config, viewport)
    }

    /// Fresh state for a run that is about to start
    pub fn restarted(config: &Config, viewport: &Viewport) -> Self {
        Self::with_speed(config.speed_restart, config, viewport)
    }

    fn with_speed(speed: f32, config: &Config, viewport: &Viewport) -> Self {
        let mut world = World::new();
        create_player(&mut world, config, viewport);
        Self {
            world,
            score: Score::new(),
            speed,
            frame: 0,
            game_over: false,
            events: Events::new(),
        }
    }

    /// Copy of the player component
    pub fn player(&self) -> Option<Player> {
        self.world
            .query::<&Player>()
            .iter()
            .next()
            .map(|(_e, player)| *player)
    }

    /// Keep the player resting on a relocated ground line
    pub fn snap_player_to_ground(&mut self, viewport: &Viewport) {
        let ground_line = viewport.ground_line();
        for (_entity, player) in self.world.query_mut::<&mut Player>() {
            player.rest_on(ground_line);
        }
    }
}

/// Helper to create the player entity on the ground line
pub fn create_player(world: &mut World, config: &Config, viewport: &Viewport) -> hecs::Entity {
    let size = Vec2::new(config.player_width, config.player_height);
    world.spawn((Player::new(config.player_x, size, viewport.ground_line()),))
}
