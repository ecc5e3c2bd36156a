use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub gravity: f32,
    pub tick_rate: f32,
    pub max_frame_dt: f32,
    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub jump_force: f32,
    pub jump_hold_ticks: u32,
    pub jump_taper: f32,
    pub obstacle_width: f32,
    pub obstacle_height: f32,
    pub spawn_interval_secs: f32,
    pub speed_initial: f32,
    pub speed_restart: f32,
    pub speed_increment: f32,
    pub cloud_count: usize,
    pub cloud_width: f32,
    pub cloud_height: f32,
    pub cloud_speed_factor: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gravity: Params::GRAVITY,
            tick_rate: Params::TICK_RATE,
            max_frame_dt: Params::MAX_FRAME_DT,
            player_x: Params::PLAYER_X,
            player_width: Params::PLAYER_WIDTH,
            player_height: Params::PLAYER_HEIGHT,
            jump_force: Params::JUMP_FORCE,
            jump_hold_ticks: Params::JUMP_HOLD_TICKS,
            jump_taper: Params::JUMP_TAPER,
            obstacle_width: Params::OBSTACLE_WIDTH,
            obstacle_height: Params::OBSTACLE_HEIGHT,
            spawn_interval_secs: Params::SPAWN_INTERVAL_SECS,
            speed_initial: Params::SPEED_INITIAL,
            speed_restart: Params::SPEED_RESTART,
            speed_increment: Params::SPEED_INCREMENT,
            cloud_count: Params::CLOUD_COUNT,
            cloud_width: Params::CLOUD_WIDTH,
            cloud_height: Params::CLOUD_HEIGHT,
            cloud_speed_factor: Params::CLOUD_SPEED_FACTOR,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds per simulation tick
    pub fn fixed_dt(&self) -> f32 {
        1.0 / self.tick_rate
    }

    /// Obstacle cadence expressed in ticks of the fixed-rate clock
    pub fn spawn_interval_frames(&self) -> u64 {
        ((self.spawn_interval_secs * self.tick_rate).round() as u64).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_interval_at_default_rate() {
        let config = Config::new();
        assert_eq!(config.spawn_interval_frames(), 120);
    }

    #[test]
    fn test_spawn_interval_tracks_tick_rate() {
        let config = Config {
            tick_rate: 120.0,
            ..Config::new()
        };
        assert_eq!(
            config.spawn_interval_frames(),
            240,
            "Same 2s cadence at a faster clock"
        );
    }

    #[test]
    fn test_spawn_interval_never_zero() {
        let config = Config {
            spawn_interval_secs: 0.0,
            ..Config::new()
        };
        assert_eq!(config.spawn_interval_frames(), 1);
    }

    #[test]
    fn test_speed_baselines_stay_distinct() {
        let config = Config::new();
        assert_eq!(config.speed_initial, 5.0);
        assert_eq!(config.speed_restart, 6.0);
    }
}
