/// Game tuning parameters for the runner
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Physics
    pub const GRAVITY: f32 = 1.5; // px per tick², only while airborne
    pub const TICK_RATE: f32 = 60.0; // simulation ticks per second
    pub const MAX_FRAME_DT: f32 = 0.25; // Clamp to prevent catch-up bursts

    // Player
    pub const PLAYER_X: f32 = 100.0;
    pub const PLAYER_WIDTH: f32 = 80.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;
    pub const JUMP_FORCE: f32 = -25.0; // Negative = up
    pub const JUMP_HOLD_TICKS: u32 = 15; // Variable-height jump cap
    pub const JUMP_TAPER: f32 = 50.0;

    // Obstacles
    pub const OBSTACLE_WIDTH: f32 = 75.0;
    pub const OBSTACLE_HEIGHT: f32 = 100.0;
    pub const SPAWN_INTERVAL_SECS: f32 = 2.0; // 120 ticks at 60 Hz

    // Difficulty
    pub const SPEED_INITIAL: f32 = 5.0; // Value held before the first run
    pub const SPEED_RESTART: f32 = 6.0; // Baseline of every run
    pub const SPEED_INCREMENT: f32 = 0.1; // Per obstacle passed

    // Clouds
    pub const CLOUD_COUNT: usize = 5;
    pub const CLOUD_WIDTH: f32 = 128.0;
    pub const CLOUD_HEIGHT: f32 = 64.0;
    pub const CLOUD_SPEED_FACTOR: f32 = 0.5;

    // Ground strip
    pub const GROUND_HEIGHT: f32 = 100.0; // Until the ground sprite reports its size
    pub const GROUND_DRAW_OFFSET: f32 = 85.0;
    pub const GROUND_DRAW_EXTRA: f32 = 100.0;

    // Persistence
    pub const HIGHSCORE_KEY: &'static str = "highscore";
}
