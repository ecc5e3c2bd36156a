//! Seams to the host environment (audio, HUD, storage, logging)

/// One-shot audio cues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Jump,
    Collision,
}

// Abstract environment (Logging)
pub trait Environment {
    fn log(&self, msg: String);
}

/// Persistence for the single highscore value
pub trait HighscoreStore {
    /// `Ok(None)` when nothing has been stored yet
    fn load(&self) -> Result<Option<u32>, String>;
    fn save(&mut self, highscore: u32) -> Result<(), String>;
}

/// Audio and UI collaborators the game writes to
pub trait Frontend {
    fn play(&mut self, cue: Cue);
    fn start_music(&mut self);
    fn stop_music(&mut self);
    fn rewind_music(&mut self);

    fn show_score(&mut self, score: u32);
    fn show_highscore(&mut self, highscore: u32);
    fn show_final_score(&mut self, score: u32);
    fn set_start_visible(&mut self, visible: bool);
    fn set_game_over_visible(&mut self, visible: bool);
}

/// Parse a stored highscore. Surrounding whitespace is tolerated.
pub fn parse_highscore(raw: &str) -> Result<u32, String> {
    raw.trim()
        .parse::<u32>()
        .map_err(|e| format!("Malformed highscore {:?}: {}", raw, e))
}
