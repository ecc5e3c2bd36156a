use crate::audio::Audio;
use crate::hud::DomHud;
use game_core::{Cue, Frontend};

/// Audio and DOM collaborators behind the core's `Frontend` seam
pub struct BrowserFrontend {
    pub audio: Audio,
    pub hud: DomHud,
}

impl Frontend for BrowserFrontend {
    fn play(&mut self, cue: Cue) {
        match cue {
            Cue::Jump => self.audio.play_jump(),
            Cue::Collision => self.audio.play_collision(),
        }
    }

    fn start_music(&mut self) {
        self.audio.start_music();
    }

    fn stop_music(&mut self) {
        self.audio.stop_music();
    }

    fn rewind_music(&mut self) {
        self.audio.rewind_music();
    }

    fn show_score(&mut self, score: u32) {
        self.hud.show_score(score);
    }

    fn show_highscore(&mut self, highscore: u32) {
        self.hud.show_highscore(highscore);
    }

    fn show_final_score(&mut self, score: u32) {
        self.hud.show_final_score(score);
    }

    fn set_start_visible(&mut self, visible: bool) {
        self.hud.set_start_visible(visible);
    }

    fn set_game_over_visible(&mut self, visible: bool) {
        self.hud.set_game_over_visible(visible);
    }
}
