//! Fire-and-forget sound cues backed by `<audio>` elements

use crate::env::warn;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlAudioElement;

const JUMP_SRC: &str = "assets/jump.mp3";
const COLLISION_SRC: &str = "assets/gameover.mp3";
const MUSIC_SRC: &str = "assets/background.mp3";

pub struct Audio {
    jump: HtmlAudioElement,
    collision: HtmlAudioElement,
    music: HtmlAudioElement,
}

impl Audio {
    pub fn load() -> Result<Self, JsValue> {
        let music = HtmlAudioElement::new_with_src(MUSIC_SRC)?;
        music.set_loop(true);
        Ok(Self {
            jump: HtmlAudioElement::new_with_src(JUMP_SRC)?,
            collision: HtmlAudioElement::new_with_src(COLLISION_SRC)?,
            music,
        })
    }

    pub fn play_jump(&self) {
        play(&self.jump, "jump");
    }

    pub fn play_collision(&self) {
        play(&self.collision, "collision");
    }

    pub fn start_music(&self) {
        play(&self.music, "music");
    }

    pub fn stop_music(&self) {
        if let Err(e) = self.music.pause() {
            warn(&format!("Failed to pause music: {:?}", e));
        }
    }

    pub fn rewind_music(&self) {
        self.music.set_current_time(0.0);
    }
}

/// Start playback; a rejected play promise (autoplay policy, missing file) is only logged
fn play(element: &HtmlAudioElement, label: &'static str) {
    match element.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                warn(&format!("Audio cue {} rejected: {:?}", label, e));
            }
        }),
        Err(e) => warn(&format!("Audio cue {} failed: {:?}", label, e)),
    }
}
