//! DOM overlays: score line, highscore line, start and game-over screens

use crate::env::warn;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

const HIDDEN: &str = "hidden";

pub struct DomHud {
    score: Element,
    highscore: Element,
    start_screen: Element,
    game_over_screen: Element,
    final_score: Element,
}

fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing #{} element", id)))
}

impl DomHud {
    pub fn new(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            score: element(document, "score")?,
            highscore: element(document, "highscore")?,
            start_screen: element(document, "start-screen")?,
            game_over_screen: element(document, "game-over-screen")?,
            final_score: element(document, "final-score")?,
        })
    }

    pub fn show_score(&self, score: u32) {
        self.score.set_text_content(Some(&format!("Score: {}", score)));
    }

    pub fn show_highscore(&self, highscore: u32) {
        self.highscore
            .set_text_content(Some(&format!("Highscore: {}", highscore)));
    }

    pub fn show_final_score(&self, score: u32) {
        self.final_score.set_text_content(Some(&score.to_string()));
    }

    pub fn set_start_visible(&self, visible: bool) {
        set_visible(&self.start_screen, visible);
    }

    pub fn set_game_over_visible(&self, visible: bool) {
        set_visible(&self.game_over_screen, visible);
    }
}

fn set_visible(element: &Element, visible: bool) {
    let classes = element.class_list();
    let result = if visible {
        classes.remove_1(HIDDEN)
    } else {
        classes.add_1(HIDDEN)
    };
    if let Err(e) = result {
        warn(&format!("Failed to toggle #{}: {:?}", element.id(), e));
    }
}
