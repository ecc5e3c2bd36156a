//! Highscore persistence in `localStorage`

use game_core::{parse_highscore, HighscoreStore};
use web_sys::Storage;

pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }
}

fn local_storage() -> Result<Storage, String> {
    web_sys::window()
        .ok_or_else(|| "No window".to_string())?
        .local_storage()
        .map_err(|e| format!("localStorage blocked: {:?}", e))?
        .ok_or_else(|| "localStorage unavailable".to_string())
}

impl HighscoreStore for LocalStorageStore {
    fn load(&self) -> Result<Option<u32>, String> {
        let raw = local_storage()?
            .get_item(&self.key)
            .map_err(|e| format!("Failed to read {}: {:?}", self.key, e))?;

        raw.as_deref()
            .map(parse_highscore)
            .transpose()
            .map_err(|e| format!("{} in {}", e, self.key))
    }

    fn save(&mut self, highscore: u32) -> Result<(), String> {
        local_storage()?
            .set_item(&self.key, &highscore.to_string())
            .map_err(|e| format!("Failed to write {}: {:?}", self.key, e))
    }
}
