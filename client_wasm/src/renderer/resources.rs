use game_core::ObstacleSprite;
use web_sys::HtmlImageElement;

const BACKGROUND_SRC: &str = "assets/background.jpg";
const GROUND_SRC: &str = "assets/ground.png";
const PLAYER_SRC: &str = "assets/player.png";
const TOMBSTONE_SRC: &str = "assets/tombstone.png";
const ZOMBIE_SRC: &str = "assets/zombie.png";
const CLOUD_SRC: &str = "assets/cloud.png";

/// Sprite images; loading happens in the background
pub struct Sprites {
    pub background: HtmlImageElement,
    pub ground: HtmlImageElement,
    pub player: HtmlImageElement,
    pub tombstone: HtmlImageElement,
    pub zombie: HtmlImageElement,
    pub cloud: HtmlImageElement,
}

fn load_image(src: &str) -> Result<HtmlImageElement, String> {
    let image =
        HtmlImageElement::new().map_err(|e| format!("Failed to create image {}: {:?}", src, e))?;
    image.set_src(src);
    Ok(image)
}

impl Sprites {
    pub fn load() -> Result<Self, String> {
        Ok(Self {
            background: load_image(BACKGROUND_SRC)?,
            ground: load_image(GROUND_SRC)?,
            player: load_image(PLAYER_SRC)?,
            tombstone: load_image(TOMBSTONE_SRC)?,
            zombie: load_image(ZOMBIE_SRC)?,
            cloud: load_image(CLOUD_SRC)?,
        })
    }

    pub fn obstacle(&self, sprite: ObstacleSprite) -> &HtmlImageElement {
        match sprite {
            ObstacleSprite::Tombstone => &self.tombstone,
            ObstacleSprite::Zombie => &self.zombie,
        }
    }
}

/// True once the image decoded; broken or pending images are skipped
pub fn is_ready(image: &HtmlImageElement) -> bool {
    image.complete() && image.natural_width() > 0
}
