use glam::Vec2;

use crate::map::Aabb;

/// Player component - the runner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub pos: Vec2, // Top-left; x never changes
    pub size: Vec2,
    pub vy: f32,
    pub grounded: bool,
    pub jump_timer: u32, // 0 = not jumping, 1..=cap = ascending
}

impl Player {
    pub fn new(x: f32, size: Vec2, ground_line: f32) -> Self {
        Self {
            pos: Vec2::new(x, ground_line - size.y),
            size,
            vy: 0.0,
            grounded: true,
            jump_timer: 0,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    /// Put the player back on the ground line
    pub fn rest_on(&mut self, ground_line: f32) {
        self.pos.y = ground_line - self.size.y;
        self.vy = 0.0;
        self.grounded = true;
    }
}

/// Obstacle sprite variants (cosmetic only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleSprite {
    Tombstone,
    Zombie,
}

impl ObstacleSprite {
    /// Uniform pick table; the tombstone fills two slots
    pub const SLOTS: [ObstacleSprite; 3] = [
        ObstacleSprite::Tombstone,
        ObstacleSprite::Zombie,
        ObstacleSprite::Tombstone,
    ];
}

/// Obstacle component - scrolls left along the ground line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub pos: Vec2,
    pub size: Vec2,
    pub sprite: ObstacleSprite,
    pub passed: bool,
}

impl Obstacle {
    pub fn new(pos: Vec2, size: Vec2, sprite: ObstacleSprite) -> Self {
        Self {
            pos,
            size,
            sprite,
            passed: false,
        }
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

/// Cloud component - decorative parallax
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cloud {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32, // Fixed at creation
}

impl Cloud {
    pub fn new(pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self { pos, size, speed }
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_starts_on_ground_line() {
        let player = Player::new(100.0, Vec2::new(80.0, 80.0), 500.0);
        assert_eq!(player.pos, Vec2::new(100.0, 420.0));
        assert_eq!(player.vy, 0.0);
        assert_eq!(player.jump_timer, 0);
        assert!(player.grounded, "Spawned resting on the ground");
    }

    #[test]
    fn test_rest_on_lands_the_player() {
        let mut player = Player::new(100.0, Vec2::new(80.0, 80.0), 500.0);
        player.pos.y = 200.0;
        player.vy = -12.0;
        player.grounded = false;

        player.rest_on(700.0);

        assert_eq!(player.pos.y, 620.0);
        assert_eq!(player.vy, 0.0);
        assert!(player.grounded);
    }

    #[test]
    fn test_sprite_slots_share_one_hitbox() {
        let size = Vec2::new(75.0, 100.0);
        for sprite in ObstacleSprite::SLOTS {
            let obstacle = Obstacle::new(Vec2::ZERO, size, sprite);
            assert_eq!(obstacle.bounds().max, size);
        }
    }
}
