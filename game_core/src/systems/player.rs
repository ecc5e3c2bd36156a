use crate::{Config, Control, Events, InputState, Player, Viewport};
use hecs::World;

/// Apply jump input, integrate vertical motion and clamp to the ground line
pub fn update_player(
    world: &mut World,
    input: &InputState,
    viewport: &Viewport,
    config: &Config,
    events: &mut Events,
) {
    let ground_line = viewport.ground_line();
    for (_entity, player) in world.query_mut::<&mut Player>() {
        if input.is_pressed(Control::Jump) {
            if jump(player, config) {
                events.jumped = true;
            }
        } else {
            // Releasing cancels any remaining ascent
            player.jump_timer = 0;
        }

        integrate(player, ground_line, config.gravity);
    }
}

/// Start or sustain a jump. Returns true on take-off.
pub fn jump(player: &mut Player, config: &Config) -> bool {
    if player.grounded && player.jump_timer == 0 {
        player.jump_timer = 1;
        player.vy = config.jump_force;
        true
    } else {
        if player.jump_timer > 0 && player.jump_timer < config.jump_hold_ticks {
            player.jump_timer += 1;
            player.vy = config.jump_force - player.jump_timer as f32 / config.jump_taper;
        }
        false
    }
}

/// Move by the current velocity; gravity only accumulates while airborne
pub fn integrate(player: &mut Player, ground_line: f32, gravity: f32) {
    player.pos.y += player.vy;
    if player.grounded {
        player.vy = 0.0;
    } else {
        player.vy += gravity;
    }

    if player.pos.y + player.size.y >= ground_line {
        player.pos.y = ground_line - player.size.y;
        player.grounded = true;
    } else {
        player.grounded = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup() -> (World, Config, Viewport, InputState, Events) {
        let config = Config::new();
        let viewport = Viewport::new(800.0, 600.0);
        let mut world = World::new();
        world.spawn((Player::new(
            config.player_x,
            Vec2::new(config.player_width, config.player_height),
            viewport.ground_line(),
        ),));
        (world, config, viewport, InputState::new(), Events::new())
    }

    fn player(world: &World) -> Player {
        world
            .query::<&Player>()
            .iter()
            .map(|(_e, p)| *p)
            .next()
            .unwrap()
    }

    fn tick(world: &mut World, input: &InputState, viewport: &Viewport, config: &Config) -> Events {
        let mut events = Events::new();
        update_player(world, input, viewport, config, &mut events);
        events
    }

    #[test]
    fn test_grounded_player_stays_pinned() {
        let (mut world, config, viewport, input, _events) = setup();
        for _ in 0..30 {
            tick(&mut world, &input, &viewport, &config);
            let p = player(&world);
            assert_eq!(p.vy, 0.0);
            assert_eq!(p.pos.y, viewport.ground_line() - p.size.y);
            assert!(p.grounded);
        }
    }

    #[test]
    fn test_airborne_player_falls_and_lands() {
        let (mut world, config, viewport, input, _events) = setup();
        for (_e, p) in world.query_mut::<&mut Player>() {
            p.pos.y = 100.0;
            p.grounded = false;
        }

        tick(&mut world, &input, &viewport, &config);
        assert_eq!(player(&world).vy, config.gravity, "Gravity applies while airborne");

        for _ in 0..100 {
            tick(&mut world, &input, &viewport, &config);
        }
        let p = player(&world);
        assert!(p.grounded);
        assert_eq!(p.pos.y, viewport.ground_line() - p.size.y);
    }

    #[test]
    fn test_take_off_fires_once() {
        let (mut world, config, viewport, mut input, _events) = setup();
        input.set(Control::Jump, true);

        let events = tick(&mut world, &input, &viewport, &config);
        assert!(events.jumped, "Take-off should trigger the jump cue");
        assert_eq!(player(&world).jump_timer, 1);

        for _ in 0..10 {
            let events = tick(&mut world, &input, &viewport, &config);
            assert!(!events.jumped, "Holding must not re-trigger the cue");
        }
    }

    #[test]
    fn test_take_off_tick_skips_gravity() {
        let (mut world, config, viewport, mut input, _events) = setup();
        input.set(Control::Jump, true);
        tick(&mut world, &input, &viewport, &config);

        let p = player(&world);
        assert_eq!(p.pos.y, viewport.ground_line() - p.size.y + config.jump_force);
        assert_eq!(p.vy, 0.0, "Grounded branch zeroes velocity on the take-off tick");
        assert!(!p.grounded);
    }

    #[test]
    fn test_jump_timer_caps() {
        let (mut world, config, viewport, mut input, _events) = setup();
        input.set(Control::Jump, true);

        for expected in 1..=config.jump_hold_ticks {
            tick(&mut world, &input, &viewport, &config);
            assert_eq!(player(&world).jump_timer, expected);
        }
        for _ in 0..5 {
            tick(&mut world, &input, &viewport, &config);
            assert_eq!(player(&world).jump_timer, config.jump_hold_ticks);
        }
    }

    #[test]
    fn test_release_resets_timer() {
        let (mut world, config, viewport, mut input, _events) = setup();
        input.set(Control::Jump, true);
        for _ in 0..4 {
            tick(&mut world, &input, &viewport, &config);
        }
        input.set(Control::Jump, false);
        tick(&mut world, &input, &viewport, &config);
        assert_eq!(player(&world).jump_timer, 0);
    }

    #[test]
    fn test_sustain_formula() {
        let config = Config::new();
        let mut p = Player::new(0.0, Vec2::splat(80.0), 500.0);
        p.jump_timer = 3;
        assert!(!jump(&mut p, &config));
        assert_eq!(p.jump_timer, 4);
        assert_eq!(p.vy, config.jump_force - 4.0 / config.jump_taper);
    }

    #[test]
    fn test_held_jump_climbs_higher_than_tap() {
        fn peak(hold_ticks: u32) -> f32 {
            let (mut world, config, viewport, mut input, _events) = setup();
            let start = player(&world).pos.y;
            let mut highest = start;
            for i in 0..200 {
                input.set(Control::Jump, i < hold_ticks);
                tick(&mut world, &input, &viewport, &config);
                highest = highest.min(player(&world).pos.y);
            }
            start - highest
        }

        let tap = peak(1);
        let held = peak(15);
        assert!(tap > 0.0);
        assert!(held > tap, "Held jump {held} should beat tap {tap}");
        assert_eq!(peak(15), peak(25), "Holding past the cap adds nothing");
    }

    #[test]
    fn test_must_release_before_next_jump() {
        let (mut world, config, viewport, mut input, _events) = setup();
        input.set(Control::Jump, true);
        let mut takeoffs = 0;
        for _ in 0..300 {
            if tick(&mut world, &input, &viewport, &config).jumped {
                takeoffs += 1;
            }
        }
        assert_eq!(takeoffs, 1, "Landing with the key held does not re-jump");
        assert!(player(&world).grounded);
    }
}
