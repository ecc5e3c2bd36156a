pub mod components;
pub mod config;
pub mod fsm;
pub mod game;
pub mod host;
pub mod input;
pub mod map;
pub mod params;
pub mod resources;
pub mod run;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use game::*;
pub use host::*;
pub use input::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use run::*;

use systems::*;

/// Advance a run by one fixed tick
pub fn step(
    run: &mut RunState,
    input: &InputState,
    viewport: &Viewport,
    config: &Config,
    rng: &mut GameRng,
) {
    if run.game_over {
        return;
    }

    // Clear events at start of tick
    run.events.clear();

    // 1. Background clouds (cosmetic)
    spawn_clouds(&mut run.world, run.speed, viewport, config, rng);
    scroll_clouds(&mut run.world, viewport, rng);

    // 2. Player input and physics
    update_player(&mut run.world, input, viewport, config, &mut run.events);

    // 3. Obstacles: spawn, scroll, award pass-through
    spawn_obstacles(&mut run.world, run.frame, viewport, config, rng);
    move_obstacles(&mut run.world, &mut run.score, &mut run.speed, config);

    // 4. Collision ends the run
    check_collisions(&run.world, &mut run.events);
    if run.events.collided {
        run.game_over = true;
    }

    // 5. Drop obstacles that left the screen
    despawn_offscreen(&mut run.world);

    run.frame += 1;
}
