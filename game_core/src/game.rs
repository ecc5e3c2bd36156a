//! Session: state machine, current run, highscore and host side effects

use crate::{
    step, Config, Cue, Environment, FrameClock, FsmState, Frontend, GameAction, GameFsm, GameRng,
    Highscore, HighscoreStore, InputState, RunState, Viewport,
};

pub struct Game {
    pub env: Box<dyn Environment>,
    pub store: Box<dyn HighscoreStore>,
    pub frontend: Box<dyn Frontend>,
    pub fsm: GameFsm,
    pub run: RunState,
    pub highscore: Highscore,
    pub config: Config,
    pub viewport: Viewport,
    pub rng: GameRng,
    pub clock: FrameClock,
}

impl Game {
    pub fn new(
        env: Box<dyn Environment>,
        store: Box<dyn HighscoreStore>,
        mut frontend: Box<dyn Frontend>,
        config: Config,
        viewport: Viewport,
        seed: u64,
    ) -> Self {
        let best = match store.load() {
            Ok(best) => best.unwrap_or(0),
            Err(e) => {
                env.log(format!("Highscore unavailable, starting from 0: {e}"));
                0
            }
        };
        frontend.show_highscore(best);
        frontend.set_start_visible(true);

        let run = RunState::new(&config, &viewport);

        Self {
            env,
            store,
            frontend,
            fsm: GameFsm::new(),
            run,
            highscore: Highscore::new(best),
            config,
            viewport,
            rng: GameRng::new(seed),
            clock: FrameClock::new(),
        }
    }

    pub fn state(&self) -> FsmState {
        self.fsm.state()
    }

    /// Start button. Returns false if not on the start screen.
    pub fn start(&mut self) -> bool {
        if !self.apply(GameAction::Start) {
            return false;
        }
        self.begin_run();
        true
    }

    /// Restart button. Returns false unless the last run is over.
    pub fn restart(&mut self) -> bool {
        if !self.apply(GameAction::Restart) {
            return false;
        }
        self.frontend.set_game_over_visible(false);
        self.begin_run();
        true
    }

    /// Drive the state machine, logging rejected actions
    fn apply(&mut self, action: GameAction) -> bool {
        let result = self.fsm.transition(action);
        if result.success {
            self.env.log(format!(
                "{:?}: {:?} -> {:?}",
                result.action, result.from_state, result.to_state
            ));
        } else {
            self.env.log(format!(
                "Ignored {:?} in {:?}",
                result.action, result.from_state
            ));
        }
        result.success
    }

    fn begin_run(&mut self) {
        self.run = RunState::restarted(&self.config, &self.viewport);
        self.clock.reset();
        self.frontend.rewind_music();
        self.frontend.set_start_visible(false);
        self.frontend.start_music();
        self.env.log(format!("Run started at speed {}", self.run.speed));
    }

    /// Run every tick due at `now_ms`. Returns true while another frame should be scheduled.
    pub fn frame(&mut self, now_ms: f64, input: &InputState) -> bool {
        if !self.fsm.is_playing() {
            return false;
        }

        let ticks = self.clock.advance(now_ms, &self.config);
        for _ in 0..ticks {
            self.tick(input);
            if !self.fsm.is_playing() {
                break;
            }
        }
        self.fsm.is_playing()
    }

    /// One simulation tick plus its audio and HUD effects
    pub fn tick(&mut self, input: &InputState) {
        if !self.fsm.is_playing() {
            return;
        }

        step(
            &mut self.run,
            input,
            &self.viewport,
            &self.config,
            &mut self.rng,
        );

        if self.run.events.jumped {
            self.frontend.play(Cue::Jump);
        }
        if self.run.events.collided {
            self.game_over();
        }

        self.frontend.show_score(self.run.score.points);
        self.frontend.show_highscore(self.highscore.best);
    }

    fn game_over(&mut self) {
        self.apply(GameAction::Collide);
        self.frontend.stop_music();
        self.frontend.play(Cue::Collision);
        self.frontend.set_game_over_visible(true);

        let score = self.run.score;
        self.frontend.show_final_score(score.points);
        self.env.log(format!("Game over with score {}", score.points));

        if self.highscore.record(score) {
            let best = self.highscore.best;
            if let Err(e) = self.store.save(best) {
                self.env.log(format!("Failed to persist highscore {best}: {e}"));
            }
            self.frontend.show_highscore(best);
            self.env.log(format!("New highscore: {best}"));
        }
    }

    /// Host resized the drawing surface
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.run.snap_player_to_ground(&viewport);
    }
}
