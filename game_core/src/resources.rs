use crate::config::Config;

/// Turns host timestamps into whole fixed-rate simulation ticks
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
    accumulator: f32, // Seconds not yet simulated
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous timestamp; the next advance yields one tick
    pub fn reset(&mut self) {
        self.last_ms = None;
        self.accumulator = 0.0;
    }

    /// Number of ticks due at `now_ms`
    pub fn advance(&mut self, now_ms: f64, config: &Config) -> u32 {
        let fixed_dt = config.fixed_dt();
        let dt = match self.last_ms {
            None => fixed_dt,
            Some(last) => (((now_ms - last) / 1000.0) as f32).clamp(0.0, config.max_frame_dt),
        };
        self.last_ms = Some(now_ms);
        self.accumulator += dt;

        let mut ticks = 0;
        while self.accumulator >= fixed_dt {
            self.accumulator -= fixed_dt;
            ticks += 1;
        }
        ticks
    }
}

/// Points scored in the current run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub points: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) {
        self.points += 1;
    }
}

/// Best score across runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Highscore {
    pub best: u32,
}

impl Highscore {
    pub fn new(best: u32) -> Self {
        Self { best }
    }

    /// Record a finished run. Returns true if it set a new record.
    pub fn record(&mut self, score: Score) -> bool {
        if score.points > self.best {
            self.best = score.points;
            true
        } else {
            false
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Uniform value in [0, 1)
    pub fn unit(&mut self) -> f32 {
        use rand::Rng;
        self.0.gen::<f32>()
    }

    /// Uniform index in [0, len)
    pub fn index(&mut self, len: usize) -> usize {
        use rand::Rng;
        self.0.gen_range(0..len)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub jumped: bool,
    pub collided: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.jumped = false;
        self.collided = false;
    }
}
