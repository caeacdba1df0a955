use super::constants::*;
use super::oscillator::OscillatorConfig;

/// Everything that shapes the trail pool, its physics and its stroke.
#[derive(Clone, Debug, PartialEq)]
pub struct TrailConfig {
    pub trails: usize,
    pub size: usize,
    pub friction: f64,
    pub dampening: f64,
    pub tension: f64,
    pub spring_base: f64,
    pub spring_spread: f64,
    pub spring_jitter: f64,
    pub friction_jitter: f64,
    pub line_width: f64,
    pub stroke_alpha: f64,
    pub viewport_margin: u32,
    /// Phase is re-randomised on every start; the other fields are used as-is.
    pub hue: OscillatorConfig,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            trails: TRAIL_COUNT,
            size: TRAIL_NODES,
            friction: FRICTION,
            dampening: DAMPENING,
            tension: TENSION,
            spring_base: SPRING_BASE,
            spring_spread: SPRING_SPREAD,
            spring_jitter: SPRING_JITTER,
            friction_jitter: FRICTION_JITTER,
            line_width: LINE_WIDTH,
            stroke_alpha: STROKE_ALPHA,
            viewport_margin: VIEWPORT_MARGIN_PX,
            hue: OscillatorConfig {
                phase: 0.0,
                offset: HUE_OFFSET,
                frequency: HUE_FREQUENCY,
                amplitude: HUE_AMPLITUDE,
            },
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("trail pool must hold at least one trail")]
    EmptyPool,
    #[error("trails need at least {min} nodes, got {got}")]
    TrailTooShort { got: usize, min: usize },
    #[error("`{name}` must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },
    #[error("jitter `{name}` must be non-negative, got {value}")]
    NegativeJitter { name: &'static str, value: f64 },
}

impl TrailConfig {
    /// Check the invariants `Animator` relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trails == 0 {
            return Err(ConfigError::EmptyPool);
        }
        if self.size < MIN_TRAIL_NODES {
            return Err(ConfigError::TrailTooShort {
                got: self.size,
                min: MIN_TRAIL_NODES,
            });
        }
        let finite = [
            ("friction", self.friction),
            ("dampening", self.dampening),
            ("tension", self.tension),
            ("spring_base", self.spring_base),
            ("spring_spread", self.spring_spread),
            ("spring_jitter", self.spring_jitter),
            ("friction_jitter", self.friction_jitter),
            ("line_width", self.line_width),
            ("stroke_alpha", self.stroke_alpha),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
        }
        for (name, value) in [
            ("spring_jitter", self.spring_jitter),
            ("friction_jitter", self.friction_jitter),
        ] {
            if value < 0.0 {
                return Err(ConfigError::NegativeJitter { name, value });
            }
        }
        Ok(())
    }

    /// Base spring constant for the trail at `index` in a pool of `self.trails`.
    #[inline]
    pub fn spring_for(&self, index: usize) -> f64 {
        self.spring_base + (index as f64 / self.trails as f64) * self.spring_spread
    }
}
