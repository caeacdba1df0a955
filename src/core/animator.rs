use super::config::{ConfigError, TrailConfig};
use super::oscillator::{Oscillator, OscillatorConfig};
use super::surface::{stroke_color, viewport_backing_size, Blend, Surface};
use super::trail::Trail;
use glam::DVec2;
use rand::prelude::*;
use std::f64::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Stopped,
    Running,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    /// Nothing changed; callers must not install a second set of listeners.
    AlreadyRunning,
}

/// Owns all state of one trail background: pointer target, hue oscillator,
/// trail pool and run state.
///
/// The browser shell forwards pointer events into [`Animator::set_pointer`]
/// and calls [`Animator::tick`] once per animation frame.
pub struct Animator {
    config: TrailConfig,
    rng: StdRng,
    pointer: DVec2,
    hue: Oscillator,
    trails: Vec<Trail>,
    state: RunState,
    frame: u64,
}

impl Animator {
    pub fn new(config: TrailConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(config: TrailConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    fn with_rng(config: TrailConfig, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            hue: Oscillator::new(config.hue),
            config,
            rng,
            pointer: DVec2::ZERO,
            trails: Vec::new(),
            state: RunState::Stopped,
            frame: 0,
        })
    }

    /// Enter `Running` with a fresh hue oscillator and a fresh pool seated on
    /// the current pointer position. No-op when already running.
    pub fn start(&mut self) -> StartOutcome {
        if self.state == RunState::Running {
            return StartOutcome::AlreadyRunning;
        }
        self.hue = Oscillator::new(OscillatorConfig {
            phase: self.rng.gen_range(0.0..TAU),
            ..self.config.hue
        });
        self.rebuild_pool();
        self.frame = 1;
        self.state = RunState::Running;
        StartOutcome::Started
    }

    /// Returns whether the animator was running.
    pub fn stop(&mut self) -> bool {
        let was_running = self.state == RunState::Running;
        self.state = RunState::Stopped;
        was_running
    }

    fn rebuild_pool(&mut self) {
        let origin = self.pointer;
        let mut trails = Vec::with_capacity(self.config.trails);
        for i in 0..self.config.trails {
            let spring = self.config.spring_for(i);
            trails.push(Trail::new(spring, &self.config, origin, &mut self.rng));
        }
        self.trails = trails;
    }

    /// Render one frame. Returns `false` without touching anything when
    /// stopped, which tells the frame loop not to reschedule.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if self.state != RunState::Running {
            return false;
        }

        surface.set_blend(Blend::SourceOver);
        surface.clear();
        surface.set_blend(Blend::Lighter);
        let style = stroke_color(self.hue.value(), self.config.stroke_alpha);
        surface.set_stroke_style(&style);
        surface.set_line_width(self.config.line_width);

        let target = self.pointer;
        let (dampening, tension) = (self.config.dampening, self.config.tension);
        for trail in self.trails.iter_mut() {
            trail.update(target, dampening, tension);
            trail.draw(surface);
        }

        self.frame += 1;
        true
    }

    /// Size the surface to cover a viewport of `inner_width x inner_height`.
    /// Trails keep their positions.
    pub fn fit_viewport<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        inner_width: f64,
        inner_height: f64,
    ) {
        let (w, h) = viewport_backing_size(inner_width, inner_height, self.config.viewport_margin);
        surface.set_size(w, h);
    }

    #[inline]
    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = DVec2::new(x, y);
    }

    #[inline]
    pub fn pointer(&self) -> DVec2 {
        self.pointer
    }

    #[inline]
    pub fn trails(&self) -> &[Trail] {
        &self.trails
    }

    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    #[inline]
    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    #[inline]
    pub fn hue(&self) -> &Oscillator {
        &self.hue
    }
}
