use super::constants::{
    OSC_DEFAULT_AMPLITUDE, OSC_DEFAULT_FREQUENCY, OSC_DEFAULT_OFFSET, OSC_DEFAULT_PHASE,
};

/// Construction parameters for an [`Oscillator`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OscillatorConfig {
    pub phase: f64,
    pub offset: f64,
    pub frequency: f64,
    pub amplitude: f64,
}

impl Default for OscillatorConfig {
    fn default() -> Self {
        Self {
            phase: OSC_DEFAULT_PHASE,
            offset: OSC_DEFAULT_OFFSET,
            frequency: OSC_DEFAULT_FREQUENCY,
            amplitude: OSC_DEFAULT_AMPLITUDE,
        }
    }
}

/// Sine oscillator advanced by a fixed phase step on every read.
///
/// Phase is never wrapped; `sin` takes care of periodicity. Precision slowly
/// degrades once phase grows very large.
#[derive(Clone, Debug)]
pub struct Oscillator {
    phase: f64,
    offset: f64,
    frequency: f64,
    amplitude: f64,
}

impl Oscillator {
    /// A zero frequency or amplitude is treated as unset and replaced by the
    /// default, so a config can never build a frozen or flat oscillator.
    pub fn new(config: OscillatorConfig) -> Self {
        let or_default = |v: f64, d: f64| if v == 0.0 || !v.is_finite() { d } else { v };
        Self {
            phase: if config.phase.is_finite() { config.phase } else { OSC_DEFAULT_PHASE },
            offset: if config.offset.is_finite() { config.offset } else { OSC_DEFAULT_OFFSET },
            frequency: or_default(config.frequency, OSC_DEFAULT_FREQUENCY),
            amplitude: or_default(config.amplitude, OSC_DEFAULT_AMPLITUDE),
        }
    }

    /// Advance by one step and return `offset + amplitude * sin(phase)`.
    #[inline]
    pub fn value(&mut self) -> f64 {
        self.phase += self.frequency;
        self.offset + self.amplitude * self.phase.sin()
    }

    #[inline]
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Inclusive output range.
    #[inline]
    pub fn bounds(&self) -> (f64, f64) {
        let a = self.amplitude.abs();
        (self.offset - a, self.offset + a)
    }
}

impl Default for Oscillator {
    fn default() -> Self {
        Self::new(OscillatorConfig::default())
    }
}
