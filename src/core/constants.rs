/// Trail physics and rendering tuning constants.
///
/// These are the defaults behind `TrailConfig::default()` and keep magic
/// numbers out of the update and draw code.
// Pool layout
pub const TRAIL_COUNT: usize = 80;
pub const TRAIL_NODES: usize = 50;
pub const MIN_TRAIL_NODES: usize = 2; // draw needs a penultimate and a last node

// Chain physics
pub const FRICTION: f64 = 0.5; // velocity multiplier applied every tick
pub const DAMPENING: f64 = 0.025; // share of the previous node's velocity passed down
pub const TENSION: f64 = 0.99; // spring factor decay per node along the chain

// Per-trail spring distribution across the pool
pub const SPRING_BASE: f64 = 0.45;
pub const SPRING_SPREAD: f64 = 0.025; // added linearly from first to last trail

// Per-trail random jitter (half-widths of a uniform range)
pub const SPRING_JITTER: f64 = 0.05;
pub const FRICTION_JITTER: f64 = 0.005;

// Stroke
pub const LINE_WIDTH: f64 = 10.0;
pub const STROKE_ALPHA: f64 = 0.025; // low so overlapping strokes build up under "lighter"

// Hue oscillator
pub const HUE_OFFSET: f64 = 285.0;
pub const HUE_AMPLITUDE: f64 = 85.0;
pub const HUE_FREQUENCY: f64 = 0.0015;

// Oscillator construction defaults
pub const OSC_DEFAULT_PHASE: f64 = 0.0;
pub const OSC_DEFAULT_OFFSET: f64 = 0.0;
pub const OSC_DEFAULT_FREQUENCY: f64 = 0.001;
pub const OSC_DEFAULT_AMPLITUDE: f64 = 1.0;

// Canvas backing size is the viewport minus this many pixels horizontally
pub const VIEWPORT_MARGIN_PX: u32 = 20;

// Element id the original page mounted the background on
pub const DEFAULT_CANVAS_ID: &str = "canvas";
