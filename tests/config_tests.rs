// Host-side tests for configuration defaults, validation and constants.

use trail_canvas::core::*;

#[test]
fn defaults_validate() {
    let cfg = TrailConfig::default();
    assert_eq!(cfg.validate(), Ok(()));
    assert_eq!(cfg.trails, 80);
    assert_eq!(cfg.size, 50);
    assert_eq!(cfg.hue.offset, HUE_OFFSET);
}

#[test]
fn empty_pool_is_rejected() {
    let cfg = TrailConfig {
        trails: 0,
        ..Default::default()
    };
    assert_eq!(cfg.validate(), Err(ConfigError::EmptyPool));
}

#[test]
fn single_node_trails_are_rejected() {
    let cfg = TrailConfig {
        size: 1,
        ..Default::default()
    };
    let err = cfg.validate().unwrap_err();
    assert_eq!(err, ConfigError::TrailTooShort { got: 1, min: 2 });
    assert_eq!(err.to_string(), "trails need at least 2 nodes, got 1");
}

#[test]
fn non_finite_physics_is_rejected() {
    let cfg = TrailConfig {
        tension: f64::INFINITY,
        ..Default::default()
    };
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::NotFinite { name: "tension", .. })
    ));
}

#[test]
fn negative_jitter_is_rejected() {
    let cfg = TrailConfig {
        friction_jitter: -0.1,
        ..Default::default()
    };
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::NegativeJitter { name: "friction_jitter", .. })
    ));
}

#[test]
fn zero_jitter_builds_identical_trails() {
    let cfg = TrailConfig {
        trails: 4,
        spring_jitter: 0.0,
        friction_jitter: 0.0,
        spring_spread: 0.0,
        ..Default::default()
    };
    let mut a = Animator::new(cfg, 11).expect("valid config");
    a.start();
    for t in a.trails() {
        assert_eq!(t.spring(), SPRING_BASE);
        assert_eq!(t.friction(), FRICTION);
    }
}

#[test]
fn stroke_color_rounds_hue() {
    assert_eq!(stroke_color(284.5, 0.025), "hsla(285,100%,50%,0.025)");
    assert_eq!(stroke_color(200.4, 0.5), "hsla(200,100%,50%,0.5)");
}

#[test]
fn blend_names_match_canvas() {
    assert_eq!(Blend::SourceOver.as_str(), "source-over");
    assert_eq!(Blend::Lighter.as_str(), "lighter");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // Spring factor must decay along the chain
    assert!(TENSION > 0.0 && TENSION < 1.0);
    // Friction damps velocity, including worst-case jitter
    assert!(FRICTION + FRICTION_JITTER < 1.0);
    assert!(FRICTION - FRICTION_JITTER > 0.0);
    assert!(DAMPENING > 0.0 && DAMPENING < 0.1);
    // Jitter never flips a spring's sign
    assert!(SPRING_BASE - SPRING_JITTER > 0.0);
    // Hue sweep stays on the visible wheel
    assert!(HUE_OFFSET - HUE_AMPLITUDE >= 0.0);
    assert!(HUE_OFFSET + HUE_AMPLITUDE <= 720.0);
    assert!(STROKE_ALPHA > 0.0 && STROKE_ALPHA < 1.0);
    assert!(TRAIL_NODES >= MIN_TRAIL_NODES);
}
