use super::config::TrailConfig;
use super::surface::Surface;
use glam::DVec2;
use rand::Rng;

/// A point mass in a trail.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Node {
    pub pos: DVec2,
    pub vel: DVec2,
}

/// A chain of spring-connected nodes following a target point.
///
/// The node count is fixed at construction; updates only move nodes.
#[derive(Clone, Debug)]
pub struct Trail {
    spring: f64,
    friction: f64,
    nodes: Vec<Node>,
}

impl Trail {
    /// Build a trail around `base_spring` with the config's friction, each
    /// jittered independently so no two trails relax at the same rate. All
    /// nodes start at rest on `origin`.
    pub fn new<R: Rng + ?Sized>(
        base_spring: f64,
        config: &TrailConfig,
        origin: DVec2,
        rng: &mut R,
    ) -> Self {
        let sj = config.spring_jitter;
        let fj = config.friction_jitter;
        let spring = base_spring + rng.gen_range(-sj..=sj);
        let friction = config.friction + rng.gen_range(-fj..=fj);
        Self::with_coefficients(spring, friction, config.size, origin)
    }

    /// Build a trail with exact coefficients.
    pub fn with_coefficients(spring: f64, friction: f64, size: usize, origin: DVec2) -> Self {
        let node = Node {
            pos: origin,
            vel: DVec2::ZERO,
        };
        Self {
            spring,
            friction,
            nodes: vec![node; size],
        }
    }

    /// One relaxation step, strictly head to tail.
    ///
    /// The head is pulled toward `target`; every later node toward the
    /// previous node as already moved during this same step, and it inherits
    /// `dampening` of that node's fresh velocity. The spring factor is scaled
    /// by `tension` after each node.
    pub fn update(&mut self, target: DVec2, dampening: f64, tension: f64) {
        let mut k = self.spring;
        let mut prev: Option<Node> = None;
        for node in self.nodes.iter_mut() {
            match prev {
                None => node.vel += (target - node.pos) * k,
                Some(p) => {
                    node.vel += (p.pos - node.pos) * k;
                    node.vel += p.vel * dampening;
                }
            }
            node.vel *= self.friction;
            node.pos += node.vel;
            prev = Some(*node);
            k *= tension;
        }
    }

    /// Stroke the trail as one smooth open path: quadratic segments through
    /// midpoints of consecutive nodes, ending exactly on the last node.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let n = self.nodes.len();
        if n < 2 {
            return;
        }
        let first = self.nodes[0].pos;
        surface.begin_path();
        surface.move_to(first.x, first.y);

        for pair in self.nodes[1..n - 1].windows(2) {
            let (c, next) = (pair[0].pos, pair[1].pos);
            let mid = (c + next) * 0.5;
            surface.quadratic_curve_to(c.x, c.y, mid.x, mid.y);
        }

        let c = self.nodes[n - 2].pos;
        let last = self.nodes[n - 1].pos;
        surface.quadratic_curve_to(c.x, c.y, last.x, last.y);
        surface.stroke();
        surface.close_path();
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub fn head(&self) -> Option<Node> {
        self.nodes.first().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn spring(&self) -> f64 {
        self.spring
    }

    #[inline]
    pub fn friction(&self) -> f64 {
        self.friction
    }
}
