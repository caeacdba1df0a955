// Recording surface shared by the host-side tests.

#![allow(dead_code)]

use trail_canvas::core::{Blend, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    SetSize(u32, u32),
    Blend(Blend),
    Clear,
    StrokeStyle(String),
    LineWidth(f64),
    BeginPath,
    MoveTo(f64, f64),
    Quad(f64, f64, f64, f64),
    Stroke,
    ClosePath,
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub width: u32,
    pub height: u32,
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn count(&self, want: &Op) -> usize {
        self.ops
            .iter()
            .filter(|op| std::mem::discriminant(*op) == std::mem::discriminant(want))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }
    fn height(&self) -> u32 {
        self.height
    }
    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.ops.push(Op::SetSize(width, height));
    }
    fn set_blend(&mut self, blend: Blend) {
        self.ops.push(Op::Blend(blend));
    }
    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }
    fn set_stroke_style(&mut self, style: &str) {
        self.ops.push(Op::StrokeStyle(style.to_string()));
    }
    fn set_line_width(&mut self, width: f64) {
        self.ops.push(Op::LineWidth(width));
    }
    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::MoveTo(x, y));
    }
    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.ops.push(Op::Quad(cx, cy, x, y));
    }
    fn stroke(&mut self) {
        self.ops.push(Op::Stroke);
    }
    fn close_path(&mut self) {
        self.ops.push(Op::ClosePath);
    }
}
