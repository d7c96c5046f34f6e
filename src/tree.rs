//! Recursive fractal tree.
//!
//! Every call draws its spine, the two lines joining the new branch points
//! back to the spine's end, and then recurses into both branches with one
//! order less. Order 1 draws only the spine.

use std::f64::consts::PI;

pub const PANEL_WIDTH: f64 = 400.0;
pub const PANEL_HEIGHT: f64 = 400.0;

/// Base of the trunk.
pub const LEFT: Point = Point::new(200.0, 375.0);
/// Top of the trunk, where the first two branches start.
pub const TOP: Point = Point::new(200.0, 250.0);

/// Angle between a branch and its parent.
pub const SPREAD: f64 = PI / 9.0;
pub const LENGTH_RATIO: f64 = 2.0 / 3.0;

pub const DEFAULT_ORDER: u32 = 8;
pub const MAX_ORDER: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from unbounded components, saturating each to `0..=255`.
    pub fn clamped(r: i64, g: i64, b: i64) -> Self {
        let c = |v: i64| v.clamp(0, 255) as u8;
        Self::new(c(r), c(g), c(b))
    }
}

/// Color of one recursion step.
///
/// * red follows the order relative to `max_order`,
/// * green follows the branch angle,
/// * blue follows the height of the segment start, in whole panel heights.
///
/// All divisions truncate toward zero.
pub fn segment_color(order: u32, max_order: u32, angle: f64, start: Point) -> Rgb {
    let red = if max_order == 0 {
        255
    } else {
        255 * i64::from(order) / i64::from(max_order)
    };
    let green = 128 + (angle.to_degrees() as i64) / 2;
    let blue = 255 - 255 * ((start.y as i64) / PANEL_HEIGHT as i64);
    Rgb::clamped(red, green, blue)
}

/// Something lines can be drawn on.
pub trait Surface {
    fn set_color(&mut self, color: Rgb);
    /// Draws a line in the current color.
    fn draw_line(&mut self, from: Point, to: Point);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn set_color(&mut self, color: Rgb) {
        (**self).set_color(color)
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        (**self).draw_line(from, to)
    }
}

/// The two points a spine ending at `end` branches out to, at `angle ± SPREAD`.
pub fn branch_points(start: Point, end: Point, angle: f64) -> (Point, Point) {
    let dist = LENGTH_RATIO * (end.x - start.x).hypot(end.y - start.y);
    let branch = |a: f64| {
        let (sin, cos) = a.sin_cos();
        Point::new(end.x + dist * sin, end.y - dist * cos)
    };
    (branch(angle + SPREAD), branch(angle - SPREAD))
}

/// Draws one branch of the tree and everything below it.
///
/// `max_order` only normalizes the red channel and stays the same through
/// the whole recursion. Order 0, or a `max_order` of 0, draws nothing.
pub fn draw_branch<S: Surface + ?Sized>(
    order: u32,
    max_order: u32,
    start: Point,
    end: Point,
    surface: &mut S,
    angle: f64,
) {
    if order == 0 || max_order == 0 {
        return;
    }

    surface.set_color(segment_color(order, max_order, angle, start));
    surface.draw_line(start, end);
    if order == 1 {
        return;
    }

    let (plus, minus) = branch_points(start, end, angle);
    surface.draw_line(plus, end);
    surface.draw_line(minus, end);

    draw_branch(order - 1, max_order, end, plus, surface, angle + SPREAD);
    draw_branch(order - 1, max_order, end, minus, surface, angle - SPREAD);
}

/// Number of lines a pass of the given order draws.
pub fn line_count(order: u32) -> u64 {
    match order {
        0 => 0,
        // 2^(order-1) leaves with one line each, 2^(order-1) - 1 inner calls with three
        n if n < 64 => (u64::MAX >> (63 - n)) - 2,
        _ => u64::MAX,
    }
}

/// Holds the configured order and draws whole trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FractalRenderer {
    order: u32,
}

impl Default for FractalRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_ORDER)
    }
}

impl FractalRenderer {
    pub fn new(order: u32) -> Self {
        Self { order }
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    /// Takes effect on the next pass.
    pub fn set_order(&mut self, order: u32) {
        if order != self.order {
            tracing::debug!(from = self.order, to = order, "order changed");
        }
        self.order = order;
    }

    /// Like [`set_order`](Self::set_order), but refuses orders the viewer
    /// can't draw in reasonable time.
    pub fn try_set_order(&mut self, order: u32) -> crate::TreeResult<()> {
        if order > MAX_ORDER {
            return Err(crate::TreeError::OrderTooDeep {
                order,
                max: MAX_ORDER,
            });
        }
        self.set_order(order);
        Ok(())
    }

    /// Draws a subtree, normalizing colors against the configured order.
    pub fn render<S: Surface + ?Sized>(
        &self,
        order: u32,
        start: Point,
        end: Point,
        surface: &mut S,
        angle: f64,
    ) {
        draw_branch(order, self.order, start, end, surface, angle);
    }

    /// Draws the whole tree, trunk from [`LEFT`] up to [`TOP`].
    pub fn render_pass<S: Surface + ?Sized>(&self, surface: &mut S) {
        tracing::debug!(
            order = self.order,
            lines = line_count(self.order),
            "render pass"
        );
        self.render(self.order, LEFT, TOP, surface, 0.0);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub color: Rgb,
}

/// A surface that keeps every line drawn on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Segments {
    color: Rgb,
    segments: Vec<Segment>,
}

impl Default for Segments {
    fn default() -> Self {
        Self {
            color: Rgb::GREEN,
            segments: Vec::new(),
        }
    }
}

impl Segments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            segments: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Current pen color.
    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    pub fn as_slice(&self) -> &[Segment] {
        &self.segments
    }

    /// Drops the recorded lines and resets the pen, keeping the allocation.
    pub fn clear(&mut self) {
        self.segments.clear();
        self.color = Rgb::GREEN;
    }
}

impl Surface for Segments {
    fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        self.segments.push(Segment {
            start: from,
            end: to,
            color: self.color,
        });
    }
}
