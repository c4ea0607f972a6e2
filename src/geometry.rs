//! Shared spatial types and the single collision primitive.

use crate::render::Surface;

// ── Vectors & rectangles ──────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance_to(self, other: Vec2) -> f32 {
        Vec2::new(other.x - self.x, other.y - self.y).length()
    }
}

/// Top-left corner of an entity, in logical play-field units.
pub type Position = Vec2;
/// Units per second.
pub type Velocity = Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Strict overlap on both axes.  Rectangles that only share an edge do
    /// not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

// ── Body ──────────────────────────────────────────────────────────────────────

/// Position, size, velocity and liveness shared by every entity kind.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub position: Position,
    pub size: Size,
    pub velocity: Velocity,
    /// `false` marks the entity as logically dead: it is dropped from the
    /// engine's lists on the next pass and never rendered.
    pub active: bool,
}

impl Body {
    pub fn new(position: Position, size: Size, velocity: Velocity) -> Self {
        Self {
            position,
            size,
            velocity,
            active: true,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.size.width,
            self.size.height,
        )
    }

    pub fn center_x(&self) -> f32 {
        self.position.x + self.size.width / 2.0
    }

    /// Integrate velocity over `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.position.x += self.velocity.x * dt;
        self.position.y += self.velocity.y * dt;
    }

    /// True once the box lies entirely outside `[0, width] × [0, height]`.
    pub fn is_out_of_bounds(&self, width: f32, height: f32) -> bool {
        self.position.x + self.size.width < 0.0
            || self.position.x > width
            || self.position.y + self.size.height < 0.0
            || self.position.y > height
    }
}

// ── GameObject capability ─────────────────────────────────────────────────────

/// Behaviour every simulated entity exposes to the engine.
pub trait GameObject {
    fn body(&self) -> &Body;
    fn body_mut(&mut self) -> &mut Body;

    /// Advance movement and timers by `dt` seconds.
    fn update(&mut self, dt: f32);

    /// Draw onto `surface`.  Inactive entities draw nothing.
    fn render(&self, surface: &mut dyn Surface);

    fn bounds(&self) -> Rect {
        self.body().bounds()
    }

    fn is_active(&self) -> bool {
        self.body().active
    }

    fn deactivate(&mut self) {
        self.body_mut().active = false;
    }
}

/// Bounding-box overlap between any two entities.  No swept test: fast
/// movers can pass through each other between frames.
pub fn check_collision<A, B>(a: &A, b: &B) -> bool
where
    A: GameObject + ?Sized,
    B: GameObject + ?Sized,
{
    a.bounds().intersects(&b.bounds())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        let c = Rect::new(9.5, 9.5, 10.0, 10.0);
        assert!(a.intersects(&c));
    }

    #[test]
    fn out_of_bounds_needs_whole_box_outside() {
        let mut body = Body::new(Vec2::new(-5.0, 10.0), Size::new(10.0, 10.0), Vec2::ZERO);
        assert!(!body.is_out_of_bounds(800.0, 600.0));
        body.position.x = -10.5;
        assert!(body.is_out_of_bounds(800.0, 600.0));
        body.position = Vec2::new(100.0, 600.5);
        assert!(body.is_out_of_bounds(800.0, 600.0));
    }
}
