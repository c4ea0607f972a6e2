//! Poolable projectile.

use crate::entities::BulletOwner;
use crate::geometry::{Body, GameObject, Position, Rect, Size, Vec2, Velocity};
use crate::render::{tier_color, Color, Surface};

const BASE_SIZE: Size = Size::new(4.0, 8.0);
/// Bullets survive this far past the field edge before deactivating.
const OFFSCREEN_MARGIN: f32 = 50.0;

#[derive(Clone, Debug)]
pub struct Bullet {
    body: Body,
    owner: BulletOwner,
    damage: u32,
    power_level: u32,
    field: Size,
}

impl Bullet {
    pub fn new(
        position: Position,
        owner: BulletOwner,
        speed: f32,
        power_level: u32,
        angle: f32,
        field: Size,
    ) -> Self {
        let mut bullet = Self {
            body: Body::new(position, BASE_SIZE, Vec2::ZERO),
            owner,
            damage: 1,
            power_level: 1,
            field,
        };
        bullet.reset(position, owner, speed, power_level, angle);
        bullet
    }

    /// Reinitialise every field in place so a pooled instance can be reused.
    ///
    /// `angle == 0` fires straight (up for the player, down for enemies).
    /// Any other angle is measured from straight up, clockwise, so `PI` is
    /// straight down.
    pub fn reset(
        &mut self,
        position: Position,
        owner: BulletOwner,
        speed: f32,
        power_level: u32,
        angle: f32,
    ) {
        let power_level = power_level.max(1);
        self.owner = owner;
        self.power_level = power_level;
        self.body.position = position;
        self.body.size = Self::size_for(power_level);
        self.body.velocity = Self::velocity_for(owner, speed, angle);
        self.damage = match owner {
            BulletOwner::Player => power_level,
            BulletOwner::Enemy => 1,
        };
        self.body.active = true;
    }

    /// 1×, 1.5×, 2×, … of the base size per power tier.
    pub fn size_for(power_level: u32) -> Size {
        let multiplier = 1.0 + (power_level.max(1) - 1) as f32 * 0.5;
        Size::new(
            (BASE_SIZE.width * multiplier).floor(),
            (BASE_SIZE.height * multiplier).floor(),
        )
    }

    fn velocity_for(owner: BulletOwner, speed: f32, angle: f32) -> Velocity {
        if angle != 0.0 {
            Vec2::new(angle.sin() * speed, -angle.cos() * speed)
        } else {
            match owner {
                BulletOwner::Player => Vec2::new(0.0, -speed),
                BulletOwner::Enemy => Vec2::new(0.0, speed),
            }
        }
    }

    pub fn owner(&self) -> BulletOwner {
        self.owner
    }

    pub fn damage(&self) -> u32 {
        self.damage
    }

    pub fn power_level(&self) -> u32 {
        self.power_level
    }
}

impl GameObject for Bullet {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update(&mut self, dt: f32) {
        self.body.advance(dt);

        let p = self.body.position;
        if p.x < -OFFSCREEN_MARGIN
            || p.x > self.field.width + OFFSCREEN_MARGIN
            || p.y < -OFFSCREEN_MARGIN
            || p.y > self.field.height + OFFSCREEN_MARGIN
        {
            self.body.active = false;
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        if !self.body.active {
            return;
        }
        let b = self.body.bounds();
        match self.owner {
            BulletOwner::Player => {
                surface.fill_rect(b, tier_color(self.power_level));
                // White core down the middle.
                let core_w = (b.width / 2.0).max(1.0);
                surface.fill_rect(
                    Rect::new(b.x + (b.width - core_w) / 2.0, b.y + 2.0, core_w, b.height - 4.0),
                    Color::WHITE,
                );
            }
            BulletOwner::Enemy if self.body.velocity.x != 0.0 => {
                // Angled boss shot: small diamond.
                let cx = b.x + b.width / 2.0;
                let cy = b.y + b.height / 2.0;
                surface.fill_rect(Rect::new(cx - 4.5, cy - 1.5, 9.0, 3.0), Color::EMBER);
                surface.fill_rect(Rect::new(cx - 1.5, cy - 4.5, 3.0, 9.0), Color::EMBER);
                surface.fill_rect(Rect::new(cx - 1.5, cy - 1.5, 3.0, 3.0), Color::ORANGE);
            }
            BulletOwner::Enemy => surface.fill_rect(b, Color::MAGENTA),
        }
    }
}
