//! Scrolling background stars.  Purely decorative: nothing collides with them.

use rand::Rng;

use crate::geometry::{Rect, Size};
use crate::render::{Color, Surface};

#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    /// 1.0 ..= 3.0
    pub size: f32,
    /// Units per second, 20 ..= 70.
    pub speed: f32,
    /// 0.5 ..= 1.0
    pub brightness: f32,
}

impl Star {
    fn randomize(&mut self, rng: &mut impl Rng) {
        self.speed = rng.gen_range(20.0..70.0);
        self.brightness = rng.gen_range(0.5..1.0);
    }
}

#[derive(Clone, Debug)]
pub struct Starfield {
    stars: Vec<Star>,
    field: Size,
}

impl Starfield {
    pub fn new(count: usize, field: Size, rng: &mut impl Rng) -> Self {
        let stars = (0..count)
            .map(|_| Star {
                x: rng.gen::<f32>() * field.width,
                y: rng.gen::<f32>() * field.height,
                size: rng.gen_range(1.0..3.0),
                speed: rng.gen_range(20.0..70.0),
                brightness: rng.gen_range(0.5..1.0),
            })
            .collect();
        Self { stars, field }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Scroll down; a star past the bottom re-enters at the top at a random x.
    pub fn update(&mut self, dt: f32, rng: &mut impl Rng) {
        for star in &mut self.stars {
            star.y += star.speed * dt;
            if star.y > self.field.height + 5.0 {
                star.y = -5.0;
                star.x = rng.gen::<f32>() * self.field.width;
                star.randomize(rng);
            }
        }
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        for star in &self.stars {
            let color = Color::WHITE.dimmed(star.brightness);
            if star.size < 2.0 {
                surface.fill_rect(Rect::new(star.x, star.y, 1.0, 1.0), color);
            } else {
                // Larger stars draw as a small cross.
                let half = (star.size / 2.0).floor();
                surface.fill_rect(Rect::new(star.x, star.y, 1.0, star.size), color);
                surface.fill_rect(Rect::new(star.x - half, star.y + half, star.size, 1.0), color);
            }
        }
    }
}
