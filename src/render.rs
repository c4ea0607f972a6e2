//! Boundary traits for everything the simulation draws or announces.
//!
//! The engine never owns a display.  It is handed a [`Surface`] on every
//! `render` call and, optionally, a [`UiSink`] and an [`AdNotifier`] at
//! construction.  An absent sink is simply skipped.

use crate::geometry::Rect;

// ── Colour palette ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x0a);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const CYAN: Color = Color::rgb(0x00, 0xff, 0xff);
    pub const YELLOW: Color = Color::rgb(0xff, 0xff, 0x00);
    pub const ORANGE: Color = Color::rgb(0xff, 0x88, 0x00);
    pub const PINK: Color = Color::rgb(0xff, 0x00, 0x88);
    pub const PURPLE: Color = Color::rgb(0x88, 0x00, 0xff);
    pub const RED: Color = Color::rgb(0xff, 0x00, 0x00);
    pub const GREEN: Color = Color::rgb(0x00, 0xff, 0x00);
    pub const GOLD: Color = Color::rgb(0xff, 0xd7, 0x00);
    pub const SKY: Color = Color::rgb(0x00, 0xbf, 0xff);
    pub const MAGENTA: Color = Color::rgb(0xff, 0x00, 0x66);
    pub const EMBER: Color = Color::rgb(0xff, 0x33, 0x00);

    /// Scale every channel by `factor` (0.0 ..= 1.0).
    pub fn dimmed(self, factor: f32) -> Self {
        let f = factor.clamp(0.0, 1.0);
        Self::rgb(
            (self.r as f32 * f) as u8,
            (self.g as f32 * f) as u8,
            (self.b as f32 * f) as u8,
        )
    }
}

/// Colour for a weapon power tier; tiers past the table stay white.
pub fn tier_color(tier: u32) -> Color {
    const TIERS: [Color; 7] = [
        Color::CYAN,
        Color::YELLOW,
        Color::ORANGE,
        Color::PINK,
        Color::PURPLE,
        Color::RED,
        Color::WHITE,
    ];
    let idx = (tier.max(1) - 1) as usize;
    TIERS[idx.min(TIERS.len() - 1)]
}

// ── Drawing surface ───────────────────────────────────────────────────────────

/// A 2D target addressed in logical play-field coordinates.
pub trait Surface {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_rect(&mut self, rect: Rect, color: Color);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: Color);
}

/// Discards every draw call.  Useful for headless runs.
#[derive(Debug, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear(&mut self, _color: Color) {}
    fn fill_rect(&mut self, _rect: Rect, _color: Color) {}
    fn stroke_rect(&mut self, _rect: Rect, _color: Color) {}
    fn fill_text(&mut self, _text: &str, _x: f32, _y: f32, _color: Color) {}
}

// ── UI text sinks ─────────────────────────────────────────────────────────────

/// Named outputs the engine pushes into once per frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UiField {
    Score,
    Lives,
    Stage,
    Level,
    MissileCount,
    MissileTier,
    ItemsCount,
    PoolActive,
    PoolTotal,
    BossHealth,
    PowerUpTime,
    ShieldHits,
    FinalScore,
    Notification,
    // Panels that are only shown or hidden.
    BossPanel,
    PowerUpStatus,
    ShieldStatus,
    StartScreen,
    DifficultyScreen,
    GameOverScreen,
}

/// One-way push of HUD values.  There is no read-back.
pub trait UiSink {
    fn set_text(&mut self, field: UiField, text: &str);

    fn set_visible(&mut self, _field: UiField, _visible: bool) {}
}

// ── Ad collaborator ───────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AdSlot {
    TopBanner,
    BottomBanner,
    Sidebar,
}

/// Notified at game start, game over and boss start.  Never influences the
/// simulation.
pub trait AdNotifier {
    fn set_visible(&mut self, slot: AdSlot, visible: bool);

    fn boss_encounter_started(&mut self) {}
}
