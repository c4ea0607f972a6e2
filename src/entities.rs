//! Entity kinds, per-kind tables and the score record: pure data, no logic
//! beyond table lookups.

use serde::{Deserialize, Serialize};

use crate::geometry::Size;

// ── Enemy kinds ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Basic,
    Fast,
    Strong,
    Boss,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovePattern {
    /// No horizontal drift.
    Straight,
    /// Sinusoidal horizontal oscillation.
    Zigzag,
    /// Circular drift; bosses hover within a capped vertical band instead.
    Circle,
}

impl EnemyKind {
    pub fn size(self) -> Size {
        match self {
            EnemyKind::Basic => Size::new(25.0, 20.0),
            EnemyKind::Fast => Size::new(20.0, 15.0),
            EnemyKind::Strong => Size::new(35.0, 30.0),
            EnemyKind::Boss => Size::new(80.0, 80.0),
        }
    }

    pub fn base_health(self) -> i32 {
        match self {
            EnemyKind::Basic => 1,
            EnemyKind::Fast => 1,
            EnemyKind::Strong => 3,
            EnemyKind::Boss => 25,
        }
    }

    pub fn base_score(self) -> u32 {
        match self {
            EnemyKind::Basic => 100,
            EnemyKind::Fast => 200,
            EnemyKind::Strong => 300,
            EnemyKind::Boss => 5000,
        }
    }

    /// Minimum milliseconds between two shots.
    pub fn shoot_cooldown_ms(self) -> f32 {
        match self {
            EnemyKind::Basic => 2000.0,
            EnemyKind::Fast => 1500.0,
            EnemyKind::Strong => 2500.0,
            EnemyKind::Boss => 1200.0,
        }
    }

    pub fn move_pattern(self) -> MovePattern {
        match self {
            EnemyKind::Basic | EnemyKind::Strong => MovePattern::Straight,
            EnemyKind::Fast => MovePattern::Zigzag,
            EnemyKind::Boss => MovePattern::Circle,
        }
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulletOwner {
    Player,
    Enemy,
}

// ── Power-ups ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PowerUpKind {
    /// Permanent: one more multi-shot level (max 15).
    MultiShot,
    /// Instantly adds one life (max 5).
    ExtraLife,
    /// Double damage for 10 seconds.
    PowerUp,
    /// Absorbs up to 3 hits within 15 seconds.
    Shield,
}

impl PowerUpKind {
    /// Drop weights out of 100, in roll order.
    pub const WEIGHTS: [(PowerUpKind, u32); 4] = [
        (PowerUpKind::MultiShot, 40),
        (PowerUpKind::ExtraLife, 25),
        (PowerUpKind::PowerUp, 20),
        (PowerUpKind::Shield, 15),
    ];
}

// ── Difficulty & engine state ─────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Normal => "NORMAL",
            Difficulty::Hard => "HARD",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Title screen, waiting for the host to begin.
    Start,
    /// Difficulty selection screen.
    DifficultySelect,
    Playing,
    Paused,
    /// Boss encounter: like `Playing` but regular spawning is suspended.
    Boss,
    GameOver,
}

impl GameStatus {
    /// States in which the frame loop advances the simulation.
    pub fn is_running(self) -> bool {
        matches!(self, GameStatus::Playing | GameStatus::Boss)
    }
}

// ── Statistics ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct GameStats {
    pub score: u32,
    /// 0 ..= 5.
    pub lives: u32,
    /// Score-threshold driven, never decreases.
    pub level: u32,
    /// Advances once per defeated boss encounter.
    pub stage: u32,
    pub enemies_killed: u32,
    pub bullets_shot: u32,
    /// Kills per shot, in percent.
    pub accuracy: f32,
    pub difficulty: Difficulty,
    pub bosses_killed: u32,
    pub items_collected: u32,
    /// Simulation time (ms) at which the current level began.
    pub level_start_time: f64,
    /// Seconds.
    pub total_play_time: f32,
    /// Reset by any hit that reaches the player's lives.
    pub consecutive_hits: u32,
}

impl GameStats {
    pub fn new(difficulty: Difficulty, lives: u32) -> Self {
        Self {
            score: 0,
            lives,
            level: 1,
            stage: 1,
            enemies_killed: 0,
            bullets_shot: 0,
            accuracy: 0.0,
            difficulty,
            bosses_killed: 0,
            items_collected: 0,
            level_start_time: 0.0,
            total_play_time: 0.0,
            consecutive_hits: 0,
        }
    }
}

// ── Transient notifications ───────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    LevelUp,
    BossWarning,
    PowerUp,
}

/// On-screen banner that disappears after `remaining_ms`.
#[derive(Clone, Debug, PartialEq)]
pub struct GameMessage {
    pub text: String,
    pub kind: MessageKind,
    pub remaining_ms: f32,
}

impl GameMessage {
    pub fn new(text: impl Into<String>, kind: MessageKind, duration_ms: f32) -> Self {
        Self {
            text: text.into(),
            kind,
            remaining_ms: duration_ms,
        }
    }
}
