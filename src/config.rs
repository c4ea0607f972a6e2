//! Tunable constants: the play-field and engine defaults, and the three
//! difficulty presets.

use serde::{Deserialize, Serialize};

use crate::entities::Difficulty;

// ── Engine configuration ──────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Logical play-field width.  Stays fixed when the host resizes.
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub player_speed: f32,
    pub bullet_speed: f32,
    pub enemy_speed: f32,
    /// Default regular-spawn interval in ms (superseded by the difficulty).
    pub enemy_spawn_rate: f32,
    pub max_lives: u32,
    /// Bullets pre-built in the pool.
    pub bullet_pool_size: usize,
    pub star_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 600.0,
            player_speed: 300.0,
            bullet_speed: 500.0,
            enemy_speed: 100.0,
            enemy_spawn_rate: 2000.0,
            max_lives: 3,
            bullet_pool_size: 150,
            star_count: 150,
        }
    }
}

// ── Difficulty presets ────────────────────────────────────────────────────────

/// Snapshot taken when a difficulty is picked.  `enemy_spawn_rate` keeps
/// shrinking during play as levels rise.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DifficultyConfig {
    pub enemy_speed: f32,
    /// Milliseconds between regular spawns.
    pub enemy_spawn_rate: f32,
    pub enemy_health: f32,
    /// Chance (0..1) that a spawned enemy carries a power-up.
    pub power_up_drop_rate: f64,
    pub score_multiplier: f32,
}

impl DifficultyConfig {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self {
                enemy_speed: 70.0,
                enemy_spawn_rate: 1500.0,
                enemy_health: 0.8,
                power_up_drop_rate: 0.25,
                score_multiplier: 0.8,
            },
            Difficulty::Normal => Self {
                enemy_speed: 100.0,
                enemy_spawn_rate: 1200.0,
                enemy_health: 1.0,
                power_up_drop_rate: 0.15,
                score_multiplier: 1.0,
            },
            Difficulty::Hard => Self {
                enemy_speed: 140.0,
                enemy_spawn_rate: 800.0,
                enemy_health: 1.2,
                power_up_drop_rate: 0.1,
                score_multiplier: 1.5,
            },
        }
    }
}
