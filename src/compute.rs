//! Pure game-rule functions.
//!
//! Nothing here touches engine state.  Every function takes plain values
//! (and, where needed, an RNG handle) and returns a plain value, so the
//! engine composes them and tests can pin each rule down with a seeded RNG.

use rand::Rng;

use crate::entities::{Difficulty, EnemyKind, PowerUpKind};
use crate::geometry::Vec2;

// ── Level progression ─────────────────────────────────────────────────────────

/// Score needed to leave level `i + 1`.  Past the table the step is linear.
pub const LEVEL_THRESHOLDS: [u32; 10] = [
    0, 1000, 3000, 6000, 10_000, 15_000, 22_000, 30_000, 40_000, 52_000,
];
const LEVEL_FALLBACK_STEP: u32 = 15_000;

/// Score at which `level` advances to `level + 1`.
pub fn next_level_threshold(level: u32) -> u32 {
    LEVEL_THRESHOLDS
        .get(level as usize)
        .copied()
        .unwrap_or(level * LEVEL_FALLBACK_STEP)
}

/// One level per call: callers advance at most one level per frame.
pub fn should_level_up(level: u32, score: u32) -> bool {
    score >= next_level_threshold(level)
}

// ── Scoring ───────────────────────────────────────────────────────────────────

/// 1.5× on every tenth consecutive hit, 1× otherwise.
pub fn combo_bonus(consecutive_hits: u32) -> f64 {
    if consecutive_hits > 0 && consecutive_hits % 10 == 0 {
        1.5
    } else {
        1.0
    }
}

/// Points for a kill, floored.
pub fn kill_score(score_value: u32, score_multiplier: f32, consecutive_hits: u32) -> u32 {
    (score_value as f64 * score_multiplier as f64 * combo_bonus(consecutive_hits)).floor() as u32
}

/// Kills per shot, in percent.  Zero before the first shot.
pub fn accuracy(enemies_killed: u32, bullets_shot: u32) -> f32 {
    if bullets_shot == 0 {
        0.0
    } else {
        enemies_killed as f32 / bullets_shot as f32 * 100.0
    }
}

/// Damage dealt by a player bullet once the power-up multiplier applies.
pub fn effective_damage(bullet_damage: u32, multiplier: f32) -> i32 {
    (bullet_damage as f32 * multiplier).floor() as i32
}

// ── Boss scheduling ───────────────────────────────────────────────────────────

pub const FIRST_BOSS_SCORE: u32 = 15_000;

/// Score at which the next boss appears, given the stage just reached.
pub fn next_boss_score(current_score: u32, new_stage: u32) -> u32 {
    current_score + 20_000 + new_stage * 5000
}

pub fn stage_clear_bonus(new_stage: u32) -> u32 {
    2000 * new_stage
}

/// Health/score scaling for regular enemies.
pub fn regular_stage_multiplier(stage: u32) -> f32 {
    1.0 + (stage.saturating_sub(1)) as f32 * 0.3
}

/// Health/score scaling for the boss of an encounter.
pub fn boss_stage_multiplier(stage: u32) -> f32 {
    1.0 + (stage.saturating_sub(1)) as f32 * 0.5
}

// ── Enemy fire ────────────────────────────────────────────────────────────────

/// Per-frame chance that a ready regular enemy fires.
pub const ENEMY_SHOOT_PROBABILITY: f64 = 0.02;

/// Per-frame chance that a ready boss fires.
pub fn boss_shoot_probability(stage: u32) -> f64 {
    0.08 + stage.saturating_sub(1) as f64 * 0.02
}

/// `(bullet_count, base_speed)` of one boss volley.
pub fn boss_volley(stage: u32, difficulty: Difficulty) -> (usize, f32) {
    let (count, speed) = match difficulty {
        Difficulty::Easy => (3, 200.0),
        Difficulty::Normal => (5, 250.0),
        Difficulty::Hard => (7, 300.0),
    };
    let count = (count + (stage / 2) as usize).min(15);
    (count, speed + stage as f32 * 20.0)
}

// ── Spawning ──────────────────────────────────────────────────────────────────

/// Regular-spawn type roll.  The bands are nested on a single draw and are
/// not renormalised, so higher bands shadow lower ones.
pub fn pick_enemy_kind(level: u32, rng: &mut impl Rng) -> EnemyKind {
    let roll: f64 = rng.gen();
    if level >= 5 && roll < 0.1 {
        EnemyKind::Boss
    } else if level >= 3 && roll < 0.3 {
        EnemyKind::Strong
    } else if level >= 2 && roll < 0.4 {
        EnemyKind::Fast
    } else {
        EnemyKind::Basic
    }
}

/// Interval after a spawn: shrinks by `150 * (level - 1)` ms, never below 500.
pub fn next_spawn_interval(current_ms: f32, level: u32) -> f32 {
    (current_ms - level.saturating_sub(1) as f32 * 150.0).max(500.0)
}

pub fn regular_enemy_speed(difficulty_speed: f32, level: u32) -> f32 {
    difficulty_speed + level.saturating_sub(1) as f32 * 20.0
}

/// Left edge for a regular spawn, uniformly across the field.
pub fn enemy_spawn_x(field_width: f32, rng: &mut impl Rng) -> f32 {
    rng.gen::<f32>() * (field_width - 60.0).max(0.0)
}

/// Weighted power-up roll made once when an enemy is built.
pub fn roll_power_up(drop_rate: f64, rng: &mut impl Rng) -> Option<PowerUpKind> {
    if rng.gen::<f64>() >= drop_rate {
        return None;
    }
    let total: u32 = PowerUpKind::WEIGHTS.iter().map(|(_, w)| w).sum();
    let roll = rng.gen::<f64>() * total as f64;
    let mut acc = 0.0;
    for (kind, weight) in PowerUpKind::WEIGHTS {
        acc += weight as f64;
        if roll <= acc {
            return Some(kind);
        }
    }
    None
}

// ── Initial formation ─────────────────────────────────────────────────────────

pub const FORMATION_ROWS: usize = 2;
pub const FORMATION_COLS: usize = 8;
const FORMATION_SPACING_X: f32 = 60.0;
const FORMATION_SPACING_Y: f32 = 40.0;

/// Target slot for `(row, col)` of the opening wave, centred horizontally.
pub fn formation_slot(field_width: f32, row: usize, col: usize) -> Vec2 {
    let offset_x = (field_width - (FORMATION_COLS - 1) as f32 * FORMATION_SPACING_X) / 2.0;
    Vec2::new(
        offset_x + col as f32 * FORMATION_SPACING_X,
        30.0 + row as f32 * FORMATION_SPACING_Y,
    )
}

/// Entry point above the screen near the centre; later rows start higher.
pub fn formation_start(field_width: f32, row: usize, rng: &mut impl Rng) -> Vec2 {
    Vec2::new(
        field_width / 2.0 + (rng.gen::<f32>() - 0.5) * 100.0,
        -100.0 - row as f32 * 20.0,
    )
}
