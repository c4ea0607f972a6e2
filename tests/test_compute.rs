use galaga_shooter::compute::*;
use galaga_shooter::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// Apply at most one level-up per call, the way the engine does per tick.
fn tick_level(level: u32, score: u32) -> u32 {
    if should_level_up(level, score) {
        level + 1
    } else {
        level
    }
}

// ── Level thresholds ──────────────────────────────────────────────────────────

#[test]
fn score_zero_stays_level_one() {
    assert_eq!(tick_level(1, 0), 1);
}

#[test]
fn score_1000_reaches_level_two() {
    assert_eq!(tick_level(1, 999), 1);
    assert_eq!(tick_level(1, 1000), 2);
}

#[test]
fn level_nine_boundary_is_52000() {
    assert_eq!(next_level_threshold(9), 52_000);
    assert_eq!(tick_level(9, 51_999), 9);
    assert_eq!(tick_level(9, 52_000), 10);
}

#[test]
fn threshold_falls_back_to_linear_past_table() {
    assert_eq!(next_level_threshold(10), 150_000);
    assert_eq!(next_level_threshold(13), 195_000);
    assert_eq!(next_level_threshold(20), 300_000);
}

#[test]
fn large_score_climbs_one_level_per_tick() {
    let score = 200_000;
    let mut level = 1;
    let mut ticks = 0;
    loop {
        let next = tick_level(level, score);
        if next == level {
            break;
        }
        assert_eq!(next, level + 1, "never more than one level per tick");
        level = next;
        ticks += 1;
    }
    // 13 * 15000 = 195000 <= 200000 < 14 * 15000
    assert_eq!(level, 14);
    assert_eq!(ticks, 13);
}

// ── Scoring ───────────────────────────────────────────────────────────────────

#[test]
fn combo_bonus_only_on_tenth_hits() {
    assert_eq!(combo_bonus(0), 1.0);
    assert_eq!(combo_bonus(9), 1.0);
    assert_eq!(combo_bonus(10), 1.5);
    assert_eq!(combo_bonus(11), 1.0);
    assert_eq!(combo_bonus(20), 1.5);
}

#[test]
fn kill_score_floors_after_multipliers() {
    assert_eq!(kill_score(100, 1.0, 1), 100);
    assert_eq!(kill_score(100, 0.8, 1), 80);
    assert_eq!(kill_score(130, 1.5, 10), 292); // 130 * 1.5 * 1.5 = 292.5
}

#[test]
fn accuracy_is_zero_before_first_shot() {
    assert_eq!(accuracy(0, 0), 0.0);
    assert_eq!(accuracy(5, 10), 50.0);
}

#[test]
fn effective_damage_doubles_and_floors() {
    assert_eq!(effective_damage(1, 1.0), 1);
    assert_eq!(effective_damage(3, 2.0), 6);
}

// ── Boss scheduling ───────────────────────────────────────────────────────────

#[test]
fn boss_schedule_grows_with_stage() {
    assert_eq!(FIRST_BOSS_SCORE, 15_000);
    assert_eq!(next_boss_score(16_000, 2), 46_000);
    assert_eq!(stage_clear_bonus(2), 4000);
}

#[test]
fn stage_multipliers() {
    assert_eq!(regular_stage_multiplier(1), 1.0);
    assert!((regular_stage_multiplier(3) - 1.6).abs() < 1e-6);
    assert_eq!(boss_stage_multiplier(1), 1.0);
    assert_eq!(boss_stage_multiplier(3), 2.0);
}

#[test]
fn boss_fire_probability_rises_per_stage() {
    assert!((boss_shoot_probability(1) - 0.08).abs() < 1e-9);
    assert!((boss_shoot_probability(3) - 0.12).abs() < 1e-9);
}

#[test]
fn boss_volley_scales_with_difficulty_and_stage() {
    assert_eq!(boss_volley(1, Difficulty::Easy), (3, 220.0));
    assert_eq!(boss_volley(1, Difficulty::Normal), (5, 270.0));
    assert_eq!(boss_volley(3, Difficulty::Normal), (6, 310.0));
    assert_eq!(boss_volley(4, Difficulty::Hard), (9, 380.0));
    assert_eq!(boss_volley(40, Difficulty::Hard).0, 15);
}

// ── Spawning ──────────────────────────────────────────────────────────────────

#[test]
fn level_one_only_spawns_basic() {
    let mut rng = seeded_rng();
    for _ in 0..200 {
        assert_eq!(pick_enemy_kind(1, &mut rng), EnemyKind::Basic);
    }
}

#[test]
fn high_levels_spawn_every_kind() {
    let mut rng = seeded_rng();
    let kinds: Vec<EnemyKind> = (0..500).map(|_| pick_enemy_kind(6, &mut rng)).collect();
    for kind in [EnemyKind::Basic, EnemyKind::Fast, EnemyKind::Strong, EnemyKind::Boss] {
        assert!(kinds.contains(&kind), "{:?} never rolled", kind);
    }
}

#[test]
fn level_two_never_rolls_strong_or_boss() {
    let mut rng = seeded_rng();
    for _ in 0..300 {
        let kind = pick_enemy_kind(2, &mut rng);
        assert!(matches!(kind, EnemyKind::Basic | EnemyKind::Fast));
    }
}

#[test]
fn spawn_interval_shrinks_to_floor() {
    assert_eq!(next_spawn_interval(1200.0, 1), 1200.0);
    assert_eq!(next_spawn_interval(1200.0, 3), 900.0);
    assert_eq!(next_spawn_interval(600.0, 5), 500.0);
}

#[test]
fn regular_speed_adds_twenty_per_level() {
    assert_eq!(regular_enemy_speed(100.0, 1), 100.0);
    assert_eq!(regular_enemy_speed(100.0, 4), 160.0);
}

#[test]
fn spawn_x_stays_inside_field() {
    let mut rng = seeded_rng();
    for _ in 0..200 {
        let x = enemy_spawn_x(800.0, &mut rng);
        assert!((0.0..740.0).contains(&x));
    }
}

#[test]
fn power_up_roll_respects_drop_rate() {
    let mut rng = seeded_rng();
    for _ in 0..100 {
        assert_eq!(roll_power_up(0.0, &mut rng), None);
        assert!(roll_power_up(1.0, &mut rng).is_some());
    }
}

#[test]
fn power_up_roll_favours_multishot() {
    let mut rng = seeded_rng();
    let rolls: Vec<PowerUpKind> = (0..2000).filter_map(|_| roll_power_up(1.0, &mut rng)).collect();
    let count = |k| rolls.iter().filter(|&&r| r == k).count();
    assert!(count(PowerUpKind::MultiShot) > count(PowerUpKind::ExtraLife));
    assert!(count(PowerUpKind::ExtraLife) > count(PowerUpKind::Shield));
}

// ── Formation layout ──────────────────────────────────────────────────────────

#[test]
fn formation_slots_are_centred() {
    let first = formation_slot(800.0, 0, 0);
    let last = formation_slot(800.0, 1, FORMATION_COLS - 1);
    assert_eq!(first.x, 190.0);
    assert_eq!(first.y, 30.0);
    assert_eq!(last.x, 610.0);
    assert_eq!(last.y, 70.0);
}

#[test]
fn formation_start_is_above_field_near_centre() {
    let mut rng = seeded_rng();
    let p = formation_start(800.0, 1, &mut rng);
    assert!((350.0..=450.0).contains(&p.x));
    assert_eq!(p.y, -120.0);
}
