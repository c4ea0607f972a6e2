use std::f32::consts::PI;

use galaga_shooter::compute::{formation_slot, formation_start, FORMATION_COLS, FORMATION_ROWS};
use galaga_shooter::enemy::*;
use galaga_shooter::entities::*;
use galaga_shooter::geometry::{GameObject, Size, Vec2};
use galaga_shooter::power_up::PowerUp;
use galaga_shooter::starfield::Starfield;

use rand::rngs::StdRng;
use rand::SeedableRng;

const KINDS: [EnemyKind; 4] = [
    EnemyKind::Basic,
    EnemyKind::Fast,
    EnemyKind::Strong,
    EnemyKind::Boss,
];

fn field() -> Size {
    Size::new(800.0, 600.0)
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn enemy(kind: EnemyKind) -> Enemy {
    Enemy::new(EnemyId(1), kind, Vec2::new(300.0, 100.0), 100.0, 1.0, field())
}

fn boss() -> Enemy {
    Enemy::new(EnemyId(7), EnemyKind::Boss, Vec2::new(360.0, 40.0), 80.0, 1.0, field())
}

// ── Health & damage ───────────────────────────────────────────────────────────

#[test]
fn exact_lethal_damage_kills() {
    for kind in KINDS {
        let mut e = enemy(kind);
        let health = e.health();
        assert!(e.take_damage(health), "{:?}", kind);

        let mut e = enemy(kind);
        assert!(!e.take_damage(health - 1), "{:?}", kind);
        assert_eq!(e.health(), 1);
    }
}

#[test]
fn overkill_still_reports_death() {
    let mut e = enemy(EnemyKind::Strong);
    assert!(e.take_damage(10));
    assert!(e.health() < 0);
    assert_eq!(e.health_percent(), 0.0);
}

#[test]
fn stage_multiplier_floors_health_and_score() {
    let e = Enemy::new(EnemyId(1), EnemyKind::Strong, Vec2::ZERO, 100.0, 1.6, field());
    assert_eq!(e.health(), 4);
    assert_eq!(e.max_health(), 4);
    assert_eq!(e.score_value(), 480);

    let boss = Enemy::new(EnemyId(2), EnemyKind::Boss, Vec2::ZERO, 80.0, 2.0, field());
    assert_eq!(boss.health(), 50);
    assert_eq!(boss.score_value(), 10_000);
}

#[test]
fn health_percent_tracks_damage() {
    let mut boss = enemy(EnemyKind::Boss);
    boss.take_damage(5);
    assert!((boss.health_percent() - 0.8).abs() < 1e-6);
}

// ── Carried power-up ──────────────────────────────────────────────────────────

#[test]
fn carried_power_up_drops_once() {
    let mut e = enemy(EnemyKind::Basic).with_power_up(Some(PowerUpKind::Shield));
    assert_eq!(e.drop_power_up(), Some(PowerUpKind::Shield));
    assert_eq!(e.drop_power_up(), None);
}

#[test]
fn drop_rate_extremes() {
    let mut rng = seeded_rng();
    assert!(enemy(EnemyKind::Basic)
        .with_drop_rate(1.0, &mut rng)
        .carried_power_up()
        .is_some());
    assert!(enemy(EnemyKind::Basic)
        .with_drop_rate(0.0, &mut rng)
        .carried_power_up()
        .is_none());
}

// ── Shooting ──────────────────────────────────────────────────────────────────

#[test]
fn shoot_cooldown_per_kind() {
    let mut e = enemy(EnemyKind::Fast);
    assert!(!e.can_shoot());
    e.update(1.4);
    assert!(!e.can_shoot());
    e.update(0.2);
    assert!(e.can_shoot());
    e.shoot();
    assert!(!e.can_shoot());
}

#[test]
fn forming_enemy_cannot_shoot() {
    let mut e = enemy(EnemyKind::Basic).with_target(Vec2::new(300.0, 2000.0));
    e.update(3.0);
    assert!(e.is_moving_into_formation());
    assert!(!e.can_shoot());
}

#[test]
fn regular_muzzle_is_bottom_centre() {
    let e = enemy(EnemyKind::Basic); // 25 × 20 at (300, 100)
    assert_eq!(e.bullet_spawn_position(), Vec2::new(310.5, 120.0));
}

// ── Boss volleys ──────────────────────────────────────────────────────────────

#[test]
fn non_boss_pattern_is_single_downward_shot() {
    let mut rng = seeded_rng();
    let shots = enemy(EnemyKind::Strong).boss_multi_shot_pattern(3, Difficulty::Hard, &mut rng);
    assert_eq!(shots.len(), 1);
    assert_eq!(shots[0].angle, PI / 2.0);
    assert_eq!(shots[0].speed, 300.0);
}

#[test]
fn stage_one_normal_fans_five() {
    let mut rng = seeded_rng();
    let shots = boss().boss_multi_shot_pattern(1, Difficulty::Normal, &mut rng);
    assert_eq!(shots.len(), 5);
    let first = shots.first().unwrap().angle;
    let last = shots.last().unwrap().angle;
    assert!((first - (PI - PI / 6.0)).abs() < 1e-5);
    assert!((last - (PI + PI / 6.0)).abs() < 1e-5);
    assert!((shots[2].angle - PI).abs() < 1e-5);
    for s in &shots {
        assert!((245.0..=295.0).contains(&s.speed));
    }
}

#[test]
fn stage_three_normal_rings_six() {
    let mut rng = seeded_rng();
    let shots = boss().boss_multi_shot_pattern(3, Difficulty::Normal, &mut rng);
    assert_eq!(shots.len(), 6);
    for (i, s) in shots.iter().enumerate() {
        assert!((s.angle - i as f32 * 2.0 * PI / 6.0).abs() < 1e-5);
        assert_eq!(s.speed, 310.0);
    }
}

#[test]
fn stage_four_hard_rings_eight_plus_bursts() {
    let mut rng = seeded_rng();
    let shots = boss().boss_multi_shot_pattern(4, Difficulty::Hard, &mut rng);
    assert_eq!(shots.len(), 9);
    assert_eq!(shots[8].speed, 380.0 * 1.2);
    assert!((shots[8].angle - PI / 2.0).abs() <= 0.2 + 1e-5);
}

#[test]
fn late_stage_volley_is_random_but_bounded() {
    let mut rng = seeded_rng();
    let shots = boss().boss_multi_shot_pattern(6, Difficulty::Easy, &mut rng);
    assert_eq!(shots.len(), 6);
    for s in &shots {
        assert!(s.speed >= 150.0);
        assert!((0.0..=2.0 * PI).contains(&s.angle));
        assert!((360.0..=440.0).contains(&s.position.x));
    }
}

// ── Formation flight ──────────────────────────────────────────────────────────

#[test]
fn whole_wave_snaps_onto_slots() {
    let mut rng = seeded_rng();
    let dt = 1.0 / 60.0;
    for row in 0..FORMATION_ROWS {
        for col in 0..FORMATION_COLS {
            let slot = formation_slot(800.0, row, col);
            let start = formation_start(800.0, row, &mut rng);
            let mut e = Enemy::new(EnemyId(1), EnemyKind::Basic, start, 100.0, 1.0, field())
                .with_target(slot);
            assert!(e.is_moving_into_formation());

            let mut frames = 0;
            while e.is_moving_into_formation() {
                e.update(dt);
                frames += 1;
                assert!(frames < 600, "slot ({}, {}) never reached", row, col);
            }
            // Snapped, then drifted for one frame at half the base speed.
            let p = e.body().position;
            assert!(p.distance_to(slot) < 1.0, "slot ({}, {}) off by {}", row, col, p.distance_to(slot));
            assert_eq!(e.body().velocity, Vec2::new(0.0, 50.0));
            assert_eq!(e.target(), None);
        }
    }
}

#[test]
fn enemy_without_target_never_forms() {
    let e = enemy(EnemyKind::Basic);
    assert!(!e.is_moving_into_formation());
    assert!(e.target().is_none());
}

// ── Movement & culling ────────────────────────────────────────────────────────

#[test]
fn basic_enemy_falls_straight() {
    let mut e = enemy(EnemyKind::Basic);
    e.update(0.5);
    assert_eq!(e.body().position, Vec2::new(300.0, 150.0));
}

#[test]
fn fast_enemy_zigzags() {
    let mut e = enemy(EnemyKind::Fast);
    e.update(0.25);
    assert!(e.body().velocity.x != 0.0);
}

#[test]
fn boss_stays_in_band() {
    let mut boss = Enemy::new(EnemyId(3), EnemyKind::Boss, Vec2::new(360.0, -80.0), 80.0, 1.0, field());
    for _ in 0..600 {
        boss.update(1.0 / 30.0);
        let p = boss.body().position;
        assert!((20.0..=150.0).contains(&p.y));
        assert!((0.0..=720.0).contains(&p.x));
        assert!(boss.is_active());
    }
}

#[test]
fn enemies_above_field_are_not_culled() {
    let mut e = Enemy::new(EnemyId(4), EnemyKind::Basic, Vec2::new(300.0, -500.0), 0.0, 1.0, field());
    e.update(0.1);
    assert!(e.is_active());
}

#[test]
fn enemies_past_bottom_are_culled() {
    let mut e = Enemy::new(EnemyId(5), EnemyKind::Basic, Vec2::new(300.0, 640.0), 100.0, 1.0, field());
    e.update(0.2);
    assert!(!e.is_active());
}

// ── Pickups & decoration ──────────────────────────────────────────────────────

#[test]
fn pickup_falls_and_leaves_field() {
    let mut rng = seeded_rng();
    let mut p = PowerUp::new(Vec2::new(100.0, 560.0), PowerUpKind::MultiShot, field(), &mut rng);
    assert_eq!(p.kind(), PowerUpKind::MultiShot);
    p.update(0.5);
    assert!(p.is_active());
    assert!(p.body().position.y > 560.0);
    p.update(1.0);
    assert!(!p.is_active());
}

#[test]
fn stars_wrap_to_top() {
    let mut rng = seeded_rng();
    let mut stars = Starfield::new(150, field(), &mut rng);
    assert_eq!(stars.stars().len(), 150);
    for _ in 0..100 {
        stars.update(0.5, &mut rng);
        for s in stars.stars() {
            assert!((-5.0..=605.0 + 35.0).contains(&s.y));
            assert!((0.0..=800.0).contains(&s.x));
            assert!((20.0..70.0).contains(&s.speed));
        }
    }
}
