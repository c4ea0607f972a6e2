use galaga_shooter::config::*;
use galaga_shooter::entities::*;

#[test]
fn entity_clone_and_eq() {
    assert_eq!(EnemyKind::Basic, EnemyKind::Basic);
    assert_ne!(EnemyKind::Basic, EnemyKind::Boss);
    assert_eq!(GameStatus::Playing, GameStatus::Playing);
    assert_ne!(GameStatus::Playing, GameStatus::GameOver);
    assert_ne!(BulletOwner::Player, BulletOwner::Enemy);

    let kind = PowerUpKind::Shield;
    assert_eq!(kind.clone(), PowerUpKind::Shield);
}

#[test]
fn stats_clone_is_independent() {
    let original = GameStats::new(Difficulty::Hard, 3);
    let mut cloned = original.clone();
    cloned.score = 999;
    cloned.lives = 1;
    assert_eq!(original.score, 0);
    assert_eq!(original.lives, 3);
    assert_eq!(original.level, 1);
    assert_eq!(original.stage, 1);
    assert_eq!(original.difficulty, Difficulty::Hard);
    assert_eq!(cloned.score, 999);
    assert_eq!(cloned.lives, 1);
    assert_eq!(cloned.difficulty, Difficulty::Hard);
}

// ── Per-kind tables ───────────────────────────────────────────────────────────

#[test]
fn enemy_tables() {
    assert_eq!(EnemyKind::Basic.base_health(), 1);
    assert_eq!(EnemyKind::Strong.base_health(), 3);
    assert_eq!(EnemyKind::Boss.base_health(), 25);
    assert_eq!(EnemyKind::Boss.base_score(), 5000);
    assert_eq!(EnemyKind::Fast.shoot_cooldown_ms(), 1500.0);
    assert_eq!(EnemyKind::Boss.size().width, 80.0);
}

#[test]
fn move_patterns_per_kind() {
    assert_eq!(EnemyKind::Basic.move_pattern(), MovePattern::Straight);
    assert_eq!(EnemyKind::Strong.move_pattern(), MovePattern::Straight);
    assert_eq!(EnemyKind::Fast.move_pattern(), MovePattern::Zigzag);
    assert_eq!(EnemyKind::Boss.move_pattern(), MovePattern::Circle);
}

#[test]
fn power_up_weights_sum_to_hundred() {
    let total: u32 = PowerUpKind::WEIGHTS.iter().map(|(_, w)| w).sum();
    assert_eq!(total, 100);
    assert_eq!(PowerUpKind::WEIGHTS[0], (PowerUpKind::MultiShot, 40));
}

#[test]
fn only_playing_and_boss_are_running() {
    assert!(GameStatus::Playing.is_running());
    assert!(GameStatus::Boss.is_running());
    assert!(!GameStatus::Paused.is_running());
    assert!(!GameStatus::GameOver.is_running());
    assert!(!GameStatus::Start.is_running());
}

#[test]
fn message_keeps_its_duration() {
    let msg = GameMessage::new("LEVEL 2!", MessageKind::LevelUp, 3000.0);
    assert_eq!(msg.text, "LEVEL 2!");
    assert_eq!(msg.remaining_ms, 3000.0);
}

// ── Configuration ─────────────────────────────────────────────────────────────

#[test]
fn default_config_matches_field_and_pool() {
    let config = GameConfig::default();
    assert_eq!(config.canvas_width, 800.0);
    assert_eq!(config.canvas_height, 600.0);
    assert_eq!(config.max_lives, 3);
    assert_eq!(config.bullet_pool_size, 150);
}

#[test]
fn difficulty_presets() {
    let easy = DifficultyConfig::for_difficulty(Difficulty::Easy);
    let hard = DifficultyConfig::for_difficulty(Difficulty::Hard);
    assert_eq!(easy.enemy_spawn_rate, 1500.0);
    assert_eq!(easy.power_up_drop_rate, 0.25);
    assert_eq!(hard.enemy_speed, 140.0);
    assert_eq!(hard.score_multiplier, 1.5);
    assert_eq!(
        DifficultyConfig::for_difficulty(Difficulty::Normal).enemy_spawn_rate,
        1200.0
    );
}

#[test]
fn partial_config_json_fills_defaults() {
    let config: GameConfig = serde_json::from_str(r#"{ "max_lives": 5 }"#).unwrap();
    assert_eq!(config.max_lives, 5);
    assert_eq!(config.player_speed, 300.0);
}
