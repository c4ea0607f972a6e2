//! The simulation engine: game-state machine, per-frame update, collision
//! resolution and the one-way pushes into the UI and ad collaborators.
//!
//! One `update(dt)` runs, in order: input → player → stats → stars → boss
//! check → enemies (and their fire) → bullets → pickups → regular spawning →
//! collisions → UI.  Reordering these changes outcomes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::bullet_pool::{BulletHandle, BulletPool};
use crate::compute;
use crate::config::{DifficultyConfig, GameConfig};
use crate::enemy::{Enemy, EnemyId};
use crate::entities::{
    BulletOwner, Difficulty, EnemyKind, GameMessage, GameStats, GameStatus, MessageKind,
    PowerUpKind,
};
use crate::geometry::{check_collision, GameObject, Position, Size, Vec2};
use crate::input::InputManager;
use crate::player::Player;
use crate::power_up::PowerUp;
use crate::render::{AdNotifier, AdSlot, Color, Surface, UiField, UiSink};
use crate::starfield::Starfield;

pub const MAX_LIVES: u32 = 5;
const LEVEL_UP_MESSAGE_MS: f32 = 3000.0;
const POWER_UP_MESSAGE_MS: f32 = 2000.0;
const BOSS_DROP_RATE: f64 = 0.8;

pub struct GameEngine {
    config: GameConfig,
    field: Size,
    status: GameStatus,
    difficulty: Difficulty,
    difficulty_config: DifficultyConfig,
    stats: GameStats,

    player: Player,
    enemies: Vec<Enemy>,
    bullets: Vec<BulletHandle>,
    power_ups: Vec<PowerUp>,
    pool: BulletPool,
    starfield: Starfield,
    input: InputManager,

    current_boss: Option<EnemyId>,
    boss_spawn_score: u32,
    spawn_timer_ms: f32,
    /// Simulated milliseconds spent running.
    clock_ms: f64,
    next_enemy_id: u64,
    prev_cancel: bool,
    message: Option<GameMessage>,

    rng: StdRng,
    ui: Option<Box<dyn UiSink>>,
    ads: Option<Box<dyn AdNotifier>>,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Engine with a caller-supplied RNG; a seeded one makes runs repeatable.
    pub fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let field = Size::new(config.canvas_width, config.canvas_height);
        let difficulty = Difficulty::default();
        let starfield = Starfield::new(config.star_count, field, &mut rng);
        Self {
            player: Player::new(Player::spawn_position(field), field, config.player_speed),
            stats: GameStats::new(difficulty, config.max_lives),
            pool: BulletPool::new(config.bullet_pool_size, field),
            difficulty_config: DifficultyConfig::for_difficulty(difficulty),
            difficulty,
            field,
            status: GameStatus::Start,
            enemies: Vec::new(),
            bullets: Vec::new(),
            power_ups: Vec::new(),
            starfield,
            input: InputManager::new(),
            current_boss: None,
            boss_spawn_score: compute::FIRST_BOSS_SCORE,
            spawn_timer_ms: 0.0,
            clock_ms: 0.0,
            next_enemy_id: 0,
            prev_cancel: false,
            message: None,
            rng,
            ui: None,
            ads: None,
            config,
        }
    }

    /// Attach the HUD sink.  The current screen is pushed immediately.
    pub fn with_ui(mut self, ui: Box<dyn UiSink>) -> Self {
        self.ui = Some(ui);
        self.push_screens();
        self.push_ui();
        self
    }

    /// Attach the ad collaborator.  Slots are set for the current screen.
    pub fn with_ads(mut self, ads: Box<dyn AdNotifier>) -> Self {
        self.ads = Some(ads);
        match self.status {
            GameStatus::Start | GameStatus::GameOver => self.show_banner_ads(),
            GameStatus::Playing | GameStatus::Paused | GameStatus::Boss => self.show_sidebar_ads(),
            GameStatus::DifficultySelect => {}
        }
        self
    }

    /// Replace the default input manager, e.g. with one using a hold window.
    pub fn with_input(mut self, input: InputManager) -> Self {
        self.input = input;
        self
    }

    // ── Screen transitions ────────────────────────────────────────────────────

    /// Start screen → difficulty selection.
    pub fn begin(&mut self) {
        if self.status == GameStatus::Start {
            self.status = GameStatus::DifficultySelect;
            self.push_screens();
        }
    }

    /// Snapshot the preset, reset the game and start playing.  Ignored
    /// outside the difficulty screen.
    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        if self.status != GameStatus::DifficultySelect {
            return;
        }
        self.difficulty = difficulty;
        self.difficulty_config = DifficultyConfig::for_difficulty(difficulty);
        self.reset_game();
        self.status = GameStatus::Playing;
        info!("Game started on {}", difficulty.label());

        self.show_sidebar_ads();
        self.push_screens();
        self.push_ui();
    }

    /// Game over → difficulty selection.
    pub fn restart(&mut self) {
        if self.status == GameStatus::GameOver {
            self.status = GameStatus::DifficultySelect;
            self.push_screens();
        }
    }

    /// Back to the start screen from difficulty selection or game over.
    pub fn return_to_menu(&mut self) {
        if matches!(self.status, GameStatus::DifficultySelect | GameStatus::GameOver) {
            self.status = GameStatus::Start;
            self.show_banner_ads();
            self.push_screens();
        }
    }

    /// Release held input and every pooled bullet.
    pub fn destroy(&mut self) {
        self.input.blur();
        self.pool.release_all();
        self.bullets.clear();
        debug!("Engine torn down");
    }

    fn reset_game(&mut self) {
        self.stats = GameStats::new(self.difficulty, self.config.max_lives);
        self.stats.level_start_time = self.clock_ms;
        self.enemies.clear();
        self.pool.release_all();
        self.bullets.clear();
        self.power_ups.clear();
        self.current_boss = None;
        self.boss_spawn_score = compute::FIRST_BOSS_SCORE;
        self.spawn_timer_ms = 0.0;
        self.message = None;
        self.player = Player::new(Player::spawn_position(self.field), self.field, self.config.player_speed);
        self.spawn_initial_wave();
    }

    // ── Frame update ──────────────────────────────────────────────────────────

    /// Advance the simulation by `dt` seconds.  Outside `Playing`/`Boss`
    /// only input is polled.
    pub fn update(&mut self, dt: f32) {
        self.handle_input();
        if self.status.is_running() {
            self.clock_ms += dt as f64 * 1000.0;
            self.player.update(dt);
            self.update_stats(dt);
            self.starfield.update(dt, &mut self.rng);
            self.check_boss_spawn();
            self.update_enemies(dt);
            self.update_bullets(dt);
            self.update_power_ups(dt);
            if self.status != GameStatus::Boss {
                self.spawn_enemies(dt);
            }
            self.resolve_collisions();
            self.tick_message(dt);
        }
        self.push_ui();
    }

    fn handle_input(&mut self) {
        let keys = self.input.key_state();

        if keys.cancel && !self.prev_cancel {
            match self.status {
                GameStatus::Paused => {
                    self.status = if self.current_boss.is_some() {
                        GameStatus::Boss
                    } else {
                        GameStatus::Playing
                    };
                }
                GameStatus::Playing | GameStatus::Boss => self.status = GameStatus::Paused,
                _ => {}
            }
        }
        self.prev_cancel = keys.cancel;

        if !self.status.is_running() {
            return;
        }
        self.player.handle_input(&keys);
        if keys.shoot && self.player.can_shoot() {
            self.spawn_player_bullets();
            self.player.shoot();
        }
    }

    fn update_stats(&mut self, dt: f32) {
        self.stats.total_play_time += dt;
        self.stats.accuracy = compute::accuracy(self.stats.enemies_killed, self.stats.bullets_shot);

        if self.status == GameStatus::Playing
            && compute::should_level_up(self.stats.level, self.stats.score)
        {
            self.stats.level += 1;
            self.stats.level_start_time = self.clock_ms;
            info!("Level up: {}", self.stats.level);
            self.show_message(
                format!("LEVEL {}!", self.stats.level),
                MessageKind::LevelUp,
                LEVEL_UP_MESSAGE_MS,
            );
        }
    }

    fn update_enemies(&mut self, dt: f32) {
        let stage = self.stats.stage;
        let difficulty = self.difficulty;
        let bullet_speed = self.config.bullet_speed;

        for enemy in &mut self.enemies {
            enemy.update(dt);
            if !enemy.is_active() || !enemy.can_shoot() {
                continue;
            }
            let is_boss = enemy.kind() == EnemyKind::Boss;
            let probability = if is_boss {
                compute::boss_shoot_probability(stage)
            } else {
                compute::ENEMY_SHOOT_PROBABILITY
            };
            if self.rng.gen::<f64>() >= probability {
                continue;
            }

            if is_boss {
                for shot in enemy.boss_multi_shot_pattern(stage, difficulty, &mut self.rng) {
                    let handle = self.pool.acquire(shot.position, BulletOwner::Enemy, shot.speed, 1, shot.angle);
                    self.bullets.push(handle);
                }
            } else {
                let handle = self.pool.acquire(
                    enemy.bullet_spawn_position(),
                    BulletOwner::Enemy,
                    bullet_speed / 2.0,
                    1,
                    0.0,
                );
                self.bullets.push(handle);
            }
            enemy.shoot();
        }
        self.enemies.retain(|e| e.is_active());
    }

    fn update_bullets(&mut self, dt: f32) {
        let pool = &mut self.pool;
        self.bullets.retain(|&handle| {
            let alive = match pool.get_mut(handle) {
                Some(bullet) => {
                    bullet.update(dt);
                    bullet.is_active()
                }
                None => return false,
            };
            if !alive {
                pool.release(handle);
            }
            alive
        });
    }

    fn update_power_ups(&mut self, dt: f32) {
        for power_up in &mut self.power_ups {
            power_up.update(dt);
        }
        self.power_ups.retain(|p| p.is_active());
    }

    fn tick_message(&mut self, dt: f32) {
        if let Some(message) = &mut self.message {
            message.remaining_ms -= dt * 1000.0;
            if message.remaining_ms <= 0.0 {
                self.message = None;
            }
        }
    }

    // ── Spawning ──────────────────────────────────────────────────────────────

    fn next_id(&mut self) -> EnemyId {
        self.next_enemy_id += 1;
        EnemyId(self.next_enemy_id)
    }

    /// Two rows of eight basic enemies flying in from above the centre.
    fn spawn_initial_wave(&mut self) {
        for row in 0..compute::FORMATION_ROWS {
            for col in 0..compute::FORMATION_COLS {
                let target = compute::formation_slot(self.field.width, row, col);
                let start = compute::formation_start(self.field.width, row, &mut self.rng);
                let id = self.next_id();
                let enemy = Enemy::new(
                    id,
                    EnemyKind::Basic,
                    start,
                    self.difficulty_config.enemy_speed,
                    1.0,
                    self.field,
                )
                .with_target(target)
                .with_drop_rate(self.difficulty_config.power_up_drop_rate, &mut self.rng);
                self.enemies.push(enemy);
            }
        }
        debug!("Spawned initial wave of {} enemies", self.enemies.len());
    }

    fn spawn_enemies(&mut self, dt: f32) {
        self.spawn_timer_ms += dt * 1000.0;
        if self.spawn_timer_ms < self.difficulty_config.enemy_spawn_rate {
            return;
        }
        self.spawn_enemy();
        self.spawn_timer_ms = 0.0;
        self.difficulty_config.enemy_spawn_rate =
            compute::next_spawn_interval(self.difficulty_config.enemy_spawn_rate, self.stats.level);
    }

    fn spawn_enemy(&mut self) {
        let kind = compute::pick_enemy_kind(self.stats.level, &mut self.rng);
        let x = compute::enemy_spawn_x(self.field.width, &mut self.rng);
        let id = self.next_id();
        let enemy = Enemy::new(
            id,
            kind,
            Vec2::new(x, -30.0),
            compute::regular_enemy_speed(self.difficulty_config.enemy_speed, self.stats.level),
            compute::regular_stage_multiplier(self.stats.stage),
            self.field,
        )
        .with_drop_rate(self.difficulty_config.power_up_drop_rate, &mut self.rng);
        self.enemies.push(enemy);
    }

    fn spawn_player_bullets(&mut self) {
        let positions = self.player.bullet_spawn_positions();
        let tier = self.player.power_level();
        for &position in &positions {
            let handle = self.pool.acquire(position, BulletOwner::Player, self.config.bullet_speed, tier, 0.0);
            self.bullets.push(handle);
        }
        self.stats.bullets_shot += positions.len() as u32;
    }

    /// Fire one enemy-owned bullet from `position` and track it.
    pub fn spawn_enemy_bullet(&mut self, position: Position, speed: f32, angle: f32) -> BulletHandle {
        let handle = self.pool.acquire(position, BulletOwner::Enemy, speed, 1, angle);
        self.bullets.push(handle);
        handle
    }

    // ── Boss encounter ────────────────────────────────────────────────────────

    fn check_boss_spawn(&mut self) {
        if self.current_boss.is_some() || self.status == GameStatus::Boss {
            return;
        }
        if self.stats.score >= self.boss_spawn_score {
            self.spawn_boss();
        }
    }

    fn spawn_boss(&mut self) {
        self.enemies.clear();
        let id = self.next_id();
        let boss = Enemy::new(
            id,
            EnemyKind::Boss,
            Vec2::new(self.field.width / 2.0 - 40.0, -80.0),
            self.difficulty_config.enemy_speed * 0.8,
            compute::boss_stage_multiplier(self.stats.stage),
            self.field,
        )
        .with_drop_rate(BOSS_DROP_RATE, &mut self.rng);
        info!(stage = self.stats.stage, health = boss.health(), "Boss incoming");

        self.enemies.push(boss);
        self.current_boss = Some(id);
        self.status = GameStatus::Boss;
        self.show_message("WARNING: BOSS APPROACHING", MessageKind::BossWarning, LEVEL_UP_MESSAGE_MS);
        if let Some(ads) = self.ads.as_deref_mut() {
            ads.boss_encounter_started();
        }
    }

    fn on_boss_defeated(&mut self) {
        if self.current_boss.take().is_none() {
            return;
        }
        self.stats.bosses_killed += 1;
        self.stats.stage += 1;
        self.boss_spawn_score = compute::next_boss_score(self.stats.score, self.stats.stage);
        let bonus = compute::stage_clear_bonus(self.stats.stage);
        self.stats.score += bonus;
        if self.status == GameStatus::Boss {
            self.status = GameStatus::Playing;
        }
        info!(
            stage = self.stats.stage,
            bonus,
            next_boss = self.boss_spawn_score,
            "Boss defeated"
        );
    }

    // ── Collisions ────────────────────────────────────────────────────────────

    fn resolve_collisions(&mut self) {
        let bullets = std::mem::take(&mut self.bullets);
        for &handle in &bullets {
            let owner = match self.pool.get(handle) {
                Some(bullet) if bullet.is_active() => bullet.owner(),
                _ => continue,
            };
            match owner {
                BulletOwner::Player => self.player_bullet_vs_enemies(handle),
                BulletOwner::Enemy => self.enemy_bullet_vs_player(handle),
            }
        }
        let pool = &self.pool;
        self.bullets = bullets;
        self.bullets.retain(|&h| pool.is_live(h));

        self.enemy_bodies_vs_player();
        self.player_vs_pickups();

        self.enemies.retain(|e| e.is_active());
        self.power_ups.retain(|p| p.is_active());
    }

    /// The first overlapping enemy takes the hit.
    fn player_bullet_vs_enemies(&mut self, handle: BulletHandle) {
        let Some(bullet) = self.pool.get(handle) else {
            return;
        };
        let Some(idx) = self
            .enemies
            .iter()
            .position(|e| e.is_active() && check_collision(bullet, e))
        else {
            return;
        };
        let damage = compute::effective_damage(bullet.damage(), self.player.damage_multiplier());
        self.pool.release(handle);
        self.stats.consecutive_hits += 1;

        let enemy = &mut self.enemies[idx];
        if !enemy.take_damage(damage) {
            return;
        }
        enemy.deactivate();
        let id = enemy.id();
        let score_value = enemy.score_value();
        let drop_at = enemy.body().position;
        if let Some(kind) = enemy.drop_power_up() {
            self.power_ups.push(PowerUp::new(drop_at, kind, self.field, &mut self.rng));
        }

        self.stats.score += compute::kill_score(
            score_value,
            self.difficulty_config.score_multiplier,
            self.stats.consecutive_hits,
        );
        self.stats.enemies_killed += 1;

        if self.current_boss == Some(id) {
            self.on_boss_defeated();
        }
    }

    fn enemy_bullet_vs_player(&mut self, handle: BulletHandle) {
        let hit = self
            .pool
            .get(handle)
            .is_some_and(|bullet| check_collision(bullet, &self.player));
        if hit {
            self.pool.release(handle);
            self.player_hit();
        }
    }

    /// At most one body collision is processed per frame.  Ramming the boss
    /// ends the encounter without awarding its kill score.
    fn enemy_bodies_vs_player(&mut self) {
        if !self.status.is_running() {
            return;
        }
        let player = &self.player;
        let Some(idx) = self
            .enemies
            .iter()
            .position(|e| e.is_active() && check_collision(e, player))
        else {
            return;
        };
        let enemy = &mut self.enemies[idx];
        enemy.deactivate();
        let rammed_boss = self.current_boss == Some(enemy.id());

        self.player_hit();
        if rammed_boss && self.status.is_running() {
            self.on_boss_defeated();
        }
    }

    fn player_vs_pickups(&mut self) {
        if !self.status.is_running() {
            return;
        }
        let player = &self.player;
        let Some(idx) = self
            .power_ups
            .iter()
            .position(|p| p.is_active() && check_collision(p, player))
        else {
            return;
        };
        self.power_ups[idx].deactivate();
        let kind = self.power_ups[idx].kind();
        self.collect_power_up(kind);
    }

    /// Shield first, then lives.  Only the transition into game over acts
    /// once, however many hits land in the same frame.
    fn player_hit(&mut self) {
        if !self.status.is_running() {
            return;
        }
        if self.player.handle_shield_hit() {
            return;
        }
        self.stats.lives = self.stats.lives.saturating_sub(1);
        self.stats.consecutive_hits = 0;
        debug!(lives = self.stats.lives, "Player hit");
        if self.stats.lives == 0 {
            self.game_over();
        }
    }

    fn collect_power_up(&mut self, kind: PowerUpKind) {
        self.stats.items_collected += 1;
        debug!(?kind, "Picked up power-up");
        match kind {
            PowerUpKind::ExtraLife => {
                self.stats.lives = (self.stats.lives + 1).min(MAX_LIVES);
            }
            PowerUpKind::PowerUp => {
                self.player.apply_power_up(kind);
                self.show_message("DOUBLE DAMAGE FOR 10s", MessageKind::PowerUp, POWER_UP_MESSAGE_MS);
            }
            PowerUpKind::Shield => {
                self.player.apply_power_up(kind);
                self.show_message("SHIELD: BLOCKS 3 HITS FOR 15s", MessageKind::PowerUp, POWER_UP_MESSAGE_MS);
            }
            PowerUpKind::MultiShot => self.player.apply_power_up(kind),
        }
    }

    fn game_over(&mut self) {
        self.status = GameStatus::GameOver;
        info!(score = self.stats.score, stage = self.stats.stage, "Game over");
        if let Some(ui) = self.ui.as_deref_mut() {
            ui.set_text(UiField::FinalScore, &self.stats.score.to_string());
        }
        self.show_banner_ads();
        self.push_screens();
    }

    // ── Collaborator pushes ───────────────────────────────────────────────────

    fn show_message(&mut self, text: impl Into<String>, kind: MessageKind, duration_ms: f32) {
        self.message = Some(GameMessage::new(text, kind, duration_ms));
    }

    fn show_banner_ads(&mut self) {
        if let Some(ads) = self.ads.as_deref_mut() {
            ads.set_visible(AdSlot::TopBanner, true);
            ads.set_visible(AdSlot::BottomBanner, true);
            ads.set_visible(AdSlot::Sidebar, false);
        }
    }

    fn show_sidebar_ads(&mut self) {
        if let Some(ads) = self.ads.as_deref_mut() {
            ads.set_visible(AdSlot::TopBanner, false);
            ads.set_visible(AdSlot::BottomBanner, false);
            ads.set_visible(AdSlot::Sidebar, true);
        }
    }

    fn push_screens(&mut self) {
        let status = self.status;
        if let Some(ui) = self.ui.as_deref_mut() {
            ui.set_visible(UiField::StartScreen, status == GameStatus::Start);
            ui.set_visible(UiField::DifficultyScreen, status == GameStatus::DifficultySelect);
            ui.set_visible(UiField::GameOverScreen, status == GameStatus::GameOver);
        }
    }

    fn push_ui(&mut self) {
        let Some(ui) = self.ui.as_deref_mut() else {
            return;
        };
        let stats = &self.stats;
        let player = &self.player;

        ui.set_text(UiField::Score, &stats.score.to_string());
        ui.set_text(UiField::Lives, &stats.lives.to_string());
        ui.set_text(UiField::Stage, &stats.stage.to_string());
        ui.set_text(UiField::Level, &stats.level.to_string());
        ui.set_text(UiField::MissileCount, &player.shot_count().to_string());
        ui.set_text(UiField::MissileTier, &format!("T{}", player.power_level()));
        ui.set_text(UiField::ItemsCount, &stats.items_collected.to_string());
        ui.set_text(UiField::PoolActive, &self.pool.active_count().to_string());
        ui.set_text(UiField::PoolTotal, &self.pool.total_count().to_string());

        let powered = player.power_ups().power_up.active;
        ui.set_visible(UiField::PowerUpStatus, powered);
        if powered {
            ui.set_text(UiField::PowerUpTime, &player.power_up_seconds_left().to_string());
        }
        let shielded = player.has_shield();
        ui.set_visible(UiField::ShieldStatus, shielded);
        if shielded {
            ui.set_text(UiField::ShieldHits, &player.power_ups().shield.hits.to_string());
        }

        let boss = self
            .current_boss
            .and_then(|id| self.enemies.iter().find(|e| e.id() == id));
        let in_boss = matches!(self.status, GameStatus::Boss | GameStatus::Paused) && boss.is_some();
        ui.set_visible(UiField::BossPanel, in_boss);
        if let Some(boss) = boss.filter(|_| in_boss) {
            let percent = (boss.health_percent() * 100.0).round() as u32;
            ui.set_text(UiField::BossHealth, &format!("{}%", percent));
        }

        ui.set_visible(UiField::Notification, self.message.is_some());
        if let Some(message) = &self.message {
            ui.set_text(UiField::Notification, &message.text);
        }
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    pub fn render(&self, surface: &mut dyn Surface) {
        surface.clear(Color::BLACK);
        self.starfield.render(surface);

        if matches!(self.status, GameStatus::Start | GameStatus::DifficultySelect) {
            return;
        }

        self.player.render(surface);
        for enemy in &self.enemies {
            enemy.render(surface);
        }
        for &handle in &self.bullets {
            if let Some(bullet) = self.pool.get(handle) {
                bullet.render(surface);
            }
        }
        for power_up in &self.power_ups {
            power_up.render(surface);
        }

        let cx = self.field.width / 2.0;
        let cy = self.field.height / 2.0;
        if let Some(message) = &self.message {
            let color = match message.kind {
                MessageKind::LevelUp => Color::GOLD,
                MessageKind::BossWarning => Color::RED,
                MessageKind::PowerUp => Color::CYAN,
            };
            surface.fill_text(&message.text, cx - message.text.len() as f32 * 4.0, cy - 120.0, color);
        }
        if self.status == GameStatus::Paused {
            surface.fill_text("PAUSED", cx - 24.0, cy, Color::GREEN);
            surface.fill_text("Press ESC to continue", cx - 84.0, cy + 40.0, Color::GREEN);
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn difficulty_config(&self) -> &DifficultyConfig {
        &self.difficulty_config
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut GameStats {
        &mut self.stats
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    /// Enemies pushed here take part in the next update like spawned ones.
    pub fn enemies_mut(&mut self) -> &mut Vec<Enemy> {
        &mut self.enemies
    }

    pub fn power_ups(&self) -> &[PowerUp] {
        &self.power_ups
    }

    pub fn power_ups_mut(&mut self) -> &mut Vec<PowerUp> {
        &mut self.power_ups
    }

    pub fn bullets(&self) -> &[BulletHandle] {
        &self.bullets
    }

    pub fn pool(&self) -> &BulletPool {
        &self.pool
    }

    pub fn starfield(&self) -> &Starfield {
        &self.starfield
    }

    pub fn input(&self) -> &InputManager {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputManager {
        &mut self.input
    }

    pub fn current_boss(&self) -> Option<EnemyId> {
        self.current_boss
    }

    pub fn boss_spawn_score(&self) -> u32 {
        self.boss_spawn_score
    }

    pub fn message(&self) -> Option<&GameMessage> {
        self.message.as_ref()
    }

    pub fn field(&self) -> Size {
        self.field
    }
}
