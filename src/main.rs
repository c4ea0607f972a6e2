mod display;

use std::fs::{self, File};
use std::io::{stdout, BufWriter, Write};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use galaga_shooter::config::GameConfig;
use galaga_shooter::engine::GameEngine;
use galaga_shooter::entities::{Difficulty, GameStatus};
use galaga_shooter::input::{InputManager, HOLD_WINDOW};
use galaga_shooter::settings::Settings;

use display::{CellSurface, Frame, Hud, LoggedAds};

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS
/// Longest step fed to the simulation; a stalled terminal must not teleport
/// everything on the next frame.
const MAX_DT: f32 = 0.1;
const LOG_FILE: &str = "galaga_shooter.log";

// ── Logging ───────────────────────────────────────────────────────────────────

/// Log to a file next to the settings: the terminal belongs to the game.
/// Filter comes from `GALAGA_LOG`, default `info`.
fn init_logging() {
    let Some(dir) = dirs::data_local_dir().map(|d| d.join("galaga_shooter")) else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = File::create(dir.join(LOG_FILE)) else {
        return;
    };
    let filter = EnvFilter::try_from_env("GALAGA_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}

// ── Host keys ─────────────────────────────────────────────────────────────────

enum HostAction {
    Continue,
    Quit,
}

/// One-shot keys the terminal host handles itself.  Movement, fire and
/// pause go through the engine's input manager.
fn handle_host_key(
    engine: &mut GameEngine,
    settings: &mut Settings,
    code: KeyCode,
    modifiers: KeyModifiers,
) -> HostAction {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return HostAction::Quit,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return HostAction::Quit,
        _ => {}
    }

    match (engine.status(), code) {
        (GameStatus::Start, KeyCode::Enter) => engine.begin(),
        (GameStatus::Start, KeyCode::Char('v') | KeyCode::Char('V')) => {
            let enabled = settings.toggle_vibration();
            info!(enabled, "Vibration toggled");
            settings.save();
        }
        (GameStatus::DifficultySelect, KeyCode::Char(c @ '1'..='3')) => {
            let difficulty = match c {
                '1' => Difficulty::Easy,
                '2' => Difficulty::Normal,
                _ => Difficulty::Hard,
            };
            start_game(engine, settings, difficulty);
        }
        (GameStatus::DifficultySelect, KeyCode::Enter) => {
            let last = settings.difficulty;
            start_game(engine, settings, last);
        }
        (GameStatus::DifficultySelect, KeyCode::Esc) => engine.return_to_menu(),
        (GameStatus::GameOver, KeyCode::Char('r') | KeyCode::Char('R')) => engine.restart(),
        (GameStatus::GameOver, KeyCode::Char('m') | KeyCode::Char('M')) => engine.return_to_menu(),
        _ => {}
    }
    HostAction::Continue
}

fn start_game(engine: &mut GameEngine, settings: &mut Settings, difficulty: Difficulty) {
    engine.select_difficulty(difficulty);
    if settings.difficulty != difficulty {
        settings.difficulty = difficulty;
        settings.save();
    }
}

// ── Frame loop ────────────────────────────────────────────────────────────────

fn game_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    settings: &mut Settings,
) -> std::io::Result<()> {
    let hud = Hud::default();
    let mut engine = GameEngine::new(GameConfig::default())
        .with_input(InputManager::with_hold_window(HOLD_WINDOW))
        .with_ui(Box::new(hud.clone()))
        .with_ads(Box::new(LoggedAds));
    let field = engine.field();
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();
        engine.input_mut().begin_frame();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::FocusLost => engine.input_mut().blur(),
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press {
                        if let HostAction::Quit =
                            handle_host_key(&mut engine, settings, key.code, key.modifiers)
                        {
                            engine.destroy();
                            return Ok(());
                        }
                    }
                    engine.input_mut().handle_key_event(&key);
                }
                _ => {}
            }
        }

        // ── Advance the simulation ────────────────────────────────────────────
        let before = engine.status();
        let dt = last.elapsed().as_secs_f32().min(MAX_DT);
        last = Instant::now();
        engine.update(dt);

        if before != GameStatus::GameOver && engine.status() == GameStatus::GameOver {
            let score = engine.stats().score;
            if settings.record_score(score) {
                info!(score, "New high score");
                settings.save();
            }
        }

        // ── Draw ──────────────────────────────────────────────────────────────
        let (width, height) = terminal::size()?;
        let (_, _, cols, rows) = display::play_area(width, height);
        let mut surface = CellSurface::new(field, cols, rows);
        engine.render(&mut surface);
        {
            let state = hud.state();
            let frame = Frame {
                status: engine.status(),
                difficulty: engine.difficulty(),
                hud: &state,
                high_score: settings.high_score,
                vibration: settings.vibration_enabled,
            };
            display::render(out, &surface, &frame)?;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    init_logging();
    let mut settings = Settings::load_or_default();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    if out.execute(event::EnableFocusChange).is_err() {
        warn!("Terminal does not report focus changes");
    }

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to the hold window.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    info!("Starting, high score {}", settings.high_score);
    let result = game_loop(&mut out, &rx, &mut settings);
    drop(rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(event::DisableFocusChange);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        warn!("Exited with terminal error: {}", e);
    }
    result
}
