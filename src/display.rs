/// Terminal front-end: a cell-grid [`Surface`], the HUD sink the engine
/// pushes into, and the menu screens.
///
/// The engine draws in logical play-field units (800×600).  `CellSurface`
/// scales those onto whatever terminal area is available, so the simulation
/// never sees the terminal size.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io::Write;
use std::rc::Rc;

use crossterm::{
    cursor,
    style::{self, Color as TermColor, Print},
    terminal,
    QueueableCommand,
};
use tracing::debug;

use galaga_shooter::entities::{Difficulty, GameStatus};
use galaga_shooter::geometry::{Rect, Size};
use galaga_shooter::render::{AdNotifier, AdSlot, Color, Surface, UiField, UiSink};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: TermColor = TermColor::DarkBlue;
const C_HUD_SCORE: TermColor = TermColor::Yellow;
const C_HUD_LIVES: TermColor = TermColor::Red;
const C_HUD_WEAPON: TermColor = TermColor::Cyan;
const C_HUD_BOSS: TermColor = TermColor::Magenta;
const C_HINT: TermColor = TermColor::DarkGrey;

fn term_color(c: Color) -> TermColor {
    TermColor::Rgb { r: c.r, g: c.g, b: c.b }
}

// ── Cell surface ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy)]
struct Cell {
    glyph: char,
    color: Color,
}

/// Rasterises engine draw calls onto a `cols × rows` character grid.
pub struct CellSurface {
    cols: u16,
    rows: u16,
    scale_x: f32,
    scale_y: f32,
    cells: Vec<Option<Cell>>,
}

impl CellSurface {
    pub fn new(field: Size, cols: u16, rows: u16) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            scale_x: cols as f32 / field.width,
            scale_y: rows as f32 / field.height,
            cells: vec![None; cols as usize * rows as usize],
        }
    }

    fn put(&mut self, col: i32, row: i32, glyph: char, color: Color) {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return;
        }
        self.cells[row as usize * self.cols as usize + col as usize] = Some(Cell { glyph, color });
    }

    /// Inclusive cell span covered by `rect`; never empty.
    fn span(&self, rect: Rect) -> (i32, i32, i32, i32) {
        let c0 = (rect.x * self.scale_x).floor() as i32;
        let r0 = (rect.y * self.scale_y).floor() as i32;
        let c1 = (((rect.x + rect.width) * self.scale_x).ceil() as i32 - 1).max(c0);
        let r1 = (((rect.y + rect.height) * self.scale_y).ceil() as i32 - 1).max(r0);
        (c0, r0, c1, r1)
    }

    /// Queue the grid at terminal offset `(left, top)`.
    pub fn draw<W: Write>(&self, out: &mut W, left: u16, top: u16) -> std::io::Result<()> {
        for row in 0..self.rows {
            for col in 0..self.cols {
                if let Some(cell) = self.cells[row as usize * self.cols as usize + col as usize] {
                    out.queue(cursor::MoveTo(left + col, top + row))?;
                    out.queue(style::SetForegroundColor(term_color(cell.color)))?;
                    out.queue(Print(cell.glyph))?;
                }
            }
        }
        Ok(())
    }
}

impl Surface for CellSurface {
    fn clear(&mut self, _color: Color) {
        self.cells.iter_mut().for_each(|c| *c = None);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let tiny = rect.width * self.scale_x < 0.5 && rect.height * self.scale_y < 0.5;
        let glyph = match (tiny, rect.height > rect.width * 1.5) {
            (true, true) => '|',
            (true, false) => '·',
            (false, _) => '█',
        };
        let (c0, r0, c1, r1) = self.span(rect);
        for row in r0..=r1 {
            for col in c0..=c1 {
                self.put(col, row, glyph, color);
            }
        }
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        let (c0, r0, c1, r1) = self.span(rect);
        for col in c0..=c1 {
            self.put(col, r0, '─', color);
            self.put(col, r1, '─', color);
        }
        for row in r0..=r1 {
            self.put(c0, row, '│', color);
            self.put(c1, row, '│', color);
        }
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: Color) {
        let col = (x * self.scale_x).floor() as i32;
        let row = (y * self.scale_y).floor() as i32;
        for (i, ch) in text.chars().enumerate() {
            self.put(col + i as i32, row, ch, color);
        }
    }
}

// ── HUD sink ──────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct HudState {
    text: HashMap<UiField, String>,
    visible: HashSet<UiField>,
}

impl HudState {
    pub fn text(&self, field: UiField) -> &str {
        self.text.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn is_visible(&self, field: UiField) -> bool {
        self.visible.contains(&field)
    }
}

/// Cloneable handle: the engine owns one, the frame loop reads another.
#[derive(Clone, Default)]
pub struct Hud(Rc<RefCell<HudState>>);

impl Hud {
    pub fn state(&self) -> std::cell::Ref<'_, HudState> {
        self.0.borrow()
    }
}

impl UiSink for Hud {
    fn set_text(&mut self, field: UiField, text: &str) {
        self.0.borrow_mut().text.insert(field, text.to_string());
    }

    fn set_visible(&mut self, field: UiField, visible: bool) {
        let mut state = self.0.borrow_mut();
        if visible {
            state.visible.insert(field);
        } else {
            state.visible.remove(&field);
        }
    }
}

/// A terminal has no ad slots; transitions are only logged.
pub struct LoggedAds;

impl AdNotifier for LoggedAds {
    fn set_visible(&mut self, slot: AdSlot, visible: bool) {
        debug!(?slot, visible, "Ad slot");
    }

    fn boss_encounter_started(&mut self) {
        debug!("Ad notifier: boss encounter");
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Everything the frame needs besides the engine's own drawing.
pub struct Frame<'a> {
    pub status: GameStatus,
    pub difficulty: Difficulty,
    pub hud: &'a HudState,
    pub high_score: u32,
    pub vibration: bool,
}

/// Play area inside the border: `(left, top, cols, rows)`.
pub fn play_area(width: u16, height: u16) -> (u16, u16, u16, u16) {
    (1, 2, width.saturating_sub(2), height.saturating_sub(4))
}

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, surface: &CellSurface, frame: &Frame) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    let (left, top, _, _) = play_area(width, height);

    out.queue(terminal::Clear(terminal::ClearType::All))?;
    draw_border(out, width, height)?;
    surface.draw(out, left, top)?;

    match frame.status {
        GameStatus::Start => draw_start_screen(out, width, height, frame)?,
        GameStatus::DifficultySelect => draw_difficulty_screen(out, width, height)?,
        _ => {
            draw_hud(out, width, frame)?;
            if frame.status == GameStatus::GameOver {
                draw_game_over(out, width, height, frame)?;
            }
        }
    }
    draw_bottom_line(out, height, frame)?;

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, width: u16, height: u16) -> std::io::Result<()> {
    let w = width as usize;
    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..height.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, width: u16, frame: &Frame) -> std::io::Result<()> {
    let hud = frame.hud;

    // Score, level and stage on the left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!(
        "Score:{:>7}  Lv {}  Stage {}",
        hud.text(UiField::Score),
        hud.text(UiField::Level),
        hud.text(UiField::Stage)
    )))?;

    // Weapon and timed power-ups in the middle
    let mut weapon = format!(
        "[{}x {}] items {}",
        hud.text(UiField::MissileCount),
        hud.text(UiField::MissileTier),
        hud.text(UiField::ItemsCount)
    );
    if hud.is_visible(UiField::PowerUpStatus) {
        weapon.push_str(&format!("  POWER {}s", hud.text(UiField::PowerUpTime)));
    }
    if hud.is_visible(UiField::ShieldStatus) {
        weapon.push_str(&format!("  SHIELD {}", hud.text(UiField::ShieldHits)));
    }
    let wx = (width / 2).saturating_sub(weapon.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(wx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_WEAPON))?;
    out.queue(Print(&weapon))?;

    // Lives on the right
    let lives: usize = hud.text(UiField::Lives).parse().unwrap_or(0);
    let lives_text = format!("Lives:{}", "♥".repeat(lives));
    let rx = width.saturating_sub(lives_text.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_text))?;

    // Boss health bar in the top border
    if hud.is_visible(UiField::BossPanel) {
        let boss = format!(" BOSS {} ", hud.text(UiField::BossHealth));
        let bx = (width / 2).saturating_sub(boss.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(bx, 1))?;
        out.queue(style::SetForegroundColor(C_HUD_BOSS))?;
        out.queue(Print(&boss))?;
    }
    Ok(())
}

// ── Bottom line: notification or controls hint ────────────────────────────────

fn draw_bottom_line<W: Write>(out: &mut W, height: u16, frame: &Frame) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, height.saturating_sub(1)))?;
    if frame.hud.is_visible(UiField::Notification) && frame.status.is_running() {
        out.queue(style::SetForegroundColor(TermColor::Yellow))?;
        out.queue(Print(frame.hud.text(UiField::Notification)))?;
    } else {
        out.queue(style::SetForegroundColor(C_HINT))?;
        let pool = format!(
            "   pool {}/{}",
            frame.hud.text(UiField::PoolActive),
            frame.hud.text(UiField::PoolTotal)
        );
        out.queue(Print(format!("←→↑↓ / WASD : Move   SPACE : Shoot   ESC : Pause   Q : Quit{}", pool)))?;
    }
    Ok(())
}

// ── Menu screens ──────────────────────────────────────────────────────────────

fn centered<W: Write>(out: &mut W, width: u16, row: u16, text: &str, color: TermColor) -> std::io::Result<()> {
    let col = (width / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

fn draw_start_screen<W: Write>(out: &mut W, width: u16, height: u16, frame: &Frame) -> std::io::Result<()> {
    let cy = height / 2;
    centered(out, width, cy.saturating_sub(5), "★  G A L A G A  ★", TermColor::Cyan)?;
    if frame.high_score > 0 {
        centered(out, width, cy.saturating_sub(3), &format!("Best Score: {}", frame.high_score), TermColor::Yellow)?;
    }
    centered(out, width, cy.saturating_sub(1), "ENTER - Start", TermColor::White)?;
    let vibration = if frame.vibration { "on" } else { "off" };
    centered(out, width, cy, &format!("V - Vibration: {}", vibration), TermColor::DarkGrey)?;
    centered(out, width, cy + 1, "Q - Quit", TermColor::DarkGrey)?;

    let legend: &[(&str, TermColor)] = &[
        ("M  MultiShot  - one more muzzle / weapon tier", TermColor::Cyan),
        ("+  ExtraLife  - one more life (max 5)", TermColor::Red),
        ("P  PowerUp    - double damage for 10s", TermColor::Yellow),
        ("S  Shield     - blocks 3 hits for 15s", TermColor::Blue),
    ];
    for (i, (line, color)) in legend.iter().enumerate() {
        centered(out, width, cy + 3 + i as u16, line, *color)?;
    }
    Ok(())
}

fn draw_difficulty_screen<W: Write>(out: &mut W, width: u16, height: u16) -> std::io::Result<()> {
    let cy = height / 2;
    centered(out, width, cy.saturating_sub(3), "Select difficulty:", TermColor::White)?;
    let options: &[(&str, TermColor)] = &[
        ("[1] EASY    - slower enemies, more drops", TermColor::Green),
        ("[2] NORMAL  - balanced challenge", TermColor::Yellow),
        ("[3] HARD    - fast, relentless, 1.5x score", TermColor::Red),
    ];
    for (i, (line, color)) in options.iter().enumerate() {
        centered(out, width, cy.saturating_sub(1) + i as u16, line, *color)?;
    }
    centered(out, width, cy + 3, "ESC - Back", TermColor::DarkGrey)?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, width: u16, height: u16, frame: &Frame) -> std::io::Result<()> {
    let score: u32 = frame.hud.text(UiField::FinalScore).parse().unwrap_or(0);
    let new_best = score > 0 && score >= frame.high_score;
    let best_line = if new_best {
        format!("★ NEW BEST: {:>7} ★", score)
    } else {
        format!("Best Score:  {:>7}", frame.high_score)
    };

    let start_row = (height / 2).saturating_sub(3);
    let lines: &[(&str, TermColor)] = &[
        ("╔════════════════════╗", TermColor::Red),
        ("║    GAME  OVER      ║", TermColor::Red),
        ("╚════════════════════╝", TermColor::Red),
    ];
    for (i, (line, color)) in lines.iter().enumerate() {
        centered(out, width, start_row + i as u16, line, *color)?;
    }
    centered(out, width, start_row + 3, &format!("Final Score: {:>7}", score), TermColor::Yellow)?;
    centered(
        out,
        width,
        start_row + 4,
        &best_line,
        if new_best { TermColor::Yellow } else { TermColor::DarkGrey },
    )?;
    centered(
        out,
        width,
        start_row + 5,
        &format!("{}  -  R : Play Again   M : Menu   Q : Quit", frame.difficulty.label()),
        TermColor::White,
    )?;
    Ok(())
}
