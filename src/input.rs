//! Raw device input → the abstract key record the engine polls.
//!
//! Keyboard events come through a fixed code table.  Touch and joystick
//! gestures are turned into the same directional flags by threshold
//! heuristics.  The engine only ever sees a [`KeyState`].

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// A key is considered held if its last press/repeat event arrived within
/// this many frames.  Covers terminals that never emit key-release events.
pub const HOLD_WINDOW: u64 = 4;
/// Fraction of the joystick radius a drag must pass before it registers.
pub const JOYSTICK_THRESHOLD: f32 = 0.3;
/// Fraction of the screen a touch must sit away from the anchor.
pub const TOUCH_THRESHOLD: f32 = 0.05;
/// Where the ship usually sits, relative to the touch area.
pub const TOUCH_ANCHOR: (f32, f32) = (0.5, 0.8);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    Left,
    Right,
    Up,
    Down,
    Shoot,
    Confirm,
    Cancel,
}

impl LogicalKey {
    pub const ALL: [LogicalKey; 7] = [
        LogicalKey::Left,
        LogicalKey::Right,
        LogicalKey::Up,
        LogicalKey::Down,
        LogicalKey::Shoot,
        LogicalKey::Confirm,
        LogicalKey::Cancel,
    ];
}

/// Pressed/released snapshot polled once per update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub shoot: bool,
    pub confirm: bool,
    pub cancel: bool,
}

impl KeyState {
    pub fn get(&self, key: LogicalKey) -> bool {
        match key {
            LogicalKey::Left => self.left,
            LogicalKey::Right => self.right,
            LogicalKey::Up => self.up,
            LogicalKey::Down => self.down,
            LogicalKey::Shoot => self.shoot,
            LogicalKey::Confirm => self.confirm,
            LogicalKey::Cancel => self.cancel,
        }
    }

    pub fn set(&mut self, key: LogicalKey, pressed: bool) {
        let slot = match key {
            LogicalKey::Left => &mut self.left,
            LogicalKey::Right => &mut self.right,
            LogicalKey::Up => &mut self.up,
            LogicalKey::Down => &mut self.down,
            LogicalKey::Shoot => &mut self.shoot,
            LogicalKey::Confirm => &mut self.confirm,
            LogicalKey::Cancel => &mut self.cancel,
        };
        *slot = pressed;
    }

    fn release_directions(&mut self) {
        self.left = false;
        self.right = false;
        self.up = false;
        self.down = false;
    }
}

/// Keyboard code → logical key.  Letters match in either case.
pub fn map_key(code: KeyCode) -> Option<LogicalKey> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(LogicalKey::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(LogicalKey::Right),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(LogicalKey::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(LogicalKey::Down),
        KeyCode::Char(' ') => Some(LogicalKey::Shoot),
        KeyCode::Enter => Some(LogicalKey::Confirm),
        KeyCode::Esc => Some(LogicalKey::Cancel),
        _ => None,
    }
}

#[derive(Debug, Default)]
pub struct InputManager {
    /// Keyboard: logical key → frame it was last pressed or repeated.
    key_frames: HashMap<LogicalKey, u64>,
    /// `None` keeps keys down until an explicit release.
    hold_window: Option<u64>,
    frame: u64,
    /// Directions and shoot driven by touch or joystick.
    pointer: KeyState,
    touch_active: bool,
    auto_shoot: bool,
    joystick_active: bool,
}

impl InputManager {
    /// Keys stay down until released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys also lapse `frames` frames after their last press or repeat.
    pub fn with_hold_window(frames: u64) -> Self {
        Self {
            hold_window: Some(frames),
            ..Self::default()
        }
    }

    /// Advance the frame counter.  Call once per frame before feeding events.
    pub fn begin_frame(&mut self) {
        self.frame += 1;
        if let Some(window) = self.hold_window {
            let frame = self.frame;
            self.key_frames
                .retain(|_, last| frame.saturating_sub(*last) <= window);
        }
    }

    /// Feed one terminal key event.  Returns the logical key it mapped to.
    pub fn handle_key_event(&mut self, event: &KeyEvent) -> Option<LogicalKey> {
        let key = map_key(event.code)?;
        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.key_down(key),
            KeyEventKind::Release => self.key_up(key),
        }
        Some(key)
    }

    pub fn key_down(&mut self, key: LogicalKey) {
        self.key_frames.insert(key, self.frame);
    }

    pub fn key_up(&mut self, key: LogicalKey) {
        self.key_frames.remove(&key);
    }

    /// Focus lost: release everything.
    pub fn blur(&mut self) {
        self.key_frames.clear();
        self.pointer = KeyState::default();
        self.touch_active = false;
        self.auto_shoot = false;
        self.joystick_active = false;
    }

    pub fn key_state(&self) -> KeyState {
        let mut state = self.pointer;
        for key in LogicalKey::ALL {
            if self.key_frames.contains_key(&key) {
                state.set(key, true);
            }
        }
        state
    }

    pub fn is_pressed(&self, key: LogicalKey) -> bool {
        self.key_state().get(key)
    }

    // ── Joystick ──────────────────────────────────────────────────────────────

    /// Drag offset from the joystick centre, in the same units as `radius`.
    pub fn joystick_move(&mut self, dx: f32, dy: f32, radius: f32) {
        self.joystick_active = true;
        let distance = (dx * dx + dy * dy).sqrt();
        let (x, y) = if distance > radius && distance > 0.0 {
            (dx / distance * radius, dy / distance * radius)
        } else {
            (dx, dy)
        };
        let threshold = radius * JOYSTICK_THRESHOLD;
        self.pointer.left = x < -threshold;
        self.pointer.right = x > threshold;
        self.pointer.up = y < -threshold;
        self.pointer.down = y > threshold;
    }

    pub fn joystick_end(&mut self) {
        self.joystick_active = false;
        self.pointer.release_directions();
    }

    // ── Full-screen touch ─────────────────────────────────────────────────────

    /// Touch down at `(rel_x, rel_y)` within the play area, both 0..=1.
    /// Touches outside the area are ignored.  Touching starts auto-fire.
    pub fn touch_start(&mut self, rel_x: f32, rel_y: f32) {
        if !(0.0..=1.0).contains(&rel_x) || !(0.0..=1.0).contains(&rel_y) {
            return;
        }
        self.touch_active = true;
        self.auto_shoot = true;
        self.apply_touch(rel_x, rel_y);
    }

    pub fn touch_move(&mut self, rel_x: f32, rel_y: f32) {
        if self.touch_active
            && (0.0..=1.0).contains(&rel_x)
            && (0.0..=1.0).contains(&rel_y)
        {
            self.apply_touch(rel_x, rel_y);
        }
    }

    /// Lifting the finger stops both movement and fire.
    pub fn touch_end(&mut self) {
        self.touch_active = false;
        self.auto_shoot = false;
        self.pointer.release_directions();
        self.pointer.shoot = false;
    }

    pub fn is_auto_shoot_active(&self) -> bool {
        self.auto_shoot
    }

    fn apply_touch(&mut self, rel_x: f32, rel_y: f32) {
        let dx = rel_x - TOUCH_ANCHOR.0;
        let dy = rel_y - TOUCH_ANCHOR.1;
        self.pointer.left = dx < -TOUCH_THRESHOLD;
        self.pointer.right = dx > TOUCH_THRESHOLD;
        self.pointer.up = dy < -TOUCH_THRESHOLD;
        self.pointer.down = dy > TOUCH_THRESHOLD;
        self.pointer.shoot = self.auto_shoot;
    }
}
