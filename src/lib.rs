//! Galaga-style shooter simulation.
//!
//! The library holds everything that decides what happens in a game: entity
//! movement, the bullet pool, collision resolution and the engine's state
//! machine.  Drawing, HUD text and ad slots are reached only through the
//! traits in [`render`], so any host (the terminal binary, a test harness)
//! can drive the same engine.

pub mod bullet;
pub mod bullet_pool;
pub mod compute;
pub mod config;
pub mod enemy;
pub mod engine;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod input;
pub mod player;
pub mod power_up;
pub mod render;
pub mod settings;
pub mod starfield;
