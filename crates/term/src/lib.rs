//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the board is drawn into a plain
//! framebuffer which is then diffed and flushed to the terminal. Game events
//! feed a [`Hud`] that keeps messages and banners between frames.

pub mod fb;
pub mod game_view;
pub mod hud;
pub mod renderer;

pub use fruit_memory_core as core;
pub use fruit_memory_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{fruit_color, AnchorY, GameView, Viewport};
pub use hud::{Banner, Hud};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
