//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the fruit memory game: board generation,
//! target sequences, the view/verify interaction protocol and the round
//! lifecycle. It never touches the terminal or the wall clock:
//!
//! - **Deterministic**: the same seed produces the same boards and sequences
//! - **Tick driven**: time only advances through [`GameState::tick`]
//! - **Event based**: every visible change is queued as a [`GameEvent`]
//!
//! # Module Structure
//!
//! - [`board`]: N x N grid of fruits
//! - [`rng`]: seeded board and target-sequence generation
//! - [`settings`]: main-game and custom-mode settings, TOML loading
//! - [`round`]: per-level progress (revealed, matched, selected cells)
//! - [`timers`]: deadline queue with generation tags
//! - [`game_state`]: the controller tying everything together
//! - [`events`]: lifecycle events and the [`Presenter`] seam
//! - [`command`]: front-end commands
//! - [`snapshot`]: read-only round view for renderers
//!
//! # Example
//!
//! ```
//! use fruit_memory_core::{GameState, Phase};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//! assert_eq!(game.phase(), Phase::SequenceDisplay);
//!
//! // The target sequence is shown for five seconds.
//! game.tick(5_000);
//! assert_eq!(game.phase(), Phase::Playing);
//!
//! // Reveal the first cell; it hides itself again after 2.5s.
//! game.view_cell(0).unwrap();
//! game.tick(2_500);
//! assert!(!game.round().is_active(0));
//! ```

pub mod board;
pub mod command;
pub mod error;
pub mod events;
pub mod game_state;
pub mod rng;
pub mod round;
pub mod settings;
pub mod snapshot;
pub mod timers;

pub use fruit_memory_types as types;

pub use board::Board;
pub use command::GameCommand;
pub use error::{CommandError, GameError, InteractionRejection, SettingsError};
pub use events::{dispatch, GameEvent, Presenter};
pub use game_state::{GameState, VerifyOutcome};
pub use rng::Randomizer;
pub use round::RoundState;
pub use settings::Settings;
pub use snapshot::RoundSnapshot;
pub use types::{CellView, FailureBehavior, FailureReason, Fruit, Phase, Severity};
