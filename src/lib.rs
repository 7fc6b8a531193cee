//! Fruit memory (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, benches and
//! integration tests can use `fruit_memory::{core, input, term, types}`.

pub use fruit_memory_core as core;
pub use fruit_memory_input as input;
pub use fruit_memory_term as term;
pub use fruit_memory_types as types;
