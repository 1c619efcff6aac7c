//! Memory Match (workspace facade crate).
//!
//! Re-exports the member crates as `memory_match::{core,input,term,types}` and
//! hosts the pieces shared by the binary: command-line parsing, logging setup
//! and the headless [`app::App`] controller that sits between the engine and
//! the terminal.

pub use memory_match_core as core;
pub use memory_match_input as input;
pub use memory_match_term as term;
pub use memory_match_types as types;

pub mod app;
pub mod cli;
pub mod logging;
