//! Logic layer: command parsing, dispatch, and execution.
//!
//! Raw input text plus the current session state go in; a validated command
//! comes out of the parser, and executing it mutates the document model,
//! advances the session state, and yields a result for the caller to render.

pub mod command;
pub mod executor;
pub mod logic;
pub mod model;
pub mod parser;

pub use command::{Command, CommandResult};
pub use logic::Logic;
pub use model::Model;
