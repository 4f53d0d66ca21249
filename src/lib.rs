//! Terminal host for the tic-tac-toe engine.
//!
//! The rules and the minimax opponent live in [`tictactoe_core`]; this crate
//! adds configuration, an interactive console, and one-shot commands.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use tictactoe::{Console, PlayConfig};
//!
//! let input = Cursor::new("x\n5\nquit\n");
//! let mut output = Vec::new();
//! let mut console = Console::new(input, &mut output, &PlayConfig::default());
//! console.run().unwrap();
//! assert_eq!(console.game().history().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analysis;
mod config;
mod console;

pub mod cli;

pub use analysis::{run_analyze, run_selfplay, side_to_move};
pub use config::{ConfigError, PlayConfig};
pub use console::{Console, Input, InputError, parse_input, verdict};
