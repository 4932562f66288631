/*!
## Machine Module

This module is the execution engine for IB Core BASIC: values, the program
store, the environment, the expression evaluator, the statement dispatcher,
and the runtime that ties them together behind an event interface.

*/

/// Maximum number of stored program lines.
pub const MAX_LINES: usize = 500;
/// Maximum characters in one stored line, excluding the line number.
pub const MAX_LINE_LEN: usize = 127;
/// Maximum nested GOSUB calls.
pub const STACK_SIZE: usize = 64;
/// Variables A through Z.
pub const NUM_VARIABLES: usize = 26;
/// Program storage modeled for the banner: each slot holds the line text
/// plus a four-byte line number, 65500 bytes in all.
pub const PROGRAM_BYTES: usize = MAX_LINES * (MAX_LINE_LEN + 4);

pub const DIALECT: &str = "core";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod env;
mod expr;
mod files;
mod listing;
mod runtime;
mod statement;
mod val;

pub use env::Env;
pub use env::Stack;
pub use env::Vars;
pub use files::LPRINT_FILENAME;
pub use listing::Listing;
pub use listing::ProgramLine;
pub use listing::Upsert;
pub use runtime::Event;
pub use runtime::Module;
pub use runtime::Runtime;
pub use val::Val;
