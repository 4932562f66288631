//! # IB Core BASIC
//!
//! An interactive interpreter for a minimal 8-bit integer BASIC, built for
//! constrained environments.
//! ```text
//! BASIC++ (core) v5.0.0
//! 63 kbytes Free
//! READY
//! ```
//!
//! Lines prefixed with a line number are stored into the in-memory program;
//! anything else executes immediately. The stored program can be listed,
//! saved to text, loaded from text, cleared, and run from its lowest line.
//!
//! All arithmetic is signed 8-bit with two's-complement wrap-around and no
//! operator precedence beyond parentheses. There are 26 global variables,
//! `A` through `Z`.

pub mod lang;
pub mod mach;
pub mod term;
