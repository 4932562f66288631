/*!
## Language Module

This module provides lexical support for IB Core BASIC: the cursor over a
single source line and the error type shared by the whole interpreter.

*/

/// User-visible line number, the editor key and branch target.
pub type LineNumber = u16;

/// Longest statement keyword the dispatcher will read.
pub const MAX_KEYWORD_LEN: usize = 31;

mod cursor;
mod error;

pub use cursor::Cursor;
pub use error::Error;
pub use error::ErrorCode;
