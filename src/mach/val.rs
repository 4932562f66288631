use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## 8-bit values
///
/// Every IB Core expression yields one of these. Arithmetic is performed
/// modulo 256 with two's-complement interpretation; division truncates
/// toward zero and fails on a zero divisor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Val(i8);

impl Val {
    pub const ZERO: Val = Val(0);

    /// Truncating cast, the single place wide integers narrow to 8 bits:
    /// `300` becomes 44, `128` becomes -128, `-129` becomes 127.
    pub fn from_wide(wide: i64) -> Val {
        Val(wide as i8)
    }

    pub fn add(lhs: Val, rhs: Val) -> Val {
        Val(lhs.0.wrapping_add(rhs.0))
    }

    pub fn sub(lhs: Val, rhs: Val) -> Val {
        Val(lhs.0.wrapping_sub(rhs.0))
    }

    pub fn mul(lhs: Val, rhs: Val) -> Val {
        Val(lhs.0.wrapping_mul(rhs.0))
    }

    /// Wrapping keeps `-128 / -1` in range.
    pub fn div(lhs: Val, rhs: Val) -> Result<Val> {
        if rhs.0 == 0 {
            return Err(error!(DivisionByZero));
        }
        Ok(Val(lhs.0.wrapping_div(rhs.0)))
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
