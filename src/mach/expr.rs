use super::{Val, Vars};
use crate::error;
use crate::lang::{Cursor, Error};

type Result<T> = std::result::Result<T, Error>;

/// ## Expression evaluator
///
/// Recursive descent over
/// ```text
/// expression := term ( ('+'|'-'|'*'|'/') term )*
/// term       := letter | '(' expression ')' | integer
/// ```
/// Evaluation is strictly left to right; parentheses are the only
/// precedence override. Every intermediate result is an 8-bit value.
pub fn evaluate(cursor: &mut Cursor, vars: &Vars) -> Result<Val> {
    let mut accum = term(cursor, vars)?;
    loop {
        cursor.skip_ws();
        let op = match cursor.peek() {
            Some(ch @ ('+' | '-' | '*' | '/')) => ch,
            _ => return Ok(accum),
        };
        cursor.advance();
        let rhs = term(cursor, vars)?;
        accum = match op {
            '+' => Val::add(accum, rhs),
            '-' => Val::sub(accum, rhs),
            '*' => Val::mul(accum, rhs),
            _ => Val::div(accum, rhs)?,
        };
    }
}

fn term(cursor: &mut Cursor, vars: &Vars) -> Result<Val> {
    cursor.skip_ws();
    match cursor.peek() {
        Some(ch) if ch.is_ascii_alphabetic() => {
            cursor.advance();
            let name = ch.to_ascii_uppercase();
            if !('A'..='Z').contains(&name) {
                return Err(error!(InvalidVariable));
            }
            Ok(vars.fetch(name))
        }
        Some('(') => {
            cursor.advance();
            let value = evaluate(cursor, vars)?;
            cursor.skip_ws();
            if cursor.peek() != Some(')') {
                return Err(error!(ExpectedRightParen));
            }
            cursor.advance();
            Ok(value)
        }
        _ => number(cursor),
    }
}

/// Decimal integer: optional `-`, digits, truncating 8-bit cast. The
/// accumulator wraps in 64 bits, so oversized literals keep their low
/// byte. Digits immediately followed by a letter are malformed; an
/// operator or `)` ends the number cleanly.
fn number(cursor: &mut Cursor) -> Result<Val> {
    cursor.skip_ws();
    let negative = match cursor.peek() {
        Some('-') => {
            cursor.advance();
            true
        }
        _ => false,
    };
    match cursor.peek() {
        Some(ch) if ch.is_ascii_digit() => {}
        _ => return Err(error!(ExpectedNumber)),
    }
    let mut wide: i64 = 0;
    while let Some(ch) = cursor.peek() {
        match ch.to_digit(10) {
            Some(digit) => {
                wide = wide.wrapping_mul(10).wrapping_add(digit as i64);
                cursor.advance();
            }
            None => break,
        }
    }
    if matches!(cursor.peek(), Some(ch) if ch.is_ascii_alphabetic()) {
        return Err(error!(InvalidNumber));
    }
    if negative {
        wide = wide.wrapping_neg();
    }
    Ok(Val::from_wide(wide))
}
