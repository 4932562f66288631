use super::{MAX_LINES, MAX_LINE_LEN};
use crate::error;
use crate::lang::{Error, LineNumber};

type Result<T> = std::result::Result<T, Error>;

/// One stored program line. The text excludes the line-number prefix and
/// the whitespace that followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramLine {
    number: LineNumber,
    text: String,
}

impl ProgramLine {
    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for ProgramLine {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.number, self.text)
    }
}

/// What [`Listing::upsert`] did with the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Inserted(usize),
    Replaced(usize),
    Deleted(usize),
    Ignored,
}

/// ## Program store
///
/// The stored program: a sequence of lines kept strictly ascending by line
/// number, at most [`MAX_LINES`] of them. Store indices, not line numbers,
/// are the program-counter domain.
#[derive(Debug, Default)]
pub struct Listing {
    lines: Vec<ProgramLine>,
}

impl Listing {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear()
    }

    pub fn get(&self, index: usize) -> Option<&ProgramLine> {
        self.lines.get(index)
    }

    /// Records in ascending order, for LIST, SAVE, and RUN.
    pub fn lines(&self) -> std::slice::Iter<'_, ProgramLine> {
        self.lines.iter()
    }

    /// Linear scan; the store is sorted, so stop at the first greater
    /// number.
    pub fn lookup(&self, number: LineNumber) -> Option<usize> {
        for (index, line) in self.lines.iter().enumerate() {
            if line.number == number {
                return Some(index);
            }
            if line.number > number {
                break;
            }
        }
        None
    }

    /// Inserts, replaces, or (on empty text) deletes the record for
    /// `number`, preserving the sort.
    pub fn upsert(&mut self, number: LineNumber, text: &str) -> Result<Upsert> {
        let found = self.lookup(number);
        if text.trim().is_empty() {
            return Ok(match found {
                Some(index) => {
                    self.lines.remove(index);
                    Upsert::Deleted(index)
                }
                None => Upsert::Ignored,
            });
        }
        let text: String = text.chars().take(MAX_LINE_LEN).collect();
        if let Some(index) = found {
            self.lines[index].text = text;
            return Ok(Upsert::Replaced(index));
        }
        if self.lines.len() == MAX_LINES {
            return Err(error!(MemoryFull));
        }
        let index = self
            .lines
            .iter()
            .position(|line| line.number > number)
            .unwrap_or(self.lines.len());
        self.lines.insert(index, ProgramLine { number, text });
        Ok(Upsert::Inserted(index))
    }

    /// Parses a raw editor line such as `10 PRINT A` and applies it.
    pub fn store(&mut self, line: &str) -> Result<(LineNumber, Upsert)> {
        let line = line.trim_start();
        let digits_end = line
            .find(|ch: char| !ch.is_ascii_digit())
            .unwrap_or(line.len());
        let number = match line[..digits_end].parse::<u32>() {
            Ok(number) if (1..=LineNumber::MAX as u32).contains(&number) => number as LineNumber,
            _ => return Err(error!(InvalidLineNumber)),
        };
        let text = line[digits_end..].trim_start();
        Ok((number, self.upsert(number, text)?))
    }
}
