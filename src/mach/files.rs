use std::fs;
use std::io::{BufRead, BufReader, Write};

use super::{Listing, Val};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Fixed line-printer sink, opened in append mode for each LPRINT.
pub const LPRINT_FILENAME: &str = "lprint.out";

/// Writes the listing as plain text, one `<n> <text>` line per record,
/// LF terminated.
pub fn save(filename: &str, listing: &Listing) -> Result<()> {
    let mut file = fs::File::create(filename).map_err(|_| error!(CannotOpenFile))?;
    for line in listing.lines() {
        writeln!(file, "{}", line).map_err(|_| error!(CannotOpenFile))?;
    }
    Ok(())
}

/// Reads a program file into raw lines; the caller feeds them through the
/// editor. LF and CRLF endings are both accepted.
pub fn load(filename: &str) -> Result<Vec<String>> {
    let file = fs::File::open(filename).map_err(|_| error!(FileNotFound))?;
    let mut lines = vec![];
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|_| error!(FileNotFound))?;
        lines.push(line.trim_end_matches('\r').to_string());
    }
    Ok(lines)
}

/// Appends one value to [`LPRINT_FILENAME`].
pub fn lprint(value: Val) -> Result<()> {
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(LPRINT_FILENAME)
        .map_err(|_| error!(LprintFile))?;
    writeln!(file, "{}", value).map_err(|_| error!(LprintFile))
}
