use super::MAX_KEYWORD_LEN;

/// ## Lexical cursor
///
/// An indexed view over one line of source. The line buffer is owned by the
/// executing statement; the cursor is passed explicitly to every consumer
/// and never outlives the buffer it reads.
#[derive(Debug)]
pub struct Cursor<'a> {
    line: &'a str,
    pos: usize,
}

fn is_basic_whitespace(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

impl<'a> Cursor<'a> {
    pub fn new(line: &'a str) -> Cursor<'a> {
        Cursor { line, pos: 0 }
    }

    /// Everything from the cursor to the end of the line.
    pub fn rest(&self) -> &'a str {
        &self.line[self.pos..]
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.line.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Spaces and tabs only; lines are single-line.
    pub fn skip_ws(&mut self) {
        while let Some(ch) = self.peek() {
            if !is_basic_whitespace(ch) {
                break;
            }
            self.pos += 1;
        }
    }

    /// Reads the leading statement keyword, uppercased: letters and `$`,
    /// at most [`MAX_KEYWORD_LEN`] characters.
    pub fn read_keyword(&mut self) -> String {
        let mut keyword = String::new();
        while let Some(ch) = self.peek() {
            if keyword.len() == MAX_KEYWORD_LEN || !(ch.is_ascii_alphabetic() || ch == '$') {
                break;
            }
            keyword.push(ch.to_ascii_uppercase());
            self.pos += 1;
        }
        keyword
    }

    /// True when the upper-cased input at the cursor equals `keyword` and
    /// the next character is end-of-line or whitespace; consumes the
    /// keyword on a match. The boundary check keeps `THENOR` from
    /// matching `THEN`.
    pub fn match_keyword(&mut self, keyword: &str) -> bool {
        let rest = self.rest();
        let prefix = match rest.get(..keyword.len()) {
            Some(prefix) => prefix,
            None => return false,
        };
        if !prefix.eq_ignore_ascii_case(keyword) {
            return false;
        }
        match rest[keyword.len()..].chars().next() {
            Some(ch) if !is_basic_whitespace(ch) => false,
            _ => {
                self.pos += keyword.len();
                true
            }
        }
    }

    /// Returns the variable letter at the cursor, uppercased, consuming it
    /// when present.
    pub fn read_variable(&mut self) -> Option<char> {
        match self.peek() {
            Some(ch) if ch.is_ascii_alphabetic() => {
                self.pos += 1;
                Some(ch.to_ascii_uppercase())
            }
            _ => None,
        }
    }
}
