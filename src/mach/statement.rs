use super::runtime::Runtime;
use super::{expr, files, Val};
use crate::error;
use crate::lang::{Cursor, Error, LineNumber};

type Result<T> = std::result::Result<T, Error>;

type Handler = fn(&mut Runtime, &mut Cursor) -> Result<()>;

/// The fixed keyword table. `$…` keywords that are not listed fall
/// through to the module hook.
fn handler_for(keyword: &str) -> Option<Handler> {
    Some(match keyword {
        "PRINT" => Runtime::r#print,
        "LPRINT" => Runtime::lprint,
        "LET" => Runtime::r#let,
        "INPUT" => Runtime::input,
        "GOTO" => Runtime::goto,
        "GOSUB" => Runtime::gosub,
        "RETURN" => Runtime::r#return,
        "IF" => Runtime::r#if,
        "REM" => Runtime::rem,
        "END" | "STOP" => Runtime::end,
        "BEEP" => Runtime::beep,
        "RUN" => Runtime::run,
        "LIST" => Runtime::list,
        "NEW" => Runtime::new_program,
        "SAVE" => Runtime::save,
        "LOAD" => Runtime::load,
        "SYSTEM" => Runtime::system,
        "QUIT" | "EXIT" => Runtime::quit,
        _ => return None,
    })
}

#[derive(Debug, Clone, Copy)]
enum Relop {
    Equal,
    NotEqual,
    Less,
    Greater,
}

impl std::fmt::Display for Relop {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            Relop::Equal => "=",
            Relop::NotEqual => "<>",
            Relop::Less => "<",
            Relop::Greater => ">",
        };
        write!(f, "{}", s)
    }
}

impl Runtime {
    /// Reads the leading keyword and dispatches the remainder of the
    /// line. Re-entrant: the IF tail calls back in on the same cursor.
    pub(crate) fn statement(&mut self, cursor: &mut Cursor) -> Result<()> {
        cursor.skip_ws();
        let keyword = cursor.read_keyword();
        cursor.skip_ws();
        if keyword.is_empty() {
            return if cursor.at_end() {
                Ok(())
            } else {
                Err(error!(UnknownCommand))
            };
        }
        if self.env.debug {
            self.trace(format!(
                "Executing command: '{}', Args: '{}'",
                keyword,
                cursor.rest()
            ));
        }
        match handler_for(&keyword) {
            Some(handler) => handler(self, cursor),
            None if keyword.starts_with('$') => self.module_hook(&keyword, cursor.rest()),
            None => Err(error!(UnknownCommand)),
        }
    }

    /// PRINT: expression, quoted string, or nothing (which prints 0).
    fn r#print(&mut self, cursor: &mut Cursor) -> Result<()> {
        cursor.skip_ws();
        match cursor.peek() {
            Some('"') => {
                cursor.advance();
                let rest = cursor.rest();
                match rest.find('"') {
                    Some(end) => {
                        self.output(format!("{}\n", &rest[..end]));
                        Ok(())
                    }
                    None => Err(error!(UnterminatedString)),
                }
            }
            None => {
                self.output("0\n");
                Ok(())
            }
            Some(_) => {
                let value = expr::evaluate(cursor, &self.env.vars)?;
                self.output(format!("{}\n", value));
                Ok(())
            }
        }
    }

    /// LPRINT: appends the value to the line-printer file.
    fn lprint(&mut self, cursor: &mut Cursor) -> Result<()> {
        cursor.skip_ws();
        let value = if cursor.at_end() {
            Val::ZERO
        } else {
            expr::evaluate(cursor, &self.env.vars)?
        };
        files::lprint(value)
    }

    fn r#let(&mut self, cursor: &mut Cursor) -> Result<()> {
        cursor.skip_ws();
        let name = match cursor.read_variable() {
            Some(name) => name,
            None => return Err(error!(ExpectedLetVariable)),
        };
        cursor.skip_ws();
        if cursor.peek() != Some('=') {
            return Err(error!(ExpectedLetEquals));
        }
        cursor.advance();
        let value = expr::evaluate(cursor, &self.env.vars)?;
        self.env.vars.store(name, value);
        Ok(())
    }

    /// INPUT: the variable is checked before the console is prompted.
    fn input(&mut self, cursor: &mut Cursor) -> Result<()> {
        cursor.skip_ws();
        let name = match cursor.read_variable() {
            Some(name) => name,
            None => return Err(error!(ExpectedInputVariable)),
        };
        self.request_input(name);
        Ok(())
    }

    fn goto(&mut self, cursor: &mut Cursor) -> Result<()> {
        self.goto_line(cursor)
    }

    /// GOSUB pushes the index of the next stored line, then jumps.
    fn gosub(&mut self, cursor: &mut Cursor) -> Result<()> {
        let return_index = self.env.pc + 1;
        if self.env.debug {
            self.trace(format!(
                "GOSUB: Pushing return index {} (depth {}).",
                return_index,
                self.env.stack.len()
            ));
        }
        self.env.stack.push(return_index)?;
        self.goto_line(cursor)
    }

    fn r#return(&mut self, _cursor: &mut Cursor) -> Result<()> {
        let index = self.env.stack.pop()?;
        self.env.pc = index;
        if self.env.debug {
            self.trace(format!("RETURN: Resuming at index {}.", index));
        }
        Ok(())
    }

    /// IF expr relop expr THEN tail. A digit tail is an implicit GOTO;
    /// anything else is a full nested statement, so IF chains nest.
    fn r#if(&mut self, cursor: &mut Cursor) -> Result<()> {
        let lhs = expr::evaluate(cursor, &self.env.vars)?;
        cursor.skip_ws();
        let relop = match cursor.peek() {
            Some('=') => {
                cursor.advance();
                Relop::Equal
            }
            Some('<') => {
                cursor.advance();
                if cursor.peek() == Some('>') {
                    cursor.advance();
                    Relop::NotEqual
                } else {
                    Relop::Less
                }
            }
            Some('>') => {
                cursor.advance();
                Relop::Greater
            }
            _ => return Err(error!(ExpectedIfOperator)),
        };
        let rhs = expr::evaluate(cursor, &self.env.vars)?;
        cursor.skip_ws();
        if !cursor.match_keyword("THEN") {
            return Err(error!(ExpectedIfThen));
        }
        cursor.skip_ws();
        let condition = match relop {
            Relop::Equal => lhs == rhs,
            Relop::NotEqual => lhs != rhs,
            Relop::Less => lhs < rhs,
            Relop::Greater => lhs > rhs,
        };
        if self.env.debug {
            self.trace(format!(
                "IF: {} {} {} is {}.",
                lhs,
                relop,
                rhs,
                if condition { "TRUE" } else { "FALSE" }
            ));
        }
        if !condition {
            return Ok(());
        }
        match cursor.peek() {
            Some(ch) if ch.is_ascii_digit() => self.goto_line(cursor),
            _ => self.statement(cursor),
        }
    }

    fn rem(&mut self, _cursor: &mut Cursor) -> Result<()> {
        Ok(())
    }

    /// END and STOP both clear the running flag.
    fn end(&mut self, _cursor: &mut Cursor) -> Result<()> {
        self.env.running = false;
        Ok(())
    }

    fn beep(&mut self, _cursor: &mut Cursor) -> Result<()> {
        self.output("\x07");
        Ok(())
    }

    fn run(&mut self, _cursor: &mut Cursor) -> Result<()> {
        if self.program_active {
            return Err(error!(RunInProgram));
        }
        self.start_program();
        Ok(())
    }

    fn list(&mut self, _cursor: &mut Cursor) -> Result<()> {
        if self.program_active {
            return Err(error!(ListInProgram));
        }
        let listing: String = self
            .listing
            .lines()
            .map(|line| format!("{}\n", line))
            .collect();
        self.output(listing);
        Ok(())
    }

    fn new_program(&mut self, _cursor: &mut Cursor) -> Result<()> {
        if self.program_active {
            return Err(error!(NewInProgram));
        }
        if self.env.debug {
            self.trace("Clearing all memory (NEW).".to_string());
        }
        self.listing.clear();
        self.env.clear();
        Ok(())
    }

    fn save(&mut self, cursor: &mut Cursor) -> Result<()> {
        if self.program_active {
            return Err(error!(SaveInProgram));
        }
        let filename = cursor.rest().trim();
        if filename.is_empty() {
            return Err(error!(FilenameRequired));
        }
        if self.env.debug {
            self.trace(format!("Saving program to '{}'.", filename));
        }
        files::save(filename, &self.listing)
    }

    /// LOAD clears the program only after the file opens, then feeds each
    /// file line through the editor. A malformed line reports its error
    /// and loading continues.
    fn load(&mut self, cursor: &mut Cursor) -> Result<()> {
        if self.program_active {
            return Err(error!(LoadInProgram));
        }
        let filename = cursor.rest().trim();
        if filename.is_empty() {
            return Err(error!(FilenameRequired));
        }
        if self.env.debug {
            self.trace(format!("Loading program from '{}'.", filename));
        }
        let lines = files::load(filename)?;
        self.listing.clear();
        self.env.clear();
        for line in &lines {
            if line.trim().is_empty() {
                continue;
            }
            if let Err(error) = self.store_line(line) {
                self.report(error);
            }
        }
        Ok(())
    }

    /// SYSTEM is reserved; it routes through the module hook.
    fn system(&mut self, cursor: &mut Cursor) -> Result<()> {
        self.module_hook("SYSTEM", cursor.rest())
    }

    /// QUIT and EXIT halt execution and terminate the process.
    fn quit(&mut self, _cursor: &mut Cursor) -> Result<()> {
        self.env.running = false;
        self.request_exit();
        Ok(())
    }

    /// Shared by GOTO, GOSUB, and the implicit IF tail. Targets are
    /// editor keys, so the parse covers the full line-number domain.
    fn goto_line(&mut self, cursor: &mut Cursor) -> Result<()> {
        let number = line_number(cursor)?;
        if self.env.debug {
            self.trace(format!("GOTO: Jumping to line {}.", number));
        }
        match self.listing.lookup(number) {
            Some(index) => {
                self.env.pc = index;
                Ok(())
            }
            None => Err(error!(LineNotFound)),
        }
    }
}

/// Unsigned decimal line-number literal in [1, 65535].
fn line_number(cursor: &mut Cursor) -> Result<LineNumber> {
    cursor.skip_ws();
    match cursor.peek() {
        Some(ch) if ch.is_ascii_digit() => {}
        _ => return Err(error!(ExpectedNumber)),
    }
    let mut wide: u32 = 0;
    while let Some(ch) = cursor.peek() {
        match ch.to_digit(10) {
            Some(digit) => {
                wide = wide.saturating_mul(10).saturating_add(digit);
                cursor.advance();
            }
            None => break,
        }
    }
    if matches!(cursor.peek(), Some(ch) if ch.is_ascii_alphabetic()) {
        return Err(error!(InvalidNumber));
    }
    match LineNumber::try_from(wide) {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(error!(LineNotFound)),
    }
}
