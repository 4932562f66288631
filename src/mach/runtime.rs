use std::collections::VecDeque;

use super::{Env, Listing, Upsert, Val};
use crate::lang::{Cursor, Error, LineNumber};

type Result<T> = std::result::Result<T, Error>;

/// What the frontend should do next. `Print` carries exact bytes for
/// stdout; an `Input` response comes back through [`Runtime::enter`].
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The runtime wants the next console line.
    Stopped,
    /// A statement executed with nothing to show.
    Running,
    Print(String),
    Input(String),
    /// The frontend sounds BEL and prints `ERROR: <message>`.
    Error(Error),
    /// QUIT or EXIT: terminate the process with status 0.
    Exit,
}

/// Handler for `$…` keywords and SYSTEM. The core ships a stub; embedders
/// plug their own with [`Runtime::set_module`]. The returned text is
/// printed on its own line; the hook never halts the program.
pub trait Module {
    fn invoke(&mut self, keyword: &str, args: &str) -> String;
}

struct Stub;

impl Module for Stub {
    fn invoke(&mut self, keyword: &str, _args: &str) -> String {
        format!("FRAMEWORK: Command {} is not implemented.", keyword)
    }
}

/// Where a pending INPUT response resumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resume {
    Program,
    Direct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Stopped,
    Running,
    Input { var: char, resume: Resume },
}

/// ## Runtime
///
/// Owns the program store and the environment, classifies console lines as
/// stored or immediate, and drives the execution loop one statement per
/// [`Runtime::execute`] call. The frontend loops on `execute`, feeding
/// lines back in through [`Runtime::enter`].
pub struct Runtime {
    pub(crate) listing: Listing,
    pub(crate) env: Env,
    pub(crate) program_active: bool,
    mode: Mode,
    events: VecDeque<Event>,
    module: Box<dyn Module>,
    errored: bool,
    exited: bool,
}

impl Default for Runtime {
    fn default() -> Runtime {
        Runtime {
            listing: Listing::default(),
            env: Env::default(),
            program_active: false,
            mode: Mode::Stopped,
            events: VecDeque::new(),
            module: Box::new(Stub),
            errored: false,
            exited: false,
        }
    }
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.env.debug = debug;
    }

    pub fn set_module(&mut self, module: Box<dyn Module>) {
        self.module = module;
    }

    /// Snapshot of the stored program in ascending order, for the
    /// frontend's line-recall completion.
    pub fn listing_lines(&self) -> Vec<(LineNumber, String)> {
        self.listing
            .lines()
            .map(|line| (line.number(), line.text().to_string()))
            .collect()
    }

    /// Feeds one console line: the next REPL line, or the response to a
    /// pending [`Event::Input`].
    pub fn enter(&mut self, line: &str) {
        if self.exited || self.mode == Mode::Running {
            return;
        }
        if let Mode::Input { var, resume } = self.mode {
            self.feed_input(var, resume, line);
            return;
        }
        let line = line.trim_end_matches(&['\r', '\n'][..]);
        let mut cursor = Cursor::new(line);
        cursor.skip_ws();
        match cursor.peek() {
            None => self.output("READY\n"),
            Some(ch) if ch.is_ascii_digit() => {
                if let Err(error) = self.store_line(cursor.rest()) {
                    self.report(error);
                }
            }
            Some(_) => self.direct(cursor.rest()),
        }
    }

    /// Returns the next event. With nothing queued and a program running,
    /// executes one statement first.
    pub fn execute(&mut self) -> Event {
        loop {
            if let Some(event) = self.events.pop_front() {
                return event;
            }
            match self.mode {
                Mode::Stopped => return Event::Stopped,
                Mode::Input { .. } => return Event::Input("? ".to_string()),
                Mode::Running => {
                    self.step();
                    if self.events.is_empty() && self.mode == Mode::Running {
                        return Event::Running;
                    }
                }
            }
        }
    }

    /// End-of-input from the console while INPUT was pending: the program
    /// halts.
    pub fn end_of_input(&mut self) {
        if let Mode::Input { resume, .. } = self.mode {
            self.env.running = false;
            match resume {
                Resume::Program => self.mode = Mode::Running,
                Resume::Direct => {
                    self.mode = Mode::Stopped;
                    self.finish_direct(false);
                }
            }
        }
    }

    /// Executes a single immediate statement on a private copy of the
    /// line. OK/READY is deferred while a RUN or an INPUT it started is
    /// still outstanding.
    fn direct(&mut self, line: &str) {
        let buffer = line.to_string();
        let mut cursor = Cursor::new(&buffer);
        self.program_active = false;
        self.errored = false;
        match self.statement(&mut cursor) {
            Ok(()) => match self.mode {
                Mode::Running | Mode::Input { .. } => {}
                Mode::Stopped => {
                    if !self.exited {
                        self.finish_direct(false);
                    }
                }
            },
            Err(error) => {
                self.report(error);
                self.finish_direct(true);
            }
        }
    }

    fn finish_direct(&mut self, errored: bool) {
        if !errored {
            self.output("OK\n");
        }
        self.output("READY\n");
    }

    /// One step of the execution loop: run the statement under the
    /// program counter, then advance it unless the statement branched.
    fn step(&mut self) {
        if !self.env.running || self.env.pc >= self.listing.len() {
            self.finish_program();
            return;
        }
        let prev_pc = self.env.pc;
        let (number, buffer) = match self.listing.get(prev_pc) {
            Some(line) => (line.number(), line.text().to_string()),
            None => {
                self.finish_program();
                return;
            }
        };
        if self.env.debug {
            self.trace(format!("Running line {}: {}", number, buffer));
        }
        let mut cursor = Cursor::new(&buffer);
        self.program_active = true;
        let result = self.statement(&mut cursor);
        self.program_active = false;
        match result {
            Ok(()) => {
                if matches!(self.mode, Mode::Input { .. }) {
                    return;
                }
                if self.env.running && self.env.pc == prev_pc {
                    self.env.pc += 1;
                }
            }
            Err(error) => {
                self.report(error);
                if self.env.debug {
                    self.trace("Halting program due to error.".to_string());
                }
                self.env.running = false;
                self.errored = true;
            }
        }
    }

    fn finish_program(&mut self) {
        if self.env.debug {
            self.trace("--- PROGRAM ENDED ---".to_string());
        }
        self.env.running = false;
        self.mode = Mode::Stopped;
        if !self.exited {
            self.finish_direct(self.errored);
        }
    }

    pub(crate) fn start_program(&mut self) {
        if self.env.debug {
            self.trace("--- RUNNING PROGRAM ---".to_string());
        }
        self.env.start_run();
        self.mode = Mode::Running;
    }

    pub(crate) fn request_input(&mut self, var: char) {
        let resume = if self.program_active {
            Resume::Program
        } else {
            Resume::Direct
        };
        self.mode = Mode::Input { var, resume };
    }

    pub(crate) fn request_exit(&mut self) {
        self.exited = true;
        self.events.push_back(Event::Exit);
    }

    fn feed_input(&mut self, var: char, resume: Resume, line: &str) {
        self.env.vars.store(var, input_value(line));
        match resume {
            Resume::Program => {
                self.env.pc += 1;
                self.mode = Mode::Running;
            }
            Resume::Direct => {
                self.mode = Mode::Stopped;
                self.finish_direct(false);
            }
        }
    }

    /// Applies one editor line to the program store.
    pub(crate) fn store_line(&mut self, line: &str) -> Result<()> {
        let (number, action) = self.listing.store(line)?;
        if self.env.debug {
            let message = match action {
                Upsert::Inserted(index) => {
                    format!("Inserting line {} at index {}.", number, index)
                }
                Upsert::Replaced(index) => {
                    format!("Replacing line {} at index {}.", number, index)
                }
                Upsert::Deleted(index) => {
                    format!("Deleting line {} at index {}.", number, index)
                }
                Upsert::Ignored => format!("Nothing to delete for line {}.", number),
            };
            self.trace(message);
        }
        Ok(())
    }

    pub(crate) fn output(&mut self, text: impl Into<String>) {
        self.events.push_back(Event::Print(text.into()));
    }

    pub(crate) fn report(&mut self, error: Error) {
        self.events.push_back(Event::Error(error));
    }

    pub(crate) fn trace(&mut self, message: String) {
        self.events.push_back(Event::Print(format!("[DEBUG] {}\n", message)));
    }

    pub(crate) fn module_hook(&mut self, keyword: &str, args: &str) -> Result<()> {
        let message = self.module.invoke(keyword, args);
        self.output(format!("{}\n", message));
        Ok(())
    }
}

/// Loose decimal parse for INPUT responses: leading whitespace and an
/// optional sign, then digits until the first non-digit; anything else
/// reads as zero.
fn input_value(line: &str) -> Val {
    let line = line.trim_start();
    let (negative, digits) = match line.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, line.strip_prefix('+').unwrap_or(line)),
    };
    let mut wide: i64 = 0;
    for ch in digits.chars() {
        match ch.to_digit(10) {
            Some(digit) => wide = wide.wrapping_mul(10).wrapping_add(digit as i64),
            None => break,
        }
    }
    if negative {
        wide = wide.wrapping_neg();
    }
    Val::from_wide(wide)
}
