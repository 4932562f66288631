/*!
## Terminal Module

The console frontend: reads lines with rustyline, feeds them to the
runtime, and renders the events that come back. The engine never touches
the console itself.

*/

use std::io::{self, IsTerminal, Write};

use ansi_term::Style;
use rustyline::completion::Completer;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use crate::lang::{Error, LineNumber};
use crate::mach::{Event, Runtime, DIALECT, PROGRAM_BYTES, VERSION};

pub fn main() {
    let mut debug = false;
    for argument in std::env::args().skip(1) {
        if argument == "--debug" {
            debug = true;
        }
    }
    if let Err(error) = main_loop(debug) {
        eprintln!("{}", error);
    }
}

fn main_loop(debug: bool) -> rustyline::Result<()> {
    let mut editor = Editor::<LineRecall>::new()?;
    let mut runtime = Runtime::new();
    if debug {
        runtime.set_debug(true);
        println!("[DEBUG] Debug mode enabled.");
    }
    println!("BASIC++ ({}) v{}", DIALECT, VERSION);
    println!("{} kbytes Free", PROGRAM_BYTES / 1024);
    println!("READY");

    loop {
        match runtime.execute() {
            Event::Stopped => {
                editor.set_helper(Some(LineRecall::new(&runtime)));
                let line = match editor.readline("> ") {
                    Ok(line) => line,
                    Err(ReadlineError::Interrupted) => continue,
                    Err(ReadlineError::Eof) => {
                        println!();
                        break;
                    }
                    Err(error) => return Err(error),
                };
                let _ = editor.add_history_entry(line.as_str());
                runtime.enter(&line);
            }
            Event::Input(prompt) => {
                editor.set_helper(None);
                match editor.readline(&prompt) {
                    Ok(line) => runtime.enter(&line),
                    Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                        runtime.end_of_input()
                    }
                    Err(error) => return Err(error),
                }
            }
            Event::Print(text) => {
                print!("{}", text);
                io::stdout().flush()?;
            }
            Event::Error(error) => report(&error),
            Event::Running => {}
            Event::Exit => break,
        }
    }
    Ok(())
}

/// BEL, then the message. Bold only on a terminal, so piped output stays
/// byte-exact.
fn report(error: &Error) {
    let message = format!("ERROR: {}", error);
    print!("\x07");
    if io::stdout().is_terminal() {
        println!("{}", Style::new().bold().paint(message));
    } else {
        println!("{}", message);
    }
    let _ = io::stdout().flush();
}

/// Tab on a bare line number recalls the stored line for editing.
struct LineRecall {
    lines: Vec<(LineNumber, String)>,
}

impl LineRecall {
    fn new(runtime: &Runtime) -> LineRecall {
        LineRecall {
            lines: runtime.listing_lines(),
        }
    }
}

impl Completer for LineRecall {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        if pos == line.len() {
            if let Ok(number) = line.trim().parse::<LineNumber>() {
                for (candidate, text) in &self.lines {
                    if *candidate == number {
                        return Ok((0, vec![format!("{} {}", candidate, text)]));
                    }
                }
            }
        }
        Ok((0, Vec::new()))
    }
}

impl Hinter for LineRecall {
    type Hint = String;
}

impl Highlighter for LineRecall {}
impl Validator for LineRecall {}
impl Helper for LineRecall {}
