use ib::mach::{Event, Runtime};

/// Drains queued events into a transcript, rendering errors the way the
/// terminal does, BEL included. Stops when the runtime wants the next
/// console line or a pending INPUT response.
pub fn exec(runtime: &mut Runtime) -> String {
    let mut out = String::new();
    let mut cycles = 0;
    loop {
        match runtime.execute() {
            Event::Stopped | Event::Exit => break,
            Event::Input(prompt) => {
                out.push_str(&prompt);
                break;
            }
            Event::Print(text) => out.push_str(&text),
            Event::Error(error) => {
                out.push('\x07');
                out.push_str(&format!("ERROR: {}\n", error));
            }
            Event::Running => {
                cycles += 1;
                if cycles > 100_000 {
                    out.push_str("\nExecution cycles exceeded.\n");
                    break;
                }
            }
        }
    }
    out
}

/// Feeds one line and returns its transcript.
pub fn enter(runtime: &mut Runtime, line: &str) -> String {
    runtime.enter(line);
    exec(runtime)
}
