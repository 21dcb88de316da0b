//! Console and file logging with named styles and error traces.
//!
//! Run with `cargo run --example sample`; file output lands under `./boo/logs/`.

use rust_template_logger::prelude::*;
use rust_template_logger::{info, log_trace, log_values, trace};
use std::fmt;

struct Class {
    x: i32,
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "World {}", self.x)
    }
}

fn function_that_fails() -> std::result::Result<(), ErrorTrace> {
    Err(trace!("error occur"))
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all("./boo")?;

    let context = LoggerContext::new().shared();
    context.bind_style("Foo", [Modifier::BgWhite, Modifier::FgRed, Modifier::Bold]);
    context.bind_style("Blink", [Modifier::SlowBlink]);

    let console = Logger::builder()
        .context(context.clone())
        .console()
        .build()?;
    let file = Logger::builder()
        .context(context.clone())
        .dated_files("./boo/")
        .build()?;

    if let Err(e) = function_that_fails() {
        let mut e = trace!(e);
        let mut copy = e.clone();
        log_trace!(console, e)?;
        log_trace!(file, copy)?;
    }

    info!(
        console,
        "%FILE:%FUNC:%LINE %.Foo([%dd.%mm.%yy - %h:%m:%s]%) -> %.Blink(%v %v!%)",
        "Hello",
        Class { x: 1 }
    )?;

    log_values!(file, LogLevel::Warning; Class { x: 2 }, "some warning")?;

    Ok(())
}
