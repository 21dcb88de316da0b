//! Integration tests for the template logger
//!
//! These tests verify:
//! - Directive rendering through the public API
//! - Style regions and their escape sequences
//! - Dated log file layout and line format
//! - Error traces and breadcrumb draining
//! - Configuration loading

use parking_lot::Mutex;
use rust_template_logger::appenders::{ConsoleAppender, DatedFileAppender};
use rust_template_logger::prelude::*;
use rust_template_logger::{info, log_trace, log_values, trace, warning};
use std::fmt::{self, Display};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

struct Capture(Arc<Mutex<Vec<LogEntry>>>);

impl Appender for Capture {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        self.0.lock().push(entry.clone());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "capture"
    }
}

/// Value with a custom Display, like a user type logged with `%v`
struct Class(i32);

impl Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "World {}", self.0)
    }
}

fn fixed_context() -> Arc<LoggerContext> {
    let clock = FixedClock::from_ymd_hms(2023, 1, 5, 9, 3, 7).expect("valid date");
    LoggerContext::with_clock(Arc::new(clock)).shared()
}

fn capturing_logger(context: Arc<LoggerContext>) -> (Logger, Arc<Mutex<Vec<LogEntry>>>) {
    let entries = Arc::new(Mutex::new(Vec::new()));
    let logger = Logger::builder()
        .context(context)
        .appender(Capture(Arc::clone(&entries)))
        .build()
        .expect("Failed to build logger");
    (logger, entries)
}

fn daily_log(root: &Path) -> PathBuf {
    root.join("logs").join("2023").join("january").join("05012023.log")
}

fn styled(entry: &LogEntry) -> String {
    match &entry.payload {
        Payload::Template(rendered) => rendered.styled.clone(),
        other => panic!("expected a template payload, got {:?}", other),
    }
}

#[test]
fn test_values_substituted_in_order() {
    let (logger, entries) = capturing_logger(fixed_context());
    info!(logger, "%v and %v", 1, "x").unwrap();
    assert_eq!(entries.lock()[0].plain_message(), "1 and x");
}

#[test]
fn test_render_errors_reach_the_caller() {
    let (logger, entries) = capturing_logger(fixed_context());

    let err = info!(logger, "%v").unwrap_err();
    assert!(matches!(err, LoggerError::QueueExhausted { requested: 1 }));

    let err = info!(logger, "%q").unwrap_err();
    assert!(matches!(err, LoggerError::UnknownDirective { ref token } if token == "%q"));

    let err = info!(logger, "trailing %").unwrap_err();
    assert!(matches!(err, LoggerError::EmptyDirective));

    let err = info!(logger, "%.Missing(x%)").unwrap_err();
    assert!(matches!(err, LoggerError::UnknownStyle { ref name } if name == "Missing"));

    let err = info!(logger, "%)").unwrap_err();
    assert!(matches!(err, LoggerError::EmptyStyleStack));

    assert!(entries.lock().is_empty());
    assert_eq!(logger.metrics().render_failures(), 5);
}

#[test]
fn test_literal_percent() {
    let (logger, entries) = capturing_logger(fixed_context());
    info!(logger, "100%% done").unwrap();
    assert_eq!(entries.lock()[0].plain_message(), "100% done");
}

#[test]
fn test_style_region_escapes() {
    let context = fixed_context();
    assert!(context.bind_style("Foo", [Modifier::BgWhite, Modifier::FgRed, Modifier::Bold]));
    assert!(context.bind_style("Blink", [Modifier::SlowBlink]));
    let (logger, entries) = capturing_logger(context);

    info!(logger, "%.Foo(a%.Blink(b%)c%)d").unwrap();

    let entries = entries.lock();
    assert_eq!(
        styled(&entries[0]),
        "\x1b[47;31;1ma\x1b[5mb\x1b[0m\x1b[47;31;1mc\x1b[0m\x1b[0md"
    );
    assert_eq!(entries[0].plain_message(), "abcd");
}

#[test]
fn test_duplicate_style_keeps_first_binding() {
    let context = fixed_context();
    assert!(context.bind_style("Warn", [Modifier::FgYellow]));
    assert!(!context.bind_style("Warn", [Modifier::FgRed]));
    let (logger, entries) = capturing_logger(context);

    info!(logger, "%.Warn(!%)").unwrap();
    assert!(styled(&entries.lock()[0]).starts_with("\x1b[33m!"));
}

#[test]
fn test_contexts_are_isolated() {
    let first = fixed_context();
    let second = fixed_context();
    first.bind_style("OnlyHere", [Modifier::Bold]);

    let (logger, _) = capturing_logger(second);
    let err = info!(logger, "%.OnlyHere(x%)").unwrap_err();
    assert!(matches!(err, LoggerError::UnknownStyle { .. }));
}

#[test]
fn test_sample_console_line() {
    let context = fixed_context();
    context.bind_style("Foo", [Modifier::BgWhite, Modifier::FgRed, Modifier::Bold]);
    context.bind_style("Blink", [Modifier::SlowBlink]);

    let site = CallSite::new("sample/main.rs", 33, "main");
    let values: [&dyn Display; 2] = [&"Hello", &Class(1)];
    let rendered = context
        .render(
            &site,
            "%FILE:%FUNC:%LINE %.Foo([%dd.%mm.%yy - %h:%m:%s]%) -> %.Blink(%v %v!%)",
            &values,
        )
        .unwrap();

    assert_eq!(
        rendered.plain,
        "main.rs:main:33 [05.01.23 - 09:03:07] -> Hello World 1!"
    );

    let entry = LogEntry::new(LogLevel::Info, context.now(), site, Payload::Template(rendered));
    let line = ConsoleAppender::with_colors(true).format(&entry);
    assert_eq!(
        line,
        "main.rs:main:33 \x1b[47;31;1m[05.01.23 - 09:03:07]\x1b[0m\x1b[0m -> \
         \x1b[5mHello World 1!\x1b[0m\x1b[0m\x1b[0m\n"
    );
}

#[test]
fn test_dated_file_value_lines() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Logger::builder()
        .context(fixed_context())
        .dated_files(temp_dir.path())
        .build()
        .expect("Failed to build logger");

    log_values!(logger, LogLevel::Warning; Class(2), "some warning").unwrap();

    let content = fs::read_to_string(daily_log(temp_dir.path())).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("2023-01-05 09:03:07 [WARNING] integration_tests.rs:"));
    assert!(lines[0].ends_with(" test_dated_file_value_lines -> World 2"));
    assert!(lines[1].ends_with(" -> some warning"));
}

#[test]
fn test_dated_file_template_has_no_escapes() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Logger::builder()
        .context(fixed_context())
        .style("Alert", [Modifier::FgRed, Modifier::Bold])
        .dated_files(temp_dir.path())
        .build()
        .expect("Failed to build logger");

    warning!(logger, "%.Alert(low disk%) on %v", "/var").unwrap();

    let content = fs::read_to_string(daily_log(temp_dir.path())).unwrap();
    assert!(!content.contains('\x1b'));
    assert!(content.ends_with("-> low disk on /var\n"));
}

#[test]
fn test_missing_log_directory_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let context = fixed_context();

    let err = context.bind_log_directory(temp_dir.path().join("absent")).unwrap_err();
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    assert!(context.log_directory().is_none());

    context.bind_log_directory(temp_dir.path()).unwrap();
    assert_eq!(context.log_directory().as_deref(), Some(temp_dir.path()));
}

fn throws_error() -> std::result::Result<(), ErrorTrace> {
    Err(trace!("error occur"))
}

fn calls_thrower() -> std::result::Result<(), ErrorTrace> {
    throws_error().map_err(|e| trace!(e))
}

#[test]
fn test_error_trace_to_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let context = fixed_context();
    let (mut logger, entries) = capturing_logger(Arc::clone(&context));
    context.bind_log_directory(temp_dir.path()).unwrap();
    logger.add_appender(Box::new(DatedFileAppender::new(Arc::clone(&context))));
    logger.set_min_level(LogLevel::Critical);

    let mut err = calls_thrower().unwrap_err();
    log_trace!(logger, err).unwrap();
    assert!(err.is_empty());
    assert_eq!(err.message(), "error occur");

    // Traces ignore the minimum level
    assert_eq!(entries.lock().len(), 1);

    let content = fs::read_to_string(daily_log(temp_dir.path())).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("2023-01-05 09:03:07 [ERROR] integration_tests.rs:"));
    assert!(lines[0].ends_with("test_error_trace_to_file -> \"error occur\" error stack : "));
    assert!(lines[1].starts_with("\t") && lines[1].contains(":calls_thrower:"));
    assert!(lines[2].starts_with("\t") && lines[2].contains(":throws_error:"));

    // Draining again writes no breadcrumbs
    log_trace!(logger, err).unwrap();
    let content = fs::read_to_string(daily_log(temp_dir.path())).unwrap();
    assert_eq!(content.lines().count(), 4);
}

#[test]
fn test_console_trace_format() {
    let context = fixed_context();
    let mut err = ErrorTrace::new("error occur");
    err.push("sample/main.rs", "FunctionThatThrowsError", 15);
    err.push("sample/main.rs", "main", 29);

    let payload = Payload::Trace {
        message: err.message().to_string(),
        breadcrumbs: err.drain(),
    };
    let entry = LogEntry::new(
        LogLevel::Error,
        context.now(),
        CallSite::new("sample/main.rs", 29, "main"),
        payload,
    );

    assert_eq!(
        ConsoleAppender::with_colors(false).format(&entry),
        "[ERROR] error message : \"error occur\" error stack :\n\
         \tsample/main.rs:main:29\n\
         \tsample/main.rs:FunctionThatThrowsError:15\n"
    );
    assert_eq!(
        ConsoleAppender::with_colors(true).format(&entry),
        "\x1b[97m\x1b[41m[ERROR]\x1b[0m error message : \"\x1b[31merror occur\x1b[0m\" error stack :\n\
         \t\x1b[4msample/main.rs:main:29\x1b[24m\n\
         \t\x1b[4msample/main.rs:FunctionThatThrowsError:15\x1b[24m\n"
    );
}

#[test]
fn test_config_file_builds_logger() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("logger.json");
    let config = LoggerConfig {
        min_level: LogLevel::Warning,
        console: false,
        log_directory: Some(temp_dir.path().to_path_buf()),
        styles: vec![StyleConfig {
            name: "Blink".to_string(),
            modifiers: vec![Modifier::SlowBlink],
        }],
        ..LoggerConfig::default()
    };
    fs::write(&config_path, config.to_json().unwrap()).unwrap();

    let loaded = LoggerConfig::from_file(&config_path).unwrap();
    assert_eq!(loaded, config);

    let logger = loaded.build_with_context(fixed_context()).unwrap();
    assert!(logger.context().has_style("Blink"));

    info!(logger, "filtered").unwrap();
    warning!(logger, "%.Blink(kept%)").unwrap();

    let content = fs::read_to_string(daily_log(temp_dir.path())).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(content.contains("[WARNING]"));
    assert!(content.ends_with("-> kept\n"));
}
