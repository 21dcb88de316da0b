//! Main logger implementation

use super::{
    appender::Appender,
    call_site::CallSite,
    context::LoggerContext,
    error::{LoggerError, Result},
    error_trace::ErrorTrace,
    log_entry::{LogEntry, Payload},
    log_level::LogLevel,
    metrics::LoggerMetrics,
    modifier::Modifier,
    value::stringize,
};
use parking_lot::RwLock;
use std::fmt::Display;
use std::path::PathBuf;
use std::sync::Arc;

/// Renders log calls and hands the resulting entries to its appenders.
///
/// Every call is synchronous: a render either completes and is dispatched, or
/// fails before any appender sees it.
pub struct Logger {
    context: Arc<LoggerContext>,
    min_level: RwLock<LogLevel>,
    appenders: RwLock<Vec<Box<dyn Appender>>>,
    /// Metrics for observability (rendered, failed and dropped entries)
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self::with_context(LoggerContext::new().shared())
    }

    #[must_use]
    pub fn with_context(context: Arc<LoggerContext>) -> Self {
        Self {
            context,
            min_level: RwLock::new(LogLevel::Debug),
            appenders: RwLock::new(Vec::new()),
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    pub fn context(&self) -> &Arc<LoggerContext> {
        &self.context
    }

    pub fn add_appender(&mut self, appender: Box<dyn Appender>) {
        self.appenders.write().push(appender);
    }

    pub fn set_min_level(&mut self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    pub fn min_level(&self) -> LogLevel {
        *self.min_level.read()
    }

    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= *self.min_level.read()
    }

    /// Render `format` with `values` and dispatch it.
    ///
    /// Directive errors are returned before anything is written.
    pub fn log(
        &self,
        level: LogLevel,
        site: &CallSite,
        format: &str,
        values: &[&dyn Display],
    ) -> Result<()> {
        if !self.is_enabled(level) {
            return Ok(());
        }

        let now = self.context.now();
        let rendered = match self.context.render_at(now, site, format, values) {
            Ok(rendered) => rendered,
            Err(e) => {
                self.metrics.record_render_failure();
                return Err(e);
            }
        };

        self.dispatch(&LogEntry::new(level, now, *site, Payload::Template(rendered)))
    }

    /// Dispatch one entry per value, in argument order.
    ///
    /// Every value is dispatched even if an appender fails on an earlier one;
    /// the first failure is returned afterwards.
    pub fn log_values(&self, level: LogLevel, site: &CallSite, values: &[&dyn Display]) -> Result<()> {
        if !self.is_enabled(level) {
            return Ok(());
        }

        let now = self.context.now();
        let mut first_error = None;
        for value in stringize(values) {
            if let Err(e) = self.dispatch(&LogEntry::new(level, now, *site, Payload::Value(value))) {
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            None => Ok(()),
            Some(e) => Err(e),
        }
    }

    /// Drain `trace` and dispatch it as an error entry.
    ///
    /// Traces ignore the minimum level. The breadcrumbs are consumed even if an
    /// appender fails.
    pub fn log_trace(&self, site: &CallSite, trace: &mut ErrorTrace) -> Result<()> {
        let payload = Payload::Trace {
            message: trace.message().to_string(),
            breadcrumbs: trace.drain(),
        };
        self.dispatch(&LogEntry::new(LogLevel::Error, self.context.now(), *site, payload))
    }

    /// Hand `entry` to every appender.
    ///
    /// **Per-Appender Panic Isolation**: a failing or panicking appender does not
    /// stop the others. The first failure is returned once all have been tried.
    fn dispatch(&self, entry: &LogEntry) -> Result<()> {
        let mut appenders = self.appenders.write();
        let mut first_error = None;

        for (idx, appender) in appenders.iter_mut().enumerate() {
            let append_result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                appender.append(entry)
            }));

            let err = match append_result {
                Ok(Ok(())) => continue,
                Ok(Err(e)) => {
                    eprintln!("[LOGGER ERROR] Appender #{} ({}) failed: {}", idx, appender.name(), e);
                    e
                }
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    eprintln!(
                        "[LOGGER CRITICAL] Appender #{} panicked: {}. \
                         Other appenders continue to function.",
                        idx, panic_msg
                    );
                    LoggerError::other(format!("appender #{} panicked: {}", idx, panic_msg))
                }
            };
            first_error.get_or_insert(err);
        }

        match first_error {
            None => {
                self.metrics.record_logged();
                Ok(())
            }
            Some(e) => {
                self.metrics.record_dropped();
                Err(e)
            }
        }
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        let mut appenders = self.appenders.write();
        for appender in appenders.iter_mut() {
            appender.flush()?;
        }
        Ok(())
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use rust_template_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .min_level(LogLevel::Info)
    ///     .style("Alert", [Modifier::FgRed, Modifier::Bold])
    ///     .build()
    ///     .unwrap();
    /// assert!(logger.context().has_style("Alert"));
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```no_run
/// use rust_template_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .style("Foo", [Modifier::BgWhite, Modifier::FgRed, Modifier::Bold])
///     .console()
///     .dated_files("./var")
///     .build()
///     .expect("valid logger configuration");
/// ```
pub struct LoggerBuilder {
    context: Option<Arc<LoggerContext>>,
    min_level: LogLevel,
    appenders: Vec<Box<dyn Appender>>,
    styles: Vec<(String, Vec<Modifier>)>,
    log_directory: Option<PathBuf>,
    #[cfg(feature = "console")]
    console: Option<crate::appenders::ConsoleAppender>,
    #[cfg(feature = "file")]
    dated_files: bool,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            context: None,
            min_level: LogLevel::Debug,
            appenders: Vec::new(),
            styles: Vec::new(),
            log_directory: None,
            #[cfg(feature = "console")]
            console: None,
            #[cfg(feature = "file")]
            dated_files: false,
        }
    }

    /// Share an existing context instead of creating a fresh one
    #[must_use = "builder methods return a new value"]
    pub fn context(mut self, context: Arc<LoggerContext>) -> Self {
        self.context = Some(context);
        self
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Add an appender
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(Box::new(appender));
        self
    }

    /// Bind a named style; a duplicate name makes [`build`](Self::build) fail
    #[must_use = "builder methods return a new value"]
    pub fn style(mut self, name: impl Into<String>, modifiers: impl Into<Vec<Modifier>>) -> Self {
        self.styles.push((name.into(), modifiers.into()));
        self
    }

    /// Bind the root directory for dated log files
    #[must_use = "builder methods return a new value"]
    pub fn log_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_directory = Some(path.into());
        self
    }

    /// Add a [`ConsoleAppender`](crate::appenders::ConsoleAppender) with default settings
    #[cfg(feature = "console")]
    #[must_use = "builder methods return a new value"]
    pub fn console(self) -> Self {
        self.console_appender(crate::appenders::ConsoleAppender::new())
    }

    /// Add a configured console appender
    #[cfg(feature = "console")]
    #[must_use = "builder methods return a new value"]
    pub fn console_appender(mut self, appender: crate::appenders::ConsoleAppender) -> Self {
        self.console = Some(appender);
        self
    }

    /// Bind `root` and add a [`DatedFileAppender`](crate::appenders::DatedFileAppender)
    #[cfg(feature = "file")]
    #[must_use = "builder methods return a new value"]
    pub fn dated_files(mut self, root: impl Into<PathBuf>) -> Self {
        self.log_directory = Some(root.into());
        self.dated_files = true;
        self
    }

    /// Build the Logger
    pub fn build(self) -> Result<Logger> {
        let context = self.context.unwrap_or_else(|| LoggerContext::new().shared());

        for (name, modifiers) in self.styles {
            if !context.bind_style(name.clone(), modifiers) {
                return Err(LoggerError::config(
                    "LoggerBuilder",
                    format!("style '{}' is already bound", name),
                ));
            }
        }

        if let Some(ref dir) = self.log_directory {
            context.bind_log_directory(dir)?;
        }

        let mut logger = Logger::with_context(Arc::clone(&context));
        logger.set_min_level(self.min_level);

        #[cfg(feature = "console")]
        if let Some(console) = self.console {
            logger.add_appender(Box::new(console));
        }

        #[cfg(feature = "file")]
        if self.dated_files {
            logger.add_appender(Box::new(crate::appenders::DatedFileAppender::new(Arc::clone(
                &context,
            ))));
        }

        for appender in self.appenders {
            logger.add_appender(appender);
        }

        Ok(logger)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::timestamp::FixedClock;
    use parking_lot::Mutex;

    /// Records the plain message of every entry it receives
    struct Recorder(Arc<Mutex<Vec<String>>>);

    impl Appender for Recorder {
        fn append(&mut self, entry: &LogEntry) -> Result<()> {
            self.0.lock().push(entry.plain_message().to_string());
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "recorder"
        }
    }

    struct Failing;

    impl Appender for Failing {
        fn append(&mut self, _entry: &LogEntry) -> Result<()> {
            Err(LoggerError::other("disk full"))
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    struct Panicking;

    impl Appender for Panicking {
        fn append(&mut self, _entry: &LogEntry) -> Result<()> {
            panic!("appender exploded");
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "panicking"
        }
    }

    fn recording_logger() -> (Logger, Arc<Mutex<Vec<String>>>) {
        let clock = FixedClock::from_ymd_hms(2023, 1, 5, 9, 3, 7).unwrap();
        let context = LoggerContext::with_clock(Arc::new(clock)).shared();
        let lines = Arc::new(Mutex::new(Vec::new()));
        let logger = Logger::builder()
            .context(context)
            .appender(Recorder(Arc::clone(&lines)))
            .build()
            .unwrap();
        (logger, lines)
    }

    fn site() -> CallSite {
        CallSite::new("src/main.rs", 10, "main")
    }

    #[test]
    fn test_log_renders_template() {
        let (logger, lines) = recording_logger();
        logger
            .log(LogLevel::Info, &site(), "%h:%m %v", &[&"started" as &dyn Display])
            .unwrap();

        assert_eq!(*lines.lock(), vec!["09:03 started"]);
        assert_eq!(logger.metrics().total_logged(), 1);
    }

    #[test]
    fn test_render_error_dispatches_nothing() {
        let (logger, lines) = recording_logger();
        let err = logger.log(LogLevel::Info, &site(), "%v", &[]).unwrap_err();

        assert!(matches!(err, LoggerError::QueueExhausted { .. }));
        assert!(lines.lock().is_empty());
        assert_eq!(logger.metrics().render_failures(), 1);
    }

    #[test]
    fn test_min_level_filters() {
        let (mut logger, lines) = recording_logger();
        logger.set_min_level(LogLevel::Warning);

        logger.log(LogLevel::Info, &site(), "hidden", &[]).unwrap();
        logger.log(LogLevel::Error, &site(), "shown", &[]).unwrap();

        assert_eq!(*lines.lock(), vec!["shown"]);
    }

    #[test]
    fn test_log_values_one_entry_each() {
        let (logger, lines) = recording_logger();
        logger
            .log_values(LogLevel::Warning, &site(), &[&2 as &dyn Display, &"some warning"])
            .unwrap();

        assert_eq!(*lines.lock(), vec!["2", "some warning"]);
    }

    /// Fails on its first append only
    struct FailOnce {
        failed: bool,
    }

    impl Appender for FailOnce {
        fn append(&mut self, _entry: &LogEntry) -> Result<()> {
            if self.failed {
                return Ok(());
            }
            self.failed = true;
            Err(LoggerError::other("transient write failure"))
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "fail_once"
        }
    }

    #[test]
    fn test_log_values_continues_after_appender_error() {
        let clock = FixedClock::from_ymd_hms(2023, 1, 5, 9, 3, 7).unwrap();
        let lines = Arc::new(Mutex::new(Vec::new()));
        let logger = Logger::builder()
            .context(LoggerContext::with_clock(Arc::new(clock)).shared())
            .appender(FailOnce { failed: false })
            .appender(Recorder(Arc::clone(&lines)))
            .build()
            .unwrap();

        let err = logger
            .log_values(LogLevel::Info, &site(), &[&"v1" as &dyn Display, &"v2", &"v3"])
            .unwrap_err();

        assert!(err.to_string().contains("transient write failure"));
        assert_eq!(*lines.lock(), vec!["v1", "v2", "v3"]);
        assert_eq!(logger.metrics().dropped_count(), 1);
        assert_eq!(logger.metrics().total_logged(), 2);
    }

    #[test]
    fn test_log_trace_drains() {
        let (logger, lines) = recording_logger();
        let mut trace = ErrorTrace::new("error occur");
        trace.push("src/lib.rs", "load", 3);

        logger.log_trace(&site(), &mut trace).unwrap();
        assert!(trace.is_empty());
        assert_eq!(*lines.lock(), vec!["error occur"]);
    }

    #[test]
    fn test_failing_appender_isolated() {
        let (mut logger, lines) = recording_logger();
        logger.add_appender(Box::new(Failing));
        logger.add_appender(Box::new(Panicking));

        let err = logger.log(LogLevel::Info, &site(), "still delivered", &[]).unwrap_err();
        assert!(err.to_string().contains("disk full"));
        assert_eq!(*lines.lock(), vec!["still delivered"]);
        assert_eq!(logger.metrics().dropped_count(), 1);
    }

    #[test]
    fn test_builder_rejects_duplicate_styles() {
        let result = Logger::builder()
            .style("Same", [Modifier::Bold])
            .style("Same", [Modifier::Italic])
            .build();

        assert!(matches!(result, Err(LoggerError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_builder_rejects_missing_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = Logger::builder().log_directory(dir.path().join("nope")).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_default_level() {
        let logger = LoggerBuilder::default().build().unwrap();
        assert_eq!(logger.min_level(), LogLevel::Debug);
        assert!(logger.is_enabled(LogLevel::Debug));
    }
}
