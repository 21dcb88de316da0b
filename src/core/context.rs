//! Shared state for rendering: styles, log directory and clock
//!
//! Instead of process-wide globals, every [`Logger`](super::logger::Logger) and
//! appender holds an `Arc<LoggerContext>`. Independent contexts never see each
//! other's styles, which keeps tests isolated.

use super::call_site::CallSite;
use super::error::{LoggerError, Result};
use super::modifier::Modifier;
use super::scanner::{DirectiveScanner, Rendered};
use super::style::StyleRegistry;
use super::timestamp::{Clock, SystemClock};
use super::value::SubstitutionQueue;
use chrono::NaiveDateTime;
use parking_lot::RwLock;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug)]
pub struct LoggerContext {
    styles: RwLock<StyleRegistry>,
    log_directory: RwLock<Option<PathBuf>>,
    clock: Arc<dyn Clock>,
}

impl LoggerContext {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            styles: RwLock::new(StyleRegistry::new()),
            log_directory: RwLock::new(None),
            clock,
        }
    }

    /// Wrap this context in an Arc for sharing between a logger and its appenders
    #[must_use]
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Register a named style.
    ///
    /// Returns `false` if the name is already bound; the first binding stays.
    pub fn bind_style(&self, name: impl Into<String>, modifiers: impl Into<Vec<Modifier>>) -> bool {
        self.styles.write().register(name, modifiers)
    }

    pub fn has_style(&self, name: &str) -> bool {
        self.styles.read().contains(name)
    }

    /// Set the root under which `logs/<year>/<month>/` is created.
    ///
    /// The directory must already exist.
    pub fn bind_log_directory(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(LoggerError::config(
                "LoggerContext",
                format!("path is invalid: '{}' is not an existing directory", path.display()),
            ));
        }

        *self.log_directory.write() = Some(path.to_path_buf());
        Ok(())
    }

    pub fn log_directory(&self) -> Option<PathBuf> {
        self.log_directory.read().clone()
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    /// Render `format` at the current time
    pub fn render(&self, site: &CallSite, format: &str, values: &[&dyn Display]) -> Result<Rendered> {
        self.render_at(self.now(), site, format, values)
    }

    /// Render `format` as of `now`
    pub fn render_at(
        &self,
        now: NaiveDateTime,
        site: &CallSite,
        format: &str,
        values: &[&dyn Display],
    ) -> Result<Rendered> {
        let mut queue = SubstitutionQueue::from_values(values);
        let styles = self.styles.read();
        DirectiveScanner::new(&styles, site, now).scan(format, &mut queue)
    }
}

impl Default for LoggerContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::timestamp::FixedClock;
    use tempfile::TempDir;

    fn context() -> LoggerContext {
        let clock = FixedClock::from_ymd_hms(2023, 1, 5, 9, 3, 7).unwrap();
        LoggerContext::with_clock(Arc::new(clock))
    }

    #[test]
    fn test_render_with_injected_clock() {
        let ctx = context();
        let site = CallSite::new("src/main.rs", 3, "main");

        let out = ctx
            .render(&site, "%yyyy-%mm-%dd %h:%m:%s %v", &[&"ok" as &dyn Display])
            .unwrap();
        assert_eq!(out.plain, "2023-01-05 09:03:07 ok");
    }

    #[test]
    fn test_bound_styles_are_used() {
        let ctx = context();
        let site = CallSite::new("src/main.rs", 3, "main");
        assert!(ctx.bind_style("Alert", [Modifier::FgRed]));
        assert!(!ctx.bind_style("Alert", [Modifier::FgGreen]));
        assert!(ctx.has_style("Alert"));

        let out = ctx.render(&site, "%.Alert(!%)", &[]).unwrap();
        assert_eq!(out.styled, "\x1b[31m!\x1b[0m\x1b[0m");
    }

    #[test]
    fn test_contexts_are_isolated() {
        let first = context();
        let second = context();
        first.bind_style("Only", [Modifier::Bold]);

        let site = CallSite::new("src/main.rs", 3, "main");
        assert!(second.render(&site, "%.Only(x%)", &[]).is_err());
    }

    #[test]
    fn test_bind_log_directory() {
        let ctx = context();
        let dir = TempDir::new().expect("temp dir");

        assert!(ctx.log_directory().is_none());
        ctx.bind_log_directory(dir.path()).unwrap();
        assert_eq!(ctx.log_directory().as_deref(), Some(dir.path()));
    }

    #[test]
    fn test_bind_missing_log_directory() {
        let ctx = context();
        let dir = TempDir::new().expect("temp dir");
        let missing = dir.path().join("does-not-exist");

        let err = ctx.bind_log_directory(&missing).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
        assert!(ctx.log_directory().is_none());
    }
}
