//! Model behind the log viewer tab
//!
//! Lines are kept in arrival order with a level and a local timestamp. The
//! buffer is bounded; once full the oldest line is dropped.

use std::collections::VecDeque;
use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Maximum number of lines kept in memory
pub const MAX_LOG_LINES: usize = 10_000;

/// Severity of a log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub const ALL: [LogLevel; 3] = [LogLevel::Info, LogLevel::Warning, LogLevel::Error];

    /// Tag written between brackets in front of the line
    pub fn tag(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warning => "ATTENTION",
            LogLevel::Error => "ERREUR",
        }
    }

    /// Name shown in the level filter
    pub fn label(self) -> &'static str {
        match self {
            LogLevel::Info => "Info",
            LogLevel::Warning => "Attention",
            LogLevel::Error => "Erreur",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.tag().eq_ignore_ascii_case(tag))
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Which lines the viewer shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogFilter {
    #[default]
    All,
    Only(LogLevel),
}

impl LogFilter {
    /// Entries of the level combo, in display order
    pub const CHOICES: [LogFilter; 4] = [
        LogFilter::All,
        LogFilter::Only(LogLevel::Info),
        LogFilter::Only(LogLevel::Warning),
        LogFilter::Only(LogLevel::Error),
    ];

    pub fn label(self) -> &'static str {
        match self {
            LogFilter::All => "Tous",
            LogFilter::Only(level) => level.label(),
        }
    }

    pub fn accepts(self, level: LogLevel) -> bool {
        match self {
            LogFilter::All => true,
            LogFilter::Only(wanted) => wanted == level,
        }
    }
}

/// A single line of the log
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: LogLevel,
    pub text: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level, self.text)
    }
}

/// Split `"[TAG] text"` into a level and the text.
///
/// Lines without a known tag are treated as info.
pub fn parse_line(line: &str) -> (LogLevel, &str) {
    line.strip_prefix('[')
        .and_then(|rest| rest.split_once(']'))
        .and_then(|(tag, text)| LogLevel::from_tag(tag).map(|level| (level, text.trim_start())))
        .unwrap_or((LogLevel::Info, line))
}

/// Bounded, ordered log buffer
#[derive(Debug, Clone)]
pub struct LogBuffer {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::with_capacity(MAX_LOG_LINES)
    }
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn append(&mut self, level: LogLevel, text: impl Into<String>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            timestamp: Local::now(),
            level,
            text: text.into(),
        });
    }

    /// Append a line written in `"[TAG] text"` form
    pub fn append_tagged(&mut self, line: &str) {
        let (level, text) = parse_line(line);
        self.append(level, text);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    pub fn filtered(&self, filter: LogFilter) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |e| filter.accepts(e.level))
    }

    /// Render the lines accepted by `filter`, one per line
    pub fn to_text(&self, filter: LogFilter) -> String {
        self.filtered(filter)
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("[INFO] Démarré"), (LogLevel::Info, "Démarré"));
        assert_eq!(parse_line("[ATTENTION] x"), (LogLevel::Warning, "x"));
        assert_eq!(parse_line("[erreur] boom"), (LogLevel::Error, "boom"));
        assert_eq!(parse_line("plain"), (LogLevel::Info, "plain"));
        assert_eq!(parse_line("[DEBUG] y"), (LogLevel::Info, "[DEBUG] y"));
    }

    #[test]
    fn test_filter_and_text() {
        let mut log = LogBuffer::new();
        log.append(LogLevel::Info, "a");
        log.append(LogLevel::Warning, "b");
        log.append(LogLevel::Error, "c");

        assert_eq!(log.to_text(LogFilter::All), "[INFO] a\n[ATTENTION] b\n[ERREUR] c");
        assert_eq!(log.to_text(LogFilter::Only(LogLevel::Warning)), "[ATTENTION] b");
        assert_eq!(log.filtered(LogFilter::Only(LogLevel::Info)).count(), 1);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut log = LogBuffer::with_capacity(2);
        log.append(LogLevel::Info, "1");
        log.append(LogLevel::Info, "2");
        log.append(LogLevel::Info, "3");
        assert_eq!(log.len(), 2);
        assert_eq!(log.entries().next().unwrap().text, "2");
        assert_eq!(log.last().unwrap().text, "3");
    }

    #[test]
    fn test_clear() {
        let mut log = LogBuffer::new();
        log.append_tagged("[INFO] x");
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_filter_labels() {
        let labels: Vec<_> = LogFilter::CHOICES.iter().map(|f| f.label()).collect();
        assert_eq!(labels, ["Tous", "Info", "Attention", "Erreur"]);
    }
}
