//! Core functionality for the data manager
//!
//! This crate holds everything that does not depend on a GUI toolkit: the
//! table model and its row search, the tree model, the log buffer, the
//! progress animation and the per-window [`Session`] that owns them.

pub mod events;
pub mod grid;
pub mod hierarchy;
pub mod log;
pub mod progress;
pub mod sample;
pub mod search;
pub mod session;
pub mod settings;

// Re-export commonly used types
pub use events::{run_search, LogSink, SearchHandler, SelectionSink};
pub use grid::{Grid, GridError, GridView};
pub use hierarchy::{Hierarchy, NodePath, TreeNode};
pub use log::{LogBuffer, LogEntry, LogFilter, LogLevel};
pub use progress::{ProgressAnimation, ProgressTick};
pub use search::{RowSearchIndex, SearchResult};
pub use session::{ControlValues, Notice, Session};
pub use settings::AppSettings;
