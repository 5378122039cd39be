//! Document-root file access.
//!
//! - **`guard`**: keeps every resolved path inside the document root
//! - **`accessor`**: reads file bytes and classifies failures

pub mod accessor;
pub mod guard;

pub use accessor::{FileAccessor, FileReadOutcome, StatusKind};
