//! Utility modules
//!
//! This module contains utilities and collaborators:
//! - Error types and result types
//! - HTML escaping
//! - Persistence, clipboard and notification collaborators

pub mod clipboard;
pub mod error;
pub mod escape;
pub mod notify;
pub mod storage;

// Re-export commonly used items
pub use clipboard::{Clipboard, MemoryClipboard};
pub use error::{EditorError, EditorResult, ErrorKind};
pub use escape::{escape_attr, escape_text};
pub use notify::{Notice, NoticeLog, Notifier, Severity};
pub use storage::{MemoryStore, NoopStore, Store};

#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStore;
