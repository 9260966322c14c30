//! A byte-addressed text buffer built on a piece table, with linear
//! undo/redo.
//!
//! [`Editor`] is the only type most callers need. The modules underneath are
//! public for inspection and testing.
pub mod editor;
pub mod enums;
pub mod errors;
pub mod history;
pub mod options;
pub mod piece_table;

pub use editor::Editor;
pub use errors::{TableError, TableResult};
pub use options::EditorOptions;
