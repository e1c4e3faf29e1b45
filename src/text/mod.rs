//! Find and replace over a single owned text buffer.
//!
//! Key types:
//!
//! - [`TextRange`]: `[start, end)` interval of character positions
//! - [`TextReplacementManager`]: Buffer with replace-one, replace-all and
//!   linear undo/redo
//! - [`search`]: Non-overlapping occurrence search used by both
//!
//! # Examples
//!
//! ```
//! use quicktools::text::{TextReplacementManager, find_ranges};
//!
//! let ranges = find_ranges("ababab", "aba", false);
//! assert_eq!(ranges.len(), 1);
//!
//! let mut manager = TextReplacementManager::new("Hello World");
//! let world = manager.find("World", false)[0];
//! manager.replace_one(world, "Rust").unwrap();
//! assert_eq!(manager.text(), "Hello Rust");
//! ```

mod range;
mod replace;
pub mod search;

pub use range::TextRange;
pub use replace::{TextReplacementAction, TextReplacementManager};
pub use search::{count_matches, find_next, find_ranges, replace_ranges};
