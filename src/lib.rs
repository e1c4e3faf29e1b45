//! `QuickTools` - text utilities for a quick-settings style toolbox
//!
//! Pure text engine behind the tool tiles: Unicode decoration, a catalog of
//! text transformations, find/replace with undo and redo, phone number
//! normalization, text statistics and inline arithmetic.
//!
//! Everything operates on `&str` and returns owned `String`s; the host
//! supplies preferences through [`Settings`] and may route diagnostics to
//! its own logger with [`set_log_callback`].

// Crate-level lint configuration
#![allow(clippy::missing_errors_doc)] // Errors are listed on the Error enum
#![allow(clippy::missing_panics_doc)] // Panics only on programmer error
#![allow(clippy::module_name_repetitions)] // Allow TextRange in text etc
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::cast_precision_loss)] // Counts are small
#![allow(clippy::float_cmp)] // Exact zero check for division
#![allow(clippy::must_use_candidate)] // Not every getter needs it
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::items_after_statements)] // Common pattern in tests

pub mod calc;
pub mod decorate;
pub mod error;
pub mod event;
pub mod phone;
pub mod settings;
pub mod stats;
pub mod text;
pub mod transform;

// Re-export core types at crate root
pub use error::{Error, Result};
pub use event::{LogLevel, clear_log_callback, emit_log, set_log_callback};
pub use settings::Settings;

pub use calc::{CalcSettings, EvalResultMode, evaluate, evaluate_selection};
pub use decorate::{Decoration, decorate, undecorate};
pub use phone::{CountryCodeSettings, MessagingApp, PhoneNumberNormalizer};
pub use stats::TextStatistics;
pub use text::{TextRange, TextReplacementAction, TextReplacementManager};
pub use transform::{CaseMode, RemoveMode, Transform, WrapPreset, apply_all};
