//! Arithmetic evaluation of selected text.
//!
//! # Examples
//!
//! ```
//! use quicktools::calc::{CalcSettings, EvalResultMode, evaluate, evaluate_selection};
//!
//! assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
//!
//! let settings = CalcSettings {
//!     decimal_points: 2,
//!     result_mode: EvalResultMode::Append,
//! };
//! assert_eq!(evaluate_selection("10 / 4", &settings).unwrap(), "10 / 4 = 2.5");
//! ```

mod lexer;
mod parser;

use crate::error::{Error, Result};

/// Largest accepted `decimal_points`.
pub const MAX_DECIMAL_POINTS: u8 = 15;

/// What happens to the selection once it has been evaluated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EvalResultMode {
    /// Replace the expression with its result.
    #[default]
    Replace,
    /// Keep the expression and append `= result`.
    Append,
}

/// Evaluation preferences supplied by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalcSettings {
    /// Digits kept after the decimal point (capped at [`MAX_DECIMAL_POINTS`]).
    pub decimal_points: u8,
    pub result_mode: EvalResultMode,
}

impl Default for CalcSettings {
    fn default() -> Self {
        Self {
            decimal_points: 2,
            result_mode: EvalResultMode::Replace,
        }
    }
}

/// Evaluate an arithmetic expression.
pub fn evaluate(expression: &str) -> Result<f64> {
    let tokens = lexer::tokenize(expression)?;
    let value = parser::Parser::new(tokens, expression.chars().count()).evaluate()?;
    if !value.is_finite() {
        return Err(Error::InvalidExpression {
            position: 0,
            message: "result is not a finite number".to_string(),
        });
    }
    Ok(value)
}

/// Round `value` to `decimal_points` and drop trailing zeros.
#[must_use]
pub fn format_result(value: f64, decimal_points: u8) -> String {
    let precision = usize::from(decimal_points.min(MAX_DECIMAL_POINTS));
    let mut text = format!("{value:.precision$}");
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}

/// Evaluate `text` and shape the output according to `settings`.
pub fn evaluate_selection(text: &str, settings: &CalcSettings) -> Result<String> {
    let value = evaluate(text)?;
    let result = format_result(value, settings.decimal_points);
    Ok(match settings.result_mode {
        EvalResultMode::Replace => result,
        EvalResultMode::Append => format!("{} = {result}", text.trim_end()),
    })
}
