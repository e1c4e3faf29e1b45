//! Fuzz target for the arithmetic evaluator.
//!
//! Tests that evaluate handles arbitrary strings without panicking and that
//! reported error positions stay inside the expression.

#![no_main]

use libfuzzer_sys::fuzz_target;
use quicktools::Error;
use quicktools::calc::{CalcSettings, evaluate, evaluate_selection};

fuzz_target!(|data: &str| {
    match evaluate(data) {
        Ok(value) => assert!(value.is_finite()),
        Err(Error::InvalidExpression { position, .. }) => {
            assert!(position <= data.chars().count());
        }
        Err(_) => {}
    }

    let _ = evaluate_selection(data, &CalcSettings::default());
});
