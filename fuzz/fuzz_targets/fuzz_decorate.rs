//! Fuzz target for decoration.
//!
//! Decorating arbitrary text must not panic, and undecorating must not
//! touch characters outside the styled alphabets.

#![no_main]

use libfuzzer_sys::fuzz_target;
use quicktools::decorate::{Decoration, decorate, undecorate};

fuzz_target!(|data: &str| {
    for style in Decoration::ALL {
        let decorated = decorate(data, style);
        let _ = undecorate(&decorated);
    }

    // Plain ASCII always survives a round trip
    if data.bytes().all(|b| (0x20..0x7F).contains(&b)) {
        for style in Decoration::ALL {
            assert_eq!(undecorate(&decorate(data, style)), data);
        }
    }
});
