//! Fuzz target for [`Roster`] admission
//!
//! # Invariants
//!
//! - Admitted names are trimmed, non-empty and unique
//! - Rejection leaves the roster unchanged
//! - NEVER panic on arbitrary UTF-8

#![no_main]

use libfuzzer_sys::fuzz_target;
use sorteo_core::Roster;

fuzz_target!(|inputs: Vec<String>| {
    let mut roster = Roster::new();

    for raw in &inputs {
        let before = roster.size();
        match roster.admit(raw) {
            Ok(name) => {
                let name = name.to_owned();
                assert_eq!(name, raw.trim());
                assert!(!name.is_empty());
                assert_eq!(roster.size(), before + 1);
            },
            Err(_) => assert_eq!(roster.size(), before),
        }
    }

    let names: Vec<_> = roster.names().collect();
    for (i, name) in names.iter().enumerate() {
        assert!(!names[..i].contains(name), "duplicate {name:?}");
    }
});
