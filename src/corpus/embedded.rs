//! Embedded frequency list
//!
//! Compiled into the binary at build time from `data/frequencies.tsv`.

// Include generated frequency list from build script
include!(concat!(env!("OUT_DIR"), "/frequencies.rs"));
