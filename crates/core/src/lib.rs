#![no_std]
#![allow(clippy::cargo_common_metadata)]

extern crate alloc;

pub mod scanner;
pub mod stats;

pub use scanner::{ScanOutcome, ScanSession, ScanState, Unterminated, scan, scan_bytes};
pub use stats::ScanStats;
