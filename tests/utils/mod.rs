//! Testing utilities shared by the cross-contract tests
pub mod assertions;
pub mod contract_utils;

pub use contract_utils::*;

/// Common test constants
pub mod constants {
    pub const UNIT: i128 = 10_000_000; // 7 decimals
    pub const SUPPLY: i128 = 1_000_000 * UNIT;
    pub const PRICE: i128 = 50; // Quote units per token unit
    pub const YEAR: u64 = 365 * 24 * 60 * 60;
    pub const DAY: u64 = 24 * 60 * 60;

    pub const FEB_2025: u64 = 1_738_368_000;
    pub const START: u64 = 1_735_689_600 + 14 * DAY; // 2025-01-15

    pub const FATHER_BPS: u32 = 500;
}
