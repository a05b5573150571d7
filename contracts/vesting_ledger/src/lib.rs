#![no_std]

mod accrual;
pub mod calendar;
mod contract;
mod errors;
mod events;
mod storage;
mod types;


pub use accrual::Accrual;
pub use contract::{VestingLedger, VestingLedgerClient};
pub use errors::Error;
pub use events::{BondEvent, ClaimedEvent, LockEvent, PauseEvent};
pub use types::{LockPosition, SecondaryDeposit, TokenAction, VestingConfig};
