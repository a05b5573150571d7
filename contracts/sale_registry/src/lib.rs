#![no_std]

mod contract;
mod errors;
mod events;
mod interfaces;
mod storage;
mod types;


pub use contract::{SaleRegistry, SaleRegistryClient};
pub use errors::Error;
pub use events::{BuyEvent, PayoutEvent, RedeemEvent, SaleDeletedEvent, SaleSnapshotEvent};
pub use types::{Sale, SaleConfig, SaleParams, TokenAction, CLOSE_GRACE_PERIOD};
