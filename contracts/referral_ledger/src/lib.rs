#![no_std]

mod contract;
mod errors;
mod events;
mod storage;
mod types;


pub use contract::{ReferralLedger, ReferralLedgerClient};
pub use errors::Error;
pub use events::{
    AutoCreateUpdatedEvent, ChildrenAddedEvent, FatherRegisteredEvent, LevelsUpdatedEvent,
    ReferralPayoutEvent,
};
pub use types::{LevelPercent, LevelUpdate, ReferralConfig, ReferralNode, ReferralPair};
