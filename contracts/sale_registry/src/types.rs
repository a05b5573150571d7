use soroban_sdk::{contracttype, Address, Env};

/// Grace period granted for refunds once a sale is closed.
pub const CLOSE_GRACE_PERIOD: u64 = 30 * 24 * 60 * 60;

/// Sale record, one per sale token.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Sale {
    pub price: i128, // Quote units per sale token unit
    pub claim_timestamp: u64,
    pub limit_timestamp: u64,
    pub available: i128,
    pub sold: i128,
    pub last_call_timestamp: u64,
    pub created_timestamp: u64,
    pub closed_timestamp: u64,
    pub is_active: bool,
    pub is_paused: bool,
    pub is_collected: bool,
}

/// Caller-controlled fields of a sale, used by create and update.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleParams {
    pub price: i128,
    pub claim_timestamp: u64,
    pub limit_timestamp: u64,
    pub available: i128,
    pub sold: i128,
    pub last_call_timestamp: u64,
    pub is_paused: bool,
    pub is_collected: bool,
}

#[derive(Clone)]
#[contracttype]
pub struct SaleConfig {
    pub quote_token: Address,               // Currency buyers pay with
    pub referral_contract: Option<Address>, // Fee routing on buy, if set
}

/// Token operation requested in a single call instead of approve-and-call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum TokenAction {
    Lock,
    Claim,
    Refund,
}

#[contracttype]
pub enum DataKey {
    Config,
    Owner,
    Sale(Address),
}

pub fn get_ledger_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}
