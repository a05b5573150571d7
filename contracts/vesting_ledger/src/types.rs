use soroban_sdk::{contracttype, Address, Env, Vec};

/// A lock made after the position's first bucket, waiting to mature into
/// `init_locked` at `timestamp` (a UTC month start).
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SecondaryDeposit {
    pub amount: i128,
    pub timestamp: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct LockPosition {
    pub init_locked: i128,                // Matured principal earning rewards
    pub init_time_create: u64,            // Bucket the principal matured at, 0 when empty
    pub last_calculation_timestamp: u64,  // Latest bond boundary folded into `earned`
    pub earned: i128,                     // Never decreases
    pub to_claim: i128,
    pub accruing: bool,                   // Set once the first bond boundary is processed
    pub secondary: Vec<SecondaryDeposit>, // Oldest bucket first
}

impl LockPosition {
    pub fn empty(env: &Env) -> Self {
        LockPosition {
            init_locked: 0,
            init_time_create: 0,
            last_calculation_timestamp: 0,
            earned: 0,
            to_claim: 0,
            accruing: false,
            secondary: Vec::new(env),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct VestingConfig {
    pub reward_token: Address, // Paid out by `claim`
}

/// Action requested through `execute`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum TokenAction {
    Lock,
    Claim,
    Refund,
}

#[derive(Clone)]
#[contracttype]
pub struct PositionKey {
    pub token: Address,
    pub user: Address,
}

#[contracttype]
pub enum DataKey {
    Owner,
    Config,
    Position(PositionKey),
    Bonds(Address),      // Token -> Map<timestamp, percent>
    LastBond(Address),   // Token -> latest bond timestamp
    Paused(Address),     // Token -> bool
    UserTokens(Address), // User -> tokens locked, in first-lock order
}

pub fn get_ledger_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}
