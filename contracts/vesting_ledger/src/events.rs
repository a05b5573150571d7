use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

const VESTING: Symbol = symbol_short!("VESTING");

#[derive(Clone)]
#[contracttype]
pub struct LockEvent {
    pub token: Address,
    pub user: Address,
    pub amount: i128,
}

#[derive(Clone)]
#[contracttype]
pub struct ClaimedEvent {
    pub user: Address,
    pub amount: i128,
}

/// Added, edited or deleted bond. `percent` is 0 for deletions.
#[derive(Clone)]
#[contracttype]
pub struct BondEvent {
    pub token: Address,
    pub timestamp: u64,
    pub percent: u32,
}

#[derive(Clone)]
#[contracttype]
pub struct PauseEvent {
    pub token: Address,
    pub paused: bool,
}

pub fn emit_locked(env: &Env, token: &Address, user: &Address, amount: i128) {
    env.events().publish(
        (VESTING, symbol_short!("LOCKED")),
        LockEvent {
            token: token.clone(),
            user: user.clone(),
            amount,
        },
    );
}

pub fn emit_unlocked(env: &Env, token: &Address, user: &Address, amount: i128) {
    env.events().publish(
        (VESTING, symbol_short!("UNLOCKED")),
        LockEvent {
            token: token.clone(),
            user: user.clone(),
            amount,
        },
    );
}

pub fn emit_claimed(env: &Env, user: &Address, amount: i128) {
    env.events().publish(
        (VESTING, symbol_short!("CLAIMED")),
        ClaimedEvent {
            user: user.clone(),
            amount,
        },
    );
}

fn emit_bond(env: &Env, kind: Symbol, token: &Address, timestamp: u64, percent: u32) {
    env.events().publish(
        (VESTING, kind),
        BondEvent {
            token: token.clone(),
            timestamp,
            percent,
        },
    );
}

pub fn emit_bond_added(env: &Env, token: &Address, timestamp: u64, percent: u32) {
    emit_bond(env, symbol_short!("BOND_ADD"), token, timestamp, percent);
}

pub fn emit_bond_edited(env: &Env, token: &Address, timestamp: u64, percent: u32) {
    emit_bond(env, symbol_short!("BOND_EDIT"), token, timestamp, percent);
}

pub fn emit_bond_deleted(env: &Env, token: &Address, timestamp: u64) {
    emit_bond(env, symbol_short!("BOND_DEL"), token, timestamp, 0);
}

pub fn emit_pause_changed(env: &Env, token: &Address, paused: bool) {
    env.events().publish(
        (VESTING, symbol_short!("PAUSED")),
        PauseEvent {
            token: token.clone(),
            paused,
        },
    );
}
