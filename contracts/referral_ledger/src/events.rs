use crate::types::{LevelUpdate, ReferralPair};
use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol, Vec};

const REFERRAL: Symbol = symbol_short!("REFERRAL");

#[derive(Clone)]
#[contracttype]
pub struct FatherRegisteredEvent {
    pub father: Address,
    pub level: u32,
}

/// One event per batch, carrying every linked pair.
#[derive(Clone)]
#[contracttype]
pub struct ChildrenAddedEvent {
    pub caller: Address,
    pub pairs: Vec<ReferralPair>,
}

#[derive(Clone)]
#[contracttype]
pub struct LevelsUpdatedEvent {
    pub caller: Address,
    pub updates: Vec<LevelUpdate>,
}

#[derive(Clone)]
#[contracttype]
pub struct ReferralPayoutEvent {
    pub father: Address,
    pub child: Address,
    pub amount: i128,
}

#[derive(Clone)]
#[contracttype]
pub struct AccountUpdatedEvent {
    pub account: Address,
}

#[derive(Clone)]
#[contracttype]
pub struct AutoCreateUpdatedEvent {
    pub enabled: bool,
}

#[derive(Clone)]
#[contracttype]
pub struct SweepEvent {
    pub token: Address,
    pub to: Address,
    pub amount: i128,
}

pub fn emit_father_registered(env: &Env, father: &Address, level: u32) {
    env.events().publish(
        (REFERRAL, symbol_short!("DEPOSIT")),
        FatherRegisteredEvent {
            father: father.clone(),
            level,
        },
    );
}

pub fn emit_children_added(env: &Env, caller: &Address, pairs: Vec<ReferralPair>) {
    env.events().publish(
        (REFERRAL, symbol_short!("CHILDREN")),
        ChildrenAddedEvent {
            caller: caller.clone(),
            pairs,
        },
    );
}

pub fn emit_levels_updated(env: &Env, caller: &Address, updates: Vec<LevelUpdate>) {
    env.events().publish(
        (REFERRAL, symbol_short!("LEVELS")),
        LevelsUpdatedEvent {
            caller: caller.clone(),
            updates,
        },
    );
}

pub fn emit_referral_payout(env: &Env, father: &Address, child: &Address, amount: i128) {
    env.events().publish(
        (REFERRAL, symbol_short!("PAYOUT")),
        ReferralPayoutEvent {
            father: father.clone(),
            child: child.clone(),
            amount,
        },
    );
}

pub fn emit_root_caller_updated(env: &Env, account: &Address) {
    env.events().publish(
        (REFERRAL, symbol_short!("ROOT")),
        AccountUpdatedEvent {
            account: account.clone(),
        },
    );
}

pub fn emit_helper_updated(env: &Env, account: &Address) {
    env.events().publish(
        (REFERRAL, symbol_short!("HELPER")),
        AccountUpdatedEvent {
            account: account.clone(),
        },
    );
}

pub fn emit_auto_create_updated(env: &Env, enabled: bool) {
    env.events().publish(
        (REFERRAL, symbol_short!("AUTO")),
        AutoCreateUpdatedEvent { enabled },
    );
}

pub fn emit_sweep(env: &Env, token: &Address, to: &Address, amount: i128) {
    env.events().publish(
        (REFERRAL, symbol_short!("SWEEP")),
        SweepEvent {
            token: token.clone(),
            to: to.clone(),
            amount,
        },
    );
}
