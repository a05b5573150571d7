use crate::types::Sale;
use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

// ==================== Event Payload Structs ====================
// Topics are ("SALE", <event>); indexers filter on the second topic.

const SALE: Symbol = symbol_short!("SALE");

#[derive(Clone)]
#[contracttype]
pub struct SaleSnapshotEvent {
    pub token: Address,
    pub sale: Sale,
}

#[derive(Clone)]
#[contracttype]
pub struct SaleDeletedEvent {
    pub token: Address,
}

/// Published for every buy attempt; `success == false` carries zero amounts.
#[derive(Clone)]
#[contracttype]
pub struct BuyEvent {
    pub token: Address,
    pub buyer: Address,
    pub success: bool,
    pub quote_amount: i128,
    pub token_amount: i128,
    pub price: i128,
}

/// Shared by refund and claim: sale tokens burned against a quote payout.
#[derive(Clone)]
#[contracttype]
pub struct RedeemEvent {
    pub token: Address,
    pub user: Address,
    pub token_amount: i128,
    pub quote_amount: i128,
    pub price: i128,
}

#[derive(Clone)]
#[contracttype]
pub struct PayoutEvent {
    pub token: Address,
    pub to: Address,
    pub amount: i128,
}

#[derive(Clone)]
#[contracttype]
pub struct ReferralContractEvent {
    pub referral_contract: Option<Address>,
}

// ==================== Emit Functions ====================

fn emit_snapshot(env: &Env, name: Symbol, token: &Address, sale: &Sale) {
    env.events().publish(
        (SALE, name),
        SaleSnapshotEvent {
            token: token.clone(),
            sale: sale.clone(),
        },
    );
}

pub fn emit_token_added(env: &Env, token: &Address, sale: &Sale) {
    emit_snapshot(env, symbol_short!("ADDED"), token, sale);
}

pub fn emit_token_updated(env: &Env, token: &Address, sale: &Sale) {
    emit_snapshot(env, symbol_short!("UPDATED"), token, sale);
}

pub fn emit_token_closed(env: &Env, token: &Address, sale: &Sale) {
    emit_snapshot(env, symbol_short!("CLOSED"), token, sale);
}

pub fn emit_token_collected(env: &Env, token: &Address, sale: &Sale) {
    emit_snapshot(env, symbol_short!("COLLECTED"), token, sale);
}

pub fn emit_token_deleted(env: &Env, token: &Address) {
    env.events().publish(
        (SALE, symbol_short!("DELETED")),
        SaleDeletedEvent {
            token: token.clone(),
        },
    );
}

pub fn emit_buy(
    env: &Env,
    token: &Address,
    buyer: &Address,
    success: bool,
    quote_amount: i128,
    token_amount: i128,
    price: i128,
) {
    env.events().publish(
        (SALE, symbol_short!("BUY")),
        BuyEvent {
            token: token.clone(),
            buyer: buyer.clone(),
            success,
            quote_amount,
            token_amount,
            price,
        },
    );
}

pub fn emit_refund(
    env: &Env,
    token: &Address,
    user: &Address,
    token_amount: i128,
    quote_amount: i128,
    price: i128,
) {
    env.events().publish(
        (SALE, symbol_short!("REFUND")),
        RedeemEvent {
            token: token.clone(),
            user: user.clone(),
            token_amount,
            quote_amount,
            price,
        },
    );
}

pub fn emit_claim(
    env: &Env,
    token: &Address,
    user: &Address,
    token_amount: i128,
    quote_amount: i128,
    price: i128,
) {
    env.events().publish(
        (SALE, symbol_short!("CLAIM")),
        RedeemEvent {
            token: token.clone(),
            user: user.clone(),
            token_amount,
            quote_amount,
            price,
        },
    );
}

pub fn emit_payout(env: &Env, token: &Address, to: &Address, amount: i128) {
    env.events().publish(
        (SALE, symbol_short!("PAYOUT")),
        PayoutEvent {
            token: token.clone(),
            to: to.clone(),
            amount,
        },
    );
}

pub fn emit_referral_contract_updated(env: &Env, referral_contract: Option<Address>) {
    env.events().publish(
        (SALE, symbol_short!("REFERRAL")),
        ReferralContractEvent { referral_contract },
    );
}
