use soroban_sdk::{contractclient, Address, Env};

// Minimal interfaces for contracts the registry calls besides SEP-41.

#[contractclient(name = "SupplyClient")]
pub trait SupplyInterface {
    fn total_supply(env: Env) -> i128;
}

#[contractclient(name = "ReferralLedgerClient")]
pub trait ReferralLedgerInterface {
    fn calculate_referral_father_fee(env: Env, amount: i128, child: Address) -> i128;
    fn add_referral_father_fee(env: Env, caller: Address, child: Address, amount: i128) -> i128;
}
