use crate::errors::Error;
use crate::types::*;
use soroban_sdk::{Address, Env};

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<SaleConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn has_sale(env: &Env, token: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Sale(token.clone()))
}

pub fn get_sale(env: &Env, token: &Address) -> Option<Sale> {
    env.storage()
        .persistent()
        .get(&DataKey::Sale(token.clone()))
}

pub fn set_sale(env: &Env, token: &Address, sale: &Sale) {
    env.storage()
        .persistent()
        .set(&DataKey::Sale(token.clone()), sale);
}

pub fn remove_sale(env: &Env, token: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Sale(token.clone()));
}
