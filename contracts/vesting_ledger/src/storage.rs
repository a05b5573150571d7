use crate::errors::Error;
use crate::types::*;
use soroban_sdk::{Address, Env, Map, Vec};

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<VestingConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &VestingConfig) {
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

fn position_key(token: &Address, user: &Address) -> DataKey {
    DataKey::Position(PositionKey {
        token: token.clone(),
        user: user.clone(),
    })
}

pub fn get_position(env: &Env, token: &Address, user: &Address) -> Option<LockPosition> {
    env.storage().persistent().get(&position_key(token, user))
}

pub fn set_position(env: &Env, token: &Address, user: &Address, position: &LockPosition) {
    env.storage()
        .persistent()
        .set(&position_key(token, user), position);
}

pub fn get_bonds(env: &Env, token: &Address) -> Map<u64, u32> {
    env.storage()
        .persistent()
        .get(&DataKey::Bonds(token.clone()))
        .unwrap_or(Map::new(env))
}

pub fn set_bonds(env: &Env, token: &Address, bonds: &Map<u64, u32>) {
    env.storage()
        .persistent()
        .set(&DataKey::Bonds(token.clone()), bonds);
}

pub fn get_last_bond(env: &Env, token: &Address) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::LastBond(token.clone()))
        .unwrap_or(0)
}

pub fn set_last_bond(env: &Env, token: &Address, timestamp: u64) {
    env.storage()
        .persistent()
        .set(&DataKey::LastBond(token.clone()), &timestamp);
}

pub fn is_paused(env: &Env, token: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Paused(token.clone()))
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, token: &Address, paused: bool) {
    env.storage()
        .persistent()
        .set(&DataKey::Paused(token.clone()), &paused);
}

pub fn get_user_tokens(env: &Env, user: &Address) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::UserTokens(user.clone()))
        .unwrap_or(Vec::new(env))
}

/// Remember that `user` holds a position in `token`. No-op when already known.
pub fn track_user_token(env: &Env, user: &Address, token: &Address) {
    let mut tokens = get_user_tokens(env, user);
    if !tokens.contains(token) {
        tokens.push_back(token.clone());
        env.storage()
            .persistent()
            .set(&DataKey::UserTokens(user.clone()), &tokens);
    }
}
