use crate::errors::Error;
use crate::types::*;
use soroban_sdk::{Address, Env, Vec};

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<ReferralConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &ReferralConfig) {
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

pub fn get_levels(env: &Env) -> Vec<LevelPercent> {
    env.storage()
        .instance()
        .get(&DataKey::Levels)
        .unwrap_or(Vec::new(env))
}

pub fn set_levels(env: &Env, levels: &Vec<LevelPercent>) {
    env.storage().instance().set(&DataKey::Levels, levels);
}

pub fn get_node(env: &Env, father: &Address) -> Option<ReferralNode> {
    env.storage()
        .persistent()
        .get(&DataKey::Node(father.clone()))
}

pub fn set_node(env: &Env, father: &Address, node: &ReferralNode) {
    env.storage()
        .persistent()
        .set(&DataKey::Node(father.clone()), node);
}

pub fn get_father(env: &Env, child: &Address) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::FatherOf(child.clone()))
}

pub fn set_father(env: &Env, child: &Address, father: &Address) {
    env.storage()
        .persistent()
        .set(&DataKey::FatherOf(child.clone()), father);
}

pub fn get_child(env: &Env, father: &Address, index: u32) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Child(father.clone(), index))
}

pub fn set_child(env: &Env, father: &Address, index: u32, child: &Address) {
    env.storage()
        .persistent()
        .set(&DataKey::Child(father.clone(), index), child);
}
