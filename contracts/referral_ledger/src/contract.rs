use crate::errors::Error;
use crate::events;
use crate::storage::*;
use crate::types::*;
use soroban_sdk::{contract, contractimpl, contractmeta, log, token, Address, Env, Vec};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Referral ledger: father/child referral tree with level-based purchase fees"
);

#[contract]
pub struct ReferralLedger;

#[contractimpl]
impl ReferralLedger {
    /// Initialize the ledger.
    ///
    /// `levels` must list levels `0..n` in order, each with a percent in
    /// `1..=10_000` basis points.
    pub fn initialize(
        env: Env,
        owner: Address,
        referral_token: Address,
        levels: Vec<LevelPercent>,
        root_caller: Address,
        helper_account: Address,
        auto_create_father: bool,
    ) -> Result<(), Error> {
        if has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();
        Self::validate_levels(&levels)?;

        set_owner(&env, &owner);
        set_levels(&env, &levels);
        set_config(
            &env,
            &ReferralConfig {
                referral_token,
                root_caller,
                helper_account,
                auto_create_father,
            },
        );
        Ok(())
    }

    /// Register the caller as a father at level 0.
    pub fn storage_referral_deposit(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        get_config(&env)?;
        if get_node(&env, &caller).is_some() {
            return Err(Error::FatherExists);
        }

        Self::register_father(&env, &caller);
        Ok(())
    }

    /// Link children to fathers.
    ///
    /// The owner, helper account and root caller may link any pair, creating
    /// unknown fathers when `auto_create_father` is on. Anyone else may only
    /// link themselves as the child of an existing father.
    pub fn add_new_child_referral_to_father(
        env: Env,
        caller: Address,
        pairs: Vec<ReferralPair>,
    ) -> Result<(), Error> {
        caller.require_auth();
        let config = get_config(&env)?;
        if pairs.is_empty() {
            return Err(Error::EmptyBatch);
        }
        let privileged = Self::is_privileged(&env, &config, &caller)?;

        for pair in pairs.iter() {
            if !privileged && pair.child != caller {
                return Err(Error::NotAuthorized);
            }
            if pair.father == pair.child {
                return Err(Error::SelfReferral);
            }
            if get_father(&env, &pair.child).is_some() {
                return Err(Error::ChildExists);
            }

            let mut node = match get_node(&env, &pair.father) {
                Some(node) => node,
                None if privileged && config.auto_create_father => {
                    Self::register_father(&env, &pair.father)
                }
                None => return Err(Error::FatherNotFound),
            };
            set_child(&env, &pair.father, node.children_count, &pair.child);
            node.children_count = node
                .children_count
                .checked_add(1)
                .ok_or(Error::ArithmeticOverflow)?;
            set_node(&env, &pair.father, &node);
            set_father(&env, &pair.child, &pair.father);
        }

        events::emit_children_added(&env, &caller, pairs);
        Ok(())
    }

    /// Move fathers to new levels. Owner or helper account only.
    pub fn update_level_referral_father(
        env: Env,
        caller: Address,
        updates: Vec<LevelUpdate>,
    ) -> Result<(), Error> {
        caller.require_auth();
        let config = get_config(&env)?;
        if caller != get_owner(&env)? && caller != config.helper_account {
            return Err(Error::NotAuthorized);
        }
        if updates.is_empty() {
            return Err(Error::EmptyBatch);
        }
        let level_count = get_levels(&env).len();

        for update in updates.iter() {
            let mut node = get_node(&env, &update.father).ok_or(Error::FatherNotFound)?;
            if update.level >= level_count {
                return Err(Error::LevelNotFound);
            }
            node.level = update.level;
            set_node(&env, &update.father, &node);
        }

        events::emit_levels_updated(&env, &caller, updates);
        Ok(())
    }

    /// Fee the father of `child` would earn on a purchase of `amount`.
    /// Zero when `child` has no father.
    pub fn calculate_referral_father_fee(env: Env, amount: i128, child: Address) -> Result<i128, Error> {
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }
        match get_father(&env, &child) {
            Some(father) => Self::father_fee(&env, &father, amount),
            None => Ok(0),
        }
    }

    /// Pay the father of `child` their cut of `amount` from the ledger's
    /// referral token balance. Root caller or owner only.
    pub fn add_referral_father_fee(
        env: Env,
        caller: Address,
        child: Address,
        amount: i128,
    ) -> Result<i128, Error> {
        caller.require_auth();
        let config = get_config(&env)?;
        if caller != config.root_caller && caller != get_owner(&env)? {
            return Err(Error::NotAuthorized);
        }
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }
        let father = get_father(&env, &child).ok_or(Error::FatherNotFound)?;

        let fee = Self::father_fee(&env, &father, amount)?;
        if fee > 0 {
            token::Client::new(&env, &config.referral_token).transfer(
                &env.current_contract_address(),
                &father,
                &fee,
            );
        }
        log!(&env, "referral fee paid", father.clone(), fee);

        events::emit_referral_payout(&env, &father, &child, fee);
        Ok(fee)
    }

    pub fn set_new_root_caller(env: Env, caller: Address, root_caller: Address) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        let mut config = get_config(&env)?;
        config.root_caller = root_caller.clone();
        set_config(&env, &config);

        events::emit_root_caller_updated(&env, &root_caller);
        Ok(())
    }

    pub fn set_new_helper_account(
        env: Env,
        caller: Address,
        helper_account: Address,
    ) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        let mut config = get_config(&env)?;
        config.helper_account = helper_account.clone();
        set_config(&env, &config);

        events::emit_helper_updated(&env, &helper_account);
        Ok(())
    }

    pub fn set_auto_create_father(env: Env, caller: Address, enabled: bool) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        let mut config = get_config(&env)?;
        config.auto_create_father = enabled;
        set_config(&env, &config);

        events::emit_auto_create_updated(&env, enabled);
        Ok(())
    }

    /// Sweep the ledger's whole balance of `token` to the owner.
    pub fn withdraw_token(env: Env, caller: Address, token: Address) -> Result<i128, Error> {
        let owner = Self::require_owner(&env, &caller)?;
        let client = token::Client::new(&env, &token);
        let balance = client.balance(&env.current_contract_address());
        if balance > 0 {
            client.transfer(&env.current_contract_address(), &owner, &balance);
            events::emit_sweep(&env, &token, &owner, balance);
        }
        Ok(balance)
    }

    // View functions
    pub fn get_father(env: Env, child: Address) -> Option<Address> {
        get_father(&env, &child)
    }

    pub fn get_node(env: Env, father: Address) -> Option<ReferralNode> {
        get_node(&env, &father)
    }

    pub fn get_child(env: Env, father: Address, index: u32) -> Option<Address> {
        get_child(&env, &father, index)
    }

    /// Up to `limit` children of `father` in link order, starting at `start`.
    pub fn get_children(env: Env, father: Address, start: u32, limit: u32) -> Vec<Address> {
        let mut children = Vec::new(&env);
        let count = get_node(&env, &father).map_or(0, |node| node.children_count);
        let end = start.saturating_add(limit).min(count);
        for index in start..end {
            if let Some(child) = get_child(&env, &father, index) {
                children.push_back(child);
            }
        }
        children
    }

    pub fn get_level_table(env: Env) -> Vec<LevelPercent> {
        get_levels(&env)
    }

    pub fn get_root_caller(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.root_caller)
    }

    pub fn get_helper_account(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.helper_account)
    }

    pub fn get_config(env: Env) -> Result<ReferralConfig, Error> {
        get_config(&env)
    }

    pub fn get_owner(env: Env) -> Result<Address, Error> {
        get_owner(&env)
    }

    // ------------------------------------------------------------------
    // Internal helpers
    // ------------------------------------------------------------------

    fn require_owner(env: &Env, caller: &Address) -> Result<Address, Error> {
        caller.require_auth();
        let owner = get_owner(env)?;
        if *caller != owner {
            return Err(Error::NotAuthorized);
        }
        Ok(owner)
    }

    fn is_privileged(env: &Env, config: &ReferralConfig, caller: &Address) -> Result<bool, Error> {
        Ok(*caller == get_owner(env)?
            || *caller == config.helper_account
            || *caller == config.root_caller)
    }

    fn validate_levels(levels: &Vec<LevelPercent>) -> Result<(), Error> {
        if levels.is_empty() {
            return Err(Error::InvalidLevelTable);
        }
        for (index, entry) in levels.iter().enumerate() {
            if entry.level != index as u32 || !fp_math::is_valid_bps(entry.percent) {
                return Err(Error::InvalidLevelTable);
            }
        }
        Ok(())
    }

    fn register_father(env: &Env, father: &Address) -> ReferralNode {
        let node = ReferralNode {
            is_present: true,
            level: 0,
            children_count: 0,
        };
        set_node(env, father, &node);
        events::emit_father_registered(env, father, node.level);
        node
    }

    fn father_fee(env: &Env, father: &Address, amount: i128) -> Result<i128, Error> {
        let node = get_node(env, father).ok_or(Error::FatherNotFound)?;
        let level = get_levels(env)
            .get(node.level)
            .ok_or(Error::LevelNotFound)?;
        fp_math::percent_of(amount, level.percent).ok_or(Error::ArithmeticOverflow)
    }
}
