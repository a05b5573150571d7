use crate::calendar;
use crate::errors::Error;
use crate::events;
use crate::storage::*;
use crate::types::*;
use soroban_sdk::{contract, contractimpl, contractmeta, log, token, Address, Env, Map, Vec};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Vesting ledger: monthly token locks with bond-scheduled rewards"
);

#[contract]
pub struct VestingLedger;

#[contractimpl]
impl VestingLedger {
    /// Initialize the ledger with its owner and the token rewards are paid in.
    pub fn initialize(env: Env, owner: Address, reward_token: Address) -> Result<(), Error> {
        if has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        set_owner(&env, &owner);
        set_config(&env, &VestingConfig { reward_token });
        Ok(())
    }

    /// Block or allow `lock`/`unlock` for `token`.
    pub fn set_token_paused(
        env: Env,
        caller: Address,
        token: Address,
        paused: bool,
    ) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        set_paused(&env, &token, paused);
        events::emit_pause_changed(&env, &token, paused);
        Ok(())
    }

    /// Lock `amount` of `token`. The deposit matures at the start of next month.
    pub fn lock(env: Env, user: Address, token: Address, amount: i128) -> Result<(), Error> {
        user.require_auth();
        Self::do_lock(&env, &user, &token, amount)
    }

    /// Return `amount` of locked `token` to the user.
    pub fn unlock(env: Env, user: Address, token: Address, amount: i128) -> Result<(), Error> {
        user.require_auth();
        get_config(&env)?;
        if is_paused(&env, &token) {
            return Err(Error::TokenPaused);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        let mut position = get_position(&env, &token, &user).ok_or(Error::AmountTooBig)?;
        if amount > position.total_locked()? {
            return Err(Error::AmountTooBig);
        }

        Self::accrue(&env, &token, &mut position)?;
        position.withdraw(amount)?;
        set_position(&env, &token, &user, &position);

        token::Client::new(&env, &token).transfer(&env.current_contract_address(), &user, &amount);
        events::emit_unlocked(&env, &token, &user, amount);
        Ok(())
    }

    /// Pay `amount` of accrued rewards, drawn from the user's positions in
    /// the order they were first opened.
    pub fn claim(env: Env, user: Address, amount: i128) -> Result<(), Error> {
        user.require_auth();
        Self::do_claim(&env, &user, amount)
    }

    /// Single entry point for token operations that used to ride on
    /// approve-and-call. The ledger serves `Lock` and `Claim`; `token` is
    /// ignored for `Claim`, which spans every position of the caller.
    pub fn execute(
        env: Env,
        caller: Address,
        token: Address,
        amount: i128,
        action: TokenAction,
    ) -> Result<(), Error> {
        caller.require_auth();
        match action {
            TokenAction::Lock => Self::do_lock(&env, &caller, &token, amount),
            TokenAction::Claim => Self::do_claim(&env, &caller, amount),
            TokenAction::Refund => Err(Error::UnsupportedAction),
        }
    }

    /// Register a bond paying `percent` basis points at `timestamp`.
    ///
    /// The timestamp must be a future UTC month start later than every bond
    /// already registered for `token`.
    pub fn add_tokens_payout_bonds(
        env: Env,
        caller: Address,
        token: Address,
        timestamp: u64,
        percent: u32,
    ) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        let mut bonds = get_bonds(&env, &token);
        let now = get_ledger_timestamp(&env);

        if timestamp <= now
            || !fp_math::is_valid_bps(percent)
            || bonds.contains_key(timestamp)
            || timestamp <= get_last_bond(&env, &token)
            || !calendar::is_month_start(timestamp)
        {
            return Err(Error::InvalidBondData);
        }

        bonds.set(timestamp, percent);
        set_bonds(&env, &token, &bonds);
        set_last_bond(&env, &token, timestamp);

        events::emit_bond_added(&env, &token, timestamp, percent);
        Ok(())
    }

    /// Change the percent of a bond that has not been reached yet.
    pub fn edit_tokens_payout_bonds(
        env: Env,
        caller: Address,
        token: Address,
        timestamp: u64,
        percent: u32,
    ) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        let mut bonds = get_bonds(&env, &token);
        Self::require_future_bond(&env, &bonds, timestamp)?;
        if !fp_math::is_valid_bps(percent) {
            return Err(Error::InvalidBondData);
        }

        bonds.set(timestamp, percent);
        set_bonds(&env, &token, &bonds);

        events::emit_bond_edited(&env, &token, timestamp, percent);
        Ok(())
    }

    /// Drop a bond that has not been reached yet.
    pub fn delete_tokens_payout_bonds(
        env: Env,
        caller: Address,
        token: Address,
        timestamp: u64,
    ) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        let mut bonds = get_bonds(&env, &token);
        Self::require_future_bond(&env, &bonds, timestamp)?;

        bonds.remove(timestamp);
        let last = bonds.keys().last().unwrap_or(0);
        set_bonds(&env, &token, &bonds);
        set_last_bond(&env, &token, last);

        events::emit_bond_deleted(&env, &token, timestamp);
        Ok(())
    }

    // View functions
    pub fn get_position(env: Env, token: Address, user: Address) -> Option<LockPosition> {
        get_position(&env, &token, &user)
    }

    /// Rewards earned on `token` as if catch-up ran now. Nothing is stored.
    pub fn user_earned(env: Env, token: Address, user: Address) -> Result<i128, Error> {
        let Some(mut position) = get_position(&env, &token, &user) else {
            return Ok(0);
        };
        let now = get_ledger_timestamp(&env);
        position.catch_up(&get_bonds(&env, &token), now)?;
        Ok(position.earned)
    }

    /// Claimable rewards across every position of `user` as if catch-up ran now.
    pub fn user_claimable(env: Env, user: Address) -> Result<i128, Error> {
        let now = get_ledger_timestamp(&env);
        let mut total: i128 = 0;
        for token in get_user_tokens(&env, &user).iter() {
            if let Some(mut position) = get_position(&env, &token, &user) {
                position.catch_up(&get_bonds(&env, &token), now)?;
                total = total
                    .checked_add(position.to_claim)
                    .ok_or(Error::ArithmeticOverflow)?;
            }
        }
        Ok(total)
    }

    pub fn get_bonds(env: Env, token: Address) -> Map<u64, u32> {
        get_bonds(&env, &token)
    }

    pub fn get_last_bond_timestamp(env: Env, token: Address) -> u64 {
        get_last_bond(&env, &token)
    }

    pub fn is_token_paused(env: Env, token: Address) -> bool {
        is_paused(&env, &token)
    }

    pub fn get_user_tokens(env: Env, user: Address) -> Vec<Address> {
        get_user_tokens(&env, &user)
    }

    pub fn get_config(env: Env) -> Result<VestingConfig, Error> {
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

    fn require_future_bond(env: &Env, bonds: &Map<u64, u32>, timestamp: u64) -> Result<(), Error> {
        if !bonds.contains_key(timestamp) || timestamp <= get_ledger_timestamp(env) {
            return Err(Error::InvalidBondData);
        }
        Ok(())
    }

    fn accrue(env: &Env, token: &Address, position: &mut LockPosition) -> Result<(), Error> {
        let now = get_ledger_timestamp(env);
        let accrual = position.catch_up(&get_bonds(env, token), now)?;
        if accrual.boundaries > 0 {
            log!(
                env,
                "catch-up: boundaries, reward",
                accrual.boundaries,
                accrual.reward
            );
        }
        Ok(())
    }

    fn do_lock(env: &Env, user: &Address, token: &Address, amount: i128) -> Result<(), Error> {
        get_config(env)?;
        if is_paused(env, token) {
            return Err(Error::TokenPaused);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let now = get_ledger_timestamp(env);
        let bucket = calendar::next_month_start(now).ok_or(Error::ArithmeticOverflow)?;
        let mut position =
            get_position(env, token, user).unwrap_or_else(|| LockPosition::empty(env));
        Self::accrue(env, token, &mut position)?;
        position.deposit(amount, bucket)?;
        set_position(env, token, user, &position);
        track_user_token(env, user, token);

        token::Client::new(env, token).transfer(user, &env.current_contract_address(), &amount);
        events::emit_locked(env, token, user, amount);
        Ok(())
    }

    fn do_claim(env: &Env, user: &Address, amount: i128) -> Result<(), Error> {
        let config = get_config(env)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let now = get_ledger_timestamp(env);
        let tokens = get_user_tokens(env, user);
        let mut positions = Vec::new(env);
        let mut claimable: i128 = 0;
        for token in tokens.iter() {
            if let Some(mut position) = get_position(env, &token, user) {
                position.catch_up(&get_bonds(env, &token), now)?;
                claimable = claimable
                    .checked_add(position.to_claim)
                    .ok_or(Error::ArithmeticOverflow)?;
                positions.push_back((token, position));
            }
        }
        if amount > claimable {
            return Err(Error::InsufficientClaimable);
        }

        let mut remaining = amount;
        for (token, mut position) in positions.iter() {
            remaining -= position.take_claimable(remaining);
            set_position(env, &token, user, &position);
        }

        token::Client::new(env, &config.reward_token).transfer(
            &env.current_contract_address(),
            user,
            &amount,
        );
        events::emit_claimed(env, user, amount);
        Ok(())
    }
}
