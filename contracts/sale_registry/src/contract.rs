use crate::errors::Error;
use crate::events;
use crate::interfaces::{ReferralLedgerClient, SupplyClient};
use crate::storage::*;
use crate::types::*;
use soroban_sdk::{contract, contractimpl, contractmeta, log, token, Address, Env};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Sale registry: time-boxed token sales with refund and claim windows"
);

#[contract]
pub struct SaleRegistry;

#[contractimpl]
impl SaleRegistry {
    /// Initialize the registry with its owner and the quote currency.
    pub fn initialize(env: Env, owner: Address, quote_token: Address) -> Result<(), Error> {
        if has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        set_config(
            &env,
            &SaleConfig {
                quote_token,
                referral_contract: None,
            },
        );
        set_owner(&env, &owner);
        Ok(())
    }

    /// Route referral fees on buy through `referral_contract` (or stop, with `None`).
    pub fn set_referral_contract(
        env: Env,
        caller: Address,
        referral_contract: Option<Address>,
    ) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;

        let mut config = get_config(&env)?;
        config.referral_contract = referral_contract.clone();
        set_config(&env, &config);

        events::emit_referral_contract_updated(&env, referral_contract);
        Ok(())
    }

    /// Register a sale for `token`. The registry must already hold `available` tokens.
    pub fn create_token(
        env: Env,
        caller: Address,
        token: Address,
        params: SaleParams,
    ) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        if has_sale(&env, &token) {
            return Err(Error::SaleAlreadyExists);
        }

        let now = get_ledger_timestamp(&env);
        let total_supply = SupplyClient::new(&env, &token).total_supply();
        Self::validate_new_sale(&params, now, total_supply)?;

        let sale = Sale {
            price: params.price,
            claim_timestamp: params.claim_timestamp,
            limit_timestamp: params.limit_timestamp,
            available: params.available,
            sold: params.sold,
            last_call_timestamp: params.last_call_timestamp,
            created_timestamp: now,
            closed_timestamp: 0,
            is_active: true,
            is_paused: params.is_paused,
            is_collected: false,
        };
        set_sale(&env, &token, &sale);

        events::emit_token_added(&env, &token, &sale);
        Ok(())
    }

    /// Update the caller-controlled fields of an existing sale.
    ///
    /// While the sale is active its claim, last-call and limit timestamps can
    /// only move earlier. Once inactive they can move freely within their
    /// ordering, but an extended limit must still lie in the future.
    /// `is_collected` never goes back to false, and collecting an active sale
    /// deactivates it the same way an exhausting `buy` does.
    pub fn update_token(
        env: Env,
        caller: Address,
        token: Address,
        params: SaleParams,
    ) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        let mut sale = get_sale(&env, &token).ok_or(Error::SaleNotFound)?;

        let now = get_ledger_timestamp(&env);
        Self::validate_update(&sale, &params, now)?;

        sale.price = params.price;
        sale.claim_timestamp = params.claim_timestamp;
        sale.limit_timestamp = params.limit_timestamp;
        sale.available = params.available;
        sale.sold = params.sold;
        sale.last_call_timestamp = params.last_call_timestamp;
        sale.is_paused = params.is_paused;
        if params.is_collected && !sale.is_collected {
            sale.is_collected = true;
            if sale.is_active {
                sale.is_active = false;
                sale.closed_timestamp = now;
            }
        }
        set_sale(&env, &token, &sale);

        events::emit_token_updated(&env, &token, &sale);
        Ok(())
    }

    /// Buy sale tokens with `quote_amount` of the quote currency.
    ///
    /// Returns `Ok(false)` without moving funds when the sale has expired,
    /// the amount buys less than one whole token, or supply is short. Each
    /// of those still publishes a `BUY` event with `success == false`.
    pub fn buy(env: Env, buyer: Address, token: Address, quote_amount: i128) -> Result<bool, Error> {
        buyer.require_auth();
        Self::purchase(&env, &buyer, &token, quote_amount, true)
    }

    /// Owner-only distribution: same accounting as `buy`, no quote collected.
    pub fn admin_buy(
        env: Env,
        caller: Address,
        beneficiary: Address,
        token: Address,
        quote_amount: i128,
    ) -> Result<bool, Error> {
        Self::require_owner(&env, &caller)?;
        Self::purchase(&env, &beneficiary, &token, quote_amount, false)
    }

    /// Close a sale early, opening a refund window of `CLOSE_GRACE_PERIOD`.
    pub fn close_token(env: Env, caller: Address, token: Address) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        let mut sale = get_sale(&env, &token).ok_or(Error::SaleNotFound)?;

        if !sale.is_active {
            return Err(Error::SaleInactive);
        }
        if sale.sold == 0 {
            return Err(Error::TokensNotSold);
        }
        let now = get_ledger_timestamp(&env);
        if now >= sale.claim_timestamp {
            return Err(Error::ClaimPeriodStarted);
        }

        Self::close(&env, &token, &mut sale, now);
        Ok(())
    }

    /// Erase a sale nobody has bought from.
    pub fn delete_token(env: Env, caller: Address, token: Address) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        let sale = get_sale(&env, &token).ok_or(Error::SaleNotFound)?;

        if sale.sold > 0 {
            return Err(Error::TokensAlreadySold);
        }

        remove_sale(&env, &token);
        events::emit_token_deleted(&env, &token);
        Ok(())
    }

    /// Burn sale tokens and get `token_amount * price` back while the sale
    /// is closed and the refund window is open.
    pub fn refund(env: Env, caller: Address, token: Address, token_amount: i128) -> Result<i128, Error> {
        caller.require_auth();
        Self::redeem_refund(&env, &caller, &token, token_amount)
    }

    /// Burn sale tokens for `token_amount * price` once the claim window opens.
    pub fn claim(env: Env, caller: Address, token: Address, token_amount: i128) -> Result<i128, Error> {
        caller.require_auth();
        Self::redeem_claim(&env, &caller, &token, token_amount)
    }

    /// Single entry point for token operations that used to ride on
    /// approve-and-call. The registry serves `Claim` and `Refund`.
    pub fn execute(
        env: Env,
        caller: Address,
        token: Address,
        amount: i128,
        action: TokenAction,
    ) -> Result<i128, Error> {
        caller.require_auth();
        match action {
            TokenAction::Claim => Self::redeem_claim(&env, &caller, &token, amount),
            TokenAction::Refund => Self::redeem_refund(&env, &caller, &token, amount),
            TokenAction::Lock => Err(Error::UnsupportedAction),
        }
    }

    /// Sweep the registry's quote currency balance to the owner.
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, Error> {
        let owner = Self::require_owner(&env, &caller)?;
        let config = get_config(&env)?;
        Ok(Self::sweep(&env, &config.quote_token, &owner))
    }

    /// Sweep the registry's whole balance of an arbitrary token to the owner.
    pub fn withdraw_token(env: Env, caller: Address, token: Address) -> Result<i128, Error> {
        let owner = Self::require_owner(&env, &caller)?;
        Ok(Self::sweep(&env, &token, &owner))
    }

    // View functions
    pub fn get_sale(env: Env, token: Address) -> Option<Sale> {
        get_sale(&env, &token)
    }

    pub fn get_config(env: Env) -> Result<SaleConfig, Error> {
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

    fn validate_new_sale(params: &SaleParams, now: u64, total_supply: i128) -> Result<(), Error> {
        let total = params
            .available
            .checked_add(params.sold)
            .ok_or(Error::InvalidTokenData)?;

        if params.price <= 0
            || params.claim_timestamp <= now
            || params.available <= 0
            || params.sold < 0
            || total != total_supply
            || params.last_call_timestamp < now
            || params.claim_timestamp < params.last_call_timestamp
            || params.limit_timestamp <= params.claim_timestamp
        {
            return Err(Error::InvalidTokenData);
        }
        Ok(())
    }

    fn validate_update(sale: &Sale, params: &SaleParams, now: u64) -> Result<(), Error> {
        let recorded_total = sale
            .available
            .checked_add(sale.sold)
            .ok_or(Error::ArithmeticOverflow)?;
        let total = params
            .available
            .checked_add(params.sold)
            .ok_or(Error::InvalidTokenData)?;
        let collected = sale.is_collected || params.is_collected;

        if params.price <= 0
            || params.available < 0
            || params.sold < 0
            || total != recorded_total
            || (params.available == 0 && !collected)
            || params.claim_timestamp < params.last_call_timestamp
            || params.limit_timestamp <= params.claim_timestamp
        {
            return Err(Error::InvalidTokenData);
        }

        if sale.is_active {
            let tightened = params.claim_timestamp <= sale.claim_timestamp
                && params.last_call_timestamp <= sale.last_call_timestamp
                && params.limit_timestamp <= sale.limit_timestamp;
            if !tightened || params.claim_timestamp <= now || params.last_call_timestamp < now {
                return Err(Error::InvalidTokenData);
            }
        } else if params.limit_timestamp > sale.limit_timestamp && params.limit_timestamp <= now {
            return Err(Error::InvalidTokenData);
        }
        Ok(())
    }

    fn purchase(
        env: &Env,
        buyer: &Address,
        token: &Address,
        quote_amount: i128,
        collect_funds: bool,
    ) -> Result<bool, Error> {
        if quote_amount < 0 {
            return Err(Error::InvalidAmount);
        }
        let config = get_config(env)?;
        let mut sale = get_sale(env, token).ok_or(Error::SaleNotFound)?;
        if !sale.is_active {
            return Err(Error::SaleInactive);
        }
        if sale.is_paused {
            return Err(Error::SalePaused);
        }

        let now = get_ledger_timestamp(env);
        if now > sale.last_call_timestamp {
            log!(env, "last call passed, closing sale", token.clone());
            Self::close(env, token, &mut sale, now);
            events::emit_buy(env, token, buyer, false, 0, 0, 0);
            return Ok(false);
        }

        let token_amount = Self::whole_token_amount(env, token, sale.price, quote_amount)?;
        if token_amount == 0 || token_amount > sale.available {
            log!(env, "buy rejected: tokens wanted, available", token_amount, sale.available);
            events::emit_buy(env, token, buyer, false, 0, 0, 0);
            return Ok(false);
        }
        let cost = token_amount
            .checked_mul(sale.price)
            .ok_or(Error::ArithmeticOverflow)?;

        sale.available -= token_amount;
        sale.sold = sale
            .sold
            .checked_add(token_amount)
            .ok_or(Error::ArithmeticOverflow)?;
        let collected = sale.available == 0;
        if collected {
            sale.is_collected = true;
            sale.is_active = false;
            sale.closed_timestamp = now;
        }
        set_sale(env, token, &sale);

        let registry = env.current_contract_address();
        if collect_funds {
            token::Client::new(env, &config.quote_token).transfer(buyer, &registry, &cost);
        }
        token::Client::new(env, token).transfer(&registry, buyer, &token_amount);

        events::emit_buy(env, token, buyer, true, cost, token_amount, sale.price);
        if collect_funds {
            Self::route_referral_fee(env, &config, buyer, cost);
        }
        if collected {
            events::emit_token_collected(env, token, &sale);
        }
        Ok(true)
    }

    /// Tokens bought by `quote_amount`, truncated to whole tokens.
    fn whole_token_amount(
        env: &Env,
        token: &Address,
        price: i128,
        quote_amount: i128,
    ) -> Result<i128, Error> {
        let decimals = token::Client::new(env, token).decimals();
        let unit = fp_math::unit_scale(decimals).ok_or(Error::ArithmeticOverflow)?;
        let raw = quote_amount
            .checked_div(price)
            .ok_or(Error::ArithmeticOverflow)?;
        fp_math::floor_to_unit(raw, unit).ok_or(Error::ArithmeticOverflow)
    }

    fn route_referral_fee(env: &Env, config: &SaleConfig, buyer: &Address, gross: i128) {
        let Some(referral_contract) = config.referral_contract.as_ref() else {
            return;
        };
        let referrals = ReferralLedgerClient::new(env, referral_contract);
        if referrals.calculate_referral_father_fee(&gross, buyer) > 0 {
            referrals.add_referral_father_fee(&env.current_contract_address(), buyer, &gross);
        }
    }

    fn close(env: &Env, token: &Address, sale: &mut Sale, now: u64) {
        sale.is_active = false;
        sale.closed_timestamp = now;
        sale.limit_timestamp = now + CLOSE_GRACE_PERIOD;
        set_sale(env, token, sale);
        events::emit_token_closed(env, token, sale);
    }

    fn redeem_refund(
        env: &Env,
        caller: &Address,
        token: &Address,
        token_amount: i128,
    ) -> Result<i128, Error> {
        let mut sale = get_sale(env, token).ok_or(Error::SaleNotFound)?;
        let now = get_ledger_timestamp(env);
        if sale.is_active || now >= sale.limit_timestamp {
            return Err(Error::TokensNotAvailable);
        }
        if token_amount <= 0 || token_amount > sale.sold {
            return Err(Error::InvalidAmount);
        }
        let quote_amount = token_amount
            .checked_mul(sale.price)
            .ok_or(Error::ArithmeticOverflow)?;

        sale.available = sale
            .available
            .checked_add(token_amount)
            .ok_or(Error::ArithmeticOverflow)?;
        sale.sold -= token_amount;
        set_sale(env, token, &sale);

        Self::burn_and_pay(env, caller, token, token_amount, quote_amount)?;
        events::emit_refund(env, token, caller, token_amount, quote_amount, sale.price);
        Ok(quote_amount)
    }

    fn redeem_claim(
        env: &Env,
        caller: &Address,
        token: &Address,
        token_amount: i128,
    ) -> Result<i128, Error> {
        let sale = get_sale(env, token).ok_or(Error::SaleNotFound)?;
        let now = get_ledger_timestamp(env);
        if now < sale.claim_timestamp || now >= sale.limit_timestamp || sale.sold == 0 {
            return Err(Error::TokensNotAvailable);
        }
        if token_amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        let quote_amount = token_amount
            .checked_mul(sale.price)
            .ok_or(Error::ArithmeticOverflow)?;

        Self::burn_and_pay(env, caller, token, token_amount, quote_amount)?;
        events::emit_claim(env, token, caller, token_amount, quote_amount, sale.price);
        Ok(quote_amount)
    }

    fn burn_and_pay(
        env: &Env,
        caller: &Address,
        token: &Address,
        token_amount: i128,
        quote_amount: i128,
    ) -> Result<(), Error> {
        let config = get_config(env)?;
        token::Client::new(env, token).burn(caller, &token_amount);
        token::Client::new(env, &config.quote_token).transfer(
            &env.current_contract_address(),
            caller,
            &quote_amount,
        );
        Ok(())
    }

    fn sweep(env: &Env, token: &Address, to: &Address) -> i128 {
        let client = token::Client::new(env, token);
        let balance = client.balance(&env.current_contract_address());
        if balance > 0 {
            client.transfer(&env.current_contract_address(), to, &balance);
            events::emit_payout(env, token, to, balance);
        }
        balance
    }
}
