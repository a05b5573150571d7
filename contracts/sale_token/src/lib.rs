#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, contractmeta, contracttype, symbol_short, Address,
    Env, String,
};

contractmeta!(
    key = "Description",
    val = "Sale token issued through the sale registry and locked in the vesting ledger"
);

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidAmount = 3,
    InsufficientBalance = 4,
    InsufficientAllowance = 5,
    InvalidExpiration = 6,
    ArithmeticOverflow = 7,
}

#[derive(Clone)]
#[contracttype]
pub struct TokenMetadata {
    pub decimal: u32,
    pub name: String,
    pub symbol: String,
}

#[derive(Clone)]
#[contracttype]
pub struct AllowanceKey {
    pub from: Address,
    pub spender: Address,
}

#[derive(Clone)]
#[contracttype]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[contracttype]
pub enum DataKey {
    Admin,
    Metadata,
    TotalSupply,
    Balance(Address),
    Allowance(AllowanceKey),
}

#[contract]
pub struct SaleToken;

#[contractimpl]
impl SaleToken {
    /// Sets metadata and mints the whole initial supply to `distributor`.
    pub fn initialize(
        env: Env,
        admin: Address,
        decimal: u32,
        name: String,
        symbol: String,
        distributor: Address,
        initial_supply: i128,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(Error::AlreadyInitialized);
        }
        if initial_supply < 0 {
            return Err(Error::InvalidAmount);
        }
        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(
            &DataKey::Metadata,
            &TokenMetadata {
                decimal,
                name,
                symbol,
            },
        );
        env.storage().instance().set(&DataKey::TotalSupply, &0i128);

        if initial_supply > 0 {
            Self::credit(&env, &distributor, initial_supply)?;
            Self::adjust_supply(&env, initial_supply)?;
            env.events()
                .publish((symbol_short!("mint"), admin, distributor), initial_supply);
        }
        Ok(())
    }

    pub fn mint(env: Env, to: Address, amount: i128) -> Result<(), Error> {
        let admin = Self::read_admin(&env)?;
        admin.require_auth();
        Self::check_amount(amount)?;

        Self::credit(&env, &to, amount)?;
        Self::adjust_supply(&env, amount)?;
        env.events().publish((symbol_short!("mint"), admin, to), amount);
        Ok(())
    }

    pub fn total_supply(env: Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::TotalSupply)
            .unwrap_or(0)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        let allowance = Self::read_allowance(&env, &from, &spender);
        if allowance.expiration_ledger < env.ledger().sequence() {
            0
        } else {
            allowance.amount
        }
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), Error> {
        from.require_auth();
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }
        if amount > 0 && expiration_ledger < env.ledger().sequence() {
            return Err(Error::InvalidExpiration);
        }

        let key = DataKey::Allowance(AllowanceKey {
            from: from.clone(),
            spender: spender.clone(),
        });
        env.storage().temporary().set(
            &key,
            &AllowanceValue {
                amount,
                expiration_ledger,
            },
        );
        env.events().publish(
            (symbol_short!("approve"), from, spender),
            (amount, expiration_ledger),
        );
        Ok(())
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        Self::read_balance(&env, &id)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        Self::check_amount(amount)?;

        Self::debit(&env, &from, amount)?;
        Self::credit(&env, &to, amount)?;
        env.events()
            .publish((symbol_short!("transfer"), from, to), amount);
        Ok(())
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        spender.require_auth();
        Self::check_amount(amount)?;

        Self::spend_allowance(&env, &from, &spender, amount)?;
        Self::debit(&env, &from, amount)?;
        Self::credit(&env, &to, amount)?;
        env.events()
            .publish((symbol_short!("transfer"), from, to), amount);
        Ok(())
    }

    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        Self::check_amount(amount)?;

        Self::debit(&env, &from, amount)?;
        Self::adjust_supply(&env, -amount)?;
        env.events().publish((symbol_short!("burn"), from), amount);
        Ok(())
    }

    pub fn burn_from(env: Env, spender: Address, from: Address, amount: i128) -> Result<(), Error> {
        spender.require_auth();
        Self::check_amount(amount)?;

        Self::spend_allowance(&env, &from, &spender, amount)?;
        Self::debit(&env, &from, amount)?;
        Self::adjust_supply(&env, -amount)?;
        env.events().publish((symbol_short!("burn"), from), amount);
        Ok(())
    }

    pub fn decimals(env: Env) -> u32 {
        Self::read_metadata(&env).map(|m| m.decimal).unwrap_or(0)
    }

    pub fn name(env: Env) -> String {
        Self::read_metadata(&env)
            .map(|m| m.name)
            .unwrap_or_else(|| String::from_str(&env, ""))
    }

    pub fn symbol(env: Env) -> String {
        Self::read_metadata(&env)
            .map(|m| m.symbol)
            .unwrap_or_else(|| String::from_str(&env, ""))
    }

    // ------------------------------------------------------------------
    // Internal helpers
    // ------------------------------------------------------------------

    fn read_admin(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)
    }

    fn read_metadata(env: &Env) -> Option<TokenMetadata> {
        env.storage().instance().get(&DataKey::Metadata)
    }

    fn check_amount(amount: i128) -> Result<(), Error> {
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        Ok(())
    }

    fn read_balance(env: &Env, id: &Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::Balance(id.clone()))
            .unwrap_or(0)
    }

    fn credit(env: &Env, id: &Address, amount: i128) -> Result<(), Error> {
        let balance = Self::read_balance(env, id)
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        env.storage()
            .persistent()
            .set(&DataKey::Balance(id.clone()), &balance);
        Ok(())
    }

    fn debit(env: &Env, id: &Address, amount: i128) -> Result<(), Error> {
        let balance = Self::read_balance(env, id);
        if balance < amount {
            return Err(Error::InsufficientBalance);
        }
        env.storage()
            .persistent()
            .set(&DataKey::Balance(id.clone()), &(balance - amount));
        Ok(())
    }

    fn adjust_supply(env: &Env, delta: i128) -> Result<(), Error> {
        let supply = Self::total_supply(env.clone())
            .checked_add(delta)
            .ok_or(Error::ArithmeticOverflow)?;
        env.storage().instance().set(&DataKey::TotalSupply, &supply);
        Ok(())
    }

    fn read_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
        env.storage()
            .temporary()
            .get(&DataKey::Allowance(AllowanceKey {
                from: from.clone(),
                spender: spender.clone(),
            }))
            .unwrap_or(AllowanceValue {
                amount: 0,
                expiration_ledger: 0,
            })
    }

    fn spend_allowance(
        env: &Env,
        from: &Address,
        spender: &Address,
        amount: i128,
    ) -> Result<(), Error> {
        let mut allowance = Self::read_allowance(env, from, spender);
        if allowance.expiration_ledger < env.ledger().sequence() || allowance.amount < amount {
            return Err(Error::InsufficientAllowance);
        }
        allowance.amount -= amount;
        env.storage().temporary().set(
            &DataKey::Allowance(AllowanceKey {
                from: from.clone(),
                spender: spender.clone(),
            }),
            &allowance,
        );
        Ok(())
    }
}

#[cfg(test)]
mod test;
