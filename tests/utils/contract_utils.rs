//! Deployment helpers wiring every contract together
use crate::utils::constants::*;
use referral_ledger::{LevelPercent, ReferralLedger, ReferralLedgerClient};
use sale_registry::{SaleParams, SaleRegistry, SaleRegistryClient};
use sale_token::{SaleToken, SaleTokenClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, vec, Address, Env, String as SorobanString,
};
use vesting_ledger::{VestingLedger, VestingLedgerClient};

/// Full deployment: quote currency, sale token held by the registry, and the
/// three ledgers with the registry as the referral root caller.
pub struct Deployment {
    pub env: Env,
    pub owner: Address,
    pub helper: Address,
    pub registry: SaleRegistryClient<'static>,
    pub referrals: ReferralLedgerClient<'static>,
    pub vesting: VestingLedgerClient<'static>,
    pub quote: token::Client<'static>,
    pub quote_admin: token::StellarAssetClient<'static>,
    pub sale_token: SaleTokenClient<'static>,
}

impl Deployment {
    /// Deploy everything at `START` with all auths mocked.
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().with_mut(|li| li.timestamp = START);

        let owner = Address::generate(&env);
        let helper = Address::generate(&env);
        let quote_id = env
            .register_stellar_asset_contract_v2(Address::generate(&env))
            .address();

        let registry_id = env.register_contract(None, SaleRegistry);
        let registry = SaleRegistryClient::new(&env, &registry_id);
        registry.initialize(&owner, &quote_id);

        let referrals_id = env.register_contract(None, ReferralLedger);
        let referrals = ReferralLedgerClient::new(&env, &referrals_id);
        referrals.initialize(
            &owner,
            &quote_id,
            &vec![
                &env,
                LevelPercent {
                    level: 0,
                    percent: FATHER_BPS,
                },
                LevelPercent {
                    level: 1,
                    percent: 700,
                },
            ],
            &registry_id,
            &helper,
            &false,
        );
        registry.set_referral_contract(&owner, &Some(referrals_id.clone()));

        let vesting_id = env.register_contract(None, VestingLedger);
        let vesting = VestingLedgerClient::new(&env, &vesting_id);
        vesting.initialize(&owner, &quote_id);

        let sale_token_id = env.register_contract(None, SaleToken);
        let sale_token = SaleTokenClient::new(&env, &sale_token_id);
        sale_token.initialize(
            &owner,
            &7u32,
            &SorobanString::from_str(&env, "Sale Token"),
            &SorobanString::from_str(&env, "SALE"),
            &registry_id,
            &SUPPLY,
        );

        let quote_admin = token::StellarAssetClient::new(&env, &quote_id);
        quote_admin.mint(&referrals_id, &(1_000 * UNIT));
        quote_admin.mint(&vesting_id, &(1_000 * UNIT));

        Self {
            owner,
            helper,
            registry,
            referrals,
            vesting,
            quote: token::Client::new(&env, &quote_id),
            quote_admin,
            sale_token,
            env,
        }
    }

    /// Open the sale with the whole supply available.
    pub fn open_sale(&self) {
        self.registry.create_token(
            &self.owner,
            &self.sale_token.address,
            &SaleParams {
                price: PRICE,
                claim_timestamp: START + 10 * YEAR,
                limit_timestamp: START + 20 * YEAR,
                available: SUPPLY,
                sold: 0,
                last_call_timestamp: START + 5 * YEAR,
                is_paused: false,
                is_collected: false,
            },
        );
    }

    /// Fresh account holding `amount` of the quote currency.
    pub fn funded_user(&self, amount: i128) -> Address {
        let user = Address::generate(&self.env);
        self.quote_admin.mint(&user, &amount);
        user
    }

    pub fn generate_address(&self) -> Address {
        Address::generate(&self.env)
    }

    pub fn set_time(&self, timestamp: u64) {
        self.env.ledger().with_mut(|li| li.timestamp = timestamp);
    }

    /// Quote needed to buy `tokens` whole tokens.
    pub fn cost_of(tokens: i128) -> i128 {
        tokens * UNIT * PRICE
    }
}

impl Default for Deployment {
    fn default() -> Self {
        Self::new()
    }
}
