//! Buy, referral payout, vesting and redemption across the deployed contracts
use crate::utils::constants::*;
use crate::utils::Deployment;
use crate::{assert_balance, assert_contract_error};
use referral_ledger::ReferralPair;
use soroban_sdk::vec;
use vesting_ledger::TokenAction as VestingAction;

#[test]
fn test_buy_pays_referral_father() {
    let d = Deployment::new();
    d.open_sale();

    let father = d.generate_address();
    let cost = Deployment::cost_of(100);
    let buyer = d.funded_user(cost);
    d.referrals.storage_referral_deposit(&father);
    d.referrals.add_new_child_referral_to_father(
        &buyer,
        &vec![
            &d.env,
            ReferralPair {
                father: father.clone(),
                child: buyer.clone(),
            },
        ],
    );

    assert!(d.registry.buy(&buyer, &d.sale_token.address, &cost));

    let fee = cost * FATHER_BPS as i128 / 10_000;
    assert_balance!(d.sale_token, &buyer, 100 * UNIT);
    assert_balance!(d.quote, &buyer, 0);
    assert_balance!(d.quote, &d.registry.address, cost);
    assert_balance!(d.quote, &father, fee, "father earns 5% of the purchase");
    assert_balance!(d.quote, &d.referrals.address, 1_000 * UNIT - fee);

    let sale = d.registry.get_sale(&d.sale_token.address).unwrap();
    assert_eq!(sale.sold, 100 * UNIT);
    assert_eq!(sale.available, SUPPLY - 100 * UNIT);
}

#[test]
fn test_buy_without_father_pays_no_fee() {
    let d = Deployment::new();
    d.open_sale();

    let cost = Deployment::cost_of(10);
    let buyer = d.funded_user(cost);
    assert!(d.registry.buy(&buyer, &d.sale_token.address, &cost));

    assert_balance!(d.quote, &d.referrals.address, 1_000 * UNIT);
    assert_eq!(d.referrals.get_father(&buyer), None);
}

#[test]
fn test_only_registry_triggers_referral_payout() {
    let d = Deployment::new();
    let father = d.generate_address();
    let child = d.generate_address();
    d.referrals.storage_referral_deposit(&father);
    d.referrals.add_new_child_referral_to_father(
        &d.helper,
        &vec![
            &d.env,
            ReferralPair {
                father,
                child: child.clone(),
            },
        ],
    );

    let stranger = d.generate_address();
    assert_contract_error!(
        d.referrals
            .try_add_referral_father_fee(&stranger, &child, &17_500),
        referral_ledger::Error::NotAuthorized
    );
    assert_eq!(d.referrals.get_root_caller(), d.registry.address);
}

#[test]
fn test_bought_tokens_vest_and_pay_rewards() {
    let d = Deployment::new();
    d.open_sale();

    let cost = Deployment::cost_of(100);
    let buyer = d.funded_user(cost);
    d.registry.buy(&buyer, &d.sale_token.address, &cost);

    d.vesting
        .add_tokens_payout_bonds(&d.owner, &d.sale_token.address, &FEB_2025, &350);
    d.vesting.execute(
        &buyer,
        &d.sale_token.address,
        &(100 * UNIT),
        &VestingAction::Lock,
    );
    assert_balance!(d.sale_token, &buyer, 0);
    assert_balance!(d.sale_token, &d.vesting.address, 100 * UNIT);

    d.set_time(FEB_2025 + 3 * DAY);
    let reward = 100 * UNIT * 350 / 10_000;
    assert_eq!(d.vesting.user_earned(&d.sale_token.address, &buyer), reward);

    d.vesting.claim(&buyer, &reward);
    assert_balance!(d.quote, &buyer, reward);
    assert_contract_error!(
        d.vesting.try_claim(&buyer, &1),
        vesting_ledger::Error::InsufficientClaimable
    );

    d.vesting.unlock(&buyer, &d.sale_token.address, &(100 * UNIT));
    assert_balance!(d.sale_token, &buyer, 100 * UNIT);
    let position = d
        .vesting
        .get_position(&d.sale_token.address, &buyer)
        .unwrap();
    assert_eq!(position.earned, reward);
    assert_eq!(position.init_time_create, 0);
}

#[test]
fn test_unlocked_tokens_redeem_in_claim_window() {
    let d = Deployment::new();
    d.open_sale();

    let cost = Deployment::cost_of(20);
    let buyer = d.funded_user(cost);
    d.registry.buy(&buyer, &d.sale_token.address, &cost);
    d.vesting.lock(&buyer, &d.sale_token.address, &(20 * UNIT));

    d.set_time(START + 10 * YEAR);
    d.vesting.unlock(&buyer, &d.sale_token.address, &(20 * UNIT));
    let paid = d.registry.execute(
        &buyer,
        &d.sale_token.address,
        &(20 * UNIT),
        &sale_registry::TokenAction::Claim,
    );

    assert_eq!(paid, cost);
    assert_balance!(d.quote, &buyer, cost);
    assert_balance!(d.sale_token, &buyer, 0);
    assert_eq!(d.sale_token.total_supply(), SUPPLY - 20 * UNIT);
}

#[test]
fn test_refund_after_close() {
    let d = Deployment::new();
    d.open_sale();

    let cost = Deployment::cost_of(10);
    let buyer = d.funded_user(cost);
    d.registry.buy(&buyer, &d.sale_token.address, &cost);

    d.registry.close_token(&d.owner, &d.sale_token.address);
    let refunded = d.registry.refund(&buyer, &d.sale_token.address, &(4 * UNIT));

    assert_eq!(refunded, Deployment::cost_of(4));
    assert_balance!(d.quote, &buyer, Deployment::cost_of(4));
    assert_balance!(d.sale_token, &buyer, 6 * UNIT);
    let sale = d.registry.get_sale(&d.sale_token.address).unwrap();
    assert_eq!(sale.sold, 6 * UNIT);
}

#[test]
fn test_paused_vesting_blocks_lock_but_not_sale() {
    let d = Deployment::new();
    d.open_sale();
    d.vesting
        .set_token_paused(&d.owner, &d.sale_token.address, &true);

    let cost = Deployment::cost_of(1);
    let buyer = d.funded_user(cost);
    assert!(d.registry.buy(&buyer, &d.sale_token.address, &cost));
    assert_contract_error!(
        d.vesting.try_lock(&buyer, &d.sale_token.address, &UNIT),
        vesting_ledger::Error::TokenPaused
    );
}

#[test]
fn test_buy_requires_buyer_signature() {
    let d = Deployment::new();
    d.open_sale();
    let cost = Deployment::cost_of(1);
    let buyer = d.funded_user(cost);

    // No authorization entries: the buyer never signed.
    let result = d
        .registry
        .mock_auths(&[])
        .try_buy(&buyer, &d.sale_token.address, &cost);
    assert!(result.is_err());
    assert_balance!(d.quote, &buyer, cost);
}
