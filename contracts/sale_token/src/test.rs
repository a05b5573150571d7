#![allow(clippy::unwrap_used)]

use soroban_sdk::{testutils::Address as _, token, Address, Env, String};

use crate::{Error, SaleToken, SaleTokenClient};

const DECIMALS: u32 = 7;
const SUPPLY: i128 = 1_000_000 * 10_000_000;

fn setup(env: &Env) -> (SaleTokenClient<'_>, Address, Address) {
    env.mock_all_auths();
    let contract_id = env.register_contract(None, SaleToken);
    let client = SaleTokenClient::new(env, &contract_id);
    let admin = Address::generate(env);
    let distributor = Address::generate(env);

    client.initialize(
        &admin,
        &DECIMALS,
        &String::from_str(env, "Sale Token"),
        &String::from_str(env, "SALE"),
        &distributor,
        &SUPPLY,
    );
    (client, admin, distributor)
}

#[test]
fn test_initialize_mints_supply_to_distributor() {
    let env = Env::default();
    let (client, _, distributor) = setup(&env);

    assert_eq!(client.total_supply(), SUPPLY);
    assert_eq!(client.balance(&distributor), SUPPLY);
    assert_eq!(client.decimals(), DECIMALS);
    assert_eq!(client.symbol(), String::from_str(&env, "SALE"));
}

#[test]
fn test_double_initialize_fails() {
    let env = Env::default();
    let (client, admin, distributor) = setup(&env);

    let result = client.try_initialize(
        &admin,
        &DECIMALS,
        &String::from_str(&env, "Again"),
        &String::from_str(&env, "AG"),
        &distributor,
        &1,
    );
    assert_eq!(result, Err(Ok(Error::AlreadyInitialized)));
}

#[test]
fn test_transfer_and_burn_move_supply() {
    let env = Env::default();
    let (client, _, distributor) = setup(&env);
    let user = Address::generate(&env);

    client.transfer(&distributor, &user, &500);
    assert_eq!(client.balance(&user), 500);

    client.burn(&user, &200);
    assert_eq!(client.balance(&user), 300);
    assert_eq!(client.total_supply(), SUPPLY - 200);
}

#[test]
fn test_transfer_more_than_balance_fails() {
    let env = Env::default();
    let (client, _, _) = setup(&env);
    let poor = Address::generate(&env);

    let result = client.try_transfer(&poor, &Address::generate(&env), &1);
    assert_eq!(result, Err(Ok(Error::InsufficientBalance)));
}

#[test]
fn test_allowance_flow() {
    let env = Env::default();
    let (client, _, distributor) = setup(&env);
    let spender = Address::generate(&env);
    let receiver = Address::generate(&env);

    client.approve(&distributor, &spender, &1_000, &100);
    assert_eq!(client.allowance(&distributor, &spender), 1_000);

    client.transfer_from(&spender, &distributor, &receiver, &600);
    assert_eq!(client.allowance(&distributor, &spender), 400);
    assert_eq!(client.balance(&receiver), 600);

    client.burn_from(&spender, &distributor, &400);
    assert_eq!(client.allowance(&distributor, &spender), 0);
    assert_eq!(client.total_supply(), SUPPLY - 400);

    let result = client.try_transfer_from(&spender, &distributor, &receiver, &1);
    assert_eq!(result, Err(Ok(Error::InsufficientAllowance)));
}

#[test]
fn test_works_through_standard_token_client() {
    let env = Env::default();
    let (client, _, distributor) = setup(&env);
    let user = Address::generate(&env);

    let standard = token::Client::new(&env, &client.address);
    standard.transfer(&distributor, &user, &42);
    assert_eq!(standard.balance(&user), 42);
    assert_eq!(standard.decimals(), DECIMALS);
}

#[test]
fn test_admin_mint() {
    let env = Env::default();
    let (client, _, _) = setup(&env);
    let user = Address::generate(&env);

    client.mint(&user, &10);
    assert_eq!(client.balance(&user), 10);
    assert_eq!(client.total_supply(), SUPPLY + 10);
    assert_eq!(client.try_mint(&user, &0), Err(Ok(Error::InvalidAmount)));
}

#[test]
fn test_mint_without_admin_signature_fails() {
    let env = Env::default();
    let (client, _, _) = setup(&env);
    let user = Address::generate(&env);

    let result = client.mock_auths(&[]).try_mint(&user, &10);
    assert!(result.is_err());
    assert_eq!(client.balance(&user), 0);
    assert_eq!(client.total_supply(), SUPPLY);
}

#[test]
fn test_error_codes_are_contiguous() {
    assert_eq!(Error::AlreadyInitialized as u32, 1);
    assert_eq!(Error::InvalidAmount as u32, 3);
    assert_eq!(Error::ArithmeticOverflow as u32, 7);
}
