extern crate std;

use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};

use crate::{ContractError, ScreenStakeContract, ScreenStakeContractClient};

// ── Test helpers ─────────────────────────────────────────────────────────────

fn setup() -> (Env, ScreenStakeContractClient<'static>, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let token = env.register_stellar_asset_contract_v2(Address::generate(&env));

    let contract_id = env.register(ScreenStakeContract, ());
    let client = ScreenStakeContractClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    client.initialize(&owner, &token.address());

    StellarAssetClient::new(&env, &token.address()).mint(&owner, &1_000_000i128);

    (env, client, owner, token.address())
}

// ── Ownership transfer ───────────────────────────────────────────────────────

#[test]
fn test_transfer_ownership_hands_over_operator_role() {
    let (env, client, owner, token) = setup();
    let successor = Address::generate(&env);
    let user = Address::generate(&env);

    client.transfer_ownership(&owner, &successor);
    assert_eq!(client.get_owner(), successor);

    // The old owner is locked out of operator-only calls.
    assert_eq!(
        client.try_open_stake(&owner, &user, &1_000, &60, &0),
        Err(Ok(ContractError::Unauthorized))
    );

    // The successor can operate once funded.
    StellarAssetClient::new(&env, &token).mint(&successor, &1_000);
    assert_eq!(client.open_stake(&successor, &user, &1_000, &60, &0), 1);
}

#[test]
fn test_transfer_ownership_by_non_owner_fails() {
    let (env, client, owner, _) = setup();
    let intruder = Address::generate(&env);

    let result = client.try_transfer_ownership(&intruder, &intruder);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    assert_eq!(client.get_owner(), owner);
}

#[test]
fn test_transfer_ownership_to_contract_fails() {
    let (_env, client, owner, _) = setup();

    let result = client.try_transfer_ownership(&owner, &client.address);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::InvalidOwner),
        _ => unreachable!("Expected InvalidOwner error"),
    }
    assert_eq!(client.get_owner(), owner);
}

#[test]
fn test_stakes_survive_ownership_transfer() {
    let (env, client, owner, token) = setup();
    let successor = Address::generate(&env);
    let user = Address::generate(&env);

    env.ledger().set_timestamp(0);
    client.open_stake(&owner, &user, &1_000, &60, &0);
    client.transfer_ownership(&owner, &successor);

    env.ledger().set_timestamp(60);
    assert_eq!(
        client.try_settle(&owner, &user, &0),
        Err(Ok(ContractError::Unauthorized))
    );
    client.settle(&successor, &user, &0);
    assert_eq!(TokenClient::new(&env, &token).balance(&user), 1_000);
}

// ── Balance sweep ────────────────────────────────────────────────────────────

#[test]
fn test_sweep_sends_whole_balance_to_owner() {
    let (env, client, owner, token) = setup();
    let user = Address::generate(&env);
    let donor = Address::generate(&env);
    StellarAssetClient::new(&env, &token).mint(&donor, &500);

    client.open_stake(&owner, &user, &1_000, &60, &0);
    client.receive_deposit(&donor, &500);
    assert_eq!(client.get_balance(), 1_500);

    assert_eq!(client.sweep_balance(&owner), 1_500);
    assert_eq!(client.get_balance(), 0);
    assert_eq!(TokenClient::new(&env, &token).balance(&owner), 1_000_000 - 1_000 + 1_500);

    // Stake records are untouched by a sweep.
    assert!(client.has_active_stake(&user));
}

#[test]
fn test_sweep_empty_balance_is_noop() {
    let (_env, client, owner, _) = setup();

    assert_eq!(client.sweep_balance(&owner), 0);
}

#[test]
fn test_sweep_by_non_owner_fails() {
    let (env, client, owner, _) = setup();
    let intruder = Address::generate(&env);
    let user = Address::generate(&env);
    client.open_stake(&owner, &user, &1_000, &60, &0);

    assert_eq!(
        client.try_sweep_balance(&intruder),
        Err(Ok(ContractError::Unauthorized))
    );
    assert_eq!(client.get_balance(), 1_000);
}

// ── Unsolicited deposits ─────────────────────────────────────────────────────

#[test]
fn test_receive_deposit_has_no_ledger_effect() {
    let (env, client, _owner, token) = setup();
    let donor = Address::generate(&env);
    StellarAssetClient::new(&env, &token).mint(&donor, &750);

    client.receive_deposit(&donor, &750);

    assert_eq!(client.get_balance(), 750);
    assert_eq!(client.get_stake(&donor), None);
    assert!(!client.has_active_stake(&donor));
}

#[test]
fn test_receive_deposit_rejects_non_positive_amount() {
    let (env, client, _owner, _) = setup();
    let donor = Address::generate(&env);

    assert_eq!(
        client.try_receive_deposit(&donor, &0),
        Err(Ok(ContractError::InvalidAmount))
    );
}
