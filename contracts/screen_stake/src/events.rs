#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the contract is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub token: Address,
    pub timestamp: u64,
}

/// Fired when the operator opens a stake on behalf of a user.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub user: Address,
    pub amount: i128,
    pub end_time: u64,
    pub timestamp: u64,
}

/// Fired when a stake is settled and the reward paid out.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub user: Address,
    pub reward: i128,
    pub penalty: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferredEvent {
    pub previous_owner: Address,
    pub new_owner: Address,
    pub timestamp: u64,
}

/// Fired when the owner sweeps the contract's token balance.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SweptEvent {
    pub owner: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when value is deposited without touching any stake.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReceivedEvent {
    pub from: Address,
    pub amount: i128,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, owner: Address, token: Address) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            owner,
            token,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_staked(env: &Env, user: Address, amount: i128, end_time: u64) {
    env.events().publish(
        (symbol_short!("STAKED"), user.clone()),
        StakedEvent {
            user,
            amount,
            end_time,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_withdrawn(env: &Env, user: Address, reward: i128, penalty: i128) {
    env.events().publish(
        (symbol_short!("WITHDRAWN"), user.clone()),
        WithdrawnEvent {
            user,
            reward,
            penalty,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_ownership_transferred(env: &Env, previous_owner: Address, new_owner: Address) {
    env.events().publish(
        (symbol_short!("OWN_XFER"), new_owner.clone()),
        OwnershipTransferredEvent {
            previous_owner,
            new_owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_swept(env: &Env, owner: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("SWEPT"), owner.clone()),
        SweptEvent {
            owner,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_received(env: &Env, from: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("RECEIVED"), from.clone()),
        ReceivedEvent {
            from,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}
