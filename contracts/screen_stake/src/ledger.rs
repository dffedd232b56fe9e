use common::AuthorizationGate;
use soroban_sdk::{contracttype, log, symbol_short, Address, Env, Symbol};

use crate::{events, rewards, transfer::ValueTransfer, ContractError};

// ── Storage keys ────────────────────────────────────────────────────────────

// Per-user persistent storage uses tuple keys:  (prefix, user_address)
const USER_STAKE: Symbol = symbol_short!("STK");
const STAKE_CTR: Symbol = symbol_short!("STK_CTR");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

// ── Types ───────────────────────────────────────────────────────────────────

/// A user's stake, opened by the operator and settled exactly once.
///
/// `amount` is never cleared: `withdrawn` is what marks the stake as spent,
/// and a non-zero `amount` keeps the key from being staked again.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Stake {
    /// 1-based identifier, unique across all users.
    pub id: u64,
    /// Principal deposited, in the token's smallest unit.
    pub amount: i128,
    pub start_time: u64,
    /// Earliest ledger timestamp at which the stake may be settled.
    pub end_time: u64,
    /// Screen time (seconds) the user may accumulate without penalty.
    pub allowed_time: u64,
    pub withdrawn: bool,
}

impl Stake {
    pub fn is_active(&self) -> bool {
        self.amount > 0 && !self.withdrawn
    }
}

/// Outcome of a settlement. `reward + penalty` always equals the principal.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settlement {
    pub reward: i128,
    pub penalty: i128,
}

// ── Storage helpers ─────────────────────────────────────────────────────────

fn stake_key(user: &Address) -> (Symbol, Address) {
    (USER_STAKE, user.clone())
}

fn extend_ttl(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Read the stake recorded for `user` without touching its TTL.
fn peek_stake(env: &Env, user: &Address) -> Option<Stake> {
    env.storage().persistent().get(&stake_key(user))
}

/// Retrieve the stake recorded for `user`, if any, extending its TTL.
pub fn load_stake(env: &Env, user: &Address) -> Option<Stake> {
    let stake = peek_stake(env, user);
    if stake.is_some() {
        extend_ttl(env, &stake_key(user));
    }
    stake
}

fn store_stake(env: &Env, user: &Address, stake: &Stake) {
    let key = stake_key(user);
    env.storage().persistent().set(&key, stake);
    extend_ttl(env, &key);
}

/// Allocate and return the next stake ID (1-based, monotonically increasing).
fn next_stake_id(env: &Env) -> u64 {
    let current: u64 = env.storage().instance().get(&STAKE_CTR).unwrap_or(0u64);
    let next = current.saturating_add(1);
    env.storage().instance().set(&STAKE_CTR, &next);
    next
}

/// Check that `stake` exists and its staking period is over.
fn matured_stake(env: &Env, stake: Option<Stake>) -> Result<Stake, ContractError> {
    let stake = stake
        .filter(|s| s.amount > 0)
        .ok_or(ContractError::NoStake)?;
    if env.ledger().timestamp() < stake.end_time {
        return Err(ContractError::StakingNotEnded);
    }
    Ok(stake)
}

// ── Read-only queries ───────────────────────────────────────────────────────

/// Reward `user` would receive if settled now with `screen_time` seconds of usage.
///
/// Pure read: callable by anyone, before or after settlement, as long as the
/// staking period is over. Leaves the record's TTL alone.
pub fn preview_reward(env: &Env, user: &Address, screen_time: u64) -> Result<i128, ContractError> {
    let stake = matured_stake(env, peek_stake(env, user))?;
    Ok(rewards::compute_reward(
        stake.amount,
        stake.allowed_time,
        screen_time,
    ))
}

pub fn has_active_stake(env: &Env, user: &Address) -> bool {
    load_stake(env, user).is_some_and(|s| s.is_active())
}

// ── Ledger ──────────────────────────────────────────────────────────────────

/// The stake store plus its two state-changing operations.
///
/// Callers must have run `require_auth()` on `caller` already.
pub struct StakeLedger<'a, G: AuthorizationGate, T: ValueTransfer> {
    env: &'a Env,
    gate: &'a G,
    transfer: &'a T,
}

impl<'a, G: AuthorizationGate, T: ValueTransfer> StakeLedger<'a, G, T> {
    pub fn new(env: &'a Env, gate: &'a G, transfer: &'a T) -> Self {
        Self {
            env,
            gate,
            transfer,
        }
    }

    /// Open a stake of `amount` for `user`, funded by `caller`.
    ///
    /// The stake matures `duration` seconds from now. A key that has ever
    /// held a stake is refused, settled or not.
    pub fn open_stake(
        &self,
        caller: &Address,
        user: &Address,
        amount: i128,
        duration: u64,
        allowed_time: u64,
    ) -> Result<u64, ContractError> {
        self.authorize(caller)?;

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }
        if load_stake(self.env, user).is_some_and(|s| s.amount > 0) {
            return Err(ContractError::AlreadyStaked);
        }

        let start_time = self.env.ledger().timestamp();
        let end_time = match duration {
            0 => None,
            d => start_time.checked_add(d),
        }
        .ok_or(ContractError::InvalidDuration)?;

        // 1. Pull the deposit from the operator.
        self.transfer.collect(caller, amount)?;

        // 2. Record the stake.
        let id = next_stake_id(self.env);
        let stake = Stake {
            id,
            amount,
            start_time,
            end_time,
            allowed_time,
            withdrawn: false,
        };
        store_stake(self.env, user, &stake);

        log!(self.env, "stake opened", id, user.clone(), amount, end_time);
        events::publish_staked(self.env, user.clone(), amount, end_time);

        Ok(id)
    }

    /// Settle `user`'s matured stake against the reported `screen_time`
    /// and pay the reward out.
    ///
    /// If the payout is refused the record is restored and nothing changes;
    /// the operator may retry once the cause is fixed.
    pub fn settle(
        &self,
        caller: &Address,
        user: &Address,
        screen_time: u64,
    ) -> Result<Settlement, ContractError> {
        self.authorize(caller)?;

        let stake = matured_stake(self.env, load_stake(self.env, user))?;
        if stake.withdrawn {
            return Err(ContractError::AlreadyWithdrawn);
        }

        let (reward, penalty) = rewards::split(stake.amount, stake.allowed_time, screen_time);

        // Mark as withdrawn before transfer (checks-effects-interactions).
        let settled = Stake {
            withdrawn: true,
            ..stake.clone()
        };
        store_stake(self.env, user, &settled);

        if let Err(err) = self.transfer.send(user, reward) {
            store_stake(self.env, user, &stake);
            log!(self.env, "settlement rolled back", stake.id, user.clone(), reward);
            return Err(err);
        }

        log!(self.env, "stake settled", stake.id, reward, penalty);
        events::publish_withdrawn(self.env, user.clone(), reward, penalty);

        Ok(Settlement { reward, penalty })
    }

    fn authorize(&self, caller: &Address) -> Result<(), ContractError> {
        if !self.gate.is_authorized(caller) {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }
}
