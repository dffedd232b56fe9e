#![no_std]

pub mod events;
pub mod ledger;
pub mod rewards;
pub mod transfer;

use common::{CommonError, OwnerGate};
use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, Symbol};

pub use ledger::{Settlement, Stake};
use ledger::StakeLedger;
use transfer::{TokenTransfer, ValueTransfer};

// ── Storage key constants ────────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");
const TOKEN: Symbol = symbol_short!("TOKEN");

const INSTANCE_TTL_THRESHOLD: u32 = 5184000;
const INSTANCE_TTL_EXTEND_TO: u32 = 10368000;

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidAmount = 4,
    InvalidDuration = 5,
    AlreadyStaked = 6,
    NoStake = 7,
    StakingNotEnded = 8,
    AlreadyWithdrawn = 9,
    TransferFailed = 10,
    InvalidOwner = 11,
}

impl From<CommonError> for ContractError {
    fn from(err: CommonError) -> Self {
        match err {
            CommonError::NotInitialized => ContractError::NotInitialized,
            CommonError::AlreadyInitialized => ContractError::AlreadyInitialized,
            CommonError::AccessDenied => ContractError::Unauthorized,
            CommonError::InvalidInput => ContractError::InvalidOwner,
        }
    }
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct ScreenStakeContract;

#[contractimpl]
impl ScreenStakeContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the contract.
    ///
    /// * `owner` – operator allowed to open and settle stakes.
    /// * `token` – SAC address of the currency stakes are held in.
    pub fn initialize(env: Env, owner: Address, token: Address) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }

        OwnerGate::new(&env).init(&owner)?;
        env.storage().instance().set(&TOKEN, &token);
        env.storage().instance().set(&INITIALIZED, &true);
        Self::extend_instance_ttl(&env);

        events::publish_initialized(&env, owner, token);

        Ok(())
    }

    // ── Stake lifecycle ─────────────────────────────────────────────────────

    /// Open a stake for `user`, funded by the operator.
    ///
    /// * `amount`       – principal pulled from `caller`.
    /// * `duration`     – seconds until the stake may be settled.
    /// * `allowed_time` – screen-time allowance (seconds) for the period.
    ///
    /// Returns the new stake's ID.
    pub fn open_stake(
        env: Env,
        caller: Address,
        user: Address,
        amount: i128,
        duration: u64,
        allowed_time: u64,
    ) -> Result<u64, ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();

        let gate = OwnerGate::new(&env);
        let transfer = Self::token_transfer(&env)?;
        let id = StakeLedger::new(&env, &gate, &transfer).open_stake(
            &caller,
            &user,
            amount,
            duration,
            allowed_time,
        )?;

        Self::extend_instance_ttl(&env);
        Ok(id)
    }

    /// Reward `user` would receive for `screen_time` seconds of usage.
    ///
    /// Read-only; fails with `StakingNotEnded` until the stake matures.
    pub fn preview_reward(env: Env, user: Address, screen_time: u64) -> Result<i128, ContractError> {
        ledger::preview_reward(&env, &user, screen_time)
    }

    /// Settle `user`'s stake against the reported `screen_time` and pay the
    /// reward to `user`. Fails with `AlreadyWithdrawn` on duplicate calls.
    pub fn settle(
        env: Env,
        caller: Address,
        user: Address,
        screen_time: u64,
    ) -> Result<Settlement, ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();

        let gate = OwnerGate::new(&env);
        let transfer = Self::token_transfer(&env)?;
        let settlement =
            StakeLedger::new(&env, &gate, &transfer).settle(&caller, &user, screen_time)?;

        Self::extend_instance_ttl(&env);
        Ok(settlement)
    }

    // ── Administration ──────────────────────────────────────────────────────

    /// Hand the operator role to `new_owner`. Only the current owner can call this.
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();

        let previous = OwnerGate::new(&env).transfer_ownership(&caller, &new_owner)?;

        events::publish_ownership_transferred(&env, previous, new_owner);

        Ok(())
    }

    /// Send the contract's entire token balance to the owner.
    ///
    /// Stake records are not touched, so settlements funded from the swept
    /// balance fail with `TransferFailed` until the contract is refilled.
    pub fn sweep_balance(env: Env, caller: Address) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        OwnerGate::new(&env).require_owner(&caller)?;

        let transfer = Self::token_transfer(&env)?;
        let balance = transfer.balance();
        if balance <= 0 {
            // Nothing to sweep; return without reverting.
            return Ok(0);
        }
        transfer.send(&caller, balance)?;

        events::publish_swept(&env, caller, balance);

        Ok(balance)
    }

    /// Accept `amount` tokens from `from` without opening or changing any stake.
    pub fn receive_deposit(env: Env, from: Address, amount: i128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        from.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }
        Self::token_transfer(&env)?.collect(&from, amount)?;

        events::publish_received(&env, from, amount);

        Ok(())
    }

    // ── View functions ───────────────────────────────────────────────────────

    pub fn get_stake(env: Env, user: Address) -> Option<Stake> {
        ledger::load_stake(&env, &user)
    }

    /// True while `user` holds an unsettled stake.
    pub fn has_active_stake(env: Env, user: Address) -> bool {
        ledger::has_active_stake(&env, &user)
    }

    /// Token balance held by the contract.
    pub fn get_balance(env: Env) -> Result<i128, ContractError> {
        Ok(Self::token_transfer(&env)?.balance())
    }

    /// Penalty charged per whole hour of screen time over the allowance.
    pub fn penalty_rate(_env: Env) -> i128 {
        rewards::PENALTY_RATE
    }

    pub fn get_owner(env: Env) -> Result<Address, ContractError> {
        OwnerGate::new(&env)
            .owner()
            .ok_or(ContractError::NotInitialized)
    }

    pub fn get_token(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&TOKEN)
            .ok_or(ContractError::NotInitialized)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    /// Guard: revert if the contract is not yet initialized.
    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    fn token_transfer(env: &Env) -> Result<TokenTransfer<'_>, ContractError> {
        let token: Address = env
            .storage()
            .instance()
            .get(&TOKEN)
            .ok_or(ContractError::NotInitialized)?;
        Ok(TokenTransfer::new(env, token))
    }

    fn extend_instance_ttl(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod test_ownership;
