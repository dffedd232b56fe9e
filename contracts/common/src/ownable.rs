//! Single-owner authorization gate.
//!
//! One address, recorded in instance storage, may perform operator-only
//! actions. Ownership can be handed over by the current owner.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::CommonError;

// ── Storage Keys ─────────────────────────────────────────────────────────────

const OWNER: Symbol = symbol_short!("OWNER");

// ── Gate Trait ───────────────────────────────────────────────────────────────

/// Predicate deciding whether `caller` may perform operator-only actions.
///
/// Implementations only answer the question; the calling contract is
/// responsible for `caller.require_auth()` before consulting the gate.
pub trait AuthorizationGate {
    fn is_authorized(&self, caller: &Address) -> bool;
}

// ── Single-owner Gate ────────────────────────────────────────────────────────

/// Authorization gate backed by a single owner address in instance storage.
///
/// The owner can only be replaced by the current owner.
pub struct OwnerGate<'a> {
    env: &'a Env,
}

impl<'a> OwnerGate<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }

    /// Records the first owner. Fails if an owner is already set.
    pub fn init(&self, owner: &Address) -> Result<(), CommonError> {
        if self.env.storage().instance().has(&OWNER) {
            return Err(CommonError::AlreadyInitialized);
        }
        self.env.storage().instance().set(&OWNER, owner);
        Ok(())
    }

    /// Returns the current owner, if one has been recorded.
    pub fn owner(&self) -> Option<Address> {
        self.env.storage().instance().get(&OWNER)
    }

    /// Guard: errors unless `caller` is the current owner.
    pub fn require_owner(&self, caller: &Address) -> Result<(), CommonError> {
        let owner = self.owner().ok_or(CommonError::NotInitialized)?;
        if *caller != owner {
            return Err(CommonError::AccessDenied);
        }
        Ok(())
    }

    /// Hands ownership to `new_owner` and returns the previous owner.
    ///
    /// The contract's own address is rejected: it can never sign, so
    /// assigning it would lock every operator-only entry point for good.
    pub fn transfer_ownership(
        &self,
        caller: &Address,
        new_owner: &Address,
    ) -> Result<Address, CommonError> {
        self.require_owner(caller)?;
        if *new_owner == self.env.current_contract_address() {
            return Err(CommonError::InvalidInput);
        }
        self.env.storage().instance().set(&OWNER, new_owner);
        Ok(caller.clone())
    }
}

impl AuthorizationGate for OwnerGate<'_> {
    fn is_authorized(&self, caller: &Address) -> bool {
        self.require_owner(caller).is_ok()
    }
}
