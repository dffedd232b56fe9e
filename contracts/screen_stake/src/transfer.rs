use soroban_sdk::{token, Address, Env};

use crate::ContractError;

/// Moves value in and out of the contract.
///
/// Both directions report failure as `TransferFailed` instead of trapping,
/// so the ledger decides what a rejected movement means for its state.
pub trait ValueTransfer {
    /// Pull `amount` from `from` into the contract.
    fn collect(&self, from: &Address, amount: i128) -> Result<(), ContractError>;

    /// Pay `amount` from the contract to `recipient`.
    fn send(&self, recipient: &Address, amount: i128) -> Result<(), ContractError>;
}

/// [`ValueTransfer`] over a Stellar token contract (typically the native SAC).
pub struct TokenTransfer<'a> {
    env: &'a Env,
    token: Address,
}

impl<'a> TokenTransfer<'a> {
    pub fn new(env: &'a Env, token: Address) -> Self {
        Self { env, token }
    }

    /// Token balance currently held by the contract.
    pub fn balance(&self) -> i128 {
        token::Client::new(self.env, &self.token).balance(&self.env.current_contract_address())
    }

    fn move_funds(&self, from: &Address, to: &Address, amount: i128) -> Result<(), ContractError> {
        match token::Client::new(self.env, &self.token).try_transfer(from, to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(ContractError::TransferFailed),
        }
    }
}

impl ValueTransfer for TokenTransfer<'_> {
    fn collect(&self, from: &Address, amount: i128) -> Result<(), ContractError> {
        self.move_funds(from, &self.env.current_contract_address(), amount)
    }

    fn send(&self, recipient: &Address, amount: i128) -> Result<(), ContractError> {
        self.move_funds(&self.env.current_contract_address(), recipient, amount)
    }
}
