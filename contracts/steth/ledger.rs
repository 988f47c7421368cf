use crate::model::{zero_account, Balance, Error, Result, RunState};
use crate::permissions::PermissionOracle;
use crate::roles::{RoleId, BURN_ROLE, MINT_ROLE, PAUSE_ROLE};
use ink::primitives::AccountId;
use ink::storage::Mapping;

/// Balance, allowance and supply book of the token.
///
/// Every operation checks all of its preconditions before the first storage
/// write, so a rejected call leaves the ledger exactly as it was.
#[ink::storage_item]
#[derive(Debug)]
pub struct Ledger {
    balances: Mapping<AccountId, Balance>,
    allowances: Mapping<(AccountId, AccountId), Balance>,
    total_supply: Balance,
    run_state: RunState,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            balances: Mapping::default(),
            allowances: Mapping::default(),
            total_supply: 0,
            run_state: RunState::Running,
        }
    }

    // -------- guards --------

    fn ensure_role<O: PermissionOracle>(
        oracle: &O,
        caller_acc: AccountId,
        role: RoleId,
    ) -> Result<()> {
        if !oracle.has_role(caller_acc, role) {
            ink::env::debug_println!("ledger: {:?} lacks role {:02x?}", caller_acc, &role[..4]);
            return Err(Error::Unauthorized)
        }
        Ok(())
    }

    fn ensure_running(&self) -> Result<()> {
        if self.run_state.is_stopped() {
            return Err(Error::Stopped)
        }
        Ok(())
    }

    fn ensure_recipient(to_acc: AccountId) -> Result<()> {
        if to_acc == zero_account() {
            return Err(Error::InvalidRecipient)
        }
        Ok(())
    }

    // -------- read API --------

    pub fn total_supply(&self) -> Balance {
        self.total_supply
    }

    pub fn balance_of(&self, owner_acc: AccountId) -> Balance {
        self.balances.get(&owner_acc).unwrap_or(0)
    }

    pub fn allowance(&self, owner_acc: AccountId, spender_acc: AccountId) -> Balance {
        self.allowances.get(&(owner_acc, spender_acc)).unwrap_or(0)
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    // -------- holder operations --------

    pub fn transfer(
        &mut self,
        from_acc: AccountId,
        to_acc: AccountId,
        amount_val: Balance,
    ) -> Result<()> {
        self.ensure_running()?;
        Self::ensure_recipient(to_acc)?;
        self.move_balance(from_acc, to_acc, amount_val)
    }

    /// Overwrites the allowance; not gated by the run state.
    pub fn approve(&mut self, owner_acc: AccountId, spender_acc: AccountId, amount_val: Balance) {
        self.allowances.insert(&(owner_acc, spender_acc), &amount_val);
    }

    /// Moves `amount_val` out of `from_acc` on behalf of `spender_acc`.
    /// Returns the spender's remaining allowance.
    pub fn transfer_from(
        &mut self,
        spender_acc: AccountId,
        from_acc: AccountId,
        to_acc: AccountId,
        amount_val: Balance,
    ) -> Result<Balance> {
        self.ensure_running()?;
        Self::ensure_recipient(to_acc)?;

        let current_allow = self.allowance(from_acc, spender_acc);
        if current_allow < amount_val {
            return Err(Error::InsufficientAllowance)
        }
        if self.balance_of(from_acc) < amount_val {
            return Err(Error::InsufficientBalance)
        }
        if amount_val == 0 {
            return Ok(current_allow)
        }

        self.move_balance(from_acc, to_acc, amount_val)?;
        let new_allow = current_allow - amount_val;
        self.allowances.insert(&(from_acc, spender_acc), &new_allow);
        Ok(new_allow)
    }

    // -------- privileged operations --------

    /// Mint is allowed while stopped: the breaker only covers holder transfers.
    pub fn mint<O: PermissionOracle>(
        &mut self,
        oracle: &O,
        caller_acc: AccountId,
        to_acc: AccountId,
        amount_val: Balance,
    ) -> Result<()> {
        Self::ensure_role(oracle, caller_acc, MINT_ROLE)?;
        Self::ensure_recipient(to_acc)?;
        if amount_val == 0 {
            return Err(Error::InvalidAmount)
        }
        let new_total = self.total_supply.checked_add(amount_val).ok_or(Error::InvalidAmount)?;
        let new_to = self.balance_of(to_acc).checked_add(amount_val).ok_or(Error::InvalidAmount)?;

        self.total_supply = new_total;
        self.balances.insert(&to_acc, &new_to);
        Ok(())
    }

    pub fn burn<O: PermissionOracle>(
        &mut self,
        oracle: &O,
        caller_acc: AccountId,
        from_acc: AccountId,
        amount_val: Balance,
    ) -> Result<()> {
        Self::ensure_role(oracle, caller_acc, BURN_ROLE)?;
        if amount_val == 0 {
            return Err(Error::InvalidAmount)
        }
        let new_from = self
            .balance_of(from_acc)
            .checked_sub(amount_val)
            .ok_or(Error::InsufficientBalance)?;
        let new_total = self
            .total_supply
            .checked_sub(amount_val)
            .ok_or(Error::InsufficientBalance)?;

        self.balances.insert(&from_acc, &new_from);
        self.total_supply = new_total;
        Ok(())
    }

    pub fn stop<O: PermissionOracle>(&mut self, oracle: &O, caller_acc: AccountId) -> Result<()> {
        Self::ensure_role(oracle, caller_acc, PAUSE_ROLE)?;
        self.run_state = self.run_state.stop()?;
        Ok(())
    }

    pub fn resume<O: PermissionOracle>(&mut self, oracle: &O, caller_acc: AccountId) -> Result<()> {
        Self::ensure_role(oracle, caller_acc, PAUSE_ROLE)?;
        self.run_state = self.run_state.resume()?;
        Ok(())
    }

    // ---- internals ----

    fn move_balance(
        &mut self,
        from_acc: AccountId,
        to_acc: AccountId,
        amount_val: Balance,
    ) -> Result<()> {
        let from_bal = self.balance_of(from_acc);
        if from_bal < amount_val {
            return Err(Error::InsufficientBalance)
        }
        // self-transfers and zero amounts change nothing
        if from_acc == to_acc || amount_val == 0 {
            return Ok(())
        }

        let new_from = from_bal - amount_val;
        let new_to = self.balance_of(to_acc).checked_add(amount_val).ok_or(Error::InvalidAmount)?;
        self.balances.insert(&from_acc, &new_from);
        self.balances.insert(&to_acc, &new_to);
        Ok(())
    }
}
