#![cfg_attr(not(feature = "std"), no_std, no_main)]

pub mod ledger;
pub mod model;
pub mod permissions;
pub mod roles;

pub use self::model::{Error, Result, RunState};
pub use self::steth::{StEth, StEthRef};

/// Liquid staked Ether token. Mint, burn and the transfer breaker are
/// restricted to role holders registered in the ACL registry.
#[ink::contract]
mod steth {
    use crate::ledger::Ledger;
    use crate::model::{Error, Result};
    use crate::permissions::{AclOracle, PermissionOracle};
    use crate::roles::{RoleId, BURN_ROLE, MINT_ROLE, PAUSE_ROLE};
    use ink::prelude::string::String;

    const TOKEN_NAME: &str = "Liquid staked Ether 2.0";
    const TOKEN_SYMBOL: &str = "StETH";
    const TOKEN_DECIMALS: u8 = 18;

    #[ink(event)]
    pub struct Transfer {
        #[ink(topic)]
        from: Option<AccountId>,
        #[ink(topic)]
        to: Option<AccountId>,
        value: Balance,
    }

    #[ink(event)]
    pub struct Approval {
        #[ink(topic)]
        owner: AccountId,
        #[ink(topic)]
        spender: AccountId,
        value: Balance,
    }

    #[ink(event)]
    pub struct Stopped {
        #[ink(topic)]
        by_acc: AccountId,
    }

    #[ink(event)]
    pub struct Resumed {
        #[ink(topic)]
        by_acc: AccountId,
    }

    #[ink(event)]
    pub struct Initialized {
        #[ink(topic)]
        pool_acc: AccountId,
    }

    #[ink(storage)]
    pub struct StEth {
        // permission registry consulted for privileged calls
        acl_acc: AccountId,
        // staking pool bound by `initialize`
        pool_acc: Option<AccountId>,
        ledger: Ledger,
    }

    impl StEth {
        // -------- constructors --------

        #[ink(constructor)]
        pub fn new(acl_acc: AccountId) -> Self {
            Self {
                acl_acc,
                pool_acc: None,
                ledger: Ledger::new(),
            }
        }

        /// Binds the staking pool. One-shot.
        #[ink(message)]
        pub fn initialize(&mut self, pool_acc: AccountId) -> Result<()> {
            if self.pool_acc.is_some() {
                return Err(Error::AlreadyInitialized)
            }
            self.pool_acc = Some(pool_acc);
            self.env().emit_event(Initialized { pool_acc });
            Ok(())
        }

        // -------- modifiers (helpers) --------

        /// Privileged calls are refused outright until the token is initialized.
        fn oracle(&self) -> Result<AclOracle> {
            if self.pool_acc.is_none() {
                return Err(Error::Unauthorized)
            }
            Ok(AclOracle::new(self.acl_acc, self.env().account_id()))
        }

        // -------- read API --------

        #[ink(message)]
        pub fn name(&self) -> String {
            String::from(TOKEN_NAME)
        }

        #[ink(message)]
        pub fn symbol(&self) -> String {
            String::from(TOKEN_SYMBOL)
        }

        #[ink(message)]
        pub fn decimals(&self) -> u8 {
            TOKEN_DECIMALS
        }

        #[ink(message)]
        pub fn total_supply(&self) -> Balance {
            self.ledger.total_supply()
        }

        #[ink(message)]
        pub fn balance_of(&self, owner_acc: AccountId) -> Balance {
            self.ledger.balance_of(owner_acc)
        }

        #[ink(message)]
        pub fn allowance(&self, owner_acc: AccountId, spender_acc: AccountId) -> Balance {
            self.ledger.allowance(owner_acc, spender_acc)
        }

        #[ink(message)]
        pub fn is_stopped(&self) -> bool {
            self.ledger.run_state().is_stopped()
        }

        #[ink(message)]
        pub fn get_pool(&self) -> Option<AccountId> {
            self.pool_acc
        }

        #[ink(message)]
        pub fn acl(&self) -> AccountId {
            self.acl_acc
        }

        #[ink(message)]
        pub fn pause_role(&self) -> RoleId {
            PAUSE_ROLE
        }

        #[ink(message)]
        pub fn mint_role(&self) -> RoleId {
            MINT_ROLE
        }

        #[ink(message)]
        pub fn burn_role(&self) -> RoleId {
            BURN_ROLE
        }

        // -------- write API --------

        #[ink(message)]
        pub fn transfer(&mut self, to_acc: AccountId, value: Balance) -> Result<()> {
            let from_acc = self.env().caller();
            self.ledger.transfer(from_acc, to_acc, value)?;
            self.env().emit_event(Transfer { from: Some(from_acc), to: Some(to_acc), value });
            Ok(())
        }

        #[ink(message)]
        pub fn approve(&mut self, spender_acc: AccountId, value: Balance) -> Result<()> {
            let owner_acc = self.env().caller();
            self.ledger.approve(owner_acc, spender_acc, value);
            self.env().emit_event(Approval { owner: owner_acc, spender: spender_acc, value });
            Ok(())
        }

        #[ink(message)]
        pub fn transfer_from(
            &mut self,
            from_acc: AccountId,
            to_acc: AccountId,
            value: Balance,
        ) -> Result<()> {
            let spender_acc = self.env().caller();
            let remaining_val = self
                .ledger
                .transfer_from(spender_acc, from_acc, to_acc, value)?;
            self.env().emit_event(Transfer { from: Some(from_acc), to: Some(to_acc), value });
            self.env().emit_event(Approval {
                owner: from_acc,
                spender: spender_acc,
                value: remaining_val,
            });
            Ok(())
        }

        /// Pool-side: credits freshly minted tokens to `to_acc`. Requires `MINT_ROLE`.
        #[ink(message)]
        pub fn mint(&mut self, to_acc: AccountId, value: Balance) -> Result<()> {
            let oracle = self.oracle()?;
            self.mint_with(&oracle, to_acc, value)
        }

        /// Pool-side: destroys tokens held by `from_acc`. Requires `BURN_ROLE`.
        #[ink(message)]
        pub fn burn(&mut self, from_acc: AccountId, value: Balance) -> Result<()> {
            let oracle = self.oracle()?;
            self.burn_with(&oracle, from_acc, value)
        }

        #[ink(message)]
        pub fn stop(&mut self) -> Result<()> {
            let oracle = self.oracle()?;
            self.stop_with(&oracle)
        }

        #[ink(message)]
        pub fn resume(&mut self) -> Result<()> {
            let oracle = self.oracle()?;
            self.resume_with(&oracle)
        }

        // ---- internals: privileged bodies, oracle supplied by the caller ----

        fn mint_with<O: PermissionOracle>(
            &mut self,
            oracle: &O,
            to_acc: AccountId,
            value: Balance,
        ) -> Result<()> {
            let caller_acc = self.env().caller();
            self.ledger.mint(oracle, caller_acc, to_acc, value)?;
            self.env().emit_event(Transfer { from: None, to: Some(to_acc), value });
            Ok(())
        }

        fn burn_with<O: PermissionOracle>(
            &mut self,
            oracle: &O,
            from_acc: AccountId,
            value: Balance,
        ) -> Result<()> {
            let caller_acc = self.env().caller();
            self.ledger.burn(oracle, caller_acc, from_acc, value)?;
            self.env().emit_event(Transfer { from: Some(from_acc), to: None, value });
            Ok(())
        }

        fn stop_with<O: PermissionOracle>(&mut self, oracle: &O) -> Result<()> {
            let by_acc = self.env().caller();
            self.ledger.stop(oracle, by_acc)?;
            self.env().emit_event(Stopped { by_acc });
            Ok(())
        }

        fn resume_with<O: PermissionOracle>(&mut self, oracle: &O) -> Result<()> {
            let by_acc = self.env().caller();
            self.ledger.resume(oracle, by_acc)?;
            self.env().emit_event(Resumed { by_acc });
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::model::zero_account;
        use crate::permissions::StaticOracle;
        use ink::env::{test, DefaultEnvironment};

        fn accounts() -> test::DefaultAccounts<DefaultEnvironment> {
            test::default_accounts::<DefaultEnvironment>()
        }

        fn set_caller(acc: AccountId) {
            test::set_caller::<DefaultEnvironment>(acc);
        }

        fn deploy() -> StEth {
            let accs = accounts();
            set_caller(accs.alice);
            StEth::new(accs.frank)
        }

        /// alice acts as the pool and holds every token role.
        fn pool_oracle() -> StaticOracle {
            let pool_acc = accounts().alice;
            StaticOracle::default()
                .grant(pool_acc, PAUSE_ROLE)
                .grant(pool_acc, MINT_ROLE)
                .grant(pool_acc, BURN_ROLE)
        }

        fn events() -> Vec<test::EmittedEvent> {
            test::recorded_events().collect()
        }

        fn decode<E: scale::Decode>(event: &test::EmittedEvent) -> E {
            E::decode(&mut &event.data[..]).expect("invalid event data")
        }

        fn assert_transfer(
            event: &test::EmittedEvent,
            from_acc: Option<AccountId>,
            to_acc: Option<AccountId>,
            amount_val: Balance,
        ) {
            let Transfer { from, to, value } = decode(event);
            assert_eq!((from, to, value), (from_acc, to_acc, amount_val));
        }

        fn assert_approval(
            event: &test::EmittedEvent,
            owner_acc: AccountId,
            spender_acc: AccountId,
            amount_val: Balance,
        ) {
            let Approval { owner, spender, value } = decode(event);
            assert_eq!((owner, spender, value), (owner_acc, spender_acc, amount_val));
        }

        #[ink::test]
        fn token_info_is_accessible() {
            let token = deploy();
            assert_eq!(token.name(), "Liquid staked Ether 2.0");
            assert_eq!(token.symbol(), "StETH");
            assert_eq!(token.decimals(), 18);
            assert_eq!(token.total_supply(), 0);
            assert!(!token.is_stopped());
            assert_eq!(token.acl(), accounts().frank);
        }

        #[ink::test]
        fn role_ids_are_exposed() {
            let token = deploy();
            assert_eq!(token.pause_role(), PAUSE_ROLE);
            assert_eq!(token.mint_role(), MINT_ROLE);
            assert_eq!(token.burn_role(), BURN_ROLE);
            assert_ne!(token.mint_role(), token.burn_role());
        }

        #[ink::test]
        fn initialize_is_one_shot() {
            let accs = accounts();
            let mut token = deploy();
            assert_eq!(token.get_pool(), None);

            token.initialize(accs.bob).unwrap();
            assert_eq!(token.get_pool(), Some(accs.bob));
            assert_eq!(token.initialize(accs.charlie), Err(Error::AlreadyInitialized));
            assert_eq!(token.get_pool(), Some(accs.bob));
            assert_eq!(test::recorded_events().count(), 1);
        }

        #[ink::test]
        fn privileged_calls_refused_before_initialize() {
            let accs = accounts();
            let mut token = deploy();
            assert_eq!(token.mint(accs.bob, 10), Err(Error::Unauthorized));
            assert_eq!(token.burn(accs.bob, 10), Err(Error::Unauthorized));
            assert_eq!(token.stop(), Err(Error::Unauthorized));
            assert_eq!(token.resume(), Err(Error::Unauthorized));
            assert_eq!(token.total_supply(), 0);
            assert_eq!(test::recorded_events().count(), 0);
        }

        #[ink::test]
        fn approve_records_and_emits() {
            let accs = accounts();
            let mut token = deploy();
            set_caller(accs.bob);
            token.approve(accs.charlie, 3).unwrap();
            assert_eq!(token.allowance(accs.bob, accs.charlie), 3);
            token.approve(accs.charlie, 0).unwrap();
            assert_eq!(token.allowance(accs.bob, accs.charlie), 0);
            assert_eq!(test::recorded_events().count(), 2);
        }

        #[ink::test]
        fn transfers_without_funds_are_rejected() {
            let accs = accounts();
            let mut token = deploy();
            set_caller(accs.bob);
            assert_eq!(token.transfer(accs.charlie, 2), Err(Error::InsufficientBalance));
            assert_eq!(token.transfer(zero_account(), 2), Err(Error::InvalidRecipient));

            set_caller(accs.charlie);
            assert_eq!(
                token.transfer_from(accs.bob, accs.django, 2),
                Err(Error::InsufficientAllowance)
            );
            assert_eq!(test::recorded_events().count(), 0);
        }

        #[ink::test]
        fn zero_transfer_emits_event() {
            let accs = accounts();
            let mut token = deploy();
            set_caller(accs.bob);
            token.transfer(accs.charlie, 0).unwrap();
            assert_eq!(token.balance_of(accs.charlie), 0);
            assert_eq!(test::recorded_events().count(), 1);
        }

        #[ink::test]
        fn mint_transfer_from_burn_emit_full_payloads() {
            let accs = accounts();
            let oracle = pool_oracle();
            let mut token = deploy();

            token.mint_with(&oracle, accs.bob, 10).unwrap();

            set_caller(accs.bob);
            token.approve(accs.charlie, 3).unwrap();

            set_caller(accs.charlie);
            token.transfer_from(accs.bob, accs.django, 2).unwrap();
            assert_eq!(token.allowance(accs.bob, accs.charlie), 1);

            set_caller(accs.alice);
            token.burn_with(&oracle, accs.django, 2).unwrap();
            assert_eq!(token.total_supply(), 8);
            assert_eq!(token.balance_of(accs.bob), 8);
            assert_eq!(token.balance_of(accs.django), 0);

            let emitted = events();
            assert_eq!(emitted.len(), 5);
            assert_transfer(&emitted[0], None, Some(accs.bob), 10);
            assert_approval(&emitted[1], accs.bob, accs.charlie, 3);
            assert_transfer(&emitted[2], Some(accs.bob), Some(accs.django), 2);
            // remaining allowance, not the amount moved
            assert_approval(&emitted[3], accs.bob, accs.charlie, 1);
            assert_transfer(&emitted[4], Some(accs.django), None, 2);
        }

        #[ink::test]
        fn stop_and_resume_emit_caller() {
            let accs = accounts();
            let oracle = pool_oracle();
            let mut token = deploy();
            token.mint_with(&oracle, accs.bob, 5).unwrap();

            token.stop_with(&oracle).unwrap();
            assert!(token.is_stopped());
            set_caller(accs.bob);
            assert_eq!(token.transfer(accs.charlie, 1), Err(Error::Stopped));

            set_caller(accs.alice);
            token.resume_with(&oracle).unwrap();
            set_caller(accs.bob);
            token.transfer(accs.charlie, 1).unwrap();

            let emitted = events();
            assert_eq!(emitted.len(), 4);
            let Stopped { by_acc } = decode(&emitted[1]);
            assert_eq!(by_acc, accs.alice);
            let Resumed { by_acc } = decode(&emitted[2]);
            assert_eq!(by_acc, accs.alice);
            assert_transfer(&emitted[3], Some(accs.bob), Some(accs.charlie), 1);
        }

        #[ink::test]
        fn rejected_privileged_calls_emit_nothing() {
            let accs = accounts();
            let oracle = pool_oracle();
            let mut token = deploy();
            token.mint_with(&oracle, accs.bob, 5).unwrap();

            set_caller(accs.eve);
            assert_eq!(token.mint_with(&oracle, accs.eve, 5), Err(Error::Unauthorized));
            assert_eq!(token.burn_with(&oracle, accs.bob, 5), Err(Error::Unauthorized));
            assert_eq!(token.stop_with(&oracle), Err(Error::Unauthorized));

            set_caller(accs.alice);
            assert_eq!(token.resume_with(&oracle), Err(Error::InvalidStateTransition));
            assert_eq!(token.burn_with(&oracle, accs.bob, 6), Err(Error::InsufficientBalance));

            assert_eq!(token.total_supply(), 5);
            assert_eq!(events().len(), 1);
        }
    }

}
