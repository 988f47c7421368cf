#![cfg_attr(not(feature = "std"), no_std, no_main)]

#[cfg(any(test, feature = "test-utils"))]
pub mod fixture;
pub mod model;

pub use self::locator::{Locator, LocatorRef};
pub use self::model::{Error, LocatorConfig, Result, Service};

/// Address book of the protocol services. Fixed at deployment.
#[ink::contract]
mod locator {
    use crate::model::{LocatorConfig, Result, Service};
    use ink::prelude::string::String;

    #[ink(storage)]
    pub struct Locator {
        config: LocatorConfig,
    }

    impl Locator {
        #[ink(constructor)]
        pub fn new(config: LocatorConfig) -> Result<Self> {
            config.validate()?;
            Ok(Self { config })
        }

        #[ink(message)]
        pub fn get(&self, service: Service) -> AccountId {
            self.config.get(service)
        }

        /// Looks a service up by its camelCase name, e.g. `"stakingRouter"`.
        #[ink(message)]
        pub fn resolve(&self, name: String) -> Option<AccountId> {
            Service::from_name(&name).map(|service| self.config.get(service))
        }

        #[ink(message)]
        pub fn config(&self) -> LocatorConfig {
            self.config.clone()
        }

        #[ink(message)]
        pub fn accounting_oracle(&self) -> AccountId {
            self.config.accounting_oracle
        }

        #[ink(message)]
        pub fn deposit_security_module(&self) -> AccountId {
            self.config.deposit_security_module
        }

        #[ink(message)]
        pub fn el_rewards_vault(&self) -> AccountId {
            self.config.el_rewards_vault
        }

        #[ink(message)]
        pub fn legacy_oracle(&self) -> AccountId {
            self.config.legacy_oracle
        }

        #[ink(message)]
        pub fn lido(&self) -> AccountId {
            self.config.lido
        }

        #[ink(message)]
        pub fn safety_nets_registry(&self) -> AccountId {
            self.config.safety_nets_registry
        }

        #[ink(message)]
        pub fn self_owned_steth_burner(&self) -> AccountId {
            self.config.self_owned_steth_burner
        }

        #[ink(message)]
        pub fn staking_router(&self) -> AccountId {
            self.config.staking_router
        }

        #[ink(message)]
        pub fn treasury(&self) -> AccountId {
            self.config.treasury
        }

        #[ink(message)]
        pub fn validator_exit_bus(&self) -> AccountId {
            self.config.validator_exit_bus
        }

        #[ink(message)]
        pub fn withdrawal_queue(&self) -> AccountId {
            self.config.withdrawal_queue
        }

        #[ink(message)]
        pub fn withdrawal_vault(&self) -> AccountId {
            self.config.withdrawal_vault
        }
    }

}
