//! Randomized locator configs for tests that only need distinct, non-null addresses.

use crate::model::{LocatorConfig, Service};
use ink::primitives::AccountId;
use rand::Rng;

pub fn random_address() -> AccountId {
    AccountId::from(rand::thread_rng().gen::<[u8; 32]>())
}

/// Every service gets its override when one is given, a fresh random address otherwise.
pub fn random_locator_config(overrides: &[(Service, AccountId)]) -> LocatorConfig {
    LocatorConfig::from_fn(|service| {
        overrides
            .iter()
            .find(|(overridden, _)| *overridden == service)
            .map(|(_, acc)| *acc)
            .unwrap_or_else(random_address)
    })
}
