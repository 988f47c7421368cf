use ink::primitives::AccountId;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(scale::Encode, scale::Decode, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum Error {
    /// The service was configured with the null account.
    ZeroAddress(Service),
}

/// Protocol services the locator resolves.
#[derive(scale::Encode, scale::Decode, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum Service {
    AccountingOracle,
    DepositSecurityModule,
    ElRewardsVault,
    LegacyOracle,
    Lido,
    SafetyNetsRegistry,
    SelfOwnedStEthBurner,
    StakingRouter,
    Treasury,
    ValidatorExitBus,
    WithdrawalQueue,
    WithdrawalVault,
}

impl Service {
    pub const ALL: [Service; 12] = [
        Service::AccountingOracle,
        Service::DepositSecurityModule,
        Service::ElRewardsVault,
        Service::LegacyOracle,
        Service::Lido,
        Service::SafetyNetsRegistry,
        Service::SelfOwnedStEthBurner,
        Service::StakingRouter,
        Service::Treasury,
        Service::ValidatorExitBus,
        Service::WithdrawalQueue,
        Service::WithdrawalVault,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Service::AccountingOracle => "accountingOracle",
            Service::DepositSecurityModule => "depositSecurityModule",
            Service::ElRewardsVault => "elRewardsVault",
            Service::LegacyOracle => "legacyOracle",
            Service::Lido => "lido",
            Service::SafetyNetsRegistry => "safetyNetsRegistry",
            Service::SelfOwnedStEthBurner => "selfOwnedStEthBurner",
            Service::StakingRouter => "stakingRouter",
            Service::Treasury => "treasury",
            Service::ValidatorExitBus => "validatorExitBus",
            Service::WithdrawalQueue => "withdrawalQueue",
            Service::WithdrawalVault => "withdrawalVault",
        }
    }

    /// Inverse of [`Service::name`].
    pub fn from_name(name: &str) -> Option<Service> {
        Service::ALL.into_iter().find(|s| s.name() == name)
    }
}

/// One address per service.
#[derive(scale::Encode, scale::Decode, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct LocatorConfig {
    pub accounting_oracle: AccountId,
    pub deposit_security_module: AccountId,
    pub el_rewards_vault: AccountId,
    pub legacy_oracle: AccountId,
    pub lido: AccountId,
    pub safety_nets_registry: AccountId,
    pub self_owned_steth_burner: AccountId,
    pub staking_router: AccountId,
    pub treasury: AccountId,
    pub validator_exit_bus: AccountId,
    pub withdrawal_queue: AccountId,
    pub withdrawal_vault: AccountId,
}

impl LocatorConfig {
    /// Builds a config by asking `address_of` for every service.
    pub fn from_fn(mut address_of: impl FnMut(Service) -> AccountId) -> Self {
        Self {
            accounting_oracle: address_of(Service::AccountingOracle),
            deposit_security_module: address_of(Service::DepositSecurityModule),
            el_rewards_vault: address_of(Service::ElRewardsVault),
            legacy_oracle: address_of(Service::LegacyOracle),
            lido: address_of(Service::Lido),
            safety_nets_registry: address_of(Service::SafetyNetsRegistry),
            self_owned_steth_burner: address_of(Service::SelfOwnedStEthBurner),
            staking_router: address_of(Service::StakingRouter),
            treasury: address_of(Service::Treasury),
            validator_exit_bus: address_of(Service::ValidatorExitBus),
            withdrawal_queue: address_of(Service::WithdrawalQueue),
            withdrawal_vault: address_of(Service::WithdrawalVault),
        }
    }

    pub fn get(&self, service: Service) -> AccountId {
        match service {
            Service::AccountingOracle => self.accounting_oracle,
            Service::DepositSecurityModule => self.deposit_security_module,
            Service::ElRewardsVault => self.el_rewards_vault,
            Service::LegacyOracle => self.legacy_oracle,
            Service::Lido => self.lido,
            Service::SafetyNetsRegistry => self.safety_nets_registry,
            Service::SelfOwnedStEthBurner => self.self_owned_steth_burner,
            Service::StakingRouter => self.staking_router,
            Service::Treasury => self.treasury,
            Service::ValidatorExitBus => self.validator_exit_bus,
            Service::WithdrawalQueue => self.withdrawal_queue,
            Service::WithdrawalVault => self.withdrawal_vault,
        }
    }

    /// Fails on the first service bound to the null account.
    pub fn validate(&self) -> Result<()> {
        let zero_acc = AccountId::from([0u8; 32]);
        for service in Service::ALL {
            if self.get(service) == zero_acc {
                return Err(Error::ZeroAddress(service))
            }
        }
        Ok(())
    }
}
