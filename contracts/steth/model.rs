use ink::primitives::AccountId;

pub type Balance = u128;
pub type Result<T> = core::result::Result<T, Error>;

#[derive(scale::Encode, scale::Decode, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum Error {
    /// Caller does not hold the role the operation requires.
    Unauthorized,
    /// Transfers are blocked until `resume`.
    Stopped,
    InsufficientBalance,
    InsufficientAllowance,
    /// Zero amount where one is not allowed, or supply overflow.
    InvalidAmount,
    /// Recipient is the zero account.
    InvalidRecipient,
    AlreadyInitialized,
    /// `stop` while stopped or `resume` while running.
    InvalidStateTransition,
}

/// Circuit breaker over holder-initiated transfers.
#[derive(scale::Encode, scale::Decode, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub enum RunState {
    #[default]
    Running,
    Stopped,
}

impl RunState {
    pub fn stop(self) -> Result<Self> {
        match self {
            RunState::Running => Ok(RunState::Stopped),
            RunState::Stopped => Err(Error::InvalidStateTransition),
        }
    }

    pub fn resume(self) -> Result<Self> {
        match self {
            RunState::Stopped => Ok(RunState::Running),
            RunState::Running => Err(Error::InvalidStateTransition),
        }
    }

    pub fn is_stopped(self) -> bool {
        self == RunState::Stopped
    }
}

/// The null account; never a valid recipient.
pub fn zero_account() -> AccountId {
    AccountId::from([0u8; 32])
}
