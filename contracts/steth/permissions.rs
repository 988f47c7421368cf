use crate::roles::RoleId;
use ink::env::call::{build_call, ExecutionInput, Selector};
use ink::env::DefaultEnvironment;
use ink::primitives::AccountId;

/// Answers "does `principal` hold `role`" for the ledger's privileged operations.
pub trait PermissionOracle {
    fn has_role(&self, principal: AccountId, role: RoleId) -> bool;
}

/// Asks the ACL registry whether `principal` holds `role` on `app_acc`.
///
/// Any failure of the cross-contract call counts as "not granted".
pub struct AclOracle {
    acl_acc: AccountId,
    app_acc: AccountId,
}

impl AclOracle {
    pub fn new(acl_acc: AccountId, app_acc: AccountId) -> Self {
        Self { acl_acc, app_acc }
    }
}

impl PermissionOracle for AclOracle {
    fn has_role(&self, principal: AccountId, role: RoleId) -> bool {
        let outcome = build_call::<DefaultEnvironment>()
            .call(self.acl_acc)
            .exec_input(
                ExecutionInput::new(Selector::new(ink::selector_bytes!("has_permission")))
                    .push_arg(principal)
                    .push_arg(self.app_acc)
                    .push_arg(role),
            )
            .returns::<bool>()
            .try_invoke();
        matches!(outcome, Ok(Ok(true)))
    }
}

/// Fixed in-memory grants for tests.
#[cfg(test)]
#[derive(Default)]
pub struct StaticOracle {
    grants: ink::prelude::vec::Vec<(AccountId, RoleId)>,
}

#[cfg(test)]
impl StaticOracle {
    pub fn grant(mut self, principal: AccountId, role: RoleId) -> Self {
        self.grants.push((principal, role));
        self
    }
}

#[cfg(test)]
impl PermissionOracle for StaticOracle {
    fn has_role(&self, principal: AccountId, role: RoleId) -> bool {
        self.grants.iter().any(|grant| *grant == (principal, role))
    }
}
