#![cfg_attr(not(feature = "std"), no_std, no_main)]

pub mod roles;

pub use self::acl::{Acl, AclRef, Error};

/// Permission registry: answers "may `entity` perform `role` on `app`".
#[ink::contract]
mod acl {
    use crate::roles::RoleId;
    use ink::storage::Mapping;

    pub type Result<T> = core::result::Result<T, Error>;

    #[derive(scale::Encode, scale::Decode, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
    pub enum Error {
        NotRoot,
        PermissionExists,
        NoPermissionManager,
        NotPermissionManager,
        PermissionUnchanged,
    }

    #[ink(event)]
    pub struct SetPermission {
        #[ink(topic)]
        entity_acc: AccountId,
        #[ink(topic)]
        app_acc: AccountId,
        #[ink(topic)]
        role: RoleId,
        allowed_flag: bool,
    }

    #[ink(event)]
    pub struct ChangePermissionManager {
        #[ink(topic)]
        app_acc: AccountId,
        #[ink(topic)]
        role: RoleId,
        #[ink(topic)]
        manager_acc: AccountId,
    }

    #[ink(storage)]
    pub struct Acl {
        // only root may create new (app, role) permissions
        root_acc: AccountId,
        managers: Mapping<(AccountId, RoleId), AccountId>,
        permissions: Mapping<(AccountId, AccountId, RoleId), bool>,
    }

    impl Acl {
        // -------- constructors --------

        #[ink(constructor)]
        pub fn new() -> Self {
            Self {
                root_acc: Self::env().caller(),
                managers: Mapping::default(),
                permissions: Mapping::default(),
            }
        }

        // -------- modifiers (helpers) --------

        fn only_root(&self) -> Result<()> {
            if self.env().caller() != self.root_acc {
                return Err(Error::NotRoot)
            }
            Ok(())
        }

        fn only_manager(&self, app_acc: AccountId, role: RoleId) -> Result<()> {
            let manager_acc = self
                .managers
                .get(&(app_acc, role))
                .ok_or(Error::NoPermissionManager)?;
            if self.env().caller() != manager_acc {
                return Err(Error::NotPermissionManager)
            }
            Ok(())
        }

        // -------- admin --------

        /// Grants `role` on `app_acc` to `entity_acc` and hands management of
        /// that (app, role) pair to `manager_acc`. One-shot per pair.
        #[ink(message)]
        pub fn create_permission(
            &mut self,
            entity_acc: AccountId,
            app_acc: AccountId,
            role: RoleId,
            manager_acc: AccountId,
        ) -> Result<()> {
            self.only_root()?;
            if self.managers.contains(&(app_acc, role)) {
                return Err(Error::PermissionExists)
            }
            self.set_permission(entity_acc, app_acc, role, true);
            self.set_manager(app_acc, role, manager_acc);
            Ok(())
        }

        #[ink(message)]
        pub fn grant_permission(
            &mut self,
            entity_acc: AccountId,
            app_acc: AccountId,
            role: RoleId,
        ) -> Result<()> {
            self.only_manager(app_acc, role)?;
            if self.has_permission(entity_acc, app_acc, role) {
                return Err(Error::PermissionUnchanged)
            }
            self.set_permission(entity_acc, app_acc, role, true);
            Ok(())
        }

        #[ink(message)]
        pub fn revoke_permission(
            &mut self,
            entity_acc: AccountId,
            app_acc: AccountId,
            role: RoleId,
        ) -> Result<()> {
            self.only_manager(app_acc, role)?;
            if !self.has_permission(entity_acc, app_acc, role) {
                return Err(Error::PermissionUnchanged)
            }
            self.set_permission(entity_acc, app_acc, role, false);
            Ok(())
        }

        #[ink(message)]
        pub fn set_permission_manager(
            &mut self,
            new_manager_acc: AccountId,
            app_acc: AccountId,
            role: RoleId,
        ) -> Result<()> {
            self.only_manager(app_acc, role)?;
            self.set_manager(app_acc, role, new_manager_acc);
            Ok(())
        }

        // -------- read API --------

        #[ink(message)]
        pub fn root(&self) -> AccountId {
            self.root_acc
        }

        #[ink(message)]
        pub fn has_permission(&self, who_acc: AccountId, app_acc: AccountId, role: RoleId) -> bool {
            self.permissions.get(&(who_acc, app_acc, role)).unwrap_or(false)
        }

        #[ink(message)]
        pub fn get_permission_manager(
            &self,
            app_acc: AccountId,
            role: RoleId,
        ) -> Option<AccountId> {
            self.managers.get(&(app_acc, role))
        }

        // ---- internals ----

        fn set_permission(
            &mut self,
            entity_acc: AccountId,
            app_acc: AccountId,
            role: RoleId,
            allowed_flag: bool,
        ) {
            if allowed_flag {
                self.permissions.insert(&(entity_acc, app_acc, role), &true);
            } else {
                self.permissions.remove(&(entity_acc, app_acc, role));
            }
            self.env().emit_event(SetPermission { entity_acc, app_acc, role, allowed_flag });
        }

        fn set_manager(&mut self, app_acc: AccountId, role: RoleId, manager_acc: AccountId) {
            self.managers.insert(&(app_acc, role), &manager_acc);
            self.env().emit_event(ChangePermissionManager { app_acc, role, manager_acc });
        }
    }

}
