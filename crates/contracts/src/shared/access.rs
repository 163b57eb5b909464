//! Action-to-role allow-list for the dashboard pages.
//!
//! This only decides which affordances the UI shows. The backend enforces
//! its own rules independently.

use crate::domain::common::ResourceKind;
use crate::system::auth::Role;

/// Mutating action a page can offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Create,
    Edit,
    Delete,
}

/// Roles besides `admin` allowed to perform `action` on `kind`
pub fn allowed_roles(kind: ResourceKind, action: Action) -> &'static [Role] {
    use Action::*;
    use ResourceKind::*;
    use Role::{Captain, Employee as Clerk, Manager, Supervisor as Lead};

    match (kind, action) {
        (Vendor | Product | Category, Create | Edit) => &[Manager],
        (Vendor | Product | Category, Delete) => &[],

        (Inventory, Edit) => &[Manager],
        (Inventory, Create | Delete) => &[],

        (Purchase | Transfer, Create | Edit) => &[Manager, Lead],
        (Purchase | Transfer, Delete) => &[Manager],

        (Sale, Create) => &[Manager, Lead, Clerk],
        (Sale, Edit) => &[Manager, Lead],
        (Sale, Delete) => &[Manager],

        (Shipment, Create | Edit) => &[Manager, Lead, Captain],
        (Shipment, Delete) => &[Manager],

        (Vehicle, Create) => &[Manager],
        (Vehicle, Edit) => &[Manager, Captain],
        (Vehicle, Delete) => &[],

        (Employee, Create | Edit) => &[Manager],
        (Employee, Delete) => &[],

        (Customer, Create | Edit) => &[Manager, Lead, Clerk],
        (Customer, Delete) => &[Manager],

        (Supervisor, _) => &[],
    }
}

/// Whether `role` may perform `action` on `kind`
pub fn is_allowed(kind: ResourceKind, action: Action, role: Option<Role>) -> bool {
    match role {
        Some(Role::Admin) => true,
        Some(Role::Unknown) | None => false,
        Some(role) => allowed_roles(kind, action).contains(&role),
    }
}

/// Flags a page uses to show or hide its action buttons and dialogs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub can_create: bool,
    pub can_edit: bool,
    pub can_delete: bool,
}

impl Capabilities {
    pub fn for_role(kind: ResourceKind, role: Option<Role>) -> Self {
        Self {
            can_create: is_allowed(kind, Action::Create, role),
            can_edit: is_allowed(kind, Action::Edit, role),
            can_delete: is_allowed(kind, Action::Delete, role),
        }
    }

    pub fn any(&self) -> bool {
        self.can_create || self.can_edit || self.can_delete
    }
}
