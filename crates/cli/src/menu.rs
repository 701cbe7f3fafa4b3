//! Role-specific menus and the commands they map to.

use stockroom_auth::{Permission, Role};

/// A console command, independent of the digit that selects it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    AddProduct,
    RemoveProduct,
    UpdateStock,
    ViewInventory,
    ViewTotalValue,
    ViewSalesLog,
    BuyProduct,
    Exit,
}

impl Command {
    /// Permission checked before the command runs (`None` for `Exit`).
    pub fn required_permission(&self) -> Option<Permission> {
        match self {
            Command::AddProduct | Command::RemoveProduct | Command::UpdateStock => {
                Some(Permission::INVENTORY_WRITE)
            }
            Command::ViewInventory => Some(Permission::INVENTORY_READ),
            Command::ViewTotalValue | Command::ViewSalesLog => Some(Permission::SALES_READ),
            Command::BuyProduct => Some(Permission::SALES_CREATE),
            Command::Exit => None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub key: &'static str,
    pub label: &'static str,
    pub command: Command,
}

const fn item(key: &'static str, label: &'static str, command: Command) -> MenuItem {
    MenuItem { key, label, command }
}

const ADMIN_MENU: &[MenuItem] = &[
    item("1", "Add Product", Command::AddProduct),
    item("2", "Remove Product", Command::RemoveProduct),
    item("3", "Update Stock", Command::UpdateStock),
    item("4", "View Inventory", Command::ViewInventory),
    item("5", "View Total Inventory Value", Command::ViewTotalValue),
    item("6", "View Sales Log", Command::ViewSalesLog),
    item("7", "Exit", Command::Exit),
];

const CUSTOMER_MENU: &[MenuItem] = &[
    item("1", "Buy Product", Command::BuyProduct),
    item("2", "View Inventory", Command::ViewInventory),
    item("3", "Exit", Command::Exit),
];

pub fn menu_for(role: Role) -> &'static [MenuItem] {
    match role {
        Role::Admin => ADMIN_MENU,
        Role::Customer => CUSTOMER_MENU,
    }
}

/// Map a typed choice to a command of `role`'s menu.
pub fn resolve(role: Role, choice: &str) -> Option<Command> {
    let choice = choice.trim();
    menu_for(role)
        .iter()
        .find(|item| item.key == choice)
        .map(|item| item.command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_digits_map_to_admin_commands() {
        assert_eq!(resolve(Role::Admin, "1"), Some(Command::AddProduct));
        assert_eq!(resolve(Role::Admin, " 6 "), Some(Command::ViewSalesLog));
        assert_eq!(resolve(Role::Admin, "7"), Some(Command::Exit));
        assert_eq!(resolve(Role::Admin, "8"), None);
    }

    #[test]
    fn customer_digits_map_to_customer_commands() {
        assert_eq!(resolve(Role::Customer, "1"), Some(Command::BuyProduct));
        assert_eq!(resolve(Role::Customer, "2"), Some(Command::ViewInventory));
        assert_eq!(resolve(Role::Customer, "3"), Some(Command::Exit));
        assert_eq!(resolve(Role::Customer, "4"), None);
        assert_eq!(resolve(Role::Customer, "buy"), None);
    }

    #[test]
    fn every_menu_command_is_permitted_for_its_role() {
        for role in [Role::Admin, Role::Customer] {
            for item in menu_for(role) {
                if let Some(permission) = item.command.required_permission() {
                    assert!(
                        role.grants(&permission),
                        "{role} menu offers {:?} without {permission}",
                        item.command
                    );
                }
            }
        }
    }
}
