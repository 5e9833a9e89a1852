//! Page-level permissions and the navigation groups built from them.

use super::auth::AuthUser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionItem {
    pub key: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionGroup {
    pub label: &'static str,
    pub items: &'static [PermissionItem],
}

pub const PERMISSION_GROUPS: &[PermissionGroup] = &[
    PermissionGroup {
        label: "Administration",
        items: &[
            PermissionItem { key: "departments", label: "Departments" },
            PermissionItem { key: "units", label: "Units" },
            PermissionItem { key: "employees", label: "Employees" },
            PermissionItem { key: "users", label: "User Accounts" },
        ],
    },
    PermissionGroup {
        label: "Catalog",
        items: &[
            PermissionItem { key: "categories", label: "Categories" },
            PermissionItem { key: "suppliers", label: "Suppliers" },
            PermissionItem { key: "items", label: "Items" },
        ],
    },
    PermissionGroup {
        label: "Fixed Assets",
        items: &[
            PermissionItem { key: "item-assets", label: "Assets" },
            PermissionItem { key: "asset-assignments", label: "Assignments" },
        ],
    },
    PermissionGroup {
        label: "Consumable Stock",
        items: &[
            PermissionItem { key: "inventory-stocks", label: "Stock Levels" },
            PermissionItem { key: "stock-receivals", label: "Stock Receivals" },
            PermissionItem { key: "stock-issuances", label: "Stock Issuances" },
        ],
    },
];

pub fn all_keys() -> impl Iterator<Item = &'static str> {
    PERMISSION_GROUPS
        .iter()
        .flat_map(|g| g.items.iter().map(|i| i.key))
}

/// Pages without a key are open to everyone; administrators see everything.
pub fn can_access(user: Option<&AuthUser>, key: Option<&str>) -> bool {
    let key = match key {
        None => return true,
        Some(k) => k,
    };
    match user {
        None => false,
        Some(u) if u.is_admin() => true,
        Some(u) => u.has_permission(key),
    }
}

/// Groups the user can see, with inaccessible entries removed and empty
/// groups dropped.
pub fn visible_groups(user: Option<&AuthUser>) -> Vec<(&'static str, Vec<PermissionItem>)> {
    PERMISSION_GROUPS
        .iter()
        .filter_map(|group| {
            let items: Vec<PermissionItem> = group
                .items
                .iter()
                .copied()
                .filter(|item| can_access(user, Some(item.key)))
                .collect();
            if items.is_empty() {
                None
            } else {
                Some((group.label, items))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::UserType;

    fn employee(perms: &[&str]) -> AuthUser {
        AuthUser {
            id: 5,
            name: "Jo".into(),
            user_type: Some(UserType::Employee),
            permissions: Some(perms.iter().map(|p| p.to_string()).collect()),
            ..Default::default()
        }
    }

    #[test]
    fn test_every_key_is_unique() {
        let keys: Vec<_> = all_keys().collect();
        let mut dedup = keys.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(keys.len(), 12);
        assert_eq!(dedup.len(), keys.len());
    }

    #[test]
    fn test_can_access() {
        let admin = AuthUser {
            user_type: Some(UserType::SystemAdministrator),
            ..Default::default()
        };
        assert!(can_access(Some(&admin), Some("users")));
        assert!(can_access(None, None));
        assert!(!can_access(None, Some("items")));

        let jo = employee(&["items"]);
        assert!(can_access(Some(&jo), Some("items")));
        assert!(!can_access(Some(&jo), Some("units")));
        assert!(can_access(Some(&jo), None));
    }

    #[test]
    fn test_empty_groups_are_hidden() {
        let jo = employee(&["items", "stock-issuances"]);
        let groups = visible_groups(Some(&jo));
        let labels: Vec<_> = groups.iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, vec!["Catalog", "Consumable Stock"]);
        assert_eq!(groups[0].1.len(), 1);
        assert_eq!(groups[0].1[0].key, "items");
    }
}
