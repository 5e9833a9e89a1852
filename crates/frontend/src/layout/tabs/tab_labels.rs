//! Titles and icons for tab keys. Resource pages reuse the labels of the
//! permission table so the sidebar, the tab strip and the user form agree.

use contracts::system::permissions::PERMISSION_GROUPS;

pub const DASHBOARD_TAB: &str = "dashboard";
pub const ACCOUNT_TAB: &str = "account";

pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        DASHBOARD_TAB => "Dashboard",
        ACCOUNT_TAB => "Account Settings",
        _ => PERMISSION_GROUPS
            .iter()
            .flat_map(|g| g.items.iter())
            .find(|item| item.key == key)
            .map(|item| item.label)
            .unwrap_or(""),
    }
}

pub fn is_known_tab(key: &str) -> bool {
    !tab_label_for_key(key).is_empty()
}

pub fn tab_icon(key: &str) -> &'static str {
    match key {
        DASHBOARD_TAB => "dashboard",
        ACCOUNT_TAB => "user",
        "departments" => "building",
        "units" => "ruler",
        "employees" => "users",
        "users" => "user-cog",
        "categories" => "tag",
        "suppliers" => "truck",
        "items" => "package",
        "item-assets" => "monitor",
        "asset-assignments" => "clipboard",
        "inventory-stocks" => "layers",
        "stock-receivals" => "download",
        "stock-issuances" => "upload",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(tab_label_for_key("dashboard"), "Dashboard");
        assert_eq!(tab_label_for_key("users"), "User Accounts");
        assert_eq!(tab_label_for_key("inventory-stocks"), "Stock Levels");
        assert_eq!(tab_label_for_key("nope"), "");
    }

    #[test]
    fn test_every_permission_key_is_a_tab() {
        for key in contracts::system::permissions::all_keys() {
            assert!(is_known_tab(key), "{key}");
            assert!(!tab_icon(key).is_empty(), "{key}");
        }
        assert!(!is_known_tab("a099_unknown"));
    }
}
