use crate::domain::a006_item::{Item, ItemType};
use crate::domain::a007_item_asset::{ItemAsset, STATUS_ASSIGNED};
use crate::domain::a009_inventory_stock::InventoryStock;

/// Figures of the overview cards, derived from the full resource lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverviewCounts {
    pub departments: usize,
    pub employees: usize,
    pub items: usize,
    pub fixed_asset_items: usize,
    pub consumable_items: usize,
    /// Asset units currently out with an employee or department
    pub active_assignments: usize,
    pub low_stock: usize,
}

impl OverviewCounts {
    pub fn compute(
        departments: usize,
        employees: usize,
        items: &[Item],
        assets: &[ItemAsset],
        stocks: &[InventoryStock],
    ) -> Self {
        let of_type = |t: ItemType| items.iter().filter(|i| i.item_type == t).count();
        Self {
            departments,
            employees,
            items: items.len(),
            fixed_asset_items: of_type(ItemType::FixedAsset),
            consumable_items: of_type(ItemType::Consumable),
            active_assignments: assets.iter().filter(|a| a.status == STATUS_ASSIGNED).count(),
            low_stock: stocks.iter().filter(|s| s.is_low()).count(),
        }
    }

    pub fn has_low_stock(&self) -> bool {
        self.low_stock > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, kind: &str) -> Item {
        serde_json::from_str(&format!(
            r#"{{"id":{},"name":"Item {}","category_id":1,"unit_id":1,"item_type":"{}"}}"#,
            id, id, kind
        ))
        .unwrap()
    }

    fn asset(id: u64, status: &str) -> ItemAsset {
        serde_json::from_str(&format!(
            r#"{{"id":{},"item_id":1,"item_code":"A-{}","status":"{}"}}"#,
            id, id, status
        ))
        .unwrap()
    }

    fn stock(id: u64, low: Option<bool>) -> InventoryStock {
        let flag = match low {
            Some(v) => format!(r#","is_below_minimum":{}"#, v),
            None => String::new(),
        };
        serde_json::from_str(&format!(
            r#"{{"id":{},"item_id":1,"department_id":1,"quantity":5{}}}"#,
            id, flag
        ))
        .unwrap()
    }

    #[test]
    fn test_counts() {
        let items = vec![item(1, "fixed_asset"), item(2, "consumable"), item(3, "consumable")];
        let assets = vec![asset(1, "assigned"), asset(2, "available"), asset(3, "assigned")];
        let stocks = vec![stock(1, Some(true)), stock(2, Some(false)), stock(3, None)];

        let counts = OverviewCounts::compute(4, 12, &items, &assets, &stocks);
        assert_eq!(counts.items, 3);
        assert_eq!(counts.fixed_asset_items, 1);
        assert_eq!(counts.consumable_items, 2);
        assert_eq!(counts.active_assignments, 2);
        assert_eq!(counts.low_stock, 1);
        assert!(counts.has_low_stock());
    }

    #[test]
    fn test_empty_lists() {
        let counts = OverviewCounts::compute(0, 0, &[], &[], &[]);
        assert_eq!(counts, OverviewCounts::default());
        assert!(!counts.has_low_stock());
    }
}
