use contracts::domain::a006_item::ROUTE;

use crate::shared::api_client::Resource;

pub const ITEMS: Resource = Resource::new(ROUTE);

pub const DELETE_FAILED: &str = "Cannot delete: item has assets or stock.";
