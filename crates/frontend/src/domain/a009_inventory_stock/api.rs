use contracts::domain::a009_inventory_stock::ROUTE;

use crate::shared::api_client::Resource;

pub const INVENTORY_STOCKS: Resource = Resource::new(ROUTE);
