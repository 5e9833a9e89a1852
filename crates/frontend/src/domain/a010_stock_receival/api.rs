use contracts::domain::a010_stock_receival::ROUTE;

use crate::shared::api_client::Resource;

pub const STOCK_RECEIVALS: Resource = Resource::new(ROUTE);
