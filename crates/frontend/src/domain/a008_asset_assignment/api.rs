use contracts::domain::a008_asset_assignment::ROUTE;

use crate::shared::api_client::Resource;

pub const ASSET_ASSIGNMENTS: Resource = Resource::new(ROUTE);
