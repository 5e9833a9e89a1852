use contracts::domain::a004_unit::ROUTE;

use crate::shared::api_client::Resource;

pub const UNITS: Resource = Resource::new(ROUTE);

pub const DELETE_FAILED: &str = "Cannot delete: unit is in use.";
