use contracts::domain::a003_category::ROUTE;

use crate::shared::api_client::Resource;

pub const CATEGORIES: Resource = Resource::new(ROUTE);

pub const DELETE_FAILED: &str = "Cannot delete: category has sub-categories or items.";
