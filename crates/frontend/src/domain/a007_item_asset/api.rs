use contracts::domain::a007_item_asset::ROUTE;

use crate::shared::api_client::Resource;

pub const ITEM_ASSETS: Resource = Resource::new(ROUTE);

pub const DELETE_FAILED: &str = "Cannot delete: asset has active assignment.";
pub const ASSIGN_FAILED: &str = "Failed to assign asset.";
pub const RETURN_FAILED: &str = "Failed to return asset.";
