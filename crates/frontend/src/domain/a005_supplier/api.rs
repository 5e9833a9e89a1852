use contracts::domain::a005_supplier::ROUTE;

use crate::shared::api_client::Resource;

pub const SUPPLIERS: Resource = Resource::new(ROUTE);

pub const DELETE_FAILED: &str = "Cannot delete: supplier has related receivals.";
