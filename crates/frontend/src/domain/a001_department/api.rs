use contracts::domain::a001_department::ROUTE;

use crate::shared::api_client::Resource;

pub const DEPARTMENTS: Resource = Resource::new(ROUTE);

pub const DELETE_FAILED: &str = "Cannot delete: department has related records.";
