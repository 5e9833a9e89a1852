use contracts::domain::a002_employee::ROUTE;

use crate::shared::api_client::Resource;

pub const EMPLOYEES: Resource = Resource::new(ROUTE);

pub const DELETE_FAILED: &str = "Cannot delete: employee has active assignments.";
