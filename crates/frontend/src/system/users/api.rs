use contracts::system::users::ROUTE;

use crate::shared::api_client::Resource;

pub const USERS: Resource = Resource::new(ROUTE);

pub const DELETE_FAILED: &str = "Cannot delete this user.";
