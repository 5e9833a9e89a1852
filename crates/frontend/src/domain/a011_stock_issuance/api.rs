use contracts::domain::a011_stock_issuance::ROUTE;

use crate::shared::api_client::Resource;

pub const STOCK_ISSUANCES: Resource = Resource::new(ROUTE);

/// Shown when the server rejects an issuance without a message of its own.
pub const ISSUE_FAILED: &str = "Insufficient stock or invalid request.";
