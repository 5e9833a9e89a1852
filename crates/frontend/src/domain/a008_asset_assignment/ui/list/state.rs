use contracts::domain::a008_asset_assignment::{AssetAssignment, StatusFilter};
use leptos::prelude::*;

use crate::shared::list_state::ListState;

pub type AssetAssignmentListState = ListState<AssetAssignment, StatusFilter>;

pub fn create_state() -> RwSignal<AssetAssignmentListState> {
    RwSignal::new(AssetAssignmentListState::default())
}
