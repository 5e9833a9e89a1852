use contracts::domain::a007_item_asset::{ItemAsset, StatusFilter};
use leptos::prelude::*;

use crate::shared::list_state::ListState;

pub type ItemAssetListState = ListState<ItemAsset, StatusFilter>;

pub fn create_state() -> RwSignal<ItemAssetListState> {
    RwSignal::new(ItemAssetListState::default())
}
