use contracts::domain::a006_item::{Item, TypeFilter};
use leptos::prelude::*;

use crate::shared::list_state::ListState;

pub type ItemListState = ListState<Item, TypeFilter>;

pub fn create_state() -> RwSignal<ItemListState> {
    RwSignal::new(ItemListState::default())
}
