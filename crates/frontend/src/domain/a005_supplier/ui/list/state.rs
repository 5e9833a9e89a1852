use contracts::domain::a005_supplier::Supplier;
use leptos::prelude::*;

use crate::shared::list_state::ListState;

pub fn create_state() -> RwSignal<ListState<Supplier>> {
    RwSignal::new(ListState::default())
}
