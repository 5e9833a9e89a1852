use contracts::domain::a004_unit::Unit;
use leptos::prelude::*;

use crate::shared::list_state::ListState;

pub fn create_state() -> RwSignal<ListState<Unit>> {
    RwSignal::new(ListState::default())
}
