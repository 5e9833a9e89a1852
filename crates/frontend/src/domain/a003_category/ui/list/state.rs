use contracts::domain::a003_category::{Category, LevelFilter};
use leptos::prelude::*;

use crate::shared::list_state::ListState;

pub type CategoryListState = ListState<Category, LevelFilter>;

pub fn create_state() -> RwSignal<CategoryListState> {
    RwSignal::new(CategoryListState::default())
}
