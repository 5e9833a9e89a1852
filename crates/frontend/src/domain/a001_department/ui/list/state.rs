use contracts::domain::a001_department::Department;
use leptos::prelude::*;

use crate::shared::list_state::ListState;

pub type DepartmentListState = ListState<Department>;

pub fn create_state() -> RwSignal<DepartmentListState> {
    RwSignal::new(DepartmentListState::default())
}
