use contracts::domain::a002_employee::{Employee, StatusFilter};
use leptos::prelude::*;

use crate::shared::list_state::ListState;

pub type EmployeeListState = ListState<Employee, StatusFilter>;

pub fn create_state() -> RwSignal<EmployeeListState> {
    RwSignal::new(EmployeeListState::default())
}
