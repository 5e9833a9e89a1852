use contracts::system::users::{RoleFilter, User};
use leptos::prelude::*;

use crate::shared::list_state::ListState;

pub type UsersListState = ListState<User, RoleFilter>;

pub fn create_state() -> RwSignal<UsersListState> {
    RwSignal::new(UsersListState::default())
}
