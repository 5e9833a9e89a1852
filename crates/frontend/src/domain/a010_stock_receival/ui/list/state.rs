use contracts::domain::a010_stock_receival::StockReceival;
use leptos::prelude::*;

use crate::shared::list_state::ListState;

pub type StockReceivalListState = ListState<StockReceival>;

pub fn create_state() -> RwSignal<StockReceivalListState> {
    RwSignal::new(StockReceivalListState::default())
}
