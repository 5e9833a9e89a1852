use contracts::domain::a011_stock_issuance::StockIssuance;
use leptos::prelude::*;

use crate::shared::list_state::ListState;

pub type StockIssuanceListState = ListState<StockIssuance>;

pub fn create_state() -> RwSignal<StockIssuanceListState> {
    RwSignal::new(StockIssuanceListState::default())
}
