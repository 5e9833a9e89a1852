use contracts::domain::a009_inventory_stock::{InventoryStock, LevelFilter};
use leptos::prelude::*;

use crate::shared::list_state::ListState;

pub type InventoryStockListState = ListState<InventoryStock, LevelFilter>;

pub fn create_state() -> RwSignal<InventoryStockListState> {
    RwSignal::new(InventoryStockListState::default())
}
