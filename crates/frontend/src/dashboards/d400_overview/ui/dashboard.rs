use contracts::dashboards::d400_overview::OverviewCounts;
use contracts::domain::a001_department::Department;
use contracts::domain::a002_employee::Employee;
use contracts::domain::a006_item::Item;
use contracts::domain::a007_item_asset::ItemAsset;
use contracts::domain::a009_inventory_stock::InventoryStock;
use contracts::shared::status::Tone;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use crate::domain::a001_department::api::DEPARTMENTS;
use crate::domain::a002_employee::api::EMPLOYEES;
use crate::domain::a006_item::api::ITEMS;
use crate::domain::a007_item_asset::api::ITEM_ASSETS;
use crate::domain::a009_inventory_stock::api::INVENTORY_STOCKS;
use crate::shared::api_client::Resource;
use crate::shared::components::StatCard;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use crate::system::auth::context::use_auth;

/// A failed list counts as empty so one bad endpoint does not blank the page.
fn fetch_into<T>(resource: Resource, target: RwSignal<Option<Vec<T>>>)
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    spawn_local(async move {
        let rows = match resource.index::<T>().await {
            Ok(rows) => rows,
            Err(e) => {
                log::warn!("dashboard: {} failed: {}", resource.route(), e);
                Vec::new()
            }
        };
        target.set(Some(rows));
    });
}

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let is_admin = Memo::new(move |_| auth_state.with(|s| s.is_admin()));

    let departments = RwSignal::new(None::<Vec<Department>>);
    let employees = RwSignal::new(None::<Vec<Employee>>);
    let items = RwSignal::new(None::<Vec<Item>>);
    let assets = RwSignal::new(None::<Vec<ItemAsset>>);
    let stocks = RwSignal::new(None::<Vec<InventoryStock>>);

    Effect::new(move |_| {
        fetch_into(DEPARTMENTS, departments);
        fetch_into(EMPLOYEES, employees);
        fetch_into(ITEMS, items);
        fetch_into(ITEM_ASSETS, assets);
        fetch_into(INVENTORY_STOCKS, stocks);
    });

    // Cards show a placeholder until every list has arrived.
    let counts = Memo::new(move |_| {
        let departments = departments.with(|d| d.as_ref().map(Vec::len))?;
        let employees = employees.with(|e| e.as_ref().map(Vec::len))?;
        items.with(|items| {
            assets.with(|assets| {
                stocks.with(|stocks| {
                    Some(OverviewCounts::compute(
                        departments,
                        employees,
                        items.as_deref()?,
                        assets.as_deref()?,
                        stocks.as_deref()?,
                    ))
                })
            })
        })
    });
    let count = move |pick: fn(&OverviewCounts) -> usize| {
        Signal::derive(move || counts.get().map(|c| pick(&c)))
    };
    let low_stock_tone = Signal::derive(move || {
        if counts.get().is_some_and(|c| c.has_low_stock()) {
            Some(Tone::Error)
        } else {
            Some(Tone::Neutral)
        }
    });

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard"</h1>
                    <div class="page__subtitle">"Overview of your inventory system"</div>
                </div>
            </div>

            <div class="stat-grid">
                <Show when=move || is_admin.get()>
                    <StatCard
                        label="Departments"
                        icon_name="building"
                        value=count(|c| c.departments)
                        tone=Tone::Info
                    />
                </Show>
                <StatCard
                    label="Total Items"
                    icon_name="package"
                    value=count(|c| c.items)
                    tone=Tone::Warning
                />
                <Show when=move || is_admin.get()>
                    <StatCard
                        label="Employees"
                        icon_name="users"
                        value=count(|c| c.employees)
                        tone=Tone::Info
                    />
                </Show>
                <StatCard
                    label="Fixed Assets"
                    icon_name="monitor"
                    value=count(|c| c.fixed_asset_items)
                    tone=Tone::Warning
                    description="Registered asset types"
                />
                <StatCard
                    label="Consumable Items"
                    icon_name="layers"
                    value=count(|c| c.consumable_items)
                    tone=Tone::Info
                    description="Registered consumable types"
                />
                <StatCard
                    label="Active Assignments"
                    icon_name="clipboard"
                    value=count(|c| c.active_assignments)
                    tone=Tone::Warning
                    description="Currently assigned units"
                />
                <StatCard
                    label="Low Stock Alerts"
                    icon_name="alert-triangle"
                    value=count(|c| c.low_stock)
                    tone=low_stock_tone
                    description="Items below minimum level"
                />
            </div>
        </PageFrame>
    }
}
