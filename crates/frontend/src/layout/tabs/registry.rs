//! Tab content registry: the single mapping from tab key to page view.

use crate::dashboards::d400_overview::OverviewDashboard;
use crate::domain::a001_department::ui::list::DepartmentList;
use crate::domain::a002_employee::ui::list::EmployeeList;
use crate::domain::a003_category::ui::list::CategoryList;
use crate::domain::a004_unit::ui::list::UnitList;
use crate::domain::a005_supplier::ui::list::SupplierList;
use crate::domain::a006_item::ui::list::ItemList;
use crate::domain::a007_item_asset::ui::list::ItemAssetList;
use crate::domain::a008_asset_assignment::ui::list::AssetAssignmentList;
use crate::domain::a009_inventory_stock::ui::list::InventoryStockList;
use crate::domain::a010_stock_receival::ui::list::StockReceivalList;
use crate::domain::a011_stock_issuance::ui::list::StockIssuanceList;
use crate::system::account::ui::AccountSettingsPage;
use crate::system::auth::guard::RequirePermission;
use crate::system::users::ui::list::UsersListPage;
use leptos::logging::log;
use leptos::prelude::*;

pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "dashboard" => view! { <OverviewDashboard /> }.into_any(),
        "account" => view! { <AccountSettingsPage /> }.into_any(),

        "departments" => view! {
            <RequirePermission key="departments"><DepartmentList /></RequirePermission>
        }
        .into_any(),
        "employees" => view! {
            <RequirePermission key="employees"><EmployeeList /></RequirePermission>
        }
        .into_any(),
        "categories" => view! {
            <RequirePermission key="categories"><CategoryList /></RequirePermission>
        }
        .into_any(),
        "units" => view! {
            <RequirePermission key="units"><UnitList /></RequirePermission>
        }
        .into_any(),
        "suppliers" => view! {
            <RequirePermission key="suppliers"><SupplierList /></RequirePermission>
        }
        .into_any(),
        "items" => view! {
            <RequirePermission key="items"><ItemList /></RequirePermission>
        }
        .into_any(),
        "item-assets" => view! {
            <RequirePermission key="item-assets"><ItemAssetList /></RequirePermission>
        }
        .into_any(),
        "asset-assignments" => view! {
            <RequirePermission key="asset-assignments"><AssetAssignmentList /></RequirePermission>
        }
        .into_any(),
        "inventory-stocks" => view! {
            <RequirePermission key="inventory-stocks"><InventoryStockList /></RequirePermission>
        }
        .into_any(),
        "stock-receivals" => view! {
            <RequirePermission key="stock-receivals"><StockReceivalList /></RequirePermission>
        }
        .into_any(),
        "stock-issuances" => view! {
            <RequirePermission key="stock-issuances"><StockIssuanceList /></RequirePermission>
        }
        .into_any(),
        "users" => view! { <UsersListPage /> }.into_any(),

        _ => {
            log!("Unknown tab key: '{}'", key);
            view! {
                <div class="page">
                    <div class="page__content">
                        <p class="page__empty">"This page does not exist."</p>
                    </div>
                </div>
            }
            .into_any()
        }
    }
}
