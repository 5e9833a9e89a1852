pub mod state;

use contracts::domain::a001_department::Department;
use contracts::domain::a006_item::{options_of_type, Item, ItemType};
use contracts::domain::a009_inventory_stock::{AdjustForm, LevelFilter, ADJUST_PATH};
use contracts::shared::format::or_dash;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::state::create_state;
use crate::domain::a001_department::api::DEPARTMENTS;
use crate::domain::a006_item::api::ITEMS;
use crate::domain::a009_inventory_stock::api::INVENTORY_STOCKS;
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::components::{
    FilterBar, FormModal, PageHeader, PaginationControls, TableEmptyRow,
};
use crate::shared::forms::{field, submit, Failure, FormErrors, GENERIC_ERROR};
use crate::shared::icons::icon;
use crate::shared::list_state::{load_options, ListController};
use crate::shared::notify::use_notifier;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

#[component]
#[allow(non_snake_case)]
pub fn InventoryStockList() -> impl IntoView {
    let list = ListController::new(create_state(), LevelFilter::matches);
    let notifier = use_notifier();
    let level = RwSignal::new(String::new());
    let items = RwSignal::new(Vec::<Item>::new());
    let departments = RwSignal::new(Vec::<Department>::new());

    let adjusting = RwSignal::new(false);
    let form = RwSignal::new(AdjustForm::default());
    let errors = FormErrors::new();
    let saving = RwSignal::new(false);

    Effect::new(move |_| {
        list.load_once(INVENTORY_STOCKS);
        load_options(ITEMS, items);
        load_options(DEPARTMENTS, departments);
    });

    let open_adjust = move || {
        form.set(AdjustForm::default());
        errors.clear();
        adjusting.set(true);
    };

    let apply = Callback::new(move |_| {
        let payload = form.with_untracked(AdjustForm::to_payload);
        saving.set(true);
        spawn_local(async move {
            let request = INVENTORY_STOCKS.post(ADJUST_PATH, &payload);
            let success = "Stock adjusted.".to_string();
            if submit(request, errors, notifier, success, Failure::ServerOr(GENERIC_ERROR)).await {
                adjusting.set(false);
                list.load(INVENTORY_STOCKS);
            }
            saving.set(false);
        });
    });

    view! {
        <PageFrame page_id="inventory_stocks--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Inventory Stock Levels"
                subtitle="Consumable stock quantities per item per department"
            >
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_adjust()>
                    {icon("sliders")}
                    "Adjust Stock"
                </Button>
            </PageHeader>

            <FilterBar
                search=list.search()
                on_search=Callback::new(move |q| list.set_search(q))
                placeholder="Search by item name…"
                filter=Signal::derive(move || Some(level.get()))
                filter_options=LevelFilter::options()
                on_filter=Callback::new(move |value: String| {
                    list.set_filter(LevelFilter::parse(&value));
                    level.set(value);
                })
            />

            {move || list.error.get().map(|err| view! {
                <div class="alert alert--error">{err}</div>
            })}

            <div class="table-wrapper">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false>"Item"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Department"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Quantity"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Min Level"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Alert"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let rows = list.items();
                            if rows.is_empty() {
                                return view! { <TableEmptyRow colspan=5 loading=list.loading /> }.into_any();
                            }
                            rows.into_iter().map(|row| {
                                let item = or_dash(row.item_name());
                                let department = or_dash(row.department_name());
                                let quantity = row.quantity_label();
                                let min_level = row.min_level_label();
                                let alert = if row.is_low() {
                                    view! {
                                        <span class="stock-alert stock-alert--low">
                                            {icon("alert-triangle")}
                                            "Low Stock"
                                        </span>
                                    }.into_any()
                                } else {
                                    view! { <span class="stock-alert stock-alert--ok">"OK"</span> }.into_any()
                                };
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{item}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{department}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{quantity}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{min_level}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{alert}</TableCellLayout></TableCell>
                                    </TableRow>
                                }
                            }).collect_view().into_any()
                        }}
                    </TableBody>
                </Table>
            </div>

            <PaginationControls
                window=list.window()
                on_page_change=Callback::new(move |page| list.go_to_page(page))
            />

            <Show when=move || adjusting.get()>
                {move || {
                    let (item_id, set_item_id) = field(form, |f| f.item_id.clone(), |f, v| f.item_id = v);
                    let (department_id, set_department_id) =
                        field(form, |f| f.department_id.clone(), |f, v| f.department_id = v);
                    let (quantity, set_quantity) =
                        field(form, |f| f.quantity.clone(), |f, v| f.quantity = v);
                    let (notes, set_notes) = field(form, |f| f.notes.clone(), |f, v| f.notes = v);
                    let item_options = Signal::derive(move || {
                        items.with(|i| options_of_type(i, ItemType::Consumable))
                    });
                    let department_options = Signal::derive(move || {
                        departments.with(|d| d.iter().map(Department::option).collect::<Vec<_>>())
                    });
                    view! {
                        <FormModal
                            title="Adjust Stock"
                            submit_label=Signal::derive(move || {
                                let label = if saving.get() { "Applying..." } else { "Apply" };
                                label.to_string()
                            })
                            busy=saving
                            on_submit=apply
                            on_close=Callback::new(move |_| adjusting.set(false))
                        >
                            <Select
                                label="Item (Consumable)"
                                value=item_id
                                on_change=set_item_id
                                options=item_options
                                placeholder="Select..."
                                required=true
                                error=errors.field("item_id")
                            />
                            <Select
                                label="Department"
                                value=department_id
                                on_change=set_department_id
                                options=department_options
                                placeholder="Select..."
                                required=true
                                error=errors.field("department_id")
                            />
                            <Input
                                label="New Quantity"
                                input_type="number"
                                min="0"
                                value=quantity
                                on_input=set_quantity
                                required=true
                                error=errors.field("quantity")
                            />
                            <Textarea label="Notes" value=notes on_input=set_notes error=errors.field("notes") />
                        </FormModal>
                    }
                }}
            </Show>
        </PageFrame>
    }
}
