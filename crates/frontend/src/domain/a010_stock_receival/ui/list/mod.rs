pub mod state;

use contracts::domain::a001_department::Department;
use contracts::domain::a005_supplier::Supplier;
use contracts::domain::a006_item::{options_of_type, Item, ItemType};
use contracts::domain::a010_stock_receival::StockReceivalForm;
use contracts::shared::format::{format_currency, format_date, or_dash, DateFormat};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::state::create_state;
use crate::domain::a001_department::api::DEPARTMENTS;
use crate::domain::a005_supplier::api::SUPPLIERS;
use crate::domain::a006_item::api::ITEMS;
use crate::domain::a010_stock_receival::api::STOCK_RECEIVALS;
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::components::{
    FilterBar, FormModal, PageHeader, PaginationControls, TableEmptyRow,
};
use crate::shared::date_utils::today;
use crate::shared::forms::{field, submit, Failure, FormErrors, GENERIC_ERROR};
use crate::shared::icons::icon;
use crate::shared::list_state::{load_options, ListController};
use crate::shared::notify::use_notifier;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

/// Incoming deliveries. Saving one increments the receiving department's stock.
#[component]
#[allow(non_snake_case)]
pub fn StockReceivalList() -> impl IntoView {
    let list = ListController::new(create_state(), |_, _| true);
    let notifier = use_notifier();
    let items = RwSignal::new(Vec::<Item>::new());
    let departments = RwSignal::new(Vec::<Department>::new());
    let suppliers = RwSignal::new(Vec::<Supplier>::new());

    let creating = RwSignal::new(false);
    let form = RwSignal::new(StockReceivalForm::new(""));
    let errors = FormErrors::new();
    let saving = RwSignal::new(false);

    Effect::new(move |_| {
        list.load_once(STOCK_RECEIVALS);
        load_options(ITEMS, items);
        load_options(DEPARTMENTS, departments);
        load_options(SUPPLIERS, suppliers);
    });

    let open_create = move || {
        form.set(StockReceivalForm::new(&today()));
        errors.clear();
        creating.set(true);
    };

    let save = Callback::new(move |_| {
        let payload = form.with_untracked(StockReceivalForm::to_payload);
        saving.set(true);
        spawn_local(async move {
            let request = STOCK_RECEIVALS.store(&payload);
            let success = "Stock receival recorded. Stock updated.".to_string();
            if submit(request, errors, notifier, success, Failure::ServerOr(GENERIC_ERROR)).await {
                creating.set(false);
                list.load(STOCK_RECEIVALS);
            }
            saving.set(false);
        });
    });

    view! {
        <PageFrame page_id="stock_receivals--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Stock Receivals"
                subtitle="Record incoming consumable stock (automatically updates stock levels)"
            >
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_create()>
                    {icon("plus")}
                    "Record Receival"
                </Button>
            </PageHeader>

            <FilterBar
                search=list.search()
                on_search=Callback::new(move |q| list.set_search(q))
                placeholder="Search by item, reference no., or supplier…"
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
                            <TableHeaderCell resizable=false>"Unit Cost"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Supplier"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Ref No."</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Received"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=160.0>"Notes"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let rows = list.items();
                            if rows.is_empty() {
                                return view! { <TableEmptyRow colspan=8 loading=list.loading /> }.into_any();
                            }
                            rows.into_iter().map(|row| {
                                let item = or_dash(row.item_name());
                                let department = or_dash(row.department.as_ref().map(|d| d.name.as_str()));
                                let quantity = row.quantity_label();
                                let unit_cost = format_currency(row.unit_cost);
                                let supplier = or_dash(row.supplier_name());
                                let reference = or_dash(row.reference_no.as_deref());
                                let received = format_date(row.received_at.as_deref(), DateFormat::Long);
                                let notes = or_dash(row.notes.as_deref());
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{item}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{department}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{quantity}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{unit_cost}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{supplier}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{reference}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{received}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{notes}</TableCellLayout>
                                        </TableCell>
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

            <Show when=move || creating.get()>
                {move || {
                    let (item_id, set_item_id) = field(form, |f| f.item_id.clone(), |f, v| f.item_id = v);
                    let (department_id, set_department_id) =
                        field(form, |f| f.department_id.clone(), |f, v| f.department_id = v);
                    let (quantity, set_quantity) =
                        field(form, |f| f.quantity.clone(), |f, v| f.quantity = v);
                    let (unit_cost, set_unit_cost) =
                        field(form, |f| f.unit_cost.clone(), |f, v| f.unit_cost = v);
                    let (supplier_id, set_supplier_id) =
                        field(form, |f| f.supplier_id.clone(), |f, v| f.supplier_id = v);
                    let (reference, set_reference) =
                        field(form, |f| f.reference_no.clone(), |f, v| f.reference_no = v);
                    let (received_at, set_received_at) =
                        field(form, |f| f.received_at.clone(), |f, v| f.received_at = v);
                    let (notes, set_notes) = field(form, |f| f.notes.clone(), |f, v| f.notes = v);
                    let item_options = Signal::derive(move || {
                        items.with(|i| options_of_type(i, ItemType::Consumable))
                    });
                    let department_options = Signal::derive(move || {
                        departments.with(|d| d.iter().map(Department::option).collect::<Vec<_>>())
                    });
                    let supplier_options = Signal::derive(move || {
                        suppliers.with(|s| s.iter().map(Supplier::option).collect::<Vec<_>>())
                    });
                    view! {
                        <FormModal
                            title="Record Stock Receival"
                            submit_label=Signal::derive(move || {
                                let label = if saving.get() { "Saving..." } else { "Save & Update Stock" };
                                label.to_string()
                            })
                            busy=saving
                            on_submit=save
                            on_close=Callback::new(move |_| creating.set(false))
                            wide=true
                        >
                            <div class="form__grid form__grid--2">
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
                                    label="Receiving Department"
                                    value=department_id
                                    on_change=set_department_id
                                    options=department_options
                                    placeholder="Select..."
                                    required=true
                                    error=errors.field("department_id")
                                />
                            </div>
                            <div class="form__grid form__grid--2">
                                <Input
                                    label="Quantity"
                                    input_type="number"
                                    min="0"
                                    value=quantity
                                    on_input=set_quantity
                                    required=true
                                    error=errors.field("quantity")
                                />
                                <Input
                                    label="Unit Cost (PHP)"
                                    input_type="number"
                                    step="0.01"
                                    min="0"
                                    value=unit_cost
                                    on_input=set_unit_cost
                                    error=errors.field("unit_cost")
                                />
                            </div>
                            <div class="form__grid form__grid--2">
                                <Select
                                    label="Supplier"
                                    value=supplier_id
                                    on_change=set_supplier_id
                                    options=supplier_options
                                    placeholder="None"
                                    error=errors.field("supplier_id")
                                />
                                <Input
                                    label="Reference No."
                                    value=reference
                                    on_input=set_reference
                                    error=errors.field("reference_no")
                                />
                            </div>
                            <Input
                                label="Date Received"
                                input_type="date"
                                value=received_at
                                on_input=set_received_at
                                required=true
                                error=errors.field("received_at")
                            />
                            <Textarea label="Notes" value=notes on_input=set_notes error=errors.field("notes") />
                        </FormModal>
                    }
                }}
            </Show>
        </PageFrame>
    }
}
