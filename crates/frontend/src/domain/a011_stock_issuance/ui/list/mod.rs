pub mod state;

use contracts::domain::a001_department::Department;
use contracts::domain::a002_employee::Employee;
use contracts::domain::a006_item::{options_of_type, Item, ItemType};
use contracts::domain::a011_stock_issuance::StockIssuanceForm;
use contracts::domain::common::PartyKind;
use contracts::shared::format::{format_date, or_dash, DateFormat};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::state::create_state;
use crate::domain::a001_department::api::DEPARTMENTS;
use crate::domain::a002_employee::api::EMPLOYEES;
use crate::domain::a006_item::api::ITEMS;
use crate::domain::a011_stock_issuance::api::{ISSUE_FAILED, STOCK_ISSUANCES};
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::components::{
    FilterBar, FormModal, PageHeader, PaginationControls, TableEmptyRow,
};
use crate::shared::date_utils::today;
use crate::shared::forms::{field, submit, Failure, FormErrors};
use crate::shared::icons::icon;
use crate::shared::list_state::{load_options, ListController};
use crate::shared::notify::use_notifier;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

/// Outgoing stock. The server rejects an issuance larger than the source stock.
#[component]
#[allow(non_snake_case)]
pub fn StockIssuanceList() -> impl IntoView {
    let list = ListController::new(create_state(), |_, _| true);
    let notifier = use_notifier();
    let items = RwSignal::new(Vec::<Item>::new());
    let departments = RwSignal::new(Vec::<Department>::new());
    let employees = RwSignal::new(Vec::<Employee>::new());

    let creating = RwSignal::new(false);
    let form = RwSignal::new(StockIssuanceForm::new(""));
    let errors = FormErrors::new();
    let saving = RwSignal::new(false);

    Effect::new(move |_| {
        list.load_once(STOCK_ISSUANCES);
        load_options(ITEMS, items);
        load_options(DEPARTMENTS, departments);
        load_options(EMPLOYEES, employees);
    });

    let open_create = move || {
        form.set(StockIssuanceForm::new(&today()));
        errors.clear();
        creating.set(true);
    };

    let save = Callback::new(move |_| {
        let payload = form.with_untracked(StockIssuanceForm::to_payload);
        saving.set(true);
        spawn_local(async move {
            let request = STOCK_ISSUANCES.store(&payload);
            let success = "Stock issued. Stock decremented.".to_string();
            if submit(request, errors, notifier, success, Failure::ServerOr(ISSUE_FAILED)).await {
                creating.set(false);
                list.load(STOCK_ISSUANCES);
            }
            saving.set(false);
        });
    });

    view! {
        <PageFrame page_id="stock_issuances--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Stock Issuances"
                subtitle="Record consumable stock issued to employees or departments"
            >
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_create()>
                    {icon("plus")}
                    "Record Issuance"
                </Button>
            </PageHeader>

            <FilterBar
                search=list.search()
                on_search=Callback::new(move |q| list.set_search(q))
                placeholder="Search by item name or issued to…"
            />

            {move || list.error.get().map(|err| view! {
                <div class="alert alert--error">{err}</div>
            })}

            <div class="table-wrapper">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false>"Item"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"From Dept."</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Issued To"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Type"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Quantity"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Issued"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=160.0>"Purpose"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let rows = list.items();
                            if rows.is_empty() {
                                return view! { <TableEmptyRow colspan=7 loading=list.loading /> }.into_any();
                            }
                            rows.into_iter().map(|row| {
                                let item = or_dash(row.item_name());
                                let from = or_dash(row.from_department_name());
                                let issued_to = row.issued_to();
                                let kind = row.issued_to_kind().label();
                                let quantity = row.quantity_label();
                                let issued = format_date(row.issued_at.as_deref(), DateFormat::Long);
                                let purpose = or_dash(row.purpose.as_deref());
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{item}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{from}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{issued_to}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{kind}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{quantity}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{issued}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{purpose}</TableCellLayout>
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
                    let (from_id, set_from_id) = field(
                        form,
                        |f| f.from_department_id.clone(),
                        |f, v| f.from_department_id = v,
                    );
                    let (kind, set_kind) = field(
                        form,
                        |f| f.issuable_type.as_str().to_string(),
                        |f, v| f.set_issuable_type(PartyKind::parse(&v)),
                    );
                    let (target, set_target) =
                        field(form, |f| f.issuable_id.clone(), |f, v| f.issuable_id = v);
                    let (quantity, set_quantity) =
                        field(form, |f| f.quantity.clone(), |f, v| f.quantity = v);
                    let (issued_at, set_issued_at) =
                        field(form, |f| f.issued_at.clone(), |f, v| f.issued_at = v);
                    let (purpose, set_purpose) = field(form, |f| f.purpose.clone(), |f, v| f.purpose = v);
                    let (notes, set_notes) = field(form, |f| f.notes.clone(), |f, v| f.notes = v);
                    let target_kind = Memo::new(move |_| form.with(|f| f.issuable_type));
                    let target_label = Signal::derive(move || Some(target_kind.get().label().to_string()));
                    let item_options = Signal::derive(move || {
                        items.with(|i| options_of_type(i, ItemType::Consumable))
                    });
                    let department_options = Signal::derive(move || {
                        departments.with(|d| d.iter().map(Department::option).collect::<Vec<_>>())
                    });
                    let target_options = Signal::derive(move || match target_kind.get() {
                        PartyKind::Employee => {
                            employees.with(|e| e.iter().map(Employee::option).collect::<Vec<_>>())
                        }
                        PartyKind::Department => department_options.get(),
                    });
                    view! {
                        <FormModal
                            title="Record Stock Issuance"
                            submit_label=Signal::derive(move || {
                                let label = if saving.get() { "Saving..." } else { "Save & Decrement Stock" };
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
                                    label="From Department"
                                    value=from_id
                                    on_change=set_from_id
                                    options=department_options
                                    placeholder="Select..."
                                    required=true
                                    error=errors.field("from_department_id")
                                />
                            </div>
                            <div class="form__grid form__grid--2">
                                <Select
                                    label="Issue To"
                                    value=kind
                                    on_change=set_kind
                                    options=PartyKind::options()
                                    required=true
                                />
                                <Select
                                    label=target_label
                                    value=target
                                    on_change=set_target
                                    options=target_options
                                    placeholder="Select..."
                                    required=true
                                    error=errors.field("issuable_id")
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
                                    label="Date Issued"
                                    input_type="date"
                                    value=issued_at
                                    on_input=set_issued_at
                                    required=true
                                    error=errors.field("issued_at")
                                />
                            </div>
                            <Input label="Purpose" value=purpose on_input=set_purpose error=errors.field("purpose") />
                            <Textarea label="Notes" value=notes on_input=set_notes error=errors.field("notes") />
                        </FormModal>
                    }
                }}
            </Show>
        </PageFrame>
    }
}
