pub mod state;

use contracts::domain::a001_department::Department;
use contracts::domain::a002_employee::Employee;
use contracts::domain::a006_item::{options_of_type, Item, ItemType};
use contracts::domain::a007_item_asset::{
    AssignForm, ItemAsset, ItemAssetForm, ReturnForm, StatusFilter, ASSIGN_ACTION, RETURN_ACTION,
};
use contracts::domain::common::{condition_options, PartyKind};
use contracts::shared::format::{format_currency, or_dash};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::state::create_state;
use crate::domain::a001_department::api::DEPARTMENTS;
use crate::domain::a002_employee::api::EMPLOYEES;
use crate::domain::a006_item::api::ITEMS;
use crate::domain::a007_item_asset::api::{
    ASSIGN_FAILED, DELETE_FAILED, ITEM_ASSETS, RETURN_FAILED,
};
use crate::shared::components::ui::{Input, Select, StatusBadge, Textarea};
use crate::shared::components::{
    ConfirmDialog, FilterBar, FormModal, PageHeader, PaginationControls, RowActions,
    TableEmptyRow,
};
use crate::shared::date_utils::today;
use crate::shared::forms::{field, perform, submit, Failure, FormErrors, FormMode, GENERIC_ERROR};
use crate::shared::icons::icon;
use crate::shared::list_state::{load_options, ListController};
use crate::shared::notify::use_notifier;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

const NOUN: &str = "Asset";

#[component]
#[allow(non_snake_case)]
pub fn ItemAssetList() -> impl IntoView {
    let list = ListController::new(create_state(), StatusFilter::matches);
    let notifier = use_notifier();
    let status = RwSignal::new(String::new());
    let items = RwSignal::new(Vec::<Item>::new());
    let departments = RwSignal::new(Vec::<Department>::new());
    let employees = RwSignal::new(Vec::<Employee>::new());

    let editor = RwSignal::new(None::<FormMode>);
    let form = RwSignal::new(ItemAssetForm::default());
    let errors = FormErrors::new();
    let saving = RwSignal::new(false);
    let deleting = RwSignal::new(None::<ItemAsset>);
    let delete_busy = RwSignal::new(false);

    // Assign and return act on one asset at a time and share the busy flag.
    let assigning = RwSignal::new(None::<ItemAsset>);
    let assign_form = RwSignal::new(AssignForm::new(""));
    let returning = RwSignal::new(None::<ItemAsset>);
    let return_form = RwSignal::new(ReturnForm::new(""));
    let action_errors = FormErrors::new();
    let action_busy = RwSignal::new(false);

    Effect::new(move |_| {
        list.load_once(ITEM_ASSETS);
        load_options(ITEMS, items);
        load_options(DEPARTMENTS, departments);
        load_options(EMPLOYEES, employees);
    });

    let open_editor = move |mode: FormMode, initial: ItemAssetForm| {
        form.set(initial);
        errors.clear();
        editor.set(Some(mode));
    };

    let open_assign = move |asset: ItemAsset| {
        assign_form.set(AssignForm::new(&today()));
        action_errors.clear();
        assigning.set(Some(asset));
    };

    let open_return = move |asset: ItemAsset| {
        return_form.set(ReturnForm::new(&today()));
        action_errors.clear();
        returning.set(Some(asset));
    };

    let save = Callback::new(move |_| {
        let Some(mode) = editor.get_untracked() else {
            return;
        };
        let payload = form.with_untracked(ItemAssetForm::to_payload);
        saving.set(true);
        spawn_local(async move {
            let request = ITEM_ASSETS.save(mode.id(), &payload);
            if submit(request, errors, notifier, mode.success(NOUN), Failure::Fixed(GENERIC_ERROR)).await {
                editor.set(None);
                list.load(ITEM_ASSETS);
            }
            saving.set(false);
        });
    });

    let confirm_assign = Callback::new(move |_| {
        let Some(asset) = assigning.get_untracked() else {
            return;
        };
        let payload = assign_form.with_untracked(AssignForm::to_payload);
        action_busy.set(true);
        spawn_local(async move {
            let request = ITEM_ASSETS.action(asset.id, ASSIGN_ACTION, &payload);
            let success = "Asset assigned successfully.".to_string();
            if submit(request, action_errors, notifier, success, Failure::Fixed(ASSIGN_FAILED)).await {
                assigning.set(None);
                list.load(ITEM_ASSETS);
            }
            action_busy.set(false);
        });
    });

    let confirm_return = Callback::new(move |_| {
        let Some(asset) = returning.get_untracked() else {
            return;
        };
        let payload = return_form.with_untracked(ReturnForm::to_payload);
        action_busy.set(true);
        spawn_local(async move {
            let request = ITEM_ASSETS.action(asset.id, RETURN_ACTION, &payload);
            let success = "Asset returned.".to_string();
            if submit(request, action_errors, notifier, success, Failure::Fixed(RETURN_FAILED)).await {
                returning.set(None);
                list.load(ITEM_ASSETS);
            }
            action_busy.set(false);
        });
    });

    let confirm_delete = Callback::new(move |_| {
        let Some(row) = deleting.get_untracked() else {
            return;
        };
        delete_busy.set(true);
        spawn_local(async move {
            let request = ITEM_ASSETS.destroy(row.id);
            if perform(request, notifier, format!("{} deleted.", NOUN), Failure::Fixed(DELETE_FAILED)).await {
                deleting.set(None);
                list.load(ITEM_ASSETS);
            }
            delete_busy.set(false);
        });
    });

    view! {
        <PageFrame page_id="item_assets--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Fixed Assets"
                subtitle="Manage physical fixed-asset units with unique item codes"
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| open_editor(FormMode::Create, ItemAssetForm::default())
                >
                    {icon("plus")}
                    "Add Asset"
                </Button>
            </PageHeader>

            <FilterBar
                search=list.search()
                on_search=Callback::new(move |q| list.set_search(q))
                placeholder="Search by code, item name, or serial…"
                filter=Signal::derive(move || Some(status.get()))
                filter_options=StatusFilter::options()
                on_filter=Callback::new(move |value: String| {
                    list.set_filter(StatusFilter::parse(&value));
                    status.set(value);
                })
            />

            {move || list.error.get().map(|err| view! {
                <div class="alert alert--error">{err}</div>
            })}

            <div class="table-wrapper">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false>"Item Code"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Item"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Dept."</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Condition"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Status"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Value"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Modified By"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=180.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let rows = list.items();
                            if rows.is_empty() {
                                return view! { <TableEmptyRow colspan=8 loading=list.loading /> }.into_any();
                            }
                            rows.into_iter().map(|row| {
                                let mode = FormMode::Edit(row.id);
                                let initial = ItemAssetForm::from(&row);
                                let item = or_dash(row.item_name());
                                let department = or_dash(row.department_name());
                                let value = format_currency(row.purchase_price);
                                let modified_by = or_dash(row.modified_by.as_deref());
                                let for_assign = row.can_assign().then(|| row.clone());
                                let for_return = row.can_return().then(|| row.clone());
                                let for_delete = row.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout><code>{row.item_code}</code></TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{item}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{department}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout><StatusBadge status=row.condition /></TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout><StatusBadge status=row.status /></TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{value}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{modified_by}</TableCellLayout></TableCell>
                                        <RowActions
                                            on_edit=Callback::new(move |_| open_editor(mode, initial.clone()))
                                            on_delete=Callback::new(move |_| deleting.set(Some(for_delete.clone())))
                                        >
                                            {for_assign.map(|asset| view! {
                                                <Button
                                                    size=ButtonSize::Small
                                                    on_click=move |_| open_assign(asset.clone())
                                                >
                                                    {icon("user-check")}
                                                    "Assign"
                                                </Button>
                                            })}
                                            {for_return.map(|asset| view! {
                                                <Button
                                                    size=ButtonSize::Small
                                                    on_click=move |_| open_return(asset.clone())
                                                >
                                                    {icon("undo")}
                                                    "Return"
                                                </Button>
                                            })}
                                        </RowActions>
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

            {move || editor.get().map(|mode| {
                let (item_id, set_item_id) = field(form, |f| f.item_id.clone(), |f, v| f.item_id = v);
                let (item_code, set_item_code) =
                    field(form, |f| f.item_code.clone(), |f, v| f.item_code = v);
                let (serial, set_serial) =
                    field(form, |f| f.serial_number.clone(), |f, v| f.serial_number = v);
                let (condition, set_condition) =
                    field(form, |f| f.condition.clone(), |f, v| f.condition = v);
                let (purchase_date, set_purchase_date) =
                    field(form, |f| f.purchase_date.clone(), |f, v| f.purchase_date = v);
                let (purchase_price, set_purchase_price) =
                    field(form, |f| f.purchase_price.clone(), |f, v| f.purchase_price = v);
                let (warranty, set_warranty) =
                    field(form, |f| f.warranty_expiry.clone(), |f, v| f.warranty_expiry = v);
                let (department_id, set_department_id) =
                    field(form, |f| f.department_id.clone(), |f, v| f.department_id = v);
                let (notes, set_notes) = field(form, |f| f.notes.clone(), |f, v| f.notes = v);
                let item_options = Signal::derive(move || {
                    items.with(|i| options_of_type(i, ItemType::FixedAsset))
                });
                let department_options = Signal::derive(move || {
                    departments.with(|d| d.iter().map(Department::option).collect::<Vec<_>>())
                });
                let title = if mode.is_edit() { "Edit Asset" } else { "Register Asset" };
                view! {
                    <FormModal
                        title=title
                        submit_label=Signal::derive(move || mode.submit_label(saving.get()).to_string())
                        busy=saving
                        on_submit=save
                        on_close=Callback::new(move |_| editor.set(None))
                        wide=true
                    >
                        <div class="form__grid form__grid--2">
                            <Select
                                label="Item"
                                value=item_id
                                on_change=set_item_id
                                options=item_options
                                placeholder="Select..."
                                required=true
                                disabled=mode.is_edit()
                                error=errors.field("item_id")
                            />
                            <Input
                                label="Item Code"
                                value=item_code
                                on_input=set_item_code
                                placeholder="e.g. NOD-LAP-001"
                                required=true
                                disabled=mode.is_edit()
                                error=errors.field("item_code")
                            />
                        </div>
                        <div class="form__grid form__grid--2">
                            <Input
                                label="Serial Number"
                                value=serial
                                on_input=set_serial
                                error=errors.field("serial_number")
                            />
                            <Select
                                label="Condition"
                                value=condition
                                on_change=set_condition
                                options=condition_options()
                                required=true
                                error=errors.field("condition")
                            />
                        </div>
                        <div class="form__grid form__grid--2">
                            <Input
                                label="Purchase Date"
                                input_type="date"
                                value=purchase_date
                                on_input=set_purchase_date
                                error=errors.field("purchase_date")
                            />
                            <Input
                                label="Purchase Price"
                                input_type="number"
                                step="0.01"
                                min="0"
                                value=purchase_price
                                on_input=set_purchase_price
                                error=errors.field("purchase_price")
                            />
                        </div>
                        <div class="form__grid form__grid--2">
                            <Input
                                label="Warranty Expiry"
                                input_type="date"
                                value=warranty
                                on_input=set_warranty
                                error=errors.field("warranty_expiry")
                            />
                            <Select
                                label="Department"
                                value=department_id
                                on_change=set_department_id
                                options=department_options
                                placeholder="None"
                                error=errors.field("department_id")
                            />
                        </div>
                        <Textarea label="Notes" value=notes on_input=set_notes error=errors.field("notes") />
                    </FormModal>
                }
            })}

            {move || assigning.get().map(|asset| {
                let (kind, set_kind) = field(
                    assign_form,
                    |f| f.assignable_type.as_str().to_string(),
                    |f, v| f.set_assignable_type(PartyKind::parse(&v)),
                );
                let (target, set_target) =
                    field(assign_form, |f| f.assignable_id.clone(), |f, v| f.assignable_id = v);
                let (assigned_at, set_assigned_at) =
                    field(assign_form, |f| f.assigned_at.clone(), |f, v| f.assigned_at = v);
                let (expected, set_expected) = field(
                    assign_form,
                    |f| f.expected_return_date.clone(),
                    |f, v| f.expected_return_date = v,
                );
                let (condition, set_condition) = field(
                    assign_form,
                    |f| f.condition_on_assign.clone(),
                    |f, v| f.condition_on_assign = v,
                );
                let (purpose, set_purpose) =
                    field(assign_form, |f| f.purpose.clone(), |f, v| f.purpose = v);
                let (notes, set_notes) = field(assign_form, |f| f.notes.clone(), |f, v| f.notes = v);
                let target_kind = Memo::new(move |_| assign_form.with(|f| f.assignable_type));
                let target_label = Signal::derive(move || Some(target_kind.get().label().to_string()));
                let target_options = Signal::derive(move || match target_kind.get() {
                    PartyKind::Employee => {
                        employees.with(|e| e.iter().map(Employee::option).collect::<Vec<_>>())
                    }
                    PartyKind::Department => {
                        departments.with(|d| d.iter().map(Department::option).collect::<Vec<_>>())
                    }
                });
                view! {
                    <FormModal
                        title=format!("Assign: {}", asset.item_code)
                        submit_label=Signal::derive(move || {
                            let label = if action_busy.get() { "Assigning..." } else { "Assign" };
                            label.to_string()
                        })
                        busy=action_busy
                        on_submit=confirm_assign
                        on_close=Callback::new(move |_| assigning.set(None))
                    >
                        <Select
                            label="Assign To"
                            value=kind
                            on_change=set_kind
                            options=PartyKind::options()
                            required=true
                            error=action_errors.field("assignable_type")
                        />
                        <Select
                            label=target_label
                            value=target
                            on_change=set_target
                            options=target_options
                            placeholder="Select..."
                            required=true
                            error=action_errors.field("assignable_id")
                        />
                        <div class="form__grid form__grid--2">
                            <Input
                                label="Assigned Date"
                                input_type="date"
                                value=assigned_at
                                on_input=set_assigned_at
                                required=true
                                error=action_errors.field("assigned_at")
                            />
                            <Input
                                label="Expected Return"
                                input_type="date"
                                value=expected
                                on_input=set_expected
                                error=action_errors.field("expected_return_date")
                            />
                        </div>
                        <Select
                            label="Condition on Assign"
                            value=condition
                            on_change=set_condition
                            options=condition_options()
                            required=true
                            error=action_errors.field("condition_on_assign")
                        />
                        <Input label="Purpose" value=purpose on_input=set_purpose error=action_errors.field("purpose") />
                        <Textarea label="Notes" value=notes on_input=set_notes error=action_errors.field("notes") />
                    </FormModal>
                }
            })}

            {move || returning.get().map(|asset| {
                let (returned_at, set_returned_at) =
                    field(return_form, |f| f.returned_at.clone(), |f, v| f.returned_at = v);
                let (condition, set_condition) = field(
                    return_form,
                    |f| f.condition_on_return.clone(),
                    |f, v| f.condition_on_return = v,
                );
                let (notes, set_notes) = field(return_form, |f| f.notes.clone(), |f, v| f.notes = v);
                view! {
                    <FormModal
                        title=format!("Return: {}", asset.item_code)
                        submit_label=Signal::derive(move || {
                            let label = if action_busy.get() { "Returning..." } else { "Confirm Return" };
                            label.to_string()
                        })
                        busy=action_busy
                        on_submit=confirm_return
                        on_close=Callback::new(move |_| returning.set(None))
                    >
                        <Input
                            label="Return Date"
                            input_type="date"
                            value=returned_at
                            on_input=set_returned_at
                            required=true
                            error=action_errors.field("returned_at")
                        />
                        <Select
                            label="Condition on Return"
                            value=condition
                            on_change=set_condition
                            options=condition_options()
                            required=true
                            error=action_errors.field("condition_on_return")
                        />
                        <Textarea label="Notes" value=notes on_input=set_notes error=action_errors.field("notes") />
                    </FormModal>
                }
            })}

            {move || deleting.get().map(|row| view! {
                <ConfirmDialog
                    message=format!("Delete asset \"{}\"?", row.item_code)
                    busy=delete_busy
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |_| deleting.set(None))
                />
            })}
        </PageFrame>
    }
}
