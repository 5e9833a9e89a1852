pub mod state;

use contracts::domain::a001_department::Department;
use contracts::domain::a002_employee::{Employee, EmployeeForm, StatusFilter};
use contracts::shared::format::or_dash;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::state::create_state;
use crate::domain::a001_department::api::DEPARTMENTS;
use crate::domain::a002_employee::api::{DELETE_FAILED, EMPLOYEES};
use crate::shared::components::ui::{Input, Select, StatusBadge};
use crate::shared::components::{
    ConfirmDialog, FilterBar, FormModal, PageHeader, PaginationControls, RowActions,
    TableEmptyRow,
};
use crate::shared::forms::{field, perform, submit, Failure, FormErrors, FormMode, GENERIC_ERROR};
use crate::shared::icons::icon;
use crate::shared::list_state::{load_options, ListController};
use crate::shared::notify::use_notifier;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

const NOUN: &str = "Employee";

fn status_options() -> Vec<(String, String)> {
    vec![
        ("active".to_string(), "Active".to_string()),
        ("inactive".to_string(), "Inactive".to_string()),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn EmployeeList() -> impl IntoView {
    let list = ListController::new(create_state(), StatusFilter::matches);
    let notifier = use_notifier();
    let status = RwSignal::new(String::new());
    let departments = RwSignal::new(Vec::<Department>::new());

    let editor = RwSignal::new(None::<FormMode>);
    let form = RwSignal::new(EmployeeForm::default());
    let errors = FormErrors::new();
    let saving = RwSignal::new(false);
    let deleting = RwSignal::new(None::<Employee>);
    let delete_busy = RwSignal::new(false);

    Effect::new(move |_| {
        list.load_once(EMPLOYEES);
        load_options(DEPARTMENTS, departments);
    });

    let open_editor = move |mode: FormMode, initial: EmployeeForm| {
        form.set(initial);
        errors.clear();
        editor.set(Some(mode));
    };

    let save = Callback::new(move |_| {
        let Some(mode) = editor.get_untracked() else {
            return;
        };
        let payload = form.with_untracked(EmployeeForm::to_payload);
        saving.set(true);
        spawn_local(async move {
            let request = EMPLOYEES.save(mode.id(), &payload);
            if submit(request, errors, notifier, mode.success(NOUN), Failure::Fixed(GENERIC_ERROR)).await {
                editor.set(None);
                list.load(EMPLOYEES);
            }
            saving.set(false);
        });
    });

    let confirm_delete = Callback::new(move |_| {
        let Some(row) = deleting.get_untracked() else {
            return;
        };
        delete_busy.set(true);
        spawn_local(async move {
            let request = EMPLOYEES.destroy(row.id);
            if perform(request, notifier, format!("{} deleted.", NOUN), Failure::Fixed(DELETE_FAILED)).await {
                deleting.set(None);
                list.load(EMPLOYEES);
            }
            delete_busy.set(false);
        });
    });

    view! {
        <PageFrame page_id="employees--list" category=PAGE_CAT_LIST>
            <PageHeader title="Employees" subtitle="Manage staff records per department">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| open_editor(FormMode::Create, EmployeeForm::default())
                >
                    {icon("plus")}
                    "Add Employee"
                </Button>
            </PageHeader>

            <FilterBar
                search=list.search()
                on_search=Callback::new(move |q| list.set_search(q))
                placeholder="Search by name, ID, or position…"
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
                            <TableHeaderCell resizable=false min_width=120.0>"Employee ID"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Name"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Department"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Position"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Email"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Status"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=100.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let rows = list.items();
                            if rows.is_empty() {
                                return view! { <TableEmptyRow colspan=7 loading=list.loading /> }.into_any();
                            }
                            rows.into_iter().map(|row| {
                                let mode = FormMode::Edit(row.id);
                                let initial = EmployeeForm::from(&row);
                                let name = row.display_name();
                                let department = or_dash(row.department_name());
                                let position = or_dash(row.position.as_deref());
                                let email = or_dash(row.email.as_deref());
                                let for_delete = row.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class="cell-code">{row.employee_id}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{name}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{department}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{position}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout truncate=true>{email}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout><StatusBadge status=row.status /></TableCellLayout>
                                        </TableCell>
                                        <RowActions
                                            on_edit=Callback::new(move |_| open_editor(mode, initial.clone()))
                                            on_delete=Callback::new(move |_| deleting.set(Some(for_delete.clone())))
                                        />
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
                let (employee_id, set_employee_id) =
                    field(form, |f| f.employee_id.clone(), |f, v| f.employee_id = v);
                let (department_id, set_department_id) =
                    field(form, |f| f.department_id.clone(), |f, v| f.department_id = v);
                let (first_name, set_first_name) =
                    field(form, |f| f.first_name.clone(), |f, v| f.first_name = v);
                let (last_name, set_last_name) =
                    field(form, |f| f.last_name.clone(), |f, v| f.last_name = v);
                let (position, set_position) =
                    field(form, |f| f.position.clone(), |f, v| f.position = v);
                let (status_value, set_status) = field(form, |f| f.status.clone(), |f, v| f.status = v);
                let (email, set_email) = field(form, |f| f.email.clone(), |f, v| f.email = v);
                let (phone, set_phone) = field(form, |f| f.phone.clone(), |f, v| f.phone = v);
                let department_options = Signal::derive(move || {
                    departments.with(|d| d.iter().map(Department::option).collect::<Vec<_>>())
                });
                view! {
                    <FormModal
                        title=mode.title(NOUN)
                        submit_label=Signal::derive(move || mode.submit_label(saving.get()).to_string())
                        busy=saving
                        on_submit=save
                        on_close=Callback::new(move |_| editor.set(None))
                        wide=true
                    >
                        <div class="form__grid form__grid--2">
                            <Input
                                label="Employee ID"
                                value=employee_id
                                on_input=set_employee_id
                                required=true
                                disabled=mode.is_edit()
                                error=errors.field("employee_id")
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
                                label="First Name"
                                value=first_name
                                on_input=set_first_name
                                required=true
                                error=errors.field("first_name")
                            />
                            <Input
                                label="Last Name"
                                value=last_name
                                on_input=set_last_name
                                required=true
                                error=errors.field("last_name")
                            />
                            <Input
                                label="Position"
                                value=position
                                on_input=set_position
                                error=errors.field("position")
                            />
                            <Select
                                label="Status"
                                value=status_value
                                on_change=set_status
                                options=status_options()
                                required=true
                                error=errors.field("status")
                            />
                            <Input
                                label="Email"
                                input_type="email"
                                value=email
                                on_input=set_email
                                error=errors.field("email")
                            />
                            <Input label="Phone" value=phone on_input=set_phone error=errors.field("phone") />
                        </div>
                    </FormModal>
                }
            })}

            {move || deleting.get().map(|row| view! {
                <ConfirmDialog
                    message=format!("Delete employee \"{} {}\"?", row.first_name, row.last_name)
                    busy=delete_busy
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |_| deleting.set(None))
                />
            })}
        </PageFrame>
    }
}
