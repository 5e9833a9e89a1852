pub mod state;

use contracts::domain::a001_department::{Department, DepartmentForm};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::state::create_state;
use crate::domain::a001_department::api::{DELETE_FAILED, DEPARTMENTS};
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::components::{
    ConfirmDialog, FilterBar, FormModal, PageHeader, PaginationControls, RowActions,
    TableEmptyRow,
};
use crate::shared::forms::{field, perform, submit, Failure, FormErrors, FormMode, GENERIC_ERROR};
use crate::shared::icons::icon;
use crate::shared::list_state::ListController;
use crate::shared::notify::use_notifier;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

const NOUN: &str = "Department";

#[component]
#[allow(non_snake_case)]
pub fn DepartmentList() -> impl IntoView {
    let list = ListController::new(create_state(), |_, _| true);
    let notifier = use_notifier();

    let editor = RwSignal::new(None::<FormMode>);
    let form = RwSignal::new(DepartmentForm::default());
    let errors = FormErrors::new();
    let saving = RwSignal::new(false);

    let deleting = RwSignal::new(None::<Department>);
    let delete_busy = RwSignal::new(false);

    Effect::new(move |_| list.load_once(DEPARTMENTS));

    let open_create = move || {
        form.set(DepartmentForm::default());
        errors.clear();
        editor.set(Some(FormMode::Create));
    };

    let open_edit = move |row: &Department| {
        form.set(DepartmentForm::from(row));
        errors.clear();
        editor.set(Some(FormMode::Edit(row.id)));
    };

    let save = Callback::new(move |_| {
        let Some(mode) = editor.get_untracked() else {
            return;
        };
        let payload = form.get_untracked();
        saving.set(true);
        spawn_local(async move {
            let saved = submit(
                DEPARTMENTS.save(mode.id(), &payload),
                errors,
                notifier,
                mode.success(NOUN),
                Failure::Fixed(GENERIC_ERROR),
            )
            .await;
            saving.set(false);
            if saved {
                editor.set(None);
                list.load(DEPARTMENTS);
            }
        });
    });

    let confirm_delete = Callback::new(move |_| {
        let Some(row) = deleting.get_untracked() else {
            return;
        };
        delete_busy.set(true);
        spawn_local(async move {
            let deleted = perform(
                DEPARTMENTS.destroy(row.id),
                notifier,
                format!("{} deleted.", NOUN),
                Failure::Fixed(DELETE_FAILED),
            )
            .await;
            delete_busy.set(false);
            if deleted {
                deleting.set(None);
                list.load(DEPARTMENTS);
            }
        });
    });

    view! {
        <PageFrame page_id="departments--list" category=PAGE_CAT_LIST>
            <PageHeader title="Departments" subtitle="Manage organizational departments">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_create()>
                    {icon("plus")}
                    "Add Department"
                </Button>
            </PageHeader>

            <FilterBar
                search=list.search()
                on_search=Callback::new(move |q| list.set_search(q))
                placeholder="Search by name or code…"
            />

            {move || list.error.get().map(|err| view! {
                <div class="alert alert--error">{err}</div>
            })}

            <div class="table-wrapper">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false min_width=120.0>"Code"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Name"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=100.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let rows = list.items();
                            if rows.is_empty() {
                                return view! { <TableEmptyRow colspan=3 loading=list.loading /> }.into_any();
                            }
                            rows.into_iter().map(|row| {
                                let for_edit = row.clone();
                                let for_delete = row.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class="cell-code">{row.code}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{row.name}</TableCellLayout>
                                        </TableCell>
                                        <RowActions
                                            on_edit=Callback::new(move |_| open_edit(&for_edit))
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
                let (name, set_name) = field(form, |f| f.name.clone(), |f, v| f.name = v);
                let (code, set_code) = field(form, |f| f.code.clone(), |f, v| f.code = v);
                let (description, set_description) =
                    field(form, |f| f.description.clone(), |f, v| f.description = v);
                view! {
                    <FormModal
                        title=mode.title(NOUN)
                        submit_label=Signal::derive(move || mode.submit_label(saving.get()).to_string())
                        busy=saving
                        on_submit=save
                        on_close=Callback::new(move |_| editor.set(None))
                    >
                        <Input
                            label="Name"
                            value=name
                            on_input=set_name
                            required=true
                            error=errors.field("name")
                        />
                        <Input
                            label="Code"
                            value=code
                            on_input=set_code
                            required=true
                            placeholder="e.g. NOD"
                            error=errors.field("code")
                        />
                        <Textarea
                            label="Description"
                            value=description
                            on_input=set_description
                            rows=3
                            error=errors.field("description")
                        />
                    </FormModal>
                }
            })}

            {move || deleting.get().map(|row| view! {
                <ConfirmDialog
                    message=format!("Delete department \"{}\"?", row.name)
                    busy=delete_busy
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |_| deleting.set(None))
                />
            })}
        </PageFrame>
    }
}
