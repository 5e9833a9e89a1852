pub mod state;

use contracts::domain::a004_unit::{Unit, UnitForm};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::state::create_state;
use crate::domain::a004_unit::api::{DELETE_FAILED, UNITS};
use crate::shared::components::ui::Input;
use crate::shared::components::{
    ConfirmDialog, FilterBar, FormModal, PageHeader, PaginationControls, RowActions,
    TableEmptyRow,
};
use crate::shared::forms::{field, perform, submit, Failure, FormErrors, FormMode, GENERIC_ERROR};
use crate::shared::icons::icon;
use crate::shared::list_state::ListController;
use crate::shared::notify::use_notifier;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

const NOUN: &str = "Unit";

#[component]
#[allow(non_snake_case)]
pub fn UnitList() -> impl IntoView {
    let list = ListController::new(create_state(), |_, _| true);
    let notifier = use_notifier();

    let editor = RwSignal::new(None::<FormMode>);
    let form = RwSignal::new(UnitForm::default());
    let errors = FormErrors::new();
    let saving = RwSignal::new(false);
    let deleting = RwSignal::new(None::<Unit>);
    let delete_busy = RwSignal::new(false);

    Effect::new(move |_| list.load_once(UNITS));

    let open_editor = move |mode: FormMode, initial: UnitForm| {
        form.set(initial);
        errors.clear();
        editor.set(Some(mode));
    };

    let save = Callback::new(move |_| {
        let Some(mode) = editor.get_untracked() else {
            return;
        };
        let payload = form.get_untracked();
        saving.set(true);
        spawn_local(async move {
            let request = UNITS.save(mode.id(), &payload);
            if submit(request, errors, notifier, mode.success(NOUN), Failure::Fixed(GENERIC_ERROR)).await {
                editor.set(None);
                list.load(UNITS);
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
            let request = UNITS.destroy(row.id);
            if perform(request, notifier, format!("{} deleted.", NOUN), Failure::Fixed(DELETE_FAILED)).await {
                deleting.set(None);
                list.load(UNITS);
            }
            delete_busy.set(false);
        });
    });

    view! {
        <PageFrame page_id="units--list" category=PAGE_CAT_LIST>
            <PageHeader title="Units of Measure" subtitle="Manage measurement units used in items">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| open_editor(FormMode::Create, UnitForm::default())
                >
                    {icon("plus")}
                    "Add Unit"
                </Button>
            </PageHeader>

            <FilterBar
                search=list.search()
                on_search=Callback::new(move |q| list.set_search(q))
                placeholder="Search by name or abbreviation…"
            />

            {move || list.error.get().map(|err| view! {
                <div class="alert alert--error">{err}</div>
            })}

            <div class="table-wrapper">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false>"Name"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Abbreviation"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=80.0>"Items"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=100.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let rows = list.items();
                            if rows.is_empty() {
                                return view! { <TableEmptyRow colspan=4 loading=list.loading /> }.into_any();
                            }
                            rows.into_iter().map(|row| {
                                let mode = FormMode::Edit(row.id);
                                let initial = UnitForm::from(&row);
                                let for_delete = row.clone();
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{row.name}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class="cell-code">{row.abbreviation}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{row.items_count.unwrap_or(0)}</TableCellLayout>
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
                let (name, set_name) = field(form, |f| f.name.clone(), |f, v| f.name = v);
                let (abbreviation, set_abbreviation) =
                    field(form, |f| f.abbreviation.clone(), |f, v| f.abbreviation = v);
                view! {
                    <FormModal
                        title=mode.title(NOUN)
                        submit_label=Signal::derive(move || mode.submit_label(saving.get()).to_string())
                        busy=saving
                        on_submit=save
                        on_close=Callback::new(move |_| editor.set(None))
                    >
                        <div class="form__grid form__grid--2">
                            <Input
                                label="Name"
                                value=name
                                on_input=set_name
                                required=true
                                placeholder="e.g. Kilogram"
                                error=errors.field("name")
                            />
                            <Input
                                label="Abbreviation"
                                value=abbreviation
                                on_input=set_abbreviation
                                required=true
                                placeholder="e.g. kg"
                                error=errors.field("abbreviation")
                            />
                        </div>
                    </FormModal>
                }
            })}

            {move || deleting.get().map(|row| view! {
                <ConfirmDialog
                    message=format!("Delete unit \"{}\"?", row.name)
                    busy=delete_busy
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |_| deleting.set(None))
                />
            })}
        </PageFrame>
    }
}
