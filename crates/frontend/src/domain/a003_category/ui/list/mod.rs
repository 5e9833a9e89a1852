pub mod state;

use contracts::domain::a003_category::{parent_options, Category, CategoryForm, LevelFilter};
use contracts::shared::format::or_dash;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::state::create_state;
use crate::domain::a003_category::api::{CATEGORIES, DELETE_FAILED};
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::components::{
    ConfirmDialog, FilterBar, FormModal, PageHeader, PaginationControls, RowActions,
    TableEmptyRow,
};
use crate::shared::forms::{field, perform, submit, Failure, FormErrors, FormMode, GENERIC_ERROR};
use crate::shared::icons::icon;
use crate::shared::list_state::ListController;
use crate::shared::notify::use_notifier;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

const NOUN: &str = "Category";

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let list = ListController::new(create_state(), LevelFilter::matches);
    let notifier = use_notifier();
    let level = RwSignal::new(String::new());

    let editor = RwSignal::new(None::<FormMode>);
    let form = RwSignal::new(CategoryForm::default());
    let errors = FormErrors::new();
    let saving = RwSignal::new(false);
    let deleting = RwSignal::new(None::<Category>);
    let delete_busy = RwSignal::new(false);

    Effect::new(move |_| list.load_once(CATEGORIES));

    let open_editor = move |mode: FormMode, initial: CategoryForm| {
        form.set(initial);
        errors.clear();
        editor.set(Some(mode));
    };

    let save = Callback::new(move |_| {
        let Some(mode) = editor.get_untracked() else {
            return;
        };
        let payload = form.with_untracked(CategoryForm::to_payload);
        saving.set(true);
        spawn_local(async move {
            let request = CATEGORIES.save(mode.id(), &payload);
            if submit(request, errors, notifier, mode.success(NOUN), Failure::Fixed(GENERIC_ERROR)).await {
                editor.set(None);
                list.load(CATEGORIES);
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
            let request = CATEGORIES.destroy(row.id);
            if perform(request, notifier, format!("{} deleted.", NOUN), Failure::Fixed(DELETE_FAILED)).await {
                deleting.set(None);
                list.load(CATEGORIES);
            }
            delete_busy.set(false);
        });
    });

    view! {
        <PageFrame page_id="categories--list" category=PAGE_CAT_LIST>
            <PageHeader title="Categories" subtitle="Hierarchical item categories">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| open_editor(FormMode::Create, CategoryForm::default())
                >
                    {icon("plus")}
                    "Add Category"
                </Button>
            </PageHeader>

            <FilterBar
                search=list.search()
                on_search=Callback::new(move |q| list.set_search(q))
                placeholder="Search by name or code…"
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
                            <TableHeaderCell resizable=false>"Name"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Code"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Parent"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=80.0>"Sub-cats"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=80.0>"Items"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=100.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let rows = list.items();
                            if rows.is_empty() {
                                return view! { <TableEmptyRow colspan=6 loading=list.loading /> }.into_any();
                            }
                            rows.into_iter().map(|row| {
                                let mode = FormMode::Edit(row.id);
                                let initial = CategoryForm::from(&row);
                                let code = or_dash(row.code.as_deref());
                                let parent = or_dash(row.parent_name());
                                let for_delete = row.clone();
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{row.name}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout><span class="cell-code">{code}</span></TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{parent}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout>{row.children_count.unwrap_or(0)}</TableCellLayout>
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
                let (code, set_code) = field(form, |f| f.code.clone(), |f, v| f.code = v);
                let (parent_id, set_parent_id) =
                    field(form, |f| f.parent_id.clone(), |f, v| f.parent_id = v);
                let (description, set_description) =
                    field(form, |f| f.description.clone(), |f, v| f.description = v);
                let parents = Signal::derive(move || {
                    list.all_rows.with(|rows| parent_options(rows, mode.id()))
                });
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
                        <div class="form__grid form__grid--2">
                            <Input label="Code" value=code on_input=set_code error=errors.field("code") />
                            <Select
                                label="Parent Category"
                                value=parent_id
                                on_change=set_parent_id
                                options=parents
                                error=errors.field("parent_id")
                            />
                        </div>
                        <Textarea
                            label="Description"
                            value=description
                            on_input=set_description
                            error=errors.field("description")
                        />
                    </FormModal>
                }
            })}

            {move || deleting.get().map(|row| view! {
                <ConfirmDialog
                    message=format!("Delete category \"{}\"?", row.name)
                    busy=delete_busy
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |_| deleting.set(None))
                />
            })}
        </PageFrame>
    }
}
