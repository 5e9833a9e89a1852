pub mod state;

use contracts::domain::a003_category::Category;
use contracts::domain::a004_unit::Unit;
use contracts::domain::a006_item::{Item, ItemForm, ItemType, TypeFilter};
use contracts::shared::format::or_dash;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::state::create_state;
use crate::domain::a003_category::api::CATEGORIES;
use crate::domain::a004_unit::api::UNITS;
use crate::domain::a006_item::api::{DELETE_FAILED, ITEMS};
use crate::shared::components::ui::{Input, Select, StatusBadge, Textarea};
use crate::shared::components::{
    ConfirmDialog, FilterBar, FormModal, PageHeader, PaginationControls, RowActions,
    TableEmptyRow,
};
use crate::shared::forms::{field, perform, submit, Failure, FormErrors, FormMode, GENERIC_ERROR};
use crate::shared::icons::icon;
use crate::shared::list_state::{load_options, ListController};
use crate::shared::notify::use_notifier;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::context::use_auth;

const NOUN: &str = "Item";

#[component]
#[allow(non_snake_case)]
pub fn ItemList() -> impl IntoView {
    let list = ListController::new(create_state(), TypeFilter::matches);
    let notifier = use_notifier();
    let (auth_state, _) = use_auth();
    let is_admin = Memo::new(move |_| auth_state.with(|s| s.is_admin()));
    let item_type = RwSignal::new(String::new());
    let categories = RwSignal::new(Vec::<Category>::new());
    let units = RwSignal::new(Vec::<Unit>::new());

    let editor = RwSignal::new(None::<FormMode>);
    let form = RwSignal::new(ItemForm::default());
    let errors = FormErrors::new();
    let saving = RwSignal::new(false);
    let deleting = RwSignal::new(None::<Item>);
    let delete_busy = RwSignal::new(false);

    Effect::new(move |_| {
        list.load_once(ITEMS);
        load_options(CATEGORIES, categories);
        load_options(UNITS, units);
    });

    let open_editor = move |mode: FormMode, initial: ItemForm| {
        form.set(initial);
        errors.clear();
        editor.set(Some(mode));
    };

    let save = Callback::new(move |_| {
        let Some(mode) = editor.get_untracked() else {
            return;
        };
        let payload = form.with_untracked(ItemForm::to_payload);
        saving.set(true);
        spawn_local(async move {
            let request = ITEMS.save(mode.id(), &payload);
            if submit(request, errors, notifier, mode.success(NOUN), Failure::Fixed(GENERIC_ERROR)).await {
                editor.set(None);
                list.load(ITEMS);
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
            let request = ITEMS.destroy(row.id);
            if perform(request, notifier, format!("{} deleted.", NOUN), Failure::Fixed(DELETE_FAILED)).await {
                deleting.set(None);
                list.load(ITEMS);
            }
            delete_busy.set(false);
        });
    });

    view! {
        <PageFrame page_id="items--list" category=PAGE_CAT_LIST>
            <PageHeader title="Items" subtitle="Manage fixed-asset and consumable item definitions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| open_editor(FormMode::Create, ItemForm::default())
                >
                    {icon("plus")}
                    "Add Item"
                </Button>
            </PageHeader>

            <FilterBar
                search=list.search()
                on_search=Callback::new(move |q| list.set_search(q))
                placeholder="Search by name or brand…"
                filter=Signal::derive(move || Some(item_type.get()))
                filter_options=TypeFilter::options()
                on_filter=Callback::new(move |value: String| {
                    list.set_filter(TypeFilter::parse(&value));
                    item_type.set(value);
                })
            />

            {move || list.error.get().map(|err| view! {
                <div class="alert alert--error">{err}</div>
            })}

            <div class="table-wrapper">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false>"Category"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Brand"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Model"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Name"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=180.0>"Specifications"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Item Type"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Stock/Units"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Unit"</TableHeaderCell>
                            <Show when=move || is_admin.get()>
                                <TableHeaderCell resizable=false>"Department"</TableHeaderCell>
                            </Show>
                            <TableHeaderCell resizable=false>"Modified By"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=100.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let rows = list.items();
                            let admin = is_admin.get();
                            if rows.is_empty() {
                                let colspan = if admin { 11 } else { 10 };
                                return view! { <TableEmptyRow colspan=colspan loading=list.loading /> }.into_any();
                            }
                            rows.into_iter().map(|row| {
                                let mode = FormMode::Edit(row.id);
                                let initial = ItemForm::from(&row);
                                let category = or_dash(row.category.as_ref().map(|c| c.name.as_str()));
                                let brand = or_dash(row.brand.as_deref());
                                let model = or_dash(row.model.as_deref());
                                let specifications = row.specifications_text();
                                let stock = row.stock_summary();
                                let unit = or_dash(row.unit_abbreviation());
                                let department = or_dash(row.department.as_ref().map(|d| d.name.as_str()));
                                let modified_by = or_dash(row.modified_by.as_deref());
                                let for_delete = row.clone();
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{category}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{brand}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{model}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{row.name}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{specifications}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <StatusBadge status=row.item_type.as_str() />
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{stock}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{unit}</TableCellLayout></TableCell>
                                        {admin.then(|| view! {
                                            <TableCell><TableCellLayout>{department}</TableCellLayout></TableCell>
                                        })}
                                        <TableCell><TableCellLayout>{modified_by}</TableCellLayout></TableCell>
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
                let (category_id, set_category_id) =
                    field(form, |f| f.category_id.clone(), |f, v| f.category_id = v);
                let (unit_id, set_unit_id) = field(form, |f| f.unit_id.clone(), |f, v| f.unit_id = v);
                let (kind, set_kind) = field(
                    form,
                    |f| f.item_type.as_str().to_string(),
                    |f, v| f.item_type = ItemType::parse(&v),
                );
                let (brand, set_brand) = field(form, |f| f.brand.clone(), |f, v| f.brand = v);
                let (model, set_model) = field(form, |f| f.model.clone(), |f, v| f.model = v);
                let (min_stock, set_min_stock) =
                    field(form, |f| f.min_stock_level.clone(), |f, v| f.min_stock_level = v);
                let (description, set_description) =
                    field(form, |f| f.description.clone(), |f, v| f.description = v);
                let category_options = Signal::derive(move || {
                    categories.with(|c| c.iter().map(Category::option).collect::<Vec<_>>())
                });
                let unit_options = Signal::derive(move || {
                    units.with(|u| u.iter().map(Unit::option).collect::<Vec<_>>())
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
                        <Input
                            label="Item Name"
                            value=name
                            on_input=set_name
                            required=true
                            error=errors.field("name")
                        />
                        <div class="form__grid form__grid--2">
                            <Select
                                label="Category"
                                value=category_id
                                on_change=set_category_id
                                options=category_options
                                placeholder="Select..."
                                required=true
                                error=errors.field("category_id")
                            />
                            <Select
                                label="Unit"
                                value=unit_id
                                on_change=set_unit_id
                                options=unit_options
                                placeholder="Select..."
                                required=true
                                error=errors.field("unit_id")
                            />
                        </div>
                        <Select
                            label="Item Type"
                            value=kind
                            on_change=set_kind
                            options=ItemType::options()
                            required=true
                            disabled=mode.is_edit()
                            error=errors.field("item_type")
                        />
                        <div class="form__grid form__grid--2">
                            <Input label="Brand" value=brand on_input=set_brand error=errors.field("brand") />
                            <Input label="Model" value=model on_input=set_model error=errors.field("model") />
                        </div>
                        <Show when=move || form.with(ItemForm::shows_min_stock)>
                            <Input
                                label="Min Stock Level"
                                input_type="number"
                                value=min_stock
                                on_input=set_min_stock
                                error=errors.field("min_stock_level")
                            />
                        </Show>
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
                    message=format!("Delete item \"{}\"?", row.name)
                    busy=delete_busy
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |_| deleting.set(None))
                />
            })}
        </PageFrame>
    }
}
