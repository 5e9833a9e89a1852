pub mod state;

use contracts::domain::a005_supplier::{Supplier, SupplierForm, ADDRESS_PREVIEW_LEN};
use contracts::shared::format::{or_dash, truncate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::state::create_state;
use crate::domain::a005_supplier::api::{DELETE_FAILED, SUPPLIERS};
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

const NOUN: &str = "Supplier";

#[component]
#[allow(non_snake_case)]
pub fn SupplierList() -> impl IntoView {
    let list = ListController::new(create_state(), |_, _| true);
    let notifier = use_notifier();

    let editor = RwSignal::new(None::<FormMode>);
    let form = RwSignal::new(SupplierForm::default());
    let errors = FormErrors::new();
    let saving = RwSignal::new(false);
    let deleting = RwSignal::new(None::<Supplier>);
    let delete_busy = RwSignal::new(false);

    Effect::new(move |_| list.load_once(SUPPLIERS));

    let open_editor = move |mode: FormMode, initial: SupplierForm| {
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
            let request = SUPPLIERS.save(mode.id(), &payload);
            if submit(request, errors, notifier, mode.success(NOUN), Failure::Fixed(GENERIC_ERROR)).await {
                editor.set(None);
                list.load(SUPPLIERS);
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
            let request = SUPPLIERS.destroy(row.id);
            if perform(request, notifier, format!("{} deleted.", NOUN), Failure::Fixed(DELETE_FAILED)).await {
                deleting.set(None);
                list.load(SUPPLIERS);
            }
            delete_busy.set(false);
        });
    });

    view! {
        <PageFrame page_id="suppliers--list" category=PAGE_CAT_LIST>
            <PageHeader title="Suppliers" subtitle="Manage vendor/supplier records">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| open_editor(FormMode::Create, SupplierForm::default())
                >
                    {icon("plus")}
                    "Add Supplier"
                </Button>
            </PageHeader>

            <FilterBar
                search=list.search()
                on_search=Callback::new(move |q| list.set_search(q))
                placeholder="Search by name, contact, email, or phone…"
            />

            {move || list.error.get().map(|err| view! {
                <div class="alert alert--error">{err}</div>
            })}

            <div class="table-wrapper">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false>"Name"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Contact"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Email"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Phone"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=200.0>"Address"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Modified By"</TableHeaderCell>
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
                                let initial = SupplierForm::from(&row);
                                let address = truncate(row.address.as_deref(), ADDRESS_PREVIEW_LEN);
                                let contact = or_dash(row.contact_person.as_deref());
                                let email = or_dash(row.email.as_deref());
                                let phone = or_dash(row.phone.as_deref());
                                let modified_by = or_dash(row.modified_by.as_deref());
                                let for_delete = row.clone();
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{row.name}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{contact}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{email}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{phone}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{address}</TableCellLayout>
                                        </TableCell>
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
                let (contact, set_contact) =
                    field(form, |f| f.contact_person.clone(), |f, v| f.contact_person = v);
                let (phone, set_phone) = field(form, |f| f.phone.clone(), |f, v| f.phone = v);
                let (email, set_email) = field(form, |f| f.email.clone(), |f, v| f.email = v);
                let (address, set_address) = field(form, |f| f.address.clone(), |f, v| f.address = v);
                view! {
                    <FormModal
                        title=mode.title(NOUN)
                        submit_label=Signal::derive(move || mode.submit_label(saving.get()).to_string())
                        busy=saving
                        on_submit=save
                        on_close=Callback::new(move |_| editor.set(None))
                    >
                        <Input
                            label="Supplier Name"
                            value=name
                            on_input=set_name
                            required=true
                            error=errors.field("name")
                        />
                        <div class="form__grid form__grid--2">
                            <Input
                                label="Contact Person"
                                value=contact
                                on_input=set_contact
                                error=errors.field("contact_person")
                            />
                            <Input label="Phone" value=phone on_input=set_phone error=errors.field("phone") />
                        </div>
                        <Input
                            label="Email"
                            input_type="email"
                            value=email
                            on_input=set_email
                            error=errors.field("email")
                        />
                        <Textarea
                            label="Address"
                            value=address
                            on_input=set_address
                            error=errors.field("address")
                        />
                    </FormModal>
                }
            })}

            {move || deleting.get().map(|row| view! {
                <ConfirmDialog
                    message=format!("Delete supplier \"{}\"?", row.name)
                    busy=delete_busy
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |_| deleting.set(None))
                />
            })}
        </PageFrame>
    }
}
