mod state;

use contracts::domain::a001_department::Department;
use contracts::shared::format::or_dash;
use contracts::shared::status::tone_for;
use contracts::system::auth::UserType;
use contracts::system::permissions::PERMISSION_GROUPS;
use contracts::system::users::{RoleFilter, User, UserForm};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_department::api::DEPARTMENTS;
use crate::shared::components::ui::{Badge, Checkbox, Input, Select};
use crate::shared::components::{
    ConfirmDialog, FilterBar, FormModal, PageHeader, PaginationControls, RowActions,
    TableEmptyRow,
};
use crate::shared::forms::{field, perform, submit, Failure, FormErrors, FormMode, GENERIC_ERROR};
use crate::shared::icons::icon;
use crate::shared::list_state::{load_options, ListController};
use crate::shared::notify::use_notifier;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use crate::shared::password::generate_strong_password;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequireAdmin;
use crate::system::users::api::{DELETE_FAILED, USERS};
use state::create_state;

const NOUN: &str = "User";

fn role_options() -> Vec<(String, String)> {
    [UserType::SystemAdministrator, UserType::Employee]
        .iter()
        .map(|t| (t.as_str().to_string(), t.badge_label().to_string()))
        .collect()
}

/// User administration. Nothing is fetched unless the viewer is an administrator.
#[component]
pub fn UsersListPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <UsersList />
        </RequireAdmin>
    }
}

#[component]
#[allow(non_snake_case)]
fn UsersList() -> impl IntoView {
    let list = ListController::new(create_state(), RoleFilter::matches);
    let notifier = use_notifier();
    let (auth_state, _) = use_auth();
    let own_id = Memo::new(move |_| auth_state.with(|s| s.user.as_ref().map(|u| u.id)));
    let role = RwSignal::new(String::new());
    let departments = RwSignal::new(Vec::<Department>::new());

    let editor = RwSignal::new(None::<FormMode>);
    let form = RwSignal::new(UserForm::default());
    let errors = FormErrors::new();
    let saving = RwSignal::new(false);
    let deleting = RwSignal::new(None::<User>);
    let delete_busy = RwSignal::new(false);

    Effect::new(move |_| {
        list.load_once(USERS);
        load_options(DEPARTMENTS, departments);
    });

    let open_editor = move |mode: FormMode, initial: UserForm| {
        form.set(initial);
        errors.clear();
        editor.set(Some(mode));
    };

    let save = Callback::new(move |_| {
        let Some(mode) = editor.get_untracked() else {
            return;
        };
        let payload = form.with_untracked(UserForm::to_payload);
        saving.set(true);
        spawn_local(async move {
            let request = USERS.save(mode.id(), &payload);
            if submit(request, errors, notifier, mode.success(NOUN), Failure::ServerOr(GENERIC_ERROR)).await {
                editor.set(None);
                list.load(USERS);
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
            let request = USERS.destroy(row.id);
            if perform(request, notifier, format!("{} deleted.", NOUN), Failure::ServerOr(DELETE_FAILED)).await {
                deleting.set(None);
                list.load(USERS);
            }
            delete_busy.set(false);
        });
    });

    view! {
        <PageFrame page_id="sys_users--list" category=PAGE_CAT_SYSTEM>
            <PageHeader title="User Accounts" subtitle="Manage system users and their access roles">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| open_editor(FormMode::Create, UserForm::default())
                >
                    {icon("plus")}
                    "Add User"
                </Button>
            </PageHeader>

            <FilterBar
                search=list.search()
                on_search=Callback::new(move |q| list.set_search(q))
                placeholder="Search by name or email…"
                filter=Signal::derive(move || Some(role.get()))
                filter_options=RoleFilter::options()
                on_filter=Callback::new(move |value: String| {
                    list.set_filter(RoleFilter::parse(&value));
                    role.set(value);
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
                            <TableHeaderCell resizable=false>"Email"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Role"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Department"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=100.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let rows = list.items();
                            if rows.is_empty() {
                                return view! { <TableEmptyRow colspan=5 loading=list.loading /> }.into_any();
                            }
                            let own = own_id.get();
                            rows.into_iter().map(|row| {
                                let mode = FormMode::Edit(row.id);
                                let initial = UserForm::from(&row);
                                let is_self = own == Some(row.id);
                                let tone = tone_for(row.user_type.as_str());
                                let role_label = row.user_type.badge_label();
                                let permissions = (row.user_type == UserType::Employee)
                                    .then(|| row.permission_summary());
                                let department = or_dash(row.department_name());
                                let delete_title =
                                    if is_self { "Cannot delete own account" } else { "Delete user" };
                                let for_delete = row.clone();
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{row.name}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class="text-muted">{row.email}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <div class="user-role">
                                                    <Badge tone=tone>{role_label}</Badge>
                                                    {permissions.map(|p| view! {
                                                        <span class="user-role__permissions">{p}</span>
                                                    })}
                                                </div>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{department}</TableCellLayout></TableCell>
                                        <RowActions
                                            on_edit=Callback::new(move |_| open_editor(mode, initial.clone()))
                                            on_delete=Callback::new(move |_| deleting.set(Some(for_delete.clone())))
                                            delete_disabled=is_self
                                            delete_title=delete_title
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
                let editing = mode.is_edit();
                let (name, set_name) = field(form, |f| f.name.clone(), |f, v| f.name = v);
                let (email, set_email) = field(form, |f| f.email.clone(), |f, v| f.email = v);
                let (user_type, set_user_type) = field(
                    form,
                    |f| f.user_type.as_str().to_string(),
                    |f, v| f.set_user_type(UserType::parse(&v)),
                );
                let (department_id, set_department_id) =
                    field(form, |f| f.department_id.clone(), |f, v| f.department_id = v);
                let (password, set_password) =
                    field(form, |f| f.password.clone(), |f, v| f.password = v);
                let (confirmation, set_confirmation) = field(
                    form,
                    |f| f.password_confirmation.clone(),
                    |f, v| f.password_confirmation = v,
                );
                let is_employee = Memo::new(move |_| form.with(UserForm::is_employee));
                let department_options = Signal::derive(move || {
                    departments.with(|d| d.iter().map(Department::option).collect::<Vec<_>>())
                });
                let generate = move |_| {
                    let generated = generate_strong_password();
                    form.update(|f| {
                        f.password = generated.clone();
                        f.password_confirmation = generated;
                    });
                };
                let title = if editing { "Edit User Account" } else { "Add User Account" };
                let password_label = if editing { "New Password" } else { "Password" };
                let password_required = !editing;
                view! {
                    <FormModal
                        title=title
                        submit_label=Signal::derive(move || {
                            let label = match (editing, saving.get()) {
                                (_, true) => "Saving...",
                                (true, false) => "Update User",
                                (false, false) => "Create User",
                            };
                            label.to_string()
                        })
                        busy=saving
                        on_submit=save
                        on_close=Callback::new(move |_| editor.set(None))
                        wide=true
                    >
                        <Input
                            label="Full Name"
                            value=name
                            on_input=set_name
                            placeholder="Juan dela Cruz"
                            required=true
                            error=errors.field("name")
                        />
                        <Input
                            label="Email Address"
                            input_type="email"
                            value=email
                            on_input=set_email
                            placeholder="user@example.com"
                            required=true
                            error=errors.field("email")
                        />
                        <div class="form__grid form__grid--2">
                            <Select
                                label="Role"
                                value=user_type
                                on_change=set_user_type
                                options=role_options()
                                required=true
                                error=errors.field("user_type")
                            />
                            <Select
                                label="Department"
                                value=department_id
                                on_change=set_department_id
                                options=department_options
                                placeholder="Select department…"
                                disabled=Signal::derive(move || Some(!is_employee.get()))
                                error=errors.field("department_id")
                            />
                        </div>
                        <div class="form__section">
                            {editing.then(|| view! {
                                <p class="form__hint">"Leave password fields blank to keep the current password."</p>
                            })}
                            <div class="form__grid form__grid--2">
                                <Input
                                    label=password_label
                                    input_type="password"
                                    value=password
                                    on_input=set_password
                                    placeholder="••••••••"
                                    required=password_required
                                    autocomplete="new-password"
                                    error=errors.field("password")
                                />
                                <Input
                                    label="Confirm Password"
                                    input_type="password"
                                    value=confirmation
                                    on_input=set_confirmation
                                    placeholder="••••••••"
                                    required=password_required
                                    autocomplete="new-password"
                                    error=errors.field("password_confirmation")
                                />
                            </div>
                            <Button size=ButtonSize::Small on_click=generate>
                                {icon("key")}
                                "Generate"
                            </Button>
                        </div>
                        <Show when=move || is_employee.get()>
                            <div class="form__section">
                                <p class="form__section-title">"Access Permissions"</p>
                                {PERMISSION_GROUPS.iter().map(|group| view! {
                                    <div class="permission-group">
                                        <p class="permission-group__label">{group.label}</p>
                                        <div class="form__grid form__grid--2">
                                            {group.items.iter().map(|item| {
                                                let key = item.key;
                                                view! {
                                                    <Checkbox
                                                        label=item.label
                                                        checked=Signal::derive(move || form.with(|f| f.has_permission(key)))
                                                        on_change=Callback::new(move |checked: bool| {
                                                            form.update(|f| f.toggle_permission(key, checked))
                                                        })
                                                    />
                                                }
                                            }).collect_view()}
                                        </div>
                                    </div>
                                }).collect_view()}
                            </div>
                        </Show>
                    </FormModal>
                }
            })}

            {move || deleting.get().map(|row| view! {
                <ConfirmDialog
                    title="Delete User Account"
                    message=format!(
                        "Permanently delete \"{}\" ({})? This action cannot be undone.",
                        row.name,
                        row.email,
                    )
                    busy=delete_busy
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |_| deleting.set(None))
                />
            })}
        </PageFrame>
    }
}
