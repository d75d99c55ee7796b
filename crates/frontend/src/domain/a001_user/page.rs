use contracts::domain::a001_user::User;
use contracts::domain::common::{none_if_empty, TableRecord};
use leptos::prelude::*;

use crate::shared::components::data_table::{Column, DataTable, FilterSpec};
use crate::shared::components::form_modal::FormModal;
use crate::shared::components::ui::{CheckboxField, TextField};
use crate::shared::crud::CrudController;
use crate::shared::list_utils::distinct_by;

#[component]
pub fn UsersPage() -> impl IntoView {
    let ctrl = CrudController::<User>::new();
    ctrl.fetch_all();

    let columns = vec![
        Column::<User>::new("employee_id", "Employee ID"),
        Column::new("username", "Username"),
        Column::with("first_name", "Full Name", |_, user: &User| user.full_name()),
        Column::new("email", "Email"),
        Column::new("department", "Department"),
        Column::new("position", "Position"),
        Column::new("phone", "Phone"),
        Column::with("is_active", "Status", |_, user: &User| {
            if user.is_active.unwrap_or(false) { "Active".into() } else { "Inactive".into() }
        }),
    ];

    let rows = ctrl.rows;
    let departments = Signal::derive(move || {
        distinct_by(&rows.get(), |user: &User| user.department.as_deref())
    });

    let form = ctrl.form;
    let editing_id = ctrl.editing_id;
    let title = Signal::derive(move || {
        if editing_id.get().is_some() {
            format!("Edit {}", User::entity_name())
        } else {
            format!("Add {}", User::entity_name())
        }
    });

    let ctrl_add = ctrl.clone();
    let ctrl_edit = ctrl.clone();
    let ctrl_delete = ctrl.clone();
    let ctrl_close = ctrl.clone();
    let ctrl_submit = ctrl.clone();

    view! {
        <div class="page">
            <DataTable
                rows=ctrl.rows
                columns=columns
                loading=ctrl.loading
                searchable=true
                filter=FilterSpec { key: "department", label: "Departments", options: departments }
                page_size=10
                can_edit=ctrl.can_edit()
                on_add=Callback::new(move |_: ()| ctrl_add.open_form(None))
                on_edit=Callback::new(move |user: User| ctrl_edit.open_form(Some(&user)))
                on_delete=Callback::new(move |id: String| ctrl_delete.remove(id))
                add_label="Add User"
            />

            <FormModal
                open=ctrl.show_form
                title=title
                error=ctrl.form_error
                saving=ctrl.saving
                on_close=Callback::new(move |_: ()| ctrl_close.close_form())
                on_submit=Callback::new(move |_: ()| ctrl_submit.submit())
            >
                <TextField
                    label="Username"
                    value=Signal::derive(move || form.get().username)
                    on_input=Callback::new(move |v: String| form.update(|f| f.username = v))
                    required=true
                />
                <TextField
                    label="Email"
                    value=Signal::derive(move || form.get().email)
                    on_input=Callback::new(move |v: String| form.update(|f| f.email = v))
                    required=true
                />
                <TextField
                    label="First Name"
                    value=Signal::derive(move || form.get().first_name.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.first_name = none_if_empty(v)))
                />
                <TextField
                    label="Last Name"
                    value=Signal::derive(move || form.get().last_name.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.last_name = none_if_empty(v)))
                />
                <TextField
                    label="Employee ID"
                    value=Signal::derive(move || form.get().employee_id.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.employee_id = none_if_empty(v)))
                />
                <TextField
                    label="Department"
                    value=Signal::derive(move || form.get().department.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.department = none_if_empty(v)))
                />
                <TextField
                    label="Position"
                    value=Signal::derive(move || form.get().position.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.position = none_if_empty(v)))
                />
                <TextField
                    label="Phone"
                    value=Signal::derive(move || form.get().phone.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.phone = none_if_empty(v)))
                />
                <CheckboxField
                    label="Active"
                    checked=Signal::derive(move || form.get().is_active)
                    on_change=Callback::new(move |v: bool| form.update(|f| f.is_active = v))
                />
            </FormModal>
        </div>
    }
}
