use contracts::domain::a006_supplier::Supplier;
use contracts::domain::common::{none_if_empty, TableRecord};
use leptos::prelude::*;

use crate::shared::components::data_table::{Column, DataTable, FilterSpec};
use crate::shared::components::form_modal::FormModal;
use crate::shared::components::ui::{SelectField, TextAreaField, TextField};
use crate::shared::crud::CrudController;
use crate::shared::list_utils::distinct_by;

#[component]
pub fn SuppliersPage() -> impl IntoView {
    let ctrl = CrudController::<Supplier>::new();
    ctrl.fetch_all();

    let columns = vec![
        Column::<Supplier>::new("supplier_code", "Code"),
        Column::new("company_name", "Company"),
        Column::new("contact_person", "Contact"),
        Column::new("email", "Email"),
        Column::new("phone", "Phone"),
        Column::new("city", "City"),
        Column::new("country", "Country"),
        Column::new("payment_terms", "Payment Terms"),
        Column::new("status", "Status"),
    ];

    let rows = ctrl.rows;
    let statuses =
        Signal::derive(move || distinct_by(&rows.get(), |s: &Supplier| s.status.as_deref()));

    let form = ctrl.form;
    let editing_id = ctrl.editing_id;
    let title = Signal::derive(move || {
        if editing_id.get().is_some() {
            format!("Edit {}", Supplier::entity_name())
        } else {
            format!("Add {}", Supplier::entity_name())
        }
    });

    let status_options = Signal::derive(|| {
        vec![
            ("active".to_string(), "Active".to_string()),
            ("on_hold".to_string(), "On Hold".to_string()),
            ("inactive".to_string(), "Inactive".to_string()),
        ]
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
                filter=FilterSpec { key: "status", label: "Statuses", options: statuses }
                page_size=10
                can_edit=ctrl.can_edit()
                on_add=Callback::new(move |_: ()| ctrl_add.open_form(None))
                on_edit=Callback::new(move |supplier: Supplier| ctrl_edit.open_form(Some(&supplier)))
                on_delete=Callback::new(move |id: String| ctrl_delete.remove(id))
                add_label="Add Supplier"
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
                    label="Supplier Code"
                    value=Signal::derive(move || form.get().supplier_code)
                    on_input=Callback::new(move |v: String| form.update(|f| f.supplier_code = v))
                    required=true
                />
                <TextField
                    label="Company Name"
                    value=Signal::derive(move || form.get().company_name)
                    on_input=Callback::new(move |v: String| form.update(|f| f.company_name = v))
                    required=true
                />
                <TextField
                    label="Contact Person"
                    value=Signal::derive(move || form.get().contact_person.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.contact_person = none_if_empty(v)))
                />
                <TextField
                    label="Email"
                    value=Signal::derive(move || form.get().email.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.email = none_if_empty(v)))
                />
                <TextField
                    label="Phone"
                    value=Signal::derive(move || form.get().phone.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.phone = none_if_empty(v)))
                />
                <TextField
                    label="Address"
                    value=Signal::derive(move || form.get().address.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.address = none_if_empty(v)))
                />
                <TextField
                    label="City"
                    value=Signal::derive(move || form.get().city.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.city = none_if_empty(v)))
                />
                <TextField
                    label="State / Province"
                    value=Signal::derive(move || form.get().state_province.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.state_province = none_if_empty(v)))
                />
                <TextField
                    label="Postal Code"
                    value=Signal::derive(move || form.get().postal_code.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.postal_code = none_if_empty(v)))
                />
                <TextField
                    label="Country"
                    value=Signal::derive(move || form.get().country.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.country = none_if_empty(v)))
                />
                <TextField
                    label="Payment Terms"
                    value=Signal::derive(move || form.get().payment_terms.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.payment_terms = none_if_empty(v)))
                    placeholder="e.g. NET 30"
                />
                <SelectField
                    label="Status"
                    value=Signal::derive(move || form.get().status)
                    on_change=Callback::new(move |v: String| form.update(|f| f.status = v))
                    options=status_options
                />
                <TextAreaField
                    label="Notes"
                    value=Signal::derive(move || form.get().notes.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.notes = none_if_empty(v)))
                />
            </FormModal>
        </div>
    }
}
