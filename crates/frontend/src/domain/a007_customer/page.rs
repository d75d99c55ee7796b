use contracts::domain::a007_customer::Customer;
use contracts::domain::common::{none_if_empty, TableRecord};
use leptos::prelude::*;

use crate::shared::components::data_table::{Column, DataTable, FilterSpec};
use crate::shared::components::form_modal::FormModal;
use crate::shared::components::ui::{fmt_opt_f64, NumberField, SelectField, TextField};
use crate::shared::crud::CrudController;
use crate::shared::list_utils::distinct_by;

#[component]
pub fn CustomersPage() -> impl IntoView {
    let ctrl = CrudController::<Customer>::new();
    ctrl.fetch_all();

    let columns = vec![
        Column::<Customer>::new("customer_code", "Code"),
        Column::new("company_name", "Company"),
        Column::new("contact_person", "Contact"),
        Column::new("email", "Email"),
        Column::new("phone", "Phone"),
        Column::new("customer_type", "Type"),
        Column::with("credit_limit", "Credit Limit", |value, _| match value.as_f64() {
            Some(limit) => format!("${limit:.0}"),
            None => "-".to_string(),
        }),
        Column::new("sales_representative", "Sales Rep"),
        Column::new("status", "Status"),
    ];

    let rows = ctrl.rows;
    let customer_types = Signal::derive(move || {
        distinct_by(&rows.get(), |c: &Customer| c.customer_type.as_deref())
    });

    let form = ctrl.form;
    let editing_id = ctrl.editing_id;
    let title = Signal::derive(move || {
        if editing_id.get().is_some() {
            format!("Edit {}", Customer::entity_name())
        } else {
            format!("Add {}", Customer::entity_name())
        }
    });

    let type_options = Signal::derive(|| {
        vec![
            ("distributor".to_string(), "Distributor".to_string()),
            ("retailer".to_string(), "Retailer".to_string()),
            ("manufacturer".to_string(), "Manufacturer".to_string()),
            ("end_user".to_string(), "End User".to_string()),
        ]
    });
    let status_options = Signal::derive(|| {
        vec![
            ("active".to_string(), "Active".to_string()),
            ("prospect".to_string(), "Prospect".to_string()),
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
                filter=FilterSpec { key: "customer_type", label: "Types", options: customer_types }
                page_size=10
                can_edit=ctrl.can_edit()
                on_add=Callback::new(move |_: ()| ctrl_add.open_form(None))
                on_edit=Callback::new(move |customer: Customer| ctrl_edit.open_form(Some(&customer)))
                on_delete=Callback::new(move |id: String| ctrl_delete.remove(id))
                add_label="Add Customer"
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
                    label="Customer Code"
                    value=Signal::derive(move || form.get().customer_code)
                    on_input=Callback::new(move |v: String| form.update(|f| f.customer_code = v))
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
                <NumberField
                    label="Credit Limit"
                    value=Signal::derive(move || fmt_opt_f64(form.get().credit_limit))
                    on_input=Callback::new(move |v: String| form.update(|f| f.credit_limit = v.parse().ok()))
                    step="0.01"
                />
                <TextField
                    label="Tax ID"
                    value=Signal::derive(move || form.get().tax_id.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.tax_id = none_if_empty(v)))
                />
                <SelectField
                    label="Customer Type"
                    value=Signal::derive(move || form.get().customer_type.unwrap_or_default())
                    on_change=Callback::new(move |v: String| form.update(|f| f.customer_type = none_if_empty(v)))
                    options=type_options
                    empty_option="Select Type"
                />
                <TextField
                    label="Sales Representative"
                    value=Signal::derive(move || form.get().sales_representative.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.sales_representative = none_if_empty(v)))
                />
                <SelectField
                    label="Status"
                    value=Signal::derive(move || form.get().status)
                    on_change=Callback::new(move |v: String| form.update(|f| f.status = v))
                    options=status_options
                />
            </FormModal>
        </div>
    }
}
