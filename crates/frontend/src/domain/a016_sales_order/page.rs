use contracts::domain::a007_customer::Customer;
use contracts::domain::a016_sales_order::SalesOrder;
use contracts::domain::common::{none_if_empty, TableRecord};
use leptos::prelude::*;

use crate::shared::components::data_table::{Column, DataTable, FilterSpec};
use crate::shared::components::form_modal::FormModal;
use crate::shared::components::ui::{fmt_opt_f64, DateField, NumberField, SelectField, TextAreaField, TextField};
use crate::shared::crud::{fetch_lookup, CrudController};
use crate::shared::date_utils::format_date;
use crate::shared::list_utils::distinct_by;

fn customer_label(customers: &[Customer], id: Option<&str>) -> String {
    customers
        .iter()
        .find(|c| Some(c.id.as_str()) == id)
        .and_then(|c| c.company_name.clone())
        .unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn SalesOrdersPage() -> impl IntoView {
    let ctrl = CrudController::<SalesOrder>::new();
    ctrl.fetch_all();

    let (customers, customers_loading) = fetch_lookup::<Customer>();
    let ctrl_loading = ctrl.loading;
    let loading = Signal::derive(move || ctrl_loading.get() || customers_loading.get());

    let columns = vec![
        Column::<SalesOrder>::new("order_number", "Order #"),
        Column::with("customer_id", "Customer", move |_, order: &SalesOrder| {
            customer_label(&customers.get(), order.customer_id.as_deref())
        }),
        Column::with("order_date", "Ordered", |value, _| format_date(value.as_str())),
        Column::with("required_date", "Required", |value, _| {
            format_date(value.as_str())
        }),
        Column::with("delivery_date", "Delivered", |value, _| {
            format_date(value.as_str())
        }),
        Column::with("total_amount", "Total", |value, order: &SalesOrder| {
            let currency = order.currency.as_deref().unwrap_or("USD");
            match value.as_f64() {
                Some(amount) => format!("{amount:.2} {currency}"),
                None => "-".to_string(),
            }
        }),
        Column::new("payment_status", "Payment"),
        Column::new("sales_person", "Sales Person"),
        Column::new("priority_level", "Priority"),
        Column::new("status", "Status"),
    ];

    let rows = ctrl.rows;
    let statuses =
        Signal::derive(move || distinct_by(&rows.get(), |o: &SalesOrder| o.status.as_deref()));

    let customer_options = Signal::derive(move || {
        customers
            .get()
            .into_iter()
            .map(|c| {
                let label = c.company_name.unwrap_or_else(|| c.id.clone());
                (c.id, label)
            })
            .collect::<Vec<_>>()
    });

    let form = ctrl.form;
    let editing_id = ctrl.editing_id;
    let title = Signal::derive(move || {
        if editing_id.get().is_some() {
            format!("Edit {}", SalesOrder::entity_name())
        } else {
            format!("Add {}", SalesOrder::entity_name())
        }
    });

    let status_options = Signal::derive(|| {
        vec![
            ("pending".to_string(), "Pending".to_string()),
            ("confirmed".to_string(), "Confirmed".to_string()),
            ("in_production".to_string(), "In Production".to_string()),
            ("shipped".to_string(), "Shipped".to_string()),
            ("delivered".to_string(), "Delivered".to_string()),
            ("cancelled".to_string(), "Cancelled".to_string()),
        ]
    });
    let payment_options = Signal::derive(|| {
        vec![
            ("unpaid".to_string(), "Unpaid".to_string()),
            ("partial".to_string(), "Partial".to_string()),
            ("paid".to_string(), "Paid".to_string()),
        ]
    });
    let priority_options = Signal::derive(|| {
        vec![
            ("low".to_string(), "Low".to_string()),
            ("normal".to_string(), "Normal".to_string()),
            ("high".to_string(), "High".to_string()),
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
                loading=loading
                searchable=true
                filter=FilterSpec { key: "status", label: "Statuses", options: statuses }
                page_size=10
                can_edit=ctrl.can_edit()
                on_add=Callback::new(move |_: ()| ctrl_add.open_form(None))
                on_edit=Callback::new(move |order: SalesOrder| ctrl_edit.open_form(Some(&order)))
                on_delete=Callback::new(move |id: String| ctrl_delete.remove(id))
                add_label="Add Sales Order"
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
                    label="Order Number"
                    value=Signal::derive(move || form.get().order_number)
                    on_input=Callback::new(move |v: String| form.update(|f| f.order_number = v))
                    required=true
                />
                <SelectField
                    label="Customer"
                    value=Signal::derive(move || form.get().customer_id.unwrap_or_default())
                    on_change=Callback::new(move |v: String| form.update(|f| f.customer_id = none_if_empty(v)))
                    options=customer_options
                    empty_option="Select Customer"
                />
                <DateField
                    label="Order Date"
                    value=Signal::derive(move || form.get().order_date.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.order_date = none_if_empty(v)))
                />
                <DateField
                    label="Required Date"
                    value=Signal::derive(move || form.get().required_date.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.required_date = none_if_empty(v)))
                />
                <DateField
                    label="Promised Date"
                    value=Signal::derive(move || form.get().promised_date.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.promised_date = none_if_empty(v)))
                />
                <DateField
                    label="Delivery Date"
                    value=Signal::derive(move || form.get().delivery_date.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.delivery_date = none_if_empty(v)))
                />
                <NumberField
                    label="Total Amount"
                    value=Signal::derive(move || fmt_opt_f64(form.get().total_amount))
                    on_input=Callback::new(move |v: String| form.update(|f| f.total_amount = v.parse().ok()))
                    step="0.01"
                />
                <TextField
                    label="Currency"
                    value=Signal::derive(move || form.get().currency)
                    on_input=Callback::new(move |v: String| form.update(|f| f.currency = v))
                    placeholder="USD"
                />
                <SelectField
                    label="Payment Status"
                    value=Signal::derive(move || form.get().payment_status)
                    on_change=Callback::new(move |v: String| form.update(|f| f.payment_status = v))
                    options=payment_options
                />
                <TextField
                    label="Payment Terms"
                    value=Signal::derive(move || form.get().payment_terms.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.payment_terms = none_if_empty(v)))
                />
                <TextField
                    label="Sales Person"
                    value=Signal::derive(move || form.get().sales_person.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.sales_person = none_if_empty(v)))
                />
                <SelectField
                    label="Priority"
                    value=Signal::derive(move || form.get().priority_level)
                    on_change=Callback::new(move |v: String| form.update(|f| f.priority_level = v))
                    options=priority_options
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
