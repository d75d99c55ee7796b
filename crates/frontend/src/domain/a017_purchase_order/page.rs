use contracts::domain::a017_purchase_order::PurchaseOrder;
use contracts::domain::common::{none_if_empty, TableRecord};
use leptos::prelude::*;

use crate::shared::components::data_table::{Column, DataTable, FilterSpec};
use crate::shared::components::form_modal::FormModal;
use crate::shared::components::ui::{fmt_opt_f64, DateField, NumberField, SelectField, TextAreaField, TextField};
use crate::shared::crud::CrudController;
use crate::shared::date_utils::format_date;
use crate::shared::list_utils::distinct_by;

#[component]
pub fn PurchaseOrdersPage() -> impl IntoView {
    let ctrl = CrudController::<PurchaseOrder>::new();
    ctrl.fetch_all();

    let columns = vec![
        Column::<PurchaseOrder>::new("po_number", "PO #"),
        Column::new("supplier_name", "Supplier"),
        Column::new("supplier_contact", "Contact"),
        Column::with("order_date", "Ordered", |value, _| format_date(value.as_str())),
        Column::with("required_date", "Required", |value, _| {
            format_date(value.as_str())
        }),
        Column::with("total_amount", "Total", |value, order: &PurchaseOrder| {
            let currency = order.currency.as_deref().unwrap_or("USD");
            match value.as_f64() {
                Some(amount) => format!("{amount:.2} {currency}"),
                None => "-".to_string(),
            }
        }),
        Column::new("created_by", "Created By"),
        Column::new("approved_by", "Approved By"),
        Column::new("status", "Status"),
    ];

    let rows = ctrl.rows;
    let statuses =
        Signal::derive(move || distinct_by(&rows.get(), |o: &PurchaseOrder| o.status.as_deref()));

    let form = ctrl.form;
    let editing_id = ctrl.editing_id;
    let title = Signal::derive(move || {
        if editing_id.get().is_some() {
            format!("Edit {}", PurchaseOrder::entity_name())
        } else {
            format!("Add {}", PurchaseOrder::entity_name())
        }
    });

    let status_options = Signal::derive(|| {
        vec![
            ("draft".to_string(), "Draft".to_string()),
            ("submitted".to_string(), "Submitted".to_string()),
            ("approved".to_string(), "Approved".to_string()),
            ("received".to_string(), "Received".to_string()),
            ("cancelled".to_string(), "Cancelled".to_string()),
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
                on_edit=Callback::new(move |order: PurchaseOrder| ctrl_edit.open_form(Some(&order)))
                on_delete=Callback::new(move |id: String| ctrl_delete.remove(id))
                add_label="Add Purchase Order"
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
                    label="PO Number"
                    value=Signal::derive(move || form.get().po_number)
                    on_input=Callback::new(move |v: String| form.update(|f| f.po_number = v))
                    required=true
                />
                <TextField
                    label="Supplier Name"
                    value=Signal::derive(move || form.get().supplier_name)
                    on_input=Callback::new(move |v: String| form.update(|f| f.supplier_name = v))
                    required=true
                />
                <TextField
                    label="Supplier Contact"
                    value=Signal::derive(move || form.get().supplier_contact.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.supplier_contact = none_if_empty(v)))
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
                <TextField
                    label="Payment Terms"
                    value=Signal::derive(move || form.get().payment_terms.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.payment_terms = none_if_empty(v)))
                />
                <TextField
                    label="Delivery Terms"
                    value=Signal::derive(move || form.get().delivery_terms.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.delivery_terms = none_if_empty(v)))
                />
                <TextField
                    label="Created By"
                    value=Signal::derive(move || form.get().created_by.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.created_by = none_if_empty(v)))
                />
                <TextField
                    label="Approved By"
                    value=Signal::derive(move || form.get().approved_by.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.approved_by = none_if_empty(v)))
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
