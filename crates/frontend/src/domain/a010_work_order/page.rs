use contracts::domain::a002_machine::Machine;
use contracts::domain::a003_mold::Mold;
use contracts::domain::a004_product::Product;
use contracts::domain::a010_work_order::WorkOrder;
use contracts::domain::common::{none_if_empty, TableRecord};
use leptos::prelude::*;

use crate::shared::components::data_table::{Column, DataTable, FilterSpec};
use crate::shared::components::form_modal::FormModal;
use crate::shared::components::ui::{DateField, SelectField, TextAreaField, TextField};
use crate::shared::crud::{fetch_lookup, CrudController};
use crate::shared::date_utils::format_date;
use crate::shared::list_utils::distinct_by;

#[component]
pub fn WorkOrdersPage() -> impl IntoView {
    let ctrl = CrudController::<WorkOrder>::new();
    ctrl.fetch_all();

    let (machines, machines_loading) = fetch_lookup::<Machine>();
    let (molds, molds_loading) = fetch_lookup::<Mold>();
    let (products, products_loading) = fetch_lookup::<Product>();
    let ctrl_loading = ctrl.loading;
    let loading = Signal::derive(move || {
        ctrl_loading.get() || machines_loading.get() || molds_loading.get() || products_loading.get()
    });

    // The embedded relation sub-records carry the display names, so the
    // cells read them straight off the row.
    let columns = vec![
        Column::<WorkOrder>::new("work_order_number", "WO #"),
        Column::new("order_type", "Type"),
        Column::new("description", "Description"),
        Column::with("machines", "Machine", |_, wo: &WorkOrder| {
            wo.machines
                .as_ref()
                .and_then(|m| m.name.clone())
                .unwrap_or_else(|| "-".to_string())
        }),
        Column::with("molds", "Mold", |_, wo: &WorkOrder| {
            wo.molds
                .as_ref()
                .and_then(|m| m.name.clone())
                .unwrap_or_else(|| "-".to_string())
        }),
        Column::with("products", "Product", |_, wo: &WorkOrder| {
            wo.products
                .as_ref()
                .and_then(|p| p.name.clone())
                .unwrap_or_else(|| "-".to_string())
        }),
        Column::new("assigned_to", "Assigned To"),
        Column::with("scheduled_start_date", "Start", |value, _| {
            format_date(value.as_str())
        }),
        Column::new("priority_level", "Priority"),
        Column::new("status", "Status"),
    ];

    let rows = ctrl.rows;
    let order_types =
        Signal::derive(move || distinct_by(&rows.get(), |wo: &WorkOrder| wo.order_type.as_deref()));

    let machine_options = Signal::derive(move || {
        machines
            .get()
            .into_iter()
            .map(|m| {
                let label = m.name.or(m.machine_code).unwrap_or_else(|| m.id.clone());
                (m.id, label)
            })
            .collect::<Vec<_>>()
    });
    let mold_options = Signal::derive(move || {
        molds
            .get()
            .into_iter()
            .map(|m| {
                let label = m.name.or(m.mold_code).unwrap_or_else(|| m.id.clone());
                (m.id, label)
            })
            .collect::<Vec<_>>()
    });
    let product_options = Signal::derive(move || {
        products
            .get()
            .into_iter()
            .map(|p| {
                let label = p.name.or(p.product_code).unwrap_or_else(|| p.id.clone());
                (p.id, label)
            })
            .collect::<Vec<_>>()
    });

    let form = ctrl.form;
    let editing_id = ctrl.editing_id;
    let title = Signal::derive(move || {
        if editing_id.get().is_some() {
            format!("Edit {}", WorkOrder::entity_name())
        } else {
            format!("Add {}", WorkOrder::entity_name())
        }
    });

    let type_options = Signal::derive(|| {
        vec![
            ("maintenance".to_string(), "Maintenance".to_string()),
            ("repair".to_string(), "Repair".to_string()),
            ("setup".to_string(), "Setup".to_string()),
            ("inspection".to_string(), "Inspection".to_string()),
        ]
    });
    let priority_options = Signal::derive(|| {
        vec![
            ("low".to_string(), "Low".to_string()),
            ("normal".to_string(), "Normal".to_string()),
            ("high".to_string(), "High".to_string()),
            ("urgent".to_string(), "Urgent".to_string()),
        ]
    });
    let status_options = Signal::derive(|| {
        vec![
            ("open".to_string(), "Open".to_string()),
            ("in_progress".to_string(), "In Progress".to_string()),
            ("completed".to_string(), "Completed".to_string()),
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
                loading=loading
                searchable=true
                filter=FilterSpec { key: "order_type", label: "Types", options: order_types }
                page_size=10
                can_edit=ctrl.can_edit()
                on_add=Callback::new(move |_: ()| ctrl_add.open_form(None))
                on_edit=Callback::new(move |wo: WorkOrder| ctrl_edit.open_form(Some(&wo)))
                on_delete=Callback::new(move |id: String| ctrl_delete.remove(id))
                add_label="Add Work Order"
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
                    label="Work Order Number"
                    value=Signal::derive(move || form.get().work_order_number)
                    on_input=Callback::new(move |v: String| form.update(|f| f.work_order_number = v))
                    required=true
                />
                <SelectField
                    label="Order Type"
                    value=Signal::derive(move || form.get().order_type)
                    on_change=Callback::new(move |v: String| form.update(|f| f.order_type = v))
                    options=type_options
                />
                <TextAreaField
                    label="Description"
                    value=Signal::derive(move || form.get().description.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.description = none_if_empty(v)))
                />
                <SelectField
                    label="Machine"
                    value=Signal::derive(move || form.get().machine_id.unwrap_or_default())
                    on_change=Callback::new(move |v: String| form.update(|f| f.machine_id = none_if_empty(v)))
                    options=machine_options
                    empty_option="Select Machine"
                />
                <SelectField
                    label="Mold"
                    value=Signal::derive(move || form.get().mold_id.unwrap_or_default())
                    on_change=Callback::new(move |v: String| form.update(|f| f.mold_id = none_if_empty(v)))
                    options=mold_options
                    empty_option="Select Mold"
                />
                <SelectField
                    label="Product"
                    value=Signal::derive(move || form.get().product_id.unwrap_or_default())
                    on_change=Callback::new(move |v: String| form.update(|f| f.product_id = none_if_empty(v)))
                    options=product_options
                    empty_option="Select Product"
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
                <TextField
                    label="Assigned To"
                    value=Signal::derive(move || form.get().assigned_to.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.assigned_to = none_if_empty(v)))
                />
                <DateField
                    label="Scheduled Start"
                    value=Signal::derive(move || form.get().scheduled_start_date.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.scheduled_start_date = none_if_empty(v)))
                />
                <DateField
                    label="Scheduled End"
                    value=Signal::derive(move || form.get().scheduled_end_date.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.scheduled_end_date = none_if_empty(v)))
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
