use contracts::domain::a002_machine::Machine;
use contracts::domain::a003_mold::Mold;
use contracts::domain::a004_product::Product;
use contracts::domain::a009_production_order::ProductionOrder;
use contracts::domain::common::{none_if_empty, TableRecord};
use leptos::prelude::*;

use crate::shared::components::data_table::{Column, DataTable, FilterSpec};
use crate::shared::components::form_modal::FormModal;
use crate::shared::components::ui::{fmt_opt_f64, fmt_opt_i32, fmt_opt_i64, DateField, NumberField, SelectField, TextAreaField, TextField};
use crate::shared::crud::{fetch_lookup, CrudController};
use crate::shared::date_utils::format_date;
use crate::shared::list_utils::distinct_by;

fn product_label(products: &[Product], id: Option<&str>) -> String {
    products
        .iter()
        .find(|p| Some(p.id.as_str()) == id)
        .and_then(|p| p.name.clone())
        .unwrap_or_else(|| "-".to_string())
}

fn machine_label(machines: &[Machine], id: Option<&str>) -> String {
    machines
        .iter()
        .find(|m| Some(m.id.as_str()) == id)
        .and_then(|m| m.name.clone())
        .unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn ProductionOrdersPage() -> impl IntoView {
    let ctrl = CrudController::<ProductionOrder>::new();
    ctrl.fetch_all();

    // Relation lookups fetched in parallel with the collection; the
    // table stays behind one combined loading gate until all settle.
    let (products, products_loading) = fetch_lookup::<Product>();
    let (molds, molds_loading) = fetch_lookup::<Mold>();
    let (machines, machines_loading) = fetch_lookup::<Machine>();
    let ctrl_loading = ctrl.loading;
    let loading = Signal::derive(move || {
        ctrl_loading.get() || products_loading.get() || molds_loading.get() || machines_loading.get()
    });

    let columns = vec![
        Column::<ProductionOrder>::new("order_number", "Order #"),
        Column::with("product_id", "Product", move |_, order: &ProductionOrder| {
            product_label(&products.get(), order.product_id.as_deref())
        }),
        Column::with("machine_id", "Machine", move |_, order: &ProductionOrder| {
            machine_label(&machines.get(), order.machine_id.as_deref())
        }),
        Column::with("target_quantity", "Target", |value, _| {
            format!("{}", value.as_i64().unwrap_or(0))
        }),
        Column::with("actual_quantity", "Actual", |value, _| {
            format!("{}", value.as_i64().unwrap_or(0))
        }),
        Column::with("ng_quantity", "NG", |value, _| {
            format!("{}", value.as_i64().unwrap_or(0))
        }),
        Column::with("scheduled_start_date", "Start", |value, _| {
            format_date(value.as_str())
        }),
        Column::with("scheduled_end_date", "End", |value, _| {
            format_date(value.as_str())
        }),
        Column::new("priority_level", "Priority"),
        Column::new("status", "Status"),
    ];

    let rows = ctrl.rows;
    let statuses = Signal::derive(move || {
        distinct_by(&rows.get(), |o: &ProductionOrder| o.status.as_deref())
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

    let form = ctrl.form;
    let editing_id = ctrl.editing_id;
    let title = Signal::derive(move || {
        if editing_id.get().is_some() {
            format!("Edit {}", ProductionOrder::entity_name())
        } else {
            format!("Add {}", ProductionOrder::entity_name())
        }
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
            ("planned".to_string(), "Planned".to_string()),
            ("in_progress".to_string(), "In Progress".to_string()),
            ("completed".to_string(), "Completed".to_string()),
            ("on_hold".to_string(), "On Hold".to_string()),
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
                filter=FilterSpec { key: "status", label: "Statuses", options: statuses }
                page_size=10
                can_edit=ctrl.can_edit()
                on_add=Callback::new(move |_: ()| ctrl_add.open_form(None))
                on_edit=Callback::new(move |order: ProductionOrder| ctrl_edit.open_form(Some(&order)))
                on_delete=Callback::new(move |id: String| ctrl_delete.remove(id))
                add_label="Add Production Order"
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
                    label="Product"
                    value=Signal::derive(move || form.get().product_id.unwrap_or_default())
                    on_change=Callback::new(move |v: String| form.update(|f| f.product_id = none_if_empty(v)))
                    options=product_options
                    empty_option="Select Product"
                />
                <SelectField
                    label="Mold"
                    value=Signal::derive(move || form.get().mold_id.unwrap_or_default())
                    on_change=Callback::new(move |v: String| form.update(|f| f.mold_id = none_if_empty(v)))
                    options=mold_options
                    empty_option="Select Mold"
                />
                <SelectField
                    label="Machine"
                    value=Signal::derive(move || form.get().machine_id.unwrap_or_default())
                    on_change=Callback::new(move |v: String| form.update(|f| f.machine_id = none_if_empty(v)))
                    options=machine_options
                    empty_option="Select Machine"
                />
                <NumberField
                    label="Target Quantity"
                    value=Signal::derive(move || fmt_opt_i64(form.get().target_quantity))
                    on_input=Callback::new(move |v: String| form.update(|f| f.target_quantity = v.parse().ok()))
                    step="1"
                    required=true
                />
                <NumberField
                    label="Actual Quantity"
                    value=Signal::derive(move || fmt_opt_i64(form.get().actual_quantity))
                    on_input=Callback::new(move |v: String| form.update(|f| f.actual_quantity = v.parse().ok()))
                    step="1"
                />
                <NumberField
                    label="NG Quantity"
                    value=Signal::derive(move || fmt_opt_i64(form.get().ng_quantity))
                    on_input=Callback::new(move |v: String| form.update(|f| f.ng_quantity = v.parse().ok()))
                    step="1"
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
                <NumberField
                    label="Setup Time (minutes)"
                    value=Signal::derive(move || fmt_opt_i32(form.get().setup_time_minutes))
                    on_input=Callback::new(move |v: String| form.update(|f| f.setup_time_minutes = v.parse().ok()))
                    step="1"
                />
                <NumberField
                    label="Standard Cycle Time (s)"
                    value=Signal::derive(move || fmt_opt_f64(form.get().cycle_time_standard))
                    on_input=Callback::new(move |v: String| form.update(|f| f.cycle_time_standard = v.parse().ok()))
                    step="0.1"
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
