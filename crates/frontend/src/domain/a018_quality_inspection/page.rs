use contracts::domain::a009_production_order::ProductionOrder;
use contracts::domain::a018_quality_inspection::QualityInspection;
use contracts::domain::common::{none_if_empty, TableRecord};
use leptos::prelude::*;

use crate::shared::components::data_table::{Column, DataTable, FilterSpec};
use crate::shared::components::form_modal::FormModal;
use crate::shared::components::ui::{fmt_opt_i64, NumberField, SelectField, TextAreaField, TextField};
use crate::shared::crud::{fetch_lookup, CrudController};
use crate::shared::date_utils::format_datetime;
use crate::shared::list_utils::distinct_by;

fn order_label(orders: &[ProductionOrder], id: Option<&str>) -> String {
    orders
        .iter()
        .find(|o| Some(o.id.as_str()) == id)
        .and_then(|o| o.order_number.clone())
        .unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn QualityInspectionsPage() -> impl IntoView {
    let ctrl = CrudController::<QualityInspection>::new();
    ctrl.fetch_all();

    let (orders, orders_loading) = fetch_lookup::<ProductionOrder>();
    let ctrl_loading = ctrl.loading;
    let loading = Signal::derive(move || ctrl_loading.get() || orders_loading.get());

    let columns = vec![
        Column::<QualityInspection>::with("production_order_id", "Order", move |_, report: &QualityInspection| {
            order_label(&orders.get(), report.production_order_id.as_deref())
        }),
        Column::new("inspection_type", "Type"),
        Column::with("inspection_datetime", "Inspected At", |value, _| {
            format_datetime(value.as_str())
        }),
        Column::with("sample_size", "Sample", |value, _| {
            format!("{}", value.as_i64().unwrap_or(0))
        }),
        Column::with("pass_quantity", "Pass", |value, _| {
            format!("{}", value.as_i64().unwrap_or(0))
        }),
        Column::with("fail_quantity", "Fail", |value, _| {
            format!("{}", value.as_i64().unwrap_or(0))
        }),
        Column::new("overall_result", "Result"),
        Column::new("action_taken", "Action"),
    ];

    let rows = ctrl.rows;
    let inspection_types = Signal::derive(move || {
        distinct_by(&rows.get(), |r: &QualityInspection| {
            r.inspection_type.as_deref()
        })
    });

    let order_options = Signal::derive(move || {
        orders
            .get()
            .into_iter()
            .map(|o| {
                let label = o.order_number.clone().unwrap_or_else(|| o.id.clone());
                (o.id, label)
            })
            .collect::<Vec<_>>()
    });

    let form = ctrl.form;
    let editing_id = ctrl.editing_id;
    let title = Signal::derive(move || {
        if editing_id.get().is_some() {
            format!("Edit {}", QualityInspection::entity_name())
        } else {
            format!("Add {}", QualityInspection::entity_name())
        }
    });

    let type_options = Signal::derive(|| {
        vec![
            ("incoming".to_string(), "Incoming".to_string()),
            ("in_process".to_string(), "In Process".to_string()),
            ("final".to_string(), "Final".to_string()),
        ]
    });
    let result_options = Signal::derive(|| {
        vec![
            ("pending".to_string(), "Pending".to_string()),
            ("passed".to_string(), "Passed".to_string()),
            ("failed".to_string(), "Failed".to_string()),
            ("conditional".to_string(), "Conditional".to_string()),
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
                filter=FilterSpec { key: "inspection_type", label: "Types", options: inspection_types }
                page_size=10
                can_edit=ctrl.can_edit()
                on_add=Callback::new(move |_: ()| ctrl_add.open_form(None))
                on_edit=Callback::new(move |report: QualityInspection| ctrl_edit.open_form(Some(&report)))
                on_delete=Callback::new(move |id: String| ctrl_delete.remove(id))
                add_label="Add Inspection"
            />

            <FormModal
                open=ctrl.show_form
                title=title
                error=ctrl.form_error
                saving=ctrl.saving
                on_close=Callback::new(move |_: ()| ctrl_close.close_form())
                on_submit=Callback::new(move |_: ()| ctrl_submit.submit())
            >
                <SelectField
                    label="Production Order"
                    value=Signal::derive(move || form.get().production_order_id.unwrap_or_default())
                    on_change=Callback::new(move |v: String| form.update(|f| f.production_order_id = none_if_empty(v)))
                    options=order_options
                    empty_option="Select Order"
                />
                <SelectField
                    label="Inspection Type"
                    value=Signal::derive(move || form.get().inspection_type)
                    on_change=Callback::new(move |v: String| form.update(|f| f.inspection_type = v))
                    options=type_options
                />
                <TextField
                    label="Inspection Date/Time"
                    value=Signal::derive(move || form.get().inspection_datetime.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.inspection_datetime = none_if_empty(v)))
                    placeholder="2026-02-28T14:00"
                />
                <TextField
                    label="Inspector"
                    value=Signal::derive(move || form.get().inspector_id.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.inspector_id = none_if_empty(v)))
                />
                <NumberField
                    label="Sample Size"
                    value=Signal::derive(move || fmt_opt_i64(form.get().sample_size))
                    on_input=Callback::new(move |v: String| form.update(|f| f.sample_size = v.parse().ok()))
                    step="1"
                />
                <NumberField
                    label="Pass Quantity"
                    value=Signal::derive(move || fmt_opt_i64(form.get().pass_quantity))
                    on_input=Callback::new(move |v: String| form.update(|f| f.pass_quantity = v.parse().ok()))
                    step="1"
                />
                <NumberField
                    label="Fail Quantity"
                    value=Signal::derive(move || fmt_opt_i64(form.get().fail_quantity))
                    on_input=Callback::new(move |v: String| form.update(|f| f.fail_quantity = v.parse().ok()))
                    step="1"
                />
                <SelectField
                    label="Overall Result"
                    value=Signal::derive(move || form.get().overall_result)
                    on_change=Callback::new(move |v: String| form.update(|f| f.overall_result = v))
                    options=result_options
                />
                <TextAreaField
                    label="Action Taken"
                    value=Signal::derive(move || form.get().action_taken.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.action_taken = none_if_empty(v)))
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
