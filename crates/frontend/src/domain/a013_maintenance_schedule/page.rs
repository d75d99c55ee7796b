use contracts::domain::a002_machine::Machine;
use contracts::domain::a013_maintenance_schedule::MaintenanceSchedule;
use contracts::domain::common::{none_if_empty, TableRecord};
use leptos::prelude::*;

use crate::shared::components::data_table::{Column, DataTable, FilterSpec};
use crate::shared::components::form_modal::FormModal;
use crate::shared::components::ui::{fmt_opt_f64, fmt_opt_i32, CheckboxField, DateField, NumberField, SelectField, TextAreaField, TextField};
use crate::shared::crud::{fetch_lookup, CrudController};
use crate::shared::date_utils::format_date;
use crate::shared::list_utils::distinct_by;

fn machine_label(machines: &[Machine], id: Option<&str>) -> String {
    machines
        .iter()
        .find(|m| Some(m.id.as_str()) == id)
        .and_then(|m| m.name.clone())
        .unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn MaintenanceSchedulePage() -> impl IntoView {
    let ctrl = CrudController::<MaintenanceSchedule>::new();
    ctrl.fetch_all();

    let (machines, machines_loading) = fetch_lookup::<Machine>();
    let ctrl_loading = ctrl.loading;
    let loading = Signal::derive(move || ctrl_loading.get() || machines_loading.get());

    let columns = vec![
        Column::<MaintenanceSchedule>::with("machine_id", "Machine", move |_, item: &MaintenanceSchedule| {
            machine_label(&machines.get(), item.machine_id.as_deref())
        }),
        Column::new("maintenance_type", "Type"),
        Column::new("maintenance_item", "Item"),
        Column::with("frequency_days", "Every (days)", |value, _| match value.as_i64() {
            Some(days) => days.to_string(),
            None => "-".to_string(),
        }),
        Column::with("last_performed", "Last Performed", |value, _| {
            format_date(value.as_str())
        }),
        Column::with("next_due_date", "Next Due", |value, _| {
            format_date(value.as_str())
        }),
        Column::new("responsible_person", "Responsible"),
        Column::new("priority_level", "Priority"),
        Column::with("is_active", "Status", |_, item: &MaintenanceSchedule| {
            if item.is_active.unwrap_or(false) { "Active".into() } else { "Inactive".into() }
        }),
    ];

    let rows = ctrl.rows;
    let maintenance_types = Signal::derive(move || {
        distinct_by(&rows.get(), |m: &MaintenanceSchedule| {
            m.maintenance_type.as_deref()
        })
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
            format!("Edit {}", MaintenanceSchedule::entity_name())
        } else {
            format!("Add {}", MaintenanceSchedule::entity_name())
        }
    });

    let type_options = Signal::derive(|| {
        vec![
            ("preventive".to_string(), "Preventive".to_string()),
            ("predictive".to_string(), "Predictive".to_string()),
            ("corrective".to_string(), "Corrective".to_string()),
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
                filter=FilterSpec { key: "maintenance_type", label: "Types", options: maintenance_types }
                page_size=10
                can_edit=ctrl.can_edit()
                on_add=Callback::new(move |_: ()| ctrl_add.open_form(None))
                on_edit=Callback::new(move |item: MaintenanceSchedule| ctrl_edit.open_form(Some(&item)))
                on_delete=Callback::new(move |id: String| ctrl_delete.remove(id))
                add_label="Add Maintenance Item"
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
                    label="Machine"
                    value=Signal::derive(move || form.get().machine_id.unwrap_or_default())
                    on_change=Callback::new(move |v: String| form.update(|f| f.machine_id = none_if_empty(v)))
                    options=machine_options
                    empty_option="Select Machine"
                />
                <SelectField
                    label="Maintenance Type"
                    value=Signal::derive(move || form.get().maintenance_type)
                    on_change=Callback::new(move |v: String| form.update(|f| f.maintenance_type = v))
                    options=type_options
                />
                <TextField
                    label="Maintenance Item"
                    value=Signal::derive(move || form.get().maintenance_item)
                    on_input=Callback::new(move |v: String| form.update(|f| f.maintenance_item = v))
                    placeholder="e.g. hydraulic oil change"
                    required=true
                />
                <TextAreaField
                    label="Description"
                    value=Signal::derive(move || form.get().description.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.description = none_if_empty(v)))
                />
                <NumberField
                    label="Frequency (days)"
                    value=Signal::derive(move || fmt_opt_i32(form.get().frequency_days))
                    on_input=Callback::new(move |v: String| form.update(|f| f.frequency_days = v.parse().ok()))
                    step="1"
                />
                <NumberField
                    label="Estimated Duration (hours)"
                    value=Signal::derive(move || fmt_opt_f64(form.get().estimated_duration_hours))
                    on_input=Callback::new(move |v: String| form.update(|f| f.estimated_duration_hours = v.parse().ok()))
                    step="0.5"
                />
                <DateField
                    label="Last Performed"
                    value=Signal::derive(move || form.get().last_performed.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.last_performed = none_if_empty(v)))
                />
                <DateField
                    label="Next Due Date"
                    value=Signal::derive(move || form.get().next_due_date.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.next_due_date = none_if_empty(v)))
                />
                <TextField
                    label="Responsible Person"
                    value=Signal::derive(move || form.get().responsible_person.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.responsible_person = none_if_empty(v)))
                />
                <SelectField
                    label="Priority"
                    value=Signal::derive(move || form.get().priority_level)
                    on_change=Callback::new(move |v: String| form.update(|f| f.priority_level = v))
                    options=priority_options
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
