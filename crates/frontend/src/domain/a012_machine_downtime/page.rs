use contracts::domain::a002_machine::Machine;
use contracts::domain::a012_machine_downtime::MachineDowntime;
use contracts::domain::common::{none_if_empty, TableRecord};
use leptos::prelude::*;

use crate::shared::components::data_table::{Column, DataTable, FilterSpec};
use crate::shared::components::form_modal::FormModal;
use crate::shared::components::ui::{fmt_opt_i32, NumberField, SelectField, TextAreaField, TextField};
use crate::shared::crud::{fetch_lookup, CrudController};
use crate::shared::date_utils::format_datetime;
use crate::shared::list_utils::distinct_by;

#[component]
pub fn MachineDowntimePage() -> impl IntoView {
    let ctrl = CrudController::<MachineDowntime>::new();
    ctrl.fetch_all();

    let (machines, machines_loading) = fetch_lookup::<Machine>();
    let ctrl_loading = ctrl.loading;
    let loading = Signal::derive(move || ctrl_loading.get() || machines_loading.get());

    let columns = vec![
        Column::<MachineDowntime>::with("machines", "Machine", |_, entry: &MachineDowntime| {
            entry
                .machines
                .as_ref()
                .and_then(|m| m.name.clone())
                .unwrap_or_else(|| "-".to_string())
        }),
        Column::with("downtime_start", "Start", |value, _| {
            format_datetime(value.as_str())
        }),
        Column::with("downtime_end", "End", |value, _| {
            format_datetime(value.as_str())
        }),
        Column::with("duration_minutes", "Duration (min)", |value, _| {
            match value.as_i64() {
                Some(minutes) => minutes.to_string(),
                None => "-".to_string(),
            }
        }),
        Column::new("reason", "Reason"),
        Column::new("action_taken", "Action Taken"),
        Column::new("reported_by", "Reported By"),
        Column::new("status", "Status"),
    ];

    let rows = ctrl.rows;
    let statuses = Signal::derive(move || {
        distinct_by(&rows.get(), |d: &MachineDowntime| d.status.as_deref())
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
            format!("Edit {}", MachineDowntime::entity_name())
        } else {
            format!("Add {}", MachineDowntime::entity_name())
        }
    });

    let status_options = Signal::derive(|| {
        vec![
            ("open".to_string(), "Open".to_string()),
            ("resolved".to_string(), "Resolved".to_string()),
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
                on_edit=Callback::new(move |entry: MachineDowntime| ctrl_edit.open_form(Some(&entry)))
                on_delete=Callback::new(move |id: String| ctrl_delete.remove(id))
                add_label="Log Downtime"
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
                <TextField
                    label="Downtime Start"
                    value=Signal::derive(move || form.get().downtime_start)
                    on_input=Callback::new(move |v: String| form.update(|f| f.downtime_start = v))
                    placeholder="2026-02-28T06:30"
                    required=true
                />
                <TextField
                    label="Downtime End"
                    value=Signal::derive(move || form.get().downtime_end.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.downtime_end = none_if_empty(v)))
                    placeholder="2026-02-28T08:00"
                />
                <NumberField
                    label="Duration (minutes)"
                    value=Signal::derive(move || fmt_opt_i32(form.get().duration_minutes))
                    on_input=Callback::new(move |v: String| form.update(|f| f.duration_minutes = v.parse().ok()))
                    step="1"
                />
                <TextField
                    label="Reason"
                    value=Signal::derive(move || form.get().reason)
                    on_input=Callback::new(move |v: String| form.update(|f| f.reason = v))
                    placeholder="e.g. heater band failure"
                    required=true
                />
                <TextAreaField
                    label="Action Taken"
                    value=Signal::derive(move || form.get().action_taken.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.action_taken = none_if_empty(v)))
                />
                <TextField
                    label="Reported By"
                    value=Signal::derive(move || form.get().reported_by.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.reported_by = none_if_empty(v)))
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
