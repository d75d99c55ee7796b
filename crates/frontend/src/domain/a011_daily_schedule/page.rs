use contracts::domain::a002_machine::Machine;
use contracts::domain::a009_production_order::ProductionOrder;
use contracts::domain::a011_daily_schedule::DailySchedule;
use contracts::domain::common::{none_if_empty, TableRecord};
use leptos::prelude::*;

use crate::shared::components::data_table::{Column, DataTable, FilterSpec};
use crate::shared::components::form_modal::FormModal;
use crate::shared::components::ui::{fmt_opt_i64, DateField, NumberField, SelectField, TextAreaField};
use crate::shared::crud::{fetch_lookup, CrudController};
use crate::shared::date_utils::format_date;

#[component]
pub fn DailySchedulePage() -> impl IntoView {
    let ctrl = CrudController::<DailySchedule>::new();
    ctrl.fetch_all();

    let (orders, orders_loading) = fetch_lookup::<ProductionOrder>();
    let (machines, machines_loading) = fetch_lookup::<Machine>();
    let ctrl_loading = ctrl.loading;
    let loading =
        Signal::derive(move || ctrl_loading.get() || orders_loading.get() || machines_loading.get());

    let columns = vec![
        Column::<DailySchedule>::with("schedule_date", "Date", |value, _| {
            format_date(value.as_str())
        }),
        Column::with("production_orders", "Order", |_, entry: &DailySchedule| {
            entry
                .production_orders
                .as_ref()
                .and_then(|o| o.order_number.clone())
                .unwrap_or_else(|| "-".to_string())
        }),
        Column::with("machines", "Machine", |_, entry: &DailySchedule| {
            entry
                .machines
                .as_ref()
                .and_then(|m| m.name.clone())
                .unwrap_or_else(|| "-".to_string())
        }),
        Column::with("production_orders", "Mold", |_, entry: &DailySchedule| {
            entry
                .production_orders
                .as_ref()
                .and_then(|o| o.molds.as_ref())
                .and_then(|m| m.name.clone())
                .unwrap_or_else(|| "-".to_string())
        }),
        Column::new("shift", "Shift"),
        Column::with("planned_quantity", "Planned", |value, _| {
            format!("{}", value.as_i64().unwrap_or(0))
        }),
        Column::with("actual_quantity", "Actual", |value, _| {
            format!("{}", value.as_i64().unwrap_or(0))
        }),
        Column::new("status", "Status"),
    ];

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
            format!("Edit {}", DailySchedule::entity_name())
        } else {
            format!("Add {}", DailySchedule::entity_name())
        }
    });

    let shift_options = Signal::derive(|| {
        vec![
            ("day".to_string(), "Day".to_string()),
            ("night".to_string(), "Night".to_string()),
        ]
    });
    let status_options = Signal::derive(|| {
        vec![
            ("scheduled".to_string(), "Scheduled".to_string()),
            ("running".to_string(), "Running".to_string()),
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
                filter=FilterSpec {
                    key: "shift",
                    label: "Shifts",
                    options: Signal::derive(|| vec!["day".to_string(), "night".to_string()]),
                }
                page_size=10
                can_edit=ctrl.can_edit()
                on_add=Callback::new(move |_: ()| ctrl_add.open_form(None))
                on_edit=Callback::new(move |entry: DailySchedule| ctrl_edit.open_form(Some(&entry)))
                on_delete=Callback::new(move |id: String| ctrl_delete.remove(id))
                add_label="Add Schedule Entry"
            />

            <FormModal
                open=ctrl.show_form
                title=title
                error=ctrl.form_error
                saving=ctrl.saving
                on_close=Callback::new(move |_: ()| ctrl_close.close_form())
                on_submit=Callback::new(move |_: ()| ctrl_submit.submit())
            >
                <DateField
                    label="Schedule Date"
                    value=Signal::derive(move || form.get().schedule_date)
                    on_input=Callback::new(move |v: String| form.update(|f| f.schedule_date = v))
                    required=true
                />
                <SelectField
                    label="Production Order"
                    value=Signal::derive(move || form.get().production_order_id.unwrap_or_default())
                    on_change=Callback::new(move |v: String| form.update(|f| f.production_order_id = none_if_empty(v)))
                    options=order_options
                    empty_option="Select Order"
                />
                <SelectField
                    label="Machine"
                    value=Signal::derive(move || form.get().machine_id.unwrap_or_default())
                    on_change=Callback::new(move |v: String| form.update(|f| f.machine_id = none_if_empty(v)))
                    options=machine_options
                    empty_option="Select Machine"
                />
                <SelectField
                    label="Shift"
                    value=Signal::derive(move || form.get().shift)
                    on_change=Callback::new(move |v: String| form.update(|f| f.shift = v))
                    options=shift_options
                />
                <NumberField
                    label="Planned Quantity"
                    value=Signal::derive(move || fmt_opt_i64(form.get().planned_quantity))
                    on_input=Callback::new(move |v: String| form.update(|f| f.planned_quantity = v.parse().ok()))
                    step="1"
                />
                <NumberField
                    label="Actual Quantity"
                    value=Signal::derive(move || fmt_opt_i64(form.get().actual_quantity))
                    on_input=Callback::new(move |v: String| form.update(|f| f.actual_quantity = v.parse().ok()))
                    step="1"
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
