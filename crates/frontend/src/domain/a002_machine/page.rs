use contracts::domain::a002_machine::Machine;
use contracts::domain::common::{none_if_empty, TableRecord};
use leptos::prelude::*;

use crate::shared::components::data_table::{Column, DataTable, FilterSpec};
use crate::shared::components::form_modal::FormModal;
use crate::shared::components::ui::{fmt_opt_f64, fmt_opt_i32, DateField, NumberField, SelectField, TextField};
use crate::shared::crud::CrudController;
use crate::shared::list_utils::distinct_by;

#[component]
pub fn MachinesPage() -> impl IntoView {
    let ctrl = CrudController::<Machine>::new();
    ctrl.fetch_all();

    let columns = vec![
        Column::<Machine>::new("machine_code", "Code"),
        Column::new("name", "Name"),
        Column::new("machine_type", "Type"),
        Column::new("brand", "Brand"),
        Column::new("model", "Model"),
        Column::new("tonnage", "Tonnage"),
        Column::new("status", "Status"),
        Column::new("location", "Location"),
        Column::with("total_operating_hours", "Operating Hours", |value, _| {
            format!("{:.0}", value.as_f64().unwrap_or(0.0))
        }),
        Column::with("hourly_rate", "Rate/Hour", |value, _| {
            format!("${}", value.as_f64().unwrap_or(0.0))
        }),
    ];

    let rows = ctrl.rows;
    let machine_types = Signal::derive(move || {
        distinct_by(&rows.get(), |m: &Machine| m.machine_type.as_deref())
    });

    let form = ctrl.form;
    let editing_id = ctrl.editing_id;
    let title = Signal::derive(move || {
        if editing_id.get().is_some() {
            format!("Edit {}", Machine::entity_name())
        } else {
            format!("Add {}", Machine::entity_name())
        }
    });

    let type_options = Signal::derive(|| {
        vec![
            ("injection".to_string(), "Injection".to_string()),
            ("blow".to_string(), "Blow".to_string()),
            ("auxiliary".to_string(), "Auxiliary".to_string()),
        ]
    });
    let status_options = Signal::derive(|| {
        vec![
            ("active".to_string(), "Active".to_string()),
            ("maintenance".to_string(), "Maintenance".to_string()),
            ("breakdown".to_string(), "Breakdown".to_string()),
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
                filter=FilterSpec { key: "machine_type", label: "Types", options: machine_types }
                page_size=10
                can_edit=ctrl.can_edit()
                on_add=Callback::new(move |_: ()| ctrl_add.open_form(None))
                on_edit=Callback::new(move |machine: Machine| ctrl_edit.open_form(Some(&machine)))
                on_delete=Callback::new(move |id: String| ctrl_delete.remove(id))
                add_label="Add Machine"
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
                    label="Machine Code"
                    value=Signal::derive(move || form.get().machine_code)
                    on_input=Callback::new(move |v: String| form.update(|f| f.machine_code = v))
                    required=true
                />
                <TextField
                    label="Machine Name"
                    value=Signal::derive(move || form.get().name)
                    on_input=Callback::new(move |v: String| form.update(|f| f.name = v))
                    required=true
                />
                <SelectField
                    label="Type"
                    value=Signal::derive(move || form.get().machine_type.unwrap_or_default())
                    on_change=Callback::new(move |v: String| form.update(|f| f.machine_type = none_if_empty(v)))
                    options=type_options
                    empty_option="Select Type"
                />
                <TextField
                    label="Brand"
                    value=Signal::derive(move || form.get().brand.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.brand = none_if_empty(v)))
                />
                <TextField
                    label="Model"
                    value=Signal::derive(move || form.get().model.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.model = none_if_empty(v)))
                />
                <TextField
                    label="Serial Number"
                    value=Signal::derive(move || form.get().serial_number.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.serial_number = none_if_empty(v)))
                />
                <NumberField
                    label="Year Manufactured"
                    value=Signal::derive(move || fmt_opt_i32(form.get().year_manufactured))
                    on_input=Callback::new(move |v: String| form.update(|f| f.year_manufactured = v.parse().ok()))
                    step="1"
                />
                <NumberField
                    label="Tonnage"
                    value=Signal::derive(move || fmt_opt_f64(form.get().tonnage))
                    on_input=Callback::new(move |v: String| form.update(|f| f.tonnage = v.parse().ok()))
                />
                <NumberField
                    label="Shot Size Capacity (grams)"
                    value=Signal::derive(move || fmt_opt_f64(form.get().shot_size_capacity))
                    on_input=Callback::new(move |v: String| form.update(|f| f.shot_size_capacity = v.parse().ok()))
                    step="0.01"
                />
                <TextField
                    label="Location"
                    value=Signal::derive(move || form.get().location.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.location = none_if_empty(v)))
                />
                <DateField
                    label="Installation Date"
                    value=Signal::derive(move || form.get().installation_date.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.installation_date = none_if_empty(v)))
                />
                <NumberField
                    label="Hourly Rate"
                    value=Signal::derive(move || fmt_opt_f64(form.get().hourly_rate))
                    on_input=Callback::new(move |v: String| form.update(|f| f.hourly_rate = v.parse().ok()))
                    step="0.01"
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
