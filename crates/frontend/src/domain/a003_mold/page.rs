use contracts::domain::a003_mold::Mold;
use contracts::domain::common::{none_if_empty, TableRecord};
use leptos::prelude::*;

use crate::shared::components::data_table::{Column, DataTable, FilterSpec};
use crate::shared::components::form_modal::FormModal;
use crate::shared::components::ui::{fmt_opt_f64, fmt_opt_i32, DateField, NumberField, SelectField, TextField};
use crate::shared::crud::CrudController;
use crate::shared::date_utils::format_date;
use crate::shared::list_utils::distinct_by;

#[component]
pub fn MoldsPage() -> impl IntoView {
    let ctrl = CrudController::<Mold>::new();
    ctrl.fetch_all();

    let columns = vec![
        Column::<Mold>::new("mold_code", "Code"),
        Column::new("name", "Name"),
        Column::new("mold_type", "Type"),
        Column::new("number_of_cavities", "Cavities"),
        Column::new("material", "Material"),
        Column::with("current_shot_count", "Shot Count", |value, _| {
            format!("{}", value.as_i64().unwrap_or(0))
        }),
        Column::with("condition_rating", "Condition", |value, _| {
            match value.as_i64() {
                Some(rating) => format!("{rating}/5"),
                None => "-".to_string(),
            }
        }),
        Column::new("location", "Location"),
        Column::new("status", "Status"),
        Column::with("purchase_date", "Purchased", |value, _| {
            format_date(value.as_str())
        }),
    ];

    let rows = ctrl.rows;
    let mold_types =
        Signal::derive(move || distinct_by(&rows.get(), |m: &Mold| m.mold_type.as_deref()));

    let form = ctrl.form;
    let editing_id = ctrl.editing_id;
    let title = Signal::derive(move || {
        if editing_id.get().is_some() {
            format!("Edit {}", Mold::entity_name())
        } else {
            format!("Add {}", Mold::entity_name())
        }
    });

    let status_options = Signal::derive(|| {
        vec![
            ("active".to_string(), "Active".to_string()),
            ("maintenance".to_string(), "Maintenance".to_string()),
            ("repair".to_string(), "Repair".to_string()),
            ("retired".to_string(), "Retired".to_string()),
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
                filter=FilterSpec { key: "mold_type", label: "Types", options: mold_types }
                page_size=10
                can_edit=ctrl.can_edit()
                on_add=Callback::new(move |_: ()| ctrl_add.open_form(None))
                on_edit=Callback::new(move |mold: Mold| ctrl_edit.open_form(Some(&mold)))
                on_delete=Callback::new(move |id: String| ctrl_delete.remove(id))
                add_label="Add Mold"
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
                    label="Mold Code"
                    value=Signal::derive(move || form.get().mold_code)
                    on_input=Callback::new(move |v: String| form.update(|f| f.mold_code = v))
                    required=true
                />
                <TextField
                    label="Mold Name"
                    value=Signal::derive(move || form.get().name)
                    on_input=Callback::new(move |v: String| form.update(|f| f.name = v))
                    required=true
                />
                <TextField
                    label="Type"
                    value=Signal::derive(move || form.get().mold_type.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.mold_type = none_if_empty(v)))
                    placeholder="e.g. hot runner"
                />
                <NumberField
                    label="Number of Cavities"
                    value=Signal::derive(move || fmt_opt_i32(form.get().number_of_cavities))
                    on_input=Callback::new(move |v: String| form.update(|f| f.number_of_cavities = v.parse().ok()))
                    step="1"
                />
                <TextField
                    label="Material"
                    value=Signal::derive(move || form.get().material.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.material = none_if_empty(v)))
                />
                <NumberField
                    label="Weight (kg)"
                    value=Signal::derive(move || fmt_opt_f64(form.get().weight))
                    on_input=Callback::new(move |v: String| form.update(|f| f.weight = v.parse().ok()))
                    step="0.1"
                />
                <NumberField
                    label="Length (mm)"
                    value=Signal::derive(move || fmt_opt_f64(form.get().dimensions_length))
                    on_input=Callback::new(move |v: String| form.update(|f| f.dimensions_length = v.parse().ok()))
                />
                <NumberField
                    label="Width (mm)"
                    value=Signal::derive(move || fmt_opt_f64(form.get().dimensions_width))
                    on_input=Callback::new(move |v: String| form.update(|f| f.dimensions_width = v.parse().ok()))
                />
                <NumberField
                    label="Height (mm)"
                    value=Signal::derive(move || fmt_opt_f64(form.get().dimensions_height))
                    on_input=Callback::new(move |v: String| form.update(|f| f.dimensions_height = v.parse().ok()))
                />
                <NumberField
                    label="Standard Cycle Time (s)"
                    value=Signal::derive(move || fmt_opt_f64(form.get().cycle_time_standard))
                    on_input=Callback::new(move |v: String| form.update(|f| f.cycle_time_standard = v.parse().ok()))
                    step="0.1"
                />
                <NumberField
                    label="Condition Rating (1-5)"
                    value=Signal::derive(move || fmt_opt_i32(form.get().condition_rating))
                    on_input=Callback::new(move |v: String| form.update(|f| f.condition_rating = v.parse().ok()))
                    step="1"
                />
                <TextField
                    label="Location"
                    value=Signal::derive(move || form.get().location.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.location = none_if_empty(v)))
                />
                <SelectField
                    label="Status"
                    value=Signal::derive(move || form.get().status)
                    on_change=Callback::new(move |v: String| form.update(|f| f.status = v))
                    options=status_options
                />
                <DateField
                    label="Purchase Date"
                    value=Signal::derive(move || form.get().purchase_date.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.purchase_date = none_if_empty(v)))
                />
                <NumberField
                    label="Purchase Cost"
                    value=Signal::derive(move || fmt_opt_f64(form.get().purchase_cost))
                    on_input=Callback::new(move |v: String| form.update(|f| f.purchase_cost = v.parse().ok()))
                    step="0.01"
                />
                <TextField
                    label="Supplier"
                    value=Signal::derive(move || form.get().supplier.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.supplier = none_if_empty(v)))
                />
            </FormModal>
        </div>
    }
}
