use contracts::domain::a005_raw_material::RawMaterial;
use contracts::domain::common::{none_if_empty, TableRecord};
use leptos::prelude::*;

use crate::shared::components::data_table::{Column, DataTable, FilterSpec};
use crate::shared::components::form_modal::FormModal;
use crate::shared::components::ui::{fmt_opt_f64, fmt_opt_i32, CheckboxField, NumberField, TextAreaField, TextField};
use crate::shared::crud::CrudController;
use crate::shared::list_utils::distinct_by;

#[component]
pub fn RawMaterialsPage() -> impl IntoView {
    let ctrl = CrudController::<RawMaterial>::new();
    ctrl.fetch_all();

    let columns = vec![
        Column::<RawMaterial>::new("material_code", "Code"),
        Column::new("name", "Name"),
        Column::new("category", "Category"),
        Column::new("supplier", "Supplier"),
        Column::with("current_stock", "Stock", |value, material: &RawMaterial| {
            let unit = material.unit_of_measure.as_deref().unwrap_or("");
            format!("{} {}", value.as_f64().unwrap_or(0.0), unit)
        }),
        Column::with("reorder_point", "Reorder At", |value, _| {
            match value.as_f64() {
                Some(v) => v.to_string(),
                None => "-".to_string(),
            }
        }),
        Column::with("unit_cost", "Unit Cost", |value, _| {
            format!("${}", value.as_f64().unwrap_or(0.0))
        }),
        Column::new("storage_location", "Location"),
        Column::with("is_active", "Status", |_, material: &RawMaterial| {
            if material.is_active.unwrap_or(false) { "Active".into() } else { "Inactive".into() }
        }),
    ];

    let rows = ctrl.rows;
    let categories = Signal::derive(move || {
        distinct_by(&rows.get(), |m: &RawMaterial| m.category.as_deref())
    });

    let form = ctrl.form;
    let editing_id = ctrl.editing_id;
    let title = Signal::derive(move || {
        if editing_id.get().is_some() {
            format!("Edit {}", RawMaterial::entity_name())
        } else {
            format!("Add {}", RawMaterial::entity_name())
        }
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
                filter=FilterSpec { key: "category", label: "Categories", options: categories }
                page_size=10
                can_edit=ctrl.can_edit()
                on_add=Callback::new(move |_: ()| ctrl_add.open_form(None))
                on_edit=Callback::new(move |material: RawMaterial| ctrl_edit.open_form(Some(&material)))
                on_delete=Callback::new(move |id: String| ctrl_delete.remove(id))
                add_label="Add Material"
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
                    label="Material Code"
                    value=Signal::derive(move || form.get().material_code)
                    on_input=Callback::new(move |v: String| form.update(|f| f.material_code = v))
                    required=true
                />
                <TextField
                    label="Material Name"
                    value=Signal::derive(move || form.get().name)
                    on_input=Callback::new(move |v: String| form.update(|f| f.name = v))
                    required=true
                />
                <TextAreaField
                    label="Description"
                    value=Signal::derive(move || form.get().description.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.description = none_if_empty(v)))
                />
                <TextField
                    label="Category"
                    value=Signal::derive(move || form.get().category.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.category = none_if_empty(v)))
                    placeholder="resin, masterbatch, additive"
                />
                <TextField
                    label="Material Type"
                    value=Signal::derive(move || form.get().material_type.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.material_type = none_if_empty(v)))
                />
                <TextField
                    label="Supplier"
                    value=Signal::derive(move || form.get().supplier.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.supplier = none_if_empty(v)))
                />
                <TextField
                    label="Unit of Measure"
                    value=Signal::derive(move || form.get().unit_of_measure.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.unit_of_measure = none_if_empty(v)))
                    placeholder="kg, bag, drum"
                />
                <NumberField
                    label="Current Stock"
                    value=Signal::derive(move || fmt_opt_f64(form.get().current_stock))
                    on_input=Callback::new(move |v: String| form.update(|f| f.current_stock = v.parse().ok()))
                />
                <NumberField
                    label="Minimum Stock"
                    value=Signal::derive(move || fmt_opt_f64(form.get().minimum_stock))
                    on_input=Callback::new(move |v: String| form.update(|f| f.minimum_stock = v.parse().ok()))
                />
                <NumberField
                    label="Maximum Stock"
                    value=Signal::derive(move || fmt_opt_f64(form.get().maximum_stock))
                    on_input=Callback::new(move |v: String| form.update(|f| f.maximum_stock = v.parse().ok()))
                />
                <NumberField
                    label="Reorder Point"
                    value=Signal::derive(move || fmt_opt_f64(form.get().reorder_point))
                    on_input=Callback::new(move |v: String| form.update(|f| f.reorder_point = v.parse().ok()))
                />
                <NumberField
                    label="Reorder Quantity"
                    value=Signal::derive(move || fmt_opt_f64(form.get().reorder_quantity))
                    on_input=Callback::new(move |v: String| form.update(|f| f.reorder_quantity = v.parse().ok()))
                />
                <NumberField
                    label="Unit Cost"
                    value=Signal::derive(move || fmt_opt_f64(form.get().unit_cost))
                    on_input=Callback::new(move |v: String| form.update(|f| f.unit_cost = v.parse().ok()))
                    step="0.01"
                />
                <TextField
                    label="Storage Location"
                    value=Signal::derive(move || form.get().storage_location.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.storage_location = none_if_empty(v)))
                />
                <NumberField
                    label="Shelf Life (days)"
                    value=Signal::derive(move || fmt_opt_i32(form.get().shelf_life_days))
                    on_input=Callback::new(move |v: String| form.update(|f| f.shelf_life_days = v.parse().ok()))
                    step="1"
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
