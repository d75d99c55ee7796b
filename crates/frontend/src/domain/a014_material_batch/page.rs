use contracts::domain::a005_raw_material::RawMaterial;
use contracts::domain::a006_supplier::Supplier;
use contracts::domain::a014_material_batch::MaterialBatch;
use contracts::domain::common::{none_if_empty, TableRecord};
use leptos::prelude::*;

use crate::shared::components::data_table::{Column, DataTable, FilterSpec};
use crate::shared::components::form_modal::FormModal;
use crate::shared::components::ui::{fmt_opt_f64, DateField, NumberField, SelectField, TextAreaField, TextField};
use crate::shared::crud::{fetch_lookup, CrudController};
use crate::shared::date_utils::format_date;
use crate::shared::list_utils::distinct_by;

#[component]
pub fn MaterialBatchesPage() -> impl IntoView {
    let ctrl = CrudController::<MaterialBatch>::new();
    ctrl.fetch_all();

    let (materials, materials_loading) = fetch_lookup::<RawMaterial>();
    let (suppliers, suppliers_loading) = fetch_lookup::<Supplier>();
    let ctrl_loading = ctrl.loading;
    let loading = Signal::derive(move || {
        ctrl_loading.get() || materials_loading.get() || suppliers_loading.get()
    });

    let columns = vec![
        Column::<MaterialBatch>::new("batch_number", "Batch #"),
        Column::with("raw_materials", "Material", |_, batch: &MaterialBatch| {
            batch
                .raw_materials
                .as_ref()
                .and_then(|m| m.name.clone())
                .unwrap_or_else(|| "-".to_string())
        }),
        Column::with("quantity", "Quantity", |value, batch: &MaterialBatch| {
            let unit = batch.unit_of_measure.as_deref().unwrap_or("");
            format!("{} {}", value.as_f64().unwrap_or(0.0), unit)
        }),
        Column::with("received_date", "Received", |value, _| {
            format_date(value.as_str())
        }),
        Column::with("expiry_date", "Expires", |value, _| {
            format_date(value.as_str())
        }),
        Column::with("suppliers", "Supplier", |_, batch: &MaterialBatch| {
            batch
                .suppliers
                .as_ref()
                .and_then(|s| s.company_name.clone())
                .unwrap_or_else(|| "-".to_string())
        }),
        Column::with("unit_cost", "Unit Cost", |value, _| {
            format!("${}", value.as_f64().unwrap_or(0.0))
        }),
        Column::with("total_cost", "Total Cost", |value, _| {
            format!("${}", value.as_f64().unwrap_or(0.0))
        }),
        Column::new("storage_location", "Location"),
        Column::new("status", "Status"),
    ];

    let rows = ctrl.rows;
    let statuses = Signal::derive(move || {
        distinct_by(&rows.get(), |b: &MaterialBatch| b.status.as_deref())
    });

    let material_options = Signal::derive(move || {
        materials
            .get()
            .into_iter()
            .map(|m| {
                let label = m.name.or(m.material_code).unwrap_or_else(|| m.id.clone());
                (m.id, label)
            })
            .collect::<Vec<_>>()
    });
    let supplier_options = Signal::derive(move || {
        suppliers
            .get()
            .into_iter()
            .map(|s| {
                let label = s.company_name.unwrap_or_else(|| s.id.clone());
                (s.id, label)
            })
            .collect::<Vec<_>>()
    });

    let form = ctrl.form;
    let editing_id = ctrl.editing_id;
    let title = Signal::derive(move || {
        if editing_id.get().is_some() {
            format!("Edit {}", MaterialBatch::entity_name())
        } else {
            format!("Add {}", MaterialBatch::entity_name())
        }
    });

    let status_options = Signal::derive(|| {
        vec![
            ("in_stock".to_string(), "In Stock".to_string()),
            ("consumed".to_string(), "Consumed".to_string()),
            ("quarantined".to_string(), "Quarantined".to_string()),
            ("expired".to_string(), "Expired".to_string()),
        ]
    });

    // Picking a material also pins the batch's unit of measure.
    let on_material_change = Callback::new(move |v: String| {
        let unit = materials
            .get_untracked()
            .iter()
            .find(|m| m.id == v)
            .and_then(|m| m.unit_of_measure.clone());
        form.update(|f| {
            f.material_id = none_if_empty(v);
            if f.material_id.is_some() {
                f.unit_of_measure = unit;
            }
        });
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
                on_edit=Callback::new(move |batch: MaterialBatch| ctrl_edit.open_form(Some(&batch)))
                on_delete=Callback::new(move |id: String| ctrl_delete.remove(id))
                add_label="Add Batch"
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
                    label="Batch Number"
                    value=Signal::derive(move || form.get().batch_number)
                    on_input=Callback::new(move |v: String| form.update(|f| f.batch_number = v))
                    required=true
                />
                <SelectField
                    label="Material"
                    value=Signal::derive(move || form.get().material_id.unwrap_or_default())
                    on_change=on_material_change
                    options=material_options
                    empty_option="Select Material"
                />
                <NumberField
                    label="Quantity"
                    value=Signal::derive(move || fmt_opt_f64(form.get().quantity))
                    on_input=Callback::new(move |v: String| form.update(|f| {
                        f.quantity = v.parse().ok();
                        f.recompute_total();
                    }))
                    required=true
                />
                <TextField
                    label="Unit of Measure"
                    value=Signal::derive(move || form.get().unit_of_measure.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.unit_of_measure = none_if_empty(v)))
                    placeholder="derived from the selected material"
                />
                <DateField
                    label="Received Date"
                    value=Signal::derive(move || form.get().received_date.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.received_date = none_if_empty(v)))
                />
                <DateField
                    label="Expiry Date"
                    value=Signal::derive(move || form.get().expiry_date.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.expiry_date = none_if_empty(v)))
                />
                <SelectField
                    label="Supplier"
                    value=Signal::derive(move || form.get().supplier_id.unwrap_or_default())
                    on_change=Callback::new(move |v: String| form.update(|f| f.supplier_id = none_if_empty(v)))
                    options=supplier_options
                    empty_option="Select Supplier"
                />
                <NumberField
                    label="Unit Cost"
                    value=Signal::derive(move || fmt_opt_f64(form.get().unit_cost))
                    on_input=Callback::new(move |v: String| form.update(|f| {
                        f.unit_cost = v.parse().ok();
                        f.recompute_total();
                    }))
                    step="0.01"
                />
                <NumberField
                    label="Total Cost"
                    value=Signal::derive(move || fmt_opt_f64(form.get().total_cost))
                    on_input=Callback::new(move |v: String| form.update(|f| f.total_cost = v.parse().ok()))
                    step="0.01"
                />
                <TextField
                    label="Storage Location"
                    value=Signal::derive(move || form.get().storage_location.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.storage_location = none_if_empty(v)))
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
