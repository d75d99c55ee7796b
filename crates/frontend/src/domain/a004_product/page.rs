use contracts::domain::a004_product::Product;
use contracts::domain::common::{none_if_empty, TableRecord};
use leptos::prelude::*;

use crate::shared::components::data_table::{Column, DataTable, FilterSpec};
use crate::shared::components::form_modal::FormModal;
use crate::shared::components::ui::{fmt_opt_f64, NumberField, SelectField, TextField};
use crate::shared::crud::CrudController;
use crate::shared::list_utils::distinct_by;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let ctrl = CrudController::<Product>::new();
    ctrl.fetch_all();

    let columns = vec![
        Column::<Product>::new("product_code", "Code"),
        Column::new("name", "Name"),
        Column::new("category", "Category"),
        Column::new("material_type", "Material"),
        Column::with("weight_per_piece", "Weight/Piece (g)", |value, _| {
            match value.as_f64() {
                Some(weight) => format!("{weight:.2}"),
                None => "-".to_string(),
            }
        }),
        Column::new("status", "Status"),
    ];

    let rows = ctrl.rows;
    let categories =
        Signal::derive(move || distinct_by(&rows.get(), |p: &Product| p.category.as_deref()));

    let form = ctrl.form;
    let editing_id = ctrl.editing_id;
    let title = Signal::derive(move || {
        if editing_id.get().is_some() {
            format!("Edit {}", Product::entity_name())
        } else {
            format!("Add {}", Product::entity_name())
        }
    });

    let material_options = Signal::derive(|| {
        vec![
            ("PP".to_string(), "PP".to_string()),
            ("PE".to_string(), "PE".to_string()),
            ("ABS".to_string(), "ABS".to_string()),
            ("PET".to_string(), "PET".to_string()),
            ("PVC".to_string(), "PVC".to_string()),
            ("PS".to_string(), "PS".to_string()),
        ]
    });
    let status_options = Signal::derive(|| {
        vec![
            ("active".to_string(), "Active".to_string()),
            ("development".to_string(), "Development".to_string()),
            ("discontinued".to_string(), "Discontinued".to_string()),
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
                filter=FilterSpec { key: "category", label: "Categories", options: categories }
                page_size=10
                can_edit=ctrl.can_edit()
                on_add=Callback::new(move |_: ()| ctrl_add.open_form(None))
                on_edit=Callback::new(move |product: Product| ctrl_edit.open_form(Some(&product)))
                on_delete=Callback::new(move |id: String| ctrl_delete.remove(id))
                add_label="Add Product"
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
                    label="Product Code"
                    value=Signal::derive(move || form.get().product_code)
                    on_input=Callback::new(move |v: String| form.update(|f| f.product_code = v))
                    required=true
                />
                <TextField
                    label="Product Name"
                    value=Signal::derive(move || form.get().name)
                    on_input=Callback::new(move |v: String| form.update(|f| f.name = v))
                    required=true
                />
                <TextField
                    label="Category"
                    value=Signal::derive(move || form.get().category.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.category = none_if_empty(v)))
                    placeholder="e.g. caps, crates, housings"
                />
                <SelectField
                    label="Material Type"
                    value=Signal::derive(move || form.get().material_type.unwrap_or_default())
                    on_change=Callback::new(move |v: String| form.update(|f| f.material_type = none_if_empty(v)))
                    options=material_options
                    empty_option="Select Material"
                />
                <NumberField
                    label="Weight per Piece (g)"
                    value=Signal::derive(move || fmt_opt_f64(form.get().weight_per_piece))
                    on_input=Callback::new(move |v: String| form.update(|f| f.weight_per_piece = v.parse().ok()))
                    step="0.01"
                />
                <TextField
                    label="Image URL"
                    value=Signal::derive(move || form.get().image_url.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.image_url = none_if_empty(v)))
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
