use contracts::domain::a004_product::Product;
use contracts::domain::a009_production_order::ProductionOrder;
use contracts::domain::a015_finished_good::FinishedGood;
use contracts::domain::common::{none_if_empty, TableRecord};
use leptos::prelude::*;

use crate::shared::components::data_table::{Column, DataTable, FilterSpec};
use crate::shared::components::form_modal::FormModal;
use crate::shared::components::ui::{fmt_opt_f64, fmt_opt_i64, DateField, NumberField, SelectField, TextAreaField, TextField};
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

#[component]
pub fn FinishedGoodsPage() -> impl IntoView {
    let ctrl = CrudController::<FinishedGood>::new();
    ctrl.fetch_all();

    let (products, products_loading) = fetch_lookup::<Product>();
    let (orders, orders_loading) = fetch_lookup::<ProductionOrder>();
    let ctrl_loading = ctrl.loading;
    let loading = Signal::derive(move || {
        ctrl_loading.get() || products_loading.get() || orders_loading.get()
    });

    let columns = vec![
        Column::<FinishedGood>::new("batch_number", "Batch #"),
        Column::with("product_id", "Product", move |_, good: &FinishedGood| {
            product_label(&products.get(), good.product_id.as_deref())
        }),
        Column::with("quantity", "Quantity", |value, _| {
            format!("{}", value.as_i64().unwrap_or(0))
        }),
        Column::with("production_date", "Produced", |value, _| {
            format_date(value.as_str())
        }),
        Column::new("quality_status", "Quality"),
        Column::with("unit_cost", "Unit Cost", |value, _| match value.as_f64() {
            Some(cost) => format!("${cost}"),
            None => "-".to_string(),
        }),
        Column::new("status", "Status"),
    ];

    let rows = ctrl.rows;
    let quality_statuses = Signal::derive(move || {
        distinct_by(&rows.get(), |g: &FinishedGood| g.quality_status.as_deref())
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
            format!("Edit {}", FinishedGood::entity_name())
        } else {
            format!("Add {}", FinishedGood::entity_name())
        }
    });

    let quality_options = Signal::derive(|| {
        vec![
            ("pending".to_string(), "Pending".to_string()),
            ("passed".to_string(), "Passed".to_string()),
            ("failed".to_string(), "Failed".to_string()),
        ]
    });
    let status_options = Signal::derive(|| {
        vec![
            ("in_stock".to_string(), "In Stock".to_string()),
            ("reserved".to_string(), "Reserved".to_string()),
            ("shipped".to_string(), "Shipped".to_string()),
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
                filter=FilterSpec { key: "quality_status", label: "Quality", options: quality_statuses }
                page_size=10
                can_edit=ctrl.can_edit()
                on_add=Callback::new(move |_: ()| ctrl_add.open_form(None))
                on_edit=Callback::new(move |good: FinishedGood| ctrl_edit.open_form(Some(&good)))
                on_delete=Callback::new(move |id: String| ctrl_delete.remove(id))
                add_label="Add Finished Goods"
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
                    label="Product"
                    value=Signal::derive(move || form.get().product_id.unwrap_or_default())
                    on_change=Callback::new(move |v: String| form.update(|f| f.product_id = none_if_empty(v)))
                    options=product_options
                    empty_option="Select Product"
                />
                <SelectField
                    label="Production Order"
                    value=Signal::derive(move || form.get().production_order_id.unwrap_or_default())
                    on_change=Callback::new(move |v: String| form.update(|f| f.production_order_id = none_if_empty(v)))
                    options=order_options
                    empty_option="Select Order"
                />
                <NumberField
                    label="Quantity"
                    value=Signal::derive(move || fmt_opt_i64(form.get().quantity))
                    on_input=Callback::new(move |v: String| form.update(|f| f.quantity = v.parse().ok()))
                    step="1"
                    required=true
                />
                <DateField
                    label="Production Date"
                    value=Signal::derive(move || form.get().production_date.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.production_date = none_if_empty(v)))
                />
                <DateField
                    label="Expiry Date"
                    value=Signal::derive(move || form.get().expiry_date.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.expiry_date = none_if_empty(v)))
                />
                <SelectField
                    label="Quality Status"
                    value=Signal::derive(move || form.get().quality_status)
                    on_change=Callback::new(move |v: String| form.update(|f| f.quality_status = v))
                    options=quality_options
                />
                <TextField
                    label="Location"
                    value=Signal::derive(move || form.get().location_id.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.location_id = none_if_empty(v)))
                />
                <NumberField
                    label="Unit Cost"
                    value=Signal::derive(move || fmt_opt_f64(form.get().unit_cost))
                    on_input=Callback::new(move |v: String| form.update(|f| f.unit_cost = v.parse().ok()))
                    step="0.01"
                />
                <NumberField
                    label="Total Cost"
                    value=Signal::derive(move || fmt_opt_f64(form.get().total_cost))
                    on_input=Callback::new(move |v: String| form.update(|f| f.total_cost = v.parse().ok()))
                    step="0.01"
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
