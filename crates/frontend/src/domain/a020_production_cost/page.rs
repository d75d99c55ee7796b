use contracts::domain::a009_production_order::ProductionOrder;
use contracts::domain::a020_production_cost::ProductionCost;
use contracts::domain::common::{none_if_empty, TableRecord};
use leptos::prelude::*;

use crate::shared::components::data_table::{Column, DataTable};
use crate::shared::components::form_modal::FormModal;
use crate::shared::components::ui::{fmt_opt_f64, DateField, NumberField, SelectField, TextAreaField};
use crate::shared::crud::{fetch_lookup, CrudController};
use crate::shared::date_utils::format_date;

fn money(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("${v:.2}"),
        None => "-".to_string(),
    }
}

#[component]
pub fn ProductionCostsPage() -> impl IntoView {
    let ctrl = CrudController::<ProductionCost>::new();
    ctrl.fetch_all();

    let (orders, orders_loading) = fetch_lookup::<ProductionOrder>();
    let ctrl_loading = ctrl.loading;
    let loading = Signal::derive(move || ctrl_loading.get() || orders_loading.get());

    let columns = vec![
        Column::<ProductionCost>::with("production_orders", "Order", |_, cost: &ProductionCost| {
            cost.production_orders
                .as_ref()
                .and_then(|o| o.order_number.clone())
                .unwrap_or_else(|| "-".to_string())
        }),
        Column::with("cost_date", "Date", |value, _| format_date(value.as_str())),
        Column::with("material_cost", "Material", |_, cost: &ProductionCost| {
            money(cost.material_cost)
        }),
        Column::with("labor_cost", "Labor", |_, cost: &ProductionCost| {
            money(cost.labor_cost)
        }),
        Column::with("machine_cost", "Machine", |_, cost: &ProductionCost| {
            money(cost.machine_cost)
        }),
        Column::with("overhead_cost", "Overhead", |_, cost: &ProductionCost| {
            money(cost.overhead_cost)
        }),
        Column::with("total_cost", "Total", |_, cost: &ProductionCost| {
            money(cost.total_cost)
        }),
        Column::with("unit_cost", "Unit Cost", |_, cost: &ProductionCost| {
            money(cost.unit_cost)
        }),
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

    let form = ctrl.form;
    let editing_id = ctrl.editing_id;
    let title = Signal::derive(move || {
        if editing_id.get().is_some() {
            format!("Edit {}", ProductionCost::entity_name())
        } else {
            format!("Add {}", ProductionCost::entity_name())
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
                loading=loading
                searchable=true
                page_size=10
                can_edit=ctrl.can_edit()
                on_add=Callback::new(move |_: ()| ctrl_add.open_form(None))
                on_edit=Callback::new(move |cost: ProductionCost| ctrl_edit.open_form(Some(&cost)))
                on_delete=Callback::new(move |id: String| ctrl_delete.remove(id))
                add_label="Add Cost Record"
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
                <DateField
                    label="Cost Date"
                    value=Signal::derive(move || form.get().cost_date.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.cost_date = none_if_empty(v)))
                />
                <NumberField
                    label="Material Cost"
                    value=Signal::derive(move || fmt_opt_f64(form.get().material_cost))
                    on_input=Callback::new(move |v: String| form.update(|f| {
                        f.material_cost = v.parse().ok();
                        f.recompute_total();
                    }))
                    step="0.01"
                />
                <NumberField
                    label="Labor Cost"
                    value=Signal::derive(move || fmt_opt_f64(form.get().labor_cost))
                    on_input=Callback::new(move |v: String| form.update(|f| {
                        f.labor_cost = v.parse().ok();
                        f.recompute_total();
                    }))
                    step="0.01"
                />
                <NumberField
                    label="Machine Cost"
                    value=Signal::derive(move || fmt_opt_f64(form.get().machine_cost))
                    on_input=Callback::new(move |v: String| form.update(|f| {
                        f.machine_cost = v.parse().ok();
                        f.recompute_total();
                    }))
                    step="0.01"
                />
                <NumberField
                    label="Overhead Cost"
                    value=Signal::derive(move || fmt_opt_f64(form.get().overhead_cost))
                    on_input=Callback::new(move |v: String| form.update(|f| {
                        f.overhead_cost = v.parse().ok();
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
                <NumberField
                    label="Unit Cost"
                    value=Signal::derive(move || fmt_opt_f64(form.get().unit_cost))
                    on_input=Callback::new(move |v: String| form.update(|f| f.unit_cost = v.parse().ok()))
                    step="0.01"
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
