use contracts::domain::a019_customer_complaint::CustomerComplaint;
use contracts::domain::common::TableRecord;
use leptos::prelude::*;

use crate::shared::components::data_table::{Column, DataTable, FilterSpec};
use crate::shared::components::form_modal::FormModal;
use crate::shared::components::ui::{SelectField, TextField};
use crate::shared::crud::CrudController;
use crate::shared::list_utils::distinct_by;

#[component]
pub fn CustomerComplaintsPage() -> impl IntoView {
    let ctrl = CrudController::<CustomerComplaint>::new();
    ctrl.fetch_all();

    let columns = vec![
        Column::<CustomerComplaint>::new("complaint_number", "Complaint #"),
        Column::new("status", "Status"),
    ];

    let rows = ctrl.rows;
    let statuses = Signal::derive(move || {
        distinct_by(&rows.get(), |c: &CustomerComplaint| c.status.as_deref())
    });

    let form = ctrl.form;
    let editing_id = ctrl.editing_id;
    let title = Signal::derive(move || {
        if editing_id.get().is_some() {
            format!("Edit {}", CustomerComplaint::entity_name())
        } else {
            format!("Add {}", CustomerComplaint::entity_name())
        }
    });

    let status_options = Signal::derive(|| {
        vec![
            ("open".to_string(), "Open".to_string()),
            ("investigating".to_string(), "Investigating".to_string()),
            ("resolved".to_string(), "Resolved".to_string()),
            ("closed".to_string(), "Closed".to_string()),
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
                filter=FilterSpec { key: "status", label: "Statuses", options: statuses }
                page_size=10
                can_edit=ctrl.can_edit()
                on_add=Callback::new(move |_: ()| ctrl_add.open_form(None))
                on_edit=Callback::new(move |complaint: CustomerComplaint| ctrl_edit.open_form(Some(&complaint)))
                on_delete=Callback::new(move |id: String| ctrl_delete.remove(id))
                add_label="Add Complaint"
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
                    label="Complaint Number"
                    value=Signal::derive(move || form.get().complaint_number)
                    on_input=Callback::new(move |v: String| form.update(|f| f.complaint_number = v))
                    required=true
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
