//! Generic table / filter / paginate view.
//!
//! A pure projection of a collection snapshot: search, single-field
//! filter and pagination apply in that fixed order over each row's JSON
//! form. Search text, filter value and page index live here and reset
//! on remount; the controller never sees them.

use std::sync::Arc;

use contracts::domain::common::TableRecord;
use leptos::prelude::*;
use serde_json::Value;

use super::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::{self, ALL_FILTER};

/// Column descriptor: key into the row's JSON projection, header
/// label, optional cell renderer. Without a renderer the cell shows the
/// value's display form (dash for null/missing).
#[derive(Clone)]
pub struct Column<T> {
    pub key: &'static str,
    pub label: &'static str,
    pub render: Option<Arc<dyn Fn(&Value, &T) -> String + Send + Sync>>,
}

impl<T> Column<T> {
    pub fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            render: None,
        }
    }

    pub fn with(
        key: &'static str,
        label: &'static str,
        render: impl Fn(&Value, &T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            key,
            label,
            render: Some(Arc::new(render)),
        }
    }
}

/// Single-field filter: strict equality against one of the enumerated
/// options, with an implicit "all" choice.
#[derive(Clone)]
pub struct FilterSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub options: Signal<Vec<String>>,
}

#[component]
pub fn DataTable<T: TableRecord>(
    #[prop(into)] rows: Signal<Vec<T>>,
    columns: Vec<Column<T>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(optional)] searchable: bool,
    #[prop(optional)] filter: Option<FilterSpec>,
    #[prop(optional)] page_size: Option<usize>,
    #[prop(into)] can_edit: Signal<bool>,
    #[prop(optional)] on_add: Option<Callback<()>>,
    #[prop(optional)] on_edit: Option<Callback<T>>,
    #[prop(optional)] on_delete: Option<Callback<String>>,
    #[prop(optional, into)] add_label: MaybeProp<String>,
) -> impl IntoView {
    let (search, set_search) = signal(String::new());
    let (filter_value, set_filter_value) = signal(ALL_FILTER.to_string());
    let (page, set_page) = signal(1usize);

    let filter_for_rows = filter.clone();
    let processed = Signal::derive(move || {
        let query = search.get();
        let selected = filter_value.get();
        rows.get()
            .into_iter()
            .filter_map(|row| serde_json::to_value(&row).ok().map(|json| (row, json)))
            .filter(|(_, json)| !searchable || list_utils::matches_search(json, &query))
            .filter(|(_, json)| match &filter_for_rows {
                Some(spec) => list_utils::matches_filter(json, spec.key, &selected),
                None => true,
            })
            .collect::<Vec<_>>()
    });

    let total = Signal::derive(move || processed.get().len());
    let total_pages = Signal::derive(move || match page_size {
        Some(size) => list_utils::page_count(total.get(), size),
        None => 1,
    });
    let visible = Signal::derive(move || {
        let all = processed.get();
        match page_size {
            Some(size) => list_utils::page_slice(&all, page.get(), size),
            None => all,
        }
    });

    let show_actions = on_edit.is_some() || on_delete.is_some();
    let header_columns = columns.clone();
    let body_columns = columns;
    let add_text = move || add_label.get().unwrap_or_else(|| "Add".to_string());
    let filter_controls = filter.clone();

    view! {
        <div class="data-table">
            <div class="data-table__controls">
                {searchable.then(|| view! {
                    <input
                        class="form__input data-table__search"
                        type="text"
                        placeholder="Search..."
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                })}
                {filter_controls.map(|spec| {
                    let options = spec.options;
                    let all_label = format!("All {}", spec.label);
                    view! {
                        <select
                            class="form__select data-table__filter"
                            on:change=move |ev| set_filter_value.set(event_target_value(&ev))
                        >
                            <option value=ALL_FILTER selected=move || filter_value.get() == ALL_FILTER>
                                {all_label}
                            </option>
                            <For
                                each=move || options.get()
                                key=|option| option.clone()
                                children=move |option| {
                                    let option_value = option.clone();
                                    let is_selected = move || filter_value.get() == option_value;
                                    view! {
                                        <option value=option.clone() selected=is_selected>
                                            {option.clone()}
                                        </option>
                                    }
                                }
                            />
                        </select>
                    }
                })}
                {move || {
                    if !can_edit.get() {
                        return None;
                    }
                    on_add.map(|add| view! {
                        <button
                            class="button button--primary data-table__add"
                            on:click=move |_| add.run(())
                        >
                            {icon("plus")}
                            {add_text()}
                        </button>
                    })
                }}
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="data-table__loading">"Loading..."</div> }
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                {header_columns.iter().map(|column| view! {
                                    <th class="table__header-cell">{column.label}</th>
                                }).collect_view()}
                                {move || (show_actions && can_edit.get()).then(|| view! {
                                    <th class="table__header-cell table__header-cell--actions">"Actions"</th>
                                })}
                            </tr>
                        </thead>
                        <tbody>
                            {
                                let body_columns = body_columns.clone();
                                move || visible.get().into_iter().map(|(record, json)| {
                                    let record_for_edit = record.clone();
                                    let id_for_delete = record.id().to_string();
                                    view! {
                                        <tr class="table__row">
                                            {body_columns.iter().map(|column| {
                                                let cell = match &column.render {
                                                    Some(render) => render(
                                                        json.get(column.key).unwrap_or(&Value::Null),
                                                        &record,
                                                    ),
                                                    None => list_utils::display_value(json.get(column.key)),
                                                };
                                                view! { <td class="table__cell">{cell}</td> }
                                            }).collect_view()}
                                            {(show_actions && can_edit.get()).then(|| {
                                                let record_for_edit = record_for_edit.clone();
                                                let id_for_delete = id_for_delete.clone();
                                                view! {
                                                    <td class="table__cell table__cell--actions">
                                                        {on_edit.map(|cb| {
                                                            let record = record_for_edit.clone();
                                                            view! {
                                                                <button
                                                                    class="button button--icon"
                                                                    title="Edit"
                                                                    on:click=move |_| cb.run(record.clone())
                                                                >
                                                                    {icon("edit")}
                                                                </button>
                                                            }
                                                        })}
                                                        {on_delete.map(|cb| {
                                                            let id = id_for_delete.clone();
                                                            view! {
                                                                <button
                                                                    class="button button--icon button--danger"
                                                                    title="Delete"
                                                                    on:click=move |_| cb.run(id.clone())
                                                                >
                                                                    {icon("trash")}
                                                                </button>
                                                            }
                                                        })}
                                                    </td>
                                                }
                                            })}
                                        </tr>
                                    }
                                }).collect_view()
                            }
                        </tbody>
                    </table>
                </div>

                {page_size.map(|_| view! {
                    <PaginationControls
                        current_page=page
                        total_pages=total_pages
                        total_count=total
                        on_page_change=Callback::new(move |next| set_page.set(next))
                    />
                })}
            </Show>
        </div>
    }
}
