//! Generic list-entity controller.
//!
//! One instance per entity page owns the collection snapshot and the
//! create/edit/delete form lifecycle; the table view only reads it. The
//! snapshot is replaced wholesale after every mutation, never patched
//! incrementally, and failures keep the previous snapshot while
//! surfacing a notification.

use contracts::domain::common::{RecordDraft, TableRecord};
use contracts::system::roles;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use crate::shared::gateway::{use_gateway, Gateway, GatewayError, GatewayHandle};
use crate::shared::notify::{use_notifications, NotificationService};
use crate::system::auth::context::use_auth;

pub struct CrudController<T: TableRecord> {
    pub rows: RwSignal<Vec<T>>,
    pub loading: RwSignal<bool>,
    pub show_form: RwSignal<bool>,
    pub editing_id: RwSignal<Option<String>>,
    pub form: RwSignal<T::Draft>,
    pub form_error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    /// Bumped on every dispatched operation; an in-flight response is
    /// applied only if its epoch is still current, so results landing
    /// after unmount (or after a newer request) are dropped.
    epoch: StoredValue<u64>,
    gateway: GatewayHandle,
    notify: NotificationService,
    roles: Signal<Vec<roles::Role>>,
}

impl<T: TableRecord> Clone for CrudController<T> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows,
            loading: self.loading,
            show_form: self.show_form,
            editing_id: self.editing_id,
            form: self.form,
            form_error: self.form_error,
            saving: self.saving,
            epoch: self.epoch,
            gateway: self.gateway.clone(),
            notify: self.notify,
            roles: self.roles,
        }
    }
}

impl<T: TableRecord> CrudController<T> {
    /// Build a controller inside a component scope. Reads the gateway
    /// handle, the notification service and the session role set from
    /// context.
    pub fn new() -> Self {
        let auth = use_auth();
        Self {
            rows: RwSignal::new(Vec::new()),
            loading: RwSignal::new(true),
            show_form: RwSignal::new(false),
            editing_id: RwSignal::new(None),
            form: RwSignal::new(T::Draft::default()),
            form_error: RwSignal::new(None),
            saving: RwSignal::new(false),
            epoch: StoredValue::new(0),
            gateway: use_gateway(),
            notify: use_notifications(),
            roles: Signal::derive(move || auth.get().roles.clone()),
        }
    }

    fn next_epoch(&self) -> u64 {
        let next = self.epoch.get_value() + 1;
        self.epoch.set_value(next);
        next
    }

    fn epoch_is(&self, expected: u64) -> bool {
        self.epoch.try_get_value() == Some(expected)
    }

    /// Replace the collection snapshot from the gateway. On failure the
    /// previous snapshot stays and the error is logged and surfaced.
    pub fn fetch_all(&self) {
        let ctrl = self.clone();
        let my_epoch = ctrl.next_epoch();
        ctrl.loading.set(true);
        spawn_local(async move {
            let result = fetch_rows::<T>(ctrl.gateway.0.as_ref()).await;
            if !ctrl.epoch_is(my_epoch) {
                return;
            }
            match result {
                Ok(fetched) => ctrl.rows.set(fetched),
                Err(err) => {
                    log::error!("fetch {} failed: {err}", T::table());
                    ctrl.notify
                        .error(format!("Could not load {}: {err}", T::list_name()));
                }
            }
            ctrl.loading.set(false);
        });
    }

    /// True when the session may mutate this entity. Fails closed while
    /// roles are still loading; unrestricted entities are always true.
    pub fn can_edit(&self) -> Signal<bool> {
        let session_roles = self.roles;
        Signal::derive(move || roles::can_edit(&session_roles.get(), T::permitted_roles()))
    }

    /// Open the form, seeded from `record` in edit mode or empty in
    /// create mode.
    pub fn open_form(&self, record: Option<&T>) {
        match record {
            Some(record) => {
                self.editing_id.set(Some(record.id().to_string()));
                self.form.set(record.to_draft());
            }
            None => {
                self.editing_id.set(None);
                self.form.set(T::Draft::default());
            }
        }
        self.form_error.set(None);
        self.show_form.set(true);
    }

    /// Discard the draft without touching the collection.
    pub fn close_form(&self) {
        self.show_form.set(false);
        self.editing_id.set(None);
        self.form.set(T::Draft::default());
        self.form_error.set(None);
    }

    /// Validate, then dispatch update (edit mode) or insert (create
    /// mode). The form closes and the collection refetches regardless
    /// of the write outcome; write and refetch failures surface as
    /// separate notifications.
    pub fn submit(&self) {
        if self.saving.get() {
            return;
        }
        let draft = self.form.get();
        if let Err(err) = draft.validate() {
            self.form_error.set(Some(err.to_string()));
            return;
        }
        let payload = match serde_json::to_value(&draft) {
            Ok(value) => value,
            Err(err) => {
                self.form_error.set(Some(err.to_string()));
                return;
            }
        };
        let editing = self.editing_id.get();
        let ctrl = self.clone();
        let my_epoch = ctrl.next_epoch();
        ctrl.saving.set(true);
        spawn_local(async move {
            let (write, refetch) =
                submit_cycle::<T>(ctrl.gateway.0.as_ref(), payload, editing.as_deref()).await;
            if !ctrl.epoch_is(my_epoch) {
                return;
            }
            ctrl.saving.set(false);
            ctrl.show_form.set(false);
            ctrl.editing_id.set(None);
            ctrl.form.set(T::Draft::default());
            ctrl.form_error.set(None);
            match write {
                Ok(_) => ctrl.notify.info(format!("{} saved", T::entity_name())),
                Err(err) => {
                    log::error!("write to {} failed: {err}", T::table());
                    ctrl.notify
                        .error(format!("Saving {} failed: {err}", T::entity_name()));
                }
            }
            match refetch {
                Ok(fetched) => ctrl.rows.set(fetched),
                Err(err) => {
                    log::error!("refetch of {} failed: {err}", T::table());
                    ctrl.notify
                        .error(format!("Could not refresh {}: {err}", T::list_name()));
                }
            }
        });
    }

    /// Delete behind an interactive confirmation. Declining issues no
    /// gateway calls at all; otherwise the collection refetches whether
    /// or not the delete succeeded.
    pub fn remove(&self, id: String) {
        if !confirm_delete(T::entity_name()) {
            return;
        }
        let ctrl = self.clone();
        let my_epoch = ctrl.next_epoch();
        spawn_local(async move {
            let (deleted, refetch) = remove_cycle::<T>(ctrl.gateway.0.as_ref(), &id).await;
            if !ctrl.epoch_is(my_epoch) {
                return;
            }
            if let Err(err) = deleted {
                log::error!("delete from {} failed: {err}", T::table());
                ctrl.notify
                    .error(format!("Deleting {} failed: {err}", T::entity_name()));
            }
            match refetch {
                Ok(fetched) => ctrl.rows.set(fetched),
                Err(err) => {
                    log::error!("refetch of {} failed: {err}", T::table());
                    ctrl.notify
                        .error(format!("Could not refresh {}: {err}", T::list_name()));
                }
            }
        });
    }
}

fn confirm_delete(entity_name: &str) -> bool {
    web_sys::window()
        .map(|w| {
            w.confirm_with_message(&format!("Delete this {}?", entity_name.to_lowercase()))
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

/// One-shot fetch of a relation lookup collection (for foreign-key
/// selects). Pages combine the returned loading flag with their own.
pub fn fetch_lookup<T: TableRecord>() -> (ReadSignal<Vec<T>>, ReadSignal<bool>) {
    let (rows, set_rows) = signal(Vec::new());
    let (loading, set_loading) = signal(true);
    let gateway = use_gateway();
    let notify = use_notifications();
    spawn_local(async move {
        match fetch_rows::<T>(gateway.0.as_ref()).await {
            // try_set: the page may already be gone when this resolves
            Ok(fetched) => {
                let _ = set_rows.try_set(fetched);
            }
            Err(err) => {
                log::error!("lookup fetch of {} failed: {err}", T::table());
                notify.error(format!("Could not load {}: {err}", T::list_name()));
            }
        }
        let _ = set_loading.try_set(false);
    });
    (rows, loading)
}

pub(crate) async fn fetch_rows<T: TableRecord>(
    gateway: &dyn Gateway,
) -> Result<Vec<T>, GatewayError> {
    let values = gateway.select(T::table(), T::columns(), &[]).await?;
    values
        .into_iter()
        .map(|value| {
            serde_json::from_value::<T>(value).map_err(|e| GatewayError::Decode(e.to_string()))
        })
        .collect()
}

/// Write then unconditional refetch; both outcomes are reported so the
/// caller can distinguish "write failed" from "write succeeded but the
/// refresh did not".
pub(crate) async fn submit_cycle<T: TableRecord>(
    gateway: &dyn Gateway,
    draft: Value,
    editing_id: Option<&str>,
) -> (Result<Value, GatewayError>, Result<Vec<T>, GatewayError>) {
    let write = match editing_id {
        Some(id) => gateway.update(T::table(), id, draft).await,
        None => gateway.insert(T::table(), draft).await,
    };
    let refetch = fetch_rows::<T>(gateway).await;
    (write, refetch)
}

pub(crate) async fn remove_cycle<T: TableRecord>(
    gateway: &dyn Gateway,
    id: &str,
) -> (Result<(), GatewayError>, Result<Vec<T>, GatewayError>) {
    let deleted = gateway.delete(T::table(), id).await;
    let refetch = fetch_rows::<T>(gateway).await;
    (deleted, refetch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use contracts::domain::a008_container::Container;
    use futures::executor::block_on;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Select(String),
        Insert(String),
        Update(String, String),
        Delete(String, String),
    }

    #[derive(Default)]
    struct MockGateway {
        calls: Mutex<Vec<Call>>,
        fail_writes: bool,
        fail_select: bool,
    }

    impl MockGateway {
        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait(?Send)]
    impl Gateway for MockGateway {
        async fn select(
            &self,
            table: &str,
            _columns: &str,
            _filters: &[crate::shared::gateway::Filter],
        ) -> Result<Vec<Value>, GatewayError> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Select(table.to_string()));
            if self.fail_select {
                return Err(GatewayError::Network("connection refused".into()));
            }
            Ok(vec![
                json!({"id": "c-1", "container_code": "CTR-001", "status": "available"}),
                json!({"id": "c-2", "container_code": "CTR-002", "status": "in_use"}),
            ])
        }

        async fn insert(&self, table: &str, row: Value) -> Result<Value, GatewayError> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Insert(table.to_string()));
            if self.fail_writes {
                return Err(GatewayError::Status {
                    status: 409,
                    message: "duplicate key".into(),
                });
            }
            Ok(row)
        }

        async fn update(&self, table: &str, id: &str, patch: Value) -> Result<Value, GatewayError> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Update(table.to_string(), id.to_string()));
            if self.fail_writes {
                return Err(GatewayError::Status {
                    status: 409,
                    message: "conflict".into(),
                });
            }
            Ok(patch)
        }

        async fn delete(&self, table: &str, id: &str) -> Result<(), GatewayError> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Delete(table.to_string(), id.to_string()));
            Ok(())
        }
    }

    #[test]
    fn fetch_rows_decodes_the_snapshot_in_gateway_order() {
        let gateway = MockGateway::default();
        let rows = block_on(fetch_rows::<Container>(&gateway)).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "c-1");
        assert_eq!(rows[1].container_code.as_deref(), Some("CTR-002"));
    }

    #[test]
    fn create_mode_issues_one_insert_then_one_refetch_never_update() {
        let gateway = MockGateway::default();
        let draft = json!({"container_code": "CTR-003", "status": "available"});
        let (write, refetch) = block_on(submit_cycle::<Container>(&gateway, draft, None));
        assert!(write.is_ok());
        assert!(refetch.is_ok());
        assert_eq!(
            gateway.calls(),
            vec![
                Call::Insert("containers".to_string()),
                Call::Select("containers".to_string()),
            ]
        );
    }

    #[test]
    fn edit_mode_issues_an_update_against_the_draft_id() {
        let gateway = MockGateway::default();
        let draft = json!({"container_code": "CTR-001", "status": "retired"});
        let (write, _) = block_on(submit_cycle::<Container>(&gateway, draft, Some("c-1")));
        assert!(write.is_ok());
        assert_eq!(
            gateway.calls()[0],
            Call::Update("containers".to_string(), "c-1".to_string())
        );
    }

    #[test]
    fn failed_writes_still_refetch_and_report_both_outcomes() {
        let gateway = MockGateway {
            fail_writes: true,
            ..Default::default()
        };
        let draft = json!({"container_code": "CTR-003"});
        let (write, refetch) = block_on(submit_cycle::<Container>(&gateway, draft, None));
        assert!(matches!(write, Err(GatewayError::Status { status: 409, .. })));
        assert!(refetch.is_ok());
        assert_eq!(
            gateway.calls(),
            vec![
                Call::Insert("containers".to_string()),
                Call::Select("containers".to_string()),
            ]
        );
    }

    #[test]
    fn remove_deletes_then_refetches_unconditionally() {
        let gateway = MockGateway {
            fail_select: true,
            ..Default::default()
        };
        let (deleted, refetch) = block_on(remove_cycle::<Container>(&gateway, "c-2"));
        assert!(deleted.is_ok());
        assert!(refetch.is_err());
        assert_eq!(
            gateway.calls(),
            vec![
                Call::Delete("containers".to_string(), "c-2".to_string()),
                Call::Select("containers".to_string()),
            ]
        );
    }

    #[test]
    fn declined_removal_issues_no_gateway_calls() {
        let gateway = MockGateway::default();
        let confirmed = false;
        if confirmed {
            let _ = block_on(remove_cycle::<Container>(&gateway, "c-1"));
        }
        assert!(gateway.calls().is_empty());
    }

    #[test]
    fn fetch_failure_reports_the_typed_error() {
        let gateway = MockGateway {
            fail_select: true,
            ..Default::default()
        };
        let result = block_on(fetch_rows::<Container>(&gateway));
        assert!(matches!(result, Err(GatewayError::Network(_))));
    }
}
