use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::system::roles::Role;

/// Draft validation failure, surfaced inline on the entity form before
/// anything is dispatched to the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

impl ValidationError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// One row of a business table as fetched from the gateway.
///
/// Each implementor declares its table name, its column projection
/// (which may embed relation sub-objects, e.g. `machines(name,
/// machine_code)`), and the static role list allowed to mutate it.
/// `permitted_roles() == None` means unrestricted.
pub trait TableRecord:
    Clone + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Editable projection of this record. Embedded relation rows are
    /// read-only and never part of the draft.
    type Draft: RecordDraft;

    fn table() -> &'static str;
    fn columns() -> &'static str;
    fn permitted_roles() -> Option<&'static [Role]>;

    /// Singular UI label ("Machine").
    fn entity_name() -> &'static str;
    /// Plural UI label ("Machines").
    fn list_name() -> &'static str;

    fn id(&self) -> &str;

    /// Seed an edit draft from this record (shallow copy of the
    /// editable fields).
    fn to_draft(&self) -> Self::Draft;
}

/// An in-progress, unsaved partial record bound to the create/edit
/// form. Validated before dispatch; serialized as the insert/update
/// body.
pub trait RecordDraft: Clone + Default + Serialize + Send + Sync + 'static {
    fn validate(&self) -> Result<(), ValidationError>;
}
