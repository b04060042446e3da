use serde::{Deserialize, Serialize};

/// Kind of mocked write action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationAction {
    Created,
    Updated,
    Deleted,
}

impl MutationAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            MutationAction::Created => "created",
            MutationAction::Updated => "updated",
            MutationAction::Deleted => "deleted",
        }
    }
}

/// Acknowledgement of a create/update/delete.
///
/// The action is simulated: the source collection stays unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationAck {
    pub id: String,
    pub action: MutationAction,
}

/// Error body returned by the API (`{"error": "...", "fields": {...}}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
    #[serde(default)]
    pub fields: std::collections::BTreeMap<String, String>,
}
