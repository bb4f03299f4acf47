//! Stored-object descriptor returned by the remote store.

use serde::{Deserialize, Serialize};

/// Descriptor of an object created in the remote store.
///
/// Field names serialize in camelCase to match the Drive API, so the
/// descriptor can be both parsed from the store response and embedded
/// verbatim in our own API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredObject {
    /// Store-assigned object id.
    pub id: String,
    /// Name the object was stored under.
    pub name: String,
    /// Browser link to view the object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_view_link: Option<String>,
    /// Direct download link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_content_link: Option<String>,
}
