use serde::{Deserialize, Serialize};

/// The merged, always-current view of everything received so far.
///
/// Both fields start empty. A field set by a successful merge is only
/// overwritten by a later patch that itself carries the field; it is
/// never cleared by a patch that omits it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub title: String,
    pub content: String,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    /// True until the first merge lands a field.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.content.is_empty()
    }

    /// Pure merge: present patch fields overwrite, absent fields leave
    /// the accumulated value untouched.
    pub fn merged(&self, patch: &DraftPatch) -> Draft {
        Draft {
            title: patch.title.clone().unwrap_or_else(|| self.title.clone()),
            content: patch
                .content
                .clone()
                .unwrap_or_else(|| self.content.clone()),
        }
    }
}

/// One data frame's decoded contribution to the draft.
///
/// Unknown keys in the payload are ignored. A payload that is valid JSON
/// but not an object does not deserialize.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}
