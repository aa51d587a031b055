//! Lane (group) reference data.

use crate::model::item::GroupId;
use serde::{Deserialize, Serialize};

/// A horizontal lane that items are assigned to.
///
/// Groups are read-only from this core's perspective: the session never
/// creates or mutates them, it only validates item assignments against them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub title: String,
    /// Optional label rendered at the right edge of the lane header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_title: Option<String>,
}

impl Group {
    pub fn new(id: impl Into<GroupId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            right_title: None,
        }
    }

    pub fn with_right_title(mut self, right_title: impl Into<String>) -> Self {
        self.right_title = Some(right_title.into());
        self
    }
}
