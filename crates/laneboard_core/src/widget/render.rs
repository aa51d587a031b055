//! Widget-facing render shapes.
//!
//! # Responsibility
//! - Derive the shapes the external widget consumes from the canonical
//!   model, including the duplicated interval field pairs it expects.
//!
//! # Invariants
//! - `start_time`/`end_time` and `start`/`end` are always numerically
//!   identical; both are derived from the one stored interval.

use crate::model::group::Group;
use crate::model::item::{GroupId, Item, ItemId};
use serde::Serialize;

/// One item as the rendering widget expects it.
///
/// The widget keys items by two interval pairs with different names. Only
/// the canonical pair is stored; both are filled in here so the duplicate
/// cannot drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderItem {
    pub id: ItemId,
    pub group: GroupId,
    pub title: String,
    pub start_time: i64,
    pub end_time: i64,
    pub start: i64,
    pub end: i64,
    /// True when the widget reports this item as selected.
    pub selected: bool,
    /// True when this item's title is rendered as an editable text field
    /// instead of a read-only label.
    pub editing: bool,
}

impl RenderItem {
    pub fn from_item(item: &Item, selected: bool, editing: bool) -> Self {
        Self {
            id: item.id.clone(),
            group: item.group_id.clone(),
            title: item.title.clone(),
            start_time: item.start_ms,
            end_time: item.end_ms,
            start: item.start_ms,
            end: item.end_ms,
            selected,
            editing,
        }
    }
}

/// One lane header as the rendering widget expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderGroup {
    pub id: GroupId,
    pub title: String,
    #[serde(rename = "rightTitle", skip_serializing_if = "Option::is_none")]
    pub right_title: Option<String>,
}

impl RenderGroup {
    pub fn from_group(group: &Group) -> Self {
        Self {
            id: group.id.clone(),
            title: group.title.clone(),
            right_title: group.right_title.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RenderGroup, RenderItem};
    use crate::model::group::Group;
    use crate::model::item::Item;

    #[test]
    fn render_item_duplicates_the_interval_pairs() {
        let item = Item::new("3", "2", "standup", 1000, 3000).expect("valid item");
        let rendered = RenderItem::from_item(&item, true, false);

        let json = serde_json::to_value(&rendered).expect("render item serializes");
        assert_eq!(json["start_time"], json["start"]);
        assert_eq!(json["end_time"], json["end"]);
        assert_eq!(json["start_time"], 1000);
        assert_eq!(json["end_time"], 3000);
        assert_eq!(json["selected"], true);
        assert_eq!(json["editing"], false);
    }

    #[test]
    fn render_group_uses_widget_key_casing() {
        let group = Group::new("1", "Lane A").with_right_title("Ops");
        let json = serde_json::to_value(RenderGroup::from_group(&group))
            .expect("render group serializes");
        assert_eq!(json["rightTitle"], "Ops");

        let bare = serde_json::to_value(RenderGroup::from_group(&Group::new("2", "Lane B")))
            .expect("render group serializes");
        assert!(bare.get("rightTitle").is_none());
    }
}
