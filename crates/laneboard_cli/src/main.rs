//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `laneboard_core` wiring.
//! - Drive one scripted editing pass against an in-process widget stub,
//!   playing the role the real rendering host plays in production.

use laneboard_core::{
    core_version, ConfirmationPrompt, EditFieldEvent, EditorSession, Group, Item, ItemId,
    ItemStore, ResizeEdge, TimelineWidget,
};
use std::error::Error;

#[derive(Default)]
struct StubWidget {
    selected: Option<ItemId>,
    remounts: u32,
    can_move: bool,
}

impl TimelineWidget for StubWidget {
    fn selected_item(&self) -> Option<ItemId> {
        self.selected.clone()
    }

    fn select_item(&mut self, id: Option<ItemId>) {
        self.selected = id;
    }

    fn request_remount(&mut self) {
        self.remounts += 1;
        self.selected = None;
    }

    fn set_can_move(&mut self, can_move: bool) {
        self.can_move = can_move;
    }
}

struct AutoConfirm;

impl ConfirmationPrompt for AutoConfirm {
    fn confirm_delete(&self, _item: &Item) -> bool {
        true
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("laneboard_core version={}", core_version());

    let groups = vec![
        Group::new("1", "Lane A"),
        Group::new("2", "Lane B").with_right_title("Ops"),
    ];
    let store = ItemStore::new(groups);
    let mut session = EditorSession::new(store, StubWidget::default(), AutoConfirm);

    let created = session.on_canvas_double_click("1", 0)?;
    session.settle_render_sync();
    println!(
        "created id={} editing={}",
        created.id,
        session.edit().is_editing(&created.id)
    );

    session.handle_edit_field(EditFieldEvent::KeyEnter, "kickoff")?;
    session.settle_render_sync();

    let moved = session.on_item_move(&created.id, 3_600_000, 1)?;
    let resized = session.on_item_resize(&created.id, moved.end_ms + 1_800_000, ResizeEdge::Right)?;
    println!(
        "item id={} group={} start_ms={} end_ms={} title={:?}",
        resized.id, resized.group_id, resized.start_ms, resized.end_ms, resized.title
    );
    println!(
        "widget remounts={} can_move={}",
        session.widget().remounts,
        session.widget().can_move
    );

    session.delete_item(&created.id);
    println!("items remaining={}", session.store().len());
    Ok(())
}
