use laneboard_core::{
    ConfirmationPrompt, EditorSession, Group, Item, ItemId, ItemStore, SessionError,
    TimelineWidget,
};

#[derive(Default)]
struct MockWidget {
    selected: Option<ItemId>,
    remount_count: u32,
    can_move: bool,
}

impl TimelineWidget for MockWidget {
    fn selected_item(&self) -> Option<ItemId> {
        self.selected.clone()
    }

    fn select_item(&mut self, id: Option<ItemId>) {
        self.selected = id;
    }

    fn request_remount(&mut self) {
        self.remount_count += 1;
        self.selected = None;
    }

    fn set_can_move(&mut self, can_move: bool) {
        self.can_move = can_move;
    }
}

struct Confirm(bool);

impl ConfirmationPrompt for Confirm {
    fn confirm_delete(&self, _item: &Item) -> bool {
        self.0
    }
}

fn seeded_session(
    widget: MockWidget,
    prompt: Confirm,
) -> EditorSession<MockWidget, Confirm> {
    let groups = vec![Group::new("1", "Lane A"), Group::new("2", "Lane B")];
    let items = vec![
        Item::new("3", "1", "standup", 1000, 3000).expect("seed item should be valid"),
        Item::new("5", "2", "retro", 4000, 6000).expect("seed item should be valid"),
    ];
    let store = ItemStore::with_items(groups, items).expect("seed should validate");
    EditorSession::new(store, widget, prompt)
}

#[test]
fn at_most_one_item_is_in_edit_mode() {
    let mut session = seeded_session(MockWidget::default(), Confirm(true));

    session.on_item_double_click("3");
    assert!(session.edit().is_editing("3"));

    session.on_item_double_click("5");
    assert!(!session.edit().is_editing("3"));
    assert!(session.edit().is_editing("5"));
}

#[test]
fn entering_edit_disables_widget_drag_until_exit() {
    let mut session = seeded_session(MockWidget::default(), Confirm(true));
    assert!(session.widget().can_move);
    assert!(session.can_move_items());

    session.on_item_double_click("3");
    assert!(!session.widget().can_move);
    assert!(!session.can_move_items());

    session.discard_edit();
    assert!(session.widget().can_move);
    assert!(session.can_move_items());
}

#[test]
fn move_is_rejected_while_any_item_is_in_edit_mode() {
    let mut session = seeded_session(MockWidget::default(), Confirm(true));
    session.on_item_double_click("3");

    let err = session
        .move_item("5", 9000, "1")
        .expect_err("move during edit mode must fail");
    assert!(matches!(err, SessionError::MoveLockedWhileEditing { id } if id == "5"));

    let unchanged = session.store().get("5").expect("item should still exist");
    assert_eq!(unchanged.start_ms, 4000);
    assert_eq!(unchanged.group_id, "2");
}

#[test]
fn resize_stays_permitted_while_editing() {
    let mut session = seeded_session(MockWidget::default(), Confirm(true));
    session.on_item_double_click("3");

    let resized = session
        .resize_item("5", 7000, laneboard_core::ResizeEdge::Right)
        .expect("resize during edit mode should succeed");
    assert_eq!(resized.end_ms, 7000);
    assert_eq!(resized.start_ms, 4000);
}

#[test]
fn deleting_the_edited_item_clears_edit_state() {
    let mut session = seeded_session(MockWidget::default(), Confirm(true));
    session.on_item_double_click("5");
    assert!(session.edit().is_editing("5"));

    assert!(session.delete_item("5"));

    assert!(session.store().get("5").is_none());
    assert!(session.edit().current().is_none());
    assert!(session.widget().can_move);
}

#[test]
fn deleting_another_item_keeps_edit_state() {
    let mut session = seeded_session(MockWidget::default(), Confirm(true));
    session.on_item_double_click("5");

    assert!(session.delete_item("3"));
    assert!(session.edit().is_editing("5"));
}

#[test]
fn double_click_on_a_stale_id_is_ignored() {
    let mut session = seeded_session(MockWidget::default(), Confirm(true));

    session.on_item_double_click("99");
    assert!(session.edit().current().is_none());
    assert!(session.widget().can_move);
}
