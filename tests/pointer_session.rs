use egui::{pos2, Color32};
use sketchpad::preview::PreviewKind;
use sketchpad::{DisplayList, EditorState, LeavePolicy, PointerEvent, Sketchpad, SketchpadConfig, Tool};

fn pad(policy: LeavePolicy) -> Sketchpad {
    Sketchpad::new(DisplayList::new(), policy)
}

#[test]
fn test_drag_draws_a_stroke() {
    let mut pad = pad(LeavePolicy::Continue);
    pad.select_tool(Tool::marker(4.0, Color32::BLUE));

    assert!(pad.handle_event(PointerEvent::Down(pos2(1.0, 1.0))));
    assert_eq!(pad.state(), EditorState::Drawing);
    assert!(pad.handle_event(PointerEvent::Move(pos2(2.0, 2.0))));
    assert!(pad.handle_event(PointerEvent::Move(pos2(3.0, 3.0))));
    assert!(pad.handle_event(PointerEvent::Up));
    assert_eq!(pad.state(), EditorState::Idle);

    let items = pad.display_list().items();
    assert_eq!(items.len(), 1);
    let stroke = items[0].as_stroke().expect("stroke");
    assert_eq!(stroke.points(), &[pos2(1.0, 1.0), pos2(2.0, 2.0), pos2(3.0, 3.0)]);
    assert_eq!(stroke.thickness(), 4.0);
    assert_eq!(stroke.color(), Color32::BLUE);
}

#[test]
fn test_sticker_tool_places_sticker() {
    let mut pad = pad(LeavePolicy::Continue);
    pad.select_tool(Tool::sticker("🍔"));

    pad.handle_event(PointerEvent::Down(pos2(10.0, 10.0)));
    pad.handle_event(PointerEvent::Move(pos2(30.0, 40.0)));
    pad.handle_event(PointerEvent::Up);

    let sticker = pad.display_list().items()[0].as_sticker().expect("sticker");
    assert_eq!(sticker.glyph(), "🍔");
    assert_eq!(sticker.position(), pos2(30.0, 40.0));
}

#[test]
fn test_idle_move_updates_preview() {
    let mut pad = pad(LeavePolicy::Continue);
    pad.select_tool(Tool::marker(4.0, Color32::BLACK));

    assert!(pad.handle_event(PointerEvent::Move(pos2(7.0, 8.0))));
    let preview = pad.display_list().tool_preview().expect("preview");
    assert_eq!(preview.position(), pos2(7.0, 8.0));
    assert_eq!(preview.kind(), &PreviewKind::Ring { radius: 4.0 });

    pad.select_tool(Tool::sticker("✨"));
    pad.handle_event(PointerEvent::Move(pos2(9.0, 9.0)));
    let preview = pad.display_list().tool_preview().expect("preview");
    assert_eq!(preview.kind(), &PreviewKind::Glyph("✨".to_owned()));
    assert!(pad.display_list().items().is_empty());
}

#[test]
fn test_down_clears_preview_and_redo() {
    let mut pad = pad(LeavePolicy::Continue);
    pad.handle_event(PointerEvent::Down(pos2(1.0, 1.0)));
    pad.handle_event(PointerEvent::Up);
    assert!(pad.undo());
    pad.handle_event(PointerEvent::Move(pos2(5.0, 5.0)));
    assert!(pad.display_list().tool_preview().is_some());

    pad.handle_event(PointerEvent::Down(pos2(5.0, 5.0)));
    assert!(pad.display_list().tool_preview().is_none());
    assert!(!pad.redo());
}

#[test]
fn test_stray_events_are_ignored() {
    let mut pad = pad(LeavePolicy::Continue);
    assert!(!pad.handle_event(PointerEvent::Up));

    pad.handle_event(PointerEvent::Down(pos2(1.0, 1.0)));
    assert!(!pad.handle_event(PointerEvent::Down(pos2(2.0, 2.0))));
    pad.handle_event(PointerEvent::Up);

    let stroke = pad.display_list().items()[0].as_stroke().expect("stroke");
    assert_eq!(stroke.points(), &[pos2(1.0, 1.0)]);
}

#[test]
fn test_leave_clears_preview() {
    let mut pad = pad(LeavePolicy::Discard);
    pad.handle_event(PointerEvent::Move(pos2(5.0, 5.0)));
    assert!(pad.handle_event(PointerEvent::Leave));
    assert!(pad.display_list().tool_preview().is_none());
    assert_eq!(pad.state(), EditorState::Idle);
}

#[test]
fn test_leave_continue_keeps_drawing() {
    let mut pad = pad(LeavePolicy::Continue);
    pad.handle_event(PointerEvent::Down(pos2(1.0, 1.0)));
    pad.handle_event(PointerEvent::Move(pos2(2.0, 2.0)));
    pad.handle_event(PointerEvent::Leave);

    assert_eq!(pad.state(), EditorState::Drawing);
    assert!(pad.display_list().in_progress().is_some());

    // Release off-canvas still commits
    assert!(pad.handle_event(PointerEvent::Up));
    assert_eq!(pad.display_list().items().len(), 1);
}

#[test]
fn test_leave_commit_finishes_stroke() {
    let mut pad = pad(LeavePolicy::Commit);
    pad.handle_event(PointerEvent::Down(pos2(1.0, 1.0)));
    pad.handle_event(PointerEvent::Move(pos2(2.0, 2.0)));
    pad.handle_event(PointerEvent::Leave);

    assert_eq!(pad.state(), EditorState::Idle);
    assert_eq!(pad.display_list().items().len(), 1);
    assert!(!pad.handle_event(PointerEvent::Up));
    assert_eq!(pad.display_list().items().len(), 1);
}

#[test]
fn test_leave_discard_drops_stroke() {
    let mut pad = pad(LeavePolicy::Discard);
    pad.handle_event(PointerEvent::Down(pos2(1.0, 1.0)));
    pad.handle_event(PointerEvent::Move(pos2(2.0, 2.0)));
    pad.handle_event(PointerEvent::Leave);

    assert_eq!(pad.state(), EditorState::Idle);
    assert!(pad.display_list().items().is_empty());
    assert!(pad.display_list().in_progress().is_none());
}

#[test]
fn test_tool_change_mid_drag_discards() {
    let mut pad = pad(LeavePolicy::Continue);
    pad.handle_event(PointerEvent::Down(pos2(1.0, 1.0)));
    assert!(pad.select_tool(Tool::sticker("😆")));
    assert_eq!(pad.state(), EditorState::Idle);
    assert!(pad.display_list().in_progress().is_none());
    assert!(pad.display_list().items().is_empty());
}

#[test]
fn test_clear_resets_machine() {
    let mut pad = pad(LeavePolicy::Continue);
    pad.handle_event(PointerEvent::Down(pos2(1.0, 1.0)));
    pad.handle_event(PointerEvent::Up);
    pad.handle_event(PointerEvent::Down(pos2(1.0, 1.0)));

    assert!(pad.clear());
    assert_eq!(pad.state(), EditorState::Idle);
    assert!(pad.display_list().items().is_empty());
    assert!(!pad.undo());
}

#[test]
fn test_from_config() {
    let config = SketchpadConfig::from_json(
        r#"{ "thin_thickness": 2.0, "stroke_color": [255, 0, 0], "leave_policy": "commit",
             "keep_single_point_strokes": false }"#,
    )
    .unwrap();
    let mut pad = Sketchpad::from_config(&config);

    assert_eq!(pad.leave_policy(), LeavePolicy::Commit);
    assert_eq!(pad.tool(), &Tool::marker(2.0, Color32::RED));

    // A click without movement is dropped under this config
    pad.handle_event(PointerEvent::Down(pos2(1.0, 1.0)));
    pad.handle_event(PointerEvent::Up);
    assert!(pad.display_list().items().is_empty());
}
