use egui::{pos2, vec2, Event, Modifiers, PointerButton, Pos2, RawInput, Rect, Sense};
use sketchpad::{DisplayList, InputHandler, LeavePolicy, PointerEvent, Sketchpad};

const CANVAS: f32 = 256.0;

/// Run one egui frame with the canvas at the top-left of the screen and
/// return what the input handler made of `events`.
fn frame(ctx: &egui::Context, handler: &mut InputHandler, events: Vec<Event>) -> Vec<PointerEvent> {
    let input = RawInput {
        screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(800.0, 600.0))),
        events,
        ..Default::default()
    };

    let mut out = Vec::new();
    let _ = ctx.run(input, |ctx| {
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (response, _painter) =
                    ui.allocate_painter(vec2(CANVAS, CANVAS), Sense::click_and_drag());
                out = handler.process_input(&response);
            });
    });
    out
}

fn setup() -> (egui::Context, InputHandler) {
    let ctx = egui::Context::default();
    let mut handler = InputHandler::new();
    // Lay the canvas out once so hit testing knows about it
    assert!(frame(&ctx, &mut handler, Vec::new()).is_empty());
    (ctx, handler)
}

fn moved(pos: Pos2) -> Event {
    Event::PointerMoved(pos)
}

fn button(pos: Pos2, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::default(),
    }
}

#[test]
fn test_leaving_mid_drag_reports_leave_before_release() {
    let (ctx, mut handler) = setup();
    let start = pos2(10.0, 10.0);
    let outside = pos2(500.0, 400.0);

    assert_eq!(frame(&ctx, &mut handler, vec![moved(start)]), vec![PointerEvent::Move(start)]);
    assert_eq!(frame(&ctx, &mut handler, vec![button(start, true)]), vec![PointerEvent::Down(start)]);
    assert_eq!(
        frame(&ctx, &mut handler, vec![moved(pos2(20.0, 20.0))]),
        vec![PointerEvent::Move(pos2(20.0, 20.0))]
    );

    // Still dragging, but off the canvas: no moves are appended
    assert_eq!(frame(&ctx, &mut handler, vec![moved(outside)]), vec![PointerEvent::Leave]);
    assert!(frame(&ctx, &mut handler, vec![moved(pos2(600.0, 450.0))]).is_empty());

    assert_eq!(frame(&ctx, &mut handler, vec![button(pos2(600.0, 450.0), false)]), vec![PointerEvent::Up]);
}

#[test]
fn test_release_off_canvas_still_commits() {
    let (ctx, mut handler) = setup();
    let mut pad = Sketchpad::new(DisplayList::new(), LeavePolicy::Continue);
    let mut feed = |events: Vec<PointerEvent>| {
        for event in events {
            pad.handle_event(event);
        }
    };

    feed(frame(&ctx, &mut handler, vec![moved(pos2(5.0, 5.0)), button(pos2(5.0, 5.0), true)]));
    feed(frame(&ctx, &mut handler, vec![moved(pos2(50.0, 5.0))]));
    feed(frame(&ctx, &mut handler, vec![moved(pos2(400.0, 5.0))]));
    let released = frame(&ctx, &mut handler, vec![button(pos2(400.0, 5.0), false)]);
    assert_eq!(released, vec![PointerEvent::Up]);
    feed(released);

    assert!(!pad.display_list().is_drawing());
    let items = pad.display_list().items();
    assert_eq!(items.len(), 1);
    let stroke = items[0].as_stroke().expect("stroke");
    assert_eq!(stroke.points(), &[pos2(5.0, 5.0), pos2(50.0, 5.0)]);
}

#[test]
fn test_press_with_move_in_same_frame_records_point_once() {
    let (ctx, mut handler) = setup();
    let mut pad = Sketchpad::new(DisplayList::new(), LeavePolicy::Continue);
    let at = pos2(30.0, 40.0);

    let events = frame(&ctx, &mut handler, vec![moved(at), button(at, true)]);
    assert_eq!(events, vec![PointerEvent::Move(at), PointerEvent::Down(at)]);
    for event in events {
        pad.handle_event(event);
    }
    for event in frame(&ctx, &mut handler, vec![button(at, false)]) {
        pad.handle_event(event);
    }

    let stroke = pad.display_list().items()[0].as_stroke().expect("stroke");
    assert_eq!(stroke.points(), &[at]);
}

#[test]
fn test_hover_ending_while_idle_leaves_once() {
    let (ctx, mut handler) = setup();

    assert_eq!(
        frame(&ctx, &mut handler, vec![moved(pos2(100.0, 100.0))]),
        vec![PointerEvent::Move(pos2(100.0, 100.0))]
    );
    assert_eq!(frame(&ctx, &mut handler, vec![Event::PointerGone]), vec![PointerEvent::Leave]);
    assert!(frame(&ctx, &mut handler, Vec::new()).is_empty());
}

#[test]
fn test_moving_off_canvas_while_idle_leaves_once() {
    let (ctx, mut handler) = setup();

    frame(&ctx, &mut handler, vec![moved(pos2(100.0, 100.0))]);
    assert_eq!(frame(&ctx, &mut handler, vec![moved(pos2(300.0, 100.0))]), vec![PointerEvent::Leave]);
    assert!(frame(&ctx, &mut handler, vec![moved(pos2(310.0, 100.0))]).is_empty());
}
