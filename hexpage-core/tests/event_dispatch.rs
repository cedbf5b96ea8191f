//! Raw-event routing: default bindings, keyboard policy, and handler
//! registration lifecycle.

use std::sync::{Arc, Mutex};

use hexpage_core::testing::TestServices;
use hexpage_core::{
    Address, Controller, Dispatcher, Key, UiEvent,
};

fn bootstrap(address: &str) -> (Controller, TestServices) {
    let services = TestServices::default();
    let controller =
        Controller::bootstrap(Address::parse(address), services.services());
    (controller, services)
}

#[test]
fn picker_and_hex_field_both_set_the_color() {
    let (mut controller, _services) = bootstrap("/");
    let mut dispatcher = Dispatcher::with_default_bindings();

    dispatcher.dispatch(
        &mut controller,
        UiEvent::PickerChanged("#ff0000".to_string()),
    );
    assert_eq!(controller.current_color().to_string(), "#ff0000");

    dispatcher.dispatch(
        &mut controller,
        UiEvent::HexSubmitted("AbC".to_string()),
    );
    assert_eq!(controller.current_color().to_string(), "#aabbcc");
}

#[test]
fn pasted_text_is_trimmed_and_submitted() {
    let (mut controller, services) = bootstrap("/");
    let mut dispatcher = Dispatcher::with_default_bindings();

    dispatcher.dispatch(
        &mut controller,
        UiEvent::TextPasted("  #00ff00  ".to_string()),
    );
    assert_eq!(controller.current_color().to_string(), "#00ff00");

    // garbage paste is rejected with a notice, like any other bad input
    dispatcher
        .dispatch(&mut controller, UiEvent::TextPasted("zzz".to_string()));
    assert_eq!(
        services.display.notices().last().map(String::as_str),
        Some("Invalid hex code")
    );

    // whitespace-only paste does nothing at all
    let notices_before = services.display.notices().len();
    dispatcher
        .dispatch(&mut controller, UiEvent::TextPasted("   ".to_string()));
    assert_eq!(services.display.notices().len(), notices_before);
}

#[test]
fn f_toggles_fullscreen_outside_text_inputs_only() {
    let (mut controller, _services) = bootstrap("/aabbcc");
    let mut dispatcher = Dispatcher::with_default_bindings();

    dispatcher.dispatch(
        &mut controller,
        UiEvent::KeyPressed {
            key: Key::F,
            in_text_input: true,
        },
    );
    assert!(!controller.is_fullscreen());

    dispatcher.dispatch(
        &mut controller,
        UiEvent::KeyPressed {
            key: Key::F,
            in_text_input: false,
        },
    );
    assert!(controller.is_fullscreen());
}

#[test]
fn escape_exits_only_while_fullscreen() {
    let (mut controller, services) = bootstrap("/aabbcc");
    let mut dispatcher = Dispatcher::with_default_bindings();

    dispatcher.dispatch(
        &mut controller,
        UiEvent::KeyPressed {
            key: Key::Escape,
            in_text_input: false,
        },
    );
    assert!(services.display.decorations().is_empty());

    dispatcher.dispatch(&mut controller, UiEvent::FullscreenClicked);
    dispatcher.dispatch(
        &mut controller,
        UiEvent::KeyPressed {
            key: Key::Escape,
            in_text_input: true,
        },
    );
    assert!(!controller.is_fullscreen());
    assert_eq!(services.display.decorations(), vec![true, false]);
}

#[test]
fn other_keys_are_ignored() {
    let (mut controller, services) = bootstrap("/aabbcc");
    let mut dispatcher = Dispatcher::with_default_bindings();
    dispatcher.dispatch(
        &mut controller,
        UiEvent::KeyPressed {
            key: Key::Other,
            in_text_input: false,
        },
    );
    assert!(!controller.is_fullscreen());
    assert!(services.display.notices().is_empty());
}

#[test]
fn copy_and_download_controls_route_through() {
    let (mut controller, services) = bootstrap("/aabbcc");
    let mut dispatcher = Dispatcher::with_default_bindings();

    dispatcher.dispatch(&mut controller, UiEvent::CopyClicked);
    assert_eq!(services.clipboard.copied(), vec!["#aabbcc"]);

    dispatcher.dispatch(
        &mut controller,
        UiEvent::DownloadClicked(Some("6k".to_string())),
    );
    let exports = services.exporter.exports();
    assert_eq!(exports.len(), 1);
    assert_eq!((exports[0].1.width, exports[0].1.height), (6144, 3456));
}

#[test]
fn unregistered_handlers_stop_receiving_events() {
    let (mut controller, _services) = bootstrap("/");
    let mut dispatcher = Dispatcher::new();

    let seen: Arc<Mutex<usize>> = Arc::new(Mutex::new(0));
    let counter = seen.clone();
    let id = dispatcher.register(move |_controller, _event| {
        *counter.lock().unwrap() += 1;
    });
    assert_eq!(dispatcher.handler_count(), 1);

    dispatcher.dispatch(&mut controller, UiEvent::CopyClicked);
    assert_eq!(*seen.lock().unwrap(), 1);

    assert!(dispatcher.unregister(id));
    assert!(!dispatcher.unregister(id));
    assert_eq!(dispatcher.handler_count(), 0);

    dispatcher.dispatch(&mut controller, UiEvent::CopyClicked);
    assert_eq!(*seen.lock().unwrap(), 1);
}

#[test]
fn extra_handlers_observe_events_alongside_the_defaults() {
    let (mut controller, _services) = bootstrap("/");
    let mut dispatcher = Dispatcher::with_default_bindings();

    let log: Arc<Mutex<Vec<UiEvent>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = log.clone();
    dispatcher.register(move |_controller, event| {
        sink.lock().unwrap().push(event.clone());
    });

    dispatcher.dispatch(
        &mut controller,
        UiEvent::HexSubmitted("ff0000".to_string()),
    );

    assert_eq!(controller.current_color().to_string(), "#ff0000");
    assert_eq!(
        *log.lock().unwrap(),
        vec![UiEvent::HexSubmitted("ff0000".to_string())]
    );
}

#[test]
fn navigation_events_reach_the_controller() {
    let (mut controller, _services) = bootstrap("/ff0000");
    let mut dispatcher = Dispatcher::with_default_bindings();

    controller.handle(hexpage_core::Message::SetColor("00ff00".to_string()));
    controller.history_mut().back();
    dispatcher.dispatch(&mut controller, UiEvent::PopState);
    assert_eq!(controller.current_color().to_string(), "#ff0000");

    controller.history_mut().push(Address::parse("/#0000ff"));
    dispatcher.dispatch(&mut controller, UiEvent::HashChanged);
    assert_eq!(controller.current_color().to_string(), "#0000ff");
}

#[test]
fn native_fullscreen_exit_event_routes_through() {
    let (mut controller, _services) = bootstrap("/aabbcc");
    let mut dispatcher = Dispatcher::with_default_bindings();

    dispatcher.dispatch(&mut controller, UiEvent::FullscreenClicked);
    assert!(controller.is_fullscreen());

    dispatcher
        .dispatch(&mut controller, UiEvent::NativeFullscreenChanged(false));
    assert!(!controller.is_fullscreen());
}
