//! Raw surface events and their routing.
//!
//! The display surface and platform produce [`UiEvent`]s; the [`Dispatcher`]
//! routes them to registered handlers with the controller as the single
//! dispatch target. Registration returns a [`HandlerId`] that unregisters
//! the handler again, so an embedding can tear down its wiring without
//! tearing down the controller.

use crate::controller::{Controller, Message};

/// Raw events from the display surface and the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The native color picker produced a value.
    PickerChanged(String),
    /// The hex field was committed (Enter or blur).
    HexSubmitted(String),
    /// Text was pasted into the hex field.
    TextPasted(String),
    /// A key went down; `in_text_input` suppresses single-letter shortcuts.
    KeyPressed { key: Key, in_text_input: bool },
    CopyClicked,
    /// Download control activated, with an optional resolution token.
    DownloadClicked(Option<String>),
    FullscreenClicked,
    /// Back/forward navigation landed on another history entry.
    PopState,
    /// The fragment changed in place.
    HashChanged,
    /// The platform reported a native fullscreen change.
    NativeFullscreenChanged(bool),
}

/// The keys the tool reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    F,
    Escape,
    Other,
}

/// Handle returned by [`Dispatcher::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

type Handler = Box<dyn FnMut(&mut Controller, &UiEvent)>;

/// Event router. Handlers run in registration order.
pub struct Dispatcher {
    handlers: Vec<(HandlerId, Handler)>,
    next_id: u64,
}

impl Dispatcher {
    /// An empty dispatcher with no bindings at all.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            next_id: 0,
        }
    }

    /// A dispatcher with the standard event-to-message bindings installed:
    /// color edits, copy/download/fullscreen controls, navigation events,
    /// and the keyboard policy (`f` toggles fullscreen outside text inputs,
    /// Escape exits while active).
    pub fn with_default_bindings() -> Self {
        let mut dispatcher = Self::new();
        dispatcher.register(default_binding);
        dispatcher
    }

    /// Register a handler; the returned id unregisters it again.
    pub fn register(
        &mut self,
        handler: impl FnMut(&mut Controller, &UiEvent) + 'static,
    ) -> HandlerId {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Remove a previously registered handler. Returns whether it existed.
    pub fn unregister(&mut self, id: HandlerId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
        self.handlers.len() != before
    }

    /// Deliver one event to every handler, in registration order.
    pub fn dispatch(&mut self, controller: &mut Controller, event: UiEvent) {
        for (_, handler) in &mut self.handlers {
            handler(controller, &event);
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

/// The standard event-to-message mapping.
fn default_binding(controller: &mut Controller, event: &UiEvent) {
    match event {
        UiEvent::PickerChanged(value) | UiEvent::HexSubmitted(value) => {
            controller.handle(Message::SetColor(value.clone()));
        }
        UiEvent::TextPasted(text) => {
            let text = text.trim();
            if !text.is_empty() {
                controller.handle(Message::SetColor(text.to_string()));
            }
        }
        UiEvent::KeyPressed {
            key: Key::F,
            in_text_input: false,
        } => controller.handle(Message::FullscreenToggled),
        UiEvent::KeyPressed {
            key: Key::Escape, ..
        } => controller.handle(Message::FullscreenExitRequested),
        UiEvent::KeyPressed { .. } => {}
        UiEvent::CopyClicked => controller.handle(Message::CopyRequested),
        UiEvent::DownloadClicked(token) => {
            controller.handle(Message::DownloadRequested(token.clone()));
        }
        UiEvent::FullscreenClicked => {
            controller.handle(Message::FullscreenToggled);
        }
        UiEvent::PopState => controller.handle(Message::PopState),
        UiEvent::HashChanged => controller.handle(Message::HashChanged),
        UiEvent::NativeFullscreenChanged(active) => {
            controller.handle(Message::NativeFullscreenChanged(*active));
        }
    }
}
