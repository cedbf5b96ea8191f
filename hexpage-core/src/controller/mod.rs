//! The color state controller.
//!
//! Owns the canonical color, the fullscreen flag, the session history, and
//! the deferred-task queue, and drives the collaborator services. External
//! events arrive as [`Message`]s (see [`crate::events`] for the raw-event
//! layer); every handler lives in [`update`].

pub mod messages;
mod update;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use hexpage_model::CanonicalColor;
use tracing::{debug, info};

use crate::address::Address;
use crate::effects;
use crate::history::SessionHistory;
use crate::schedule::TaskQueue;
use crate::services::{
    ClipboardSurface, ColorStore, DisplaySurface, ExportSurface,
};

pub use messages::Message;

/// Collaborator handles the controller is constructed with.
#[derive(Clone)]
pub struct Services {
    pub display: Arc<dyn DisplaySurface>,
    pub store: Arc<dyn ColorStore>,
    pub exporter: Arc<dyn ExportSurface>,
    pub clipboard: Arc<dyn ClipboardSurface>,
}

impl fmt::Debug for Services {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}

/// The Color-URL state controller.
///
/// One instance per page, constructed at startup, alive until unload. All
/// state transitions run synchronously on the caller's thread; deferred
/// effects go through the task queue and fire from [`Controller::advance`].
pub struct Controller {
    pub(crate) current: CanonicalColor,
    pub(crate) fullscreen: bool,
    pub(crate) history: SessionHistory,
    pub(crate) tasks: TaskQueue,
    pub(crate) display: Arc<dyn DisplaySurface>,
    pub(crate) store: Arc<dyn ColorStore>,
    pub(crate) exporter: Arc<dyn ExportSurface>,
    pub(crate) clipboard: Arc<dyn ClipboardSurface>,
}

impl Controller {
    /// Construct the controller and run the startup sequence.
    ///
    /// Color precedence at startup: the address, then the stored last color,
    /// then a random fallback. The adopted color flows through the normal
    /// set path (display repaint, address rewrite, persistence), after which
    /// any query-parameter effects are scheduled.
    pub fn bootstrap(initial_address: Address, services: Services) -> Self {
        let mut controller = Self {
            current: CanonicalColor::default(),
            fullscreen: false,
            history: SessionHistory::new(initial_address),
            tasks: TaskQueue::default(),
            display: services.display,
            store: services.store,
            exporter: services.exporter,
            clipboard: services.clipboard,
        };

        let startup = controller
            .history
            .current()
            .resolve_color()
            .or_else(|| controller.store.load())
            .unwrap_or_else(|| {
                let color = random_color();
                info!(%color, "no startup color in address or store, using random fallback");
                color
            });
        controller.handle(Message::SetColor(startup.to_string()));
        effects::dispatch_query_effects(&mut controller);
        controller
    }

    /// Dispatch one message through the update logic.
    pub fn handle(&mut self, message: Message) {
        debug!(message = message.name(), "dispatching");
        update::handle(self, message);
    }

    /// Report elapsed time; fires any deferred messages that became due.
    pub fn advance(&mut self, elapsed: Duration) {
        for message in self.tasks.advance(elapsed) {
            self.handle(message);
        }
    }

    /// Simulate the user pressing back. Returns false at the history edge.
    pub fn go_back(&mut self) -> bool {
        if self.history.back().is_none() {
            return false;
        }
        self.handle(Message::PopState);
        true
    }

    /// Simulate the user pressing forward.
    pub fn go_forward(&mut self) -> bool {
        if self.history.forward().is_none() {
            return false;
        }
        self.handle(Message::PopState);
        true
    }

    pub fn current_color(&self) -> CanonicalColor {
        self.current
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn address(&self) -> &Address {
        self.history.current()
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    /// Mutable history access: the seam an embedding uses to reflect
    /// platform-initiated navigations (typed URLs, fragment edits) before
    /// dispatching [`Message::PopState`] or [`Message::HashChanged`].
    pub fn history_mut(&mut self) -> &mut SessionHistory {
        &mut self.history
    }

    /// Number of deferred messages not yet due.
    pub fn pending_tasks(&self) -> usize {
        self.tasks.pending_len()
    }
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("current", &self.current)
            .field("fullscreen", &self.fullscreen)
            .field("address", &self.history.current().render())
            .field("pending_tasks", &self.tasks.pending_len())
            .finish_non_exhaustive()
    }
}

fn random_color() -> CanonicalColor {
    let [r, g, b] = rand::random();
    CanonicalColor::from_rgb(r, g, b)
}
