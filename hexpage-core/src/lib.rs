//! # Hexpage Core
//!
//! The color-URL state controller behind the Hexpage single-page color tool.
//!
//! ## Overview
//!
//! The crate keeps four things mutually consistent at all times: the
//! canonical color value, the page address (path, query parameters, hash),
//! the display surface, and the persisted last-used color.
//!
//! - [`address`]: address decomposition, bit-exact rendering, and the
//!   path-before-hash color resolution policy
//! - [`history`]: the session history stack with push/replace semantics
//! - [`controller`]: the state machine itself, message + update style
//! - [`events`]: raw surface events and the dispatcher with explicit
//!   handler registration
//! - [`schedule`]: deferred one-shot tasks driven by reported elapsed time
//! - [`services`]: collaborator seams (display, persistence, clipboard,
//!   export) plus the file-backed and PNG implementations
//! - [`testing`]: recording stubs for every collaborator
//!
//! ## Example
//!
//! ```
//! use hexpage_core::{Address, Controller};
//! use hexpage_core::testing::TestServices;
//!
//! let services = TestServices::default();
//! let mut controller = Controller::bootstrap(
//!     Address::parse("/ff8800?download=4k"),
//!     services.services(),
//! );
//! assert_eq!(controller.current_color().to_string(), "#ff8800");
//!
//! // deferred query effects fire once the settle delay elapses
//! controller.advance(hexpage_core::QUERY_EFFECT_SETTLE_DELAY);
//! assert_eq!(services.exporter.exports().len(), 1);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

pub mod address;
pub mod controller;
mod effects;
pub mod error;
pub mod events;
pub mod history;
pub mod schedule;
pub mod services;
pub mod testing;

pub use address::{Address, QueryParams};
pub use controller::{Controller, Message, Services};
pub use error::{CoreError, Result};
pub use events::{Dispatcher, HandlerId, Key, UiEvent};
pub use hexpage_model::{CanonicalColor, Resolution};
pub use history::SessionHistory;
pub use schedule::{QUERY_EFFECT_SETTLE_DELAY, TaskQueue};
