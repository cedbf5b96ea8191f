//! Message handlers. Each external event becomes exactly one state update
//! plus its effects; nothing here blocks, and every failure path leaves the
//! color, the address, and the display mutually consistent.

use hexpage_model::{CanonicalColor, Resolution};
use tracing::{debug, warn};

use crate::address::Address;
use crate::effects;

use super::{Controller, Message};

pub(crate) fn handle(controller: &mut Controller, message: Message) {
    match message {
        Message::SetColor(raw) => handle_set_color(controller, &raw),
        Message::PopState => handle_pop_state(controller),
        Message::HashChanged => handle_hash_changed(controller),
        Message::CopyRequested => handle_copy(controller),
        Message::DownloadRequested(token) => {
            handle_download(controller, token.as_deref());
        }
        Message::FullscreenToggled => {
            if controller.fullscreen {
                exit_fullscreen(controller);
            } else {
                enter_fullscreen(controller, false);
            }
        }
        Message::FullscreenExitRequested => {
            if controller.fullscreen {
                exit_fullscreen(controller);
            }
        }
        Message::NativeFullscreenChanged(active) => {
            // only the exit direction is ours to mirror; entry always goes
            // through our own messages
            if !active && controller.fullscreen {
                exit_fullscreen(controller);
            }
        }
        Message::FullscreenFromQuery => enter_fullscreen(controller, true),
        Message::DownloadFromQuery(token) => {
            handle_download(controller, token.as_deref());
            remove_query_param(controller, "download");
        }
    }
}

fn handle_set_color(controller: &mut Controller, raw: &str) {
    let color = match CanonicalColor::parse(raw) {
        Ok(color) => color,
        Err(err) => {
            debug!(%err, "rejected color input");
            controller.display.show_notice("Invalid hex code");
            return;
        }
    };
    adopt_color(controller, color);
}

/// The single path every accepted color goes through: state, display,
/// address, store — in that order.
fn adopt_color(controller: &mut Controller, color: CanonicalColor) {
    controller.current = color;
    controller.display.apply_color(&color, color.is_light());
    rewrite_address(controller);
    if let Err(err) = controller.store.save(&color) {
        warn!(%err, "failed to persist color");
    }
}

/// Rewrite the address to the canonical form for the current color.
///
/// Path is `/` + six hex digits, query carried over verbatim, hash cleared.
/// A new history entry is spent only when path or query actually change; a
/// hash-only difference is a replace, so no-op sets never duplicate entries.
fn rewrite_address(controller: &mut Controller) {
    let target = Address::for_color(
        &controller.current,
        controller.history.current().query.clone(),
    );
    let current = controller.history.current();
    if current.path != target.path || current.query != target.query {
        controller.history.push(target);
    } else if current.hash.is_some() {
        controller.history.replace(target);
    }
}

fn handle_pop_state(controller: &mut Controller) {
    if let Some(color) = controller.history.current().resolve_color() {
        adopt_color(controller, color);
    }
    effects::dispatch_query_effects(controller);
}

fn handle_hash_changed(controller: &mut Controller) {
    if let Some(color) = controller.history.current().resolve_color() {
        adopt_color(controller, color);
    }
}

fn handle_copy(controller: &mut Controller) {
    let text = controller.current.to_string();
    match controller.clipboard.copy_text(&text) {
        Ok(()) => controller.display.show_notice("Copied to clipboard!"),
        Err(err) => {
            debug!(%err, "clipboard copy failed");
            controller.display.show_notice("Failed to copy");
        }
    }
}

fn handle_download(controller: &mut Controller, token: Option<&str>) {
    let resolution = Resolution::parse(token);
    // current color read here, at fire time: a deferred download that raced
    // a set_color exports the newer color
    match controller.exporter.export(&controller.current, &resolution) {
        Ok(()) => {
            let notice = format!("Download started! ({})", resolution.label());
            controller.display.show_notice(&notice);
        }
        Err(err) => {
            warn!(%err, "color export failed");
            controller.display.show_notice("Download failed");
        }
    }
}

fn enter_fullscreen(controller: &mut Controller, reflect_in_address: bool) {
    controller.fullscreen = true;
    controller.display.set_fullscreen_decoration(true);
    if let Err(err) = controller.display.request_native_fullscreen() {
        // denied or missing API; decorated fullscreen still applies
        debug!(%err, "native fullscreen unavailable");
    }
    if reflect_in_address
        && !controller.history.current().query.contains("fullscreen")
    {
        ensure_query_param(controller, "fullscreen", "");
    }
}

fn exit_fullscreen(controller: &mut Controller) {
    controller.fullscreen = false;
    controller.display.set_fullscreen_decoration(false);
    if let Err(err) = controller.display.exit_native_fullscreen() {
        debug!(%err, "native fullscreen exit failed");
    }
    remove_query_param(controller, "fullscreen");
}

/// Bookkeeping parameter add: replace, never push.
fn ensure_query_param(controller: &mut Controller, name: &str, value: &str) {
    let address = controller.history.current().with_query_param(name, value);
    controller.history.replace(address);
}

/// Bookkeeping parameter removal: replace, never push, no-op when absent.
fn remove_query_param(controller: &mut Controller, name: &str) {
    let current = controller.history.current();
    if !current.query.contains(name) {
        return;
    }
    let address = current.without_query_param(name);
    controller.history.replace(address);
}
