//! Query-parameter effect dispatcher.
//!
//! Runs at bootstrap and again after every pop-state navigation. Effects are
//! deferred by the settle delay so the color adopted by the same navigation
//! is in place before they fire.

use tracing::debug;

use crate::controller::{Controller, Message};
use crate::schedule::QUERY_EFFECT_SETTLE_DELAY;

pub(crate) fn dispatch_query_effects(controller: &mut Controller) {
    let query = &controller.history.current().query;

    if query.contains("fullscreen") {
        debug!("scheduling fullscreen entry from query parameter");
        controller
            .tasks
            .schedule(QUERY_EFFECT_SETTLE_DELAY, Message::FullscreenFromQuery);
    }

    if query.contains("download") {
        // the token is captured now, the color is read at fire time
        let token = query.value_of("download").map(str::to_owned);
        debug!(?token, "scheduling export from query parameter");
        controller
            .tasks
            .schedule(QUERY_EFFECT_SETTLE_DELAY, Message::DownloadFromQuery(token));
    }
}
