//! Edit-conflict countdown dialog.

use std::time::Duration;

use leptos::prelude::*;
use programedit_common::{format_wait, Countdown, CountdownStep};

use crate::state::EditorContext;

/// Show the conflict dialog and reload once the server-reported wait is over.
pub fn start_countdown(editor: EditorContext, wait_secs: i64) {
    let countdown = Countdown::start(wait_secs);
    let tick = Duration::from_millis(editor.config.with_value(|c| c.countdown_tick_ms) as u64);
    log::warn!("Edit conflict, retrying in {}", countdown.display());

    editor.show_conflict(&countdown.display());
    schedule_tick(editor, countdown, tick);
}

// Exactly one tick is pending at a time; the state travels with it.
fn schedule_tick(editor: EditorContext, countdown: Countdown, tick: Duration) {
    set_timeout(
        move || {
            let mut countdown = countdown;
            match countdown.tick() {
                CountdownStep::Remaining(secs) => {
                    editor.show_conflict(&format_wait(secs));
                    schedule_tick(editor, countdown, tick);
                }
                CountdownStep::Expired => reload_page(),
            }
        },
        tick,
    );
}

fn reload_page() {
    log::info!("Conflict wait elapsed, reloading");
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().reload() {
            log::error!("Reload failed: {:?}", e);
        }
    }
}
