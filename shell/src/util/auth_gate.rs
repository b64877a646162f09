//! Reactive wiring for the auth-loader state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! Installs the two producers of [`AuthGate`]: an effect watching the user
//! identity and, in the browser, an interval ticking every
//! `waitBeforeLogin` milliseconds. Both live as long as the calling
//! component; disposing its owner drops the interval, which cancels it.

#[cfg(test)]
#[path = "auth_gate_test.rs"]
mod auth_gate_test;

use leptos::prelude::*;

use crate::state::auth_gate::{AuthGate, AuthGateWrite};
use crate::state::store::ShellStore;
use crate::util::query_mode::QueryMode;

/// Install the auth gate for the current component and return its signal.
pub fn install_auth_gate(
    store: ShellStore,
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))] mode: Memo<QueryMode>,
) -> ReadSignal<AuthGate> {
    let gate = RwSignal::new(AuthGate::default());
    let user_id = store.user_id();

    // Reactive path: runs on mount and on every user identity change.
    Effect::new(move |_| {
        let present = user_id.with(Option::is_some);
        gate.update(|g| {
            let before = g.auth_loader();
            report(before, g.on_user_changed(present));
        });
    });

    #[cfg(feature = "hydrate")]
    {
        use crate::state::auth_gate::poll_period_ms;

        let wait = store.wait_before_login();

        // Poll path: the returned interval is held by the effect. A new
        // period replaces (and drops) the previous interval.
        Effect::new(move |previous: Option<Option<gloo_timers::callback::Interval>>| {
            drop(previous);
            let period = poll_period_ms(wait.get())?;
            Some(gloo_timers::callback::Interval::new(period, move || {
                let present = user_id.with_untracked(Option::is_some);
                let sign_in = mode.with_untracked(QueryMode::is_sign_in);
                gate.update(|g| {
                    let before = g.auth_loader();
                    report(before, g.on_poll_tick(present, sign_in));
                });
            }))
        });
    }

    on_cleanup(|| leptos::logging::log!("auth gate stopped"));

    gate.read_only()
}

fn report(before: bool, write: AuthGateWrite) {
    if before != write.value {
        leptos::logging::log!("auth loader {} -> {} via {:?}", before, write.value, write.path);
    }
}
