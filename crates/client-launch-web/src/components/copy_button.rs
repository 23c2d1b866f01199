use std::time::Duration;

use client_launch_core::CopyFeedback;
use leptos::prelude::*;
use tracing::warn;

use crate::clipboard::copy_text;

/// Copies `text` and shows a tick for the confirmation window.
///
/// The revert timer belongs to this button: it is cleared on cleanup, and a
/// stale timer cannot revert a newer confirmation.
#[component]
pub fn CopyButton(
    text: String,
    #[prop(optional)] window: Option<Duration>,
) -> impl IntoView {
    let feedback = RwSignal::new(window.map(CopyFeedback::new).unwrap_or_default());
    let pending = StoredValue::new(None::<TimeoutHandle>);

    on_cleanup(move || {
        feedback.try_update(CopyFeedback::release);
        if let Some(handle) = pending.try_get_value().flatten() {
            handle.clear();
        }
    });

    let handle_copy = move |_| {
        let text = text.clone();
        leptos::task::spawn_local(async move {
            let copied = copy_text(&text).await;
            let Some(Some(ticket)) = feedback.try_update(|f| f.record_copy(copied)) else {
                return;
            };

            let revert = move || {
                feedback.try_update(|f| f.expire(ticket));
            };
            match set_timeout_with_handle(revert, ticket.delay()) {
                Ok(handle) => {
                    let previous = pending.try_update_value(|slot| slot.replace(handle)).flatten();
                    if let Some(previous) = previous {
                        previous.clear();
                    }
                }
                Err(e) => warn!("Failed to schedule copy confirmation revert: {:?}", e),
            }
        });
    };

    view! {
        <button
            class=move || feedback.with(|f| f.label().class())
            aria-label=move || feedback.with(|f| f.label().title())
            on:click=handle_copy
        ></button>
    }
}
