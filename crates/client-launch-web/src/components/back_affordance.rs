use client_launch_core::{back_hidden, update, BackPrompt, Message, SharedViewModel, CHANGE_LABEL};
use leptos::prelude::*;

/// "Continue with X. Change"
///
/// Hidden through a class while `show_back` is off, never removed.
#[component]
pub fn BackAffordance(vm: SharedViewModel, prompt: BackPrompt) -> impl IntoView {
    let hidden = {
        let vm = vm.clone();
        move || back_hidden(vm.as_ref())
    };
    let handle_change = move |_| update(vm.as_ref(), Message::Back);

    view! {
        <p class="previewSource" class:hidden=hidden>
            {prompt.sentence}
            " "
            <button class="text" on:click=handle_change>
                {CHANGE_LABEL}
            </button>
        </p>
    }
}
