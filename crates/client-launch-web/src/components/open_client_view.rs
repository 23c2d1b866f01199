use client_launch_core::{update, Message, OpenView, SharedViewModel, LINK_REL};
use leptos::prelude::*;

use super::BackAffordance;

#[component]
pub fn OpenClientView(vm: SharedViewModel, open: OpenView) -> impl IntoView {
    let OpenView {
        continue_link,
        back,
    } = open;

    // Native navigation still follows the href
    let handle_continue = {
        let vm = vm.clone();
        move |_| update(vm.as_ref(), Message::DeepLinkActivated)
    };

    view! {
        <div class="OpenClientView">
            <a
                class="primary fullwidth"
                href=continue_link.href
                rel=LINK_REL
                on:click=handle_continue
            >
                {continue_link.text}
            </a>
            <BackAffordance vm=vm prompt=back />
        </div>
    }
}
