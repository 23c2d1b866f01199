use client_launch_core::{
    update, ActionContent, ActionView, InstallView, Message, SharedViewModel, LINK_REL,
};
use leptos::prelude::*;

use super::{BackAffordance, CopyButton};
use crate::context::use_view_config;

#[component]
pub fn InstallClientView(vm: SharedViewModel, install: InstallView) -> impl IntoView {
    let InstallView {
        instructions,
        actions,
        deep_link_fallback,
        back,
    } = install;
    let config = use_view_config();

    view! {
        <div class="InstallClientView">
            {instructions.map(|instructions| {
                view! {
                    <p class="instructions">
                        <code>{instructions.text}</code>
                        <CopyButton
                            text=instructions.copy_string
                            window=config.copy_confirmation()
                        />
                    </p>
                }
            })}

            <div class="actions">
                {actions
                    .into_iter()
                    .map(|item| view! { <InstallActionLink vm=vm.clone() item=item /> })
                    .collect_view()}
            </div>

            {deep_link_fallback.map(|fallback| {
                let vm = vm.clone();
                view! {
                    <p>
                        {fallback.lead}
                        <a
                            rel=LINK_REL
                            href=fallback.link.href
                            on:click=move |_| update(vm.as_ref(), Message::DeepLinkActivated)
                        >
                            {fallback.link.text}
                        </a>
                        "."
                    </p>
                }
            })}

            <BackAffordance vm=vm.clone() prompt=back />
        </div>
    }
}

/// A badge or labelled link; the label is always the accessible name
#[component]
fn InstallActionLink(vm: SharedViewModel, item: ActionView) -> impl IntoView {
    let ActionView {
        href,
        aria_label,
        content,
        classes,
        action,
    } = item;

    let handle_activate = move |_| update(vm.as_ref(), Message::InstallActionActivated(action.clone()));

    view! {
        <a
            href=href
            class=classes.class_name()
            rel=LINK_REL
            aria-label=aria_label
            on:click=handle_activate
        >
            {match content {
                ActionContent::Badge { src } => view! { <img src=src /> }.into_any(),
                ActionContent::Label(label) => label.into_any(),
            }}
        </a>
    }
}
