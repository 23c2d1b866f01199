use client_launch_core::{present_header, present_stage, SharedViewModel, StageView};
use leptos::prelude::*;
use tracing::debug;

use super::{InstallClientView, OpenClientView};
use crate::context::use_view_config;

/// Client header plus the content for the current stage.
///
/// Only `stage` is tracked here: the stage content is rebuilt when its value
/// changes and reads everything else untracked.
#[component]
pub fn ClientView(vm: SharedViewModel) -> impl IntoView {
    let header = present_header(vm.as_ref());
    let config = use_view_config();

    let stage = {
        let vm = vm.clone();
        Memo::new(move |_| vm.stage())
    };

    let name = header.name.clone();
    let stage_content = move || {
        let stage = stage.get();
        debug!("Rendering {} stage for {}", stage, name);

        match untrack(|| present_stage(vm.as_ref(), &stage, &config)) {
            StageView::Open(open) => view! { <OpenClientView vm=vm.clone() open=open /> }.into_any(),
            StageView::Install(install) => {
                view! { <InstallClientView vm=vm.clone() install=install /> }.into_any()
            }
            StageView::Empty => ().into_any(),
        }
    };

    view! {
        <div class="ClientView">
            <div class="header">
                <div class="description">
                    <h3>{header.name}</h3>
                    <p>{header.description}</p>
                    <p class="platforms">{header.platforms}</p>
                </div>
                <img class="clientIcon" src=header.icon_url />
            </div>
            {stage_content}
        </div>
    }
}
