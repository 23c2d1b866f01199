//! client-launch Library
//!
//! Mounts the client screen for the bundled client description.

use client_launch_core::{
    load_config, ClientDescriptor, ClientViewConfig, ClientViewModel, Result, ResultExt, Stage,
};
use client_launch_web::{provide_view_config, ClientView, SignalClientViewModel};
use leptos::prelude::*;
use tracing::info;

/// Client shown by the demo page
pub const BUNDLED_CLIENT: &str = include_str!("../assets/clients/element.json");

/// View configuration of the demo page
pub const BUNDLED_CONFIG: &str = include_str!("../assets/client-launch.toml");

pub fn bundled_descriptor() -> Result<ClientDescriptor> {
    ClientDescriptor::from_json(BUNDLED_CLIENT).context("Failed to load bundled client")
}

pub fn bundled_config() -> ClientViewConfig {
    load_config(Some(BUNDLED_CONFIG))
}

#[component]
pub fn App() -> impl IntoView {
    provide_view_config(bundled_config());

    let descriptor = match bundled_descriptor() {
        Ok(descriptor) => descriptor,
        Err(e) => return view! { <p class="error">{e.to_string()}</p> }.into_any(),
    };

    let vm = SignalClientViewModel::new(descriptor, Stage::Open);

    // There is no client picker on this page, so "Change" flips the stage
    let stages = vm.clone();
    let vm = vm.with_on_back(Callback::new(move |()| {
        let next = match stages.stage() {
            Stage::Open => Stage::Install,
            _ => Stage::Open,
        };
        info!("Switching to {} stage", next);
        stages.set_stage(next);
    }));

    view! {
        <main>
            <ClientView vm=vm.into_shared() />
        </main>
    }
    .into_any()
}
