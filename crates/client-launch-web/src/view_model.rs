//! Signal-backed view-model
//!
//! Reads go through Leptos signals, so the views re-render when `stage` or
//! `show_back` change.

use std::sync::Arc;

use client_launch_core::{
    ClientDescriptor, ClientViewModel, InstallViewModel, SharedViewModel, Stage,
};
use leptos::prelude::*;
use tracing::info;

#[derive(Clone)]
pub struct SignalClientViewModel {
    descriptor: Arc<ClientDescriptor>,
    stage: RwSignal<Stage>,
    show_back: RwSignal<bool>,
    show_deep_link_in_install: RwSignal<bool>,
    on_back: Option<Callback<()>>,
}

impl SignalClientViewModel {
    pub fn new(descriptor: ClientDescriptor, stage: Stage) -> Self {
        Self {
            descriptor: Arc::new(descriptor),
            stage: RwSignal::new(stage),
            show_back: RwSignal::new(true),
            show_deep_link_in_install: RwSignal::new(false),
            on_back: None,
        }
    }

    /// Run `callback` when the user presses "Change"
    pub fn with_on_back(mut self, callback: Callback<()>) -> Self {
        self.on_back = Some(callback);
        self
    }

    pub fn set_stage(&self, stage: Stage) {
        self.stage.set(stage);
    }

    pub fn set_show_back(&self, show_back: bool) {
        self.show_back.set(show_back);
    }

    pub fn into_shared(self) -> SharedViewModel {
        Arc::new(self)
    }
}

impl ClientViewModel for SignalClientViewModel {
    fn name(&self) -> String {
        self.descriptor.name.clone()
    }

    fn description(&self) -> String {
        self.descriptor.description.clone()
    }

    fn icon_url(&self) -> String {
        self.descriptor.icon_url.clone()
    }

    fn available_on_platform_names(&self) -> Vec<String> {
        self.descriptor.platforms.clone()
    }

    fn stage(&self) -> Stage {
        self.stage.get()
    }

    fn deep_link(&self) -> String {
        self.descriptor.deep_link.clone()
    }

    fn show_back(&self) -> bool {
        self.show_back.get()
    }

    fn install(&self) -> Option<InstallViewModel> {
        if self.stage.get_untracked() != Stage::Install {
            return None;
        }

        let actions = self
            .descriptor
            .install_actions()
            .into_iter()
            .map(|action| {
                let client = self.descriptor.name.clone();
                let kind = action.kind.clone();
                action.on_activated(move || info!("{} install via '{}'", client, kind))
            })
            .collect();

        Some(InstallViewModel {
            text_instructions: self.descriptor.text_instructions.clone(),
            copy_string: self.descriptor.copy_text(),
            actions,
            show_deep_link_in_install: self.show_deep_link_in_install.get_untracked(),
        })
    }

    fn deep_link_activated(&self) {
        info!("Deep link for {} followed", self.descriptor.name);
        // If the client did not open, the install stage offers the link again
        self.show_deep_link_in_install.set(true);
    }

    fn back(&self) {
        info!("Leaving {}", self.descriptor.name);
        if let Some(callback) = &self.on_back {
            callback.run(());
        }
    }
}
