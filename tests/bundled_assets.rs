//! The bundled client and config must load and present cleanly

use client_launch::{bundled_config, bundled_descriptor};
use client_launch_core::{
    present_header, present_stage, ActionContent, ClientDescriptor, ClientViewModel,
    InstallViewModel, Stage, StageView,
};

/// Plain view-model over a descriptor, fixed at one stage
struct FixedStage {
    descriptor: ClientDescriptor,
    stage: Stage,
}

impl ClientViewModel for FixedStage {
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
        self.stage.clone()
    }

    fn deep_link(&self) -> String {
        self.descriptor.deep_link.clone()
    }

    fn show_back(&self) -> bool {
        true
    }

    fn install(&self) -> Option<InstallViewModel> {
        Some(InstallViewModel {
            text_instructions: self.descriptor.text_instructions.clone(),
            copy_string: self.descriptor.copy_text(),
            actions: self.descriptor.install_actions(),
            show_deep_link_in_install: true,
        })
    }

    fn deep_link_activated(&self) {}

    fn back(&self) {}
}

#[test]
fn test_bundled_descriptor_loads() {
    let descriptor = bundled_descriptor().expect("bundled client is valid");

    assert_eq!(descriptor.name, "Element");
    assert!(!descriptor.platforms.is_empty());
    assert_eq!(descriptor.copy_text(), "flatpak install flathub im.riot.Riot");
}

#[test]
fn test_bundled_config_loads() {
    let config = bundled_config();

    assert_eq!(config.asset_root, "images/");
    assert_eq!(config.copy_confirmation_ms, 2000);
}

#[test]
fn test_bundled_header() {
    let vm = FixedStage {
        descriptor: bundled_descriptor().unwrap(),
        stage: Stage::Open,
    };

    let header = present_header(&vm);
    assert_eq!(
        header.platforms,
        "iOS, Android, Web, macOS, Windows & Linux"
    );
}

#[test]
fn test_bundled_install_stage_mixes_badges_and_labels() {
    let vm = FixedStage {
        descriptor: bundled_descriptor().unwrap(),
        stage: Stage::Install,
    };

    let StageView::Install(install) = present_stage(&vm, &vm.stage(), &bundled_config()) else {
        panic!("expected install view");
    };

    let badges: Vec<_> = install
        .actions
        .iter()
        .filter_map(|a| match &a.content {
            ActionContent::Badge { src } => Some(src.as_str()),
            ActionContent::Label(_) => None,
        })
        .collect();
    assert_eq!(
        badges,
        [
            "images/app-store-us-alt.svg",
            "images/google-play-us.svg",
            "images/fdroid-badge.png",
            "images/flathub-badge.svg",
        ]
    );

    let download = &install.actions[4];
    assert_eq!(
        download.content,
        ActionContent::Label("Download Element".to_string())
    );
    assert_eq!(download.classes.class_name(), "fullwidth primary");
    assert_eq!(install.actions[5].classes.class_name(), "fullwidth secondary");

    assert!(install.deep_link_fallback.is_some());
}
