//! Domain types observed by the client views
//!
//! Defines:
//! - `Stage` - Which experience the screen shows
//! - `ActionKind` - Install channel of an action, with its badge asset
//! - `InstallAction` - A single install link and its activation hook
//! - `InstallViewModel` - Everything the install stage renders

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Which experience the client screen shows.
///
/// Values other than `open` and `install` are kept as [`Stage::Unrecognized`]
/// and render no stage content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Stage {
    /// The client is installed; offer the deep link
    Open,
    /// The client must be installed first
    Install,
    /// Anything else (e.g. a view-model that has not settled yet)
    Unrecognized(String),
}

impl Stage {
    pub fn as_str(&self) -> &str {
        match self {
            Stage::Open => "open",
            Stage::Install => "install",
            Stage::Unrecognized(other) => other,
        }
    }
}

impl From<&str> for Stage {
    fn from(value: &str) -> Self {
        match value {
            "open" => Stage::Open,
            "install" => Stage::Install,
            other => Stage::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for Stage {
    fn from(value: String) -> Self {
        Stage::from(value.as_str())
    }
}

impl From<Stage> for String {
    fn from(stage: Stage) -> Self {
        stage.as_str().to_string()
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Install channel of an [`InstallAction`].
///
/// The store kinds render as badges; everything else is a plain labelled link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActionKind {
    PlayStore,
    FDroid,
    AppleAppStore,
    Flathub,
    /// Generic link (website download, package manager page, ...)
    Other(String),
}

impl ActionKind {
    pub fn as_str(&self) -> &str {
        match self {
            ActionKind::PlayStore => "play-store",
            ActionKind::FDroid => "fdroid",
            ActionKind::AppleAppStore => "apple-app-store",
            ActionKind::Flathub => "flathub",
            ActionKind::Other(other) => other,
        }
    }

    /// Badge image file for store kinds, relative to the asset root
    pub fn badge_file(&self) -> Option<&'static str> {
        match self {
            ActionKind::PlayStore => Some("google-play-us.svg"),
            ActionKind::FDroid => Some("fdroid-badge.png"),
            ActionKind::AppleAppStore => Some("app-store-us-alt.svg"),
            ActionKind::Flathub => Some("flathub-badge.svg"),
            ActionKind::Other(_) => None,
        }
    }
}

impl From<&str> for ActionKind {
    fn from(value: &str) -> Self {
        match value {
            "play-store" => ActionKind::PlayStore,
            "fdroid" => ActionKind::FDroid,
            "apple-app-store" => ActionKind::AppleAppStore,
            "flathub" => ActionKind::Flathub,
            other => ActionKind::Other(other.to_string()),
        }
    }
}

impl From<String> for ActionKind {
    fn from(value: String) -> Self {
        ActionKind::from(value.as_str())
    }
}

impl From<ActionKind> for String {
    fn from(kind: ActionKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hook invoked when an install action is activated
pub type ActivationHook = Arc<dyn Fn() + Send + Sync>;

/// A single install link
#[derive(Clone)]
pub struct InstallAction {
    pub kind: ActionKind,
    pub url: String,
    /// Visible text for generic actions, accessible label for all of them
    pub label: String,
    pub primary: bool,
    on_activated: Option<ActivationHook>,
}

impl fmt::Debug for InstallAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstallAction")
            .field("kind", &self.kind)
            .field("url", &self.url)
            .field("label", &self.label)
            .field("primary", &self.primary)
            .field("on_activated", &self.on_activated.is_some())
            .finish()
    }
}

impl InstallAction {
    pub fn new(kind: impl Into<ActionKind>, url: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            url: url.into(),
            label: label.into(),
            primary: false,
            on_activated: None,
        }
    }

    pub fn with_primary(mut self, primary: bool) -> Self {
        self.primary = primary;
        self
    }

    /// Set the hook run by [`InstallAction::activated`]
    pub fn on_activated(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_activated = Some(Arc::new(hook));
        self
    }

    /// Notify the owner that the user followed this action
    pub fn activated(&self) {
        if let Some(hook) = &self.on_activated {
            hook();
        }
    }
}

/// Data the install stage renders
#[derive(Debug, Clone, Default)]
pub struct InstallViewModel {
    /// Setup command shown with a copy button
    pub text_instructions: Option<String>,
    /// Text placed on the clipboard by the copy button
    pub copy_string: String,
    /// Display order is preserved
    pub actions: Vec<InstallAction>,
    pub show_deep_link_in_install: bool,
}
