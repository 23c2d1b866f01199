//! Presentation model of the client screen
//!
//! Turns a [`ClientViewModel`] into framework-free view descriptions. The UI
//! layer renders these verbatim, so everything the screen shows (links,
//! classes, accessible labels, badge images) is decided here.

use tracing::{debug, warn};

use crate::config::ClientViewConfig;
use crate::format::format_platforms;
use crate::types::{InstallAction, Stage};
use crate::view_model::ClientViewModel;

/// `rel` attribute of every outgoing link
pub const LINK_REL: &str = "noopener noreferrer";

pub const CONTINUE_LABEL: &str = "Continue";
pub const OPEN_HERE_LABEL: &str = "open it here";
pub const CHANGE_LABEL: &str = "Change";

/// Static header above the stage content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub description: String,
    /// Already joined, e.g. `"iOS, Android & Web"`
    pub platforms: String,
    pub icon_url: String,
}

pub fn present_header(vm: &dyn ClientViewModel) -> Header {
    Header {
        name: vm.name(),
        description: vm.description(),
        platforms: format_platforms(&vm.available_on_platform_names()),
        icon_url: vm.icon_url(),
    }
}

/// A link following the client's deep link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLinkView {
    pub href: String,
    pub text: &'static str,
}

/// The "Continue with X. Change" row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackPrompt {
    pub sentence: String,
}

impl BackPrompt {
    pub fn new(name: &str) -> Self {
        Self {
            sentence: format!("Continue with {name}."),
        }
    }
}

/// The back row stays in the tree; it is only hidden while `show_back` is off
pub fn back_hidden(vm: &dyn ClientViewModel) -> bool {
    !vm.show_back()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenView {
    /// The single primary action of the open stage
    pub continue_link: DeepLinkView,
    pub back: BackPrompt,
}

/// Copyable setup instructions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instructions {
    pub text: String,
    pub copy_string: String,
}

/// What an action link shows in place of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionContent {
    Badge { src: String },
    Label(String),
}

/// Class flags of an action link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionClasses {
    pub fullwidth: bool,
    pub primary: bool,
    pub secondary: bool,
    pub badge: bool,
}

impl ActionClasses {
    fn for_action(primary: bool, has_badge: bool) -> Self {
        Self {
            fullwidth: !has_badge,
            primary: primary && !has_badge,
            secondary: !primary && !has_badge,
            badge: has_badge,
        }
    }

    /// Space separated class attribute
    pub fn class_name(&self) -> String {
        [
            (self.fullwidth, "fullwidth"),
            (self.primary, "primary"),
            (self.secondary, "secondary"),
            (self.badge, "badge"),
        ]
        .iter()
        .filter(|(set, _)| *set)
        .map(|(_, name)| *name)
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// One install action, ready to render
#[derive(Debug, Clone)]
pub struct ActionView {
    pub href: String,
    /// Always the action label, whether or not it is visible
    pub aria_label: String,
    pub content: ActionContent,
    pub classes: ActionClasses,
    /// The action itself, dispatched on activation
    pub action: InstallAction,
}

impl ActionView {
    pub fn new(action: InstallAction, config: &ClientViewConfig) -> Self {
        let badge = config.badge_url(&action.kind);
        let classes = ActionClasses::for_action(action.primary, badge.is_some());
        let content = match badge {
            Some(src) => ActionContent::Badge { src },
            None => ActionContent::Label(action.label.clone()),
        };

        Self {
            href: action.url.clone(),
            aria_label: action.label.clone(),
            content,
            classes,
            action,
        }
    }
}

/// "If you already have X installed, you can open it here."
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLinkFallback {
    pub lead: String,
    pub link: DeepLinkView,
}

#[derive(Debug, Clone)]
pub struct InstallView {
    pub instructions: Option<Instructions>,
    pub actions: Vec<ActionView>,
    pub deep_link_fallback: Option<DeepLinkFallback>,
    pub back: BackPrompt,
}

/// Stage dependent content below the header
#[derive(Debug, Clone)]
pub enum StageView {
    Open(OpenView),
    Install(InstallView),
    /// Nothing is rendered
    Empty,
}

/// Build the content for `stage`.
///
/// Unrecognized stages, and an install stage without install data, give
/// [`StageView::Empty`].
pub fn present_stage(
    vm: &dyn ClientViewModel,
    stage: &Stage,
    config: &ClientViewConfig,
) -> StageView {
    match stage {
        Stage::Open => StageView::Open(OpenView {
            continue_link: DeepLinkView {
                href: vm.deep_link(),
                text: CONTINUE_LABEL,
            },
            back: BackPrompt::new(&vm.name()),
        }),
        Stage::Install => {
            let Some(install) = vm.install() else {
                warn!("Install stage without install view-model, rendering nothing");
                return StageView::Empty;
            };
            let name = vm.name();

            let instructions = install.text_instructions.map(|text| Instructions {
                text,
                copy_string: install.copy_string,
            });

            let deep_link_fallback =
                install
                    .show_deep_link_in_install
                    .then(|| DeepLinkFallback {
                        lead: format!("If you already have {name} installed, you can "),
                        link: DeepLinkView {
                            href: vm.deep_link(),
                            text: OPEN_HERE_LABEL,
                        },
                    });

            StageView::Install(InstallView {
                instructions,
                actions: install
                    .actions
                    .into_iter()
                    .map(|action| ActionView::new(action, config))
                    .collect(),
                deep_link_fallback,
                back: BackPrompt::new(&name),
            })
        }
        Stage::Unrecognized(value) => {
            debug!("Unrecognized stage '{}', rendering nothing", value);
            StageView::Empty
        }
    }
}
