//! Static client descriptions
//!
//! A [`ClientDescriptor`] is the JSON form of a client: what the header shows,
//! where its deep link points and how it can be installed. View-models are
//! built from it.

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};
use crate::types::{ActionKind, InstallAction};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ClientDescriptor {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub icon_url: String,

    /// Display order is kept
    pub platforms: Vec<String>,

    pub deep_link: String,

    /// Setup command shown in the install stage
    #[serde(default)]
    pub text_instructions: Option<String>,

    /// Clipboard text; defaults to the instructions themselves
    #[serde(default)]
    pub copy_string: Option<String>,

    #[serde(default)]
    pub actions: Vec<ActionDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ActionDescriptor {
    pub kind: ActionKind,
    pub url: String,
    pub label: String,
    #[serde(default)]
    pub primary: bool,
}

impl ClientDescriptor {
    /// Parse and validate a descriptor
    pub fn from_json(content: &str) -> Result<Self> {
        let descriptor: Self = serde_json::from_str(content)?;
        descriptor.validate()?;
        debug!(
            "Loaded client descriptor '{}' with {} actions",
            descriptor.name,
            descriptor.actions.len()
        );
        Ok(descriptor)
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::invalid_descriptor("name is empty"));
        }
        if self.platforms.is_empty() {
            return Err(Error::invalid_descriptor(format!(
                "{} lists no platforms",
                self.name
            )));
        }

        parse_url(&self.deep_link)?;
        for action in &self.actions {
            parse_url(&action.url)?;
            if action.label.trim().is_empty() {
                return Err(Error::invalid_descriptor(format!(
                    "{} action '{}' has no label",
                    self.name, action.kind
                )));
            }
        }

        Ok(())
    }

    /// Text the copy button places on the clipboard
    pub fn copy_text(&self) -> String {
        self.copy_string
            .clone()
            .or_else(|| self.text_instructions.clone())
            .unwrap_or_default()
    }

    /// Install actions in display order, without activation hooks
    pub fn install_actions(&self) -> Vec<InstallAction> {
        self.actions
            .iter()
            .map(|a| {
                InstallAction::new(a.kind.clone(), a.url.clone(), a.label.clone())
                    .with_primary(a.primary)
            })
            .collect()
    }
}

fn parse_url(value: &str) -> Result<Url> {
    Url::parse(value).map_err(|e| Error::invalid_url(value, e))
}
