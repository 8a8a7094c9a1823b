use crate::models::ActionKind;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

/// One action-table entry: which selector class binds to which action kind,
/// and the label shown once the action succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSpec {
    pub selector: String,
    pub kind: ActionKind,
    pub status_text: String,
}

impl ActionSpec {
    fn new(selector: &str, kind: ActionKind, status_text: &str) -> Self {
        Self {
            selector: selector.to_string(),
            kind,
            status_text: status_text.to_string(),
        }
    }
}

/// Post-success treatment for the clicked button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderMode {
    /// Gray out the button in place and swap its class for the acted one.
    #[default]
    MuteInPlace,
    /// Replace the slot's content with a styled confirmation span.
    ReplaceContent,
}

/// Class a muted button ends up with. Doubles as the Cancel selector, so a
/// rebound page matches acted buttons under the Cancel entry.
pub const ACTED_CLASS: &str = "button-cancel";

static DEFAULT_ACTIONS: Lazy<Vec<ActionSpec>> = Lazy::new(|| {
    vec![
        ActionSpec::new("button-confirm", ActionKind::Confirm, "Подтверждено"),
        ActionSpec::new("button-cancel", ActionKind::Cancel, "Отменено"),
        ActionSpec::new("button-invited", ActionKind::Invite, "Приглашён"),
        ActionSpec::new("button-registered", ActionKind::Register, "Подтвердил"),
        ActionSpec::new("button-cancelled", ActionKind::Decline, "Отклонил"),
        ActionSpec::new("button-visited", ActionKind::MarkVisited, "Зачекинен"),
        ActionSpec::new(
            "button-cancel-checkin",
            ActionKind::CancelCheckin,
            "Чекин отменен",
        ),
    ]
});

pub fn default_actions() -> &'static [ActionSpec] {
    &DEFAULT_ACTIONS
}

/// Everything the controller needs to bind and drive a page.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    pub render_mode: RenderMode,
    pub actions: Vec<ActionSpec>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            render_mode: RenderMode::default(),
            actions: DEFAULT_ACTIONS.clone(),
        }
    }
}

/// On-disk override shape; every field is optional and `actions`, when
/// present, replaces the default table outright.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    render_mode: Option<RenderMode>,
    actions: Option<Vec<ActionSpec>>,
}

impl ConfigFile {
    fn into_config(self) -> ControllerConfig {
        let defaults = ControllerConfig::default();
        ControllerConfig {
            render_mode: self.render_mode.unwrap_or(defaults.render_mode),
            actions: self.actions.unwrap_or(defaults.actions),
        }
    }
}

pub fn resolve_config_path() -> PathBuf {
    if let Ok(path) = env::var("BUTTONS_CONFIG_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("config/buttons.json")
}

/// Loads overrides from `path`. A missing file means the built-in defaults;
/// an unreadable or malformed one is logged and also falls back to them.
pub async fn load_config(path: &Path) -> ControllerConfig {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<ConfigFile>(&bytes) {
            Ok(file) => file.into_config(),
            Err(err) => {
                error!("failed to parse config file: {err}");
                ControllerConfig::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => ControllerConfig::default(),
        Err(err) => {
            error!("failed to read config file: {err}");
            ControllerConfig::default()
        }
    }
}
