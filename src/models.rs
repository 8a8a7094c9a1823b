use serde::{Deserialize, Serialize};

/// Category of status transition a button performs. Each kind owns the
/// localized label shown once the action has gone through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    Confirm,
    Cancel,
    Invite,
    Register,
    Decline,
    MarkVisited,
    CancelCheckin,
}

/// Per-button state machine. A button acts at most once visibly; failed
/// clicks leave it where it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonState {
    Unacted,
    Acted { label: String },
}

/// View-model for one bound button. Rebuilt from the page on every bind;
/// nothing here survives a page reload.
#[derive(Debug, Clone)]
pub struct ButtonRecord {
    /// Slot index of the element in the page model.
    pub slot: usize,
    pub kind: ActionKind,
    /// Label applied after a successful action.
    pub status_text: String,
    /// Value of the element's `data-url` attribute, empty when absent.
    pub url: String,
    pub state: ButtonState,
}

/// How a completed click resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Endpoint answered 2xx. The body is never read.
    Success,
    /// Endpoint answered with a non-success status.
    RequestRejected,
    /// The request never completed (network failure, unusable url).
    TransportFailure,
}

pub const REQUEST_REJECTED_ALERT: &str = "Ошибка при выполнении действия";
pub const TRANSPORT_FAILURE_ALERT: &str = "Не удалось выполнить действие";

impl Outcome {
    /// Alert message shown to the user for this outcome, if any.
    pub fn alert(self) -> Option<&'static str> {
        match self {
            Outcome::Success => None,
            Outcome::RequestRejected => Some(REQUEST_REJECTED_ALERT),
            Outcome::TransportFailure => Some(TRANSPORT_FAILURE_ALERT),
        }
    }
}

/// Next state and user-visible effects of one click, computed without I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub next_state: ButtonState,
    pub alert: Option<&'static str>,
}

/// Pure transition: maps (record, outcome) to the record's next state and
/// the alert to raise. Callers apply the result to the page afterwards.
/// Acted is not a guard: a successful click on an already-acted record
/// resolves to Acted again, as repeated clicks are not suppressed.
pub fn resolve_click(record: &ButtonRecord, outcome: Outcome) -> Resolution {
    let next_state = match outcome {
        Outcome::Success => ButtonState::Acted {
            label: record.status_text.clone(),
        },
        Outcome::RequestRejected | Outcome::TransportFailure => record.state.clone(),
    };
    Resolution {
        next_state,
        alert: outcome.alert(),
    }
}

/// What one click did. The embedding surface is expected to display `alert`
/// to the user; the controller itself never blocks on it.
#[derive(Debug, Clone)]
pub struct ClickReport {
    /// Index of the record in the controller's binding order.
    pub record: usize,
    pub kind: ActionKind,
    pub outcome: Outcome,
    /// Label applied to the button, present on success only.
    pub applied_label: Option<String>,
    pub alert: Option<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(state: ButtonState) -> ButtonRecord {
        ButtonRecord {
            slot: 0,
            kind: ActionKind::Confirm,
            status_text: "Подтверждено".to_string(),
            url: "/checkin/42/confirm".to_string(),
            state,
        }
    }

    #[test]
    fn success_moves_record_to_acted_with_status_text() {
        let resolution = resolve_click(&record(ButtonState::Unacted), Outcome::Success);
        assert_eq!(
            resolution.next_state,
            ButtonState::Acted {
                label: "Подтверждено".to_string()
            }
        );
        assert_eq!(resolution.alert, None);
    }

    #[test]
    fn rejected_response_keeps_state_and_alerts() {
        let resolution = resolve_click(&record(ButtonState::Unacted), Outcome::RequestRejected);
        assert_eq!(resolution.next_state, ButtonState::Unacted);
        assert_eq!(resolution.alert, Some(REQUEST_REJECTED_ALERT));
    }

    #[test]
    fn transport_failure_keeps_state_and_alerts_distinctly() {
        let resolution = resolve_click(&record(ButtonState::Unacted), Outcome::TransportFailure);
        assert_eq!(resolution.next_state, ButtonState::Unacted);
        assert_eq!(resolution.alert, Some(TRANSPORT_FAILURE_ALERT));
    }

    #[test]
    fn repeated_success_resolves_to_acted_again() {
        let acted = ButtonState::Acted {
            label: "Подтверждено".to_string(),
        };
        let resolution = resolve_click(&record(acted.clone()), Outcome::Success);
        assert_eq!(resolution.next_state, acted);
    }
}
