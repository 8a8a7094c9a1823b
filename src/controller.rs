use crate::client::ActionClient;
use crate::config::ControllerConfig;
use crate::errors::ControllerError;
use crate::models::{resolve_click, ButtonRecord, ButtonState, ClickReport, Outcome};
use crate::page::Page;
use crate::render;
use tracing::debug;

/// Finds the status buttons in a page, keeps a view-model record per match
/// and drives the click behavior against their `data-url` targets.
pub struct StatusButtonController {
    config: ControllerConfig,
    client: ActionClient,
    records: Vec<ButtonRecord>,
}

impl StatusButtonController {
    /// Scans the page once, in action-table order, and binds one record per
    /// selector match — an element carrying two recognized classes binds
    /// twice. Binding never fails: a missing `data-url` binds with an empty
    /// request target. Records live as long as the controller; there is no
    /// unbind.
    pub fn bind(page: &Page, config: ControllerConfig) -> Self {
        let mut records = Vec::new();
        for spec in &config.actions {
            for slot in page.query_class(&spec.selector) {
                let url = page
                    .button(slot)
                    .and_then(|element| element.data_url())
                    .unwrap_or_default()
                    .to_string();
                records.push(ButtonRecord {
                    slot,
                    kind: spec.kind,
                    status_text: spec.status_text.clone(),
                    url,
                    state: ButtonState::Unacted,
                });
            }
        }
        debug!("bound {} status buttons", records.len());

        Self {
            config,
            client: ActionClient::new(),
            records,
        }
    }

    /// Records in binding order. Click ids index into this slice.
    pub fn records(&self) -> &[ButtonRecord] {
        &self.records
    }

    /// One click: send the GET, resolve the outcome, apply it to the page.
    /// Failures of either kind leave the page and the record untouched and
    /// only carry an alert in the report. Repeated clicks are not
    /// suppressed; an acted record sends the same request again.
    pub async fn click(
        &mut self,
        page: &mut Page,
        id: usize,
    ) -> Result<ClickReport, ControllerError> {
        let record = self
            .records
            .get(id)
            .ok_or(ControllerError::UnknownButton(id))?;
        let kind = record.kind;
        let slot = record.slot;

        let outcome = self.client.send(&record.url).await;
        let resolution = resolve_click(record, outcome);

        let applied_label = match outcome {
            Outcome::Success => {
                if let ButtonState::Acted { label } = &resolution.next_state {
                    render::apply_success(page, slot, label, self.config.render_mode);
                    Some(label.clone())
                } else {
                    None
                }
            }
            _ => None,
        };
        self.records[id].state = resolution.next_state;

        Ok(ClickReport {
            record: id,
            kind,
            outcome,
            applied_label,
            alert: resolution.alert,
        })
    }
}
