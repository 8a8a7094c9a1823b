use thiserror::Error;

/// Misuse of the controller API. Request and transport failures are not
/// errors here; they resolve into alerts the way the page handles them.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("no bound button with id {0}")]
    UnknownButton(usize),
}
