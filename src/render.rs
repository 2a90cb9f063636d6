use serde_json::Value as JsonValue;

use crate::FitClubError;

/// Receives UI state transitions for one logical call.
///
/// The rendering layer implements this; the client drives the transitions and
/// never touches presentation state directly. Implementations are free to
/// ignore transitions they have no visual for.
pub trait StatusRenderer {
    /// A call has started.
    fn loading(&mut self);
    /// The call succeeded with the given payload.
    fn success(&mut self, data: &JsonValue);
    /// The call failed terminally; retries are already exhausted.
    fn error(&mut self, error: &FitClubError);
}
