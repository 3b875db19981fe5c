//! Suggestion client port for requesting AI-authored file content.

use std::future::Future;
use std::pin::Pin;

/// Boxed future type alias used by [`SuggestionClient`] to keep the trait dyn-compatible.
pub type SuggestionFuture<'a> = Pin<Box<dyn Future<Output = String> + Send + 'a>>;

/// Requests replacement file content from the external suggestion service.
///
/// Implementations must surface every transport- or status-level failure as
/// an empty string rather than an error: callers treat an empty suggestion
/// as the uniform not-available signal regardless of root cause.
pub trait SuggestionClient: Send + Sync {
    /// Sends a prompt and returns the suggested file content, or an empty
    /// string when no suggestion is available.
    fn suggest(&self, prompt: &str) -> SuggestionFuture<'_>;
}
