//! Live suggestion client calling the configured HTTP endpoint.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::ports::suggest::{SuggestionClient, SuggestionFuture};

/// Live client that POSTs prompts to the suggestion service.
///
/// Every transport-, status-, or body-level failure is logged and mapped to
/// an empty string, per the port contract.
pub struct LiveSuggestionClient {
    client: Client,
    endpoint: String,
}

impl LiveSuggestionClient {
    /// Creates a client for the given endpoint URL.
    #[must_use]
    pub fn new(endpoint: &str) -> Self {
        Self { client: Client::new(), endpoint: endpoint.to_string() }
    }
}

/// Request body sent to the suggestion service.
#[derive(Serialize)]
struct SuggestionRequest<'a> {
    prompt: &'a str,
}

/// Response body returned by the suggestion service.
#[derive(Deserialize)]
struct SuggestionResponse {
    #[serde(default)]
    response: String,
}

impl SuggestionClient for LiveSuggestionClient {
    fn suggest(&self, prompt: &str) -> SuggestionFuture<'_> {
        let prompt = prompt.to_string();
        Box::pin(async move {
            let result = self
                .client
                .post(&self.endpoint)
                .json(&SuggestionRequest { prompt: &prompt })
                .send()
                .await;

            let response = match result {
                Ok(response) => response,
                Err(e) => {
                    eprintln!("Error communicating with the AI model: {e}");
                    return String::new();
                }
            };

            let status = response.status();
            if !status.is_success() {
                eprintln!("AI model returned status {status}");
                return String::new();
            }

            match response.json::<SuggestionResponse>().await {
                Ok(body) => body.response,
                Err(e) => {
                    eprintln!("Failed to parse AI model response: {e}");
                    String::new()
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_endpoint_yields_empty_suggestion() {
        // Port 9 is discard; nothing listens on this address.
        let client = LiveSuggestionClient::new("http://127.0.0.1:9/ask");
        let suggestion = client.suggest("test prompt").await;
        assert!(suggestion.is_empty());
    }

    #[test]
    fn response_body_defaults_missing_field_to_empty() {
        let body: SuggestionResponse = serde_json::from_str("{}").unwrap();
        assert!(body.response.is_empty());
    }
}
