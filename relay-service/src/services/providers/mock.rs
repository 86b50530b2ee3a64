//! Mock provider implementation for testing.

use super::{GenerativeProvider, Part, ProviderError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays scripted results in order and records every prompt it receives.
///
/// Once the script runs out, every further call fails with
/// `ProviderError::Transport` so unexpected calls show up in assertions.
#[derive(Default)]
pub struct MockProvider {
    script: Mutex<VecDeque<Result<String, ProviderError>>>,
    calls: Mutex<Vec<Vec<Part>>>,
}

impl MockProvider {
    pub fn new(script: impl IntoIterator<Item = Result<String, ProviderError>>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, oldest first.
    pub fn calls(&self) -> Vec<Vec<Part>> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }
}

#[async_trait]
impl GenerativeProvider for MockProvider {
    async fn generate(&self, parts: Vec<Part>) -> Result<String, ProviderError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(parts);
        }

        self.script
            .lock()
            .ok()
            .and_then(|mut script| script.pop_front())
            .unwrap_or_else(|| {
                Err(ProviderError::Transport(
                    "mock provider script exhausted".to_string(),
                ))
            })
    }
}
