//! Concurrent fan-out/fan-in over every hook in the registry.
//!
//! # Design
//! One dispatch round spawns one tokio task per hook on a `JoinSet` and
//! waits for all of them. Each task returns its own `(index, Outcome)`; the
//! joining side drops that outcome into a pre-sized slot, so completion
//! order never affects the order of the returned `Vec`. A transport error
//! or a panicking task becomes `CallStatus::Failure` for that index only.
//!
//! The round has no timeout, no retries and no concurrency cap.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::hook::Hook;
use crate::transport::Transport;
use crate::verb::Verb;

/// How a single call settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallStatus {
    /// The server answered. Any status code counts, including 4xx and 5xx.
    Success { status_text: String },
    /// No response was obtained.
    Failure,
}

/// The result of calling one hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Position of the hook in the registry.
    pub index: usize,
    pub name: String,
    pub verb: Verb,
    /// Final URL after redirects on success, the hook's URL on failure.
    pub url: String,
    pub status: CallStatus,
}

impl Outcome {
    fn failure(index: usize, hook: &Hook) -> Self {
        Self {
            index,
            name: hook.name.clone(),
            verb: hook.verb,
            url: hook.url.to_string(),
            status: CallStatus::Failure,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.status, CallStatus::Success { .. })
    }
}

/// Runs dispatch rounds through a shared transport.
#[derive(Clone)]
pub struct Dispatcher {
    transport: Arc<dyn Transport>,
}

impl Dispatcher {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Call every hook concurrently and wait for all of them to settle.
    ///
    /// `on_settle` runs once per hook as soon as that hook's call finishes,
    /// in completion order. The returned outcomes are in input order.
    pub async fn dispatch<F>(&self, hooks: &[Hook], mut on_settle: F) -> Vec<Outcome>
    where
        F: FnMut(&Outcome),
    {
        let mut slots: Vec<Option<Outcome>> = vec![None; hooks.len()];
        let mut tasks = JoinSet::new();
        let mut task_index = HashMap::with_capacity(hooks.len());

        debug!(hooks = hooks.len(), "dispatch round started");

        for (index, hook) in hooks.iter().enumerate() {
            let transport = Arc::clone(&self.transport);
            let hook = hook.clone();
            let handle = tasks.spawn(async move {
                let outcome = call_one(transport.as_ref(), index, &hook).await;
                (index, outcome)
            });
            task_index.insert(handle.id(), index);
        }

        while let Some(joined) = tasks.join_next_with_id().await {
            let (index, outcome) = match joined {
                Ok((_, settled)) => settled,
                Err(err) => {
                    let Some(&index) = task_index.get(&err.id()) else {
                        warn!(error = %err, "unknown dispatch task failed");
                        continue;
                    };
                    warn!(index, error = %err, "dispatch task did not complete");
                    (index, Outcome::failure(index, &hooks[index]))
                }
            };
            on_settle(&outcome);
            slots[index] = Some(outcome);
        }

        debug!(hooks = hooks.len(), "dispatch round settled");

        // Every spawned task either returned or was mapped from its JoinError,
        // so each slot is filled; the fallback only guards the invariant.
        slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| slot.unwrap_or_else(|| Outcome::failure(index, &hooks[index])))
            .collect()
    }
}

async fn call_one(transport: &dyn Transport, index: usize, hook: &Hook) -> Outcome {
    match transport.execute(hook.request()).await {
        Ok(response) => Outcome {
            index,
            name: hook.name.clone(),
            verb: hook.verb,
            url: response.final_url,
            status: CallStatus::Success {
                status_text: response.status_text,
            },
        },
        Err(err) => {
            warn!(index, name = %hook.name, error = %err, "hook call failed");
            Outcome::failure(index, hook)
        }
    }
}
