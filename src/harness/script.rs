//! Scripted runs of a coordinator against the in-memory collaborators

use crate::channels::api::ChannelConfig;
use crate::coordinator::api::{Collaborators, CoordinatorError, PushConfig, PushCoordinator};
use crate::core::error_handling::ContextualError;
use crate::core::time::ManualClock;
use crate::harness::{MemoryChannels, MemoryHost, MemoryTray, ScriptedProvider, StaticMetadata};
use crate::messaging::api::{IntentExtras, RemoteMessage};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

/// One step of a script, as written in the JSON script file
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    /// Provider delivers a remote message
    Message {
        #[serde(flatten)]
        message: RemoteMessage,
    },
    /// Host creates and registers a fresh listener instance
    Attach,
    /// Host tears down its listener instance
    Detach,
    /// Provider rotates the device token
    NewToken { token: String },
    Register,
    Unregister,
    /// Host re-delivers an intent, e.g. after a notification tap
    Intent {
        #[serde(default)]
        extras: IntentExtras,
    },
    List,
    Remove { notifications: Value },
    RemoveAll,
    /// Move the wall clock forward
    Advance { seconds: u64 },
    CreateChannel { channel: ChannelConfig },
    DeleteChannel { id: String },
    ListChannels,
}

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Invalid script: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Token request task failed: {0}")]
    TokenTask(String),

    #[error(transparent)]
    Coordinator(#[from] CoordinatorError),
}

impl ContextualError for ScriptError {
    fn is_user_actionable(&self) -> bool {
        matches!(self, ScriptError::Parse(_))
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            ScriptError::Parse(_) => Some("the script must be a JSON array of steps"),
            _ => None,
        }
    }
}

/// A coordinator wired to in-memory collaborators
pub struct ScriptRunner {
    pub host: Arc<MemoryHost>,
    pub tray: Arc<MemoryTray>,
    pub provider: Arc<ScriptedProvider>,
    pub channels: Arc<MemoryChannels>,
    pub clock: ManualClock,
    coordinator: Arc<PushCoordinator>,
}

impl ScriptRunner {
    pub fn new(config: &PushConfig, provider: ScriptedProvider) -> Self {
        Self::with_tray(config, provider, MemoryTray::new())
    }

    pub fn with_tray(config: &PushConfig, provider: ScriptedProvider, tray: MemoryTray) -> Self {
        let host = Arc::new(MemoryHost::new());
        let tray = Arc::new(tray);
        let provider = Arc::new(provider);
        let channels = Arc::new(MemoryChannels::new());
        let clock = ManualClock::new();

        let collaborators = Collaborators::new(
            host.clone(),
            provider.clone(),
            tray.clone(),
            channels.clone(),
            Arc::new(StaticMetadata::new(config.metadata)),
        )
        .with_clock(Arc::new(clock.clone()));

        Self {
            host,
            tray,
            provider,
            channels,
            clock,
            coordinator: Arc::new(PushCoordinator::new(collaborators, config)),
        }
    }

    pub fn coordinator(&self) -> &Arc<PushCoordinator> {
        &self.coordinator
    }

    pub fn parse(script: &str) -> Result<Vec<Step>, ScriptError> {
        Ok(serde_json::from_str(script)?)
    }

    /// Run every step and return the output as JSON lines
    ///
    /// Each step yields its own result line (if it has one) followed by the
    /// events the host received while it ran.
    pub async fn run(&self, steps: &[Step]) -> Result<Vec<Value>, ScriptError> {
        let mut output = Vec::new();
        for (index, step) in steps.iter().enumerate() {
            log::debug!("Running script step {}: {:?}", index, step);
            if let Some(line) = self.run_step(step).await? {
                output.push(line);
            }
            output.extend(self.host.drain().into_iter().map(|event| {
                json!({
                    "event": event.name,
                    "generation": event.generation,
                    "retained": event.retained,
                    "payload": event.payload,
                })
            }));
        }
        Ok(output)
    }

    async fn run_step(&self, step: &Step) -> Result<Option<Value>, ScriptError> {
        let coordinator = &self.coordinator;
        let line = match step {
            Step::Message { message } => {
                coordinator.on_message(message.clone());
                coordinator
                    .buffered_message()
                    .map(|buffered| json!({ "buffered": buffered.id }))
            }
            Step::Attach => {
                let listener = self.host.attach();
                let generation = listener.generation();
                let replayed = coordinator.on_listener_attached(listener);
                Some(json!({ "attached": generation, "replayed": replayed }))
            }
            Step::Detach => {
                self.host.detach();
                None
            }
            Step::NewToken { token } => {
                coordinator.on_new_token(token);
                None
            }
            Step::Register => {
                coordinator
                    .register()?
                    .await
                    .map_err(|e| ScriptError::TokenTask(e.to_string()))?;
                None
            }
            Step::Unregister => {
                coordinator.unregister();
                None
            }
            Step::Intent { extras } => {
                let handled = coordinator.handle_new_intent(extras);
                Some(json!({ "intent_handled": handled }))
            }
            Step::List => Some(json!({ "delivered": coordinator.delivered_notifications() })),
            Step::Remove { notifications } => Some(match coordinator.remove_delivered(notifications) {
                Ok(()) => json!({ "removed": true }),
                Err(e) => json!({ "removed": false, "error": e.to_string() }),
            }),
            Step::RemoveAll => {
                coordinator.remove_all_delivered();
                Some(json!({ "removed_all": true }))
            }
            Step::Advance { seconds } => {
                self.clock.advance(Duration::from_secs(*seconds));
                None
            }
            Step::CreateChannel { channel } => Some(match coordinator.create_channel(channel) {
                Ok(()) => json!({ "channel_created": channel.id }),
                Err(e) => json!({ "error": e.to_string() }),
            }),
            Step::DeleteChannel { id } => Some(match coordinator.delete_channel(id) {
                Ok(()) => json!({ "channel_deleted": id }),
                Err(e) => json!({ "error": e.to_string() }),
            }),
            Step::ListChannels => Some(match coordinator.list_channels() {
                Ok(channels) => json!({ "channels": channels }),
                Err(e) => json!({ "error": e.to_string() }),
            }),
        };
        Ok(line)
    }
}
