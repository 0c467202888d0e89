//! Push notification lifecycle coordinator
//!
//! One `PushCoordinator` lives for the whole process. Provider callbacks and
//! host lifecycle calls may arrive on any thread, in any order, including
//! before the host has attached a listener. The only shared mutable state is
//! the early buffer slot.

use crate::bridge::api::{
    DispatchStatistics, EventDispatcher, ListenerInstance, ListenerRegistry, ListenerResolver,
    PushEvent,
};
use crate::channels::api::{ChannelConfig, ChannelManager};
use crate::coordinator::config::PushConfig;
use crate::coordinator::error::{CoordinatorError, CoordinatorResult};
use crate::coordinator::replay::action_from_intent;
use crate::core::time::{Clock, SystemClock};
use crate::messaging::api::{Admission, DeliveryProvider, EarlyBuffer, IntentExtras, RemoteMessage};
use crate::render::api::{received_event, AppMetadata, PresentationPolicy, Renderer, NOTIFICATION_SLOT};
use crate::tray::api::{DeliveredInventory, DeliveredNotification, NotificationTray};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// External collaborators injected into the coordinator
pub struct Collaborators {
    pub registry: Arc<dyn ListenerRegistry>,
    pub provider: Arc<dyn DeliveryProvider>,
    pub tray: Arc<dyn NotificationTray>,
    pub channels: Arc<dyn ChannelManager>,
    pub metadata: Arc<dyn AppMetadata>,
    pub clock: Arc<dyn Clock>,
}

impl Collaborators {
    /// Collaborators using the system clock
    pub fn new(
        registry: Arc<dyn ListenerRegistry>,
        provider: Arc<dyn DeliveryProvider>,
        tray: Arc<dyn NotificationTray>,
        channels: Arc<dyn ChannelManager>,
        metadata: Arc<dyn AppMetadata>,
    ) -> Self {
        Self {
            registry,
            provider,
            tray,
            channels,
            metadata,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}

pub struct PushCoordinator {
    resolver: ListenerResolver,
    buffer: EarlyBuffer,
    dispatcher: EventDispatcher,
    renderer: Renderer,
    inventory: DeliveredInventory,
    provider: Arc<dyn DeliveryProvider>,
    tray: Arc<dyn NotificationTray>,
    channels: Arc<dyn ChannelManager>,
}

impl std::fmt::Debug for PushCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PushCoordinator")
            .field("resolver", &self.resolver)
            .field("buffer", &self.buffer)
            .field("policy", self.renderer.policy())
            .finish_non_exhaustive()
    }
}

impl PushCoordinator {
    pub fn new(collaborators: Collaborators, config: &PushConfig) -> Self {
        let Collaborators {
            registry,
            provider,
            tray,
            channels,
            metadata,
            clock,
        } = collaborators;

        Self {
            resolver: ListenerResolver::new(registry),
            buffer: EarlyBuffer::new(),
            dispatcher: EventDispatcher::new(),
            renderer: Renderer::new(config.presentation_policy(), metadata, clock),
            inventory: DeliveredInventory::new(Arc::clone(&tray)),
            provider,
            tray,
            channels,
        }
    }

    pub fn policy(&self) -> &PresentationPolicy {
        self.renderer.policy()
    }

    pub fn dispatch_statistics(&self) -> &DispatchStatistics {
        self.dispatcher.statistics()
    }

    /// The message waiting for a listener, if any
    pub fn buffered_message(&self) -> Option<RemoteMessage> {
        self.buffer.peek()
    }

    /// Provider callback: a message was received
    ///
    /// Rendered and dispatched at once when a listener resolves, otherwise
    /// held in the early buffer, replacing any message already there.
    pub fn on_message(&self, message: RemoteMessage) {
        match self.buffer.admit(message, || self.resolver.resolve()) {
            Admission::Deliver { listener, message } => {
                self.fire_notification(listener.as_ref(), &message);
            }
            Admission::Buffered { replaced } => {
                if let Some(dropped) = replaced {
                    log::info!(
                        "Early message {:?} superseded before a listener attached",
                        dropped.id
                    );
                }
            }
        }
    }

    /// Host lifecycle: a listener instance became available
    ///
    /// The host must register `listener` in its registry before calling this.
    /// Replays the buffered message, if any; returns whether one was replayed.
    /// The buffer is empty when this returns.
    pub fn on_listener_attached(&self, listener: Arc<dyn ListenerInstance>) -> bool {
        match self.buffer.take() {
            Some(message) => {
                log::debug!("Replaying early message {:?} to attached listener", message.id);
                self.fire_notification(listener.as_ref(), &message);
                true
            }
            None => false,
        }
    }

    /// Provider callback: the device token was issued or rotated
    pub fn on_new_token(&self, token: &str) {
        self.send(&PushEvent::token(token));
    }

    /// Enable provider auto-init and request a token without waiting for it
    ///
    /// The result arrives later as a `token` or `token-error` event. The
    /// returned handle may be awaited but need not be.
    pub fn register(self: &Arc<Self>) -> CoordinatorResult<JoinHandle<()>> {
        let runtime =
            tokio::runtime::Handle::try_current().map_err(|_| CoordinatorError::NoRuntime)?;

        self.provider.set_auto_init_enabled(true);
        let coordinator = Arc::clone(self);
        Ok(runtime.spawn(async move {
            match coordinator.provider.request_token().await {
                Ok(token) => {
                    coordinator.send(&PushEvent::token(token));
                }
                Err(e) => {
                    log::warn!("Device token request failed: {}", e);
                    coordinator.send(&PushEvent::token_error(e.to_string()));
                }
            }
        }))
    }

    /// Disable provider auto-init and delete the current token
    pub fn unregister(&self) {
        self.provider.set_auto_init_enabled(false);
        self.provider.delete_token();
    }

    /// Host lifecycle: an intent was re-delivered to the application
    ///
    /// Returns whether a `notification-action` event was dispatched.
    pub fn handle_new_intent(&self, extras: &IntentExtras) -> bool {
        let Some(event) = action_from_intent(extras) else {
            return false;
        };
        self.send(&event)
    }

    pub fn delivered_notifications(&self) -> Vec<DeliveredNotification> {
        self.inventory.list()
    }

    /// Cancel the notifications named in `notifications`
    pub fn remove_delivered(&self, notifications: &serde_json::Value) -> CoordinatorResult<()> {
        self.inventory.remove(notifications)?;
        Ok(())
    }

    pub fn remove_all_delivered(&self) {
        self.inventory.remove_all();
    }

    pub fn create_channel(&self, config: &ChannelConfig) -> CoordinatorResult<()> {
        Ok(self.channels.create_channel(config)?)
    }

    pub fn delete_channel(&self, channel_id: &str) -> CoordinatorResult<()> {
        Ok(self.channels.delete_channel(channel_id)?)
    }

    pub fn list_channels(&self) -> CoordinatorResult<Vec<ChannelConfig>> {
        Ok(self.channels.list_channels()?)
    }

    fn fire_notification(&self, listener: &dyn ListenerInstance, message: &RemoteMessage) {
        let outcome = self.renderer.render(message);

        if let Some(notification) = &outcome.notification {
            log::info!(
                "Showing notification for message {:?} (intent {})",
                message.id,
                notification.content_intent.request_code
            );
            self.tray.show(NOTIFICATION_SLOT, notification);
        }

        let event = received_event(message, outcome.display.as_ref());
        self.dispatch_to(listener, &event);
    }

    /// Dispatch to whichever listener is current; dropped when none is
    fn send(&self, event: &PushEvent) -> bool {
        match self.resolver.resolve() {
            Some(listener) => self.dispatch_to(listener.as_ref(), event),
            None => {
                log::debug!("No listener attached; dropping '{}' event", event.kind());
                false
            }
        }
    }

    fn dispatch_to(&self, listener: &dyn ListenerInstance, event: &PushEvent) -> bool {
        match self.dispatcher.dispatch(listener, event, true) {
            Ok(()) => true,
            Err(e) => {
                log::error!("{}", e);
                false
            }
        }
    }
}
