use std::{any::Any, collections::HashMap};

use dioxus::prelude::*;
use futures_util::stream::StreamExt;

/// Static identifier for an event type, used to route events to subscribers.
///
/// Implementing this (plus `Clone` and `Debug`) is enough to participate in
/// the event bus; the [`Event`] trait comes from a blanket implementation.
pub trait EventId {
    fn event_id() -> &'static str;
}

/// An event that can travel through the bus as a boxed trait object.
pub trait Event: core::fmt::Debug + CloneEvent {
    fn event_id(&self) -> &'static str;

    /// Downcast support for delivering to type-specific subscribers.
    fn into_box_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<E: EventId + Clone + 'static + core::fmt::Debug> Event for E {
    fn event_id(&self) -> &'static str {
        E::event_id()
    }
    fn into_box_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Object-safe cloning for `Box<dyn Event>`.
pub trait CloneEvent {
    fn clone_event(&self) -> Box<dyn Event>;
}

impl<E: Event + Clone + 'static> CloneEvent for E {
    fn clone_event(&self) -> Box<dyn Event> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn Event> {
    fn clone(&self) -> Self {
        self.clone_event()
    }
}

enum EventBusCommandInner {
    Subscribe {
        event_id: &'static str,
        handler: Box<dyn Fn(Box<dyn Event>)>,
    },
    Publish {
        event: Box<dyn Event>,
    },
}

impl std::fmt::Debug for EventBusCommandInner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Subscribe { event_id, .. } => f
                .debug_struct("Subscribe")
                .field("event_id", event_id)
                .finish_non_exhaustive(),
            Self::Publish { event } => f.debug_struct("Publish").field("event", event).finish(),
        }
    }
}

pub struct EventBusCommand(EventBusCommandInner);
pub type EventBus = Coroutine<EventBusCommand>;

/// Event bus service coroutine
pub(super) fn use_event_bus_service() -> EventBus {
    use_coroutine(
        move |mut rx: UnboundedReceiver<EventBusCommand>| async move {
            log::info!("event_bus_service (coroutine) - start");

            let mut subscribers: HashMap<&str, Vec<Box<dyn Fn(Box<dyn Event>)>>> = HashMap::new();

            while let Some(cmd) = rx.next().await {
                let EventBusCommand(cmd) = cmd;
                log::debug!("event_bus_service (coroutine) - Processing command {cmd:?}...");

                match cmd {
                    EventBusCommandInner::Subscribe { event_id, handler } => {
                        subscribers.entry(event_id).or_default().push(handler);
                        log::debug!("event_bus_service - Subscribed to {event_id} events");
                    }
                    EventBusCommandInner::Publish { event } => {
                        let event_id = event.event_id();
                        let sub_vec = subscribers.get(&event_id);
                        log::debug!(
                            "event_bus_service - Publishing {event_id} event to {} subscribers",
                            sub_vec.map(|v| v.len()).unwrap_or_default()
                        );
                        if let Some(sub_vec) = sub_vec {
                            for handler in sub_vec {
                                handler(event.clone());
                            }
                        }
                    }
                }
                log::debug!("event_bus_service (coroutine) - Command processed");
            }
        },
    )
}

pub fn publish_event<E: Event + 'static>(event_bus_service: EventBus, event: E) {
    event_bus_service.send(EventBusCommand(EventBusCommandInner::Publish {
        event: Box::new(event),
    }));
}

pub fn subscribe_event<E: Event + EventId + 'static, F: Fn(E) + 'static>(
    event_bus_service: EventBus,
    handler: F,
) {
    let event_id = <E as EventId>::event_id();
    let handler = Box::new(move |boxed: Box<dyn Event>| {
        let event = *boxed.into_box_any().downcast().unwrap();
        handler(event)
    });
    event_bus_service.send(EventBusCommand(EventBusCommandInner::Subscribe {
        event_id,
        handler,
    }));
}
