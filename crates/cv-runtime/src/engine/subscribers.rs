use super::*;

pub type EventHandler = Box<dyn FnMut(&DialogueEngine, &EngineEvent)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl DialogueEngine {
    /// Handlers run synchronously, in subscription order, with read access to the engine
    /// as it stands right after the transition that produced the event.
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&DialogueEngine, &EngineEvent) + 'static,
    {
        self.subscription_counter += 1;
        let id = SubscriptionId(self.subscription_counter);
        self.subscribers.push(Subscriber {
            id,
            handler: Box::new(handler),
        });
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|subscriber| subscriber.id != id);
        self.subscribers.len() != before
    }

    pub fn on_line_update<F>(&mut self, mut handler: F) -> SubscriptionId
    where
        F: FnMut(&DialogueEngine) + 'static,
    {
        self.subscribe(move |engine, event| {
            if matches!(event, EngineEvent::LineUpdate) {
                handler(engine);
            }
        })
    }

    pub fn on_end<F>(&mut self, mut handler: F) -> SubscriptionId
    where
        F: FnMut(&DialogueEngine) + 'static,
    {
        self.subscribe(move |engine, event| {
            if matches!(event, EngineEvent::End) {
                handler(engine);
            }
        })
    }

    pub fn on_message<F>(&mut self, mut handler: F) -> SubscriptionId
    where
        F: FnMut(&DialogueEngine, &str) + 'static,
    {
        self.subscribe(move |engine, event| {
            if let EngineEvent::Message { text } = event {
                handler(engine, text);
            }
        })
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub(super) fn emit(&mut self, event: EngineEvent) {
        log::trace!("emit {}", event.kind_name());
        let mut subscribers = std::mem::take(&mut self.subscribers);
        for subscriber in subscribers.iter_mut() {
            (subscriber.handler)(self, &event);
        }
        self.subscribers = subscribers;
    }

    /// Blank messages are dropped.
    pub(super) fn emit_message(&mut self, message: Option<String>) {
        let Some(text) = message.filter(|text| !text.trim().is_empty()) else {
            return;
        };
        self.emit(EngineEvent::Message { text });
    }
}
