use crate::config::GreetingConfig;
use crate::storage::{KeyValueStore, PersistedValue};

/// Name form whose input survives restarts.
pub struct Greeting<S> {
    name: PersistedValue<S>,
}

impl<S: KeyValueStore> Greeting<S> {
    pub fn new(store: S, config: &GreetingConfig) -> Self {
        Self {
            name: PersistedValue::initialize(store, config.key.as_str(), config.default_name.as_str()),
        }
    }

    pub fn name(&self) -> &str {
        self.name.value()
    }

    /// The input changed; the new value is written through immediately.
    pub fn handle_change(&mut self, input: &str) {
        self.name.set(input);
    }

    pub fn render(&self) -> String {
        if self.name().is_empty() {
            "Please type your name".to_string()
        } else {
            format!("Hello {}", self.name())
        }
    }
}
