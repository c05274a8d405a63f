use crate::rule::{Always, Never, Rule, SharedRule};
use ahash::AHashMap;
use std::sync::Arc;

/// Named rules that declarative definitions refer to.
///
/// The default registry knows `"always"` and `"never"`.
pub struct RuleRegistry<T> {
    rules: AHashMap<String, SharedRule<T>>,
}

impl<T> RuleRegistry<T> {
    /// An empty registry, without the stock rules.
    pub fn empty() -> Self {
        Self {
            rules: AHashMap::new(),
        }
    }

    /// Registers `rule` under `name`, replacing any rule already registered there.
    pub fn register(&mut self, name: impl Into<String>, rule: impl Rule<T> + 'static) -> &mut Self {
        self.register_shared(name, Arc::new(rule))
    }

    pub fn register_shared(&mut self, name: impl Into<String>, rule: SharedRule<T>) -> &mut Self {
        let name = name.into();
        if self.rules.insert(name.clone(), rule).is_some() {
            log::debug!("Rule '{}' was replaced in the registry", name);
        }
        self
    }

    /// Builder-style registration from a closure.
    pub fn with<F>(mut self, name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.register(name, predicate);
        self
    }

    pub fn get(&self, name: &str) -> Option<SharedRule<T>> {
        self.rules.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<T> Default for RuleRegistry<T> {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("always", Always).register("never", Never);
        registry
    }
}
