use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Liveness flag of a mounted page.
///
/// Async continuations check [`PageLifetime::is_alive`] before writing to
/// page state; a response that lands after the page was disposed is
/// dropped.
#[derive(Clone, Debug)]
pub struct PageLifetime {
    alive: Arc<AtomicBool>,
}

impl Default for PageLifetime {
    fn default() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }
}

impl PageLifetime {
    /// Flag tied to the current reactive owner; flips on cleanup
    pub fn for_current_owner() -> Self {
        let lifetime = Self::default();
        let on_drop = lifetime.clone();
        leptos::prelude::on_cleanup(move || on_drop.end());
        lifetime
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    pub fn end(&self) {
        self.alive.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_observe_end() {
        let lifetime = PageLifetime::default();
        let task_copy = lifetime.clone();
        assert!(task_copy.is_alive());
        lifetime.end();
        assert!(!task_copy.is_alive());
    }
}
