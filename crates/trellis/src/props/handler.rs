//! Shared event handlers and handler chaining.

use std::fmt;
use std::sync::Arc;

use super::event::Event;

/// A shareable event handler.
///
/// Handlers are reference counted so attribute bags can be cloned and merged
/// without duplicating closures.
#[derive(Clone)]
pub struct Handler(Arc<dyn Fn(&mut Event) + Send + Sync>);

impl Handler {
    /// Wrap a closure as a handler.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut Event) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invoke the handler.
    pub fn call(&self, event: &mut Event) {
        (self.0)(event)
    }

    /// Compose handlers into one that invokes each, in order, with the same
    /// event.
    ///
    /// If a contributor panics the panic propagates and later contributors
    /// do not run.
    pub fn chain(handlers: impl IntoIterator<Item = Handler>) -> Handler {
        let mut handlers: Vec<Handler> = handlers.into_iter().collect();
        if handlers.len() == 1 {
            if let Some(only) = handlers.pop() {
                return only;
            }
        }
        Handler::new(move |event| {
            for handler in &handlers {
                handler.call(event);
            }
        })
    }

    /// Whether two handles refer to the same closure.
    pub fn ptr_eq(&self, other: &Handler) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::EventKind;
    use parking_lot::Mutex;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    fn recorder(log: &Arc<Mutex<Vec<&'static str>>>, name: &'static str) -> Handler {
        let log = log.clone();
        Handler::new(move |_| log.lock().push(name))
    }

    #[test]
    fn test_chain_runs_in_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let chained = Handler::chain([recorder(&log, "a"), recorder(&log, "b"), recorder(&log, "c")]);

        chained.call(&mut Event::new(EventKind::Click));
        assert_eq!(*log.lock(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_chain_of_one_is_identity() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let only = recorder(&log, "only");
        assert!(Handler::chain([only.clone()]).ptr_eq(&only));
    }

    #[test]
    fn test_contributors_see_earlier_mutations() {
        let first = Handler::new(|event: &mut Event| event.prevent_default());
        let seen = Arc::new(Mutex::new(None));
        let seen_clone = seen.clone();
        let second = Handler::new(move |event: &mut Event| {
            *seen_clone.lock() = Some(event.is_default_prevented());
        });

        Handler::chain([first, second]).call(&mut Event::new(EventKind::Click));
        assert_eq!(*seen.lock(), Some(true));
    }

    #[test]
    fn test_panicking_contributor_stops_chain() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let failing = Handler::new(|_| panic!("contributor failed"));
        let chained = Handler::chain([recorder(&log, "before"), failing, recorder(&log, "after")]);

        let result = catch_unwind(AssertUnwindSafe(|| {
            chained.call(&mut Event::new(EventKind::Click));
        }));

        assert!(result.is_err());
        assert_eq!(*log.lock(), vec!["before"]);
    }
}
