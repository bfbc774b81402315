//! Integration tests for signals driven by property changes.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use trellis_core::{Property, Signal};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

struct ActiveKey {
    value: Property<Option<String>>,
    changed: Signal<(Option<String>, Option<String>)>,
}

impl ActiveKey {
    fn new() -> Self {
        Self {
            value: Property::new(None),
            changed: Signal::new(),
        }
    }

    fn set(&self, key: Option<&str>) {
        let key = key.map(str::to_string);
        if let Some(old) = self.value.replace(key.clone()) {
            self.changed.emit((key, old));
        }
    }
}

#[test]
fn test_only_real_transitions_notify() {
    init_logging();
    let active = ActiveKey::new();
    let count = Arc::new(AtomicUsize::new(0));
    let count_clone = count.clone();
    active.changed.connect(move |_| {
        count_clone.fetch_add(1, Ordering::SeqCst);
    });

    active.set(Some("a"));
    active.set(Some("a"));
    active.set(Some("b"));
    active.set(None);

    assert_eq!(count.load(Ordering::SeqCst), 3);
}

#[test]
fn test_notification_carries_new_and_old() {
    let active = ActiveKey::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = seen.clone();
    active.changed.connect(move |(new, old)| {
        seen_clone.lock().push((new.clone(), old.clone()));
    });

    active.set(Some("first"));
    active.set(Some("second"));

    let seen = seen.lock();
    assert_eq!(seen[0], (Some("first".to_string()), None));
    assert_eq!(
        seen[1],
        (Some("second".to_string()), Some("first".to_string()))
    );
}

#[test]
fn test_signal_shared_across_threads() {
    let signal = Arc::new(Signal::<usize>::new());
    let total = Arc::new(AtomicUsize::new(0));
    let total_clone = total.clone();
    signal.connect(move |n| {
        total_clone.fetch_add(*n, Ordering::SeqCst);
    });

    let handles: Vec<_> = (1..=4)
        .map(|n| {
            let signal = signal.clone();
            std::thread::spawn(move || signal.emit(n))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(total.load(Ordering::SeqCst), 10);
}

#[test]
fn test_reconnected_slots_run_after_older_ones() {
    init_logging();
    let active = ActiveKey::new();
    let order = Arc::new(Mutex::new(Vec::new()));
    let listen = |name: &'static str| {
        let order = order.clone();
        active.changed.connect(move |_| order.lock().push(name))
    };

    let first = listen("first");
    listen("second");
    assert!(active.changed.disconnect(first));
    listen("third");
    listen("fourth");

    active.set(Some("a"));
    assert_eq!(*order.lock(), vec!["second", "third", "fourth"]);
    assert_eq!(active.changed.connection_count(), 3);
}
