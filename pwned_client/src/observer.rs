//! Error observers notified with the debug records of a failing call.

use crate::debug::DebugRecord;

/// Receives the request and response records of a call that ended with an
/// error while debugging was enabled.
pub trait ErrorObserver: Send + Sync {
    fn on_error(&self, request: &DebugRecord, response: &DebugRecord);
}

impl<F> ErrorObserver for F
where
    F: Fn(&DebugRecord, &DebugRecord) + Send + Sync,
{
    fn on_error(&self, request: &DebugRecord, response: &DebugRecord) {
        self(request, response)
    }
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Subscribed observers in subscription order
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    entries: Vec<(ObserverId, Box<dyn ErrorObserver>)>,
}

impl Observers {
    pub(crate) fn subscribe(&mut self, observer: Box<dyn ErrorObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn notify(&self, request: &DebugRecord, response: &DebugRecord) {
        for (_, observer) in &self.entries {
            observer.on_error(request, response);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debug::{DebugContext, DebugValue};
    use crate::signing::HttpMethod;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn record(context: DebugContext) -> DebugRecord {
        DebugRecord {
            context,
            value: DebugValue {
                request_method: HttpMethod::Get,
                url: "http://x/ping".to_string(),
                data: None,
            },
            errors: Vec::new(),
        }
    }

    #[test]
    fn test_subscribe_notify_unsubscribe() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut observers = Observers::default();

        let counter = calls.clone();
        let id = observers.subscribe(Box::new(move |_: &DebugRecord, _: &DebugRecord| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        let req = record(DebugContext::Request);
        let resp = record(DebugContext::Response);
        observers.notify(&req, &resp);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        assert!(observers.unsubscribe(id));
        assert!(!observers.unsubscribe(id));
        observers.notify(&req, &resp);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(observers.len(), 0);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut observers = Observers::default();
        let a = observers.subscribe(Box::new(|_: &DebugRecord, _: &DebugRecord| {}));
        let b = observers.subscribe(Box::new(|_: &DebugRecord, _: &DebugRecord| {}));
        assert_ne!(a, b);
        assert_eq!(observers.len(), 2);
    }
}
