//! Event delivery abstraction (mechanics only).
//!
//! A sink is the hook through which the domain announces what happened to whatever
//! displays notifications. Delivery is synchronous and in emission order; there is no
//! buffering, retry or fan-out. A sink that wants several consumers composes them itself.

/// Receives events in the order they are emitted.
///
/// `notify` takes `&mut self`: the sink is owned (or exclusively borrowed) by the single
/// caller driving the domain, so no interior mutability is needed.
pub trait EventSink<E> {
    fn notify(&mut self, event: &E);
}

impl<E, S> EventSink<E> for &mut S
where
    S: EventSink<E> + ?Sized,
{
    fn notify(&mut self, event: &E) {
        (**self).notify(event)
    }
}

impl<E, S> EventSink<E> for Box<S>
where
    S: EventSink<E> + ?Sized,
{
    fn notify(&mut self, event: &E) {
        (**self).notify(event)
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl<E> EventSink<E> for NullSink {
    fn notify(&mut self, _event: &E) {}
}

/// Keeps every event it receives, in order. Useful for tests and for callers that
/// drain notifications after each operation.
#[derive(Debug, Clone)]
pub struct RecordingSink<E> {
    events: Vec<E>,
}

impl<E> RecordingSink<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[E] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Take all recorded events, leaving the sink empty.
    pub fn drain(&mut self) -> Vec<E> {
        std::mem::take(&mut self.events)
    }
}

impl<E> Default for RecordingSink<E> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<E: Clone> EventSink<E> for RecordingSink<E> {
    fn notify(&mut self, event: &E) {
        self.events.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_keeps_emission_order() {
        let mut sink = RecordingSink::new();
        sink.notify(&"first");
        sink.notify(&"second");
        assert_eq!(sink.events(), &["first", "second"]);
    }

    #[test]
    fn drain_empties_the_sink() {
        let mut sink = RecordingSink::new();
        sink.notify(&1u8);
        assert_eq!(sink.drain(), vec![1]);
        assert!(sink.is_empty());
    }

    fn deliver<S: EventSink<u32>>(mut sink: S, value: u32) {
        sink.notify(&value);
    }

    #[test]
    fn mutable_reference_forwards_to_inner_sink() {
        let mut sink = RecordingSink::new();
        deliver(&mut sink, 7);
        deliver(&mut sink, 8);
        assert_eq!(sink.events(), &[7, 8]);
    }

    #[test]
    fn boxed_dyn_sink_forwards() {
        let mut boxed: Box<dyn EventSink<u8>> = Box::new(NullSink);
        boxed.notify(&1);
    }
}
