use std::time::Instant;

use crate::export::Download;

/// Work the page performs after a fixed delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deferred {
    /// Show the input form once the card selection transition has played.
    RevealForm,
    /// Hand over the second export artifact.
    Deliver(Download),
}

#[derive(Debug, Default)]
pub struct Scheduler {
    queue: Vec<(Instant, Deferred)>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due: Instant, work: Deferred) {
        self.queue.push((due, work));
    }

    /// Remove and return everything due at `now`, earliest first.
    /// Items with equal deadlines keep their scheduling order.
    pub fn take_due(&mut self, now: Instant) -> Vec<Deferred> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.queue.drain(..).partition(|(at, _)| *at <= now);
        self.queue = pending;
        due.sort_by_key(|(at, _)| *at);
        due.into_iter().map(|(_, work)| work).collect()
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.queue.iter().map(|(at, _)| *at).min()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_only_due_work_is_taken() {
        let now = Instant::now();
        let mut s = Scheduler::new();
        s.schedule(now + Duration::from_millis(300), Deferred::RevealForm);

        assert!(s.take_due(now).is_empty());
        assert_eq!(s.len(), 1);

        assert_eq!(
            s.take_due(now + Duration::from_millis(300)),
            vec![Deferred::RevealForm]
        );
        assert!(s.is_empty());
    }

    #[test]
    fn test_due_work_comes_out_in_deadline_order() {
        let now = Instant::now();
        let mut s = Scheduler::new();
        let late = Deferred::Deliver(crate::export::Download {
            filename: "late.txt".into(),
            mime: "text/plain",
            contents: String::new(),
        });
        s.schedule(now + Duration::from_millis(500), late.clone());
        s.schedule(now + Duration::from_millis(100), Deferred::RevealForm);

        assert_eq!(s.next_due(), Some(now + Duration::from_millis(100)));
        assert_eq!(
            s.take_due(now + Duration::from_secs(1)),
            vec![Deferred::RevealForm, late]
        );
    }
}
