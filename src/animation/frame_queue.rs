// src/animation/frame_queue.rs
//
// Second phase of starting an animation: the transform is applied a short
// while after the transition so the sprite slides instead of jumping.
// Each pending transform carries a token so a pause can cancel it.

use std::cell::Cell;
use std::rc::Rc;

use crate::views::Translate;

#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

#[derive(Debug, Clone)]
pub struct PendingTransform {
    pub element_id: String,
    pub transform: Translate,
    pub due_at: f32,
    pub token: CancelToken,
}

#[derive(Debug, Default)]
pub struct FrameQueue {
    pending: Vec<PendingTransform>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Queue a transform; the returned token cancels it.
    pub fn schedule(&mut self, element_id: &str, transform: Translate, due_at: f32) -> CancelToken {
        let token = CancelToken::new();
        self.pending.push(PendingTransform {
            element_id: element_id.to_string(),
            transform,
            due_at,
            token: token.clone(),
        });
        token
    }

    /// Remove and return every transform that is due and not cancelled.
    /// Cancelled entries are dropped.
    pub fn take_due(&mut self, now: f32) -> Vec<PendingTransform> {
        let (due, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .filter(|p| !p.token.is_cancelled())
            .partition(|p| p.due_at <= now);
        self.pending = waiting;
        due
    }

    pub fn len(&self) -> usize {
        self.pending
            .iter()
            .filter(|p| !p.token.is_cancelled())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Axis;

    #[test]
    fn test_only_due_entries_are_taken() {
        let mut queue = FrameQueue::new();
        queue.schedule("a", Translate::new(Axis::X, 10.0), 0.05);
        queue.schedule("b", Translate::new(Axis::Y, 10.0), 0.10);

        assert!(queue.take_due(0.0).is_empty());
        let due = queue.take_due(0.06);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].element_id, "a");
        assert_eq!(queue.len(), 1);

        let due = queue.take_due(1.0);
        assert_eq!(due[0].element_id, "b");
        assert!(queue.is_empty());
    }

    #[test]
    fn test_cancelled_entries_never_fire() {
        let mut queue = FrameQueue::new();
        let token = queue.schedule("a", Translate::new(Axis::X, 10.0), 0.05);
        queue.schedule("b", Translate::new(Axis::X, 10.0), 0.05);
        token.cancel();
        assert!(token.is_cancelled());
        assert_eq!(queue.len(), 1);

        let due = queue.take_due(1.0);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].element_id, "b");
    }
}
