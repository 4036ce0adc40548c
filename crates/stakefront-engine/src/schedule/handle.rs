use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Opaque handle to a recurring scheduled callback.
///
/// The scheduler keeps a clone; the caller owns the other. Either side can
/// observe cancellation, only the caller requests it.
#[derive(Clone)]
pub struct ScheduleHandle {
    id: u64,
    cancelled: Rc<Cell<bool>>,
}

impl ScheduleHandle {
    pub(crate) fn new(id: u64) -> Self {
        Self { id, cancelled: Rc::new(Cell::new(false)) }
    }

    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Requests cancellation. Calling this more than once has no further effect.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

impl fmt::Debug for ScheduleHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScheduleHandle")
            .field("id", &self.id)
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_is_shared_and_idempotent() {
        let h = ScheduleHandle::new(7);
        let seen_by_scheduler = h.clone();
        assert!(!seen_by_scheduler.is_cancelled());

        h.cancel();
        h.cancel();

        assert!(seen_by_scheduler.is_cancelled());
        assert_eq!(seen_by_scheduler.id(), 7);
    }
}
