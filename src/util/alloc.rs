use std::cell::Cell;
use std::rc::Rc;

/// A value which counts how many times it, or any of its clones, has been dropped.
#[derive(Debug, Clone)]
pub struct DropCounter(pub Rc<Cell<usize>>);

impl DropCounter {
    /// Creates a new counter, starting at 0 drops.
    pub fn new() -> DropCounter {
        DropCounter(Rc::new(Cell::new(0)))
    }

    /// Returns the number of drops recorded so far.
    pub fn drops(&self) -> usize {
        self.0.get()
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
