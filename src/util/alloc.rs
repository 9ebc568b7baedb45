use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A unit type for checking that collections handle zero-sized elements.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[allow(unused)]
pub struct ZeroSizedType;

/// Counts how many of its instances (the original and every clone) have been dropped, through a
/// shared cell. Used to verify that collections release exactly the elements they should, no more
/// and no fewer.
#[derive(Debug, Clone)]
pub struct CountedDrop(Rc<RefCell<usize>>);

impl CountedDrop {
    #[allow(unused)]
    pub fn new() -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(0)))
    }

    /// Returns the number of drops recorded so far and resets the count to zero.
    #[allow(unused)]
    pub fn take(&self) -> usize {
        self.0.take()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|v| *v + 1);
    }
}

/// A value whose clone panics once the shared fuse runs out, simulating an element construction
/// failure partway through a deep copy. Drops of every instance are still recorded by the provided
/// [`CountedDrop`], so leak checks keep working across the panic.
#[derive(Debug)]
#[allow(unused)]
pub struct CloneBomb {
    fuse: Rc<Cell<usize>>,
    _tracker: CountedDrop,
}

impl CloneBomb {
    /// Creates a bomb which tolerates exactly `fuse` clones before panicking.
    #[allow(unused)]
    pub fn arm(fuse: usize, tracker: &CountedDrop) -> CloneBomb {
        CloneBomb {
            fuse: Rc::new(Cell::new(fuse)),
            _tracker: tracker.clone(),
        }
    }
}

impl Clone for CloneBomb {
    fn clone(&self) -> Self {
        let left = self.fuse.get();
        if left == 0 {
            panic!("clone fuse exhausted");
        }
        self.fuse.set(left - 1);

        CloneBomb {
            fuse: Rc::clone(&self.fuse),
            _tracker: self._tracker.clone(),
        }
    }
}
