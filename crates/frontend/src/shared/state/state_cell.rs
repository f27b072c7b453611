use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Mutable slot holding a store
///
/// Closures must not reach back into the same cell.
pub trait StateCell<T> {
    fn modify(&self, f: impl FnOnce(&mut T));
    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> R;
}

/// Reactive slot: `modify` notifies subscribers, `inspect` does not subscribe
impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn modify(&self, f: impl FnOnce(&mut T)) {
        self.update(f);
    }

    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.with_untracked(f)
    }
}

impl<T> StateCell<T> for RefCell<T> {
    fn modify(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.borrow_mut());
    }

    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.borrow())
    }
}

impl<T> StateCell<T> for Rc<RefCell<T>> {
    fn modify(&self, f: impl FnOnce(&mut T)) {
        self.as_ref().modify(f);
    }

    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.as_ref().inspect(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ref_cell_cells() {
        let cell = RefCell::new(vec![1]);
        cell.modify(|v| v.push(2));
        assert_eq!(cell.inspect(|v| v.len()), 2);

        let shared = Rc::new(RefCell::new(0u32));
        let other = shared.clone();
        shared.modify(|n| *n += 5);
        assert_eq!(other.inspect(|n| *n), 5);
    }
}
