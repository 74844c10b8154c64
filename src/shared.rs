pub mod shared {
    use core::cell::RefCell;
    use critical_section::Mutex;

    /// A `static`-friendly slot for a driver that is ticked from one context
    /// (a timer interrupt, say) and queried from another. Every access runs
    /// inside a critical section.
    pub struct SharedControl<C> {
        inner: Mutex<RefCell<Option<C>>>,
    }

    impl<C> SharedControl<C> {
        pub const fn new() -> Self {
            SharedControl {
                inner: Mutex::new(RefCell::new(None)),
            }
        }

        /// Stores `control`, handing back whatever was installed before.
        pub fn install(&self, control: C) -> Option<C> {
            critical_section::with(|cs| self.inner.borrow_ref_mut(cs).replace(control))
        }

        pub fn take(&self) -> Option<C> {
            critical_section::with(|cs| self.inner.borrow_ref_mut(cs).take())
        }

        /// Runs `f` on the installed driver. Returns `None` when nothing is
        /// installed.
        pub fn with<R>(&self, f: impl FnOnce(&mut C) -> R) -> Option<R> {
            critical_section::with(|cs| self.inner.borrow_ref_mut(cs).as_mut().map(f))
        }
    }

    impl<C> Default for SharedControl<C> {
        fn default() -> Self {
            Self::new()
        }
    }

}
