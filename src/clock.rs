pub mod clock {

    pub const SETTLE_DELAY: u32 = 50; // ticks a level must hold before it is committed
    pub const TICK_MAX: u32 = u32::MAX;

    /// Source of the free running tick counter, e.g. a HAL `get_tick()`.
    pub trait TickReader {
        fn now(&mut self) -> u32;
    }

    /// Tells whether the tick counter rolled over recently enough to affect
    /// the settle checks currently in flight.
    pub trait WrapDetector {
        fn has_wrapped(&mut self) -> bool;
    }

    impl<F: FnMut() -> u32> TickReader for F {
        fn now(&mut self) -> u32 {
            self()
        }
    }

    impl<F: FnMut() -> bool> WrapDetector for F {
        fn has_wrapped(&mut self) -> bool {
            self()
        }
    }

    /// Returns true once `SETTLE_DELAY` ticks have passed since `reference`.
    ///
    /// Without a wrap this is a plain modular distance. After a wrap the
    /// comparison is `TICK_MAX - reference - SETTLE_DELAY <= now`, evaluated
    /// with wrapping subtraction. It is not an exact modular distance.
    pub fn settled(reference: u32, now: u32, wrapped: bool) -> bool {
        if wrapped {
            TICK_MAX.wrapping_sub(reference).wrapping_sub(SETTLE_DELAY) <= now
        } else {
            now.wrapping_sub(reference) >= SETTLE_DELAY
        }
    }

}
