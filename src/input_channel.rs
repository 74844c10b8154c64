pub mod input_channel {

    use crate::error::error::Error;
    use embedded_hal::digital::InputPin;
    use heapless::Vec;

    /// Opaque handle of a GPIO port, usually the base address of its block.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub struct PortId(pub usize);

    impl PortId {
        pub const UNSET: PortId = PortId(0);

        pub fn is_unset(self) -> bool {
            self == PortId::UNSET
        }
    }

    /// Reads the electrical level of one input. Must not block.
    pub trait PinReader {
        fn is_asserted(&mut self, port: PortId, pin: u16) -> bool;
    }

    impl<F: FnMut(PortId, u16) -> bool> PinReader for F {
        fn is_asserted(&mut self, port: PortId, pin: u16) -> bool {
            self(port, pin)
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub enum Polarity {
        ActiveHigh,
        ActiveLow, // switch to ground against a pull-up
    }

    struct PinEntry<I> {
        port: PortId,
        pin: u16,
        polarity: Polarity,
        input: I,
    }

    /// Maps `(port, pin)` pairs to `embedded-hal` input pins.
    pub struct PinTable<I: InputPin, const N: usize> {
        entries: Vec<PinEntry<I>, N>,
    }

    impl<I: InputPin, const N: usize> PinTable<I, N> {
        pub fn new() -> Self {
            PinTable {
                entries: Vec::new(),
            }
        }

        /// Registers `input` for `(port, pin)`. A pair that is already
        /// mapped is rejected with `InvalidArgument`.
        pub fn add(
            &mut self,
            port: PortId,
            pin: u16,
            polarity: Polarity,
            input: I,
        ) -> Result<(), Error> {
            if self
                .entries
                .iter()
                .any(|e| e.port == port && e.pin == pin)
            {
                return Err(Error::InvalidArgument);
            }
            self.entries
                .push(PinEntry {
                    port,
                    pin,
                    polarity,
                    input,
                })
                .map_err(|_| Error::CapacityExceeded)
        }

        pub fn len(&self) -> usize {
            self.entries.len()
        }

        pub fn is_empty(&self) -> bool {
            self.entries.is_empty()
        }
    }

    impl<I: InputPin, const N: usize> Default for PinTable<I, N> {
        fn default() -> Self {
            Self::new()
        }
    }

    impl<I: InputPin, const N: usize> PinReader for PinTable<I, N> {
        fn is_asserted(&mut self, port: PortId, pin: u16) -> bool {
            match self
                .entries
                .iter_mut()
                .find(|e| e.port == port && e.pin == pin)
            {
                Some(entry) => match entry.polarity {
                    Polarity::ActiveHigh => entry.input.is_high().unwrap_or(false),
                    Polarity::ActiveLow => entry.input.is_low().unwrap_or(false),
                },
                None => false,
            }
        }
    }

}
