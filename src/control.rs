pub mod control {

    use crate::button::button::{Button, ButtonState};
    use crate::clock::clock::{TickReader, WrapDetector};
    use crate::diagnostics::diagnostics::{DebugLevel, Diagnostics, Event};
    use crate::error::error::Error;
    use crate::input_channel::input_channel::{PinReader, PortId};
    use crate::string::string::{button_name, same_name};
    use core::fmt::Write;
    use heapless::Vec;

    /// The hardware hooks the driver runs on. All three are required.
    pub struct Capabilities<P, T, W> {
        pin_reader: Option<P>,
        tick_reader: Option<T>,
        wrap_detector: Option<W>,
    }

    impl<P: PinReader, T: TickReader, W: WrapDetector> Capabilities<P, T, W> {
        pub fn new() -> Self {
            Capabilities {
                pin_reader: None,
                tick_reader: None,
                wrap_detector: None,
            }
        }

        pub fn pin_reader(mut self, reader: P) -> Self {
            self.pin_reader = Some(reader);
            self
        }

        pub fn tick_reader(mut self, reader: T) -> Self {
            self.tick_reader = Some(reader);
            self
        }

        pub fn wrap_detector(mut self, detector: W) -> Self {
            self.wrap_detector = Some(detector);
            self
        }
    }

    impl<P: PinReader, T: TickReader, W: WrapDetector> Default for Capabilities<P, T, W> {
        fn default() -> Self {
            Self::new()
        }
    }

    /// Registry of up to `N` buttons plus the round-robin cursor that
    /// services one of them per [`tick`](ButtonControl::tick).
    pub struct ButtonControl<'a, P, T, W, const N: usize> {
        button_list: Vec<Button, N>,
        current_button: usize,
        pin_reader: P,
        tick_reader: T,
        wrap_detector: W,
        diagnostics: Diagnostics<'a>,
    }

    impl<'a, P, T, W, const N: usize> ButtonControl<'a, P, T, W, N>
    where
        P: PinReader,
        T: TickReader,
        W: WrapDetector,
    {
        pub fn init(capabilities: Capabilities<P, T, W>) -> Result<Self, Error> {
            let Capabilities {
                pin_reader: Some(pin_reader),
                tick_reader: Some(tick_reader),
                wrap_detector: Some(wrap_detector),
            } = capabilities
            else {
                return Err(Error::InvalidArgument);
            };

            Ok(ButtonControl {
                button_list: Vec::new(),
                current_button: 0,
                pin_reader,
                tick_reader,
                wrap_detector,
                diagnostics: Diagnostics::new(),
            })
        }

        /// Registers a button on `port`/`pin`. Its initial state is sampled
        /// right away.
        pub fn create(&mut self, name: &str, port: PortId, pin: u16) -> Result<(), Error> {
            if name.is_empty() || port.is_unset() {
                return Err(Error::InvalidArgument);
            }
            if self.button_list.is_full() {
                return Err(Error::CapacityExceeded);
            }
            if self.find(name).is_some() {
                return Err(Error::DuplicateName);
            }

            let asserted = pin != 0 && self.pin_reader.is_asserted(port, pin);
            let button = Button::new(button_name(name), port, pin, asserted);
            self.button_list
                .push(button)
                .map_err(|_| Error::CapacityExceeded)?;

            if let Some(button) = self.button_list.last() {
                self.diagnostics.emit(Event::Created {
                    name: button.name(),
                });
            }
            Ok(())
        }

        /// Index of the button called `name`. Names are unique, so the last
        /// match is the only one.
        pub fn find(&self, name: &str) -> Option<usize> {
            if name.is_empty() {
                return None;
            }
            self.button_list
                .iter()
                .rposition(|b| same_name(b.name(), name))
        }

        /// Runs the debounce step for the next button in creation order.
        pub fn tick(&mut self) {
            if let Some(button) = self.button_list.get_mut(self.current_button) {
                let now = self.tick_reader.now();
                let asserted = self.pin_reader.is_asserted(button.port(), button.pin());
                button.update(
                    asserted,
                    now,
                    &mut self.wrap_detector,
                    &mut self.diagnostics,
                );
            }

            self.current_button += 1;
            if self.current_button >= self.button_list.len() {
                self.current_button = 0;
            }
        }

        pub fn is_pressed(&self, name: &str) -> bool {
            self.state(name) == Some(ButtonState::Pressed)
        }

        pub fn is_released(&self, name: &str) -> bool {
            self.state(name) == Some(ButtonState::Released)
        }

        pub fn state(&self, name: &str) -> Option<ButtonState> {
            self.find(name).map(|i| self.button_list[i].state())
        }

        pub fn button(&self, index: usize) -> Option<&Button> {
            self.button_list.get(index)
        }

        pub fn buttons(&self) -> &[Button] {
            &self.button_list
        }

        pub fn len(&self) -> usize {
            self.button_list.len()
        }

        pub fn is_empty(&self) -> bool {
            self.button_list.is_empty()
        }

        pub fn capacity(&self) -> usize {
            N
        }

        pub fn set_sink(&mut self, sink: Option<&'a mut (dyn Write + Send)>) {
            self.diagnostics.set_sink(sink);
        }

        pub fn set_debug_level(&mut self, level: DebugLevel) {
            self.diagnostics.set_level(level);
        }

        pub fn debug_level(&self) -> DebugLevel {
            self.diagnostics.level()
        }
    }

}
