pub mod button {

    use crate::clock::clock::{settled, WrapDetector};
    use crate::diagnostics::diagnostics::{Diagnostics, Event};
    use crate::input_channel::input_channel::PortId;
    use crate::string::string::ButtonName;

    //     PIN:    ______|‾|_|‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾|_______________________
    //
    //     STATE:  REL   ON REL ON ....SETTLE.... PRESSED OFF ....SETTLE.... REL

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub enum ButtonState {
        Released,
        Pressed,
        SwitchingOn,
        SwitchingOff,
    }

    #[derive(Debug, Clone)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub struct Button {
        name: ButtonName,       // unique within a registry
        port: PortId,           // port the button is wired to
        pin: u16,               // pin number on that port
        state: ButtonState,     // debounced logical state
        rising_timestamp: u32,  // start of the last press transition
        falling_timestamp: u32, // start of the last release transition
    }

    impl Button {
        /// `asserted` is the level sampled at creation. A button already held
        /// down starts out `Pressed`, so no press is reported for it.
        pub fn new(name: ButtonName, port: PortId, pin: u16, asserted: bool) -> Self {
            let state = if asserted && !port.is_unset() && pin != 0 {
                ButtonState::Pressed
            } else {
                ButtonState::Released
            };
            Button {
                name,
                port,
                pin,
                state,
                rising_timestamp: 0,
                falling_timestamp: 0,
            }
        }

        pub fn name(&self) -> &str {
            self.name.as_str()
        }

        pub fn port(&self) -> PortId {
            self.port
        }

        pub fn pin(&self) -> u16 {
            self.pin
        }

        pub fn state(&self) -> ButtonState {
            self.state
        }

        pub fn rising_timestamp(&self) -> u32 {
            self.rising_timestamp
        }

        pub fn falling_timestamp(&self) -> u32 {
            self.falling_timestamp
        }

        pub fn is_pressed(&self) -> bool {
            self.state == ButtonState::Pressed
        }

        pub fn is_released(&self) -> bool {
            self.state == ButtonState::Released
        }

        /// Advances the debounce state machine by one sample.
        ///
        /// A level change inside the opposite transition cancels it on the
        /// spot. A transition in the matching direction only completes once
        /// the level held for `SETTLE_DELAY` ticks. `wrap` is consulted only
        /// for that settle check.
        pub fn update<W: WrapDetector + ?Sized>(
            &mut self,
            asserted: bool,
            now: u32,
            wrap: &mut W,
            diagnostics: &mut Diagnostics<'_>,
        ) {
            if asserted {
                match self.state {
                    ButtonState::Released => {
                        self.state = ButtonState::SwitchingOn;
                        self.rising_timestamp = now;
                        diagnostics.emit(Event::PressStarted {
                            name: self.name(),
                            now,
                        });
                    }
                    ButtonState::Pressed => {}
                    ButtonState::SwitchingOn => {
                        if settled(self.rising_timestamp, now, wrap.has_wrapped()) {
                            self.state = ButtonState::Pressed;
                            diagnostics.emit(Event::Pressed {
                                name: self.name(),
                                now,
                            });
                        }
                    }
                    ButtonState::SwitchingOff => {
                        self.state = ButtonState::Pressed;
                        self.falling_timestamp = now;
                    }
                }
            } else {
                match self.state {
                    ButtonState::Released => {}
                    ButtonState::Pressed => {
                        self.state = ButtonState::SwitchingOff;
                        self.falling_timestamp = now;
                        diagnostics.emit(Event::ReleaseStarted {
                            name: self.name(),
                            now,
                        });
                    }
                    ButtonState::SwitchingOn => {
                        self.state = ButtonState::Released;
                        self.falling_timestamp = now;
                    }
                    ButtonState::SwitchingOff => {
                        if settled(self.falling_timestamp, now, wrap.has_wrapped()) {
                            self.state = ButtonState::Released;
                            diagnostics.emit(Event::Released {
                                name: self.name(),
                                now,
                            });
                        }
                    }
                }
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::clock::clock::SETTLE_DELAY;
        use crate::string::string::button_name;
        use core::cell::Cell;

        const PORT: PortId = PortId(0x4002_0000);

        fn released() -> Button {
            Button::new(button_name("Enter"), PORT, 4, false)
        }

        fn step(button: &mut Button, asserted: bool, now: u32) {
            let mut no_wrap = || false;
            button.update(asserted, now, &mut no_wrap, &mut Diagnostics::new());
        }

        #[test]
        fn initial_state_follows_sampled_level() {
            assert_eq!(released().state(), ButtonState::Released);
            let held = Button::new(button_name("Enter"), PORT, 4, true);
            assert_eq!(held.state(), ButtonState::Pressed);
        }

        #[test]
        fn trivial_identity_never_starts_pressed() {
            let pin_zero = Button::new(button_name("A"), PORT, 0, true);
            assert_eq!(pin_zero.state(), ButtonState::Released);
            let no_port = Button::new(button_name("A"), PortId::UNSET, 3, true);
            assert_eq!(no_port.state(), ButtonState::Released);
        }

        #[test]
        fn press_commits_after_settle_delay() {
            let mut button = released();
            step(&mut button, true, 1000);
            assert_eq!(button.state(), ButtonState::SwitchingOn);
            assert_eq!(button.rising_timestamp(), 1000);

            step(&mut button, true, 1000 + SETTLE_DELAY - 1);
            assert_eq!(button.state(), ButtonState::SwitchingOn);
            assert!(!button.is_pressed());
            assert!(!button.is_released());

            step(&mut button, true, 1000 + SETTLE_DELAY);
            assert_eq!(button.state(), ButtonState::Pressed);
            assert_eq!(button.rising_timestamp(), 1000);
        }

        #[test]
        fn release_commits_after_settle_delay() {
            let mut button = Button::new(button_name("Enter"), PORT, 4, true);
            step(&mut button, false, 200);
            assert_eq!(button.state(), ButtonState::SwitchingOff);
            assert_eq!(button.falling_timestamp(), 200);

            step(&mut button, false, 200 + SETTLE_DELAY - 1);
            assert_eq!(button.state(), ButtonState::SwitchingOff);

            step(&mut button, false, 200 + SETTLE_DELAY);
            assert_eq!(button.state(), ButtonState::Released);
        }

        #[test]
        fn bounce_during_press_reverts_to_released() {
            let mut button = released();
            step(&mut button, true, 10);
            step(&mut button, false, 12);
            assert_eq!(button.state(), ButtonState::Released);
            assert_eq!(button.falling_timestamp(), 12);
        }

        #[test]
        fn bounce_during_release_reverts_to_pressed() {
            let mut button = Button::new(button_name("Enter"), PORT, 4, true);
            step(&mut button, false, 10);
            step(&mut button, true, 15);
            assert_eq!(button.state(), ButtonState::Pressed);
            assert_eq!(button.falling_timestamp(), 15);
        }

        #[test]
        fn wrap_detector_only_asked_during_settling() {
            let asked = Cell::new(0u32);
            let mut detector = || {
                asked.set(asked.get() + 1);
                false
            };
            let mut diagnostics = Diagnostics::new();
            let mut button = released();

            button.update(false, 0, &mut detector, &mut diagnostics);
            button.update(true, 1, &mut detector, &mut diagnostics);
            assert_eq!(asked.get(), 0);

            button.update(true, 2, &mut detector, &mut diagnostics);
            button.update(true, 3, &mut detector, &mut diagnostics);
            assert_eq!(asked.get(), 2);
        }

        #[test]
        fn wrapped_counter_uses_tick_max_bound() {
            let mut wrapped = || true;
            let mut diagnostics = Diagnostics::new();
            let mut button = released();

            button.update(true, 100, &mut wrapped, &mut diagnostics);
            button.update(true, 10, &mut wrapped, &mut diagnostics);
            assert_eq!(button.state(), ButtonState::SwitchingOn);

            button.update(true, u32::MAX - 150, &mut wrapped, &mut diagnostics);
            assert_eq!(button.state(), ButtonState::Pressed);
        }

        #[test]
        fn wrapped_counter_releases_on_tick_max_bound() {
            let mut wrapped = || true;
            let mut diagnostics = Diagnostics::new();
            let mut button = Button::new(button_name("Enter"), PORT, 4, true);

            button.update(false, 100, &mut wrapped, &mut diagnostics);
            assert_eq!(button.state(), ButtonState::SwitchingOff);
            button.update(false, 10, &mut wrapped, &mut diagnostics);
            assert_eq!(button.state(), ButtonState::SwitchingOff);

            button.update(false, u32::MAX - 150, &mut wrapped, &mut diagnostics);
            assert_eq!(button.state(), ButtonState::Released);
            assert_eq!(button.falling_timestamp(), 100);
        }
    }
}
