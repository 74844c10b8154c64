pub mod diagnostics {
    use core::fmt::Write;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub enum DebugLevel {
        #[default]
        Disabled,
        Info,
        Detailed,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub enum Event<'a> {
        Created { name: &'a str },
        PressStarted { name: &'a str, now: u32 },
        ReleaseStarted { name: &'a str, now: u32 },
        Pressed { name: &'a str, now: u32 },
        Released { name: &'a str, now: u32 },
    }

    impl<'a> Event<'a> {
        /// Renders the line for this event at `level`. Writes nothing when
        /// the level is too low for the event.
        pub fn write(&self, out: &mut dyn Write, level: DebugLevel) -> core::fmt::Result {
            match (*self, level) {
                (_, DebugLevel::Disabled) => Ok(()),
                (Event::Created { name }, _) => {
                    write!(out, "Button \"{}\" is initialized\r\n", name)
                }
                (Event::PressStarted { name, now }, DebugLevel::Detailed) => write!(
                    out,
                    "Start to press button \"{}\", currentTimestamp: {}\r\n",
                    name, now
                ),
                (Event::ReleaseStarted { name, now }, DebugLevel::Detailed) => write!(
                    out,
                    "Start to release button \"{}\", currentTimestamp: {}\r\n",
                    name, now
                ),
                (Event::Pressed { name, now }, DebugLevel::Detailed) => write!(
                    out,
                    "Button \"{}\" is pressed, currentTimestamp: {}\r\n",
                    name, now
                ),
                (Event::Pressed { name, .. }, DebugLevel::Info) => {
                    write!(out, "Button \"{}\" is pressed\r\n", name)
                }
                (Event::Released { name, now }, DebugLevel::Detailed) => write!(
                    out,
                    "Button \"{}\" is released, currentTimestamp: {}\r\n",
                    name, now
                ),
                (Event::Released { name, .. }, DebugLevel::Info) => {
                    write!(out, "Button \"{}\" is released\r\n", name)
                }
                _ => Ok(()),
            }
        }
    }

    /// Optional text sink plus the level that gates it.
    pub struct Diagnostics<'a> {
        sink: Option<&'a mut (dyn Write + Send)>,
        level: DebugLevel,
    }

    impl<'a> Diagnostics<'a> {
        pub fn new() -> Self {
            Diagnostics {
                sink: None,
                level: DebugLevel::Disabled,
            }
        }

        pub fn set_sink(&mut self, sink: Option<&'a mut (dyn Write + Send)>) {
            self.sink = sink;
        }

        pub fn set_level(&mut self, level: DebugLevel) {
            self.level = level;
        }

        pub fn level(&self) -> DebugLevel {
            self.level
        }

        pub fn emit(&mut self, event: Event<'_>) {
            #[cfg(feature = "defmt")]
            defmt::debug!("{}", event);

            if let Some(sink) = self.sink.as_mut() {
                // best effort, a failing sink never stops the state machine
                event.write(&mut **sink, self.level).ok();
            }
        }
    }

    impl<'a> Default for Diagnostics<'a> {
        fn default() -> Self {
            Self::new()
        }
    }

}
