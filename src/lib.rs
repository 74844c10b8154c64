//! Polled button debouncing for control loops.
//!
//! A [`ButtonControl`] owns up to `N` named buttons. Each call to
//! [`ButtonControl::tick`] samples one of them and steps its debounce state
//! machine, so the main loop only has to call `tick()` once per iteration:
//!
//! ```
//! use buttonctrl::{ButtonControl, Capabilities, PortId};
//!
//! let capabilities = Capabilities::new()
//!     .pin_reader(|_port: PortId, _pin: u16| false)
//!     .tick_reader(|| 0u32)
//!     .wrap_detector(|| false);
//! let mut buttons: ButtonControl<'_, _, _, _, 2> = ButtonControl::init(capabilities).unwrap();
//!
//! buttons.create("Start", PortId(0x4800_0000), 13).unwrap();
//! buttons.tick();
//! assert!(buttons.is_released("Start"));
//! ```
#![cfg_attr(not(test), no_std)]

pub mod button;
pub mod clock;
pub mod control;
pub mod diagnostics;
pub mod error;
pub mod input_channel;
pub mod shared;
pub mod string;

pub use button::button::{Button, ButtonState};
pub use clock::clock::{settled, TickReader, WrapDetector, SETTLE_DELAY, TICK_MAX};
pub use control::control::{ButtonControl, Capabilities};
pub use diagnostics::diagnostics::{DebugLevel, Diagnostics, Event};
pub use error::error::Error;
pub use input_channel::input_channel::{PinReader, PinTable, Polarity, PortId};
pub use shared::shared::SharedControl;
pub use string::string::{button_name, ButtonName, NAME_LEN};
