pub mod error {
    use core::fmt;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub enum Error {
        /// Empty name, unset port or a missing capability
        InvalidArgument,
        /// Every registry slot is taken
        CapacityExceeded,
        /// A button with this name already exists
        DuplicateName,
    }

    impl fmt::Display for Error {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Error::InvalidArgument => write!(f, "invalid argument"),
                Error::CapacityExceeded => write!(f, "button registry is full"),
                Error::DuplicateName => write!(f, "button name already registered"),
            }
        }
    }
}
