use std::fmt;

mod info;
pub use info::{Capabilities, Classification, DeviceKind};

mod tags;
pub use tags::{Iter, TagSet};

mod classify;

mod render;
pub use render::XmlElement;

/// Error returned when classifying an absent user agent string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidInput;

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid input: user agent string is absent")
    }
}

impl std::error::Error for InvalidInput {}
