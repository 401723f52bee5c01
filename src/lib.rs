//! 🔎 uasniff sniffs the user agent string a client (browser or bot) sends
//! and classifies it into hierarchical, human readable tags.
//!
//! ```
//! # #[cfg(feature = "ua")]
//! # {
//! use uasniff::ua::{Classification, DeviceKind};
//!
//! let ua = Classification::new(
//!     "Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36",
//! );
//!
//! assert_eq!(ua.device(), DeviceKind::Desktop);
//! assert!(ua.has_tag("BrowserOS-Windows-7"));
//! assert!(ua.has_tag("Browser-Chrome-58"));
//! # }
//! ```
//!
//! | category | crate |
//! |-|-|
//! | classification engine, tag sets, rendering, fixtures | `ua` (feature `ua`) |
//! | error handling | [`error`] |
//! | shared macros and string helpers | [`utils`] |
//!
//! The `uasniff` binary (crate `uasniff-cli`) exposes the same engine on the command line.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]
#![forbid(unsafe_code)]

#[doc(inline)]
pub use ::uasniff_error as error;

#[doc(inline)]
pub use ::uasniff_utils as utils;

#[cfg(feature = "ua")]
#[cfg_attr(docsrs, doc(cfg(feature = "ua")))]
#[doc(inline)]
pub use ::uasniff_ua as ua;
