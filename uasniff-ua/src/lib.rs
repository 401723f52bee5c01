//! User Agent (UA) classification.
//!
//! This crate classifies ([`Classification::new`]) the user agent string a
//! client sends into a set of hierarchical tags, describing:
//!
//! - the device class (`Device-Desktop`, `Device-Mobile`, `Device-Bot`, ...);
//! - the operating system and its version (`BrowserOS-Windows-NT-6-1`, `BrowserOS-Windows-7`, ...);
//! - the rendering engine and its version (`BrowserEngine-WebKit-537-36`, ...);
//! - the browser family and its version (`Browser-Chrome-58-0`, ...).
//!
//! Each version tag is always preceded by all its coarser ancestors, such that
//! `Browser-Firefox-3-6` implies `Browser-Firefox-3` and `Browser-Firefox`.
//!
//! Next to the tags the [`Capabilities`] of the device are derived,
//! which can be used to decide what content to serve.
//!
//! ```
//! use uasniff_ua::{Classification, DeviceKind};
//!
//! let ua = Classification::new(
//!     "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)",
//! );
//! assert_eq!(ua.device(), DeviceKind::Bot);
//! assert!(!ua.is_browser());
//! assert!(!ua.tags().contains_prefix("Browser"));
//! ```
//!
//! # Remarks
//!
//! Classification is a pure function of the agent string: there is no
//! signature database, no caching and no I/O. Unknown agents are not an error,
//! they merely result in fewer tags. Only an absent agent string is refused
//! ([`Classification::try_new`]).
//!
//! The [`fixture`] module can be used to verify classifications against
//! a plain text file of agents and expected tags.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

mod ua;
pub use ua::*;

mod rules;
pub use rules::VersionTags;

pub mod fixture;
