//! # airy
//!
//! Client classification and supporting utilities.
//!
//! The heart of this workspace is [`Classification::classify`]: a pure
//! function turning a user-agent string and a platform string into
//! structured rendering-engine, browser and system information. The
//! companion crates carry the plumbing: string search helpers, random
//! identifier generation and email validation in [`utils`], and opaque
//! error handling in [`error`].
//!
//! ```rust
//! use airy::Classification;
//!
//! let classification = Classification::classify(
//!     Some(
//!         "Mozilla/5.0 (Windows NT 6.1) AppleWebKit/537.36 \
//!          (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
//!     ),
//!     Some("Win32"),
//! );
//! let client = classification.client().unwrap();
//! assert_eq!(client.browser.chrome, 91.0);
//! ```
//!
//! An absent user-agent yields [`Classification::Unknown`], which
//! serializes to the `"unknown"` sentinel string:
//!
//! ```rust
//! use airy::Classification;
//!
//! let classification = Classification::classify(None, None);
//! assert!(classification.is_unknown());
//! ```

#![cfg_attr(test, allow(clippy::float_cmp))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

#[doc(inline)]
pub use airy_client as client;

#[doc(inline)]
pub use airy_error as error;

#[doc(inline)]
pub use airy_utils as utils;

pub use airy_client::{Classification, Client, HostHints};
