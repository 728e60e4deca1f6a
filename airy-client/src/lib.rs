//! Client classification for airy.
//!
//! This crate classifies a user-agent string plus a platform string into
//! structured rendering-engine, browser and operating-system/device
//! information ([`Client`]), via [`Classification::classify`] or, for
//! server contexts that own a header map, [`Classification::from_headers`].
//!
//! Classification is a pure function of its string inputs: no I/O, no
//! shared state, and it never fails. Patterns that do not match simply
//! leave their fields at the zero defaults, and a completely absent
//! user-agent yields the [`Classification::Unknown`] sentinel.
//!
//! # Remarks
//!
//! The engine cascade is ordered and first-match-wins: once an engine is
//! identified no later engine rule is evaluated. Two derived fields are
//! unconditional: [`BrowserInfo`] always mirrors the engine's `ie` and
//! `opera` version numbers, whichever branch ran.
//!
//! Version numbers follow leading-float-prefix semantics: the raw capture
//! is kept in the `ver` fields, while the numeric fields hold only the
//! `major.minor` prefix of it (`"91.0.4472.124"` parses as `91.0`).

#![cfg_attr(test, allow(clippy::float_cmp))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

mod client;
pub use client::*;
