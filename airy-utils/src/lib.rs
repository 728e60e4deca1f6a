//! utilities crate for airy
//!
//! `airy-utils` contains the small helpers shared by the rest of the
//! workspace, as well as the standalone utility modules of the
//! collection: random identifiers, email validation and unrolled
//! batch iteration.

#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

#[doc(hidden)]
#[macro_use]
pub mod macros;

pub mod batch;
pub mod email;
pub mod rng;
pub mod str;
