//! error types and utilities for airy
//!
//! `airy-error` contains the type-erased error plumbing shared by the
//! other workspace crates. The classification core itself never fails;
//! these types back the fallible string-parsing (`FromStr`) surfaces.

#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

use std::error::Error as StdError;
use std::fmt;

/// Alias for a type-erased error type.
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// An opaque error, erasing the concrete type of the error it wraps.
///
/// Useful at API boundaries where the caller only needs the message
/// and the source chain, not the concrete error type.
pub struct OpaqueError(BoxError);

impl OpaqueError {
    /// Create an [`OpaqueError`] from any [`std::error::Error`].
    pub fn from_std(error: impl StdError + Send + Sync + 'static) -> Self {
        Self(Box::new(error))
    }

    /// Create an [`OpaqueError`] from a [`fmt::Display`] message.
    pub fn from_display(message: impl fmt::Display) -> Self {
        Self(message.to_string().into())
    }

    /// Create an [`OpaqueError`] from an already boxed error.
    pub fn from_boxed(error: BoxError) -> Self {
        Self(error)
    }

    /// Consume `self` into a [`BoxError`].
    #[must_use]
    pub fn into_boxed(self) -> BoxError {
        self.0
    }
}

impl fmt::Debug for OpaqueError {
    #[inline(always)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for OpaqueError {
    #[inline(always)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl StdError for OpaqueError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.0.as_ref())
    }
}
