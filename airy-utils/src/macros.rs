//! macros used across the airy workspace

/// Match a string expression against string literals,
/// compared ASCII case insensitively (after trimming).
///
/// A `_ => ...` fallback arm is required.
#[doc(hidden)]
#[macro_export]
macro_rules! __match_ignore_ascii_case_str {
    (match ($s:expr) { $($($case:literal)|+ => $ret:expr,)+ _ => $fallback:expr $(,)? }) => {{
        let s = ($s).trim();
        $(
            if $(s.eq_ignore_ascii_case($case))||+ { $ret } else
        )+
        { $fallback }
    }};
}
#[doc(inline)]
pub use crate::__match_ignore_ascii_case_str as match_ignore_ascii_case_str;
