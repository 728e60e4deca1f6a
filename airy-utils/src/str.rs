//! string search helpers

/// Byte offset of the first occurrence of `needle` within `haystack`,
/// compared ASCII case insensitively.
///
/// An empty `needle` matches at offset `0`.
pub fn contains_ignore_ascii_case(
    haystack: impl AsRef<[u8]>,
    needle: impl AsRef<[u8]>,
) -> Option<usize> {
    let haystack = haystack.as_ref();
    let needle = needle.as_ref();

    if needle.is_empty() {
        return Some(0);
    }
    if needle.len() > haystack.len() {
        return None;
    }

    (0..=haystack.len() - needle.len())
        .find(|&offset| haystack[offset..offset + needle.len()].eq_ignore_ascii_case(needle))
}

/// Returns `true` if `needle` occurs within `haystack`,
/// compared ASCII case insensitively.
pub fn submatch_ignore_ascii_case(haystack: impl AsRef<[u8]>, needle: impl AsRef<[u8]>) -> bool {
    contains_ignore_ascii_case(haystack, needle).is_some()
}

/// Returns `true` if `haystack` starts with `needle`,
/// compared ASCII case insensitively.
///
/// An empty `needle` always matches.
pub fn starts_with_ignore_ascii_case(haystack: impl AsRef<[u8]>, needle: impl AsRef<[u8]>) -> bool {
    let haystack = haystack.as_ref();
    let needle = needle.as_ref();

    haystack
        .get(..needle.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(needle))
}
