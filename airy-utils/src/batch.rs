//! unrolled batch iteration

/// Apply `f` to every element of `items`, front to back.
///
/// The remainder (`items.len() % 8`) is handled first, after which the
/// loop body performs eight applications per iteration.
pub fn for_each_unrolled<T>(items: &[T], mut f: impl FnMut(&T)) {
    let leftover = items.len() % 8;
    let (head, tail) = items.split_at(leftover);

    for item in head {
        f(item);
    }

    let mut chunks = tail.chunks_exact(8);
    for chunk in chunks.by_ref() {
        f(&chunk[0]);
        f(&chunk[1]);
        f(&chunk[2]);
        f(&chunk[3]);
        f(&chunk[4]);
        f(&chunk[5]);
        f(&chunk[6]);
        f(&chunk[7]);
    }
    debug_assert!(chunks.remainder().is_empty());
}
