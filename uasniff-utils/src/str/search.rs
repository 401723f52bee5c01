/// Returns `true` if `sub` occurs within `s`,
/// using ASCII case insensitive comparison.
///
/// This is a convenience wrapper around [`contains_ignore_ascii_case`].
pub fn submatch_ignore_ascii_case<T1, T2>(s: T1, sub: T2) -> bool
where
    T1: AsRef<[u8]>,
    T2: AsRef<[u8]>,
{
    contains_ignore_ascii_case(s, sub).is_some()
}

/// Returns `true` if any item produced by `sub_iter` occurs within `s`,
/// using ASCII case insensitive comparison.
///
/// Iteration order does not matter for the result, only for the amount of work performed.
pub fn any_submatch_ignore_ascii_case<T, I>(s: T, sub_iter: I) -> bool
where
    T: AsRef<[u8]>,
    I: IntoIterator<Item: AsRef<[u8]>>,
{
    let haystack = s.as_ref();
    sub_iter
        .into_iter()
        .any(|sub| contains_ignore_ascii_case(haystack, sub).is_some())
}

/// Finds the first occurrence of `sub` within `s`,
/// using ASCII case insensitive comparison.
///
/// The returned index is a byte offset into `s`.
/// If `sub` is empty, this returns `Some(0)`.
///
/// For an ASCII `sub` the offset and `offset + sub.len()` always
/// fall on a char boundary of a `str` haystack.
pub fn contains_ignore_ascii_case<T1, T2>(s: T1, sub: T2) -> Option<usize>
where
    T1: AsRef<[u8]>,
    T2: AsRef<[u8]>,
{
    let s = s.as_ref();
    let sub = sub.as_ref();

    let n = sub.len();

    if n == 0 {
        return Some(0);
    }

    s.windows(n)
        .position(|window| window.eq_ignore_ascii_case(sub))
}

/// Returns `true` if `s` starts with `sub`, using ASCII case insensitive comparison.
///
/// If `sub` is empty, this returns `true`.
pub fn starts_with_ignore_ascii_case<T1, T2>(s: T1, sub: T2) -> bool
where
    T1: AsRef<[u8]>,
    T2: AsRef<[u8]>,
{
    let s = s.as_ref();
    let sub = sub.as_ref();

    let n = sub.len();

    s.get(..n)
        .is_some_and(|start| start.eq_ignore_ascii_case(sub))
}
