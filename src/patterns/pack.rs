//! Stable stream compaction.

/// Copies the flagged elements of `src` to the front of `dest`, preserving
/// source order, and returns how many were copied.
///
/// Every `src[i]` with `keep[i]` set lands at the next free destination slot;
/// elements of `dest` past the returned count are left untouched. The output
/// cursor makes the loop inherently sequential, so no executor is involved.
///
/// # Panics
///
/// Panics if `keep` and `src` differ in length, or if `dest` is too short to
/// hold the kept elements.
///
/// # Examples
///
/// ```
/// let src = [10, 20, 30, 40, 50];
/// let keep = [false, true, false, true, true];
/// let mut dest = [0; 5];
/// let kept = skelly::pack(&mut dest, &src, &keep);
/// assert_eq!(kept, 3);
/// assert_eq!(&dest[..kept], &[20, 40, 50]);
/// ```
pub fn pack<T: Clone>(dest: &mut [T], src: &[T], keep: &[bool]) -> usize {
    assert_eq!(
        keep.len(),
        src.len(),
        "Flags and source must be the same length"
    );

    let mut cursor = 0;
    for (value, &kept) in src.iter().zip(keep.iter()) {
        if kept {
            dest[cursor] = value.clone();
            cursor += 1;
        }
    }
    cursor
}
