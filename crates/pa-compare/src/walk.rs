/// Walk two slices in lockstep over the length of the longer one, yielding
/// `None` for the side that has already ended.
pub(crate) fn zip_longest<'a, T>(
    left: &'a [T],
    right: &'a [T],
) -> impl Iterator<Item = (usize, Option<&'a T>, Option<&'a T>)> + 'a {
    let n = left.len().max(right.len());
    (0..n).map(move |i| (i, left.get(i), right.get(i)))
}
