// Integer helpers for grid arithmetic

/// Wrap `index + step` into `0..len`, treating the range as a ring.
///
/// Returns `None` for an empty ring.
pub fn wrap_step(index: usize, step: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let len = len as isize;
    Some((index as isize + step).rem_euclid(len) as usize)
}

/// Integer division rounding up, with `0 / n == 0`
pub fn div_round_up(value: usize, divisor: usize) -> usize {
    if divisor == 0 {
        return 0;
    }
    value.div_ceil(divisor)
}
