/// Random number generator (xorshift32). `state` must be non-zero.
#[inline]
pub(crate) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform in `[0, 1)` from the top 24 bits
#[inline]
pub(crate) fn unit_f32(state: &mut u32) -> f32 {
    (xorshift32(state) >> 8) as f32 / (1u32 << 24) as f32
}
