//! Plain integer arithmetic on addresses.
//!
//! These never touch memory; the demos feed their results into raw pointers.

/// Signed byte distance from `from` to `to`.
pub fn byte_delta(from: usize, to: usize) -> isize {
    to.wrapping_sub(from) as isize
}

/// Converts a byte distance into a count of `stride`-sized steps, the way
/// C pointer subtraction does.
pub fn element_steps(byte_delta: isize, stride: usize) -> isize {
    byte_delta / stride as isize
}

/// `base + steps * stride`, wrapping like a raw pointer offset.
pub fn relocate(base: usize, steps: isize, stride: usize) -> usize {
    base.wrapping_add_signed(steps.wrapping_mul(stride as isize))
}
