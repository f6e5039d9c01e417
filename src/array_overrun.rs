//! Reading past the end of a fixed array into a neighbouring local.
//!
//! # Hazard
//!
//! The pointer is derived from the array and offset far outside it with
//! `wrapping_offset`, so no bounds check runs and the dereference is
//! undefined behaviour. The value only comes out right because the offset was
//! measured from the real addresses of both locals in this frame. Compilers
//! are free to lay those locals out differently, merge them, or keep one in a
//! register; when that happens the read returns garbage or faults.

use crate::address;
use crate::config::ArrayOverrunConfig;
use std::mem::size_of;

pub const ARRAY_LEN: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayOverrunReport {
    pub array_address: usize,
    pub adjacent_address: usize,
    pub byte_delta: isize,
    /// `byte_delta` in `i32` elements; never inside `0..ARRAY_LEN`.
    pub element_index: isize,
    pub value: i32,
}

/// Fills the array from `config.seeds`, then reads the adjacent scalar
/// through an array pointer.
///
/// Seeding uses checked indexing: a seed outside `0..ARRAY_LEN` is skipped.
/// Configs loaded through [`crate::DemoConfig`] never contain one, because
/// [`crate::DemoConfig::validate`] rejects them at load time.
#[inline(never)]
pub fn run(config: &ArrayOverrunConfig) -> ArrayOverrunReport {
    let adjacent: i32 = config.adjacent;
    let mut array = [0i32; ARRAY_LEN];
    for &index in &config.seeds {
        if let Some(slot) = array.get_mut(index) {
            *slot = index as i32;
        }
    }

    let base: *const i32 = array.as_ptr();
    let adjacent_ptr: *const i32 = &adjacent;
    let array_address = base as usize;
    let adjacent_address = adjacent_ptr as usize;

    let byte_delta = address::byte_delta(array_address, adjacent_address);
    let element_index = address::element_steps(byte_delta, size_of::<i32>());
    log::debug!(
        "array at {:#x}, adjacent at {:#x}, index {}",
        array_address,
        adjacent_address,
        element_index
    );
    log::warn!(
        "reading element {} of a {}-element array",
        element_index,
        ARRAY_LEN
    );

    // SAFETY: none. Out of bounds on purpose.
    let value = unsafe { *base.wrapping_offset(element_index) };

    ArrayOverrunReport {
        array_address,
        adjacent_address,
        byte_delta,
        element_index,
        value,
    }
}
