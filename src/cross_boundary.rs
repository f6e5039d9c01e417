//! Cross-boundary access between Rust and the linked C routine.
//!
//! Rust hands C a raw pointer to one of its locals. C overwrites the local and
//! answers with the distance from that pointer to its own global. Rust then
//! turns the distance back into an address and writes the C global.
//!
//! # Hazard
//!
//! Subtracting pointers into different objects is undefined in C, and
//! writing through an address synthesized from it is undefined in Rust. It
//! works here because both sides share one flat address space. Nothing checks
//! the result: on a platform where that assumption breaks, the write lands
//! somewhere else or the process faults.

use crate::address;
use crate::config::CrossBoundaryConfig;
use crate::foreign;
use std::mem::size_of;
use std::os::raw::c_int;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossBoundaryReport {
    pub managed_address: usize,
    pub managed_before: i32,
    /// Distance from the Rust local to the C global, in `c_int` steps.
    pub delta: i64,
    pub managed_after_foreign: i32,
    /// Address of the C global as reconstructed on the Rust side.
    pub foreign_address: usize,
    pub foreign_before: i32,
    pub foreign_after: i32,
}

/// Runs both directions of the access in order.
///
/// With `verbose`, the C side prints what it sees while it runs.
#[inline(never)]
pub fn run(config: &CrossBoundaryConfig, verbose: bool) -> CrossBoundaryReport {
    let mut managed: c_int = config.managed_initial;
    let managed_before = managed;
    let managed_ptr: *mut c_int = &mut managed;
    let managed_address = managed_ptr as usize;
    log::debug!("managed variable at {:#x}", managed_address);

    // SAFETY: none. The pointer is valid for the call, but C also derives
    // an out-of-object distance from it.
    let delta = unsafe {
        foreign::foreign_access_managed(managed_ptr, config.foreign_write, c_int::from(verbose))
    };
    log::debug!("foreign routine returned delta {}", delta);

    // Not written by Rust since the initial assignment.
    let managed_after_foreign = managed;

    let foreign_address = address::relocate(managed_address, delta as isize, size_of::<c_int>());
    let foreign_ptr = foreign_address as *mut c_int;
    log::warn!(
        "dereferencing synthesized address {:#x} outside the managed variable",
        foreign_address
    );

    // SAFETY: none. This is the undefined access under demonstration.
    let foreign_before = unsafe { foreign_ptr.read() };
    unsafe { foreign_ptr.write(config.managed_overwrite) };
    let foreign_after = unsafe { foreign_ptr.read() };
    log::trace!("foreign variable {} -> {}", foreign_before, foreign_after);

    CrossBoundaryReport {
        managed_address,
        managed_before,
        delta,
        managed_after_foreign,
        foreign_address,
        foreign_before,
        foreign_after,
    }
}

/// The C variable as the C side sees it.
pub fn foreign_value() -> i32 {
    unsafe { foreign::foreign_read_value() }
}

/// Lets the C side print its own variable.
pub fn print_foreign_value() {
    unsafe { foreign::foreign_print_value() }
}
