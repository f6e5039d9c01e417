//! Declarations for the C routines in `c_src/foreign.c`.
//!
//! Nothing the borrow checker knows about reaches past this block: once a
//! pointer is handed over, the C side may read, write or alias it freely.

use std::os::raw::{c_int, c_longlong};

extern "C" {
    /// Writes `new_value` through `managed` and returns
    /// `&foreign_value - managed` in `c_int` steps.
    pub fn foreign_access_managed(
        managed: *mut c_int,
        new_value: c_int,
        verbose: c_int,
    ) -> c_longlong;

    /// Prints the C variable from the C side.
    pub fn foreign_print_value();

    pub fn foreign_read_value() -> c_int;
}
