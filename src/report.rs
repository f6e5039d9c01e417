//! Labeled address and value dumps for both demos.
//!
//! Renderers write to any `Write` so the binaries can use stdout and tests a
//! buffer. Values are highlighted with `colored`; labels are left plain.

use crate::array_overrun::{ArrayOverrunReport, ARRAY_LEN};
use crate::cross_boundary::CrossBoundaryReport;
use colored::Colorize;
use std::io::{self, Write};

// =============================================================================
// Cross-boundary access
// =============================================================================

pub fn render_managed_before(out: &mut impl Write, value: i32) -> io::Result<()> {
    writeln!(
        out,
        "Managed variable value before C access: {}",
        value.to_string().bold()
    )
}

pub fn render_cross_boundary(out: &mut impl Write, report: &CrossBoundaryReport) -> io::Result<()> {
    writeln!(
        out,
        "Address difference between the C variable and the managed variable: {}",
        report.delta.to_string().yellow()
    )?;
    writeln!(
        out,
        "Managed variable value after C access: {}",
        report.managed_after_foreign.to_string().red().bold()
    )?;
    writeln!(
        out,
        "Address of managed variable: {}",
        format!("{:#x}", report.managed_address).cyan()
    )?;
    writeln!(
        out,
        "Computed address of C variable: {}",
        format!("{:#x}", report.foreign_address).cyan()
    )?;
    writeln!(
        out,
        "C variable value before managed access: {}",
        report.foreign_before.to_string().bold()
    )?;
    writeln!(
        out,
        "C variable value after managed access: {}",
        report.foreign_after.to_string().red().bold()
    )
}

// =============================================================================
// Array overrun
// =============================================================================

pub fn render_array_overrun(out: &mut impl Write, report: &ArrayOverrunReport) -> io::Result<()> {
    writeln!(
        out,
        "Address of a: {}",
        format!("{:#x}", report.array_address).cyan()
    )?;
    writeln!(
        out,
        "Address of b: {}",
        format!("{:#x}", report.adjacent_address).cyan()
    )?;
    writeln!(
        out,
        "Address difference: {}",
        report.byte_delta.to_string().yellow()
    )?;
    writeln!(
        out,
        "Element index: {} (capacity {})",
        report.element_index, ARRAY_LEN
    )?;
    writeln!(out, "{}", report.value.to_string().red().bold())
}
