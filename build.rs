//! Build script that compiles the foreign side of the cross-boundary demo.
//!
//! The C routine is linked into the same address space as the Rust code,
//! which is what lets raw addresses travel across the boundary.

fn main() {
    println!("cargo:rerun-if-changed=c_src/foreign.c");
    println!("cargo:rerun-if-changed=c_src/foreign.h");

    // Produces libforeign.a and emits the link directives for it.
    cc::Build::new()
        .file("c_src/foreign.c")
        .include("c_src")
        .compile("foreign");
}
