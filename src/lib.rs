//! Callable wrappers around the platform `fd_set` macros.
//!
//! `FD_ZERO`, `FD_CLR`, `FD_SET` and `FD_ISSET` exist only as C preprocessor
//! macros, so a caller binding through plain function linkage has no symbol
//! to reach them by. This crate exports each one as an ordinary function,
//! deferring to the host libc's own expansion of the macro for layout and
//! behavior.

// Real builds use `panic = "abort"` (see both profiles in Cargo.toml) and are
// `#![no_std]`. The test harness forces `panic = "unwind"`, which a `no_std`
// staticlib cannot support, so those builds fall back to std.
#![cfg_attr(panic = "abort", no_std)]

#[macro_use]
mod macros;

pub mod header;
pub mod platform;

pub use self::header::sys_select::{
    fdset_clr, fdset_isset, fdset_set, fdset_zero, FdSet, FD_SETSIZE,
};

// Required for `#![no_std]` staticlib/rlib builds. Unwinding (test) builds
// link std, which already provides a panic handler, so this is gated to the
// same condition as the `no_std` attribute above.
#[cfg(panic = "abort")]
#[panic_handler]
fn panic(_info: &core::panic::PanicInfo) -> ! {
    unsafe { platform::sys::abort() }
}
