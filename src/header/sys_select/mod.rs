//! fd_set accessors from sys/select.h, following
//! <https://pubs.opengroup.org/onlinepubs/9699919799/basedefs/sys_select.h.html>
//!
//! The platform provides `FD_ZERO`, `FD_CLR`, `FD_SET` and `FD_ISSET` only
//! as preprocessor macros, which leaves nothing to link against. Each
//! wrapper below exports the corresponding macro as a real symbol and
//! defers to the host libc's expansion of it. The names carry an `fdset_`
//! prefix so they can coexist with the macros when a C caller also
//! includes the platform header.

use core::mem::MaybeUninit;

use crate::platform::{sys, types::*};

pub use crate::platform::types::FD_SETSIZE;

/// `FD_ZERO(set)` as a callable symbol.
#[no_mangle]
pub unsafe extern "C" fn fdset_zero(set: *mut fd_set) {
    trace_expr!(sys::FD_ZERO(set), "fdset_zero({:p})", set)
}

/// `FD_CLR(fd, set)` as a callable symbol.
#[no_mangle]
pub unsafe extern "C" fn fdset_clr(fd: c_int, set: *mut fd_set) {
    trace_expr!(sys::FD_CLR(fd, set), "fdset_clr({}, {:p})", fd, set)
}

/// `FD_SET(fd, set)` as a callable symbol.
#[no_mangle]
pub unsafe extern "C" fn fdset_set(fd: c_int, set: *mut fd_set) {
    trace_expr!(sys::FD_SET(fd, set), "fdset_set({}, {:p})", fd, set)
}

/// `FD_ISSET(fd, set)` as a callable symbol. Nonzero means member.
#[no_mangle]
pub unsafe extern "C" fn fdset_isset(fd: c_int, set: *const fd_set) -> c_int {
    trace_expr!(
        sys::FD_ISSET(fd, set) as c_int,
        "fdset_isset({}, {:p})",
        fd,
        set
    )
}

/// An owned descriptor set, empty on construction.
///
/// Layout is exactly the host `fd_set`, so the set can be handed to any
/// platform call expecting one through [`as_ptr`](Self::as_ptr) or
/// [`as_mut_ptr`](Self::as_mut_ptr). The accessors defer to the same
/// primitives as the exported symbols and inherit their range contract:
/// descriptors outside `0..FD_SETSIZE` keep whatever behavior the platform
/// gives them.
#[repr(transparent)]
pub struct FdSet(fd_set);

impl FdSet {
    pub fn new() -> Self {
        let mut set = MaybeUninit::<fd_set>::uninit();
        unsafe {
            fdset_zero(set.as_mut_ptr());
            Self(set.assume_init())
        }
    }

    /// Remove every descriptor from the set.
    pub fn zero(&mut self) {
        unsafe { fdset_zero(&mut self.0) }
    }

    /// Mark `fd` as a member of the set.
    ///
    /// # Safety
    /// `fd` must be in `0..FD_SETSIZE`.
    pub unsafe fn set(&mut self, fd: c_int) {
        fdset_set(fd, &mut self.0)
    }

    /// Drop `fd` from the set. Clearing a non-member is a no-op.
    ///
    /// # Safety
    /// `fd` must be in `0..FD_SETSIZE`.
    pub unsafe fn clr(&mut self, fd: c_int) {
        fdset_clr(fd, &mut self.0)
    }

    /// Whether `fd` is currently a member of the set.
    ///
    /// # Safety
    /// `fd` must be in `0..FD_SETSIZE`.
    pub unsafe fn isset(&self, fd: c_int) -> bool {
        fdset_isset(fd, &self.0) != 0
    }

    pub fn as_ptr(&self) -> *const fd_set {
        &self.0
    }

    pub fn as_mut_ptr(&mut self) -> *mut fd_set {
        &mut self.0
    }
}

impl Default for FdSet {
    fn default() -> Self {
        Self::new()
    }
}
