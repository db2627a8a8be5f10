//! C types and constants used by the accessor surface, taken from the host
//! libc rather than defined here. `fd_set` in particular must be the exact
//! structure the platform's own headers lay out.

pub use libc::{c_int, fd_set, FD_SETSIZE};
