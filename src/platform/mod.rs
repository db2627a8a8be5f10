//! Host platform binding.
//!
//! The descriptor-set structure and all four primitives belong to the host
//! C library; the libc crate is the binding to them and is re-exported here
//! as `sys` so the header modules never reach for it directly.

pub use libc as sys;

pub use self::types::*;
pub mod types;
