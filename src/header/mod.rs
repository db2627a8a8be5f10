//! POSIX header implementations.

pub mod sys_select;
