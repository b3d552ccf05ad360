//! Architecture-specific implementations.
//!
//! Hardware bindings for the HAL traits. Currently supported: x86_64.

#[cfg(target_arch = "x86_64")]
pub mod x86_64;
