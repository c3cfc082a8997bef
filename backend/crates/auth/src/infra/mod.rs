//! Infrastructure Layer
//!
//! Credential store implementations.

pub mod memory;

pub use memory::MemoryUserRepository;
