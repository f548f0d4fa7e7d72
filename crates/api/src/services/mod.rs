//! Domain services.

pub mod registry;

pub use registry::{HolderRegistry, RegistryError, Verification};
