//! Tool system: definitions, calls, results, and providers.

pub mod entities;
pub mod provider;
pub mod value_objects;
