//! Credit policy configuration.
//!
//! This module contains the [`PolicyConfig`] type holding the lending
//! limits the engine evaluates against, and support for loading overrides
//! from a YAML file.

mod policy;

pub use policy::PolicyConfig;
