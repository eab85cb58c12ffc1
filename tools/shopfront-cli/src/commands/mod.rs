//! CLI command implementations.

pub mod browse;
pub mod demo;
pub mod rig;

pub use browse::BrowseArgs;
pub use rig::RigArgs;
