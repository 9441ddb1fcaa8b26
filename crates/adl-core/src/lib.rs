pub mod config;
pub mod logging;

// Selection and placement engine
pub mod artifact;
pub mod error;
pub mod matcher;
pub mod orchestrator;
pub mod path_guard;
pub mod placement;
pub mod platform;
pub mod run;
pub mod select;

// Adapters
pub mod checksum;
pub mod remote;

#[cfg(test)]
pub(crate) mod test_support;
