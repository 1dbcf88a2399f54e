//! Application Layer
//!
//! App initialization, window management and the root workspace view.

pub mod application;
pub mod workspace;
