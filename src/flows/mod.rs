//! Command flows: init scaffolding, FAQ build, and suggestion

pub mod build;
pub mod init;
pub mod suggest;
