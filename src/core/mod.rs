//! Core functionality: the resume document, preview projection, export, and configuration

pub mod config;
pub mod export;
pub mod preview;
pub mod resume;
