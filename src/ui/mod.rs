//! UI components for CVForge

pub mod form;
pub mod preview;
pub mod widgets;
