//! CLI commands for hiersel

pub mod dispatch;
pub mod render;
pub mod replay;
pub mod resolve;
pub mod verify;
