//! Command implementations for chotha

pub mod compact;
pub mod dispatch;
pub mod extract;
pub mod generate;
pub mod output;
pub mod segment;
