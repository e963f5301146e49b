//! Business logic over shared state: session lifecycle, training runs,
//! and background maintenance.

pub mod session;
pub mod sweeper;
pub mod training;
