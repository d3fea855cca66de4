//! Commands run against a session
//!
//! - `compare`: file mode, two archives
//! - `batch`: directory mode, every matching archive pair of two directories
//! - `print`: console view of a comparison

pub mod batch;
pub mod compare;
pub mod print;
