//! Page-independent state and logic: catalog filtering and inquiry submission.

pub mod filter;
pub mod inquiry;
pub mod scroll;
