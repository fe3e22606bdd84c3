//! Small shared UI pieces used across the pages.

mod badge;
mod modal;
mod section_header;

pub use badge::CategoryBadge;
pub use modal::Modal;
pub use section_header::SectionHeader;
