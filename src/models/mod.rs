pub mod entry;
pub mod invoiced;
pub mod project;
pub mod session;

pub use entry::TimeEntry;
pub use invoiced::Invoiced;
pub use project::Project;
pub use session::SessionSummary;
