pub mod backup;
pub mod clock;
pub mod projects;
pub mod report;
pub mod store;
pub mod timer;
