mod dashboard;
mod empty;

pub use dashboard::dashboard_page;
pub use empty::empty_page;
