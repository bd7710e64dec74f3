//! Activity recording and date-range queries

pub mod ports;
pub mod service;

pub use ports::ActivityRepository;
pub use service::ActivityService;
