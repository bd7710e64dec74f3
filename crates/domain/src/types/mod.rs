//! Domain types and models

pub mod activity;
pub mod range;
pub mod user;

pub use activity::{Activity, ActivityFields, NewActivity};
pub use range::{parse_date, DateRange};
pub use user::{NewUser, SessionUser, StoredUser, User};
