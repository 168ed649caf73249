pub mod booking;
pub mod rules;
pub mod user;

pub use booking::{split_participants, BookingRequest};
pub use rules::BookingRules;
pub use user::User;
