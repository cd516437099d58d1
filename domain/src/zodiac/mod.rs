//! Zodiac sign classification
//!
//! Sign records are day/month ranges; a birth date is classified by the
//! first record whose range contains its day and month.

pub mod matcher;
pub mod sign;
pub mod value_objects;

pub use matcher::{contains, match_sign};
pub use sign::{SignCatalog, SignRecord};
pub use value_objects::{CalendarDate, DateInputError, DayMonth};
