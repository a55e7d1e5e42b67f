pub mod booking;
pub mod slot;
pub mod time_of_day;
pub mod working_hours;
