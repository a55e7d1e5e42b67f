pub mod slots;
pub mod working_hours;
