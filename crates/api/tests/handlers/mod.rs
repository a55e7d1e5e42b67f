mod health_test;
mod slots_test;
mod working_hours_test;
