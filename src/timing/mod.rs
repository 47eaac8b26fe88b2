pub mod clock;
pub mod daily;
pub mod day;
pub mod operating_hours;
pub mod schedule;
