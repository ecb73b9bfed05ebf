pub mod day_record;
pub mod month_key;
pub mod monthly_report;
pub mod time_field;
pub mod time_of_day;
