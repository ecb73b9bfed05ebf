use clap::ValueEnum;
use serde::Serialize;

/// The four editable time slots of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
pub enum TimeField {
    Entry,
    LunchStart,
    LunchEnd,
    Exit,
}

impl TimeField {
    /// Name used in the stored JSON and in the audit log.
    pub fn key(&self) -> &'static str {
        match self {
            TimeField::Entry => "entry",
            TimeField::LunchStart => "lunchStart",
            TimeField::LunchEnd => "lunchEnd",
            TimeField::Exit => "exit",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeField::Entry => "Entry",
            TimeField::LunchStart => "Lunch start",
            TimeField::LunchEnd => "Lunch end",
            TimeField::Exit => "Exit",
        }
    }
}
