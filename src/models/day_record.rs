use super::{time_field::TimeField, time_of_day::TimeOfDay};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// One calendar day of attendance.
///
/// Stored as a JSON object inside the month blob:
/// `{"date":"1/10/2024","entry":"09:00","lunchStart":null,"lunchEnd":null,"exit":"17:00"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    #[serde(with = "locale_date")]
    pub date: NaiveDate,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub entry: Option<TimeOfDay>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub lunch_start: Option<TimeOfDay>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub lunch_end: Option<TimeOfDay>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub exit: Option<TimeOfDay>,
}

impl DayRecord {
    /// A day with nothing recorded yet.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            entry: None,
            lunch_start: None,
            lunch_end: None,
            exit: None,
        }
    }

    pub fn get(&self, field: TimeField) -> Option<TimeOfDay> {
        match field {
            TimeField::Entry => self.entry,
            TimeField::LunchStart => self.lunch_start,
            TimeField::LunchEnd => self.lunch_end,
            TimeField::Exit => self.exit,
        }
    }

    pub fn set(&mut self, field: TimeField, value: Option<TimeOfDay>) {
        let slot = match field {
            TimeField::Entry => &mut self.entry,
            TimeField::LunchStart => &mut self.lunch_start,
            TimeField::LunchEnd => &mut self.lunch_end,
            TimeField::Exit => &mut self.exit,
        };
        *slot = value;
    }

    /// Date as shown to the user and written to the store.
    pub fn date_str(&self) -> String {
        locale_date::format(&self.date)
    }

    /// "HH:MM" or "--" when the field is absent.
    pub fn time_str(&self, field: TimeField) -> String {
        self.get(field)
            .map(|t| t.to_string())
            .unwrap_or_else(|| "--".to_string())
    }
}

/// Older blobs store an unrecorded time as "" instead of null.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<TimeOfDay>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        Some(s) if !s.trim().is_empty() => TimeOfDay::parse(&s)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// Italian short date, day and month without padding (e.g. "1/10/2024").
pub mod locale_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const WRITE_FMT: &str = "%-d/%-m/%Y";
    const READ_FMT: &str = "%d/%m/%Y";

    pub fn format(date: &NaiveDate) -> String {
        date.format(WRITE_FMT).to_string()
    }

    pub fn parse(s: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(s.trim(), READ_FMT).ok()
    }

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format(date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid date '{}'", s)))
    }
}
