//! Activity records and submitted forms

use chrono::NaiveDateTime;
use kernel::id::ActivityId;

use crate::error::{ActivityError, ActivityResult};

/// Format used by HTML `datetime-local` inputs
pub const HTML_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// A logged activity as shown in the list
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRecord {
    pub id: ActivityId,
    /// Human-readable start label, e.g. `4:36pm 1/11/18`
    pub start_label: String,
    pub task: String,
    pub duration_hours: f64,
}

/// A logged activity as loaded into the edit form
#[derive(Debug, Clone, PartialEq)]
pub struct EditableActivity {
    pub id: ActivityId,
    pub start_time: NaiveDateTime,
    pub task: String,
    pub duration_hours: f64,
}

impl EditableActivity {
    /// Start time in the edit form's `YYYY-MM-DDTHH:MM` shape
    pub fn start_time_for_html(&self) -> String {
        self.start_time.format(HTML_DATETIME_FORMAT).to_string()
    }
}

/// Validated create/edit submission
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityInput {
    pub start_time: String,
    pub task: String,
    pub duration_hours: f64,
}

impl ActivityInput {
    pub fn new(start_time: &str, task: &str, duration: &str) -> ActivityResult<Self> {
        let start_time = start_time.trim();
        if start_time.is_empty() {
            return Err(ActivityError::Validation("Start time is required".into()));
        }

        let task = task.trim();
        if task.is_empty() {
            return Err(ActivityError::Validation("Task is required".into()));
        }

        let duration = duration.trim();
        if duration.is_empty() {
            return Err(ActivityError::Validation("Duration is required".into()));
        }
        let duration_hours: f64 = duration
            .parse()
            .map_err(|_| ActivityError::Validation("Duration must be a number".into()))?;
        if !duration_hours.is_finite() || duration_hours < 0.0 {
            return Err(ActivityError::Validation(
                "Duration must be a non-negative number of hours".into(),
            ));
        }

        Ok(Self {
            start_time: start_time.to_string(),
            task: task.to_string(),
            duration_hours,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_input_valid() {
        let input = ActivityInput::new(" 2018-11-04T19:00 ", " Babysit ", "3").unwrap();
        assert_eq!(input.start_time, "2018-11-04T19:00");
        assert_eq!(input.task, "Babysit");
        assert_eq!(input.duration_hours, 3.0);
        assert!(ActivityInput::new("now", "Rest", "0").is_ok());
        assert_eq!(
            ActivityInput::new("now", "Rest", " 2.25 ").unwrap().duration_hours,
            2.25
        );
    }

    #[test]
    fn test_input_invalid() {
        for (start, task, duration) in [
            ("", "Babysit", "3"),
            ("2018-11-04T19:00", "  ", "3"),
            ("2018-11-04T19:00", "Babysit", ""),
            ("2018-11-04T19:00", "Babysit", "three"),
            ("2018-11-04T19:00", "Babysit", "-1"),
            ("2018-11-04T19:00", "Babysit", "NaN"),
            ("2018-11-04T19:00", "Babysit", "inf"),
        ] {
            assert!(matches!(
                ActivityInput::new(start, task, duration),
                Err(ActivityError::Validation(_))
            ));
        }
    }

    #[test]
    fn test_start_time_for_html() {
        let record = EditableActivity {
            id: ActivityId::from_i64(1),
            start_time: NaiveDate::from_ymd_opt(2018, 11, 4)
                .unwrap()
                .and_hms_opt(19, 0, 0)
                .unwrap(),
            task: "Babysit".into(),
            duration_hours: 3.0,
        };
        assert_eq!(record.start_time_for_html(), "2018-11-04T19:00");
    }
}
