//! Fixture data
//!
//! Activities are not persisted yet. Every user sees the same three
//! listed records, and the edit form is pre-filled with one sample record.

use chrono::NaiveDate;
use kernel::id::ActivityId;

use crate::domain::record::{ActivityRecord, EditableActivity};

/// The records shown on the list page
pub fn listed() -> Vec<ActivityRecord> {
    [
        (1, "4:36pm 1/11/18", "Planting flowers in the communal garden", 2.1),
        (2, "2:10pm 3/11/18", "Coaching the children's football team", 4.5),
        (3, "3:10pm 4/11/18", "Cooking for elderly neighbours", 3.5),
    ]
    .into_iter()
    .map(|(id, start_label, task, duration_hours)| ActivityRecord {
        id: ActivityId::from_i64(id),
        start_label: start_label.to_string(),
        task: task.to_string(),
        duration_hours,
    })
    .collect()
}

/// Whether `id` names a listed record
pub fn exists(id: ActivityId) -> bool {
    listed().iter().any(|record| record.id == id)
}

/// The edit form contents for `id`; `None` for unknown ids
pub fn editable(id: ActivityId) -> Option<EditableActivity> {
    if !exists(id) {
        return None;
    }

    let start_time = NaiveDate::from_ymd_opt(2018, 11, 4)?.and_hms_opt(19, 0, 0)?;

    Some(EditableActivity {
        id,
        start_time,
        task: "Babysit for Maria on the fifth floor".to_string(),
        duration_hours: 3.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listed() {
        let records = listed();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].task, "Coaching the children's football team");
    }

    #[test]
    fn test_editable_keeps_requested_id() {
        let record = editable(ActivityId::from_i64(2)).unwrap();
        assert_eq!(record.id.value(), 2);
        assert_eq!(record.start_time_for_html(), "2018-11-04T19:00");
        assert_eq!(record.duration_hours, 3.0);
    }

    #[test]
    fn test_unknown_id() {
        assert!(editable(ActivityId::from_i64(4)).is_none());
        assert!(!exists(ActivityId::from_i64(0)));
    }
}
