//! API DTOs (Data Transfer Objects)

use auth::CurrentUser;
use serde::{Deserialize, Serialize};

use crate::domain::{ActivityRecord, ActivityStats, EditableActivity};

/// Create/edit form submission
///
/// Missing fields are reported by validation rather than by the extractor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityForm {
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub task: String,
    /// Hours, as typed
    #[serde(default)]
    pub duration: String,
}

/// The signed-in user, as shown on the list page
#[derive(Debug, Clone, Serialize)]
pub struct UserView {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<&CurrentUser> for UserView {
    fn from(user: &CurrentUser) -> Self {
        Self {
            id: user.id.value(),
            name: user.name.to_string(),
            email: user.email.to_string(),
        }
    }
}

/// Stats pre-formatted for display
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsView {
    pub total_tasks: String,
    pub total_hours: String,
    pub avg_hours: String,
}

impl From<ActivityStats> for StatsView {
    fn from(stats: ActivityStats) -> Self {
        Self {
            total_tasks: stats.total_tasks_display(),
            total_hours: stats.total_hours_display(),
            avg_hours: stats.avg_hours_display(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityView {
    pub id: i64,
    pub start_time: String,
    pub task: String,
    pub duration: f64,
}

impl From<ActivityRecord> for ActivityView {
    fn from(record: ActivityRecord) -> Self {
        Self {
            id: record.id.value(),
            start_time: record.start_label,
            task: record.task,
            duration: record.duration_hours,
        }
    }
}

impl From<EditableActivity> for ActivityView {
    fn from(record: EditableActivity) -> Self {
        Self {
            id: record.id.value(),
            start_time: record.start_time_for_html(),
            task: record.task,
            duration: record.duration_hours,
        }
    }
}

/// List page
#[derive(Debug, Clone, Serialize)]
pub struct ActivityListResponse {
    pub kind: &'static str,
    pub user: UserView,
    pub stats: StatsView,
    pub items: Vec<ActivityView>,
}
