//! Summary statistics over a list of activities

use crate::domain::record::ActivityRecord;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityStats {
    pub total_tasks: usize,
    pub total_hours: f64,
    /// 0.0 for an empty list
    pub avg_hours: f64,
}

impl ActivityStats {
    pub fn from_records(records: &[ActivityRecord]) -> Self {
        let total_tasks = records.len();
        let total_hours = records.iter().fold(0.0, |acc, r| acc + r.duration_hours);
        let avg_hours = if total_tasks == 0 {
            0.0
        } else {
            total_hours / total_tasks as f64
        };

        Self {
            total_tasks,
            total_hours,
            avg_hours,
        }
    }

    /// Task count with no decimals
    pub fn total_tasks_display(&self) -> String {
        format!("{:.0}", self.total_tasks as f64)
    }

    /// Hours with two decimals
    pub fn total_hours_display(&self) -> String {
        format!("{:.2}", self.total_hours)
    }

    pub fn avg_hours_display(&self) -> String {
        format!("{:.2}", self.avg_hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures;

    #[test]
    fn test_fixture_stats() {
        let stats = ActivityStats::from_records(&fixtures::listed());
        assert_eq!(stats.total_tasks_display(), "3");
        assert_eq!(stats.total_hours_display(), "10.10");
        assert_eq!(stats.avg_hours_display(), "3.37");
    }

    #[test]
    fn test_empty() {
        let stats = ActivityStats::from_records(&[]);
        assert_eq!(stats.total_tasks_display(), "0");
        assert_eq!(stats.total_hours_display(), "0.00");
        assert_eq!(stats.avg_hours_display(), "0.00");
    }
}
