//! Test fixtures and builders
//!
//! Provides convenient builders for creating test data.

use asana_stats::config::{Config, Settings};
use asana_stats::core::models::{CustomField, Task, UserRef};
use chrono::{DateTime, Utc};

/// Settings with the default project, tag and field ids
pub fn test_config() -> Config {
    Config::new("test-token", Settings::default())
}

/// Builder for creating test tasks
///
/// Point and epic fields use the ids and names from [`Settings::default`].
pub struct TaskBuilder {
    task: Task,
    settings: Settings,
}

impl TaskBuilder {
    pub fn new(gid: &str, name: &str) -> Self {
        let mut task = Task::new(gid, name);
        task.permalink_url = Some(format!("https://app.asana.com/0/0/{gid}"));
        Self {
            task,
            settings: Settings::default(),
        }
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.task.completed = completed;
        self
    }

    /// Mark completed by `user_id`
    pub fn completed_by(mut self, user_id: &str) -> Self {
        self.task.completed = true;
        self.task.completed_by = Some(UserRef {
            gid: user_id.to_string(),
            name: None,
        });
        self
    }

    pub fn points(mut self, raw: Option<&str>) -> Self {
        let id = self.settings.fields.points.clone();
        self.set_field(&id, "Points", raw);
        self
    }

    pub fn estimated(mut self, raw: Option<&str>) -> Self {
        let id = self.settings.fields.estimated_points.clone();
        self.set_field(&id, "Estimated Points", raw);
        self
    }

    pub fn epic(mut self, epic: Option<&str>) -> Self {
        let name = self.settings.fields.epic_name.clone();
        self.set_field("EPIC-FIELD", &name, epic);
        self
    }

    pub fn created(mut self, rfc3339: &str) -> Self {
        self.task.created_at = Some(timestamp(rfc3339));
        self
    }

    pub fn completed_at(mut self, rfc3339: &str) -> Self {
        self.task.completed_at = Some(timestamp(rfc3339));
        self
    }

    pub fn assignee(mut self, name: &str) -> Self {
        self.task.assignee = Some(UserRef {
            gid: format!("A-{name}"),
            name: Some(name.to_string()),
        });
        self
    }

    pub fn build(self) -> Task {
        self.task
    }

    fn set_field(&mut self, gid: &str, name: &str, value: Option<&str>) {
        self.task.custom_fields.retain(|cf| cf.gid != gid);
        self.task.custom_fields.push(CustomField::enumeration(gid, name, value));
    }
}

pub fn timestamp(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339).expect("valid timestamp").to_utc()
}
