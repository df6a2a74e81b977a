//! Wire types for the VelocitMax REST API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads, including its Mongo-style
//! `_id` keys and camelCase field names, so serde does all the shape work and
//! view code only touches typed values.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Dashboard role deciding what a user may see and do.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Manager,
    /// Default role for newly registered accounts.
    #[default]
    Staff,
    Student,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Manager, Role::Staff, Role::Student];

    /// Wire value, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Manager => "manager",
            Role::Staff => "staff",
            Role::Student => "student",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Manager => "Manager",
            Role::Staff => "Staff",
            Role::Student => "Student",
        }
    }

    pub fn is_manager(self) -> bool {
        matches!(self, Role::Manager)
    }

    /// Students get a read-only dashboard.
    pub fn can_create_tasks(self) -> bool {
        !matches!(self, Role::Student)
    }
}

/// A user account as returned by the auth and users endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier (database id string).
    #[serde(alias = "_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Sign-in email address.
    pub email: String,
    /// Dashboard role.
    pub role: Role,
    /// Account creation time, when the endpoint includes it.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Workflow state of a task.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    /// Wire value, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }

    /// Parse a wire value, e.g. from a `<select>` element.
    pub fn parse(value: &str) -> Option<Self> {
        TaskStatus::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// Priority of a task.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 3] = [
        TaskPriority::Low,
        TaskPriority::Medium,
        TaskPriority::High,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        TaskPriority::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

/// Minimal user reference embedded in task records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskUserRef {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// An image attached to a task.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskImage {
    #[serde(alias = "_id")]
    pub id: String,
    /// Public URL on the media host.
    pub url: String,
    #[serde(default)]
    pub uploaded_at: Option<DateTime<Utc>>,
}

/// A file attached to a task.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFile {
    #[serde(alias = "_id")]
    pub id: String,
    /// Public URL on the media host.
    pub url: String,
    pub file_name: String,
    /// Size in bytes, when the backend recorded it.
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub uploaded_at: Option<DateTime<Utc>>,
}

/// A task as returned by `GET /tasks/get`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique task identifier (database id string).
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    /// Deadline; drives the overdue and upcoming-deadline views.
    pub due_date: DateTime<Utc>,
    /// Who the task is assigned to, populated by the backend.
    #[serde(default)]
    pub assigned_to: Option<TaskUserRef>,
    /// Who created the task; gates attachment management.
    #[serde(default)]
    pub created_by: Option<TaskUserRef>,
    #[serde(default)]
    pub images: Vec<TaskImage>,
    #[serde(default)]
    pub files: Vec<TaskFile>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body returned by `POST /auth/login` and `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl AuthResponse {
    /// Split into the bearer token and the signed-in identity.
    pub fn into_parts(self) -> (String, User) {
        let user = User {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role,
            created_at: None,
        };
        (self.token, user)
    }
}

/// `GET /tasks/get` response envelope.
#[derive(Debug, Default, Deserialize)]
pub struct TasksEnvelope {
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// `GET /users` response envelope.
#[derive(Debug, Default, Deserialize)]
pub struct UsersEnvelope {
    #[serde(default)]
    pub users: Vec<User>,
}

/// `POST /tasks/create` response.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTaskResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Form fields for `POST /tasks/create`. Sent as multipart form data, field
/// names matching what the backend's upload middleware expects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    /// Due date as `YYYY-MM-DD`, straight from the date input.
    pub due_date: String,
    /// Id of the assignee.
    pub assigned_to: String,
    pub priority: TaskPriority,
    /// Id of the creating user.
    pub created_by: String,
}
