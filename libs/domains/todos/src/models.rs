use axum_helpers::{FieldErrors, field_errors};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use strum::Display;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{TodoError, TodoResult};

/// Storage-assigned identifier of a todo
pub type TodoId = i64;

/// Rejects strings made only of whitespace
fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("blank"));
    }
    Ok(())
}

/// Todo entity
///
/// `id` is `None` until the repository persists the todo for the first time.
/// Identity is the id alone: two todos are equal only when both carry the
/// same assigned id.
#[derive(Debug, Clone)]
pub struct Todo {
    pub id: Option<TodoId>,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub priority: i32,
}

impl PartialEq for Todo {
    fn eq(&self, other: &Self) -> bool {
        self.id.is_some() && self.id == other.id
    }
}

/// The four caller-controlled fields of a todo, already validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoFields {
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub priority: i32,
}

impl Todo {
    /// Build an unsaved todo from validated fields
    pub fn new(fields: TodoFields) -> Self {
        Self {
            id: None,
            title: fields.title,
            description: fields.description,
            completed: fields.completed,
            priority: fields.priority,
        }
    }

    /// Replace all mutable fields at once, keeping the id
    pub fn apply(&mut self, fields: TodoFields) {
        self.title = fields.title;
        self.description = fields.description;
        self.completed = fields.completed;
        self.priority = fields.priority;
    }
}

/// Inbound payload for create and update.
///
/// Every field is optional at the wire level so that a missing field is
/// reported as a validation failure for that field instead of a JSON error.
/// Unknown keys, including `id`, are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct TodoRequest {
    #[validate(
        required(message = "title is required"),
        length(min = 2, max = 100, message = "title must be between 2 and 100 characters"),
        custom(function = "validate_not_blank", message = "title must not be blank")
    )]
    #[schema(example = "Buy milk", min_length = 2, max_length = 100)]
    pub title: Option<String>,

    #[validate(
        required(message = "description is required"),
        length(min = 2, max = 255, message = "description must be between 2 and 255 characters"),
        custom(function = "validate_not_blank", message = "description must not be blank")
    )]
    #[schema(example = "Two liters, skimmed", min_length = 2, max_length = 255)]
    pub description: Option<String>,

    /// Defaults to `false` when omitted
    #[schema(default = false)]
    pub completed: Option<bool>,

    #[validate(
        required(message = "priority is required"),
        range(min = 0, max = 5, message = "priority must be between 0 and 5")
    )]
    /// Wider than the stored `i32` so that huge values still reach the range check
    #[schema(example = 3, minimum = 0, maximum = 5)]
    pub priority: Option<i64>,
}

impl TodoRequest {
    /// Validate the payload and turn it into entity fields.
    ///
    /// Returns one message per violated field, covering all of them.
    pub fn into_fields(self) -> Result<TodoFields, FieldErrors> {
        self.validate().map_err(|errors| field_errors(&errors))?;

        let TodoRequest {
            title: Some(title),
            description: Some(description),
            completed,
            priority: Some(priority),
        } = self
        else {
            return Err(FieldErrors::from([(
                "payload".to_string(),
                "title, description and priority are required".to_string(),
            )]));
        };

        let priority = i32::try_from(priority).map_err(|_| {
            FieldErrors::from([(
                "priority".to_string(),
                "priority must be between 0 and 5".to_string(),
            )])
        })?;

        Ok(TodoFields {
            title,
            description,
            completed: completed.unwrap_or(false),
            priority,
        })
    }
}

/// Outbound representation of a persisted todo
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TodoResponse {
    #[schema(example = 1)]
    pub id: TodoId,
    #[schema(example = "Buy milk")]
    pub title: String,
    #[schema(example = "Two liters, skimmed")]
    pub description: String,
    pub completed: bool,
    #[schema(example = 3)]
    pub priority: i32,
}

impl PartialEq for TodoResponse {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TodoResponse {}

impl TryFrom<Todo> for TodoResponse {
    type Error = TodoError;

    fn try_from(todo: Todo) -> TodoResult<Self> {
        let id = todo
            .id
            .ok_or_else(|| TodoError::Storage("persisted todo has no id".to_string()))?;

        Ok(Self {
            id,
            title: todo.title,
            description: todo.description,
            completed: todo.completed,
            priority: todo.priority,
        })
    }
}

/// Attribute a todo list can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SortField {
    Priority,
    Title,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortKey {
    fn compare(&self, a: &Todo, b: &Todo) -> Ordering {
        let ordering = match self.field {
            SortField::Priority => a.priority.cmp(&b.priority),
            // Byte-wise, so uppercase sorts before lowercase
            SortField::Title => a.title.as_bytes().cmp(b.title.as_bytes()),
        };

        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Ordered list of sort keys applied when listing todos.
///
/// Todos equal on every key fall back to ascending id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoOrder {
    keys: Vec<SortKey>,
}

impl TodoOrder {
    pub fn by(field: SortField, direction: SortDirection) -> Self {
        Self {
            keys: vec![SortKey { field, direction }],
        }
    }

    pub fn then(mut self, field: SortField, direction: SortDirection) -> Self {
        self.keys.push(SortKey { field, direction });
        self
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    pub fn compare(&self, a: &Todo, b: &Todo) -> Ordering {
        self.keys
            .iter()
            .fold(Ordering::Equal, |acc, key| acc.then_with(|| key.compare(a, b)))
            .then_with(|| a.id.cmp(&b.id))
    }
}

/// Highest priority first, then title ascending
impl Default for TodoOrder {
    fn default() -> Self {
        Self::by(SortField::Priority, SortDirection::Desc).then(SortField::Title, SortDirection::Asc)
    }
}

impl fmt::Display for TodoOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} {}", key.field, key.direction)?;
        }
        Ok(())
    }
}
