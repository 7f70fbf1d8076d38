//! # Raw Content Pool Types
//!
//! The pool is a flat sequence of containers, each optionally holding theory,
//! question, and task arrays. Items are authored externally and read-only to
//! the pipeline.
//!
//! ## Clusters
//!
//! - **Pool shape**: `PoolContainer`, `ContainerContent`
//! - **Item variants**: `TheoryItem`, `QuestionItem`, `TaskItem`
//! - **Shared vocabulary**: `ItemKind`, `LearningPath`

use serde::{Deserialize, Serialize};

/// The learning path a content item targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningPath {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

/// The three content item kinds held in the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Theory,
    Question,
    Task,
}

impl ItemKind {
    /// Stable lowercase name, used for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Theory => "theory",
            ItemKind::Question => "question",
            ItemKind::Task => "task",
        }
    }
}

/// One container of the raw content pool.
///
/// Containers group related items as authored; the pipeline never reorders
/// across the container boundary during extraction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolContainer {
    /// Optional container identifier (informational only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The item arrays; each array is optional on the wire.
    #[serde(default)]
    pub content: ContainerContent,
}

/// The item arrays of a single container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerContent {
    #[serde(default)]
    pub theory: Vec<TheoryItem>,
    #[serde(default)]
    pub questions: Vec<QuestionItem>,
    #[serde(default)]
    pub tasks: Vec<TaskItem>,
}

impl ContainerContent {
    /// Total item count across all three arrays.
    pub fn item_count(&self) -> usize {
        self.theory.len() + self.questions.len() + self.tasks.len()
    }
}

/// A theory explanation in the raw pool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TheoryItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Difficulty score, 1 (simplest) to 10.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<u8>,
    /// Interview relevance score, 1 to 10.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interview_relevance: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_path: Option<LearningPath>,
    /// Item identifiers that should conceptually precede this one.
    #[serde(default)]
    pub prerequisites: Vec<String>,
    /// Items flagged irrelevant are excluded from metadata extraction.
    #[serde(default)]
    pub irrelevant: bool,
}

/// A quiz question in the raw pool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Difficulty score, 1 (simplest) to 10.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<u8>,
    /// How often the question appears in interviews, 1 to 10.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interview_frequency: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_path: Option<LearningPath>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub irrelevant: bool,
}

/// A coding task in the raw pool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starter_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution_code: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Difficulty score, 1 (simplest) to 10.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<u8>,
    /// How often the task appears in interviews, 1 to 10.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interview_frequency: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_path: Option<LearningPath>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub irrelevant: bool,
}
