//! Seams to the host's collaborators: input and output providers, notifications.

use serde::{Deserialize, Serialize};

use crate::model::{OutputMetric, ProjectInput};

/// Source of the current project inputs
pub trait InputProvider {
    fn inputs(&self) -> &[ProjectInput];
}

/// Source of live output metric values
pub trait OutputProvider {
    fn all_outputs(&self) -> &[OutputMetric];

    /// Find an output by exact name
    fn find_output(&self, name: &str) -> Option<&OutputMetric> {
        self.all_outputs().iter().find(|o| o.name == name)
    }
}

impl InputProvider for [ProjectInput] {
    fn inputs(&self) -> &[ProjectInput] {
        self
    }
}

impl InputProvider for Vec<ProjectInput> {
    fn inputs(&self) -> &[ProjectInput] {
        self
    }
}

impl OutputProvider for [OutputMetric] {
    fn all_outputs(&self) -> &[OutputMetric] {
        self
    }
}

impl OutputProvider for Vec<OutputMetric> {
    fn all_outputs(&self) -> &[OutputMetric] {
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationVariant {
    #[default]
    Default,
    Destructive,
}

/// Fire-and-forget user feedback (toast)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub title: Option<String>,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn info(title: &str, description: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            description: description.to_string(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn destructive(title: &str, description: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            description: description.to_string(),
            variant: NotificationVariant::Destructive,
        }
    }

    /// A notification with only a description
    pub fn plain(description: &str) -> Self {
        Self {
            title: None,
            description: description.to_string(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Notifier that keeps every notification in order
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub notifications: Vec<Notification>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn destructive_count(&self) -> usize {
        self.notifications
            .iter()
            .filter(|n| n.is_destructive())
            .count()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}
