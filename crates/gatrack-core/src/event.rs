//! Tracking event: the category/action/label/value tuple for one interaction.

use crate::error::{Result, TrackError};

/// One user interaction to report.
///
/// The label is only set through `with_label`, which drops empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingEvent {
    pub category: String,
    pub action: String,
    label: Option<String>,
    pub value: Option<u64>,
}

impl TrackingEvent {
    pub fn new(category: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            action: action.into(),
            label: None,
            value: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        self.label = (!label.is_empty()).then_some(label);
        self
    }

    pub fn with_value(mut self, value: Option<u64>) -> Self {
        self.value = value;
        self
    }

    /// Non-empty label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Category and action are both required.
    pub fn validate(&self) -> Result<()> {
        if self.category.is_empty() || self.action.is_empty() {
            return Err(TrackError::Validation(
                "category and action are required".into(),
            ));
        }
        Ok(())
    }
}
