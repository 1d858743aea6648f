use serde::{Deserialize, Serialize};

use crate::ids::ToastId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastSeverity {
    Success,
    Error,
    Info,
}

/// Optional call-to-action rendered inside a toast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastAction {
    pub label: String,
    pub href: String,
}

impl ToastAction {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// A transient message. Expires on its own unless dismissed first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: ToastSeverity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ToastAction>,
    pub created_at_ms: u64,
}

impl Toast {
    pub fn new(message: impl Into<String>, severity: ToastSeverity, created_at_ms: u64) -> Self {
        Self {
            id: ToastId::new(),
            message: message.into(),
            severity,
            action: None,
            created_at_ms,
        }
    }

    pub fn with_action(mut self, action: Option<ToastAction>) -> Self {
        self.action = action;
        self
    }
}
