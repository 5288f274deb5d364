//! Transient notification queue.
//!
//! DESIGN
//! ======
//! Toasts are fire-and-forget: pushed by any view through the shared
//! signal, rendered by the single `Toaster` overlay, and removed either by
//! a timer or the dismiss control. Ids are client-generated so dismissal
//! never races a second push.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    /// Failure styling for error notifications.
    Destructive,
}

/// A single notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: String,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            ..Self::new(title, description)
        }
    }
}

/// Shared toast queue state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastsState {
    pub items: Vec<Toast>,
}

impl ToastsState {
    pub fn push(&mut self, toast: Toast) {
        self.items.push(toast);
    }

    /// Remove the toast with the given id, if still queued.
    pub fn dismiss(&mut self, id: &str) {
        self.items.retain(|t| t.id != id);
    }
}
