//! Row actions (view/edit/delete buttons) forwarded to the host page

use serde::{Deserialize, Serialize};
use tabula_core::Record;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowAction {
    View,
    Edit,
    Delete,
    /// Page-specific action identified by name (e.g. "escalate")
    Custom(String),
}

impl RowAction {
    pub fn label(&self) -> &str {
        match self {
            Self::View => "View",
            Self::Edit => "Edit",
            Self::Delete => "Delete",
            Self::Custom(name) => name,
        }
    }
}

/// Receives row action activations. The grid never interprets actions; it
/// only resolves the record and passes both through unchanged.
pub trait RowActionHandler {
    fn on_row_action(&mut self, action: &RowAction, record: &Record);
}

impl<F> RowActionHandler for F
where
    F: FnMut(&RowAction, &Record),
{
    fn on_row_action(&mut self, action: &RowAction, record: &Record) {
        self(action, record)
    }
}
