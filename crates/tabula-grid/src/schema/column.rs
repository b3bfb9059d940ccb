use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tabula_core::Record;

use crate::actions::RowAction;
use crate::projector::CellValue;

/// Custom ordering for a column, compared in ascending direction
pub type Comparator = Arc<dyn Fn(&Record, &Record) -> Ordering + Send + Sync>;

/// Custom cell producer. Returning `None` means "no value" and triggers the
/// column fallback.
pub type Accessor = Arc<dyn Fn(&Record) -> Option<CellValue> + Send + Sync>;

/// Selects the built-in comparator for a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    #[default]
    Text,
    Numeric,
    Date,
    Boolean,
}

/// Presentation hint passed through to the host renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RendererHint {
    Plain,
    Date,
    Number,
    Badge,
    Actions,
}

/// A single column of a view context's schema
#[derive(Clone)]
pub struct ColumnDefinition {
    /// Record field key (also the column identity)
    pub key: String,
    /// Header label
    pub label: String,
    pub sortable: bool,
    pub kind: ColumnKind,
    pub renderer: Option<RendererHint>,
    /// Text shown when the record has no value for this column
    pub fallback: Option<String>,
    /// Row actions offered by an action column
    pub actions: Vec<RowAction>,
    comparator: Option<Comparator>,
    accessor: Option<Accessor>,
}

impl ColumnDefinition {
    /// Create a sortable text column
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: true,
            kind: ColumnKind::Text,
            renderer: None,
            fallback: None,
            actions: Vec::new(),
            comparator: None,
            accessor: None,
        }
    }

    /// Create a non-sortable column holding row action buttons
    pub fn actions(
        key: impl Into<String>,
        label: impl Into<String>,
        actions: impl IntoIterator<Item = RowAction>,
    ) -> Self {
        Self {
            sortable: false,
            renderer: Some(RendererHint::Actions),
            actions: actions.into_iter().collect(),
            ..Self::new(key, label)
        }
    }

    pub fn kind(mut self, kind: ColumnKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn numeric(self) -> Self {
        self.kind(ColumnKind::Numeric).renderer(RendererHint::Number)
    }

    pub fn date(self) -> Self {
        self.kind(ColumnKind::Date).renderer(RendererHint::Date)
    }

    pub fn boolean(self) -> Self {
        self.kind(ColumnKind::Boolean)
    }

    pub fn badge(self) -> Self {
        self.renderer(RendererHint::Badge)
    }

    pub fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn renderer(mut self, hint: RendererHint) -> Self {
        self.renderer = Some(hint);
        self
    }

    pub fn fallback(mut self, text: impl Into<String>) -> Self {
        self.fallback = Some(text.into());
        self
    }

    pub fn comparator(
        mut self,
        compare: impl Fn(&Record, &Record) -> Ordering + Send + Sync + 'static,
    ) -> Self {
        self.comparator = Some(Arc::new(compare));
        self
    }

    pub fn accessor(
        mut self,
        access: impl Fn(&Record) -> Option<CellValue> + Send + Sync + 'static,
    ) -> Self {
        self.accessor = Some(Arc::new(access));
        self
    }

    pub fn custom_comparator(&self) -> Option<&Comparator> {
        self.comparator.as_ref()
    }

    pub fn custom_accessor(&self) -> Option<&Accessor> {
        self.accessor.as_ref()
    }

    pub fn is_action_column(&self) -> bool {
        !self.actions.is_empty()
    }
}

impl std::fmt::Debug for ColumnDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnDefinition")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("kind", &self.kind)
            .field("renderer", &self.renderer)
            .field("fallback", &self.fallback)
            .field("actions", &self.actions)
            .field("comparator", &self.comparator.is_some())
            .field("accessor", &self.accessor.is_some())
            .finish()
    }
}
