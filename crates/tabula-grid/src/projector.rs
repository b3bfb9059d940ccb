//! Row projection: record + column schema → ordered cells

use serde::Serialize;
use tabula_core::{Record, RecordId, Value};

use crate::actions::RowAction;
use crate::schema::{ColumnDefinition, ColumnKind, ColumnSchema, RendererHint};
use crate::settings::ErrorPolicy;
use crate::ProjectionError;

const DATE_DISPLAY_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

/// Renderable content of a single cell
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    Text(String),
    Badge { label: String, tone: BadgeTone },
    Actions(Vec<RowAction>),
}

impl CellValue {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Plain-text form, e.g. for exports
    pub fn display_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Badge { label, .. } => label.clone(),
            Self::Actions(actions) => actions
                .iter()
                .map(|a| a.label())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedCell {
    /// Key of the column this cell belongs to
    pub key: String,
    pub hint: Option<RendererHint>,
    pub value: CellValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedRow {
    pub id: RecordId,
    pub selected: bool,
    pub cells: Vec<ProjectedCell>,
}

#[derive(Debug, Clone)]
pub struct RowProjector {
    placeholder: String,
    policy: ErrorPolicy,
}

impl RowProjector {
    pub fn new(placeholder: impl Into<String>, policy: ErrorPolicy) -> Self {
        Self {
            placeholder: placeholder.into(),
            policy,
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    /// Project every column of `schema` for `record`, in schema order.
    /// Fails on the first column with no value and no fallback.
    pub fn project(
        &self,
        record: &Record,
        schema: &ColumnSchema,
    ) -> Result<Vec<ProjectedCell>, ProjectionError> {
        schema
            .iter()
            .map(|column| {
                project_cell(record, column).map(|value| ProjectedCell {
                    key: column.key.clone(),
                    hint: column.renderer,
                    value,
                })
            })
            .collect()
    }

    /// Like [`project`](Self::project), but failing cells degrade to the
    /// placeholder text
    pub fn project_or_placeholder(&self, record: &Record, schema: &ColumnSchema) -> Vec<ProjectedCell> {
        schema
            .iter()
            .map(|column| {
                let value = project_cell(record, column).unwrap_or_else(|err| {
                    tracing::warn!(error = %err, "rendering placeholder cell");
                    CellValue::text(self.placeholder.as_str())
                });
                ProjectedCell {
                    key: column.key.clone(),
                    hint: column.renderer,
                    value,
                }
            })
            .collect()
    }

    /// Project a full row, handling failures according to the error policy
    pub fn project_row(
        &self,
        record: &Record,
        schema: &ColumnSchema,
        selected: bool,
    ) -> Result<ProjectedRow, ProjectionError> {
        let cells = match self.policy {
            ErrorPolicy::Strict => self.project(record, schema)?,
            ErrorPolicy::Lenient => self.project_or_placeholder(record, schema),
        };
        Ok(ProjectedRow {
            id: record.id.clone(),
            selected,
            cells,
        })
    }
}

/// Produce one cell: action buttons, then the custom accessor, then the
/// default field lookup, then the column fallback.
pub fn project_cell(record: &Record, column: &ColumnDefinition) -> Result<CellValue, ProjectionError> {
    if column.is_action_column() {
        return Ok(CellValue::Actions(column.actions.clone()));
    }

    let value = match column.custom_accessor() {
        Some(access) => access(record),
        None => record.field(&column.key).map(|v| render_value(v, column)),
    };

    match (value, &column.fallback) {
        (Some(value), _) => Ok(value),
        (None, Some(fallback)) => Ok(CellValue::text(fallback.as_str())),
        (None, None) => Err(ProjectionError::MissingField {
            record: record.id.clone(),
            column: column.key.clone(),
        }),
    }
}

fn render_value(value: &Value, column: &ColumnDefinition) -> CellValue {
    let is_date = column.kind == ColumnKind::Date || column.renderer == Some(RendererHint::Date);
    let text = match value.as_date() {
        Some(date) if is_date => date.format(DATE_DISPLAY_FORMAT).to_string(),
        _ => match (column.kind, value.as_bool()) {
            (ColumnKind::Boolean, Some(true)) => "Yes".to_string(),
            (ColumnKind::Boolean, Some(false)) => "No".to_string(),
            _ => value.to_string(),
        },
    };

    if column.renderer == Some(RendererHint::Badge) {
        CellValue::Badge {
            label: text,
            tone: BadgeTone::Neutral,
        }
    } else {
        CellValue::Text(text)
    }
}
