use std::collections::{HashMap, HashSet};
use std::ops::Deref;
use std::sync::Arc;

use crate::sort::{SortDirection, SortState};
use crate::{ConfigError, ViewContext};

use super::ColumnDefinition;

/// Ordered column list for one view context, plus the sort applied when a grid
/// mounts. Cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct ColumnSchema {
    columns: Arc<Vec<ColumnDefinition>>,
    default_sort: SortState,
}

impl ColumnSchema {
    pub fn new(columns: impl IntoIterator<Item = ColumnDefinition>) -> Self {
        Self {
            columns: Arc::new(columns.into_iter().collect()),
            default_sort: SortState::unsorted(),
        }
    }

    /// Sort applied on mount and whenever an active sort becomes invalid
    pub fn with_default_sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.default_sort = SortState::new(Some(field.into()), direction);
        self
    }

    pub fn columns(&self) -> &[ColumnDefinition] {
        &self.columns
    }

    pub fn column(&self, key: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|c| c.key == key)
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.key == key)
    }

    pub fn is_sortable(&self, key: &str) -> bool {
        self.column(key).is_some_and(|c| c.sortable)
    }

    pub fn keys(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.key.as_str()).collect()
    }

    pub fn default_sort(&self) -> &SortState {
        &self.default_sort
    }

    fn validate(&self, context: ViewContext) -> Result<(), ConfigError> {
        let malformed = |key: &str, reason: &str| ConfigError::MalformedColumn {
            context,
            key: key.to_string(),
            reason: reason.to_string(),
        };

        let mut seen = HashSet::new();
        for column in self.columns.iter() {
            if column.key.trim().is_empty() {
                return Err(malformed(&column.key, "empty key"));
            }
            if column.label.trim().is_empty() {
                return Err(malformed(&column.key, "empty label"));
            }
            if !seen.insert(column.key.as_str()) {
                return Err(malformed(&column.key, "duplicate key"));
            }
            if column.is_action_column() && column.sortable {
                return Err(malformed(&column.key, "action columns cannot be sortable"));
            }
        }

        if let Some(field) = self.default_sort.field() {
            if !self.is_sortable(field) {
                return Err(ConfigError::InvalidDefaultSort {
                    context,
                    field: field.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Deref for ColumnSchema {
    type Target = [ColumnDefinition];

    fn deref(&self) -> &Self::Target {
        &self.columns
    }
}

/// Declarative view context → column schema mapping.
///
/// Schemas are validated once when the registry is built, so resolving never
/// yields a malformed schema.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<ViewContext, ColumnSchema>,
}

impl SchemaRegistry {
    pub fn builder() -> SchemaRegistryBuilder {
        SchemaRegistryBuilder::default()
    }

    /// Resolve the ordered column schema for a context
    pub fn resolve(&self, context: ViewContext) -> Result<ColumnSchema, ConfigError> {
        self.schemas
            .get(&context)
            .cloned()
            .ok_or(ConfigError::MissingSchema(context))
    }

    /// Resolve from a raw context tag as sent by the host router
    pub fn resolve_tag(&self, tag: &str) -> Result<ColumnSchema, ConfigError> {
        self.resolve(ViewContext::parse(tag)?)
    }

    pub fn contains(&self, context: ViewContext) -> bool {
        self.schemas.contains_key(&context)
    }

    /// Registered contexts in declaration order of [`ViewContext`]
    pub fn contexts(&self) -> Vec<ViewContext> {
        let mut contexts: Vec<ViewContext> = self.schemas.keys().copied().collect();
        contexts.sort();
        contexts
    }
}

#[derive(Debug, Default)]
pub struct SchemaRegistryBuilder {
    entries: Vec<(ViewContext, ColumnSchema)>,
}

impl SchemaRegistryBuilder {
    /// Register a schema. A later registration for the same context replaces
    /// the earlier one.
    pub fn register(mut self, context: ViewContext, schema: ColumnSchema) -> Self {
        self.entries.push((context, schema));
        self
    }

    pub fn build(self) -> Result<SchemaRegistry, ConfigError> {
        let mut schemas = HashMap::with_capacity(self.entries.len());
        for (context, schema) in self.entries {
            schema.validate(context)?;
            if schemas.insert(context, schema).is_some() {
                tracing::debug!(%context, "column schema re-registered");
            }
        }
        Ok(SchemaRegistry { schemas })
    }
}
