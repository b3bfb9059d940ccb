//! Tests for column schema resolution

use pretty_assertions::assert_eq;
use strum::IntoEnumIterator;

use crate::actions::RowAction;
use crate::sort::{SortDirection, SortState};
use crate::{ConfigError, ViewContext};

use super::{ColumnDefinition, ColumnSchema, SchemaRegistry};

fn roster_schema() -> ColumnSchema {
    ColumnSchema::new([
        ColumnDefinition::new("name", "Name"),
        ColumnDefinition::new("age", "Age").numeric(),
        ColumnDefinition::actions("actions", "Actions", [RowAction::Edit]),
    ])
}

#[test]
fn test_resolve_preserves_column_order() {
    let registry = SchemaRegistry::builder()
        .register(ViewContext::Roles, roster_schema())
        .build()
        .unwrap();

    let schema = registry.resolve(ViewContext::Roles).unwrap();

    assert_eq!(schema.keys(), vec!["name", "age", "actions"]);
    assert!(schema.is_sortable("age"));
    assert!(!schema.is_sortable("actions"));
    assert!(!schema.is_sortable("missing"));
}

#[test]
fn test_resolve_unregistered_context_is_config_error() {
    let registry = SchemaRegistry::builder()
        .register(ViewContext::Roles, roster_schema())
        .build()
        .unwrap();

    assert_eq!(
        registry.resolve(ViewContext::Debts).unwrap_err(),
        ConfigError::MissingSchema(ViewContext::Debts)
    );
}

#[test]
fn test_resolve_tag_rejects_unknown_tag() {
    let registry = SchemaRegistry::builtin().unwrap();

    assert!(registry.resolve_tag("placements").is_ok());
    assert_eq!(
        registry.resolve_tag("map").unwrap_err(),
        ConfigError::UnknownContext("map".to_string())
    );
}

#[test]
fn test_resolve_is_deterministic() {
    let registry = SchemaRegistry::builtin().unwrap();

    let first = registry.resolve(ViewContext::Debts).unwrap();
    let second = registry.resolve(ViewContext::Debts).unwrap();

    assert_eq!(first.keys(), second.keys());
    assert_eq!(first.default_sort(), second.default_sort());
}

#[test]
fn test_duplicate_key_is_rejected() {
    let schema = ColumnSchema::new([
        ColumnDefinition::new("name", "Name"),
        ColumnDefinition::new("name", "Name again"),
    ]);

    let err = SchemaRegistry::builder()
        .register(ViewContext::Admissions, schema)
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        ConfigError::MalformedColumn {
            context: ViewContext::Admissions,
            key: "name".to_string(),
            reason: "duplicate key".to_string(),
        }
    );
}

#[test]
fn test_empty_key_and_label_are_rejected() {
    let empty_key = ColumnSchema::new([ColumnDefinition::new(" ", "Blank")]);
    let empty_label = ColumnSchema::new([ColumnDefinition::new("name", "")]);

    for schema in [empty_key, empty_label] {
        let result = SchemaRegistry::builder()
            .register(ViewContext::Roles, schema)
            .build();
        assert!(matches!(result, Err(ConfigError::MalformedColumn { .. })));
    }
}

#[test]
fn test_sortable_action_column_is_rejected() {
    let mut actions = ColumnDefinition::actions("actions", "Actions", [RowAction::View]);
    actions.sortable = true;

    let result = SchemaRegistry::builder()
        .register(ViewContext::Roles, ColumnSchema::new([actions]))
        .build();

    assert!(matches!(result, Err(ConfigError::MalformedColumn { .. })));
}

#[test]
fn test_default_sort_must_name_sortable_column() {
    let schema = roster_schema().with_default_sort("actions", SortDirection::Ascending);

    let err = SchemaRegistry::builder()
        .register(ViewContext::Roles, schema)
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        ConfigError::InvalidDefaultSort {
            context: ViewContext::Roles,
            field: "actions".to_string(),
        }
    );
}

#[test]
fn test_later_registration_replaces_earlier() {
    let registry = SchemaRegistry::builder()
        .register(ViewContext::Roles, roster_schema())
        .register(
            ViewContext::Roles,
            ColumnSchema::new([ColumnDefinition::new("email", "Email")]),
        )
        .build()
        .unwrap();

    assert_eq!(registry.resolve(ViewContext::Roles).unwrap().keys(), vec!["email"]);
}

#[test]
fn test_builtin_covers_every_context() {
    let registry = SchemaRegistry::builtin().unwrap();

    assert_eq!(registry.contexts(), ViewContext::iter().collect::<Vec<_>>());
    for context in ViewContext::iter() {
        let schema = registry.resolve(context).unwrap();
        assert!(!schema.is_empty(), "{context} has no columns");
    }
}

#[test]
fn test_builtin_default_sorts() {
    let registry = SchemaRegistry::builtin().unwrap();

    assert_eq!(
        registry.resolve(ViewContext::Attendance).unwrap().default_sort(),
        &SortState::descending("date")
    );
    assert_eq!(
        registry.resolve(ViewContext::Placements).unwrap().default_sort(),
        &SortState::unsorted()
    );
}
