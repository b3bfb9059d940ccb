//! Shared fixtures for grid integration tests

#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use tabula_grid::{
    ColumnDefinition, ColumnSchema, ErrorPolicy, GridSettings, GridView, Record, RecordId,
    RowAction, SchemaRegistry, SortDirection, ViewContext,
};

/// Two small schemas that share the `date` column but not `name`
pub fn test_registry() -> SchemaRegistry {
    let roster = ColumnSchema::new([
        ColumnDefinition::new("name", "Name"),
        ColumnDefinition::new("date", "Date").date(),
        ColumnDefinition::new("hours", "Hours").numeric(),
        ColumnDefinition::new("note", "Note").not_sortable().fallback("-"),
        ColumnDefinition::actions("actions", "Actions", [RowAction::View, RowAction::Delete]),
    ]);
    let ledger = ColumnSchema::new([
        ColumnDefinition::new("guardian_name", "Guardian").fallback("-"),
        ColumnDefinition::new("date", "Due").date(),
        ColumnDefinition::new("amount", "Amount").numeric().fallback("0"),
    ])
    .with_default_sort("guardian_name", SortDirection::Ascending);

    SchemaRegistry::builder()
        .register(ViewContext::Roles, roster)
        .register(ViewContext::Debts, ledger)
        .build()
        .expect("fixture registry is valid")
}

pub fn strict_settings(page_size: usize) -> GridSettings {
    GridSettings::default()
        .with_page_size(page_size)
        .with_error_policy(ErrorPolicy::Strict)
}

/// `count` records with ids `r00`, `r01`, …; names cycle through a short
/// list so that several records share a name
pub fn people(count: usize) -> Vec<Record> {
    const NAMES: [&str; 5] = ["Venla", "aino", "Eino", "Aino", "leo"];
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");

    (0..count)
        .map(|i| {
            Record::new(format!("r{i:02}"))
                .with_field("name", NAMES[i % NAMES.len()])
                .with_field("date", start + Duration::days(((i * 7) % 31) as i64))
                .with_field("hours", ((i * 13) % 40) as i64)
        })
        .collect()
}

/// Records with only a name, ids equal to the names
pub fn named(ids: &[&str]) -> Vec<Record> {
    ids.iter()
        .map(|id| Record::new(*id).with_field("name", *id))
        .collect()
}

pub fn grid(records: Vec<Record>, page_size: usize) -> GridView {
    GridView::new(
        test_registry(),
        strict_settings(page_size),
        ViewContext::Roles,
        records,
    )
    .expect("fixture grid is valid")
}

pub fn ids(raw: &[&str]) -> Vec<RecordId> {
    raw.iter().map(|id| RecordId::from(*id)).collect()
}

pub fn visible_names(grid: &GridView) -> Vec<String> {
    grid.visible_records()
        .into_iter()
        .map(|record| {
            record
                .field("name")
                .map(|v| v.to_string())
                .unwrap_or_default()
        })
        .collect()
}
