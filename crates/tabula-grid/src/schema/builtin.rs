//! Column sets for the admin console tabs

use tabula_core::Record;

use crate::actions::RowAction;
use crate::projector::{BadgeTone, CellValue};
use crate::sort::SortDirection;
use crate::{ConfigError, ViewContext};

use super::{ColumnDefinition, ColumnSchema, SchemaRegistry};

impl SchemaRegistry {
    /// Registry with a schema for every [`ViewContext`]
    pub fn builtin() -> Result<SchemaRegistry, ConfigError> {
        SchemaRegistry::builder()
            .register(ViewContext::Admissions, admissions())
            .register(ViewContext::Timetables, timetables())
            .register(ViewContext::Placements, placements())
            .register(ViewContext::Debts, debts())
            .register(ViewContext::Roles, roles())
            .register(ViewContext::Attendance, attendance())
            .build()
    }
}

fn admissions() -> ColumnSchema {
    ColumnSchema::new([
        ColumnDefinition::new("child_name", "Child"),
        ColumnDefinition::new("date_of_birth", "Date of birth").date(),
        ColumnDefinition::new("application_date", "Applied").date(),
        ColumnDefinition::new("preferred_unit", "Preferred unit").fallback("-"),
        ColumnDefinition::new("status", "Status")
            .badge()
            .accessor(|record| status_badge(record, "status")),
        ColumnDefinition::actions("actions", "Actions", [RowAction::View, RowAction::Edit]),
    ])
    .with_default_sort("application_date", SortDirection::Ascending)
}

fn timetables() -> ColumnSchema {
    ColumnSchema::new([
        ColumnDefinition::new("child_name", "Child"),
        ColumnDefinition::new("unit", "Unit"),
        ColumnDefinition::new("weekday", "Day").not_sortable(),
        ColumnDefinition::new("start_time", "Start"),
        ColumnDefinition::new("end_time", "End"),
        ColumnDefinition::new("hours", "Hours").numeric(),
    ])
    .with_default_sort("child_name", SortDirection::Ascending)
}

fn placements() -> ColumnSchema {
    ColumnSchema::new([
        ColumnDefinition::new("child_name", "Child"),
        ColumnDefinition::new("unit", "Unit"),
        ColumnDefinition::new("group", "Group").fallback("-"),
        ColumnDefinition::new("start_date", "Start").date(),
        ColumnDefinition::new("end_date", "End").date().fallback("-"),
        ColumnDefinition::new("placement_type", "Type"),
        ColumnDefinition::actions(
            "actions",
            "Actions",
            [RowAction::View, RowAction::Edit, RowAction::Delete],
        ),
    ])
}

fn debts() -> ColumnSchema {
    ColumnSchema::new([
        ColumnDefinition::new("guardian_name", "Guardian"),
        ColumnDefinition::new("child_name", "Child"),
        ColumnDefinition::new("amount", "Amount").numeric(),
        ColumnDefinition::new("due_date", "Due").date(),
        ColumnDefinition::new("days_overdue", "Days overdue").numeric(),
        ColumnDefinition::new("status", "Status")
            .badge()
            .accessor(|record| status_badge(record, "status")),
        ColumnDefinition::actions(
            "actions",
            "Actions",
            [RowAction::View, RowAction::Custom("escalate".to_string())],
        ),
    ])
    .with_default_sort("due_date", SortDirection::Ascending)
}

fn roles() -> ColumnSchema {
    ColumnSchema::new([
        ColumnDefinition::new("user_name", "User"),
        ColumnDefinition::new("email", "Email"),
        ColumnDefinition::new("role", "Role").badge(),
        ColumnDefinition::new("unit", "Unit").fallback("-"),
        ColumnDefinition::new("active", "Active").boolean(),
        ColumnDefinition::actions("actions", "Actions", [RowAction::Edit, RowAction::Delete]),
    ])
    .with_default_sort("user_name", SortDirection::Ascending)
}

fn attendance() -> ColumnSchema {
    ColumnSchema::new([
        ColumnDefinition::new("child_name", "Child"),
        ColumnDefinition::new("group", "Group"),
        ColumnDefinition::new("date", "Date").date(),
        ColumnDefinition::new("present", "Present").boolean(),
        ColumnDefinition::new("arrival", "Arrived").fallback("-"),
        ColumnDefinition::new("departure", "Left").fallback("-"),
    ])
    .with_default_sort("date", SortDirection::Descending)
}

fn status_badge(record: &Record, key: &str) -> Option<CellValue> {
    let status = record.field(key)?.to_string();
    let tone = match status.to_lowercase().as_str() {
        "accepted" | "approved" | "paid" | "active" => BadgeTone::Success,
        "pending" | "received" | "waiting" | "in_review" => BadgeTone::Warning,
        "rejected" | "overdue" | "escalated" | "cancelled" => BadgeTone::Danger,
        _ => BadgeTone::Neutral,
    };
    Some(CellValue::Badge {
        label: status,
        tone,
    })
}
