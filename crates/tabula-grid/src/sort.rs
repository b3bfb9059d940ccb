//! Sort state and record ordering
//!
//! Header clicks cycle a column through ascending → descending → unsorted.
//! The same three-state cycle applies to every grid; unsorted restores the
//! original insertion order of the record set.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tabula_core::{Record, Value};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::schema::{ColumnDefinition, ColumnKind, ColumnSchema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unsorted => "",
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Unsorted => "arrow-up-down",
            Self::Ascending => "arrow-up",
            Self::Descending => "arrow-down",
        }
    }

    /// Next direction when the active column's header is clicked again
    pub fn cycle(&self) -> Self {
        match self {
            Self::Unsorted => Self::Ascending,
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Unsorted,
        }
    }
}

/// Active sort field and direction.
///
/// A field is present iff the direction is not [`SortDirection::Unsorted`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RawSortState")]
pub struct SortState {
    field: Option<String>,
    direction: SortDirection,
}

/// Unchecked wire form, normalized through [`SortState::new`]
#[derive(Deserialize)]
struct RawSortState {
    #[serde(default)]
    field: Option<String>,
    #[serde(default)]
    direction: SortDirection,
}

impl From<RawSortState> for SortState {
    fn from(raw: RawSortState) -> Self {
        SortState::new(raw.field, raw.direction)
    }
}

impl SortState {
    pub fn new(field: Option<String>, direction: SortDirection) -> Self {
        match (field, direction) {
            (Some(field), SortDirection::Ascending | SortDirection::Descending) => Self {
                field: Some(field),
                direction,
            },
            _ => Self::unsorted(),
        }
    }

    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn ascending(field: impl Into<String>) -> Self {
        Self::new(Some(field.into()), SortDirection::Ascending)
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self::new(Some(field.into()), SortDirection::Descending)
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn is_sorted(&self) -> bool {
        self.field.is_some()
    }

    /// Direction indicator to draw in a column header
    pub fn direction_for(&self, key: &str) -> SortDirection {
        match self.field() {
            Some(field) if field == key => self.direction,
            _ => SortDirection::Unsorted,
        }
    }
}

/// Tracks the sort state of one grid and orders its records
#[derive(Debug, Clone, Default)]
pub struct SortController {
    state: SortState,
}

impl SortController {
    pub fn new(initial: SortState) -> Self {
        Self { state: initial }
    }

    pub fn state(&self) -> &SortState {
        &self.state
    }

    pub fn reset(&mut self, state: SortState) {
        self.state = state;
    }

    /// Advance the sort state for a header click. Returns whether it changed.
    ///
    /// A different column starts at ascending and fully discards the previous
    /// sort. Clicks on unknown or non-sortable columns are ignored.
    pub fn on_header_click(&mut self, key: &str, schema: &ColumnSchema) -> bool {
        if !schema.is_sortable(key) {
            tracing::debug!(column = key, "ignoring header click on non-sortable column");
            return false;
        }

        let next = match self.state.field() {
            Some(field) if field == key => {
                SortState::new(Some(key.to_string()), self.state.direction.cycle())
            }
            _ => SortState::ascending(key),
        };

        tracing::debug!(
            column = key,
            direction = next.direction.label(),
            "sort changed"
        );
        self.state = next;
        true
    }

    /// Make the state valid for `schema`. An active sort on a column that is
    /// absent or not sortable there is replaced by the schema's default sort.
    /// Returns whether the state changed.
    pub fn validate_against(&mut self, schema: &ColumnSchema) -> bool {
        match self.state.field() {
            Some(field) if !schema.is_sortable(field) => {
                tracing::debug!(column = field, "dropping sort on column absent from schema");
                self.state = schema.default_sort().clone();
                true
            }
            _ => false,
        }
    }

    /// Indices into `records` in display order.
    ///
    /// Always sorts a fresh permutation of insertion order with a stable sort,
    /// so equal keys keep their relative order and re-sorting is idempotent.
    pub fn sorted_indices(&self, records: &[Record], schema: &ColumnSchema) -> Vec<usize> {
        let mut order: Vec<usize> = (0..records.len()).collect();

        let column = match self.state.field().and_then(|f| schema.column(f)) {
            Some(column) => column,
            None => return order,
        };

        let direction = self.state.direction;
        order.sort_by(|&a, &b| {
            let ordering = compare_records(&records[a], &records[b], column);
            match direction {
                SortDirection::Descending => ordering.reverse(),
                _ => ordering,
            }
        });
        order
    }
}

/// Compare two records by a column in ascending order
pub fn compare_records(a: &Record, b: &Record, column: &ColumnDefinition) -> Ordering {
    if let Some(compare) = column.custom_comparator() {
        return compare(a, b);
    }

    let va = a.field(&column.key);
    let vb = b.field(&column.key);

    match column.kind {
        ColumnKind::Text => compare_text(&text_of(va), &text_of(vb)),
        ColumnKind::Numeric => compare_parsed(va, vb, Value::as_f64, |x, y| x.total_cmp(y)),
        ColumnKind::Date => compare_parsed(va, vb, Value::as_date, |x, y| x.cmp(y)),
        ColumnKind::Boolean => compare_parsed(va, vb, Value::as_bool, |x, y| x.cmp(y)),
    }
}

/// Collation-style comparison: accent- and case-insensitive primary key, then
/// lowercase, then the raw string so that the order is total.
fn compare_text(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Primary sort key: NFD-decomposed, combining marks dropped, lowercased.
/// Letters with no canonical decomposition (`ø`, `æ`, `ß`, ...) fold to their
/// base Latin spelling.
fn collation_key(text: &str) -> String {
    let mut key = String::with_capacity(text.len());
    for c in text.nfd().filter(|c| !is_combining_mark(*c)) {
        match c {
            'ø' | 'Ø' => key.push('o'),
            'æ' | 'Æ' => key.push_str("ae"),
            'œ' | 'Œ' => key.push_str("oe"),
            'ß' => key.push_str("ss"),
            'đ' | 'Đ' => key.push('d'),
            'ł' | 'Ł' => key.push('l'),
            _ => key.extend(c.to_lowercase()),
        }
    }
    key
}

fn text_of(value: Option<&Value>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Ordering rank for typed columns: absent values sort like an empty string
/// (first), parsed values next, values of the wrong shape last.
enum Keyed<T> {
    Absent,
    Parsed(T),
    Unparsed(String),
}

impl<T> Keyed<T> {
    fn rank(&self) -> u8 {
        match self {
            Keyed::Absent => 0,
            Keyed::Parsed(_) => 1,
            Keyed::Unparsed(_) => 2,
        }
    }
}

fn compare_parsed<T>(
    a: Option<&Value>,
    b: Option<&Value>,
    parse: impl Fn(&Value) -> Option<T>,
    compare: impl Fn(&T, &T) -> Ordering,
) -> Ordering {
    let key = |value: Option<&Value>| match value {
        None => Keyed::Absent,
        Some(v) => match parse(v) {
            Some(parsed) => Keyed::Parsed(parsed),
            None => Keyed::Unparsed(v.to_string()),
        },
    };

    match (key(a), key(b)) {
        (Keyed::Parsed(x), Keyed::Parsed(y)) => compare(&x, &y),
        (Keyed::Unparsed(x), Keyed::Unparsed(y)) => compare_text(&x, &y),
        (x, y) => x.rank().cmp(&y.rank()),
    }
}
