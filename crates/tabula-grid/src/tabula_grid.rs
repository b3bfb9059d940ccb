//! Record grid view-model for the admin console
//!
//! Turns a filtered record set into a sorted, paginated, selectable grid for
//! whichever tab ([`ViewContext`]) is rendering it. Column layouts come from a
//! [`SchemaRegistry`]; the host renders [`ProjectedRow`]s and feeds
//! [`GridEvent`]s back into the [`GridView`].
//!
//! ```ignore
//! let registry = SchemaRegistry::builtin()?;
//! let mut grid = GridView::new(registry, GridSettings::default(), ViewContext::Admissions, records)?;
//! grid.apply(GridEvent::HeaderClicked("child_name".into()))?;
//! for row in grid.rows()? { /* render */ }
//! ```

pub mod actions;
mod context;
mod error;
pub mod pagination;
pub mod projector;
pub mod schema;
pub mod selection;
pub mod settings;
pub mod sort;
mod view;

pub use actions::{RowAction, RowActionHandler};
pub use context::ViewContext;
pub use error::{ConfigError, GridError, GridResult, ProjectionError, RangeError};
pub use pagination::{PageState, PaginationController};
pub use projector::{BadgeTone, CellValue, ProjectedCell, ProjectedRow, RowProjector};
pub use schema::{ColumnDefinition, ColumnKind, ColumnSchema, RendererHint, SchemaRegistry};
pub use selection::{HeaderCheckbox, SelectionController, SelectionState};
pub use settings::{ErrorPolicy, GridSettings};
pub use sort::{SortController, SortDirection, SortState};
pub use tabula_core::{Record, RecordId, Value};
pub use view::{GridEvent, GridView};
