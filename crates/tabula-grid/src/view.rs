//! Grid view-model
//!
//! [`GridView`] owns the sort, pagination and selection state of one grid
//! instance and recomputes the visible page whenever any of them changes.

use std::collections::HashMap;

use tabula_core::{Record, RecordId};

use crate::actions::{RowAction, RowActionHandler};
use crate::pagination::{PageState, PaginationController};
use crate::projector::{ProjectedRow, RowProjector};
use crate::schema::{ColumnDefinition, ColumnSchema, SchemaRegistry};
use crate::selection::{HeaderCheckbox, SelectionController, SelectionState};
use crate::settings::GridSettings;
use crate::sort::{SortController, SortState};
use crate::{GridError, GridResult, RangeError, ViewContext};

/// Interaction events emitted by the host page
#[derive(Debug, Clone, PartialEq)]
pub enum GridEvent {
    HeaderClicked(String),
    PageRequested(usize),
    PageSizeChanged(usize),
    NextPage,
    PrevPage,
    RowToggled(RecordId),
    SelectAllToggled(bool),
    ContextSwitched(ViewContext),
    RecordsReplaced(Vec<Record>),
}

#[derive(Debug, Clone)]
pub struct GridView {
    registry: SchemaRegistry,
    settings: GridSettings,
    context: ViewContext,
    schema: ColumnSchema,
    records: Vec<Record>,
    /// Display order as indices into `records`
    order: Vec<usize>,
    index: HashMap<RecordId, usize>,
    sort: SortController,
    pagination: PaginationController,
    selection: SelectionController,
    projector: RowProjector,
}

impl GridView {
    pub fn new(
        registry: SchemaRegistry,
        settings: GridSettings,
        context: ViewContext,
        records: Vec<Record>,
    ) -> GridResult<Self> {
        settings.validate()?;
        let schema = registry.resolve(context)?;
        let pagination = PaginationController::new(settings.default_page_size)?;
        let projector = RowProjector::new(settings.placeholder.clone(), settings.error_policy);

        let mut view = Self {
            sort: SortController::new(schema.default_sort().clone()),
            registry,
            settings,
            context,
            schema,
            records: Vec::new(),
            order: Vec::new(),
            index: HashMap::new(),
            pagination,
            selection: SelectionController::new(),
            projector,
        };
        view.set_records(records);
        Ok(view)
    }

    /// Dispatch a single interaction event
    pub fn apply(&mut self, event: GridEvent) -> GridResult<()> {
        match event {
            GridEvent::HeaderClicked(key) => {
                self.click_header(&key);
            }
            GridEvent::PageRequested(page) => {
                self.set_page(page);
            }
            GridEvent::PageSizeChanged(page_size) => self.set_page_size(page_size)?,
            GridEvent::NextPage => {
                self.next_page();
            }
            GridEvent::PrevPage => {
                self.prev_page();
            }
            GridEvent::RowToggled(id) => {
                self.toggle_row(&id);
            }
            GridEvent::SelectAllToggled(checked) => self.select_all_visible(checked),
            GridEvent::ContextSwitched(context) => self.switch_context(context)?,
            GridEvent::RecordsReplaced(records) => self.set_records(records),
        }
        Ok(())
    }

    /// Replace the (already filtered) record set
    pub fn set_records(&mut self, records: Vec<Record>) {
        self.index.clear();
        for (position, record) in records.iter().enumerate() {
            if self.index.contains_key(&record.id) {
                tracing::warn!(id = %record.id, "duplicate record id, keeping first occurrence");
                continue;
            }
            self.index.insert(record.id.clone(), position);
        }
        self.records = records;

        self.resort();
        self.pagination.set_total(self.records.len());
        self.selection.sync_known(self.index.keys());
        tracing::debug!(
            context = %self.context,
            records = self.records.len(),
            "record set replaced"
        );
    }

    /// Swap to another tab's column schema. An active sort the new schema
    /// cannot honor falls back to its default sort.
    pub fn switch_context(&mut self, context: ViewContext) -> GridResult<()> {
        let schema = self.registry.resolve(context)?;
        self.context = context;
        self.schema = schema;
        self.sort.validate_against(&self.schema);
        self.resort();
        self.pagination.first_page();
        tracing::debug!(%context, "view context switched");
        Ok(())
    }

    /// Returns whether the sort changed. A new sort starts at the first page.
    pub fn click_header(&mut self, key: &str) -> bool {
        let changed = self.sort.on_header_click(key, &self.schema);
        if changed {
            self.resort();
            self.pagination.first_page();
        }
        changed
    }

    /// Returns the page actually shown
    pub fn set_page(&mut self, page: usize) -> usize {
        self.pagination.set_page(page)
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), RangeError> {
        if !self.settings.available_page_sizes.contains(&page_size) {
            tracing::debug!(page_size, "page size not among the offered choices");
        }
        self.pagination.set_page_size(page_size).inspect_err(|err| {
            tracing::warn!(page_size, error = %err, "rejected page size");
        })
    }

    pub fn next_page(&mut self) -> usize {
        self.pagination.next_page()
    }

    pub fn prev_page(&mut self) -> usize {
        self.pagination.prev_page()
    }

    /// Returns whether the row is now selected
    pub fn toggle_row(&mut self, id: &RecordId) -> bool {
        self.selection.toggle_row(id)
    }

    /// Header checkbox: add or remove the current page's rows
    pub fn select_all_visible(&mut self, checked: bool) {
        let visible = self.visible_ids();
        self.selection.select_all(checked, &visible);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn context(&self) -> ViewContext {
        self.context
    }

    pub fn settings(&self) -> &GridSettings {
        &self.settings
    }

    pub fn columns(&self) -> &[ColumnDefinition] {
        self.schema.columns()
    }

    pub fn schema(&self) -> &ColumnSchema {
        &self.schema
    }

    pub fn sort_state(&self) -> &SortState {
        self.sort.state()
    }

    pub fn page_state(&self) -> PageState {
        self.pagination.state()
    }

    pub fn selection(&self) -> &SelectionState {
        self.selection.state()
    }

    pub fn selected_ids(&self) -> Vec<RecordId> {
        self.selection.selected_ids()
    }

    /// Selected records in selection order
    pub fn selected_records(&self) -> Vec<&Record> {
        self.selection
            .state()
            .iter()
            .filter_map(|id| self.record(id))
            .collect()
    }

    pub fn record(&self, id: &RecordId) -> Option<&Record> {
        self.index.get(id).map(|&position| &self.records[position])
    }

    /// All records in display order
    pub fn sorted_records(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().map(|&position| &self.records[position])
    }

    /// Records on the current page, in display order
    pub fn visible_records(&self) -> Vec<&Record> {
        self.pagination
            .slice(&self.order)
            .iter()
            .map(|&position| &self.records[position])
            .collect()
    }

    pub fn visible_ids(&self) -> Vec<RecordId> {
        self.visible_records()
            .into_iter()
            .map(|record| record.id.clone())
            .collect()
    }

    pub fn header_checkbox(&self) -> HeaderCheckbox {
        self.selection.header_state(&self.visible_ids())
    }

    /// Project the current page. Under the strict error policy the first
    /// failing cell aborts the projection.
    pub fn rows(&self) -> GridResult<Vec<ProjectedRow>> {
        self.visible_records()
            .into_iter()
            .map(|record| {
                let selected = self.selection.is_selected(&record.id);
                self.projector
                    .project_row(record, &self.schema, selected)
                    .map_err(GridError::from)
            })
            .collect()
    }

    /// Forward a row action to `handler` together with the resolved record
    pub fn dispatch_action(
        &self,
        id: &RecordId,
        action: &RowAction,
        handler: &mut impl RowActionHandler,
    ) -> GridResult<()> {
        let record = self
            .record(id)
            .ok_or_else(|| GridError::UnknownRecord(id.clone()))?;
        tracing::debug!(%id, action = action.label(), "dispatching row action");
        handler.on_row_action(action, record);
        Ok(())
    }

    fn resort(&mut self) {
        self.order = self.sort.sorted_indices(&self.records, &self.schema);
    }
}
