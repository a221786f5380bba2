//! Grid projector for the compact provider card.
//!
//! Lays a resolved day out as one column per clock hour (08 through 23),
//! four quarter-hour cells each, and pages horizontally over those columns.

use crate::models::slot::{
    SlotStatus, SlotTime, DISPLAY_END_HOUR, DISPLAY_START_HOUR, SLOTS_PER_HOUR,
};
use crate::services::resolver::ResolvedDay;

/// Columns visible at once on a card
pub const PAGE_SIZE: usize = 4;
/// One column per hour of the display window
pub const TOTAL_COLUMNS: usize = (DISPLAY_END_HOUR - DISPLAY_START_HOUR) as usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub time: SlotTime,
    pub status: SlotStatus,
    pub reason: Option<String>,
}

/// One clock hour: cells for :00, :15, :30 and :45
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridColumn {
    pub hour: u32,
    pub cells: Vec<GridCell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotGrid {
    columns: Vec<GridColumn>,
}

impl SlotGrid {
    pub fn columns(&self) -> &[GridColumn] {
        &self.columns
    }

    pub fn total_columns(&self) -> usize {
        self.columns.len()
    }

    /// All cells in column-major order (by hour, then quarter)
    pub fn cells(&self) -> impl Iterator<Item = &GridCell> {
        self.columns.iter().flat_map(|column| column.cells.iter())
    }

    /// Contiguous columns `[offset, offset + len)`, truncated at the end of the grid
    pub fn window(&self, offset: usize, len: usize) -> &[GridColumn] {
        let start = offset.min(self.columns.len());
        let end = start.saturating_add(len).min(self.columns.len());
        &self.columns[start..end]
    }
}

/// Expand a resolved day into the 16 x 4 card grid
pub fn project_grid(day: &ResolvedDay) -> SlotGrid {
    let columns = (DISPLAY_START_HOUR..DISPLAY_END_HOUR)
        .map(|hour| {
            let cells = (0..SLOTS_PER_HOUR)
                .filter_map(|quarter| SlotTime::new(hour, quarter as u32 * 15))
                .map(|time| match day.slot_at(time) {
                    Some(slot) => GridCell {
                        time,
                        status: slot.status,
                        reason: slot.reason.clone(),
                    },
                    None => GridCell {
                        time,
                        status: SlotStatus::Available,
                        reason: None,
                    },
                })
                .collect();
            GridColumn { hour, cells }
        })
        .collect();

    SlotGrid { columns }
}

/// Horizontal paging state for a card grid. The offset is the only state the
/// caller keeps between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridPager {
    offset: usize,
}

impl GridPager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at `offset`, clamped into range for a grid of `total` columns
    pub fn with_offset(offset: usize, total: usize) -> Self {
        Self {
            offset: Self::clamp_offset(offset, total),
        }
    }

    /// Clamp `offset` into `[0, total - PAGE_SIZE]` (zero when the grid is narrower than a page)
    pub fn clamp_offset(offset: usize, total: usize) -> usize {
        offset.min(total.saturating_sub(PAGE_SIZE))
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Visible columns of `grid`
    pub fn page<'a>(&self, grid: &'a SlotGrid) -> &'a [GridColumn] {
        let offset = Self::clamp_offset(self.offset, grid.total_columns());
        grid.window(offset, PAGE_SIZE)
    }

    pub fn can_retreat(&self) -> bool {
        self.offset > 0
    }

    pub fn can_advance(&self, total: usize) -> bool {
        self.offset + PAGE_SIZE < total
    }

    /// Move one page back. Returns `false` (and changes nothing) at the first page.
    pub fn retreat(&mut self) -> bool {
        if !self.can_retreat() {
            return false;
        }
        self.offset = self.offset.saturating_sub(PAGE_SIZE);
        true
    }

    /// Move one page forward. Returns `false` (and changes nothing) at the last page.
    pub fn advance(&mut self, total: usize) -> bool {
        if !self.can_advance(total) {
            return false;
        }
        self.offset = Self::clamp_offset(self.offset + PAGE_SIZE, total);
        true
    }

    /// Hour range of the visible page, e.g. "08:00 - 11:45"
    pub fn page_label(&self, grid: &SlotGrid) -> String {
        let page = self.page(grid);
        let first = page.first().and_then(|column| column.cells.first());
        let last = page.last().and_then(|column| column.cells.last());
        match (first, last) {
            (Some(first), Some(last)) => format!("{} - {}", first.time, last.time),
            _ => String::new(),
        }
    }
}
