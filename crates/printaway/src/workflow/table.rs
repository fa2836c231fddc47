//! Sortable, filterable, paginated view over the staff job list.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::alert::Alert;
use crate::format::format_date_time;
use crate::schema::PrintJob;

const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    ReferenceCode,
    CustomerName,
    CustomerEmail,
    Status,
    PaymentStatus,
    CreatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Splits jobs into those created within the last 24 hours and the rest,
/// preserving order within each half.
pub fn partition_by_age(jobs: &[PrintJob], now: DateTime<Utc>) -> (Vec<PrintJob>, Vec<PrintJob>) {
    jobs.iter().cloned().partition(|job| job.is_recent(now))
}

/// The staff table: jobs plus the view state layered over them.
///
/// Selection is keyed by job id, so it survives re-sorting; replacing the
/// job list clears it rather than risking ids that no longer exist.
#[derive(Debug, Clone)]
pub struct JobTable {
    jobs: Vec<PrintJob>,
    sort: Option<(SortColumn, SortDirection)>,
    filter: String,
    page_size: usize,
    page_index: usize,
    selection: HashSet<i64>,
}

impl Default for JobTable {
    fn default() -> Self {
        Self::new()
    }
}

impl JobTable {
    pub fn new() -> Self {
        Self {
            jobs: Vec::new(),
            sort: None,
            filter: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
            page_index: 0,
            selection: HashSet::new(),
        }
    }

    /// Replaces the backing data, as after a re-fetch. Selection is cleared;
    /// sort and filter persist.
    pub fn set_jobs(&mut self, jobs: Vec<PrintJob>) {
        self.jobs = jobs;
        self.selection.clear();
        self.clamp_page();
    }

    pub fn jobs(&self) -> &[PrintJob] {
        &self.jobs
    }

    /// First click sorts ascending; clicking the same column again flips
    /// the direction.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.sort = match self.sort {
            Some((current, direction)) if current == column => Some((column, direction.flip())),
            _ => Some((column, SortDirection::Ascending)),
        };
    }

    pub fn sort(&self) -> Option<(SortColumn, SortDirection)> {
        self.sort
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        self.page_index = 0;
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.clamp_page();
    }

    fn matches_filter(&self, job: &PrintJob) -> bool {
        if self.filter.is_empty() {
            return true;
        }
        let needle = self.filter.to_lowercase();
        let haystacks = [
            job.reference_code.to_lowercase(),
            job.customer.name.to_lowercase(),
            job.customer.email.to_lowercase(),
            job.status.as_str().to_lowercase(),
            job.payment_status.as_str().to_lowercase(),
            format_date_time(&job.created_at).to_lowercase(),
        ];
        haystacks.iter().any(|h| h.contains(&needle))
    }

    /// Jobs that pass the filter, in the current sort order.
    pub fn visible_jobs(&self) -> Vec<&PrintJob> {
        let mut visible: Vec<&PrintJob> =
            self.jobs.iter().filter(|j| self.matches_filter(j)).collect();

        if let Some((column, direction)) = self.sort {
            visible.sort_by(|a, b| {
                let ordering = match column {
                    SortColumn::ReferenceCode => a.reference_code.cmp(&b.reference_code),
                    SortColumn::CustomerName => a
                        .customer
                        .name
                        .to_lowercase()
                        .cmp(&b.customer.name.to_lowercase()),
                    SortColumn::CustomerEmail => a
                        .customer
                        .email
                        .to_lowercase()
                        .cmp(&b.customer.email.to_lowercase()),
                    SortColumn::Status => a.status.as_str().cmp(b.status.as_str()),
                    SortColumn::PaymentStatus => {
                        a.payment_status.as_str().cmp(b.payment_status.as_str())
                    }
                    SortColumn::CreatedAt => a.created_at.cmp(&b.created_at),
                };
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        visible
    }

    pub fn page_count(&self) -> usize {
        let visible = self.visible_jobs().len();
        if visible == 0 {
            1
        } else {
            visible.div_ceil(self.page_size)
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// The current page of visible jobs.
    pub fn page(&self) -> Vec<&PrintJob> {
        self.visible_jobs()
            .into_iter()
            .skip(self.page_index * self.page_size)
            .take(self.page_size)
            .collect()
    }

    pub fn next_page(&mut self) {
        if self.page_index + 1 < self.page_count() {
            self.page_index += 1;
        }
    }

    pub fn previous_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    fn clamp_page(&mut self) {
        let last = self.page_count().saturating_sub(1);
        if self.page_index > last {
            self.page_index = last;
        }
    }

    pub fn toggle_row(&mut self, job_id: i64) {
        if !self.selection.remove(&job_id) {
            self.selection.insert(job_id);
        }
    }

    pub fn is_selected(&self, job_id: i64) -> bool {
        self.selection.contains(&job_id)
    }

    pub fn all_page_rows_selected(&self) -> bool {
        let page = self.page();
        !page.is_empty() && page.iter().all(|j| self.selection.contains(&j.id))
    }

    /// Selects every row on the current page, or deselects them all when
    /// they are already all selected.
    pub fn toggle_all_page_rows(&mut self) {
        let ids: Vec<i64> = self.page().iter().map(|j| j.id).collect();
        if self.all_page_rows_selected() {
            for id in ids {
                self.selection.remove(&id);
            }
        } else {
            self.selection.extend(ids);
        }
    }

    /// Selected ids restricted to jobs still passing the filter.
    pub fn selected_ids(&self) -> Vec<i64> {
        self.visible_jobs()
            .iter()
            .map(|j| j.id)
            .filter(|id| self.selection.contains(id))
            .collect()
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// The ids a bulk delete would apply to, or a warning when nothing is
    /// selected. The warning means no request should be sent.
    pub fn selection_for_bulk_delete(&self) -> Result<Vec<i64>, Alert> {
        let ids = self.selected_ids();
        if ids.is_empty() {
            Err(Alert::warning(
                "No Selection",
                "Please select at least one job to delete.",
            ))
        } else {
            Ok(ids)
        }
    }
}
