use crate::model::{PageEntry, PagePriority, PageStatus};
use serde::{Deserialize, Serialize};

/// Per-status counts shared by overall and per-category aggregates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub total: usize,
    pub complete: usize,
    pub partial: usize,
    pub placeholder: usize,
    pub planned: usize,
}

impl StatusCounts {
    fn record(&mut self, status: PageStatus) {
        self.total += 1;
        match status {
            PageStatus::Complete => self.complete += 1,
            PageStatus::Partial => self.partial += 1,
            PageStatus::Placeholder => self.placeholder += 1,
            PageStatus::Planned => self.planned += 1,
        }
    }

    pub fn count(&self, status: PageStatus) -> usize {
        match status {
            PageStatus::Complete => self.complete,
            PageStatus::Partial => self.partial,
            PageStatus::Placeholder => self.placeholder,
            PageStatus::Planned => self.planned,
        }
    }

    pub fn completion_rate(&self) -> u32 {
        completion_rate(self.complete, self.total)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total: usize,
    pub complete: usize,
    pub partial: usize,
    pub placeholder: usize,
    pub planned: usize,
    pub completion_rate: u32,
    /// Distinct categories in first-seen order.
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryProgress {
    pub category: String,
    pub total: usize,
    pub complete: usize,
    pub partial: usize,
    pub placeholder: usize,
    pub planned: usize,
    pub completion_rate: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityBreakdown {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Percentage of `complete` in `total`, rounded half up. Zero for an empty set.
pub fn completion_rate(complete: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((complete * 200 + total) / (total * 2)) as u32
}

pub fn count_statuses(pages: &[PageEntry]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for page in pages {
        counts.record(page.status);
    }
    counts
}

pub fn sitemap_stats(pages: &[PageEntry]) -> Stats {
    let counts = count_statuses(pages);
    let mut categories: Vec<String> = Vec::new();
    for page in pages {
        if !categories.iter().any(|c| c == &page.category) {
            categories.push(page.category.clone());
        }
    }

    Stats {
        total: counts.total,
        complete: counts.complete,
        partial: counts.partial,
        placeholder: counts.placeholder,
        planned: counts.planned,
        completion_rate: counts.completion_rate(),
        categories,
    }
}

/// Groups pages by category, preserving the order categories first appear in.
pub fn category_progress(pages: &[PageEntry]) -> Vec<CategoryProgress> {
    let mut groups: Vec<(String, StatusCounts)> = Vec::new();
    for page in pages {
        let idx = match groups.iter().position(|(c, _)| c == &page.category) {
            Some(idx) => idx,
            None => {
                groups.push((page.category.clone(), StatusCounts::default()));
                groups.len() - 1
            }
        };
        groups[idx].1.record(page.status);
    }

    groups
        .into_iter()
        .map(|(category, counts)| CategoryProgress {
            category,
            total: counts.total,
            complete: counts.complete,
            partial: counts.partial,
            placeholder: counts.placeholder,
            planned: counts.planned,
            completion_rate: counts.completion_rate(),
        })
        .collect()
}

pub fn priority_breakdown(pages: &[PageEntry]) -> PriorityBreakdown {
    let mut breakdown = PriorityBreakdown::default();
    for page in pages {
        match page.priority {
            PagePriority::High => breakdown.high += 1,
            PagePriority::Medium => breakdown.medium += 1,
            PagePriority::Low => breakdown.low += 1,
        }
    }
    breakdown
}

/// Unfinished pages, most urgent first. Ties keep registry order.
pub fn needs_attention(pages: &[PageEntry]) -> Vec<PageEntry> {
    let mut pending: Vec<PageEntry> = pages.iter().filter(|p| !p.is_complete()).cloned().collect();
    pending.sort_by_key(|p| p.priority);
    pending
}
