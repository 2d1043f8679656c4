use crate::model::{PageEntry, PagePriority, PageStatus};

/// Criteria for narrowing the registry listing. Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct PageFilter {
    pub status: Option<PageStatus>,
    pub category: Option<String>,
    pub priority: Option<PagePriority>,
}

impl PageFilter {
    pub fn matches(&self, page: &PageEntry) -> bool {
        if let Some(status) = self.status
            && page.status != status
        {
            return false;
        }
        if let Some(ref category) = self.category
            && !page.category.eq_ignore_ascii_case(category)
        {
            return false;
        }
        if let Some(priority) = self.priority
            && page.priority != priority
        {
            return false;
        }
        true
    }
}

pub fn filter_pages(pages: &[PageEntry], filter: &PageFilter) -> Vec<PageEntry> {
    pages.iter().filter(|p| filter.matches(p)).cloned().collect()
}
