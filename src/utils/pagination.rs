use serde::Serialize;

use crate::error::{DashboardError, DashboardResult};
use crate::model::{Client, Employee};

/// Entities that can be matched by the dashboard search box.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match on any field. `needle` must already be lowercase.
    fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle))
    }
}

impl Searchable for Employee {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.department.as_str()];
        fields.extend(self.email.as_deref());
        fields
    }
}

impl Searchable for Client {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.location.as_str()];
        fields.extend(self.company.as_deref());
        fields
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: usize,
    pub total_pages: u32,
}

/// Filters `items` by `query`, then slices out the 1-based `page`.
///
/// A page past the end (or page 0) yields an empty `data`; clamping the page
/// index is left to the caller.
pub fn paginate<T>(items: &[T], query: &str, per_page: u32, page: u32) -> DashboardResult<Page<T>>
where
    T: Searchable + Clone,
{
    if per_page == 0 {
        return Err(DashboardError::BadRequest(
            "per_page must be at least 1".to_string(),
        ));
    }

    let needle = query.to_lowercase();
    let filtered: Vec<&T> = items.iter().filter(|item| item.matches(&needle)).collect();

    let total = filtered.len();
    let total_pages = total.div_ceil(per_page as usize) as u32;

    let data = match page.checked_sub(1) {
        Some(index) => filtered
            .into_iter()
            .skip(index as usize * per_page as usize)
            .take(per_page as usize)
            .cloned()
            .collect(),
        None => Vec::new(),
    };

    Ok(Page {
        data,
        page,
        per_page,
        total,
        total_pages,
    })
}
