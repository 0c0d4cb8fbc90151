//! List Query
//!
//! Pagination and sort state for the recycle table, and the request
//! parameters derived from it.

use serde::Serialize;

pub const PAGE_SIZES: &[u32] = &[10, 20, 50, 100];

/// Sort applied to the ID column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdSort {
    Ascend,
    Descend,
}

impl IdSort {
    fn as_order(self) -> &'static str {
        match self {
            IdSort::Ascend => "id asc",
            IdSort::Descend => "id desc",
        }
    }
}

/// Table paging/sorting state (1-based page)
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub current: u32,
    pub page_size: u32,
    pub sort: Option<IdSort>,
}

impl ListQuery {
    pub fn new(page_size: u32) -> Self {
        Self {
            current: 1,
            page_size: normalize_page_size(page_size),
            sort: None,
        }
    }

    /// Query parameters sent to the list endpoint
    pub fn params(&self) -> ListParams {
        ListParams {
            current: self.current.max(1),
            page_size: self.page_size,
            recycle: true,
            order: self.sort.map(IdSort::as_order),
        }
    }

    pub fn reset_page(&mut self) {
        self.current = 1;
    }

    pub fn set_page_size(&mut self, page_size: u32) {
        self.page_size = normalize_page_size(page_size);
        self.current = 1;
    }

    /// Cycle none -> ascending -> descending -> none
    pub fn toggle_sort(&mut self) {
        self.sort = match self.sort {
            None => Some(IdSort::Ascend),
            Some(IdSort::Ascend) => Some(IdSort::Descend),
            Some(IdSort::Descend) => None,
        };
        self.current = 1;
    }

    /// Jump to `page`, clamped to the pages available for `total` rows
    pub fn go_to(&mut self, page: u32, total: u64) {
        self.current = page.clamp(1, last_page(total, self.page_size));
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(20)
    }
}

/// Serialized list request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub current: u32,
    pub page_size: u32,
    pub recycle: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<&'static str>,
}

/// Last page index for `total` rows; an empty table still has page 1
pub fn last_page(total: u64, page_size: u32) -> u32 {
    let size = u64::from(page_size.max(1));
    let pages = total.div_ceil(size).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

fn normalize_page_size(page_size: u32) -> u32 {
    if PAGE_SIZES.contains(&page_size) {
        page_size
    } else {
        20
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_always_request_recycled() {
        let sorts = [None, Some(IdSort::Ascend), Some(IdSort::Descend)];
        for &page_size in PAGE_SIZES {
            for current in [0, 1, 2, 17] {
                for sort in sorts {
                    let query = ListQuery { current, page_size, sort };
                    let params = query.params();
                    assert!(params.recycle, "{:?}", query);

                    let json = serde_json::to_value(&params).unwrap();
                    assert_eq!(json["recycle"], true);
                }
            }
        }
    }

    #[test]
    fn test_params_shape() {
        let mut query = ListQuery::new(50);
        query.toggle_sort();
        query.toggle_sort();
        let json = serde_json::to_value(query.params()).unwrap();

        assert_eq!(json["current"], 1);
        assert_eq!(json["pageSize"], 50);
        assert_eq!(json["order"], "id desc");

        let plain = serde_json::to_value(ListQuery::default().params()).unwrap();
        assert!(plain.get("order").is_none());
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut query = ListQuery::new(10);
        query.current = 4;
        query.set_page_size(100);
        assert_eq!(query.current, 1);
        assert_eq!(query.page_size, 100);

        query.set_page_size(33);
        assert_eq!(query.page_size, 20);
    }

    #[test]
    fn test_go_to_clamps() {
        let mut query = ListQuery::new(10);
        query.go_to(9, 35);
        assert_eq!(query.current, 4);
        query.go_to(0, 35);
        assert_eq!(query.current, 1);
        query.go_to(3, 0);
        assert_eq!(query.current, 1);
    }

    #[test]
    fn test_last_page() {
        assert_eq!(last_page(0, 20), 1);
        assert_eq!(last_page(20, 20), 1);
        assert_eq!(last_page(21, 20), 2);
    }
}
