//! Row Selection
//!
//! Ordered set of checked archive ids. Order is kept because batch actions
//! issue their calls in the order rows were checked.

use crate::models::{Archive, ArchiveId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    ids: Vec<ArchiveId>,
}

impl Selection {
    pub fn ids(&self) -> &[ArchiveId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: ArchiveId) -> bool {
        self.ids.contains(&id)
    }

    pub fn toggle(&mut self, id: ArchiveId) {
        if let Some(pos) = self.ids.iter().position(|&i| i == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id);
        }
    }

    /// True when every row of `rows` is selected (false for an empty page)
    pub fn covers(&self, rows: &[Archive]) -> bool {
        !rows.is_empty() && rows.iter().all(|r| self.contains(r.id))
    }

    /// Header checkbox: select the whole page, or clear it if already covered
    pub fn toggle_page(&mut self, rows: &[Archive]) {
        if self.covers(rows) {
            self.ids.retain(|id| !rows.iter().any(|r| r.id == *id));
        } else {
            for row in rows {
                if !self.contains(row.id) {
                    self.ids.push(row.id);
                }
            }
        }
    }

    /// Drop ids no longer present in the loaded page
    pub fn retain_visible(&mut self, rows: &[Archive]) {
        self.ids.retain(|id| rows.iter().any(|r| r.id == *id));
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: ArchiveId) -> Archive {
        Archive {
            id,
            title: format!("Archive {}", id),
            thumb: String::new(),
            module_name: "Article".to_string(),
            category_title: String::new(),
        }
    }

    #[test]
    fn test_toggle_keeps_check_order() {
        let mut sel = Selection::default();
        sel.toggle(3);
        sel.toggle(1);
        sel.toggle(2);
        sel.toggle(1);
        assert_eq!(sel.ids(), &[3, 2]);
    }

    #[test]
    fn test_toggle_page() {
        let rows = vec![row(1), row(2), row(3)];
        let mut sel = Selection::default();
        sel.toggle(2);

        sel.toggle_page(&rows);
        assert_eq!(sel.ids(), &[2, 1, 3]);
        assert!(sel.covers(&rows));

        sel.toggle_page(&rows);
        assert!(sel.is_empty());
        assert!(!sel.covers(&[]));
    }

    #[test]
    fn test_retain_visible() {
        let mut sel = Selection::default();
        sel.toggle(1);
        sel.toggle(9);
        sel.retain_visible(&[row(1), row(2)]);
        assert_eq!(sel.ids(), &[1]);
    }
}
