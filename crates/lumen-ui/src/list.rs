//! Country list container
//!
//! Owns the recyclable rows, lays them out vertically, and translates pointer
//! movement into per-row enter/exit so each row only tracks its own hover
//! flag. Rows removed by a shorter model set are detached, never dropped with
//! a live subscription.

use crate::model::CountryRowModel;
use crate::row::{CountryRow, ROW_HEIGHT, RowClick};
use crate::draw::DrawCmd;
use tracing::debug;

/// Vertical list of country rows.
pub struct CountryList {
    bounds: (f32, f32, f32),
    rows: Vec<CountryRow>,
    hover_row: Option<usize>,
}

impl CountryList {
    /// Create an empty list at the given origin and width.
    pub fn new(x: f32, y: f32, width: f32) -> Self {
        Self {
            bounds: (x, y, width),
            rows: Vec::new(),
            hover_row: None,
        }
    }

    /// Bind the list to a model set, recycling existing rows where possible.
    pub fn set_models(&mut self, models: &[CountryRowModel]) {
        let (x, y, width) = self.bounds;

        // Detach rows that no longer have a model
        for row in self.rows.iter_mut().skip(models.len()) {
            row.detach();
        }
        self.rows.truncate(models.len());

        for (i, model) in models.iter().enumerate() {
            let row_y = y + i as f32 * ROW_HEIGHT;
            if let Some(row) = self.rows.get_mut(i) {
                row.set_bounds(x, row_y, width);
                row.bind(model);
            } else {
                let mut row = CountryRow::new(x, row_y, width);
                row.bind(model);
                row.attach();
                self.rows.push(row);
            }
        }

        // Last row draws no separator
        let last = self.rows.len().saturating_sub(1);
        for (i, row) in self.rows.iter_mut().enumerate() {
            row.set_hide_separator(i == last);
        }

        if self.hover_row.map_or(false, |i| i >= self.rows.len()) {
            self.hover_row = None;
        }

        debug!("country list bound to {} rows", self.rows.len());
    }

    /// Detach every row, e.g. when the list leaves the view hierarchy.
    pub fn clear(&mut self) {
        for row in &mut self.rows {
            row.detach();
        }
        self.rows.clear();
        self.hover_row = None;
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&CountryRow> {
        self.rows.get(index)
    }

    pub fn row_mut(&mut self, index: usize) -> Option<&mut CountryRow> {
        self.rows.get_mut(index)
    }

    pub fn hover_row(&self) -> Option<usize> {
        self.hover_row
    }

    /// Route pointer movement into row enter/exit transitions.
    pub fn handle_move(&mut self, x: f32, y: f32) {
        let hit = self
            .rows
            .iter()
            .position(|row| row.contains(x, y));

        if hit == self.hover_row {
            return;
        }

        if let Some(old) = self.hover_row.and_then(|i| self.rows.get_mut(i)) {
            old.handle_mouse_exit();
        }
        if let Some(new) = hit.and_then(|i| self.rows.get_mut(i)) {
            new.handle_mouse_enter();
        }
        self.hover_row = hit;
    }

    /// Route a click to the row under the pointer.
    pub fn handle_click(&mut self, x: f32, y: f32) -> Option<(usize, RowClick)> {
        let index = self.rows.iter().position(|row| row.contains(x, y))?;
        let click = self.rows[index].handle_click(x, y)?;
        Some((index, click))
    }

    /// Drain model events for every row.
    pub fn pump_events(&mut self) {
        for row in &mut self.rows {
            row.pump_events();
        }
    }

    /// Emit draw commands for the whole list.
    pub fn draw(&self) -> Vec<DrawCmd> {
        self.rows.iter().flat_map(|row| row.draw()).collect()
    }

    pub fn needs_redraw(&self) -> bool {
        self.rows.iter().any(|row| row.needs_redraw())
    }

    pub fn mark_clean(&mut self) {
        for row in &mut self.rows {
            row.mark_clean();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ServerFeature;

    fn models(n: usize) -> Vec<CountryRowModel> {
        (0..n)
            .map(|i| {
                CountryRowModel::new(&format!("c{i}"), &format!("Country {i}"))
                    .with_feature(ServerFeature::P2p)
            })
            .collect()
    }

    #[test]
    fn test_set_models_creates_rows() {
        let mut list = CountryList::new(0.0, 0.0, 320.0);
        list.set_models(&models(3));
        assert_eq!(list.len(), 3);
        assert!(list.row(0).unwrap().is_attached());
    }

    #[test]
    fn test_shrinking_detaches_extra_rows() {
        let mut list = CountryList::new(0.0, 0.0, 320.0);
        let three = models(3);
        list.set_models(&three);

        let two = models(2);
        list.set_models(&two);
        assert_eq!(list.len(), 2);

        // The dropped model has no subscribers left
        assert_eq!(three[2].events().subscriber_count(), 0);
    }

    #[test]
    fn test_recycling_rebinds_rows() {
        let mut list = CountryList::new(0.0, 0.0, 320.0);
        let first = models(2);
        list.set_models(&first);

        let second = models(2);
        list.set_models(&second);

        // Old models fully unsubscribed, new ones bound
        assert_eq!(first[0].events().subscriber_count(), 0);
        assert_eq!(second[0].events().subscriber_count(), 1);
    }

    #[test]
    fn test_move_transitions_hover() {
        let mut list = CountryList::new(0.0, 0.0, 320.0);
        list.set_models(&models(2));

        list.handle_move(10.0, ROW_HEIGHT / 2.0);
        assert_eq!(list.hover_row(), Some(0));
        assert!(list.row(0).unwrap().is_hovered());

        list.handle_move(10.0, ROW_HEIGHT * 1.5);
        assert_eq!(list.hover_row(), Some(1));
        assert!(!list.row(0).unwrap().is_hovered());
        assert!(list.row(1).unwrap().is_hovered());

        list.handle_move(10.0, -50.0);
        assert_eq!(list.hover_row(), None);
        assert!(!list.row(1).unwrap().is_hovered());
    }

    #[test]
    fn test_click_hits_row_under_pointer() {
        let mut list = CountryList::new(0.0, 0.0, 320.0);
        list.set_models(&models(2));

        let hit = list.handle_click(10.0, ROW_HEIGHT * 1.5);
        assert_eq!(hit, Some((1, RowClick::Surface)));
        assert_eq!(list.handle_click(10.0, -50.0), None);
    }

    #[test]
    fn test_only_last_row_hides_separator() {
        let mut list = CountryList::new(0.0, 0.0, 320.0);
        list.set_models(&models(3));

        let per_row: Vec<usize> = (0..3).map(|i| list.row(i).unwrap().draw().len()).collect();
        assert_eq!(per_row[0], per_row[1]);
        assert_eq!(per_row[2], per_row[0] - 1);
    }
}
