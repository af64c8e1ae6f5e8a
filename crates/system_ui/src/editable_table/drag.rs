//! Row drag tracking for native HTML drag-and-drop.

use table_core::{Record, TableAction};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Source and hovered row of an in-flight row drag.
pub(crate) struct RowDrag {
    source: Option<usize>,
    target: Option<usize>,
}

impl RowDrag {
    /// A drag handle started dragging the row at `index`.
    pub(crate) fn start(&mut self, index: usize) {
        self.source = Some(index);
        self.target = Some(index);
    }

    /// The pointer moved over the row at `index`. Returns whether a drop is possible.
    pub(crate) fn hover(&mut self, index: usize) -> bool {
        if self.source.is_none() {
            return false;
        }
        self.target = Some(index);
        true
    }

    /// Row currently under the pointer while dragging.
    pub(crate) fn target(&self) -> Option<usize> {
        self.source.and(self.target)
    }

    /// Whether `index` is the row being dragged.
    pub(crate) fn is_source(&self, index: usize) -> bool {
        self.source == Some(index)
    }

    /// The row was dropped on `index`; ends the drag and yields the reorder to dispatch.
    pub(crate) fn drop_on(&mut self, index: usize) -> Option<TableAction<Record>> {
        let source = self.source.take()?;
        self.target = None;
        Some(TableAction::ReorderRow {
            previous_index: source,
            current_index: index,
        })
    }

    /// The drag ended without a drop.
    pub(crate) fn cancel(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn drop_yields_reorder_from_source_to_target() {
        let mut drag = RowDrag::default();
        drag.start(0);
        assert!(drag.hover(2));
        assert_eq!(drag.target(), Some(2));
        assert_eq!(
            drag.drop_on(2),
            Some(TableAction::ReorderRow {
                previous_index: 0,
                current_index: 2,
            })
        );
        assert_eq!(drag, RowDrag::default());
    }

    #[test]
    fn hover_and_drop_without_drag_are_ignored() {
        let mut drag = RowDrag::default();
        assert!(!drag.hover(1));
        assert_eq!(drag.target(), None);
        assert_eq!(drag.drop_on(1), None);
    }

    #[test]
    fn cancel_clears_the_drag() {
        let mut drag = RowDrag::default();
        drag.start(3);
        assert!(drag.is_source(3));
        drag.cancel();
        assert!(!drag.is_source(3));
        assert_eq!(drag.drop_on(0), None);
    }
}
