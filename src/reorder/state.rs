use crate::foundation::error::{ChartPathError, ChartPathResult};

/// Where a drag-to-reorder gesture currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum DragState {
    /// No item is held.
    #[default]
    Idle,
    /// Item `index` is held and displaced by `offset` along the list axis.
    Dragging {
        /// Index of the held item.
        index: usize,
        /// Displacement from the item's slot.
        offset: f64,
    },
    /// Item `index` is animating back from `offset` to its slot.
    SnappingBack {
        /// Index of the released item.
        index: usize,
        /// Displacement the animation starts from.
        offset: f64,
    },
}

/// Discrete gesture input fed to [`ReorderList::apply`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum DragEvent {
    /// Pick up the item at `index`.
    Start {
        /// Item to pick up.
        index: usize,
    },
    /// Move the held item by `delta`.
    Move {
        /// Displacement since the previous event.
        delta: f64,
    },
    /// Let go; `item_extent` is the slot size used to find the drop slot.
    Release {
        /// Size of one slot along the list axis.
        item_extent: f64,
    },
    /// Abort the drag.
    Cancel,
    /// The snap-back animation finished.
    Settled,
}

/// Result of applying one event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// State before the event.
    pub from: DragState,
    /// State after the event.
    pub to: DragState,
    /// `(from_index, to_index)` when the release reordered the list.
    pub moved: Option<(usize, usize)>,
}

/// A list plus its drag state, mutated only through [`ReorderList::apply`].
#[derive(Clone, Debug)]
pub struct ReorderList<T> {
    items: Vec<T>,
    state: DragState,
}

impl<T> ReorderList<T> {
    /// Wrap `items` in an idle list.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            state: DragState::Idle,
        }
    }

    /// Items in their current order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the list, returning the items in their current order.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Current drag state.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Visual displacement of the item at `index` (non-zero only for the held item).
    pub fn offset_of(&self, index: usize) -> f64 {
        match self.state {
            DragState::Dragging { index: i, offset } | DragState::SnappingBack { index: i, offset }
                if i == index =>
            {
                offset
            }
            _ => 0.0,
        }
    }

    /// Apply one gesture event.
    ///
    /// Events that make no sense in the current state are rejected and leave
    /// both the items and the state untouched.
    pub fn apply(&mut self, event: DragEvent) -> ChartPathResult<Transition> {
        let from = self.state;
        let (to, moved) = match (from, event) {
            (DragState::Idle, DragEvent::Start { index }) => {
                if index >= self.items.len() {
                    return Err(ChartPathError::reorder(format!(
                        "start index {index} out of range for {} items",
                        self.items.len()
                    )));
                }
                (DragState::Dragging { index, offset: 0.0 }, None)
            }
            (DragState::Dragging { index, offset }, DragEvent::Move { delta }) => {
                if !delta.is_finite() {
                    return Err(ChartPathError::validation(format!(
                        "drag delta must be finite, got {delta}"
                    )));
                }
                (
                    DragState::Dragging {
                        index,
                        offset: offset + delta,
                    },
                    None,
                )
            }
            (DragState::Dragging { index, offset }, DragEvent::Release { item_extent }) => {
                let target = drop_target(index, offset, item_extent, self.items.len())?;
                if target == index {
                    (DragState::SnappingBack { index, offset }, None)
                } else {
                    let item = self.items.remove(index);
                    self.items.insert(target, item);
                    (DragState::Idle, Some((index, target)))
                }
            }
            (DragState::Dragging { index, offset }, DragEvent::Cancel) => {
                (DragState::SnappingBack { index, offset }, None)
            }
            (DragState::SnappingBack { .. }, DragEvent::Settled) => (DragState::Idle, None),
            (state, event) => {
                tracing::debug!(?state, ?event, "rejected drag event");
                return Err(ChartPathError::reorder(format!(
                    "event {event:?} not accepted in state {state:?}"
                )));
            }
        };

        self.state = to;
        tracing::debug!(?from, ?to, ?moved, "drag transition");
        Ok(Transition { from, to, moved })
    }
}

/// Slot the held item lands in: its own index shifted by whole extents of offset.
pub fn drop_target(index: usize, offset: f64, item_extent: f64, len: usize) -> ChartPathResult<usize> {
    if !item_extent.is_finite() || item_extent <= 0.0 {
        return Err(ChartPathError::validation(format!(
            "item extent must be finite and > 0, got {item_extent}"
        )));
    }
    if len == 0 {
        return Err(ChartPathError::reorder("drop target requested for an empty list"));
    }
    let slots = (offset / item_extent).round();
    let target = (index as f64 + slots).clamp(0.0, (len - 1) as f64);
    Ok(target as usize)
}

#[cfg(test)]
#[path = "../../tests/unit/reorder/state.rs"]
mod tests;
