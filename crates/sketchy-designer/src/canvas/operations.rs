//! Structural canvas operations: detaching and re-attaching objects, and
//! moving them within the display stack and the shape order.
//!
//! Every operation validates before mutating, so a failed call leaves the
//! canvas exactly as it was.

use std::collections::HashSet;

use sketchy_core::StateError;

use super::{Canvas, DrawingObject, Placement};

const DISPLAY_STACK: &str = "display stack";
const SHAPE_ORDER: &str = "shape order";

fn check_index(id: u64, view: &'static str, index: usize, len: usize) -> Result<(), StateError> {
    if index > len {
        return Err(StateError::IndexOutOfBounds {
            id,
            view,
            index,
            len,
        });
    }
    Ok(())
}

impl Canvas {
    /// Removes an object from the arena and both orderings, returning it with
    /// the placement it had. The selection is cleared if it pointed at it.
    pub fn detach(&mut self, id: u64) -> Result<(DrawingObject, Placement), StateError> {
        let placement = self
            .placement(id)
            .ok_or(StateError::UnknownObject { id })?;
        let mut object = self
            .objects
            .remove(&id)
            .ok_or(StateError::UnknownObject { id })?;

        self.display_order.remove(placement.display_index);
        if let Some(shape_index) = placement.shape_index {
            self.shape_order.remove(shape_index);
        }
        if self.selected_id == Some(id) {
            self.selected_id = None;
        }
        object.selected = false;

        tracing::debug!("Detached object {} from {:?}", id, placement);
        Ok((object, placement))
    }

    /// Checks that `object` could be attached at `placement`.
    pub fn check_attach(&self, object: &DrawingObject, placement: Placement) -> Result<(), StateError> {
        let id = object.id;
        if self.objects.contains_key(&id) {
            return Err(StateError::AlreadyAttached { id });
        }
        check_index(id, DISPLAY_STACK, placement.display_index, self.display_order.len())?;
        match (object.is_curve(), placement.shape_index) {
            (true, None) => Ok(()),
            (false, Some(shape_index)) => {
                check_index(id, SHAPE_ORDER, shape_index, self.shape_order.len())
            }
            _ => Err(StateError::PlacementMismatch { id }),
        }
    }

    /// Puts a detached object back at `placement`; the exact inverse of
    /// [`Canvas::detach`].
    pub fn attach(&mut self, object: DrawingObject, placement: Placement) -> Result<(), StateError> {
        self.check_attach(&object, placement)?;

        let id = object.id;
        self.display_order.insert(placement.display_index, id);
        if let Some(shape_index) = placement.shape_index {
            self.shape_order.insert(shape_index, id);
        }
        self.next_id = self.next_id.max(id + 1);
        self.objects.insert(id, object);

        tracing::debug!("Attached object {} at {:?}", id, placement);
        Ok(())
    }

    /// Moves an attached object to `placement` in both orderings at once.
    pub fn move_to(&mut self, id: u64, placement: Placement) -> Result<(), StateError> {
        let current = self
            .placement(id)
            .ok_or(StateError::UnknownObject { id })?;

        // Indices address the orderings with the object removed and reinserted,
        // so the valid range is 0..len.
        let display_len = self.display_order.len();
        if placement.display_index >= display_len {
            return Err(StateError::IndexOutOfBounds {
                id,
                view: DISPLAY_STACK,
                index: placement.display_index,
                len: display_len,
            });
        }
        match (current.shape_index, placement.shape_index) {
            (None, None) => {}
            (Some(_), Some(shape_index)) if shape_index < self.shape_order.len() => {}
            (Some(_), Some(shape_index)) => {
                return Err(StateError::IndexOutOfBounds {
                    id,
                    view: SHAPE_ORDER,
                    index: shape_index,
                    len: self.shape_order.len(),
                })
            }
            _ => return Err(StateError::PlacementMismatch { id }),
        }

        self.display_order.remove(current.display_index);
        self.display_order.insert(placement.display_index, id);
        if let (Some(from), Some(to)) = (current.shape_index, placement.shape_index) {
            self.shape_order.remove(from);
            self.shape_order.insert(to, id);
        }
        Ok(())
    }

    /// Raises a shape one slot in the display stack.
    ///
    /// The shape order only changes when the next shape in it is also the
    /// very next object on screen (display indices differ by exactly 1).
    /// Returns the placements before and after.
    pub fn raise(&mut self, id: u64) -> Result<(Placement, Placement), StateError> {
        let from = self
            .placement(id)
            .ok_or(StateError::UnknownObject { id })?;
        let mut to = from;

        if let Some(shape_index) = from.shape_index {
            let adjacent = self
                .shape_order
                .get(shape_index + 1)
                .and_then(|&next| self.display_index(next))
                .is_some_and(|next_display| next_display == from.display_index + 1);
            if adjacent {
                to.shape_index = Some(shape_index + 1);
            }
        }
        if from.display_index + 1 < self.display_order.len() {
            to.display_index += 1;
        }

        self.move_to(id, to)?;
        Ok((from, to))
    }

    /// Lowers a shape one slot in the display stack; mirror of [`Canvas::raise`].
    pub fn lower(&mut self, id: u64) -> Result<(Placement, Placement), StateError> {
        let from = self
            .placement(id)
            .ok_or(StateError::UnknownObject { id })?;
        let mut to = from;

        if let Some(shape_index) = from.shape_index.filter(|&index| index > 0) {
            let adjacent = self
                .shape_order
                .get(shape_index - 1)
                .and_then(|&prev| self.display_index(prev))
                .is_some_and(|prev_display| prev_display + 1 == from.display_index);
            if adjacent {
                to.shape_index = Some(shape_index - 1);
            }
        }
        if from.display_index > 0 {
            to.display_index -= 1;
        }

        self.move_to(id, to)?;
        Ok((from, to))
    }

    /// Verifies that the arena, the display stack and the shape order agree:
    /// every object is displayed exactly once, the shape order holds exactly
    /// the non-curve objects, and the selection points at a displayed shape.
    pub fn check_invariants(&self) -> Result<(), StateError> {
        let inconsistent = |reason: String| Err(StateError::Inconsistent { reason });

        let displayed: HashSet<u64> = self.display_order.iter().copied().collect();
        if displayed.len() != self.display_order.len() {
            return inconsistent("display stack contains duplicates".to_string());
        }
        if displayed.len() != self.objects.len() || !self.objects.keys().all(|id| displayed.contains(id)) {
            return inconsistent("display stack does not match the object arena".to_string());
        }

        let ordered: HashSet<u64> = self.shape_order.iter().copied().collect();
        if ordered.len() != self.shape_order.len() {
            return inconsistent("shape order contains duplicates".to_string());
        }
        for (id, object) in &self.objects {
            if object.is_curve() == ordered.contains(id) {
                return inconsistent(format!("object {id} has the wrong shape order membership"));
            }
        }

        if let Some(id) = self.selected_id {
            match self.objects.get(&id) {
                Some(object) if object.selected && !object.is_curve() => {}
                _ => return inconsistent(format!("selection {id} is stale")),
            }
        }
        if let Some(object) = self
            .objects
            .values()
            .find(|object| object.selected && self.selected_id != Some(object.id))
        {
            return inconsistent(format!("object {} is flagged selected", object.id));
        }

        Ok(())
    }
}
