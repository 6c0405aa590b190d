//! Previous-element shadow maintenance for list variables.

use std::collections::HashMap;
use std::hash::Hash;

/// Maintains the previous-element shadow of every assigned list element.
///
/// The supply mirrors the per-entity element lists and keeps, for each
/// element, a link to the element right before it (`None` for a list head).
/// After an element move, only the neighborhoods of the removal gap and the
/// insertion point are relinked; the rest of the links stay untouched.
///
/// Same-entity moves need an index correction: inserting at a destination
/// below the source shifts the removal gap up by one, so the element that
/// followed the moved one now sits at `source_index + 1` rather than
/// `source_index`.
#[derive(Debug, Clone)]
pub struct PreviousElementSupply<E>
where
    E: Copy + Eq + Hash,
{
    /// Mirror of the per-entity element lists.
    lists: Vec<Vec<E>>,
    /// Previous-element link per assigned element. `None` means list head.
    previous: HashMap<E, Option<E>>,
}

impl<E> PreviousElementSupply<E>
where
    E: Copy + Eq + Hash,
{
    /// Creates a supply for the given number of list-owning entities.
    pub fn new(entity_count: usize) -> Self {
        Self {
            lists: vec![Vec::new(); entity_count],
            previous: HashMap::new(),
        }
    }

    /// Replaces one entity's list and rebuilds its links from scratch.
    ///
    /// # Panics
    ///
    /// Panics if `entity_idx` is out of bounds.
    pub fn reset_entity(&mut self, entity_idx: usize, elements: &[E]) {
        for elem in &self.lists[entity_idx] {
            self.previous.remove(elem);
        }
        self.lists[entity_idx] = elements.to_vec();
        self.relink_from(entity_idx, 0);
    }

    /// Previous-element shadow of an element.
    ///
    /// Returns `None` when the element is not assigned to any list,
    /// `Some(None)` when it is a list head.
    pub fn previous_element(&self, element: &E) -> Option<Option<E>> {
        self.previous.get(element).copied()
    }

    /// Returns the number of entities.
    pub fn entity_count(&self) -> usize {
        self.lists.len()
    }

    /// Returns the length of one entity's list.
    pub fn list_len(&self, entity_idx: usize) -> usize {
        self.lists[entity_idx].len()
    }

    /// Applies an element move to the mirror and repairs the affected links.
    ///
    /// The element at `(source_entity, source_index)` is removed and inserted
    /// at `(dest_entity, dest_index)`, where `dest_index` is the position in
    /// the destination list after the removal already took effect.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds for its list.
    pub fn after_element_moved(
        &mut self,
        source_entity: usize,
        source_index: usize,
        dest_entity: usize,
        dest_index: usize,
    ) {
        let elem = self.lists[source_entity].remove(source_index);
        self.lists[dest_entity].insert(dest_index, elem);

        // Relink the moved element and its new successor.
        self.relink_at(dest_entity, dest_index);
        self.relink_at(dest_entity, dest_index + 1);

        // Relink the element that closed the removal gap. A same-entity
        // insert below the source shifts the gap up by one.
        let gap_index = if source_entity == dest_entity && source_index > dest_index {
            source_index + 1
        } else {
            source_index
        };
        self.relink_at(source_entity, gap_index);
    }

    /// Recomputes the link of the element at one position, if it exists.
    fn relink_at(&mut self, entity_idx: usize, list_idx: usize) {
        let list = &self.lists[entity_idx];
        if list_idx >= list.len() {
            return;
        }
        let elem = list[list_idx];
        let prev = if list_idx == 0 {
            None
        } else {
            Some(list[list_idx - 1])
        };
        self.previous.insert(elem, prev);
    }

    /// Recomputes links for every position at or after `start`.
    fn relink_from(&mut self, entity_idx: usize, start: usize) {
        for idx in start..self.lists[entity_idx].len() {
            self.relink_at(entity_idx, idx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supply() -> PreviousElementSupply<usize> {
        let mut supply = PreviousElementSupply::new(2);
        supply.reset_entity(0, &[10, 11, 12, 13]);
        supply.reset_entity(1, &[20, 21]);
        supply
    }

    fn assert_links(supply: &PreviousElementSupply<usize>, entity: usize, expected: &[usize]) {
        // Every element's link must match the mirror list order.
        for (idx, elem) in expected.iter().enumerate() {
            let want = if idx == 0 {
                None
            } else {
                Some(expected[idx - 1])
            };
            assert_eq!(
                supply.previous_element(elem),
                Some(want),
                "wrong previous link for element {elem} in entity {entity}"
            );
        }
        assert_eq!(supply.list_len(entity), expected.len());
    }

    #[test]
    fn initial_links() {
        let supply = supply();
        assert_links(&supply, 0, &[10, 11, 12, 13]);
        assert_links(&supply, 1, &[20, 21]);
        assert_eq!(supply.previous_element(&99), None);
    }

    #[test]
    fn same_entity_backward_move() {
        // Move 12 from index 2 to index 0: [12, 10, 11, 13].
        let mut supply = supply();
        supply.after_element_moved(0, 2, 0, 0);
        assert_links(&supply, 0, &[12, 10, 11, 13]);
    }

    #[test]
    fn same_entity_forward_move() {
        // Move 10 from index 0 to index 2: [11, 12, 10, 13].
        let mut supply = supply();
        supply.after_element_moved(0, 0, 0, 2);
        assert_links(&supply, 0, &[11, 12, 10, 13]);
    }

    #[test]
    fn move_to_head_becomes_headless() {
        let mut supply = supply();
        supply.after_element_moved(0, 3, 0, 0);
        assert_eq!(supply.previous_element(&13), Some(None));
        assert_links(&supply, 0, &[13, 10, 11, 12]);
    }

    #[test]
    fn move_to_last_index() {
        // Move 10 to the end of its own list: [11, 12, 13, 10].
        let mut supply = supply();
        supply.after_element_moved(0, 0, 0, 3);
        assert_links(&supply, 0, &[11, 12, 13, 10]);
        assert_eq!(supply.previous_element(&10), Some(Some(13)));
    }

    #[test]
    fn cross_entity_move() {
        // Move 11 from entity 0 index 1 to entity 1 index 1.
        let mut supply = supply();
        supply.after_element_moved(0, 1, 1, 1);
        assert_links(&supply, 0, &[10, 12, 13]);
        assert_links(&supply, 1, &[20, 11, 21]);
    }

    #[test]
    fn cross_entity_move_to_empty_tail() {
        let mut supply = supply();
        supply.after_element_moved(0, 0, 1, 2);
        assert_links(&supply, 1, &[20, 21, 10]);
        assert_eq!(supply.previous_element(&10), Some(Some(21)));
    }

    #[test]
    fn adjacent_swap_via_move() {
        // Move 11 one position back: [11, 10, 12, 13].
        let mut supply = supply();
        supply.after_element_moved(0, 1, 0, 0);
        assert_links(&supply, 0, &[11, 10, 12, 13]);
    }
}
