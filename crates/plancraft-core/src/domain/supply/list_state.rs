//! Element position tracking for list variables.

use std::collections::HashMap;
use std::hash::Hash;

/// Position of an element within a list variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementPosition {
    /// Index of the entity owning the list.
    pub entity_idx: usize,
    /// Index of the element within that list.
    pub list_idx: usize,
}

/// Tracks which entity owns each list element and at what position.
///
/// Everything is index-based: no domain objects are cloned and lookups return
/// `Copy` values. Mutation goes through `&mut self`, there is no interior
/// mutability.
///
/// # Example
///
/// ```
/// use plancraft_core::domain::{ElementPosition, ListStateSupply};
///
/// let mut supply: ListStateSupply<usize> = ListStateSupply::with_unassigned(3);
/// supply.assign(0, 0, 0);
/// supply.assign(1, 0, 1);
/// supply.assign(2, 1, 0);
///
/// assert_eq!(
///     supply.get_position(&1),
///     Some(ElementPosition { entity_idx: 0, list_idx: 1 })
/// );
/// assert_eq!(supply.unassigned_count(), 0);
/// ```
#[derive(Debug)]
pub struct ListStateSupply<E>
where
    E: Eq + Hash,
{
    position_map: HashMap<E, ElementPosition>,
    unassigned_count: usize,
}

impl<E> Default for ListStateSupply<E>
where
    E: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> ListStateSupply<E>
where
    E: Eq + Hash,
{
    /// Creates an empty supply.
    pub fn new() -> Self {
        Self {
            position_map: HashMap::new(),
            unassigned_count: 0,
        }
    }

    /// Creates a supply with an initial unassigned element count.
    pub fn with_unassigned(count: usize) -> Self {
        Self {
            position_map: HashMap::new(),
            unassigned_count: count,
        }
    }

    /// Resets the supply, forgetting all positions.
    pub fn initialize(&mut self, unassigned_count: usize) {
        self.position_map.clear();
        self.unassigned_count = unassigned_count;
    }

    /// Records that an element sits at a position in an entity's list.
    ///
    /// Decrements the unassigned count when the element was not tracked yet.
    #[inline]
    pub fn assign(&mut self, element: E, entity_idx: usize, list_idx: usize) {
        let pos = ElementPosition {
            entity_idx,
            list_idx,
        };
        let old = self.position_map.insert(element, pos);
        if old.is_none() && self.unassigned_count > 0 {
            self.unassigned_count -= 1;
        }
    }

    /// Removes an element from tracking and increments the unassigned count.
    #[inline]
    pub fn unassign(&mut self, element: &E) -> Option<ElementPosition> {
        let old = self.position_map.remove(element);
        if old.is_some() {
            self.unassigned_count += 1;
        }
        old
    }

    /// Moves an element to a new position.
    ///
    /// Returns true if the position actually changed.
    #[inline]
    pub fn update(&mut self, element: &E, entity_idx: usize, list_idx: usize) -> bool
    where
        E: Clone,
    {
        let new_pos = ElementPosition {
            entity_idx,
            list_idx,
        };
        if let Some(pos) = self.position_map.get_mut(element) {
            if *pos != new_pos {
                *pos = new_pos;
                true
            } else {
                false
            }
        } else {
            // Untracked element counts as a fresh assignment.
            self.position_map.insert(element.clone(), new_pos);
            if self.unassigned_count > 0 {
                self.unassigned_count -= 1;
            }
            true
        }
    }

    /// Full position of an element, if assigned.
    #[inline]
    pub fn get_position(&self, element: &E) -> Option<ElementPosition> {
        self.position_map.get(element).copied()
    }

    /// Owning entity index of an element, if assigned.
    #[inline]
    pub fn get_entity(&self, element: &E) -> Option<usize> {
        self.position_map.get(element).map(|p| p.entity_idx)
    }

    /// Index of an element within its owning list, if assigned.
    #[inline]
    pub fn get_list_index(&self, element: &E) -> Option<usize> {
        self.position_map.get(element).map(|p| p.list_idx)
    }

    /// Returns true if the element is assigned to any list.
    #[inline]
    pub fn is_assigned(&self, element: &E) -> bool {
        self.position_map.contains_key(element)
    }

    /// Number of elements not assigned to any list.
    #[inline]
    pub fn unassigned_count(&self) -> usize {
        self.unassigned_count
    }

    /// Number of assigned elements.
    #[inline]
    pub fn assigned_count(&self) -> usize {
        self.position_map.len()
    }

    /// Iterates over all tracked (element, position) pairs.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&E, &ElementPosition)> {
        self.position_map.iter()
    }

    /// Returns the elements owned by one entity, sorted by list index.
    pub fn elements_for_entity(&self, entity_idx: usize) -> Vec<(&E, usize)>
    where
        E: Clone,
    {
        let mut elements: Vec<(&E, usize)> = self
            .position_map
            .iter()
            .filter(|(_, p)| p.entity_idx == entity_idx)
            .map(|(e, p)| (e, p.list_idx))
            .collect();
        elements.sort_by_key(|(_, idx)| *idx);
        elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_and_lookup() {
        let mut supply: ListStateSupply<usize> = ListStateSupply::with_unassigned(2);
        supply.assign(5, 1, 0);
        assert_eq!(supply.get_entity(&5), Some(1));
        assert_eq!(supply.get_list_index(&5), Some(0));
        assert_eq!(supply.unassigned_count(), 1);
        assert!(!supply.is_assigned(&6));
    }

    #[test]
    fn unassign_restores_count() {
        let mut supply: ListStateSupply<usize> = ListStateSupply::with_unassigned(1);
        supply.assign(0, 0, 0);
        assert_eq!(supply.unassigned_count(), 0);
        let pos = supply.unassign(&0).unwrap();
        assert_eq!(pos.entity_idx, 0);
        assert_eq!(supply.unassigned_count(), 1);
        assert!(supply.unassign(&0).is_none());
    }

    #[test]
    fn update_reports_change() {
        let mut supply: ListStateSupply<usize> = ListStateSupply::new();
        supply.assign(3, 0, 2);
        assert!(!supply.update(&3, 0, 2));
        assert!(supply.update(&3, 1, 0));
        assert_eq!(supply.get_entity(&3), Some(1));
    }

    #[test]
    fn elements_for_entity_sorted() {
        let mut supply: ListStateSupply<usize> = ListStateSupply::new();
        supply.assign(10, 0, 1);
        supply.assign(11, 0, 0);
        supply.assign(12, 1, 0);
        let elements = supply.elements_for_entity(0);
        assert_eq!(elements, vec![(&11, 0), (&10, 1)]);
    }
}
