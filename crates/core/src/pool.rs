//! Entity pool - fixed-capacity structure-of-arrays store
//!
//! Live entities always occupy slots `[0, len)`. Deletion is a swap-remove:
//! the last live entity moves into the freed slot, so **indices are not stable
//! identities**. An index is only meaningful until the next deletion.
//!
//! Storage is inline (`ArrayVec`), so creation and deletion never allocate.

use arrayvec::ArrayVec;

use crate::entity::{EntityKind, Payload};
use crate::types::{Vec2, ENTITY_CAPACITY};

/// Mutable view of one pool slot.
#[derive(Debug)]
pub struct EntityMut<'a> {
    pub position: &'a mut Vec2,
    pub payload: &'a mut Payload,
}

/// Fixed-capacity entity store; parallel position and payload columns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntityPool {
    positions: ArrayVec<Vec2, ENTITY_CAPACITY>,
    payloads: ArrayVec<Payload, ENTITY_CAPACITY>,
}

impl EntityPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.positions.is_full()
    }

    pub fn capacity(&self) -> usize {
        ENTITY_CAPACITY
    }

    /// Allocate the next free slot and return its index.
    ///
    /// # Panics
    ///
    /// Panics when the pool already holds [`ENTITY_CAPACITY`] entities.
    pub fn create(&mut self, position: Vec2, payload: Payload) -> usize {
        assert!(
            !self.is_full(),
            "entity pool exhausted: capacity is {}",
            ENTITY_CAPACITY
        );
        let index = self.positions.len();
        self.positions.push(position);
        self.payloads.push(payload);
        index
    }

    /// Remove the entity at `index`, moving the last live entity into its slot.
    ///
    /// # Panics
    ///
    /// Panics on an empty pool or an index past the live range.
    pub fn delete(&mut self, index: usize) {
        assert!(!self.is_empty(), "delete from an empty entity pool");
        assert!(
            index < self.len(),
            "entity index {} out of range (len {})",
            index,
            self.len()
        );

        if index + 1 == self.len() {
            self.positions.pop();
            self.payloads.pop();
        } else {
            self.positions.swap_remove(index);
            self.payloads.swap_remove(index);
        }
    }

    pub fn position(&self, index: usize) -> Vec2 {
        self.positions[index]
    }

    pub fn payload(&self, index: usize) -> &Payload {
        &self.payloads[index]
    }

    pub fn kind(&self, index: usize) -> EntityKind {
        self.payloads[index].kind()
    }

    pub fn get_mut(&mut self, index: usize) -> EntityMut<'_> {
        EntityMut {
            position: &mut self.positions[index],
            payload: &mut self.payloads[index],
        }
    }

    /// Live entities in pool order.
    pub fn iter(&self) -> impl Iterator<Item = (Vec2, &Payload)> + '_ {
        self.positions.iter().copied().zip(self.payloads.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_stay_in_lockstep_after_swap_remove() {
        let mut pool = EntityPool::new();
        pool.create(Vec2::new(0, 0), Payload::bomb(1));
        pool.create(Vec2::new(1, 0), Payload::bomb(2));
        pool.create(Vec2::new(2, 0), Payload::bomb(3));

        pool.delete(0);

        assert_eq!(pool.positions.len(), pool.payloads.len());
        assert_eq!(pool.position(0), Vec2::new(2, 0));
        assert_eq!(pool.payload(0), &Payload::bomb(3));
    }

    #[test]
    #[should_panic(expected = "empty entity pool")]
    fn delete_from_empty_pool_panics() {
        EntityPool::new().delete(0);
    }
}
