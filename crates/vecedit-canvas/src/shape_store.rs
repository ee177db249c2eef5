//! Ordered storage for canvas shapes.
//!
//! Insertion order is z-order: the store keeps shapes back to front, so
//! the last inserted shape paints last (topmost) and hit-tests first.
//! Ids are sequential and never reused within a store's lifetime, which
//! keeps the selection cursor stable across removals.

use crate::canvas::DrawingObject;

#[derive(Debug, Clone)]
pub struct ShapeStore {
    objects: Vec<DrawingObject>,
    next_id: u64,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            next_id: 1,
        }
    }

    /// Generates a new unique ID.
    pub fn generate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Appends an object at the top of the z-order.
    pub fn insert(&mut self, object: DrawingObject) {
        self.objects.push(object);
    }

    /// Removes an object by ID and returns it.
    pub fn remove(&mut self, id: u64) -> Option<DrawingObject> {
        let index = self.objects.iter().position(|o| o.id == id)?;
        Some(self.objects.remove(index))
    }

    pub fn get(&self, id: u64) -> Option<&DrawingObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut DrawingObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    /// Iterates in draw order, back to front.
    pub fn iter(&self) -> std::slice::Iter<'_, DrawingObject> {
        self.objects.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, DrawingObject> {
        self.objects.iter_mut()
    }

    /// Iterates shape IDs in draw order.
    pub fn draw_order_iter(&self) -> impl DoubleEndedIterator<Item = u64> + '_ {
        self.objects.iter().map(|o| o.id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn clear(&mut self) {
        self.objects.clear();
    }
}

impl Default for ShapeStore {
    fn default() -> Self {
        Self::new()
    }
}
