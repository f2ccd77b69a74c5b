use image::RgbImage;
use tracing::debug;

use super::data::{default_name, ImageRecord, RecordId};

/// The Collection holds every image collected this session.
/// Insertion order is display order and export order.
///
/// Positions shift when a record is removed; anything that must survive a
/// mutation should hold a `RecordId` and resolve it with `index_of`.
#[derive(Debug, Default)]
pub struct Collection {
    records: Vec<ImageRecord>,
    next_id: u64,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an image and give it a default name based on the new length.
    /// Returns the id of the new record.
    pub fn push(&mut self, image: RgbImage) -> RecordId {
        let id = RecordId(self.next_id);
        self.next_id += 1;

        let name = default_name(self.records.len() + 1);
        debug!(%id, %name, "record added");
        self.records.push(ImageRecord { id, image, name });
        id
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ImageRecord> {
        self.records.get(index)
    }

    pub fn get_by_id(&self, id: RecordId) -> Option<&ImageRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Current position of a record, if it is still in the collection
    pub fn index_of(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    /// Remove the record at `index`; later records move down by one
    pub fn remove(&mut self, index: usize) -> Option<ImageRecord> {
        if index >= self.records.len() {
            return None;
        }
        let record = self.records.remove(index);
        debug!(id = %record.id, index, "record removed");
        Some(record)
    }

    pub fn remove_by_id(&mut self, id: RecordId) -> Option<ImageRecord> {
        let index = self.index_of(id)?;
        self.remove(index)
    }

    /// Replace the name at `index`. Returns false if the index is stale.
    /// Callers are responsible for rejecting empty names.
    pub fn rename(&mut self, index: usize, name: String) -> bool {
        match self.records.get_mut(index) {
            Some(record) => {
                debug!(id = %record.id, old = %record.name, new = %name, "record renamed");
                record.name = name;
                true
            }
            None => false,
        }
    }

    /// Drop every record, returning how many were removed
    pub fn clear(&mut self) -> usize {
        let count = self.records.len();
        self.records.clear();
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn pixel(value: u8) -> RgbImage {
        RgbImage::from_pixel(1, 1, Rgb([value, value, value]))
    }

    fn names(collection: &Collection) -> Vec<&str> {
        collection.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_push_assigns_sequential_names() {
        let mut collection = Collection::new();
        collection.push(pixel(1));
        collection.push(pixel(2));
        assert_eq!(names(&collection), vec!["image_001", "image_002"]);
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut collection = Collection::new();
        let a = collection.push(pixel(1));
        collection.remove_by_id(a);
        let b = collection.push(pixel(2));
        assert_ne!(a, b);
    }

    #[test]
    fn test_remove_shifts_indices() {
        let mut collection = Collection::new();
        collection.push(pixel(1));
        collection.push(pixel(2));
        collection.push(pixel(3));
        collection.rename(0, "A".into());
        collection.rename(1, "B".into());
        collection.rename(2, "C".into());

        let removed = collection.remove(1).unwrap();
        assert_eq!(removed.name, "B");
        assert_eq!(names(&collection), vec!["A", "C"]);

        // Index 1 now refers to what used to be C
        assert!(collection.rename(1, "C2".into()));
        assert_eq!(names(&collection), vec!["A", "C2"]);
    }

    #[test]
    fn test_index_of_follows_removal() {
        let mut collection = Collection::new();
        let a = collection.push(pixel(1));
        let b = collection.push(pixel(2));
        let c = collection.push(pixel(3));

        collection.remove_by_id(b);

        assert_eq!(collection.index_of(a), Some(0));
        assert_eq!(collection.index_of(b), None);
        assert_eq!(collection.index_of(c), Some(1));
    }

    #[test]
    fn test_out_of_range_operations_are_noops() {
        let mut collection = Collection::new();
        collection.push(pixel(1));
        assert!(collection.remove(5).is_none());
        assert!(!collection.rename(1, "x".into()));
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_default_name_follows_current_length() {
        let mut collection = Collection::new();
        collection.push(pixel(1));
        collection.push(pixel(2));
        collection.remove(0);
        collection.push(pixel(3));
        // Length-based naming can repeat a name after a removal
        assert_eq!(names(&collection), vec!["image_002", "image_002"]);
    }

    #[test]
    fn test_clear_reports_count() {
        let mut collection = Collection::new();
        collection.push(pixel(1));
        collection.push(pixel(2));
        assert_eq!(collection.clear(), 2);
        assert!(collection.is_empty());
    }
}
