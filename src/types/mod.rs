// Type definitions shared by the colorant engine, reports and the CLI

use lopdf::ObjectId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Identity of a color space object inside the document's object pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ColorantReference {
    pub object_number: u32,
    pub generation: u16,
}

impl ColorantReference {
    pub fn new(object_number: u32, generation: u16) -> Self {
        Self {
            object_number,
            generation,
        }
    }

    pub fn object_id(&self) -> ObjectId {
        (self.object_number, self.generation)
    }
}

impl From<ObjectId> for ColorantReference {
    fn from((object_number, generation): ObjectId) -> Self {
        Self::new(object_number, generation)
    }
}

impl fmt::Display for ColorantReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} R", self.object_number, self.generation)
    }
}

/// Deduplicated, discovery-ordered set of colorant references
///
/// Insertion order is preserved so listing output is reproducible; a
/// reference already present is never appended again.
#[derive(Debug, Clone, Default)]
pub struct ColorantSet {
    order: Vec<ColorantReference>,
    seen: HashSet<ColorantReference>,
}

impl ColorantSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `reference` unless it was seen before. Returns true when added.
    pub fn insert(&mut self, reference: ColorantReference) -> bool {
        if self.seen.insert(reference) {
            self.order.push(reference);
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColorantReference> {
        self.order.iter()
    }
}

impl<'a> IntoIterator for &'a ColorantSet {
    type Item = &'a ColorantReference;
    type IntoIter = std::slice::Iter<'a, ColorantReference>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

/// A well-formed Separation colorant found in the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotInfo {
    pub reference: ColorantReference,
    /// Name bytes as stored in the object pool, lossily decoded to text
    pub raw_name: String,
    /// Name as the parser decoded it, case preserved
    pub display_name: String,
    /// Normalized (`#20` as space, lower-cased) name used for matching
    pub normalized_name: String,
}

/// What a disable pass did with one colorant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotOutcome {
    pub spot: SpotInfo,
    pub disabled: bool,
}
