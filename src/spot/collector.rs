//! Colorant Reference Collector
//! Walks the page tree and gathers unique indirect references from every
//! page's `/Resources /ColorSpace` dictionary.

use lopdf::{Dictionary, Document, Object, ObjectId};
use std::collections::HashSet;
use tracing::{debug, instrument};

use crate::types::{ColorantReference, ColorantSet};

/// Collects color space references across all pages of `doc`.
///
/// Pages are visited in document order, and each `ColorSpace` dictionary in
/// its own key order. Pages without usable resources contribute nothing.
#[instrument(skip(doc))]
pub fn collect(doc: &Document) -> ColorantSet {
    let mut set = ColorantSet::new();

    for (page_number, page_id) in doc.get_pages() {
        let Some(resources) = page_resources(doc, page_id) else {
            debug!("Page {} has no resource dictionary, skipping", page_number);
            continue;
        };

        let Some(color_spaces) = color_space_dictionary(doc, resources) else {
            debug!("Page {} has no ColorSpace dictionary", page_number);
            continue;
        };

        for (key, value) in color_spaces.iter() {
            match value {
                Object::Reference(id) => {
                    if set.insert(ColorantReference::from(*id)) {
                        debug!(
                            "Page {}: color space /{} -> {} {} R",
                            page_number,
                            String::from_utf8_lossy(key),
                            id.0,
                            id.1
                        );
                    }
                }
                _ => debug!(
                    "Page {}: inline color space /{} ignored",
                    page_number,
                    String::from_utf8_lossy(key)
                ),
            }
        }
    }

    debug!("Collected {} distinct color space references", set.len());
    set
}

/// Resolves the resource dictionary that applies to a page.
///
/// `Resources` is inheritable, so when the page lacks it the nearest
/// ancestor in the page tree that has one supplies it.
pub fn page_resources(doc: &Document, page_id: ObjectId) -> Option<&Dictionary> {
    let mut visited = HashSet::new();
    let mut node_id = page_id;

    loop {
        if !visited.insert(node_id) {
            return None;
        }
        let node = match doc.get_object(node_id) {
            Ok(Object::Dictionary(dict)) => dict,
            _ => return None,
        };

        if let Ok(resources) = node.get(b"Resources") {
            return resolve_dictionary(doc, resources);
        }

        match node.get(b"Parent") {
            Ok(Object::Reference(parent_id)) => node_id = *parent_id,
            _ => return None,
        }
    }
}

fn color_space_dictionary<'a>(doc: &'a Document, resources: &'a Dictionary) -> Option<&'a Dictionary> {
    resources
        .get(b"ColorSpace")
        .ok()
        .and_then(|entry| resolve_dictionary(doc, entry))
}

fn resolve_dictionary<'a>(doc: &'a Document, object: &'a Object) -> Option<&'a Dictionary> {
    match object {
        Object::Dictionary(dict) => Some(dict),
        Object::Reference(id) => match doc.get_object(*id) {
            Ok(Object::Dictionary(dict)) => Some(dict),
            _ => None,
        },
        _ => None,
    }
}
