//! Colorant Suppressor
//! Rewrites the colorant name of a Separation array to the reserved `None`
//! colorant, which makes every mark painted with it invisible.

use lopdf::{Document, Object};
use tracing::{debug, trace};

use crate::types::ColorantReference;

pub const SEPARATION: &[u8] = b"Separation";
pub const NONE_COLORANT: &[u8] = b"None";

/// Returns the colorant name slot of a well-formed Separation array.
///
/// Well-formed means: more than one element, a first element that is the
/// name `Separation`, and a second element that is a name.
pub fn separation_name(array: &[Object]) -> Option<&[u8]> {
    match array {
        [Object::Name(kind), Object::Name(name), ..] if kind.as_slice() == SEPARATION => {
            Some(name.as_slice())
        }
        _ => None,
    }
}

/// Disables a Separation array in place.
///
/// Returns false and leaves `array` untouched when it is not a well-formed
/// Separation array or its colorant is already `None`. Slots past the
/// colorant name are never touched.
pub fn disable(array: &mut [Object]) -> bool {
    match separation_name(array) {
        Some(name) if name != NONE_COLORANT => {}
        _ => return false,
    }
    array[1] = Object::Name(NONE_COLORANT.to_vec());
    true
}

/// Disables the Separation array stored under `reference` in the object pool.
///
/// The array is mutated through its own object identity so that a later save
/// writes the new name.
pub fn disable_in_document(doc: &mut Document, reference: ColorantReference) -> bool {
    match doc.get_object_mut(reference.object_id()) {
        Ok(Object::Array(array)) => {
            let disabled = disable(array);
            if disabled {
                debug!("Disabled colorant {}", reference);
            } else {
                trace!("{} is not a Separation array", reference);
            }
            disabled
        }
        Ok(_) => {
            trace!("{} is not an array", reference);
            false
        }
        Err(e) => {
            debug!("Could not resolve {}: {}", reference, e);
            false
        }
    }
}
