//! Array length truncation.
//!
//! Shrinking an array's length walks the array's own properties and deletes
//! every property whose name is a canonical array index at or beyond the new
//! length. The deletion set is discovered through a for-in snapshot, so the
//! walk is stable while the store mutates underneath it.

use crate::error::JsError;
use crate::intern::Name;
use crate::iter::{new_iterator, next_iterator};
use crate::object::{ExoticKind, JsObjectRef};

/// Parse `name` as a canonical array index.
///
/// Returns the index only if its canonical decimal rendering is exactly
/// `name`: "01", "1.0" or " 1" are plain property names, never indices.
fn canonical_index(name: &Name) -> Option<u32> {
    let index: u32 = name.as_str().parse().ok()?;
    if index.to_string() == name.as_str() {
        Some(index)
    } else {
        None
    }
}

/// Set an array's length, deleting out-of-range indexed properties when the
/// array shrinks.
///
/// Growing (or keeping) the length only updates the stored value; no
/// properties are scanned. Errors with a TypeError when `obj` is not an
/// array object.
pub fn resize_array(obj: &JsObjectRef, new_length: u32) -> Result<(), JsError> {
    let length = match obj.borrow().exotic {
        ExoticKind::Array { length } => length,
        _ => return Err(JsError::type_error("not an array")),
    };

    if new_length < length {
        let io = new_iterator(obj, true);
        while let Some(name) = next_iterator(&io)? {
            if let Some(index) = canonical_index(&name) {
                if index >= new_length {
                    obj.borrow_mut().delete_property(&name);
                }
            }
        }
    }

    obj.borrow_mut().exotic = ExoticKind::Array { length: new_length };
    Ok(())
}
