//! Ordered property storage for a JavaScript-like object model.
//!
//! Each object's named properties live in an AA tree keyed by interned
//! names, threaded with an intrusive list that preserves declaration order
//! for enumeration. On top of the store sit prototype-chain resolution,
//! for-in iteration (snapshot with a liveness re-check on every advance),
//! and array length truncation.
//!
//! # Example
//!
//! ```
//! use proptree::{Interner, JsObject, JsValue, new_iterator, next_iterator};
//!
//! let mut interner = Interner::new();
//! let obj = JsObject::new();
//! let x = interner.get_or_insert("x");
//! let y = interner.get_or_insert("y");
//! obj.borrow_mut().set_property(&x, JsValue::Number(1.0));
//! obj.borrow_mut().set_property(&y, JsValue::Number(2.0));
//!
//! let io = new_iterator(&obj, true);
//! assert_eq!(next_iterator(&io).unwrap(), Some(x));
//! assert_eq!(next_iterator(&io).unwrap(), Some(y));
//! assert_eq!(next_iterator(&io).unwrap(), None);
//! ```

pub mod array;
pub mod error;
pub mod intern;
pub mod iter;
pub mod object;
pub mod store;
pub mod value;

pub use array::resize_array;
pub use error::JsError;
pub use intern::{Interner, Name};
pub use iter::{new_iterator, next_iterator};
pub use object::{ExoticKind, JsObject, JsObjectRef, get_property, has_property};
pub use store::{PropertyRecord, PropertyStore};
pub use value::{Attributes, JsValue};
