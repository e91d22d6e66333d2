//! Sparse-fieldset filter query parameters from record types.
//!
//! A record type derives [`FilterFields`] to get a compile-time field
//! table; a [`Builder`] turns that table into a single query-string
//! parameter naming the fields the caller wants back, e.g.
//! `filter=name,address*street,address*city`. Only field names travel:
//! values are never serialized and the string is not percent-encoded
//! (that is the caller's job).
//!
//! ```
//! use fieldfilter::{Builder, FilterFields, Options};
//!
//! #[derive(FilterFields)]
//! struct Address {
//!     pub street: String,
//!     pub city: String,
//! }
//!
//! #[derive(FilterFields)]
//! struct User {
//!     pub name: String,
//!     #[filter(rename = "username")]
//!     pub login: String,
//!     #[filter(nested)]
//!     pub address: Address,
//! }
//!
//! let builder = Builder::new(Options::default());
//! assert_eq!(
//!     builder.query_string::<User>(),
//!     "filter=name,username,address*street,address*city",
//! );
//! ```

pub mod node;
pub mod query;
pub mod repr;
pub mod resolve;
pub mod traits;

pub use fieldfilter_derive::FilterFields;

pub use crate::{
    query::{Builder, DEFAULT_DELIMITER, DEFAULT_FIELD_DELIMITER, DEFAULT_PARAM_KEY, Options},
    repr::StructureRepr,
    traits::FilterFields,
};
