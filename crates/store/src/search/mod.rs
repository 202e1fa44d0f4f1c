//! Filtered property search.
//!
//! A [`PropertyFilter`] is turned into a [`SearchQuery`]: one SQL string with
//! `$n` placeholders plus the positional parameters that fill them. The SQL
//! is assembled from a list of predicates rather than by concatenating
//! keywords, so the `WHERE`/`HAVING`/`AND` connectives and the placeholder
//! numbering are derived in one pass and cannot drift apart.
//!
//! ```
//! use lightbnb_core::UserId;
//! use lightbnb_store::search::{PropertyFilter, SearchQuery, SqlParam};
//!
//! let filter = PropertyFilter {
//!     owner_id: Some(UserId::new(7)),
//!     ..PropertyFilter::default()
//! };
//! let query = SearchQuery::build(&filter, 5);
//!
//! assert!(query.sql().contains("WHERE owner_id = $1"));
//! assert!(query.sql().contains("LIMIT $2"));
//! assert_eq!(query.params(), &[SqlParam::Int(7), SqlParam::BigInt(5)]);
//! ```

mod filter;
mod query;

pub use filter::{DEFAULT_LIMIT, PropertyFilter};
pub use query::{SearchQuery, SqlParam};

pub(crate) use query::bind_params;
