//! Card catalog: card records, colors, predicates, and the read-only index.
//!
//! ## Key Types
//!
//! - `Card`: Static card data keyed by name
//! - `Color` / `ColorIdentity`: The five colors and order-free subsets of them
//! - `CardFilter`: Predicate combinators over card attributes
//! - `CatalogIndex`: Name lookup and filtering, loaded from MTGJSON
//!
//! ## Basic Lands
//!
//! Every pool in the system excludes basic lands, so the index rejects them
//! from filter results unless a filter explicitly opts in.

pub mod color;
pub mod definition;
pub mod filter;
pub mod loader;
pub mod registry;

pub use color::{Color, ColorIdentity};
pub use definition::{Card, BASIC_SUPERTYPE, LEGAL, LEGENDARY_SUPERTYPE};
pub use filter::CardFilter;
pub use loader::load_catalog;
pub use registry::CatalogIndex;
