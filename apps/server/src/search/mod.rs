//! Search request compiler.
//!
//! Everything between the HTTP surface and the index provider:
//! - `params`: request/response shapes
//! - `escape` + `filter`: filter expression composition
//! - `planner`: pagination, projection, and sort resolution
//! - `gateway`: the provider seam (trait)
//! - `azure`: REST adapter for the managed index

pub mod azure;
pub mod escape;
pub mod filter;
pub mod gateway;
pub mod params;
pub mod planner;

pub use azure::AzureSearchGateway;
pub use gateway::{SearchGateway, SearchPage, SUGGESTION_LIMIT};
pub use params::{PagedResponse, SearchRequest, SortOrder};
pub use planner::{CompiledQuery, SELECT_FIELDS};
