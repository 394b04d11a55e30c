//! Typed client for the USAJobs public REST API.
//!
//! Every call goes through one pipeline: an options value is encoded into
//! query parameters, a GET request is built with the identity headers the
//! API requires, the request is sent on the shared transport, and the JSON
//! body is decoded into the caller's result type.
//!
//! ```no_run
//! # async fn run() -> Result<(), usajobs_api::Error> {
//! use usajobs_api::{Client, SearchQuery};
//!
//! let client = Client::new("me@example.com", "my-api-key")?;
//! let query = SearchQuery::default()
//!     .with_job_category_code("2210")
//!     .with_job_category_code("0854");
//! let resp = client.search(Some(&query)).await?;
//! if resp.is_success() {
//!     println!("{} jobs", resp.data.search_result.search_result_count_all);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod endpoint;
mod errors;
mod query;
pub mod types;
pub use self::client::{Client, ClientBuilder, DEFAULT_BASE_URL, DEFAULT_HOST};
pub use self::endpoint::{CodeListEndpoint, SEARCH_PATH};
pub use self::errors::Error;
pub use self::query::{
    CodeListQuery, Query, QueryParams, QueryValue, SearchQuery, SearchSortDirection, WhoMayApply,
    DEFAULT_DELIMITER,
};
