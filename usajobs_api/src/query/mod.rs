mod common;
pub use self::common::{Query, QueryParams, QueryValue, DEFAULT_DELIMITER};

mod codelist;
pub use self::codelist::CodeListQuery;

mod search;
pub use self::search::{SearchQuery, SearchSortDirection, WhoMayApply};
