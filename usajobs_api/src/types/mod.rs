use serde::{Deserialize, Deserializer};

mod response;
pub use self::response::ApiResponse;

mod codelist;
pub use self::codelist::{CodeList, CodeListResponse, ValidValue};

mod search;
pub use self::search::{
    JobCategory, JobGrade, MatchedObjectDescriptor, NamedCode, PositionFormattedDescription,
    PositionLocation, PositionRemuneration, Refinement, Refiners, SearchResponse, SearchResult,
    SearchResultItem, SearchResultUserArea, UserArea, UserAreaDetails,
};

/// Decodes an explicit `null` as the field's default, the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
