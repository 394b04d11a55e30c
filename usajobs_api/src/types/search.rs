//! Response shape of the `/search` endpoint.
//!
//! Every struct is `#[serde(default)]` and every field goes through
//! `null_as_default`, so a missing key and an explicit `null` both decode to
//! the field's zero value.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SearchResponse {
    #[serde(deserialize_with = "super::null_as_default")]
    pub language_code: String,
    /// Echo of the request parameters. Its layout is undocumented.
    #[serde(deserialize_with = "super::null_as_default")]
    pub search_parameters: serde_json::Value,
    #[serde(deserialize_with = "super::null_as_default")]
    pub search_result: SearchResult,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SearchResult {
    /// Number of items in this page.
    #[serde(deserialize_with = "super::null_as_default")]
    pub search_result_count: i64,
    /// Number of items matching the search across all pages.
    #[serde(deserialize_with = "super::null_as_default")]
    pub search_result_count_all: i64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub search_result_items: Vec<SearchResultItem>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub user_area: SearchResultUserArea,
}

/// One job announcement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SearchResultItem {
    #[serde(rename = "MatchedObjectId", deserialize_with = "super::null_as_default")]
    pub matched_object_id: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub matched_object_descriptor: MatchedObjectDescriptor,
    #[serde(deserialize_with = "super::null_as_default")]
    pub relevance_rank: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MatchedObjectDescriptor {
    #[serde(rename = "PositionID", deserialize_with = "super::null_as_default")]
    pub position_id: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub position_title: String,
    #[serde(rename = "PositionURI", deserialize_with = "super::null_as_default")]
    pub position_uri: String,
    #[serde(rename = "ApplyURI", deserialize_with = "super::null_as_default")]
    pub apply_uri: Vec<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub position_location_display: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub position_location: Vec<PositionLocation>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub organization_name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub department_name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub job_category: Vec<JobCategory>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub job_grade: Vec<JobGrade>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub position_schedule: Vec<NamedCode>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub position_offering_type: Vec<NamedCode>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub qualification_summary: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub position_remuneration: Vec<PositionRemuneration>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub position_start_date: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub position_end_date: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub publication_start_date: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub application_close_date: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub position_formatted_description: Vec<PositionFormattedDescription>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub user_area: UserArea,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PositionLocation {
    #[serde(deserialize_with = "super::null_as_default")]
    pub location_name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub country_code: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub country_sub_division_code: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub city_name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub longitude: f64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub latitude: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct JobCategory {
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct JobGrade {
    #[serde(deserialize_with = "super::null_as_default")]
    pub code: String,
}

/// A `{Name, Code}` pair, used for schedules, offering types, and
/// applicant eligibility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct NamedCode {
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub code: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PositionRemuneration {
    #[serde(deserialize_with = "super::null_as_default")]
    pub minimum_range: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub maximum_range: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub rate_interval_code: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PositionFormattedDescription {
    #[serde(deserialize_with = "super::null_as_default")]
    pub content: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub label: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub label_description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UserArea {
    #[serde(deserialize_with = "super::null_as_default")]
    pub details: UserAreaDetails,
    #[serde(deserialize_with = "super::null_as_default")]
    pub is_radial_search: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UserAreaDetails {
    #[serde(deserialize_with = "super::null_as_default")]
    pub major_duties: Vec<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub education: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub requirements: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub evaluations: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub how_to_apply: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub what_to_expect_next: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub required_documents: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub benefits: String,
    #[serde(rename = "BenefitsUrl", deserialize_with = "super::null_as_default")]
    pub benefits_url: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub other_information: String,
    /// Passed through as sent; the element type is not documented.
    #[serde(deserialize_with = "super::null_as_default")]
    pub key_requirements: Vec<serde_json::Value>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub job_summary: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub who_may_apply: NamedCode,
    #[serde(deserialize_with = "super::null_as_default")]
    pub low_grade: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub high_grade: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub sub_agency_name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub organization_codes: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SearchResultUserArea {
    #[serde(deserialize_with = "super::null_as_default")]
    pub refiners: Refiners,
    #[serde(deserialize_with = "super::null_as_default")]
    pub number_of_pages: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub is_radial_search: bool,
}

/// Facet counts for narrowing a search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Refiners {
    #[serde(deserialize_with = "super::null_as_default")]
    pub organization: Vec<Refinement>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub grade_bucket: Vec<Refinement>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub salary_bucket: Vec<Refinement>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub position_offering_type_code: Vec<Refinement>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub position_schedule_type_code: Vec<Refinement>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub job_category_code: Vec<Refinement>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Refinement {
    #[serde(deserialize_with = "super::null_as_default")]
    pub refinement_name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub refinement_count: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub refinement_token: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub refinement_value: String,
}

impl MatchedObjectDescriptor {
    /// First listed salary range, formatted as `"min-max interval"`.
    pub fn salary_range(&self) -> Option<String> {
        self.position_remuneration.first().map(|r| {
            format!("{}-{} {}", r.minimum_range, r.maximum_range, r.description)
                .trim_end()
                .to_string()
        })
    }
}
