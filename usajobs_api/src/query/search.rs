use std::str::FromStr;

use crate::Error;

use super::common::{Query, QueryParams, QueryValue, DEFAULT_DELIMITER};

/// Filters accepted by the `/search` endpoint.
///
/// Every field is optional; unset fields and fields holding their zero value
/// are left out of the query string. Multi-value fields are sent as a single
/// `;`-joined parameter.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub keyword: Option<String>,
    pub position_title: Option<String>,
    pub remuneration_minimum_amount: Option<i64>,
    pub remuneration_maximum_amount: Option<i64>,
    pub pay_grade_high: Option<String>,
    pub pay_grade_low: Option<String>,
    pub job_category_codes: Vec<String>,
    pub location_names: Vec<String>,
    pub posting_channels: Vec<String>,
    pub organizations: Vec<String>,
    pub position_offering_type_codes: Vec<String>,
    pub travel_percentage: Option<i64>,
    /// Sent as `PositionSchedule`.
    pub position_schedule_type_codes: Vec<i64>,
    pub relocation_indicator: Option<bool>,
    pub security_clearance_required: Vec<i64>,
    pub supervisory_status: Option<String>,
    /// Days since posting, 0 to 60.
    pub date_posted: Option<i64>,
    pub job_grade_codes: Vec<i64>,
    pub sort_field: Option<String>,
    pub sort_direction: Option<SearchSortDirection>,
    pub page: Option<i64>,
    pub results_per_page: Option<i64>,
    pub who_may_apply: Option<WhoMayApply>,
    /// Miles around `location_names`.
    pub radius: Option<i64>,
    /// `Min` or `Full` response detail.
    pub fields: Option<String>,
    pub hiring_paths: Vec<String>,
    pub position_sensitivity: Vec<i64>,
    pub remote_indicator: Option<bool>,
}

impl Query for SearchQuery {
    fn encode(&self, params: &mut QueryParams) -> Result<(), Error> {
        params
            .optional("Keyword", &self.keyword)?
            .optional("PositionTitle", &self.position_title)?
            .optional(
                "RemunerationMinimumAmount",
                &self.remuneration_minimum_amount,
            )?
            .optional(
                "RemunerationMaximumAmount",
                &self.remuneration_maximum_amount,
            )?
            .optional("PayGradeHigh", &self.pay_grade_high)?
            .optional("PayGradeLow", &self.pay_grade_low)?
            .joined(
                "JobCategoryCode",
                &self.job_category_codes,
                DEFAULT_DELIMITER,
            )?
            .joined("LocationName", &self.location_names, DEFAULT_DELIMITER)?
            .joined("PostingChannel", &self.posting_channels, DEFAULT_DELIMITER)?
            .joined("Organization", &self.organizations, DEFAULT_DELIMITER)?
            .joined(
                "PositionOfferingTypeCode",
                &self.position_offering_type_codes,
                DEFAULT_DELIMITER,
            )?
            .optional("TravelPercentage", &self.travel_percentage)?
            .joined(
                "PositionSchedule",
                &self.position_schedule_type_codes,
                DEFAULT_DELIMITER,
            )?
            .optional("RelocationIndicator", &self.relocation_indicator)?
            .joined(
                "SecurityClearanceRequired",
                &self.security_clearance_required,
                DEFAULT_DELIMITER,
            )?
            .optional("SupervisoryStatus", &self.supervisory_status)?
            .optional("DatePosted", &self.date_posted)?
            .joined("JobGradeCode", &self.job_grade_codes, DEFAULT_DELIMITER)?
            .optional("SortField", &self.sort_field)?
            .optional("SortDirection", &self.sort_direction)?
            .optional("Page", &self.page)?
            .optional("ResultsPerPage", &self.results_per_page)?
            .optional("WhoMayApply", &self.who_may_apply)?
            .optional("Radius", &self.radius)?
            .optional("Fields", &self.fields)?
            .joined("HiringPath", &self.hiring_paths, DEFAULT_DELIMITER)?
            .joined(
                "PositionSensitivity",
                &self.position_sensitivity,
                DEFAULT_DELIMITER,
            )?
            .optional("RemoteIndicator", &self.remote_indicator)?;
        Ok(())
    }
}

impl SearchQuery {
    pub fn with_keyword(mut self, keyword: &str) -> Self {
        self.keyword = Some(keyword.to_string());
        self
    }

    pub fn with_position_title(mut self, position_title: &str) -> Self {
        self.position_title = Some(position_title.to_string());
        self
    }

    pub fn with_remuneration_minimum_amount(mut self, amount: i64) -> Self {
        self.remuneration_minimum_amount = Some(amount);
        self
    }
    pub fn with_remuneration_maximum_amount(mut self, amount: i64) -> Self {
        self.remuneration_maximum_amount = Some(amount);
        self
    }

    pub fn with_pay_grade_low(mut self, grade: &str) -> Self {
        self.pay_grade_low = Some(grade.to_string());
        self
    }
    pub fn with_pay_grade_high(mut self, grade: &str) -> Self {
        self.pay_grade_high = Some(grade.to_string());
        self
    }

    pub fn with_job_category_code(mut self, code: &str) -> Self {
        self.job_category_codes.push(code.to_string());
        self
    }
    pub fn with_job_category_codes(mut self, codes: &[String]) -> Self {
        self.job_category_codes.extend_from_slice(codes);
        self
    }

    pub fn with_location_name(mut self, location: &str) -> Self {
        self.location_names.push(location.to_string());
        self
    }
    pub fn with_location_names(mut self, locations: &[String]) -> Self {
        self.location_names.extend_from_slice(locations);
        self
    }

    pub fn with_posting_channel(mut self, channel: &str) -> Self {
        self.posting_channels.push(channel.to_string());
        self
    }

    pub fn with_organization(mut self, organization: &str) -> Self {
        self.organizations.push(organization.to_string());
        self
    }
    pub fn with_organizations(mut self, organizations: &[String]) -> Self {
        self.organizations.extend_from_slice(organizations);
        self
    }

    pub fn with_position_offering_type_code(mut self, code: &str) -> Self {
        self.position_offering_type_codes.push(code.to_string());
        self
    }
    pub fn with_position_offering_type_codes(mut self, codes: &[String]) -> Self {
        self.position_offering_type_codes.extend_from_slice(codes);
        self
    }

    pub fn with_travel_percentage(mut self, percentage: i64) -> Self {
        self.travel_percentage = Some(percentage);
        self
    }

    pub fn with_position_schedule_type_codes(mut self, codes: &[i64]) -> Self {
        self.position_schedule_type_codes.extend_from_slice(codes);
        self
    }

    pub fn with_relocation_indicator(mut self, relocation: bool) -> Self {
        self.relocation_indicator = Some(relocation);
        self
    }

    pub fn with_security_clearances(mut self, clearances: &[i64]) -> Self {
        self.security_clearance_required.extend_from_slice(clearances);
        self
    }

    pub fn with_supervisory_status(mut self, status: &str) -> Self {
        self.supervisory_status = Some(status.to_string());
        self
    }

    pub fn with_date_posted(mut self, days: i64) -> Self {
        self.date_posted = Some(days);
        self
    }

    pub fn with_job_grade_codes(mut self, codes: &[i64]) -> Self {
        self.job_grade_codes.extend_from_slice(codes);
        self
    }

    pub fn with_sort_field(mut self, field: &str) -> Self {
        self.sort_field = Some(field.to_string());
        self
    }

    pub fn with_sort_direction(mut self, direction: SearchSortDirection) -> Self {
        self.sort_direction = Some(direction);
        self
    }

    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_results_per_page(mut self, results_per_page: i64) -> Self {
        self.results_per_page = Some(results_per_page);
        self
    }

    pub fn with_who_may_apply(mut self, who_may_apply: WhoMayApply) -> Self {
        self.who_may_apply = Some(who_may_apply);
        self
    }

    pub fn with_radius(mut self, miles: i64) -> Self {
        self.radius = Some(miles);
        self
    }

    pub fn with_fields(mut self, fields: &str) -> Self {
        self.fields = Some(fields.to_string());
        self
    }

    pub fn with_hiring_path(mut self, hiring_path: &str) -> Self {
        self.hiring_paths.push(hiring_path.to_string());
        self
    }
    pub fn with_hiring_paths(mut self, hiring_paths: &[String]) -> Self {
        self.hiring_paths.extend_from_slice(hiring_paths);
        self
    }

    pub fn with_position_sensitivity(mut self, codes: &[i64]) -> Self {
        self.position_sensitivity.extend_from_slice(codes);
        self
    }

    pub fn with_remote_indicator(mut self, remote: bool) -> Self {
        self.remote_indicator = Some(remote);
        self
    }
}

/// Sort order for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchSortDirection {
    Asc,
    Desc,
}
impl std::fmt::Display for SearchSortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SearchSortDirection::Asc => "Asc",
                SearchSortDirection::Desc => "Desc",
            }
        )
    }
}
impl FromStr for SearchSortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SearchSortDirection::Asc),
            "desc" | "dsc" => Ok(SearchSortDirection::Desc),
            _ => Err(format!("unknown sort direction: {}", s)),
        }
    }
}
impl QueryValue for SearchSortDirection {
    fn is_empty_value(&self) -> bool {
        false
    }
    fn to_query_value(&self) -> Result<String, String> {
        Ok(self.to_string())
    }
}

/// Applicant eligibility filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhoMayApply {
    All,
    Public,
    Status,
}
impl std::fmt::Display for WhoMayApply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                WhoMayApply::All => "All",
                WhoMayApply::Public => "Public",
                WhoMayApply::Status => "Status",
            }
        )
    }
}
impl FromStr for WhoMayApply {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(WhoMayApply::All),
            "public" => Ok(WhoMayApply::Public),
            "status" => Ok(WhoMayApply::Status),
            _ => Err(format!("unknown applicant group: {}", s)),
        }
    }
}
impl QueryValue for WhoMayApply {
    fn is_empty_value(&self) -> bool {
        false
    }
    fn to_query_value(&self) -> Result<String, String> {
        Ok(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::query::{Query, SearchQuery, SearchSortDirection, WhoMayApply};

    #[test]
    fn test_search_query() {
        insta::assert_snapshot!(
            SearchQuery::default().to_query_params().unwrap().to_query_string(),
            @""
        );

        insta::assert_snapshot!(
            SearchQuery::default()
                .with_keyword("software")
                .with_page(2)
                .to_query_params()
                .unwrap()
                .to_query_string(),
            @"Keyword=software&Page=2"
        );

        insta::assert_snapshot!(
            SearchQuery::default()
                .with_job_category_code("2210")
                .with_job_category_code("0854")
                .with_who_may_apply(WhoMayApply::Public)
                .with_sort_direction(SearchSortDirection::Desc)
                .to_query_params()
                .unwrap()
                .to_query_string(),
            @"JobCategoryCode=2210%3B0854&SortDirection=Desc&WhoMayApply=Public"
        );
    }

    #[test]
    fn zero_values_are_omitted() {
        let params = SearchQuery {
            keyword: Some(String::new()),
            travel_percentage: Some(0),
            relocation_indicator: Some(false),
            job_grade_codes: vec![],
            ..Default::default()
        }
        .to_query_params()
        .unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn position_schedule_uses_wire_name() {
        let params = SearchQuery::default()
            .with_position_schedule_type_codes(&[1, 6])
            .to_query_params()
            .unwrap();
        assert_eq!(params.get("PositionSchedule"), Some("1;6"));
        assert_eq!(params.get("PositionScheduleTypeCode"), None);
    }

    #[test]
    fn booleans_are_sent_when_true() {
        let params = SearchQuery::default()
            .with_remote_indicator(true)
            .with_relocation_indicator(true)
            .to_query_params()
            .unwrap();
        assert_eq!(params.get("RemoteIndicator"), Some("true"));
        assert_eq!(params.get("RelocationIndicator"), Some("true"));
    }

    #[test]
    fn sort_direction_parses_legacy_spelling() {
        assert_eq!(
            "Dsc".parse::<SearchSortDirection>(),
            Ok(SearchSortDirection::Desc)
        );
        assert!("sideways".parse::<SearchSortDirection>().is_err());
    }
}
