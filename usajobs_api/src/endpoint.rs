//! Paths of the endpoints the client knows about.

use std::str::FromStr;

/// Path of the job search endpoint.
pub const SEARCH_PATH: &str = "/search";

/// Every `/codelist/*` endpoint. They share one options value
/// ([`CodeListQuery`](crate::CodeListQuery)) and one response shape
/// ([`CodeListResponse`](crate::types::CodeListResponse)), so they differ
/// only by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeListEndpoint {
    AcademicHonors,
    AcademicLevels,
    AgencySubelements,
    ApplicantSuppliers,
    ApplicationStatuses,
    Countries,
    CountrySubdivisions,
    CyberWorkGroupings,
    CyberWorkRoles,
    DegreeTypeCodes,
    Disabilities,
    Documentations,
    DocumentFormats,
    Ethnicities,
    FederalEmploymentStatuses,
    GeoLocCodes,
    GsaGeoLocCodes,
    HiringPaths,
    KeyStandardRequirements,
    LanguageCodes,
    LanguageProficiencies,
    LocationExpansions,
    MilitaryStatusCodes,
    MissionCriticalCodes,
    OccupationalSeries,
    PayPlans,
    PositionOfferingTypes,
    PositionOpeningStatuses,
    PositionScheduleTypes,
    PostalCodes,
    RaceCodes,
    RefereeTypeCodes,
    RemunerationRateIntervalCodes,
    RequiredStandardDocuments,
    SecurityClearances,
    ServiceTypes,
    SpecialHirings,
    TravelPercentages,
    WhoMayApply,
}

impl CodeListEndpoint {
    pub const ALL: [CodeListEndpoint; 39] = [
        CodeListEndpoint::AcademicHonors,
        CodeListEndpoint::AcademicLevels,
        CodeListEndpoint::AgencySubelements,
        CodeListEndpoint::ApplicantSuppliers,
        CodeListEndpoint::ApplicationStatuses,
        CodeListEndpoint::Countries,
        CodeListEndpoint::CountrySubdivisions,
        CodeListEndpoint::CyberWorkGroupings,
        CodeListEndpoint::CyberWorkRoles,
        CodeListEndpoint::DegreeTypeCodes,
        CodeListEndpoint::Disabilities,
        CodeListEndpoint::Documentations,
        CodeListEndpoint::DocumentFormats,
        CodeListEndpoint::Ethnicities,
        CodeListEndpoint::FederalEmploymentStatuses,
        CodeListEndpoint::GeoLocCodes,
        CodeListEndpoint::GsaGeoLocCodes,
        CodeListEndpoint::HiringPaths,
        CodeListEndpoint::KeyStandardRequirements,
        CodeListEndpoint::LanguageCodes,
        CodeListEndpoint::LanguageProficiencies,
        CodeListEndpoint::LocationExpansions,
        CodeListEndpoint::MilitaryStatusCodes,
        CodeListEndpoint::MissionCriticalCodes,
        CodeListEndpoint::OccupationalSeries,
        CodeListEndpoint::PayPlans,
        CodeListEndpoint::PositionOfferingTypes,
        CodeListEndpoint::PositionOpeningStatuses,
        CodeListEndpoint::PositionScheduleTypes,
        CodeListEndpoint::PostalCodes,
        CodeListEndpoint::RaceCodes,
        CodeListEndpoint::RefereeTypeCodes,
        CodeListEndpoint::RemunerationRateIntervalCodes,
        CodeListEndpoint::RequiredStandardDocuments,
        CodeListEndpoint::SecurityClearances,
        CodeListEndpoint::ServiceTypes,
        CodeListEndpoint::SpecialHirings,
        CodeListEndpoint::TravelPercentages,
        CodeListEndpoint::WhoMayApply,
    ];

    /// Path relative to the API base URL, e.g. `/codelist/academichonors`.
    pub fn path(&self) -> &'static str {
        match self {
            CodeListEndpoint::AcademicHonors => "/codelist/academichonors",
            CodeListEndpoint::AcademicLevels => "/codelist/academiclevels",
            CodeListEndpoint::AgencySubelements => "/codelist/agencysubelements",
            CodeListEndpoint::ApplicantSuppliers => "/codelist/applicantsuppliers",
            CodeListEndpoint::ApplicationStatuses => "/codelist/applicationstatuses",
            CodeListEndpoint::Countries => "/codelist/countries",
            CodeListEndpoint::CountrySubdivisions => "/codelist/countrysubdivisions",
            CodeListEndpoint::CyberWorkGroupings => "/codelist/cyberworkgroupings",
            CodeListEndpoint::CyberWorkRoles => "/codelist/cyberworkroles",
            CodeListEndpoint::DegreeTypeCodes => "/codelist/degreetypecodes",
            CodeListEndpoint::Disabilities => "/codelist/disabilities",
            CodeListEndpoint::Documentations => "/codelist/documentations",
            CodeListEndpoint::DocumentFormats => "/codelist/documentformats",
            CodeListEndpoint::Ethnicities => "/codelist/ethnicities",
            CodeListEndpoint::FederalEmploymentStatuses => "/codelist/federalemploymentstatuses",
            CodeListEndpoint::GeoLocCodes => "/codelist/geoloccodes",
            CodeListEndpoint::GsaGeoLocCodes => "/codelist/gsageoloccodes",
            CodeListEndpoint::HiringPaths => "/codelist/hiringpaths",
            CodeListEndpoint::KeyStandardRequirements => "/codelist/keystandardrequirements",
            CodeListEndpoint::LanguageCodes => "/codelist/languagecodes",
            CodeListEndpoint::LanguageProficiencies => "/codelist/languageproficiencies",
            CodeListEndpoint::LocationExpansions => "/codelist/locationexpansions",
            CodeListEndpoint::MilitaryStatusCodes => "/codelist/militarystatuscodes",
            CodeListEndpoint::MissionCriticalCodes => "/codelist/missioncriticalcodes",
            CodeListEndpoint::OccupationalSeries => "/codelist/occupationalseries",
            CodeListEndpoint::PayPlans => "/codelist/payplans",
            CodeListEndpoint::PositionOfferingTypes => "/codelist/positionofferingtypes",
            CodeListEndpoint::PositionOpeningStatuses => "/codelist/positionopeningstatuses",
            CodeListEndpoint::PositionScheduleTypes => "/codelist/positionscheduletypes",
            CodeListEndpoint::PostalCodes => "/codelist/postalcodes",
            CodeListEndpoint::RaceCodes => "/codelist/racecodes",
            CodeListEndpoint::RefereeTypeCodes => "/codelist/refereetypecodes",
            CodeListEndpoint::RemunerationRateIntervalCodes => {
                "/codelist/remunerationrateintervalcodes"
            }
            CodeListEndpoint::RequiredStandardDocuments => "/codelist/requiredstandarddocuments",
            CodeListEndpoint::SecurityClearances => "/codelist/securityclearances",
            CodeListEndpoint::ServiceTypes => "/codelist/servicetypes",
            CodeListEndpoint::SpecialHirings => "/codelist/specialhirings",
            CodeListEndpoint::TravelPercentages => "/codelist/travelpercentages",
            CodeListEndpoint::WhoMayApply => "/codelist/whomayapply",
        }
    }

    /// Kebab-case name used on the command line, e.g. `academic-honors`.
    pub fn name(&self) -> &'static str {
        match self {
            CodeListEndpoint::AcademicHonors => "academic-honors",
            CodeListEndpoint::AcademicLevels => "academic-levels",
            CodeListEndpoint::AgencySubelements => "agency-subelements",
            CodeListEndpoint::ApplicantSuppliers => "applicant-suppliers",
            CodeListEndpoint::ApplicationStatuses => "application-statuses",
            CodeListEndpoint::Countries => "countries",
            CodeListEndpoint::CountrySubdivisions => "country-subdivisions",
            CodeListEndpoint::CyberWorkGroupings => "cyber-work-groupings",
            CodeListEndpoint::CyberWorkRoles => "cyber-work-roles",
            CodeListEndpoint::DegreeTypeCodes => "degree-type-codes",
            CodeListEndpoint::Disabilities => "disabilities",
            CodeListEndpoint::Documentations => "documentations",
            CodeListEndpoint::DocumentFormats => "document-formats",
            CodeListEndpoint::Ethnicities => "ethnicities",
            CodeListEndpoint::FederalEmploymentStatuses => "federal-employment-statuses",
            CodeListEndpoint::GeoLocCodes => "geo-loc-codes",
            CodeListEndpoint::GsaGeoLocCodes => "gsa-geo-loc-codes",
            CodeListEndpoint::HiringPaths => "hiring-paths",
            CodeListEndpoint::KeyStandardRequirements => "key-standard-requirements",
            CodeListEndpoint::LanguageCodes => "language-codes",
            CodeListEndpoint::LanguageProficiencies => "language-proficiencies",
            CodeListEndpoint::LocationExpansions => "location-expansions",
            CodeListEndpoint::MilitaryStatusCodes => "military-status-codes",
            CodeListEndpoint::MissionCriticalCodes => "mission-critical-codes",
            CodeListEndpoint::OccupationalSeries => "occupational-series",
            CodeListEndpoint::PayPlans => "pay-plans",
            CodeListEndpoint::PositionOfferingTypes => "position-offering-types",
            CodeListEndpoint::PositionOpeningStatuses => "position-opening-statuses",
            CodeListEndpoint::PositionScheduleTypes => "position-schedule-types",
            CodeListEndpoint::PostalCodes => "postal-codes",
            CodeListEndpoint::RaceCodes => "race-codes",
            CodeListEndpoint::RefereeTypeCodes => "referee-type-codes",
            CodeListEndpoint::RemunerationRateIntervalCodes => "remuneration-rate-interval-codes",
            CodeListEndpoint::RequiredStandardDocuments => "required-standard-documents",
            CodeListEndpoint::SecurityClearances => "security-clearances",
            CodeListEndpoint::ServiceTypes => "service-types",
            CodeListEndpoint::SpecialHirings => "special-hirings",
            CodeListEndpoint::TravelPercentages => "travel-percentages",
            CodeListEndpoint::WhoMayApply => "who-may-apply",
        }
    }
}

impl std::fmt::Display for CodeListEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CodeListEndpoint {
    type Err = String;

    /// Accepts the kebab-case name (`academic-honors`) or the bare path
    /// segment (`academichonors`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        CodeListEndpoint::ALL
            .iter()
            .find(|e| e.name() == needle || e.path().trim_start_matches("/codelist/") == needle)
            .copied()
            .ok_or_else(|| format!("unknown code list: {}", s))
    }
}
