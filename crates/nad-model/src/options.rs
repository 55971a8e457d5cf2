//! Configuration options for a normalization run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::fields;

pub const DEFAULT_SOURCE_LABEL: &str = "Utah Geospatial Resource Center (UGRC)";
pub const TRIBAL_LANDS_SOURCE: &str = "tribal_lands";
pub const CENSUS_PLACES_SOURCE: &str = "census_places";
pub const ZIP_CODES_SOURCE: &str = "zip_codes";

/// Semantic domain of a code translation table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DomainKind {
    StreetType,
    Direction,
    CountyFips,
    TribalArea,
}

impl DomainKind {
    pub const ALL: [DomainKind; 4] = [
        DomainKind::StreetType,
        DomainKind::Direction,
        DomainKind::CountyFips,
        DomainKind::TribalArea,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::StreetType => "street_type",
            Self::Direction => "direction",
            Self::CountyFips => "county_fips",
            Self::TribalArea => "tribal_area",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::StreetType => "Street type abbreviation to full word",
            Self::Direction => "Direction letter to full word",
            Self::CountyFips => "County FIPS code to county name",
            Self::TribalArea => "Tribal area short name to reservation name",
        }
    }
}

/// Attribute equality predicate used to narrow a reference layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeFilter {
    pub field: String,
    pub value: String,
}

impl AttributeFilter {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// A point-in-polygon enrichment against a named region source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionEnrichment {
    /// Name of the region source in the source registry.
    pub source: String,
    #[serde(default)]
    pub filter: Option<AttributeFilter>,
    /// Polygon attribute copied onto matching points.
    pub region_attribute: String,
    pub target_field: String,
    /// Translate the joined value through this domain table.
    #[serde(default)]
    pub translate_with: Option<DomainKind>,
}

/// An attribute equality enrichment against a named reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExactKeyEnrichment {
    pub source: String,
    pub key_field: String,
    pub reference_key_field: String,
    pub reference_value_field: String,
    pub target_field: String,
}

/// Options controlling a normalization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Value written to `NAD_Source` on every record.
    pub source_label: String,
    /// Raw field that must hold a decimal house number.
    pub key_field: String,
    /// Decimal places kept for `Longitude`, `Latitude` and `AddrPoint`.
    pub coordinate_precision: u32,
    pub region_enrichments: Vec<RegionEnrichment>,
    pub exact_key_enrichments: Vec<ExactKeyEnrichment>,
    /// Location hints (path or URL) for named external sources.
    pub source_locations: BTreeMap<String, String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        let source_locations = [
            (
                TRIBAL_LANDS_SOURCE,
                "https://gis.trustlands.utah.gov/mapping/rest/services/Land_Ownership/FeatureServer/0",
            ),
            (
                CENSUS_PLACES_SOURCE,
                "https://services1.arcgis.com/99lidPhWCzftIe9K/ArcGIS/rest/services/CensusPlaces2020/FeatureServer/0",
            ),
            (
                ZIP_CODES_SOURCE,
                "https://services1.arcgis.com/99lidPhWCzftIe9K/ArcGIS/rest/services/UtahZipCodeAreas/FeatureServer/0",
            ),
        ]
        .into_iter()
        .map(|(name, location)| (name.to_string(), location.to_string()))
        .collect();

        Self {
            source_label: DEFAULT_SOURCE_LABEL.to_string(),
            key_field: fields::SOURCE_ADD_NUM.to_string(),
            coordinate_precision: 6,
            region_enrichments: vec![
                RegionEnrichment {
                    source: TRIBAL_LANDS_SOURCE.to_string(),
                    filter: Some(AttributeFilter::new("state_lgd", "Tribal Lands")),
                    region_attribute: "tribe".to_string(),
                    target_field: fields::NAT_AM_AREA.to_string(),
                    translate_with: Some(DomainKind::TribalArea),
                },
                RegionEnrichment {
                    source: CENSUS_PLACES_SOURCE.to_string(),
                    filter: Some(AttributeFilter::new("LSAD20", "57")),
                    region_attribute: "NAMELSAD20".to_string(),
                    target_field: fields::CENSUS_PLC.to_string(),
                    translate_with: None,
                },
            ],
            exact_key_enrichments: vec![ExactKeyEnrichment {
                source: ZIP_CODES_SOURCE.to_string(),
                key_field: fields::ZIP_CODE.to_string(),
                reference_key_field: "ZIP5".to_string(),
                reference_value_field: "NAME".to_string(),
                target_field: fields::POST_CITY.to_string(),
            }],
            source_locations,
        }
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// A configuration with no spatial or reference enrichment.
    pub fn without_enrichment() -> Self {
        Self {
            region_enrichments: Vec::new(),
            exact_key_enrichments: Vec::new(),
            source_locations: BTreeMap::new(),
            ..Self::default()
        }
    }

    pub fn with_source_label(mut self, label: impl Into<String>) -> Self {
        self.source_label = label.into();
        self
    }

    pub fn with_key_field(mut self, field: impl Into<String>) -> Self {
        self.key_field = field.into();
        self
    }

    pub fn with_region_enrichment(mut self, enrichment: RegionEnrichment) -> Self {
        self.region_enrichments.push(enrichment);
        self
    }

    pub fn with_exact_key_enrichment(mut self, enrichment: ExactKeyEnrichment) -> Self {
        self.exact_key_enrichments.push(enrichment);
        self
    }

    /// Names of every source the configured enrichments read from, in run order.
    pub fn required_sources(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        let all = self
            .region_enrichments
            .iter()
            .map(|e| e.source.as_str())
            .chain(self.exact_key_enrichments.iter().map(|e| e.source.as_str()));
        for name in all {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}
