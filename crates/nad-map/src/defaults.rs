//! The default jurisdiction-to-NAD crosswalk.

use nad_model::fields;

use crate::crosswalk::FieldCrosswalk;
use crate::error::MappingError;
use crate::rule::{CrosswalkRule, Derivation};

/// Rules for the statewide address point layer.
pub fn default_rules() -> Vec<CrosswalkRule> {
    vec![
        CrosswalkRule::rename(fields::SOURCE_ADD_NUM, fields::ADD_NUMBER)
            .derive(Derivation::Integer),
        CrosswalkRule::rename("AddNumSuffix", fields::ADD_NUM_SUF),
        CrosswalkRule::rename("PrefixDir", fields::ST_PRE_DIR),
        CrosswalkRule::rename("StreetName", fields::ST_NAME),
        CrosswalkRule::rename("StreetType", fields::ST_POS_TYP),
        CrosswalkRule::rename("SuffixDir", fields::ST_POS_DIR),
        CrosswalkRule::rename("Building", fields::BUILDING),
        CrosswalkRule::rename("UnitType", fields::UNIT),
        CrosswalkRule::rename("LandmarkName", fields::LANDMK_NAME),
        CrosswalkRule::rename("CountyID", fields::COUNTY)
            .or_source("County")
            .derive(Derivation::Code),
        CrosswalkRule::rename("City", fields::INC_MUNI),
        CrosswalkRule::rename("State", fields::STATE),
        CrosswalkRule::rename("ZipCode", fields::ZIP_CODE).derive(Derivation::Code),
        CrosswalkRule::rename("AddSource", fields::ADD_AUTH),
        CrosswalkRule::rename("AddSystem", fields::ADDR_REF_SYS),
        CrosswalkRule::rename("USNG", fields::NAT_GRID),
        CrosswalkRule::rename("PtLocation", fields::PLACEMENT),
        CrosswalkRule::rename("ParcelID", fields::PARCEL_ID),
        CrosswalkRule::rename("LoadDate", fields::DATE_UPDATE),
        CrosswalkRule::rename("PtType", fields::ADDR_TYPE),
        CrosswalkRule::rename("UTAddPtID", fields::DATASET_ID),
    ]
}

pub fn default_nad_crosswalk() -> Result<FieldCrosswalk, MappingError> {
    FieldCrosswalk::new(default_rules())
}
