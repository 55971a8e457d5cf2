//! NAD target field names.

pub const ADD_NUMBER: &str = "Add_Number";
pub const ADD_NUM_SUF: &str = "AddNum_Suf";
pub const ADD_NO_FULL: &str = "AddNo_Full";
pub const ST_PRE_DIR: &str = "St_PreDir";
pub const ST_PRE_TYP: &str = "St_PreTyp";
pub const ST_NAME: &str = "St_Name";
pub const ST_POS_TYP: &str = "St_PosTyp";
pub const ST_POS_DIR: &str = "St_PosDir";
pub const STNAM_FULL: &str = "StNam_Full";
pub const BUILDING: &str = "Building";
pub const UNIT: &str = "Unit";
pub const LANDMK_NAME: &str = "LandmkName";
pub const COUNTY: &str = "County";
pub const INC_MUNI: &str = "Inc_Muni";
pub const POST_CITY: &str = "Post_City";
pub const CENSUS_PLC: &str = "Census_Plc";
pub const NAT_AM_AREA: &str = "NatAmArea";
pub const STATE: &str = "State";
pub const ZIP_CODE: &str = "Zip_Code";
pub const ADD_AUTH: &str = "AddAuth";
pub const ADDR_REF_SYS: &str = "AddrRefSys";
pub const LONGITUDE: &str = "Longitude";
pub const LATITUDE: &str = "Latitude";
pub const NAT_GRID: &str = "NatGrid";
pub const PLACEMENT: &str = "Placement";
pub const ADDR_POINT: &str = "AddrPoint";
pub const PARCEL_ID: &str = "Parcel_ID";
pub const DATE_UPDATE: &str = "DateUpdate";
pub const ADDR_TYPE: &str = "Addr_Type";
pub const NAD_SOURCE: &str = "NAD_Source";
pub const DATASET_ID: &str = "DataSet_ID";

/// Raw source field holding the house number.
pub const SOURCE_ADD_NUM: &str = "AddNum";

/// Fields whose empty or whitespace-only values are rewritten to null.
pub const BLANK_TO_NULL_FIELDS: &[&str] = &[
    ADD_NUM_SUF,
    BUILDING,
    UNIT,
    LANDMK_NAME,
    INC_MUNI,
    PARCEL_ID,
    ADDR_TYPE,
    ST_POS_TYP,
    ST_POS_DIR,
    ST_PRE_DIR,
    PLACEMENT,
];

/// Output column order for written record sets.
pub const NAD_FIELD_ORDER: &[&str] = &[
    ADD_NUMBER,
    ADD_NUM_SUF,
    ADD_NO_FULL,
    ST_PRE_DIR,
    ST_PRE_TYP,
    ST_NAME,
    ST_POS_TYP,
    ST_POS_DIR,
    STNAM_FULL,
    BUILDING,
    UNIT,
    LANDMK_NAME,
    COUNTY,
    INC_MUNI,
    POST_CITY,
    CENSUS_PLC,
    NAT_AM_AREA,
    STATE,
    ZIP_CODE,
    ADD_AUTH,
    ADDR_REF_SYS,
    LONGITUDE,
    LATITUDE,
    NAT_GRID,
    PLACEMENT,
    ADDR_POINT,
    PARCEL_ID,
    DATE_UPDATE,
    ADDR_TYPE,
    NAD_SOURCE,
    DATASET_ID,
];
