//! Built-in domain tables for the Utah address point load.

/// Street type abbreviations (USPS suffix forms) to full words.
pub const STREET_TYPES: &[(&str, &str)] = &[
    ("JCT", "JUNCTION"),
    ("COR", "CORNER"),
    ("GLN", "GLEN"),
    ("VW", "VIEW"),
    ("PARK", "PARK"),
    ("FLT", "FLAT"),
    ("BAY", "BAY"),
    ("CIR", "CIRCLE"),
    ("FWY", "FREEWAY"),
    ("HL", "HILL"),
    ("ESTS", "ESTATES"),
    ("BLVD", "BOULEVARD"),
    ("CRK", "CREEK"),
    ("ST", "STREET"),
    ("DR", "DRIVE"),
    ("RTE", "ROUTE"),
    ("EXPY", "EXPRESSWAY"),
    ("CTR", "CENTER"),
    ("PT", "POINT"),
    ("LN", "LANE"),
    ("MNR", "MANOR"),
    ("RAMP", "RAMP"),
    ("VLG", "VILLAGE"),
    ("PKWY", "PARKWAY"),
    ("RD", "ROAD"),
    ("HOLW", "HOLLOW"),
    ("HWY", "HIGHWAY"),
    ("TER", "TERRACE"),
    ("BND", "BEND"),
    ("CYN", "CANYON"),
    ("PL", "PLACE"),
    ("ROW", "ROW"),
    ("GRV", "GROVE"),
    ("EST", "ESTATE"),
    ("TRL", "TRAIL"),
    ("FRK", "FORK"),
    ("RNCH", "RANCH"),
    ("RDG", "RIDGE"),
    ("WAY", "WAY"),
    ("PASS", "PASS"),
    ("RUN", "RUN"),
    ("TRCE", "TRACE"),
    ("CV", "COVE"),
    ("CT", "COURT"),
    ("XING", "CROSSING"),
    ("SQ", "SQUARE"),
    ("CRES", "CRESCENT"),
    ("PLZ", "PLAZA"),
    ("MDW", "MEADOW"),
    ("HTS", "HEIGHTS"),
    ("ALY", "ALLEY"),
    ("AVE", "AVENUE"),
    ("LOOP", "LOOP"),
];

/// Cardinal direction letters.
pub const DIRECTIONS: &[(&str, &str)] = &[
    ("S", "SOUTH"),
    ("E", "EAST"),
    ("W", "WEST"),
    ("N", "NORTH"),
];

/// Utah county FIPS codes.
pub const COUNTY_FIPS: &[(&str, &str)] = &[
    ("49001", "BEAVER"),
    ("49003", "BOX ELDER"),
    ("49005", "CACHE"),
    ("49007", "CARBON"),
    ("49009", "DAGGETT"),
    ("49011", "DAVIS"),
    ("49013", "DUCHESNE"),
    ("49015", "EMERY"),
    ("49017", "GARFIELD"),
    ("49019", "GRAND"),
    ("49021", "IRON"),
    ("49023", "JUAB"),
    ("49025", "KANE"),
    ("49027", "MILLARD"),
    ("49029", "MORGAN"),
    ("49031", "PIUTE"),
    ("49033", "RICH"),
    ("49035", "SALT LAKE"),
    ("49037", "SAN JUAN"),
    ("49039", "SANPETE"),
    ("49041", "SEVIER"),
    ("49043", "SUMMIT"),
    ("49045", "TOOELE"),
    ("49047", "UINTAH"),
    ("49049", "UTAH"),
    ("49051", "WASATCH"),
    ("49053", "WASHINGTON"),
    ("49055", "WAYNE"),
    ("49057", "WEBER"),
];

/// Tribal land short names to Census AIANNH reservation names.
pub const TRIBAL_AREAS: &[(&str, &str)] = &[
    ("Goshute", "Goshute Reservation"),
    ("Shoshone", "Northwestern Shoshone Reservation"),
    ("Ute Mountain Ute", "Ute Mountain Reservation"),
    ("Navajo", "Navajo Nation Reservation"),
    ("Paiute", "Paiute (UT) Reservation"),
    ("Ute", "Uintah and Ouray Reservation"),
];
