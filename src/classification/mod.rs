//! RABA land-cover classification.
//!
//! Each `RABA_ID` code maps to one fixed set of OSM tags. Codes missing
//! from the table are not errors; the tag mapper flags them with `fixme`.

mod table;

pub use table::{
    BUILT_UP_CODE, BUILT_UP_VALUE, CLASSIFICATIONS, Classification, LandCoverGroup, lookup,
};
