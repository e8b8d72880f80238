//! Tag mapper: source attributes to OSM tags.

use crate::classification::lookup;
use crate::config::ProvenanceConfig;
use std::collections::HashMap;

/// Source field name to string value, as extracted by the driver.
pub type Attributes = HashMap<String, String>;

/// OSM tag key to value.
pub type Tags = HashMap<String, String>;

pub const RABA_ID: &str = "RABA_ID";
pub const RABA_PID: &str = "RABA_PID";
pub const D_OD: &str = "D_OD";
pub const VIR: &str = "VIR";

/// Source fields copied verbatim (trimmed) into `raba:*` tags.
const PASSTHROUGH_FIELDS: &[(&str, &str)] = &[
    (RABA_PID, "raba:pid"),
    (D_OD, "raba:date"),
    (VIR, "raba:source"),
];

/// Map attributes with the default provenance tags.
pub fn map_tags(attrs: Option<&Attributes>) -> Option<Tags> {
    map_tags_with(attrs, &ProvenanceConfig::default())
}

pub fn map_tags_with(attrs: Option<&Attributes>, provenance: &ProvenanceConfig) -> Option<Tags> {
    let attrs = attrs.filter(|a| !a.is_empty())?;
    let mut tags = Tags::new();

    tags.insert("source".to_string(), provenance.source.clone());
    tags.insert("source:date".to_string(), provenance.source_date.clone());

    if let Some(raw) = attrs.get(RABA_ID) {
        let code = raw.trim();
        tags.insert("raba:id".to_string(), code.to_string());

        match lookup(code) {
            Some(classification) => {
                tracing::debug!("Tags: {} {} ({})", RABA_ID, code, classification.name);
                for (key, value) in classification.tags {
                    tags.insert(key.to_string(), value.to_string());
                }
            }
            None => {
                tracing::debug!("Tags: unknown {} {:?}", RABA_ID, code);
                tags.insert("fixme".to_string(), format!("unknown raba_id: {code}"));
            }
        }
    }

    for (field, key) in PASSTHROUGH_FIELDS {
        if let Some(value) = attrs.get(*field) {
            tags.insert(key.to_string(), value.trim().to_string());
        }
    }

    Some(tags)
}
