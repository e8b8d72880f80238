//! Feature filter: drops built-up land before tag translation.

use crate::classification::{BUILT_UP_CODE, BUILT_UP_VALUE};
use crate::config::FieldIndexPolicy;
use crate::record::{FieldValue, SourceRecord};
use crate::tags::RABA_ID;

/// Outcome of filtering one source record.
#[derive(Debug, PartialEq)]
pub enum Filtered<R> {
    /// The record goes on to tag translation, unchanged.
    Kept(R),
    /// No record was given; nothing to decide.
    Absent,
    /// The record must be left out of the output.
    Dropped,
}

impl<R> Filtered<R> {
    pub fn is_dropped(&self) -> bool {
        matches!(self, Filtered::Dropped)
    }

    pub fn kept(self) -> Option<R> {
        match self {
            Filtered::Kept(record) => Some(record),
            Filtered::Absent | Filtered::Dropped => None,
        }
    }
}

/// Filter a record with the default (strict) field index policy.
pub fn filter_feature<R: SourceRecord>(record: Option<R>) -> Filtered<R> {
    filter_feature_with(record, FieldIndexPolicy::default())
}

pub fn filter_feature_with<R: SourceRecord>(
    record: Option<R>,
    policy: FieldIndexPolicy,
) -> Filtered<R> {
    let Some(record) = record else {
        return Filtered::Absent;
    };

    let code = record
        .field_index(RABA_ID)
        .filter(|&index| policy.accepts(index))
        .and_then(|index| record.field(index));

    if let Some(value) = code
        && is_built_up(value)
    {
        tracing::debug!("Filter: skipping built-up feature ({}={})", RABA_ID, value);
        return Filtered::Dropped;
    }

    Filtered::Kept(record)
}

fn is_built_up(value: &FieldValue) -> bool {
    match value {
        FieldValue::Integer(code) => *code == BUILT_UP_VALUE,
        FieldValue::Real(code) => *code == BUILT_UP_VALUE as f64,
        FieldValue::String(code) => code.trim() == BUILT_UP_CODE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ShapeFeature;

    fn feature(raba_id: impl Into<FieldValue>) -> ShapeFeature {
        ShapeFeature::new()
            .with_field("RABA_PID", 5501234)
            .with_field("RABA_ID", raba_id)
            .with_field("AREA", 2210.0)
    }

    #[test]
    fn drops_built_up_land() {
        assert!(filter_feature(Some(feature(3000))).is_dropped());
        assert!(filter_feature(Some(feature(" 3000 "))).is_dropped());
    }

    #[test]
    fn keeps_other_codes_unchanged() {
        let input = feature(1100);
        let kept = filter_feature(Some(input.clone())).kept().unwrap();
        assert_eq!(kept.attributes(), input.attributes());
    }

    #[test]
    fn absent_record_passes_through() {
        assert_eq!(filter_feature::<ShapeFeature>(None), Filtered::Absent);
    }

    #[test]
    fn missing_raba_id_is_kept() {
        let input = ShapeFeature::new().with_field("RABA_PID", 1);
        assert!(matches!(filter_feature(Some(input)), Filtered::Kept(_)));
    }

    #[test]
    fn real_valued_code_is_compared_numerically() {
        let decimal = ShapeFeature::new()
            .with_field("RABA_PID", 1)
            .with_field("RABA_ID", 3000.0);
        assert!(filter_feature(Some(decimal)).is_dropped());
        assert!(matches!(filter_feature(Some(feature(3000.5))), Filtered::Kept(_)));
        assert!(matches!(filter_feature(Some(feature(1100.0))), Filtered::Kept(_)));
    }

    #[test]
    fn first_position_depends_on_policy() {
        let first = ShapeFeature::new().with_field("RABA_ID", 3000);

        assert!(filter_feature_with(Some(first.clone()), FieldIndexPolicy::Strict).is_dropped());
        assert!(matches!(
            filter_feature_with(Some(first), FieldIndexPolicy::Legacy),
            Filtered::Kept(_)
        ));
        assert!(filter_feature_with(Some(feature(3000)), FieldIndexPolicy::Legacy).is_dropped());
    }
}
