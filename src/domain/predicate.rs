//! Per-field predicate evaluation. A field whose filter value is empty is
//! never evaluated; absence of a constraint never excludes a record.

use chrono::NaiveDate;

use crate::domain::entities::filter::{FilterOp, TextFilter, TriStateFilter};

/// Case-insensitive text comparison under the filter's operator.
pub fn text_matches(field: &str, filter: &TextFilter) -> bool {
    if filter.value.is_empty() {
        return true;
    }
    let value = field.to_lowercase();
    let wanted = filter.value.to_lowercase();
    match filter.op {
        FilterOp::Equals => value == wanted,
        FilterOp::NotEquals => value != wanted,
        FilterOp::Contains => value.contains(&wanted),
        FilterOp::NotContains => !value.contains(&wanted),
    }
}

/// Nullable boolean field against a "true"/"false" select value. Operators
/// other than 等于/不等于 fall through as unconstrained.
pub fn tristate_matches(field: Option<bool>, filter: &TriStateFilter) -> bool {
    let wanted = match filter.value.as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => return true,
    };
    match filter.op {
        FilterOp::Equals => field == wanted,
        FilterOp::NotEquals => field != wanted,
        _ => true,
    }
}

/// Non-nullable boolean field (是否启用) against a "true"/"false" select value.
pub fn bool_matches(field: bool, filter: &TriStateFilter) -> bool {
    if filter.value.is_empty() {
        return true;
    }
    let wanted = filter.value == "true";
    match filter.op {
        FilterOp::Equals => field == wanted,
        FilterOp::NotEquals => field != wanted,
        _ => true,
    }
}

/// 范围 operator: does the record's validity window intersect the queried
/// window? A record bound that the given filter bound needs must be present,
/// otherwise the record is excluded.
pub fn valid_period_overlaps(
    record_from: Option<NaiveDate>,
    record_to: Option<NaiveDate>,
    filter_from: Option<NaiveDate>,
    filter_to: Option<NaiveDate>,
) -> bool {
    match (filter_from, filter_to) {
        (Some(from), Some(to)) => match (record_from, record_to) {
            (Some(record_from), Some(record_to)) => record_to >= from && record_from <= to,
            _ => false,
        },
        (Some(from), None) => matches!(record_to, Some(record_to) if record_to >= from),
        (None, Some(to)) => matches!(record_from, Some(record_from) if record_from <= to),
        (None, None) => true,
    }
}
