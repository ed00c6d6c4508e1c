use chrono::NaiveDate;

/// Comparison mode attached to one filter field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterOp {
    #[default]
    Equals,
    NotEquals,
    Contains,
    NotContains,
}

impl FilterOp {
    /// Full operator set offered for free-text fields.
    pub const TEXT_OPS: [FilterOp; 4] = [
        FilterOp::Equals,
        FilterOp::NotEquals,
        FilterOp::Contains,
        FilterOp::NotContains,
    ];

    /// Enumerated and boolean fields only support equality.
    pub const EQUALITY_OPS: [FilterOp; 2] = [FilterOp::Equals, FilterOp::NotEquals];

    pub fn label(&self) -> &'static str {
        match self {
            FilterOp::Equals => "等于",
            FilterOp::NotEquals => "不等于",
            FilterOp::Contains => "包含",
            FilterOp::NotContains => "不包含",
        }
    }

    pub fn from_label(label: &str) -> Option<FilterOp> {
        FilterOp::TEXT_OPS.into_iter().find(|op| op.label() == label)
    }
}

/// One text/enum field constraint. An empty value means the field is not
/// constrained at all.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextFilter {
    pub value: String,
    pub op: FilterOp,
}

impl TextFilter {
    pub fn new(value: impl Into<String>, op: FilterOp) -> Self {
        TextFilter {
            value: value.into(),
            op,
        }
    }

    pub fn contains(value: impl Into<String>) -> Self {
        TextFilter::new(value, FilterOp::Contains)
    }

    pub fn equals(value: impl Into<String>) -> Self {
        TextFilter::new(value, FilterOp::Equals)
    }
}

/// Boolean field constraint carrying the raw select-control value:
/// "" (unconstrained), "true" or "false".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TriStateFilter {
    pub value: String,
    pub op: FilterOp,
}

impl TriStateFilter {
    pub fn new(value: impl Into<String>, op: FilterOp) -> Self {
        TriStateFilter {
            value: value.into(),
            op,
        }
    }
}

/// Filter set for the 约号 table. Replaced wholesale on every submission;
/// never merged with a previous set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppointmentCriteria {
    pub appointment_number: TextFilter,
    pub line: TextFilter,
    pub shipping_company: TextFilter,
    pub price_nature: TextFilter,
    pub is_nac: TriStateFilter,
    pub is_activated: TriStateFilter,
    pub valid_from: Option<NaiveDate>,
    pub valid_to: Option<NaiveDate>,
}

/// Filter set for the inquiry ticket list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InquiryCriteria {
    pub appointment_number: TextFilter,
    pub inquiry_source: TextFilter,
    pub inquiry_person: TextFilter,
    pub head_freight_status: TextFilter,
    pub main_freight_status: TextFilter,
    pub tail_freight_status: TextFilter,
    pub container_info: TextFilter,
    pub cargo_ready_time: TextFilter,
    pub cargo_nature: TextFilter,
    pub shipping_company: TextFilter,
    pub route_type: TextFilter,
    pub loading_port: TextFilter,
    pub discharge_port: TextFilter,
    pub cargo_name: TextFilter,
    pub remarks: TextFilter,
    pub create_time: TextFilter,
}
