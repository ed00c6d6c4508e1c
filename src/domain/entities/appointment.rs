use chrono::NaiveDate;

use crate::domain::entities::Row;

/// 船公司约号 record. `valid_from`/`valid_to` may each be absent; when both
/// are present `valid_from <= valid_to` is enforced at save time only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub id: String,
    pub line: String,
    pub is_activated: bool,
    pub is_selected: bool,
    pub shipping_company: String,
    pub price_nature: String,
    pub is_nac: Option<bool>,
    pub nac: String,
    pub applicable_products: Option<String>,
    pub custom_product: String,
    pub mqc: String,
    pub cabin_protection: Option<String>,
    pub cabin_protection_value: String,
    pub cabin_protection_unit: String,
    pub valid_from: Option<NaiveDate>,
    pub valid_to: Option<NaiveDate>,
}

impl Default for Appointment {
    fn default() -> Self {
        Appointment {
            id: String::new(),
            line: String::new(),
            is_activated: true,
            is_selected: false,
            shipping_company: String::new(),
            price_nature: "自有约价".to_string(),
            is_nac: None,
            nac: String::new(),
            applicable_products: None,
            custom_product: String::new(),
            mqc: String::new(),
            cabin_protection: None,
            cabin_protection_value: String::new(),
            cabin_protection_unit: "TEU/水".to_string(),
            valid_from: None,
            valid_to: None,
        }
    }
}

impl Row for Appointment {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_selected(&self) -> bool {
        self.is_selected
    }

    fn set_selected(&mut self, selected: bool) {
        self.is_selected = selected;
    }
}

const SHIPPING_COMPANY_NAMES: &[(&str, &str)] = &[
    ("MSC", "地中海"),
    ("COSCO", "中远海运"),
    ("OOCL", "东方海外"),
    ("CMA", "达飞轮船"),
    ("ONE", "海洋网联"),
    ("HAPAG", "赫伯罗特"),
    ("ZIM", "以星航运"),
    ("MAERSK", "马士基"),
    ("EVERGREEN", "长荣海运"),
    ("YANGMING", "阳明海运"),
];

/// Carrier codes rendered as "CODE | 中文名"; unknown codes fall back to the
/// code alone.
pub fn format_shipping_company(code: &str) -> String {
    match SHIPPING_COMPANY_NAMES
        .iter()
        .find(|(known, _)| *known == code)
    {
        Some((_, name)) => format!("{code} | {name}"),
        None => code.to_string(),
    }
}

impl Appointment {
    pub fn valid_period_display(&self) -> String {
        match (self.valid_from, self.valid_to) {
            (Some(from), Some(to)) => format!("{from} 至 {to}"),
            (Some(from), None) => format!("{from} 起"),
            (None, Some(to)) => format!("至 {to}"),
            (None, None) => String::new(),
        }
    }

    /// Cell text for a display column, keyed by the column config keys.
    pub fn cell(&self, column_key: &str) -> String {
        match column_key {
            "id" => self.id.clone(),
            "line" => self.line.clone(),
            "shippingCompany" => format_shipping_company(&self.shipping_company),
            "priceNature" => self.price_nature.clone(),
            "isNAC" => match self.is_nac {
                Some(true) => "是".to_string(),
                Some(false) => "否".to_string(),
                None => String::new(),
            },
            "nac" => {
                if self.is_nac == Some(true) {
                    self.nac.clone()
                } else {
                    String::new()
                }
            }
            "applicableProducts" => match self.applicable_products.as_deref() {
                Some("其他") => format!("其他 ({})", self.custom_product),
                Some(products) => products.to_string(),
                None => String::new(),
            },
            "mqc" => self.mqc.clone(),
            "cabinProtection" => match self.cabin_protection.as_deref() {
                Some("有")
                    if !self.cabin_protection_value.is_empty()
                        && !self.cabin_protection_unit.is_empty() =>
                {
                    format!(
                        "有 ({} {})",
                        self.cabin_protection_value, self.cabin_protection_unit
                    )
                }
                Some(protection) => protection.to_string(),
                None => String::new(),
            },
            "validPeriod" => self.valid_period_display(),
            "isActivated" => if self.is_activated { "是" } else { "否" }.to_string(),
            _ => String::new(),
        }
    }
}

fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Seed rows shown before any user mutation.
pub fn fixture_appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: "888888".to_string(),
            shipping_company: "MSC".to_string(),
            price_nature: "自有约价".to_string(),
            is_nac: Some(false),
            applicable_products: Some("化工品".to_string()),
            mqc: "140".to_string(),
            cabin_protection: Some("有".to_string()),
            cabin_protection_value: "200".to_string(),
            cabin_protection_unit: "TEU/月".to_string(),
            valid_from: date(2024, 1, 1),
            valid_to: date(2024, 12, 31),
            ..Appointment::default()
        },
        Appointment {
            id: "20240510".to_string(),
            shipping_company: "COSCO".to_string(),
            price_nature: "客户约价".to_string(),
            is_nac: Some(true),
            nac: "NAC001".to_string(),
            applicable_products: Some("危险品".to_string()),
            mqc: "220".to_string(),
            cabin_protection: Some("无".to_string()),
            cabin_protection_unit: String::new(),
            valid_from: date(2024, 5, 10),
            valid_to: date(2025, 5, 9),
            ..Appointment::default()
        },
        Appointment {
            id: "WT2383333".to_string(),
            is_selected: true,
            shipping_company: "OOCL".to_string(),
            price_nature: "海外代理约价".to_string(),
            is_nac: Some(false),
            applicable_products: Some("特种柜".to_string()),
            mqc: "140".to_string(),
            cabin_protection: Some("有".to_string()),
            cabin_protection_value: "50".to_string(),
            cabin_protection_unit: "TEU/周".to_string(),
            valid_from: date(2024, 4, 1),
            valid_to: date(2024, 10, 31),
            ..Appointment::default()
        },
        Appointment {
            id: "4".to_string(),
            line: "新加坡".to_string(),
            shipping_company: "CMA".to_string(),
            price_nature: "无约价".to_string(),
            is_nac: Some(true),
            nac: "NAC002".to_string(),
            applicable_products: Some("冷冻货".to_string()),
            mqc: "120".to_string(),
            cabin_protection: Some("无".to_string()),
            cabin_protection_unit: String::new(),
            valid_from: date(2024, 3, 15),
            valid_to: date(2025, 3, 14),
            ..Appointment::default()
        },
        Appointment {
            id: "MJ1".to_string(),
            line: "美西".to_string(),
            shipping_company: "ONE".to_string(),
            price_nature: "同行约价".to_string(),
            is_nac: Some(false),
            applicable_products: Some("FAK".to_string()),
            mqc: "240".to_string(),
            cabin_protection: Some("有".to_string()),
            cabin_protection_value: "100".to_string(),
            cabin_protection_unit: "TEU/水".to_string(),
            valid_from: date(2024, 2, 15),
            valid_to: date(2024, 8, 14),
            ..Appointment::default()
        },
        Appointment {
            id: "1".to_string(),
            line: "中美洲".to_string(),
            is_activated: false,
            shipping_company: "HAPAG".to_string(),
            price_nature: "AFC约价".to_string(),
            is_nac: Some(true),
            nac: "NAC003".to_string(),
            applicable_products: Some("纺织品".to_string()),
            mqc: "145".to_string(),
            cabin_protection: Some("无".to_string()),
            cabin_protection_unit: String::new(),
            valid_from: date(2024, 6, 1),
            valid_to: date(2025, 5, 31),
            ..Appointment::default()
        },
        Appointment {
            id: "100".to_string(),
            shipping_company: "ZIM".to_string(),
            price_nature: "AFG约价".to_string(),
            is_nac: Some(false),
            applicable_products: Some("其他".to_string()),
            custom_product: "电子产品".to_string(),
            mqc: "240".to_string(),
            cabin_protection: Some("有".to_string()),
            cabin_protection_value: "300".to_string(),
            cabin_protection_unit: "TEU/年".to_string(),
            valid_from: date(2024, 1, 15),
            valid_to: date(2024, 12, 31),
            ..Appointment::default()
        },
        Appointment {
            id: "001".to_string(),
            line: "新加坡".to_string(),
            shipping_company: "MSC".to_string(),
            price_nature: "自有约价".to_string(),
            is_nac: Some(true),
            nac: "NAC004".to_string(),
            applicable_products: Some("其他".to_string()),
            custom_product: "塑料制品".to_string(),
            mqc: "120".to_string(),
            cabin_protection: Some("无".to_string()),
            cabin_protection_unit: String::new(),
            valid_from: date(2024, 4, 15),
            valid_to: date(2025, 4, 14),
            ..Appointment::default()
        },
        Appointment {
            id: "298822264".to_string(),
            line: "加勒比".to_string(),
            shipping_company: "MAERSK".to_string(),
            price_nature: "客户约价".to_string(),
            is_nac: None,
            applicable_products: None,
            mqc: "340".to_string(),
            cabin_protection: None,
            cabin_protection_unit: String::new(),
            valid_from: date(2024, 3, 1),
            valid_to: date(2024, 8, 31),
            ..Appointment::default()
        },
        Appointment {
            id: "12345".to_string(),
            line: "美西".to_string(),
            is_activated: false,
            shipping_company: "EVERGREEN".to_string(),
            price_nature: "海外代理约价".to_string(),
            is_nac: Some(true),
            nac: "NAC005".to_string(),
            applicable_products: Some("化工品".to_string()),
            mqc: "140".to_string(),
            cabin_protection: Some("无".to_string()),
            cabin_protection_unit: String::new(),
            valid_from: date(2024, 5, 1),
            valid_to: date(2024, 10, 31),
            ..Appointment::default()
        },
        Appointment {
            id: "1767".to_string(),
            shipping_company: "YANGMING".to_string(),
            price_nature: "无约价".to_string(),
            is_nac: None,
            applicable_products: None,
            mqc: "220".to_string(),
            cabin_protection: Some("有".to_string()),
            cabin_protection_value: "150".to_string(),
            cabin_protection_unit: "TEU/合约期".to_string(),
            valid_from: date(2024, 2, 1),
            valid_to: date(2025, 1, 31),
            ..Appointment::default()
        },
    ]
}
