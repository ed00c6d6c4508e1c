use crate::domain::entities::Row;

/// 询价 ticket, the second record shape managed by the desk. Shares the
/// store/selection machinery with [`Appointment`](super::appointment::Appointment)
/// but has no activation lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InquiryTicket {
    pub id: String,
    pub is_selected: bool,
    pub inquiry_source: String,
    pub inquiry_person: String,
    pub head_freight_status: String,
    pub main_freight_status: String,
    pub tail_freight_status: String,
    pub container_info: String,
    pub cargo_ready_time: String,
    pub cargo_nature: String,
    pub shipping_company: String,
    pub route_type: String,
    pub loading_port: String,
    pub discharge_port: String,
    pub cargo_name: String,
    pub remarks: String,
    pub create_time: String,
}

impl Row for InquiryTicket {
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

/// Seed tickets for the 询价管理 list.
pub fn fixture_inquiries() -> Vec<InquiryTicket> {
    vec![
        InquiryTicket {
            id: "R0000123".to_string(),
            inquiry_source: "内部".to_string(),
            inquiry_person: "王敏".to_string(),
            head_freight_status: "已报价".to_string(),
            main_freight_status: "待报价".to_string(),
            tail_freight_status: "待报价".to_string(),
            container_info: "1*20GP+2*40HC".to_string(),
            cargo_ready_time: "2024-07-15".to_string(),
            cargo_nature: "实单".to_string(),
            shipping_company: "MSC".to_string(),
            route_type: "直达".to_string(),
            loading_port: "CNSHA | Shanghai".to_string(),
            discharge_port: "USLAX | Los Angeles".to_string(),
            cargo_name: "家具".to_string(),
            remarks: String::new(),
            create_time: "2024-07-01 09:30:00".to_string(),
            ..InquiryTicket::default()
        },
        InquiryTicket {
            id: "R0004567".to_string(),
            inquiry_source: "外部".to_string(),
            inquiry_person: "李强".to_string(),
            head_freight_status: "待报价".to_string(),
            main_freight_status: "已报价".to_string(),
            tail_freight_status: "拒绝报价".to_string(),
            container_info: "3*40GP".to_string(),
            cargo_ready_time: "2周内".to_string(),
            cargo_nature: "询价".to_string(),
            shipping_company: "COSCO".to_string(),
            route_type: "中转".to_string(),
            loading_port: "CNNGB | Ningbo".to_string(),
            discharge_port: "DEHAM | Hamburg".to_string(),
            cargo_name: "灯具".to_string(),
            remarks: "客户催单".to_string(),
            create_time: "2024-07-02 14:05:12".to_string(),
            ..InquiryTicket::default()
        },
        InquiryTicket {
            id: "R0008910".to_string(),
            inquiry_source: "内部".to_string(),
            inquiry_person: "赵倩".to_string(),
            head_freight_status: "拒绝报价".to_string(),
            main_freight_status: "待报价".to_string(),
            tail_freight_status: "待报价".to_string(),
            container_info: "1*40HC".to_string(),
            cargo_ready_time: "暂不确定".to_string(),
            cargo_nature: "询价".to_string(),
            shipping_company: "ONE".to_string(),
            route_type: "直达".to_string(),
            loading_port: "CNSZX | Shenzhen".to_string(),
            discharge_port: "SGSIN | Singapore".to_string(),
            cargo_name: "服装".to_string(),
            remarks: String::new(),
            create_time: "2024-07-03 11:20:45".to_string(),
            ..InquiryTicket::default()
        },
    ]
}
