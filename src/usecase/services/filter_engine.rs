//! Pure filtering over the full collection. Every constrained field must
//! pass (logical AND); relative order of the input is preserved and no sort
//! is applied.

use crate::domain::entities::appointment::Appointment;
use crate::domain::entities::filter::{AppointmentCriteria, InquiryCriteria};
use crate::domain::entities::inquiry::InquiryTicket;
use crate::domain::predicate::{bool_matches, text_matches, tristate_matches, valid_period_overlaps};

pub fn filter_appointments(all: &[Appointment], criteria: &AppointmentCriteria) -> Vec<Appointment> {
    all.iter()
        .filter(|appointment| {
            text_matches(&appointment.id, &criteria.appointment_number)
                && text_matches(&appointment.line, &criteria.line)
                && text_matches(&appointment.shipping_company, &criteria.shipping_company)
                && text_matches(&appointment.price_nature, &criteria.price_nature)
                && tristate_matches(appointment.is_nac, &criteria.is_nac)
                && bool_matches(appointment.is_activated, &criteria.is_activated)
                && valid_period_overlaps(
                    appointment.valid_from,
                    appointment.valid_to,
                    criteria.valid_from,
                    criteria.valid_to,
                )
        })
        .cloned()
        .collect()
}

pub fn filter_inquiries(all: &[InquiryTicket], criteria: &InquiryCriteria) -> Vec<InquiryTicket> {
    all.iter()
        .filter(|ticket| {
            text_matches(&ticket.id, &criteria.appointment_number)
                && text_matches(&ticket.inquiry_source, &criteria.inquiry_source)
                && text_matches(&ticket.inquiry_person, &criteria.inquiry_person)
                && text_matches(&ticket.head_freight_status, &criteria.head_freight_status)
                && text_matches(&ticket.main_freight_status, &criteria.main_freight_status)
                && text_matches(&ticket.tail_freight_status, &criteria.tail_freight_status)
                && text_matches(&ticket.container_info, &criteria.container_info)
                && text_matches(&ticket.cargo_ready_time, &criteria.cargo_ready_time)
                && text_matches(&ticket.cargo_nature, &criteria.cargo_nature)
                && text_matches(&ticket.shipping_company, &criteria.shipping_company)
                && text_matches(&ticket.route_type, &criteria.route_type)
                && text_matches(&ticket.loading_port, &criteria.loading_port)
                && text_matches(&ticket.discharge_port, &criteria.discharge_port)
                && text_matches(&ticket.cargo_name, &criteria.cargo_name)
                && text_matches(&ticket.remarks, &criteria.remarks)
                && text_matches(&ticket.create_time, &criteria.create_time)
        })
        .cloned()
        .collect()
}

/// 快捷检索 over 约号, 航线 and 船公司 at once; case-insensitive substring.
pub fn quick_search(all: &[Appointment], term: &str) -> Vec<Appointment> {
    let wanted = term.trim().to_lowercase();
    all.iter()
        .filter(|appointment| {
            appointment.id.to_lowercase().contains(&wanted)
                || appointment.line.to_lowercase().contains(&wanted)
                || appointment.shipping_company.to_lowercase().contains(&wanted)
        })
        .cloned()
        .collect()
}
