use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::appointment::Appointment;
use crate::domain::entities::column::ColumnConfig;
use crate::domain::entities::filter::AppointmentCriteria;
use crate::usecase::services::board::{AppointmentBoard, ConfirmRequest};
use crate::usecase::services::pagination::Pager;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// Transient outcome notification rendered at the top of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Toast {
            message: message.into(),
            kind: ToastKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Toast {
            message: message.into(),
            kind: ToastKind::Error,
        }
    }
}

pub struct AppState {
    pub board: Signal<AppointmentBoard>,
    pub pager: Signal<Pager>,
    pub columns: Signal<Vec<ColumnConfig>>,
    pub criteria: Signal<AppointmentCriteria>,
    pub filter_from_input: Signal<String>,
    pub filter_to_input: Signal<String>,
    pub filter_expanded: Signal<bool>,
    pub quick_term: Signal<String>,
    pub go_to_page: Signal<String>,
    pub toast: Signal<Option<Toast>>,
    pub confirm: Signal<Option<ConfirmRequest>>,
    pub show_column_drawer: Signal<bool>,
    pub drawer_columns: Signal<Vec<ColumnConfig>>,
    pub show_editor: Signal<bool>,
    pub editor_is_add: Signal<bool>,
    pub editor_form: Signal<Appointment>,
    pub editor_valid_from: Signal<String>,
    pub editor_valid_to: Signal<String>,
    pub editor_missing: Signal<Vec<String>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            board: use_signal(AppointmentBoard::with_fixtures),
            pager: use_signal(Pager::default),
            columns: use_signal(Vec::<ColumnConfig>::new),
            criteria: use_signal(AppointmentCriteria::default),
            filter_from_input: use_signal(String::new),
            filter_to_input: use_signal(String::new),
            filter_expanded: use_signal(|| true),
            quick_term: use_signal(String::new),
            go_to_page: use_signal(String::new),
            toast: use_signal(|| None::<Toast>),
            confirm: use_signal(|| None::<ConfirmRequest>),
            show_column_drawer: use_signal(|| false),
            drawer_columns: use_signal(Vec::<ColumnConfig>::new),
            show_editor: use_signal(|| false),
            editor_is_add: use_signal(|| false),
            editor_form: use_signal(Appointment::default),
            editor_valid_from: use_signal(String::new),
            editor_valid_to: use_signal(String::new),
            editor_missing: use_signal(Vec::<String>::new),
        }
    }
}
