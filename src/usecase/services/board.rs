//! Orchestrates the 约号 table: filter lifecycle, save validation, selection
//! preconditions and the two-phase bulk actions. Every fallible operation
//! returns a discriminated outcome; nothing here panics or throws across the
//! UI boundary, and no state is mutated when a precondition fails.

use std::collections::BTreeSet;

use crate::domain::entities::appointment::{fixture_appointments, Appointment};
use crate::domain::entities::filter::AppointmentCriteria;
use crate::usecase::services::filter_engine::{filter_appointments, quick_search};
use crate::usecase::services::record_store::RecordStore;

/// Uniformity of the current selection, driving the 启用/禁用 gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionStatus {
    pub count: usize,
    pub all_activated: bool,
    pub all_deactivated: bool,
}

/// Rejected selection precondition; surfaced as an error toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    NoEditTarget,
    MultipleEditTargets,
    EmptySelection,
    NotAllDeactivated,
    NotAllActivated,
}

impl SelectionError {
    pub fn message(&self) -> &'static str {
        match self {
            SelectionError::NoEditTarget => "请先选择一个约号",
            SelectionError::MultipleEditTargets => "请只选择一个约号进行编辑",
            SelectionError::EmptySelection => "请至少选择一个约号",
            SelectionError::NotAllDeactivated => {
                "只有当所有选中的约号都处于禁用状态时，才能进行激活操作"
            }
            SelectionError::NotAllActivated => {
                "只有当所有选中的约号都处于启用状态时，才能进行禁用操作"
            }
        }
    }
}

/// Result of a save attempt. Validation failures reject the whole write; no
/// partial mutation ever happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Added,
    Updated,
    DuplicateId,
    MissingFields(Vec<String>),
    InvalidPeriod,
}

impl SaveOutcome {
    pub fn message(&self) -> String {
        match self {
            SaveOutcome::Added => "新增成功".to_string(),
            SaveOutcome::Updated => "更新成功".to_string(),
            SaveOutcome::DuplicateId => "该船公司约号已存在，请更换约号".to_string(),
            SaveOutcome::MissingFields(_) => "请填写必填项".to_string(),
            SaveOutcome::InvalidPeriod => "有效期开始日期不能晚于结束日期".to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SaveOutcome::Added | SaveOutcome::Updated)
    }
}

/// Bulk mutation awaiting its confirmation round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    Delete,
    Activate,
    Deactivate,
}

/// Second phase of a bulk action: the modal payload. The mutation runs only
/// when the operator confirms and `confirm(request.action)` is invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub title: String,
    pub content: String,
    pub action: BulkAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkOutcome {
    Deleted(usize),
    Activated,
    Deactivated,
}

impl BulkOutcome {
    pub fn message(&self) -> String {
        match self {
            BulkOutcome::Deleted(count) => format!("成功删除{count}个约号"),
            BulkOutcome::Activated => "启用成功".to_string(),
            BulkOutcome::Deactivated => "禁用成功".to_string(),
        }
    }
}

/// The 约号 screen state: record store plus the active filter, re-applied
/// after every mutation so the view always matches a fresh derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentBoard {
    store: RecordStore<Appointment>,
    active_filter: Option<AppointmentCriteria>,
}

impl AppointmentBoard {
    pub fn new(seed: Vec<Appointment>) -> Self {
        AppointmentBoard {
            store: RecordStore::new(seed),
            active_filter: None,
        }
    }

    pub fn with_fixtures() -> Self {
        AppointmentBoard::new(fixture_appointments())
    }

    pub fn all(&self) -> &[Appointment] {
        self.store.all()
    }

    pub fn view(&self) -> &[Appointment] {
        self.store.view()
    }

    /// Replaces the active criteria set wholesale and re-derives the view.
    pub fn apply_filter(&mut self, criteria: AppointmentCriteria) {
        self.active_filter = Some(criteria);
        self.refresh_view();
    }

    /// 重置条件: drop the criteria and show the full collection again.
    pub fn reset_filter(&mut self) {
        self.active_filter = None;
        self.store.reset_view();
    }

    /// Re-applies the active filter (or resets to the full collection). The
    /// single recomputation point invoked after every mutation.
    pub fn refresh_view(&mut self) {
        match &self.active_filter {
            Some(criteria) => {
                let view = filter_appointments(self.store.all(), criteria);
                self.store.set_view(view);
            }
            None => self.store.reset_view(),
        }
    }

    /// 快捷检索; an empty term restores the filtered (or full) view.
    pub fn apply_quick_search(&mut self, term: &str) {
        if term.trim().is_empty() {
            self.refresh_view();
            return;
        }
        let view = quick_search(self.store.all(), term);
        self.store.set_view(view);
    }

    pub fn toggle_selection(&mut self, id: &str) -> Option<bool> {
        self.store.toggle_selection(id)
    }

    /// 全选 over one page's ids.
    pub fn set_selection_for_keys(&mut self, ids: &BTreeSet<String>, selected: bool) {
        self.store.set_selection_for_keys(ids, selected);
    }

    pub fn selection_status(&self) -> SelectionStatus {
        let selected: Vec<&Appointment> = self
            .store
            .view()
            .iter()
            .filter(|appointment| appointment.is_selected)
            .collect();
        if selected.is_empty() {
            return SelectionStatus {
                count: 0,
                all_activated: false,
                all_deactivated: false,
            };
        }
        SelectionStatus {
            count: selected.len(),
            all_activated: selected.iter().all(|appointment| appointment.is_activated),
            all_deactivated: selected.iter().all(|appointment| !appointment.is_activated),
        }
    }

    /// 编辑 requires exactly one selected row.
    pub fn edit_target(&self) -> Result<Appointment, SelectionError> {
        let mut selected = self
            .store
            .view()
            .iter()
            .filter(|appointment| appointment.is_selected);
        match (selected.next(), selected.next()) {
            (Some(target), None) => Ok(target.clone()),
            (Some(_), Some(_)) => Err(SelectionError::MultipleEditTargets),
            (None, _) => Err(SelectionError::NoEditTarget),
        }
    }

    /// Validates and writes one record. Add appends (duplicate 约号 rejected);
    /// edit replaces by id and keeps the row selected. Either way the view is
    /// re-derived against the active filter.
    pub fn save(&mut self, mut record: Appointment, is_add: bool) -> SaveOutcome {
        let missing = missing_required_fields(&record);
        if !missing.is_empty() {
            return SaveOutcome::MissingFields(missing);
        }
        if let (Some(from), Some(to)) = (record.valid_from, record.valid_to) {
            if from > to {
                return SaveOutcome::InvalidPeriod;
            }
        }

        if is_add {
            if self.store.contains_key(&record.id) {
                return SaveOutcome::DuplicateId;
            }
            record.is_selected = false;
            self.store.insert(record);
            self.refresh_view();
            SaveOutcome::Added
        } else {
            record.is_selected = true;
            let id = record.id.clone();
            self.store.update_by_key(&id, record);
            self.refresh_view();
            SaveOutcome::Updated
        }
    }

    pub fn request_delete(&self) -> Result<ConfirmRequest, SelectionError> {
        let status = self.selection_status();
        if status.count == 0 {
            return Err(SelectionError::EmptySelection);
        }
        Ok(ConfirmRequest {
            title: "确认删除".to_string(),
            content: format!(
                "您确定要删除选中的{}个约号吗？此操作无法撤销。",
                status.count
            ),
            action: BulkAction::Delete,
        })
    }

    pub fn request_activate(&self) -> Result<ConfirmRequest, SelectionError> {
        let status = self.selection_status();
        if status.count == 0 {
            return Err(SelectionError::EmptySelection);
        }
        if !status.all_deactivated {
            return Err(SelectionError::NotAllDeactivated);
        }
        Ok(ConfirmRequest {
            title: "确认激活".to_string(),
            content: "激活后用户将可以在订单详情页面选择此约号，确认启用？".to_string(),
            action: BulkAction::Activate,
        })
    }

    pub fn request_deactivate(&self) -> Result<ConfirmRequest, SelectionError> {
        let status = self.selection_status();
        if status.count == 0 {
            return Err(SelectionError::EmptySelection);
        }
        if !status.all_activated {
            return Err(SelectionError::NotAllActivated);
        }
        Ok(ConfirmRequest {
            title: "确认禁用".to_string(),
            content: "禁用之后，该约号无法在订单详情中被选择，确定禁用？".to_string(),
            action: BulkAction::Deactivate,
        })
    }

    /// Executes a confirmed bulk action over the selected rows: mutate the
    /// full collection, then re-derive the view in the same logical
    /// transaction.
    pub fn confirm(&mut self, action: BulkAction) -> BulkOutcome {
        let ids = self.store.selected_ids();
        let outcome = match action {
            BulkAction::Delete => {
                let removed = self.store.delete_by_keys(&ids);
                BulkOutcome::Deleted(removed)
            }
            BulkAction::Activate => {
                self.store
                    .mutate_by_keys(&ids, |appointment| appointment.is_activated = true);
                BulkOutcome::Activated
            }
            BulkAction::Deactivate => {
                self.store
                    .mutate_by_keys(&ids, |appointment| appointment.is_activated = false);
                BulkOutcome::Deactivated
            }
        };
        self.refresh_view();
        outcome
    }
}

/// Required-field keys that are empty on the record: 约号 and 约价性质 always;
/// NAC、自定义品名、舱保数量/单位 when their gating value demands them.
fn missing_required_fields(record: &Appointment) -> Vec<String> {
    let mut missing = Vec::new();
    if record.id.trim().is_empty() {
        missing.push("id".to_string());
    }
    if record.price_nature.trim().is_empty() {
        missing.push("priceNature".to_string());
    }
    if record.is_nac == Some(true) && record.nac.trim().is_empty() {
        missing.push("nac".to_string());
    }
    if record.applicable_products.as_deref() == Some("其他")
        && record.custom_product.trim().is_empty()
    {
        missing.push("customProduct".to_string());
    }
    if record.cabin_protection.as_deref() == Some("有") {
        if record.cabin_protection_value.trim().is_empty() {
            missing.push("cabinProtectionValue".to_string());
        }
        if record.cabin_protection_unit.trim().is_empty() {
            missing.push("cabinProtectionUnit".to_string());
        }
    }
    missing
}
