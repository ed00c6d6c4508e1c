use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::NaiveDate;
use rusqlite::Connection;

use crate::domain::entities::appointment::{fixture_appointments, Appointment};
use crate::domain::entities::column::{
    default_columns, drawer_ordered, move_column, set_all_visible, visible_ordered, ColumnConfig,
    MoveDirection,
};
use crate::domain::entities::filter::{
    AppointmentCriteria, FilterOp, InquiryCriteria, TextFilter, TriStateFilter,
};
use crate::domain::entities::inquiry::fixture_inquiries;
use crate::domain::predicate::{text_matches, tristate_matches, valid_period_overlaps};
use crate::infra::sqlite::repo::SqliteColumnRepo;
use crate::infra::sqlite::schema::init_db;
use crate::usecase::ports::repo::{ColumnRepository, RepoError};
use crate::usecase::services::board::{AppointmentBoard, BulkOutcome, SaveOutcome, SelectionError};
use crate::usecase::services::column_service::ColumnService;
use crate::usecase::services::filter_engine::{filter_appointments, filter_inquiries, quick_search};
use crate::usecase::services::pagination::{page_numbers, project, total_pages, Pager};
use crate::*;

fn unique_test_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("dioxus-{prefix}-{nanos}"))
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture date should be valid")
}

fn appointment(id: &str) -> Appointment {
    Appointment {
        id: id.to_string(),
        ..Appointment::default()
    }
}

fn seed(count: usize) -> Vec<Appointment> {
    (0..count).map(|idx| appointment(&format!("A{idx:03}"))).collect()
}

#[test]
fn text_filter_operator_matrix() {
    let equals = TextFilter::new("MSC", FilterOp::Equals);
    assert!(text_matches("msc", &equals));
    assert!(!text_matches("MSK", &equals));

    let not_equals = TextFilter::new("MSC", FilterOp::NotEquals);
    assert!(!text_matches("MSC", &not_equals));
    assert!(text_matches("MSK", &not_equals));

    let contains = TextFilter::contains("238");
    assert!(text_matches("WT2383333", &contains));
    assert!(!text_matches("WT999", &contains));

    let not_contains = TextFilter::new("238", FilterOp::NotContains);
    assert!(!text_matches("WT2383333", &not_contains));
    assert!(text_matches("WT999", &not_contains));
}

#[test]
fn text_filter_empty_value_matches_everything() {
    for op in FilterOp::TEXT_OPS {
        let filter = TextFilter::new("", op);
        assert!(text_matches("任意值", &filter), "empty {op:?} should pass");
        assert!(text_matches("", &filter), "empty field should pass too");
    }
}

#[test]
fn tristate_filter_handles_unset_record_value() {
    let wants_yes = TriStateFilter::new("true", FilterOp::Equals);
    assert!(tristate_matches(Some(true), &wants_yes));
    assert!(!tristate_matches(Some(false), &wants_yes));
    assert!(!tristate_matches(None, &wants_yes));

    let wants_no = TriStateFilter::new("false", FilterOp::NotEquals);
    assert!(tristate_matches(Some(true), &wants_no));
    assert!(!tristate_matches(Some(false), &wants_no));

    let unconstrained = TriStateFilter::default();
    assert!(tristate_matches(None, &unconstrained));
}

#[test]
fn period_overlap_requires_both_record_bounds_for_full_range() {
    let from = Some(ymd(2024, 6, 1));
    let to = Some(ymd(2024, 6, 30));

    // intersecting windows pass, disjoint ones fail
    assert!(valid_period_overlaps(
        Some(ymd(2024, 5, 20)),
        Some(ymd(2024, 6, 10)),
        from,
        to
    ));
    assert!(valid_period_overlaps(
        Some(ymd(2024, 6, 30)),
        Some(ymd(2024, 12, 31)),
        from,
        to
    ));
    assert!(!valid_period_overlaps(
        Some(ymd(2024, 7, 1)),
        Some(ymd(2024, 7, 31)),
        from,
        to
    ));
    assert!(!valid_period_overlaps(
        Some(ymd(2024, 1, 1)),
        Some(ymd(2024, 5, 31)),
        from,
        to
    ));

    // a record missing either bound never matches a two-sided query
    assert!(!valid_period_overlaps(None, Some(ymd(2024, 6, 10)), from, to));
    assert!(!valid_period_overlaps(Some(ymd(2024, 6, 10)), None, from, to));
}

#[test]
fn period_overlap_single_bound_checks_one_side() {
    let from = Some(ymd(2024, 6, 1));
    assert!(valid_period_overlaps(
        None,
        Some(ymd(2024, 6, 1)),
        from,
        None
    ));
    assert!(!valid_period_overlaps(
        Some(ymd(2024, 1, 1)),
        Some(ymd(2024, 5, 31)),
        from,
        None
    ));
    assert!(!valid_period_overlaps(Some(ymd(2024, 8, 1)), None, from, None));

    let to = Some(ymd(2024, 6, 30));
    assert!(valid_period_overlaps(Some(ymd(2024, 6, 30)), None, None, to));
    assert!(!valid_period_overlaps(
        Some(ymd(2024, 7, 1)),
        Some(ymd(2024, 7, 31)),
        None,
        to
    ));
    assert!(!valid_period_overlaps(None, Some(ymd(2024, 6, 10)), None, to));
}

#[test]
fn period_overlap_without_filter_bounds_passes_undated_records() {
    assert!(valid_period_overlaps(None, None, None, None));
    assert!(valid_period_overlaps(
        Some(ymd(2024, 1, 1)),
        Some(ymd(2024, 12, 31)),
        None,
        None
    ));
}

#[test]
fn filter_appointments_is_idempotent() {
    let all = fixture_appointments();
    let criteria = AppointmentCriteria {
        is_activated: TriStateFilter::new("true", FilterOp::Equals),
        shipping_company: TextFilter::contains("ms"),
        ..AppointmentCriteria::default()
    };

    let once = filter_appointments(&all, &criteria);
    let twice = filter_appointments(&once, &criteria);

    assert!(!once.is_empty(), "fixtures should contain matching rows");
    assert_eq!(once, twice, "re-filtering a filtered view must not shrink it");
}

#[test]
fn filter_appointments_combines_criteria_with_and() {
    let all = fixture_appointments();
    let criteria = AppointmentCriteria {
        shipping_company: TextFilter::equals("MSC"),
        is_activated: TriStateFilter::new("false", FilterOp::Equals),
        ..AppointmentCriteria::default()
    };

    let matched = filter_appointments(&all, &criteria);

    assert!(matched
        .iter()
        .all(|row| row.shipping_company.eq_ignore_ascii_case("MSC") && !row.is_activated));
}

#[test]
fn filter_appointments_date_range_uses_overlap() {
    let mut with_dates = appointment("D001");
    with_dates.valid_from = Some(ymd(2024, 5, 1));
    with_dates.valid_to = Some(ymd(2024, 6, 15));
    let mut outside = appointment("D002");
    outside.valid_from = Some(ymd(2024, 8, 1));
    outside.valid_to = Some(ymd(2024, 8, 31));
    let undated = appointment("D003");

    let criteria = AppointmentCriteria {
        valid_from: Some(ymd(2024, 6, 1)),
        valid_to: Some(ymd(2024, 6, 30)),
        ..AppointmentCriteria::default()
    };

    let matched = filter_appointments(&[with_dates, outside, undated], &criteria);

    let ids: Vec<&str> = matched.iter().map(|row| row.id.as_str()).collect();
    assert_eq!(ids, vec!["D001"]);
}

#[test]
fn quick_search_scans_id_line_and_company() {
    let all = fixture_appointments();

    let by_id = quick_search(&all, "2383");
    assert!(by_id.iter().any(|row| row.id == "WT2383333"));

    let by_company = quick_search(&all, "msc");
    assert!(by_company.iter().all(|row| {
        row.id.to_lowercase().contains("msc")
            || row.line.to_lowercase().contains("msc")
            || row.shipping_company.to_lowercase().contains("msc")
    }));
    assert!(!by_company.is_empty());

    let everything = quick_search(&all, "  ");
    assert_eq!(everything.len(), all.len(), "blank term should not filter");
}

#[test]
fn filter_inquiries_matches_ticket_fields() {
    let all = fixture_inquiries();
    let criteria = InquiryCriteria {
        shipping_company: TextFilter::contains("msc"),
        ..InquiryCriteria::default()
    };

    let matched = filter_inquiries(&all, &criteria);

    assert!(!matched.is_empty());
    assert!(matched
        .iter()
        .all(|ticket| ticket.shipping_company.to_lowercase().contains("msc")));
}

#[test]
fn view_stays_consistent_with_store_through_mutations() {
    let mut board = AppointmentBoard::with_fixtures();
    let criteria = AppointmentCriteria {
        is_activated: TriStateFilter::new("true", FilterOp::Equals),
        ..AppointmentCriteria::default()
    };
    board.apply_filter(criteria);
    assert!(board.view().iter().all(|row| row.is_activated));

    // an added deactivated row lands in the full collection, not the view
    let mut off = appointment("NEW001");
    off.is_activated = false;
    assert_eq!(board.save(off, true), SaveOutcome::Added);
    assert!(board.all().iter().any(|row| row.id == "NEW001"));
    assert!(!board.view().iter().any(|row| row.id == "NEW001"));

    // the view is always a subset of the full collection
    for row in board.view() {
        assert!(board.all().iter().any(|kept| kept.id == row.id));
    }

    board.reset_filter();
    assert_eq!(board.view().len(), board.all().len());
}

#[test]
fn selection_survives_view_rederive() {
    let mut board = AppointmentBoard::with_fixtures();
    board.toggle_selection("888888");

    board.apply_filter(AppointmentCriteria {
        appointment_number: TextFilter::contains("888"),
        ..AppointmentCriteria::default()
    });

    let in_view = board
        .view()
        .iter()
        .find(|row| row.id == "888888")
        .expect("888888 should match the filter");
    assert!(in_view.is_selected, "selection must follow into the view");

    board.reset_filter();
    let in_all = board
        .all()
        .iter()
        .find(|row| row.id == "888888")
        .expect("row should still exist");
    assert!(in_all.is_selected);
}

#[test]
fn edit_target_requires_exactly_one_selection() {
    let mut board = AppointmentBoard::new(seed(3));
    assert_eq!(board.edit_target(), Err(SelectionError::NoEditTarget));

    board.toggle_selection("A000");
    assert_eq!(board.edit_target().map(|row| row.id), Ok("A000".to_string()));

    board.toggle_selection("A001");
    assert_eq!(board.edit_target(), Err(SelectionError::MultipleEditTargets));
}

#[test]
fn save_rejects_duplicate_id_on_add() {
    let mut board = AppointmentBoard::with_fixtures();
    let before = board.all().len();

    let outcome = board.save(appointment("888888"), true);

    assert_eq!(outcome, SaveOutcome::DuplicateId);
    assert_eq!(board.all().len(), before, "rejected add must not insert");
}

#[test]
fn save_reports_conditionally_required_fields() {
    let mut record = Appointment {
        id: String::new(),
        price_nature: String::new(),
        is_nac: Some(true),
        applicable_products: Some("其他".to_string()),
        cabin_protection: Some("有".to_string()),
        cabin_protection_unit: String::new(),
        ..Appointment::default()
    };
    record.nac = String::new();

    let mut board = AppointmentBoard::new(Vec::new());
    let outcome = board.save(record, true);

    let SaveOutcome::MissingFields(keys) = outcome else {
        panic!("expected missing fields, got {outcome:?}");
    };
    for expected in [
        "id",
        "priceNature",
        "nac",
        "customProduct",
        "cabinProtectionValue",
        "cabinProtectionUnit",
    ] {
        assert!(keys.iter().any(|key| key == expected), "missing {expected}");
    }
}

#[test]
fn save_rejects_inverted_validity_period() {
    let mut record = appointment("P001");
    record.valid_from = Some(ymd(2024, 7, 1));
    record.valid_to = Some(ymd(2024, 6, 1));

    let mut board = AppointmentBoard::new(Vec::new());

    assert_eq!(board.save(record, true), SaveOutcome::InvalidPeriod);
    assert!(board.all().is_empty());
}

#[test]
fn save_edit_replaces_row_and_keeps_it_selected() {
    let mut board = AppointmentBoard::new(seed(2));
    board.toggle_selection("A001");

    let mut updated = appointment("A001");
    updated.line = "欧洲线".to_string();
    assert_eq!(board.save(updated, false), SaveOutcome::Updated);

    let row = board
        .all()
        .iter()
        .find(|row| row.id == "A001")
        .expect("edited row should exist");
    assert_eq!(row.line, "欧洲线");
    assert!(row.is_selected, "edited row stays selected");
}

#[test]
fn save_edit_with_unknown_id_is_a_no_op() {
    let mut board = AppointmentBoard::new(seed(2));
    let before = board.all().to_vec();

    assert_eq!(board.save(appointment("GHOST"), false), SaveOutcome::Updated);

    assert_eq!(board.all(), &before[..], "unknown id must change nothing");
}

#[test]
fn mixed_selection_blocks_activate_and_deactivate() {
    let mut rows = seed(2);
    rows[0].is_activated = true;
    rows[1].is_activated = false;
    let mut board = AppointmentBoard::new(rows);
    board.toggle_selection("A000");
    board.toggle_selection("A001");

    assert_eq!(
        board.request_activate(),
        Err(SelectionError::NotAllDeactivated)
    );
    assert_eq!(
        board.request_deactivate(),
        Err(SelectionError::NotAllActivated)
    );
    // the gate alone must not touch activation state
    assert!(board.all()[0].is_activated);
    assert!(!board.all()[1].is_activated);
}

#[test]
fn bulk_requests_need_a_selection() {
    let board = AppointmentBoard::new(seed(1));

    assert_eq!(board.request_delete(), Err(SelectionError::EmptySelection));
    assert_eq!(board.request_activate(), Err(SelectionError::EmptySelection));
    assert_eq!(
        board.request_deactivate(),
        Err(SelectionError::EmptySelection)
    );
}

#[test]
fn confirmed_delete_removes_selection_from_both_collections() {
    let mut board = AppointmentBoard::new(seed(4));
    board.toggle_selection("A001");
    board.toggle_selection("A003");

    let request = board.request_delete().expect("selection should allow delete");
    assert_eq!(request.title, "确认删除");
    assert!(request.content.contains("2个约号"));

    let outcome = board.confirm(request.action);

    assert_eq!(outcome, BulkOutcome::Deleted(2));
    assert_eq!(outcome.message(), "成功删除2个约号");
    assert_eq!(board.all().len(), 2);
    assert!(!board.all().iter().any(|row| row.id == "A001"));
    assert!(!board.view().iter().any(|row| row.id == "A003"));
}

#[test]
fn confirmed_activate_flips_all_selected_rows() {
    let mut rows = seed(3);
    for row in &mut rows {
        row.is_activated = false;
    }
    let mut board = AppointmentBoard::new(rows);
    board.toggle_selection("A000");
    board.toggle_selection("A002");

    let request = board
        .request_activate()
        .expect("all-deactivated selection should allow activate");
    let outcome = board.confirm(request.action);

    assert_eq!(outcome, BulkOutcome::Activated);
    assert!(board.all()[0].is_activated);
    assert!(!board.all()[1].is_activated, "unselected row untouched");
    assert!(board.all()[2].is_activated);
}

#[test]
fn header_checkbox_drives_page_selection() {
    let mut board = AppointmentBoard::new(seed(30));
    let page: BTreeSet<String> = board.view()[..10]
        .iter()
        .map(|row| row.id.clone())
        .collect();

    board.set_selection_for_keys(&page, true);
    assert_eq!(board.selection_status().count, 10);

    board.set_selection_for_keys(&page, false);
    assert_eq!(board.selection_status().count, 0);
}

#[test]
fn projection_resets_to_first_page_when_view_shrinks() {
    let rows = seed(25);
    let page3 = project(&rows, 3, 10);
    assert_eq!(page3.page, 3);
    assert_eq!(page3.total_pages, 3);
    assert_eq!(page3.items.len(), 5);

    // the filter cut the view under the current page
    let filtered = seed(5);
    let reset = project(&filtered, 3, 10);
    assert_eq!(reset.page, 1, "out-of-range page resets to 1");
    assert_eq!(reset.total_pages, 1);
    assert_eq!(reset.items.len(), 5);
}

#[test]
fn empty_view_still_reports_one_page() {
    let empty: Vec<Appointment> = Vec::new();
    let projection = project(&empty, 1, 10);

    assert_eq!(projection.total_pages, 1);
    assert_eq!(projection.page, 1);
    assert!(projection.items.is_empty());

    assert_eq!(total_pages(0, 10), 1);
    assert_eq!(total_pages(10, 0), 1, "zero page size must not divide");
}

#[test]
fn pager_ignores_out_of_range_targets() {
    let mut pager = Pager::default();
    pager.go_to(2, 3);
    assert_eq!(pager.current_page, 2);

    pager.go_to(0, 3);
    assert_eq!(pager.current_page, 2, "page 0 is ignored");
    pager.go_to(9, 3);
    assert_eq!(pager.current_page, 2, "page past the end is ignored");
}

#[test]
fn page_size_change_restarts_at_first_page() {
    let mut pager = Pager {
        current_page: 3,
        page_size: 10,
    };

    pager.set_page_size(50);

    assert_eq!(pager.page_size, 50);
    assert_eq!(pager.current_page, 1);
}

#[test]
fn pager_clamp_matches_projection_policy() {
    let mut pager = Pager {
        current_page: 3,
        page_size: 10,
    };

    pager.clamp(25);
    assert_eq!(pager.current_page, 3, "still in range");

    pager.clamp(5);
    assert_eq!(pager.current_page, 1, "shrunk view resets to page 1");
}

#[test]
fn page_number_strip_windows_around_current() {
    assert_eq!(page_numbers(1, 3), vec![1, 2, 3]);
    assert_eq!(page_numbers(1, 9), vec![1, 2, 3, 4, 5]);
    assert_eq!(page_numbers(5, 9), vec![3, 4, 5, 6, 7]);
    assert_eq!(page_numbers(9, 9), vec![5, 6, 7, 8, 9]);
    assert_eq!(page_numbers(1, 0), Vec::<usize>::new());
}

#[test]
fn visible_ordered_filters_and_sorts_by_order() {
    let mut configs = default_columns();
    configs[0].visible = false;
    configs[1].order = 99;

    let visible = visible_ordered(&configs);

    assert!(!visible.iter().any(|config| config.key == configs[0].key));
    assert_eq!(
        visible.last().map(|config| config.key.clone()),
        Some(configs[1].key.clone()),
        "reordered column should sort to the back"
    );
}

#[test]
fn move_column_swaps_neighbours_and_renumbers() {
    let mut configs = default_columns();
    let first = configs[0].key.clone();
    let second = configs[1].key.clone();

    move_column(&mut configs, 1, MoveDirection::Up);

    assert_eq!(configs[0].key, second);
    assert_eq!(configs[1].key, first);
    for (index, config) in configs.iter().enumerate() {
        assert_eq!(config.order, index as i64, "orders renumber contiguously");
    }
}

#[test]
fn move_column_at_boundary_is_a_no_op() {
    let mut configs = default_columns();
    let snapshot = configs.clone();
    let last = configs.len() - 1;

    move_column(&mut configs, 0, MoveDirection::Up);
    move_column(&mut configs, last, MoveDirection::Down);

    assert_eq!(configs, snapshot);
}

#[test]
fn set_all_visible_flips_every_column() {
    let mut configs = default_columns();
    set_all_visible(&mut configs, false);
    assert!(configs.iter().all(|config| !config.visible));
    assert!(visible_ordered(&configs).is_empty());

    set_all_visible(&mut configs, true);
    assert_eq!(drawer_ordered(&configs).len(), configs.len());
}

#[test]
fn init_db_creates_column_setting_table() {
    let temp_dir = unique_test_dir("init-db");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let db_path = temp_dir.join("settings.sqlite");

    let result = init_db(&db_path);

    assert!(result.is_ok(), "init_db should succeed: {result:?}");

    let conn = Connection::open(&db_path).expect("should open sqlite db");
    let table_count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'column_setting'",
            [],
            |row| row.get(0),
        )
        .expect("table count query should succeed");

    assert_eq!(table_count, 1, "column_setting table should exist");

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn column_config_round_trips_through_sqlite() {
    let temp_dir = unique_test_dir("column-roundtrip");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let db_path = temp_dir.join("settings.sqlite");

    let repo = SqliteColumnRepo::new(db_path);
    repo.init().expect("init should succeed");

    let mut saved = default_columns();
    saved[2].visible = false;
    saved.swap(0, 1);
    for (index, config) in saved.iter_mut().enumerate() {
        config.order = index as i64;
    }

    repo.save_columns(&saved).expect("save should succeed");
    let loaded = repo.load_columns().expect("load should succeed");
    assert_eq!(loaded, saved, "load must return what was saved, in order");

    // a second save overwrites rather than appends
    repo.save_columns(&loaded).expect("re-save should succeed");
    let reloaded = repo.load_columns().expect("reload should succeed");
    assert_eq!(reloaded, saved);

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn column_service_defaults_when_store_is_empty() {
    let temp_dir = unique_test_dir("column-defaults");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let db_path = temp_dir.join("settings.sqlite");

    let service = ColumnService::new(Arc::new(SqliteColumnRepo::new(db_path)));
    service.init().expect("init should succeed");

    assert_eq!(service.load(), default_columns());

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

struct FailingColumnRepo;

impl ColumnRepository for FailingColumnRepo {
    fn init(&self) -> Result<(), RepoError> {
        Ok(())
    }

    fn load_columns(&self) -> Result<Vec<ColumnConfig>, RepoError> {
        Err(RepoError::Message("column store unreadable".to_string()))
    }

    fn save_columns(&self, _columns: &[ColumnConfig]) -> Result<(), RepoError> {
        Err(RepoError::Message("column store unwritable".to_string()))
    }
}

#[test]
fn column_service_falls_back_to_defaults_on_repo_error() {
    let service = ColumnService::new(Arc::new(FailingColumnRepo));

    assert_eq!(service.load(), default_columns());
    assert!(service.save(&default_columns()).is_err());
}

#[test]
fn appointment_cells_render_display_values() {
    let mut record = appointment("888888");
    record.shipping_company = "MSC".to_string();
    record.is_nac = Some(true);
    record.is_activated = false;
    record.valid_from = Some(ymd(2024, 5, 10));
    record.valid_to = Some(ymd(2024, 12, 31));

    assert_eq!(record.cell("shippingCompany"), "MSC | 地中海");
    assert_eq!(record.cell("isNAC"), "是");
    assert_eq!(record.cell("isActivated"), "否");
    assert_eq!(record.cell("validPeriod"), "2024-05-10 至 2024-12-31");

    record.is_nac = None;
    assert_eq!(record.cell("isNAC"), "");

    record.valid_to = None;
    assert_eq!(record.cell("validPeriod"), "2024-05-10 起");
}

#[test]
fn default_db_path_uses_appointment_desk_directory() {
    let db_path = default_db_path().expect("default db path should resolve");
    let app_dir = db_path
        .parent()
        .and_then(|path| path.file_name())
        .and_then(|name| name.to_str())
        .expect("db path should include app directory");

    assert_eq!(
        db_path.file_name().and_then(|name| name.to_str()),
        Some("settings.sqlite")
    );
    assert_eq!(app_dir, "appointment-desk");
}

#[test]
fn ensure_webview_data_dir_creates_webview2_subdir() {
    let temp_dir = unique_test_dir("webview-data-dir");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");

    let webview_dir =
        ensure_webview_data_dir(&temp_dir).expect("webview data dir should be created");

    assert_eq!(webview_dir, temp_dir.join("webview2"));
    assert!(webview_dir.is_dir(), "webview2 directory should exist");

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}
