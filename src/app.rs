use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::default_db_path;
use crate::domain::entities::appointment::{format_shipping_company, Appointment};
use crate::domain::entities::column::{
    drawer_ordered, move_column, set_all_visible, visible_ordered, MoveDirection,
};
use crate::domain::entities::filter::{AppointmentCriteria, FilterOp};
use crate::infra::sqlite::repo::SqliteColumnRepo;
use crate::ui::state::app_state::{AppState, Toast, ToastKind};
use crate::usecase::services::board::{BulkAction, SaveOutcome};
use crate::usecase::services::column_service::ColumnService;
use crate::usecase::services::pagination::{page_numbers, project};

const PAGE_SIZES: [usize; 4] = [10, 20, 50, 100];

const SHIPPING_COMPANY_CODES: [&str; 10] = [
    "MSC", "COSCO", "OOCL", "CMA", "ONE", "HAPAG", "ZIM", "MAERSK", "EVERGREEN", "YANGMING",
];

const PRICE_NATURES: [&str; 7] = [
    "自有约价",
    "客户约价",
    "海外代理约价",
    "无约价",
    "同行约价",
    "AFC约价",
    "AFG约价",
];

const PRODUCT_OPTIONS: [&str; 7] = [
    "化工品", "危险品", "特种柜", "冷冻货", "FAK", "纺织品", "其他",
];

const CABIN_UNITS: [&str; 5] = ["TEU/水", "TEU/周", "TEU/月", "TEU/年", "TEU/合约期"];

fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}

fn date_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn header_cell_style() -> &'static str {
    "border: 1px solid #d9d9d9; background: #fafafa; padding: 6px 10px; text-align: left; white-space: nowrap;"
}

fn cell_style() -> &'static str {
    "border: 1px solid #e8e8e8; padding: 6px 10px; white-space: nowrap;"
}

fn primary_button_style() -> &'static str {
    "border: 1px solid #1677ff; background: #1677ff; color: #fff; padding: 4px 14px; border-radius: 4px; cursor: pointer;"
}

fn danger_button_style() -> &'static str {
    "border: 1px solid #d93026; background: #d93026; color: #fff; padding: 4px 14px; border-radius: 4px; cursor: pointer;"
}

fn plain_button_style() -> &'static str {
    "border: 1px solid #bbb; background: #fff; padding: 4px 14px; border-radius: 4px; cursor: pointer;"
}

fn overlay_style() -> &'static str {
    "position: fixed; inset: 0; background: rgba(0,0,0,0.35); display: flex; align-items: center; justify-content: center; z-index: 1100;"
}

fn field_style(missing: bool) -> &'static str {
    if missing {
        "border: 1px solid #d93026; padding: 4px 8px; border-radius: 4px; width: 100%;"
    } else {
        "border: 1px solid #bbb; padding: 4px 8px; border-radius: 4px; width: 100%;"
    }
}

fn toast_style(kind: ToastKind) -> String {
    let background = match kind {
        ToastKind::Success => "#52c41a",
        ToastKind::Error => "#d93026",
        ToastKind::Info => "#1677ff",
    };
    format!(
        "position: fixed; top: 16px; left: 50%; transform: translateX(-50%); z-index: 1200; padding: 8px 16px; border-radius: 4px; color: #fff; background: {background};"
    )
}

fn required_mark() -> Element {
    rsx! {
        span { style: "color: #d93026; font-size: 12px;", "必填" }
    }
}

#[component]
fn OperatorSelect(ops: Vec<FilterOp>, selected: FilterOp, on_select: EventHandler<FilterOp>) -> Element {
    rsx! {
        select {
            style: "border: 1px solid #bbb; border-radius: 4px; padding: 3px 6px;",
            value: selected.label(),
            onchange: move |event| {
                if let Some(op) = FilterOp::from_label(&event.value()) {
                    on_select.call(op);
                }
            },
            {ops.iter().map(|op| {
                let label = op.label();
                rsx!(option { value: label, selected: *op == selected, "{label}" })
            })}
        }
    }
}

#[component]
pub fn App() -> Element {
    let db_path = match default_db_path() {
        Ok(path) => path,
        Err(err) => {
            return rsx! {
                div {
                    p { "无法取得设置数据库路径：{err}" }
                }
            };
        }
    };

    let column_service = Arc::new(ColumnService::new(Arc::new(SqliteColumnRepo::new(db_path))));

    let AppState {
        mut board,
        mut pager,
        mut columns,
        mut criteria,
        mut filter_from_input,
        mut filter_to_input,
        mut filter_expanded,
        mut quick_term,
        mut go_to_page,
        mut toast,
        mut confirm,
        mut show_column_drawer,
        mut drawer_columns,
        mut show_editor,
        mut editor_is_add,
        mut editor_form,
        mut editor_valid_from,
        mut editor_valid_to,
        mut editor_missing,
    } = AppState::new();

    let column_service_for_init = column_service.clone();
    use_effect(move || {
        if let Err(err) = column_service_for_init.init() {
            log::warn!("初始化列设置存储失败: {err}");
        }
        *columns.write() = column_service_for_init.load();
    });

    let board_now = board();
    let view_len = board_now.view().len();
    let total_records = board_now.all().len();
    let projection = project(board_now.view(), pager().current_page, pager().page_size);
    let total_pages_now = projection.total_pages;
    let current_page_now = projection.page;
    let visible_cols = visible_ordered(&columns());
    let page_ids: BTreeSet<String> = projection
        .items
        .iter()
        .map(|appointment| appointment.id.clone())
        .collect();
    let all_page_selected =
        !projection.items.is_empty() && projection.items.iter().all(|a| a.is_selected);
    let page_strip = page_numbers(current_page_now, total_pages_now);
    let current_criteria = criteria();
    let current_form = editor_form();
    let missing_keys = editor_missing();
    let missing = |key: &str| missing_keys.iter().any(|entry| entry == key);
    let drawer_all_visible = drawer_columns().iter().all(|config| config.visible);
    let drawer_len = drawer_columns().len();
    let page_size_value = pager().page_size.to_string();
    let column_service_for_drawer = column_service.clone();

    rsx! {
        div {
            style: "font-family: 'Microsoft YaHei', sans-serif; padding: 12px; background: #f5f6f8; min-height: 100vh;",

            div {
                style: "font-size: 16px; font-weight: 600; padding-bottom: 8px;",
                "船公司约号管理"
            }

            if let Some(current) = toast() {
                div {
                    style: toast_style(current.kind),
                    span { "{current.message}" }
                    button {
                        style: "margin-left: 10px; border: none; background: transparent; color: #fff; cursor: pointer;",
                        onclick: move |_| toast.set(None),
                        "×"
                    }
                }
            }

            // 筛选面板
            div {
                style: "background: #fff; border: 1px solid #e8e8e8; border-radius: 6px; padding: 10px 12px; margin-bottom: 12px;",
                div {
                    style: "display: flex; gap: 8px; align-items: center; flex-wrap: wrap;",
                    button {
                        style: plain_button_style(),
                        onclick: move |_| {
                            let next = !filter_expanded();
                            filter_expanded.set(next);
                        },
                        if filter_expanded() { "▲ 收起" } else { "▼ 展开" }
                    }
                    if !filter_expanded() {
                        input {
                            style: "border: 1px solid #bbb; border-radius: 4px; padding: 4px 8px; width: 200px;",
                            placeholder: "快捷检索:约号",
                            value: "{quick_term}",
                            oninput: move |event| quick_term.set(event.value()),
                        }
                    }
                    button {
                        style: primary_button_style(),
                        onclick: move |_| {
                            if filter_expanded() {
                                let mut submitted = criteria();
                                submitted.valid_from = parse_date(&filter_from_input());
                                submitted.valid_to = parse_date(&filter_to_input());
                                board.write().apply_filter(submitted);
                            } else {
                                let term = quick_term();
                                board.write().apply_quick_search(&term);
                            }
                            let len = board.read().view().len();
                            pager.write().clamp(len);
                        },
                        "查询"
                    }
                    button {
                        style: primary_button_style(),
                        onclick: move |_| {
                            editor_is_add.set(true);
                            editor_form.set(Appointment::default());
                            editor_valid_from.set(String::new());
                            editor_valid_to.set(String::new());
                            editor_missing.set(Vec::new());
                            show_editor.set(true);
                        },
                        "新增"
                    }
                    button {
                        style: primary_button_style(),
                        onclick: move |_| {
                            match board.read().edit_target() {
                                Ok(target) => {
                                    editor_is_add.set(false);
                                    editor_valid_from.set(date_input_value(target.valid_from));
                                    editor_valid_to.set(date_input_value(target.valid_to));
                                    editor_form.set(target);
                                    editor_missing.set(Vec::new());
                                    show_editor.set(true);
                                }
                                Err(reason) => toast.set(Some(Toast::error(reason.message()))),
                            }
                        },
                        "编辑"
                    }
                    button {
                        style: danger_button_style(),
                        onclick: move |_| {
                            match board.read().request_delete() {
                                Ok(request) => confirm.set(Some(request)),
                                Err(reason) => toast.set(Some(Toast::error(reason.message()))),
                            }
                        },
                        "删除"
                    }
                    button {
                        style: primary_button_style(),
                        onclick: move |_| {
                            match board.read().request_activate() {
                                Ok(request) => confirm.set(Some(request)),
                                Err(reason) => toast.set(Some(Toast::error(reason.message()))),
                            }
                        },
                        "启用"
                    }
                    button {
                        style: plain_button_style(),
                        onclick: move |_| {
                            match board.read().request_deactivate() {
                                Ok(request) => confirm.set(Some(request)),
                                Err(reason) => toast.set(Some(Toast::error(reason.message()))),
                            }
                        },
                        "禁用"
                    }
                    button {
                        style: plain_button_style(),
                        onclick: move |_| {
                            criteria.set(AppointmentCriteria::default());
                            filter_from_input.set(String::new());
                            filter_to_input.set(String::new());
                            quick_term.set(String::new());
                            board.write().reset_filter();
                            let len = board.read().view().len();
                            pager.write().clamp(len);
                        },
                        "重置条件"
                    }
                }

                if filter_expanded() {
                    div {
                        style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 10px; margin-top: 10px;",

                        div {
                            label { style: "display: block; margin-bottom: 4px;", "约号" }
                            div { style: "display: flex; gap: 6px;",
                                OperatorSelect {
                                    ops: FilterOp::TEXT_OPS.to_vec(),
                                    selected: current_criteria.appointment_number.op,
                                    on_select: move |op| criteria.write().appointment_number.op = op,
                                }
                                input {
                                    style: field_style(false),
                                    placeholder: "请输入约号",
                                    value: current_criteria.appointment_number.value.clone(),
                                    oninput: move |event| criteria.write().appointment_number.value = event.value(),
                                }
                            }
                        }

                        div {
                            label { style: "display: block; margin-bottom: 4px;", "适用航线" }
                            div { style: "display: flex; gap: 6px;",
                                OperatorSelect {
                                    ops: FilterOp::TEXT_OPS.to_vec(),
                                    selected: current_criteria.line.op,
                                    on_select: move |op| criteria.write().line.op = op,
                                }
                                input {
                                    style: field_style(false),
                                    placeholder: "请输入适用航线",
                                    value: current_criteria.line.value.clone(),
                                    oninput: move |event| criteria.write().line.value = event.value(),
                                }
                            }
                        }

                        div {
                            label { style: "display: block; margin-bottom: 4px;", "船公司" }
                            div { style: "display: flex; gap: 6px;",
                                OperatorSelect {
                                    ops: FilterOp::TEXT_OPS.to_vec(),
                                    selected: current_criteria.shipping_company.op,
                                    on_select: move |op| criteria.write().shipping_company.op = op,
                                }
                                input {
                                    style: field_style(false),
                                    placeholder: "请输入船公司",
                                    value: current_criteria.shipping_company.value.clone(),
                                    oninput: move |event| criteria.write().shipping_company.value = event.value(),
                                }
                            }
                        }

                        div {
                            label { style: "display: block; margin-bottom: 4px;", "约价性质" }
                            div { style: "display: flex; gap: 6px;",
                                OperatorSelect {
                                    ops: FilterOp::EQUALITY_OPS.to_vec(),
                                    selected: current_criteria.price_nature.op,
                                    on_select: move |op| criteria.write().price_nature.op = op,
                                }
                                select {
                                    style: field_style(false),
                                    value: current_criteria.price_nature.value.clone(),
                                    onchange: move |event| criteria.write().price_nature.value = event.value(),
                                    option { value: "", "全部" }
                                    for nature in PRICE_NATURES.iter() {
                                        option { value: *nature, "{nature}" }
                                    }
                                }
                            }
                        }

                        div {
                            label { style: "display: block; margin-bottom: 4px;", "是否NAC" }
                            div { style: "display: flex; gap: 6px;",
                                OperatorSelect {
                                    ops: FilterOp::EQUALITY_OPS.to_vec(),
                                    selected: current_criteria.is_nac.op,
                                    on_select: move |op| criteria.write().is_nac.op = op,
                                }
                                select {
                                    style: field_style(false),
                                    value: current_criteria.is_nac.value.clone(),
                                    onchange: move |event| criteria.write().is_nac.value = event.value(),
                                    option { value: "", "全部" }
                                    option { value: "true", "是" }
                                    option { value: "false", "否" }
                                }
                            }
                        }

                        div {
                            label { style: "display: block; margin-bottom: 4px;", "是否启用" }
                            div { style: "display: flex; gap: 6px;",
                                OperatorSelect {
                                    ops: FilterOp::EQUALITY_OPS.to_vec(),
                                    selected: current_criteria.is_activated.op,
                                    on_select: move |op| criteria.write().is_activated.op = op,
                                }
                                select {
                                    style: field_style(false),
                                    value: current_criteria.is_activated.value.clone(),
                                    onchange: move |event| criteria.write().is_activated.value = event.value(),
                                    option { value: "", "全部" }
                                    option { value: "true", "是" }
                                    option { value: "false", "否" }
                                }
                            }
                        }

                        div {
                            label { style: "display: block; margin-bottom: 4px;", "有效期（范围）" }
                            div { style: "display: flex; gap: 6px; align-items: center;",
                                input {
                                    r#type: "date",
                                    style: field_style(false),
                                    value: "{filter_from_input}",
                                    oninput: move |event| filter_from_input.set(event.value()),
                                }
                                span { "至" }
                                input {
                                    r#type: "date",
                                    style: field_style(false),
                                    value: "{filter_to_input}",
                                    oninput: move |event| filter_to_input.set(event.value()),
                                }
                            }
                        }
                    }
                }
            }

            // 表格
            div {
                style: "background: #fff; border: 1px solid #e8e8e8; border-radius: 6px; padding: 10px 12px;",
                div {
                    style: "display: flex; justify-content: flex-end; margin-bottom: 8px;",
                    button {
                        style: plain_button_style(),
                        onclick: move |_| {
                            drawer_columns.set(drawer_ordered(&columns()));
                            show_column_drawer.set(true);
                        },
                        "设置列"
                    }
                }

                table {
                    style: "border-collapse: collapse; width: 100%; background: #fff;",
                    thead {
                        tr {
                            th { style: header_cell_style(),
                                input {
                                    r#type: "checkbox",
                                    checked: all_page_selected,
                                    onclick: {
                                        let page_ids = page_ids.clone();
                                        move |_| {
                                            board.write().set_selection_for_keys(&page_ids, !all_page_selected);
                                        }
                                    }
                                }
                            }
                            for column in visible_cols.iter() {
                                th { style: header_cell_style(), "{column.title}" }
                            }
                        }
                    }
                    tbody {
                        {projection.items.iter().map(|appointment| {
                            let row_id = appointment.id.clone();
                            let row_selected = appointment.is_selected;
                            let cells: Vec<String> = visible_cols
                                .iter()
                                .map(|column| appointment.cell(&column.key))
                                .collect();
                            let row_style = if row_selected {
                                "background: #eef4ff; cursor: pointer;"
                            } else {
                                "cursor: pointer;"
                            };
                            let toggle_id = row_id.clone();
                            let checkbox_id = row_id.clone();
                            rsx!(
                                tr {
                                    key: "{row_id}",
                                    style: row_style,
                                    onclick: move |_| {
                                        board.write().toggle_selection(&toggle_id);
                                    },
                                    td { style: cell_style(),
                                        input {
                                            r#type: "checkbox",
                                            checked: row_selected,
                                            onclick: move |event: Event<MouseData>| {
                                                event.stop_propagation();
                                                board.write().toggle_selection(&checkbox_id);
                                            }
                                        }
                                    }
                                    {cells.iter().map(|text| rsx!(
                                        td { style: cell_style(), "{text}" }
                                    ))}
                                }
                            )
                        })}
                    }
                }

                // 分页器
                div {
                    style: "display: flex; justify-content: space-between; align-items: center; margin-top: 10px; flex-wrap: wrap; gap: 8px;",
                    div {
                        span { "共 {view_len} 条记录（全部 {total_records} 条），每页 " }
                        select {
                            style: "border: 1px solid #bbb; border-radius: 4px; padding: 2px 6px;",
                            value: page_size_value,
                            onchange: move |event| {
                                if let Ok(size) = event.value().parse::<usize>() {
                                    pager.write().set_page_size(size);
                                }
                            },
                            {PAGE_SIZES.iter().map(|size| {
                                let size = size.to_string();
                                rsx!(option { value: size.clone(), "{size}" })
                            })}
                        }
                        span { " 条，共 {total_pages_now} 页" }
                    }
                    div {
                        style: "display: flex; gap: 4px; align-items: center;",
                        button {
                            style: plain_button_style(),
                            disabled: current_page_now == 1,
                            onclick: move |_| pager.write().go_to(1, total_pages_now),
                            "首页"
                        }
                        button {
                            style: plain_button_style(),
                            disabled: current_page_now == 1,
                            onclick: move |_| {
                                let target = current_page_now.saturating_sub(1);
                                pager.write().go_to(target, total_pages_now);
                            },
                            "<"
                        }
                        {page_strip.iter().map(|page| {
                            let page = *page;
                            let active = page == current_page_now;
                            let style = if active {
                                "border: 1px solid #1677ff; background: #1677ff; color: #fff; padding: 4px 10px; border-radius: 4px;"
                            } else {
                                "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 4px; cursor: pointer;"
                            };
                            rsx!(
                                button {
                                    key: "{page}",
                                    style: style,
                                    onclick: move |_| pager.write().go_to(page, total_pages_now),
                                    "{page}"
                                }
                            )
                        })}
                        button {
                            style: plain_button_style(),
                            disabled: current_page_now == total_pages_now,
                            onclick: move |_| pager.write().go_to(current_page_now + 1, total_pages_now),
                            ">"
                        }
                        button {
                            style: plain_button_style(),
                            disabled: current_page_now == total_pages_now,
                            onclick: move |_| pager.write().go_to(total_pages_now, total_pages_now),
                            "末页"
                        }
                        span { style: "margin-left: 8px;", "前往" }
                        input {
                            style: "border: 1px solid #bbb; border-radius: 4px; padding: 2px 6px; width: 48px;",
                            value: "{go_to_page}",
                            oninput: move |event| go_to_page.set(event.value()),
                        }
                        span { "页" }
                        button {
                            style: plain_button_style(),
                            onclick: move |_| {
                                if let Ok(page) = go_to_page().trim().parse::<usize>() {
                                    pager.write().go_to(page, total_pages_now);
                                }
                                go_to_page.set(String::new());
                            },
                            "确定"
                        }
                    }
                }
            }

            // 设置列抽屉
            if show_column_drawer() {
                div {
                    style: overlay_style(),
                    div {
                        style: "background: #fff; border-radius: 6px; padding: 16px; min-width: 340px; max-height: 80vh; overflow-y: auto;",
                        div {
                            style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 10px;",
                            span { style: "font-weight: 600;", "设置列" }
                            button {
                                style: "border: none; background: transparent; cursor: pointer; font-size: 16px;",
                                onclick: move |_| show_column_drawer.set(false),
                                "×"
                            }
                        }
                        div {
                            style: "display: flex; align-items: center; gap: 6px; margin-bottom: 8px;",
                            input {
                                r#type: "checkbox",
                                checked: drawer_all_visible,
                                onclick: move |_| {
                                    set_all_visible(&mut drawer_columns.write(), !drawer_all_visible);
                                }
                            }
                            label { "全选" }
                        }
                        {drawer_columns().iter().enumerate().map(|(index, column)| {
                            let visible = column.visible;
                            let title = column.title.clone();
                            let at_top = index == 0;
                            let at_bottom = index + 1 == drawer_len;
                            rsx!(
                                div {
                                    key: "{column.key}",
                                    style: "display: flex; justify-content: space-between; align-items: center; padding: 4px 0; border-bottom: 1px solid #f0f0f0;",
                                    div {
                                        style: "display: flex; align-items: center; gap: 6px;",
                                        input {
                                            r#type: "checkbox",
                                            checked: visible,
                                            onclick: move |_| {
                                                if let Some(config) = drawer_columns.write().get_mut(index) {
                                                    config.visible = !visible;
                                                }
                                            }
                                        }
                                        span { "{title}" }
                                    }
                                    div {
                                        style: "display: flex; gap: 4px;",
                                        button {
                                            style: plain_button_style(),
                                            disabled: at_top,
                                            onclick: move |_| {
                                                move_column(&mut drawer_columns.write(), index, MoveDirection::Up);
                                            },
                                            "↑"
                                        }
                                        button {
                                            style: plain_button_style(),
                                            disabled: at_bottom,
                                            onclick: move |_| {
                                                move_column(&mut drawer_columns.write(), index, MoveDirection::Down);
                                            },
                                            "↓"
                                        }
                                    }
                                }
                            )
                        })}
                        div {
                            style: "display: flex; justify-content: flex-end; gap: 8px; margin-top: 12px;",
                            button {
                                style: plain_button_style(),
                                onclick: move |_| show_column_drawer.set(false),
                                "取消"
                            }
                            button {
                                style: primary_button_style(),
                                onclick: move |_| {
                                    let next = drawer_columns();
                                    if let Err(err) = column_service_for_drawer.save(&next) {
                                        log::warn!("保存列设置失败: {err}");
                                        toast.set(Some(Toast::error("保存列设置失败")));
                                    }
                                    columns.set(next);
                                    show_column_drawer.set(false);
                                },
                                "确定"
                            }
                        }
                    }
                }
            }

            // 新增/编辑弹窗
            if show_editor() {
                div {
                    style: overlay_style(),
                    div {
                        style: "background: #fff; border-radius: 6px; padding: 16px; min-width: 480px; max-height: 85vh; overflow-y: auto;",
                        div {
                            style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 10px;",
                            span { style: "font-weight: 600;",
                                if editor_is_add() { "新增约号" } else { "编辑约号" }
                            }
                            button {
                                style: "border: none; background: transparent; cursor: pointer; font-size: 16px;",
                                onclick: move |_| show_editor.set(false),
                                "×"
                            }
                        }
                        div {
                            style: "display: grid; grid-template-columns: 110px 1fr; gap: 8px; align-items: center;",

                            label { "船公司约号:" }
                            div {
                                input {
                                    style: field_style(missing("id")),
                                    value: current_form.id.clone(),
                                    oninput: move |event| editor_form.write().id = event.value(),
                                }
                                if missing("id") {
                                    {required_mark()}
                                }
                            }

                            label { "适用航线:" }
                            input {
                                style: field_style(false),
                                placeholder: "多条航线以逗号分隔",
                                value: current_form.line.clone(),
                                oninput: move |event| editor_form.write().line = event.value(),
                            }

                            label { "船公司:" }
                            select {
                                style: field_style(false),
                                value: current_form.shipping_company.clone(),
                                onchange: move |event| editor_form.write().shipping_company = event.value(),
                                option { value: "", "请选择" }
                                {SHIPPING_COMPANY_CODES.iter().map(|code| {
                                    let display = format_shipping_company(code);
                                    rsx!(option { value: *code, "{display}" })
                                })}
                            }

                            label { "约价性质:" }
                            div {
                                select {
                                    style: field_style(missing("priceNature")),
                                    value: current_form.price_nature.clone(),
                                    onchange: move |event| editor_form.write().price_nature = event.value(),
                                    for nature in PRICE_NATURES.iter() {
                                        option { value: *nature, "{nature}" }
                                    }
                                }
                                if missing("priceNature") {
                                    {required_mark()}
                                }
                            }

                            label { "是否NAC:" }
                            select {
                                style: field_style(false),
                                value: match current_form.is_nac {
                                    Some(true) => "true",
                                    Some(false) => "false",
                                    None => "",
                                },
                                onchange: move |event| {
                                    editor_form.write().is_nac = match event.value().as_str() {
                                        "true" => Some(true),
                                        "false" => Some(false),
                                        _ => None,
                                    };
                                },
                                option { value: "", "请选择" }
                                option { value: "true", "是" }
                                option { value: "false", "否" }
                            }

                            if current_form.is_nac == Some(true) {
                                label { "NAC:" }
                                div {
                                    input {
                                        style: field_style(missing("nac")),
                                        value: current_form.nac.clone(),
                                        oninput: move |event| editor_form.write().nac = event.value(),
                                    }
                                    if missing("nac") {
                                        {required_mark()}
                                    }
                                }
                            }

                            label { "适用品名:" }
                            select {
                                style: field_style(false),
                                value: current_form.applicable_products.clone().unwrap_or_default(),
                                onchange: move |event| {
                                    let value = event.value();
                                    editor_form.write().applicable_products =
                                        if value.is_empty() { None } else { Some(value) };
                                },
                                option { value: "", "请选择" }
                                for product in PRODUCT_OPTIONS.iter() {
                                    option { value: *product, "{product}" }
                                }
                            }

                            if current_form.applicable_products.as_deref() == Some("其他") {
                                label { "品名:" }
                                div {
                                    input {
                                        style: field_style(missing("customProduct")),
                                        value: current_form.custom_product.clone(),
                                        oninput: move |event| editor_form.write().custom_product = event.value(),
                                    }
                                    if missing("customProduct") {
                                        {required_mark()}
                                    }
                                }
                            }

                            label { "MQC:" }
                            input {
                                style: field_style(false),
                                value: current_form.mqc.clone(),
                                oninput: move |event| editor_form.write().mqc = event.value(),
                            }

                            label { "舱保:" }
                            select {
                                style: field_style(false),
                                value: current_form.cabin_protection.clone().unwrap_or_default(),
                                onchange: move |event| {
                                    let value = event.value();
                                    editor_form.write().cabin_protection =
                                        if value.is_empty() { None } else { Some(value) };
                                },
                                option { value: "", "请选择" }
                                option { value: "有", "有" }
                                option { value: "无", "无" }
                            }

                            if current_form.cabin_protection.as_deref() == Some("有") {
                                label { "舱保数量:" }
                                div {
                                    input {
                                        style: field_style(missing("cabinProtectionValue")),
                                        value: current_form.cabin_protection_value.clone(),
                                        oninput: move |event| editor_form.write().cabin_protection_value = event.value(),
                                    }
                                    if missing("cabinProtectionValue") {
                                        {required_mark()}
                                    }
                                }

                                label { "舱保单位:" }
                                div {
                                    select {
                                        style: field_style(missing("cabinProtectionUnit")),
                                        value: current_form.cabin_protection_unit.clone(),
                                        onchange: move |event| editor_form.write().cabin_protection_unit = event.value(),
                                        for unit in CABIN_UNITS.iter() {
                                            option { value: *unit, "{unit}" }
                                        }
                                    }
                                    if missing("cabinProtectionUnit") {
                                        {required_mark()}
                                    }
                                }
                            }

                            label { "有效期开始:" }
                            input {
                                r#type: "date",
                                style: field_style(false),
                                value: "{editor_valid_from}",
                                oninput: move |event| editor_valid_from.set(event.value()),
                            }

                            label { "有效期结束:" }
                            input {
                                r#type: "date",
                                style: field_style(false),
                                value: "{editor_valid_to}",
                                oninput: move |event| editor_valid_to.set(event.value()),
                            }
                        }
                        div {
                            style: "display: flex; justify-content: flex-end; gap: 8px; margin-top: 12px;",
                            button {
                                style: plain_button_style(),
                                onclick: move |_| show_editor.set(false),
                                "取消"
                            }
                            button {
                                style: primary_button_style(),
                                onclick: move |_| {
                                    let mut record = editor_form();
                                    record.valid_from = parse_date(&editor_valid_from());
                                    record.valid_to = parse_date(&editor_valid_to());
                                    let outcome = board.write().save(record, editor_is_add());
                                    if outcome.is_success() {
                                        editor_missing.set(Vec::new());
                                        show_editor.set(false);
                                        toast.set(Some(Toast::success(outcome.message())));
                                        let len = board.read().view().len();
                                        pager.write().clamp(len);
                                    } else {
                                        if let SaveOutcome::MissingFields(keys) = &outcome {
                                            editor_missing.set(keys.clone());
                                        }
                                        toast.set(Some(Toast::error(outcome.message())));
                                    }
                                },
                                "保存"
                            }
                        }
                    }
                }
            }

            // 二次确认弹窗
            if let Some(request) = confirm() {
                div {
                    style: overlay_style(),
                    div {
                        style: "background: #fff; border-radius: 6px; padding: 16px; min-width: 360px;",
                        div { style: "font-weight: 600; margin-bottom: 8px;", "{request.title}" }
                        div { style: "margin-bottom: 14px;", "{request.content}" }
                        div {
                            style: "display: flex; justify-content: flex-end; gap: 8px;",
                            button {
                                style: plain_button_style(),
                                onclick: move |_| confirm.set(None),
                                "取消"
                            }
                            button {
                                style: if request.action == BulkAction::Delete {
                                    danger_button_style()
                                } else {
                                    primary_button_style()
                                },
                                onclick: move |_| {
                                    if let Some(pending) = confirm() {
                                        let outcome = board.write().confirm(pending.action);
                                        let len = board.read().view().len();
                                        pager.write().clamp(len);
                                        toast.set(Some(Toast::success(outcome.message())));
                                    }
                                    confirm.set(None);
                                },
                                "确定"
                            }
                        }
                    }
                }
            }
        }
    }
}
