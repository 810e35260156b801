//! # Rendering Module
//!
//! Turns a [`RosterView`] (or a [`Summary`], or bare messages) into terminal text.
//!
//! Layout calculations (column widths, padding, number grouping, relative times) stay
//! in Rust because they need Unicode-aware processing. Templates handle presentation:
//! which sections appear and which style each cell gets through the `style` filter.

use super::styles::{self, names};
use super::templates::TEMPLATES;
use chrono::{DateTime, Utc};
use minijinja::{Environment, Error, Value};
use rosterapp::commands::{CmdMessage, MessageLevel, Summary};
use rosterapp::model::Status;
use rosterapp::presenter::{EmployeeRow, RosterView};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// One table line with pre-padded cells.
#[derive(Serialize, Debug, Default)]
struct RowData {
    index: String,
    name: String,
    role: String,
    salary: String,
    bonus: String,
    status: String,
    status_style: &'static str,
    deleted: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct ViewData {
    messages: Vec<MessageData>,
    filter: Option<String>,
    header: RowData,
    rows: Vec<RowData>,
    empty_message: &'static str,
    show_trash: bool,
    trash: Vec<RowData>,
    summary: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct SummaryData {
    active: usize,
    trash: usize,
    payroll: String,
    bonus: String,
}

pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new(use_color: bool) -> Result<Self, Error> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_filter("style", move |value: Value, name: String| -> String {
            styles::apply(&name, &value.to_string(), use_color)
        });
        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    pub fn view(&self, view: &RosterView) -> Result<String, Error> {
        let data = ViewData {
            messages: message_data(&view.messages),
            filter: (!view.criteria.is_empty()).then(|| view.criteria.describe().join(", ")),
            header: padded_header(&view.rows),
            rows: active_rows(&view.rows),
            empty_message: if view.summary.active_count == 0 {
                "No employees yet."
            } else {
                "No employees match the current filter."
            },
            show_trash: view.show_trash,
            trash: trash_rows(&view.trash),
            summary: summary_line(view),
        };
        self.env.get_template("view.jinja")?.render(&data)
    }

    pub fn messages(&self, messages: &[CmdMessage]) -> Result<String, Error> {
        let data = MessagesData {
            messages: message_data(messages),
        };
        self.env.get_template("messages.jinja")?.render(&data)
    }

    pub fn summary(&self, summary: &Summary) -> Result<String, Error> {
        let data = SummaryData {
            active: summary.active_count,
            trash: summary.trash_count,
            payroll: group_thousands(summary.total_payroll),
            bonus: group_thousands(summary.total_bonus),
        };
        self.env.get_template("summary.jinja")?.render(&data)
    }
}

/// The view as pretty JSON, for `list --json`.
pub fn json(view: &RosterView) -> serde_json::Result<String> {
    serde_json::to_string_pretty(view)
}

fn message_data(messages: &[CmdMessage]) -> Vec<MessageData> {
    messages
        .iter()
        .map(|m| MessageData {
            content: m.content.clone(),
            style: match m.level {
                MessageLevel::Info => names::INFO,
                MessageLevel::Success => names::SUCCESS,
                MessageLevel::Warning => names::WARNING,
                MessageLevel::Error => names::ERROR,
            },
        })
        .collect()
}

fn status_style(status: Status) -> &'static str {
    match status {
        Status::Active => names::STATUS_ACTIVE,
        Status::OnLeave => names::STATUS_ON_LEAVE,
        Status::Terminated => names::STATUS_TERMINATED,
    }
}

struct Widths {
    index: usize,
    name: usize,
    role: usize,
    salary: usize,
    bonus: usize,
}

fn widths(header: &RowData, rows: &[EmployeeRow]) -> Widths {
    let mut w = Widths {
        index: header.index.width(),
        name: header.name.width(),
        role: header.role.width(),
        salary: header.salary.width(),
        bonus: header.bonus.width(),
    };
    for row in rows {
        let e = &row.entry.employee;
        w.index = w.index.max(row.entry.index.to_string().width());
        w.name = w.name.max(e.name().width());
        w.role = w.role.max(e.role().width());
        w.salary = w.salary.max(group_thousands(e.salary()).width());
        w.bonus = w.bonus.max(bonus_cell(row).width());
    }
    w
}

fn header() -> RowData {
    RowData {
        index: "#".to_string(),
        name: "Name".to_string(),
        role: "Role".to_string(),
        salary: "Salary".to_string(),
        bonus: "Bonus".to_string(),
        status: "Status".to_string(),
        ..Default::default()
    }
}

fn padded_header(rows: &[EmployeeRow]) -> RowData {
    let header = header();
    let w = widths(&header, rows);
    RowData {
        index: pad_right(&header.index, w.index),
        name: pad_right(&header.name, w.name),
        role: pad_right(&header.role, w.role),
        salary: pad_left(&header.salary, w.salary),
        bonus: pad_left(&header.bonus, w.bonus),
        ..header
    }
}

fn active_rows(rows: &[EmployeeRow]) -> Vec<RowData> {
    let w = widths(&header(), rows);
    rows.iter()
        .map(|row| {
            let e = &row.entry.employee;
            RowData {
                index: pad_right(&row.entry.index.to_string(), w.index),
                name: pad_right(e.name(), w.name),
                role: pad_right(e.role(), w.role),
                salary: pad_left(&group_thousands(e.salary()), w.salary),
                bonus: pad_left(&bonus_cell(row), w.bonus),
                status: e.status().label().to_string(),
                status_style: status_style(e.status()),
                deleted: String::new(),
            }
        })
        .collect()
}

fn trash_rows(rows: &[EmployeeRow]) -> Vec<RowData> {
    let empty = RowData::default();
    let w = widths(&empty, rows);
    rows.iter()
        .map(|row| {
            let e = &row.entry.employee;
            RowData {
                index: pad_right(&row.entry.index.to_string(), w.index),
                name: pad_right(e.name(), w.name),
                role: pad_right(e.role(), w.role),
                salary: pad_left(&group_thousands(e.salary()), w.salary),
                deleted: row
                    .entry
                    .deleted_at
                    .map(|at| format!("deleted {}", format_time_ago(at)))
                    .unwrap_or_default(),
                status: e.status().label().to_string(),
                status_style: status_style(e.status()),
                bonus: String::new(),
            }
        })
        .collect()
}

fn bonus_cell(row: &EmployeeRow) -> String {
    if row.entry.employee.bonus_percent() == 0 {
        "-".to_string()
    } else {
        format!(
            "{} ({}%)",
            group_thousands(row.bonus_amount),
            row.entry.employee.bonus_percent()
        )
    }
}

fn summary_line(view: &RosterView) -> String {
    let s = &view.summary;
    let mut parts = Vec::new();
    if view.filtered() {
        parts.push(format!("showing {} of {}", s.shown_count, s.active_count));
    } else {
        parts.push(format!("{} active", s.active_count));
    }
    parts.push(format!("{} in trash", s.trash_count));
    parts.push(format!("payroll {}", group_thousands(s.total_payroll)));
    parts.push(format!("bonuses {}", group_thousands(s.total_bonus)));
    parts.join(" | ")
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}

/// `1234567` -> `1,234,567`.
pub fn group_thousands(n: impl Into<u128>) -> String {
    let digits = n.into().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn pad_right(s: &str, width: usize) -> String {
    let current = s.width();
    format!("{}{}", s, " ".repeat(width.saturating_sub(current)))
}

fn pad_left(s: &str, width: usize) -> String {
    let current = s.width();
    format!("{}{}", " ".repeat(width.saturating_sub(current)), s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosterapp::commands::query::Criteria;
    use rosterapp::index::{DisplayEmployee, DisplayIndex};
    use rosterapp::store::memory::fixtures::StoreFixture;
    use rosterapp::store::{Bucket, DataStore};

    fn row(index: DisplayIndex, name: &str, salary: u64, bonus: u8) -> EmployeeRow {
        let fixture = StoreFixture::new().with_bonus(name, salary, bonus);
        let employee = fixture.store.list_employees(Bucket::Active).unwrap().remove(0);
        let deleted_at = matches!(index, DisplayIndex::Trash(_)).then(Utc::now);
        EmployeeRow::from(DisplayEmployee {
            index,
            employee,
            deleted_at,
        })
    }

    fn view() -> RosterView {
        RosterView {
            rows: vec![
                row(DisplayIndex::Active(1), "Ana Silva", 50_000, 10),
                row(DisplayIndex::Active(2), "Bob", 1_000, 0),
            ],
            trash: vec![row(DisplayIndex::Trash(1), "Zed", 7, 0)],
            summary: Summary {
                active_count: 2,
                trash_count: 1,
                total_payroll: 51_000,
                total_bonus: 5_000,
                shown_count: 2,
            },
            criteria: Criteria::default(),
            show_trash: false,
            messages: vec![CmdMessage::success("Added (2): Bob")],
        }
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0u64), "0");
        assert_eq!(group_thousands(999u64), "999");
        assert_eq!(group_thousands(1_000u64), "1,000");
        assert_eq!(group_thousands(1_234_567u128), "1,234,567");
    }

    #[test]
    fn pads_by_display_width() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_left("ab", 4), "  ab");
        assert_eq!(pad_right("abcdef", 4), "abcdef");
    }

    #[test]
    fn renders_table_summary_and_messages() {
        let renderer = Renderer::new(false).unwrap();
        let out = renderer.view(&view()).unwrap();

        assert!(out.starts_with("Added (2): Bob\n"));
        assert!(out.contains("Ana Silva"));
        assert!(out.contains("50,000"));
        assert!(out.contains("5,000 (10%)"));
        assert!(out.contains("2 active | 1 in trash | payroll 51,000 | bonuses 5,000"));
        assert!(!out.contains("Trash"));
        assert!(!out.contains('\u{1b}'));
    }

    #[test]
    fn columns_line_up() {
        let renderer = Renderer::new(false).unwrap();
        let out = renderer.view(&view()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        let header = lines.iter().find(|l| l.starts_with('#')).unwrap();
        let bob = lines.iter().find(|l| l.contains("Bob ")).unwrap();
        assert_eq!(header.find("Role"), bob.find("Engineer"));
    }

    #[test]
    fn renders_trash_when_shown() {
        let renderer = Renderer::new(false).unwrap();
        let mut v = view();
        v.show_trash = true;
        let out = renderer.view(&v).unwrap();
        assert!(out.contains("Trash"));
        assert!(out.contains("t1"));
        assert!(out.contains("deleted"));
    }

    #[test]
    fn filtered_view_shows_filter_and_counts() {
        let renderer = Renderer::new(false).unwrap();
        let mut v = view();
        v.criteria.name_contains = Some("ana".into());
        v.rows.truncate(1);
        v.summary.shown_count = 1;
        let out = renderer.view(&v).unwrap();
        assert!(out.contains("Filter: name~ana"));
        assert!(out.contains("showing 1 of 2"));
    }

    #[test]
    fn empty_roster_message() {
        let renderer = Renderer::new(false).unwrap();
        let out = renderer.view(&RosterView::default()).unwrap();
        assert!(out.contains("No employees yet."));
    }

    #[test]
    fn color_adds_ansi() {
        let renderer = Renderer::new(true).unwrap();
        let out = renderer.view(&view()).unwrap();
        assert!(out.contains('\u{1b}'));
    }

    #[test]
    fn json_uses_string_indexes() {
        let out = json(&view()).unwrap();
        assert!(out.contains("\"index\": \"1\""));
        assert!(out.contains("\"bonus_amount\": 5000"));
        assert!(out.contains("\"total_payroll\": 51000"));
    }

    #[test]
    fn renders_summary_block() {
        let renderer = Renderer::new(false).unwrap();
        let out = renderer.summary(&view().summary).unwrap();
        assert!(out.contains("Payroll:   51,000"));
        assert!(out.contains("In trash:  1"));
    }
}
