// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Page layout for the budget report, independent of the PDF backend.
//!
//! Coordinates are millimetres from the bottom-left corner of an A4 page.

use super::sanitize::sanitize_text;
use super::ReportData;
use crate::config::AppConfig;
use crate::utils::fmt_money;

pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 10.0;
const LINE_HEIGHT: f32 = 10.0;
const HEADER_Y: f32 = PAGE_HEIGHT - 15.0;
const BODY_TOP: f32 = HEADER_Y - 20.0;
const FOOTER_Y: f32 = 10.0;
const BODY_BOTTOM: f32 = 25.0;

/// Column left edges and widths for Date, Category, Amount, Note.
const COLUMNS: [(f32, f32); 4] = [(10.0, 40.0), (50.0, 40.0), (90.0, 40.0), (130.0, 70.0)];
const TABLE_FONT_SIZE: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Regular,
    Bold,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Accent,
    Body,
    Muted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub weight: Weight,
    pub tone: Tone,
    pub text: String,
}

/// Horizontal rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub x1: f32,
    pub x2: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub lines: Vec<TextLine>,
    pub rules: Vec<Rule>,
}

impl Page {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|l| l.text.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layout {
    pub pages: Vec<Page>,
}

impl Layout {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().flat_map(|p| p.texts())
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }
}

/// Rough Helvetica advance width; good enough for centring and truncation.
fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.5 * 25.4 / 72.0
}

fn fit_to_width(text: &str, width: f32, size: f32) -> String {
    let usable = width - 2.0;
    if text_width(text, size) <= usable {
        return text.to_string();
    }
    let mut out = String::new();
    for c in text.chars() {
        out.push(c);
        if text_width(&out, size) + text_width("...", size) > usable {
            out.pop();
            break;
        }
    }
    out.push_str("...");
    out
}

struct Cursor {
    title: String,
    pages: Vec<Page>,
    y: f32,
}

impl Cursor {
    fn new(cfg: &AppConfig) -> Self {
        let title = sanitize_text(&cfg.report_title(), cfg.placeholder).into_owned();
        let mut c = Self {
            title,
            pages: Vec::new(),
            y: BODY_TOP,
        };
        c.new_page();
        c
    }

    fn page(&mut self) -> &mut Page {
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    fn new_page(&mut self) {
        let title_size = 14.0;
        let footer = format!("Page {}", self.pages.len() + 1);
        let mut page = Page::default();
        page.lines.push(TextLine {
            x: ((PAGE_WIDTH - text_width(&self.title, title_size)) / 2.0).max(MARGIN),
            y: HEADER_Y,
            size: title_size,
            weight: Weight::Bold,
            tone: Tone::Accent,
            text: self.title.clone(),
        });
        page.lines.push(TextLine {
            x: (PAGE_WIDTH - text_width(&footer, 8.0)) / 2.0,
            y: FOOTER_Y,
            size: 8.0,
            weight: Weight::Italic,
            tone: Tone::Muted,
            text: footer,
        });
        self.pages.push(page);
        self.y = BODY_TOP;
    }

    fn ensure_room(&mut self, height: f32) -> bool {
        if self.y - height < BODY_BOTTOM {
            self.new_page();
            return true;
        }
        false
    }

    fn line(&mut self, text: impl Into<String>, size: f32, weight: Weight, tone: Tone) {
        self.ensure_room(LINE_HEIGHT);
        let y = self.y;
        self.page().lines.push(TextLine {
            x: MARGIN,
            y,
            size,
            weight,
            tone,
            text: text.into(),
        });
        self.y -= LINE_HEIGHT;
    }

    fn gap(&mut self, height: f32) {
        self.y -= height;
    }

    fn row(&mut self, cells: [&str; 4], weight: Weight, tone: Tone) {
        let y = self.y;
        let page = self.page();
        for ((x, width), cell) in COLUMNS.iter().zip(cells) {
            page.lines.push(TextLine {
                x: x + 1.0,
                y,
                size: TABLE_FONT_SIZE,
                weight,
                tone,
                text: fit_to_width(cell, *width, TABLE_FONT_SIZE),
            });
        }
        let (first_x, _) = COLUMNS[0];
        let (last_x, last_w) = COLUMNS[3];
        page.rules.push(Rule {
            x1: first_x,
            x2: last_x + last_w,
            y: y - 3.0,
        });
        self.y -= LINE_HEIGHT;
    }

    fn table_header(&mut self) {
        self.row(["Date", "Category", "Amount", "Note"], Weight::Bold, Tone::Accent);
    }
}

pub fn layout(data: &ReportData<'_>, cfg: &AppConfig) -> Layout {
    let ccy = cfg.currency.as_str();
    let mut cur = Cursor::new(cfg);

    cur.line("Budget Summary", 12.0, Weight::Bold, Tone::Accent);
    cur.gap(5.0);
    let s = &data.summary;
    let status = sanitize_text(data.status.message(), cfg.placeholder);
    let summary_lines = [
        format!("Date: {}", data.generated_on.format("%d %B %Y")),
        format!("Monthly Income: {}", fmt_money(&data.budget.income, ccy)),
        format!("Total Expenses: {}", fmt_money(&s.total_expense, ccy)),
        format!("Remaining Budget: {}", fmt_money(&s.remaining, ccy)),
        format!("Savings Goal: {}", fmt_money(&data.budget.goal, ccy)),
        format!("Savings Progress: {}%", s.progress_display()),
        format!("Status: {}", status),
    ];
    for text in summary_lines {
        cur.line(text, 10.0, Weight::Regular, Tone::Body);
    }

    if data.records.is_empty() {
        return Layout { pages: cur.pages };
    }

    cur.gap(10.0);
    cur.ensure_room(4.0 * LINE_HEIGHT);
    cur.line("Expense Details", 12.0, Weight::Bold, Tone::Accent);
    cur.gap(5.0);
    cur.table_header();
    for r in data.records {
        if cur.ensure_room(LINE_HEIGHT) {
            cur.table_header();
        }
        let date = r.date.to_string();
        let amount = fmt_money(&r.amount, ccy);
        let note = sanitize_text(r.note_or_empty(), cfg.placeholder);
        cur.row(
            [date.as_str(), r.category.as_str(), amount.as_str(), &*note],
            Weight::Regular,
            Tone::Body,
        );
    }
    Layout { pages: cur.pages }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_text_is_truncated_to_column() {
        let long = "x".repeat(200);
        let out = fit_to_width(&long, 70.0, TABLE_FONT_SIZE);
        assert!(out.ends_with("..."));
        assert!(text_width(&out, TABLE_FONT_SIZE) <= 68.0);
    }

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(fit_to_width("Lunch", 70.0, TABLE_FONT_SIZE), "Lunch");
    }
}
