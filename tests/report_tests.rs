// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use kharchnama::config::AppConfig;
use kharchnama::models::Category;
use kharchnama::report::sanitize::is_encodable;
use kharchnama::report::{PDF_MIME, ReportBuilder, ReportData};
use kharchnama::session::Session;
use rust_decimal::Decimal;
use tempfile::tempdir;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

fn session_with(n: usize) -> Session {
    let mut s = Session::default();
    s.set_income(Decimal::from(50_000)).unwrap();
    s.set_goal(Decimal::from(10_000)).unwrap();
    for i in 0..n {
        s.add_expense(
            day((i % 28) as u32 + 1),
            Category::ALL[i % Category::ALL.len()],
            Decimal::from(100 + i as i64),
            Some(format!("item {}", i)),
        )
        .unwrap();
    }
    s
}

#[test]
fn empty_ledger_has_summary_but_no_table() {
    let cfg = AppConfig::default();
    let session = session_with(0);
    let data = ReportData::from_session(&session, day(31));
    let builder = ReportBuilder::new(&cfg);

    let layout = builder.layout(&data);
    assert_eq!(layout.pages.len(), 1);
    assert!(layout.contains("Budget Summary"));
    assert!(layout.contains("Monthly Income: PKR 50000"));
    assert!(layout.contains("Total Expenses: PKR 0"));
    assert!(layout.contains("Date: 31 January 2024"));
    assert!(!layout.contains("Expense Details"));

    let doc = builder.build(&data).unwrap();
    assert!(doc.bytes.starts_with(b"%PDF"));
    assert_eq!(doc.file_name, "KharchNama_Report.pdf");
    assert_eq!(doc.mime, PDF_MIME);
}

#[test]
fn status_symbol_is_replaced_with_placeholder() {
    let cfg = AppConfig::default();
    let session = session_with(1);
    let data = ReportData::from_session(&session, day(31));
    let layout = ReportBuilder::new(&cfg).layout(&data);
    assert!(layout.contains("Status: You're managing well. Keep saving! [?]"));
    assert!(layout.texts().all(|t| t.chars().all(is_encodable)));
}

#[test]
fn unsupported_note_character_becomes_placeholder() {
    let cfg = AppConfig::default();
    let mut session = Session::default();
    session.set_income(Decimal::from(100)).unwrap();
    session
        .add_expense(day(2), Category::Food, Decimal::from(10), Some("chai ☕ café".into()))
        .unwrap();
    let data = ReportData::from_session(&session, day(2));
    let builder = ReportBuilder::new(&cfg);

    let layout = builder.layout(&data);
    assert!(layout.contains("Expense Details"));
    assert!(layout.texts().any(|t| t == "chai ? café"));
    assert!(builder.build(&data).is_ok());
}

#[test]
fn pasted_whitespace_in_note_stays_visible() {
    let cfg = AppConfig::default();
    let mut session = Session::default();
    session.set_income(Decimal::from(100)).unwrap();
    session
        .add_expense(day(2), Category::Food, Decimal::from(10), Some("nan\tchai\u{85}x2\u{a0}ok".into()))
        .unwrap();
    let data = ReportData::from_session(&session, day(2));
    let layout = ReportBuilder::new(&cfg).layout(&data);
    assert!(layout.texts().any(|t| t == "nan chai?x2 ok"));
    assert!(layout.texts().all(|t| t.chars().all(is_encodable)));
}

#[test]
fn table_rows_follow_ledger_order_and_header_repeats_per_page() {
    let cfg = AppConfig::default();
    let session = session_with(60);
    let data = ReportData::from_session(&session, day(31));
    let layout = ReportBuilder::new(&cfg).layout(&data);

    assert!(layout.pages.len() > 1);
    for (i, page) in layout.pages.iter().enumerate() {
        let texts: Vec<&str> = page.texts().collect();
        assert!(texts.contains(&"KharchNama - Monthly Budget Report"));
        assert!(texts.contains(&format!("Page {}", i + 1).as_str()));
        assert!(texts.contains(&"Note"));
    }
    let notes: Vec<&str> = layout
        .texts()
        .filter(|t| t.starts_with("item "))
        .collect();
    let expected: Vec<String> = (0..60).map(|i| format!("item {}", i)).collect();
    assert_eq!(notes, expected);
}

#[test]
fn custom_app_name_drives_title_and_file_name() {
    let cfg = AppConfig {
        app_name: "Kharch".into(),
        currency: "USD".into(),
        placeholder: '#',
    };
    let mut session = session_with(0);
    session.set_income(Decimal::from(10)).unwrap();
    session
        .add_expense(day(3), Category::Other, Decimal::from(11), None)
        .unwrap();
    let data = ReportData::from_session(&session, day(3));
    let builder = ReportBuilder::new(&cfg);
    let layout = builder.layout(&data);
    assert_eq!(cfg.report_title(), "Kharch - Monthly Budget Report");
    assert!(layout.pages[0].texts().any(|t| t == cfg.report_title()));
    assert!(layout.contains("Remaining Budget: USD -1"));
    assert!(layout.contains("Tighten your belt. [#]"));
    assert_eq!(builder.build(&data).unwrap().file_name, "Kharch_Report.pdf");
}

#[test]
fn write_to_dir_leaves_only_the_final_file() {
    let cfg = AppConfig::default();
    let session = session_with(3);
    let data = ReportData::from_session(&session, day(31));
    let dir = tempdir().unwrap();

    let path = ReportBuilder::new(&cfg)
        .write_to_dir(&data, dir.path())
        .unwrap();
    assert_eq!(path, dir.path().join("KharchNama_Report.pdf"));
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn write_to_missing_dir_fails_without_artifact() {
    let cfg = AppConfig::default();
    let session = session_with(2);
    let data = ReportData::from_session(&session, day(31));
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");

    assert!(
        ReportBuilder::new(&cfg)
            .write_to_dir(&data, &missing)
            .is_err()
    );
    assert!(!missing.join("KharchNama_Report.pdf").exists());
}
