// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use kharchnama::config::{self, AppConfig};
use kharchnama::{cli, commands};
use rust_decimal::Decimal;
use std::io::Write;
use tempfile::{NamedTempFile, tempdir};

const BASE: [&str; 9] = [
    "kharchnama",
    "--income",
    "1000",
    "--goal",
    " 200 ",
    "--expense",
    "2024-01-01,Food,100,Biryani",
    "--expense",
    "2024-01-02,Transport,50",
];

fn args<'a>(extra: &[&'a str]) -> Vec<&'a str> {
    let mut v: Vec<&str> = BASE.to_vec();
    v.extend_from_slice(extra);
    v
}

#[test]
fn session_is_built_from_flags() {
    let matches = cli::build_cli().get_matches_from(args(&["summary"]));
    let session = cli::build_session(&matches).unwrap();
    assert_eq!(session.budget().goal, Decimal::from(200));
    assert_eq!(session.ledger().len(), 2);

    let view = commands::summary::view(&session);
    assert_eq!(view.summary.total_expense, Decimal::from(150));
    assert_eq!(view.summary.progress_percent, 425);
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["status"], "ON_TRACK");
    assert_eq!(json["remaining"], "850");
}

#[test]
fn zero_expense_flag_is_skipped_and_negative_fails() {
    let matches = cli::build_cli().get_matches_from(args(&[
        "--expense",
        "2024-01-03,Other,0",
        "summary",
    ]));
    let session = cli::build_session(&matches).unwrap();
    assert_eq!(session.ledger().len(), 2);

    let matches = cli::build_cli().get_matches_from(args(&[
        "--expense",
        "2024-01-03,Other,-4",
        "summary",
    ]));
    let err = cli::build_session(&matches).unwrap_err();
    assert!(err.to_string().contains("2024-01-03,Other,-4"));
}

#[test]
fn expenses_csv_is_imported_before_flag_expenses() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "date,category,amount,note\n2023-12-31,Utilities,75,Electricity"
    )
    .unwrap();
    file.flush().unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let matches =
        cli::build_cli().get_matches_from(args(&["--expenses-csv", path.as_str(), "ledger", "list"]));
    let session = cli::build_session(&matches).unwrap();
    let rows = commands::ledger::query_rows(&session);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].category, "Utilities");
    assert_eq!(rows[0].note, "Electricity");
    assert_eq!(rows[1].note, "Biryani");
    assert_eq!(rows[2].note, "");
}

#[test]
fn breakdown_rows_are_sorted_by_spend() {
    let matches = cli::build_cli().get_matches_from(args(&[
        "--expense",
        "2024-01-02,Leisure,400",
        "breakdown",
    ]));
    let session = cli::build_session(&matches).unwrap();
    let rows = commands::reports::breakdown_rows(&session);
    let cats: Vec<&str> = rows.iter().map(|r| r.category.as_str()).collect();
    assert_eq!(cats, vec!["Leisure", "Food", "Transport"]);
    assert_eq!(rows[0].share, Some(Decimal::new(727, 1)));
}

#[test]
fn ledger_export_writes_csv() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("ledger.csv");
    let out_str = out.to_string_lossy().to_string();
    let matches =
        cli::build_cli().get_matches_from(args(&["ledger", "export", "--out", out_str.as_str()]));
    let session = cli::build_session(&matches).unwrap();
    if let Some(("ledger", ledger_m)) = matches.subcommand() {
        commands::ledger::handle(&session, &AppConfig::default(), ledger_m).unwrap();
    } else {
        panic!("no ledger subcommand");
    }
    let contents = std::fs::read_to_string(&out).unwrap();
    assert_eq!(
        contents,
        "date,category,amount,note\n2024-01-01,Food,100,Biryani\n2024-01-02,Transport,50,\n"
    );
}

#[test]
fn report_command_writes_pdf_into_out_dir() {
    let dir = tempdir().unwrap();
    let dir_str = dir.path().to_string_lossy().to_string();
    let matches = cli::build_cli().get_matches_from(args(&["report", "--out", dir_str.as_str()]));
    let session = cli::build_session(&matches).unwrap();
    if let Some(("report", report_m)) = matches.subcommand() {
        let path =
            commands::pdf::handle(&session, &AppConfig::default(), report_m).unwrap();
        assert_eq!(path.file_name().unwrap(), "KharchNama_Report.pdf");
        assert!(std::fs::read(&path).unwrap().starts_with(b"%PDF"));
    } else {
        panic!("no report subcommand");
    }
}

#[test]
fn config_file_overrides_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "currency": "USD" }}"#).unwrap();
    file.flush().unwrap();

    let cfg = config::load(Some(file.path())).unwrap();
    assert_eq!(cfg.currency, "USD");
    assert_eq!(cfg.app_name, "KharchNama");
    assert_eq!(cfg.placeholder, '?');
    assert_eq!(cfg.report_file_name(), "KharchNama_Report.pdf");

    let missing = file.path().with_extension("missing");
    assert!(config::load(Some(missing.as_path())).is_err());
}

#[test]
fn missing_income_and_goal_default_to_zero() {
    let matches = cli::build_cli().get_matches_from(["kharchnama", "summary"]);
    let session = cli::build_session(&matches).unwrap();
    assert_eq!(session.budget().income, Decimal::ZERO);
    assert_eq!(session.budget().goal, Decimal::ZERO);
    assert!(session.ledger().is_empty());

    let matches = cli::build_cli().get_matches_from(["kharchnama", "--goal=-5", "summary"]);
    let err = cli::build_session(&matches).unwrap_err();
    assert!(err.to_string().contains("goal must not be negative"));
}
