// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::Path;

use kharchnama::{cli, commands, config, utils};

fn main() -> Result<()> {
    utils::init_tracing();
    let matches = cli::build_cli().get_matches();

    let cfg = config::load(matches.get_one::<String>("config").map(Path::new))?;
    let session = cli::build_session(&matches)?;

    match matches.subcommand() {
        Some(("summary", sub)) => commands::summary::handle(&session, &cfg, sub)?,
        Some(("breakdown", sub)) => commands::reports::breakdown(&session, &cfg, sub)?,
        Some(("daily", sub)) => commands::reports::daily(&session, &cfg, sub)?,
        Some(("pivot", sub)) => commands::reports::pivot(&session, &cfg, sub)?,
        Some(("ledger", sub)) => commands::ledger::handle(&session, &cfg, sub)?,
        Some(("report", sub)) => {
            commands::pdf::handle(&session, &cfg, sub)?;
        }
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
