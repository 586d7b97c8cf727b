use std::sync::Arc;

use anyhow::Context;
use log::{info, warn};
use rand::prelude::*;

use col_mapper::refdata::{Country, GenderOption, Plan, PolicyType};
use col_mapper::{
    ChronoDateParser, FieldRegistry, ImportConfig, MatchSession, ReferenceData, RowValues,
    ValidationContext,
};

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let registry =
        Arc::new(FieldRegistry::system().context("building the system field registry")?);
    info!("Field registry ready: {} canonical fields", registry.len());

    let config = ImportConfig {
        show_progress: true,
        ..ImportConfig::default()
    };
    let date_parser = ChronoDateParser::new(config.date_formats.clone());
    let mut session =
        MatchSession::with_config(registry, config).context("creating the match session")?;

    let refs = demo_reference_data();
    let ctx = ValidationContext::new(&refs).with_date_parser(&date_parser);

    // A header row the way customer files actually spell them
    let headers = [
        "Plan",
        "FIRST NAME",
        "Last Name",
        "DOB",
        "Gender",
        "E-mail",
        "Type",
        "Country of Residence",
        "Nationality",
        "Trip Start Date",
        "Trip End Date",
        "Passport Number",
        "Student Phone Number",
    ];
    let rows = synthesize_rows(2000, headers.len());

    let report = session.preview(&headers, &rows, &ctx);

    for column in &report.columns {
        match column.field_key {
            Some(field) => info!(
                "column {:>2} '{}' -> {field}",
                column.column_index, column.header
            ),
            None => warn!(
                "column {:>2} '{}' unmatched; the import screen will ask for a manual pick",
                column.column_index, column.header
            ),
        }
    }

    info!(
        "{} of {} rows valid ({} invalid)",
        report.valid_rows,
        report.rows.len(),
        report.invalid_rows
    );
    for (field, count) in report.invalid_counts_by_field() {
        info!("  {count} invalid cells under '{field}'");
    }

    // The import screen consumes the same verdicts as JSON
    if let Some(first_invalid) = report.rows.iter().find(|row| !row.is_valid) {
        let payload =
            serde_json::to_string_pretty(first_invalid).context("serializing a row report")?;
        info!("first invalid row as the UI sees it:\n{payload}");
    }

    Ok(())
}

/// Reference lists a host application would load from its own configuration
fn demo_reference_data() -> ReferenceData {
    ReferenceData {
        plans: vec![
            Plan {
                id: "gold".to_string(),
                name: "Gold".to_string(),
                description: "Gold Annual Plan".to_string(),
            },
            Plan {
                id: "silver".to_string(),
                name: "Silver".to_string(),
                description: "Silver Annual Plan".to_string(),
            },
            Plan {
                id: "travel".to_string(),
                name: "Comprehensive Travel Plan".to_string(),
                description: "Comprehensive Travel Plan with medical cover".to_string(),
            },
        ],
        countries: vec![
            Country {
                id: "ca".to_string(),
                name: "Canada".to_string(),
                code: "CA".to_string(),
            },
            Country {
                id: "de".to_string(),
                name: "Germany".to_string(),
                code: "DE".to_string(),
            },
            Country {
                id: "jp".to_string(),
                name: "Japan".to_string(),
                code: "JP".to_string(),
            },
            Country {
                id: "au".to_string(),
                name: "Australia".to_string(),
                code: "AU".to_string(),
            },
        ],
        genders: vec![
            GenderOption {
                id: "m".to_string(),
                name: "Male".to_string(),
            },
            GenderOption {
                id: "f".to_string(),
                name: "Female".to_string(),
            },
        ],
        policy_types: vec![
            PolicyType {
                id: "student".to_string(),
                name: "Student".to_string(),
            },
            PolicyType {
                id: "dependent".to_string(),
                name: "Dependent".to_string(),
            },
        ],
    }
}

/// Generate rows shaped like a customer file, with a sprinkle of bad cells
fn synthesize_rows(count: usize, width: usize) -> Vec<RowValues> {
    let plans = ["Gold", "Silver", "Comprehensive Travel Plan"];
    let first_names = ["Jane", "John", "Maria", "Wei", "Fatima", "Lars"];
    let last_names = ["Doe", "Smith", "Garcia", "Chen", "Hansen", "Khan"];
    let genders = ["Male", "Female", "male", "FEMALE"];
    let countries = ["Canada", "Germany", "Japan", "Australia"];
    let types = ["Student", "Dependent", "student"];

    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|i| {
            let mut row: RowValues = vec![None; width];
            row[0] = Some(if i % 11 == 0 {
                "Bronze".to_string() // not an offered plan
            } else {
                pick(&mut rng, &plans)
            });
            row[1] = Some(pick(&mut rng, &first_names));
            row[2] = Some(pick(&mut rng, &last_names));
            row[3] = Some(if i % 17 == 0 {
                "sometime in 1990".to_string()
            } else {
                random_date(&mut rng)
            });
            row[4] = Some(pick(&mut rng, &genders));
            row[5] = if i % 7 == 0 {
                Some("not-an-email".to_string())
            } else if i % 5 == 0 {
                None // email is optional and plenty of files leave it blank
            } else {
                Some(format!("applicant{i}@example.com"))
            };
            row[6] = Some(pick(&mut rng, &types));
            row[7] = Some(if i % 13 == 0 {
                "Atlantis".to_string()
            } else {
                pick(&mut rng, &countries)
            });
            row[8] = Some(pick(&mut rng, &countries));
            row[9] = Some("01/06/2026".to_string());
            row[10] = Some("15/06/2026".to_string());
            row[11] = Some(format!("P{:07}", rng.random_range(0..10_000_000)));
            row[12] = Some(format!("+45 {:08}", rng.random_range(0..100_000_000)));
            row
        })
        .collect()
}

fn pick(rng: &mut StdRng, options: &[&str]) -> String {
    options[rng.random_range(0..options.len())].to_string()
}

fn random_date(rng: &mut StdRng) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        1950 + rng.random_range(0..55),
        1 + rng.random_range(0..12),
        1 + rng.random_range(0..28)
    )
}
