//! Command-level tests against the bundled dataset.

use std::io::Write;

use clap::Parser;
use roster::Cli;

// ============================================================================
// Helpers
// ============================================================================

fn run_with_input(args: &[&str], input: &str) -> anyhow::Result<String> {
    let mut argv = vec!["roster"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv)?;

    let mut out = Vec::new();
    roster::run(cli, input.as_bytes(), &mut out)?;
    Ok(String::from_utf8(out)?)
}

fn run(args: &[&str]) -> String {
    run_with_input(args, "").unwrap()
}

fn names(output: &str) -> Vec<String> {
    let lines: Vec<&str> = output.lines().collect();
    lines
        .windows(2)
        .filter(|pair| pair[0].is_empty() && !pair[1].is_empty())
        .map(|pair| pair[1].to_string())
        .collect()
}

fn last_names(output: &str) -> Vec<String> {
    names(output)
        .into_iter()
        .map(|name| {
            let (_, rest) = name.split_once(' ').unwrap();
            rest.to_string()
        })
        .collect()
}

// ============================================================================
// list
// ============================================================================

#[test]
fn list_defaults_to_collated_last_names() {
    let output = run(&["list", "-o", "text"]);
    assert!(output.starts_with("10 of 10 records, sorted by Alphabetical (last name)\n"));
    assert_eq!(
        last_names(&output),
        vec![
            "Alvarez", "Becker", "de Groot", "Émond", "Ibarra", "Nair", "Okafor", "Ortiz",
            "Peña", "Zhang"
        ]
    );
}

#[test]
fn list_card_layout() {
    let output = run(&["list", "-o", "text", "--search", "Ortiz"]);
    assert!(output.contains("Search: \"Ortiz\"\n"));
    assert!(output.contains(
        "\nLuis Ortiz\nNew York, NY 10001\nCategories: Middle, Upper\nTopics:\n  Algebra, 12 years exp.\n  Statistics, 4 years exp.\n"
    ));
}

#[test]
fn list_by_experience() {
    let output = run(&["list", "-o", "text", "--sort", "maxYearsExperience"]);
    let order = last_names(&output);
    assert_eq!(order.first().map(String::as_str), Some("Émond"));
    assert_eq!(order.last().map(String::as_str), Some("de Groot"));
}

#[test]
fn list_search_covers_location() {
    let output = run(&["list", "-o", "text", "--search", "Boston"]);
    assert!(output.starts_with("1 of 10 records"));
    assert_eq!(last_names(&output), vec!["Émond"]);
}

#[test]
fn list_search_is_case_sensitive() {
    let output = run(&["list", "-o", "text", "--search", "boston"]);
    assert!(output.starts_with("0 of 10 records"));
}

#[test]
fn list_category_toggle_uses_inclusive_match() {
    let output = run(&["list", "-o", "text", "--toggle-category", "upper"]);
    let order = last_names(&output);
    assert_eq!(order.len(), 8);
    assert!(!order.contains(&"Alvarez".to_string()));
    assert!(!order.contains(&"Émond".to_string()));
    // Still visible through "middle".
    assert!(order.contains(&"Ortiz".to_string()));
}

#[test]
fn list_region_toggle() {
    let output = run(&["list", "-o", "text", "--toggle-region", "NY"]);
    assert!(output.starts_with("7 of 10 records"));
    let order = last_names(&output);
    for hidden in ["Ortiz", "Zhang", "Peña"] {
        assert!(!order.contains(&hidden.to_string()));
    }
}

#[test]
fn list_unknown_region_fails() {
    let err = run_with_input(&["list", "--toggle-region", "ZZ"], "").unwrap_err();
    assert!(err.to_string().contains("ZZ"));
}

#[test]
fn list_follower_category_fails() {
    assert!(run_with_input(&["list", "--toggle-category", "nursery"], "").is_err());
}

#[test]
fn list_unrecognized_sort_warns_and_keeps_input_order() {
    let output = run(&["list", "-o", "text", "--sort", "randomized"]);
    assert!(output.contains("warning: sort by is not implemented for 'randomized'"));
    let order = last_names(&output);
    assert_eq!(order.first().map(String::as_str), Some("Ortiz"));
    assert_eq!(order.last().map(String::as_str), Some("Becker"));
}

#[test]
fn list_json() {
    let output = run(&["list", "-o", "json", "--sort", "experience"]);
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["total"], 10);
    assert_eq!(json["visible"], 10);
    assert_eq!(json["sort"], "Years experience (max)");
    assert_eq!(json["cards"][0]["last_name"], "Émond");
    assert_eq!(json["cards"][0]["max_experience"], 20);
}

#[test]
fn list_yaml() {
    let output = run(&["list", "-o", "yaml", "--search", "Boston"]);
    assert!(output.contains("visible: 1"));
    assert!(output.contains("city: Boston"));
}

// ============================================================================
// regions
// ============================================================================

#[test]
fn regions_lists_counts_in_collation_order() {
    let output = run(&["regions", "-o", "text"]);
    assert_eq!(
        output,
        "Regions\n[x] CA (3)\n[x] IL (1)\n[x] MA (1)\n[x] NY (3)\n[x] TX (1)\n[x] WA (1)\n"
    );
}

// ============================================================================
// browse
// ============================================================================

#[test]
fn browse_session() {
    let input = "\
search Algebra
search
sort experience
toggle lower
region CA
regions
nonsense
quit
";
    let output = run_with_input(&["browse", "-o", "text"], input).unwrap();

    assert!(output.starts_with("10 of 10 records"));
    assert!(output.contains("1 of 10 records, sorted by Alphabetical (last name)\nSearch: \"Algebra\"\n"));
    assert!(output.contains("10 of 10 records, sorted by Years experience (max)\n"));
    assert!(output.contains("6 of 10 records, sorted by Years experience (max)\n"));
    assert!(output.contains("4 of 10 records, sorted by Years experience (max)\n"));
    assert!(output.contains("[ ] CA (3)"));
    assert!(output.contains("error: unknown command 'nonsense'"));
}

#[test]
fn browse_region_toggle_shows_filtered_results() {
    let output = run_with_input(&["browse", "-o", "text"], "region NY
").unwrap();

    assert!(output.starts_with("10 of 10 records"));
    assert!(output.contains("7 of 10 records"));
    assert!(!output.contains("Regions\n"));
}

#[test]
fn browse_reports_bad_events_and_continues() {
    let input = "toggle nursery\nregion ZZ\nshow\n";
    let output = run_with_input(&["browse", "-o", "text"], input).unwrap();

    assert!(output.contains("error: 'nursery' follows another category"));
    assert!(output.contains("error: unknown region 'ZZ'"));
    assert_eq!(output.matches("10 of 10 records").count(), 2);
}

// ============================================================================
// config and data files
// ============================================================================

#[test]
fn config_sets_defaults_and_flags_override() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.yaml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "sort: maxYearsExperience\noutput: json").unwrap();
    let config = path.to_str().unwrap();

    let output = run(&["list", "--config", config]);
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["cards"][0]["last_name"], "Émond");

    let output = run(&["list", "--config", config, "-o", "text", "--sort", "name"]);
    assert!(output.starts_with("10 of 10 records, sorted by Alphabetical (last name)"));
}

#[test]
fn records_and_postal_codes_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let records = dir.path().join("people.json");
    let postal = dir.path().join("zips.csv");
    std::fs::write(
        &records,
        r#"[
            {"firstName":"Ada","lastName":"Lovelace","zipCode":"00001",
             "gradeLevelsTaught":{"upper":true},"subjects":[{"label":"Maths","yrsExp":30}]},
            {"firstName":"Nobody","lastName":"Nowhere","zipCode":"99999",
             "gradeLevelsTaught":{"upper":true},"subjects":[]}
        ]"#,
    )
    .unwrap();
    std::fs::write(&postal, "postal_code,city,region\n00001,London,LN\n").unwrap();

    let output = run(&[
        "list",
        "-o",
        "text",
        "--records",
        records.to_str().unwrap(),
        "--postal-codes",
        postal.to_str().unwrap(),
    ]);

    assert!(output.starts_with("1 of 2 records"));
    assert!(output.contains("Ada Lovelace\nLondon, LN 00001\n"));
    assert!(output.contains("  Maths, 30 years exp.\n"));
}

#[test]
fn missing_records_file_fails() {
    let err = run_with_input(&["list", "--records", "/nonexistent/people.json"], "").unwrap_err();
    assert!(format!("{err:#}").contains("/nonexistent/people.json"));
}
