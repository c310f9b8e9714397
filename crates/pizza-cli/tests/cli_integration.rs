use std::path::{Path, PathBuf};
use std::process::Command;

/// Get the workspace root (two levels up from CARGO_MANIFEST_DIR of pizza-cli)
fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent() // crates/
        .unwrap()
        .parent() // workspace root
        .unwrap()
        .to_path_buf()
}

fn pizza_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pizza-menu"));
    cmd.current_dir(workspace_root());
    cmd.env_remove("PIZZA_MENU_LOG");
    cmd
}

fn run(args: &[&str]) -> (i32, String, String) {
    let output = pizza_bin().args(args).output().expect("failed to run");
    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

#[test]
fn cli_help() {
    let (code, stdout, _) = run(&["--help"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Pizza menu loader"));
    assert!(stdout.contains("validate"));
    assert!(stdout.contains("quote"));
}

#[test]
fn cli_version() {
    let (code, stdout, _) = run(&["--version"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("0.4.1"));
}

#[test]
fn cli_unknown_subcommand_is_usage_error() {
    let (code, _, stderr) = run(&["bake", "samples/PizzaMenu.txt"]);
    assert_eq!(code, 64);
    assert!(!stderr.is_empty());
}

#[test]
fn cli_quote_without_indexes_is_usage_error() {
    let (code, stdout, stderr) = run(&["quote", "samples"]);
    assert_eq!(code, 64);
    assert!(stdout.is_empty());
    assert!(stderr.contains("INDEXES"));
}

#[test]
fn cli_parse_json() {
    let (code, stdout, stderr) = run(&["parse", "samples/PizzaMenu.txt", "--format", "json"]);
    assert_eq!(code, 0, "stderr: {stderr}");

    let doc: serde_json::Value = serde_json::from_str(&stdout).expect("invalid JSON output");
    assert_eq!(doc["parserVersion"], "0.4.1");
    assert_eq!(doc["documentVersion"], "1.0");
    assert_eq!(doc["toppings"].as_array().unwrap().len(), 8);
    assert_eq!(doc["toppings"][4]["name"], "PINEAPPLE");
    assert_eq!(doc["toppings"][4]["vegan"], true);

    let pizzas = doc["pizzas"].as_array().unwrap();
    assert_eq!(pizzas.len(), 4);
    assert_eq!(pizzas[2]["name"], "Veggie Supreme");
    assert_eq!(pizzas[1]["priceCents"], 1300);
    assert_eq!(pizzas[3]["toppings"], serde_json::json!(["OLIVES"]));
    assert_eq!(pizzas[3]["priceCents"], 700);
}

#[test]
fn cli_parse_human_from_directory() {
    let (code, stdout, stderr) = run(&["parse", "samples"]);
    assert_eq!(code, 0, "stderr: {stderr}");
    assert!(stdout.starts_with("Dr Java's Pizzeria"));
    assert!(stdout.contains("Toppings (8):"));
    assert!(stdout.contains("  MUSHROOM (vegan)"));
    assert!(stdout.contains(
        "  0 - [MenuPizza] Hawaiian: is a 'MEDIUM' sized base with 'TOMATO' sauce and 'MOZZARELLA' cheese - Toppings: [HAM, PINEAPPLE] $9.00"
    ));
}

#[test]
fn cli_parse_output_file() {
    let out = std::env::temp_dir().join(format!("pizza-menu-{}.json", std::process::id()));
    let out_str = out.to_string_lossy().to_string();

    let (code, stdout, _) = run(&[
        "parse",
        "samples/PizzaMenu.txt",
        "--format",
        "json",
        "-o",
        &out_str,
    ]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Written to"));

    let written = std::fs::read_to_string(&out).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(doc["pizzas"].as_array().unwrap().len(), 4);
    let _ = std::fs::remove_file(&out);
}

#[test]
fn cli_parse_missing_file_exits_1() {
    let (code, _, stderr) = run(&["parse", "samples/NoSuchMenu.txt"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Could not open"));
}

#[test]
fn cli_parse_format_error_exits_2() {
    let (code, _, stderr) = run(&["parse", "samples/invalid/missing-blank-line.txt"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("missing-blank-line.txt:2 error[E006]"));
}

#[test]
fn cli_parse_too_many_toppings_exits_4() {
    let (code, _, stderr) = run(&["parse", "samples/invalid/too-many-toppings.txt"]);
    assert_eq!(code, 4);
    assert!(stderr.contains("error[E010]"));
}

#[test]
fn cli_parse_count_mismatch_exits_5() {
    let (code, _, stderr) = run(&["parse", "samples/invalid/count-mismatch.txt"]);
    assert_eq!(code, 5);
    assert!(stderr.contains("declares 3 pizzas but contains 2"));
}

#[test]
fn cli_parse_unreadable_line_exits_6() {
    let (code, _, stderr) = run(&["parse", "samples/invalid/bad-encoding.txt"]);
    assert_eq!(code, 6);
    assert!(stderr.contains("bad-encoding.txt:3"));
}

#[test]
fn cli_validate_configured_directory() {
    let (code, stdout, stderr) = run(&["validate", "samples"]);
    assert_eq!(code, 0, "stdout: {stdout}\nstderr: {stderr}");
    assert!(stdout.contains("PizzaMenu.txt: ok (8 toppings, 4 pizzas)"));
    assert!(stdout.contains("lunch.txt: ok (4 toppings, 2 pizzas)"));
    assert!(stdout.contains("0 errors in 2 files."));
}

#[test]
fn cli_validate_invalid_directory() {
    let (code, stdout, _) = run(&["validate", "samples/invalid"]);
    // Files are checked in name order; bad-encoding.txt fails first.
    assert_eq!(code, 6);
    assert!(stdout.contains("4 errors in 4 files."));
    assert!(stdout.contains("count-mismatch.txt:7 error[E011]"));
}

#[test]
fn cli_validate_json() {
    let (code, stdout, _) = run(&[
        "validate",
        "samples/invalid/too-many-toppings.txt",
        "--format",
        "json",
    ]);
    assert_eq!(code, 4);

    let report: serde_json::Value = serde_json::from_str(&stdout).expect("invalid JSON output");
    assert_eq!(report["summary"]["errors"], 1);
    assert_eq!(report["summary"]["files"], 1);
    assert_eq!(report["diagnostics"][0]["code"], "E010");
    assert_eq!(report["diagnostics"][0]["category"], "cardinality");
    assert_eq!(report["diagnostics"][0]["line"], 6);
}

#[test]
fn cli_quote_with_discount() {
    let (code, stdout, stderr) = run(&["quote", "samples", "--customer", "Jane", "0", "1", "3"]);
    assert_eq!(code, 0, "stderr: {stderr}");
    assert!(stdout.starts_with("Dr Java's Pizzeria\nDate: "));
    assert!(stdout.contains("\nCustomer: Jane\nOrder number: "));
    assert!(stdout.contains("\nOrder:\n1 - [MenuPizza] Hawaiian"));
    assert!(stdout.contains("3 - [MenuPizza] Margherita"));
    assert!(stdout.contains("Multi item discount applied of $29.00 applied, new Total: $26.10"));
}

#[test]
fn cli_quote_single_pizza() {
    let (code, stdout, _) = run(&["quote", "samples/menus/lunch.txt", "1"]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("Date: "));
    assert!(stdout.contains("\nCustomer: Not Given\n"));

    let order_number = stdout
        .lines()
        .find_map(|line| line.strip_prefix("Order number: "))
        .expect("order number line");
    assert_eq!(order_number.len(), 36);
    assert_eq!(order_number.matches('-').count(), 4);
    assert!(stdout.contains("Total: $9.00"));
}

#[test]
fn cli_quote_bad_index_is_usage_error() {
    let (code, _, stderr) = run(&["quote", "samples/PizzaMenu.txt", "9"]);
    assert_eq!(code, 64);
    assert!(stderr.contains("out of bounds"));
}
