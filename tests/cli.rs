//! End-to-end CLI tests
//!
//! Each test runs the binary against its own temp data directory via the
//! `KITCHEN_LEDGER_DATA_DIR` override.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn kitchen(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("kitchen").unwrap();
    cmd.env("KITCHEN_LEDGER_DATA_DIR", dir.path());
    cmd
}

#[test]
fn init_creates_ledger_file() {
    let dir = TempDir::new().unwrap();

    kitchen(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created ledger"));

    assert!(dir.path().join("ledger.json").exists());

    kitchen(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn recipe_lifecycle() {
    let dir = TempDir::new().unwrap();

    kitchen(&dir)
        .args(["recipe", "add", "Pancakes", "--servings", "4", "-t", "Breakfast"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added recipe: Pancakes"));

    // duplicate names are rejected
    kitchen(&dir)
        .args(["recipe", "add", "pancakes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    kitchen(&dir)
        .args([
            "recipe",
            "add-ingredient",
            "Pancakes",
            "Flour",
            "--quantity",
            "2",
            "--unit",
            "cups",
            "--price",
            "1.20",
            "--store",
            "Aldi",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("total now $1.20"));

    kitchen(&dir)
        .args(["recipe", "show", "Pancakes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Per serving:  $0.30"));

    kitchen(&dir)
        .args(["recipe", "scale", "Pancakes", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("scaled to 8 servings"))
        .stdout(predicate::str::contains("$2.40"));

    kitchen(&dir)
        .args(["recipe", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pancakes"));

    kitchen(&dir)
        .args(["recipe", "delete", "Pancakes"])
        .assert()
        .success();

    kitchen(&dir)
        .args(["recipe", "show", "Pancakes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn receipt_reconciles_recipe_and_pantry() {
    let dir = TempDir::new().unwrap();

    kitchen(&dir)
        .args(["recipe", "add", "Omelette", "--servings", "2"])
        .assert()
        .success();
    kitchen(&dir)
        .args([
            "recipe",
            "add-ingredient",
            "Omelette",
            "Eggs",
            "--price",
            "2.99",
        ])
        .assert()
        .success();
    kitchen(&dir)
        .args(["pantry", "add", "Eggs", "--quantity", "12"])
        .assert()
        .success();

    // recording the receipt propagates the observed price
    kitchen(&dir)
        .args([
            "receipt", "add", "--store", "Aldi", "--date", "2025-06-05", "Eggs:3.49",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Omelette / Eggs: $2.99 -> $3.49"))
        .stdout(predicate::str::contains("1 recipe update(s), 1 pantry update(s)"));

    kitchen(&dir)
        .args(["recipe", "show", "Omelette"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total cost:   $3.49"));

    // the same receipt again: prices converged, pantry date still advances
    kitchen(&dir)
        .args([
            "receipt", "add", "--store", "Aldi", "--date", "2025-06-05", "Eggs:3.49",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 recipe update(s), 1 pantry update(s)"));
}

#[test]
fn plan_and_shopping_generation() {
    let dir = TempDir::new().unwrap();

    kitchen(&dir)
        .args(["recipe", "add", "Quiche", "--servings", "4"])
        .assert()
        .success();
    kitchen(&dir)
        .args([
            "recipe",
            "add-ingredient",
            "Quiche",
            "Egg",
            "--quantity",
            "6",
            "--price",
            "3.49",
            "--store",
            "Food Lion",
        ])
        .assert()
        .success();

    kitchen(&dir)
        .args(["plan", "set", "monday", "dinner", "Quiche"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Planned Quiche for Monday Dinner"));
    kitchen(&dir)
        .args(["plan", "set", "tuesday", "dinner", "Quiche"])
        .assert()
        .success();

    kitchen(&dir)
        .args(["plan", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 meal(s) planned"));

    // two planned meals, one deduplicated line with summed quantity
    kitchen(&dir)
        .args(["shopping", "generate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 1 item(s)"));

    kitchen(&dir)
        .args(["shopping", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food Lion"))
        .stdout(predicate::str::contains("12"));
}

#[test]
fn checkout_moves_checked_items_to_pantry() {
    let dir = TempDir::new().unwrap();

    kitchen(&dir)
        .args(["shopping", "add", "Quinoa", "--quantity", "2"])
        .assert()
        .success();
    kitchen(&dir)
        .args(["shopping", "add", "Bread"])
        .assert()
        .success();
    kitchen(&dir)
        .args(["shopping", "check", "Quinoa"])
        .assert()
        .success();

    kitchen(&dir)
        .args(["shopping", "checkout"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Moved 1 item(s) into the pantry, 1 left on the list",
        ));

    kitchen(&dir)
        .args(["pantry", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quinoa"));
}

#[test]
fn pantry_adjust_deletes_at_zero() {
    let dir = TempDir::new().unwrap();

    kitchen(&dir)
        .args(["pantry", "add", "Flour", "--quantity", "2", "--unit", "lbs"])
        .assert()
        .success();

    kitchen(&dir)
        .args(["pantry", "adjust", "Flour", "--", "-2.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("used up, removed from pantry"));

    kitchen(&dir)
        .args(["pantry", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pantry is empty."));
}

#[test]
fn budget_report_warns_at_ninety_percent() {
    let dir = TempDir::new().unwrap();

    // 720 of the default 800 budget is exactly 90%
    kitchen(&dir)
        .args([
            "receipt", "add", "--store", "Costco", "--date", "2025-06-05", "--total", "720",
            "Bulk:720",
        ])
        .assert()
        .success();

    kitchen(&dir)
        .args(["report", "budget", "--month", "6", "--year", "2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("90.0%"))
        .stdout(predicate::str::contains("[WARNING]"))
        .stdout(predicate::str::contains("Costco"))
        .stdout(predicate::str::contains(
            "All time: $720.00 across 1 receipt(s) (avg $720.00 per receipt)",
        ));
}

#[test]
fn scanned_receipt_import() {
    let dir = TempDir::new().unwrap();

    let payload = dir.path().join("scan.json");
    std::fs::write(
        &payload,
        r#"{
            "store": "Walmart",
            "date": "2025-06-05",
            "items": [
                {"name": "Milk", "price": "3.49"},
                {"name": "Bananas", "quantity": "2", "price": 1.20}
            ]
        }"#,
    )
    .unwrap();

    kitchen(&dir)
        .args(["receipt", "import"])
        .arg(&payload)
        .assert()
        .success()
        .stdout(predicate::str::contains("Walmart"))
        .stdout(predicate::str::contains("$4.69"));

    kitchen(&dir)
        .args(["receipt", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-06-05"));
}

#[test]
fn config_budget_update() {
    let dir = TempDir::new().unwrap();

    kitchen(&dir)
        .args(["config", "budget", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$1000.00"));

    kitchen(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly budget:  $1000.00"))
        .stdout(predicate::str::contains("Harris Teeter"));
}

#[test]
fn recipe_add_records_family_members() {
    let dir = TempDir::new().unwrap();

    kitchen(&dir)
        .args(["recipe", "add", "Mac and Cheese", "-m", "Kids", "-m", "Adults"])
        .assert()
        .success();

    kitchen(&dir)
        .args(["recipe", "show", "Mac and Cheese"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Liked by:     Kids, Adults"));
}

#[test]
fn recipe_import_rejects_duplicate_name() {
    let dir = TempDir::new().unwrap();

    let payload = dir.path().join("recipe.json");
    std::fs::write(
        &payload,
        r#"{"name": "Stir Fry", "servings": 4, "ingredients": []}"#,
    )
    .unwrap();

    kitchen(&dir)
        .args(["recipe", "import"])
        .arg(&payload)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported recipe: Stir Fry"));

    kitchen(&dir)
        .args(["recipe", "import"])
        .arg(&payload)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn receipt_delete_accepts_listed_id() {
    let dir = TempDir::new().unwrap();

    kitchen(&dir)
        .args([
            "receipt", "add", "--store", "Aldi", "--date", "2025-06-05", "Milk:3.49",
        ])
        .assert()
        .success();

    // pull the short id out of `receipt list` output
    let output = kitchen(&dir).args(["receipt", "list"]).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let short_id = stdout
        .split('[')
        .nth(1)
        .and_then(|s| s.split(']').next())
        .unwrap()
        .to_string();
    assert!(short_id.starts_with("rct-"));

    kitchen(&dir)
        .args(["receipt", "delete", &short_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted receipt"));

    kitchen(&dir)
        .args(["receipt", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No receipts recorded."));
}

#[test]
fn receipt_prices_reconcile_non_ascii_names() {
    let dir = TempDir::new().unwrap();

    kitchen(&dir)
        .args(["recipe", "add", "Salsa", "--servings", "2"])
        .assert()
        .success();
    kitchen(&dir)
        .args([
            "recipe",
            "add-ingredient",
            "Salsa",
            "Jalapeño",
            "--price",
            "0.99",
        ])
        .assert()
        .success();

    kitchen(&dir)
        .args([
            "receipt", "add", "--store", "Aldi", "--date", "2025-06-05", "JALAPEÑO:1.29",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salsa / Jalapeño: $0.99 -> $1.29"));
}
