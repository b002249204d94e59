use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expense(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense").unwrap();
    cmd.env("EXPENSE_TRACKER_DATA_DIR", data_dir.path())
        .env_remove("EXPENSE_TRACKER_LOG");
    cmd
}

#[test]
fn add_then_view_shows_one_row() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["add", "50.0", "Grocery", "23-04-2024", "Weekly shopping"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added"))
        .stdout(predicate::str::contains("Date: 23-04-2024"));

    expense(&dir)
        .arg("view")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1     50.0       Grocery    23-04-2024           Weekly shopping",
        ));

    assert!(dir.path().join("expenses.db").exists());
}

#[test]
fn view_on_fresh_store_reports_no_expenses() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .arg("view")
        .assert()
        .success()
        .stdout("No expenses found.\n");
}

#[test]
fn delete_interior_entry_renumbers() {
    let dir = TempDir::new().unwrap();

    for (amount, description) in [("1", "first"), ("2", "second"), ("3", "third")] {
        expense(&dir)
            .args(["add", amount, "Misc", "01-01-2024", description])
            .assert()
            .success();
    }

    expense(&dir)
        .args(["delete", "2"])
        .assert()
        .success()
        .stdout("Entry with ID 2 deleted successfully.\n");

    expense(&dir)
        .arg("view")
        .assert()
        .success()
        .stdout(predicate::str::contains("1     1.0"))
        .stdout(predicate::str::contains("2     3.0"))
        .stdout(predicate::str::contains("second").not());
}

#[test]
fn delete_all_clears_everything() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["add", "9.99", "Books", "2024-04-23", "paperback"])
        .assert()
        .failure();

    expense(&dir)
        .args(["add", "9.99", "Books", "23-04-2024", "paperback"])
        .assert()
        .success();

    expense(&dir)
        .arg("delete_all")
        .assert()
        .success()
        .stdout("All entries deleted successfully.\n");

    expense(&dir)
        .arg("view")
        .assert()
        .success()
        .stdout("No expenses found.\n");
}

#[test]
fn invalid_arguments_fail_without_writing() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["add", "lots", "Food", "01-01-2024", "lunch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("lots"));

    expense(&dir).args(["delete"]).assert().failure();

    expense(&dir)
        .arg("view")
        .assert()
        .success()
        .stdout("No expenses found.\n");
}

#[test]
fn help_lists_commands() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("delete_all"))
        .stdout(predicate::str::contains("view"));

    expense(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("add"));
}

#[test]
fn interactive_session_runs_commands() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .write_stdin("y\nadd 12.5 Transport 02-05-2024 \"Bus pass\"\ny\nbogus\ny\nview\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the Expense Tracker!"))
        .stdout(predicate::str::contains("No valid command"))
        .stdout(predicate::str::contains(
            "1     12.5       Transport  02-05-2024           Bus pass",
        ))
        .stdout(predicate::str::ends_with("Goodbye!\n"));

    expense(&dir)
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome back"));
}

#[test]
fn confirm_delete_all_setting_is_honoured() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{"confirm_delete_all": true}"#).unwrap();

    expense(&dir)
        .args(["add", "5", "Food", "01-01-2024", "snack"])
        .assert()
        .success();

    expense(&dir)
        .arg("delete_all")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete cancelled."));

    expense(&dir)
        .arg("view")
        .assert()
        .success()
        .stdout(predicate::str::contains("snack"));
}

#[test]
fn time_of_day_date_format_is_rejected_at_startup() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{"date_format": "%d-%m-%Y %H:%M"}"#).unwrap();

    expense(&dir)
        .arg("view")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid date_format"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn long_help_explains_when_welcome_is_shown() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The welcome message is shown only when the interactive prompt starts.",
        ));
}
