use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

/// A `shelf` invocation isolated from the user's config, env and data.
fn shelf(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("shelf").unwrap();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_DATA_HOME", home.join("data"))
        .env_remove("SHELF_DATA_DIR")
        .env_remove("SHELF_STORAGE_KEY")
        .env_remove("SHELF_LOG_LEVEL")
        .env_remove("SHELF_LOG")
        .arg("--no-color")
        .arg("--data-dir")
        .arg(home.join("books"));
    cmd
}

fn stored_books(home: &Path) -> Vec<serde_json::Value> {
    let path = home.join("books").join("books.json");
    match std::fs::read_to_string(path) {
        Ok(raw) => serde_json::from_str(&raw).unwrap(),
        Err(_) => Vec::new(),
    }
}

fn add_dune(home: &Path) -> String {
    shelf(home)
        .args(["add", "Dune", "Frank Herbert", "1965"])
        .assert()
        .success();
    stored_books(home)
        .last()
        .unwrap()["id"]
        .as_i64()
        .unwrap()
        .to_string()
}

#[test]
fn test_add_reports_and_persists() {
    let temp = TempDir::new().unwrap();
    shelf(temp.path())
        .args(["add", "Dune", "Frank Herbert", "1965"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Book Added: Book \"Dune\" added to the Unfinished shelf!",
        ));

    let books = stored_books(temp.path());
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["isComplete"], false);
}

#[test]
fn test_add_finished_goes_to_finished_shelf() {
    let temp = TempDir::new().unwrap();
    shelf(temp.path())
        .args(["a", "Emma", "Jane Austen", "1815", "--finished"])
        .assert()
        .success()
        .stdout(predicate::str::contains("added to the Finished shelf!"));
}

#[test]
fn test_invalid_add_fails_without_writing() {
    let temp = TempDir::new().unwrap();
    shelf(temp.path())
        .args(["add", "", "Frank Herbert", "1965"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please fill in all book fields!"));

    shelf(temp.path())
        .args(["add", "Dune", "Frank Herbert", "0"])
        .assert()
        .failure();

    assert!(stored_books(temp.path()).is_empty());
}

#[test]
fn test_naked_invocation_lists_shelves() {
    let temp = TempDir::new().unwrap();
    let id = add_dune(temp.path());

    shelf(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "Unfinished (1)\n  {}  Dune",
            id
        )))
        .stdout(predicate::str::contains("Finished (0)\n  No finished books.\n"));
}

#[test]
fn test_toggle_moves_book_between_shelves() {
    let temp = TempDir::new().unwrap();
    let id = add_dune(temp.path());

    shelf(temp.path())
        .args(["toggle", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Book Status Updated: Book \"Dune\" moved to the Finished shelf!",
        ));
    assert_eq!(stored_books(temp.path())[0]["isComplete"], true);

    let output = shelf(temp.path()).arg("ls").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let (unfinished, finished) = stdout.split_once("Finished (1)").unwrap();
    assert!(!unfinished.contains("Dune"));
    assert!(finished.contains("Dune"));
}

#[test]
fn test_toggle_unknown_id_warns() {
    let temp = TempDir::new().unwrap();
    shelf(temp.path())
        .args(["t", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: No book with id 42"));
}

#[test]
fn test_edit_keeps_omitted_fields() {
    let temp = TempDir::new().unwrap();
    let id = add_dune(temp.path());

    shelf(temp.path())
        .args(["edit", &id, "--year", "1966"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Edit Succeeded: Book \"Dune\" was updated!",
        ));

    let book = &stored_books(temp.path())[0];
    assert_eq!(book["year"], 1966);
    assert_eq!(book["title"], "Dune");
    assert_eq!(book["author"], "Frank Herbert");
}

#[test]
fn test_edit_with_blank_title_is_rejected() {
    let temp = TempDir::new().unwrap();
    let id = add_dune(temp.path());

    shelf(temp.path())
        .args(["e", &id, "--title", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please fill in all book fields!"));
    assert_eq!(stored_books(temp.path())[0]["title"], "Dune");
}

#[test]
fn test_delete_declined_keeps_book() {
    let temp = TempDir::new().unwrap();
    let id = add_dune(temp.path());

    shelf(temp.path())
        .args(["delete", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete the book \"Dune\"? [y/N]"))
        .stdout(predicate::str::contains("Cancelled: Deletion cancelled."));
    assert_eq!(stored_books(temp.path()).len(), 1);
}

#[test]
fn test_delete_confirmed_removes_book() {
    let temp = TempDir::new().unwrap();
    let id = add_dune(temp.path());

    shelf(temp.path())
        .args(["rm", &id])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Book Deleted: \"Dune\" was deleted!"));
    assert!(stored_books(temp.path()).is_empty());
}

#[test]
fn test_delete_with_yes_skips_prompt() {
    let temp = TempDir::new().unwrap();
    let id = add_dune(temp.path());

    shelf(temp.path())
        .args(["delete", &id, "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[y/N]").not());
    assert!(stored_books(temp.path()).is_empty());
}

#[test]
fn test_delete_without_answer_cancels() {
    let temp = TempDir::new().unwrap();
    let id = add_dune(temp.path());

    shelf(temp.path())
        .args(["delete", &id])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deletion cancelled."));
    assert_eq!(stored_books(temp.path()).len(), 1);
}

#[test]
fn test_search_is_case_insensitive() {
    let temp = TempDir::new().unwrap();
    add_dune(temp.path());
    shelf(temp.path())
        .args(["add", "Emma", "Jane Austen", "1815"])
        .assert()
        .success();

    shelf(temp.path())
        .args(["search", "DUN"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Search: \"DUN\""))
        .stdout(predicate::str::contains("Dune"))
        .stdout(predicate::str::contains("Emma").not());
}

#[test]
fn test_search_without_match_says_so() {
    let temp = TempDir::new().unwrap();
    add_dune(temp.path());

    shelf(temp.path())
        .args(["s", "hobbit"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Search Results: No books found with a title containing \"hobbit\".",
        ));
}

#[test]
fn test_show_book_and_missing_book() {
    let temp = TempDir::new().unwrap();
    let id = add_dune(temp.path());

    shelf(temp.path())
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Dune\n"))
        .stdout(predicate::str::contains("Shelf   Unfinished"));

    shelf(temp.path())
        .args(["show", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Book not found: 7"));
}

#[test]
fn test_corrupt_slot_is_an_error() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("books");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("books.json"), "{oops").unwrap();

    shelf(temp.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Serialization error"));
}

#[test]
fn test_path_prints_slot_file() {
    let temp = TempDir::new().unwrap();
    shelf(temp.path())
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("books.json\n"));
}

#[test]
fn test_storage_key_from_env() {
    let temp = TempDir::new().unwrap();
    shelf(temp.path())
        .env("SHELF_STORAGE_KEY", "library")
        .args(["add", "Dune", "Frank Herbert", "1965"])
        .assert()
        .success();

    assert!(temp.path().join("books").join("library.json").exists());
    assert!(stored_books(temp.path()).is_empty());
}

#[test]
fn test_storage_key_outside_data_dir_is_refused() {
    let temp = TempDir::new().unwrap();
    shelf(temp.path())
        .env("SHELF_STORAGE_KEY", "../escape")
        .args(["add", "Dune", "Frank Herbert", "1965"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid storage key"));

    assert!(!temp.path().join("escape.json").exists());
}

#[test]
fn test_config_shows_effective_values() {
    let temp = TempDir::new().unwrap();
    shelf(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("storage_key = \"books\""))
        .stdout(predicate::str::contains("log_level = \"warn\""));

    shelf(temp.path())
        .args(["config", "gen"])
        .assert()
        .success()
        .stdout(predicate::str::contains("storage_key"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let temp = TempDir::new().unwrap();
    shelf(temp.path())
        .args(["-v", "add", "Dune", "Frank Herbert", "1965"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DEBUG").not())
        .stderr(predicate::str::contains("DEBUG"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("shelf")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
