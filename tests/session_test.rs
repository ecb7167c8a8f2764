mod common;

use anyhow::Result;
use common::{run_script, test_store, write_raw};
use productivity_suite::domain::Document;
use productivity_suite::storage::Store;
use tempfile::TempDir;

#[test]
fn test_budget_flow_is_saved_on_exit() -> Result<()> {
    let (store, _temp) = test_store()?;
    let script = "2\na\nsalary\n5000\na\n  Salary \n200\nb\nrent\n1500\nc\nd\n4\n";

    let (service, output) = run_script(store.clone(), script)?;

    assert!(output.contains("Added 5000.00 income to Salary (total: 5000.00)"));
    assert!(output.contains("Added 200.00 income to Salary (total: 5200.00)"));
    assert!(output.contains("Added 1500.00 expense to Rent (total: 1500.00)"));
    assert!(output.contains("Net savings:"));
    assert!(output.contains("3700.00"));
    assert!(output.contains("💾 Data saved to"));

    let saved = store.try_load()?;
    assert_eq!(saved.income.get("Salary"), Some(&520000));
    assert_eq!(saved.expenses.get("Rent"), Some(&150000));
    assert_eq!(saved, service.document());
    Ok(())
}

#[test]
fn test_invalid_amounts_are_skipped() -> Result<()> {
    let (store, _temp) = test_store()?;
    let script = "2\na\nSalary\nlots\na\nSalary\n-5\nb\n   \n10\nd\n4\n";

    let (service, output) = run_script(store, script)?;

    assert!(output.contains("❌ Invalid amount"));
    assert!(output.contains("❌ Amount must be greater than zero"));
    assert!(output.contains("❌ Label cannot be empty"));
    assert!(service.ledger().is_empty());
    Ok(())
}

#[test]
fn test_oversized_amount_is_rejected_and_data_kept() -> Result<()> {
    let (store, _temp) = test_store()?;
    let script = "2\na\nsalary\n100\n\
                  a\nsalary\n90000000000000000\n\
                  a\nsalary\n90000000000000000\n\
                  c\nd\n3\na\nkeep me\nc\n4\n";

    let (service, output) = run_script(store.clone(), script)?;

    assert_eq!(output.matches("❌ Amount too large").count(), 2);
    assert!(output.contains("would exceed the limit of 10000000000000.00"));
    assert_eq!(service.ledger().income().get("Salary"), Some(&10000));
    assert!(output.contains("💾 Data saved to"));

    let saved = store.try_load()?;
    assert_eq!(saved.income.get("Salary"), Some(&10000));
    assert_eq!(saved.notes.len(), 1);
    assert_eq!(saved.notes[0].content, "keep me");
    Ok(())
}

#[test]
fn test_empty_summary() -> Result<()> {
    let (store, _temp) = test_store()?;
    let (_, output) = run_script(store, "2\nc\nd\n4\n")?;

    assert!(output.contains("No income or expenses recorded yet."));
    assert!(output.contains("Total income:"));
    Ok(())
}

#[test]
fn test_notes_flow() -> Result<()> {
    let (store, _temp) = test_store()?;
    let script = "3\nb\na\nbuy milk\na\n   \na\ncall mom\nb\nc\n4\n";

    let (service, output) = run_script(store.clone(), script)?;

    assert!(output.contains("No notes yet."));
    assert!(output.contains("❌ Note cannot be empty"));
    assert_eq!(output.matches("✅ Note added at").count(), 2);
    assert!(output.contains("] buy milk\n2. ["));
    assert!(output.contains("] call mom"));
    assert_eq!(service.notes().len(), 2);
    assert_eq!(store.try_load()?.notes.len(), 2);
    Ok(())
}

#[test]
fn test_guessing_game_flow() -> Result<()> {
    let (store, _temp) = test_store()?;
    let script = "1\n50\nabc\n0\n-3\n25\n42\n4\n";

    let (_, output) = run_script(store, script)?;

    assert!(output.contains("You have 7 lives."));
    assert!(output.contains("📈 Too high! (6 lives left)"));
    assert!(output.contains("Invalid input! Please enter a valid integer."));
    assert_eq!(output.matches("Please enter a number between 1 and 100.").count(), 2);
    assert!(output.contains("📉 Too low! (5 lives left)"));
    assert!(output.contains("🏆 You win! Found it in 3 attempt(s)."));
    Ok(())
}

#[test]
fn test_guessing_game_loss() -> Result<()> {
    let (store, _temp) = test_store()?;
    let script = "1\n1\n2\n3\n4\n5\n6\n7\n4\n";

    let (_, output) = run_script(store, script)?;

    assert!(output.contains("You lose! The number was 42."));
    assert!(output.contains("===== 🗂️  Productivity Suite ====="));
    Ok(())
}

#[test]
fn test_invalid_menu_choice_recovers() -> Result<()> {
    let (store, _temp) = test_store()?;
    let (_, output) = run_script(store, "9\n2\nz\nd\n3\nq\nc\n4\n")?;

    assert!(output.contains("Invalid choice, please pick 1-4."));
    assert!(output.contains("Invalid choice, please pick a-d."));
    assert!(output.contains("Invalid choice, please pick a-c."));
    assert!(output.contains("👋 Goodbye!"));
    Ok(())
}

#[test]
fn test_end_of_input_saves_and_exits() -> Result<()> {
    let (store, _temp) = test_store()?;
    // Input ends in the middle of adding an expense
    let script = "2\na\nbonus\n250\nb\ngroceries\n";

    let (_, output) = run_script(store.clone(), script)?;

    assert!(output.contains("💾 Data saved to"));
    let saved = store.try_load()?;
    assert_eq!(saved.income.get("Bonus"), Some(&25000));
    assert!(saved.expenses.is_empty());
    Ok(())
}

#[test]
fn test_existing_data_is_extended() -> Result<()> {
    let (store, _temp) = test_store()?;
    write_raw(
        &store,
        r#"{"income": {"Salary": 5000}, "expenses": {"Rent": 1500}, "notes": []}"#,
    )?;

    let (service, output) = run_script(store, "2\na\nsalary\n200\nd\n4\n")?;

    assert!(!output.contains("Could not load saved data"));
    assert!(output.contains("(total: 5200.00)"));
    assert_eq!(service.summary().net_savings, 370000);
    Ok(())
}

#[test]
fn test_corrupt_file_is_discarded() -> Result<()> {
    let (store, _temp) = test_store()?;
    write_raw(&store, "{ this is not json")?;

    let (_, output) = run_script(store.clone(), "4\n")?;

    assert!(output.contains("⚠️  Could not load saved data"));
    assert!(output.contains("Starting with an empty ledger and no notes."));
    assert!(output.contains(&format!(
        "Saving will overwrite {}.",
        store.path().display()
    )));
    // Exit wrote a clean empty document over the corrupt one
    assert_eq!(store.try_load()?, Document::default());
    Ok(())
}

#[test]
fn test_save_failure_is_reported_not_fatal() -> Result<()> {
    let temp = TempDir::new()?;
    let store = Store::new(temp.path().join("missing-dir").join("data.json"));

    let (service, output) = run_script(store, "3\na\nremember me\nc\n4\n")?;

    assert!(output.contains("❌ Failed to save data"));
    assert!(output.contains("👋 Goodbye!"));
    assert_eq!(service.notes().len(), 1);
    Ok(())
}
