use skillcheck::allocator::{
    allocate, create_task_file, format_filename, next_counter, AllocError, TaskDate,
};
use std::path::Path;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn date(s: &str) -> TaskDate {
    s.parse().expect("valid date")
}

fn touch(dir: &Path, name: &str) {
    std::fs::write(dir.join(name), "").unwrap();
}

// ---------------------------------------------------------------------------
// Date parsing
// ---------------------------------------------------------------------------

#[test]
fn parses_valid_date() {
    let d = date("20-11-2025");
    assert_eq!((d.day, d.month, d.year), (20, 11, 2025));
    assert_eq!(d.to_string(), "20-11-2025");
}

#[test]
fn rejects_wrong_shape() {
    for bad in ["2025-11-20", "20/11/2025", "1-1-2026", "20-11-25", "nonsense"] {
        assert!(
            matches!(bad.parse::<TaskDate>(), Err(AllocError::InvalidDateFormat(_))),
            "expected InvalidDateFormat for {bad:?}"
        );
    }
}

#[test]
fn rejects_day_zero_and_month_thirteen() {
    assert!("00-01-2026".parse::<TaskDate>().is_err());
    assert!("32-01-2026".parse::<TaskDate>().is_err());
    assert!("01-13-2026".parse::<TaskDate>().is_err());
    assert!("01-00-2026".parse::<TaskDate>().is_err());
}

#[test]
fn day_31_of_february_is_accepted() {
    // Lenient by contract: the allocator matches string patterns, it is not
    // a calendar engine.
    assert!("31-02-2026".parse::<TaskDate>().is_ok());
}

// ---------------------------------------------------------------------------
// next_counter
// ---------------------------------------------------------------------------

#[test]
fn empty_directory_allocates_one() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(next_counter(dir.path(), &date("20-11-2025")).unwrap(), 1);
}

#[test]
fn absent_directory_allocates_one() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    assert_eq!(next_counter(&missing, &date("20-11-2025")).unwrap(), 1);
}

#[test]
fn counter_continues_past_existing_files() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "20-11-2025-[001]-a.xml");
    touch(dir.path(), "20-11-2025-[002]-b.xml");
    assert_eq!(next_counter(dir.path(), &date("20-11-2025")).unwrap(), 3);
}

#[test]
fn gaps_are_not_reused() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "20-11-2025-[001]-a.xml");
    touch(dir.path(), "20-11-2025-[007]-b.xml");
    assert_eq!(next_counter(dir.path(), &date("20-11-2025")).unwrap(), 8);
}

#[test]
fn other_dates_do_not_influence_the_counter() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "19-11-2025-[004]-old.xml");
    touch(dir.path(), "21-11-2025-[009]-new.xml");
    assert_eq!(next_counter(dir.path(), &date("20-11-2025")).unwrap(), 1);
}

#[test]
fn non_matching_files_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "notes.md");
    touch(dir.path(), "20-11-2025-unnumbered.xml");
    touch(dir.path(), "20-11-2025-[ab]-bad.xml");
    assert_eq!(next_counter(dir.path(), &date("20-11-2025")).unwrap(), 1);
}

#[test]
fn wide_counters_are_honored() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "20-11-2025-[1000]-big.xml");
    assert_eq!(next_counter(dir.path(), &date("20-11-2025")).unwrap(), 1001);
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

#[test]
fn counter_is_zero_padded_to_three_digits() {
    let d = date("01-01-2026");
    assert_eq!(format_filename(&d, 1, "slug"), "01-01-2026-[001]-slug.xml");
    assert_eq!(format_filename(&d, 42, "slug"), "01-01-2026-[042]-slug.xml");
}

#[test]
fn counter_past_999_expands_width() {
    // Width grows rather than capping at three digits.
    let d = date("01-01-2026");
    assert_eq!(format_filename(&d, 1000, "slug"), "01-01-2026-[1000]-slug.xml");
}

// ---------------------------------------------------------------------------
// allocate
// ---------------------------------------------------------------------------

#[test]
fn allocate_on_fresh_directory() {
    let dir = tempfile::tempdir().unwrap();
    let alloc = allocate(dir.path(), &date("01-01-2026"), "first-task").unwrap();
    assert_eq!(alloc.counter, 1);
    assert_eq!(alloc.filename, "01-01-2026-[001]-first-task.xml");
}

#[test]
fn allocate_does_not_create_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let alloc = allocate(dir.path(), &date("01-01-2026"), "first-task").unwrap();
    assert!(!dir.path().join(&alloc.filename).exists());
}

#[test]
fn allocate_rejects_bad_task_names() {
    let dir = tempfile::tempdir().unwrap();
    for bad in ["Fix-Bug", "two--hyphens", "-leading", "trailing-", "with space", ""] {
        assert!(
            matches!(
                allocate(dir.path(), &date("01-01-2026"), bad),
                Err(AllocError::InvalidTaskName(_))
            ),
            "expected InvalidTaskName for {bad:?}"
        );
    }
}

// ---------------------------------------------------------------------------
// create_task_file
// ---------------------------------------------------------------------------

#[test]
fn create_commits_the_allocated_name() {
    let dir = tempfile::tempdir().unwrap();
    let alloc = create_task_file(dir.path(), &date("01-01-2026"), "first-task").unwrap();
    assert!(dir.path().join(&alloc.filename).exists());
}

#[test]
fn create_makes_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("tasks/2026");
    let alloc = create_task_file(&nested, &date("01-01-2026"), "first-task").unwrap();
    assert!(nested.join(&alloc.filename).exists());
}

#[test]
fn repeated_creates_get_increasing_counters() {
    let dir = tempfile::tempdir().unwrap();
    let d = date("01-01-2026");
    let a = create_task_file(dir.path(), &d, "task-a").unwrap();
    let b = create_task_file(dir.path(), &d, "task-b").unwrap();
    let c = create_task_file(dir.path(), &d, "task-c").unwrap();
    assert_eq!((a.counter, b.counter, c.counter), (1, 2, 3));
}

#[test]
fn create_retries_past_a_squatted_counter() {
    // Simulate losing the race: counter 1 is taken between calls.
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "01-01-2026-[001]-rival.xml");
    let alloc = create_task_file(dir.path(), &date("01-01-2026"), "my-task").unwrap();
    assert_eq!(alloc.counter, 2);
    assert!(dir.path().join("01-01-2026-[002]-my-task.xml").exists());
}
