//! Task filename allocation.
//!
//! Task files are named `DD-MM-YYYY-[NNN]-task-name.xml`, where `NNN` is a
//! zero-padded counter unique per directory per date. The allocator computes
//! the next free counter by scanning the directory on every call — there is
//! no cached state, which keeps repeated invocations deterministic against
//! whatever is actually on disk.
//!
//! Allocation does not reserve the name. The commit point is the
//! exclusive-create in [`create_task_file`]: when two callers race to the
//! same counter, one create fails with `AlreadyExists` and the loser
//! re-allocates and retries.
//!
//! ```rust,no_run
//! use std::path::Path;
//! use skillcheck::allocator::{self, TaskDate};
//!
//! let date: TaskDate = "20-11-2025".parse()?;
//! let alloc = allocator::allocate(Path::new("./tasks"), &date, "refactor-parser")?;
//! println!("{}", alloc.filename); // 20-11-2025-[001]-refactor-parser.xml
//! # Ok::<(), skillcheck::allocator::AllocError>(())
//! ```

use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::LazyLock;

/// `DD-MM-YYYY` with two-digit day and month and a four-digit year.
static RE_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})-(\d{2})-(\d{4})$").unwrap());

/// Kebab-case task slug: lowercase alphanumeric runs joined by single hyphens.
static RE_TASK_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap());

/// Bound on create-and-retry attempts in [`create_task_file`]. Each retry
/// re-scans the directory, so hitting this bound means the directory is
/// being written to faster than we can list it.
const MAX_CREATE_ATTEMPTS: u32 = 100;

/// Errors from the allocator.
#[derive(Debug)]
pub enum AllocError {
    /// The date string is not `DD-MM-YYYY` with day 1–31 and month 1–12.
    InvalidDateFormat(String),
    /// The task name is not a kebab-case slug.
    InvalidTaskName(String),
    /// The target directory exists but cannot be listed.
    DirectoryUnreadable(PathBuf, std::io::Error),
    /// Exclusive-create kept colliding with concurrent allocations.
    NameCollision(String),
    /// Any other I/O failure while creating the task file.
    Io(std::io::Error),
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocError::InvalidDateFormat(s) => {
                write!(f, "invalid date '{s}': expected DD-MM-YYYY (day 1-31, month 1-12)")
            }
            AllocError::InvalidTaskName(s) => {
                write!(f, "invalid task name '{s}': expected kebab-case (e.g. 'refactor-parser')")
            }
            AllocError::DirectoryUnreadable(p, e) => {
                write!(f, "cannot read directory {}: {e}", p.display())
            }
            AllocError::NameCollision(name) => {
                write!(f, "could not create '{name}': name kept colliding with concurrent writers")
            }
            AllocError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for AllocError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AllocError::DirectoryUnreadable(_, e) | AllocError::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// A calendar date for the filename prefix.
///
/// Deliberately lenient: day 31 of any month is accepted. The allocator is a
/// string-pattern matcher, not a calendar engine, so no month-length
/// cross-check is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskDate {
    pub day: u8,
    pub month: u8,
    pub year: u16,
}

impl TaskDate {
    /// Today's date in the local timezone.
    pub fn today() -> TaskDate {
        use chrono::Datelike;
        let now = chrono::Local::now();
        TaskDate {
            day: now.day() as u8,
            month: now.month() as u8,
            year: now.year() as u16,
        }
    }
}

impl FromStr for TaskDate {
    type Err = AllocError;

    fn from_str(s: &str) -> Result<TaskDate, AllocError> {
        let caps = RE_DATE
            .captures(s)
            .ok_or_else(|| AllocError::InvalidDateFormat(s.to_string()))?;
        // The regex guarantees two/two/four digits, so these parses cannot fail.
        let day: u8 = caps[1].parse().unwrap_or(0);
        let month: u8 = caps[2].parse().unwrap_or(0);
        let year: u16 = caps[3].parse().unwrap_or(0);

        if !(1..=31).contains(&day) || !(1..=12).contains(&month) {
            return Err(AllocError::InvalidDateFormat(s.to_string()));
        }
        Ok(TaskDate { day, month, year })
    }
}

impl fmt::Display for TaskDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}-{:04}", self.day, self.month, self.year)
    }
}

/// An allocated task filename.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct AllocatedFilename {
    /// Sequence number, strictly greater than every counter already present
    /// in the directory for the same date.
    pub counter: u32,
    /// `{DD-MM-YYYY}-[{counter:03}]-{task-name}.xml`
    pub filename: String,
}

/// Computes the next unused counter for `date` within `directory`.
///
/// Scans the immediate (non-recursive) entries for names matching
/// `{date}-[NNN]-*` and returns `max + 1`, or `1` when nothing matches. An
/// absent directory is treated as empty — the first task of the day is not
/// an error. Files from other dates never influence the result.
///
/// # Errors
///
/// [`AllocError::DirectoryUnreadable`] when the directory exists but cannot
/// be listed.
pub fn next_counter(directory: &Path, date: &TaskDate) -> Result<u32, AllocError> {
    let entries = match std::fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(1),
        Err(e) => return Err(AllocError::DirectoryUnreadable(directory.to_path_buf(), e)),
    };

    // Counters are zero-padded to at least 3 digits but may grow wider, so
    // the pattern accepts 3 or more.
    let pattern = Regex::new(&format!(r"^{date}-\[(\d{{3,}})\]-.+"))
        .expect("date prefix produces a valid regex");

    let mut max: u32 = 0;
    for entry in entries.filter_map(|e| e.ok()) {
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if let Some(caps) = pattern.captures(name) {
            if let Ok(n) = caps[1].parse::<u32>() {
                max = max.max(n);
            }
        }
    }

    Ok(max + 1)
}

/// Formats a task filename from its parts.
///
/// The counter is zero-padded to 3 digits; counters past 999 keep all their
/// digits rather than being truncated.
pub fn format_filename(date: &TaskDate, counter: u32, task_name: &str) -> String {
    format!("{date}-[{counter:03}]-{task_name}.xml")
}

/// Allocates the next task filename for `date` in `directory`.
///
/// Does **not** create or reserve anything: two concurrent callers can get
/// the same counter. Use [`create_task_file`] when the file should actually
/// exist afterwards.
///
/// # Errors
///
/// [`AllocError::InvalidTaskName`] when `task_name` is not kebab-case, plus
/// everything [`next_counter`] can return.
pub fn allocate(
    directory: &Path,
    date: &TaskDate,
    task_name: &str,
) -> Result<AllocatedFilename, AllocError> {
    if !RE_TASK_NAME.is_match(task_name) {
        return Err(AllocError::InvalidTaskName(task_name.to_string()));
    }

    let counter = next_counter(directory, date)?;
    Ok(AllocatedFilename {
        counter,
        filename: format_filename(date, counter, task_name),
    })
}

/// Allocates a task filename and commits it with an exclusive create.
///
/// This is the concurrency-correct path: the file is opened with
/// create-new (fail-if-exists) semantics, and a collision with a concurrent
/// allocator triggers re-allocation and retry. The directory is created
/// first when absent.
///
/// # Errors
///
/// [`AllocError::NameCollision`] if the retry budget is exhausted, or any
/// allocation/I/O error.
pub fn create_task_file(
    directory: &Path,
    date: &TaskDate,
    task_name: &str,
) -> Result<AllocatedFilename, AllocError> {
    std::fs::create_dir_all(directory).map_err(AllocError::Io)?;

    let mut last_name = String::new();
    for _ in 0..MAX_CREATE_ATTEMPTS {
        let alloc = allocate(directory, date, task_name)?;
        let path = directory.join(&alloc.filename);

        match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
        {
            Ok(_) => return Ok(alloc),
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                // Lost the race; rescan and try the next counter.
                last_name = alloc.filename;
            }
            Err(e) => return Err(AllocError::Io(e)),
        }
    }

    Err(AllocError::NameCollision(last_name))
}
