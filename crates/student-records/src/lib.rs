//! Deterministic mock student records for the student portal.
//!
//! Every record is synthesised from a registration number alone. The last
//! two characters of the registration number give a seed, and the seed
//! indexes fixed lookup tables and drives a few arithmetic formulas. Nothing
//! is persisted and no network access happens; the same registration number
//! always yields the same records.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Deriving the shared seed from a registration number
//! - Generating the profile, internal marks, attendance, achievements,
//!   library loans, and course timetable
//! - Summarising attendance and achievements for the dashboard
//! - Rendering any section as JSON for presentation layers
//!
//! # Example
//!
//! ```
//! use student_records::{AttendanceStatus, attendance_records, derive_seed, student_profile};
//!
//! let registration = "312220104005";
//! assert_eq!(derive_seed(registration).value(), 5);
//!
//! let student = student_profile(registration);
//! assert_eq!((student.year, student.semester), (1, 2));
//!
//! let attendance = attendance_records(registration);
//! assert_eq!(attendance.len(), 5);
//! assert!(attendance.iter().all(|r| r.status == AttendanceStatus::Poor || r.percentage >= 75.0));
//! ```

mod date;
mod error;
mod generator;
mod records;
mod render;
mod seed;
mod settings;
mod summary;
mod tables;

pub use date::RecordDate;
pub use error::{CliError, DateParseError, RenderError, SectionParseError};
pub use generator::{
    achievements, attendance_records, courses, internal_marks, internal_marks_with_rng,
    library_books, student_profile, student_records, student_records_with_rng,
};
pub use records::{
    Achievement, AchievementCategory, AttendanceRecord, AttendanceStatus, Course, CourseKind,
    Gender, InternalMark, LibraryBook, LoanStatus, MAX_ASSIGNMENT_SCORE, MAX_INTERNAL_MARKS,
    MAX_TEST_SCORE, Student, StudentRecords,
};
pub use render::{RecordSection, render_section};
pub use seed::{DEFAULT_SEED, StudentSeed, derive_seed};
pub use settings::{DEFAULT_REGISTRATION_NUMBER, PortalSettings};
pub use summary::{AchievementStats, AttendanceSummary};
