//! Deterministic mock record generation from registration numbers.
//!
//! Every generator derives the same [`StudentSeed`] from the registration
//! number and uses it to index the fixed lookup tables and to
//! drive a handful of arithmetic formulas. The same registration number
//! always produces the same records, across calls and process restarts.
//!
//! Internal marks are the one place randomness enters. [`internal_marks`]
//! seeds a `ChaCha8Rng` from the student seed so the output is reproducible;
//! [`internal_marks_with_rng`] accepts any RNG for callers that want marks
//! to vary between views.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::date::RecordDate;
use crate::records::{
    Achievement, AttendanceRecord, AttendanceStatus, Course, InternalMark, LibraryBook,
    LoanStatus, MAX_ASSIGNMENT_SCORE, MAX_INTERNAL_MARKS, MAX_TEST_SCORE, Student,
    StudentRecords,
};
use crate::seed::{StudentSeed, derive_seed, trailing_chars};
use crate::tables::{
    ACHIEVEMENTS, BLOOD_GROUPS, BOOKS, COMMUNITIES, COURSES, DEGREE_COURSES, DEPARTMENTS,
    DISTRICTS, FATHER_OCCUPATIONS, GENDERS, MOTHER_OCCUPATIONS, NAMES, RELIGIONS, SECTIONS,
    SUBJECTS,
};

/// Highest year of study.
const MAX_YEAR: u8 = 4;

/// Seeds per year of study before the year advances.
const SEEDS_PER_YEAR: u64 = 20;

/// Lowest base score for an internal test.
const TEST_BASE: u64 = 15;

/// Exclusive upper bound of the random bonus added to a test score.
const TEST_BONUS_RANGE: u8 = 5;

/// Base score for the assignment.
const ASSIGNMENT_BASE: u8 = 7;

/// Exclusive upper bound of the random bonus added to the assignment.
const ASSIGNMENT_BONUS_RANGE: u8 = 3;

/// Classes held for the first subject; each later subject adds [`CLASS_STEP`].
const BASE_CLASSES: u32 = 45;

/// Additional classes held per subject index.
const CLASS_STEP: u32 = 5;

/// Fine charged on the first loan for every third seed.
const LIBRARY_FINE: u32 = 50;

/// Calendar year used for achievements and library loans.
const RECORD_YEAR: u16 = 2024;

/// Earliest birth year of a generated student.
const BIRTH_YEAR_BASE: u16 = 1998;

const INSTITUTION_DOMAIN: &str = "licet.ac.in";
const BATCH: &str = "2020-2024";
const ACADEMIC_YEAR: &str = "2024-25";
const NATIONALITY: &str = "Indian";

/// Generates the student profile for a registration number.
///
/// # Example
///
/// ```
/// use student_records::student_profile;
///
/// let student = student_profile("312220104005");
/// assert_eq!(student.year, 1);
/// assert_eq!(student.semester, 2);
/// assert_eq!(student.phone_number, "+91 9000000005");
/// assert_eq!(student.date_of_birth.to_string(), "1998-06-06");
/// ```
#[must_use]
pub fn student_profile(registration_number: &str) -> Student {
    build_student(registration_number, derive_seed(registration_number))
}

/// Generates internal marks with a seed-derived RNG.
///
/// The result is reproducible: the same registration number always yields
/// the same marks.
///
/// # Example
///
/// ```
/// use student_records::internal_marks;
///
/// let first = internal_marks("312220104005");
/// assert_eq!(first.len(), 5);
/// assert_eq!(first, internal_marks("312220104005"));
/// ```
#[must_use]
pub fn internal_marks(registration_number: &str) -> Vec<InternalMark> {
    let seed = derive_seed(registration_number);
    let mut rng = ChaCha8Rng::seed_from_u64(seed.wide());
    build_internal_marks(seed, &mut rng)
}

/// Generates internal marks drawing the score bonuses from `rng`.
///
/// The per-subject base is still derived from the registration number; only
/// the bonus on top of it comes from the supplied RNG. With an unseeded RNG
/// repeated calls return different totals.
///
/// # Example
///
/// ```
/// use student_records::internal_marks_with_rng;
///
/// let marks = internal_marks_with_rng("312220104005", &mut rand::rng());
/// assert!(marks.iter().all(|mark| mark.total <= mark.max_marks));
/// ```
#[must_use]
pub fn internal_marks_with_rng<R>(registration_number: &str, rng: &mut R) -> Vec<InternalMark>
where
    R: Rng + ?Sized,
{
    build_internal_marks(derive_seed(registration_number), rng)
}

/// Generates per-subject attendance for a registration number.
///
/// # Example
///
/// ```
/// use student_records::{AttendanceStatus, attendance_records};
///
/// let records = attendance_records("312220104005");
/// let first = &records[0];
/// assert_eq!(first.total_classes, 45);
/// assert_eq!(first.attended_classes, 33);
/// assert_eq!(first.status, AttendanceStatus::Poor);
/// ```
#[must_use]
pub fn attendance_records(registration_number: &str) -> Vec<AttendanceRecord> {
    build_attendance(derive_seed(registration_number))
}

/// Generates between one and three achievements for a registration number.
#[must_use]
pub fn achievements(registration_number: &str) -> Vec<Achievement> {
    build_achievements(derive_seed(registration_number))
}

/// Generates one or two library loans for a registration number.
///
/// # Example
///
/// ```
/// use student_records::{LoanStatus, library_books};
///
/// let books = library_books("312220104000");
/// assert_eq!(books.len(), 1);
/// assert_eq!(books[0].status, LoanStatus::Issued);
/// assert_eq!(books[0].fine, Some(50));
/// ```
#[must_use]
pub fn library_books(registration_number: &str) -> Vec<LibraryBook> {
    build_library_books(derive_seed(registration_number))
}

/// Returns the course timetable. It is the same for every student.
#[must_use]
pub fn courses() -> Vec<Course> {
    COURSES
        .entries()
        .iter()
        .map(|entry| Course {
            code: entry.code.to_owned(),
            name: entry.name.to_owned(),
            credits: entry.credits,
            instructor: entry.instructor.to_owned(),
            schedule: entry.schedule.to_owned(),
            room: entry.room.to_owned(),
            kind: entry.kind,
        })
        .collect()
}

/// Generates every dashboard record for a registration number.
///
/// Internal marks use the seed-derived RNG, so the whole bundle is
/// reproducible.
#[must_use]
pub fn student_records(registration_number: &str) -> StudentRecords {
    let seed = derive_seed(registration_number);
    let mut rng = ChaCha8Rng::seed_from_u64(seed.wide());
    assemble(registration_number, seed, &mut rng)
}

/// Generates every dashboard record, drawing mark bonuses from `rng`.
#[must_use]
pub fn student_records_with_rng<R>(registration_number: &str, rng: &mut R) -> StudentRecords
where
    R: Rng + ?Sized,
{
    assemble(registration_number, derive_seed(registration_number), rng)
}

fn assemble<R>(registration_number: &str, seed: StudentSeed, rng: &mut R) -> StudentRecords
where
    R: Rng + ?Sized,
{
    debug!(registration_number, seed = %seed, "generating student records");
    StudentRecords {
        student: build_student(registration_number, seed),
        internal_marks: build_internal_marks(seed, rng),
        attendance: build_attendance(seed),
        achievements: build_achievements(seed),
        library_books: build_library_books(seed),
        courses: courses(),
    }
}

fn build_student(registration_number: &str, seed: StudentSeed) -> Student {
    let n = seed.wide();
    let name = *NAMES.pick(n);
    let district = *DISTRICTS.pick(n);
    let (year, semester) = year_and_semester(seed);
    let lowercase_registration = registration_number.to_lowercase();
    let student_email = format!("{lowercase_registration}@{INSTITUTION_DOMAIN}");
    let phone = format!("+91 {}", 9_000_000_000_u64.saturating_add(n));
    let parent_phone = format!("+91 {}", 8_000_000_000_u64.saturating_add(n));

    Student {
        registration_number: registration_number.to_owned(),
        name: name.to_owned(),
        roll_number: trailing_chars(registration_number, 4).to_owned(),
        email: student_email.clone(),
        department: (*DEPARTMENTS.pick(n)).to_owned(),
        course: (*DEGREE_COURSES.pick(n)).to_owned(),
        year,
        semester,
        section: *SECTIONS.pick(n),
        batch: BATCH.to_owned(),
        academic_year: ACADEMIC_YEAR.to_owned(),
        phone_number: phone.clone(),
        address: format!("{n} Main Street, Chennai, Tamil Nadu"),
        parent_name: format!("Parent of {name}"),
        parent_phone: parent_phone.clone(),
        blood_group: (*BLOOD_GROUPS.pick(n)).to_owned(),
        date_of_birth: RecordDate::new(
            BIRTH_YEAR_BASE.saturating_add(small(n.rem_euclid(5))),
            month_of(n),
            day_of(n, 28),
        ),
        admission_date: RecordDate::new(2020, 7, day_of(n, 30)),
        gender: *GENDERS.pick(n),
        father_name: format!("Father of {name}"),
        mother_name: format!("Mother of {name}"),
        father_occupation: (*FATHER_OCCUPATIONS.pick(n)).to_owned(),
        mother_occupation: (*MOTHER_OCCUPATIONS.pick(n)).to_owned(),
        annual_income: format!("₹{}", (n.rem_euclid(10) + 3) * 100_000),
        residential_address: format!(
            "{n} Residential Street, {district}, Tamil Nadu - {}",
            600_000_u64.saturating_add(n)
        ),
        student_contact_no: phone,
        student_email,
        parent_contact_no: parent_phone,
        parent_email: format!("parent.{lowercase_registration}@gmail.com"),
        community: (*COMMUNITIES.pick(n)).to_owned(),
        nationality: NATIONALITY.to_owned(),
        religion: (*RELIGIONS.pick(n)).to_owned(),
        hosteller: n.rem_euclid(3) == 0,
        district: district.to_owned(),
    }
}

/// Returns `(year, semester)`; the semester always follows from the year.
fn year_and_semester(seed: StudentSeed) -> (u8, u8) {
    let n = seed.wide();
    let year_index = n.div_euclid(SEEDS_PER_YEAR).min(u64::from(MAX_YEAR - 1));
    let year = u8::try_from(year_index + 1).unwrap_or(MAX_YEAR);
    let semester_in_year = u8::try_from(n.rem_euclid(2) + 1).unwrap_or(1);
    (year, (year - 1) * 2 + semester_in_year)
}

fn build_internal_marks<R>(seed: StudentSeed, rng: &mut R) -> Vec<InternalMark>
where
    R: Rng + ?Sized,
{
    SUBJECTS
        .entries()
        .iter()
        .enumerate()
        .map(|(index, subject)| {
            let base = small(TEST_BASE + seed.offset(index).rem_euclid(10));
            let test1 = capped(base, rng.random_range(0..TEST_BONUS_RANGE), MAX_TEST_SCORE);
            let test2 = capped(base, rng.random_range(0..TEST_BONUS_RANGE), MAX_TEST_SCORE);
            let assignment = capped(
                ASSIGNMENT_BASE,
                rng.random_range(0..ASSIGNMENT_BONUS_RANGE),
                MAX_ASSIGNMENT_SCORE,
            );
            let total = test1 + test2 + assignment;

            InternalMark {
                subject: subject.name.to_owned(),
                subject_code: subject.code.to_owned(),
                test1,
                test2,
                assignment,
                total,
                max_marks: MAX_INTERNAL_MARKS,
                percentage: percentage_of(u32::from(total), u32::from(MAX_INTERNAL_MARKS)),
            }
        })
        .collect()
}

fn build_attendance(seed: StudentSeed) -> Vec<AttendanceRecord> {
    SUBJECTS
        .entries()
        .iter()
        .zip(0_u32..)
        .map(|(subject, index)| {
            let total_classes = BASE_CLASSES + index * CLASS_STEP;
            let attended_classes = attended_classes(total_classes, seed);
            let percentage = percentage_of(attended_classes, total_classes);

            AttendanceRecord {
                subject: subject.name.to_owned(),
                subject_code: subject.code.to_owned(),
                total_classes,
                attended_classes,
                percentage,
                status: AttendanceStatus::from_percentage(percentage),
            }
        })
        .collect()
}

fn build_achievements(seed: StudentSeed) -> Vec<Achievement> {
    let count = usize::try_from(seed.wide().rem_euclid(3) + 1).unwrap_or(1);
    ACHIEVEMENTS
        .entries()
        .iter()
        .take(count)
        .enumerate()
        .map(|(index, entry)| {
            let offset = seed.offset(index);
            Achievement {
                id: format!("ach_{}", index + 1),
                title: entry.title.to_owned(),
                description: entry.description.to_owned(),
                date: RecordDate::new(RECORD_YEAR, month_of(offset), day_of(offset, 28)),
                category: entry.category,
            }
        })
        .collect()
}

fn build_library_books(seed: StudentSeed) -> Vec<LibraryBook> {
    let count = usize::try_from(seed.wide().rem_euclid(2) + 1).unwrap_or(1);
    let owes_fine = seed.wide().rem_euclid(3) == 0;
    BOOKS
        .entries()
        .iter()
        .take(count)
        .enumerate()
        .map(|(index, entry)| {
            let offset = seed.offset(index);
            let is_first = index == 0;
            LibraryBook {
                id: format!("book_{}", index + 1),
                title: entry.title.to_owned(),
                author: entry.author.to_owned(),
                isbn: entry.isbn.to_owned(),
                issue_date: RecordDate::new(RECORD_YEAR, month_of(offset), day_of(offset, 28)),
                due_date: RecordDate::new(
                    RECORD_YEAR,
                    month_of(offset.saturating_add(1)),
                    day_of(offset.saturating_add(15), 28),
                ),
                status: if is_first {
                    LoanStatus::Issued
                } else {
                    LoanStatus::Returned
                },
                fine: (is_first && owes_fine).then_some(LIBRARY_FINE),
            }
        })
        .collect()
}

/// `floor(total * (0.7 + (seed % 20) / 100))` in double precision.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the attendance ratio is defined in double precision and floored"
)]
fn attended_classes(total_classes: u32, seed: StudentSeed) -> u32 {
    let ratio = 0.7 + f64::from(seed.value().rem_euclid(20)) / 100.0;
    (f64::from(total_classes) * ratio).floor() as u32
}

#[expect(
    clippy::float_arithmetic,
    reason = "percentages are reported as floating point"
)]
fn percentage_of(part: u32, whole: u32) -> f64 {
    f64::from(part) / f64::from(whole) * 100.0
}

fn capped(base: u8, bonus: u8, cap: u8) -> u8 {
    base.saturating_add(bonus).min(cap)
}

fn month_of(value: u64) -> u8 {
    small(value.rem_euclid(12) + 1)
}

fn day_of(value: u64, cycle: u64) -> u8 {
    small(value.rem_euclid(cycle) + 1)
}

/// Narrows a value already reduced below 256.
fn small<T: From<u8> + TryFrom<u64>>(value: u64) -> T {
    T::try_from(value).unwrap_or_else(|_| T::from(u8::MAX))
}
