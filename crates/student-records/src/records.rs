//! Generated record types.
//!
//! These are plain value records: every generator call builds them afresh
//! and they carry no identity beyond equality. Field names serialise in
//! camelCase so the JSON matches what the portal front end consumes.

use serde::{Deserialize, Serialize};

use crate::date::RecordDate;

/// Maximum internal marks for a subject (two tests and one assignment).
pub const MAX_INTERNAL_MARKS: u8 = 50;

/// Maximum score for a single internal test.
pub const MAX_TEST_SCORE: u8 = 20;

/// Maximum score for the internal assignment.
pub const MAX_ASSIGNMENT_SCORE: u8 = 10;

/// Gender recorded on the student profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
}

/// Student profile shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Registration number the profile was derived from.
    pub registration_number: String,
    /// Display name.
    pub name: String,
    /// Last four characters of the registration number.
    pub roll_number: String,
    /// Institutional email address.
    pub email: String,
    /// Department name.
    pub department: String,
    /// Degree programme.
    pub course: String,
    /// Year of study, 1 to 4.
    pub year: u8,
    /// Semester, 1 to 8, always `(year - 1) * 2 + semester_in_year`.
    pub semester: u8,
    /// Section letter (A, B or C).
    pub section: char,
    /// Batch span.
    pub batch: String,
    /// Current academic year.
    pub academic_year: String,
    /// Student phone number.
    pub phone_number: String,
    /// Postal address.
    pub address: String,
    /// Parent or guardian name.
    pub parent_name: String,
    /// Parent phone number.
    pub parent_phone: String,
    /// Blood group.
    pub blood_group: String,
    /// Date of birth.
    pub date_of_birth: RecordDate,
    /// Date of admission.
    pub admission_date: RecordDate,
    /// Gender.
    pub gender: Gender,
    /// Father's name.
    pub father_name: String,
    /// Mother's name.
    pub mother_name: String,
    /// Father's occupation.
    pub father_occupation: String,
    /// Mother's occupation.
    pub mother_occupation: String,
    /// Annual family income, formatted in rupees.
    pub annual_income: String,
    /// Residential address including district and PIN code.
    pub residential_address: String,
    /// Student contact number.
    pub student_contact_no: String,
    /// Student email address.
    pub student_email: String,
    /// Parent contact number.
    pub parent_contact_no: String,
    /// Parent email address.
    pub parent_email: String,
    /// Community classification.
    pub community: String,
    /// Nationality.
    pub nationality: String,
    /// Religion.
    pub religion: String,
    /// Whether the student stays in the hostel.
    pub hosteller: bool,
    /// Home district.
    pub district: String,
}

/// Internal assessment marks for one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalMark {
    /// Subject name.
    pub subject: String,
    /// Subject code.
    pub subject_code: String,
    /// First internal test score, at most [`MAX_TEST_SCORE`].
    pub test1: u8,
    /// Second internal test score, at most [`MAX_TEST_SCORE`].
    pub test2: u8,
    /// Assignment score, at most [`MAX_ASSIGNMENT_SCORE`].
    pub assignment: u8,
    /// Sum of both tests and the assignment.
    pub total: u8,
    /// Always [`MAX_INTERNAL_MARKS`].
    pub max_marks: u8,
    /// `total / max_marks * 100`.
    pub percentage: f64,
}

/// Attendance tier derived from the attendance percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    /// 85% and above.
    Good,
    /// From 75% up to 85%.
    Average,
    /// Below 75%.
    Poor,
}

impl AttendanceStatus {
    /// Percentage below which attendance is [`AttendanceStatus::Poor`].
    pub const POOR_BELOW: f64 = 75.0;

    /// Percentage below which attendance is [`AttendanceStatus::Average`].
    pub const AVERAGE_BELOW: f64 = 85.0;

    /// Classifies an attendance percentage.
    ///
    /// # Example
    ///
    /// ```
    /// use student_records::AttendanceStatus;
    ///
    /// assert_eq!(AttendanceStatus::from_percentage(74.9), AttendanceStatus::Poor);
    /// assert_eq!(AttendanceStatus::from_percentage(75.0), AttendanceStatus::Average);
    /// assert_eq!(AttendanceStatus::from_percentage(85.0), AttendanceStatus::Good);
    /// ```
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage < Self::POOR_BELOW {
            Self::Poor
        } else if percentage < Self::AVERAGE_BELOW {
            Self::Average
        } else {
            Self::Good
        }
    }
}

/// Attendance for one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    /// Subject name.
    pub subject: String,
    /// Subject code.
    pub subject_code: String,
    /// Classes held.
    pub total_classes: u32,
    /// Classes attended, never more than `total_classes`.
    pub attended_classes: u32,
    /// `attended_classes / total_classes * 100`.
    pub percentage: f64,
    /// Tier derived from `percentage`.
    pub status: AttendanceStatus,
}

/// Category of an achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementCategory {
    /// Academic recognition.
    Academic,
    /// Sporting achievement.
    Sports,
    /// Cultural participation.
    Cultural,
    /// Technical competition or project.
    Technical,
}

/// A recorded achievement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    /// Identifier of the form `ach_{n}`.
    pub id: String,
    /// Short title.
    pub title: String,
    /// Longer description.
    pub description: String,
    /// Date awarded.
    pub date: RecordDate,
    /// Category.
    pub category: AchievementCategory,
}

/// Loan state of a library book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanStatus {
    /// Currently on loan.
    Issued,
    /// Returned to the library.
    Returned,
    /// Past its due date.
    Overdue,
}

/// A library loan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryBook {
    /// Identifier of the form `book_{n}`.
    pub id: String,
    /// Book title.
    pub title: String,
    /// Author.
    pub author: String,
    /// ISBN-13 with a hyphenated prefix.
    pub isbn: String,
    /// Date the book was issued.
    pub issue_date: RecordDate,
    /// Date the book is due back.
    pub due_date: RecordDate,
    /// Loan state.
    pub status: LoanStatus,
    /// Outstanding fine in rupees, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fine: Option<u32>,
}

/// Delivery format of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseKind {
    /// Lecture course.
    Theory,
    /// Laboratory course.
    Lab,
    /// Project work.
    Project,
}

/// A course on the current timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Course code.
    pub code: String,
    /// Course name.
    pub name: String,
    /// Credit weight.
    pub credits: u8,
    /// Instructor name.
    pub instructor: String,
    /// Weekly schedule.
    pub schedule: String,
    /// Room.
    pub room: String,
    /// Delivery format.
    #[serde(rename = "type")]
    pub kind: CourseKind,
}

/// Every record the dashboard shows for one registration number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecords {
    /// Profile.
    pub student: Student,
    /// Internal marks per subject.
    pub internal_marks: Vec<InternalMark>,
    /// Attendance per subject.
    pub attendance: Vec<AttendanceRecord>,
    /// Achievements.
    pub achievements: Vec<Achievement>,
    /// Library loans.
    pub library_books: Vec<LibraryBook>,
    /// Course timetable.
    pub courses: Vec<Course>,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0.0, AttendanceStatus::Poor)]
    #[case(73.3, AttendanceStatus::Poor)]
    #[case(75.0, AttendanceStatus::Average)]
    #[case(84.99, AttendanceStatus::Average)]
    #[case(85.0, AttendanceStatus::Good)]
    #[case(100.0, AttendanceStatus::Good)]
    fn classifies_attendance(#[case] percentage: f64, #[case] expected: AttendanceStatus) {
        assert_eq!(AttendanceStatus::from_percentage(percentage), expected);
    }

    #[test]
    fn enums_serialize_as_variant_names() {
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Average).expect("serialize"),
            "\"Average\""
        );
        assert_eq!(
            serde_json::to_string(&AchievementCategory::Technical).expect("serialize"),
            "\"Technical\""
        );
        assert_eq!(
            serde_json::to_string(&LoanStatus::Overdue).expect("serialize"),
            "\"Overdue\""
        );
    }

    #[test]
    fn course_kind_serializes_under_type_key() {
        let course = Course {
            code: "CS304L".to_owned(),
            name: "OS Lab".to_owned(),
            credits: 2,
            instructor: "Prof. Brown".to_owned(),
            schedule: "Fri 2:00-5:00".to_owned(),
            room: "CS-Lab1".to_owned(),
            kind: CourseKind::Lab,
        };
        let json = serde_json::to_string(&course).expect("serialize");
        assert!(json.contains("\"type\":\"Lab\""));
    }

    #[test]
    fn absent_fine_is_omitted() {
        let book = LibraryBook {
            id: "book_2".to_owned(),
            title: "Clean Code".to_owned(),
            author: "Robert C. Martin".to_owned(),
            isbn: "978-0132350884".to_owned(),
            issue_date: RecordDate::new(2024, 3, 3),
            due_date: RecordDate::new(2024, 4, 17),
            status: LoanStatus::Returned,
            fine: None,
        };
        let json = serde_json::to_string(&book).expect("serialize");
        assert!(!json.contains("fine"));
        assert!(json.contains("issueDate"));
    }
}
