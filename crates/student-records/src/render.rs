//! JSON rendering of record sections.
//!
//! The CLI prints one section of the dashboard at a time. Sections map onto
//! the pages of the student portal.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{RenderError, SectionParseError};
use crate::records::StudentRecords;
use crate::summary::{AchievementStats, AttendanceSummary};

/// Year used when counting "this year" achievements in the summary section.
const SUMMARY_YEAR: u16 = 2024;

/// A renderable part of the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RecordSection {
    /// Every record in one document.
    #[default]
    All,
    /// Student profile.
    Profile,
    /// Internal marks.
    Marks,
    /// Attendance records.
    Attendance,
    /// Achievements.
    Achievements,
    /// Library loans.
    Library,
    /// Course timetable.
    Courses,
    /// Attendance summary and achievement statistics.
    Summary,
}

impl RecordSection {
    /// All sections in display order.
    pub const ALL: [Self; 8] = [
        Self::All,
        Self::Profile,
        Self::Marks,
        Self::Attendance,
        Self::Achievements,
        Self::Library,
        Self::Courses,
        Self::Summary,
    ];

    /// Returns the lowercase name accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Profile => "profile",
            Self::Marks => "marks",
            Self::Attendance => "attendance",
            Self::Achievements => "achievements",
            Self::Library => "library",
            Self::Courses => "courses",
            Self::Summary => "summary",
        }
    }
}

impl fmt::Display for RecordSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordSection {
    type Err = SectionParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim();
        Self::ALL
            .into_iter()
            .find(|section| section.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SectionParseError {
                name: value.to_owned(),
                expected: Self::ALL
                    .iter()
                    .map(|section| section.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryView {
    attendance: AttendanceSummary,
    achievements: AchievementStats,
}

/// Renders one section of `records` as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`RenderError::Serialization`] if serialisation fails.
///
/// # Example
///
/// ```
/// use student_records::{RecordSection, render_section, student_records};
///
/// let records = student_records("312220104005");
/// let json = render_section(&records, RecordSection::Profile).expect("render");
///
/// assert!(json.contains("\"registrationNumber\": \"312220104005\""));
/// ```
pub fn render_section(
    records: &StudentRecords,
    section: RecordSection,
) -> Result<String, RenderError> {
    let rendered = match section {
        RecordSection::All => serde_json::to_string_pretty(records),
        RecordSection::Profile => serde_json::to_string_pretty(&records.student),
        RecordSection::Marks => serde_json::to_string_pretty(&records.internal_marks),
        RecordSection::Attendance => serde_json::to_string_pretty(&records.attendance),
        RecordSection::Achievements => serde_json::to_string_pretty(&records.achievements),
        RecordSection::Library => serde_json::to_string_pretty(&records.library_books),
        RecordSection::Courses => serde_json::to_string_pretty(&records.courses),
        RecordSection::Summary => serde_json::to_string_pretty(&SummaryView {
            attendance: AttendanceSummary::from_records(&records.attendance),
            achievements: AchievementStats::from_achievements(&records.achievements, SUMMARY_YEAR),
        }),
    };
    rendered.map_err(|err| RenderError::Serialization {
        section: section.as_str(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::generator::student_records;

    #[fixture]
    fn records() -> StudentRecords {
        student_records("312220104005")
    }

    #[rstest]
    #[case("all", RecordSection::All)]
    #[case("Profile", RecordSection::Profile)]
    #[case(" MARKS ", RecordSection::Marks)]
    #[case("library", RecordSection::Library)]
    #[case("summary", RecordSection::Summary)]
    fn parses_section_names(#[case] name: &str, #[case] expected: RecordSection) {
        assert_eq!(name.parse::<RecordSection>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_section() {
        let err = "grades".parse::<RecordSection>().expect_err("unknown section");
        assert_eq!(err.name, "grades");
        assert!(err.expected.starts_with("all, profile, marks"));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for section in RecordSection::ALL {
            assert_eq!(section.to_string().parse::<RecordSection>(), Ok(section));
        }
    }

    #[rstest]
    fn renders_every_section(records: StudentRecords) {
        for section in RecordSection::ALL {
            let json = render_section(&records, section).expect("render");
            let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
            assert!(!value.is_null(), "section {section} rendered null");
        }
    }

    #[rstest]
    fn courses_section_is_an_array_of_five(records: StudentRecords) {
        let json = render_section(&records, RecordSection::Courses).expect("render");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value.as_array().map(Vec::len), Some(5));
    }

    #[rstest]
    fn summary_section_reports_attendance_and_achievements(records: StudentRecords) {
        let json = render_section(&records, RecordSection::Summary).expect("render");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert!(value.get("attendance").and_then(|a| a.get("overallPercentage")).is_some());
        assert_eq!(
            value
                .get("achievements")
                .and_then(|a| a.get("total"))
                .and_then(serde_json::Value::as_u64),
            Some(3)
        );
    }
}
