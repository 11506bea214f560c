//! Dashboard aggregates over generated records.

use serde::{Deserialize, Serialize};

use crate::records::{Achievement, AchievementCategory, AttendanceRecord, AttendanceStatus};

/// Overall attendance and how many subjects fall in each tier.
///
/// # Example
///
/// ```
/// use student_records::{AttendanceSummary, attendance_records};
///
/// let records = attendance_records("312220104005");
/// let summary = AttendanceSummary::from_records(&records);
///
/// assert_eq!(summary.good + summary.average + summary.poor, records.len());
/// assert!(!summary.meets_requirement());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummary {
    /// Mean of the subject percentages, or `0.0` with no subjects.
    pub overall_percentage: f64,
    /// Subjects rated [`AttendanceStatus::Good`].
    pub good: usize,
    /// Subjects rated [`AttendanceStatus::Average`].
    pub average: usize,
    /// Subjects rated [`AttendanceStatus::Poor`].
    pub poor: usize,
}

impl AttendanceSummary {
    /// Summarises per-subject attendance.
    #[must_use]
    pub fn from_records(records: &[AttendanceRecord]) -> Self {
        let mut summary = Self {
            overall_percentage: mean(records.iter().map(|record| record.percentage)),
            good: 0,
            average: 0,
            poor: 0,
        };
        for record in records {
            match record.status {
                AttendanceStatus::Good => summary.good += 1,
                AttendanceStatus::Average => summary.average += 1,
                AttendanceStatus::Poor => summary.poor += 1,
            }
        }
        summary
    }

    /// Returns `true` when overall attendance reaches the 75% requirement.
    #[must_use]
    pub fn meets_requirement(&self) -> bool {
        self.overall_percentage >= AttendanceStatus::POOR_BELOW
    }
}

/// Achievement counts shown on the achievements page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementStats {
    /// All achievements.
    pub total: usize,
    /// Academic achievements.
    pub academic: usize,
    /// Sports achievements.
    pub sports: usize,
    /// Cultural achievements.
    pub cultural: usize,
    /// Technical achievements.
    pub technical: usize,
    /// Achievements dated in the reference year.
    pub this_year: usize,
}

impl AchievementStats {
    /// Counts achievements by category and by `year`.
    ///
    /// # Example
    ///
    /// ```
    /// use student_records::{AchievementStats, achievements};
    ///
    /// let list = achievements("312220104002");
    /// let stats = AchievementStats::from_achievements(&list, 2024);
    ///
    /// assert_eq!(stats.total, 3);
    /// assert_eq!(stats.this_year, 3);
    /// assert_eq!(stats.academic, 1);
    /// ```
    #[must_use]
    pub fn from_achievements(achievements: &[Achievement], year: u16) -> Self {
        achievements
            .iter()
            .fold(Self::default(), |mut stats, achievement| {
                stats.total += 1;
                match achievement.category {
                    AchievementCategory::Academic => stats.academic += 1,
                    AchievementCategory::Sports => stats.sports += 1,
                    AchievementCategory::Cultural => stats.cultural += 1,
                    AchievementCategory::Technical => stats.technical += 1,
                }
                if achievement.date.year() == year {
                    stats.this_year += 1;
                }
                stats
            })
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "averaging percentages is inherently floating point"
)]
fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0_usize), |(sum, count), value| {
        (sum + value, count + 1)
    });
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
