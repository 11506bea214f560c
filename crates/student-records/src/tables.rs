//! Fixed lookup tables and record catalogues.
//!
//! The tables are `static` and never mutated. Generators index into them
//! with the student seed reduced modulo the table length, so every seed
//! (including zero) maps to an entry.

use crate::records::{AchievementCategory, CourseKind, Gender};

/// A non-empty, read-only table indexed by seed.
#[derive(Debug)]
pub(crate) struct LookupTable<T: 'static> {
    entries: &'static [T],
}

impl<T: 'static> LookupTable<T> {
    /// Wraps a static slice.
    ///
    /// # Panics
    ///
    /// Panics at compile time when `entries` is empty.
    pub(crate) const fn new(entries: &'static [T]) -> Self {
        assert!(!entries.is_empty(), "lookup tables must not be empty");
        Self { entries }
    }

    /// Returns the entry at `seed % len`.
    #[expect(
        clippy::indexing_slicing,
        reason = "index is reduced modulo the table length, which is never zero"
    )]
    pub(crate) fn pick(&self, seed: u64) -> &T {
        let len = u64::try_from(self.entries.len()).unwrap_or(u64::MAX);
        let index = usize::try_from(seed.rem_euclid(len)).unwrap_or_default();
        &self.entries[index]
    }

    /// Returns the underlying entries in order.
    pub(crate) const fn entries(&self) -> &'static [T] {
        self.entries
    }
}

pub(crate) static NAMES: LookupTable<&str> = LookupTable::new(&[
    "Arjun Kumar",
    "Priya Sharma",
    "Rahul Patel",
    "Sneha Reddy",
    "Vikram Singh",
    "Ananya Gupta",
    "Karthik Raj",
    "Divya Nair",
    "Arun Krishnan",
    "Meera Iyer",
]);

pub(crate) static DEPARTMENTS: LookupTable<&str> = LookupTable::new(&[
    "Computer Science",
    "Electronics",
    "Mechanical",
    "Civil",
    "Electrical",
]);

pub(crate) static DEGREE_COURSES: LookupTable<&str> = LookupTable::new(&[
    "B.E Computer Science",
    "B.E Electronics",
    "B.E Mechanical",
    "B.E Civil",
    "B.E Electrical",
]);

pub(crate) static COMMUNITIES: LookupTable<&str> =
    LookupTable::new(&["OC", "BC", "MBC", "SC", "ST"]);

pub(crate) static RELIGIONS: LookupTable<&str> =
    LookupTable::new(&["Hindu", "Christian", "Muslim", "Sikh", "Buddhist"]);

pub(crate) static DISTRICTS: LookupTable<&str> = LookupTable::new(&[
    "Chennai",
    "Coimbatore",
    "Madurai",
    "Salem",
    "Trichy",
    "Vellore",
    "Tirunelveli",
]);

pub(crate) static GENDERS: LookupTable<Gender> =
    LookupTable::new(&[Gender::Male, Gender::Female]);

pub(crate) static SECTIONS: LookupTable<char> = LookupTable::new(&['A', 'B', 'C']);

pub(crate) static BLOOD_GROUPS: LookupTable<&str> =
    LookupTable::new(&["A+", "B+", "O+", "AB+", "A-", "B-", "O-", "AB-"]);

pub(crate) static FATHER_OCCUPATIONS: LookupTable<&str> = LookupTable::new(&[
    "Engineer",
    "Doctor",
    "Teacher",
    "Business",
    "Government Employee",
]);

pub(crate) static MOTHER_OCCUPATIONS: LookupTable<&str> = LookupTable::new(&[
    "Homemaker",
    "Teacher",
    "Nurse",
    "Business",
    "Government Employee",
]);

/// A subject taught this semester.
#[derive(Debug)]
pub(crate) struct Subject {
    pub(crate) name: &'static str,
    pub(crate) code: &'static str,
}

pub(crate) static SUBJECTS: LookupTable<Subject> = LookupTable::new(&[
    Subject {
        name: "Data Structures",
        code: "CS301",
    },
    Subject {
        name: "Database Management",
        code: "CS302",
    },
    Subject {
        name: "Computer Networks",
        code: "CS303",
    },
    Subject {
        name: "Operating Systems",
        code: "CS304",
    },
    Subject {
        name: "Software Engineering",
        code: "CS305",
    },
]);

#[derive(Debug)]
pub(crate) struct AchievementEntry {
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
    pub(crate) category: AchievementCategory,
}

pub(crate) static ACHIEVEMENTS: LookupTable<AchievementEntry> = LookupTable::new(&[
    AchievementEntry {
        title: "Best Student Award",
        description: "Awarded for academic excellence",
        category: AchievementCategory::Academic,
    },
    AchievementEntry {
        title: "Coding Competition Winner",
        description: "First place in inter-college coding contest",
        category: AchievementCategory::Technical,
    },
    AchievementEntry {
        title: "Sports Championship",
        description: "Winner in college sports meet",
        category: AchievementCategory::Sports,
    },
    AchievementEntry {
        title: "Cultural Fest Participant",
        description: "Active participation in cultural events",
        category: AchievementCategory::Cultural,
    },
]);

#[derive(Debug)]
pub(crate) struct BookEntry {
    pub(crate) title: &'static str,
    pub(crate) author: &'static str,
    pub(crate) isbn: &'static str,
}

pub(crate) static BOOKS: LookupTable<BookEntry> = LookupTable::new(&[
    BookEntry {
        title: "Introduction to Algorithms",
        author: "Thomas H. Cormen",
        isbn: "978-0262033848",
    },
    BookEntry {
        title: "Clean Code",
        author: "Robert C. Martin",
        isbn: "978-0132350884",
    },
    BookEntry {
        title: "Design Patterns",
        author: "Gang of Four",
        isbn: "978-0201633612",
    },
]);

#[derive(Debug)]
pub(crate) struct CourseEntry {
    pub(crate) code: &'static str,
    pub(crate) name: &'static str,
    pub(crate) credits: u8,
    pub(crate) instructor: &'static str,
    pub(crate) schedule: &'static str,
    pub(crate) room: &'static str,
    pub(crate) kind: CourseKind,
}

pub(crate) static COURSES: LookupTable<CourseEntry> = LookupTable::new(&[
    CourseEntry {
        code: "CS301",
        name: "Data Structures",
        credits: 4,
        instructor: "Dr. Smith",
        schedule: "Mon, Wed, Fri 9:00-10:00",
        room: "CS-101",
        kind: CourseKind::Theory,
    },
    CourseEntry {
        code: "CS302",
        name: "Database Management",
        credits: 3,
        instructor: "Prof. Johnson",
        schedule: "Tue, Thu 10:00-11:30",
        room: "CS-102",
        kind: CourseKind::Theory,
    },
    CourseEntry {
        code: "CS303",
        name: "Computer Networks",
        credits: 3,
        instructor: "Dr. Williams",
        schedule: "Mon, Wed 2:00-3:30",
        room: "CS-103",
        kind: CourseKind::Theory,
    },
    CourseEntry {
        code: "CS304L",
        name: "OS Lab",
        credits: 2,
        instructor: "Prof. Brown",
        schedule: "Fri 2:00-5:00",
        room: "CS-Lab1",
        kind: CourseKind::Lab,
    },
    CourseEntry {
        code: "CS305",
        name: "Software Engineering",
        credits: 3,
        instructor: "Dr. Davis",
        schedule: "Tue, Thu 2:00-3:30",
        room: "CS-104",
        kind: CourseKind::Theory,
    },
]);

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, "Arjun Kumar")]
    #[case(5, "Ananya Gupta")]
    #[case(10, "Arjun Kumar")]
    #[case(99, "Meera Iyer")]
    fn pick_wraps_around_table_length(#[case] seed: u64, #[case] expected: &str) {
        assert_eq!(*NAMES.pick(seed), expected);
    }

    #[test]
    fn pick_handles_largest_seed() {
        assert_eq!(*GENDERS.pick(u64::MAX), Gender::Female);
    }

    #[test]
    fn catalogues_have_expected_sizes() {
        assert_eq!(SUBJECTS.entries().len(), 5);
        assert_eq!(ACHIEVEMENTS.entries().len(), 4);
        assert_eq!(BOOKS.entries().len(), 3);
        assert_eq!(COURSES.entries().len(), 5);
    }
}
