//! CLI settings loaded via OrthoConfig.
//!
//! Values layer from command-line flags, `STUDENT_RECORDS_*` environment
//! variables, and configuration files.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::error::SectionParseError;
use crate::render::RecordSection;

/// Registration number used when none is configured.
pub const DEFAULT_REGISTRATION_NUMBER: &str = "312220104005";

/// Configuration for the `student-records` command.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "STUDENT_RECORDS")]
pub struct PortalSettings {
    /// Registration number to generate records for.
    pub registration_number: Option<String>,
    /// Record section to print (`all`, `profile`, `marks`, ...).
    pub section: Option<String>,
    /// Draw internal mark bonuses from an unseeded RNG.
    #[ortho_config(default = false)]
    pub random_marks: bool,
}

impl PortalSettings {
    /// Return the configured registration number, falling back to the default.
    #[must_use]
    pub fn registration_number(&self) -> &str {
        self.registration_number
            .as_deref()
            .unwrap_or(DEFAULT_REGISTRATION_NUMBER)
    }

    /// Return the configured section, defaulting to [`RecordSection::All`].
    ///
    /// # Errors
    ///
    /// Returns [`SectionParseError`] when the configured name is unknown.
    pub fn section(&self) -> Result<RecordSection, SectionParseError> {
        self.section
            .as_deref()
            .map_or(Ok(RecordSection::default()), str::parse)
    }
}
