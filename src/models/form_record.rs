//! The cover page form record
//!
//! A flat record of free-form strings. Nothing is validated: whatever the
//! user types is what gets printed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::fields::FieldName;
use crate::logo;

pub const DEFAULT_UNIVERSITY_NAME: &str = "Shahjalal University of Science and Technology (SUST)";
pub const DEFAULT_ADDRESS: &str = "Sylhet – 3114, Bangladesh";
pub const DEFAULT_DEPARTMENT: &str = "DEPARTMENT OF MATHEMATICS";
pub const DEFAULT_LOGO_URL: &str = "https://upload.wikimedia.org/wikipedia/en/c/c6/SUST_Logo.svg";

/// Today's date in UTC, as a date input's `toISOString()` default would give
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

/// Current values of every cover page field
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormRecord {
    pub university_name: String,
    pub address: String,
    pub department: String,
    pub name: String,
    pub reg_no: String,
    pub course_title: String,
    pub course_instructor: String,
    pub assignment_title: String,
    /// ISO `YYYY-MM-DD`, as produced by a date input
    pub submission_date: String,
    /// Remote URL or `data:` URI
    pub logo_url: String,
}

impl FormRecord {
    /// Default record with the given submission date
    pub fn with_date(date: NaiveDate) -> Self {
        Self {
            university_name: DEFAULT_UNIVERSITY_NAME.to_string(),
            address: DEFAULT_ADDRESS.to_string(),
            department: DEFAULT_DEPARTMENT.to_string(),
            name: String::new(),
            reg_no: String::new(),
            course_title: String::new(),
            course_instructor: String::new(),
            assignment_title: String::new(),
            submission_date: date.format("%Y-%m-%d").to_string(),
            logo_url: DEFAULT_LOGO_URL.to_string(),
        }
    }

    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::UniversityName => &self.university_name,
            FieldName::Address => &self.address,
            FieldName::Department => &self.department,
            FieldName::Name => &self.name,
            FieldName::RegNo => &self.reg_no,
            FieldName::CourseTitle => &self.course_title,
            FieldName::CourseInstructor => &self.course_instructor,
            FieldName::AssignmentTitle => &self.assignment_title,
            FieldName::SubmissionDate => &self.submission_date,
            FieldName::LogoUrl => &self.logo_url,
        }
    }

    fn slot_mut(&mut self, field: FieldName) -> &mut String {
        match field {
            FieldName::UniversityName => &mut self.university_name,
            FieldName::Address => &mut self.address,
            FieldName::Department => &mut self.department,
            FieldName::Name => &mut self.name,
            FieldName::RegNo => &mut self.reg_no,
            FieldName::CourseTitle => &mut self.course_title,
            FieldName::CourseInstructor => &mut self.course_instructor,
            FieldName::AssignmentTitle => &mut self.assignment_title,
            FieldName::SubmissionDate => &mut self.submission_date,
            FieldName::LogoUrl => &mut self.logo_url,
        }
    }

    /// Set a single field. Returns true if the value changed.
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) -> bool {
        let value = value.into();
        let slot = self.slot_mut(field);
        if *slot == value {
            return false;
        }
        *slot = value;
        true
    }

    /// Replace the logo with an uploaded image.
    ///
    /// An empty payload (cancelled file dialog) leaves the record untouched.
    pub fn set_logo(&mut self, bytes: &[u8], mime: Option<&str>) -> bool {
        match logo::encode_data_uri(bytes, mime) {
            Some(uri) => self.set(FieldName::LogoUrl, uri),
            None => false,
        }
    }

    /// Restore every field to its default
    pub fn reset(&mut self, date: NaiveDate) {
        *self = Self::with_date(date);
    }

    /// Whether a logo should be drawn at all
    pub fn has_logo(&self) -> bool {
        !self.logo_url.is_empty()
    }
}

impl Default for FormRecord {
    fn default() -> Self {
        Self::with_date(today())
    }
}
