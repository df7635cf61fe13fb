//! Cover page field registry
//!
//! Single source of truth for the fields on the cover page: their JS keys,
//! labels, placeholders and the kind of input the host page should render.

use serde::{Deserialize, Serialize};

/// One of the fields of the cover page record
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    UniversityName,
    Address,
    Department,
    Name,
    RegNo,
    CourseTitle,
    CourseInstructor,
    AssignmentTitle,
    SubmissionDate,
    LogoUrl,
}

impl FieldName {
    /// All fields in form order
    pub const ALL: [FieldName; 10] = [
        FieldName::LogoUrl,
        FieldName::UniversityName,
        FieldName::Address,
        FieldName::Department,
        FieldName::Name,
        FieldName::RegNo,
        FieldName::CourseTitle,
        FieldName::CourseInstructor,
        FieldName::AssignmentTitle,
        FieldName::SubmissionDate,
    ];

    /// Key used by the JavaScript side (input `name` attribute)
    pub fn key(&self) -> &'static str {
        match self {
            FieldName::UniversityName => "universityName",
            FieldName::Address => "address",
            FieldName::Department => "department",
            FieldName::Name => "name",
            FieldName::RegNo => "regNo",
            FieldName::CourseTitle => "courseTitle",
            FieldName::CourseInstructor => "courseInstructor",
            FieldName::AssignmentTitle => "assignmentTitle",
            FieldName::SubmissionDate => "submissionDate",
            FieldName::LogoUrl => "logoUrl",
        }
    }

    /// Parse a JS key back into a field
    pub fn from_key(key: &str) -> Option<FieldName> {
        FieldName::ALL.iter().copied().find(|f| f.key() == key)
    }

    /// Label shown next to the input and on the printed page
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::UniversityName => "University Name",
            FieldName::Address => "Address",
            FieldName::Department => "Department",
            FieldName::Name => "Name",
            FieldName::RegNo => "Registration No.",
            FieldName::CourseTitle => "Course Title",
            FieldName::CourseInstructor => "Course Instructor",
            FieldName::AssignmentTitle => "Assignment Title",
            FieldName::SubmissionDate => "Date of Submission",
            FieldName::LogoUrl => "University Logo",
        }
    }

    pub fn spec(&self) -> FieldSpec {
        let (kind, section, placeholder) = match self {
            FieldName::LogoUrl => (InputKind::Image, FormSection::Logo, None),
            FieldName::UniversityName | FieldName::Address | FieldName::Department => {
                (InputKind::Text, FormSection::Header, None)
            }
            FieldName::Name => (InputKind::Text, FormSection::Student, Some("e.g. Md. Rahim Uddin")),
            FieldName::RegNo => (InputKind::Text, FormSection::Student, Some("e.g. 2020331000")),
            FieldName::CourseTitle => (InputKind::Text, FormSection::Student, Some("e.g. Linear Algebra")),
            FieldName::CourseInstructor => {
                (InputKind::Text, FormSection::Student, Some("e.g. Dr. Anisur Rahman"))
            }
            FieldName::AssignmentTitle => (
                InputKind::TextArea,
                FormSection::Assignment,
                Some("e.g. Solution of linear equations using Matrix method"),
            ),
            FieldName::SubmissionDate => (InputKind::Date, FormSection::Assignment, None),
        };

        FieldSpec {
            key: self.key(),
            label: self.label(),
            placeholder,
            kind,
            section,
            section_title: section.title(),
        }
    }
}

/// Kind of input widget for a field
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    TextArea,
    Date,
    /// File picker accepting `image/*`
    Image,
}

/// Group a field is shown under in the form panel
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FormSection {
    Logo,
    Header,
    Student,
    Assignment,
}

impl FormSection {
    pub fn title(&self) -> &'static str {
        match self {
            FormSection::Logo => "University Logo",
            FormSection::Header => "Header Information",
            FormSection::Student => "Student Details",
            FormSection::Assignment => "Assignment Details",
        }
    }
}

/// Description of a form input, handed to the host page
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    pub kind: InputKind,
    pub section: FormSection,
    pub section_title: &'static str,
}

/// Specs for every field, in form order
pub fn field_specs() -> Vec<FieldSpec> {
    FieldName::ALL.iter().map(FieldName::spec).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip_for_every_field() {
        for field in FieldName::ALL {
            assert_eq!(FieldName::from_key(field.key()), Some(field));
        }
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(FieldName::from_key("favouriteColour"), None);
        assert_eq!(FieldName::from_key("UniversityName"), None);
    }

    #[test]
    fn test_serde_uses_js_keys() {
        let json = serde_json::to_string(&FieldName::CourseInstructor).unwrap();
        assert_eq!(json, "\"courseInstructor\"");
    }

    #[test]
    fn test_field_specs_sections() {
        let specs = field_specs();
        assert_eq!(specs.len(), 10);
        assert_eq!(specs[0].kind, InputKind::Image);

        let assignment = specs.iter().find(|s| s.key == "assignmentTitle").unwrap();
        assert_eq!(assignment.kind, InputKind::TextArea);
        assert_eq!(assignment.section, FormSection::Assignment);
        assert_eq!(assignment.section_title, "Assignment Details");

        let date = specs.iter().find(|s| s.key == "submissionDate").unwrap();
        assert_eq!(date.kind, InputKind::Date);
        assert!(date.placeholder.is_none());
    }
}
