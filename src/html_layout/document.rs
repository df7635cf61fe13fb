//! Cover page layout
//!
//! Turns a [`FormRecord`] into the HTML of the A4 page and its stylesheet.

use serde::Serialize;

use super::templates::{render_template, PageTemplate};
use crate::error::Result;
use crate::models::{FieldName, FormRecord, PageSize};

/// Fields listed in the student info table, in print order
const INFO_FIELDS: [FieldName; 4] = [
    FieldName::Name,
    FieldName::RegNo,
    FieldName::CourseTitle,
    FieldName::CourseInstructor,
];

/// A `label : value` row on the page
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct InfoRow {
    pub label: &'static str,
    pub value: String,
}

/// Everything the page template needs
#[derive(Serialize, Clone, Debug)]
pub struct CoverPageContext {
    pub has_logo: bool,
    pub logo_url: String,
    pub university_name: String,
    pub address: String,
    pub department: String,
    pub info_rows: Vec<InfoRow>,
    pub assignment_label: &'static str,
    pub assignment_title: String,
    pub date_label: &'static str,
    pub submission_date: String,
}

impl CoverPageContext {
    pub fn from_record(record: &FormRecord) -> Self {
        let info_rows = INFO_FIELDS
            .iter()
            .map(|field| InfoRow {
                label: field.label(),
                value: record.get(*field).to_string(),
            })
            .collect();

        Self {
            has_logo: record.has_logo(),
            logo_url: record.logo_url.clone(),
            university_name: record.university_name.clone(),
            address: record.address.clone(),
            department: record.department.clone(),
            info_rows,
            assignment_label: FieldName::AssignmentTitle.label(),
            assignment_title: record.assignment_title.clone(),
            date_label: FieldName::SubmissionDate.label(),
            submission_date: record.submission_date.clone(),
        }
    }
}

#[derive(Serialize)]
struct StylesheetContext {
    width_mm: String,
    height_mm: String,
    padding_mm: String,
}

/// Renders cover page markup for a fixed page size
pub struct CoverPageRenderer {
    page: PageSize,
}

impl CoverPageRenderer {
    pub fn new(page: PageSize) -> Self {
        Self { page }
    }

    pub fn page(&self) -> &PageSize {
        &self.page
    }

    /// HTML for the page itself
    pub fn render(&self, record: &FormRecord) -> Result<String> {
        render_template(PageTemplate::Markup, &CoverPageContext::from_record(record))
    }

    /// Screen and print styles for the page
    pub fn stylesheet(&self) -> Result<String> {
        let context = StylesheetContext {
            width_mm: self.page.width_mm.to_string(),
            height_mm: self.page.height_mm.to_string(),
            padding_mm: self.page.padding_mm.to_string(),
        };
        render_template(PageTemplate::Stylesheet, &context)
    }
}

impl Default for CoverPageRenderer {
    fn default() -> Self {
        Self::new(PageSize::A4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record() -> FormRecord {
        FormRecord::with_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    #[test]
    fn test_info_rows_in_order() {
        let mut record = record();
        record.set(FieldName::RegNo, "2020331000");
        let context = CoverPageContext::from_record(&record);

        let labels: Vec<_> = context.info_rows.iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["Name", "Registration No.", "Course Title", "Course Instructor"]);
        assert_eq!(context.info_rows[1].value, "2020331000");
    }

    #[test]
    fn test_stylesheet_dimensions() {
        let css = CoverPageRenderer::default().stylesheet().unwrap();
        assert!(css.contains("width: 210mm;"));
        assert!(css.contains("height: 297mm;"));
        assert!(css.contains("padding: 20mm;"));
    }
}
