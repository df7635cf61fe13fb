// Form editing and cover page rendering

use chrono::NaiveDate;
use cover_page_wasm::html_layout::CoverPageRenderer;
use cover_page_wasm::models::form_record::DEFAULT_LOGO_URL;
use cover_page_wasm::models::{FieldName, FormRecord};

fn record() -> FormRecord {
    FormRecord::with_date(NaiveDate::from_ymd_opt(2024, 11, 5).unwrap())
}

#[test]
fn test_default_page_contents() {
    let html = CoverPageRenderer::default().render(&record()).unwrap();

    assert!(html.contains("Shahjalal University of Science and Technology (SUST)"));
    assert!(html.contains("Sylhet – 3114, Bangladesh"));
    assert!(html.contains("DEPARTMENT OF MATHEMATICS"));
    assert!(html.contains(&format!("<img src=\"{}\"", DEFAULT_LOGO_URL)));
    assert!(html.contains("Date of Submission"));
    assert!(html.contains("2024-11-05"));
}

#[test]
fn test_info_rows_rendered_in_order() {
    let mut record = record();
    record.set(FieldName::Name, "Md. Rahim Uddin");
    record.set(FieldName::RegNo, "2020331000");
    record.set(FieldName::CourseTitle, "Linear Algebra");
    record.set(FieldName::CourseInstructor, "Dr. Anisur Rahman");

    let html = CoverPageRenderer::default().render(&record).unwrap();
    let positions: Vec<usize> = ["Md. Rahim Uddin", "2020331000", "Linear Algebra", "Dr. Anisur Rahman"]
        .iter()
        .map(|value| html.find(value).expect("value should be rendered"))
        .collect();

    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_user_input_is_escaped() {
    let mut record = record();
    record.set(FieldName::Name, "<script>alert(1)</script>");
    record.set(FieldName::CourseTitle, "Rings & Fields");

    let html = CoverPageRenderer::default().render(&record).unwrap();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("Rings &amp; Fields"));
}

#[test]
fn test_multiline_assignment_title_preserved() {
    let mut record = record();
    record.set(FieldName::AssignmentTitle, "Solution of linear equations\nusing Matrix method");

    let html = CoverPageRenderer::default().render(&record).unwrap();
    assert!(html.contains("Solution of linear equations\nusing Matrix method"));
    assert!(html.contains("assignment-title"));
}

#[test]
fn test_empty_logo_renders_no_image() {
    let mut record = record();
    record.set(FieldName::LogoUrl, "");

    let html = CoverPageRenderer::default().render(&record).unwrap();
    assert!(!html.contains("<img"));
}

#[test]
fn test_uploaded_logo_embedded() {
    let mut record = record();
    assert!(record.set_logo(b"\x89PNG\r\n\x1a\n", Some("image/png")));

    let html = CoverPageRenderer::default().render(&record).unwrap();
    assert!(html.contains("src=\"data:image/png;base64,iVBORw0KGgo=\""));
}

#[test]
fn test_print_stylesheet() {
    let css = CoverPageRenderer::default().stylesheet().unwrap();
    assert!(css.contains("@media print"));
    assert!(css.contains("size: A4;"));
    assert!(css.contains("margin: 0;"));
    assert!(css.contains("transform: none !important;"));
    assert!(css.contains("'Times New Roman', Times, serif"));
}

#[test]
fn test_reset_after_edits() {
    let date = NaiveDate::from_ymd_opt(2024, 11, 5).unwrap();
    let mut record = record();
    for field in FieldName::ALL {
        record.set(field, format!("edited {}", field.key()));
    }

    record.reset(date);
    assert_eq!(record, FormRecord::with_date(date));
    for field in FieldName::ALL {
        assert_eq!(record.get(field), FormRecord::with_date(date).get(field));
    }
}
