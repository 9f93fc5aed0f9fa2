use super::*;

fn pdf(size: u64) -> FileMeta {
    FileMeta {
        name: "contract.pdf".to_owned(),
        mime: PDF_MIME.to_owned(),
        size,
    }
}

#[test]
fn accepts_pdf_under_limit() {
    assert!(validate_upload(&pdf(1024)).is_ok());
    assert!(validate_upload(&pdf(MAX_PDF_BYTES)).is_ok());
}

#[test]
fn rejects_non_pdf_mime() {
    let meta = FileMeta {
        name: "notes.txt".to_owned(),
        mime: "text/plain".to_owned(),
        size: 10,
    };
    assert_eq!(validate_upload(&meta), Err("Only PDF files are allowed".to_owned()));
}

#[test]
fn rejects_oversized_pdf() {
    assert_eq!(
        validate_upload(&pdf(MAX_PDF_BYTES + 1)),
        Err("File size must be less than 20MB".to_owned())
    );
}
