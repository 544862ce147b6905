use docreview::{
    config::Config,
    constants::{CITY_CODE_FIELD, PDF_MIME, RATE_CODE_FIELD, VALUE_FIELD},
    records::FixtureSource,
    submission::MemorySink,
    IntakeError, ProcessingStatus, ReviewWorkflow, SubmitOutcome, UploadedFile, WorkflowVariant,
};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep, Instant};

async fn workflow(variant: WorkflowVariant) -> (ReviewWorkflow, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let workflow =
        ReviewWorkflow::from_config(variant, &Config::default(), &FixtureSource::new(), sink.clone())
            .await
            .unwrap();
    (workflow, sink)
}

fn upload_from_disk(suffix: &str, content: &[u8]) -> UploadedFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content).unwrap();
    file.flush().unwrap();
    UploadedFile::from_path(file.path()).unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_contract_review_scenario() {
    let (mut review, sink) = workflow(WorkflowVariant::HotelContract).await;

    let start = Instant::now();
    let contract = UploadedFile::new("contract.pdf", PDF_MIME, b"%PDF-1.4 contract".to_vec());
    review.accept_file(contract).unwrap();
    assert_eq!(review.status(), ProcessingStatus::Uploaded);
    assert!(review.visible_records().is_empty());

    assert_eq!(review.wait_processed().await.unwrap(), ProcessingStatus::Processed);
    assert!(start.elapsed() >= Duration::from_millis(2000));
    assert_eq!(review.visible_records().len(), 8);

    // header click highlights every row
    assert!(review.toggle_all());
    assert_eq!(review.selected().len(), 8);

    // row click drops one
    assert!(!review.toggle("Hotel Name").unwrap());
    assert_eq!(review.selected().len(), 7);
    assert!(!review.all_selected());

    review.set_override("Hotel Name", None, "Grand Resort").unwrap();
    assert!(review.can_submit());
    assert_eq!(review.submit().await.unwrap(), SubmitOutcome::Delivered);

    let payloads = sink.payloads();
    assert_eq!(payloads.len(), 1);
    let payload = &payloads[0];
    assert_eq!(payload.variant, WorkflowVariant::HotelContract);
    assert_eq!(payload.document.as_deref(), Some("contract.pdf"));
    assert_eq!(payload.overrides["Hotel Name"][VALUE_FIELD], "Grand Resort");
    assert_eq!(payload.selection.len(), 7);
    assert!(!payload.selection.iter().any(|k| k == "Hotel Name"));
    assert_eq!(payload.selection[0], "Contract Date");

    // submitting does not reset anything
    assert_eq!(review.selected().len(), 7);
    assert_eq!(review.overlay().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_text_file_rejected_scenario() {
    let (mut review, sink) = workflow(WorkflowVariant::HotelContract).await;

    let readme = upload_from_disk(".txt", b"not a pdf");
    let err = review.accept_file(readme).unwrap_err();
    assert!(matches!(err, IntakeError::InvalidFileType { ref mime_type, .. } if mime_type == "text/plain"));

    sleep(Duration::from_millis(5000)).await;
    assert_eq!(review.status(), ProcessingStatus::Idle);
    assert!(review.visible_records().is_empty());
    assert!(review.document().is_none());
    assert_eq!(review.previews().live_count(), 0);
    assert!(sink.payloads().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_pdf_from_disk_is_accepted() {
    let (mut review, _) = workflow(WorkflowVariant::Invoice).await;

    let invoice = upload_from_disk(".pdf", b"%PDF-1.7 invoice");
    review.accept_file(invoice).unwrap();

    sleep(Duration::from_millis(1999)).await;
    assert!(!review.is_processed());
    sleep(Duration::from_millis(2)).await;
    assert!(review.is_processed());
}

#[tokio::test(start_paused = true)]
async fn test_replacing_document_releases_preview() {
    let (mut review, _) = workflow(WorkflowVariant::Invoice).await;

    review
        .accept_file(UploadedFile::new("first.pdf", PDF_MIME, b"%PDF first".to_vec()))
        .unwrap();
    review.wait_processed().await.unwrap();
    let first = review.preview().cloned().unwrap();

    review
        .accept_file(UploadedFile::new("second.pdf", PDF_MIME, b"%PDF second".to_vec()))
        .unwrap();
    assert!(!review.previews().is_live(&first));
    assert!(!review.is_processed());
    assert!(review.visible_records().is_empty());

    review.wait_processed().await.unwrap();
    assert_eq!(review.document().map(|f| f.name.as_str()), Some("second.pdf"));
    assert_eq!(review.previews().live_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_rate_loading_scenario() {
    let (mut review, sink) = workflow(WorkflowVariant::RateLoading).await;
    review
        .accept_file(UploadedFile::new("rli.pdf", PDF_MIME, b"%PDF rli".to_vec()))
        .unwrap();
    review.wait_processed().await.unwrap();

    // inputs show the extracted codes until edited
    assert_eq!(review.resolve("Worldspan", Some(CITY_CODE_FIELD)).unwrap(), "C0P");
    review.set_override("Amadeus", Some(CITY_CODE_FIELD), "NCE1A").unwrap();
    review.set_override("Amadeus", Some(RATE_CODE_FIELD), "8TL").unwrap();
    assert_eq!(review.resolve("Amadeus", Some(CITY_CODE_FIELD)).unwrap(), "NCE1A");

    assert!(!review.can_submit());
    assert_eq!(review.submit().await.unwrap(), SubmitOutcome::Skipped);

    review.toggle("Amadeus").unwrap();
    review.toggle("Sabre").unwrap();
    assert_eq!(review.submit().await.unwrap(), SubmitOutcome::Delivered);

    let payload = &sink.payloads()[0];
    assert_eq!(payload.selection, ["Sabre", "Amadeus"]);
    assert_eq!(payload.overrides["Amadeus"][CITY_CODE_FIELD], "NCE1A");
    assert_eq!(payload.overrides["Amadeus"][RATE_CODE_FIELD], "8TL");
}

#[tokio::test]
async fn test_toggle_properties_over_every_variant() {
    for variant in WorkflowVariant::ALL {
        let (mut review, _) = workflow(variant).await;
        let keys: Vec<String> = review.records().iter().map(|r| r.key.clone()).collect();

        // toggle_all twice from empty
        review.toggle_all();
        review.toggle_all();
        assert!(review.selected().is_empty());

        // toggle twice per key
        for key in &keys {
            review.toggle(key).unwrap();
            review.toggle(key).unwrap();
            assert!(review.selected().is_empty());
        }

        // selecting every key by hand sets the flag
        for key in &keys {
            review.toggle(key).unwrap();
        }
        assert!(review.all_selected());
        assert_eq!(review.selected().len(), keys.len());
    }
}
