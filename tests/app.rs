mod common;

use std::fs;
use std::sync::Mutex;

use assert_matches::assert_matches;

use demo_sample_fetcher::app::{App, NopSink, ProgressEvent, ProgressSink, SampleAction};
use demo_sample_fetcher::domain::{Category, SampleRecord};
use demo_sample_fetcher::error::FetchError;

use common::{MockClient, test_config, utf8_root, write_manifest};

#[derive(Default)]
struct RecordingSink {
    events: Mutex<Vec<ProgressEvent>>,
}

impl ProgressSink for RecordingSink {
    fn event(&self, event: ProgressEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[test]
fn download_fetches_every_entry_in_manifest_order() {
    let temp = tempfile::tempdir().unwrap();
    let root = utf8_root(&temp);
    let config = test_config(&root);
    write_manifest(
        &config.documents.manifest,
        &[
            ("Tax Form", "https://example.com/docs/form.pdf?sv=1"),
            ("Bank Statement", "https://example.com/docs/statement.pdf"),
            ("Receipt-01", "https://example.com/docs/receipt.pdf"),
        ],
    );
    write_manifest(
        &config.videos.manifest,
        &[("Product Demo", "https://example.com/videos/demo.mp4")],
    );
    let docs_dir = config.documents.download_dir.clone();
    let videos_dir = config.videos.download_dir.clone();

    let client = MockClient::default();
    let app = App::new(config, &client);
    let result = app.download(&NopSink).unwrap();

    assert_eq!(
        result.documents,
        vec![
            SampleRecord::new("Tax Form", docs_dir.join("tax_form.pdf")),
            SampleRecord::new("Bank Statement", docs_dir.join("bank_statement.pdf")),
            SampleRecord::new("Receipt-01", docs_dir.join("receipt_01.pdf")),
        ]
    );
    assert_eq!(
        result.videos,
        vec![SampleRecord::new(
            "Product Demo",
            videos_dir.join("product_demo.mp4")
        )]
    );
    for record in result.documents.iter().chain(&result.videos) {
        assert!(fs::metadata(record.path.as_std_path()).unwrap().len() > 0);
    }
    assert_eq!(client.calls().len(), 4);
}

#[test]
fn second_run_performs_no_network_calls() {
    let temp = tempfile::tempdir().unwrap();
    let root = utf8_root(&temp);
    let config = test_config(&root);
    write_manifest(
        &config.documents.manifest,
        &[
            ("Report", "https://example.com/r.pdf"),
            ("Invoice", "https://example.com/i.pdf"),
        ],
    );
    write_manifest(&config.videos.manifest, &[]);

    let first_client = MockClient::default();
    let first = App::new(config.clone(), &first_client)
        .download(&NopSink)
        .unwrap();
    assert_eq!(first_client.calls().len(), 2);

    let second_client = MockClient::default();
    let sink = RecordingSink::default();
    let second = App::new(config, &second_client).download(&sink).unwrap();

    assert!(second_client.calls().is_empty());
    assert_eq!(first, second);
    assert!(
        sink.events
            .lock()
            .unwrap()
            .iter()
            .all(|event| event.action == SampleAction::Cached)
    );
}

#[test]
fn present_names_fall_back_to_directory_scan() {
    let temp = tempfile::tempdir().unwrap();
    let root = utf8_root(&temp);
    let config = test_config(&root);
    write_manifest(
        &config.documents.manifest,
        &[
            ("report.pdf", "https://example.com/report.pdf"),
            ("invoice.pdf", "https://example.com/invoice.pdf"),
        ],
    );
    write_manifest(&config.videos.manifest, &[]);
    let docs_dir = config.documents.download_dir.clone();
    fs::create_dir_all(docs_dir.as_std_path()).unwrap();
    fs::write(docs_dir.join("report.pdf").as_std_path(), b"r").unwrap();
    fs::write(docs_dir.join("invoice.pdf").as_std_path(), b"i").unwrap();
    fs::write(docs_dir.join("readme.txt").as_std_path(), b"t").unwrap();

    let client = MockClient::default();
    let sink = RecordingSink::default();
    let app = App::new(config, &client);
    assert!(app.are_doc_samples_downloaded().unwrap());

    let result = app.download(&sink).unwrap();

    let mut documents = result.documents.clone();
    documents.sort_by(|a, b| a.name.cmp(&b.name));
    assert_eq!(
        documents,
        vec![
            SampleRecord::new("invoice", docs_dir.join("invoice.pdf")),
            SampleRecord::new("report", docs_dir.join("report.pdf")),
        ]
    );
    assert!(result.videos.is_empty());
    assert!(client.calls().is_empty());

    let events = sink.events.lock().unwrap();
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|event| {
        event.category == Category::Documents && event.action == SampleAction::Scanned
    }));
}

#[test]
fn failure_aborts_remaining_entries() {
    let temp = tempfile::tempdir().unwrap();
    let root = utf8_root(&temp);
    let config = test_config(&root);
    write_manifest(
        &config.documents.manifest,
        &[
            ("First", "https://example.com/1.pdf"),
            ("Broken", "https://unreachable.example.com/2.pdf"),
            ("Third", "https://example.com/3.pdf"),
        ],
    );
    write_manifest(
        &config.videos.manifest,
        &[("Clip", "https://example.com/clip.mp4")],
    );

    let client = MockClient::failing_on("https://unreachable.example.com/2.pdf");
    let app = App::new(config, &client);
    let err = app.download(&NopSink).unwrap_err();

    assert_matches!(err, FetchError::HttpStatus { status: 404, .. });
    assert_eq!(
        client.calls(),
        vec![
            "https://example.com/1.pdf".to_string(),
            "https://unreachable.example.com/2.pdf".to_string(),
        ]
    );
}

#[test]
fn category_downloads_are_independent() {
    let temp = tempfile::tempdir().unwrap();
    let root = utf8_root(&temp);
    let config = test_config(&root);
    write_manifest(
        &config.videos.manifest,
        &[
            ("Intro", "https://example.com/intro.mp4"),
            ("Outro", "https://example.com/outro.mp4?dl=1"),
        ],
    );
    let videos_dir = config.videos.download_dir.clone();

    let client = MockClient::default();
    let sink = RecordingSink::default();
    let app = App::new(config, &client);
    let videos = app.download_video_samples(&sink).unwrap();

    assert_eq!(
        videos,
        vec![
            SampleRecord::new("Intro", videos_dir.join("intro.mp4")),
            SampleRecord::new("Outro", videos_dir.join("outro.mp4")),
        ]
    );
    assert!(!app.are_video_samples_downloaded().unwrap());
    assert_matches!(
        app.download_doc_samples(&NopSink),
        Err(FetchError::ManifestRead(_))
    );
    assert_eq!(
        sink.events
            .lock()
            .unwrap()
            .iter()
            .map(|event| event.action)
            .collect::<Vec<_>>(),
        vec![SampleAction::Downloaded, SampleAction::Downloaded]
    );
}
