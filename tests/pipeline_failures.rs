// tests/pipeline_failures.rs
use stream_seo_generator::config::SiteConfig;
use stream_seo_generator::fetch::FixtureSource;
use stream_seo_generator::pipeline;
use stream_seo_generator::write::MemorySink;
use stream_seo_generator::PipelineError;

#[tokio::test]
async fn invalid_json_aborts_with_fetch_failure_and_writes_nothing() {
    let cfg = SiteConfig::default();
    let source = FixtureSource::from_str("{ this is not json");
    let sink = MemorySink::new();

    let err = pipeline::run(&cfg, &source, &sink).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PipelineError>(),
        Some(PipelineError::Fetch(_))
    ));
    assert!(sink.calls.lock().unwrap().is_empty(), "no artifact written");
}

#[tokio::test]
async fn missing_streams_array_aborts_with_shape_failure_and_writes_nothing() {
    let cfg = SiteConfig::default();
    let source = FixtureSource::from_str(r#"{ "events": { "count": 3 } }"#);
    let sink = MemorySink::new();

    let err = pipeline::run(&cfg, &source, &sink).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PipelineError>(),
        Some(PipelineError::Shape(_))
    ));
    assert!(sink.calls.lock().unwrap().is_empty(), "no artifact written");
}

#[tokio::test]
async fn streams_with_wrong_type_is_a_shape_failure() {
    let cfg = SiteConfig::default();
    let source = FixtureSource::from_str(r#"{ "events": { "streams": {} } }"#);
    let sink = MemorySink::new();

    let err = pipeline::run(&cfg, &source, &sink).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PipelineError>(),
        Some(PipelineError::Shape(_))
    ));
    assert!(sink.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn empty_catalogue_still_produces_the_home_entry() {
    let cfg = SiteConfig::default();
    let source = FixtureSource::from_str(r#"{ "events": { "streams": [] } }"#);
    let sink = MemorySink::new();

    let summary = pipeline::run(&cfg, &source, &sink).await.unwrap();
    assert_eq!(summary.total_categories, 0);
    assert_eq!(summary.total_events, 0);
    assert_eq!(summary.sitemap_entries, 1);
}
