// tests/pipeline_e2e.rs
use stream_seo_generator::config::SiteConfig;
use stream_seo_generator::fetch::FixtureSource;
use stream_seo_generator::pipeline;
use stream_seo_generator::write::MemorySink;

const FIXTURE: &str = r#"{
  "events": {
    "streams": [
      {
        "id": 3,
        "category": "Football",
        "always_live": true,
        "streams": [
          {
            "id": 1,
            "name": "Real Madrid vs. Barcelona",
            "uri_name": "rm-vs-barca",
            "starts_at": 1700000000,
            "ends_at": 1700007200,
            "category_name": "Football",
            "tag": "ESPN",
            "poster": "http://x/p.jpg"
          }
        ]
      }
    ]
  }
}"#;

#[tokio::test]
async fn generates_all_three_artifacts_from_one_category() {
    let cfg = SiteConfig::default();
    let source = FixtureSource::from_str(FIXTURE);
    let sink = MemorySink::new();

    let summary = pipeline::run(&cfg, &source, &sink).await.unwrap();
    assert_eq!(summary.total_categories, 1);
    assert_eq!(summary.total_events, 1);
    // home + 1 category + 1 event
    assert_eq!(summary.sitemap_entries, 3);

    let calls = sink.calls.lock().unwrap();
    assert_eq!(calls.len(), 1, "all artifacts land in a single store call");
    let items = &calls[0];
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].0, cfg.metadata_path);
    assert_eq!(items[1].0, cfg.sitemap_path);
    assert_eq!(items[2].0, cfg.keywords_path);
}

#[tokio::test]
async fn metadata_document_matches_the_versus_scenario() {
    let cfg = SiteConfig::default();
    let source = FixtureSource::from_str(FIXTURE);
    let sink = MemorySink::new();
    pipeline::run(&cfg, &source, &sink).await.unwrap();

    let calls = sink.calls.lock().unwrap();
    let metadata: serde_json::Value = serde_json::from_str(&calls[0][0].1).unwrap();

    assert_eq!(metadata["total_events"], 1);
    assert!(metadata["generated_at"].is_string());

    let category = &metadata["categories"][0];
    assert_eq!(category["slug"], "football");
    assert_eq!(category["event_count"], 1);
    assert_eq!(category["display_name"], "Fútbol");

    let event = &metadata["events"][0];
    assert_eq!(event["slug"], "real-madrid-vs-barcelona");
    assert_eq!(event["uri_name"], "rm-vs-barca");
    assert_eq!(event["event"]["home_team"], "Real Madrid");
    assert_eq!(event["event"]["away_team"], "Barcelona");
    assert_eq!(event["event"]["duration_minutes"], 120);
    assert_eq!(event["event"]["viewers"], "0");
    assert_eq!(event["schema"]["homeTeam"]["name"], "Real Madrid");
    assert_eq!(event["schema"]["awayTeam"]["name"], "Barcelona");
    assert_eq!(event["schema"]["@type"], "SportsEvent");

    // always_live category lifts the crawl hints
    assert_eq!(event["technical"]["priority"], 0.9);
    assert_eq!(event["technical"]["changefreq"], "always");
}

#[tokio::test]
async fn sitemap_is_ordered_home_category_event() {
    let cfg = SiteConfig::default();
    let source = FixtureSource::from_str(FIXTURE);
    let sink = MemorySink::new();
    pipeline::run(&cfg, &source, &sink).await.unwrap();

    let calls = sink.calls.lock().unwrap();
    let sitemap: serde_json::Value = serde_json::from_str(&calls[0][1].1).unwrap();
    let entries = sitemap.as_array().unwrap();

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["loc"], cfg.domain.as_str());
    assert_eq!(entries[0]["priority"], 1.0);
    assert_eq!(
        entries[1]["loc"],
        format!("{}/categoria/futbol", cfg.domain)
    );
    assert_eq!(
        entries[2]["loc"],
        format!("{}/evento/rm-vs-barca", cfg.domain)
    );
    assert_eq!(entries[2]["changefreq"], "always");
}

#[tokio::test]
async fn keywords_document_carries_the_audience_fields() {
    let cfg = SiteConfig::default();
    let source = FixtureSource::from_str(FIXTURE);
    let sink = MemorySink::new();
    pipeline::run(&cfg, &source, &sink).await.unwrap();

    let calls = sink.calls.lock().unwrap();
    let keywords: serde_json::Value = serde_json::from_str(&calls[0][2].1).unwrap();
    assert_eq!(keywords["language"], "es");
    assert_eq!(
        keywords["total_keywords"].as_u64().unwrap() as usize,
        keywords["primary_keywords"].as_array().unwrap().len()
    );
    assert!(keywords["target_search_engines"]
        .as_array()
        .unwrap()
        .iter()
        .any(|e| e == "Bing"));
}

#[tokio::test]
async fn single_events_have_no_versus_keys_in_output() {
    let fixture = r#"{
      "events": { "streams": [ {
        "id": 7,
        "category": "Basketball",
        "streams": [{
          "id": 2,
          "name": "NBA Finals 2024",
          "uri_name": "nba-finals",
          "starts_at": 1700000000,
          "ends_at": 1700007200,
          "category_name": "Basketball",
          "tag": "TNT",
          "poster": "http://x/nba.jpg"
        }]
      }]}
    }"#;
    let cfg = SiteConfig::default();
    let sink = MemorySink::new();
    pipeline::run(&cfg, &FixtureSource::from_str(fixture), &sink)
        .await
        .unwrap();

    let calls = sink.calls.lock().unwrap();
    let metadata: serde_json::Value = serde_json::from_str(&calls[0][0].1).unwrap();
    let event = &metadata["events"][0];
    assert!(event["schema"].get("homeTeam").is_none());
    assert!(event["schema"].get("awayTeam").is_none());
    assert!(event["schema"].get("competitor").is_none());
    assert!(event["event"].get("home_team").is_none());
    assert!(event["event"].get("away_team").is_none());
    // non-live crawl hints
    assert_eq!(event["technical"]["priority"], 0.7);
    assert_eq!(event["technical"]["changefreq"], "hourly");
}
