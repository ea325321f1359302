//! Integration tests for the crawler
//!
//! The wiremock tests serve a small site over HTTP and check the exported
//! JSON files end-to-end. The in-memory tests serve pages from a map with a
//! delay, so several fetches are in flight at once, and collect records in a
//! shared buffer.

use async_trait::async_trait;
use metallum_crawler::builders::Build;
use metallum_crawler::config::{Config, CrawlerConfig, OutputConfig, SiteConfig, UserAgentConfig};
use metallum_crawler::crawler::{
    crawl, AbortHandle, Continuation, Coordinator, Fetch, FetchRequest, Scheduler,
};
use metallum_crawler::model::{EntityKind, Member, Record};
use metallum_crawler::output::{ExportSink, OutputResult};
use metallum_crawler::query::Document;
use metallum_crawler::state::{EntityKey, Stage};
use metallum_crawler::FetchError;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SITE: &str = "https://www.metal-archives.com";

/// Creates a test configuration rooted at `base`
fn create_test_config(base: &str, output: &Path) -> Config {
    Config {
        crawler: CrawlerConfig {
            max_concurrent_fetches: 4,
            page_size: 500,
            request_timeout_secs: 5,
            max_retries: 0,
            retry_delay_ms: 10,
        },
        site: SiteConfig {
            base_url: base.to_string(),
            start_url: format!("{}/browse/letter", base),
        },
        user_agent: UserAgentConfig {
            crawler_name: "TestBot".to_string(),
            crawler_version: "1.0.0".to_string(),
            contact_url: "https://example.com/contact".to_string(),
            contact_email: "test@example.com".to_string(),
        },
        output: OutputConfig {
            directory: output.display().to_string(),
        },
    }
}

// ---------------------------------------------------------------------------
// Page fixtures
// ---------------------------------------------------------------------------

struct BandPage<'a> {
    id: u32,
    name: &'a str,
    label: Option<(u32, &'a str)>,
    country: Option<(&'a str, &'a str)>,
    members: &'a [(u32, &'a str, &'a str)],
}

fn lineup_rows(base: &str, members: &[(u32, &str, &str)]) -> String {
    members
        .iter()
        .map(|(id, name, roles)| {
            format!(
                r#"<tr class="lineupRow"><td><a href="{base}/artists/{name}/{id}">{name}</a></td><td>{roles}</td></tr>"#
            )
        })
        .collect()
}

fn band_page(base: &str, band: &BandPage<'_>) -> String {
    let country = match band.country {
        Some((code, name)) => format!(r#"<a href="{base}/lists/{code}">{name}</a>"#),
        None => "Unknown".to_string(),
    };
    let label = match band.label {
        Some((id, name)) => format!(r#"<a href="{base}/labels/{name}/{id}">{name}</a>"#),
        None => "Unsigned/independent".to_string(),
    };
    let rows = lineup_rows(base, band.members);
    let (id, name) = (band.id, band.name);
    format!(
        r#"<html><body>
        <div id="band_info">
          <h1 class="band_name"><a href="{base}/bands/{name}/{id}">{name}</a></h1>
          <div id="band_stats">
            <dl class="float_left">
              <dt>Country of origin:</dt><dd>{country}</dd>
              <dt>Location:</dt><dd>Bergen</dd>
              <dt>Status:</dt><dd>Active</dd>
              <dt>Formed in:</dt><dd>1991</dd>
            </dl>
            <dl class="float_right">
              <dt>Genre:</dt><dd>Black Metal</dd>
              <dt>Themes:</dt><dd>Winter, Mountains</dd>
              <dt>Current label:</dt><dd>{label}</dd>
            </dl>
          </div>
        </div>
        <div id="band_tab_members_all"><table>{rows}</table></div>
        <div id="band_tab_members_current"><table>{rows}</table></div>
        </body></html>"#
    )
}

fn discography_page(base: &str, band: &str, releases: &[(u32, &str)]) -> String {
    let rows: String = releases
        .iter()
        .map(|(id, name)| {
            format!(
                r#"<tr><td><a href="{base}/albums/{band}/{name}/{id}">{name}</a></td><td>Full-length</td><td>1995</td><td><a href="{base}/reviews/{band}/{name}/{id}/">3 (85%)</a></td></tr>"#
            )
        })
        .collect();
    format!(
        r#"<table class="display discog">
          <thead><tr><th>Name</th><th>Type</th><th>Year</th><th>Reviews</th></tr></thead>
          <tbody>{rows}<tr><td>Untitled rehearsal</td><td>Demo</td><td>1990</td><td></td></tr></tbody>
        </table>"#
    )
}

const NO_RECOMMENDATIONS: &str = r#"<table id="artist_list"><tbody>
    <tr><td id="no_artists" colspan="4">No similar artist has been recommended yet.</td></tr>
    </tbody></table>"#;

fn recommendations_page(base: &str, bands: &[(u32, &str)], last_row: &str) -> String {
    let rows: String = bands
        .iter()
        .map(|(id, name)| {
            format!(
                r#"<tr><td><a href="{base}/bands/{name}/{id}">{name}</a></td><td>Norway</td><td>Black Metal</td><td>42</td></tr>"#
            )
        })
        .collect();
    format!(r#"<table id="artist_list"><tbody>{rows}{last_row}</tbody></table>"#)
}

fn release_page(base: &str, members: &[(u32, &str, &str)]) -> String {
    let rows = lineup_rows(base, members);
    format!(
        r#"<div id="album_info">
          <dl class="float_left"><dt>Type:</dt><dd>Full-length</dd></dl>
          <dl class="float_right"><dt>Label:</dt><dd>Independent</dd></dl>
        </div>
        <div id="album_members">
          <div id="album_all_members_lineup"><table>{rows}</table></div>
          <div id="album_members_lineup"><table>{rows}</table></div>
        </div>"#
    )
}

fn member_page(base: &str, name: &str, band_id: u32, band: &str) -> String {
    format!(
        r#"<div id="member_info">
          <h1 class="band_member_name">{name}</h1>
          <dl class="float_left"><dt>Real/full name:</dt><dd>{name}</dd></dl>
        </div>
        <div id="artist_tab_active"><div class="ui-tabs-panel-content">
          <div class="member_in_band" id="memberInBand_{band_id}">
            <h3 class="member_in_band_name"><a href="{base}/bands/{band}/{band_id}">{band}</a></h3>
            <p class="member_in_band_role"><strong>Vocals (1991-present)</strong></p>
          </div>
        </div></div>"#
    )
}

fn label_page(base: &str) -> String {
    format!(
        r#"<div id="label_info">
          <dl class="float_left"><dt>Country:</dt><dd><a href="{base}/lists/NO">Norway</a></dd></dl>
          <dl class="float_right">
            <dt>Status:</dt><dd><span class="active">active</span></dd>
            <dt>Styles and specialties:</dt><dd>Black</dd>
            <dt>Founding date :</dt><dd>1993</dd>
          </dl>
        </div>"#
    )
}

fn listing_json(base: &str, bands: impl IntoIterator<Item = (u32, String)>) -> String {
    let rows: Vec<Value> = bands
        .into_iter()
        .map(|(id, name)| {
            serde_json::json!([
                format!(r#"<a href="{base}/bands/{name}/{id}">{name}</a>"#),
                "Norway",
                "Black Metal",
                "Active"
            ])
        })
        .collect();
    let total = rows.len();
    serde_json::json!({ "iTotalRecords": total, "aaData": rows }).to_string()
}

fn numbered(range: std::ops::Range<u32>) -> impl Iterator<Item = (u32, String)> {
    range.map(|id| (id, format!("Band_{}", id)))
}

fn letter_page(base: &str) -> String {
    format!(
        r#"<html><body><div id="wrapper">
          <div id="header"></div>
          <div id="search"></div>
          <div id="content_wrapper">
            <div id="letters"><ul><li><a href="{base}/lists/A">A</a></li></ul></div>
          </div>
        </div></body></html>"#
    )
}

// ---------------------------------------------------------------------------
// Test doubles
// ---------------------------------------------------------------------------

/// Serves pages from memory, counting every fetch
struct MapFetcher {
    pages: HashMap<String, String>,
    hits: Mutex<HashMap<String, usize>>,
    delay: Duration,
}

impl MapFetcher {
    fn new(pages: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            pages: pages.into_iter().collect(),
            hits: Mutex::new(HashMap::new()),
            delay: Duration::from_millis(20),
        }
    }

    fn hits(&self, url: &str) -> usize {
        self.hits.lock().unwrap().get(url).copied().unwrap_or(0)
    }
}

#[async_trait]
impl Fetch for MapFetcher {
    async fn fetch(&self, url: &str) -> Result<Document, FetchError> {
        *self.hits.lock().unwrap().entry(url.to_string()).or_default() += 1;
        tokio::time::sleep(self.delay).await;
        match self.pages.get(url) {
            Some(body) => Ok(Document::new(url::Url::parse(url).unwrap(), body.clone())),
            None => Err(FetchError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}

/// Collects records in memory and tracks open/close calls
#[derive(Clone, Default)]
struct MemorySink {
    records: Arc<Mutex<Vec<Record>>>,
    open: Arc<Mutex<HashSet<EntityKind>>>,
    closed: Arc<Mutex<HashSet<EntityKind>>>,
}

impl MemorySink {
    fn of_kind(&self, kind: EntityKind) -> Vec<Record> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.kind() == kind)
            .cloned()
            .collect()
    }
}

impl ExportSink for MemorySink {
    fn open(&mut self, kind: EntityKind) -> OutputResult<()> {
        self.open.lock().unwrap().insert(kind);
        Ok(())
    }

    fn write(&mut self, record: &Record) -> OutputResult<()> {
        assert!(self.open.lock().unwrap().contains(&record.kind()));
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    fn close(&mut self, kind: EntityKind) -> OutputResult<()> {
        self.closed.lock().unwrap().insert(kind);
        Ok(())
    }
}

fn band_seed(id: u32, name: &str) -> FetchRequest {
    FetchRequest::new(
        format!("{SITE}/bands/{name}/{id}"),
        Continuation::Band {
            metallum_id: id.to_string(),
        },
    )
}

/// Pages for two bands signed to the same label and sharing a member
fn shared_label_site() -> Vec<(String, String)> {
    let members = [(100, "Singer", "Vocals (1991-2001), Guitars")];
    let mut pages = vec![
        (format!("{SITE}/labels/Shared_Records/7"), label_page(SITE)),
        (
            format!("{SITE}/label/ajax-bands-past/nbrPerPage/100000000/id/7?sEcho=4&iColumns=3&sColumns="),
            listing_json(SITE, numbered(1..3)),
        ),
        (
            format!("{SITE}/label/ajax-bands/nbrPerPage/100000000/id/7?sEcho=4&iColumns=3&sColumns="),
            listing_json(SITE, numbered(3..4)),
        ),
        (
            format!("{SITE}/artists/Singer/100"),
            member_page(SITE, "Singer", 1, "Alpha"),
        ),
    ];
    for (id, name) in [(1, "Alpha"), (2, "Beta")] {
        let band = BandPage {
            id,
            name,
            label: Some((7, "Shared_Records")),
            country: None,
            members: &members,
        };
        pages.push((format!("{SITE}/bands/{name}/{id}"), band_page(SITE, &band)));
        pages.push((
            format!("{SITE}/band/discography/id/{id}/tab/all"),
            discography_page(SITE, name, &[]),
        ));
        pages.push((
            format!("{SITE}/band/ajax-recommendations/id/{id}"),
            NO_RECOMMENDATIONS.to_string(),
        ));
    }
    pages
}

// ---------------------------------------------------------------------------
// In-memory crawls
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_shared_label_is_exported_once() {
    let dir = TempDir::new().unwrap();
    let config = create_test_config(SITE, dir.path());
    let fetcher = Arc::new(MapFetcher::new(shared_label_site()));
    let sink = MemorySink::default();

    let mut coordinator =
        Coordinator::new(&config, fetcher.clone(), Box::new(sink.clone())).unwrap();
    let stats = coordinator
        .run_from(vec![band_seed(1, "Alpha"), band_seed(2, "Beta")])
        .await
        .unwrap();

    let labels = sink.of_kind(EntityKind::Label);
    assert_eq!(labels.len(), 1);
    let Record::Label(label) = &labels[0] else {
        panic!("expected a label");
    };
    assert_eq!(label.metallum_id, "7");
    assert_eq!(label.past_bands.len(), 2);
    assert_eq!(label.current_bands.len(), 1);
    assert_eq!(label.country.as_ref().unwrap().metallum_id, "NO");

    assert_eq!(sink.of_kind(EntityKind::Band).len(), 2);
    assert_eq!(sink.of_kind(EntityKind::Member).len(), 1);
    assert_eq!(fetcher.hits(&format!("{SITE}/labels/Shared_Records/7")), 1);
    assert_eq!(fetcher.hits(&format!("{SITE}/artists/Singer/100")), 1);

    assert_eq!(stats.emitted(EntityKind::Label), 1);
    assert!(stats.scheduler.suppressed >= 2);
    assert_eq!(stats.fetch_failures, 0);
    assert_eq!(stats.unfinished, 0);
}

#[tokio::test]
async fn test_failed_stage_keeps_band_out_of_export() {
    let dir = TempDir::new().unwrap();
    let config = create_test_config(SITE, dir.path());
    let mut pages = shared_label_site();
    // Beta's recommendations are gone: Beta can never complete
    pages.retain(|(url, _)| url != &format!("{SITE}/band/ajax-recommendations/id/2"));
    let fetcher = Arc::new(MapFetcher::new(pages));
    let sink = MemorySink::default();

    let mut coordinator = Coordinator::new(&config, fetcher, Box::new(sink.clone())).unwrap();
    let scheduler: Arc<Scheduler> = coordinator.scheduler();
    let stats = coordinator
        .run_from(vec![band_seed(1, "Alpha"), band_seed(2, "Beta")])
        .await
        .unwrap();

    let bands = sink.of_kind(EntityKind::Band);
    assert_eq!(bands.len(), 1);
    assert_eq!(bands[0].metallum_id(), "1");
    assert_eq!(stats.fetch_failures, 1);
    assert_eq!(stats.unfinished, 1);

    let beta = scheduler
        .state(&EntityKey::new(EntityKind::Band, "2"))
        .unwrap();
    assert!(beta.is_active());
    assert!(beta.stages().contains(Stage::Discography));
    assert!(!beta.stages().contains(Stage::Recommendations));

    // Siblings of the failed branch still finished
    assert_eq!(sink.of_kind(EntityKind::Label).len(), 1);
}

#[tokio::test]
async fn test_abort_before_start_still_closes_sink() {
    let dir = TempDir::new().unwrap();
    let config = create_test_config(SITE, dir.path());
    let fetcher = Arc::new(MapFetcher::new(shared_label_site()));
    let sink = MemorySink::default();
    let abort = AbortHandle::new();
    abort.abort();

    let mut coordinator = Coordinator::with_abort_handle(
        &config,
        fetcher.clone(),
        Box::new(sink.clone()),
        abort,
    )
    .unwrap();
    let stats = coordinator
        .run_from(vec![band_seed(1, "Alpha")])
        .await
        .unwrap();

    assert!(stats.aborted);
    assert_eq!(stats.fetched, 0);
    assert_eq!(fetcher.hits(&format!("{SITE}/bands/Alpha/1")), 0);
    assert_eq!(sink.closed.lock().unwrap().len(), EntityKind::ALL.len());
}

#[test]
fn test_duplicate_completion_is_written_once() {
    let scheduler = Scheduler::new();
    let mut sink = MemorySink::default();
    for kind in EntityKind::ALL {
        sink.open(kind).unwrap();
    }

    let key = EntityKey::new(EntityKind::Member, "100");
    for _ in 0..2 {
        let build = Build::complete(
            Member {
                metallum_id: "100".to_string(),
                name: "Singer".to_string(),
                ..Member::default()
            },
            Vec::new(),
        )
        .into_record();
        if let Some(record) = scheduler.settle(key.clone(), Some(Stage::History), build).emitted {
            sink.write(&record).unwrap();
        }
    }

    assert_eq!(sink.of_kind(EntityKind::Member).len(), 1);
    assert_eq!(scheduler.counters().duplicate_results, 1);
}

// ---------------------------------------------------------------------------
// End-to-end over HTTP
// ---------------------------------------------------------------------------

async fn mount(server: &MockServer, page: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(page))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

async fn mount_once(server: &MockServer, page: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(page))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_listing(server: &MockServer, page: &str, offset: u32, body: String) {
    Mock::given(method("GET"))
        .and(path(page))
        .and(query_param("iDisplayStart", offset.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

fn read_export(dir: &Path, kind: &str) -> Vec<Value> {
    let text = std::fs::read_to_string(dir.join(format!("{}.json", kind))).unwrap();
    match serde_json::from_str(&text).unwrap() {
        Value::Array(items) => items,
        other => panic!("{}.json is not an array: {}", kind, other),
    }
}

fn by_id<'a>(items: &'a [Value], id: &str) -> &'a Value {
    items
        .iter()
        .find(|item| item["metallum_id"] == id)
        .unwrap_or_else(|| panic!("no record with id {}", id))
}

#[tokio::test]
async fn test_full_crawl_exports_every_entity_type() {
    let server = MockServer::start().await;
    let base = server.uri();
    let dir = TempDir::new().unwrap();
    let members = [(100, "Singer", "Vocals (1991-2001), Guitars")];

    // Letter index and the listing of letter A: three bands, then an empty page
    mount_once(&server, "/browse/letter", letter_page(&base)).await;
    let letter_a = "/browse/ajax-letter/l/A/json/1";
    mount_listing(
        &server,
        letter_a,
        0,
        listing_json(
            &base,
            [
                (1, "Alpha".to_string()),
                (2, "Beta".to_string()),
                (3, "Gamma".to_string()),
            ],
        ),
    )
    .await;
    mount_listing(&server, letter_a, 500, listing_json(&base, numbered(0..0))).await;

    // Alpha and Beta share a label and a country; Gamma has neither
    let bands = [
        BandPage {
            id: 1,
            name: "Alpha",
            label: Some((7, "Shared_Records")),
            country: Some(("NO", "Norway")),
            members: &members,
        },
        BandPage {
            id: 2,
            name: "Beta",
            label: Some((7, "Shared_Records")),
            country: Some(("NO", "Norway")),
            members: &members,
        },
        BandPage {
            id: 3,
            name: "Gamma",
            label: None,
            country: None,
            members: &members,
        },
    ];
    for band in &bands {
        mount_once(
            &server,
            &format!("/bands/{}/{}", band.name, band.id),
            band_page(&base, band),
        )
        .await;
    }

    mount(
        &server,
        "/band/discography/id/1/tab/all",
        discography_page(&base, "Alpha", &[(10, "First"), (11, "Second")]),
    )
    .await;
    mount(
        &server,
        "/band/discography/id/2/tab/all",
        discography_page(&base, "Beta", &[(20, "Only")]),
    )
    .await;
    mount(
        &server,
        "/band/discography/id/3/tab/all",
        discography_page(&base, "Gamma", &[]),
    )
    .await;

    mount(&server, "/band/ajax-recommendations/id/1", NO_RECOMMENDATIONS.to_string()).await;
    mount(&server, "/band/ajax-recommendations/id/3", NO_RECOMMENDATIONS.to_string()).await;
    // Beta's short list offers more; the expanded list ends with its collapse row
    Mock::given(method("GET"))
        .and(path("/band/ajax-recommendations/id/2"))
        .and(query_param("showMoreSimilar", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(recommendations_page(
            &base,
            &[(1, "Alpha"), (3, "Gamma")],
            r#"<tr><td colspan="4"><a href="javascript:;">show top 20 only</a></td></tr>"#,
        )))
        .expect(1)
        .mount(&server)
        .await;
    mount(
        &server,
        "/band/ajax-recommendations/id/2",
        recommendations_page(
            &base,
            &[(1, "Alpha")],
            r#"<tr><td colspan="4"><a href="javascript:;">see more</a></td></tr>"#,
        ),
    )
    .await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/albums/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(release_page(&base, &members)))
        .expect(3)
        .mount(&server)
        .await;
    mount_once(
        &server,
        "/artists/Singer/100",
        member_page(&base, "Singer", 1, "Alpha"),
    )
    .await;

    mount_once(&server, "/labels/Shared_Records/7", label_page(&base)).await;
    mount_once(
        &server,
        "/label/ajax-bands-past/nbrPerPage/100000000/id/7",
        listing_json(&base, numbered(50..52)),
    )
    .await;
    mount_once(
        &server,
        "/label/ajax-bands/nbrPerPage/100000000/id/7",
        listing_json(&base, [(1, "Alpha".to_string()), (2, "Beta".to_string())]),
    )
    .await;

    // Norway: 250 + 250 bands, then an empty page
    mount_once(
        &server,
        "/lists/NO",
        r#"<h1 class="page_title">Metal bands from Norway</h1>"#.to_string(),
    )
    .await;
    let norway = "/browse/ajax-country/c/NO/json/1";
    mount_listing(&server, norway, 0, listing_json(&base, numbered(1000..1250))).await;
    mount_listing(&server, norway, 500, listing_json(&base, numbered(1250..1500))).await;
    mount_listing(&server, norway, 1000, listing_json(&base, numbered(0..0))).await;

    let config = create_test_config(&base, dir.path());
    let stats = crawl(&config, AbortHandle::new()).await.unwrap();

    assert_eq!(stats.fetch_failures, 0);
    assert_eq!(stats.parse_failures, 0);
    assert_eq!(stats.unfinished, 0);

    let bands = read_export(dir.path(), "band");
    assert_eq!(bands.len(), 3);
    let alpha = by_id(&bands, "1");
    assert_eq!(alpha["name"], "Alpha");
    assert_eq!(alpha["country"]["metallum_id"], "NO");
    assert_eq!(alpha["current_label"]["metallum_id"], "7");
    assert_eq!(alpha["releases"].as_array().unwrap().len(), 2);
    assert_eq!(
        alpha["lineup"]["current"][0]["roles"],
        serde_json::json!(["Vocals", "Guitars"])
    );
    assert!(alpha["lineup"].get("all").is_none());

    let beta = by_id(&bands, "2");
    assert_eq!(beta["similar_artists"].as_array().unwrap().len(), 2);

    let gamma = by_id(&bands, "3");
    assert!(gamma["current_label"].is_null());
    assert!(gamma["country"].is_null());
    assert!(gamma["releases"].as_array().unwrap().is_empty());

    let releases = read_export(dir.path(), "release");
    assert_eq!(releases.len(), 3);
    let first = by_id(&releases, "10");
    assert_eq!(first["band"], "1");
    assert_eq!(first["type"], "Full-length");
    assert_eq!(first["reviews_count"], 3);
    assert_eq!(first["reviews_avg"], 85);
    assert!(first["label"].is_null());

    let labels = read_export(dir.path(), "label");
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0]["past_bands"].as_array().unwrap().len(), 2);
    assert_eq!(labels[0]["current_bands"].as_array().unwrap().len(), 2);
    assert_eq!(labels[0]["country"]["name"], "Norway");

    let countries = read_export(dir.path(), "country");
    assert_eq!(countries.len(), 1);
    assert_eq!(countries[0]["name"], "Norway");
    assert_eq!(countries[0]["bands"].as_array().unwrap().len(), 500);

    let members = read_export(dir.path(), "member");
    assert_eq!(members.len(), 1);
    assert_eq!(members[0]["name"], "Singer");
    assert_eq!(members[0]["bands"]["active"][0]["metallum_id"], "1");
    assert_eq!(
        members[0]["bands"]["active"][0]["roles"],
        serde_json::json!(["Vocals"])
    );
}
