//! End-to-end runs of the pipeline against a local mock HTTP server.

use mockito::{Matcher, Server};
use speaker_factcheck::http::HttpPageSource;
use speaker_factcheck::models::SpeakerScores;
use speaker_factcheck::outputs::json::{SCORES_FILENAME, write_speaker_scores};
use speaker_factcheck::pipeline::analyze_speakers_in_article;
use speaker_factcheck::scrapers::politifact::FactCheckClient;
use url::Url;

fn listing(entries: &[(&str, &str)]) -> String {
    let items: String = entries
        .iter()
        .map(|(title, rating)| {
            format!(
                r#"<li class="o-listicle__item">
                     <div class="m-statement__content"><a class="m-statement__quote" href="/x/">{title}</a></div>
                     <div class="m-statement__meter"><picture><img src="r.jpg" alt="{rating}"></picture></div>
                   </li>"#
            )
        })
        .collect();
    format!(r#"<html><body><ul class="o-listicle__list">{items}</ul></body></html>"#)
}

fn listing_query(speaker: &str, page: u32) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("page".into(), page.to_string()),
        Matcher::UrlEncoded("speaker".into(), speaker.into()),
    ])
}

fn setup(server: &Server) -> (HttpPageSource, FactCheckClient) {
    let source = HttpPageSource::new("speaker_factcheck-test/0.0").unwrap();
    let client = FactCheckClient::new(&Url::parse(&server.url()).unwrap()).unwrap();
    (source, client)
}

#[tokio::test]
async fn article_failure_still_writes_empty_scores_file() {
    let mut server = Server::new_async().await;
    let article = server
        .mock("GET", "/story")
        .with_status(500)
        .create_async()
        .await;
    let (source, client) = setup(&server);

    let scores = analyze_speakers_in_article(&source, &client, &format!("{}/story", server.url()))
        .await
        .unwrap();
    assert!(scores.is_empty());

    let tmp = tempfile::tempdir().unwrap();
    let path = write_speaker_scores(&scores, tmp.path()).await.unwrap();
    assert_eq!(path, tmp.path().join(SCORES_FILENAME));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");

    article.assert_async().await;
}

#[tokio::test]
async fn paginates_until_empty_page_and_scores() {
    let mut server = Server::new_async().await;
    let article = server
        .mock("GET", "/story")
        .with_status(200)
        .with_body(r#"<html><body><p>Asked again, she said "Jane Doe never said that".</p></body></html>"#)
        .create_async()
        .await;
    let page1 = server
        .mock("GET", "/factchecks/list/")
        .match_query(listing_query("Jane Doe", 1))
        .with_body(listing(&[("Claim one", "True"), ("Claim two", "Mostly True")]))
        .expect(1)
        .create_async()
        .await;
    let page2 = server
        .mock("GET", "/factchecks/list/")
        .match_query(listing_query("Jane Doe", 2))
        .with_body(listing(&[("Claim three", "Pants on Fire!")]))
        .expect(1)
        .create_async()
        .await;
    let page3 = server
        .mock("GET", "/factchecks/list/")
        .match_query(listing_query("Jane Doe", 3))
        .with_body(listing(&[]))
        .expect(1)
        .create_async()
        .await;
    let page4 = server
        .mock("GET", "/factchecks/list/")
        .match_query(listing_query("Jane Doe", 4))
        .with_body(listing(&[("Never read", "True")]))
        .expect(0)
        .create_async()
        .await;
    let (source, client) = setup(&server);

    let scores = analyze_speakers_in_article(&source, &client, &format!("{}/story", server.url()))
        .await
        .unwrap();

    let mut expected = SpeakerScores::new();
    expected.insert("Jane Doe".to_string(), (1.0 + 0.8 - 1.0) / 3.0);
    assert_eq!(scores, expected);

    article.assert_async().await;
    page1.assert_async().await;
    page2.assert_async().await;
    page3.assert_async().await;
    page4.assert_async().await;
}

#[tokio::test]
async fn status_error_mid_lookup_keeps_earlier_pages() {
    let mut server = Server::new_async().await;
    let _article = server
        .mock("GET", "/story")
        .with_body(r#"<p>"John Smith"</p>"#)
        .create_async()
        .await;
    let _page1 = server
        .mock("GET", "/factchecks/list/")
        .match_query(listing_query("John Smith", 1))
        .with_body(listing(&[("Claim", "Half True")]))
        .create_async()
        .await;
    let page2 = server
        .mock("GET", "/factchecks/list/")
        .match_query(listing_query("John Smith", 2))
        .with_status(503)
        .expect(1)
        .create_async()
        .await;
    let (source, client) = setup(&server);

    let scores = analyze_speakers_in_article(&source, &client, &format!("{}/story", server.url()))
        .await
        .unwrap();

    assert_eq!(scores.get("John Smith"), Some(&0.5));
    page2.assert_async().await;
}

#[tokio::test]
async fn malformed_listing_fails_the_run() {
    let mut server = Server::new_async().await;
    let _article = server
        .mock("GET", "/story")
        .with_body(r#"<p>"John Smith"</p>"#)
        .create_async()
        .await;
    let _page1 = server
        .mock("GET", "/factchecks/list/")
        .match_query(listing_query("John Smith", 1))
        .with_body(r#"<ul><li class="o-listicle__item"><a class="m-statement__quote">Claim</a></li></ul>"#)
        .create_async()
        .await;
    let (source, client) = setup(&server);

    let result =
        analyze_speakers_in_article(&source, &client, &format!("{}/story", server.url())).await;
    assert!(result.is_err());
}
