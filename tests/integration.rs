use pretty_assertions::assert_eq;
use tour_api_conn::{
    app::{App, Lookup},
    models::{ClientConfig, ResponseFormat},
    transport::MockTransport,
    Error,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LIST_BODY: &str = r#"{"response":{"header":{"resultCode":"0000"},"body":{"items":{"item":[{"title":"Deoksugung"}]}}}}"#;
const DETAIL_BODY: &str = r#"{"response":{"header":{"resultCode":"0000"},"body":{"items":{"item":{"contentid":129898}}}}}"#;

fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::default().with_base_url(format!("{}/KorService", server.uri()))
}

#[tokio::test]
async fn test_full_run_against_http_server() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/KorService/locationBasedList"))
        .and(query_param("ServiceKey", "key/with+special=="))
        .and(query_param("mapX", "126.977969"))
        .and(query_param("mapY", "37.566535"))
        .and(query_param("radius", "2000"))
        .and(query_param("_type", "json"))
        .and(query_param("numOfRows", "10"))
        .and(query_param("pageNo", "1"))
        .and(query_param("listYN", "Y"))
        .and(query_param("arrange", "A"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LIST_BODY))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/KorService/detailCommon"))
        .and(query_param("ServiceKey", "key/with+special=="))
        .and(query_param("contentTypeId", "14"))
        .and(query_param("contentId", "129898"))
        .and(query_param("defaultYN", "Y"))
        .and(query_param("firstImageYN", "Y"))
        .and(query_param("areacodeYN", "Y"))
        .and(query_param("catcodeYN", "Y"))
        .and(query_param("addrinfoYN", "Y"))
        .and(query_param("mapinfoYN", "Y"))
        .and(query_param("overviewYN", "Y"))
        .respond_with(ResponseTemplate::new(200).set_body_string(DETAIL_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let app = App::new("key/with+special==".to_string(), config_for(&server)).unwrap();
    let report = app.run(&Lookup::default()).await.unwrap();

    assert_eq!(report.nearby, LIST_BODY);
    assert_eq!(report.detail, DETAIL_BODY);
}

#[tokio::test]
async fn test_xml_format_is_requested_and_passed_through() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("_type", "xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<response><header/></response>"))
        .expect(2)
        .mount(&server)
        .await;

    let app = App::new("key".to_string(), config_for(&server)).unwrap();
    let lookup = Lookup {
        format: ResponseFormat::Xml,
        ..Lookup::default()
    };
    let report = app.run(&lookup).await.unwrap();

    assert_eq!(report.nearby, "<response><header/></response>");
    assert_eq!(report.detail, "<response><header/></response>");
}

#[tokio::test]
async fn test_rejected_key_body_is_returned_unexamined() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(401).set_body_string("SERVICE_KEY_IS_NOT_REGISTERED_ERROR"),
        )
        .mount(&server)
        .await;

    let app = App::new("bad-key".to_string(), config_for(&server)).unwrap();
    let report = app.run(&Lookup::default()).await.unwrap();

    assert_eq!(report.nearby, "SERVICE_KEY_IS_NOT_REGISTERED_ERROR");
    assert_eq!(report.detail, "SERVICE_KEY_IS_NOT_REGISTERED_ERROR");
}

#[tokio::test]
async fn test_transport_failure_surfaces_as_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let config = ClientConfig::default().with_base_url(format!("http://127.0.0.1:{}", port));
    let app = App::new("key".to_string(), config).unwrap();

    let err = app.run(&Lookup::default()).await.unwrap_err();
    assert!(matches!(err, Error::Http(_)));
}

#[tokio::test]
async fn test_stubbed_transport_body_is_unmodified() {
    let body = "  {\"odd\": \"whitespace\"}\n\n".to_string();
    let transport = MockTransport::new().with_response(body.clone());
    let app = App::with_transport(
        Box::new(transport.clone()),
        "key".to_string(),
        ClientConfig::default(),
    );

    let report = app.run(&Lookup::default()).await.unwrap();

    assert_eq!(report.nearby, body);
    assert_eq!(report.detail, body);
    assert_eq!(transport.get_call_count(), 2);
    assert!(transport
        .get_requests()
        .iter()
        .all(|url| url.host_str() == Some("api.visitkorea.or.kr")));
}
