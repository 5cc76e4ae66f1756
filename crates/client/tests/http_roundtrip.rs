//! End-to-end exchanges against a local mock server.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use docmill_client::{Client, ClientConfig, ClientError};
use docmill_domain::{JobRequest, Script, ScriptOption};

const ALIVE_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<alive authentication="false" mode="local" version="1.6"/>"#;

const SCRIPTS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<scripts href="http://docs.example/ws/scripts">
    <script id="dtbook-to-epub3" href="http://docs.example/ws/scripts/dtbook-to-epub3">
        <nicename>DTBook to EPUB3</nicename>
        <description>Transforms DTBook XML into an EPUB 3 publication.</description>
    </script>
    <script id="dtbook-to-zedai" href="http://docs.example/ws/scripts/dtbook-to-zedai">
        <nicename>DTBook to ZedAI</nicename>
        <description>Transforms DTBook XML into ZedAI XML.</description>
    </script>
</scripts>"#;

const SCRIPT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<script id="dtbook-to-zedai" href="http://docs.example/ws/scripts/dtbook-to-zedai">
    <nicename>DTBook to ZedAI</nicename>
    <description>Transforms DTBook XML into ZedAI XML.</description>
    <input desc="One or more DTBook files" mediaType="application/x-dtbook+xml" name="source" sequence="true"/>
    <option desc="Whether to stop on validation error" name="assert-valid" required="false" type="boolean"/>
</script>"#;

const JOB_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<job id="job-id-01" href="http://docs.example/ws/jobs/job-id-01" status="DONE">
    <nicename>simple-job</nicename>
    <messages>
        <message level="WARNING" sequence="22">Warning message</message>
    </messages>
    <log href="http://docs.example/ws/jobs/job-id-01/log"/>
    <results href="http://docs.example/ws/jobs/job-id-01/result" mime-type="application/zip">
        <result from="option" name="output-dir" href="http://docs.example/ws/jobs/job-id-01/result/option/output-dir"/>
    </results>
</job>"#;

const JOBS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<jobs href="http://docs.example/ws/jobs">
    <job id="job-id-01" href="http://docs.example/ws/jobs/job-id-01" status="DONE"/>
    <job id="job-id-02" href="http://docs.example/ws/jobs/job-id-02" status="ERROR"/>
</jobs>"#;

const ERROR_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<error query="http://docs.example/ws/jobs">
    <description>Error while acquiring jobs</description>
    <trace>a very long trace</trace>
</error>"#;

async fn client_for(server: &MockServer) -> Client {
    let base_url = format!("{}/ws/", server.uri());
    Client::new(ClientConfig::new(base_url)).expect("client should build")
}

fn sample_request() -> JobRequest {
    JobRequest {
        script: Script::with_id("dtbook-to-zedai"),
        options: vec![ScriptOption { name: "assert-valid".to_string(), ..Default::default() }],
        ..Default::default()
    }
}

#[tokio::test]
async fn alive_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ws/alive"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(ALIVE_XML, "application/xml"))
        .mount(&server)
        .await;

    let alive = client_for(&server).await.alive().await.unwrap();
    assert!(!alive.authentication);
    assert_eq!(alive.mode, "local");
    assert_eq!(alive.to_string(), "Alive:[#authentication:false #mode:local #version:1.6]");
}

#[tokio::test]
async fn scripts_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ws/scripts"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SCRIPTS_XML, "application/xml"))
        .mount(&server)
        .await;

    let scripts = client_for(&server).await.scripts().await.unwrap();
    assert_eq!(scripts.scripts.len(), 2);
    assert_eq!(scripts.scripts[1].id, "dtbook-to-zedai");
}

#[tokio::test]
async fn script_detail_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ws/scripts/dtbook-to-zedai"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SCRIPT_XML, "application/xml"))
        .mount(&server)
        .await;

    let script = client_for(&server).await.script("dtbook-to-zedai").await.unwrap();
    assert_eq!(script.nicename.as_deref(), Some("DTBook to ZedAI"));
    assert_eq!(script.inputs.len(), 1);
    assert_eq!(script.inputs[0].name, "source");
    assert_eq!(script.options[0].name, "assert-valid");
}

#[tokio::test]
async fn plain_submission_posts_an_xml_document() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ws/jobs"))
        .respond_with(ResponseTemplate::new(201).set_body_raw(JOB_XML, "application/xml"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let job = client.job_request(&sample_request(), None).await.unwrap();
    assert_eq!(job.id, "job-id-01");
    assert_eq!(job.status, "DONE");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let content_type = requests[0].headers.get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("application/xml"));
    let body = String::from_utf8(requests[0].body.clone()).unwrap();
    assert!(body.contains("<jobRequest"));
    assert!(body.contains("dtbook-to-zedai"));
}

#[tokio::test]
async fn submission_with_data_posts_a_two_part_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ws/jobs"))
        .respond_with(ResponseTemplate::new(201).set_body_raw(JOB_XML, "application/xml"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let job = client.job_request(&sample_request(), Some(b"hey yo")).await.unwrap();
    assert_eq!(job.id, "job-id-01");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let content_type = requests[0].headers.get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("multipart/form-data; boundary="));
    let boundary = content_type.split("boundary=").nth(1).unwrap();

    let body = String::from_utf8(requests[0].body.clone()).unwrap();
    assert!(body.starts_with(&format!("--{boundary}\r\n")));
    assert!(body.ends_with(&format!("\r\n--{boundary}--\r\n")));
    // data part first, then the document part
    let data_at = body.find("name=\"job-data\"").unwrap();
    let document_at = body.find("name=\"job-request\"").unwrap();
    assert!(data_at < document_at);
    assert!(body.contains("filename=\"docmill-job-data.zip\""));
    assert!(body.contains("hey yo"));
    assert!(body.contains("<jobRequest"));
}

#[tokio::test]
async fn job_detail_carries_the_message_sequence() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ws/jobs/job-id-01"))
        .and(query_param("msgSeq", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(JOB_XML, "application/xml"))
        .mount(&server)
        .await;

    let job = client_for(&server).await.job("job-id-01", 0).await.unwrap();
    assert_eq!(job.status, "DONE");
    let messages = job.messages.unwrap().messages;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].sequence, "22");
    assert_eq!(messages[0].text, "Warning message");
    assert_eq!(job.results.unwrap().results[0].name, "output-dir");
}

#[tokio::test]
async fn jobs_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ws/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(JOBS_XML, "application/xml"))
        .mount(&server)
        .await;

    let jobs = client_for(&server).await.jobs().await.unwrap();
    assert_eq!(jobs.jobs.len(), 2);
    assert_eq!(jobs.jobs[1].status, "ERROR");
}

#[tokio::test]
async fn delete_job_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/ws/jobs/job-id-01"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    client_for(&server).await.delete_job("job-id-01").await.unwrap();
}

#[tokio::test]
async fn results_come_back_as_raw_bytes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ws/jobs/job-id-01/result"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("learn to swim", "application/zip"))
        .mount(&server)
        .await;

    let bytes = client_for(&server).await.results("job-id-01").await.unwrap();
    assert_eq!(bytes, b"learn to swim");
}

#[tokio::test]
async fn missing_job_maps_to_the_per_call_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ws/jobs/nope/result"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server).await.results("nope").await.unwrap_err();
    assert_eq!(err.to_string(), "Job nope not found");
}

#[tokio::test]
async fn unauthorized_maps_to_permission_denied() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ws/scripts"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client_for(&server).await.scripts().await.unwrap_err();
    assert!(matches!(err, ClientError::PermissionDenied));
}

#[tokio::test]
async fn server_error_surfaces_the_reported_description() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ws/jobs"))
        .respond_with(ResponseTemplate::new(500).set_body_raw(ERROR_XML, "application/xml"))
        .mount(&server)
        .await;

    let err = client_for(&server).await.jobs().await.unwrap_err();
    assert!(matches!(err, ClientError::Server(_)));
    assert!(err.to_string().contains("Error while acquiring jobs"));
}

#[tokio::test]
async fn error_document_inside_a_success_response_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ws/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(ERROR_XML, "application/xml"))
        .mount(&server)
        .await;

    let err = client_for(&server).await.jobs().await.unwrap_err();
    assert!(matches!(err, ClientError::Service(_)));
    assert!(err.to_string().contains("Error while acquiring jobs"));
}

#[tokio::test]
async fn unlisted_status_maps_to_a_framework_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ws/alive"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server).await.alive().await.unwrap_err();
    assert!(matches!(err, ClientError::Framework(503)));
}
