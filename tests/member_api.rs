use std::{
    io::{BufRead, BufReader, Write},
    net::TcpListener,
    thread::{self, JoinHandle},
};

use gh_members::{
    Configuration, FetchError, GitHubMemberApi, MemberListContainer, MemberSource, RemoteMember,
    ViewMember,
};

/// Answer exactly one HTTP request with the given status line and body, and hand back
/// the request head that was received.
fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut head = String::new();
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                break;
            }
            head.push_str(&line);
        }

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        head
    });

    (format!("http://{addr}"), handle)
}

fn api_for(base_url: String, token: Option<&str>) -> GitHubMemberApi {
    let configuration = Configuration {
        organization: "lemoncode".to_string(),
        base_url,
        token: token.map(str::to_string),
        ..Configuration::default()
    };
    let client = reqwest::blocking::Client::builder()
        .no_proxy()
        .build()
        .unwrap();
    GitHubMemberApi::with_client(&configuration, client)
}

#[test]
fn fetches_and_projects_members() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"[
            {"login": "John", "id": 1, "avatar_url": "u1", "gravatar_id": "", "site_admin": false},
            {"login": "Martin", "id": 2, "avatar_url": "u2", "type": "User"}
        ]"#,
    );

    let members = api_for(base_url, None).fetch_member_list().unwrap();
    let head = server.join().unwrap();

    assert_eq!(
        members,
        vec![
            RemoteMember::new(1, "John", "u1"),
            RemoteMember::new(2, "Martin", "u2")
        ]
    );
    assert!(head.starts_with("GET /orgs/lemoncode/members HTTP/1.1"));
    let head = head.to_lowercase();
    assert!(head.contains("user-agent: gh-members/"));
    assert!(!head.contains("authorization"));
}

#[test]
fn sends_token_when_configured() {
    let (base_url, server) = serve_once("200 OK", "[]");

    let members = api_for(base_url, Some("s3cr3t")).fetch_member_list().unwrap();
    let head = server.join().unwrap().to_lowercase();

    assert!(members.is_empty());
    assert!(head.contains("authorization: bearer s3cr3t"));
}

#[test]
fn not_found_fails_with_status_text() {
    let (base_url, server) = serve_once(
        "404 Not Found",
        r#"{"message":"Not Found","documentation_url":"https://docs.github.com/rest"}"#,
    );

    let mut container = MemberListContainer::new(api_for(base_url, None));
    let err = container.on_mount().unwrap_err();
    server.join().unwrap();

    assert_eq!(err.to_string(), "Not Found");
    assert_eq!(err.status(), Some(404));
    assert!(container.store().state().members.member_list.is_empty());
    assert!(container.member_list_vm().is_empty());
}

#[test]
fn error_message_is_the_reason_phrase_the_server_sent() {
    let (base_url, server) = serve_once("403 Org Is Private", "");

    let mut container = MemberListContainer::new(api_for(base_url, None));
    let err = container.on_mount().unwrap_err();
    server.join().unwrap();

    assert_eq!(err.to_string(), "Org Is Private");
    assert_eq!(err.status(), Some(403));
    assert!(container.store().state().members.member_list.is_empty());
}

#[test]
fn unknown_status_keeps_its_reason_phrase() {
    let (base_url, server) = serve_once("599 Weird", "");

    let err = api_for(base_url, None).fetch_member_list().unwrap_err();
    server.join().unwrap();

    assert_eq!(err.to_string(), "Weird");
}

#[test]
fn malformed_body_is_a_parse_error() {
    let (base_url, server) = serve_once("200 OK", r#"[{"id": 1, "login": "Jo"#);

    let err = api_for(base_url, None).fetch_member_list().unwrap_err();
    server.join().unwrap();

    assert!(matches!(err, FetchError::Parse(_)));
}

#[test]
fn object_body_is_rejected() {
    let (base_url, server) = serve_once("200 OK", r#"{"message": "hello"}"#);

    let err = api_for(base_url, None).fetch_member_list().unwrap_err();
    server.join().unwrap();

    assert!(matches!(err, FetchError::UnexpectedShape(_)));
}

#[test]
fn unreachable_server_is_a_transport_error() {
    // Grab a free port and release it so nothing is listening there
    let addr = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();

    let err = api_for(format!("http://{addr}"), None)
        .fetch_member_list()
        .unwrap_err();

    assert!(matches!(err, FetchError::Transport(_)));
}

#[test]
fn full_pipeline_renders_view_members() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"[{"id": 1, "login": "John", "avatar_url": "u1"}]"#,
    );

    let mut container = MemberListContainer::new(api_for(base_url, None));
    assert_eq!(container.on_mount().unwrap(), 1);
    server.join().unwrap();

    assert_eq!(
        *container.member_list_vm(),
        vec![ViewMember {
            id: Some(1),
            name: Some("John".to_string()),
            avatar_url: Some("u1".to_string()),
        }]
    );
}
