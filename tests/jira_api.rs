mod common;

#[cfg(test)]
mod tests {
    use super::common::local;
    use jlog::api::document::{paragraph, plain_text};
    use jlog::api::jira::{classify, worklog_url, JiraConfig, JiraWorklog, WorklogPayload};
    use jlog::api::timestamp;
    use jlog::libs::error::WorklogError;
    use jlog::libs::worklog::WorklogEntry;
    use reqwest::StatusCode;
    use serde_json::json;

    fn config(endpoint: &str) -> JiraConfig {
        JiraConfig {
            email: "me@example.com".to_string(),
            api_key: "secret-token".to_string(),
            endpoint: endpoint.to_string(),
        }
    }

    #[test]
    fn test_base_url_for_bare_host() {
        assert_eq!(config("example.atlassian.net").base_url(), "https://example.atlassian.net");
        assert_eq!(config(" example.atlassian.net/ ").base_url(), "https://example.atlassian.net");
    }

    #[test]
    fn test_base_url_keeps_scheme() {
        assert_eq!(config("http://localhost:8080/").base_url(), "http://localhost:8080");
        assert_eq!(config("https://example.atlassian.net").base_url(), "https://example.atlassian.net");
    }

    #[test]
    fn test_debug_hides_api_key() {
        let debug = format!("{:?}", config("example.atlassian.net"));
        assert!(debug.contains("me@example.com"));
        assert!(!debug.contains("secret-token"));
    }

    #[test]
    fn test_classify_unauthorized_as_remote_call() {
        let error = classify(StatusCode::UNAUTHORIZED, "");
        assert!(matches!(error, WorklogError::RemoteCall(_)));
        assert!(error.to_string().contains("401"));
    }

    #[test]
    fn test_classify_forbidden_as_remote_call() {
        let error = classify(StatusCode::FORBIDDEN, r#"{"errorMessages":["You do not have permission"]}"#);
        assert!(matches!(error, WorklogError::RemoteCall(_)));
        assert!(error.to_string().contains("403"));
    }

    #[test]
    fn test_classify_server_error_as_remote_call() {
        assert!(matches!(classify(StatusCode::BAD_GATEWAY, "<html>"), WorklogError::RemoteCall(_)));
    }

    #[test]
    fn test_classify_joins_error_messages() {
        let body = json!({ "errorMessages": ["Issue does not exist", "or you lack permission"], "errors": {} }).to_string();

        match classify(StatusCode::NOT_FOUND, &body) {
            WorklogError::RemoteRejection(message) => assert_eq!(message, "Issue does not exist\nor you lack permission"),
            other => panic!("expected a rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_falls_back_to_field_errors() {
        let body = json!({ "errorMessages": [], "errors": { "timeLogged": "You must indicate the time spent working." } }).to_string();

        match classify(StatusCode::BAD_REQUEST, &body) {
            WorklogError::RemoteRejection(message) => assert_eq!(message, "timeLogged: You must indicate the time spent working."),
            other => panic!("expected a rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_falls_back_to_status() {
        match classify(StatusCode::BAD_REQUEST, "not json") {
            WorklogError::RemoteRejection(message) => assert!(message.contains("400"), "{}", message),
            other => panic!("expected a rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_worklog_url() {
        let url = worklog_url("https://example.atlassian.net", " PROJ-1 ").unwrap();
        assert_eq!(url.as_str(), "https://example.atlassian.net/rest/api/3/issue/PROJ-1/worklog");
    }

    #[test]
    fn test_worklog_url_keeps_base_path() {
        let url = worklog_url("http://localhost:8080/jira", "PROJ-1").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/jira/rest/api/3/issue/PROJ-1/worklog");
    }

    #[test]
    fn test_worklog_url_encodes_issue_key() {
        let url = worklog_url("https://example.atlassian.net", "PROJ-1/../x?y#z").unwrap();

        assert_eq!(url.as_str(), "https://example.atlassian.net/rest/api/3/issue/PROJ-1%2F..%2Fx%3Fy%23z/worklog");
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn test_worklog_url_rejects_unusable_endpoint() {
        assert!(matches!(worklog_url("not a url", "PROJ-1"), Err(WorklogError::Config(_))));
    }

    #[test]
    fn test_worklog_payload_json() {
        let started = local(2024, 7, 12, 10, 0);
        let payload = serde_json::to_value(WorklogPayload::new(started, 21600, "I did some work here")).unwrap();

        assert_eq!(payload["timeSpentSeconds"], 21600);
        assert_eq!(payload["started"], timestamp::format(&started));
        assert_eq!(payload["comment"], paragraph("I did some work here"));
        assert_eq!(payload["comment"]["content"][0]["content"][0]["text"], "I did some work here");
    }

    #[test]
    fn test_worklog_response_into_entry() {
        let worklog: JiraWorklog = serde_json::from_value(json!({
            "id": "10001",
            "author": { "accountId": "5b10a2", "displayName": "Jane Doe" },
            "comment": paragraph("Pairing session"),
            "started": "2024-07-12T10:00:00.000+0000",
            "timeSpent": "1d 2h",
            "timeSpentSeconds": 36000
        }))
        .unwrap();

        let entry = WorklogEntry::from(worklog);

        assert_eq!(entry.author, "Jane Doe");
        assert_eq!(entry.time_spent, "1d 2h");
        assert_eq!(entry.time_spent_seconds, 36000);
        assert_eq!(entry.comment, "Pairing session");
        assert_eq!(entry.started, timestamp::parse_local("2024-07-12T10:00:00.000+0000").unwrap());
    }

    #[test]
    fn test_worklog_without_time_spent_text() {
        let worklog: JiraWorklog = serde_json::from_value(json!({
            "started": "2024-07-12T10:00:00.000+0000",
            "timeSpentSeconds": 9000
        }))
        .unwrap();

        let entry = WorklogEntry::from(worklog);

        assert_eq!(entry.time_spent, "2h 30m");
        assert_eq!(entry.author, "");
        assert_eq!(entry.comment, "");
    }

    #[test]
    fn test_plain_text_of_document() {
        let document = json!({
            "type": "doc",
            "version": 1,
            "content": [
                { "type": "paragraph", "content": [{ "type": "text", "text": "Fixed " }, { "type": "text", "text": "the build" }] },
                { "type": "paragraph", "content": [] },
                { "type": "paragraph", "content": [{ "type": "text", "text": "Deployed" }] }
            ]
        });

        assert_eq!(plain_text(&document), "Fixed the build\nDeployed");
    }

    #[test]
    fn test_plain_text_of_string_comment() {
        assert_eq!(plain_text(&json!("legacy comment")), "legacy comment");
    }
}
