//! Wire-level tests against a local mock of the SendGrid endpoint.

use serde_json::{Value, json};
use thundr_sendgrid::prelude::*;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mailer_for(server: &MockServer) -> SendGridMailer {
    SendGridMailer::new("apiKey").endpoint(format!("{}/v3/mail/send", server.uri()))
}

fn html_message() -> Message {
    Message::builder()
        .from_named("me@mail.com", "Me")
        .to_named("someone@mail.com", "Recipient")
        .to("someone-else@mail.com")
        .subject("Subject")
        .body(StringView::html("<h1>Content</h1>"))
        .build()
        .unwrap()
}

#[tokio::test]
async fn dispatch_performs_exactly_one_authenticated_post() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/mail/send"))
        .and(header("Authorization", "Bearer apiKey"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    mailer_for(&server).dispatch(&html_message()).await.unwrap();
}

#[tokio::test]
async fn dispatch_sends_the_documented_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(202))
        .mount(&server)
        .await;

    let message = Message::builder()
        .from_named("me@mail.com", "Me")
        .reply_to("no-reply@mail.com")
        .to_named("someone@mail.com", "Recipient")
        .to("someone-else@mail.com")
        .cc_named("cc@domain.com", "CC")
        .subject("Subject")
        .body(StringView::html("<h1>Content</h1>"))
        .attach(
            "Image.png",
            FileView::new("image.png", vec![0u8, 1, 2], "image/png"),
            Disposition::Inline,
        )
        .build()
        .unwrap();

    mailer_for(&server).dispatch(&message).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(
        body,
        json!({
            "personalizations": [{
                "to": [
                    { "email": "someone@mail.com", "name": "Recipient" },
                    { "email": "someone-else@mail.com", "name": "someone-else@mail.com" }
                ],
                "cc": [
                    { "email": "cc@domain.com", "name": "CC" }
                ]
            }],
            "from": { "email": "me@mail.com", "name": "Me" },
            "reply_to": { "email": "no-reply@mail.com", "name": "no-reply@mail.com" },
            "subject": "Subject",
            "content": [
                { "type": "text/html", "value": "<h1>Content</h1>" }
            ],
            "attachments": [{
                "content": "AAEC",
                "type": "image/png",
                "filename": "Image.png",
                "disposition": "inline",
                "content_id": "Image.png"
            }]
        })
    );
}

#[tokio::test]
async fn non_success_status_yields_delivery_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Bad Request"))
        .mount(&server)
        .await;

    let err = mailer_for(&server)
        .dispatch(&html_message())
        .await
        .unwrap_err();

    match err {
        MailerError::Delivery { status, body } => {
            assert_eq!(status, 400);
            assert_eq!(body, "Bad Request");
        }
        other => panic!("expected delivery error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_body_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(202))
        .expect(0)
        .mount(&server)
        .await;

    let message = Message::builder()
        .from("me@mail.com")
        .to("someone@mail.com")
        .subject("Subject")
        .build()
        .unwrap();

    let err = mailer_for(&server).dispatch(&message).await.unwrap_err();
    assert!(matches!(err, MailerError::MissingBody));
}

#[tokio::test]
async fn failing_attachment_makes_no_request() {
    struct FailingView;

    impl Renderable for FailingView {
        fn render(&self) -> std::io::Result<RenderedContent> {
            Err(std::io::Error::other("disk on fire"))
        }
    }

    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(202))
        .expect(0)
        .mount(&server)
        .await;

    let message = Message::builder()
        .from("me@mail.com")
        .to("someone@mail.com")
        .subject("Subject")
        .body(StringView::html("<h1>Content</h1>"))
        .attach("report.pdf", FailingView, Disposition::Attachment)
        .build()
        .unwrap();

    let err = mailer_for(&server).dispatch(&message).await.unwrap_err();
    assert!(err.to_string().contains("report.pdf"));
    assert!(err.to_string().contains("disk on fire"));
}

#[tokio::test]
async fn mailer_service_forwards_to_the_transport() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let service = MailerService::new(mailer_for(&server));
    service.send(&html_message()).await.unwrap();
}
