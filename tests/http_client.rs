//! The HTTP client against a scripted local server.
//!
//! Each test binds a listener, answers exactly one request with a canned
//! response and records what the client sent.

use std::{io, time::Duration};

use serde_json::{Value, json};
use testresult::TestResult;
use tokio::{
    io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader},
    net::{TcpListener, TcpStream},
    task::JoinHandle,
};

use promotions_admin::prelude::*;

/// One request as it arrived at the server.
#[derive(Debug)]
struct Recorded {
    method: String,
    target: String,
    body: String,
}

impl Recorded {
    fn json(&self) -> serde_json::Result<Value> {
        serde_json::from_str(&self.body)
    }
}

/// Serve a single request with `status` and `body`.
async fn scripted(
    status: &'static str,
    body: &'static str,
) -> io::Result<(String, JoinHandle<io::Result<Recorded>>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let base_url = format!("http://{}", listener.local_addr()?);

    let server = tokio::spawn(async move {
        let (stream, _) = listener.accept().await?;

        answer(stream, status, body).await
    });

    Ok((base_url, server))
}

async fn answer(mut stream: TcpStream, status: &str, body: &str) -> io::Result<Recorded> {
    let (read, mut write) = stream.split();
    let mut reader = BufReader::new(read);

    let mut request_line = String::new();

    reader.read_line(&mut request_line).await?;

    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let target = parts.next().unwrap_or_default().to_string();

    let mut content_length = 0;

    loop {
        let mut line = String::new();

        if reader.read_line(&mut line).await? == 0 {
            break;
        }

        let line = line.trim_end();

        if line.is_empty() {
            break;
        }

        if let Some((name, value)) = line.split_once(':')
            && name.eq_ignore_ascii_case("content-length")
        {
            content_length = value.trim().parse().unwrap_or_default();
        }
    }

    let mut request_body = vec![0; content_length];

    reader.read_exact(&mut request_body).await?;

    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    write.write_all(response.as_bytes()).await?;
    write.shutdown().await?;

    Ok(Recorded {
        method,
        target,
        body: String::from_utf8_lossy(&request_body).into_owned(),
    })
}

fn client(base_url: String) -> Result<HttpPromotionsClient, ClientError> {
    HttpPromotionsClient::new(&ClientConfig {
        base_url,
        timeout: Some(Duration::from_secs(5)),
    })
}

#[tokio::test]
async fn create_posts_payload_to_collection() -> TestResult {
    let (base_url, server) = scripted(
        "201 Created",
        r#"{"id": 7, "name": "BOGO", "category": "E", "available": true}"#,
    )
    .await?;

    let mut controller = PromotionsController::new(client(base_url)?, SchemaVersion::V1);

    *controller.form_mut() = FormState::new()
        .with(FormField::Name, "BOGO")
        .with(FormField::Category, "E")
        .with(FormField::Available, "true");

    controller.create().await?;

    let request = server.await??;

    assert_eq!(request.method, "POST");
    assert_eq!(request.target, "/promotions");
    assert_eq!(
        request.json()?,
        json!({"name": "BOGO", "category": "E", "available": true})
    );
    assert_eq!(controller.form().get(FormField::Id), "7");
    assert_eq!(controller.flash(), Some(SUCCESS_MESSAGE));

    Ok(())
}

#[tokio::test]
async fn update_puts_v2_payload_to_member() -> TestResult {
    let (base_url, server) = scripted(
        "200 OK",
        r#"{"id": 5, "promo_name": "Summer Sale", "goods_name": "Sunscreen", "price": "10.50", "discount": "20", "category": "Health", "available": false}"#,
    )
    .await?;

    let mut controller = PromotionsController::new(client(base_url)?, SchemaVersion::V2);

    *controller.form_mut() = FormState::new()
        .with(FormField::Id, "5")
        .with(FormField::Name, "Summer Sale")
        .with(FormField::GoodsName, "Sunscreen")
        .with(FormField::Price, "10.50")
        .with(FormField::Discount, "20")
        .with(FormField::Category, "Health")
        .with(FormField::Available, "False");

    controller.update().await?;

    let request = server.await??;

    assert_eq!(request.method, "PUT");
    assert_eq!(request.target, "/promotions/5");
    assert_eq!(
        request.json()?,
        json!({
            "promo_name": "Summer Sale",
            "goods_name": "Sunscreen",
            "price": "10.50",
            "discount": "20",
            "category": "Health",
            "available": false,
        })
    );
    assert_eq!(controller.form().get(FormField::Available), "False");

    Ok(())
}

#[tokio::test]
async fn retrieve_not_found_flashes_server_message() -> TestResult {
    let (base_url, server) = scripted(
        "404 Not Found",
        r#"{"error": "Not Found", "message": "Promotion 999 not found"}"#,
    )
    .await?;

    let mut controller = PromotionsController::new(client(base_url)?, SchemaVersion::V1);

    *controller.form_mut() = FormState::new()
        .with(FormField::Id, "999")
        .with(FormField::Name, "stale");

    assert!(controller.retrieve().await.is_err());

    let request = server.await??;

    assert_eq!(request.method, "GET");
    assert_eq!(request.target, "/promotions/999");
    assert!(request.body.is_empty());
    assert!(controller.form().is_empty());
    assert_eq!(controller.flash(), Some("Promotion 999 not found"));

    Ok(())
}

#[tokio::test]
async fn delete_with_empty_body_reports_requested_id() -> TestResult {
    let (base_url, server) = scripted("204 No Content", "").await?;

    let mut controller = PromotionsController::new(client(base_url)?, SchemaVersion::V1);

    *controller.form_mut() = FormState::new()
        .with(FormField::Id, "7")
        .with(FormField::Name, "BOGO");

    controller.delete().await?;

    let request = server.await??;

    assert_eq!(request.method, "DELETE");
    assert_eq!(request.target, "/promotions/7");
    assert!(controller.form().is_empty());
    assert_eq!(
        controller.flash(),
        Some("Promotion with ID [7] has been Deleted!")
    );

    Ok(())
}

#[tokio::test]
async fn failed_delete_hides_server_message() -> TestResult {
    let (base_url, server) = scripted(
        "500 Internal Server Error",
        r#"{"message": "database unavailable"}"#,
    )
    .await?;

    let mut controller = PromotionsController::new(client(base_url)?, SchemaVersion::V1);

    controller.form_mut().set(FormField::Id, "7");

    let result = controller.delete().await;

    let request = server.await??;

    assert_eq!(request.method, "DELETE");
    assert!(matches!(result, Err(ClientError::Unspecified)));
    assert_eq!(controller.form().get(FormField::Id), "7");
    assert_eq!(controller.flash(), Some("Server error!"));

    Ok(())
}

#[tokio::test]
async fn search_without_criteria_sends_no_query() -> TestResult {
    let (base_url, server) = scripted("200 OK", "[]").await?;

    let mut controller = PromotionsController::new(client(base_url)?, SchemaVersion::V1);

    controller.search().await?;

    let request = server.await??;

    assert_eq!(request.method, "GET");
    assert_eq!(request.target, "/promotions");
    assert!(controller.results().is_some_and(ResultsTable::is_empty));

    Ok(())
}

#[tokio::test]
async fn search_sends_criteria_as_query() -> TestResult {
    let (base_url, server) = scripted(
        "200 OK",
        r#"[{"id": 3, "name": "Bread Deal", "category": "Food", "available": true}]"#,
    )
    .await?;

    let mut controller = PromotionsController::new(client(base_url)?, SchemaVersion::V2);

    *controller.form_mut() = FormState::new()
        .with(FormField::Category, "Food")
        .with(FormField::Available, "True");

    controller.search().await?;

    let request = server.await??;

    assert_eq!(request.method, "GET");
    assert_eq!(request.target, "/promotions?category=Food&availability=True");
    assert_eq!(controller.results().map(ResultsTable::len), Some(1));

    Ok(())
}

#[tokio::test]
async fn health_reports_service_status() -> TestResult {
    let (base_url, server) = scripted("200 OK", r#"{"status": "OK"}"#).await?;

    let status = client(base_url)?.health().await?;

    let request = server.await??;

    assert_eq!(request.method, "GET");
    assert_eq!(request.target, "/health");
    assert_eq!(status, "OK");

    Ok(())
}
