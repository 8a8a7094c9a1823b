use axum::{
    extract::Path,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use status_buttons::{load_config, resolve_config_path, ui, Element, Page, StatusButtonController};
use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

// Demo run: stands up a stub check-in endpoint in place of the real server,
// binds the controller over a sample page and clicks every bound button,
// showing the success path, the rejected path and the transport-failure
// path side by side.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = load_config(&resolve_config_path()).await;

    let addr = spawn_stub().await?;
    info!("stub check-in endpoint listening on http://{addr}");

    let mut page = sample_page(&addr);
    println!("--- page before ---\n{}", ui::render_page(&page));

    let mut controller = StatusButtonController::bind(&page, config);
    info!("bound {} status buttons", controller.records().len());

    for id in 0..controller.records().len() {
        let report = controller.click(&mut page, id).await?;
        match report.alert {
            Some(alert) => warn!("alert: {alert}"),
            None => info!(
                "{:?} -> {}",
                report.kind,
                report.applied_label.unwrap_or_default()
            ),
        }
    }

    println!("--- page after ---\n{}", ui::render_page(&page));
    Ok(())
}

/// Stands in for the real server side. Requests not marked
/// `X-Requested-With: XMLHttpRequest` are turned away; the `broken` action
/// always answers 500.
async fn spawn_stub() -> Result<SocketAddr, std::io::Error> {
    let app = Router::new().route("/checkin/:id/:action", get(checkin_action));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, app).await {
            warn!("stub endpoint stopped: {err}");
        }
    });
    Ok(addr)
}

async fn checkin_action(
    Path((id, action)): Path<(u64, String)>,
    headers: HeaderMap,
) -> Response {
    let requested_with = headers
        .get("X-Requested-With")
        .and_then(|value| value.to_str().ok());
    if requested_with != Some("XMLHttpRequest") {
        return StatusCode::BAD_REQUEST.into_response();
    }
    if action == "broken" {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    info!("checkin {id}: {action}");
    Json(json!({ "status": "success", "message": action })).into_response()
}

/// Sample of the server-rendered guest table: the usual confirm/cancel pair,
/// one button wired to a failing route and one missing its `data-url`.
fn sample_page(addr: &SocketAddr) -> Page {
    let base = format!("http://{addr}");
    let mut page = Page::new();
    page.push_button(status_button(
        "Подтвердить",
        "button-confirm",
        Some(&format!("{base}/checkin/42/confirm")),
        "42",
        "#28a745",
    ));
    page.push_button(status_button(
        "Отменить",
        "button-cancel",
        Some(&format!("{base}/checkin/42/cancel")),
        "42",
        "#dc3545",
    ));
    page.push_button(status_button(
        "Чекин",
        "button-visited",
        Some(&format!("{base}/checkin/43/visit")),
        "43",
        "#28a745",
    ));
    page.push_button(status_button(
        "Подтвердить",
        "button-confirm",
        Some(&format!("{base}/checkin/44/broken")),
        "44",
        "#28a745",
    ));
    page.push_button(status_button("Отменить", "button-cancel", None, "45", "#dc3545"));
    page
}

fn status_button(
    text: &str,
    class: &str,
    url: Option<&str>,
    id: &str,
    background: &str,
) -> Element {
    let mut element = Element::new(text, &[class]);
    if let Some(url) = url {
        element.set_attr("data-url", url);
    }
    element.set_attr("data-id", id);
    element.set_style("background-color", background);
    element.set_style("color", "white");
    element.set_style("border", "none");
    element.set_style("padding", "5px 10px");
    element.set_style("border-radius", "3px");
    element.set_style("font-size", "12px");
    element
}
