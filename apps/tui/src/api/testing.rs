//! In-process stand-in for the analysis backend.

use axum::Router;

pub async fn spawn_backend(router: Router) -> std::io::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let address = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    Ok(format!("http://{address}"))
}

/// Nothing listens on port 1, so connections are refused immediately.
pub fn unreachable_base_url() -> String {
    "http://127.0.0.1:1".to_string()
}
