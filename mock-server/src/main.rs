use tokio::net::TcpListener;

/// Standalone hook target for trying `hooker call` by hand.
#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    println!("hook target listening on http://{addr}");
    println!("routes: /  /status/{{code}}  /redirect  /delay/{{ms}}  /hits");
    mock_server::run(listener).await
}
