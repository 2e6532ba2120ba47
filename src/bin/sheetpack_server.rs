//! Sheetpack API Server binary
//!
//! HTTP upload/download boundary for the batch renamer.

use clap::Parser;
use sheetpack::api::{run_api_server, server::ApiConfig};

#[derive(Parser, Debug)]
#[command(name = "sheetpack-server")]
#[command(version)]
#[command(about = "Sheetpack API Server - upload spreadsheets, download the renamed zip")]
#[command(long_about = r#"
Sheetpack API Server

Endpoints:
  - POST /api/v1/process  - Multipart upload; responds with the zip archive
  - POST /api/v1/preview  - Multipart upload; responds with the rename report

Additional endpoints:
  - GET  /health          - Health check
  - GET  /version         - Server version info
  - GET  /                - API documentation

Features:
  - CORS enabled for cross-origin requests
  - Graceful shutdown on SIGINT/SIGTERM
  - JSON response format with request IDs
  - Tracing and structured logging

Example usage:
  sheetpack-server                           # Start on localhost:8080
  sheetpack-server --host 0.0.0.0 --port 3000

  curl -X POST http://localhost:8080/api/v1/process \
    -F "files=@q1.xlsx" -F "files=@q2.xlsx" \
    -o processed.zip
"#)]
struct Args {
    /// Host address to bind to (use 0.0.0.0 for all interfaces)
    #[arg(short = 'H', long, default_value = "127.0.0.1", env = "SHEETPACK_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "SHEETPACK_PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = ApiConfig {
        host: args.host,
        port: args.port,
    };

    run_api_server(config).await
}
