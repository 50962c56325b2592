use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use trip_client::app::{App, Event};
use trip_client::backend::BackendClient;
use trip_client::command::parse_command;
use trip_client::config::ClientConfig;
use trip_client::geocode::NominatimClient;
use trip_client::view::ConsoleView;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ClientConfig::from_env();
    info!(backend = %config.backend.base_url, geocoder = %config.geocoder.base_url, "starting trip client");

    let backend =
        BackendClient::new(config.backend.clone()).expect("Failed to create backend client");
    let places = NominatimClient::new(&config.geocoder).expect("Failed to create geocoder client");

    let app = App::new(&config, backend, places, ConsoleView::new());

    // Read commands from stdin; end of input stops the client.
    let tx = app.sender();
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) if line.trim().is_empty() => continue,
                Ok(Some(line)) => match parse_command(&line) {
                    Ok(event) => {
                        if tx.send(event).is_err() {
                            break;
                        }
                    }
                    Err(e) => warn!(error = %e, "ignoring command"),
                },
                Ok(None) => break,
                Err(e) => {
                    warn!(error = %e, "failed to read stdin");
                    break;
                }
            }
        }
        let _ = tx.send(Event::Shutdown);
    });

    app.run().await;
}
