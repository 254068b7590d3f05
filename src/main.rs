use tokio::net::TcpListener;

use landing::configuration::get_configuration;
use landing::startup::{get_app_state, run};
use landing::telemetry::{get_subscriber, initialize_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("landing".to_string(), "info".to_string(), std::io::stdout);
    initialize_subscriber(subscriber);

    let configuration = get_configuration().expect("Failed to read configuration");
    let listener = TcpListener::bind(format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    ))
    .await
    .expect("Failed to bind a port for application");

    let app_state = get_app_state(&configuration);

    run(listener, app_state).await
}
