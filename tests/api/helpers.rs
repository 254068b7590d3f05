use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use once_cell::sync::Lazy;
use reqwest::header::ACCEPT_ENCODING;
use reqwest::{Client, Method, Response};
use tokio::net::TcpListener;

use landing::{configuration, startup, telemetry};

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        telemetry::initialize_subscriber(subscriber);
    } else {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        telemetry::initialize_subscriber(subscriber);
    };
});

pub struct App {
    pub address: SocketAddr,
    pub client: Client,
}

impl App {
    pub async fn new() -> Self {
        Lazy::force(&TRACING);

        // configure listener
        let listener = TcpListener::bind(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 0))
            .await
            .expect("Failed to start a test application");
        let address = listener.local_addr().unwrap();

        // get configuration and build app state
        let configuration =
            configuration::get_configuration().expect("Failed to read configuration");
        let app_state = startup::get_app_state(&configuration);

        // start a server
        tokio::spawn(startup::run(listener, app_state));

        // provide a reqwest client
        let client = Client::new();

        App { address, client }
    }
}

impl App {
    pub fn build_request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("http://{}{}", self.address, path);

        if method == Method::GET {
            self.client.get(url)
        } else {
            panic!("No implementation for this request method {}", method)
        }
    }

    pub async fn get_home(&self) -> Response {
        self.build_request(Method::GET, "/").send().await.unwrap()
    }

    pub async fn get_home_with_gzip(&self) -> Response {
        self.build_request(Method::GET, "/")
            .header(ACCEPT_ENCODING, "gzip")
            .send()
            .await
            .unwrap()
    }

    pub async fn get_health_check(&self) -> Response {
        self.build_request(Method::GET, "/health_check")
            .send()
            .await
            .unwrap()
    }

    pub async fn get_static(&self, file: &str) -> Response {
        self.build_request(Method::GET, &format!("/static/{}", file))
            .send()
            .await
            .unwrap()
    }
}
