use radix_convert::{CliArgs, ConvertServer, ServerSettings};
use std::io::Write;
use std::net::SocketAddr;
use tempfile::NamedTempFile;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

struct RunningServer {
    addr: SocketAddr,
    stop: oneshot::Sender<()>,
    handle: JoinHandle<radix_convert::Result<()>>,
}

impl RunningServer {
    async fn start() -> Self {
        let server = ConvertServer::bind_addr("127.0.0.1:0".parse().unwrap())
            .await
            .unwrap();
        Self::serve(server)
    }

    fn serve(server: ConvertServer) -> Self {
        let addr = server.local_addr().unwrap();
        let (stop, stopped) = oneshot::channel::<()>();
        let handle = tokio::spawn(server.run(async move {
            let _ = stopped.await;
        }));
        Self { addr, stop, handle }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn shutdown(self) {
        self.stop.send(()).unwrap();
        self.handle.await.unwrap().unwrap();
    }
}

async fn fetch(url: &str) -> (u16, String) {
    let response = reqwest::get(url).await.unwrap();
    let status = response.status().as_u16();
    let body = response.text().await.unwrap();
    (status, body)
}

#[tokio::test]
async fn test_end_to_end_conversions() {
    let server = RunningServer::start().await;

    assert_eq!(
        fetch(&server.url("/convert/1010/bin/dec")).await,
        (200, "10".to_string())
    );
    assert_eq!(
        fetch(&server.url("/convert/255/dec/hex")).await,
        (200, "ff".to_string())
    );
    assert_eq!(
        fetch(&server.url("/convert/ff/hex/bin")).await,
        (200, "11111111".to_string())
    );
    assert_eq!(
        fetch(&server.url("/convert/-255/dec/hex")).await,
        (200, "-ff".to_string())
    );

    server.shutdown().await;
}

#[tokio::test]
async fn test_end_to_end_errors() {
    let server = RunningServer::start().await;

    assert_eq!(
        fetch(&server.url("/convert/abc/dec/hex")).await,
        (400, "invalid input value: abc".to_string())
    );
    assert_eq!(
        fetch(&server.url("/convert/10/oct/dec")).await,
        (400, "invalid input format: oct".to_string())
    );
    assert_eq!(
        fetch(&server.url("/convert/10/dec")).await,
        (400, "Invalid URL format".to_string())
    );
    assert_eq!(
        fetch(&server.url("/convert/9223372036854775808/dec/hex")).await,
        (400, "invalid input value: 9223372036854775808".to_string())
    );

    server.shutdown().await;
}

#[tokio::test]
async fn test_health_and_usage_endpoints() {
    let server = RunningServer::start().await;

    assert_eq!(fetch(&server.url("/health")).await, (200, "OK".to_string()));

    let (status, body) = fetch(&server.url("/")).await;
    assert_eq!(status, 200);
    assert!(body.contains("GET /convert/<value>/<input-format>/<output-format>"));
    assert!(body.contains("Example: /convert/1010/bin/dec"));

    server.shutdown().await;
}

#[tokio::test]
async fn test_concurrent_requests() {
    let server = RunningServer::start().await;

    let client = reqwest::Client::new();
    let mut tasks = Vec::new();
    for n in 0..32i64 {
        let client = client.clone();
        let url = server.url(&format!("/convert/{}/dec/bin", n));
        tasks.push(tokio::spawn(async move {
            let body = client.get(url).send().await.unwrap().text().await.unwrap();
            (n, body)
        }));
    }

    for task in tasks {
        let (n, body) = task.await.unwrap();
        assert_eq!(i64::from_str_radix(&body, 2).unwrap(), n);
    }

    server.shutdown().await;
}

#[tokio::test]
async fn test_config_file_settings_bind_and_serve() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[server]\nhost = \"127.0.0.1\"\nport = 0").unwrap();

    let args = CliArgs {
        config: Some(file.path().to_path_buf()),
        host: None,
        port: None,
        log_format: None,
        verbose: false,
    };
    assert!(ServerSettings::load(&args).is_err());

    let settings = ServerSettings::load(&CliArgs {
        port: Some(1),
        ..args
    })
    .unwrap();
    assert_eq!(settings.host, "127.0.0.1");

    let ephemeral = ServerSettings { port: 0, ..settings };
    let server = RunningServer::serve(ConvertServer::bind(&ephemeral).await.unwrap());
    assert_ne!(server.addr.port(), 0);
    assert_eq!(
        fetch(&server.url("/convert/7/dec/bin")).await,
        (200, "111".to_string())
    );

    server.shutdown().await;
}
