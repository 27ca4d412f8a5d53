#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Local WHOIS server that answers every query with a fixed body and closes.
pub struct MockWhoisServer {
    addr: SocketAddr,
    queries: Arc<Mutex<Vec<String>>>,
    task: JoinHandle<()>,
}

impl MockWhoisServer {
    pub async fn start(body: &str) -> Result<Self, std::io::Error> {
        Self::spawn(Some(body.to_string())).await
    }

    /// Accepts connections but never answers.
    pub async fn start_silent() -> Result<Self, std::io::Error> {
        Self::spawn(None).await
    }

    async fn spawn(body: Option<String>) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let queries = Arc::new(Mutex::new(Vec::new()));

        let recorded = queries.clone();
        let task = tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let body = body.clone();
                let recorded = recorded.clone();
                tokio::spawn(async move {
                    let mut reader = BufReader::new(stream);
                    let mut line = String::new();
                    if reader.read_line(&mut line).await.is_err() {
                        return;
                    }
                    recorded.lock().await.push(line);

                    match body {
                        Some(body) => {
                            let _ = reader.get_mut().write_all(body.as_bytes()).await;
                            let _ = reader.get_mut().shutdown().await;
                        }
                        None => {
                            tokio::time::sleep(std::time::Duration::from_secs(30)).await;
                        }
                    }
                });
            }
        });

        Ok(Self {
            addr,
            queries,
            task,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Raw request lines, including the trailing CRLF.
    pub async fn queries(&self) -> Vec<String> {
        self.queries.lock().await.clone()
    }
}

impl Drop for MockWhoisServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}
