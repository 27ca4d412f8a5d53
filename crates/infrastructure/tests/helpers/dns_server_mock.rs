#![allow(dead_code)]
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBehavior {
    /// Full answer over UDP.
    Answer,
    /// TC bit and no answers over UDP; the full answer only over TCP.
    Truncate,
    ServFail,
    NxDomain,
    /// Never replies.
    Silent,
    /// Replies with a different transaction ID.
    WrongId,
}

/// Local resolver answering A queries with fixed records on 127.0.0.1.
pub struct MockDnsServer {
    addr: SocketAddr,
    tasks: Vec<JoinHandle<()>>,
}

impl MockDnsServer {
    pub async fn start(
        behavior: MockBehavior,
        answers: Vec<([u8; 4], u32)>,
    ) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let tcp = TcpListener::bind(addr).await?;

        let udp_answers = answers.clone();
        let udp_task = tokio::spawn(async move {
            let mut buf = vec![0u8; 512];
            while let Ok((len, peer)) = socket.recv_from(&mut buf).await {
                let response = match behavior {
                    MockBehavior::Silent => continue,
                    MockBehavior::Truncate => build_response(&buf[..len], 0, true, &[]),
                    MockBehavior::ServFail => build_response(&buf[..len], 2, false, &[]),
                    MockBehavior::NxDomain => build_response(&buf[..len], 3, false, &[]),
                    MockBehavior::Answer => build_response(&buf[..len], 0, false, &udp_answers),
                    MockBehavior::WrongId => {
                        let mut response = build_response(&buf[..len], 0, false, &udp_answers);
                        response[0] ^= 0xff;
                        response
                    }
                };
                let _ = socket.send_to(&response, peer).await;
            }
        });

        let tcp_task = tokio::spawn(async move {
            while let Ok((mut stream, _)) = tcp.accept().await {
                let answers = answers.clone();
                tokio::spawn(async move {
                    let mut len_buf = [0u8; 2];
                    if stream.read_exact(&mut len_buf).await.is_err() {
                        return;
                    }
                    let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                    if stream.read_exact(&mut query).await.is_err() {
                        return;
                    }
                    let response = build_response(&query, 0, false, &answers);
                    let _ = stream
                        .write_all(&(response.len() as u16).to_be_bytes())
                        .await;
                    let _ = stream.write_all(&response).await;
                });
            }
        });

        Ok(Self {
            addr,
            tasks: vec![udp_task, tcp_task],
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

/// Echo the question and append A records pointing at it (offset 12).
fn build_response(query: &[u8], rcode: u8, truncated: bool, answers: &[([u8; 4], u32)]) -> Vec<u8> {
    if query.len() < 12 {
        return vec![];
    }

    let mut response = Vec::with_capacity(512);
    response.extend_from_slice(&query[0..2]);
    response.push(if truncated { 0x83 } else { 0x81 });
    response.push(0x80 | rcode);
    response.extend_from_slice(&query[4..6]);
    response.extend_from_slice(&(answers.len() as u16).to_be_bytes());
    response.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
    response.extend_from_slice(&query[12..]);

    for (ip, ttl) in answers {
        response.extend_from_slice(&[0xc0, 0x0c, 0x00, 0x01, 0x00, 0x01]);
        response.extend_from_slice(&ttl.to_be_bytes());
        response.extend_from_slice(&[0x00, 0x04]);
        response.extend_from_slice(ip);
    }

    response
}
