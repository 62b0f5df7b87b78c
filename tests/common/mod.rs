#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use homework_bot::error::AppError;
use homework_bot::practicum::PracticumClient;
use homework_bot::telegram::Messenger;
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Replays scripted answers in order; once exhausted, repeats the last one.
pub struct ScriptedPracticumClient {
    answers: Mutex<VecDeque<Result<Value, String>>>,
    last: Mutex<Option<Result<Value, String>>>,
    pub requested_from: Mutex<Vec<i64>>,
}

impl ScriptedPracticumClient {
    pub fn new(answers: Vec<Result<Value, String>>) -> Self {
        Self {
            answers: Mutex::new(answers.into()),
            last: Mutex::new(None),
            requested_from: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requested_from.lock().unwrap().len()
    }
}

#[async_trait]
impl PracticumClient for ScriptedPracticumClient {
    async fn get_api_answer(&self, from_date: i64) -> Result<Value, AppError> {
        self.requested_from.lock().unwrap().push(from_date);

        let next = self.answers.lock().unwrap().pop_front();
        let answer = match next {
            Some(answer) => {
                *self.last.lock().unwrap() = Some(answer.clone());
                answer
            }
            None => self
                .last
                .lock()
                .unwrap()
                .clone()
                .unwrap_or_else(|| Err("no scripted answer".to_string())),
        };
        answer.map_err(AppError::Connection)
    }
}

/// Records every text it is asked to send.
#[derive(Default)]
pub struct RecordingMessenger {
    pub sent: Mutex<Vec<String>>,
    pub fail: bool,
}

impl RecordingMessenger {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_text(&self, text: &str) -> Result<(), AppError> {
        self.sent.lock().unwrap().push(text.to_string());
        if self.fail {
            return Err(AppError::Delivery("chat not found".to_string()));
        }
        Ok(())
    }
}

/// Serves exactly one canned HTTP response on a local port.
/// The handle resolves to the raw request text that was received.
pub async fn serve_once(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
    let response = format!(
        "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );
    serve_raw_once(response).await
}

/// Like [`serve_once`], but writes `response` verbatim.
pub async fn serve_raw_once(response: String) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        request
    });

    (format!("http://{}", addr), handle)
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let Some(head_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let head = String::from_utf8_lossy(&buf[..head_end]).to_lowercase();
        let content_length = head
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if buf.len() >= head_end + 4 + content_length {
            break;
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}
