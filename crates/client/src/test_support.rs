use crate::transport::{ApiRequest, RawResponse, Transport};
use crate::{ClientError, Result};
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

enum MockReply {
    Body(Vec<u8>),
    Delayed(Duration, Vec<u8>),
    NetworkError(String),
}

/// Queues canned replies and records every request it sees.
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<MockReply>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_json(&self, body: Value) {
        self.push(MockReply::Body(body.to_string().into_bytes()));
    }

    pub fn push_raw(&self, body: &str) {
        self.push(MockReply::Body(body.as_bytes().to_vec()));
    }

    pub fn push_delayed_json(&self, delay: Duration, body: Value) {
        self.push(MockReply::Delayed(delay, body.to_string().into_bytes()));
    }

    pub fn push_network_error(&self, message: &str) {
        self.push(MockReply::NetworkError(message.to_string()));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn push(&self, reply: MockReply) {
        self.replies.lock().unwrap().push_back(reply);
    }
}

#[async_trait::async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse> {
        self.requests.lock().unwrap().push(request);
        let reply = self.replies.lock().unwrap().pop_front();

        let body = match reply {
            None => return Err(ClientError::api("no mock reply queued")),
            Some(MockReply::NetworkError(message)) => return Err(ClientError::api(message)),
            Some(MockReply::Body(body)) => body,
            Some(MockReply::Delayed(delay, body)) => {
                tokio::time::sleep(delay).await;
                body
            }
        };

        Ok(RawResponse { status: 200, body })
    }
}

pub fn athlete_json(id: u64, name: &str, sport: &str) -> Value {
    json!({
        "id": id,
        "full_name": name,
        "email": format!("athlete{}@example.com", id),
        "phone": "555-0100",
        "bio": "Coach",
        "sport_category": sport,
        "experience_level": "advanced",
        "hourly_rate": "80.00",
        "location": "Austin",
        "rating": "4.5",
        "total_reviews": 12,
        "status": "active"
    })
}

pub fn athlete_list_json(athletes: Vec<Value>, current_page: u32, total_pages: u32) -> Value {
    let total = athletes.len();
    json!({
        "success": true,
        "data": {
            "athletes": athletes,
            "pagination": {
                "current_page": current_page,
                "total_pages": total_pages,
                "total_records": total,
                "limit": 12
            }
        }
    })
}
