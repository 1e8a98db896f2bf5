#![allow(dead_code)]

use lookbook_core::{
    CredentialTriple, HttpRequest, HttpResponse, HttpTransport, LookbookConfig, TransportError,
};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

type Handler = Box<dyn Fn(&HttpRequest) -> Result<HttpResponse, TransportError> + Send + Sync>;

/// In-memory transport: records every request and answers through a handler.
pub struct MockTransport {
    handler: Handler,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn with_handler<F>(handler: F) -> Arc<Self>
    where
        F: Fn(&HttpRequest) -> Result<HttpResponse, TransportError> + Send + Sync + 'static,
    {
        Arc::new(Self {
            handler: Box::new(handler),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Replays `responses` in order; extra requests fail as network errors.
    pub fn sequence(responses: Vec<Result<HttpResponse, TransportError>>) -> Arc<Self> {
        let queue = Mutex::new(VecDeque::from(responses));
        Self::with_handler(move |_| {
            queue
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(TransportError::new("no scripted response left")))
        })
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl HttpTransport for MockTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        (self.handler)(request)
    }
}

pub fn ok_json(body: Value) -> Result<HttpResponse, TransportError> {
    Ok(HttpResponse {
        status: 200,
        status_text: "OK".to_string(),
        body: body.to_string(),
    })
}

pub fn status(code: u16, status_text: &str, body: &str) -> Result<HttpResponse, TransportError> {
    Ok(HttpResponse {
        status: code,
        status_text: status_text.to_string(),
        body: body.to_string(),
    })
}

pub fn records(rows: Vec<Value>) -> Value {
    serde_json::json!({ "records": rows })
}

/// Configuration with every table fully credentialed.
pub fn full_config() -> LookbookConfig {
    let mut config = LookbookConfig::default();
    config.mentor = CredentialTriple::new("patMentor", "appM", "Mentors");
    config.founder = CredentialTriple::new("patFounder", "appF", "Founders");
    config.company = CredentialTriple::new("patCompany", "appC", "Companies");
    config.exa.api_key = "exa-key".to_string();
    config
}
