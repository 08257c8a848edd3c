//! Scripted resource client for tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use serde_json::Value;

use super::ResourceClient;
use crate::error::ApiError;

/// Answers requests from a script and records everything it was asked.
///
/// Queued answers are consumed in order; the last one repeats.
#[derive(Default)]
pub struct ScriptedClient {
    answers: RefCell<HashMap<String, VecDeque<Result<Value, ApiError>>>>,
    requests: RefCell<Vec<String>>,
    bodies: RefCell<Vec<(String, Value)>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_get(self, path: &str, answer: Result<Value, ApiError>) -> Self {
        self.script("GET", path, answer)
    }

    pub fn on_post(self, path: &str, answer: Result<Value, ApiError>) -> Self {
        self.script("POST", path, answer)
    }

    pub fn on_put(self, path: &str, answer: Result<Value, ApiError>) -> Self {
        self.script("PUT", path, answer)
    }

    fn script(self, method: &str, path: &str, answer: Result<Value, ApiError>) -> Self {
        self.answers
            .borrow_mut()
            .entry(format!("{method} {path}"))
            .or_default()
            .push_back(answer);
        self
    }

    /// Every request so far, as `"METHOD path"`
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    /// Requests that carried a body (POST/PUT), with the body sent
    pub fn sent(&self) -> Vec<(String, Value)> {
        self.bodies.borrow().clone()
    }

    fn answer(&self, key: String) -> Result<Value, ApiError> {
        self.requests.borrow_mut().push(key.clone());
        let mut answers = self.answers.borrow_mut();
        match answers.get_mut(&key) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap_or(Ok(Value::Null)),
            Some(queue) => queue.front().cloned().unwrap_or(Ok(Value::Null)),
            None => Err(ApiError::Network(format!("no scripted answer for {key}"))),
        }
    }
}

#[async_trait(?Send)]
impl ResourceClient for ScriptedClient {
    async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.answer(format!("GET {path}"))
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let key = format!("POST {path}");
        self.bodies.borrow_mut().push((key.clone(), body.clone()));
        self.answer(key)
    }

    async fn put(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let key = format!("PUT {path}");
        self.bodies.borrow_mut().push((key.clone(), body.clone()));
        self.answer(key)
    }
}
