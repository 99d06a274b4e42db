#[cfg(test)]
pub mod mock {
    use crate::api::client::{register_mock, MockResponse, TestResponder};
    use crate::api::ApiError;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    pub struct MockServer {
        inner: Arc<Mutex<Inner>>,
        base: String,
    }

    struct Inner {
        routes: Vec<Route>,
        received: Vec<ReceivedRequest>,
    }

    #[derive(Clone)]
    struct Route {
        path: String,
        response: MockResponse,
    }

    #[derive(Clone, Debug)]
    pub struct ReceivedRequest {
        pub path: String,
        pub body: Option<Value>,
    }

    impl MockServer {
        pub async fn start_async() -> Self {
            Self::start()
        }

        pub fn start() -> Self {
            static NEXT_ID: AtomicUsize = AtomicUsize::new(1);
            let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
            Self {
                inner: Arc::new(Mutex::new(Inner {
                    routes: Vec::new(),
                    received: Vec::new(),
                })),
                base: format!("http://mock-{}", id),
            }
        }

        pub fn url(&self, path: &str) -> String {
            let base_url = format!("{}{}", self.base, path);
            register_mock(base_url.clone(), Arc::new(self.clone()));
            base_url
        }

        pub fn mock<F>(&self, f: F)
        where
            F: FnOnce(&mut When, &mut Then),
        {
            let mut when = When::default();
            let mut then = Then::default();
            f(&mut when, &mut then);

            let path = when.path.clone().expect("mock requires path");
            let response = MockResponse::json(
                then.status.unwrap_or(200),
                then.body
                    .unwrap_or_else(|| serde_json::json!({ "status": "success" })),
            );

            let mut inner = self.inner.lock().expect("mock lock");
            inner.routes.push(Route { path, response });
        }

        /// Shorthand for a 200 envelope with `status: "success"`.
        pub fn success(&self, path: &str, data: Value) {
            self.mock(|when, then| {
                when.path(path);
                then.status(200)
                    .json_body(serde_json::json!({ "status": "success", "data": data }));
            });
        }

        pub fn received(&self, path: &str) -> Vec<ReceivedRequest> {
            let inner = self.inner.lock().expect("mock lock");
            inner
                .received
                .iter()
                .filter(|req| req.path == path)
                .cloned()
                .collect()
        }

        pub fn hits(&self, path: &str) -> usize {
            self.received(path).len()
        }
    }

    impl TestResponder for MockServer {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError> {
            if request.method() != reqwest::Method::POST {
                return Err(ApiError::unknown(format!(
                    "Unexpected method {}",
                    request.method()
                )));
            }
            let path = request.url().path().to_string();
            let body = request
                .body()
                .and_then(|body| body.as_bytes())
                .and_then(|bytes| serde_json::from_slice::<Value>(bytes).ok());
            let mut inner = self.inner.lock().map_err(|_| ApiError::unknown("mock lock"))?;
            inner.received.push(ReceivedRequest {
                path: path.clone(),
                body,
            });

            let route = inner
                .routes
                .iter()
                .rev()
                .find(|route| route.path == path)
                .cloned();

            route
                .map(|route| route.response)
                .ok_or_else(|| ApiError::unknown(format!("No mock for POST {}", path)))
        }
    }

    #[derive(Default)]
    pub struct When {
        path: Option<String>,
    }

    impl When {
        pub fn path(&mut self, path: &str) -> &mut Self {
            self.path = Some(path.to_string());
            self
        }
    }

    #[derive(Default)]
    pub struct Then {
        status: Option<u16>,
        body: Option<Value>,
    }

    impl Then {
        pub fn status(&mut self, status: u16) -> &mut Self {
            self.status = Some(status);
            self
        }

        pub fn json_body(&mut self, body: Value) -> &mut Self {
            self.body = Some(body);
            self
        }
    }
}
