//! Recording HTTP client double and completion capture helpers.

use std::sync::{Arc, Mutex, MutexGuard};

use image_comments::domain::LoadResult;
use image_comments::domain::ports::{
    HttpClient, HttpClientCompletion, HttpClientError, HttpClientResult, HttpResponse,
    LoadCompletion,
};
use url::Url;

struct SpyRequest {
    url: Url,
    completion: Option<HttpClientCompletion>,
}

/// Records every GET and lets tests fire the completions later.
#[derive(Default)]
pub struct HttpClientSpy {
    requests: Mutex<Vec<SpyRequest>>,
}

impl HttpClientSpy {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn requested_urls(&self) -> Vec<Url> {
        self.lock().iter().map(|request| request.url.clone()).collect()
    }

    pub fn complete_with_error(&self, error: HttpClientError, index: usize) {
        self.complete(Err(error), index);
    }

    pub fn complete_with_status(&self, status: u16, body: &[u8], index: usize) {
        self.complete(Ok(HttpResponse::new(status, body.to_vec())), index);
    }

    fn complete(&self, result: HttpClientResult, index: usize) {
        // Release the lock before running the completion so it may issue
        // further requests.
        let completion = {
            let mut requests = self.lock();
            let Some(request) = requests.get_mut(index) else {
                panic!("no request recorded at index {index}");
            };
            match request.completion.take() {
                Some(completion) => completion,
                None => panic!("request {index} was already completed"),
            }
        };
        completion(result);
    }

    fn lock(&self) -> MutexGuard<'_, Vec<SpyRequest>> {
        match self.requests.lock() {
            Ok(guard) => guard,
            Err(_) => panic!("spy mutex poisoned"),
        }
    }
}

impl HttpClient for HttpClientSpy {
    fn get(&self, url: &Url, completion: HttpClientCompletion) {
        self.lock().push(SpyRequest {
            url: url.clone(),
            completion: Some(completion),
        });
    }
}

/// Shared list of results delivered to completions built by [`capture_results`].
pub type CapturedResults = Arc<Mutex<Vec<LoadResult>>>;

/// Completion that appends every result to the returned list.
pub fn capture_results() -> (CapturedResults, LoadCompletion) {
    let captured: CapturedResults = Arc::default();
    let sink = Arc::clone(&captured);
    let completion: LoadCompletion = Box::new(move |result| match sink.lock() {
        Ok(mut results) => results.push(result),
        Err(_) => panic!("results mutex poisoned"),
    });
    (captured, completion)
}

/// Snapshot of the captured results.
pub fn results(captured: &CapturedResults) -> Vec<LoadResult> {
    match captured.lock() {
        Ok(results) => results.clone(),
        Err(_) => panic!("results mutex poisoned"),
    }
}
