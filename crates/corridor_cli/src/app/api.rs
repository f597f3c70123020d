//! API client dependent and the endpoint pipeline built on it.

use super::context::{self, AppContext};
use chrono::{DateTime, Utc};
use corridor_core::{has_context, kleisli, HasContext, Reader, Resolver};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// Format used when stamping dispatched messages.
pub const TIME_FORMAT: &str = "%I:%M:%S%.3f";

/// Transport behind [`Api`].
pub trait Connection: Send + Sync {
    fn endpoint(&self) -> String;
    fn get_response(&self, path: String) -> Promise<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ServerConnection;

impl Connection for ServerConnection {
    fn endpoint(&self) -> String {
        "https://server.dot.com".to_string()
    }

    fn get_response(&self, path: String) -> Promise<String> {
        Promise::resolved(path)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MockConnection;

impl Connection for MockConnection {
    fn endpoint(&self) -> String {
        "https://mock.dot.com".to_string()
    }

    fn get_response(&self, path: String) -> Promise<String> {
        Promise::resolved(path)
    }
}

/// A value that has already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Promise<T> {
    value: T,
}

impl<T> Promise<T> {
    pub fn resolved(value: T) -> Self {
        Self { value }
    }

    pub fn flat_map<U, F>(self, f: F) -> Promise<U>
    where
        F: FnOnce(T) -> Promise<U>,
    {
        f(self.value)
    }

    pub fn on_success<F>(self, f: F)
    where
        F: FnOnce(T),
    {
        f(self.value)
    }

    pub fn value(&self) -> &T {
        &self.value
    }
}

/// Ordered, deduplicated log of dispatched messages.
#[derive(Debug, Clone, Default)]
pub struct Store {
    messages: Arc<Mutex<BTreeSet<String>>>,
}

impl Store {
    pub fn dispatch(&self, message: String) {
        tracing::debug!(entry = %message.as_str(), "dispatch");
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(message);
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }
}

/// API client. Its own resolver decides which clock and store it uses;
/// the connection is fixed by the realization that built it.
#[derive(Clone)]
pub struct Api {
    resolver: Resolver<Api, dyn AppContext>,
    connection: Arc<dyn Connection>,
}

has_context!(Api, dyn AppContext);

impl Api {
    pub fn new(connection: Arc<dyn Connection>) -> Self {
        Self {
            resolver: Resolver::default(),
            connection,
        }
    }

    pub fn endpoint(&self) -> String {
        self.connection.endpoint()
    }

    pub fn get_response(&self, path: String) -> Promise<String> {
        self.connection.get_response(path)
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.resolve(&context::now())
    }

    pub fn dispatch(&self, message: String) {
        self.resolve(&context::store()).dispatch(message);
    }
}

impl fmt::Debug for Api {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Api")
            .field("resolver", &self.resolver)
            .field("endpoint", &self.endpoint())
            .finish()
    }
}

/// A pending value computed against an [`Api`].
pub type ApiFuture<O> = Reader<Api, Promise<O>>;

/// Starts a pipeline at the API's base endpoint.
pub fn entrypoint() -> ApiFuture<String> {
    Reader::new(|api: &Api| Promise::resolved(api.endpoint()))
}

/// Lifts a URL derivation into a pipeline step that logs the input it
/// received and requests the derived URL.
pub fn bind(
    url_from: fn(&str) -> String,
) -> impl Fn(Promise<String>) -> ApiFuture<String> + Send + Sync + 'static {
    move |promise: Promise<String>| {
        Reader::new(move |api: &Api| {
            promise.clone().flat_map(|input| {
                api.dispatch(format!("{} - {}", api.now().format(TIME_FORMAT), input));
                api.get_response(url_from(&input))
            })
        })
    }
}

pub fn users_endpoint(base: &str) -> String {
    format!("{}/users", base)
}

pub fn first_user_endpoint(users: &str) -> String {
    format!("{}/0", users)
}

pub fn address_endpoint(user: &str) -> String {
    format!("{}/address", user)
}

/// users → first user → address, composed left to right.
pub fn api_call() -> impl Fn(Promise<String>) -> ApiFuture<String> + Send + Sync + 'static {
    kleisli(
        kleisli(bind(users_endpoint), bind(first_user_endpoint)),
        bind(address_endpoint),
    )
}
