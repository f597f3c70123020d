//! Computations that read from an environment.
//!
//! A [`Reader<E, A>`] describes how to produce an `A` once an `E` is
//! available. Dependents use it to build a pipeline against a resolved
//! dependency (an API client, say) and run it later, with whichever
//! realization the dependent was bound to.

use std::sync::Arc;

/// A computation producing `A` from a borrowed environment `E`.
pub struct Reader<E, A> {
    run: Arc<dyn Fn(&E) -> A + Send + Sync>,
}

impl<E: 'static, A: 'static> Reader<E, A> {
    /// Wraps `f` as a reader.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&E) -> A + Send + Sync + 'static,
    {
        Self { run: Arc::new(f) }
    }

    /// A reader that ignores its environment and yields `value`.
    pub fn unit(value: A) -> Self
    where
        A: Clone + Send + Sync,
    {
        Self::new(move |_| value.clone())
    }

    /// Runs the computation against `env`.
    pub fn run(&self, env: &E) -> A {
        (self.run)(env)
    }

    /// Transforms the produced value.
    pub fn map<B, F>(self, f: F) -> Reader<E, B>
    where
        B: 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        Reader::new(move |env| f(self.run(env)))
    }

    /// Chains a reader computed from the produced value, running it
    /// against the same environment.
    pub fn flat_map<B, F>(self, f: F) -> Reader<E, B>
    where
        B: 'static,
        F: Fn(A) -> Reader<E, B> + Send + Sync + 'static,
    {
        Reader::new(move |env| f(self.run(env)).run(env))
    }
}

impl<E: Clone + 'static> Reader<E, E> {
    /// A reader that yields (a clone of) its environment.
    pub fn ask() -> Self {
        Self::new(E::clone)
    }
}

impl<E, A> Clone for Reader<E, A> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

/// Left-to-right composition of two reader-producing steps.
///
/// `kleisli(f, g)(a)` runs `f(a)`, feeds its result to `g`, and runs both
/// against one environment.
pub fn kleisli<E, A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> Reader<E, C> + Send + Sync
where
    E: 'static,
    B: 'static,
    C: 'static,
    F: Fn(A) -> Reader<E, B> + Send + Sync + 'static,
    G: Fn(B) -> Reader<E, C> + Send + Sync + 'static,
{
    let second = Arc::new(second);
    move |a| {
        let second = Arc::clone(&second);
        first(a).flat_map(move |b| (*second)(b))
    }
}
