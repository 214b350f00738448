use std::time::{Duration, Instant};

/// Run `op` and return its result together with the wall-clock time it took.
pub fn measure<R>(op: impl FnOnce() -> R) -> (R, Duration) {
    let start = Instant::now();
    let result = op();
    (result, start.elapsed())
}

/// Wrap a one-argument operation so every call emits a timing record.
///
/// The wrapper passes its argument through and hands back the result
/// unchanged; the only side effect is an `info!` event of the form
/// `Function <name> took <seconds> seconds`.
pub fn timeit<A, R, F>(name: &'static str, mut op: F) -> impl FnMut(A) -> R
where
    F: FnMut(A) -> R,
{
    move |arg| {
        let (result, elapsed) = measure(|| op(arg));
        tracing::info!("Function {} took {} seconds", name, elapsed.as_secs_f64());
        result
    }
}
