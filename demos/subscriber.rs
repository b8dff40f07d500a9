//! # Example: subscriber
//!
//! Shows the two ways to observe a supervisor: the built-in [`LogWriter`]
//! (feature `logging`) and a custom counting subscriber.
//!
//! The custom subscriber counts:
//! - Run starts
//! - Successful completions
//! - Failures
//!
//! ## Run
//! ```bash
//! cargo run --example subscriber --features logging
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use opvisor::{Event, EventKind, LogWriter, Operation, OperationFn, Subscribe, Supervisor};

struct MetricsSubscriber {
    starts: AtomicU64,
    failures: AtomicU64,
    successes: AtomicU64,
}

impl MetricsSubscriber {
    fn new() -> Self {
        Self {
            starts: AtomicU64::new(0),
            failures: AtomicU64::new(0),
            successes: AtomicU64::new(0),
        }
    }

    fn print_stats(&self) {
        println!();
        println!("Metrics:");
        println!(" ├─► Starts:    {}", self.starts.load(Ordering::Relaxed));
        println!(" ├─► Failures:  {}", self.failures.load(Ordering::Relaxed));
        println!(" └─► Successes: {}", self.successes.load(Ordering::Relaxed));
    }
}

impl<Op: Operation> Subscribe<Op> for MetricsSubscriber {
    fn on_event(&self, event: &Event<'_, Op>) {
        match event.kind {
            EventKind::BeginExecuting => {
                self.starts.fetch_add(1, Ordering::Relaxed);
            }
            EventKind::CompletedSuccessfully => {
                self.successes.fetch_add(1, Ordering::Relaxed);
            }
            EventKind::CompletedUnsuccessfully => {
                self.failures.fetch_add(1, Ordering::Relaxed);
            }
            _ => {}
        }
    }

    fn name(&self) -> &str {
        "metrics"
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let sup = Supervisor::new(OperationFn::new("halve", |n: u32| async move {
        if n % 2 == 0 {
            Ok(n / 2)
        } else {
            Err(format!("{n} is odd"))
        }
    }));

    // 1. Built-in stdout logging: one line per event
    sup.subscribe(LogWriter);
    let _ = sup.run(8).await;
    let _ = sup.run(3).await;

    // 2. Subscribing again replaces the previous listener
    let metrics = Arc::new(MetricsSubscriber::new());
    sup.subscribe(Arc::clone(&metrics));

    for n in [2, 5, 12, 9] {
        let _ = sup.run(n).await;
    }
    metrics.print_stats();
}
