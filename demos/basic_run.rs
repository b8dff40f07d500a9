//! # Example: basic_run
//!
//! Minimal example of supervising a single fallible async operation.
//!
//! Demonstrates how to:
//! - Define the operation with [`OperationFn`].
//! - Run it through [`Supervisor::run`] and keep the original settlement.
//! - Read the observable `state` / `message` / `result` fields afterwards.
//!
//! ## Run
//! ```bash
//! cargo run --example basic_run
//! ```

use std::time::Duration;

use opvisor::{OperationFn, Supervisor};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // 1. Define a fallible async operation
    let sup = Supervisor::new(OperationFn::new("lookup", |id: u32| async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        match id {
            0 => Err("no such record".to_string()),
            n => Ok(format!("record #{n}")),
        }
    }));

    // 2. A successful run: the caller gets the value, the supervisor the bookkeeping
    let found = sup.run(7).await;
    println!("[run] returned {found:?}");
    println!("[run] state={} message={:?}", sup.state(), sup.message());

    // 3. A failed run: the failure comes back unchanged, the message is parsed
    let missing = sup.run(0).await;
    println!("[run] returned {missing:?}");
    println!("[run] state={} message={:?}", sup.state(), sup.message());
    println!("[run] result={:?}", sup.result());

    // 4. Reset for the next consumer
    sup.reset_to_ready();
    println!("[reset] state={} has_result={}", sup.state(), sup.has_result());
}
