//! Backend payload factories for reducing test setup boilerplate.
//!
//! # Usage
//!
//! ```rust
//! use common::factories::{DetailedFactory, SummaryFactory};
//!
//! let page = json!([
//!     SummaryFactory::new().with_name("bulbasaur").json(),
//!     SummaryFactory::new().json(),
//! ]);
//! let record = DetailedFactory::new().with_id(7).json();
//! ```

mod pokemon;

pub use pokemon::{DetailedFactory, SummaryFactory};

use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for generating unique test data.
static FACTORY_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Returns a unique ID for generating test data.
pub fn next_id() -> u64 {
    FACTORY_COUNTER.fetch_add(1, Ordering::SeqCst)
}
