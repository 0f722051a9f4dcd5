mod fixtures;
pub mod tracing;

pub use fixtures::{LogFixture, sample_records};
pub use tracing::{CapturedEvent, init_test_tracing};
