pub mod database;
pub mod memory;
pub mod metrics;
pub mod records;
pub mod store;

pub use database::MongoDb;
pub use memory::InMemoryStore;
pub use metrics::{get_metrics, init_metrics};
pub use records::{RecordError, RecordService};
pub use store::RecordStore;
