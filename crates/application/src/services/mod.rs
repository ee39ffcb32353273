mod answer_builder;
mod query_names;
mod record_projector;
pub mod srv_ordering;

pub use answer_builder::AnswerBuilder;
pub use query_names::QueryNames;
pub use record_projector::RecordProjector;
pub use srv_ordering::order_srv_records;
