#![allow(dead_code)]
#![allow(unused_imports)]

pub mod mock_engine;
pub mod rdata;

pub use mock_engine::{ConfigCall, MockEngine};
pub use rdata::RawAnswerBuilder;
