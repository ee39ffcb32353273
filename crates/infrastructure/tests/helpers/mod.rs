#![allow(dead_code)]

pub mod static_engine;

pub use static_engine::StaticEngine;
