mod configure_engine;

pub use configure_engine::ConfigureEngineUseCase;
