pub mod app;
pub mod app_orchestrator;
pub mod ocr_session;
