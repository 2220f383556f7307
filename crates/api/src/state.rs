use std::sync::Arc;

use vitalcheck_core::vitals::VitalsEvaluator;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the config sits behind an `Arc` and the evaluator is
/// a zero-sized `Copy` value.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Vital-sign evaluator injected into the check handler.
    pub evaluator: VitalsEvaluator,
}

impl AppState {
    pub fn new(config: ServerConfig, evaluator: VitalsEvaluator) -> Self {
        Self {
            config: Arc::new(config),
            evaluator,
        }
    }
}
