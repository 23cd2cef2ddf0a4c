// ============================================================================
// Interfaces Module
// Observer contracts at the analysis boundary
// ============================================================================

pub mod observer;

pub use observer::{AnalysisEvent, AnalysisObserver, LoggingObserver, NoOpObserver, RatioKind};
