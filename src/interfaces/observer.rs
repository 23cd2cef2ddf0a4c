// ============================================================================
// Analysis Observer Interface
// Defines the contract for observing ratio and assessment outcomes
// ============================================================================

use crate::domain::PerformanceVerdict;
use crate::numeric::{RatioError, RatioValue};
use chrono::{DateTime, Utc};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifies one of the five computed ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RatioKind {
    DebtToEquity,
    ReturnOnAssets,
    ReturnOnEquity,
    InterestCoverage,
    ProfitMargin,
}

impl fmt::Display for RatioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatioKind::DebtToEquity => write!(f, "Debt-to-Equity"),
            RatioKind::ReturnOnAssets => write!(f, "Return on Assets"),
            RatioKind::ReturnOnEquity => write!(f, "Return on Equity"),
            RatioKind::InterestCoverage => write!(f, "Interest Coverage"),
            RatioKind::ProfitMargin => write!(f, "Profit Margin"),
        }
    }
}

/// Events emitted during one analysis run
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AnalysisEvent {
    /// A ratio computed successfully
    RatioComputed {
        ratio: RatioKind,
        value: RatioValue,
        timestamp: DateTime<Utc>,
    },

    /// A ratio was undefined; the analysis continues without it
    RatioUndefined {
        ratio: RatioKind,
        error: RatioError,
        timestamp: DateTime<Utc>,
    },

    /// Performance was assessed against the benchmark
    PerformanceAssessed {
        verdict: PerformanceVerdict,
        benchmark: RatioValue,
        timestamp: DateTime<Utc>,
    },
}

/// Observer trait for processing analysis events
/// Implementations can handle logging, metrics, notifications, etc.
pub trait AnalysisObserver: Send + Sync {
    /// Handle a single analysis event
    fn on_event(&self, event: AnalysisEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<AnalysisEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op observer for testing
pub struct NoOpObserver;

impl AnalysisObserver for NoOpObserver {
    fn on_event(&self, _event: AnalysisEvent) {
        // Do nothing
    }
}

/// Logging observer
pub struct LoggingObserver;

impl AnalysisObserver for LoggingObserver {
    fn on_event(&self, event: AnalysisEvent) {
        match &event {
            AnalysisEvent::RatioUndefined { ratio, error, .. } => {
                tracing::warn!("{} undefined: {}", ratio, error);
            },
            _ => tracing::debug!("Analysis event: {:?}", event),
        }
    }
}
