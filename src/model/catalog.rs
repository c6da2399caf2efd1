//! Content catalog - static product content
//!
//! Everything on the page is read from these tables. Nothing here is
//! mutated at runtime.

use log::warn;
use serde::{Deserialize, Serialize};

/// Key into the service catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKey {
    #[default]
    Analysis,
    Optimization,
    Reporting,
}

impl ServiceKey {
    pub fn all() -> [ServiceKey; 3] {
        [
            ServiceKey::Analysis,
            ServiceKey::Optimization,
            ServiceKey::Reporting,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            ServiceKey::Analysis => "analysis",
            ServiceKey::Optimization => "optimization",
            ServiceKey::Reporting => "reporting",
        }
    }

    pub fn from_key(key: &str) -> Option<ServiceKey> {
        Self::all()
            .into_iter()
            .find(|k| k.key().eq_ignore_ascii_case(key.trim()))
    }

    /// Resolve a textual key, falling back to the default tab on a miss
    pub fn from_key_or_default(key: &str) -> ServiceKey {
        Self::from_key(key).unwrap_or_else(|| {
            warn!("unknown service key '{}', falling back to '{}'", key, ServiceKey::default().key());
            ServiceKey::default()
        })
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|k| k == self).unwrap_or(0)
    }

    pub fn next(&self) -> ServiceKey {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn previous(&self) -> ServiceKey {
        let all = Self::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

/// Glyph shown next to a service or pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Microscope,
    Ruler,
    GitBranch,
    FileText,
    Brain,
    AlertTriangle,
    CheckCircle,
    Activity,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Microscope => "🔬",
            Icon::Ruler => "📐",
            Icon::GitBranch => "⎇",
            Icon::FileText => "📄",
            Icon::Brain => "🧠",
            Icon::AlertTriangle => "⚠",
            Icon::CheckCircle => "✓",
            Icon::Activity => "⌁",
        }
    }
}

/// Direction a metric trend is rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Up,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub trend: &'static str,
}

impl Metric {
    /// Trends containing a '+' are improvements, everything else is neutral
    pub fn trend_direction(&self) -> TrendDirection {
        if self.trend.contains('+') {
            TrendDirection::Up
        } else {
            TrendDirection::Neutral
        }
    }

    /// Leading number of the value, used to size dashboard bars
    ///
    /// `"99.99%"` -> 99.99, `"<10ms"` -> 10.0, `"1M+/sec"` -> 1.0
    pub fn numeric_value(&self) -> f64 {
        let digits: String = self
            .value
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        digits.parse().unwrap_or(0.0)
    }
}

#[derive(Debug, PartialEq)]
pub struct ServiceEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub metrics: &'static [Metric],
    pub icon: Icon,
}

/// Model shown in the decorative "3D" carousel
#[derive(Debug, PartialEq)]
pub struct ModelEntry {
    pub name: &'static str,
    pub accuracy: f64,
    pub data_points: &'static str,
}

/// Card shown in the live analysis demo
#[derive(Debug, PartialEq)]
pub struct PipelineStage {
    pub label: &'static str,
    pub icon: Icon,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Services
// ═══════════════════════════════════════════════════════════════════════════════

static ANALYSIS: ServiceEntry = ServiceEntry {
    title: "Enterprise Analysis",
    description: "Next-gen metrology analysis with quantum-enhanced precision",
    features: &[
        "Neural network anomaly detection (99.99%)",
        "Real-time uncertainty quantification",
        "Multi-sensor data fusion",
        "Predictive drift compensation",
        "Automated report generation",
        "Customizable dashboards",
    ],
    metrics: &[
        Metric { label: "Accuracy", value: "99.99%", trend: "+0.1%" },
        Metric { label: "Speed", value: "<10ms", trend: "-5ms" },
        Metric { label: "Uptime", value: "99.999%", trend: "+0.01%" },
        Metric { label: "Data Points", value: "1M+/sec", trend: "+100K" },
    ],
    icon: Icon::Microscope,
};

static OPTIMIZATION: ServiceEntry = ServiceEntry {
    title: "Smart Optimization",
    description: "Self-learning calibration system with digital twin",
    features: &[
        "Autonomous calibration optimization",
        "Environmental compensation AI",
        "Digital twin synchronization",
        "Real-time process adaptation",
        "Energy efficiency tracking",
        "Predictive maintenance alerts",
    ],
    metrics: &[
        Metric { label: "Efficiency", value: "95%", trend: "+2.5%" },
        Metric { label: "Precision", value: "99.9%", trend: "+0.5%" },
        Metric { label: "ROI", value: "35%", trend: "+5%" },
        Metric { label: "Downtime", value: "<1%", trend: "-0.2%" },
    ],
    icon: Icon::Ruler,
};

static REPORTING: ServiceEntry = ServiceEntry {
    title: "Advanced Analytics",
    description: "Enterprise reporting with predictive insights",
    features: &[
        "Regulatory compliance automation",
        "Predictive quality analytics",
        "Interactive 3D visualizations",
        "Blockchain audit trail",
        "Real-time collaboration",
        "Customizable templates",
    ],
    metrics: &[
        Metric { label: "Compliance", value: "100%", trend: "Stable" },
        Metric { label: "Accuracy", value: "95%", trend: "+2%" },
        Metric { label: "Coverage", value: "100%", trend: "Stable" },
        Metric { label: "User Satisfaction", value: "98%", trend: "+3%" },
    ],
    icon: Icon::GitBranch,
};

/// Look up the catalog entry for a tab
pub fn service(key: ServiceKey) -> &'static ServiceEntry {
    match key {
        ServiceKey::Analysis => &ANALYSIS,
        ServiceKey::Optimization => &OPTIMIZATION,
        ServiceKey::Reporting => &REPORTING,
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Showcase & Demo
// ═══════════════════════════════════════════════════════════════════════════════

pub static MODELS: [ModelEntry; 3] = [
    ModelEntry {
        name: "Neural Precision v4",
        accuracy: 99.9,
        data_points: "1.2M points",
    },
    ModelEntry {
        name: "Thermal Drift Compensator",
        accuracy: 99.7,
        data_points: "850K points",
    },
    ModelEntry {
        name: "Surface Topology Mapper",
        accuracy: 99.5,
        data_points: "2.4M points",
    },
];

pub static PIPELINE_STAGES: [PipelineStage; 4] = [
    PipelineStage { label: "Import", icon: Icon::FileText },
    PipelineStage { label: "Process", icon: Icon::Brain },
    PipelineStage { label: "Analyze", icon: Icon::AlertTriangle },
    PipelineStage { label: "Report", icon: Icon::CheckCircle },
];

/// Index of the stage that pulses while an analysis is running
pub const ACTIVE_STAGE_INDEX: usize = 1;
