//! Outcome records returned by [`PerformanceModel::run_analysis`](crate::PerformanceModel::run_analysis).

use aero_core::units::{ms_to_kmh, n_to_kn};
use serde::Serialize;

/// Either a full performance report or the reason level flight cannot be sustained.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisResult {
    Feasible(PerformanceReport),
    Infeasible(Infeasibility),
}

impl AnalysisResult {
    pub fn is_feasible(&self) -> bool {
        matches!(self, AnalysisResult::Feasible(_))
    }

    /// Human-readable explanation for infeasible configurations.
    pub fn reason(&self) -> Option<String> {
        match self {
            AnalysisResult::Feasible(_) => None,
            AnalysisResult::Infeasible(infeasible) => Some(infeasible.reason()),
        }
    }

    pub fn report(&self) -> Option<&PerformanceReport> {
        match self {
            AnalysisResult::Feasible(report) => Some(report),
            AnalysisResult::Infeasible(_) => None,
        }
    }
}

/// Minimum drag exceeds the installed thrust.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Infeasibility {
    pub min_drag_n: f64,
    pub available_thrust_n: f64,
}

impl Infeasibility {
    pub fn reason(&self) -> String {
        format!(
            "Not feasible. Min thrust needed is {:.2} kN, but only {:.2} kN is available.",
            n_to_kn(self.min_drag_n),
            n_to_kn(self.available_thrust_n)
        )
    }
}

/// Flight envelope and cruise figures of a feasible configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerformanceReport {
    pub stall_speed_m_s: f64,
    pub max_speed_m_s: f64,
    pub min_drag_speed_m_s: f64,
    pub min_drag_n: f64,
    pub cruise: CruiseAnalysis,
}

impl PerformanceReport {
    pub fn stall_speed_kmh(&self) -> f64 {
        ms_to_kmh(self.stall_speed_m_s)
    }

    pub fn max_speed_kmh(&self) -> f64 {
        ms_to_kmh(self.max_speed_m_s)
    }
}

/// Steady level cruise at a fixed fraction of maximum speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CruiseAnalysis {
    pub speed_m_s: f64,
    pub thrust_required_n: f64,
    pub aoa_deg: f64,
    pub lift_coefficient: f64,
    pub fuel_flow_kg_per_hour: f64,
}

impl CruiseAnalysis {
    pub fn speed_kmh(&self) -> f64 {
        ms_to_kmh(self.speed_m_s)
    }

    pub fn thrust_required_kn(&self) -> f64 {
        n_to_kn(self.thrust_required_n)
    }
}
