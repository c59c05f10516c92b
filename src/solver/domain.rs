//! Axis-aligned simulation domains and discretization selectors
//!
//! # Design Philosophy
//!
//! The driver never interprets the discretization selectors. They are carried
//! from the sweep configuration to the solver collaborator unchanged, so a
//! solver with more kernels or domain kinds needs no change here beyond a new
//! `DomainType` variant.

use nalgebra::Vector3;
use std::fmt;

// =================================================================================================
// Domain type
// =================================================================================================

/// Boundary topology of the simulation domain
///
/// The short codes match the identifiers FCM solvers conventionally accept
/// (`"TP"`, `"DP"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DomainType {
    /// Periodic along all three axes
    #[default]
    TriplyPeriodic,

    /// Periodic in x and y, unbounded in z
    DoublyPeriodic,

    /// Periodic in x and y, no-slip wall at the bottom of z
    DoublyPeriodicBottomWall,

    /// Periodic in x and y, no-slip walls at both ends of z
    DoublyPeriodicSlitChannel,
}

impl DomainType {
    /// Short code passed to the solver
    pub fn code(&self) -> &'static str {
        match self {
            DomainType::TriplyPeriodic => "TP",
            DomainType::DoublyPeriodic => "DP",
            DomainType::DoublyPeriodicBottomWall => "DPBW",
            DomainType::DoublyPeriodicSlitChannel => "DPSC",
        }
    }
}

impl fmt::Display for DomainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// =================================================================================================
// Discretization selectors
// =================================================================================================

/// Opaque selectors forwarded to the solver at initialization
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Discretization {
    /// Kernel family index (solver specific)
    pub kernel_type: u32,

    /// Boundary topology
    pub domain_type: DomainType,

    /// Tabulated option index (solver specific)
    pub option_index: u32,

    /// Use the solver's reference (non-optimized) path
    pub reference: bool,

    /// Use the regularized kernel variant
    pub use_regularized_kernel: bool,
}

impl Discretization {
    /// Triply periodic domain with all other selectors at their defaults
    pub fn triply_periodic() -> Self {
        Self::default()
    }

    /// Builder pattern: set domain type
    pub fn domain_type(mut self, domain_type: DomainType) -> Self {
        self.domain_type = domain_type;
        self
    }

    /// Builder pattern: set kernel type
    pub fn kernel_type(mut self, kernel_type: u32) -> Self {
        self.kernel_type = kernel_type;
        self
    }
}

// =================================================================================================
// Domain bounds
// =================================================================================================

/// Axis-aligned box `[min, max]` on each axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainBounds {
    /// Lower corner (xmin, ymin, zmin)
    pub min: Vector3<f64>,

    /// Upper corner (xmax, ymax, zmax)
    pub max: Vector3<f64>,
}

impl DomainBounds {
    /// Create bounds from explicit corners
    pub fn new(min: Vector3<f64>, max: Vector3<f64>) -> Self {
        Self { min, max }
    }

    /// Cubic domain `[0, edge]³`
    pub fn cubic(edge: f64) -> Self {
        Self::new(Vector3::zeros(), Vector3::repeat(edge))
    }

    /// Edge length along each axis
    pub fn extents(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Smallest edge length
    pub fn min_extent(&self) -> f64 {
        self.extents().min()
    }

    /// True when all three edges have the same length
    pub fn is_cubic(&self) -> bool {
        let e = self.extents();
        e.x == e.y && e.y == e.z
    }

    /// Bounds flattened as `[xmin, xmax, ymin, ymax, zmin, zmax]`
    pub fn as_limits(&self) -> [f64; 6] {
        [self.min.x, self.max.x, self.min.y, self.max.y, self.min.z, self.max.z]
    }

    /// Validate that every corner is finite and every extent positive
    pub fn validate(&self) -> Result<(), String> {
        if self.min.iter().chain(self.max.iter()).any(|v| !v.is_finite()) {
            return Err("Domain bounds must be finite".to_string());
        }
        for (axis, extent) in ["x", "y", "z"].iter().zip(self.extents().iter()) {
            if *extent <= 0.0 {
                return Err(format!("Domain extent along {} must be positive, got {}", axis, extent));
            }
        }
        Ok(())
    }
}

impl fmt::Display for DomainBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [xmin, xmax, ymin, ymax, zmin, zmax] = self.as_limits();
        write!(f, "[{}, {}] x [{}, {}] x [{}, {}]", xmin, xmax, ymin, ymax, zmin, zmax)
    }
}

// ================================================================================================
// Tests
// ================================================================================================
