//! Physical properties and closed-form hydrodynamics
//!
//! This module holds the physics a sweep needs without solving any flow:
//! fluid/particle properties, the Stokes drag normalization applied to raw
//! velocity samples, and Hasimoto's periodic-lattice correction used as a
//! reference curve.
//!
//! # Architecture
//!
//! Physics is **separate from the solver collaborator**:
//! - This module provides the **closed-form relations** (what to expect)
//! - The solver provides the **mobility operator** (what is measured)
//!
//! # Example
//!
//! ```rust
//! use fcm_mobility::physics::{FluidProperties, hasimoto_correction};
//!
//! let fluid = FluidProperties::default();
//! let expected = fluid.stokes_mobility() * hasimoto_correction(1.0, 60.0);
//! assert!(expected < fluid.stokes_mobility());
//! ```

pub mod hydrodynamics;

pub use hydrodynamics::{
    FluidProperties,
    DEFAULT_VISCOSITY,
    HASIMOTO_LINEAR,
    HASIMOTO_SIXTH,
    hasimoto_correction,
    hasimoto_mobility,
    stokes_drag_scale,
    stokes_mobility,
};
