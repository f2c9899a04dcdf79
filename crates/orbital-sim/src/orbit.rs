//! Parametric orbit model: rotation counter + list slot -> screen position.
//!
//! Pure functions with no ECS dependency. The rotation counter is passed in
//! explicitly; nothing here holds animation state.

use glam::DVec2;
use snafu::ensure;

use orbital_core::enums::OrbitClass;
use orbital_core::error::{FleetError, InvalidGeometrySnafu, InvalidViewportSnafu};
use orbital_core::state::GeometryView;
use orbital_core::types::{ScreenPoint, Viewport};

use orbital_core::constants::EARTH_RADIUS_FRACTION;

/// Centre and ring radii of the orbit display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitGeometry {
    center: ScreenPoint,
    earth_radius: f64,
    /// Indexed by `OrbitClass::index()`.
    radii: [f64; 3],
}

impl Default for OrbitGeometry {
    fn default() -> Self {
        Self::layout(Viewport::default())
    }
}

impl OrbitGeometry {
    /// Lay the rings out for a surface: Earth at the midpoint with a radius
    /// of 15% of the shorter side, rings at fixed offsets beyond it.
    pub fn from_viewport(viewport: Viewport) -> Result<Self, FleetError> {
        ensure!(
            viewport.is_valid(),
            InvalidViewportSnafu {
                width: viewport.width,
                height: viewport.height,
            }
        );
        Ok(Self::layout(viewport))
    }

    fn layout(viewport: Viewport) -> Self {
        let earth_radius = viewport.min_side() * EARTH_RADIUS_FRACTION;
        Self {
            center: viewport.center(),
            earth_radius,
            radii: OrbitClass::ALL.map(|orbit| earth_radius + orbit.ring_offset()),
        }
    }

    /// Explicit geometry. Radii must be positive and strictly increasing.
    pub fn with_radii(center: ScreenPoint, leo: f64, meo: f64, geo: f64) -> Result<Self, FleetError> {
        ensure!(
            leo.is_finite() && geo.is_finite() && leo > 0.0 && leo < meo && meo < geo,
            InvalidGeometrySnafu { leo, meo, geo }
        );
        Ok(Self {
            center,
            earth_radius: (leo - OrbitClass::Leo.ring_offset()).max(0.0),
            radii: [leo, meo, geo],
        })
    }

    pub fn center(&self) -> ScreenPoint {
        self.center
    }

    pub fn earth_radius(&self) -> f64 {
        self.earth_radius
    }

    /// Ring radius for an orbit class.
    pub fn radius(&self, orbit: OrbitClass) -> f64 {
        self.radii[orbit.index()]
    }

    pub fn view(&self) -> GeometryView {
        GeometryView {
            center: self.center,
            earth_radius: self.earth_radius,
            ring_radii: self.radii,
        }
    }
}

/// Even phase spread for slot `index` of `population`. Zero when the
/// population is empty.
pub fn phase_offset_deg(index: usize, population: usize) -> f64 {
    if population == 0 {
        return 0.0;
    }
    index as f64 * (360.0 / population as f64)
}

/// Orbital angle in degrees (unwrapped):
/// `rotation * ω(orbit) * speed + index * 360 / population`.
pub fn orbit_angle_deg(
    rotation: f64,
    orbit: OrbitClass,
    speed: f64,
    index: usize,
    population: usize,
) -> f64 {
    rotation * orbit.base_angular_speed() * speed + phase_offset_deg(index, population)
}

/// Point on a circle of `radius` around `center` at `angle_rad`.
pub fn point_on_ring(center: ScreenPoint, radius: f64, angle_rad: f64) -> ScreenPoint {
    center + radius * DVec2::new(angle_rad.cos(), angle_rad.sin())
}

/// Screen position of a satellite on its ring.
pub fn orbit_position(geometry: &OrbitGeometry, orbit: OrbitClass, angle_deg: f64) -> ScreenPoint {
    point_on_ring(geometry.center(), geometry.radius(orbit), angle_deg.to_radians())
}
