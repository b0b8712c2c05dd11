use std::f64::consts::FRAC_PI_4;
use std::fmt::Write;

use super::geo::Geometry;

/// Longitude/latitude (degrees) placed at the centre of the viewport.
pub const MAP_CENTER: (f64, f64) = (82.0, 23.0);

const SCALE_FACTOR: f64 = 1.1;
const SCALE_FACTOR_WIDE: f64 = 1.3;

/// Spherical Mercator, `scale` in pixels per radian, north up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mercator {
    pub scale: f64,
    pub center: (f64, f64),
    pub translate: (f64, f64),
}

fn mercator_y(lat_deg: f64) -> f64 {
    (FRAC_PI_4 + lat_deg.to_radians() / 2.0).tan().ln()
}

impl Mercator {
    /// Fit India into a `width × height` container; wide viewports get a larger scale.
    pub fn for_viewport(width: f64, height: f64, wide: bool) -> Self {
        let factor = if wide { SCALE_FACTOR_WIDE } else { SCALE_FACTOR };
        Self {
            scale: width.min(height) * factor,
            center: MAP_CENTER,
            translate: (width / 2.0, height / 2.0),
        }
    }

    pub fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
        let (lon0, lat0) = self.center;
        let x = self.translate.0 + self.scale * (lon - lon0).to_radians();
        let y = self.translate.1 - self.scale * (mercator_y(lat) - mercator_y(lat0));
        (x, y)
    }

    /// SVG path data for a geometry; each ring becomes a closed subpath.
    pub fn path(&self, geometry: &Geometry) -> String {
        let mut d = String::new();
        for ring in geometry.rings() {
            let mut points = ring
                .iter()
                .filter(|position| position.len() >= 2)
                .map(|position| self.project(position[0], position[1]));
            let Some((x, y)) = points.next() else {
                continue;
            };
            let _ = write!(d, "M{x:.1},{y:.1}");
            for (x, y) in points {
                let _ = write!(d, "L{x:.1},{y:.1}");
            }
            d.push('Z');
        }
        d
    }
}
