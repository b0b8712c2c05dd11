//! Sequential yellow→green scale for production shares.

/// Shares are mapped onto this fixed range; values outside are clamped.
pub const SCALE_DOMAIN: (f64, f64) = (0.0, 12.0);
/// Regions without a share.
pub const NEUTRAL_FILL: &str = "#e0e0e0";
pub const HOVER_FILL: &str = "#2E7D32";
pub const STROKE_WIDTH: &str = "0.5px";
pub const STROKE_WIDTH_HOVER: &str = "1px";

/// ColorBrewer YlGn, nine classes.
const YL_GN: [[f64; 3]; 9] = [
    [255.0, 255.0, 229.0],
    [247.0, 252.0, 185.0],
    [217.0, 240.0, 163.0],
    [173.0, 221.0, 142.0],
    [120.0, 198.0, 121.0],
    [65.0, 171.0, 93.0],
    [35.0, 132.0, 69.0],
    [0.0, 104.0, 55.0],
    [0.0, 69.0, 41.0],
];

/// Uniform cubic B-spline through the stops, evaluated per channel.
fn basis(t: f64, v0: f64, v1: f64, v2: f64, v3: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    ((1.0 - 3.0 * t + 3.0 * t2 - t3) * v0
        + (4.0 - 6.0 * t2 + 3.0 * t3) * v1
        + (1.0 + 3.0 * t + 3.0 * t2 - 3.0 * t3) * v2
        + t3 * v3)
        / 6.0
}

fn interpolate(t: f64) -> [u8; 3] {
    let n = YL_GN.len() - 1;
    let t = t.clamp(0.0, 1.0);
    let i = if t >= 1.0 {
        n - 1
    } else {
        (t * n as f64).floor() as usize
    };
    let local = (t - i as f64 / n as f64) * n as f64;

    let mut rgb = [0u8; 3];
    for (channel, out) in rgb.iter_mut().enumerate() {
        let v1 = YL_GN[i][channel];
        let v2 = YL_GN[i + 1][channel];
        let v0 = if i > 0 { YL_GN[i - 1][channel] } else { 2.0 * v1 - v2 };
        let v3 = if i < n - 1 {
            YL_GN[i + 2][channel]
        } else {
            2.0 * v2 - v1
        };
        *out = basis(local, v0, v1, v2, v3).round().clamp(0.0, 255.0) as u8;
    }
    rgb
}

/// Fill colour for a share value, as `#rrggbb`.
pub fn sequential_color(value: f64) -> String {
    let (lo, hi) = SCALE_DOMAIN;
    let t = if value.is_finite() {
        (value - lo) / (hi - lo)
    } else {
        0.0
    };
    let [r, g, b] = interpolate(t);
    format!("#{r:02x}{g:02x}{b:02x}")
}
