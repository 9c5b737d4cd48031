use ndarray::Array2;

// Gradient anchors, one per quarter of the normalized range:
// blue -> cyan -> green -> yellow -> red.
const STOPS: [[f64; 3]; 5] = [
    [0.0, 0.0, 255.0],
    [0.0, 255.0, 255.0],
    [0.0, 255.0, 0.0],
    [255.0, 255.0, 0.0],
    [255.0, 0.0, 0.0],
];

/// Scan the whole field for its `(min, max)` value range. Recomputed every
/// frame, since the range drifts as the field evolves.
pub fn field_range(u: &Array2<f64>) -> (f64, f64) {
    u.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), &v| (lo.min(v), hi.max(v)),
    )
}

/// Map a temperature into `[0, 1]` against the frame's value range.
pub fn normalize(temp: f64, min: f64, max: f64) -> f64 {
    if max == min {
        // Degenerate range: the whole field is one value.
        return 0.0;
    }
    ((temp - min) / (max - min)).max(0.0).min(1.0)
}

/// Map a normalized scalar to an RGB triple through the 4-segment
/// piecewise-linear heat gradient. Channel values truncate to integers,
/// not round.
pub fn heat_rgb(normalized: f64) -> [u8; 3] {
    let x = normalized.max(0.0).min(1.0);

    let seg = ((x / 0.25) as usize).min(3);
    let t = (x - seg as f64 * 0.25) / 0.25;

    let a = STOPS[seg];
    let b = STOPS[seg + 1];

    [
        (a[0] + (b[0] - a[0]) * t) as u8,
        (a[1] + (b[1] - a[1]) * t) as u8,
        (a[2] + (b[2] - a[2]) * t) as u8,
    ]
}
