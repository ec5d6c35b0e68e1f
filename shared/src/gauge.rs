use std::f64::consts::PI;

pub const DEFAULT_SIZE: f64 = 86.0;
pub const DEFAULT_STROKE: f64 = 8.0;

/// Violet to pink, left to right.
pub const GRADIENT_STOPS: [(&str, &str); 2] = [("0%", "#7c3aed"), ("100%", "#ec4899")];

/// Geometry of the circular confidence ring.
///
/// The foreground circle is drawn with `stroke-dasharray` equal to the full
/// circumference and shifted by `dash_offset`, so only `percent` of the ring
/// stays visible. It is rotated by [`GaugeGeometry::ROTATION`] so the arc
/// starts at 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeGeometry {
    pub percent: u8,
    pub size: f64,
    pub stroke: f64,
    pub radius: f64,
    pub circumference: f64,
    pub dash_offset: f64,
}

impl GaugeGeometry {
    pub const ROTATION: &'static str = "rotate(-90)";

    pub fn new(percent: u8, size: f64, stroke: f64) -> Self {
        let percent = percent.min(100);
        let radius = (size - stroke) / 2.0;
        let circumference = 2.0 * PI * radius;
        let dash_offset = circumference - (f64::from(percent) / 100.0) * circumference;
        Self {
            percent,
            size,
            stroke,
            radius,
            circumference,
            dash_offset,
        }
    }

    pub fn for_percent(percent: u8) -> Self {
        Self::new(percent, DEFAULT_SIZE, DEFAULT_STROKE)
    }

    pub fn center(&self) -> f64 {
        self.size / 2.0
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.size, self.size)
    }

    pub fn translate(&self) -> String {
        format!("translate({}, {})", self.center(), self.center())
    }
}

/// Rounds a [0,1] confidence to the whole percent shown on the gauge.
pub fn percent_from_confidence(confidence: f64) -> u8 {
    if !confidence.is_finite() {
        return 0;
    }
    (confidence * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn offset_follows_closed_form_for_every_percent() {
        for p in 0..=100u8 {
            let g = GaugeGeometry::for_percent(p);
            let c = 2.0 * PI * g.radius;
            let expected = c - (f64::from(p) / 100.0) * c;
            assert!((g.dash_offset - expected).abs() < EPS, "percent {}", p);
        }
    }

    #[test]
    fn empty_and_full_ring() {
        let empty = GaugeGeometry::for_percent(0);
        assert!((empty.dash_offset - empty.circumference).abs() < EPS);

        let full = GaugeGeometry::for_percent(100);
        assert!(full.dash_offset.abs() < EPS);
    }

    #[test]
    fn radius_leaves_room_for_the_stroke() {
        let g = GaugeGeometry::for_percent(50);
        assert_eq!(g.radius, 39.0);
        assert_eq!(g.center(), 43.0);
        assert_eq!(g.view_box(), "0 0 86 86");
        assert_eq!(g.translate(), "translate(43, 43)");
        assert!((g.dash_offset - g.circumference / 2.0).abs() < EPS);
    }

    #[test]
    fn percent_above_hundred_clamps() {
        let g = GaugeGeometry::for_percent(250);
        assert_eq!(g.percent, 100);
        assert!(g.dash_offset.abs() < EPS);
    }

    #[test]
    fn confidence_rounds_to_whole_percent() {
        assert_eq!(percent_from_confidence(0.92), 92);
        assert_eq!(percent_from_confidence(0.875), 88);
        assert_eq!(percent_from_confidence(0.0), 0);
        assert_eq!(percent_from_confidence(1.0), 100);
        assert_eq!(percent_from_confidence(-0.3), 0);
        assert_eq!(percent_from_confidence(f64::NAN), 0);
    }
}
