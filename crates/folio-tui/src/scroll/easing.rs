//! L4 Atomic Layer: Easing curves for animated scrolls
//!
//! Maps progress in [0, 1] to eased progress in [0, 1], either through one of
//! the configurable presets or a CSS-style cubic bezier.

pub use folio_core::EasingType;

/// Evaluation of the configurable presets
pub trait EasingTypeExt {
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        let rest = 1.0 - t;
        match self {
            // Jumps straight to the target on the final frame
            EasingType::None if t < 1.0 => 0.0,
            EasingType::None => 1.0,
            EasingType::Linear => t,
            EasingType::Cubic => 1.0 - rest.powi(3),
            EasingType::Quintic => 1.0 - rest.powi(5),
            EasingType::EaseOut if t >= 1.0 => 1.0,
            // 1 - 2^(-10t)
            EasingType::EaseOut => 1.0 - 2.0_f64.powf(-10.0 * t),
        }
    }
}

/// Cubic bezier through (0,0), (x1,y1), (x2,y2), (1,1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    /// X control points are clamped to [0, 1] so the curve stays a function of time
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1: x1.clamp(0.0, 1.0),
            y1,
            x2: x2.clamp(0.0, 1.0),
            y2,
        }
    }

    pub fn from_points(points: [f64; 4]) -> Self {
        Self::new(points[0], points[1], points[2], points[3])
    }

    #[inline]
    fn coord(p1: f64, p2: f64, s: f64) -> f64 {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    }

    #[inline]
    fn dx(&self, s: f64) -> f64 {
        let inv = 1.0 - s;
        3.0 * inv * inv * self.x1 + 6.0 * inv * s * (self.x2 - self.x1) + 3.0 * s * s * (1.0 - self.x2)
    }

    /// Curve parameter whose x equals `x`
    fn solve_s(&self, x: f64) -> f64 {
        // Newton first, bisection if the slope flattens out
        let mut s = x;
        for _ in 0..8 {
            let err = Self::coord(self.x1, self.x2, s) - x;
            if err.abs() < 1e-7 {
                return s;
            }
            let d = self.dx(s);
            if d.abs() < 1e-6 {
                break;
            }
            s -= err / d;
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        s = x;
        for _ in 0..32 {
            let value = Self::coord(self.x1, self.x2, s);
            if (value - x).abs() < 1e-7 {
                break;
            }
            if value < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        s
    }

    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t <= 0.0 || t >= 1.0 {
            return t;
        }
        Self::coord(self.y1, self.y2, self.solve_s(t))
    }
}

/// Easing curve of one animated scroll
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Preset(EasingType),
    Bezier(CubicBezier),
}

impl Default for Easing {
    fn default() -> Self {
        Easing::Preset(EasingType::default())
    }
}

impl Easing {
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Easing::Preset(preset) => preset.apply(t),
            Easing::Bezier(curve) => curve.apply(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_pin_endpoints() {
        let presets = [
            EasingType::Linear,
            EasingType::Cubic,
            EasingType::Quintic,
            EasingType::EaseOut,
        ];
        for preset in presets {
            assert!(preset.apply(0.0).abs() < 1e-3, "{:?} at start", preset);
            assert!((preset.apply(1.0) - 1.0).abs() < 1e-3, "{:?} at end", preset);
        }
        assert_eq!(EasingType::None.apply(0.99), 0.0);
        assert_eq!(EasingType::None.apply(1.0), 1.0);
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in [
            Easing::Preset(EasingType::Linear),
            Easing::Preset(EasingType::Cubic),
            Easing::Preset(EasingType::Quintic),
            Easing::Preset(EasingType::EaseOut),
            Easing::Bezier(CubicBezier::new(0.25, 0.0, 0.35, 1.0)),
        ] {
            let mut prev = 0.0;
            for i in 0..=20 {
                let t = i as f64 / 20.0;
                let v = easing.apply(t);
                assert!(v + 1e-9 >= prev, "{:?} not monotonic at t={}", easing, t);
                prev = v;
            }
        }
    }

    #[test]
    fn test_linear_bezier_is_identity() {
        let curve = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert!((curve.apply(t) - t).abs() < 1e-4, "t={}", t);
        }
    }

    #[test]
    fn test_nav_bezier_midpoint() {
        // Symmetric-ish ease: well past halfway by the midpoint
        let curve = CubicBezier::new(0.25, 0.0, 0.35, 1.0);
        let mid = curve.apply(0.5);
        assert!(mid > 0.5 && mid < 1.0, "mid={}", mid);
        assert_eq!(curve.apply(0.0), 0.0);
        assert_eq!(curve.apply(1.0), 1.0);
    }
}
