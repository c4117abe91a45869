//! Background gradients that drift with the pointer and the scroll position

use crate::section::SectionId;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse "#RRGGBB" or "RRGGBB"
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
        let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
        let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
        Some(Rgb(r, g, b))
    }

    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub color: Rgb,
    /// Position along the gradient axis, 0.0-1.0
    pub at: f64,
}

const fn stop(r: u8, g: u8, b: u8, at: f64) -> ColorStop {
    ColorStop {
        color: Rgb(r, g, b),
        at,
    }
}

/// Base palettes, all drawn at 135 degrees
const HERO: [ColorStop; 3] = [
    stop(0x00, 0x00, 0x00, 0.0),
    stop(0x1a, 0x0b, 0x2e, 0.5),
    stop(0x2d, 0x1b, 0x69, 1.0),
];
const ABOUT: [ColorStop; 3] = [
    stop(0x0f, 0x0f, 0x0f, 0.0),
    stop(0x2d, 0x1b, 0x69, 0.3),
    stop(0x8b, 0x5c, 0xf6, 0.7),
];
const SKILLS: [ColorStop; 3] = [
    stop(0x2d, 0x1b, 0x69, 0.0),
    stop(0x1a, 0x0b, 0x2e, 0.5),
    stop(0x00, 0x00, 0x00, 1.0),
];
const PROJECTS: [ColorStop; 3] = [
    stop(0x00, 0x00, 0x00, 0.0),
    stop(0x8b, 0x5c, 0xf6, 0.3),
    stop(0xa8, 0x55, 0xf7, 0.7),
];
const CONTACT: [ColorStop; 3] = [
    stop(0x1a, 0x0b, 0x2e, 0.0),
    stop(0x00, 0x00, 0x00, 0.5),
    stop(0x2d, 0x1b, 0x69, 1.0),
];

fn palette(section: SectionId) -> [ColorStop; 3] {
    match section {
        SectionId::Home => HERO,
        SectionId::About => ABOUT,
        SectionId::Certificates => SKILLS,
        SectionId::Projects => PROJECTS,
        SectionId::Contact | SectionId::Footer => CONTACT,
    }
}

/// Pointer position as percentages of the host area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl Default for PointerPosition {
    fn default() -> Self {
        Self { x: 50.0, y: 50.0 }
    }
}

/// Gradient to paint behind one section
#[derive(Debug, Clone, PartialEq)]
pub struct GradientDescriptor {
    pub stops: [ColorStop; 3],
    /// Background position in percent (50, 50 is centered)
    pub position: (f64, f64),
    pub scale: f64,
}

impl GradientDescriptor {
    /// Sample the diagonal gradient at normalized cell coordinates `u`, `v` in [0, 1]
    pub fn color_at(&self, u: f64, v: f64) -> Rgb {
        let dx = (self.position.0 - 50.0) / 100.0;
        let dy = (self.position.1 - 50.0) / 100.0;
        let t = ((u - 0.5 - dx) + (v - 0.5 - dy)) / (2.0 * self.scale) + 0.5;
        sample_stops(&self.stops, t)
    }
}

fn sample_stops(stops: &[ColorStop], t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let Some(first) = stops.first() else {
        return Rgb(0, 0, 0);
    };
    if t <= first.at {
        return first.color;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.at {
            let span = b.at - a.at;
            let local = if span <= f64::EPSILON { 1.0 } else { (t - a.at) / span };
            return a.color.lerp(b.color, local);
        }
    }
    stops[stops.len() - 1].color
}

/// Tracks scroll and pointer position and turns them into gradients
#[derive(Debug, Clone, Default)]
pub struct GradientSampler {
    scroll_y: f64,
    pointer: PointerPosition,
}

impl GradientSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_scroll(&mut self, scroll_y: f64) {
        self.scroll_y = scroll_y.max(0.0);
    }

    /// Record the pointer at `column`, `row` inside a `width` x `height` host
    pub fn set_pointer(&mut self, column: u16, row: u16, width: u16, height: u16) {
        if width == 0 || height == 0 {
            return;
        }
        self.pointer = PointerPosition {
            x: column as f64 / width as f64 * 100.0,
            y: row as f64 / height as f64 * 100.0,
        };
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn pointer(&self) -> PointerPosition {
        self.pointer
    }

    pub fn sample(&self, section: SectionId) -> GradientDescriptor {
        GradientDescriptor {
            stops: palette(section),
            position: (
                50.0 + (self.pointer.x - 50.0) * 0.5,
                50.0 + (self.pointer.y - 50.0) * 0.5,
            ),
            scale: 1.0 + self.scroll_y * 0.0001,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_pointer_keeps_gradient_centered() {
        let sampler = GradientSampler::new();
        let gradient = sampler.sample(SectionId::Home);
        assert_eq!(gradient.position, (50.0, 50.0));
        assert!((gradient.scale - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pointer_shifts_position_by_half() {
        let mut sampler = GradientSampler::new();
        sampler.set_pointer(100, 0, 100, 50);
        let gradient = sampler.sample(SectionId::About);
        assert!((gradient.position.0 - 75.0).abs() < 1e-9);
        assert!((gradient.position.1 - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_sized_host_is_ignored() {
        let mut sampler = GradientSampler::new();
        sampler.set_pointer(10, 10, 0, 0);
        assert_eq!(sampler.pointer(), PointerPosition::default());
    }

    #[test]
    fn test_scroll_grows_scale() {
        let mut sampler = GradientSampler::new();
        sampler.set_scroll(1000.0);
        assert!((sampler.sample(SectionId::Projects).scale - 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_color_at_corners() {
        let gradient = GradientSampler::new().sample(SectionId::Home);
        assert_eq!(gradient.color_at(0.0, 0.0), Rgb(0x00, 0x00, 0x00));
        assert_eq!(gradient.color_at(1.0, 1.0), Rgb(0x2d, 0x1b, 0x69));
        assert_eq!(gradient.color_at(0.5, 0.5), Rgb(0x1a, 0x0b, 0x2e));
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!(Rgb::from_hex("#8B5CF6"), Some(Rgb(0x8b, 0x5c, 0xf6)));
        assert_eq!(Rgb::from_hex("zzzzzz"), None);
        assert_eq!(Rgb::from_hex("#fff"), None);
    }
}
