use crate::config::OverlaySettings;

/// Color with channels in the 0-255 range and alpha in 0.0-1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub fn from_array(c: [f64; 4]) -> Self {
        Self {
            r: c[0],
            g: c[1],
            b: c[2],
            a: c[3],
        }
    }
}

/// The rendered overlay for one frame: a tint and how strongly to show it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    pub color: Rgba,
    pub opacity: f64,
}

impl OverlayStyle {
    pub fn hidden() -> Self {
        Self {
            color: Rgba::TRANSPARENT,
            opacity: 0.0,
        }
    }
}

/// Project the live direction signal onto the card overlay
///
/// Three-point interpolation: -1 maps to the left indicator color, 0 to fully
/// transparent, +1 to the right indicator color. Opacity is the absolute
/// signal. Purely cosmetic; nothing downstream of this feeds the decider.
pub fn overlay_style(signal: f64, overlay: &OverlaySettings) -> OverlayStyle {
    let signal = signal.clamp(-1.0, 1.0);
    let color = if signal >= 0.0 {
        lerp_color(Rgba::TRANSPARENT, Rgba::from_array(overlay.right_color), signal)
    } else {
        lerp_color(Rgba::TRANSPARENT, Rgba::from_array(overlay.left_color), -signal)
    };
    OverlayStyle {
        color,
        opacity: signal.abs(),
    }
}

fn lerp_color(from: Rgba, to: Rgba, t: f64) -> Rgba {
    Rgba {
        r: from.r + (to.r - from.r) * t,
        g: from.g + (to.g - from.g) * t,
        b: from.b + (to.b - from.b) * t,
        a: from.a + (to.a - from.a) * t,
    }
}
