//! Easing curves
//!
//! Names follow the GSAP convention used by the web front end: `power2` is a
//! cubic curve, `power3` is quartic.

use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    Linear,
    Power2In,
    Power2Out,
    #[default]
    Power2InOut,
    Power3Out,
    SineInOut,
    /// Overshooting spring settling at 1
    ElasticOut { amplitude: f32, period: f32 },
}

impl Ease {
    /// Map linear progress `t` in [0, 1] to eased progress
    ///
    /// Every curve passes through (0, 0) and (1, 1); input is clamped.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Ease::Linear => t,
            Ease::Power2In => t * t * t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Ease::ElasticOut { amplitude, period } => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let amplitude = amplitude.max(1.0);
                let period = if period > 0.0 { period } else { 0.3 };
                let shift = period / TAU * (1.0 / amplitude).asin();
                amplitude * 2f32.powf(-10.0 * t) * ((t - shift) * TAU / period).sin() + 1.0
            }
        }
    }

    /// `elastic.out(1, 0.3)`
    pub fn elastic() -> Self {
        Ease::ElasticOut {
            amplitude: 1.0,
            period: 0.3,
        }
    }
}

impl FromStr for Ease {
    type Err = String;

    /// Parse GSAP-style names such as `power2.inOut` or `sine.inOut`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "linear" | "none" => Ok(Ease::Linear),
            "power2.in" => Ok(Ease::Power2In),
            "power2.out" => Ok(Ease::Power2Out),
            "power2.inOut" | "power2" => Ok(Ease::Power2InOut),
            "power3.out" => Ok(Ease::Power3Out),
            "sine.inOut" => Ok(Ease::SineInOut),
            "elastic.out" => Ok(Ease::elastic()),
            other => Err(format!("unknown ease '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 7] = [
        Ease::Linear,
        Ease::Power2In,
        Ease::Power2Out,
        Ease::Power2InOut,
        Ease::Power3Out,
        Ease::SineInOut,
        Ease::ElasticOut {
            amplitude: 1.0,
            period: 0.3,
        },
    ];

    #[test]
    fn test_endpoints() {
        for ease in ALL {
            assert!(ease.apply(0.0).abs() < 1e-6, "{ease:?} at 0");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-6, "{ease:?} at 1");
        }
    }

    #[test]
    fn test_power2_in_out_is_symmetric() {
        let ease = Ease::Power2InOut;
        assert!((ease.apply(0.5) - 0.5).abs() < 1e-6);
        assert!((ease.apply(0.25) + ease.apply(0.75) - 1.0).abs() < 1e-6);
        assert!((ease.apply(0.25) - 0.0625).abs() < 1e-6);
    }

    #[test]
    fn test_elastic_overshoots() {
        let peak = (1..100)
            .map(|i| Ease::elastic().apply(i as f32 / 100.0))
            .fold(0.0f32, f32::max);
        assert!(peak > 1.0, "elastic should overshoot, peak {peak}");
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("power2.inOut".parse::<Ease>(), Ok(Ease::Power2InOut));
        assert_eq!("sine.inOut".parse::<Ease>(), Ok(Ease::SineInOut));
        assert!("bounce.out".parse::<Ease>().is_err());
    }
}
