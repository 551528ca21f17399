//! Which solar elevation counts as "rise" and "set".

use solar_positioning::Horizon;

/// Apparent angular radius of the solar disc, in degrees.
const SUN_APPARENT_RADIUS: f64 = 32.0 / (60.0 * 2.0);

/// Horizon definition used for rise/set events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SunHorizon {
    /// Upper limb on the horizon, with atmospheric refraction.
    #[default]
    SunriseSunset,
    /// Civil twilight (-6°).
    Civil,
    /// Nautical twilight (-12°).
    Nautical,
    /// Astronomical twilight (-18°).
    Astronomical,
}

impl SunHorizon {
    /// Returns the configuration name of this horizon.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SunriseSunset => "sunrise-sunset",
            Self::Civil => "civil",
            Self::Nautical => "nautical",
            Self::Astronomical => "astronomical",
        }
    }

    /// Returns a human-readable name, e.g. `"civil twilight"`.
    pub fn label(self) -> &'static str {
        match self {
            Self::SunriseSunset => "sunrise/sunset",
            Self::Civil => "civil twilight",
            Self::Nautical => "nautical twilight",
            Self::Astronomical => "astronomical twilight",
        }
    }

    /// Solar zenith angle of the event before refraction, in degrees.
    pub(crate) fn zenith(self) -> f64 {
        match self {
            Self::SunriseSunset => 90.0 + SUN_APPARENT_RADIUS,
            Self::Civil => 96.0,
            Self::Nautical => 102.0,
            Self::Astronomical => 108.0,
        }
    }

    pub(crate) fn to_spa(self) -> Horizon {
        match self {
            Self::SunriseSunset => Horizon::SunriseSunset,
            Self::Civil => Horizon::CivilTwilight,
            Self::Nautical => Horizon::NauticalTwilight,
            Self::Astronomical => Horizon::AstronomicalTwilight,
        }
    }
}
