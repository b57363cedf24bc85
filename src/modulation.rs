use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::UnknownModulation;
use crate::erfc;

/// Digital modulations with a closed-form AWGN bit-error approximation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Modulation {
    #[default]
    #[serde(rename = "BPSK")]
    Bpsk,
    #[serde(rename = "QPSK")]
    Qpsk,
    #[serde(rename = "8-PSK")]
    Psk8,
    #[serde(rename = "16-QAM")]
    Qam16,
    #[serde(rename = "64-QAM")]
    Qam64,
    #[serde(rename = "256-QAM")]
    Qam256,
}

impl Modulation {
    /// Selector order.
    pub const ALL: [Modulation; 6] = [
        Modulation::Bpsk,
        Modulation::Qpsk,
        Modulation::Psk8,
        Modulation::Qam16,
        Modulation::Qam64,
        Modulation::Qam256,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Modulation::Bpsk => "BPSK",
            Modulation::Qpsk => "QPSK",
            Modulation::Psk8 => "8-PSK",
            Modulation::Qam16 => "16-QAM",
            Modulation::Qam64 => "64-QAM",
            Modulation::Qam256 => "256-QAM",
        }
    }

    pub fn bits_per_symbol(&self) -> usize {
        match self {
            Modulation::Bpsk => 1,
            Modulation::Qpsk => 2,
            Modulation::Psk8 => 3,
            Modulation::Qam16 => 4,
            Modulation::Qam64 => 6,
            Modulation::Qam256 => 8,
        }
    }

    /// Theoretical bit-error probability at a linear (not dB) SNR. Agrees with
    /// an exact `erfc` to within 1.2e-7 relative.
    pub fn ber(&self, snr: f64) -> f64 {
        match self {
            Modulation::Bpsk => 0.5 * erfc(snr.sqrt()),
            Modulation::Qpsk => 0.5 * erfc((snr / 2f64).sqrt()),
            Modulation::Psk8 => erfc(snr.sqrt() * (PI / 8f64).sin()),
            Modulation::Qam16 => (3f64 / 8f64) * erfc(((4f64 / 10f64) * snr).sqrt()),
            Modulation::Qam64 => (7f64 / 24f64) * erfc(((12f64 / 42f64) * snr).sqrt()),
            Modulation::Qam256 => (15f64 / 64f64) * erfc(((32f64 / 170f64) * snr).sqrt()),
        }
    }
}

impl fmt::Display for Modulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Modulation {
    type Err = UnknownModulation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Modulation::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| UnknownModulation(s.to_string()))
    }
}

/// A modulation as selected by the user. Names outside the supported set are
/// kept verbatim and evaluate to a zero BER curve.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Scheme {
    Known(Modulation),
    Unknown(String),
}

impl Scheme {
    pub fn parse(name: &str) -> Scheme {
        match name.parse::<Modulation>() {
            Ok(m) => Scheme::Known(m),
            Err(UnknownModulation(name)) => {
                warn!(modulation = %name, "unrecognised modulation, BER falls back to zero");
                Scheme::Unknown(name)
            }
        }
    }

    pub fn modulation(&self) -> Option<Modulation> {
        match self {
            Scheme::Known(m) => Some(*m),
            Scheme::Unknown(_) => None,
        }
    }

    pub fn ber(&self, snr: f64) -> f64 {
        match self {
            Scheme::Known(m) => m.ber(snr),
            Scheme::Unknown(_) => 0f64,
        }
    }
}

impl Default for Scheme {
    fn default() -> Self {
        Scheme::Known(Modulation::default())
    }
}

impl From<Modulation> for Scheme {
    fn from(m: Modulation) -> Self {
        Scheme::Known(m)
    }
}

impl From<String> for Scheme {
    fn from(name: String) -> Self {
        Scheme::parse(&name)
    }
}

impl From<Scheme> for String {
    fn from(scheme: Scheme) -> Self {
        match scheme {
            Scheme::Known(m) => m.name().to_string(),
            Scheme::Unknown(name) => name,
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Known(m) => f.write_str(m.name()),
            Scheme::Unknown(name) => f.write_str(name),
        }
    }
}
