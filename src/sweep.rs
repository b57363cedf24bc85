use serde::Serialize;

use crate::{error::InputError, linspace};

/// A linearly spaced range of SNRs in dB, endpoints included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SnrSweep {
    start_db: f64,
    end_db: f64,
    points: usize,
}

impl SnrSweep {
    pub fn new(start_db: f64, end_db: f64, points: usize) -> Result<Self, InputError> {
        for (field, value) in [("SNR start", start_db), ("SNR end", end_db)] {
            if !value.is_finite() {
                return Err(InputError::NonFiniteBound { field, value });
            }
        }
        if points == 0 {
            return Err(InputError::EmptySweep);
        }
        Ok(Self {
            start_db,
            end_db,
            points,
        })
    }

    /// Builds a sweep from the raw text of the start, end and point-count fields.
    pub fn parse(start: &str, end: &str, points: &str) -> Result<Self, InputError> {
        let start_db = parse_db("SNR start", start)?;
        let end_db = parse_db("SNR end", end)?;
        let points: usize = points
            .trim()
            .parse()
            .map_err(|_| InputError::InvalidPointCount(points.to_string()))?;
        Self::new(start_db, end_db, points)
    }

    pub fn start_db(&self) -> f64 {
        self.start_db
    }

    pub fn end_db(&self) -> f64 {
        self.end_db
    }

    pub fn points(&self) -> usize {
        self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> {
        linspace(self.start_db, self.end_db, self.points)
    }

    pub fn values(&self) -> Vec<f64> {
        self.iter().collect()
    }
}

impl Default for SnrSweep {
    fn default() -> Self {
        Self {
            start_db: 0f64,
            end_db: 5f64,
            points: 5,
        }
    }
}

fn parse_db(field: &'static str, value: &str) -> Result<f64, InputError> {
    value
        .trim()
        .parse()
        .map_err(|_| InputError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}
