//! Kernel requests.
//!
//! A [`KernelRequest`] carries everything the Trotterized LABS kernel needs:
//!
//! | Field        | Meaning |
//! |--------------|---------|
//! | `n`          | sequence length / qubit count |
//! | `pairs`      | G2 interaction tuples |
//! | `quads`      | G4 interaction tuples |
//! | `steps`      | number of Trotter steps |
//! | `dt`         | time-slice width |
//! | `total_time` | total evolution time T |
//! | `thetas`     | variational angles |
//! | `shots`      | measurements to take |
//!
//! How many angles the kernel expects per step is up to the sampler. The
//! request only rejects an empty angle list.

use serde::{Deserialize, Serialize};

use labs_core::{Interactions, Pair, Quad};

use crate::error::{HalError, HalResult};

/// Default number of shots when none is set.
pub const DEFAULT_SHOTS: u32 = 1000;

/// Arguments for one sampling call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KernelRequest {
    /// Sequence length (number of qubits).
    pub n: usize,
    /// G2 interaction tuples.
    pub pairs: Vec<Pair>,
    /// G4 interaction tuples.
    pub quads: Vec<Quad>,
    /// Number of Trotter steps.
    pub steps: usize,
    /// Time-slice width.
    pub dt: f64,
    /// Total evolution time.
    pub total_time: f64,
    /// Variational angles.
    pub thetas: Vec<f64>,
    /// Number of measurement shots.
    pub shots: u32,
}

impl KernelRequest {
    /// Build a request from generated interaction sets.
    ///
    /// Starts with one Trotter step, `dt = 0.1`, `T = 1.0`, no angles and
    /// [`DEFAULT_SHOTS`].
    pub fn new(interactions: &Interactions) -> Self {
        Self {
            n: interactions.n(),
            pairs: interactions.pairs().to_vec(),
            quads: interactions.quads().to_vec(),
            steps: 1,
            dt: 0.1,
            total_time: 1.0,
            thetas: Vec::new(),
            shots: DEFAULT_SHOTS,
        }
    }

    /// Set the Trotter schedule.
    #[must_use]
    pub fn with_schedule(mut self, steps: usize, dt: f64, total_time: f64) -> Self {
        self.steps = steps;
        self.dt = dt;
        self.total_time = total_time;
        self
    }

    /// Set the variational angles.
    #[must_use]
    pub fn with_thetas(mut self, thetas: impl Into<Vec<f64>>) -> Self {
        self.thetas = thetas.into();
        self
    }

    /// Set the shot count.
    #[must_use]
    pub fn with_shots(mut self, shots: u32) -> Self {
        self.shots = shots;
        self
    }

    /// Check the request before it reaches a sampler.
    pub fn validate(&self) -> HalResult<()> {
        if self.n == 0 {
            return Err(HalError::InvalidRequest(
                "sequence length must be at least 1".into(),
            ));
        }
        if self.shots == 0 {
            return Err(HalError::InvalidShots(
                "shot count must be at least 1".into(),
            ));
        }
        if self.steps == 0 {
            return Err(HalError::InvalidRequest(
                "Trotter step count must be at least 1".into(),
            ));
        }
        if !self.dt.is_finite() || !self.total_time.is_finite() {
            return Err(HalError::InvalidRequest(format!(
                "time parameters must be finite (dt = {}, T = {})",
                self.dt, self.total_time
            )));
        }
        if self.thetas.is_empty() {
            return Err(HalError::InvalidRequest(
                "at least one variational angle is required".into(),
            ));
        }
        if let Some(theta) = self.thetas.iter().find(|t| !t.is_finite()) {
            return Err(HalError::InvalidRequest(format!(
                "variational angle {theta} is not finite"
            )));
        }
        for pair in &self.pairs {
            check_tuple(pair, self.n)?;
        }
        for quad in &self.quads {
            check_tuple(quad, self.n)?;
        }
        Ok(())
    }
}

fn check_tuple(indices: &[usize], n: usize) -> HalResult<()> {
    if let Some(&q) = indices.iter().find(|&&q| q >= n) {
        return Err(HalError::InvalidRequest(format!(
            "interaction {indices:?} references index {q} but N = {n}"
        )));
    }
    for (i, a) in indices.iter().enumerate() {
        if indices[i + 1..].contains(a) {
            return Err(HalError::InvalidRequest(format!(
                "interaction {indices:?} repeats index {a}"
            )));
        }
    }
    Ok(())
}
