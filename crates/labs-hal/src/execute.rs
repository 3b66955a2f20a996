//! Validated execution through a [`Sampler`].

use std::time::Instant;

use tracing::{debug, instrument};

use crate::backend::Sampler;
use crate::error::{HalError, HalResult};
use crate::request::KernelRequest;
use crate::result::ExecutionResult;

/// Run `request` on `sampler`, checking both sides of the boundary.
///
/// The request is validated first and must fit within
/// [`Sampler::max_qubits`]. Sampler errors propagate unchanged. A
/// histogram whose total differs from `request.shots`, or that contains a
/// key that is not a length-`n` bitstring over `{0, 1}`, is rejected with
/// [`HalError::MalformedResult`].
#[instrument(skip_all, fields(sampler = sampler.name(), n = request.n, shots = request.shots))]
pub fn execute(sampler: &dyn Sampler, request: &KernelRequest) -> HalResult<ExecutionResult> {
    request.validate()?;

    if request.n > sampler.max_qubits() {
        return Err(HalError::CircuitTooLarge(format!(
            "kernel needs {} qubits but sampler '{}' supports {}",
            request.n,
            sampler.name(),
            sampler.max_qubits()
        )));
    }

    debug!(
        n_pairs = request.pairs.len(),
        n_quads = request.quads.len(),
        steps = request.steps,
        "submitting kernel"
    );

    let start = Instant::now();
    let mut result = sampler.sample(request)?;
    let elapsed = start.elapsed();

    check_result(request, &result)?;

    if result.execution_time_ms.is_none() {
        result.execution_time_ms = Some(elapsed.as_millis() as u64);
    }
    debug!(
        distinct = result.counts.len(),
        elapsed_ms = elapsed.as_millis() as u64,
        "kernel sampled"
    );

    Ok(result)
}

fn check_result(request: &KernelRequest, result: &ExecutionResult) -> HalResult<()> {
    if result.shots != request.shots {
        return Err(HalError::MalformedResult(format!(
            "result reports {} shots, requested {}",
            result.shots, request.shots
        )));
    }

    let Some(total) = result.counts.checked_total() else {
        return Err(HalError::MalformedResult("histogram total overflows u64".into()));
    };
    if total != u64::from(request.shots) {
        return Err(HalError::MalformedResult(format!(
            "histogram totals {total} but {} shots were requested",
            request.shots
        )));
    }

    for key in result.counts.keys() {
        if key.len() != request.n {
            return Err(HalError::MalformedResult(format!(
                "outcome '{key}' has length {}, expected {}",
                key.len(),
                request.n
            )));
        }
        if !key.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(HalError::MalformedResult(format!(
                "outcome '{key}' is not a bitstring"
            )));
        }
    }

    Ok(())
}
