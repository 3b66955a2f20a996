//! `labs-hal`: the sampling boundary for Trotterized LABS kernels.
//!
//! The quantum side of a LABS experiment is a black box: given the sequence
//! length, the G2/G4 interaction sets from [`labs_core`], a Trotter schedule,
//! variational angles and a shot count, it returns a histogram of length-N
//! bitstrings. This crate pins down that boundary:
//!
//! - [`KernelRequest`] packages the kernel arguments
//! - [`Sampler`] is the trait a collaborator implements
//! - [`execute`] validates the request, calls the sampler and checks the
//!   returned [`Counts`]
//! - [`SamplerRegistry`] and [`BackendConfig`] select samplers by name
//!
//! # Example
//!
//! ```ignore
//! use labs_core::get_interactions;
//! use labs_hal::{KernelRequest, execute};
//!
//! let request = KernelRequest::new(&get_interactions(4))
//!     .with_schedule(1, 0.1, 1.0)
//!     .with_thetas(vec![0.1])
//!     .with_shots(10);
//!
//! let result = execute(&my_sampler, &request)?;
//! assert_eq!(result.counts.total_shots(), 10);
//! if let Some(best) = result.counts.best_labs_sample()? {
//!     println!("best sample {} with E = {}", best.bitstring, best.energy);
//! }
//! ```

pub mod backend;
pub mod error;
pub mod execute;
pub mod registry;
pub mod request;
pub mod result;

pub use backend::{BackendConfig, Sampler, SamplerFactory};
pub use error::{HalError, HalResult};
pub use execute::execute;
pub use registry::SamplerRegistry;
pub use request::{DEFAULT_SHOTS, KernelRequest};
pub use result::{Counts, ExecutionResult};
