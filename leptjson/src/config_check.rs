// SPDX-License-Identifier: Apache-2.0

//! Compile-time configuration validation
//!
//! Exactly one leading-zero error mapping must be selected.

#[cfg(not(any(
    feature = "leading-zero-root-not-singular",
    feature = "leading-zero-invalid"
)))]
compile_error!(
    "No leading-zero mapping selected: choose one of 'leading-zero-root-not-singular' or 'leading-zero-invalid'"
);

#[cfg(all(
    feature = "leading-zero-root-not-singular",
    feature = "leading-zero-invalid"
))]
compile_error!("Cannot enable both 'leading-zero-root-not-singular' and 'leading-zero-invalid' features simultaneously: use default-features = false to select 'leading-zero-invalid'");
