//! Onboarding Module
//!
//! The guided first-run wizard as an explicit state machine.
//!
//! ## Structure
//!
//! - `draft` - Transient data collected by the wizard (`Draft`, `DraftGoal`)
//! - `flow` - The step machine and commit boundary (`OnboardingFlow`)
//!
//! ## Usage
//!
//! ```ignore
//! use waypoint::application::onboarding::OnboardingFlow;
//!
//! let mut flow = OnboardingFlow::new();
//! flow.start(&mut workbook);
//! // ... collect drafts, advance/skip/back ...
//! flow.finish(&mut workbook);
//! ```

mod draft;
mod flow;

pub use draft::{Draft, DraftGoal};
pub use flow::{step_meta, OnboardingFlow, Phase, StepMeta, TOTAL_STEPS};
