//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `OnboardingFlow` - The guided first-run wizard (step machine, drafts, commit boundary)

pub mod onboarding;

pub use onboarding::{step_meta, Draft, DraftGoal, OnboardingFlow, Phase, StepMeta, TOTAL_STEPS};
