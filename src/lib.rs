//! `fitclub-http` is an async HTTP client for the FitClub platform API.
//!
//! The crate wraps the public club endpoints with ergonomic methods:
//! - [`FitClubClient::class_schedule`]
//! - [`FitClubClient::trainers`]
//! - [`FitClubClient::membership_plans`]
//! - [`FitClubClient::submit_lead`]
//!
//! All of them run through [`FitClubClient::call`], which bounds each attempt
//! with a timeout and retries transient failures with linear backoff.

mod client;
mod decode;
mod error;
mod options;
mod render;
mod request;
mod retry;
mod types;
mod wire;

pub use client::FitClubClient;
pub use error::FitClubError;
pub use options::ClientOptions;
pub use render::StatusRenderer;
pub use request::RequestOptions;
pub use retry::RetryPolicy;
pub use types::{BillingPeriod, ClassSession, Lead, LeadReceipt, MembershipPlan, Trainer};

pub type Result<T> = std::result::Result<T, FitClubError>;
