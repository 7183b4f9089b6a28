//! fleetsched-core — the data model for bundle placement.
//!
//! This crate has no scheduling logic of its own: it defines the
//! types the policy engine in `fleetsched-placement` operates over
//! (fixed-point resource quantities, resource vectors, per-node
//! views, bundles, and the `ResourceManager` contract) so that the
//! engine and its callers share one vocabulary.
//!
//! # Components
//!
//! - [`fixed_point`] — deterministic non-negative scalar arithmetic
//! - [`resource`] — predefined + custom resource vectors
//! - [`node`] — per-node `{total, available}` and the `covers` predicate
//! - [`ids`] — opaque node identity
//! - [`cluster`] — the `NodeId → NodeResources` cluster view
//! - [`bundle`] — bundles, policies, and the scheduling result
//! - [`manager`] — the resource manager trait the core consumes
//! - [`error`] — recoverable construction errors and the fatal-abort path

pub mod bundle;
pub mod cluster;
pub mod error;
pub mod fixed_point;
pub mod ids;
pub mod manager;
pub mod node;
pub mod resource;

pub use bundle::{Bundle, Policy, SchedulingResult, SchedulingStatus};
pub use cluster::{candidate_nodes, ClusterView};
pub use error::{fatal, SchedulerError, SchedulerResult};
pub use fixed_point::FixedPoint;
pub use ids::NodeId;
pub use manager::ResourceManager;
pub use node::NodeResources;
pub use resource::{CustomResourceId, PredefinedResource, ResourceVector, PREDEFINED_MAX};
