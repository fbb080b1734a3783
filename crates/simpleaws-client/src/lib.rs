//! Thin per-service AWS API clients.
//!
//! Each client is a small binding over the shared machinery in
//! `simpleaws-core` and `simpleaws-auth`: a static endpoint table, a call
//! type, and a signing strategy. The library never guesses at service
//! schemas; actions and parameters are passed through exactly as the AWS
//! API references write them.
//!
//! - Query + SigV2: [`Ec2`], [`Elb`], [`Sqs`], [`Sns`], [`Iam`],
//!   [`CloudWatch`], [`Sts`], [`AutoScaling`], [`CloudFormation`],
//!   [`ElastiCache`], [`ElasticBeanstalk`], [`ImportExport`], [`MapReduce`],
//!   [`Rds`], [`SimpleDb`]
//! - Query + AWS3-HTTPS: [`Ses`]
//! - Query + SigV0: [`MechanicalTurk`]
//! - REST + Authorization header: [`S3`], [`CloudFront`]
//! - JSON + AWS3: [`DynamoDb`]
//!
//! ```no_run
//! use std::sync::Arc;
//! use simpleaws_auth::Credentials;
//! use simpleaws_client::Ec2;
//! use simpleaws_core::{Params, Transport};
//!
//! fn list_instances(transport: Arc<dyn Transport>) -> anyhow::Result<()> {
//!     let ec2 = Ec2::new(Credentials::new("access", "secret"), transport);
//!     let response = ec2.call("describe_instances", Params::new())?;
//!     for reservation in &response.field("reservation_set")? {
//!         println!("{:?}", reservation.field("reservation_id")?.as_str());
//!     }
//!     Ok(())
//! }
//! ```

pub mod action;
pub mod api;
pub mod auto_scaling;
pub mod cloud_formation;
pub mod cloud_front;
pub mod cloud_watch;
pub mod dynamo_db;
pub mod ec2;
pub mod elasti_cache;
pub mod elastic_beanstalk;
pub mod elb;
pub mod iam;
pub mod import_export;
pub mod map_reduce;
pub mod mechanical_turk;
pub mod rds;
pub mod rest;
pub mod s3;
pub mod ses;
pub mod simple_db;
pub mod sns;
pub mod sqs;
pub mod sts;

#[cfg(test)]
pub(crate) mod test_support;

pub use action::ActionClient;
pub use api::{HostStyle, ServiceConfig};
pub use auto_scaling::AutoScaling;
pub use cloud_formation::CloudFormation;
pub use cloud_front::CloudFront;
pub use cloud_watch::CloudWatch;
pub use dynamo_db::DynamoDb;
pub use ec2::Ec2;
pub use elasti_cache::ElastiCache;
pub use elastic_beanstalk::ElasticBeanstalk;
pub use elb::Elb;
pub use iam::Iam;
pub use import_export::ImportExport;
pub use map_reduce::MapReduce;
pub use mechanical_turk::MechanicalTurk;
pub use rds::Rds;
pub use rest::CallOptions;
pub use s3::S3;
pub use ses::Ses;
pub use simple_db::SimpleDb;
pub use sns::Sns;
pub use sqs::Sqs;
pub use sts::Sts;
