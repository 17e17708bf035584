//! # musclesworked SDK
//!
//! Rust client for the [musclesworked.com](https://musclesworked.com) REST API:
//! which muscles an exercise works, which exercises hit a muscle, workout
//! coverage analysis and exercise substitutes.
//!
//! Responses are returned as raw [`serde_json::Value`]s; the server owns the
//! payload shape.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use musclesworked_sdk::{MusclesWorkedClient, MusclesWorkedResult};
//!
//! #[tokio::main]
//! async fn main() -> MusclesWorkedResult<()> {
//!     let client = MusclesWorkedClient::builder()
//!         .api_key("mw_live_...")
//!         .build()?;
//!
//!     let muscles = client.exercises().muscles_worked("barbell_bench_press").await?;
//!     println!("{}", serde_json::to_string_pretty(&muscles)?);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Filtering
//!
//! ```rust,no_run
//! use musclesworked_sdk::{Equipment, FindExercisesFilters, MusclesWorkedClient};
//!
//! # async fn example(client: MusclesWorkedClient) -> musclesworked_sdk::MusclesWorkedResult<()> {
//! let filters = FindExercisesFilters {
//!     equipment: Some(Equipment::Dumbbell),
//!     limit: Some(10),
//!     ..Default::default()
//! };
//! let exercises = client.muscles().exercises("biceps_brachii", &filters).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;
pub mod types;

pub use api::FindExercisesFilters;
pub use client::{MusclesWorkedClient, MusclesWorkedClientBuilder};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{MusclesWorkedError, MusclesWorkedResult};
pub use types::{Choice, Difficulty, Equipment, ExerciseType, MovementPattern, MuscleRole};
