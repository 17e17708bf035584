//! Endpoint groups of the musclesworked REST API.

pub mod exercises;
pub mod muscles;
pub mod search;
pub mod workouts;

pub use exercises::ExercisesApi;
pub use muscles::{FindExercisesFilters, MusclesApi};
pub use search::SearchApi;
pub use workouts::WorkoutsApi;
