//! Basic SDK usage example.
//!
//! Looks up an exercise, reads the muscles it works and asks for substitutes.
//!
//! Run with: MUSCLESWORKED_API_KEY=mw_live_... cargo run --example basic_usage

use musclesworked_sdk::{
    Difficulty, FindExercisesFilters, MusclesWorkedClient, MusclesWorkedError, MusclesWorkedResult,
};

#[tokio::main]
async fn main() -> MusclesWorkedResult<()> {
    // Initialize tracing for debug output
    tracing_subscriber::fmt::init();

    let api_key = std::env::var("MUSCLESWORKED_API_KEY")
        .map_err(|_| MusclesWorkedError::Config("set MUSCLESWORKED_API_KEY".to_string()))?;

    let mut builder = MusclesWorkedClient::builder().api_key(api_key);
    if let Ok(url) = std::env::var("MUSCLESWORKED_API_URL") {
        builder = builder.base_url(url);
    }
    let client = builder.build()?;

    println!("Searching for 'bench press'...");
    let found = client.search().exercises("bench press").await?;
    println!("{}", serde_json::to_string_pretty(&found)?);

    println!("\nMuscles worked by barbell_bench_press:");
    let muscles = client.exercises().muscles_worked("barbell_bench_press").await?;
    println!("{}", serde_json::to_string_pretty(&muscles)?);

    println!("\nTop 5 alternatives:");
    let alternatives = client
        .exercises()
        .alternatives("barbell_bench_press", Some(5))
        .await?;
    println!("{}", serde_json::to_string_pretty(&alternatives)?);

    println!("\nBeginner exercises for the sternal pec:");
    let filters = FindExercisesFilters {
        difficulty: Some(Difficulty::Beginner),
        limit: Some(10),
        ..Default::default()
    };
    match client
        .muscles()
        .exercises("pectoralis_major_sternal", &filters)
        .await
    {
        Ok(exercises) => println!("{}", serde_json::to_string_pretty(&exercises)?),
        Err(MusclesWorkedError::Api { status, detail }) => {
            println!("API returned {}: {}", status, detail)
        }
        Err(e) => return Err(e),
    }

    Ok(())
}
