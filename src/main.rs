use nsleuth::compute::{
    ComparisonInput, ExampleData, PowerQuery, Settings, TestFamily, compare_example,
    compare_groups, comparison_report, example_summaries, power_curve, power_report,
    simulate_raw_sample, solve_sample_size_with,
};
use nsleuth::error::NsleuthErr;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), NsleuthErr> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // NSLEUTH_SETTINGS may hold a JSON settings object; unset means defaults
    let settings = match std::env::var("NSLEUTH_SETTINGS") {
        Ok(json) => Settings::from_json_str(&json)?,
        Err(_) => Settings::default(),
    };

    //----------------------------------------
    // Sample sizes
    for test_family in TestFamily::ALL {
        let query = PowerQuery::new(test_family, 0.5, 0.05, 0.8, 3);
        let start = Instant::now();
        let result = solve_sample_size_with(&query, &settings.solver)?;
        println!("{} ({:?})", power_report(&query, &result).summary, start.elapsed());
    }

    let start = Instant::now();
    let curve = power_curve(
        TestFamily::IndependentTTest,
        0.5,
        0.05,
        2,
        &settings.sweep.sample_sizes(),
    );
    let undefined = curve.iter().filter(|p| p.power.is_none()).count();
    println!(
        "Power curve: {} points, {} undefined ({:?})",
        curve.len(),
        undefined,
        start.elapsed()
    );

    println!("----------------------------------------");
    println!();

    //----------------------------------------
    // Group comparisons
    for kind in [ExampleData::TwoGroups, ExampleData::ThreeGroups] {
        let result = compare_example(kind)?;
        println!("{}", comparison_report(&result, 0.05));
        println!();
    }

    let raw = simulate_raw_sample(&example_summaries(ExampleData::ThreeGroups), 24601)?;
    let result = compare_groups(&ComparisonInput::RawSample(raw))?;
    println!("Simulated raw data: {}", comparison_report(&result, 0.05).summary);

    Ok(())
}
