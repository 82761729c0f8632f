//----------------------------------------
// compute mod
//----------------------------------------
//! Public entry points for sample size, power curve, and group comparison
//! computations, along with the types they take and return.
pub use crate::comparison::compare_groups::compare_groups;
pub use crate::comparison::example_data::{
    ExampleData, compare_example, example_summaries, simulate_raw_sample,
};
pub use crate::comparison::trace::{FormulaTrace, TraceStep};
pub use crate::comparison::types::{
    ComparisonInput, ComparisonResult, ComparisonTest, DegreesOfFreedom, Group, GroupSummary,
    RawSample,
};
pub use crate::power::compute_ss::{solve_sample_size, solve_sample_size_with};
pub use crate::power::power_curve::power_curve;
pub use crate::power::power_fcns::power;
pub use crate::power::types::{PowerCurvePoint, PowerQuery, PowerResult};
pub use crate::report::{Report, comparison_report, power_report};
pub use crate::settings::{Settings, SolverSettings, SweepSettings};
pub use crate::test_family::TestFamily;
