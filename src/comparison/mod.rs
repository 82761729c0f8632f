//----------------------------------------
// comparison mod
//----------------------------------------
pub mod anova;
pub mod compare_groups;
pub mod error;
pub mod example_data;
pub mod summarize;
pub mod trace;
pub mod types;
pub mod welch;
