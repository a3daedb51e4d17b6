pub mod analytic;
pub mod run;
