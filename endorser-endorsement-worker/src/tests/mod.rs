mod catch_up_scenarios;
mod reconciler_scenarios;
mod tools;
