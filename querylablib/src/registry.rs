//! Exercise registry: stable keys mapped to report functions.
//!
//! The table is explicit; adding an exercise means adding a line to
//! [`Registry::builtin`].

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::data::Dataset;
use crate::error::QueryLabError;
use crate::exercises;
use crate::output::Report;
use crate::query::QueryConfig;
use crate::Result;

/// Signature every exercise report function shares
pub type ExerciseFn = fn(&Dataset, &QueryConfig) -> Result<Report>;

/// Descriptive metadata for one exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExerciseInfo {
    pub key: &'static str,
    pub category: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy)]
pub struct Exercise {
    pub info: ExerciseInfo,
    pub run: ExerciseFn,
}

impl fmt::Debug for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Exercise").field("info", &self.info).finish_non_exhaustive()
    }
}

impl Exercise {
    pub fn run(&self, dataset: &Dataset, config: &QueryConfig) -> Result<Report> {
        (self.run)(dataset, config)
    }
}

/// Ordered collection of exercises.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    exercises: Vec<Exercise>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an exercise. Registration order is listing order.
    pub fn register(mut self, info: ExerciseInfo, run: ExerciseFn) -> Self {
        self.exercises.push(Exercise { info, run });
        self
    }

    /// The ten bundled exercises, `task1` through `task10`.
    pub fn builtin() -> Self {
        Self::new()
            .register(
                info(
                    "task1",
                    "Restriction Operators",
                    "Where - Task 1",
                    "Customers whose total turnover exceeds the turnover threshold",
                ),
                exercises::turnover_report,
            )
            .register(
                info(
                    "task2",
                    "Join Operators",
                    "Where - Task 2",
                    "Suppliers located in each customer's city and country",
                ),
                exercises::supplier_report,
            )
            .register(
                info(
                    "task3",
                    "Restriction Operators",
                    "Where - Task 3",
                    "Customers with at least one order above the order threshold",
                ),
                exercises::large_order_report,
            )
            .register(
                info(
                    "task4",
                    "Projection Operators",
                    "Where - Task 4",
                    "Month and year each customer became a client",
                ),
                exercises::start_month_report,
            )
            .register(
                info(
                    "task5",
                    "Ordering Operators",
                    "Where - Task 5",
                    "Customers by first order date, then turnover and name",
                ),
                exercises::timeline_report,
            )
            .register(
                info(
                    "task6",
                    "Restriction Operators",
                    "Where - Task 6",
                    "Customers with a bad postal code, no region or no operator code",
                ),
                exercises::incomplete_contact_report,
            )
            .register(
                info(
                    "task7",
                    "Grouping Operators",
                    "Where - Task 7",
                    "Products by category, then units in stock, cheapest first",
                ),
                exercises::stock_report,
            )
            .register(
                info(
                    "task8",
                    "Grouping Operators",
                    "Where - Task 8",
                    "Products bucketed into cheap, average and expensive",
                ),
                exercises::price_tier_report,
            )
            .register(
                info(
                    "task9",
                    "Aggregate Operators",
                    "Where - Task 9",
                    "Average income and order intensity per city",
                ),
                exercises::city_report,
            )
            .register(
                info(
                    "task10",
                    "Aggregate Operators",
                    "Where - Task 10",
                    "Order activity per customer by month, year and year-month",
                ),
                exercises::activity_report,
            )
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Look up an exercise by key, ignoring ASCII case.
    pub fn find(&self, key: &str) -> Result<&Exercise> {
        self.exercises
            .iter()
            .find(|e| e.info.key.eq_ignore_ascii_case(key))
            .ok_or_else(|| QueryLabError::UnknownExercise(key.to_string()))
    }

    /// Run the exercise registered under `key`.
    ///
    /// Fails with `InvalidConfig` before running when `config` does not validate.
    pub fn run(&self, key: &str, dataset: &Dataset, config: &QueryConfig) -> Result<Report> {
        let exercise = self.find(key)?;
        config.validate()?;
        let report = exercise.run(dataset, config)?;
        debug!(
            key = exercise.info.key,
            entries = report.len(),
            "exercise finished"
        );
        Ok(report)
    }
}

fn info(
    key: &'static str,
    category: &'static str,
    title: &'static str,
    description: &'static str,
) -> ExerciseInfo {
    ExerciseInfo {
        key,
        category,
        title,
        description,
    }
}

/// Run a builtin exercise by key.
pub fn run_exercise(key: &str, dataset: &Dataset, config: &QueryConfig) -> Result<Report> {
    Registry::builtin().run(key, dataset, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_ten_unique_keys() {
        let registry = Registry::builtin();
        assert_eq!(registry.len(), 10);

        let mut keys: Vec<_> = registry.exercises().iter().map(|e| e.info.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 10);
    }

    #[test]
    fn test_builtin_order() {
        let registry = Registry::builtin();
        let keys: Vec<_> = registry.exercises().iter().map(|e| e.info.key).collect();
        assert_eq!(keys[0], "task1");
        assert_eq!(keys[9], "task10");
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let registry = Registry::builtin();
        assert_eq!(registry.find("TASK7").unwrap().info.key, "task7");
    }

    #[test]
    fn test_unknown_key() {
        let err = Registry::builtin().find("task11").unwrap_err();
        assert!(matches!(err, QueryLabError::UnknownExercise(ref k) if k == "task11"));
        assert!(err.to_string().contains("task11"));
    }

    #[test]
    fn test_every_builtin_runs_on_sample() {
        let data = Dataset::sample().unwrap();
        let config = QueryConfig::default();
        let registry = Registry::builtin();
        for exercise in registry.exercises() {
            let report = exercise.run(&data, &config).unwrap();
            assert!(!report.is_empty(), "{} produced no output", exercise.info.key);
        }
    }

    #[test]
    fn test_run_rejects_invalid_config() {
        let data = Dataset::sample().unwrap();
        let inverted = QueryConfig::new().price_tiers(100.0, 50.0);
        let err = run_exercise("task8", &data, &inverted).unwrap_err();
        assert!(matches!(err, QueryLabError::InvalidConfig(_)));

        let negative = QueryConfig::new().turnover_threshold(-1.0);
        assert!(run_exercise("task1", &data, &negative).is_err());
        assert!(run_exercise("task1", &data, &QueryConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert!(registry.run("task1", &Dataset::default(), &QueryConfig::default()).is_err());
    }

    #[test]
    fn test_custom_registration() {
        fn hello(_: &Dataset, _: &QueryConfig) -> Result<Report> {
            let mut report = Report::new(&"hello")?;
            report.text("hello");
            Ok(report)
        }

        let registry = Registry::new().register(info("hello", "Misc", "Hello", "Says hello"), hello);
        let report = run_on(&registry, "hello");
        assert_eq!(report.len(), 1);
    }

    fn run_on(registry: &Registry, key: &str) -> Report {
        registry
            .run(key, &Dataset::default(), &QueryConfig::default())
            .unwrap()
    }
}
