use std::collections::BTreeMap;

use crate::{
    Expression,
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::array::broadcast, core::EvalResult},
        value::{Variables, is_truthy},
    },
};

/// One benchmark result: a label (typically the seed) and its variables.
///
/// Values come from seed metadata, scores, timings and scraped `$name`
/// entries; the record does not distinguish between them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    /// Identifies the record in logs and chart tooltips.
    pub label:  String,
    /// Variable values for this record.
    pub values: BTreeMap<String, f64>,
}

impl Record {
    /// Creates a record with no variables.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self { label:  label.into(),
               values: BTreeMap::new(), }
    }

    /// Adds a variable, returning the record for chaining.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    /// The record's variables as one-element arrays.
    #[must_use]
    pub fn environment(&self) -> Variables {
        self.values
            .iter()
            .map(|(name, value)| (name.clone(), vec![*value]))
            .collect()
    }
}

/// A chart coordinate produced from an X and a Y expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// Label of the record or group the point came from.
    pub label: String,
    /// Value of the X expression.
    pub x:     f64,
    /// Value of the Y expression.
    pub y:     f64,
}

/// Builds the environment of a group of records.
///
/// Every variable present in all records becomes an array holding one value
/// per record, in record order. A variable missing from any record is left
/// out, so expressions referring to it fail as unknown. An empty group yields
/// an empty environment.
///
/// # Example
/// ```
/// use benchexpr::series::{Record, group_environment};
///
/// let records = [Record::new("1").with("score", 10.0).with("N", 5.0),
///                Record::new("2").with("score", 30.0)];
/// let env = group_environment(&records.iter().collect::<Vec<_>>());
///
/// assert_eq!(env["score"], vec![10.0, 30.0]);
/// assert!(!env.contains_key("N"));
/// ```
#[must_use]
pub fn group_environment(records: &[&Record]) -> Variables {
    let Some((first, rest)) = records.split_first() else {
        return Variables::new();
    };

    first.values
         .keys()
         .filter(|name| rest.iter().all(|r| r.values.contains_key(*name)))
         .map(|name| {
             let values = records.iter().map(|r| r.values[name]).collect();
             (name.clone(), values)
         })
         .collect()
}

/// Keeps the records accepted by a filter predicate.
///
/// A record is kept when the predicate evaluates without error and every
/// element of the result is non-zero. Records whose predicate fails are
/// dropped and logged at debug level. Without a predicate all records are
/// kept.
#[must_use]
pub fn filter_records<'r>(filter: Option<&Expression>, records: &'r [Record]) -> Vec<&'r Record> {
    let Some(filter) = filter else {
        return records.iter().collect();
    };

    records.iter()
           .filter(|record| match filter.evaluate(&record.environment()) {
               Ok(result) => is_truthy(&result),
               Err(e) => {
                   tracing::debug!(record = %record.label, filter = %filter, error = %e,
                                   "filter failed, excluding record");
                   false
               },
           })
           .collect()
}

/// Builds one or more points per record.
///
/// X and Y are evaluated against each record's environment and paired with
/// the broadcasting rule. A record whose expressions fail contributes no
/// points; the failure is logged as a warning and the rest of the series is
/// still built.
#[must_use]
pub fn record_points(x: &Expression, y: &Expression, records: &[&Record]) -> Vec<Point> {
    records.iter()
           .flat_map(|record| points_for(x, y, &record.label, &record.environment()))
           .collect()
}

/// Builds points per group of records.
///
/// Each group is evaluated once against its [`group_environment`]. An
/// aggregate such as `avg(score)` reduces the group to a single point, while
/// a per-record expression such as `score` yields one point per record; both
/// broadcast against each other.
///
/// # Example
/// ```
/// use benchexpr::{
///     Expression,
///     series::{Point, Record, group_points},
/// };
///
/// let small = [Record::new("1").with("N", 10.0).with("score", 4.0),
///              Record::new("2").with("N", 10.0).with("score", 6.0)];
/// let groups = vec![("N=10".to_string(), small.iter().collect())];
///
/// let x: Expression = "avg(N)".parse().unwrap();
/// let y: Expression = "avg(score)".parse().unwrap();
///
/// assert_eq!(group_points(&x, &y, &groups),
///            vec![Point { label: "N=10".to_string(),
///                         x:     10.0,
///                         y:     5.0, }]);
/// ```
#[must_use]
pub fn group_points(x: &Expression,
                    y: &Expression,
                    groups: &[(String, Vec<&Record>)])
                    -> Vec<Point> {
    groups.iter()
          .flat_map(|(label, records)| points_for(x, y, label, &group_environment(records)))
          .collect()
}

fn points_for(x: &Expression, y: &Expression, label: &str, variables: &Variables) -> Vec<Point> {
    match pair(x, y, variables) {
        Ok(coordinates) => {
            coordinates.into_iter()
                       .map(|(x, y)| Point { label: label.to_string(),
                                             x,
                                             y })
                       .collect()
        },
        Err(e) => {
            tracing::warn!(label, x = %x, y = %y, error = %e, "skipping data point");
            Vec::new()
        },
    }
}

fn pair(x: &Expression, y: &Expression, variables: &Variables) -> EvalResult<Vec<(f64, f64)>> {
    let xs = x.evaluate(variables)?;
    let ys = y.evaluate(variables)?;
    broadcast(&xs, &ys, |x, y| Ok::<_, RuntimeError>((x, y)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn records() -> Vec<Record> {
        vec![Record::new("1").with("N", 50.0).with("score", 10.0),
             Record::new("2").with("N", 150.0).with("score", 0.0),
             Record::new("3").with("N", 200.0).with("score", 40.0).with("$turns", 7.0)]
    }

    fn expr(source: &str) -> Expression {
        source.parse().unwrap()
    }

    fn labels(records: &[&Record]) -> Vec<String> {
        records.iter().map(|r| r.label.clone()).collect()
    }

    #[test]
    fn no_filter_keeps_everything() {
        let records = records();
        assert_eq!(filter_records(None, &records).len(), 3);
    }

    #[test]
    fn filter_keeps_truthy_records() {
        let records = records();
        let filter = expr("N >= 100");
        assert_eq!(labels(&filter_records(Some(&filter), &records)), vec!["2", "3"]);
    }

    #[test]
    fn failing_filter_excludes_record() {
        let records = records();
        let filter = expr("$turns > 5");
        assert_eq!(labels(&filter_records(Some(&filter), &records)), vec!["3"]);

        let filter = expr("N / score > 1");
        assert_eq!(labels(&filter_records(Some(&filter), &records)), vec!["1", "3"]);
    }

    #[test]
    fn record_points_skip_failures() {
        let records = records();
        let all: Vec<&Record> = records.iter().collect();

        let points = record_points(&expr("N"), &expr("100 / score"), &all);
        assert_eq!(points,
                   vec![Point { label: "1".to_string(),
                                x:     50.0,
                                y:     10.0, },
                        Point { label: "3".to_string(),
                                x:     200.0,
                                y:     2.5, }]);
    }

    #[test]
    fn group_points_broadcast_aggregates() {
        let records = records();
        let groups = vec![("all".to_string(), records.iter().collect::<Vec<_>>())];

        let points = group_points(&expr("N"), &expr("max(score)"), &groups);
        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
        assert_eq!(xs, vec![50.0, 150.0, 200.0]);
        assert_eq!(ys, vec![40.0, 40.0, 40.0]);
    }

    #[test]
    fn group_without_shared_variable_is_skipped() {
        let records = records();
        let groups = vec![("all".to_string(), records.iter().collect::<Vec<_>>())];
        assert!(group_points(&expr("avg($turns)"), &expr("1"), &groups).is_empty());
    }

    #[test]
    fn empty_group_is_skipped() {
        let groups = vec![("none".to_string(), Vec::new())];
        assert!(group_points(&expr("avg(N)"), &expr("1"), &groups).is_empty());
    }
}
