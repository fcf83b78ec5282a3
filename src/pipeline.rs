//! Configurable chains of transformations
//!
//! A [`Pipeline`] applies a list of [`Transform`]s left to right. Pipelines can
//! be built in code, parsed from a compact `a | b | c` form, or loaded from
//! TOML when the `config` feature is enabled:
//!
//! ```toml
//! steps = [
//!     "normalize_unicode",
//!     { clean = "remove_extra_spaces" },
//!     { truncate = { limit = 20 } },
//!     { case = "snake" },
//! ]
//! ```

use crate::advanced::normalize_unicode;
use crate::case::{convert, Case};
use crate::cleaning::{clean, truncate_with, RuleSet, DEFAULT_TRUNCATE_SUFFIX};
use crate::error::{Error, Result};
use crate::info::reverse_string;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

fn default_suffix() -> String {
    DEFAULT_TRUNCATE_SUFFIX.to_string()
}

/// One string-to-string operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transform {
    Case(Case),
    Clean(RuleSet),
    Truncate {
        limit: i64,
        #[serde(default = "default_suffix")]
        suffix: String,
    },
    Reverse,
    NormalizeUnicode,
}

impl Transform {
    pub fn truncate(limit: i64) -> Self {
        Self::Truncate {
            limit,
            suffix: default_suffix(),
        }
    }

    pub fn apply(&self, input: &str) -> String {
        match self {
            Transform::Case(case) => convert(input, *case),
            Transform::Clean(rules) => clean(input, *rules),
            Transform::Truncate { limit, suffix } => truncate_with(input, *limit, suffix),
            Transform::Reverse => reverse_string(input),
            Transform::NormalizeUnicode => normalize_unicode(input),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Case(case) => write!(f, "{}", case),
            Transform::Clean(rules) => write!(f, "{}", rules),
            Transform::Truncate { limit, suffix } if suffix == DEFAULT_TRUNCATE_SUFFIX => {
                write!(f, "truncate:{}", limit)
            }
            Transform::Truncate { limit, suffix } => write!(f, "truncate:{}:{}", limit, suffix),
            Transform::Reverse => f.write_str("reverse"),
            Transform::NormalizeUnicode => f.write_str("normalize_unicode"),
        }
    }
}

impl FromStr for Transform {
    type Err = Error;

    /// Parses a step name: a case convention, a rule set name, `reverse`,
    /// `normalize_unicode`, or `truncate:<limit>[:<suffix>]`
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();

        if let Some(args) = s.strip_prefix("truncate:") {
            let (limit, suffix) = match args.split_once(':') {
                Some((limit, suffix)) => (limit, suffix.to_string()),
                None => (args, default_suffix()),
            };
            let limit = limit
                .trim()
                .parse::<i64>()
                .map_err(|e| Error::config(format!("Invalid truncate limit '{}': {}", limit, e)))?;
            return Ok(Transform::Truncate { limit, suffix });
        }

        match s {
            "reverse" => return Ok(Transform::Reverse),
            "normalize_unicode" => return Ok(Transform::NormalizeUnicode),
            _ => {}
        }

        if let Some(rules) = RuleSet::ALL.into_iter().find(|rules| rules.name() == s) {
            return Ok(Transform::Clean(rules));
        }

        s.parse::<Case>()
            .map(Transform::Case)
            .map_err(|_| Error::unknown_transform(s))
    }
}

/// Ordered list of transforms
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    #[serde(default)]
    pub steps: Vec<Transform>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step
    pub fn then(mut self, step: Transform) -> Self {
        self.steps.push(step);
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Parse a pipeline from `step | step | step`
    ///
    /// # Example
    /// ```rust,ignore
    /// let pipeline = Pipeline::parse("normalize_unicode | trim_all | kebab")?;
    /// assert_eq!(pipeline.len(), 3);
    /// ```
    pub fn parse(definition: &str) -> Result<Self> {
        let steps = definition
            .split('|')
            .filter(|part| !part.trim().is_empty())
            .map(|part| part.parse::<Transform>())
            .collect::<Result<Vec<Transform>>>()?;
        Ok(Self { steps })
    }

    /// Load a pipeline from a TOML document with a `steps` array
    #[cfg(feature = "config")]
    pub fn from_toml(content: &str) -> Result<Self> {
        let pipeline: Pipeline = toml::from_str(content)?;
        log::debug!("Loaded pipeline with {} steps", pipeline.len());
        Ok(pipeline)
    }

    /// Run every step over the input
    ///
    /// `None` yields an empty string. An empty pipeline returns the input as is.
    pub fn apply<'a>(&self, input: impl Into<Option<&'a str>>) -> String {
        let input = match input.into() {
            Some(s) => s,
            None => return String::new(),
        };

        self.steps.iter().fold(input.to_string(), |acc, step| {
            let next = step.apply(&acc);
            log::trace!("pipeline step {}: {:?} -> {:?}", step, acc, next);
            next
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let pipeline = Pipeline::new()
            .then(Transform::NormalizeUnicode)
            .then(Transform::Case(Case::Kebab));
        assert_eq!(pipeline.apply("Crème Brûlée"), "creme-brulee");
        assert_eq!(pipeline.apply(None), "");
    }

    #[test]
    fn test_empty_pipeline_passthrough() {
        let pipeline = Pipeline::new();
        assert!(pipeline.is_empty());
        assert_eq!(pipeline.apply("  As Is  "), "  As Is  ");
    }

    #[test]
    fn test_transform_from_str() {
        assert_eq!("snake".parse::<Transform>(), Ok(Transform::Case(Case::Snake)));
        assert_eq!(
            "remove_extra_spaces".parse::<Transform>(),
            Ok(Transform::Clean(RuleSet::RemoveExtraSpaces))
        );
        assert_eq!("slug".parse::<Transform>(), Ok(Transform::Clean(RuleSet::Slug)));
        assert_eq!("truncate:5".parse::<Transform>(), Ok(Transform::truncate(5)));
        assert_eq!(
            "truncate:3:~".parse::<Transform>(),
            Ok(Transform::Truncate {
                limit: 3,
                suffix: "~".to_string()
            })
        );
        assert_eq!(
            "explode".parse::<Transform>(),
            Err(Error::UnknownTransform("explode".to_string()))
        );
        assert!(matches!(
            "truncate:many".parse::<Transform>(),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_display_round_trips() {
        let steps = vec![
            Transform::Case(Case::Dot),
            Transform::Clean(RuleSet::TrimAll),
            Transform::truncate(4),
            Transform::Truncate {
                limit: 2,
                suffix: "!".to_string(),
            },
            Transform::Reverse,
            Transform::NormalizeUnicode,
        ];
        for step in steps {
            assert_eq!(step.to_string().parse::<Transform>(), Ok(step));
        }
    }

    #[test]
    fn test_parse_pipeline() {
        let pipeline = Pipeline::parse("normalize_unicode | trim_all | truncate:4").unwrap();
        assert_eq!(pipeline.len(), 3);
        assert_eq!(pipeline.apply(" é t é "), "ete");
        assert_eq!(pipeline.apply("façade wall"), "faca...");
    }
}
