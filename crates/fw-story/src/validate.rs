//! Validation of scenario bundles.

use fw_core::AttributeId;

use crate::condition::Condition;
use crate::scenario::{Choice, Scenario, ScenarioBundle};

/// A warning or error found while validating a bundle.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Where the issue was found, e.g. `gate` or `gate/choice 2`.
    pub location: String,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl ValidationIssue {
    fn error(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            message: message.into(),
            is_error: true,
        }
    }

    fn warning(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            message: message.into(),
            is_error: false,
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.location, self.message)
    }
}

/// Validate a scenario bundle, returning every issue found.
///
/// Errors: a missing or ambiguous start, outcomes that lead nowhere, and
/// chances outside `0.0..=1.0`. Warnings: non-ending scenarios without
/// choices and choices that can dead-end because they lack a trailing
/// `"default"` outcome, and attribute conditions naming an unknown key.
pub fn validate_bundle(bundle: &ScenarioBundle) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if let Err(e) = bundle.start() {
        issues.push(ValidationIssue::error("bundle", e.to_string()));
    }

    for scenario in bundle.iter() {
        validate_scenario(scenario, bundle, &mut issues);
    }

    issues
}

fn validate_scenario(
    scenario: &Scenario,
    bundle: &ScenarioBundle,
    issues: &mut Vec<ValidationIssue>,
) {
    if scenario.choices.is_empty() && !scenario.is_ending {
        issues.push(ValidationIssue::warning(
            &scenario.id,
            "scenario has no choices but is not an ending",
        ));
    }
    if scenario.is_ending && !scenario.choices.is_empty() {
        issues.push(ValidationIssue::warning(
            &scenario.id,
            "ending scenario has choices that will never be offered",
        ));
    }

    for (index, choice) in scenario.choices.iter().enumerate() {
        let location = format!("{}/choice {index}", scenario.id);
        validate_choice(choice, &location, bundle, issues);
    }
}

fn validate_choice(
    choice: &Choice,
    location: &str,
    bundle: &ScenarioBundle,
    issues: &mut Vec<ValidationIssue>,
) {
    if let Some(chance) = choice.available.as_ref().and_then(|a| a.chance)
        && !(0.0..=1.0).contains(&chance)
    {
        issues.push(ValidationIssue::error(
            location,
            format!("chance {chance} is outside 0..=1"),
        ));
    }

    let requires = choice.available.as_ref().and_then(|a| a.requires.as_ref());
    for condition in requires.into_iter().chain(choice.outcomes.iter().map(|o| &o.condition)) {
        if let Condition::Attribute(c) = condition
            && AttributeId::from_key(&c.attribute).is_none()
        {
            issues.push(ValidationIssue::warning(
                location,
                format!("unknown attribute '{}' always reads as 0", c.attribute),
            ));
        }
    }

    if choice.outcomes.is_empty() {
        issues.push(ValidationIssue::error(location, "choice has no outcomes"));
        return;
    }

    for outcome in &choice.outcomes {
        if bundle.find(&outcome.next).is_none() {
            issues.push(ValidationIssue::error(
                location,
                format!("outcome leads to unknown scenario '{}'", outcome.next),
            ));
        }
    }

    if choice
        .outcomes
        .last()
        .is_some_and(|o| o.condition != Condition::Default)
    {
        issues.push(ValidationIssue::warning(
            location,
            "last outcome is not \"default\"; the choice can dead-end",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::Operator;
    use crate::scenario::Outcome;

    fn clean_bundle() -> ScenarioBundle {
        ScenarioBundle::new([
            Scenario::new("start", "Begin.").as_start().with_choice(
                Choice::new("Go")
                    .with_chance(0.5)
                    .with_outcome(Outcome::new(Condition::has_trait("brave"), "end"))
                    .with_outcome(Outcome::otherwise("end")),
            ),
            Scenario::new("end", "Fin.").as_ending(),
        ])
    }

    #[test]
    fn clean_bundle_has_no_issues() {
        let issues = validate_bundle(&clean_bundle());
        assert!(issues.is_empty(), "unexpected issues: {issues:?}");
    }

    #[test]
    fn start_problems() {
        let none = ScenarioBundle::new([Scenario::new("end", "").as_ending()]);
        let issues = validate_bundle(&none);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].to_string(), "error: bundle: no start scenario");

        let two = ScenarioBundle::new([
            Scenario::new("a", "").as_start().as_ending(),
            Scenario::new("b", "").as_start().as_ending(),
        ]);
        let issues = validate_bundle(&two);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("a, b"));
    }

    #[test]
    fn dangling_outcome_and_bad_chance() {
        let bundle = ScenarioBundle::new([Scenario::new("start", "")
            .as_start()
            .with_choice(
                Choice::new("Leap")
                    .with_chance(1.5)
                    .with_outcome(Outcome::otherwise("abyss")),
            )]);
        let issues = validate_bundle(&bundle);
        let messages: Vec<&str> = issues.iter().map(|i| i.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "chance 1.5 is outside 0..=1",
                "outcome leads to unknown scenario 'abyss'",
            ]
        );
        assert!(issues.iter().all(|i| i.is_error));
        assert_eq!(issues[0].location, "start/choice 0");
    }

    #[test]
    fn missing_default_warns() {
        let bundle = ScenarioBundle::new([
            Scenario::new("start", "").as_start().with_choice(
                Choice::new("Fight").with_outcome(Outcome::new(
                    Condition::attribute("strength", Operator::Ge, 2),
                    "end",
                )),
            ),
            Scenario::new("end", "").as_ending(),
        ]);
        let issues = validate_bundle(&bundle);
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error);
        assert!(issues[0].message.contains("dead-end"));
    }

    #[test]
    fn stranded_scenario_warns() {
        let bundle = ScenarioBundle::new([
            Scenario::new("start", "")
                .as_start()
                .with_choice(Choice::new("Wait").with_outcome(Outcome::otherwise("limbo"))),
            Scenario::new("limbo", "Nothing happens."),
        ]);
        let issues = validate_bundle(&bundle);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].location, "limbo");
    }

    #[test]
    fn unknown_attribute_key_warns() {
        let bundle = ScenarioBundle::new([
            Scenario::new("start", "").as_start().with_choice(
                Choice::new("Lift")
                    .requires(Condition::attribute("Strength", Operator::Ge, 1))
                    .with_outcome(Outcome::otherwise("end")),
            ),
            Scenario::new("end", "").as_ending(),
        ]);
        let issues = validate_bundle(&bundle);
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error);
        assert_eq!(issues[0].message, "unknown attribute 'Strength' always reads as 0");
    }

    #[test]
    fn choice_without_outcomes_is_an_error() {
        let bundle = ScenarioBundle::new([Scenario::new("start", "")
            .as_start()
            .with_choice(Choice::new("Stare"))]);
        let issues = validate_bundle(&bundle);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "choice has no outcomes");
    }
}
