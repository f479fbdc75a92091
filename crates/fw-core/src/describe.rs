//! Short descriptive strings shared by the builder and story front ends.

use crate::attribute::{AttributeDeltas, Attributes};
use crate::option::{CharacterOption, OptionRequirement};

/// Describe a requirement as a single line, e.g. `strength >= 3 and not trait coward`.
pub fn describe_requirement(req: &OptionRequirement) -> String {
    let mut parts = Vec::new();
    if let Some(t) = &req.has_trait {
        parts.push(format!("trait {t}"));
    }
    if let Some(t) = &req.not_trait {
        parts.push(format!("not trait {t}"));
    }
    if let Some(a) = &req.attribute {
        parts.push(format!("{} {} {}", a.id, a.op, a.value));
    }
    if let Some(s) = &req.selection {
        parts.push(format!("{} {}", s.category, s.option_id));
    }
    if let Some(s) = &req.not_selection {
        parts.push(format!("not {} {}", s.category, s.option_id));
    }
    if parts.is_empty() {
        return "nothing".to_string();
    }
    parts.join(" and ")
}

/// Describe every requirement of an option, or `None` if it has none.
pub fn describe_requirements(option: &CharacterOption) -> Option<String> {
    if option.requires.is_empty() {
        return None;
    }
    let parts: Vec<String> = option.requires.iter().map(describe_requirement).collect();
    Some(format!("requires {}", parts.join("; ")))
}

/// Describe fate, attribute, and trait effects, e.g. `+2 strength, fate -1, grants intimidating`.
pub fn describe_effects(fate: i32, attributes: &AttributeDeltas, traits: &[String]) -> String {
    let mut parts: Vec<String> = attributes
        .iter()
        .filter(|(_, delta)| **delta != 0)
        .map(|(id, delta)| format!("{delta:+} {id}"))
        .collect();
    if fate != 0 {
        parts.push(format!("fate {fate:+}"));
    }
    if !traits.is_empty() {
        parts.push(format!("grants {}", traits.join(", ")));
    }
    if parts.is_empty() {
        return "no effect".to_string();
    }
    parts.join(", ")
}

/// Describe the effects of an option.
pub fn describe_option_effects(option: &CharacterOption) -> String {
    describe_effects(option.fate, &option.attributes, &option.traits)
}

/// Flavor label for a fate score.
pub fn fate_label(fate: i32) -> &'static str {
    match fate {
        i32::MIN..=-4 => "Doomed",
        -3..=-1 => "Ill-starred",
        0 => "Unwritten",
        1..=3 => "Favored",
        _ => "Fated",
    }
}

/// List non-zero attributes, e.g. `strength 2, will -1`.
pub fn format_attributes(attrs: &Attributes) -> String {
    let parts: Vec<String> = attrs
        .iter()
        .filter(|(_, v)| *v != 0)
        .map(|(id, v)| format!("{id} {v}"))
        .collect();
    if parts.is_empty() {
        "all attributes 0".to_string()
    } else {
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AttributeId, Comparison};

    #[test]
    fn single_requirement() {
        let req = OptionRequirement::attribute(AttributeId::Strength, Comparison::AtLeast, 3);
        insta::assert_snapshot!(describe_requirement(&req), @"strength >= 3");
    }

    #[test]
    fn combined_requirement_fields() {
        let req = OptionRequirement {
            has_trait: Some("caster".to_string()),
            ..OptionRequirement::not_selected("race", "dwarf")
        };
        insta::assert_snapshot!(describe_requirement(&req), @"trait caster and not race dwarf");
    }

    #[test]
    fn option_requirements_joined() {
        let opt = CharacterOption::new("veteran", "Veteran")
            .with_requirement(OptionRequirement::has_trait("soldier"))
            .with_requirement(OptionRequirement::not_trait("coward"));
        insta::assert_snapshot!(describe_requirements(&opt).unwrap(), @"requires trait soldier; not trait coward");
        assert!(describe_requirements(&CharacterOption::new("x", "X")).is_none());
    }

    #[test]
    fn option_effects() {
        let opt = CharacterOption::new("orc", "Orc")
            .with_attribute(AttributeId::Strength, 2)
            .with_attribute(AttributeId::Charisma, -1)
            .with_fate(-1)
            .with_trait("intimidating");
        insta::assert_snapshot!(describe_option_effects(&opt), @"+2 strength, -1 charisma, fate -1, grants intimidating");
        assert_eq!(describe_option_effects(&CharacterOption::new("human", "Human")), "no effect");
    }

    #[test]
    fn fate_labels() {
        assert_eq!(fate_label(-10), "Doomed");
        assert_eq!(fate_label(-1), "Ill-starred");
        assert_eq!(fate_label(0), "Unwritten");
        assert_eq!(fate_label(3), "Favored");
        assert_eq!(fate_label(4), "Fated");
    }

    #[test]
    fn attribute_listing() {
        let mut attrs = Attributes::default();
        assert_eq!(format_attributes(&attrs), "all attributes 0");
        attrs.set(AttributeId::Will, -1);
        attrs.set(AttributeId::Strength, 2);
        assert_eq!(format_attributes(&attrs), "strength 2, will -1");
    }
}
