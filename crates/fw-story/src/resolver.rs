//! Choice availability and outcome resolution.

use fw_core::Character;
use rand::Rng;

use crate::condition::Condition;
use crate::scenario::{Choice, Outcome};

/// Evaluate a condition against a character.
pub fn evaluate_condition(condition: &Condition, character: &Character) -> bool {
    condition.evaluate(character)
}

/// Returns true if the choice is offered to the character.
///
/// A `chance` gate is drawn first, once per call: a uniform roll in `[0, 1)`
/// above the chance hides the choice. The `requires` condition is checked
/// after the draw, so the random source advances even when the condition fails.
pub fn is_choice_available<R: Rng>(
    choice: &Choice,
    character: &Character,
    rng: &mut R,
) -> bool {
    let Some(gate) = &choice.available else {
        return true;
    };
    if let Some(chance) = gate.chance {
        let roll: f64 = rng.random();
        if roll > chance {
            tracing::trace!(choice = %choice.text, roll, chance, "chance gate failed");
            return false;
        }
    }
    gate.requires
        .as_ref()
        .is_none_or(|condition| condition.evaluate(character))
}

/// The destination of the first outcome whose condition holds, if any.
pub fn resolve_outcome<'a>(outcomes: &'a [Outcome], character: &Character) -> Option<&'a str> {
    outcomes
        .iter()
        .find(|o| o.condition.evaluate(character))
        .map(|o| o.next.as_str())
}
