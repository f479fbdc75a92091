use std::fs;
use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use fw_builder::{
    CharacterBuilderState, assemble_checked, select_option, update_appearance_selections,
};
use fw_core::describe::fate_label;
use fw_core::{AppearanceConfig, AppearanceSelections, Character, Selections};
use miette::{Context, IntoDiagnostic};
use serde::Deserialize;

/// What the player picked, as read from a picks file.
#[derive(Debug, Deserialize)]
struct Picks {
    name: String,
    #[serde(default)]
    selections: Selections,
    #[serde(default)]
    appearance: AppearanceSelections,
}

pub fn run(
    data: &Path,
    appearance: Option<&Path>,
    picks: &Path,
    output: Option<&Path>,
) -> miette::Result<()> {
    let data = super::load_creation_data(data)?;
    let config = match appearance {
        Some(path) => super::load_appearance(path)?,
        None => AppearanceConfig::default(),
    };
    let picks: Picks = serde_json::from_str(&super::read_file(picks)?)
        .into_diagnostic()
        .wrap_err("invalid picks file")?;

    for (category_id, _) in picks.selections.iter() {
        let category = data.category(category_id).into_diagnostic()?;
        let ids = picks.selections.get(category_id);
        if category.is_single_select() && ids.len() > 1 {
            miette::bail!(
                "category '{category_id}' takes one pick, got {}: {}",
                ids.len(),
                ids.join(", ")
            );
        }
    }
    config.check_selections(&picks.appearance).into_diagnostic()?;
    if let Some(portrait_id) = &picks.appearance.portrait_id
        && !config
            .matching_portraits(&picks.appearance, None, None)
            .iter()
            .any(|p| &p.id == portrait_id)
    {
        miette::bail!(
            "portrait '{portrait_id}' does not depict the chosen build, skin tone, and hair color"
        );
    }

    tracing::debug!(name = %picks.name, picks = picks.selections.total(), "building character");
    // Content order: prerequisites come from earlier categories
    let mut state = CharacterBuilderState::new().with_name(&picks.name);
    for category in &data.categories {
        for option_id in picks.selections.get(&category.id) {
            state = select_option(&state, &category.id, option_id, &data)
                .into_diagnostic()
                .wrap_err_with(|| format!("cannot pick {}/{option_id}", category.id))?;
        }
    }
    state = update_appearance_selections(&state, picks.appearance, &config);

    let character = assemble_checked(&state, &data).into_diagnostic()?;
    print_summary(&character);

    if let Some(path) = output {
        let json = character.to_json().into_diagnostic()?;
        fs::write(path, json)
            .into_diagnostic()
            .wrap_err_with(|| format!("cannot write {}", path.display()))?;
        println!("  Wrote {}", path.display());
    }

    Ok(())
}

fn print_summary(character: &Character) {
    println!("  {}", character.name.bold());
    println!(
        "  Fate: {} ({})",
        character.fate,
        fate_label(character.fate)
    );

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Attribute", "Value"]);
    for (id, value) in character.attributes.iter() {
        table.add_row(vec![id.to_string(), value.to_string()]);
    }
    println!("{table}");

    if character.traits.is_empty() {
        println!("  Traits: none");
    } else {
        println!("  Traits: {}", character.traits.join(", "));
    }
    let picks: Vec<String> = character
        .selections
        .iter()
        .map(|(category, option)| format!("{category}/{option}"))
        .collect();
    println!("  Picks: {}", picks.join(", "));
}
