use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use fw_core::describe::{describe_option_effects, describe_requirements};
use miette::IntoDiagnostic;

pub fn run(data: &Path, category: Option<&str>) -> miette::Result<()> {
    let data = super::load_creation_data(data)?;

    let categories = match category {
        Some(id) => vec![data.category(id).into_diagnostic()?],
        None => data.categories.iter().collect(),
    };

    for category in categories {
        println!(
            "  {} ({}, picks {}..={})",
            category.name, category.id, category.min_picks, category.max_picks
        );
        if category.options.is_empty() {
            println!("  No options.");
            println!();
            continue;
        }

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Id", "Name", "Effects", "Requirements"]);
        for option in &category.options {
            let mut name = option.name.clone();
            if option.is_drawback {
                name.push_str(" (drawback)");
            }
            let requires = describe_requirements(option).unwrap_or_else(|| "-".to_string());
            table.add_row(vec![
                option.id.clone(),
                name,
                describe_option_effects(option),
                requires,
            ]);
        }
        println!("{table}");
        println!();
    }

    Ok(())
}
