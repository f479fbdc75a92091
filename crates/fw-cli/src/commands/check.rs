use std::path::Path;

use fw_builder::validate_creation_data;
use fw_story::validate_bundle;

pub fn run(
    data: Option<&Path>,
    appearance: Option<&Path>,
    story: Option<&Path>,
) -> miette::Result<()> {
    if data.is_none() && appearance.is_none() && story.is_none() {
        miette::bail!("nothing to check: pass --data, --appearance, or --story");
    }

    let mut errors = 0;
    let mut warnings = 0;

    if let Some(path) = data {
        let data = super::load_creation_data(path)?;
        let issues = validate_creation_data(&data);
        warnings += issues.iter().filter(|i| !i.is_error).count();
        errors += super::print_issues(issues.iter().map(|i| (i.is_error, i.to_string())));
        let options: usize = data.categories.iter().map(|c| c.options.len()).sum();
        println!("  {} categories, {options} options", data.categories.len());
    }

    if let Some(path) = appearance {
        let config = super::load_appearance(path)?;
        println!(
            "  {} builds, {} skin tones, {} hair colors, {} portraits",
            config.builds.len(),
            config.skin_tones.len(),
            config.hair_colors.len(),
            config.portraits.len()
        );
    }

    if let Some(path) = story {
        let bundle = super::load_bundle(path)?;
        let issues = validate_bundle(&bundle);
        warnings += issues.iter().filter(|i| !i.is_error).count();
        errors += super::print_issues(issues.iter().map(|i| (i.is_error, i.to_string())));
        println!("  {} scenarios", bundle.len());
    }

    if errors > 0 {
        miette::bail!(
            "{errors} error{}, {warnings} warning{}",
            plural(errors),
            plural(warnings)
        );
    }
    if warnings > 0 {
        println!("  Checks passed with {warnings} warning{}.", plural(warnings));
    } else {
        println!("  All checks passed.");
    }
    Ok(())
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
