use dialoguer::{theme::ColorfulTheme, Confirm, Input};

/// Reads one line, trimmed. Empty input is allowed; required-field checks
/// belong to the caller.
pub(crate) fn line(prompt: &str) -> anyhow::Result<String> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(input.trim().to_string())
}

/// Reads one line with a prefilled default; empty or blank input falls back
/// to the default.
pub(crate) fn line_or_default(prompt: &str, default: &str) -> anyhow::Result<String> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;
    let input = input.trim();
    Ok(if input.is_empty() {
        default.to_string()
    } else {
        input.to_string()
    })
}

/// y/N confirmation. dialoguer only reacts to y, n, and Enter; Enter takes
/// the "no" default, so anything short of an explicit y declines.
pub(crate) fn confirm(prompt: &str) -> anyhow::Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}
