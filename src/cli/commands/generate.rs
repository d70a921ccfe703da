use std::{io, path::Path};

use anyhow::{Context, Result};

use super::{
    CommandResult, CommandSummary, GenerateSummary, OutputStatus,
    helper::{Settings, merge_settings},
};
use crate::{
    cli::args::GenerateArgs,
    config::load_config,
    core::{Generation, generate as run_pipeline},
    error::Error,
    fs::FileSystem,
};

/// Generate the types file, or compare it with the existing one in `--check` mode.
pub fn generate(args: GenerateArgs, cwd: &Path, fs: &dyn FileSystem) -> Result<CommandResult> {
    let loaded = load_config(cwd)?;
    let settings = merge_settings(args, loaded.config, cwd)?;
    tracing::debug!(
        template = %settings.options.template,
        from_config_file = loaded.from_file,
        "resolved settings"
    );

    let generation = run_pipeline(&settings.options, fs)?;
    let output_path = cwd.join(&settings.output);

    let status = if settings.check {
        compare_output(&output_path, &generation.output, fs)?
    } else {
        fs.write(&output_path, &generation.output)
            .map_err(|source| Error::Write {
                path: output_path.clone(),
                source,
            })?;
        OutputStatus::Written
    };

    Ok(CommandResult {
        summary: CommandSummary::Generate(summarize(&settings, generation, status)),
    })
}

fn compare_output(path: &Path, expected: &str, fs: &dyn FileSystem) -> Result<OutputStatus> {
    match fs.read(path) {
        Ok(existing) if existing == expected.as_bytes() => Ok(OutputStatus::UpToDate),
        Ok(_) => Ok(OutputStatus::Stale),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(OutputStatus::Stale),
        Err(err) => {
            Err(err).with_context(|| format!("Failed to read existing output: {}", path.display()))
        }
    }
}

fn summarize(settings: &Settings, generation: Generation, status: OutputStatus) -> GenerateSummary {
    GenerateSummary {
        output: settings.output.clone(),
        status,
        languages: generation.resolved.languages,
        default_language: generation.resolved.default_language,
        namespaces: generation
            .namespaces
            .into_iter()
            .map(|(namespace, keys)| (namespace, keys.len()))
            .collect(),
    }
}
