use std::path::Path;

use crate::{
    emitter::{write_dialect, Emitter},
    error::MavgenError,
    mapper::map_definition,
    resolver::resolve_definitions,
    traits::Fetch,
    types::MappedDefinition,
    utils::address_name,
};

/// Counts reported after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationReport {
    pub definitions: usize,
    pub messages:    usize,
    pub enums:       usize,
}

/// Package name derived from the root address (`.../common.xml` -> `common`).
pub fn package_name(root: &str) -> &str {
    let name = address_name(root);
    name.strip_suffix(".xml").unwrap_or(name)
}

/// Resolves `root` and renders the whole dialect, without touching the filesystem
/// beyond what `fetcher` reads.
pub fn compile_dialect<F: Fetch>(root: &str, fetcher: F) -> Result<(String, GenerationReport), MavgenError> {
    let definitions = resolve_definitions(root, fetcher)?;

    let mapped = definitions
        .iter()
        .map(map_definition)
        .collect::<Result<Vec<MappedDefinition>, _>>()?;

    let report = GenerationReport {
        definitions: mapped.len(),
        messages:    mapped.iter().map(|d| d.messages.len()).sum(),
        enums:       mapped.iter().map(|d| d.enums.len()).sum(),
    };

    let source = Emitter::new()?.render(&mapped, package_name(root))?;
    Ok((source, report))
}

/// Generates the Rust dialect for `root` into `output`.
///
/// `output` must end with `.rs`. Nothing is written unless every definition
/// resolves, maps and renders.
pub fn generate<F: Fetch>(output: &Path, root: &str, fetcher: F) -> Result<GenerationReport, MavgenError> {
    if output.extension().and_then(|e| e.to_str()) != Some("rs") {
        return Err(MavgenError::InvalidOutputPath(output.to_path_buf()));
    }

    let (source, report) = compile_dialect(root, fetcher)?;
    write_dialect(output, &source)?;
    Ok(report)
}
