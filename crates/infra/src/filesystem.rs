// crates/infra/src/filesystem.rs
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use confdiff_ports::{DocumentDto, DocumentSource, LoadFailure, LoadPlan, LoadedDocuments};
use confdiff_shared_kernel::{DeviceId, InfraResult, InfrastructureError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

use crate::persistence::FileReader;

/// Filesystem adapter implementing the `DocumentSource` port.
///
/// Explicit files are read as given. A directory contributes its direct
/// children (no recursion), sorted by name and filtered by the include globs.
#[derive(Debug, Default)]
pub struct FsDocumentSource;

impl FsDocumentSource {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentSource for FsDocumentSource {
    fn load(&self, plan: &LoadPlan) -> Result<LoadedDocuments> {
        let include = compile_patterns(&plan.include)?;
        let mut failures = Vec::new();
        let paths = collect_paths(plan, include.as_ref(), &mut failures);
        tracing::debug!(candidates = paths.len(), "reading configuration documents");

        let mut documents = Vec::with_capacity(paths.len());
        for (path, outcome) in paths.iter().zip(read_all(&paths)) {
            match outcome {
                Ok(text) => {
                    documents.push(DocumentDto { device: DeviceId::from_path(path), path: path.clone(), text })
                }
                Err(err) => failures.push(LoadFailure::new(path.clone(), err.to_string())),
            }
        }
        Ok(LoadedDocuments { documents, failures })
    }
}

/// Expand inputs into an ordered, duplicate-free list of files to read.
fn collect_paths(plan: &LoadPlan, include: Option<&GlobSet>, failures: &mut Vec<LoadFailure>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    for input in expand_inputs(plan, failures) {
        if input.is_dir() {
            match list_directory(&input, plan.include_hidden, include) {
                Ok(mut children) => {
                    if children.is_empty() {
                        tracing::warn!(dir = %input.display(), "directory contains no matching files");
                    }
                    paths.append(&mut children);
                }
                Err(err) => failures.push(LoadFailure::new(input, err.to_string())),
            }
        } else {
            paths.push(input);
        }
    }

    let mut seen = HashSet::new();
    paths.retain(|p| seen.insert(p.clone()));
    paths
}

/// Positional inputs followed by the entries of `files_from`, if any.
fn expand_inputs(plan: &LoadPlan, failures: &mut Vec<LoadFailure>) -> Vec<PathBuf> {
    let mut inputs = plan.inputs.clone();
    if let Some(list) = &plan.files_from {
        match FileReader::read_lines(list) {
            Ok(lines) => {
                let base = list.parent().unwrap_or_else(|| Path::new(""));
                inputs.extend(lines.into_iter().map(|line| resolve_listed(base, &line)));
            }
            Err(err) => failures.push(LoadFailure::new(list.clone(), err.to_string())),
        }
    }
    inputs
}

/// Relative entries in a list file are taken relative to the list itself.
fn resolve_listed(base: &Path, entry: &str) -> PathBuf {
    let path = PathBuf::from(entry);
    if path.is_absolute() { path } else { base.join(path) }
}

fn list_directory(dir: &Path, include_hidden: bool, include: Option<&GlobSet>) -> InfraResult<Vec<PathBuf>> {
    let mut builder = WalkBuilder::new(dir);
    builder
        .max_depth(Some(1))
        .hidden(!include_hidden)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .ignore(false)
        .parents(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    let mut files = Vec::new();
    for result in builder.build() {
        let entry =
            result.map_err(|err| InfrastructureError::Walk { path: dir.to_path_buf(), details: err.to_string() })?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let path = entry.into_path();
        if matches_include(&path, include) {
            files.push(path);
        }
    }
    Ok(files)
}

fn matches_include(path: &Path, include: Option<&GlobSet>) -> bool {
    let Some(set) = include else {
        return true;
    };
    path.file_name().is_some_and(|name| set.is_match(name))
}

fn compile_patterns(patterns: &[String]) -> InfraResult<Option<GlobSet>> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        #[cfg(windows)]
        let pattern = &pattern.replace('\\', "/");
        let glob = Glob::new(pattern)
            .map_err(|err| InfrastructureError::InvalidPattern { pattern: pattern.clone(), details: err.to_string() })?;
        builder.add(glob);
    }
    builder
        .build()
        .map(Some)
        .map_err(|err| InfrastructureError::InvalidPattern { pattern: patterns.join(","), details: err.to_string() })
}

#[cfg(feature = "parallel")]
fn read_all(paths: &[PathBuf]) -> Vec<InfraResult<String>> {
    use rayon::prelude::*;
    paths.par_iter().map(|path| FileReader::read_text(path)).collect()
}

#[cfg(not(feature = "parallel"))]
fn read_all(paths: &[PathBuf]) -> Vec<InfraResult<String>> {
    paths.iter().map(|path| FileReader::read_text(path)).collect()
}
