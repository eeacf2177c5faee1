//! Add Use Case
//!
//! read → name → normalize → assemble → (preview | write assets, generate
//! sources, update manifests)

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::assets::{existing_names, read_corpus};
use crate::bundle::{assemble, EntrySource, IconBundle, IconGroup};
use crate::codegen;
use crate::error::{LuminError, LuminResult};
use crate::fs::FileSystem;
use crate::manifest::{csr_export_line, ssr_export_line, ExportManifest};
use crate::models::{CanonicalName, IconAsset, ProcessedIcon, Weight};
use crate::naming::{canonicalize_with, check_name, parse_file_name, SVG_EXTENSION};
use crate::normalize::{normalize, SourceContext};

use super::events::{AddEvent, AddEventSink};
use super::options::{AddInput, AddOptions};
use super::result::{AddResult, Skipped};

/// Add icons to the library
///
/// Fatal errors (missing input, bad corpus folder, I/O while writing) abort
/// the run. Invalid SVG files and colliding icons are skipped and reported.
pub fn run_add(
    options: &AddOptions,
    fs: &dyn FileSystem,
    sink: &dyn AddEventSink,
) -> LuminResult<AddResult> {
    let mut result = AddResult {
        dry_run: options.dry_run,
        ..AddResult::default()
    };

    let assets = collect_assets(options, fs, sink, &mut result)?;
    let icons = process_assets(assets, options, sink, &mut result)?;
    let existing = library_names(options, fs)?;

    let report = assemble(icons, &existing, options.overwrite);
    for err in &report.skipped {
        let name = match err {
            LuminError::IconExists { name } => name.clone(),
            other => other.to_string(),
        };
        sink.on_event(AddEvent::IconSkipped {
            name: name.clone(),
            reason: err.to_string(),
        });
        result.skipped.push(Skipped {
            subject: name,
            reason: err.to_string(),
        });
    }
    for warning in &report.warnings {
        sink.on_event(AddEvent::Warning {
            message: warning.message(),
        });
    }
    result.warnings = report.warnings;
    result.bundle = report.bundle;

    if !result.bundle.is_empty() {
        result.exports_appended = if options.dry_run {
            plan(&result.bundle, options, fs, sink, &mut result.planned)?
        } else {
            write_library(&result.bundle, options, fs, sink, &mut result.written)?
        };
    }

    sink.on_event(AddEvent::Completed {
        icon_count: result.icon_count(),
        written_count: result.written.len(),
        skipped_count: result.skipped.len(),
        dry_run: options.dry_run,
    });

    Ok(result)
}

fn collect_assets(
    options: &AddOptions,
    fs: &dyn FileSystem,
    sink: &dyn AddEventSink,
    result: &mut AddResult,
) -> LuminResult<Vec<IconAsset>> {
    match &options.input {
        AddInput::Folder(folder) => {
            if !fs.is_dir(folder) {
                return Err(LuminError::DirectoryNotFound {
                    path: folder.clone(),
                });
            }

            let files: Vec<PathBuf> = fs
                .list_dir(folder)?
                .into_iter()
                .filter(|p| !fs.is_dir(p) && has_svg_extension(p))
                .collect();
            if files.is_empty() {
                return Err(LuminError::NoSvgFiles {
                    path: folder.clone(),
                });
            }

            sink.on_event(AddEvent::Started {
                input: folder.clone(),
                file_count: files.len(),
            });

            let mut assets = Vec::with_capacity(files.len());
            for path in files {
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let (name, weight) = parse_file_name(&file_name);
                match fs.read_to_string(&path) {
                    Ok(markup) => assets.push(IconAsset::new(name, weight, markup, path)),
                    Err(err) => skip_file(&path, &err, sink, result),
                }
            }
            Ok(assets)
        }
        AddInput::File { path, name } => {
            if name.is_empty() {
                return Err(LuminError::MissingName);
            }
            check_name(name, &canonicalize_with(name, &options.prefixes))?;
            if !fs.exists(path) {
                return Err(LuminError::FileNotFound { path: path.clone() });
            }
            if !has_svg_extension(path) {
                return Err(LuminError::NotSvg { path: path.clone() });
            }

            sink.on_event(AddEvent::Started {
                input: path.clone(),
                file_count: 1,
            });

            let markup = fs.read_to_string(path)?;
            Ok(vec![IconAsset::new(
                name.clone(),
                Weight::Regular,
                markup,
                path.clone(),
            )])
        }
    }
}

fn has_svg_extension(path: &Path) -> bool {
    path.to_string_lossy().ends_with(SVG_EXTENSION)
}

fn skip_file(path: &Path, err: &LuminError, sink: &dyn AddEventSink, result: &mut AddResult) {
    sink.on_event(AddEvent::FileSkipped {
        path: path.to_path_buf(),
        reason: err.to_string(),
    });
    result.skipped.push(Skipped {
        subject: path.display().to_string(),
        reason: err.to_string(),
    });
}

fn process_assets(
    assets: Vec<IconAsset>,
    options: &AddOptions,
    sink: &dyn AddEventSink,
    result: &mut AddResult,
) -> LuminResult<Vec<ProcessedIcon>> {
    let mut icons = Vec::with_capacity(assets.len());

    for asset in assets {
        let canonical = canonicalize_with(&asset.raw_name, &options.prefixes);
        if let Err(err) = check_name(&asset.raw_name, &canonical) {
            skip_file(&asset.source_path, &err, sink, result);
            continue;
        }

        let ctx = SourceContext {
            name: &asset.raw_name,
            weight: asset.weight,
            file: &asset.source_path,
        };
        let normalized = match normalize(&asset.raw_markup, ctx, &options.normalize) {
            Ok(normalized) => normalized,
            Err(err) if err.is_recoverable() => {
                skip_file(&asset.source_path, &err, sink, result);
                continue;
            }
            Err(err) => return Err(err),
        };

        for note in &normalized.notes {
            sink.on_event(AddEvent::Adjusted {
                name: asset.raw_name.clone(),
                weight: asset.weight,
                message: note.message(),
            });
        }
        sink.on_event(AddEvent::FileProcessed {
            path: asset.source_path.clone(),
            name: asset.raw_name.clone(),
            weight: asset.weight,
        });

        icons.push(ProcessedIcon {
            canonical,
            name: asset.raw_name,
            weight: asset.weight,
            svg: normalized.svg,
            fragment: normalized.fragment,
        });
    }

    Ok(icons)
}

/// Canonical names already in the core and custom corpora
fn library_names(options: &AddOptions, fs: &dyn FileSystem) -> LuminResult<HashSet<CanonicalName>> {
    let layout = &options.layout;
    let mut names = HashSet::new();
    for root in [&layout.core_assets, &layout.custom_assets] {
        if fs.is_dir(root) {
            let corpus = read_corpus(root, fs, &options.normalize)?;
            names.extend(existing_names(&corpus, &options.prefixes));
        }
    }
    Ok(names)
}

/// Every file an icon group produces, assets first
fn group_files(group: &IconGroup, options: &AddOptions) -> Vec<PathBuf> {
    let layout = &options.layout;
    let mut files: Vec<PathBuf> = Weight::ALL
        .iter()
        .filter(|w| group.get(**w).is_some())
        .map(|w| layout.asset_path(&group.raw_name, *w))
        .collect();
    files.push(layout.defs_file(&group.canonical));
    files.push(layout.csr_file(&group.canonical));
    files.push(layout.ssr_file(&group.canonical));
    files
}

/// Report what a write would do; returns the export lines it would append
fn plan(
    bundle: &IconBundle,
    options: &AddOptions,
    fs: &dyn FileSystem,
    sink: &dyn AddEventSink,
    planned: &mut Vec<PathBuf>,
) -> LuminResult<usize> {
    for group in bundle.groups() {
        let files = group_files(group, options);
        sink.on_event(AddEvent::Planned {
            name: group.canonical.clone(),
            weights: group.supplied_weights(),
            files: files.clone(),
        });
        planned.extend(files);
    }

    let (csr_lines, ssr_lines) = export_lines(bundle);
    let mut pending = 0;
    for (index, lines) in [
        (&options.layout.index, &csr_lines),
        (&options.layout.ssr_index, &ssr_lines),
    ] {
        let manifest = ExportManifest::new(index);
        let missing = manifest.pending(fs, lines)?.len();
        if missing > 0 {
            planned.push(manifest.path().to_path_buf());
            pending += missing;
        }
    }
    Ok(pending)
}

fn export_lines(bundle: &IconBundle) -> (Vec<String>, Vec<String>) {
    let names = bundle.names();
    (
        names.iter().map(|n| csr_export_line(n)).collect(),
        names.iter().map(|n| ssr_export_line(n)).collect(),
    )
}

fn write_library(
    bundle: &IconBundle,
    options: &AddOptions,
    fs: &dyn FileSystem,
    sink: &dyn AddEventSink,
    written: &mut Vec<PathBuf>,
) -> LuminResult<usize> {
    let layout = &options.layout;

    for group in bundle.groups() {
        for (weight, entry) in &group.entries {
            let path = layout.asset_path(&group.raw_name, *weight);
            fs.write_atomic(&path, &entry.svg)?;
            let fallback = match entry.source {
                EntrySource::Supplied => None,
                EntrySource::Fallback(from) => Some(from),
            };
            sink.on_event(AddEvent::AssetWritten {
                path: path.clone(),
                fallback,
            });
            written.push(path);
        }

        let sources = codegen::generate(group, &options.normalize);
        for (path, content) in [
            (layout.defs_file(&group.canonical), &sources.defs),
            (layout.csr_file(&group.canonical), &sources.csr),
            (layout.ssr_file(&group.canonical), &sources.ssr),
        ] {
            fs.write_atomic(&path, content)?;
            written.push(path);
        }
        sink.on_event(AddEvent::ComponentsGenerated {
            name: group.canonical.clone(),
        });
    }

    let (csr_lines, ssr_lines) = export_lines(bundle);
    let mut appended = ExportManifest::new(&layout.index).ensure_lines(fs, &csr_lines)?;
    appended += ExportManifest::new(&layout.ssr_index).ensure_lines(fs, &ssr_lines)?;

    sink.on_event(AddEvent::ExportsUpdated {
        icon_count: bundle.len(),
        appended,
    });

    Ok(appended)
}
