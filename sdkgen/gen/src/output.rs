//! Output assembly and file writing for generated bindings.
//!
//! This module handles the final phase of generation: assembling the
//! per-operation units into a service module, rendering the dispatcher, and
//! writing both to disk atomically.
//!
//! ## Output Structure
//!
//! Each service produces two files:
//! ```text
//! out/
//! ├── DynamoDB.jl            # Documented operation bindings
//! └── DynamoDB_dispatch.jl   # Service dispatcher
//! ```
//!
//! ## Safety Guarantees
//!
//! - **Atomic writes**: Uses temp file + rename pattern to prevent partial writes
//! - **All or nothing**: Every operation is generated before anything is written

use std::fs;
use std::path::{Path, PathBuf};

use sdkgen_define::ServiceDefinition;
use tracing::{info, instrument};

use crate::binding::{BindingGenerator, escape_docstring};
use crate::dispatcher::{dispatcher_name, render_dispatcher};
use crate::docs::{DocFormatter, PassThrough, format_optional};
use crate::errors::GeneratorError;
use crate::naming::to_module_name;

/// Library-level generation options.
pub struct GeneratorConfig<'a> {
    /// Overrides the module name derived from the service description.
    pub module_name: Option<String>,
    /// Converts documentation markup before it is embedded.
    pub docs: &'a dyn DocFormatter,
}

impl Default for GeneratorConfig<'static> {
    fn default() -> Self {
        Self {
            module_name: None,
            docs: &PassThrough,
        }
    }
}

/// Generated text for one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedService {
    /// Module the bindings are declared in.
    pub module_name: String,
    /// The binding module: header, one unit per operation, footer.
    pub bindings: String,
    /// The dispatcher function.
    pub dispatcher: String,
}

impl GeneratedService {
    /// File name of the binding module.
    pub fn bindings_file(&self) -> String {
        format!("{}.jl", self.module_name)
    }

    /// File name of the dispatcher.
    pub fn dispatcher_file(&self) -> String {
        format!("{}_dispatch.jl", self.module_name)
    }
}

/// Returns the module name for `service`.
///
/// ## Resolution Order
///
/// 1. Explicit override (highest priority)
/// 2. `serviceId` from the metadata
/// 3. Endpoint prefix (fallback)
///
/// ## Errors
///
/// Returns [`GeneratorError::ConfigError`] if the chosen name has no
/// alphanumeric characters.
///
/// ## Examples
///
/// ```
/// use sdkgen_define::{Metadata, Protocol, ServiceDefinition};
/// use sdkgen_gen::output::module_name;
///
/// let mut service = ServiceDefinition::new(Metadata::new(Protocol::Json, "dynamodb", "2012-08-10"));
/// assert_eq!(module_name(&service, None).unwrap(), "Dynamodb");
///
/// service.metadata.service_id = Some("DynamoDB".to_string());
/// assert_eq!(module_name(&service, None).unwrap(), "DynamoDB");
/// assert_eq!(module_name(&service, Some("Dynamo")).unwrap(), "Dynamo");
/// ```
pub fn module_name(
    service: &ServiceDefinition,
    override_name: Option<&str>,
) -> Result<String, GeneratorError> {
    let meta = &service.metadata;
    let source = override_name
        .or(meta.service_id.as_deref())
        .unwrap_or(&meta.endpoint_prefix);

    let name = to_module_name(source);
    if name.is_empty() {
        return Err(GeneratorError::ConfigError(format!(
            "cannot derive a module name from '{source}'"
        )));
    }
    Ok(name)
}

/// Generates the binding module and dispatcher for a service.
///
/// Operations are emitted in declaration order. Any failing operation aborts
/// the whole service.
///
/// ## Errors
///
/// Propagates the first error raised while generating an operation, or a
/// [`GeneratorError::ConfigError`] for an unusable module name.
#[instrument(skip_all, fields(service = %service.metadata.endpoint_prefix))]
pub fn generate_service(
    service: &ServiceDefinition,
    config: &GeneratorConfig<'_>,
) -> Result<GeneratedService, GeneratorError> {
    let module_name = module_name(service, config.module_name.as_deref())?;
    let generator = BindingGenerator::new(service, config.docs, module_name.as_str());

    let mut units = Vec::with_capacity(service.operations.len());
    for (name, operation) in &service.operations {
        units.push(generator.generate_operation(name, operation)?);
    }

    let bindings = assemble_bindings(service, config.docs, &module_name, &units);
    let dispatcher = format!(
        "{}\n{}",
        header(service),
        render_dispatcher(service, generator.plan())
    );

    info!(
        module = %module_name,
        operations = units.len(),
        "generated service bindings"
    );

    Ok(GeneratedService {
        module_name,
        bindings,
        dispatcher,
    })
}

fn header(service: &ServiceDefinition) -> String {
    let meta = &service.metadata;
    let title = meta.service_full_name.as_deref().unwrap_or(&meta.endpoint_prefix);
    format!(
        "# This file is generated by sdkgen from the {title} service description ({}).\n",
        meta.api_version
    )
}

fn assemble_bindings(
    service: &ServiceDefinition,
    docs: &dyn DocFormatter,
    module_name: &str,
    units: &[String],
) -> String {
    let mut out = header(service);
    out.push('\n');

    if let Some(doc) = format_optional(docs, service.documentation.as_deref()) {
        out.push_str(&format!("\"\"\"\n{}\n\"\"\"\n", escape_docstring(&doc)));
    }

    out.push_str(&format!(
        "module {module_name}\n\nusing AWSCore\nusing AWSCore.Services.{}\n\n",
        dispatcher_name(service)
    ));

    for unit in units {
        out.push_str(unit);
        out.push('\n');
    }

    out.push_str(&format!("end # module {module_name}\n"));
    out
}

/// Writes one generated file through a hidden sibling (`.S3.jl.tmp`) that is
/// renamed over `path`, so a reader sees either the previous module or the
/// complete new one. Missing parent directories are created.
///
/// ## Errors
///
/// - [`GeneratorError::ConfigError`] if `path` does not end in a file name.
/// - [`GeneratorError::WriteError`] naming the directory, temp file or target
///   that failed. A temp file whose rename failed is removed.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    let file_name = path.file_name().ok_or_else(|| {
        GeneratorError::ConfigError(format!("'{}' does not name a file", path.display()))
    })?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(write_error(dir))?;

    let staged = dir.join(format!(".{}.tmp", file_name.to_string_lossy()));
    fs::write(&staged, content).map_err(write_error(&staged))?;

    if let Err(source) = fs::rename(&staged, path) {
        let _ = fs::remove_file(&staged);
        return Err(write_error(path)(source));
    }
    Ok(())
}

fn write_error(path: &Path) -> impl FnOnce(std::io::Error) -> GeneratorError + '_ {
    move |source| GeneratorError::WriteError {
        path: path.display().to_string(),
        source,
    }
}

/// Writes a generated service to `output_dir`.
///
/// In dry-run mode both files are printed to stdout instead and nothing is
/// created.
///
/// ## Returns
///
/// The paths written (or that would have been written).
pub fn write_service(
    generated: &GeneratedService,
    output_dir: &Path,
    dry_run: bool,
) -> Result<Vec<PathBuf>, GeneratorError> {
    let files = [
        (generated.bindings_file(), &generated.bindings),
        (generated.dispatcher_file(), &generated.dispatcher),
    ];

    let mut paths = Vec::with_capacity(files.len());
    for (filename, content) in files {
        let path = output_dir.join(&filename);
        if dry_run {
            println!("=== {filename} ===\n{content}\n");
        } else {
            write_atomic(&path, content)?;
        }
        paths.push(path);
    }

    Ok(paths)
}
