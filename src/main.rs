//! Stencil's main application entry point and orchestration logic.
//! Handles command-line argument parsing, the project-creation flow,
//! and coordinates interactions between different modules.

use std::path::PathBuf;

use stencil::{
    builtin::register_builtin_types,
    cli::{get_args, Args, Command},
    config::{load_config, Config},
    constants::LICENSE_FILE_NAME,
    error::{default_error_handler, Error, Result},
    hooks::{init_repository, CommandRunner, ShellRunner},
    license::{available_licenses, instantiate_license},
    logger::init_logger,
    processor::Processor,
    prompt::{DialoguerPrompter, Prompter},
    registry::Registry,
    resolver::resolve,
    substitute::Substituter,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the configuration and registers the built-in project types
/// 2. Resolves the project type (interactively when omitted)
/// 3. Resolves the replacement list and instantiates the template
/// 4. Writes the license file
/// 5. Fires the post-creation hooks and initializes version control
fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let mut registry = Registry::new();
    register_builtin_types(&mut registry, &config)?;
    let prompt = DialoguerPrompter::new();

    match args.command {
        Command::List => {
            let mut names = registry.names();
            names.sort();
            for name in names {
                println!("{}", name);
            }
            Ok(())
        }
        Command::Licenses => {
            for name in available_licenses(&config.license_dir)? {
                println!("{}", name);
            }
            Ok(())
        }
        Command::New { name, project_type, output_dir, license, no_license, no_vcs } => {
            create_project(
                &config,
                &registry,
                &prompt,
                &name,
                project_type,
                output_dir,
                license,
                no_license,
                no_vcs,
            )
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn create_project(
    config: &Config,
    registry: &Registry,
    prompt: &dyn Prompter,
    name: &str,
    project_type: Option<String>,
    output_dir: Option<PathBuf>,
    license: Option<String>,
    no_license: bool,
    no_vcs: bool,
) -> Result<()> {
    let type_name = match project_type {
        Some(type_name) => type_name,
        None => {
            let mut names = registry.names();
            names.sort();
            let index = prompt.select("Project type", &names)?;
            names[index].clone()
        }
    };
    let project_type = registry
        .lookup(&type_name)
        .ok_or_else(|| Error::UnknownProjectType { name: type_name.clone() })?;

    let destination =
        output_dir.unwrap_or_else(|| config.project_dir.join(name));

    // Type-specific entries come first so they win over the defaults
    // when token names collide.
    let mut specs = project_type.replacements.clone();
    specs.extend(config.default_replacements(name));
    let replacements = resolve(&specs, config, prompt)?;
    let substituter = Substituter::new(&replacements)?;

    let processor = Processor::new(config, &substituter);
    processor.instantiate(&project_type.template, &destination)?;

    if !no_license {
        let license_name = license.or_else(|| project_type.license.clone());
        if let Some(license_name) = license_name {
            let license_file = config.license_dir.join(&license_name);
            instantiate_license(
                &license_file,
                &destination.join(LICENSE_FILE_NAME),
                &substituter,
            )?;
        }
    }

    let project_dir = if destination.is_absolute() {
        destination.clone()
    } else {
        std::env::current_dir().map_err(Error::Io)?.join(&destination)
    };

    if let Some(post_create) = &project_type.post_create {
        post_create(&project_dir)?;
    }

    let runner = ShellRunner::new();
    let pending = match &project_type.post_command {
        Some(argv) => Some(runner.spawn(argv, &project_dir)?),
        None => None,
    };

    if config.vcs && !no_vcs {
        init_repository(&project_dir)?;
    }

    // Post-creation tooling failures are surfaced but do not undo the
    // already-created project.
    if let Some(handle) = pending {
        if let Err(err) = handle.wait() {
            log::warn!("{}", err);
        }
    }

    println!("Project created successfully in {}.", destination.display());
    Ok(())
}
