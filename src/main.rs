//! Repose's main application entry point.
//! Parses the command line, sets up logging and dispatches to the build or
//! content creation commands.

use repose::{
    builder::Builder,
    cli::{get_args, Args, Command},
    context::BuildContext,
    error::{default_error_handler, Result},
    logger::init_logger,
    scaffold::new_content,
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
/// Page-local build failures are reported but leave the exit status at zero;
/// only build-aborting errors are returned.
fn run(args: Args) -> Result<()> {
    let ctx = BuildContext::load(&args.root, Some(args.config.as_path()))?;

    match args.command {
        Command::Build => {
            let summary = Builder::new(&ctx)?.build()?;
            if summary.is_clean() {
                println!(
                    "Site built successfully: {} pages, {} listings in {}.",
                    summary.pages.len(),
                    summary.listings.len(),
                    ctx.output_dir().display()
                );
            } else {
                log::warn!("{} pages failed to build", summary.failures.len());
                for failure in &summary.failures {
                    log::warn!("  {}", failure.path.display());
                }
                println!(
                    "Site built with errors: {} pages, {} listings, {} failures in {}.",
                    summary.pages.len(),
                    summary.listings.len(),
                    summary.failures.len(),
                    ctx.output_dir().display()
                );
            }
        }
        Command::New { content_type, file_name } => {
            let path = new_content(&ctx, &content_type, &file_name)?;
            println!("Successfully created new {}: '{}'", content_type, path.display());
        }
    }

    Ok(())
}
