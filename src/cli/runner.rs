use tracing::info;
use tracing_subscriber::EnvFilter;

use primitive_transform::{
    TransformParams, transform_directory_to_path, transform_path_to_path,
};

use super::args::CliArgs;
use super::errors::AppError;

/// Merge the optional JSON preset with command-line overrides.
fn resolve_params(args: &CliArgs) -> Result<TransformParams, AppError> {
    let mut params = match &args.config {
        Some(path) => TransformParams::load_json_file(path)?,
        None => TransformParams::default(),
    };

    if let Some(shapes) = args.shapes {
        params.shape_count = shapes;
    }
    if let Some(mode) = args.mode {
        params.options.mode = Some(mode);
    }
    if let Some(program) = &args.primitive_bin {
        params.program = Some(program.clone());
    }
    params.options.extra_flags.extend(args.extra.iter().cloned());

    params.validate()?;
    Ok(params)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        init_logging();
    }

    let params = resolve_params(&args)?;
    let batch_mode = args.batch || args.input_dir.is_some();

    if batch_mode {
        let input_dir = args.input_dir.ok_or(AppError::MissingArgument {
            arg: "--input-dir".to_string(),
        })?;
        let output_dir = args.output_dir.ok_or(AppError::MissingArgument {
            arg: "--output-dir".to_string(),
        })?;

        info!("Starting batch processing from directory: {:?}", input_dir);
        info!("Output directory: {:?}", output_dir);

        let report = transform_directory_to_path(&input_dir, &output_dir, &params, args.batch)?;

        info!("Batch processing complete!");
        info!("Processed: {}", report.processed);
        info!("Skipped: {}", report.skipped);
        info!("Errors: {}", report.errors);
    } else {
        let input = args.input.ok_or(AppError::MissingArgument {
            arg: "--input".to_string(),
        })?;
        let output = args.output.ok_or(AppError::MissingArgument {
            arg: "--output".to_string(),
        })?;

        transform_path_to_path(&input, &output, &params).map_err(AppError::from)?;
        info!("Successfully processed: {:?} -> {:?}", input, output);
    }

    Ok(())
}
