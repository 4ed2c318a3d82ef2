//! Command line demonstration for Parkways.

pub mod args;
pub mod demo;
pub mod render;

pub use args::{Args, OutputFormat};
pub use demo::{DemoError, DemoReport, run_demo};

/// Run the demonstration and produce everything destined for stdout.
pub fn run(args: &Args) -> String {
    render_outcome(run_demo(), args.format)
}

/// Render a demonstration result in the requested format.
///
/// Errors are folded into the output as `An error occurred: <message>`.
pub fn render_outcome(result: Result<DemoReport, DemoError>, format: OutputFormat) -> String {
    let rendered = result
        .map_err(|e| e.to_string())
        .and_then(|report| match format {
            OutputFormat::Text => Ok(render::render_text(&report)),
            OutputFormat::Json => render::render_json(&report).map_err(|e| e.to_string()),
        });

    match rendered {
        Ok(output) => output,
        Err(message) => {
            tracing::warn!(%message, "demonstration failed");
            format!("An error occurred: {message}\n")
        }
    }
}
