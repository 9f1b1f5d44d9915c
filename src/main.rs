// Entry point and high-level CLI flow.
//
// - `analyze` runs one file end to end and writes the requested outputs.
// - `sample` writes the demo spreadsheet.
// - `interactive` (the default) is a menu: [1] loads a file and shows the
//   dashboard, [2] writes the report document for the loaded file.
use chrono::Local;
use clap::Parser;
use profit_report::config::{AnalyzeArgs, Cli, Command, DEFAULT_PREVIEW_ROWS};
use profit_report::error::AppError;
use profit_report::types::Analysis;
use profit_report::{analysis, loader, output, reports, telemetry, util};
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing::info;

/// Read one trimmed line after printing `prompt`. `None` on end of input.
fn prompt_line<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Option<String> {
    let _ = write!(out, "{prompt}");
    let _ = out.flush();
    let mut buf = String::new();
    match input.read_line(&mut buf) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(buf.trim().to_string()),
    }
}

/// Ask whether to go back to the menu after writing a report.
fn prompt_back_to_menu<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> bool {
    loop {
        let Some(resp) = prompt_line(input, out, "Back to Menu (Y/N): ") else {
            return false;
        };
        match resp.to_uppercase().as_str() {
            "Y" => return true,
            "N" => return false,
            _ => {
                let _ = writeln!(out, "Invalid choice. Please enter Y or N.");
            }
        }
    }
}

fn load_and_show<W: Write>(
    path: &Path,
    preview_rows: usize,
    out: &mut W,
) -> Result<Analysis, AppError> {
    let analysis = analysis::analyze_path(path)?;
    writeln!(
        out,
        "Processing spreadsheet... ({} rows analyzed)\n",
        util::format_int(analysis.summary.row_count)
    )?;
    write!(out, "{}", reports::render_dashboard(&analysis, preview_rows))?;
    Ok(analysis)
}

fn write_report(analysis: &Analysis, path: &Path) -> Result<(), AppError> {
    let document = reports::render_document(analysis, Local::now().naive_local());
    output::write_text(path, &document)?;
    info!(path = %path.display(), "report written");
    println!("(Report saved to {})", path.display());
    Ok(())
}

fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let analysis = load_and_show(&args.input, args.preview_rows, &mut io::stdout())?;
    if let Some(path) = &args.report {
        write_report(&analysis, path)?;
    }
    if let Some(path) = &args.json {
        output::write_json(path, &analysis)?;
        println!("(Analysis exported to {})", path.display());
    }
    if let Some(path) = &args.export {
        output::write_csv(path, &reports::export_rows(&analysis))?;
        println!("(Dataset exported to {})", path.display());
    }
    Ok(())
}

fn run_sample(path: &Path) -> Result<(), AppError> {
    if loader::is_workbook_path(path) {
        output::write_sample_workbook(path, &reports::sample_rows())?;
    } else {
        output::write_csv(path, &reports::sample_rows())?;
    }
    println!("{} created.", path.display());
    Ok(())
}

fn run_interactive<R: BufRead, W: Write>(input: &mut R, out: &mut W) {
    // Only the most recently loaded file is kept; loading again replaces it.
    let mut loaded: Option<Analysis> = None;
    loop {
        let _ = writeln!(out, "Select an option:");
        let _ = writeln!(out, "[1] Load a spreadsheet");
        let _ = writeln!(out, "[2] Generate Report\n");
        let Some(choice) = prompt_line(input, out, "Enter choice: ") else {
            let _ = writeln!(out, "Exiting the program.");
            return;
        };
        match choice.as_str() {
            "1" => {
                let Some(path) =
                    prompt_line(input, out, "Spreadsheet path (Satis, Maliyet columns): ")
                else {
                    let _ = writeln!(out, "Exiting the program.");
                    return;
                };
                match load_and_show(Path::new(&path), DEFAULT_PREVIEW_ROWS, out) {
                    Ok(analysis) => loaded = Some(analysis),
                    Err(e) => eprintln!("Failed to load file: {}\n", e),
                }
            }
            "2" => {
                let _ = writeln!(out);
                let Some(analysis) = &loaded else {
                    let _ = writeln!(
                        out,
                        "Error: No data loaded. Please load a spreadsheet first (option 1).\n"
                    );
                    continue;
                };
                if let Err(e) = write_report(analysis, Path::new(reports::DEFAULT_REPORT_FILE)) {
                    eprintln!("Write error: {}", e);
                }
                if !prompt_back_to_menu(input, out) {
                    let _ = writeln!(out, "Exiting the program.");
                    return;
                }
            }
            _ => {
                let _ = writeln!(out, "Invalid choice. Please enter 1 or 2.\n");
            }
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    telemetry::init(&cli.telemetry())?;
    match cli.command.unwrap_or(Command::Interactive) {
        Command::Analyze(args) => run_analyze(args),
        Command::Sample { path } => run_sample(&path),
        Command::Interactive => {
            run_interactive(&mut io::stdin().lock(), &mut io::stdout());
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
