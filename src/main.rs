use anyhow::Result;
use bineye::areas::session::{CompareOptions, Session, Target, TargetKind};
use bineye::artifacts::core::PagerWriter;
use bineye::artifacts::matching::extension_filter::ExtensionFilter;
use bineye::artifacts::render::hex_dump::DumpMode;
use clap::Parser;
use colored::Colorize;
use is_terminal::IsTerminal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "bineye",
    version,
    about = "Binary file and folder comparison tool with hex visualization",
    long_about = "Compares two files or two folder trees byte by byte and reports \
    exactly where they differ: differing offsets, similarity percentage, highlighted \
    hex dumps, and an optional self-contained HTML report.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "First file or folder path")]
    path1: PathBuf,
    #[arg(index = 2, help = "Second file or folder path")]
    path2: PathBuf,
    #[arg(
        short = 'm',
        long = "max-bytes",
        default_value_t = 512,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Maximum bytes to display in hex dumps"
    )]
    max_bytes: u64,
    #[arg(short = 's', long = "side-by-side", help = "Show side-by-side comparison")]
    side_by_side: bool,
    #[arg(long, help = "Generate an HTML report")]
    html: bool,
    #[arg(
        short = 'o',
        long = "html-output",
        default_value = "comparison_report.html",
        help = "HTML report output file"
    )]
    html_output: PathBuf,
    #[arg(
        short = 't',
        long = "template",
        default_value = "template_report.html",
        help = "HTML template file"
    )]
    template: PathBuf,
    #[arg(
        short = 'e',
        long = "extensions",
        num_args = 1..,
        help = "Filter by file extensions (e.g. .bin .hex) - folder mode only"
    )]
    extensions: Vec<String>,
    #[arg(long = "no-recursive", help = "Disable recursive folder scanning")]
    no_recursive: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let target_a = Target::from_path(&cli.path1)?;
    let target_b = Target::from_path(&cli.path2)?;
    let file_mode = target_a.kind() == TargetKind::File;

    let extensions = if file_mode {
        if !cli.extensions.is_empty() {
            eprintln!(
                "{}",
                "\u{26a0} Warning: --extensions ignored for file comparison".yellow()
            );
        }
        ExtensionFilter::default()
    } else {
        ExtensionFilter::new(&cli.extensions)
    };

    let interactive = std::io::stdout().is_terminal();
    let options = CompareOptions {
        extensions,
        recursive: !cli.no_recursive,
        max_display_bytes: cli.max_bytes as usize,
        side_by_side: cli.side_by_side,
        generate_html: cli.html,
        html_output: cli.html_output,
        template_path: cli.template,
        dump_mode: if interactive {
            DumpMode::Ansi
        } else {
            DumpMode::Plain
        },
    };

    if interactive {
        let pager = minus::Pager::new();
        let mut session = Session::new(
            target_a,
            target_b,
            options,
            Box::new(PagerWriter::new(pager.clone())),
        )?;
        run(&mut session)?;
        minus::page_all(pager)?;
    } else {
        let mut session =
            Session::new(target_a, target_b, options, Box::new(std::io::stdout()))?;
        run(&mut session)?;
    }

    Ok(())
}

fn run(session: &mut Session) -> Result<()> {
    session.run()?;

    if session.options().generate_html {
        session.generate_html_report()?;
    }

    Ok(())
}
