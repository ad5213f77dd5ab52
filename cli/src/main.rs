//! bilingual-pdf CLI - two-column bilingual pages from markdown

mod google;
mod pdf;

use std::fs;
use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use bilingual_pdf::{
    lang, output, Bilingual, Conversion, Error, JsonFormat, KindPolicy, LanguagePair, PageFormat,
    RenderOptions, StubTranslator,
};

use crate::google::GoogleTranslator;
use crate::pdf::PdfEngine;

#[derive(Parser)]
#[command(name = "bilingual-pdf")]
#[command(version)]
#[command(about = "Convert source markdown text to a 2-column bilingual PDF", long_about = None)]
struct Cli {
    /// Source markdown file (.md)
    #[arg(value_name = "FILE", required_unless_present = "list_languages")]
    input: Option<PathBuf>,

    /// Output file (default: <stem>.<source>.<target>.pdf)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Source language code
    #[arg(long, default_value = "fr", env = "BILINGUAL_SOURCE")]
    source: String,

    /// Target language code
    #[arg(long, default_value = "es", env = "BILINGUAL_TARGET")]
    target: String,

    /// Pre-translated markdown file (skips machine translation)
    #[arg(long, value_name = "FILE", conflicts_with = "stub")]
    translation: Option<PathBuf>,

    /// Use the offline stub translator
    #[arg(long)]
    stub: bool,

    /// Save the machine translation as <stem>.<target>.md
    #[arg(long)]
    save_translation: bool,

    /// Write the HTML page instead of a PDF
    #[arg(long)]
    html_only: bool,

    /// Also write the aligned rows as JSON next to the output
    #[arg(long)]
    json: bool,

    /// List language codes with display labels and exit
    #[arg(long)]
    list_languages: bool,

    /// HTML-to-PDF engine, invoked as `<engine> - <output>`
    #[arg(long, default_value = "weasyprint", env = "BILINGUAL_PDF_ENGINE")]
    pdf_engine: String,

    /// Which side's block kind wins when the two sides disagree
    #[arg(long, value_enum, default_value = "source")]
    kind_policy: PolicyArg,

    /// CSS page size (e.g., "A4", "letter") [default: A4]
    #[arg(long, value_name = "SIZE")]
    page_size: Option<String>,

    /// CSS page margin (e.g., "2cm") [default: 2cm]
    #[arg(long, value_name = "CSS")]
    margin: Option<String>,

    /// CSS font-family list for the page body
    #[arg(long, value_name = "FONTS")]
    font_family: Option<String>,

    /// Body font size in points [default: 11]
    #[arg(long, value_name = "PT")]
    font_size: Option<f32>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// The source block decides
    Source,
    /// The translated block decides
    Translation,
}

impl From<PolicyArg> for KindPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Source => KindPolicy::Source,
            PolicyArg::Translation => KindPolicy::Translation,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if cli.list_languages {
        cmd_list_languages();
        return;
    }

    let format = if cli.html_only {
        PageFormat::Html
    } else {
        PageFormat::Pdf
    };

    if let Err(message) = validate_paths(&cli, format) {
        Cli::command()
            .error(ErrorKind::ValueValidation, message)
            .exit();
    }

    if let Err(e) = cmd_convert(&cli, format) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        if let Some(Error::UnsupportedLanguage(_)) = e.downcast_ref::<Error>() {
            print_supported_languages();
        }
        std::process::exit(1);
    }
}

/// Check input and output paths before any work is done.
fn validate_paths(cli: &Cli, format: PageFormat) -> Result<(), String> {
    let input = match cli.input.as_deref() {
        Some(input) => input,
        None => return Err("an input file is required".into()),
    };

    if !has_extension(input, "md") {
        return Err(format!("input must be a .md file: {}", input.display()));
    }
    if !input.is_file() {
        return Err(format!("input file not found: {}", input.display()));
    }

    if let Some(ref out) = cli.output {
        if !format.matches(out) {
            return Err(format!(
                "output must end in .{}: {}",
                format.extension(),
                out.display()
            ));
        }
    }

    if let Some(ref translation) = cli.translation {
        if !translation.is_file() {
            return Err(format!(
                "translation file not found: {}",
                translation.display()
            ));
        }
    }

    Ok(())
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == ext)
}

fn cmd_convert(cli: &Cli, format: PageFormat) -> Result<(), Box<dyn std::error::Error>> {
    let input = cli
        .input
        .as_deref()
        .ok_or_else(|| Error::Other("an input file is required".into()))?;
    let pair = LanguagePair::new(&cli.source, &cli.target);

    let source_text = fs::read_to_string(input)?;
    let builder = Bilingual::new()
        .with_pair(pair.clone())
        .with_kind_policy(cli.kind_policy.into())
        .with_render_options(render_options(cli, &pair));

    let conversion = if let Some(ref translation) = cli.translation {
        println!("Using translation file: {}", translation.display());
        builder.convert_with_translation_file(&source_text, translation)?
    } else if cli.stub {
        println!("{}", "Using stub translator".yellow());
        builder.convert_with(&source_text, &StubTranslator::new())?
    } else {
        lang::validate_pair(&pair)?;
        println!("Translating {} with Google Translate...", pair);
        let translator = GoogleTranslator::new()?.with_progress(progress_bar());
        builder.convert_with(&source_text, &translator)?
    };

    if let Some(mismatch) = conversion.mismatch() {
        eprintln!(
            "{}: block count mismatch (left={}, right={}). Padding shorter side with empty cells.",
            "Warning".yellow().bold(),
            mismatch.source,
            mismatch.translated
        );
    }

    if cli.save_translation && cli.translation.is_none() {
        let path = output::translation_path(input, &pair);
        fs::write(&path, conversion.translation_markdown())?;
        println!("Translation saved to: {}", path.display());
    }

    let out = cli
        .output
        .clone()
        .unwrap_or_else(|| output::default_output_path(input, &pair, format));
    write_page(&conversion, &out, format, &cli.pdf_engine)?;

    if cli.json {
        let path = output::json_path(&out);
        fs::write(&path, conversion.to_json(JsonFormat::Pretty)?)?;
        println!("Rows written to: {}", path.display());
    }

    let stats = conversion.stats();
    println!(
        "{} {} rows ({} headings, {} paragraphs)",
        "✓".green(),
        stats.row_count,
        stats.heading_count,
        stats.paragraph_count
    );

    Ok(())
}

/// Page options for the pair, with any layout flags applied on top.
fn render_options(cli: &Cli, pair: &LanguagePair) -> RenderOptions {
    let mut options = RenderOptions::for_languages(pair);

    if let Some(ref size) = cli.page_size {
        options = options.with_page_size(size.as_str());
    }
    if let Some(ref margin) = cli.margin {
        options = options.with_margin(margin.as_str());
    }
    if let Some(ref family) = cli.font_family {
        options = options.with_font_family(family.as_str());
    }
    if let Some(size) = cli.font_size {
        options = options.with_font_size(size);
    }

    options
}

fn write_page(
    conversion: &Conversion,
    out: &Path,
    format: PageFormat,
    engine: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let html = conversion.to_html();

    match format {
        PageFormat::Html => {
            fs::write(out, html)?;
            println!("HTML written to: {}", out.display());
        }
        PageFormat::Pdf => {
            let engine = PdfEngine::new(engine);
            log::info!("Rendering PDF with {}", engine.program());
            engine.render(&html, out)?;
            println!("PDF written to: {}", out.display());
        }
    }

    Ok(())
}

fn progress_bar() -> ProgressBar {
    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb
}

fn cmd_list_languages() {
    println!("{}", "Language labels:".bold());
    for (code, label) in lang::labels() {
        println!("  {:<6} {}", code.cyan(), label);
    }
    println!();
    println!(
        "Other codes accepted by Google Translate are shown by their upper-cased code."
    );
}

fn print_supported_languages() {
    eprintln!();
    eprintln!("Supported languages:");
    for (code, name) in lang::supported_languages() {
        eprintln!("  {:<6} {}", code, name);
    }
}
