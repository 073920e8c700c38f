use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pdfc", about = "Compose images into a PDF", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out image files on PDF pages
    Compose {
        /// Input image file(s), placed in the order given
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Output PDF file
        #[arg(short, long, required_unless_present_any = ["stats_only", "save_config"])]
        output: Option<PathBuf>,

        /// Load layout options from a JSON file (flags below override it)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write the effective layout options to a JSON file
        #[arg(long)]
        save_config: Option<PathBuf>,

        /// One image per page, or two side by side
        #[arg(long, value_enum)]
        layout: Option<LayoutArg>,

        /// Border width in points (0 disables the border)
        #[arg(long)]
        border_size: Option<u32>,

        /// Border color
        #[arg(long, value_enum)]
        border_color: Option<ColorArg>,

        /// Reference page size for single-image pages
        #[arg(long, value_enum)]
        paper: Option<PaperArg>,

        /// Show statistics only, don't generate PDF
        #[arg(long)]
        stats_only: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum LayoutArg {
    Single,
    Double,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorArg {
    Black,
    Red,
    Blue,
    Green,
    Gray,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
}

impl From<LayoutArg> for pdf_compose::LayoutMode {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Single => Self::Single,
            LayoutArg::Double => Self::Double,
        }
    }
}

impl From<ColorArg> for pdf_compose::BorderColor {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Black => Self::Black,
            ColorArg::Red => Self::Red,
            ColorArg::Blue => Self::Blue,
            ColorArg::Green => Self::Green,
            ColorArg::Gray => Self::Gray,
        }
    }
}

impl From<PaperArg> for pdf_compose::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compose {
            input,
            output,
            config,
            save_config,
            layout,
            border_size,
            border_color,
            paper,
            stats_only,
        } => {
            let mut options = match &config {
                Some(path) => pdf_compose::LayoutOptions::load(path).await?,
                None => pdf_compose::LayoutOptions::default(),
            };
            if let Some(layout) = layout {
                options.mode = layout.into();
            }
            if let Some(border_size) = border_size {
                options.border_width = border_size;
            }
            if let Some(border_color) = border_color {
                options.border_color = border_color.into();
            }
            if let Some(paper) = paper {
                options.paper_size = paper.into();
            }
            options.validate()?;

            if let Some(path) = &save_config {
                options.save(path).await?;
                println!("Saved options → {}", path.display());
            }

            let stats = pdf_compose::calculate_statistics(input.len(), &options)?;
            println!("Composition Statistics:");
            println!("  Source images: {}", stats.source_images);
            println!("  Output pages: {}", stats.output_pages);
            println!("  Spread pages: {}", stats.spread_pages);
            println!("  Single pages: {}", stats.single_pages);

            if stats_only {
                return Ok(());
            }

            let Some(output) = output else {
                return Ok(());
            };

            let pages = pdf_compose::generate_pdf(&input, &options, &output).await?;
            println!(
                "Composed {} images on {} pages → {}",
                input.len(),
                pages,
                output.display()
            );
        }
    }

    Ok(())
}
