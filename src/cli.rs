use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "addic7ed-subs")]
#[command(about = "Find and download Addic7ed subtitles for a TV episode")]
pub struct Cli {
    /// Video file being played
    #[arg(required = true)]
    pub file: String,

    /// Display label to try when the filename cannot be parsed
    #[arg(long)]
    pub label: Option<String>,

    /// Show title from the media library
    #[arg(long)]
    pub show: Option<String>,

    /// Season number from the media library
    #[arg(long, requires = "show")]
    pub season: Option<u32>,

    /// Episode number from the media library
    #[arg(long, requires = "show")]
    pub episode: Option<u32>,

    /// Search Addic7ed with this text instead of the detected episode
    #[arg(long)]
    pub query: Option<String>,

    /// Comma separated subtitle languages, e.g. "English,French"
    #[arg(long)]
    pub languages: Option<String>,

    /// Always identify the episode from the filename
    #[arg(long)]
    pub use_filename: bool,

    /// Print found subtitles as JSON
    #[arg(long)]
    pub json: bool,

    /// Download the subtitles at this position in the list (1-based)
    #[arg(long)]
    pub download: Option<usize>,

    /// Directory to save subtitles to
    #[arg(short = 'o', long = "output", default_value = ".")]
    pub output: PathBuf,

    /// Skip confirmation prompts
    #[arg(long)]
    pub no_confirm: bool,
}
