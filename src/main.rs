mod cli;
mod config;
mod domain;
mod error;
mod infra;
mod site;
mod workflows;

use anyhow::{bail, Result};
use clap::Parser;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use domain::languages::map_languages;
use domain::models::{NowPlaying, SubtitleRecord};
use infra::webclient::WebClient;
use site::{EpisodePage, SearchPage};
use workflows::{download, identify, prompt, search};

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{e:#}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("addic7ed_subs=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut settings = config::load_settings()?;
    if let Some(list) = &cli.languages {
        let languages = config::parse_language_list(list);
        if languages.is_empty() {
            bail!("No subtitle languages given");
        }
        settings.languages = languages;
    }
    let languages = map_languages(&settings.languages);
    let client = WebClient::new(settings.site_url.clone(), settings.timeout)?;

    let file_name = Path::new(&cli.file)
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(&cli.file)
        .to_string();
    let now_playing = NowPlaying {
        file: file_name,
        label: cli.label.clone(),
        show_title: cli.show.clone(),
        season: cli.season,
        episode: cli.episode,
    };

    let (query, filename) = match &cli.query {
        Some(query) => (query.trim().to_string(), now_playing.file.clone()),
        None => {
            let use_filename = settings.use_filename || cli.use_filename;
            let (identity, filename) = identify::resolve(&now_playing, use_filename)?;
            (search::build_query(&identity), filename)
        }
    };
    if query.is_empty() {
        bail!("Search query is empty");
    }

    let Some(page) = open_episode(&client, &query)? else {
        return Ok(());
    };

    let subtitles = search::find_subtitles(&page, &languages, &filename);

    if subtitles.is_empty() {
        println!(
            "No subtitles found in {} for \"{query}\"",
            settings.languages.join(", ")
        );
        return Ok(());
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&subtitles)?);
    } else {
        display_subtitles(&subtitles);
    }

    let choice = match cli.download {
        Some(n) if (1..=subtitles.len()).contains(&n) => Some(n - 1),
        Some(n) => bail!("No subtitles at position {n}, found {}", subtitles.len()),
        None if cli.json || cli.no_confirm => None,
        None => prompt::select("Download which subtitles?", subtitles.len())?,
    };
    let Some(choice) = choice else {
        return Ok(());
    };

    let record = &subtitles[choice];
    if record.unfinished
        && !cli.no_confirm
        && !prompt::confirm("These subtitles are still being translated. Download anyway?")
    {
        println!("Skipped.");
        return Ok(());
    }

    let path = download::save_subtitles(&client, record, page.url(), &filename, &cli.output)?;
    println!("Saved {}", path.display());
    Ok(())
}

/// The episode page for `query`, or `None` once the user has been told there is nothing to show.
fn open_episode(client: &WebClient, query: &str) -> Result<Option<EpisodePage>> {
    let Some(results) = search::allow_no_results(search::search_episode(client, query))? else {
        println!("No subtitles found for \"{query}\"");
        return Ok(None);
    };
    let candidate = match results {
        SearchPage::Episode(page) => return Ok(Some(page)),
        SearchPage::Candidates(candidates) => {
            println!("Multiple episodes found. Please select one:");
            for (i, candidate) in candidates.iter().enumerate() {
                println!("  {}: {}", i + 1, candidate.title);
            }
            let Some(choice) = prompt::select("Which episode?", candidates.len())? else {
                info!("Episode selection cancelled");
                println!("Episode selection cancelled.");
                return Ok(None);
            };
            candidates[choice].clone()
        }
    };
    let page = search::allow_no_results(search::get_episode(client, &candidate))?;
    if page.is_none() {
        println!("No subtitles found for \"{}\"", candidate.title);
    }
    Ok(page)
}

fn display_subtitles(subtitles: &[SubtitleRecord]) {
    for (i, sub) in subtitles.iter().enumerate() {
        let mut flags = Vec::new();
        if sub.hearing_impaired {
            flags.push("HI");
        }
        if sub.release_match {
            flags.push("SYNC");
        }
        if sub.unfinished {
            flags.push("UNFINISHED");
        }
        let flags = if flags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", flags.join(", "))
        };
        println!("  {}: {} - {}{}", i + 1, sub.language, sub.version, flags);
    }
}
