use clap::{Parser, Subcommand, ValueEnum};
use std::path::Path;

mod model;
mod plantuml;
mod record;
mod render;
mod resolve;
mod validate;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "pedigree-viz")]
#[command(about = "Family tree diagram generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a family diagram description (and optionally the image).
    Render {
        #[arg(long)]
        csv: String,

        #[arg(short = 'o', long)]
        out: String,

        /// Base name for the generated files.
        #[arg(long, default_value = "family")]
        name: String,

        /// Render only this person and their direct parents.
        #[arg(long)]
        focus: Option<String>,

        /// Color the nodes of people whose name contains this substring.
        #[arg(long)]
        highlight: Option<String>,

        /// Path to the PlantUML jar; without it only the .puml is written.
        #[arg(long)]
        plantuml: Option<String>,

        /// Keep every child on parenting-age conflicts instead of prompting.
        #[arg(long)]
        keep_all: bool,
    },
    /// Load a family CSV and list the accepted people.
    List {
        #[arg(long)]
        csv: String,

        /// Only people whose name contains this substring.
        #[arg(long)]
        filter: Option<String>,

        #[arg(long, value_enum, default_value = "name")]
        sort: SortBy,

        /// Print only the oldest living person.
        #[arg(long)]
        oldest_living: bool,

        /// Emit JSON instead of one line per person.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SortBy {
    Name,
    Birth,
    Lifespan,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Render {
            csv,
            out,
            name,
            focus,
            highlight,
            plantuml: jar,
            keep_all,
        } => {
            // 1) Load + validate the CSV (interactive unless --keep-all).
            let mut prompt = resolve::Prompt;
            let mut batch = resolve::KeepAll;
            let policy: &mut dyn resolve::ConflictPolicy =
                if keep_all { &mut batch } else { &mut prompt };
            let people = model::load_people(&csv, policy)?;

            // 2) Serialize the graph.
            let diagram = match (&focus, &highlight) {
                (Some(subject), _) => render::render_person(&people, subject)?,
                (None, Some(needle)) => render::render_population_with(
                    &people,
                    |line| format!("{line} #Yellow"),
                    |p| p.name.contains(needle.as_str()),
                ),
                (None, None) => render::render_population(&people),
            };

            // 3) Hand it to the external renderer, or keep just the text.
            let out_dir = Path::new(&out);
            match jar {
                Some(jar) => {
                    let image = plantuml::PlantUml::new(jar).render(&diagram, out_dir, &name)?;
                    println!("Wrote {}", image.display());
                }
                None => {
                    std::fs::create_dir_all(out_dir)?;
                    let path = out_dir.join(format!("{name}.puml"));
                    std::fs::write(&path, &diagram)?;
                    println!("Wrote {}", path.display());
                }
            }
        }
        Commands::List {
            csv,
            filter,
            sort,
            oldest_living,
            json,
        } => {
            let people = model::load_people(&csv, &mut resolve::KeepAll)?;

            let people: model::PersonIndex = match &filter {
                Some(needle) => model::filter_by_name(&people, needle)
                    .into_iter()
                    .map(|p| (p.name.clone(), p.clone()))
                    .collect(),
                None => people,
            };

            if oldest_living {
                match model::oldest_living(&people) {
                    Some(p) => println!("{p}"),
                    None => println!("nobody is living"),
                }
                return Ok(());
            }

            let selected: Vec<&model::Person> = match sort {
                SortBy::Name => people.values().collect(),
                SortBy::Birth => model::sorted_by_birth(&people),
                SortBy::Lifespan => model::sorted_by_lifespan(&people),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&selected)?);
            } else {
                for p in &selected {
                    println!("{p}");
                }
            }
        }
    }

    Ok(())
}
