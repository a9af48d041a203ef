#![forbid(unsafe_code)]
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use piket::{
    calendar::HolidayCalendar,
    config::ScheduleConfig,
    io,
    render::{render_schedule, NumberingMode, TextWeekRenderer},
    scheduler::Planner,
    summary::summarize,
    template::{export_template_json, load_template_from_file, SlotTemplate},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de génération de jadwal piket (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Générer le jadwal pour une ou plusieurs semaines
    Generate {
        #[command(flatten)]
        plan: PlanArgs,
        /// Numérotation des lignes dans les exports
        #[arg(long, value_enum, default_value_t = Numbering::PerGroup)]
        numbering: Numbering,
        /// Export CSV des assignations
        #[arg(long)]
        out_csv: Option<String>,
        /// Export JSON du planning et du récapitulatif
        #[arg(long)]
        out_json: Option<String>,
        /// Export CSV des totaux par personne
        #[arg(long)]
        totals_csv: Option<String>,
        /// Export CSV personne × semaine
        #[arg(long)]
        weekly_csv: Option<String>,
        /// N'imprime pas le planning sur la sortie standard
        #[arg(long)]
        quiet: bool,
    },

    /// Valider roster, template et config sans générer
    Check {
        #[command(flatten)]
        plan: PlanArgs,
    },

    /// Exporter le template de slots par défaut (JSON)
    Template {
        #[arg(long)]
        out: String,
    },
}

#[derive(Args, Debug)]
struct PlanArgs {
    /// CSV du personnel, colonnes `Nama,Team`
    #[arg(long)]
    people: String,
    /// Config JSON (les options ci-dessous la surchargent)
    #[arg(long)]
    config: Option<String>,
    /// Template de slots JSON (défaut : 17 slots A/B/C/D)
    #[arg(long)]
    template: Option<String>,
    /// CSV de jours fériés supplémentaires `date,name` (fêtes du calendrier lunaire)
    #[arg(long)]
    holidays: Option<String>,
    /// Ne pas exclure les fêtes nationales intégrées (dates fixes et Pâques)
    #[arg(long)]
    no_national_holidays: bool,
    #[arg(long)]
    weeks: Option<u32>,
    #[arg(long)]
    people_per_day: Option<u32>,
    #[arg(long)]
    weekly_cap: Option<u32>,
    /// Autoriser deux jours de suite pour une même personne
    #[arg(long)]
    allow_consecutive: bool,
    /// Lundi de départ (YYYY-MM-DD)
    #[arg(long)]
    start: Option<NaiveDate>,
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Numbering {
    PerGroup,
    Continuous,
}

impl From<Numbering> for NumberingMode {
    fn from(n: Numbering) -> Self {
        match n {
            Numbering::PerGroup => NumberingMode::PerGroup,
            Numbering::Continuous => NumberingMode::Continuous,
        }
    }
}

fn build_planner(plan: &PlanArgs) -> Result<Planner> {
    let roster = io::import_roster_csv(&plan.people)?;
    let template = match &plan.template {
        Some(path) => load_template_from_file(path)?,
        None => SlotTemplate::default(),
    };

    let mut config = match &plan.config {
        Some(path) => ScheduleConfig::from_json_file(path)?,
        None => ScheduleConfig::default(),
    };
    if let Some(weeks) = plan.weeks {
        config.weeks = weeks;
    }
    if let Some(n) = plan.people_per_day {
        config.people_per_day = n;
    }
    if let Some(cap) = plan.weekly_cap {
        config.weekly_cap = cap;
    }
    if plan.allow_consecutive {
        config.forbid_consecutive_days = false;
    }
    if let Some(start) = plan.start {
        config.start_monday = start;
    }
    if plan.seed.is_some() {
        config.seed = plan.seed;
    }

    let mut calendar = if plan.no_national_holidays {
        HolidayCalendar::new()
    } else {
        HolidayCalendar::national()
    };
    if let Some(path) = &plan.holidays {
        calendar.extend(io::import_holidays_csv(path)?);
    }

    Ok(Planner::new(roster, template, config, calendar)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let code = match cli.cmd {
        Commands::Generate {
            plan,
            numbering,
            out_csv,
            out_json,
            totals_csv,
            weekly_csv,
            quiet,
        } => {
            let planner = build_planner(&plan)?;
            for warning in planner.precheck() {
                eprintln!("Warning: {warning}");
            }
            let schedule = planner.run()?;
            let summary = summarize(&schedule);
            let numbering = NumberingMode::from(numbering);

            if let Some(path) = out_csv {
                io::export_assignments_csv(path, &schedule, numbering)?;
            }
            if let Some(path) = out_json {
                io::export_schedule_json(path, &schedule)?;
            }
            if let Some(path) = totals_csv {
                io::export_totals_csv(path, &summary)?;
            }
            if let Some(path) = weekly_csv {
                io::export_weekly_csv(path, &summary)?;
            }
            if !quiet {
                print!("{}", render_schedule(&schedule, &TextWeekRenderer { numbering }));
                println!();
                for t in &summary.totals {
                    println!("{} | {}", t.name, t.total);
                }
            }
            0
        }
        Commands::Check { plan } => {
            let planner = build_planner(&plan)?;
            let warnings = planner.precheck();
            println!(
                "OK: {} people, {} slots/day, {} week(s) from {}",
                planner.roster().len(),
                planner.template().len(),
                planner.config().weeks,
                planner.config().start_monday
            );
            if warnings.is_empty() {
                0
            } else {
                for warning in &warnings {
                    eprintln!("Warning: {warning}");
                }
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
        Commands::Template { out } => {
            let template = SlotTemplate::default();
            export_template_json(&out, &template)?;
            println!("Template {} ({} slots) written to {out}", template.name, template.len());
            0
        }
    };

    std::process::exit(code);
}
