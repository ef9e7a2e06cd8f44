use clap::{Args, Parser, Subcommand};
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::path::PathBuf;

use projectctl::orchestrator;
use projectctl::project::Project;

/// Project onboarding utility for cluster namespace manifests
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new project in the specified cluster build
    Create(ProjectArgs),
    /// Resolve and print a project record without touching the filesystem
    Add(ProjectArgs),
}

#[derive(Args, Debug)]
struct ProjectArgs {
    /// Cluster name (e.g. dnocp)
    #[arg(short, long)]
    cluster: String,

    /// Build number (e.g. 003)
    #[arg(short, long)]
    buildnumber: String,

    /// Project name (e.g. ingest-rc-test)
    #[arg(short, long)]
    name: String,

    /// Project owner
    #[arg(short, long, default_value = "")]
    owner: String,

    /// Service name
    #[arg(short, long, default_value = "")]
    service: String,

    /// Application name
    #[arg(short, long, default_value = "")]
    application: String,

    /// Domain (i.e. business function) name
    #[arg(short, long, default_value = "")]
    domain: String,

    /// Team name
    #[arg(short, long, default_value = "")]
    team: String,

    /// Support contact email
    #[arg(short, long, default_value = "")]
    email: String,

    /// Cpu requested capacity
    #[arg(short = 'u', long, default_value_t = 0)]
    cpu: u32,

    /// Memory requested capacity in GiB
    #[arg(short, long, default_value_t = 0)]
    memory: u32,

    /// SNAT IP, when the project egresses through a translated address
    #[arg(long, default_value = "")]
    snat_ip: String,

    /// Namespace VIP fronting the project's workloads
    #[arg(long, default_value = "")]
    namespace_vip: String,
}

impl ProjectArgs {
    fn to_project(&self) -> Project {
        Project {
            team: self.team.clone(),
            email: self.email.clone(),
            owner: self.owner.clone(),
            service: self.service.clone(),
            application: self.application.clone(),
            domain: self.domain.clone(),
            cpu: self.cpu,
            memory: self.memory,
            snat_ip: self.snat_ip.clone(),
            namespace_vip: self.namespace_vip.clone(),
            ..Project::new(&self.name)
        }
    }

    fn basedir(&self) -> PathBuf {
        PathBuf::from(&self.cluster).join(&self.buildnumber)
    }
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let cli = Cli::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match cli.command {
        Command::Create(args) => create(&args),
        Command::Add(args) => add(&args),
    }
}

fn create(args: &ProjectArgs) -> Result<()> {
    let mut project = args.to_project();
    let base = args.basedir();

    info!(
        "Onboarding project {} into {}",
        project.name,
        base.display()
    );
    orchestrator::onboard_project(&base, &mut project)?;

    info!("Done");
    Ok(())
}

fn add(args: &ProjectArgs) -> Result<()> {
    let project = args.to_project();
    project.validate()?;

    // Preview only: show the record as it would be onboarded
    print!("{}", serde_yaml::to_string(&project)?);
    Ok(())
}
