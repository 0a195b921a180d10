use clap::{CommandFactory, Parser, Subcommand, ValueEnum};

use awtrix3_shared::Notification;

use crate::config::ConfigStore;
use crate::devices;
use crate::display;
use crate::error::{AwtrixError, Result};

#[derive(Parser)]
#[command(name = "awtrix3")]
#[command(version, about = "Modern CLI for controlling AWTRIX3 LED matrix displays", long_about = None)]
struct Cli {
    /// Device name from the registry, or a literal host, overriding the default
    #[arg(short, long, global = true)]
    device: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the configured devices
    #[command(subcommand)]
    Device(DeviceCommands),

    /// Send a notification to the display
    Notify(NotifyArgs),

    /// Power the display on or off
    Power {
        #[arg(value_enum)]
        state: PowerState,
    },

    /// Show live statistics reported by the display
    Stats,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
enum DeviceCommands {
    /// List configured devices
    List,

    /// Add a device to the registry
    Add {
        /// Device name
        name: String,

        /// Device host, host:port or URL
        host: String,

        /// Set as default device
        #[arg(long)]
        default: bool,
    },

    /// Remove a device from the registry
    Remove {
        /// Device name
        name: String,
    },

    /// Show one device in detail
    Show {
        /// Device name
        name: String,
    },

    /// Pick the default device
    SetDefault {
        /// Device name
        name: String,
    },

    /// Check connectivity and refresh the stored status
    Test {
        /// Device name (defaults to the default device)
        name: Option<String>,
    },
}

#[derive(clap::Args)]
struct NotifyArgs {
    /// Notification text
    #[arg(required_unless_present = "dismiss")]
    text: Option<String>,

    /// Icon ID
    #[arg(short, long)]
    icon: Option<u32>,

    /// Text color (hex or r,g,b)
    #[arg(short, long)]
    color: Option<String>,

    /// Duration in seconds
    #[arg(short = 't', long)]
    duration: Option<u32>,

    /// Hold the notification until dismissed
    #[arg(long)]
    hold: bool,

    /// Wake up the display
    #[arg(short, long)]
    wakeup: bool,

    /// Dismiss the current notification instead of sending one
    #[arg(long, conflicts_with_all = ["text", "icon", "color", "duration", "hold", "wakeup"])]
    dismiss: bool,
}

#[derive(Clone, ValueEnum)]
enum PowerState {
    On,
    Off,
}

pub async fn cli() -> Result<()> {
    let cli = Cli::parse();
    let store = ConfigStore::from_env()?;
    let selector = cli.device.as_deref();

    match cli.command {
        Commands::Device(cmd) => match cmd {
            DeviceCommands::List => devices::list(&store)?,
            DeviceCommands::Add { name, host, default } => {
                devices::add(&store, &name, &host, default)?
            }
            DeviceCommands::Remove { name } => devices::remove(&store, &name)?,
            DeviceCommands::Show { name } => devices::show(&store, &name)?,
            DeviceCommands::SetDefault { name } => devices::set_default(&store, &name)?,
            DeviceCommands::Test { name } => devices::test(&store, name.as_deref()).await?,
        },
        Commands::Notify(args) => {
            if args.dismiss {
                display::dismiss(&store, selector).await?
            } else {
                let text = args
                    .text
                    .ok_or_else(|| AwtrixError::Usage("notification text is required".into()))?;
                let notification = Notification {
                    text,
                    icon: args.icon,
                    color: args.color,
                    duration: args.duration,
                    hold: args.hold,
                    wakeup: args.wakeup,
                };
                display::notify(&store, selector, notification).await?
            }
        }
        Commands::Power { state } => {
            display::power(&store, selector, matches!(state, PowerState::On)).await?
        }
        Commands::Stats => display::stats(&store, selector).await?,
        Commands::Completions { shell } => generate_completions(shell),
        Commands::Version => {
            println!("awtrix3 version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn generate_completions(shell: clap_complete::Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
