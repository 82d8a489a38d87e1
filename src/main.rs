use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

use budmeter::platform::Bluez;
use budmeter::{Config, Error, Headset, Resolver};

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Configuration file (defaults to ~/.config/budmeter/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// More output, repeat for debug
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Is an A2DP or headset device connected
    Connected,
    /// Battery level of the connected audio device
    Battery,
    /// Is the adapter present and powered
    Enabled,
    /// Details of the connected audio device
    Device,
    /// classic, le or dual
    ConnectionType,
    /// Is the connected audio device reachable over Bluetooth LE
    LeAudio,
    /// Is the connected audio device reachable over BR/EDR
    ClassicAudio,
    /// Open the desktop Bluetooth settings
    Settings,
    /// List the battery probes in the order they are tried
    Probes,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Error> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None       => Config::load_default()?,
    };

    let resolver = Resolver::from_config(&config)?;

    if let Command::Probes = args.command {
        list_probes(&resolver);
        return Ok(())
    }

    let headset = Headset::new(Bluez::new(&config).await?, resolver);

    match args.command {
        Command::Connected => println!("{}", headset.is_audio_device_connected().await),
        Command::Enabled   => println!("{}", headset.is_bluetooth_enabled().await),
        Command::Battery   => match headset.battery_level().await {
            Some(level) => println!("{level}"),
            None        => println!("unknown"),
        },
        Command::Device => match headset.connected_device().await {
            Some(info) => println!("{info}"),
            None       => println!("no audio device connected"),
        },
        Command::ConnectionType => match headset.connection_type().await {
            Some(kind) => println!("{kind}"),
            None       => println!("unknown"),
        },
        Command::LeAudio      => println!("{}", headset.is_le_audio_connected().await),
        Command::ClassicAudio => println!("{}", headset.is_classic_audio_connected().await),
        Command::Settings => {
            headset.open_bluetooth_settings().await?;
            println!("true");
        }
        Command::Probes => list_probes(headset.resolver()),
    }

    Ok(())
}

fn list_probes(resolver: &Resolver) {
    for (i, name) in resolver.probe_names().enumerate() {
        println!("{}. {name}", i + 1);
    }
}
