//! Entry point for the dashtop TUI. Parses args and runs the App.

use std::env;
use std::path::Path;
use std::time::Duration;

use tracing_subscriber::EnvFilter;
use url::Url;

use dashtop::api;
use dashtop::app::App;
use dashtop::clipboard::Osc52Clipboard;
use dashtop::format::{format_percent, format_uptime};
use dashtop::poller::DEFAULT_INTERVAL;
use dashtop::profiles::{
    load_profiles, save_profiles, ProfileEntry, ProfileRequest, ResolveProfile,
};

struct ParsedArgs {
    url: Option<String>,
    tls_ca: Option<String>,
    profile: Option<String>,
    save: bool,
    interval: Duration,
    no_refresh: bool,
    once: bool,
}

fn usage(prog: &str) -> String {
    format!(
        "Usage: {prog} [--tls-ca CERT_PEM|-t CERT_PEM] [--profile NAME|-P NAME] [--save] \
         [--interval SECS|-i SECS] [--no-refresh] [--once] [http://HOST:PORT]"
    )
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<ParsedArgs, String> {
    let mut it = args.into_iter();
    let prog = it.next().unwrap_or_else(|| "dashtop".into());
    let mut url: Option<String> = None;
    let mut tls_ca: Option<String> = None;
    let mut profile: Option<String> = None;
    let mut save = false;
    let mut interval = DEFAULT_INTERVAL;
    let mut no_refresh = false;
    let mut once = false;

    let parse_secs = |v: &str| -> Result<Duration, String> {
        match v.parse::<u64>() {
            Ok(n) if n > 0 => Ok(Duration::from_secs(n)),
            _ => Err(format!("--interval expects a positive number of seconds, got '{v}'")),
        }
    };

    while let Some(arg) = it.next() {
        match arg.as_str() {
            "-h" | "--help" => return Err(usage(&prog)),
            "--tls-ca" | "-t" => {
                tls_ca = it.next();
            }
            "--profile" | "-P" => {
                profile = it.next();
            }
            "--interval" | "-i" => match it.next() {
                Some(v) => interval = parse_secs(&v)?,
                None => return Err("--interval requires a value".into()),
            },
            "--save" => {
                save = true;
            }
            "--no-refresh" => {
                no_refresh = true;
            }
            "--once" => {
                once = true;
            }
            _ if arg.starts_with("--tls-ca=") => {
                if let Some((_, v)) = arg.split_once('=') {
                    if !v.is_empty() {
                        tls_ca = Some(v.to_string());
                    }
                }
            }
            _ if arg.starts_with("--profile=") => {
                if let Some((_, v)) = arg.split_once('=') {
                    if !v.is_empty() {
                        profile = Some(v.to_string());
                    }
                }
            }
            _ if arg.starts_with("--interval=") => {
                if let Some((_, v)) = arg.split_once('=') {
                    interval = parse_secs(v)?;
                }
            }
            _ => {
                if url.is_none() && !arg.starts_with('-') {
                    url = Some(arg);
                } else {
                    return Err(format!("Unexpected argument '{arg}'. {}", usage(&prog)));
                }
            }
        }
    }
    Ok(ParsedArgs {
        url,
        tls_ca,
        profile,
        save,
        interval,
        no_refresh,
        once,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Silent unless RUST_LOG is set, so the alternate screen stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let parsed = match parse_args(env::args()) {
        Ok(v) => v,
        Err(msg) => {
            eprintln!("{msg}");
            return Ok(());
        }
    };

    let profiles = load_profiles();
    let req = ProfileRequest {
        profile_name: parsed.profile.clone(),
        url: parsed.url.clone(),
        tls_ca: parsed.tls_ca.clone(),
    };

    let (url, tls_ca) = match req.resolve(&profiles) {
        ResolveProfile::Direct(u, t) => {
            if let Some(name) = parsed.profile.as_deref() {
                persist_profile(profiles, name, &u, t.as_deref(), parsed.save);
            }
            (u, t)
        }
        ResolveProfile::Loaded(u, t) => (u, t),
        ResolveProfile::Unknown(name) => {
            eprintln!("Profile '{name}' does not exist; pass a URL to create it.");
            return Ok(());
        }
        ResolveProfile::None => {
            eprintln!("No URL provided and no profile selected.");
            return Ok(());
        }
    };

    let base = Url::parse(&url)?;
    anyhow::ensure!(
        matches!(base.scheme(), "http" | "https"),
        "expected an http(s) URL, got '{url}'"
    );

    let client = api::build_client(tls_ca.as_deref().map(Path::new))?;

    if parsed.once {
        return run_once(&client, &base).await;
    }

    let mut app = App::new(client, base, parsed.interval, Box::new(Osc52Clipboard));
    if parsed.no_refresh {
        app.dashboard.set_auto_refresh(false);
    }
    app.run().await
}

fn persist_profile(
    mut profiles: dashtop::profiles::ProfilesFile,
    name: &str,
    url: &str,
    tls_ca: Option<&str>,
    overwrite: bool,
) {
    let entry = ProfileEntry {
        url: url.to_string(),
        tls_ca: tls_ca.map(str::to_string),
    };
    match profiles.profiles.get(name) {
        Some(existing) if *existing == entry => {}
        Some(_) if !overwrite => {
            eprintln!("Profile '{name}' already exists; pass --save to overwrite.");
        }
        _ => {
            profiles.profiles.insert(name.to_string(), entry);
            if let Err(e) = save_profiles(&profiles) {
                tracing::warn!(error = %e, "could not save profiles");
            }
        }
    }
}

/// Headless mode: fetch the snapshot once and print it.
async fn run_once(client: &reqwest::Client, base: &Url) -> anyhow::Result<()> {
    let (snap, _) = api::fetch_stats(client, base).await?;

    let app = snap.application.unwrap_or_default();
    let sys = snap.system.unwrap_or_default();

    let uptime = app
        .uptime_seconds
        .map(|s| format_uptime(s.max(0.0) as u64))
        .unwrap_or_else(|| "-".into());
    let requests = app
        .request_count
        .map(|n| n.to_string())
        .unwrap_or_else(|| "-".into());
    let pct = |v: Option<f64>| v.map(format_percent).unwrap_or_else(|| "-".into());

    println!("uptime:   {uptime}");
    println!("requests: {requests}");
    println!("cpu:      {}", pct(sys.cpu_percent));
    println!("memory:   {}", pct(sys.memory_percent));
    println!("disk:     {}", pct(sys.disk_percent));
    if let Some(v) = app.version {
        println!("version:  {v}");
    }
    if let Some(env) = app.environment {
        println!("env:      {env}");
    }
    Ok(())
}
