//! Offline display harness.
//!
//! Stands in for a hosting display so the symbol stack can be exercised
//! end to end without one: loads `display.toml`, mounts the configured
//! symbols through the registry, delivers one change notification per
//! symbol (config options, canvas size, data payload), and snapshots every
//! scene to SVG. In watch mode it stays up and re-renders whenever the
//! config file is written.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use vizlet_config::{ConfigWatcher, DisplayConfig, SymbolMount};
use vizlet_core::{DataEnvelope, Result, Symbol, VizletError};
use vizlet_registry::SymbolRegistry;
use vizlet_symbols::register_builtins;

/// Payload used when no data file is given: a short flow/pressure/status
/// capture from one production line.
const SAMPLE_DATA: &str = include_str!("sample-data.json");

/// What to run and where to put the output.
#[derive(Debug, Clone)]
pub struct HarnessOptions {
    /// Display config file. `None` falls back to the XDG default.
    pub config_path: Option<PathBuf>,
    /// Data payload JSON. `None` uses the built-in sample capture.
    pub data_path: Option<PathBuf>,
    /// Directory receiving `manifest.json` and the scene snapshots.
    pub out_dir: PathBuf,
    /// Keep running and re-render on config writes.
    pub watch: bool,
}

impl Default for HarnessOptions {
    fn default() -> Self {
        Self {
            config_path: None,
            data_path: None,
            out_dir: PathBuf::from("target/vizlet"),
            watch: false,
        }
    }
}

struct Mount {
    kind: String,
    symbol: Box<dyn Symbol>,
}

/// A set of mounted symbol instances driven from one config.
pub struct Display {
    registry: SymbolRegistry,
    mounts: Vec<Mount>,
}

impl Display {
    /// Fresh display speaking for the built-in symbol library.
    pub fn new() -> Result<Self> {
        let mut registry = SymbolRegistry::new("vizlet-symbols");
        register_builtins(&mut registry)?;
        Ok(Self { registry, mounts: Vec::new() })
    }

    pub fn registry(&self) -> &SymbolRegistry {
        &self.registry
    }

    /// Currently mounted symbols, in display order.
    pub fn symbols(&self) -> impl Iterator<Item = &dyn Symbol> {
        self.mounts.iter().map(|m| m.symbol.as_ref())
    }

    /// Bring the mounted set in line with `config`, then deliver one
    /// change notification per symbol carrying its config options, the
    /// canvas size, and the payload. Symbols that survive a refresh keep
    /// their scenes and update in place.
    pub fn refresh(&mut self, config: &DisplayConfig, data: &DataEnvelope) {
        let wanted: Vec<&SymbolMount> = config
            .symbols
            .iter()
            .filter(|mount| {
                let known = self.registry.spec(&mount.kind).is_some();
                if !known {
                    warn!(kind = %mount.kind, "skipping unknown symbol kind");
                }
                known
            })
            .collect();

        let same_set = self
            .mounts
            .iter()
            .map(|m| m.kind.as_str())
            .eq(wanted.iter().map(|m| m.kind.as_str()));
        if !same_set {
            info!(symbols = wanted.len(), "mounting symbol set");
            self.mounts.clear();
            for mount in &wanted {
                if let Some(symbol) = self.registry.create(&mount.kind) {
                    self.mounts.push(Mount { kind: mount.kind.clone(), symbol });
                }
            }
        }

        for (mount, mount_config) in self.mounts.iter_mut().zip(&wanted) {
            let mut change = mount_config.initial_change();
            change.size = Some((config.canvas.width as f32, config.canvas.height as f32));
            change.data = Some(data.clone());
            mount.symbol.apply_change(&change);
        }
    }

    /// Snapshot every mounted scene to `out_dir` as `NN-<kind>.svg`.
    /// Returns the written paths in display order.
    pub fn export(&self, out_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.mounts.len());
        for (index, mount) in self.mounts.iter().enumerate() {
            let (width, height) = mount.symbol.size();
            let svg = mount.symbol.scene().to_svg(width, height);
            let path = out_dir.join(format!("{index:02}-{}.svg", mount.kind));
            std::fs::write(&path, svg)?;
            written.push(path);
        }
        Ok(written)
    }
}

impl std::fmt::Debug for Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kinds: Vec<&str> = self.mounts.iter().map(|m| m.kind.as_str()).collect();
        f.debug_struct("Display").field("mounts", &kinds).finish()
    }
}

/// Run one full export pass, then optionally stay up watching the config.
pub fn run(options: HarnessOptions) -> Result<()> {
    let config_path =
        options.config_path.clone().unwrap_or_else(vizlet_config::default_path);
    let config = vizlet_config::load(&config_path)?;
    let data = load_payload(options.data_path.as_deref())?;

    let mut display = Display::new()?;
    display.refresh(&config, &data);

    std::fs::create_dir_all(&options.out_dir)?;
    write_manifest(&display, &config, &options.out_dir)?;
    let written = display.export(&options.out_dir)?;
    info!(
        symbols = written.len(),
        out = %options.out_dir.display(),
        "display exported"
    );

    if options.watch {
        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
        runtime.block_on(watch(&mut display, &config_path, &data, &options.out_dir))?;
    }
    Ok(())
}

/// Re-render on every config write until the process is stopped. A config
/// that fails to load keeps the previous display on screen.
async fn watch(
    display: &mut Display,
    config_path: &Path,
    data: &DataEnvelope,
    out_dir: &Path,
) -> Result<()> {
    let (_watcher, mut rx) = ConfigWatcher::spawn(config_path)?;
    while rx.recv().await.is_some() {
        match vizlet_config::load(config_path) {
            Ok(config) => {
                display.refresh(&config, data);
                write_manifest(display, &config, out_dir)?;
                let written = display.export(out_dir)?;
                info!(symbols = written.len(), "display re-exported");
            }
            Err(e) => warn!("keeping the previous display: {e}"),
        }
    }
    Ok(())
}

fn write_manifest(
    display: &Display,
    config: &DisplayConfig,
    out_dir: &Path,
) -> Result<PathBuf> {
    let manifest = display.registry().manifest(&config.manifest.base_url);
    let json = serde_json::to_string_pretty(&manifest)
        .map_err(|e| VizletError::Data(format!("cannot encode manifest: {e}")))?;
    let path = out_dir.join("manifest.json");
    std::fs::write(&path, json)?;
    Ok(path)
}

fn load_payload(path: Option<&Path>) -> Result<DataEnvelope> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            parse_payload(&raw)
        }
        None => parse_payload(SAMPLE_DATA),
    }
}

fn parse_payload(raw: &str) -> Result<DataEnvelope> {
    serde_json::from_str(raw)
        .map_err(|e| VizletError::Data(format!("cannot parse data payload: {e}")))
}
