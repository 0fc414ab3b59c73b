//! Client wiring and drive loop
//!
//! Builds the country list and the alert router on the main thread, then
//! walks the presentation layer through a representative session: hover and
//! connect transitions, model-pushed state changes, and the system alert set
//! including a push from a background thread.

use crate::bridge::CoreBridge;
use anyhow::Result;
use lumen_alerts::{
    AlertConfig, AlertKind, AlertRouter, AlertServices, ServerKind, SystemAlert,
};
use lumen_ui::{CountryList, CountryRowModel, ROW_HEIGHT, ServerFeature};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use tracing::{debug, info};

const LIST_WIDTH: f32 = 320.0;

pub fn run(config_path: Option<PathBuf>) -> Result<()> {
    let config = match config_path {
        Some(path) => {
            info!("loading alert config from {}", path.display());
            AlertConfig::load(&path)?
        }
        None => AlertConfig::default(),
    };

    let bridge = Arc::new(CoreBridge::new());
    let services = AlertServices {
        presenter: bridge.clone(),
        windows: bridge.clone(),
        session: bridge.clone(),
        notifications: bridge.clone(),
        updater: bridge.clone(),
        links: bridge.clone(),
    };
    let mut router = AlertRouter::new(services, config);

    // Country list bound to a small model set
    let mut models = build_models(&router);
    let mut list = CountryList::new(0.0, 0.0, LIST_WIDTH);
    list.set_models(&models);
    info!("country list ready ({} rows)", list.len());

    // Hover onto the first row and connect it
    list.handle_move(20.0, ROW_HEIGHT / 2.0);
    list.handle_click(LIST_WIDTH - 60.0, ROW_HEIGHT / 2.0);
    models[0].set_connected(true);
    list.pump_events();
    list.handle_move(20.0, -10.0);
    debug!(
        "row 0 connected, connect affordance visible: {}",
        list.row(0).map(|r| r.connect_visible()).unwrap_or(false)
    );

    let frame = list.draw();
    debug!("frame emitted {} draw commands", frame.len());
    list.mark_clean();

    // Representative alerts from the UI thread
    router.push(SystemAlert::new(AlertKind::ServerOnMaintenance));
    router.push(SystemAlert::new(AlertKind::ServerOnMaintenance)); // suppressed
    router.push(SystemAlert::new(AlertKind::UpgradeRequired {
        server: ServerKind::Standard,
        for_specific_country: true,
        completion: None,
    }));
    router.push(SystemAlert::new(AlertKind::CannotAccessCredentials));

    // And one redirected from a background thread
    let handle = router.handle();
    thread::spawn(move || {
        handle.push(SystemAlert::new(AlertKind::VpnStuck));
    })
    .join()
    .expect("background push");

    let redirected = router.pump();
    info!("pumped {redirected} redirected alert(s)");

    Ok(())
}

fn build_models(router: &AlertRouter) -> Vec<CountryRowModel> {
    let entries = [
        ("de", "Germany", ServerFeature::Standard, false),
        ("nl", "Netherlands", ServerFeature::P2p, false),
        ("fr", "France", ServerFeature::Streaming, true),
    ];

    entries
        .iter()
        .map(|&(code, name, feature, maintenance)| {
            let mut model = CountryRowModel::new(code, name)
                .with_feature(feature)
                .with_maintenance(maintenance);

            let connect = router.handle();
            let country = name.to_string();
            model.on_connect(move || {
                debug!("connect requested: {country}");
                connect.push(SystemAlert::new(AlertKind::ExistingConnection));
            });

            let country = name.to_string();
            model.on_expand(move || {
                debug!("toggle expansion: {country}");
            });

            model
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_with_defaults() {
        run(None).unwrap();
    }

    #[test]
    fn test_build_models() {
        let bridge = Arc::new(CoreBridge::new());
        let services = AlertServices {
            presenter: bridge.clone(),
            windows: bridge.clone(),
            session: bridge.clone(),
            notifications: bridge.clone(),
            updater: bridge.clone(),
            links: bridge.clone(),
        };
        let router = AlertRouter::new(services, AlertConfig::default());

        let models = build_models(&router);
        assert_eq!(models.len(), 3);
        assert!(models[2].under_maintenance);
    }
}
