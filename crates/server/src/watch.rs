use std::{collections::HashSet, sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use reqwest::header::CACHE_CONTROL;
use serde::Deserialize;
use shutl::prelude::*;
use shutl::{
    eta,
    tracker::{self, nearest_shuttle},
};
use tokio::{sync::mpsc, time};
use tracing::{debug, error, info, warn};

const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Wire shape of one fix as served by `GET /gps`.
#[derive(Debug, Clone, Deserialize)]
struct WireFix {
    device_id: String,
    lat: f64,
    lng: f64,
    #[serde(default)]
    speed: f64,
    updated: DateTime<Utc>,
}

impl WireFix {
    fn into_fix(self) -> Fix {
        Fix {
            device_id: self.device_id.into(),
            coordinate: Coordinate {
                latitude: self.lat,
                longitude: self.lng,
            },
            speed_kmh: self.speed,
            updated: self.updated,
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:3000".to_string());
    let url = format!("{base_url}/gps");
    info!("Watching {url}");

    let client = reqwest::Client::new();
    // Completions funnel through one channel so ticks never block on a slow
    // fetch, and a later-started poll finishing first is handled by the gate.
    let (tx, mut rx) = mpsc::channel::<(u64, Vec<Fix>)>(8);
    let mut gate = PollGate::new();
    let mut reconciler = Reconciler::new();
    let mut offline: HashSet<Arc<str>> = HashSet::new();
    let mut interval = time::interval(POLL_INTERVAL);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let seq = gate.begin();
                let client = client.clone();
                let url = url.clone();
                let tx = tx.clone();
                tokio::spawn(async move {
                    match fetch_snapshot(&client, &url).await {
                        // The receiver is gone after teardown; a late fetch
                        // simply has nowhere to land.
                        Ok(snapshot) => {
                            let _ = tx.send((seq, snapshot)).await;
                        }
                        Err(err) => error!("Poll failed: {err}"),
                    }
                });
            }
            Some((seq, snapshot)) = rx.recv() => {
                if !gate.admit(seq) {
                    debug!("Discarding out-of-order poll {seq}");
                    continue;
                }
                apply(&mut reconciler, &snapshot, &mut offline);
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down");
                break;
            }
        }
    }
}

async fn fetch_snapshot(client: &reqwest::Client, url: &str) -> Result<Vec<Fix>, reqwest::Error> {
    let wire: Vec<WireFix> = client
        .get(url)
        .header(CACHE_CONTROL, "no-cache")
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(wire.into_iter().map(WireFix::into_fix).collect())
}

fn apply(reconciler: &mut Reconciler, snapshot: &[Fix], offline: &mut HashSet<Arc<str>>) {
    let summary = reconciler.reconcile(snapshot);
    debug!(
        "Markers: {} created, {} moved, {} recolored, {} removed",
        summary.created, summary.moved, summary.recolored, summary.removed
    );

    let now = Utc::now();
    for fix in snapshot {
        if tracker::is_offline(fix.updated, now) {
            if offline.insert(fix.device_id.clone()) {
                warn!("{} is offline", fix.device_id);
            }
        } else {
            offline.remove(fix.device_id.as_ref());
        }
    }
    offline.retain(|device_id| snapshot.iter().any(|fix| fix.device_id == *device_id));

    render(reconciler, snapshot, now);
}

fn render(reconciler: &Reconciler, snapshot: &[Fix], now: DateTime<Utc>) {
    let mut markers: Vec<_> = reconciler.markers().collect();
    markers.sort_by(|a, b| a.device_id.cmp(&b.device_id));

    println!("-- {} shuttle(s) --", markers.len());
    for marker in markers {
        let Some(fix) = snapshot.iter().find(|fix| fix.device_id == marker.device_id) else {
            continue;
        };
        let status = if tracker::is_offline(fix.updated, now) {
            "Offline"
        } else {
            "Live"
        };
        let motion = if tracker::is_moving(fix.speed_kmh) {
            "Moving"
        } else {
            "Stationary"
        };
        println!(
            "  [{}] {} at {}: {:.1} km/h ({status}, {motion})",
            marker.label, marker.device_id, marker.position, fix.speed_kmh
        );
    }
    for stop in STOPS {
        match nearest_shuttle(&stop, snapshot) {
            Some(nearest) => println!(
                "  {}: {} is {} away, {}",
                stop.name,
                nearest.fix.device_id,
                nearest.distance,
                eta::estimate(nearest.distance, nearest.fix.speed_kmh)
            ),
            None => println!("  {}: no shuttles active", stop.name),
        }
    }
}
