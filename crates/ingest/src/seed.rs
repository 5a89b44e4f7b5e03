use crate::error::Result;
use crate::links::Links;
use crate::normalize::MODEL_FILE;
use petrilink_store::{Kind, RecordMeta, Store};

/// A sample model ingested at startup so a fresh instance has content.
#[derive(Debug, Clone, Copy)]
pub struct SeedModel {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
    /// Canonical model JSON, exactly as the editor would save it.
    pub source: &'static str,
}

pub const SEED_MODELS: &[SeedModel] = &[
    SeedModel {
        title: "DiningPhilosophers",
        description: "Classic deadlock demonstration with five philosophers",
        keywords: "petri-net,deadlock,classic",
        source: r#"{
    "modelType": "petriNet",
    "version": "v0",
    "places": {
        "chopstick0": { "offset": 0, "x": 240, "y": 160, "initial": 1 },
        "chopstick1": { "offset": 1, "x": 400, "y": 160, "initial": 1 },
        "eating0": { "offset": 2, "x": 240, "y": 400 },
        "eating1": { "offset": 3, "x": 400, "y": 400 }
    },
    "transitions": {
        "pickup0": { "x": 240, "y": 280 },
        "pickup1": { "x": 400, "y": 280 },
        "putdown0": { "x": 160, "y": 480 },
        "putdown1": { "x": 480, "y": 480 }
    },
    "arcs": [
        { "source": "chopstick0", "target": "pickup0", "weight": 1 },
        { "source": "chopstick1", "target": "pickup0", "weight": 1 },
        { "source": "chopstick1", "target": "pickup1", "weight": 1 },
        { "source": "chopstick0", "target": "pickup1", "weight": 1 },
        { "source": "pickup0", "target": "eating0", "weight": 1 },
        { "source": "pickup1", "target": "eating1", "weight": 1 },
        { "source": "eating0", "target": "putdown0", "weight": 1 },
        { "source": "eating1", "target": "putdown1", "weight": 1 }
    ]
}"#,
    },
    SeedModel {
        title: "InhibitorTest",
        description: "Inhibitor arcs gating a counter place",
        keywords: "petri-net,inhibitor",
        source: r#"{
    "modelType": "petriNet",
    "version": "v0",
    "places": {
        "foo": { "offset": 0, "x": 480, "y": 320, "initial": 1, "capacity": 3 }
    },
    "transitions": {
        "bar": { "x": 400, "y": 400 },
        "baz": { "x": 560, "y": 400 },
        "add": { "x": 400, "y": 240 },
        "sub": { "x": 560, "y": 240 }
    },
    "arcs": [
        { "source": "add", "target": "foo", "weight": 1 },
        { "source": "foo", "target": "sub", "weight": 1 },
        { "source": "bar", "target": "foo", "weight": 3, "inhibit": true },
        { "source": "foo", "target": "baz", "weight": 1, "inhibit": true }
    ]
}"#,
    },
    SeedModel {
        title: "TicTacToe",
        description: "Turn-taking game board as a petri net",
        keywords: "petri-net,game",
        source: r#"{
    "modelType": "petriNet",
    "version": "v0",
    "places": {
        "turnX": { "offset": 0, "x": 160, "y": 160, "initial": 1 },
        "turnO": { "offset": 1, "x": 480, "y": 160 },
        "square00": { "offset": 2, "x": 160, "y": 400, "initial": 1, "capacity": 1 },
        "square01": { "offset": 3, "x": 320, "y": 400, "initial": 1, "capacity": 1 },
        "square02": { "offset": 4, "x": 480, "y": 400, "initial": 1, "capacity": 1 }
    },
    "transitions": {
        "x00": { "x": 160, "y": 280 },
        "o01": { "x": 320, "y": 280 },
        "x02": { "x": 480, "y": 280 }
    },
    "arcs": [
        { "source": "turnX", "target": "x00", "weight": 1 },
        { "source": "x00", "target": "turnO", "weight": 1 },
        { "source": "square00", "target": "x00", "weight": 1 },
        { "source": "turnO", "target": "o01", "weight": 1 },
        { "source": "o01", "target": "turnX", "weight": 1 },
        { "source": "square01", "target": "o01", "weight": 1 },
        { "source": "turnX", "target": "x02", "weight": 1 },
        { "source": "x02", "target": "turnO", "weight": 1 },
        { "source": "square02", "target": "x02", "weight": 1 }
    ]
}"#,
    },
];

/// Load the bundled sample models through the ordinary dedup path.
///
/// Runs once during process startup; re-running against an existing
/// database is a no-op thanks to CID dedup. Returns how many models were
/// newly inserted.
pub fn load_seed_models(store: &Store, base_url: &str) -> Result<usize> {
    let referrer = format!("{}/p/", base_url.trim_end_matches('/'));
    let mut inserted = 0;
    for seed in SEED_MODELS {
        let meta = RecordMeta {
            title: seed.title.into(),
            description: seed.description.into(),
            keywords: seed.keywords.into(),
            referrer: referrer.clone(),
        };
        let (record, created) =
            store.get_or_create(Kind::Model, seed.source.as_bytes(), MODEL_FILE, &meta)?;
        if created {
            inserted += 1;
        }
        let links = Links::build(base_url, &record.cid);
        log::info!("- model[{}] {}", record.id, record.title);
        log::info!("  {}", links.page);
        log::info!("  {}", links.json_source);
        log::info!("  {}", links.svg_image);
    }
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn seed_sources_are_valid_model_json() {
        for seed in SEED_MODELS {
            let parsed: serde_json::Value =
                serde_json::from_str(seed.source).expect("seed parses");
            assert_eq!(parsed["modelType"], "petriNet", "{}", seed.title);
            assert!(parsed["places"].is_object(), "{}", seed.title);
            assert!(parsed["transitions"].is_object(), "{}", seed.title);
        }
    }

    #[test]
    fn loading_twice_inserts_once() {
        let dir = TempDir::new().expect("tempdir");
        let store = Store::open(dir.path().join("seed.db")).expect("open");

        let first = load_seed_models(&store, "http://localhost:8083").expect("first load");
        assert_eq!(first, SEED_MODELS.len());

        let second = load_seed_models(&store, "http://localhost:8083").expect("second load");
        assert_eq!(second, 0);
    }
}
