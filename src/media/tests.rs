use futures::executor::block_on;
use parking_lot::Mutex;
use std::collections::HashSet;

use super::*;

/// Loads whatever is in `available` and remembers every path it was asked for.
struct StubProbe {
    available: HashSet<String>,
    attempts: Mutex<Vec<String>>,
}

impl StubProbe {
    fn new(available: &[&str]) -> Self {
        StubProbe {
            available: available.iter().map(|s| s.to_string()).collect(),
            attempts: Mutex::new(Vec::new()),
        }
    }

    fn get_attempts(&self) -> Vec<String> {
        self.attempts.lock().clone()
    }
}

impl AssetProbe for StubProbe {
    fn probe<'a>(&'a self, candidate: &'a str) -> BoxFuture<'a, bool> {
        self.attempts.lock().push(candidate.to_owned());
        let found = self.available.contains(candidate);
        async move { found }.boxed()
    }
}

/// Resets the slot the moment the first candidate is probed, as if the
/// player had moved on to the next question while the lookup was in flight.
struct AdvancingProbe {
    slot: MediaSlot,
    inner: StubProbe,
}

impl AssetProbe for AdvancingProbe {
    fn probe<'a>(&'a self, candidate: &'a str) -> BoxFuture<'a, bool> {
        self.slot.reset();
        self.inner.probe(candidate)
    }
}

fn resolver(mode: ImageMode) -> ImageResolver {
    ImageResolver::new(&Settings::default(), mode)
}

#[test]
fn per_set_candidates_come_before_legacy() {
    let candidates = resolver(ImageMode::Convention).candidates("bio", 7);
    let per_set = candidates
        .iter()
        .position(|c| c == "images/explanations/bio/explain_007.png")
        .unwrap();
    let legacy = candidates
        .iter()
        .position(|c| c == "images/explanations/explain_007.png")
        .unwrap();
    assert!(per_set < legacy);
    assert_eq!(per_set, 0);
}

#[test]
fn legacy_template_is_last() {
    let candidates = resolver(ImageMode::Convention).candidates("bio", 7);
    assert_eq!(
        candidates[candidates.len() - 3..].to_vec(),
        vec![
            "images/explanations/explain_007.png",
            "images/explanations/explain_007.jpg",
            "images/explanations/explain_007.webp",
        ]
    );
}

#[test]
fn legacy_mode_only_uses_flat_layout() {
    let candidates = resolver(ImageMode::Legacy).candidates("bio", 12);
    assert_eq!(
        candidates,
        vec![
            "images/explanations/explain_012.png",
            "images/explanations/explain_012.jpg",
            "images/explanations/explain_012.webp",
        ]
    );
}

#[test]
fn ids_are_padded_to_three_digits() {
    let candidates = resolver(ImageMode::Legacy).candidates("bio", 1234);
    assert_eq!(candidates[0], "images/explanations/explain_1234.png");
    let candidates = resolver(ImageMode::Legacy).candidates("bio", 5);
    assert_eq!(candidates[0], "images/explanations/explain_005.png");
}

#[test]
fn candidates_are_unique() {
    let mut settings = Settings::default();
    settings.image_templates = vec![
        "images/explanations/{set}/explain_{id}".to_owned(),
        "images/explanations/{set}/explain_{id}".to_owned(),
        "images/explanations/explain_{id}".to_owned(),
    ];
    settings.image_extensions = vec!["png".to_owned(), "png".to_owned()];
    let candidates = ImageResolver::new(&settings, ImageMode::Convention).candidates("bio", 7);
    assert_eq!(
        candidates,
        vec![
            "images/explanations/bio/explain_007.png",
            "images/explanations/explain_007.png",
        ]
    );
}

#[test]
fn empty_set_id_uses_default() {
    let candidates = resolver(ImageMode::Convention).candidates("", 7);
    assert_eq!(candidates[0], "images/explanations/default/explain_007.png");
}

#[test]
fn resolves_first_loadable_candidate() {
    let probe = StubProbe::new(&[
        "images/bio/explain_007.jpg",
        "images/explanations/explain_007.png",
    ]);
    let image = block_on(resolver(ImageMode::Convention).resolve(&probe, "bio", 7));
    assert_eq!(image, Some("images/bio/explain_007.jpg".to_owned()));
}

#[test]
fn stops_probing_after_a_hit() {
    let probe = StubProbe::new(&["images/explanations/bio/explain_007.jpg"]);
    block_on(resolver(ImageMode::Convention).resolve(&probe, "bio", 7));
    assert_eq!(
        probe.get_attempts(),
        vec![
            "images/explanations/bio/explain_007.png",
            "images/explanations/bio/explain_007.jpg",
        ]
    );
}

#[test]
fn nothing_loadable_means_no_image() {
    let probe = StubProbe::new(&[]);
    let resolver = resolver(ImageMode::Convention);
    let image = block_on(resolver.resolve(&probe, "bio", 7));
    assert_eq!(image, None);
    assert_eq!(probe.get_attempts(), resolver.candidates("bio", 7));
}

#[test]
fn slot_shows_current_lookup() {
    let slot = MediaSlot::new();
    let ticket = slot.reset();
    let probe = StubProbe::new(&["images/explanations/explain_007.png"]);
    let request = MediaRequest {
        set_id: "bio".to_owned(),
        question_id: 7,
        ticket,
        slot: slot.clone(),
        resolver: resolver(ImageMode::Legacy),
    };
    let image = block_on(request.run(&probe));
    assert_eq!(image, Some("images/explanations/explain_007.png".to_owned()));
    assert_eq!(slot.get_image(), image);
}

#[test]
fn stale_lookup_does_not_touch_slot() {
    let slot = MediaSlot::new();
    let ticket = slot.reset();
    let probe = AdvancingProbe {
        slot: slot.clone(),
        inner: StubProbe::new(&["images/explanations/bio/explain_007.png"]),
    };
    let request = MediaRequest {
        set_id: "bio".to_owned(),
        question_id: 7,
        ticket,
        slot: slot.clone(),
        resolver: resolver(ImageMode::Convention),
    };
    let image = block_on(request.run(&probe));
    assert_eq!(image, None);
    assert_eq!(slot.get_image(), None);
    assert!(!slot.is_current(ticket));
}

#[test]
fn stale_lookup_stops_probing() {
    let slot = MediaSlot::new();
    let ticket = slot.reset();
    let probe = AdvancingProbe {
        slot: slot.clone(),
        inner: StubProbe::new(&[]),
    };
    let request = MediaRequest {
        set_id: "bio".to_owned(),
        question_id: 7,
        ticket,
        slot,
        resolver: resolver(ImageMode::Convention),
    };
    block_on(request.run(&probe));
    assert_eq!(probe.inner.get_attempts().len(), 1);
}

#[test]
fn fulfill_rejects_old_ticket() {
    let slot = MediaSlot::new();
    let old = slot.reset();
    let new = slot.reset();
    assert!(!slot.fulfill(old, "old.png".to_owned()));
    assert_eq!(slot.get_image(), None);
    assert!(slot.fulfill(new, "new.png".to_owned()));
    assert_eq!(slot.get_image(), Some("new.png".to_owned()));
    assert_eq!(slot.get_ticket(), new);
}

#[test]
fn reset_clears_image() {
    let slot = MediaSlot::new();
    let ticket = slot.reset();
    slot.fulfill(ticket, "a.png".to_owned());
    slot.reset();
    assert_eq!(slot.get_image(), None);
}

#[test]
fn fs_probe_only_accepts_files() {
    let probe = FsProbe::new(PathBuf::from("."));
    assert!(block_on(probe.probe("Cargo.toml")));
    assert!(!block_on(probe.probe("src")));
    assert!(!block_on(probe.probe("missing.png")));
}
