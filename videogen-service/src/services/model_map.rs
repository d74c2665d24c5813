//! Client-facing model ids mapped to Replicate model references.

use crate::models::DEFAULT_MODEL_ID;

#[derive(Debug)]
pub struct ModelMap {
    entries: &'static [(&'static str, &'static str)],
    fallback: &'static str,
}

pub static MODEL_MAP: ModelMap = ModelMap::new(
    &[
        ("hailuo", "minimax/video-01"),
        ("cogvideox", "lucataco/cogvideox-5b"),
        ("hunyuan", "tencent/hunyuan-video"),
        ("luma", "fofr/dream-machine"),
        ("runway", "stability-ai/stable-video-diffusion-img2vid-xt"),
    ],
    "minimax/video-01",
);

/// Models that animate a still image. Ids outside this table are rejected
/// rather than falling back.
pub static IMAGE_MODEL_MAP: ModelMap = ModelMap::new(
    &[("runway", "stability-ai/stable-video-diffusion-img2vid-xt")],
    "stability-ai/stable-video-diffusion-img2vid-xt",
);

impl ModelMap {
    /// `fallback` is the provider model used for ids not in `entries`.
    pub const fn new(
        entries: &'static [(&'static str, &'static str)],
        fallback: &'static str,
    ) -> Self {
        Self { entries, fallback }
    }

    /// Exact match only: `(canonical id, provider model)`.
    pub fn lookup(&self, model_id: &str) -> Option<(&'static str, &'static str)> {
        self.entries.iter().find(|(id, _)| *id == model_id).copied()
    }

    pub fn get(&self, model_id: &str) -> Option<&'static str> {
        self.lookup(model_id).map(|(_, provider_model)| provider_model)
    }

    pub fn resolve(&self, model_id: &str) -> &'static str {
        self.get(model_id).unwrap_or(self.fallback)
    }

    /// The table's own spelling of `model_id`, or the default id when it
    /// falls back. Bounded by the table, so safe as a metric label.
    pub fn canonical_id(&self, model_id: &str) -> &'static str {
        self.lookup(model_id).map(|(id, _)| id).unwrap_or(DEFAULT_MODEL_ID)
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(id, _)| *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_every_documented_model() {
        assert_eq!(MODEL_MAP.resolve("hailuo"), "minimax/video-01");
        assert_eq!(MODEL_MAP.resolve("cogvideox"), "lucataco/cogvideox-5b");
        assert_eq!(MODEL_MAP.resolve("hunyuan"), "tencent/hunyuan-video");
        assert_eq!(MODEL_MAP.resolve("luma"), "fofr/dream-machine");
        assert_eq!(
            MODEL_MAP.resolve("runway"),
            "stability-ai/stable-video-diffusion-img2vid-xt"
        );
        assert_eq!(MODEL_MAP.ids().count(), 5);
    }

    #[test]
    fn unknown_ids_fall_back_to_hailuo() {
        for id in ["demo", "", "HAILUO", "sora", "hailuo "] {
            assert_eq!(MODEL_MAP.resolve(id), "minimax/video-01", "id {:?}", id);
        }
        assert_eq!(MODEL_MAP.get("demo"), None);
    }

    #[test]
    fn canonical_id_is_bounded_by_the_table() {
        assert_eq!(MODEL_MAP.canonical_id("luma"), "luma");
        for id in ["junk-1", "junk-2", "", "LUMA"] {
            assert_eq!(MODEL_MAP.canonical_id(id), "hailuo", "id {:?}", id);
        }
    }

    #[test]
    fn image_models_are_a_separate_table() {
        assert_eq!(
            IMAGE_MODEL_MAP.get("runway"),
            Some("stability-ai/stable-video-diffusion-img2vid-xt")
        );
        assert_eq!(IMAGE_MODEL_MAP.get("hailuo"), None);
        assert_eq!(IMAGE_MODEL_MAP.ids().count(), 1);
    }

    #[test]
    fn fixtures_can_be_swapped_in() {
        static FIXTURE: ModelMap = ModelMap::new(&[("fast", "acme/fast:v2")], "acme/default");
        assert_eq!(FIXTURE.resolve("fast"), "acme/fast:v2");
        assert_eq!(FIXTURE.resolve("hailuo"), "acme/default");
    }
}
